//! Generated link types.

use serde::Serialize;

use super::Direction;

/// The kind of transport a link looks up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TransitMode {
    Train,
    Bus,
}

impl TransitMode {
    /// CSS class used to style links of this mode.
    pub fn css_class(self) -> &'static str {
        match self {
            TransitMode::Train => "train",
            TransitMode::Bus => "bus",
        }
    }

    /// Display name (電車 / バス).
    pub fn display_name(self) -> &'static str {
        match self {
            TransitMode::Train => "電車",
            TransitMode::Bus => "バス",
        }
    }
}

/// A single generated link.
///
/// Built fresh on every refresh and never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    label: String,
    href: String,
    mode: TransitMode,
}

impl LinkEntry {
    /// Create a link labelled from its mode and direction, e.g. "電車（行き）".
    pub fn new(mode: TransitMode, direction: Direction, href: String) -> Self {
        Self {
            label: format!("{}（{}）", mode.display_name(), direction.title()),
            href,
            mode,
        }
    }

    /// Text shown for the anchor.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The generated URL.
    pub fn href(&self) -> &str {
        &self.href
    }

    /// Transport mode.
    pub fn mode(&self) -> TransitMode {
        self.mode
    }
}

/// The result of one refresh: links for both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LinkBoard {
    pub outbound: Vec<LinkEntry>,
    #[serde(rename = "return")]
    pub return_: Vec<LinkEntry>,
}

impl LinkBoard {
    /// Links for one direction.
    pub fn links(&self, direction: Direction) -> &[LinkEntry] {
        match direction {
            Direction::Outbound => &self.outbound,
            Direction::Return => &self.return_,
        }
    }

    /// Whether the board has never been filled.
    pub fn is_empty(&self) -> bool {
        self.outbound.is_empty() && self.return_.is_empty()
    }
}
