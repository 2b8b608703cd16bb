//! Askama templates for the web frontend.

use askama::Template;
use chrono::NaiveDateTime;

use crate::domain::{Direction, LinkEntry};
use crate::refresh::RefreshController;

/// Heading time format, matching how a ja-JP browser prints local time
/// (e.g. `2024/3/5 8:07:00`).
pub const DISPLAY_TIME_FORMAT: &str = "%Y/%-m/%-d %-H:%M:%S";

/// Format a clock reading for the page heading.
pub fn format_display_time(time: NaiveDateTime) -> String {
    time.format(DISPLAY_TIME_FORMAT).to_string()
}

// ============================================================================
// Page Templates (extend base.html)
// ============================================================================

/// The link page.
#[derive(Template)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub page: PageView,
}

/// Error page.
#[derive(Template)]
#[template(path = "error.html")]
pub struct ErrorTemplate {
    pub title: String,
    pub message: String,
}

// ============================================================================
// Fragment Templates (refresh responses, no base.html)
// ============================================================================

/// Heading and link sections, swapped in by the page script.
#[derive(Template)]
#[template(path = "links.html")]
pub struct LinksFragmentTemplate {
    pub page: PageView,
}

// ============================================================================
// View Models (for templates)
// ============================================================================

/// Everything the page shows.
#[derive(Debug, Clone)]
pub struct PageView {
    pub time: String,
    pub sections: Vec<SectionView>,
}

impl PageView {
    /// Create from a mounted or refreshed controller.
    pub fn from_controller(controller: &RefreshController) -> Self {
        let time = controller
            .displayed_time()
            .map(format_display_time)
            .unwrap_or_default();

        let sections = Direction::ALL
            .iter()
            .map(|&direction| SectionView {
                direction: direction.as_str(),
                title: direction.title(),
                links: controller
                    .links(direction)
                    .iter()
                    .map(LinkView::from_entry)
                    .collect(),
            })
            .collect();

        Self { time, sections }
    }
}

/// One titled group of links.
#[derive(Debug, Clone)]
pub struct SectionView {
    pub direction: &'static str,
    pub title: &'static str,
    pub links: Vec<LinkView>,
}

/// Anchor view model.
#[derive(Debug, Clone)]
pub struct LinkView {
    pub label: String,
    pub href: String,
    pub mode: &'static str,
}

impl LinkView {
    /// Create from a generated link.
    pub fn from_entry(entry: &LinkEntry) -> Self {
        Self {
            label: entry.label().to_string(),
            href: entry.href().to_string(),
            mode: entry.mode().css_class(),
        }
    }
}
