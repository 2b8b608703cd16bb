//! Refresh controller.
//!
//! Holds the current [`LinkBoard`] and the displayed time, and decides when
//! they are regenerated: once on mount, then every time the page becomes
//! visible again. A refresh always rebuilds the whole board from one clock
//! reading.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use chrono::NaiveDateTime;

use crate::clock::Clock;
use crate::domain::{Direction, LinkBoard, LinkEntry};
use crate::links::LinkGenerator;

/// Error returned when parsing an unknown visibility state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid visibility {input:?}: expected visible or hidden")]
pub struct InvalidVisibility {
    input: String,
}

/// Page visibility as reported by the browser.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

impl FromStr for Visibility {
    type Err = InvalidVisibility;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "visible" => Ok(Visibility::Visible),
            "hidden" => Ok(Visibility::Hidden),
            other => Err(InvalidVisibility {
                input: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Visible => f.write_str("visible"),
            Visibility::Hidden => f.write_str("hidden"),
        }
    }
}

/// What a visibility change did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Links and displayed time were regenerated.
    Refreshed,
    /// The page is hidden; nothing changed.
    Skipped,
}

/// Drives link regeneration for one page.
pub struct RefreshController {
    generator: Arc<LinkGenerator>,
    clock: Arc<dyn Clock>,
    board: LinkBoard,
    displayed_time: Option<NaiveDateTime>,
    refresh_count: u64,
}

impl RefreshController {
    /// Create an unmounted controller with an empty board.
    pub fn new(generator: Arc<LinkGenerator>, clock: Arc<dyn Clock>) -> Self {
        Self {
            generator,
            clock,
            board: LinkBoard::default(),
            displayed_time: None,
            refresh_count: 0,
        }
    }

    /// Initial load: read the clock once and fill the board.
    pub fn mount(&mut self) {
        let now = self.clock.now();
        self.displayed_time = Some(now);
        self.refresh_at(now);
    }

    /// Handle a `visibilitychange` notification.
    ///
    /// Only a transition to visible regenerates the links and the
    /// displayed time.
    pub fn on_visibility_change(&mut self, visibility: Visibility) -> RefreshOutcome {
        match visibility {
            Visibility::Hidden => {
                tracing::debug!("page hidden, skipping refresh");
                RefreshOutcome::Skipped
            }
            Visibility::Visible => {
                let now = self.clock.now();
                self.refresh_at(now);
                self.displayed_time = Some(now);
                RefreshOutcome::Refreshed
            }
        }
    }

    fn refresh_at(&mut self, now: NaiveDateTime) {
        self.board = self.generator.board(now);
        self.refresh_count += 1;
        tracing::debug!(%now, refresh = self.refresh_count, "regenerated links");
    }

    /// The current links.
    pub fn board(&self) -> &LinkBoard {
        &self.board
    }

    /// Links for one direction.
    pub fn links(&self, direction: Direction) -> &[LinkEntry] {
        self.board.links(direction)
    }

    /// The time shown in the page heading, once mounted or refreshed.
    pub fn displayed_time(&self) -> Option<NaiveDateTime> {
        self.displayed_time
    }

    /// How many times the board has been regenerated.
    pub fn refresh_count(&self) -> u64 {
        self.refresh_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::config::CommuteConfig;
    use crate::domain::TransitMode;
    use chrono::{Duration, NaiveDate};
    use std::sync::Mutex;

    /// Clock that advances one minute on every reading.
    struct SteppingClock {
        next: Mutex<NaiveDateTime>,
    }

    impl SteppingClock {
        fn starting_at(at: NaiveDateTime) -> Self {
            Self {
                next: Mutex::new(at),
            }
        }
    }

    impl Clock for SteppingClock {
        fn now(&self) -> NaiveDateTime {
            let mut next = self.next.lock().unwrap();
            let now = *next;
            *next += Duration::minutes(1);
            now
        }
    }

    fn at(h: u32, m: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 5)
            .unwrap()
            .and_hms_opt(h, m, 0)
            .unwrap()
    }

    fn generator() -> Arc<LinkGenerator> {
        Arc::new(LinkGenerator::from_config(&CommuteConfig::default()).unwrap())
    }

    fn controller(clock: impl Clock + 'static) -> RefreshController {
        RefreshController::new(generator(), Arc::new(clock))
    }

    #[test]
    fn unmounted_is_empty() {
        let c = controller(FixedClock(at(8, 7)));
        assert!(c.board().is_empty());
        assert!(c.displayed_time().is_none());
        assert_eq!(c.refresh_count(), 0);
    }

    #[test]
    fn mount_fills_both_directions() {
        let mut c = controller(FixedClock(at(8, 7)));
        c.mount();

        for direction in Direction::ALL {
            let links = c.links(direction);
            assert_eq!(links.len(), 2);
            assert_eq!(links[0].mode(), TransitMode::Train);
            assert_eq!(links[1].mode(), TransitMode::Bus);
        }
        assert_eq!(c.displayed_time(), Some(at(8, 7)));
        assert_eq!(c.refresh_count(), 1);
    }

    #[test]
    fn hidden_does_not_regenerate() {
        let mut c = controller(SteppingClock::starting_at(at(8, 7)));
        c.mount();
        let before = c.board().clone();

        assert_eq!(
            c.on_visibility_change(Visibility::Hidden),
            RefreshOutcome::Skipped
        );
        assert_eq!(c.board(), &before);
        assert_eq!(c.displayed_time(), Some(at(8, 7)));
        assert_eq!(c.refresh_count(), 1);
    }

    #[test]
    fn visible_regenerates_and_updates_time() {
        let mut c = controller(SteppingClock::starting_at(at(8, 7)));
        c.mount();

        assert_eq!(
            c.on_visibility_change(Visibility::Visible),
            RefreshOutcome::Refreshed
        );
        assert_eq!(c.displayed_time(), Some(at(8, 8)));
        assert_eq!(c.refresh_count(), 2);
        assert!(
            c.links(Direction::Outbound)[1]
                .href()
                .ends_with("&ji=8&fun=8")
        );
    }

    #[test]
    fn refresh_without_mount() {
        let mut c = controller(FixedClock(at(17, 45)));
        c.on_visibility_change(Visibility::Visible);

        assert_eq!(c.links(Direction::Return).len(), 2);
        assert_eq!(c.displayed_time(), Some(at(17, 45)));
    }

    #[test]
    fn frozen_clock_refresh_is_idempotent() {
        let mut c = controller(FixedClock(at(8, 7)));
        c.mount();
        let first = c.board().clone();
        c.on_visibility_change(Visibility::Visible);
        assert_eq!(c.board(), &first);
    }

    #[test]
    fn one_reading_per_refresh() {
        let mut c = controller(SteppingClock::starting_at(at(23, 59)));
        c.mount();

        // Both directions come from the same reading even though the clock
        // moves on every call.
        assert!(c.links(Direction::Outbound)[1].href().ends_with("&ji=23&fun=59"));
        assert!(c.links(Direction::Return)[1].href().ends_with("&ji=23&fun=59"));
    }

    #[test]
    fn parse_visibility() {
        assert_eq!("visible".parse(), Ok(Visibility::Visible));
        assert_eq!("hidden".parse(), Ok(Visibility::Hidden));
        assert!("prerender".parse::<Visibility>().is_err());
        assert_eq!(Visibility::Hidden.to_string(), "hidden");
    }
}
