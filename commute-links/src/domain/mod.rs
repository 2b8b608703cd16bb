//! Domain types for the commute link page.
//!
//! Identifiers are validated at construction time, so the link generator
//! can embed them in URLs without further checks.

mod direction;
mod link;
mod revision;
mod stop;

pub use direction::{Direction, InvalidDirection};
pub use link::{LinkBoard, LinkEntry, TransitMode};
pub use revision::{InvalidRevision, RevisionStatus};
pub use stop::{DEPATO_MAE, InvalidStopId, KARINO_MAE, MIYAZAKI_EKI, StopId, StopRegistry};
