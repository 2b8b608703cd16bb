//! Bus timetable revision status.

use std::fmt;
use std::str::FromStr;

/// Error returned when parsing an unknown revision status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid revision status {input:?}: expected before, after, O or N")]
pub struct InvalidRevision {
    input: String,
}

/// Whether the bus query targets the timetable before or after a revision.
///
/// The bus provider takes this as a single character in the `kai` parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RevisionStatus {
    /// Timetable in force before the revision date (`O`).
    #[default]
    Before,
    /// Timetable in force after the revision date (`N`).
    After,
}

impl RevisionStatus {
    /// The single-character code the bus provider expects.
    pub fn code(self) -> char {
        match self {
            RevisionStatus::Before => 'O',
            RevisionStatus::After => 'N',
        }
    }
}

impl fmt::Display for RevisionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for RevisionStatus {
    type Err = InvalidRevision;

    /// Accepts `before`/`after` (any case) or the raw codes `O`/`N`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "O" => Ok(RevisionStatus::Before),
            "N" => Ok(RevisionStatus::After),
            other if other.eq_ignore_ascii_case("before") => Ok(RevisionStatus::Before),
            other if other.eq_ignore_ascii_case("after") => Ok(RevisionStatus::After),
            other => Err(InvalidRevision {
                input: other.to_string(),
            }),
        }
    }
}
