//! Commute direction.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Error returned when parsing an unknown direction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction {input:?}: expected outbound or return")]
pub struct InvalidDirection {
    input: String,
}

/// Which leg of the commute a link is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Home to work (行き).
    #[serde(alias = "going")]
    Outbound,
    /// Work to home (帰り).
    #[serde(alias = "returning")]
    Return,
}

impl Direction {
    /// Both directions, in display order.
    pub const ALL: [Direction; 2] = [Direction::Outbound, Direction::Return];

    /// Section heading shown above this direction's links.
    pub fn title(self) -> &'static str {
        match self {
            Direction::Outbound => "行き",
            Direction::Return => "帰り",
        }
    }

    /// Machine-readable name.
    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Outbound => "outbound",
            Direction::Return => "return",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = InvalidDirection;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "outbound" | "going" => Ok(Direction::Outbound),
            "return" | "returning" => Ok(Direction::Return),
            _ => Err(InvalidDirection {
                input: s.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_aliases() {
        assert_eq!("outbound".parse(), Ok(Direction::Outbound));
        assert_eq!("going".parse(), Ok(Direction::Outbound));
        assert_eq!("Return".parse(), Ok(Direction::Return));
        assert_eq!("returning".parse(), Ok(Direction::Return));
    }

    #[test]
    fn parse_rejects_unknown() {
        let err = "sideways".parse::<Direction>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid direction \"sideways\": expected outbound or return"
        );
    }

    #[test]
    fn titles() {
        assert_eq!(Direction::Outbound.title(), "行き");
        assert_eq!(Direction::Return.title(), "帰り");
    }

    #[test]
    fn serde_names() {
        assert_eq!(
            serde_json::to_string(&Direction::Outbound).unwrap(),
            "\"outbound\""
        );
        let d: Direction = serde_json::from_str("\"returning\"").unwrap();
        assert_eq!(d, Direction::Return);
    }

    #[test]
    fn all_in_display_order() {
        assert_eq!(Direction::ALL, [Direction::Outbound, Direction::Return]);
    }
}
