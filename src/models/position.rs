//! Screen corner the indicator is anchored to.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Corner of the screen where the indicator is drawn.
///
/// Accepts both `bottom_right` and the camelCase `bottomRight` spelling in
/// config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum StartingPosition {
    /// Upper left corner
    #[serde(alias = "topLeft")]
    TopLeft,
    /// Upper right corner
    #[serde(alias = "topRight")]
    TopRight,
    /// Lower right corner
    #[default]
    #[serde(alias = "bottomRight")]
    BottomRight,
    /// Lower left corner
    #[serde(alias = "bottomLeft")]
    BottomLeft,
}

impl StartingPosition {
    /// Next corner, moving clockwise.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            Self::TopLeft => Self::TopRight,
            Self::TopRight => Self::BottomRight,
            Self::BottomRight => Self::BottomLeft,
            Self::BottomLeft => Self::TopLeft,
        }
    }

    /// True for the two upper corners.
    pub const fn is_top(self) -> bool {
        matches!(self, Self::TopLeft | Self::TopRight)
    }

    /// True for the two left corners.
    pub const fn is_left(self) -> bool {
        matches!(self, Self::TopLeft | Self::BottomLeft)
    }
}

impl fmt::Display for StartingPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TopLeft => "top_left",
            Self::TopRight => "top_right",
            Self::BottomRight => "bottom_right",
            Self::BottomLeft => "bottom_left",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct Wrapper {
        position: StartingPosition,
    }

    #[test]
    fn test_next_visits_every_corner() {
        let mut position = StartingPosition::default();
        let mut seen = vec![position];
        for _ in 0..3 {
            position = position.next();
            seen.push(position);
        }
        assert_eq!(position.next(), StartingPosition::default());
        assert_eq!(seen.len(), 4);
        assert!(seen.contains(&StartingPosition::TopLeft));
        assert!(seen.contains(&StartingPosition::BottomLeft));
    }

    #[test]
    fn test_accepts_camel_case_alias() {
        let parsed: Wrapper = toml::from_str(r#"position = "topLeft""#).unwrap();
        assert_eq!(parsed.position, StartingPosition::TopLeft);

        let parsed: Wrapper = toml::from_str(r#"position = "bottom_left""#).unwrap();
        assert_eq!(parsed.position, StartingPosition::BottomLeft);
    }

    #[test]
    fn test_corner_predicates() {
        assert!(StartingPosition::TopLeft.is_top());
        assert!(StartingPosition::TopLeft.is_left());
        assert!(!StartingPosition::BottomRight.is_top());
        assert!(!StartingPosition::BottomRight.is_left());
    }
}
