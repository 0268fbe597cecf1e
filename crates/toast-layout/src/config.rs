//! Layout configuration types and validation.
//!
//! Assignments arrive as loosely-typed values (a JSON array for margins,
//! plain strings for the enums). Parsing is pure and returns a typed
//! error; callers decide whether to keep their previous value.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Rejected configuration assignment.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("value is not a sequence")]
    NotASequence,

    #[error("wrong count of values: expected {expected}, got {got}")]
    WrongCount { expected: usize, got: usize },

    #[error("value at index {index} is not a non-negative integer: {value}")]
    NotAnInteger { index: usize, value: String },

    #[error("unknown {kind} value: {value:?}")]
    UnknownVariant { kind: &'static str, value: String },
}

/// Pixel margins kept clear at each screen edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Margins {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

impl Margins {
    pub const fn new(top: u32, right: u32, bottom: u32, left: u32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Parse margins from a loosely-typed value: a sequence of exactly
    /// four non-negative integers, ordered top/right/bottom/left.
    pub fn parse(value: &Value) -> Result<Self, ConfigError> {
        let items = value.as_array().ok_or(ConfigError::NotASequence)?;
        if items.len() != 4 {
            return Err(ConfigError::WrongCount {
                expected: 4,
                got: items.len(),
            });
        }

        let mut parsed = [0u32; 4];
        for (index, item) in items.iter().enumerate() {
            let pixels = item
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| ConfigError::NotAnInteger {
                    index,
                    value: item.to_string(),
                })?;
            parsed[index] = pixels;
        }

        Ok(Self::new(parsed[0], parsed[1], parsed[2], parsed[3]))
    }
}

/// Screen corner notification stacking originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Anchor {
    #[default]
    NorthWest,
    SouthWest,
    SouthEast,
    NorthEast,
}

impl Anchor {
    /// Parse an anchor from its kebab-case name.
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "north-west" => Ok(Self::NorthWest),
            "south-west" => Ok(Self::SouthWest),
            "south-east" => Ok(Self::SouthEast),
            "north-east" => Ok(Self::NorthEast),
            other => Err(ConfigError::UnknownVariant {
                kind: "anchor",
                value: other.to_string(),
            }),
        }
    }
}

/// Axis along which successive notifications are offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    #[default]
    Vertical,
    Horizontal,
}

impl Direction {
    pub fn parse(value: &str) -> Result<Self, ConfigError> {
        match value {
            "vertical" => Ok(Self::Vertical),
            "horizontal" => Ok(Self::Horizontal),
            other => Err(ConfigError::UnknownVariant {
                kind: "direction",
                value: other.to_string(),
            }),
        }
    }
}

/// Complete placement configuration for the layout engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub margins: Margins,
    pub anchor: Anchor,
    pub direction: Direction,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_valid_margins() {
        let margins = Margins::parse(&json!([16, 0, 0, 8])).unwrap();
        assert_eq!(margins, Margins::new(16, 0, 0, 8));
    }

    #[test]
    fn rejects_non_sequence_margins() {
        assert_eq!(
            Margins::parse(&json!("16,0,0,8")),
            Err(ConfigError::NotASequence)
        );
        assert_eq!(Margins::parse(&json!(16)), Err(ConfigError::NotASequence));
    }

    #[test]
    fn rejects_wrong_margin_count() {
        assert_eq!(
            Margins::parse(&json!([1, 2, 3])),
            Err(ConfigError::WrongCount {
                expected: 4,
                got: 3
            })
        );
        assert_eq!(
            Margins::parse(&json!([1, 2, 3, 4, 5])),
            Err(ConfigError::WrongCount {
                expected: 4,
                got: 5
            })
        );
    }

    #[test]
    fn rejects_non_integer_margin_values() {
        let err = Margins::parse(&json!([1, "two", 3, 4])).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnInteger { index: 1, .. }));

        let err = Margins::parse(&json!([1, 2, -3, 4])).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnInteger { index: 2, .. }));

        let err = Margins::parse(&json!([1.5, 2, 3, 4])).unwrap_err();
        assert!(matches!(err, ConfigError::NotAnInteger { index: 0, .. }));
    }

    #[test]
    fn parses_anchor_names() {
        assert_eq!(Anchor::parse("north-west").unwrap(), Anchor::NorthWest);
        assert_eq!(Anchor::parse("south-east").unwrap(), Anchor::SouthEast);
        assert!(matches!(
            Anchor::parse("center"),
            Err(ConfigError::UnknownVariant { kind: "anchor", .. })
        ));
    }

    #[test]
    fn parses_direction_names() {
        assert_eq!(Direction::parse("vertical").unwrap(), Direction::Vertical);
        assert_eq!(
            Direction::parse("horizontal").unwrap(),
            Direction::Horizontal
        );
        assert!(matches!(
            Direction::parse("diagonal"),
            Err(ConfigError::UnknownVariant {
                kind: "direction",
                ..
            })
        ));
    }

    #[test]
    fn defaults_are_north_west_vertical_zero_margins() {
        let config = LayoutConfig::default();
        assert_eq!(config.margins, Margins::default());
        assert_eq!(config.anchor, Anchor::NorthWest);
        assert_eq!(config.direction, Direction::Vertical);
    }
}
