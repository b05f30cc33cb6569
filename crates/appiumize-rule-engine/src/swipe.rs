//! Cardinal direction of a swipe from its start and end coordinates

use std::fmt;

/// Direction of a swipe gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A coordinate that is neither a number nor a percentage
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("invalid coordinate `{value}`")]
pub struct CoordinateError {
    pub value: String,
}

fn parse_coordinate(raw: &str) -> Result<f64, CoordinateError> {
    let trimmed = raw.trim();
    let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
    number
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| CoordinateError {
            value: raw.to_string(),
        })
}

/// Compute the swipe direction between two points
///
/// Coordinates may carry a trailing `%`. The axis with the larger absolute
/// delta wins; equal deltas resolve to the vertical axis.
pub fn swipe_direction(
    start_x: &str,
    start_y: &str,
    end_x: &str,
    end_y: &str,
) -> Result<Direction, CoordinateError> {
    let dx = parse_coordinate(end_x)? - parse_coordinate(start_x)?;
    let dy = parse_coordinate(end_y)? - parse_coordinate(start_y)?;

    if dx.abs() > dy.abs() {
        Ok(if dx > 0.0 { Direction::Right } else { Direction::Left })
    } else {
        Ok(if dy > 0.0 { Direction::Down } else { Direction::Up })
    }
}
