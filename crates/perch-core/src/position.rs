//! Popover placement vocabulary.
//!
//! A [`Position`] is a side of the anchor (the [`Orientation`]) plus an
//! [`Alignment`] along that side, written `side-alignment`:
//!
//! ```rust
//! use perch_core::{Alignment, Orientation, Position};
//!
//! let p: Position = "above-left".parse().unwrap();
//! assert_eq!(p.split(), (Orientation::Above, Alignment::Left));
//! assert_eq!(p.to_string(), "above-left");
//! ```

use std::fmt;
use std::str::FromStr;

use crate::ConfigError;

const DELIMITER: char = '-';

/// The side of the anchor the popover body sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Orientation {
    Left,
    Right,
    Above,
    Below,
}

impl Orientation {
    pub fn is_horizontal(self) -> bool {
        matches!(self, Orientation::Left | Orientation::Right)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Left => "left",
            Orientation::Right => "right",
            Orientation::Above => "above",
            Orientation::Below => "below",
        }
    }
}

/// Where along the chosen side the popover lines up with the anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Above,
    Below,
}

impl Alignment {
    pub fn as_str(self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
            Alignment::Above => "above",
            Alignment::Below => "below",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "kebab-case")
)]
pub enum Position {
    AboveLeft,
    AboveCenter,
    AboveRight,
    #[default]
    BelowCenter,
    BelowLeft,
    BelowRight,
    LeftAbove,
    LeftCenter,
    LeftBelow,
    RightAbove,
    RightCenter,
    RightBelow,
}

impl Position {
    pub const ALL: [Position; 12] = [
        Position::AboveLeft,
        Position::AboveCenter,
        Position::AboveRight,
        Position::BelowLeft,
        Position::BelowCenter,
        Position::BelowRight,
        Position::LeftAbove,
        Position::LeftCenter,
        Position::LeftBelow,
        Position::RightAbove,
        Position::RightCenter,
        Position::RightBelow,
    ];

    pub fn split(self) -> (Orientation, Alignment) {
        use Alignment as A;
        use Orientation as O;
        match self {
            Position::AboveLeft => (O::Above, A::Left),
            Position::AboveCenter => (O::Above, A::Center),
            Position::AboveRight => (O::Above, A::Right),
            Position::BelowLeft => (O::Below, A::Left),
            Position::BelowCenter => (O::Below, A::Center),
            Position::BelowRight => (O::Below, A::Right),
            Position::LeftAbove => (O::Left, A::Above),
            Position::LeftCenter => (O::Left, A::Center),
            Position::LeftBelow => (O::Left, A::Below),
            Position::RightAbove => (O::Right, A::Above),
            Position::RightCenter => (O::Right, A::Center),
            Position::RightBelow => (O::Right, A::Below),
        }
    }

    /// Inverse of [`Position::split`]. `None` for combinations that cross axes,
    /// such as `above-above` or `left-right`.
    pub fn join(orientation: Orientation, alignment: Alignment) -> Option<Position> {
        Position::ALL
            .into_iter()
            .find(|p| p.split() == (orientation, alignment))
    }

    pub fn orientation(self) -> Orientation {
        self.split().0
    }

    pub fn alignment(self) -> Alignment {
        self.split().1
    }
}

/// Splits `side-alignment` into its two tokens.
pub fn split_position(s: &str) -> Result<(Orientation, Alignment), ConfigError> {
    let invalid = || ConfigError::InvalidPosition(s.to_string());

    let mut tokens = s.split(DELIMITER);
    let (Some(side), Some(align), None) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(invalid());
    };

    let orientation = match side {
        "left" => Orientation::Left,
        "right" => Orientation::Right,
        "above" => Orientation::Above,
        "below" => Orientation::Below,
        _ => return Err(invalid()),
    };
    let alignment = match align {
        "left" => Alignment::Left,
        "center" => Alignment::Center,
        "right" => Alignment::Right,
        "above" => Alignment::Above,
        "below" => Alignment::Below,
        _ => return Err(invalid()),
    };

    Position::join(orientation, alignment)
        .map(Position::split)
        .ok_or_else(invalid)
}

impl FromStr for Position {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (orientation, alignment) = split_position(s)?;
        Position::join(orientation, alignment).ok_or_else(|| ConfigError::InvalidPosition(s.into()))
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (o, a) = self.split();
        write!(f, "{}{DELIMITER}{}", o.as_str(), a.as_str())
    }
}
