use crate::Arbitrary;
use crate::Points;
use serde::Deserialize;
use serde::Serialize;

/// The seven snooker balls, by colour.
///
/// Discriminants are the point values: red is worth 1, the six colours
/// run yellow (2) through black (7). During the reds phase the striker
/// alternates red and colour; once the reds are gone the colours must
/// fall in ascending order.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Ball {
    Red = 1,
    Yellow = 2,
    Green = 3,
    Brown = 4,
    Blue = 5,
    Pink = 6,
    Black = 7,
}

impl Ball {
    /// The six colours in clearing order.
    pub const fn colours() -> [Self; 6] {
        [
            Self::Yellow,
            Self::Green,
            Self::Brown,
            Self::Blue,
            Self::Pink,
            Self::Black,
        ]
    }
    /// Point value when potted legally.
    pub const fn value(&self) -> Points {
        *self as Points
    }
    /// True for the red ball.
    pub const fn is_red(&self) -> bool {
        matches!(self, Self::Red)
    }
    /// True for any of the six colours.
    pub const fn is_colour(&self) -> bool {
        !self.is_red()
    }
    /// The colour due after this one in the clearing sequence.
    /// None for the black (nothing follows) and for the red.
    pub const fn next_colour(&self) -> Option<Self> {
        match self {
            Self::Red => None,
            Self::Yellow => Some(Self::Green),
            Self::Green => Some(Self::Brown),
            Self::Brown => Some(Self::Blue),
            Self::Blue => Some(Self::Pink),
            Self::Pink => Some(Self::Black),
            Self::Black => None,
        }
    }
    /// Human-readable name.
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Red => "Red",
            Self::Yellow => "Yellow",
            Self::Green => "Green",
            Self::Brown => "Brown",
            Self::Blue => "Blue",
            Self::Pink => "Pink",
            Self::Black => "Black",
        }
    }
}

impl TryFrom<u8> for Ball {
    type Error = anyhow::Error;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::Red),
            2 => Ok(Self::Yellow),
            3 => Ok(Self::Green),
            4 => Ok(Self::Brown),
            5 => Ok(Self::Blue),
            6 => Ok(Self::Pink),
            7 => Ok(Self::Black),
            n => Err(anyhow::anyhow!("invalid ball value {}", n)),
        }
    }
}

impl Arbitrary for Ball {
    fn random() -> Self {
        Self::try_from(rand::random_range(1..=7u8)).expect("range covers all balls")
    }
}

impl std::fmt::Display for Ball {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Red => write!(f, "red"),
            Self::Yellow => write!(f, "yellow"),
            Self::Green => write!(f, "green"),
            Self::Brown => write!(f, "brown"),
            Self::Blue => write!(f, "blue"),
            Self::Pink => write!(f, "pink"),
            Self::Black => write!(f, "black"),
        }
    }
}
