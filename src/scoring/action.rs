use super::ball::Ball;
use crate::Points;

/// One user action against the rules engine.
///
/// Each variant corresponds to a single scoreboard control. Applying an
/// action either produces the successor frame or rejects the input; rule
/// violations that the game itself absorbs (a colour out of sequence
/// while clearing, the wrong ball during a respot) are not rejections —
/// they score as a miss or a foul.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// A legal strike that sent this ball down.
    Pot(Ball),
    /// A foul awarding the penalty (4..=7) to the opponent.
    Foul(Points),
    /// A missed shot; the turn passes.
    Miss,
    /// A declared safety; the turn passes.
    Safety,
    /// Manual turn switch without a recorded outcome.
    Switch,
    /// Referee toggle of the free-ball flag.
    FreeBall,
    /// Current player concedes the frame.
    Concede,
    /// Start the next frame after one has been decided.
    NewFrame,
}

impl Action {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Pot(_) => "Pot",
            Self::Foul(_) => "Foul",
            Self::Miss => "Miss",
            Self::Safety => "Safety",
            Self::Switch => "Switch",
            Self::FreeBall => "Free ball",
            Self::Concede => "Concede",
            Self::NewFrame => "New frame",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Pot(ball) => write!(f, "P{}", ball.value()),
            Self::Foul(penalty) => write!(f, "F{}", penalty),
            Self::Miss => write!(f, "M"),
            Self::Safety => write!(f, "S"),
            Self::Switch => write!(f, "X"),
            Self::FreeBall => write!(f, "*"),
            Self::Concede => write!(f, "CC"),
            Self::NewFrame => write!(f, "NF"),
        }
    }
}
