use super::ball::Ball;

/// Where the frame stands in its lifecycle.
///
/// The phase, together with the orthogonal free-ball flag on the frame,
/// determines which pots are legal and how they score. Illegal flag
/// combinations (respot outside clearing, clearing with reds up) are
/// unrepresentable by construction.
///
/// # Variants
///
/// - `AwaitingRed` — Reds remain and the next legal ball is a red
/// - `AwaitingAny` — A red just fell (or the pivot colour is still due)
/// - `Clearing(Ball)` — Reds are gone; payload is the next colour due
/// - `RespotBlack` — Final black re-spotted after level scores
/// - `FrameOver` — Frame decided, awaiting the next frame
/// - `MatchOver` — A player reached the frames-to-win threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    AwaitingRed,
    AwaitingAny,
    Clearing(Ball),
    RespotBlack,
    FrameOver,
    MatchOver,
}

impl Phase {
    /// True while a red is the only legal target.
    pub const fn must_pot_red(&self) -> bool {
        matches!(self, Self::AwaitingRed)
    }
    /// True once the colours-in-sequence endgame has begun.
    /// Stays true through the respot-black tiebreak.
    pub const fn is_clearing_colours(&self) -> bool {
        matches!(self, Self::Clearing(_) | Self::RespotBlack)
    }
    /// True while the re-spotted black decides the frame.
    pub const fn is_respot_black(&self) -> bool {
        matches!(self, Self::RespotBlack)
    }
    /// True once the frame has been decided (including match over).
    pub const fn is_frame_over(&self) -> bool {
        matches!(self, Self::FrameOver | Self::MatchOver)
    }
    /// True once a player has won enough frames to take the match.
    pub const fn is_match_over(&self) -> bool {
        matches!(self, Self::MatchOver)
    }
    /// True while shots can still be played.
    pub const fn is_live(&self) -> bool {
        !self.is_frame_over()
    }
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AwaitingRed => write!(f, "red required"),
            Self::AwaitingAny => write!(f, "colour available"),
            Self::Clearing(due) => write!(f, "clearing ({} due)", due),
            Self::RespotBlack => write!(f, "respot black"),
            Self::FrameOver => write!(f, "frame over"),
            Self::MatchOver => write!(f, "match over"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn respot_counts_as_clearing() {
        assert!(Phase::RespotBlack.is_clearing_colours());
        assert!(Phase::Clearing(Ball::Pink).is_clearing_colours());
        assert!(!Phase::AwaitingRed.is_clearing_colours());
    }

    #[test]
    fn match_over_implies_frame_over() {
        assert!(Phase::MatchOver.is_frame_over());
        assert!(Phase::FrameOver.is_frame_over());
        assert!(!Phase::FrameOver.is_match_over());
    }
}
