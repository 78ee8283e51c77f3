use super::ball::Ball;
use crate::Points;
use serde::Deserialize;
use serde::Serialize;

/// What kind of event a shot record describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShotKind {
    Pot,
    Foul,
    Safety,
    Break,
}

/// One entry in the frame's shot log.
///
/// Pots carry the ball and the points awarded (which differ under a free
/// ball). Fouls are logged against the offending player with the penalty
/// as points. A `Break` entry marks the end of a recorded high break.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Shot {
    pub player: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ball: Option<Ball>,
    pub points: Points,
    #[serde(rename = "type")]
    pub kind: ShotKind,
    pub timestamp: u64,
}

impl Shot {
    /// Record a shot at the current wall-clock time.
    pub fn new(player: usize, ball: Option<Ball>, points: Points, kind: ShotKind) -> Self {
        Self {
            player,
            ball,
            points,
            kind,
            timestamp: now_millis(),
        }
    }
}

/// Milliseconds since the unix epoch.
fn now_millis() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}
