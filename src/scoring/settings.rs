use crate::Points;
use serde::Deserialize;
use serde::Serialize;

/// Table sizes a frame can be played with.
const RED_BALL_COUNTS: [u8; 3] = [6, 10, 15];

/// Immutable match configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub match_name: String,
    pub red_balls: u8,
    pub frames_required: u32,
}

impl Settings {
    pub fn new(match_name: impl Into<String>, red_balls: u8, frames_required: u32) -> Self {
        Self {
            match_name: match_name.into(),
            red_balls,
            frames_required,
        }
    }
    /// Reject malformed configurations before a match starts.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            RED_BALL_COUNTS.contains(&self.red_balls),
            "red ball count must be one of {:?}, got {}",
            RED_BALL_COUNTS,
            self.red_balls
        );
        anyhow::ensure!(
            self.frames_required >= 1,
            "a match needs at least one frame"
        );
        Ok(())
    }
    /// Frames needed to take a best-of-N match.
    pub fn frames_to_win(&self) -> u32 {
        self.frames_required.div_ceil(2)
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::new("Snooker Match", 15, 1)
    }
}

/// Identity and handicap for one participant, as entered at setup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub name: String,
    pub short_name: String,
    pub handicap: Points,
}

impl PlayerInfo {
    pub fn new(name: impl Into<String>, short_name: impl Into<String>, handicap: Points) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            handicap,
        }
    }
}
