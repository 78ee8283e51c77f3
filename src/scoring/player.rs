use crate::Points;
use crate::Seconds;
use serde::Deserialize;
use serde::Serialize;

/// A break of twenty or more, recorded when it ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighBreak {
    pub score: Points,
    pub time: Seconds,
}

/// Per-player scoring ledger.
///
/// Identity and handicap are fixed at match setup. The score starts at the
/// handicap and returns to it on every frame reset; frames won, high
/// breaks, and the miss/safety/foul counters persist across frames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub name: String,
    pub short_name: String,
    pub score: Points,
    pub frames: u32,
    pub high_breaks: Vec<HighBreak>,
    pub misses: u32,
    pub safeties: u32,
    pub fouls: u32,
    pub handicap: Points,
}

impl Player {
    /// A fresh ledger with the handicap applied to the opening score.
    pub fn new(name: impl Into<String>, short_name: impl Into<String>, handicap: Points) -> Self {
        Self {
            name: name.into(),
            short_name: short_name.into(),
            score: handicap,
            frames: 0,
            high_breaks: Vec::new(),
            misses: 0,
            safeties: 0,
            fouls: 0,
            handicap,
        }
    }
    pub fn add_points(&mut self, points: Points) {
        self.score += points;
    }
    pub fn subtract_points(&mut self, points: Points) {
        self.score -= points;
    }
    pub fn add_frame(&mut self) {
        self.frames += 1;
    }
    /// Back to the handicap for a new frame.
    pub fn reset_score(&mut self) {
        self.score = self.handicap;
    }
    pub fn add_high_break(&mut self, score: Points, time: Seconds) {
        self.high_breaks.push(HighBreak { score, time });
    }
    /// Highest break recorded so far.
    pub fn best_break(&self) -> Option<&HighBreak> {
        self.high_breaks.iter().max_by_key(|b| b.score)
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}) {}", self.short_name, self.frames, self.score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handicap_seeds_and_restores_score() {
        let mut player = Player::new("Ronnie", "RO", 21);
        assert_eq!(player.score, 21);
        player.add_points(50);
        player.reset_score();
        assert_eq!(player.score, 21);
    }

    #[test]
    fn best_break_picks_the_largest() {
        let mut player = Player::new("Judd", "JT", 0);
        player.add_high_break(34, 120);
        player.add_high_break(67, 250);
        player.add_high_break(21, 80);
        assert_eq!(player.best_break().unwrap().score, 67);
    }

    #[test]
    fn clone_is_structurally_independent() {
        let mut player = Player::new("Mark", "MS", 0);
        player.add_high_break(25, 90);
        let copy = player.clone();
        player.add_high_break(40, 100);
        assert_eq!(copy.high_breaks.len(), 1);
        assert_eq!(player.high_breaks.len(), 2);
    }
}
