use super::action::Action;
use super::ball::Ball;
use super::phase::Phase;
use super::player::Player;
use super::settings::PlayerInfo;
use super::settings::Settings;
use super::shot::Shot;
use super::shot::ShotKind;
use crate::Points;
use crate::Seconds;

/// Breaks of this many points are recorded when they end.
pub const HIGH_BREAK: Points = 20;
/// Smallest foul penalty.
pub const FOUL_MIN: Points = 4;
/// Largest foul penalty.
pub const FOUL_MAX: Points = 7;

/// The complete state of a frame in progress, as an immutable value.
///
/// All transitions are pure: [`Frame::apply`] validates one [`Action`]
/// against the current [`Phase`] and returns the successor frame, leaving
/// `self` untouched. Because every field is owned data, a retained frame
/// can never alias a live one, which is what makes the snapshot-based
/// undo in [`super::FrameState`] safe.
///
/// Scores, frames won, and table state are observable through accessors;
/// the flag-style views (`must_pot_red`, `is_clearing_colours`, ...) are
/// derived from the phase and can never disagree with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Frame {
    pub(crate) players: [Player; 2],
    pub(crate) settings: Settings,
    pub(crate) number: u32,
    pub(crate) turn: usize,
    pub(crate) reds: u8,
    pub(crate) potted: Vec<Ball>,
    pub(crate) phase: Phase,
    pub(crate) free_ball: bool,
    pub(crate) break_score: Points,
    pub(crate) break_time: Seconds,
    pub(crate) shots: Vec<Shot>,
    pub(crate) frame_time: Seconds,
    pub(crate) match_time: Seconds,
}

impl Frame {
    /// Open frame 1 of a fresh match.
    pub fn new(infos: [PlayerInfo; 2], settings: Settings, starting: usize) -> anyhow::Result<Self> {
        settings.validate()?;
        anyhow::ensure!(starting < 2, "starting player index must be 0 or 1");
        let players = infos.map(|info| Player::new(info.name, info.short_name, info.handicap));
        Ok(Self {
            reds: settings.red_balls,
            players,
            settings,
            number: 1,
            turn: starting,
            potted: Vec::new(),
            phase: Phase::AwaitingRed,
            free_ball: false,
            break_score: 0,
            break_time: 0,
            shots: Vec::new(),
            frame_time: 0,
            match_time: 0,
        })
    }
    /// Pure transition: the frame that results from one action.
    pub fn apply(&self, action: Action) -> anyhow::Result<Self> {
        let mut child = self.clone();
        child.act(action)?;
        Ok(child)
    }
    /// Advance the clocks by one second. Breaks only accrue time while
    /// points are on the break; finished frames stand still.
    pub fn tick(&self) -> Self {
        let mut child = self.clone();
        if child.phase.is_live() {
            child.frame_time += 1;
            child.match_time += 1;
            if child.break_score > 0 {
                child.break_time += 1;
            }
        }
        child
    }

    //

    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }
    pub fn player(&self, index: usize) -> &Player {
        &self.players[index]
    }
    pub fn settings(&self) -> &Settings {
        &self.settings
    }
    /// Current frame number, from 1.
    pub fn number(&self) -> u32 {
        self.number
    }
    /// Index of the player at the table.
    pub fn current_player(&self) -> usize {
        self.turn
    }
    pub fn reds_remaining(&self) -> u8 {
        self.reds
    }
    /// Colours potted during the clearing phase, in order.
    pub fn potted_colours(&self) -> &[Ball] {
        &self.potted
    }
    pub fn phase(&self) -> Phase {
        self.phase
    }
    pub fn is_free_ball(&self) -> bool {
        self.free_ball
    }
    pub fn must_pot_red(&self) -> bool {
        self.phase.must_pot_red()
    }
    pub fn is_clearing_colours(&self) -> bool {
        self.phase.is_clearing_colours()
    }
    pub fn is_respot_black(&self) -> bool {
        self.phase.is_respot_black()
    }
    pub fn is_frame_over(&self) -> bool {
        self.phase.is_frame_over()
    }
    pub fn is_match_over(&self) -> bool {
        self.phase.is_match_over()
    }
    pub fn break_score(&self) -> Points {
        self.break_score
    }
    pub fn break_time(&self) -> Seconds {
        self.break_time
    }
    pub fn shots(&self) -> &[Shot] {
        &self.shots
    }
    pub fn frame_time(&self) -> Seconds {
        self.frame_time
    }
    pub fn match_time(&self) -> Seconds {
        self.match_time
    }
    /// Points still available on the table. While reds remain each red is
    /// worth a red-and-black pair (8), plus all six colours once (27);
    /// afterwards, whatever colours are still standing.
    pub fn remaining_points(&self) -> Points {
        if self.reds > 0 {
            Points::from(self.reds) * 8 + 27
        } else {
            Ball::colours()
                .iter()
                .filter(|ball| !self.potted.contains(ball))
                .map(|ball| ball.value())
                .sum()
        }
    }

    //

    fn act(&mut self, action: Action) -> anyhow::Result<()> {
        match self.phase {
            Phase::MatchOver => anyhow::bail!("match is over"),
            Phase::FrameOver if !matches!(action, Action::NewFrame) => {
                anyhow::bail!("frame is over; start the next frame first")
            }
            _ => {}
        }
        log::debug!("[frame] P{} {}", self.turn + 1, action);
        match action {
            Action::Pot(ball) => self.pot(ball),
            Action::Foul(penalty) => self.foul(penalty),
            Action::Miss => Ok(self.miss()),
            Action::Safety => Ok(self.safety()),
            Action::Switch => Ok(self.switch_turn()),
            Action::FreeBall => Ok(self.free_ball = !self.free_ball),
            Action::Concede => Ok(self.concede()),
            Action::NewFrame => self.new_frame(),
        }
    }
    fn pot(&mut self, ball: Ball) -> anyhow::Result<()> {
        match self.phase {
            Phase::RespotBlack => {
                if ball != Ball::Black {
                    // wrong ball on the respot is a foul, not a miss
                    return self.foul(ball.value().max(FOUL_MIN));
                }
                let points = self.score_pot(ball);
                self.log_pot(ball, points);
                self.award_frame(self.leader());
            }
            Phase::Clearing(due) => {
                if ball != due {
                    // out of sequence while clearing: absorbed as a miss
                    self.miss();
                    return Ok(());
                }
                let free = self.free_ball;
                let points = self.score_pot(ball);
                self.log_pot(ball, points);
                if free {
                    // the nominated ball stood in for a red; the real colour stays up
                    return Ok(());
                }
                self.potted.push(ball);
                match ball.next_colour() {
                    Some(next) => self.phase = Phase::Clearing(next),
                    None => {
                        // final black: level scores force a respot
                        if self.players[0].score == self.players[1].score {
                            self.potted.pop();
                            self.phase = Phase::RespotBlack;
                        } else {
                            self.award_frame(self.leader());
                        }
                    }
                }
            }
            Phase::AwaitingRed | Phase::AwaitingAny => {
                let free = self.free_ball;
                let points = self.score_pot(ball);
                self.log_pot(ball, points);
                if ball.is_red() {
                    // only a real red comes off the table
                    if !free && self.reds > 0 {
                        self.reds -= 1;
                    }
                    self.phase = Phase::AwaitingAny;
                } else if self.reds > 0 {
                    // colours re-spot while reds remain
                    self.phase = Phase::AwaitingRed;
                } else {
                    // pivot colour after the last red; clearing starts at yellow
                    self.phase = Phase::Clearing(Ball::Yellow);
                }
            }
            Phase::FrameOver | Phase::MatchOver => unreachable!("guarded in act"),
        }
        Ok(())
    }
    fn foul(&mut self, penalty: Points) -> anyhow::Result<()> {
        anyhow::ensure!(
            (FOUL_MIN..=FOUL_MAX).contains(&penalty),
            "foul penalty must be {}..={}, got {}",
            FOUL_MIN,
            FOUL_MAX,
            penalty
        );
        let offender = self.turn;
        let opponent = 1 - offender;
        self.end_break();
        self.players[opponent].add_points(penalty);
        self.players[offender].fouls += 1;
        self.shots
            .push(Shot::new(offender, None, penalty, ShotKind::Foul));
        match self.phase {
            // a foul with only the black left decides the frame
            Phase::RespotBlack | Phase::Clearing(Ball::Black) => self.award_frame(opponent),
            _ => {
                self.turn = opponent;
                self.free_ball = true;
            }
        }
        Ok(())
    }
    fn miss(&mut self) {
        self.players[self.turn].misses += 1;
        self.switch_turn();
    }
    fn safety(&mut self) {
        self.players[self.turn].safeties += 1;
        self.shots.push(Shot::new(self.turn, None, 0, ShotKind::Safety));
        self.switch_turn();
    }
    fn switch_turn(&mut self) {
        self.end_break();
        self.turn = 1 - self.turn;
        if self.phase == Phase::AwaitingAny && self.reds > 0 {
            self.phase = Phase::AwaitingRed;
        }
        self.free_ball = false;
    }
    fn concede(&mut self) {
        let opponent = 1 - self.turn;
        log::info!("[frame] P{} concedes frame {}", self.turn + 1, self.number);
        self.award_frame(opponent);
        if self.phase == Phase::FrameOver {
            self.reset_frame();
        }
    }
    fn new_frame(&mut self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.phase == Phase::FrameOver,
            "cannot start a new frame while one is in progress"
        );
        self.reset_frame();
        Ok(())
    }

    //

    /// Points for a pot under current conditions, applied to the striker
    /// and the running break. A free-ball colour substitutes for a red
    /// and scores 1.
    fn score_pot(&mut self, ball: Ball) -> Points {
        let points = if self.free_ball && ball.is_colour() {
            1
        } else {
            ball.value()
        };
        self.players[self.turn].add_points(points);
        self.break_score += points;
        points
    }
    fn log_pot(&mut self, ball: Ball, points: Points) {
        self.shots
            .push(Shot::new(self.turn, Some(ball), points, ShotKind::Pot));
        self.free_ball = false;
    }
    /// End the striker's break, recording it when it reaches the
    /// high-break threshold. Idempotent once the break is back to zero.
    fn end_break(&mut self) {
        if self.break_score >= HIGH_BREAK {
            self.players[self.turn].add_high_break(self.break_score, self.break_time);
            self.shots
                .push(Shot::new(self.turn, None, self.break_score, ShotKind::Break));
            log::debug!(
                "[frame] P{} break of {} recorded",
                self.turn + 1,
                self.break_score
            );
        }
        self.break_score = 0;
        self.break_time = 0;
    }
    /// The single path by which frames are won: ends the break, credits
    /// the winner, and decides frame-over versus match-over. Every
    /// frame-ending cause (potting out, foul on the final ball, respot
    /// foul, concession) funnels through here.
    fn award_frame(&mut self, winner: usize) {
        self.end_break();
        self.players[winner].add_frame();
        let done = self.players[winner].frames >= self.settings.frames_to_win();
        self.phase = if done { Phase::MatchOver } else { Phase::FrameOver };
        log::info!(
            "[frame] frame {} to {} ({}-{})",
            self.number,
            self.players[winner].name,
            self.players[0].frames,
            self.players[1].frames
        );
    }
    /// Player currently ahead on points. Only consulted when scores
    /// cannot be level (the respot rule removes ties on the black).
    fn leader(&self) -> usize {
        if self.players[0].score > self.players[1].score {
            0
        } else {
            1
        }
    }
    fn reset_frame(&mut self) {
        self.number += 1;
        for player in self.players.iter_mut() {
            player.reset_score();
        }
        self.reds = self.settings.red_balls;
        self.potted.clear();
        self.free_ball = false;
        self.break_score = 0;
        self.break_time = 0;
        self.shots.clear();
        self.frame_time = 0;
        self.phase = Phase::AwaitingRed;
        // odd frames open with player 1, even frames with player 2
        self.turn = if self.number % 2 == 1 { 0 } else { 1 };
    }
}

impl std::fmt::Display for Frame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "frame {} | {} v {} | {} reds | {}",
            self.number, self.players[0], self.players[1], self.reds, self.phase
        )?;
        if self.break_score > 0 {
            write!(f, " | break {}", self.break_score)?;
        }
        if self.free_ball {
            write!(f, " | free ball")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(reds: u8, best_of: u32, h0: Points, h1: Points) -> Frame {
        Frame::new(
            [
                PlayerInfo::new("Player 1", "P1", h0),
                PlayerInfo::new("Player 2", "P2", h1),
            ],
            Settings::new("test", reds, best_of),
            0,
        )
        .unwrap()
    }

    #[test]
    fn rejects_bad_construction() {
        let infos = [
            PlayerInfo::new("a", "A", 0),
            PlayerInfo::new("b", "B", 0),
        ];
        assert!(Frame::new(infos.clone(), Settings::new("m", 9, 1), 0).is_err());
        assert!(Frame::new(infos.clone(), Settings::new("m", 15, 0), 0).is_err());
        assert!(Frame::new(infos, Settings::new("m", 15, 1), 2).is_err());
    }

    #[test]
    fn apply_leaves_the_parent_untouched() {
        let parent = frame(15, 1, 0, 0);
        let child = parent.apply(Action::Pot(Ball::Red)).unwrap();
        assert_eq!(parent.reds_remaining(), 15);
        assert_eq!(child.reds_remaining(), 14);
        assert_eq!(parent.player(0).score, 0);
        assert_eq!(child.player(0).score, 1);
    }

    #[test]
    fn single_red_pivots_into_clearing() {
        let f = frame(6, 1, 0, 0);
        // burn five reds with red/black pairs, then the last red
        let mut f = f;
        for _ in 0..5 {
            f = f.apply(Action::Pot(Ball::Red)).unwrap();
            f = f.apply(Action::Pot(Ball::Black)).unwrap();
        }
        f = f.apply(Action::Pot(Ball::Red)).unwrap();
        assert_eq!(f.reds_remaining(), 0);
        assert!(!f.must_pot_red());
        assert!(!f.is_clearing_colours());
        // pivot colour: clearing begins but the pivot is not recorded
        let f = f.apply(Action::Pot(Ball::Yellow)).unwrap();
        assert!(f.is_clearing_colours());
        assert_eq!(f.phase(), Phase::Clearing(Ball::Yellow));
        assert!(f.potted_colours().is_empty());
        // the yellow proper is next in sequence
        let f = f.apply(Action::Pot(Ball::Yellow)).unwrap();
        assert_eq!(f.potted_colours(), &[Ball::Yellow]);
        assert_eq!(f.phase(), Phase::Clearing(Ball::Green));
    }

    #[test]
    fn red_at_zero_never_underflows() {
        let mut f = frame(6, 1, 0, 0);
        for _ in 0..7 {
            f = f.apply(Action::Pot(Ball::Red)).unwrap();
        }
        assert_eq!(f.reds_remaining(), 0);
        assert_eq!(f.phase(), Phase::AwaitingAny);
        let f = f.apply(Action::Pot(Ball::Brown)).unwrap();
        assert_eq!(f.phase(), Phase::Clearing(Ball::Yellow));
    }

    #[test]
    fn colour_with_reds_up_respots() {
        let f = frame(15, 1, 0, 0)
            .apply(Action::Pot(Ball::Red))
            .unwrap()
            .apply(Action::Pot(Ball::Blue))
            .unwrap();
        assert!(f.must_pot_red());
        assert!(f.potted_colours().is_empty());
        assert_eq!(f.player(0).score, 6);
    }

    #[test]
    fn remaining_points_formula() {
        let f = frame(15, 1, 0, 0);
        assert_eq!(f.remaining_points(), 147);
        let mut f = frame(6, 1, 0, 0);
        for _ in 0..6 {
            f = f.apply(Action::Pot(Ball::Red)).unwrap();
        }
        // reds gone, pivot still due
        assert_eq!(f.remaining_points(), 27);
        f = f.apply(Action::Pot(Ball::Yellow)).unwrap();
        f = f.apply(Action::Pot(Ball::Yellow)).unwrap();
        f = f.apply(Action::Pot(Ball::Green)).unwrap();
        assert_eq!(f.remaining_points(), 4 + 5 + 6 + 7);
    }

    #[test]
    fn invalid_foul_penalties_are_rejected() {
        let f = frame(15, 1, 0, 0);
        assert!(f.apply(Action::Foul(3)).is_err());
        assert!(f.apply(Action::Foul(8)).is_err());
        assert!(f.apply(Action::Foul(4)).is_ok());
    }

    #[test]
    fn foul_switches_turn_and_grants_free_ball() {
        let f = frame(15, 1, 0, 0).apply(Action::Foul(5)).unwrap();
        assert_eq!(f.current_player(), 1);
        assert_eq!(f.player(1).score, 5);
        assert_eq!(f.player(0).fouls, 1);
        assert!(f.is_free_ball());
    }

    #[test]
    fn free_ball_colour_scores_one_and_keeps_state() {
        let f = frame(15, 1, 0, 0).apply(Action::Foul(4)).unwrap();
        let f = f.apply(Action::Pot(Ball::Black)).unwrap();
        assert_eq!(f.player(1).score, 4 + 1);
        assert_eq!(f.reds_remaining(), 15);
        assert!(f.potted_colours().is_empty());
        assert!(!f.is_free_ball());
    }

    #[test]
    fn tick_gates_on_phase_and_break() {
        let f = frame(15, 1, 0, 0).tick();
        assert_eq!(f.frame_time(), 1);
        assert_eq!(f.match_time(), 1);
        assert_eq!(f.break_time(), 0);
        let f = f.apply(Action::Pot(Ball::Red)).unwrap().tick();
        assert_eq!(f.break_time(), 1);
        let f = f.apply(Action::Concede).unwrap();
        // concede on best-of-1 ends the match; clocks stop
        assert!(f.is_match_over());
        assert_eq!(f.tick().match_time(), f.match_time());
    }

    #[test]
    fn shots_after_frame_over_are_rejected() {
        let f = frame(15, 3, 0, 0).apply(Action::Concede).unwrap();
        // best-of-3: concede rolls straight into frame 2, shots are fine
        assert_eq!(f.number(), 2);
        assert!(f.apply(Action::Pot(Ball::Red)).is_ok());
        let done = frame(15, 1, 0, 0).apply(Action::Concede).unwrap();
        assert!(done.is_match_over());
        assert!(done.apply(Action::Pot(Ball::Red)).is_err());
        assert!(done.apply(Action::NewFrame).is_err());
    }

    #[test]
    fn new_frame_requires_a_decided_frame() {
        let f = frame(15, 1, 0, 0);
        assert!(f.apply(Action::NewFrame).is_err());
    }

    #[test]
    fn frame_parity_picks_the_opener() {
        let f = frame(15, 5, 0, 0).apply(Action::Concede).unwrap();
        assert_eq!(f.number(), 2);
        assert_eq!(f.current_player(), 1);
        let f = f.apply(Action::Concede).unwrap();
        assert_eq!(f.number(), 3);
        assert_eq!(f.current_player(), 0);
    }

    #[test]
    fn safety_logs_a_shot_and_passes_the_turn() {
        let f = frame(15, 1, 0, 0).apply(Action::Safety).unwrap();
        assert_eq!(f.player(0).safeties, 1);
        assert_eq!(f.current_player(), 1);
        assert_eq!(f.shots().last().unwrap().kind, ShotKind::Safety);
        assert!(f.must_pot_red());
    }
}
