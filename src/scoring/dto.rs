use super::ball::Ball;
use super::frame::Frame;
use super::phase::Phase;
use super::player::Player;
use super::settings::Settings;
use super::shot::Shot;
use crate::Points;
use crate::Seconds;
use serde::Deserialize;
use serde::Serialize;

/// Frame and match clocks, in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimersDoc {
    pub frame_time: Seconds,
    pub match_time: Seconds,
}

/// Wire-contract document for a [`Frame`].
///
/// This is the shape persistence collaborators store and reload: nested
/// camelCase keys, the phase flattened into its boolean flags, potted
/// colours as their point values. Undo history deliberately stays out of
/// the document. `TryFrom` reconstructs the phase and rejects any flag
/// combination the engine could never produce, so a corrupted or
/// hand-edited document cannot smuggle in an illegal state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameDoc {
    pub players: Vec<Player>,
    pub settings: Settings,
    pub frame: u32,
    pub current_player_index: usize,
    pub reds_remaining: u8,
    pub potted_colors: Vec<u8>,
    pub must_pot_red: bool,
    pub is_free_ball: bool,
    pub is_clearing_colours: bool,
    pub is_respot_black: bool,
    pub is_frame_over: bool,
    pub is_match_over: bool,
    pub break_score: Points,
    pub break_time: Seconds,
    pub shot_history: Vec<Shot>,
    pub timers: TimersDoc,
}

impl From<&Frame> for FrameDoc {
    fn from(frame: &Frame) -> Self {
        Self {
            players: frame.players.to_vec(),
            settings: frame.settings.clone(),
            frame: frame.number,
            current_player_index: frame.turn,
            reds_remaining: frame.reds,
            potted_colors: frame.potted.iter().map(|b| b.value() as u8).collect(),
            must_pot_red: frame.phase.must_pot_red(),
            is_free_ball: frame.free_ball,
            is_clearing_colours: frame.phase.is_clearing_colours(),
            is_respot_black: frame.phase.is_respot_black(),
            is_frame_over: frame.phase.is_frame_over(),
            is_match_over: frame.phase.is_match_over(),
            break_score: frame.break_score,
            break_time: frame.break_time,
            shot_history: frame.shots.clone(),
            timers: TimersDoc {
                frame_time: frame.frame_time,
                match_time: frame.match_time,
            },
        }
    }
}

impl TryFrom<FrameDoc> for Frame {
    type Error = anyhow::Error;
    fn try_from(doc: FrameDoc) -> Result<Self, Self::Error> {
        doc.settings.validate()?;
        anyhow::ensure!(doc.frame >= 1, "frame numbers start at 1");
        anyhow::ensure!(
            doc.current_player_index < 2,
            "current player index must be 0 or 1"
        );
        anyhow::ensure!(
            doc.reds_remaining <= doc.settings.red_balls,
            "more reds remaining than the table holds"
        );
        let players: [Player; 2] = doc
            .players
            .clone()
            .try_into()
            .map_err(|p: Vec<Player>| anyhow::anyhow!("expected 2 players, got {}", p.len()))?;
        let potted = doc
            .potted_colors
            .iter()
            .map(|&v| Ball::try_from(v))
            .collect::<Result<Vec<_>, _>>()?;
        anyhow::ensure!(
            potted.len() <= 6 && potted.as_slice() == &Ball::colours()[..potted.len()],
            "potted colours must be an ascending prefix of the colour sequence"
        );
        let phase = phase_of(&doc, &potted)?;
        Ok(Frame {
            players,
            settings: doc.settings,
            number: doc.frame,
            turn: doc.current_player_index,
            reds: doc.reds_remaining,
            potted,
            phase,
            free_ball: doc.is_free_ball,
            break_score: doc.break_score,
            break_time: doc.break_time,
            shots: doc.shot_history,
            frame_time: doc.timers.frame_time,
            match_time: doc.timers.match_time,
        })
    }
}

/// Rebuild the phase from its flattened boolean flags.
fn phase_of(doc: &FrameDoc, potted: &[Ball]) -> anyhow::Result<Phase> {
    if doc.is_match_over {
        anyhow::ensure!(doc.is_frame_over, "match over implies frame over");
        return Ok(Phase::MatchOver);
    }
    if doc.is_frame_over {
        return Ok(Phase::FrameOver);
    }
    if doc.is_respot_black {
        anyhow::ensure!(
            doc.is_clearing_colours && !doc.must_pot_red,
            "respot black outside the clearing phase"
        );
        anyhow::ensure!(
            potted.len() == 5,
            "respot black requires the pink to be the last colour down"
        );
        return Ok(Phase::RespotBlack);
    }
    if doc.is_clearing_colours {
        anyhow::ensure!(
            !doc.must_pot_red && doc.reds_remaining == 0,
            "clearing colours with reds still required"
        );
        let due = Ball::colours()
            .get(potted.len())
            .copied()
            .ok_or_else(|| anyhow::anyhow!("clearing with every colour already down"))?;
        return Ok(Phase::Clearing(due));
    }
    anyhow::ensure!(
        potted.is_empty(),
        "colours recorded outside the clearing phase"
    );
    if doc.must_pot_red {
        anyhow::ensure!(
            doc.reds_remaining > 0,
            "red required with no reds remaining"
        );
        Ok(Phase::AwaitingRed)
    } else {
        Ok(Phase::AwaitingAny)
    }
}
