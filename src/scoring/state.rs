use super::action::Action;
use super::ball::Ball;
use super::dto::FrameDoc;
use super::frame::Frame;
use super::settings::PlayerInfo;
use super::settings::Settings;
use crate::Points;
use std::collections::VecDeque;

/// How many prior snapshots the undo stack retains.
pub const UNDO_DEPTH: usize = 10;

/// Bounded stack of prior frame snapshots. Pushing past capacity
/// discards the oldest entry.
#[derive(Debug, Clone, Default)]
struct History {
    stack: VecDeque<Frame>,
}

impl History {
    fn push(&mut self, frame: Frame) {
        if self.stack.len() == UNDO_DEPTH {
            self.stack.pop_front();
        }
        self.stack.push_back(frame);
    }
    fn pop(&mut self) -> Option<Frame> {
        self.stack.pop_back()
    }
    fn len(&self) -> usize {
        self.stack.len()
    }
}

/// The scoreboard facade: the current [`Frame`] plus its undo history.
///
/// Each user-intent operation snapshots the current frame before
/// replacing it with the successor, so [`FrameState::undo`] can restore
/// the immediately prior state wholesale. Ticks advance the clocks
/// without snapshotting; ten seconds of play must not consume the
/// entire undo window.
///
/// Operations that reject their input (bad penalty, shot after the
/// frame is over) leave both the frame and the history untouched.
#[derive(Debug, Clone)]
pub struct FrameState {
    current: Frame,
    history: History,
}

impl FrameState {
    pub fn new(
        players: [PlayerInfo; 2],
        settings: Settings,
        starting: usize,
    ) -> anyhow::Result<Self> {
        Ok(Self {
            current: Frame::new(players, settings, starting)?,
            history: History::default(),
        })
    }
    /// The live frame, for rendering and inspection.
    pub fn current(&self) -> &Frame {
        &self.current
    }
    /// How many operations can currently be undone.
    pub fn undo_depth(&self) -> usize {
        self.history.len()
    }
    /// Wire document of the live frame, for an external store.
    pub fn to_doc(&self) -> FrameDoc {
        FrameDoc::from(&self.current)
    }
    /// Resume from a stored document. Undo history starts empty; it is
    /// never persisted.
    pub fn from_doc(doc: FrameDoc) -> anyhow::Result<Self> {
        Ok(Self {
            current: Frame::try_from(doc)?,
            history: History::default(),
        })
    }

    //

    pub fn pot(&mut self, ball: Ball) -> anyhow::Result<()> {
        self.mutate(Action::Pot(ball))
    }
    pub fn foul(&mut self, penalty: Points) -> anyhow::Result<()> {
        self.mutate(Action::Foul(penalty))
    }
    pub fn miss(&mut self) -> anyhow::Result<()> {
        self.mutate(Action::Miss)
    }
    pub fn safe(&mut self) -> anyhow::Result<()> {
        self.mutate(Action::Safety)
    }
    pub fn switch_player(&mut self) -> anyhow::Result<()> {
        self.mutate(Action::Switch)
    }
    pub fn toggle_free_ball(&mut self) -> anyhow::Result<()> {
        self.mutate(Action::FreeBall)
    }
    pub fn concede_frame(&mut self) -> anyhow::Result<()> {
        self.mutate(Action::Concede)
    }
    pub fn start_next_frame(&mut self) -> anyhow::Result<()> {
        self.mutate(Action::NewFrame)
    }
    /// One second of wall-clock time. Not undoable.
    pub fn tick(&mut self) {
        self.current = self.current.tick();
    }
    /// Restore the state before the most recent operation. A no-op when
    /// nothing is left to undo.
    pub fn undo(&mut self) {
        match self.history.pop() {
            Some(prior) => self.current = prior,
            None => log::debug!("[state] nothing to undo"),
        }
    }

    //

    fn mutate(&mut self, action: Action) -> anyhow::Result<()> {
        let next = self.current.apply(action)?;
        let prior = std::mem::replace(&mut self.current, next);
        self.history.push(prior);
        Ok(())
    }
}
