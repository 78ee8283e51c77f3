//! Rules engine for scoring a snooker frame and match.
//!
//! ## State Representation
//!
//! - [`Frame`] — The complete table and match state as an immutable value
//! - [`Phase`] — Where we are in the frame: reds, clearing, respot, over
//! - [`Player`] — Per-player scoring ledger: points, frames, breaks, fouls
//!
//! ## Actions
//!
//! - [`Action`] — One user action: pot, foul, miss, safety, switch, concede
//! - [`Ball`] — The seven ball colours and their point values
//!
//! ## Facade
//!
//! - [`FrameState`] — Owns the current frame plus a bounded undo history
//! - [`FrameDoc`] — Wire-contract document for persistence collaborators

mod action;
mod ball;
mod dto;
mod frame;
mod phase;
mod player;
mod settings;
mod shot;
mod state;

pub use action::*;
pub use ball::*;
pub use dto::*;
pub use frame::*;
pub use phase::*;
pub use player::*;
pub use settings::*;
pub use shot::*;
pub use state::*;
