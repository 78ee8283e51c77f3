//! Snooker frame and match scoring engine.
//!
//! This crate implements the rules engine behind a two-player snooker
//! scoreboard: whose turn it is, which balls remain on the table, running
//! scores, fouls, breaks, and frame/match completion, with a bounded
//! snapshot-based undo.
//!
//! The engine is a pure state machine. Every user action maps to one
//! [`scoring::Action`], applied through [`scoring::FrameState`], which owns
//! the current [`scoring::Frame`] value and a stack of prior snapshots.
//! Rendering, persistence, and input belong to the surrounding application;
//! the wire shape they consume is [`scoring::FrameDoc`].

pub mod scoring;

/// Frame points, penalties, and break scores.
pub type Points = i32;
/// Timer values, in whole seconds.
pub type Seconds = u32;

/// Random instance generation for tests and sampling.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() {
    std::fs::create_dir_all("logs").expect("create logs directory");
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .expect("system clock before unix epoch")
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).expect("create log file"),
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).expect("initialize logger");
}
