//! Scoreboard Binary
//!
//! Interactive referee terminal for scoring a two-player snooker match.
//!
//! Options: --reds, --best-of, player names and handicaps

use baize::Points;
use baize::scoring::*;
use clap::Parser;
use colored::Colorize;
use dialoguer::Select;
use std::time::Instant;

#[derive(Parser)]
#[command(name = "scoreboard", about = "Interactive snooker scoreboard")]
struct Args {
    /// Display name for the match.
    #[arg(long, default_value = "Snooker Match")]
    name: String,
    /// First player; opens the odd-numbered frames.
    #[arg(long, default_value = "Player 1")]
    player1: String,
    /// Second player; opens the even-numbered frames.
    #[arg(long, default_value = "Player 2")]
    player2: String,
    /// Starting-score offset for the first player.
    #[arg(long, default_value_t = 0)]
    handicap1: Points,
    /// Starting-score offset for the second player.
    #[arg(long, default_value_t = 0)]
    handicap2: Points,
    /// Reds on the table: 6, 10, or 15.
    #[arg(long, default_value_t = 15)]
    reds: u8,
    /// Best-of-N frames.
    #[arg(long, default_value_t = 1)]
    best_of: u32,
}

fn main() -> anyhow::Result<()> {
    baize::log();
    let args = Args::parse();
    let mut state = FrameState::new(
        [
            PlayerInfo::new(args.player1.clone(), initials(&args.player1), args.handicap1),
            PlayerInfo::new(args.player2.clone(), initials(&args.player2), args.handicap2),
        ],
        Settings::new(args.name, args.reds, args.best_of),
        0,
    )?;
    let start = Instant::now();
    let mut ticked = 0u64;
    loop {
        let due = start.elapsed().as_secs();
        while ticked < due {
            state.tick();
            ticked += 1;
        }
        render(state.current());
        if state.current().is_match_over() {
            conclude(state.current());
            return Ok(());
        }
        match choose(state.current())? {
            Command::Apply(action) => dispatch(&mut state, action),
            Command::Undo => state.undo(),
            Command::Quit => return Ok(()),
        }
    }
}

/// What the referee asked for at the prompt.
enum Command {
    Apply(Action),
    Undo,
    Quit,
}

/// One scoreboard line plus the remaining-points hint.
fn render(frame: &Frame) {
    let marker = |index: usize| {
        if frame.current_player() == index && !frame.is_frame_over() {
            frame.player(index).to_string().bold().green().to_string()
        } else {
            frame.player(index).to_string()
        }
    };
    println!(
        "\n{} | {} v {} | {} reds | {} left | {}",
        format!("frame {}", frame.number()).bold(),
        marker(0),
        marker(1),
        frame.reds_remaining(),
        frame.remaining_points(),
        frame.phase()
    );
    if frame.break_score() > 0 {
        println!("break: {} ({}s)", frame.break_score(), frame.break_time());
    }
    if frame.is_free_ball() {
        println!("{}", "free ball".yellow());
    }
}

fn conclude(frame: &Frame) {
    let winner = if frame.player(0).frames > frame.player(1).frames {
        frame.player(0)
    } else {
        frame.player(1)
    };
    println!(
        "{} takes the match {}-{}",
        winner.name.bold().green(),
        frame.player(0).frames,
        frame.player(1).frames
    );
    for player in frame.players() {
        if let Some(best) = player.best_break() {
            println!("{} high break: {}", player.short_name, best.score);
        }
    }
}

/// Prompt for the referee's next command.
fn choose(frame: &Frame) -> anyhow::Result<Command> {
    let choices: Vec<&str> = if frame.is_frame_over() {
        vec!["Next frame", "Undo", "Quit"]
    } else {
        vec![
            "Pot red", "Pot colour", "Foul", "Miss", "Safety", "Switch player", "Free ball",
            "Undo", "Concede frame", "Quit",
        ]
    };
    let selection = Select::new()
        .with_prompt("Action")
        .report(false)
        .items(&choices)
        .default(0)
        .interact()?;
    let command = match choices[selection] {
        "Pot red" => Command::Apply(Action::Pot(Ball::Red)),
        "Pot colour" => Command::Apply(Action::Pot(colour()?)),
        "Foul" => Command::Apply(Action::Foul(penalty()?)),
        "Miss" => Command::Apply(Action::Miss),
        "Safety" => Command::Apply(Action::Safety),
        "Switch player" => Command::Apply(Action::Switch),
        "Free ball" => Command::Apply(Action::FreeBall),
        "Concede frame" => Command::Apply(Action::Concede),
        "Next frame" => Command::Apply(Action::NewFrame),
        "Undo" => Command::Undo,
        _ => Command::Quit,
    };
    Ok(command)
}

fn colour() -> anyhow::Result<Ball> {
    let colours = Ball::colours();
    let labels: Vec<&str> = colours.iter().map(|b| b.label()).collect();
    let selection = Select::new()
        .with_prompt("Colour")
        .report(false)
        .items(&labels)
        .default(0)
        .interact()?;
    Ok(colours[selection])
}

fn penalty() -> anyhow::Result<Points> {
    let penalties = ["4", "5", "6", "7"];
    let selection = Select::new()
        .with_prompt("Penalty")
        .report(false)
        .items(&penalties)
        .default(0)
        .interact()?;
    Ok(4 + selection as Points)
}

fn dispatch(state: &mut FrameState, action: Action) {
    let result = match action {
        Action::Pot(ball) => state.pot(ball),
        Action::Foul(points) => state.foul(points),
        Action::Miss => state.miss(),
        Action::Safety => state.safe(),
        Action::Switch => state.switch_player(),
        Action::FreeBall => state.toggle_free_ball(),
        Action::Concede => state.concede_frame(),
        Action::NewFrame => state.start_next_frame(),
    };
    if let Err(err) = result {
        log::warn!("[scoreboard] {}", err);
        println!("{}", err.to_string().red());
    }
}

/// Two-letter tag from a display name, e.g. "Ronnie O'Sullivan" -> "RO".
fn initials(name: &str) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect();
    if letters.len() >= 2 {
        letters.to_uppercase()
    } else {
        name.chars().take(2).collect::<String>().to_uppercase()
    }
}
