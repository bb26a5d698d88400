//! Terminal front end
//!
//! Reads one command per line from stdin and drives a [`Session`]. The
//! computer's replies arrive asynchronously and are printed as they land.

mod command;
mod render;

use std::collections::BTreeSet;
use std::path::PathBuf;

use anyhow::Context;
use chess_core::{Color, MoveError, Selection, Status};
use clap::Parser;
use command::{Command, HELP};
use opponent::Difficulty;
use session::{GameConfig, Session};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "play", about = "Play against the computer in the terminal")]
struct Cli {
    /// Game configuration (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Overrides the configured difficulty
    #[arg(short, long)]
    difficulty: Option<Difficulty>,
    /// Overrides the configured human color
    #[arg(long)]
    color: Option<Color>,
    /// Flip the board
    #[arg(long)]
    flip: bool,
    /// Two humans on one terminal
    #[arg(long)]
    no_opponent: bool,
}

impl Cli {
    fn game_config(&self) -> anyhow::Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("loading {}", path.display()))?,
            None => GameConfig::default(),
        };
        if let Some(d) = self.difficulty {
            config.difficulty = d;
        }
        if let Some(c) = self.color {
            config.human_color = c;
        }
        if self.flip {
            config.board_flipped = true;
        }
        if self.no_opponent {
            config.opponent_enabled = false;
        }
        Ok(config)
    }
}

/// Black sits at the bottom when the human plays Black, inverted by `board_flipped`.
fn black_at_bottom(config: &GameConfig) -> bool {
    (config.human_color == Color::Black) != config.board_flipped
}

fn print_board(session: &Session, marks: &BTreeSet<chess_core::Square>) {
    let flipped = black_at_bottom(session.config());
    print!("{}", render::board_text(&session.snapshot(), flipped, marks));
}

fn print_history(session: &Session) {
    let history = session.history();
    if history.is_empty() {
        println!("no moves yet");
        return;
    }
    for (i, pair) in history.chunks(2).enumerate() {
        match pair {
            [w, b] => println!("{:>3}. {:<6} {}", i + 1, w.notation, b.notation),
            [w] => println!("{:>3}. {}", i + 1, w.notation),
            _ => {}
        }
    }
}

fn status_line(status: Status) -> String {
    match status {
        Status::InProgress => "new game".to_string(),
        status => status.to_string(),
    }
}

/// Handles one command. Returns false when the loop should stop.
fn handle(session: &Session, cmd: Command) -> bool {
    let result = match cmd {
        Command::Click(sq) => session.click(sq).map(|selection| match selection {
            Selection::Selected(targets) => {
                let mut marks = targets;
                marks.insert(sq);
                print_board(session, &marks);
            }
            Selection::Deselected => println!("deselected {sq}"),
            Selection::Moved(_) | Selection::Ignored => {}
        }),
        Command::Move(from, to) => session.play(from, to).map(|_| ()),
        Command::Moves(sq) => {
            let targets = session.legal_targets(sq);
            if targets.is_empty() {
                println!("{sq}: no moves");
            } else {
                let names: Vec<String> = targets.iter().map(|t| t.name()).collect();
                println!("{sq}: {}", names.join(" "));
            }
            Ok(())
        }
        Command::Board => {
            print_board(session, &BTreeSet::new());
            Ok(())
        }
        Command::History => {
            print_history(session);
            Ok(())
        }
        Command::Status => {
            match session.status() {
                Status::InProgress => println!("{} to move", session.active_color()),
                status => println!("{status}"),
            }
            Ok(())
        }
        Command::Resign => {
            // hot seat: the side on move gives up
            let color = match session.config().opponent_enabled {
                true => session.config().human_color,
                false => session.active_color(),
            };
            session.resign(color).map(|_| ())
        }
        Command::New => {
            session.reset();
            print_board(session, &BTreeSet::new());
            Ok(())
        }
        Command::Help => {
            println!("{HELP}");
            Ok(())
        }
        Command::Quit => return false,
    };

    if let Err(e) = result {
        match e {
            MoveError::NotYourTurn => println!("waiting for the computer"),
            e => println!("{e}"),
        }
    }
    true
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.game_config()?;

    let session = Session::builder(config)
        .on_move(|record| println!("{}: {}", record.color, record.notation))
        .on_status(|status| println!("{}", status_line(status)))
        .start()?;

    println!("{} vs computer ({}), type help for commands", config.human_color, config.difficulty);
    print_board(&session, &BTreeSet::new());

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match command::parse(&line) {
            Ok(Some(cmd)) => {
                if !handle(&session, cmd) {
                    break;
                }
            }
            Ok(None) => {}
            Err(e) => {
                warn!(input = %line, "bad command");
                println!("{e}");
            }
        }
    }

    Ok(())
}
