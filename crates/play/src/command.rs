//! Line protocol for the terminal front end.

use chess_core::Square;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Click a single square (select, deselect or move)
    Click(Square),
    /// Select and move in one go
    Move(Square, Square),
    /// Show the legal targets of a square
    Moves(Square),
    Board,
    History,
    Status,
    Resign,
    New,
    Help,
    Quit,
}

pub fn parse(line: &str) -> Result<Option<Command>, String> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let Some(&head) = parts.first() else {
        return Ok(None);
    };

    let square = |s: &str| s.parse::<Square>().map_err(|e| e.to_string());

    let cmd = match (head.to_ascii_lowercase().as_str(), &parts[1..]) {
        ("board" | "b", []) => Command::Board,
        ("history" | "h", []) => Command::History,
        ("status", []) => Command::Status,
        ("resign", []) => Command::Resign,
        ("new", []) => Command::New,
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit" | "q", []) => Command::Quit,
        ("moves" | "m", [sq]) => Command::Moves(square(sq)?),
        (_, []) if head.len() == 4 => match (head.get(..2), head.get(2..)) {
            (Some(from), Some(to)) => Command::Move(square(from)?, square(to)?),
            _ => return Err(format!("not a move: {head}")),
        },
        (_, []) => Command::Click(square(head)?),
        (_, [to]) => Command::Move(square(head)?, square(to)?),
        _ => return Err(format!("unrecognised command: {line}")),
    };
    Ok(Some(cmd))
}

pub const HELP: &str = "\
commands:
  <sq>            click a square (e.g. e2), click again to move
  <from> <to>     move directly (e.g. e2 e4 or e2e4)
  moves <sq>      list legal targets of a square
  board           print the board
  history         print the move list
  status          print the game status
  resign          resign the game
  new             start a new game
  quit            leave";
