//! Match runner for playing games between computer players

use chess_core::{Color, GameState, MovePolicy, Status};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Configuration for a match
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of games to play
    pub num_games: u32,
    /// Maximum plies per game before it is abandoned as unfinished
    pub max_moves: u32,
    /// Whether to alternate colors each game
    pub alternate_colors: bool,
    /// Log every game result at info level
    pub verbose: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            num_games: 10,
            max_moves: 400,
            alternate_colors: true,
            verbose: true,
        }
    }
}

/// Outcome of a single game from the first player's perspective
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum GameOutcome {
    Win,
    Loss,
    /// Move limit reached with both kings on the board
    Unfinished,
}

/// Result of a match (multiple games), from the first player's perspective
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    pub wins: u32,
    pub losses: u32,
    pub unfinished: u32,
    /// Total plies over all games
    pub plies: u64,
}

impl MatchResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn total_games(&self) -> u32 {
        self.wins + self.losses + self.unfinished
    }

    /// Share of decided games won (0.5 when nothing was decided)
    pub fn score(&self) -> f64 {
        let decided = (self.wins + self.losses) as f64;
        if decided == 0.0 {
            return 0.5;
        }
        self.wins as f64 / decided
    }

    fn record(&mut self, outcome: GameOutcome) {
        match outcome {
            GameOutcome::Win => self.wins += 1,
            GameOutcome::Loss => self.losses += 1,
            GameOutcome::Unfinished => self.unfinished += 1,
        }
    }
}

/// Runs matches between two policies
pub struct MatchRunner {
    config: MatchConfig,
}

impl MatchRunner {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Run a match between two policies
    ///
    /// Returns the result from player1's perspective
    pub fn run_match(
        &self,
        player1: &mut dyn MovePolicy,
        player2: &mut dyn MovePolicy,
    ) -> MatchResult {
        let mut result = MatchResult::new();

        for game_num in 0..self.config.num_games {
            let player1_white = !self.config.alternate_colors || game_num % 2 == 0;

            let (winner, plies) = if player1_white {
                self.play_game(player1, player2)
            } else {
                self.play_game(player2, player1)
            };
            let player1_color = if player1_white {
                Color::White
            } else {
                Color::Black
            };
            let outcome = match winner {
                Some(c) if c == player1_color => GameOutcome::Win,
                Some(_) => GameOutcome::Loss,
                None => GameOutcome::Unfinished,
            };
            result.record(outcome);
            result.plies += u64::from(plies);

            if self.config.verbose {
                info!(
                    game = game_num + 1,
                    of = self.config.num_games,
                    color = %player1_color,
                    ?outcome,
                    plies,
                    "{}-{}-{}",
                    result.wins,
                    result.losses,
                    result.unfinished
                );
            }
        }

        result
    }

    /// Play a single game, returns the winner (if any) and the ply count
    pub fn play_game(
        &self,
        white: &mut dyn MovePolicy,
        black: &mut dyn MovePolicy,
    ) -> (Option<Color>, u32) {
        let mut game = GameState::new();
        white.new_game();
        black.new_game();

        for _ in 0..self.config.max_moves {
            let color = game.active_color();
            let player: &mut dyn MovePolicy = match color {
                Color::White => &mut *white,
                Color::Black => &mut *black,
            };

            match player.choose_move(game.board(), color) {
                Some(mv) => {
                    if let Err(e) = game.apply(mv.from, mv.to) {
                        // A policy proposing an illegal move forfeits.
                        debug!(player = player.name(), %mv, error = %e, "illegal move");
                        let resigned = game.resign(color);
                        debug_assert!(resigned.is_ok(), "game was in progress");
                    }
                }
                None => {
                    let declared = game.declare_no_moves(color);
                    debug_assert!(declared.is_ok(), "game was in progress");
                }
            }

            if let Status::Won(_) | Status::Resigned(_) = game.status() {
                break;
            }
        }

        (game.status().winner(), game.history().len() as u32)
    }
}

/// Quick utility to run a single match
pub fn quick_match(
    player1: &mut dyn MovePolicy,
    player2: &mut dyn MovePolicy,
    num_games: u32,
) -> MatchResult {
    let config = MatchConfig {
        num_games,
        verbose: false,
        ..Default::default()
    };
    let runner = MatchRunner::new(config);
    runner.run_match(player1, player2)
}

#[cfg(test)]
#[path = "match_runner_tests.rs"]
mod match_runner_tests;
