//! Self-play harness
//!
//! This crate provides infrastructure for:
//! - Playing the computer opponent against itself at different difficulties
//! - Checking that the difficulty levels are actually ordered by strength
//! - Saving results as JSON and printing text reports
//!
//! # Usage
//!
//! ```bash
//! cargo run -p tournament -- match hard easy --games 100
//! cargo run -p tournament -- ladder --games 20 --out ladder.json
//! ```

mod match_runner;
mod results;

pub use match_runner::*;
pub use results::*;
