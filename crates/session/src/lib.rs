//! Game session layer
//!
//! This crate wraps the rules core for a host application:
//! - A configuration surface (opponent on/off, difficulty, human color, orientation)
//! - Move and status callbacks for history display and persistence
//! - The computer opponent's delayed, cancellable turn
//!
//! # Usage
//!
//! ```no_run
//! # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use session::{GameConfig, Session};
//!
//! let session = Session::builder(GameConfig::default())
//!     .on_move(|record| println!("{}", record.notation))
//!     .on_status(|status| println!("{status}"))
//!     .start()?;
//! session.play("e2".parse()?, "e4".parse()?)?;
//! # Ok(())
//! # }
//! ```

mod config;
mod session;

pub use config::*;
pub use session::*;
