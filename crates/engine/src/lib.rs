//! Engine - the headless game loop around the reducer
//!
//! The reducer decides what an action does; the [`Driver`] decides which
//! actions to send and when. It owns a [`Store`](tetris_reducer_core::Store)
//! and a piece source, spawns pieces from the waiting queue, turns elapsed
//! time into gravity steps, follows every landing with a turn increment and
//! a new spawn, and ends the game when a spawn overlaps the stack.
//!
//! ```
//! use tetris_reducer_engine::{Command, Driver, DriverConfig};
//!
//! let mut driver = Driver::new(DriverConfig::default());
//! driver.start();
//! driver.apply(Command::MoveLeft).unwrap();
//! assert_eq!(driver.advance(1000), 1);
//! assert_eq!(driver.state().next_pieces.len(), 3);
//! ```

pub mod command;
pub mod config;
pub mod driver;

pub use command::{Command, CommandError};
pub use config::DriverConfig;
pub use driver::Driver;
