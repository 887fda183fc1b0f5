#![allow(clippy::bool_assert_comparison)]

mod board;
mod cell;
mod error;
mod read;
mod rule;

pub use ca_formats;
pub use board::Board;
pub use cell::Cell;
pub use error::Error;
pub use rule::Rule;
