//! Rule engines for the three games embedded on the studio site: the Monty
//! Hall door puzzle, five-in-a-row (omok) and the knight's tour.
//!
//! Every engine is a plain state holder. A view calls its operations, then
//! renders from its read accessors; a rejected operation never changes state.

#![no_std]

extern crate alloc;

pub use error::*;
pub use gomoku::*;
pub use knight_tour::*;
pub use monty_hall::*;
pub use random::*;
pub use types::*;

mod error;
mod gomoku;
mod knight_tour;
mod monty_hall;
mod random;
mod types;
