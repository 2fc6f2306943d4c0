//! Move resolution through an injected decision function.
//!
//! The search engine itself is a prebuilt native library. This module only
//! defines the seam it plugs into ([`MoveResolver`]), the move-code table, and
//! the loader for the real library ([`NativeResolver`]).
//!
//! Notes
//! - Any `Fn(u64) -> i32` is a resolver, which is how tests stand in for the
//!   native engine.
//! - Codes outside 0..=3 mean "no move" and resolve to `None`, never an error.
//!
//! Quick start
//! ```
//! use ai_2048_bridge::board::{Board, Direction};
//! use ai_2048_bridge::resolver::find_best_move;
//!
//! let board = Board::new([2, 4, 8, 16, 32, 64, 128, 256, 512, 1024, 2048, 4, 8, 16, 32, 2]);
//! let always_left = |_raw: u64| 2;
//! assert_eq!(find_best_move(&always_left, &board), Some(Direction::Left));
//!
//! let gives_up = |_raw: u64| -1;
//! assert_eq!(find_best_move(&gives_up, &board), None);
//! ```

use log::debug;

use crate::board::{Board, Direction, EncodedBoard};

mod native;

pub use native::{NativeResolver, ResolverError};

/// Anything that maps an encoded board to a native move code.
pub trait MoveResolver {
    fn decide(&self, board: EncodedBoard) -> i32;
}

impl<F> MoveResolver for F
where
    F: Fn(u64) -> i32,
{
    #[inline]
    fn decide(&self, board: EncodedBoard) -> i32 { self(board.raw()) }
}

/// A raw move code from the native engine, classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCode {
    Move(Direction),
    Unrecognized(i32),
}

impl MoveCode {
    #[inline]
    pub fn from_raw(code: i32) -> Self {
        match code {
            0 => MoveCode::Move(Direction::Up),
            1 => MoveCode::Move(Direction::Down),
            2 => MoveCode::Move(Direction::Left),
            3 => MoveCode::Move(Direction::Right),
            other => MoveCode::Unrecognized(other),
        }
    }

    #[inline]
    pub fn direction(self) -> Option<Direction> {
        match self {
            MoveCode::Move(dir) => Some(dir),
            MoveCode::Unrecognized(_) => None,
        }
    }
}

impl From<i32> for MoveCode {
    fn from(code: i32) -> Self { MoveCode::from_raw(code) }
}

/// Ask `resolver` for a move on an already-encoded board.
pub fn resolve_move<R: MoveResolver + ?Sized>(resolver: &R, board: EncodedBoard) -> Option<Direction> {
    let code = MoveCode::from_raw(resolver.decide(board));
    if let MoveCode::Unrecognized(raw) = code {
        debug!("resolver returned unrecognized move code {raw} for {board:016x}");
    }
    code.direction()
}

/// Encode `board` and ask `resolver` for a move.
pub fn find_best_move<R: MoveResolver + ?Sized>(resolver: &R, board: &Board) -> Option<Direction> {
    let encoded = board.encode();
    debug!("encoded board {encoded:x}");
    resolve_move(resolver, encoded)
}
