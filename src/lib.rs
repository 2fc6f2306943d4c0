//! ai-2048-bridge: glue between a 4x4 2048 board and a native move engine,
//! plus statistics over the engine's game log.
//!
//! This crate provides:
//! - `Board` / `EncodedBoard` and the nibble packing the native engine expects (`board` module)
//! - A narrow `MoveResolver` seam and a `NativeResolver` that loads the engine library (`resolver` module)
//! - Occurrence counts and plain/BASIC reports over the game log CSV (`stats` module)
//!
//! Quick start:
//! ```
//! use ai_2048_bridge::board::{Board, Direction};
//! use ai_2048_bridge::resolver::find_best_move;
//!
//! let board: Board = "8 2 4 2  2 2 4 8  128 64 32 16  256 512 1024 2048".parse().unwrap();
//! assert_eq!(board.encode().raw(), 0xba98_4567_3211_1213);
//!
//! // Stand-in for the native engine: always answers "up".
//! let engine = |_raw: u64| 0;
//! assert_eq!(find_best_move(&engine, &board), Some(Direction::Up));
//! ```
//!
//! With the real engine, load it once and reuse it:
//! ```no_run
//! use ai_2048_bridge::board::Board;
//! use ai_2048_bridge::config::ResolverConfig;
//! use ai_2048_bridge::resolver::{find_best_move, NativeResolver};
//!
//! let engine = NativeResolver::from_config(&ResolverConfig::default()).unwrap();
//! let board = Board::new([0, 0, 0, 0, 8, 4, 2, 2, 16, 32, 64, 128, 2048, 1024, 512, 256]);
//! println!("{:?}", find_best_move(&engine, &board));
//! ```
//!
pub mod board;
pub mod config;
pub mod resolver;
pub mod stats;
