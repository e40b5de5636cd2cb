//! Core of a 3x3 tic-tac-toe game against a computer that never loses: the
//! board, outcome detection, the exhaustive minimax search and a game session
//! tying them together, plus the config and logging pieces the front ends share.

pub mod config;
pub mod engine;
pub mod games;
pub mod logger;
