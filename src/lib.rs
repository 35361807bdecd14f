//! Island map generation library
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod cell;
pub mod cleanup;
pub mod config;
pub mod error;
pub mod export;
pub mod grid;
pub mod influence;
pub mod islands;
pub mod seeds;
pub mod vegetation;
pub mod weathering;
pub mod world;
