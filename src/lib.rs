//! Cave generation library
//!
//! Re-exports modules for use by binaries and tools.

pub mod ascii;
pub mod cave;
pub mod export;
pub mod tilemap;

pub use cave::{
    generate_cave, generate_cave_from_seed, generate_caves, CaveError, CaveGrid, CaveParams, Cell,
};
