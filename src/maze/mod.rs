pub mod ascii_utils;
pub mod cell;
pub mod config;
pub mod diagnostics;
pub mod direction;
pub mod error;
pub mod grid;
pub mod neighbors;
pub mod reducer;
pub mod solver;
pub mod trial;
pub mod walker;

#[cfg(test)]
pub(crate) mod fixtures;
