//! Advent of Code 2024 puzzle solutions with automatic registration
//!
//! Each day is a unit struct deriving `AocSolver` and `AutoRegisterSolver`,
//! so linking this crate is enough for the solvers to show up in
//! `SolverRegistryBuilder::register_all_plugins`.

#[cfg(feature = "year-2024")]
pub mod solutions;

pub mod utils;
