use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::grid::Grid;
use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2024, day = 25, tags = ["2024", "bitmask"])]
pub struct Solver;

/// Filled cells of each schematic as a bitmask, split by kind
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Schematics {
    locks: Vec<u64>,
    keys: Vec<u64>,
}

impl AocParser for Solver {
    type SharedData<'a> = Schematics;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let mut schematics = Schematics::default();
        for block in input.split("\n\n").filter(|b| !b.trim().is_empty()) {
            let grid = Grid::parse(block).map_err(invalid_input)?;
            if grid.len() > 64 {
                return Err(invalid_input(format!(
                    "schematic of {}x{} does not fit a 64-bit mask",
                    grid.width(),
                    grid.height()
                )));
            }
            let mask = grid
                .bytes()
                .iter()
                .fold(0u64, |mask, &b| (mask << 1) | u64::from(b == b'#'));
            if grid.bytes()[..grid.width()].iter().all(|&b| b == b'#') {
                schematics.locks.push(mask);
            } else {
                schematics.keys.push(mask);
            }
        }
        if schematics.locks.is_empty() || schematics.keys.is_empty() {
            return Err(ParseError::MissingData("need at least one lock and one key".into()));
        }
        Ok(schematics)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let keys = &shared.keys;
        let fitting: usize = shared
            .locks
            .par_iter()
            .map(|lock| keys.iter().filter(|&&key| lock & key == 0).count())
            .sum();
        Ok(fitting.to_string())
    }
}
