use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 8, tags = ["2024", "grid", "geometry"])]
pub struct Solver;

pub struct SharedData {
    grid: Grid,
    /// Antenna positions grouped by frequency
    antennas: Vec<Vec<Point>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input).map_err(invalid_input)?;
        let antennas = grid
            .positions()
            .filter(|&(_, b)| b.is_ascii_alphanumeric())
            .map(|(p, b)| (b, p))
            .into_group_map()
            .into_values()
            .collect();
        Ok(SharedData { grid, antennas })
    }
}

impl SharedData {
    /// Count distinct in-bounds cells produced by `mark` over every antenna pair
    fn count_antinodes(&self, mut mark: impl FnMut(Point, Point, &mut dyn FnMut(Point))) -> usize {
        let mut seen = vec![false; self.grid.len()];
        for group in &self.antennas {
            for (&a, &b) in group.iter().tuple_combinations() {
                mark(a, b, &mut |p| {
                    if self.grid.contains(p) {
                        seen[self.grid.index(p)] = true;
                    }
                });
            }
        }
        seen.into_iter().filter(|&s| s).count()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count = shared.count_antinodes(|a, b, mark| {
            let delta = b - a;
            mark(a - delta);
            mark(b + delta);
        });
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let grid = &shared.grid;
        let count = shared.count_antinodes(|a, b, mark| {
            let delta = b - a;
            let mut p = a;
            while grid.contains(p) {
                mark(p);
                p = p - delta;
            }
            let mut p = b;
            while grid.contains(p) {
                mark(p);
                p = p + delta;
            }
        });
        Ok(count.to_string())
    }
}
