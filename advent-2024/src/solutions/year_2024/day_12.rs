use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid};
use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 12, tags = ["2024", "grid", "flood-fill"])]
pub struct Solver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    area: usize,
    perimeter: usize,
    /// Number of straight sides, equal to the number of corners
    sides: usize,
}

pub struct SharedData {
    grid: Grid,
    regions: Option<Vec<Region>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Ok(SharedData {
            grid: Grid::parse(input).map_err(invalid_input)?,
            regions: None,
        })
    }
}

impl SharedData {
    fn regions(&mut self) -> &[Region] {
        let grid = &self.grid;
        self.regions.get_or_insert_with(|| measure_regions(grid))
    }
}

fn measure_regions(grid: &Grid) -> Vec<Region> {
    let mut seen = vec![false; grid.len()];
    let mut regions = Vec::new();
    let mut stack = Vec::new();

    for (start, plant) in grid.positions() {
        if std::mem::replace(&mut seen[grid.index(start)], true) {
            continue;
        }
        let mut region = Region {
            area: 0,
            perimeter: 0,
            sides: 0,
        };
        let same = |p| grid.get(p) == Some(plant);
        stack.push(start);

        while let Some(p) = stack.pop() {
            region.area += 1;
            for dir in Dir::ALL {
                let n = p + dir;
                if same(n) {
                    let i = grid.index(n);
                    if !std::mem::replace(&mut seen[i], true) {
                        stack.push(n);
                    }
                } else {
                    region.perimeter += 1;
                }

                // Corner between `dir` and the next clockwise direction
                let side = p + dir.turn_right();
                let convex = !same(n) && !same(side);
                let concave = same(n) && same(side) && !same(n + dir.turn_right());
                if convex || concave {
                    region.sides += 1;
                }
            }
        }
        regions.push(region);
    }
    regions
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared
            .regions()
            .iter()
            .map(|r| r.area * r.perimeter)
            .sum();
        Ok(price.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let price: usize = shared.regions().iter().map(|r| r.area * r.sides).sum();
        Ok(price.to_string())
    }
}
