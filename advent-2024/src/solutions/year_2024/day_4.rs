use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 4, tags = ["2024", "grid"])]
pub struct Solver;

const DIRECTIONS: [Point; 8] = [
    Point::new(1, 0),
    Point::new(-1, 0),
    Point::new(0, 1),
    Point::new(0, -1),
    Point::new(1, 1),
    Point::new(-1, -1),
    Point::new(1, -1),
    Point::new(-1, 1),
];

impl AocParser for Solver {
    type SharedData<'a> = Grid;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        Grid::parse(input).map_err(invalid_input)
    }
}

impl PartSolver<1> for Solver {
    fn solve(grid: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let count: usize = grid
            .positions()
            .filter(|&(_, b)| b == b'X')
            .map(|(p, _)| {
                DIRECTIONS
                    .iter()
                    .filter(|&&d| {
                        b"MAS"
                            .iter()
                            .zip(1..)
                            .all(|(&c, k)| grid.get(p + d * k) == Some(c))
                    })
                    .count()
            })
            .sum();
        Ok(count.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(grid: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let is_ms = |a: Option<u8>, b: Option<u8>| {
            matches!((a, b), (Some(b'M'), Some(b'S')) | (Some(b'S'), Some(b'M')))
        };
        let count = grid
            .positions()
            .filter(|&(p, b)| {
                b == b'A'
                    && is_ms(grid.get(p + Point::new(-1, -1)), grid.get(p + Point::new(1, 1)))
                    && is_ms(grid.get(p + Point::new(1, -1)), grid.get(p + Point::new(-1, 1)))
            })
            .count();
        Ok(count.to_string())
    }
}
