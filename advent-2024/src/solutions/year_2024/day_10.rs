use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 10, tags = ["2024", "grid", "search"])]
pub struct Solver;

pub struct SharedData {
    grid: Grid,
    trailheads: Vec<Point>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input).map_err(invalid_input)?;
        if let Some((p, b)) = grid.positions().find(|(_, b)| !b.is_ascii_digit() && *b != b'.') {
            return Err(invalid_input(format!("unexpected {:?} at {:?}", b as char, p)));
        }
        let trailheads = grid
            .positions()
            .filter(|&(_, b)| b == b'0')
            .map(|(p, _)| p)
            .collect();
        Ok(SharedData { grid, trailheads })
    }
}

impl SharedData {
    /// Depth-first walk up gentle slopes, reporting every summit reached (with repeats)
    fn summits_from(&self, head: Point, mut found: impl FnMut(Point)) {
        let mut stack = vec![head];
        while let Some(p) = stack.pop() {
            let Some(height) = self.grid.get(p) else {
                continue;
            };
            if height == b'9' {
                found(p);
                continue;
            }
            stack.extend(p.neighbours().filter(|&n| self.grid.get(n) == Some(height + 1)));
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let shared = &*shared;
        let score: usize = shared
            .trailheads
            .par_iter()
            .map(|&head| {
                let mut summits = HashSet::new();
                shared.summits_from(head, |p| {
                    summits.insert(p);
                });
                summits.len()
            })
            .sum();
        Ok(score.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let shared = &*shared;
        let rating: usize = shared
            .trailheads
            .par_iter()
            .map(|&head| {
                let mut trails = 0;
                shared.summits_from(head, |_| trails += 1);
                trails
            })
            .sum();
        Ok(rating.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    const EXAMPLE: &str = "\
89010123
78121874
87430965
96549874
45678903
32019012
01329801
10456732
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "36");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "81");
    }

    #[test]
    fn test_impassable_tiles() {
        let input = "\
...0...
...1...
...2...
6543456
7.....7
8.....8
9.....9
";
        assert_eq!(solve::<Solver>(input, 1), "2");
    }
}
