use std::collections::VecDeque;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::grid::{Grid, Point};
use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 20, tags = ["2024", "grid", "bfs"])]
pub struct Solver;

const MIN_SAVING: u32 = 100;
const SHORT_CHEAT: i32 = 2;
const LONG_CHEAT: i32 = 20;

pub struct Track {
    grid: Grid,
    /// Picoseconds from the start, `u32::MAX` for walls and unreached cells
    distance: Vec<u32>,
    /// Track cells in race order
    path: Vec<Point>,
}

impl AocParser for Solver {
    type SharedData<'a> = Track;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input).map_err(invalid_input)?;
        let start = grid
            .find(b'S')
            .ok_or_else(|| ParseError::MissingData("start 'S' not found".into()))?;
        let end = grid
            .find(b'E')
            .ok_or_else(|| ParseError::MissingData("end 'E' not found".into()))?;

        let mut distance = vec![u32::MAX; grid.len()];
        let mut path = Vec::new();
        let mut queue = VecDeque::from([start]);
        distance[grid.index(start)] = 0;
        while let Some(p) = queue.pop_front() {
            path.push(p);
            let d = distance[grid.index(p)];
            for next in p.neighbours() {
                let open = matches!(grid.get(next), Some(b) if b != b'#');
                if open && distance[grid.index(next)] == u32::MAX {
                    distance[grid.index(next)] = d + 1;
                    queue.push_back(next);
                }
            }
        }
        if distance[grid.index(end)] == u32::MAX {
            return Err(invalid_input("end is not reachable from start"));
        }
        Ok(Track { grid, distance, path })
    }
}

impl Track {
    /// Cheats of at most `max_len` picoseconds that save at least `min_saving`
    fn cheats(&self, max_len: i32, min_saving: u32) -> usize {
        self.path
            .par_iter()
            .map(|&from| {
                let start = self.distance[self.grid.index(from)];
                let mut count = 0;
                for dy in -max_len..=max_len {
                    let reach = max_len - dy.abs();
                    for dx in -reach..=reach {
                        let to = from + Point::new(dx, dy);
                        if !self.grid.contains(to) {
                            continue;
                        }
                        let end = self.distance[self.grid.index(to)];
                        let len = from.manhattan(to);
                        if end != u32::MAX && end >= start + len + min_saving {
                            count += 1;
                        }
                    }
                }
                count
            })
            .sum()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.cheats(SHORT_CHEAT, MIN_SAVING).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.cheats(LONG_CHEAT, MIN_SAVING).to_string())
    }
}
