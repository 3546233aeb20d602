use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid, Point};
use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 16, tags = ["2024", "grid", "dijkstra"])]
pub struct Solver;

const STEP: u64 = 1;
const TURN: u64 = 1000;

pub struct SharedData {
    maze: Grid,
    start: Point,
    end: Point,
    /// Lowest score per (cell, heading) state
    scores: Option<Vec<u64>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let maze = Grid::parse(input).map_err(invalid_input)?;
        let start = maze
            .find(b'S')
            .ok_or_else(|| ParseError::MissingData("start 'S' not found".into()))?;
        let end = maze
            .find(b'E')
            .ok_or_else(|| ParseError::MissingData("end 'E' not found".into()))?;
        Ok(SharedData {
            maze,
            start,
            end,
            scores: None,
        })
    }
}

impl SharedData {
    fn state(&self, p: Point, dir: Dir) -> usize {
        self.maze.index(p) * 4 + dir.index()
    }

    fn open(&self, p: Point) -> bool {
        matches!(self.maze.get(p), Some(b) if b != b'#')
    }

    fn scores(&mut self) -> &[u64] {
        if self.scores.is_none() {
            self.scores = Some(self.dijkstra());
        }
        self.scores.as_deref().unwrap_or_default()
    }

    fn dijkstra(&self) -> Vec<u64> {
        let mut scores = vec![u64::MAX; self.maze.len() * 4];
        let mut queue = BinaryHeap::new();
        scores[self.state(self.start, Dir::Right)] = 0;
        queue.push(Reverse((0, self.start, Dir::Right)));

        while let Some(Reverse((score, p, dir))) = queue.pop() {
            if score > scores[self.state(p, dir)] {
                continue;
            }
            let forward = p + dir;
            let moves = [
                (forward, dir, STEP),
                (p, dir.turn_left(), TURN),
                (p, dir.turn_right(), TURN),
            ];
            for (next, next_dir, cost) in moves {
                if !self.open(next) {
                    continue;
                }
                let slot = &mut scores[self.state(next, next_dir)];
                if score + cost < *slot {
                    *slot = score + cost;
                    queue.push(Reverse((score + cost, next, next_dir)));
                }
            }
        }
        scores
    }

    fn best_score(&mut self) -> Option<u64> {
        let end = self.end;
        let states: Vec<usize> = Dir::ALL.iter().map(|&d| self.state(end, d)).collect();
        let scores = self.scores();
        states.into_iter().map(|s| scores[s]).min().filter(|&s| s != u64::MAX)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .best_score()
            .map(|s| s.to_string())
            .ok_or_else(|| SolveError::failed("end is unreachable"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let best = shared
            .best_score()
            .ok_or_else(|| SolveError::failed("end is unreachable"))?;
        shared.scores();
        let shared = &*shared;
        let scores = shared.scores.as_deref().unwrap_or_default();

        // Walk back from the end along edges whose cost matches the score difference
        let mut on_path = vec![false; scores.len()];
        let mut stack: Vec<(Point, Dir)> = Dir::ALL
            .into_iter()
            .filter(|&d| scores[shared.state(shared.end, d)] == best)
            .map(|d| (shared.end, d))
            .collect();
        while let Some((p, dir)) = stack.pop() {
            let here = shared.state(p, dir);
            if std::mem::replace(&mut on_path[here], true) {
                continue;
            }
            let score = scores[here];
            let back = p - dir.delta();
            let predecessors = [
                (back, dir, STEP),
                (p, dir.turn_left(), TURN),
                (p, dir.turn_right(), TURN),
            ];
            for (prev, prev_dir, cost) in predecessors {
                if !shared.open(prev) {
                    continue;
                }
                if scores[shared.state(prev, prev_dir)].checked_add(cost) == Some(score) {
                    stack.push((prev, prev_dir));
                }
            }
        }

        let tiles = on_path
            .chunks(4)
            .filter(|dirs| dirs.iter().any(|&d| d))
            .count();
        Ok(tiles.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    const FIRST: &str = "\
###############
#.......#....E#
#.#.###.#.###.#
#.....#.#...#.#
#.###.#####.#.#
#.#.#.......#.#
#.#.#####.###.#
#...........#.#
###.#.#####.#.#
#...#.....#.#.#
#.#.#.###.#.#.#
#.....#...#.#.#
#.###.#.#.#.#.#
#S..#.....#...#
###############
";

    const SECOND: &str = "\
#################
#...#...#...#..E#
#.#.#.#.#.#.#.#.#
#.#.#.#...#...#.#
#.#.#.#.###.#.#.#
#...#.#.#.....#.#
#.#.#.#.#.#####.#
#.#...#.#.#.....#
#.#.#####.#.###.#
#.#.#.......#...#
#.#.###.#####.###
#.#.#...#.....#.#
#.#.#.#####.###.#
#.#.#.........#.#
#.#.#.#########.#
#S#.............#
#################
";

    #[test]
    fn test_first_example() {
        assert_eq!(solve::<Solver>(FIRST, 1), "7036");
        assert_eq!(solve::<Solver>(FIRST, 2), "45");
    }

    #[test]
    fn test_second_example() {
        assert_eq!(solve::<Solver>(SECOND, 1), "11048");
        assert_eq!(solve::<Solver>(SECOND, 2), "64");
    }

    #[test]
    fn test_walled_in_end() {
        let input = "#####\n#S#E#\n#####\n";
        assert!(solve_err(input));
    }

    fn solve_err(input: &str) -> bool {
        let mut shared = <Solver as AocParser>::parse(input).unwrap();
        <Solver as PartSolver<1>>::solve(&mut shared).is_err()
    }
}
