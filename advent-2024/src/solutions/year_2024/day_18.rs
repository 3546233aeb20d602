use std::collections::{BinaryHeap, VecDeque};

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Point;
use crate::utils::parse::{lines_with, numbers};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 18, tags = ["2024", "grid", "bfs"])]
pub struct Solver;

const SIZE: usize = 71;
const FALLEN: usize = 1024;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Point>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| match numbers::<i32>(line).collect::<Vec<_>>()[..] {
            [x, y] => Ok(Point::new(x, y)),
            _ => Err(anyhow::anyhow!("expected 'x,y', found {:?}", line)),
        })
    }
}

/// Memory space where each cell holds the index of the byte landing on it
struct Memory {
    size: usize,
    fall_time: Vec<usize>,
}

impl Memory {
    fn new(bytes: &[Point], size: usize) -> Result<Self, SolveError> {
        let mut fall_time = vec![usize::MAX; size * size];
        for (i, &p) in bytes.iter().enumerate() {
            let idx = Self::index_of(size, p).ok_or_else(|| {
                SolveError::failed(format!("byte {},{} outside the {size}x{size} space", p.x, p.y))
            })?;
            // Only the first byte on a cell matters
            fall_time[idx] = fall_time[idx].min(i);
        }
        Ok(Self { size, fall_time })
    }

    fn index_of(size: usize, p: Point) -> Option<usize> {
        let (x, y) = (usize::try_from(p.x).ok()?, usize::try_from(p.y).ok()?);
        (x < size && y < size).then_some(y * size + x)
    }

    fn neighbours(&self, idx: usize) -> impl Iterator<Item = usize> + '_ {
        let p = Point::new((idx % self.size) as i32, (idx / self.size) as i32);
        p.neighbours().filter_map(|n| Self::index_of(self.size, n))
    }

    fn exit(&self) -> usize {
        self.size * self.size - 1
    }

    /// Steps from the top-left to the bottom-right corner once `fallen` bytes have landed
    fn shortest_path(&self, fallen: usize) -> Option<usize> {
        let open = |idx: usize| self.fall_time[idx] >= fallen;
        if !open(0) {
            return None;
        }
        let mut steps = vec![usize::MAX; self.fall_time.len()];
        let mut queue = VecDeque::from([0]);
        steps[0] = 0;
        while let Some(idx) = queue.pop_front() {
            if idx == self.exit() {
                return Some(steps[idx]);
            }
            for next in self.neighbours(idx) {
                if open(next) && steps[next] == usize::MAX {
                    steps[next] = steps[idx] + 1;
                    queue.push_back(next);
                }
            }
        }
        None
    }

    /// Index of the first byte after which no path remains
    ///
    /// Widest-path search: the best route maximises the earliest fall time
    /// along it, and that bottleneck is the byte that cuts it.
    fn first_blocker(&self) -> Option<usize> {
        let mut best = vec![None; self.fall_time.len()];
        let mut heap = BinaryHeap::from([(self.fall_time[0], 0)]);
        best[0] = Some(self.fall_time[0]);
        while let Some((width, idx)) = heap.pop() {
            if best[idx].is_some_and(|b| b > width) {
                continue;
            }
            if idx == self.exit() {
                return (width != usize::MAX).then_some(width);
            }
            for next in self.neighbours(idx) {
                let through = width.min(self.fall_time[next]);
                if best[next].is_none_or(|b| b < through) {
                    best[next] = Some(through);
                    heap.push((through, next));
                }
            }
        }
        None
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Memory::new(shared, SIZE)?
            .shortest_path(FALLEN)
            .map(|steps| steps.to_string())
            .ok_or_else(|| SolveError::failed("exit is unreachable"))
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let byte = Memory::new(shared, SIZE)?
            .first_blocker()
            .ok_or_else(|| SolveError::failed("the exit is never cut off"))?;
        let p = shared[byte];
        Ok(format!("{},{}", p.x, p.y))
    }
}
