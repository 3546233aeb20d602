use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::grid::{Dir, Grid, Point};
use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 6, tags = ["2024", "grid", "simulation"])]
pub struct Solver;

pub struct SharedData {
    grid: Grid,
    start: Point,
    /// Per direction and cell: the coordinate along the direction's axis where
    /// the guard stops, either just before an obstruction or one step outside
    jumps: [Vec<i32>; 4],
    /// Distinct cells in first-visit order, with the heading used to enter them
    route: Option<Vec<(Point, Dir)>>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let grid = Grid::parse(input).map_err(invalid_input)?;
        let start = grid
            .find(b'^')
            .ok_or_else(|| ParseError::MissingData("guard '^' not found".into()))?;
        let jumps = build_jumps(&grid);
        Ok(SharedData {
            grid,
            start,
            jumps,
            route: None,
        })
    }
}

fn build_jumps(grid: &Grid) -> [Vec<i32>; 4] {
    let (w, h) = (grid.width() as i32, grid.height() as i32);
    let mut jumps: [Vec<i32>; 4] = std::array::from_fn(|_| vec![0; grid.len()]);
    let blocked = |x: i32, y: i32| grid.get(Point::new(x, y)) == Some(b'#');

    for x in 0..w {
        let mut last = -1;
        for y in 0..h {
            if blocked(x, y) {
                last = y + 1;
            }
            jumps[Dir::Up.index()][grid.index(Point::new(x, y))] = last;
        }
        let mut last = h;
        for y in (0..h).rev() {
            if blocked(x, y) {
                last = y - 1;
            }
            jumps[Dir::Down.index()][grid.index(Point::new(x, y))] = last;
        }
    }
    for y in 0..h {
        let mut last = -1;
        for x in 0..w {
            if blocked(x, y) {
                last = x + 1;
            }
            jumps[Dir::Left.index()][grid.index(Point::new(x, y))] = last;
        }
        let mut last = w;
        for x in (0..w).rev() {
            if blocked(x, y) {
                last = x - 1;
            }
            jumps[Dir::Right.index()][grid.index(Point::new(x, y))] = last;
        }
    }
    jumps
}

impl SharedData {
    fn route(&mut self) -> Result<&[(Point, Dir)], SolveError> {
        if self.route.is_none() {
            self.route = Some(walk(&self.grid, self.start)?);
        }
        Ok(self.route.as_deref().unwrap_or_default())
    }

    /// Move from `pos` until blocked, treating `obstacle` as an extra obstruction
    fn jump(&self, pos: Point, dir: Dir, obstacle: Point) -> Point {
        let stop = self.jumps[dir.index()][self.grid.index(pos)];
        let end = obstacle - dir.delta();
        match dir {
            Dir::Up if pos.x == obstacle.x && pos.y > obstacle.y && obstacle.y >= stop => end,
            Dir::Down if pos.x == obstacle.x && pos.y < obstacle.y && obstacle.y <= stop => end,
            Dir::Left if pos.y == obstacle.y && pos.x > obstacle.x && obstacle.x >= stop => end,
            Dir::Right if pos.y == obstacle.y && pos.x < obstacle.x && obstacle.x <= stop => end,
            Dir::Up | Dir::Down => Point::new(pos.x, stop),
            Dir::Left | Dir::Right => Point::new(stop, pos.y),
        }
    }

    fn loops_with(&self, mut pos: Point, mut dir: Dir, obstacle: Point) -> bool {
        let mut seen = HashSet::new();
        while self.grid.contains(pos) {
            if !seen.insert((pos, dir)) {
                return true;
            }
            pos = self.jump(pos, dir, obstacle);
            dir = dir.turn_right();
        }
        false
    }
}

fn walk(grid: &Grid, start: Point) -> Result<Vec<(Point, Dir)>, SolveError> {
    let mut first_visit = vec![false; grid.len()];
    let mut states = vec![false; grid.len() * 4];
    let mut route = Vec::new();
    let (mut pos, mut dir) = (start, Dir::Up);

    loop {
        let i = grid.index(pos);
        if std::mem::replace(&mut states[i * 4 + dir.index()], true) {
            return Err(SolveError::failed("guard never leaves the map"));
        }
        if !std::mem::replace(&mut first_visit[i], true) {
            route.push((pos, dir));
        }
        let next = pos + dir;
        match grid.get(next) {
            None => return Ok(route),
            Some(b'#') => dir = dir.turn_right(),
            Some(_) => pos = next,
        }
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.route()?.len().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared.route()?;
        let shared = &*shared;
        let route = shared.route.as_deref().unwrap_or_default();

        // The guard's own start cell is never a candidate
        let count = route
            .par_iter()
            .skip(1)
            .filter(|&&(cell, dir)| shared.loops_with(cell - dir.delta(), dir, cell))
            .count();
        Ok(count.to_string())
    }
}
