use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::parse::lines_with;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 14, tags = ["2024", "math", "simulation"])]
pub struct Solver;

const WIDTH: i64 = 101;
const HEIGHT: i64 = 103;
const SECONDS: i64 = 100;

static ROBOT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"p=(-?\d+),(-?\d+) v=(-?\d+),(-?\d+)").expect("robot regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    p: (i64, i64),
    v: (i64, i64),
}

impl Robot {
    fn x_at(&self, t: i64, width: i64) -> i64 {
        (self.p.0 + self.v.0 * t).rem_euclid(width)
    }

    fn y_at(&self, t: i64, height: i64) -> i64 {
        (self.p.1 + self.v.1 * t).rem_euclid(height)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Robot>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let caps = ROBOT
                .captures(line)
                .ok_or_else(|| anyhow::anyhow!("expected 'p=x,y v=dx,dy', found {:?}", line))?;
            let n = |i: usize| caps[i].parse::<i64>();
            Ok(Robot {
                p: (n(1)?, n(2)?),
                v: (n(3)?, n(4)?),
            })
        })
    }
}

/// Product of robot counts per quadrant after `t` seconds
fn safety_factor(robots: &[Robot], width: i64, height: i64, t: i64) -> u64 {
    let (mid_x, mid_y) = (width / 2, height / 2);
    let mut quadrants = [0u64; 4];
    for r in robots {
        let (x, y) = (r.x_at(t, width), r.y_at(t, height));
        if x != mid_x && y != mid_y {
            quadrants[(usize::from(y > mid_y) << 1) | usize::from(x > mid_x)] += 1;
        }
    }
    quadrants.iter().product()
}

/// Time in `0..period` where the coordinates are least spread out
fn tightest(period: i64, coords: impl Fn(i64) -> Vec<i64>) -> i64 {
    (0..period)
        .min_by_key(|&t| {
            let values = coords(t);
            let n = values.len() as i64;
            let sum: i64 = values.iter().sum();
            let squares: i64 = values.iter().map(|v| v * v).sum();
            n * squares - sum * sum
        })
        .unwrap_or(0)
}

/// Extended Euclid: returns (g, x, y) with a·x + b·y = g
fn extended_gcd(a: i64, b: i64) -> (i64, i64, i64) {
    if b == 0 {
        (a, 1, 0)
    } else {
        let (g, x, y) = extended_gcd(b, a % b);
        (g, y, x - (a / b) * y)
    }
}

/// Smallest t ≥ 0 with t ≡ a (mod m) and t ≡ b (mod n), for coprime m and n
fn crt(a: i64, m: i64, b: i64, n: i64) -> Option<i64> {
    let (g, inv_m, _) = extended_gcd(m, n);
    if g != 1 {
        return None;
    }
    let k = ((b - a) * inv_m).rem_euclid(n);
    Some(a + k * m)
}

fn tree_time(robots: &[Robot], width: i64, height: i64) -> Option<i64> {
    let tx = tightest(width, |t| robots.iter().map(|r| r.x_at(t, width)).collect());
    let ty = tightest(height, |t| robots.iter().map(|r| r.y_at(t, height)).collect());
    crt(tx, width, ty, height)
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(safety_factor(shared, WIDTH, HEIGHT, SECONDS).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.is_empty() {
            return Err(SolveError::failed("no robots"));
        }
        tree_time(shared, WIDTH, HEIGHT)
            .map(|t| t.to_string())
            .ok_or_else(|| SolveError::failed("grid dimensions are not coprime"))
    }
}
