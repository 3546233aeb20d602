use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 13, tags = ["2024", "math"])]
pub struct Solver;

const PRIZE_OFFSET: i64 = 10_000_000_000_000;

static MACHINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Button A: X\+(\d+), Y\+(\d+)\s+Button B: X\+(\d+), Y\+(\d+)\s+Prize: X=(\d+), Y=(\d+)",
    )
    .expect("machine regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Machine {
    a: (i64, i64),
    b: (i64, i64),
    prize: (i64, i64),
}

impl Machine {
    /// Cheapest press count (3 tokens for A, 1 for B), if the prize is reachable
    fn tokens(&self, offset: i64) -> Option<i64> {
        let (ax, ay) = self.a;
        let (bx, by) = self.b;
        let (px, py) = (self.prize.0 + offset, self.prize.1 + offset);

        let det = ax * by - ay * bx;
        if det == 0 {
            return None;
        }
        let a_num = px * by - py * bx;
        let b_num = ax * py - ay * px;
        if a_num % det != 0 || b_num % det != 0 {
            return None;
        }
        let (a, b) = (a_num / det, b_num / det);
        (a >= 0 && b >= 0).then_some(3 * a + b)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Machine>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let machines: Vec<Machine> = MACHINE
            .captures_iter(input)
            .map(|caps| {
                let n = |i: usize| caps[i].parse::<i64>().map_err(invalid_input);
                Ok(Machine {
                    a: (n(1)?, n(2)?),
                    b: (n(3)?, n(4)?),
                    prize: (n(5)?, n(6)?),
                })
            })
            .collect::<Result<_, ParseError>>()?;
        if machines.is_empty() {
            return Err(ParseError::MissingData("no claw machines found".into()));
        }
        Ok(machines)
    }
}

fn total_tokens(machines: &[Machine], offset: i64) -> i64 {
    machines.iter().filter_map(|m| m.tokens(offset)).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_tokens(shared, 0).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_tokens(shared, PRIZE_OFFSET).to_string())
    }
}
