use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use regex::Regex;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 3, tags = ["2024", "parsing"])]
pub struct Solver;

static INSTRUCTION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"mul\((\d{1,3}),(\d{1,3})\)|do\(\)|don't\(\)").expect("instruction regex")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Instruction {
    Mul(u32, u32),
    Do,
    Dont,
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Instruction>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        INSTRUCTION
            .captures_iter(input)
            .map(|caps| match (caps.get(1), caps.get(2)) {
                (Some(a), Some(b)) => Ok(Instruction::Mul(
                    a.as_str().parse().map_err(crate::utils::parse::invalid_input)?,
                    b.as_str().parse().map_err(crate::utils::parse::invalid_input)?,
                )),
                _ if &caps[0] == "do()" => Ok(Instruction::Do),
                _ => Ok(Instruction::Dont),
            })
            .collect()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .iter()
            .map(|ins| match *ins {
                Instruction::Mul(a, b) => a as u64 * b as u64,
                _ => 0,
            })
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let (total, _) = shared
            .iter()
            .fold((0u64, true), |(total, enabled), ins| match *ins {
                Instruction::Mul(a, b) if enabled => (total + a as u64 * b as u64, enabled),
                Instruction::Mul(..) => (total, enabled),
                Instruction::Do => (total, true),
                Instruction::Dont => (total, false),
            });
        Ok(total.to_string())
    }
}
