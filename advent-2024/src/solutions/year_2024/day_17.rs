use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::Regex;

use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 17, tags = ["2024", "vm", "search"])]
pub struct Solver;

/// Instructions executed before a run is considered stuck
const STEP_LIMIT: usize = 1_000_000;

static COMPUTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"Register A: (\d+)\s+Register B: (\d+)\s+Register C: (\d+)\s+Program: ([0-7](?:,[0-7])*)",
    )
    .expect("computer regex")
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Computer {
    a: u64,
    b: u64,
    c: u64,
    program: Vec<u8>,
}

/// `a >> amount`, saturating to zero for oversized shifts
fn shift(a: u64, amount: u64) -> u64 {
    u32::try_from(amount)
        .ok()
        .and_then(|s| a.checked_shr(s))
        .unwrap_or(0)
}

impl Computer {
    /// Run with register A replaced by `a`, collecting every `out`
    fn run(&self, a: u64) -> Result<Vec<u8>, SolveError> {
        let (mut a, mut b, mut c) = (a, self.b, self.c);
        let mut output = Vec::new();
        let mut pc = 0;

        for _ in 0..STEP_LIMIT {
            let (Some(&op), Some(&arg)) = (self.program.get(pc), self.program.get(pc + 1)) else {
                return Ok(output);
            };
            let combo = match arg {
                0..=3 => Ok(arg as u64),
                4 => Ok(a),
                5 => Ok(b),
                6 => Ok(c),
                _ => Err(SolveError::failed("combo operand 7 is reserved")),
            };

            pc += 2;
            match op {
                0 => a = shift(a, combo?),
                1 => b ^= arg as u64,
                2 => b = combo? & 7,
                3 if a != 0 => pc = arg as usize,
                3 => {}
                4 => b ^= c,
                5 => output.push((combo? & 7) as u8),
                6 => b = shift(a, combo?),
                7 => c = shift(a, combo?),
                _ => return Err(SolveError::failed(format!("unknown opcode {op}"))),
            }
        }
        Err(SolveError::failed("program did not halt"))
    }

    /// Build A three bits at a time from the most significant end, keeping
    /// candidates whose output matches the program's tail
    fn find_quine(&self, partial: u64, digits: usize) -> Result<Option<u64>, SolveError> {
        let len = self.program.len();
        for bits in 0..8 {
            if partial == 0 && bits == 0 {
                continue;
            }
            let candidate = (partial << 3) | bits;
            let output = self.run(candidate)?;
            if output.len() > len || output[..] != self.program[len - output.len()..] {
                continue;
            }
            if digits + 1 == len {
                if output.len() == len {
                    return Ok(Some(candidate));
                }
            } else if let Some(found) = self.find_quine(candidate, digits + 1)? {
                return Ok(Some(found));
            }
        }
        Ok(None)
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Computer;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let caps = COMPUTER
            .captures(input)
            .ok_or_else(|| invalid_input("expected registers A, B, C and a program"))?;
        let register = |i: usize| caps[i].parse::<u64>().map_err(invalid_input);
        let program = caps[4]
            .split(',')
            .map(|op| op.parse::<u8>().map_err(invalid_input))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Computer {
            a: register(1)?,
            b: register(2)?,
            c: register(3)?,
            program,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(computer: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(computer.run(computer.a)?.iter().join(","))
    }
}

impl PartSolver<2> for Solver {
    fn solve(computer: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if computer.program.is_empty() {
            return Err(SolveError::failed("empty program"));
        }
        // A holds three bits per digit
        if computer.program.len() > 21 {
            return Err(SolveError::failed("program too long for a 64-bit register"));
        }
        computer
            .find_quine(0, 0)?
            .map(|a| a.to_string())
            .ok_or_else(|| SolveError::failed("no value of A reproduces the program"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    #[test]
    fn test_part1_example() {
        let input = "Register A: 729\nRegister B: 0\nRegister C: 0\n\nProgram: 0,1,5,4,3,0\n";
        assert_eq!(solve::<Solver>(input, 1), "4,6,3,5,6,3,5,2,1,0");
    }

    #[test]
    fn test_part2_example() {
        let input = "Register A: 2024\nRegister B: 0\nRegister C: 0\n\nProgram: 0,3,5,4,3,0\n";
        assert_eq!(solve::<Solver>(input, 2), "117440");
    }

    #[test]
    fn test_small_programs() {
        let computer = |a, b, c, program: &[u8]| Computer {
            a,
            b,
            c,
            program: program.to_vec(),
        };
        assert_eq!(computer(10, 0, 0, &[5, 0, 5, 1, 5, 4]).run(10).unwrap(), vec![0, 1, 2]);
        assert_eq!(
            computer(2024, 0, 0, &[0, 1, 5, 4, 3, 0]).run(2024).unwrap(),
            vec![4, 2, 5, 6, 7, 7, 7, 7, 3, 1, 0]
        );
        // bst 6: B = C % 8
        let c = computer(0, 0, 9, &[2, 6, 5, 5]);
        assert_eq!(c.run(0).unwrap(), vec![1]);
    }

    #[test]
    fn test_infinite_loop_is_an_error() {
        let input = "Register A: 1\nRegister B: 0\nRegister C: 0\n\nProgram: 3,0\n";
        let mut computer = <Solver as AocParser>::parse(input).unwrap();
        assert!(<Solver as PartSolver<1>>::solve(&mut computer).is_err());
    }
}
