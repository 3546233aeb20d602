use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::parse::lines_with;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 7, tags = ["2024", "search"])]
pub struct Solver;

#[derive(Debug)]
pub struct Equation {
    target: u64,
    operands: Vec<u64>,
}

pub struct SharedData {
    equations: Vec<Equation>,
    /// Calibration totals with (`+`, `*`) and with (`+`, `*`, `||`)
    totals: Option<(u64, u64)>,
}

impl SharedData {
    fn totals(&mut self) -> (u64, u64) {
        let equations = &self.equations;
        *self.totals.get_or_insert_with(|| {
            equations
                .par_iter()
                .map(|eq| {
                    if can_reach(eq.target, &eq.operands, false) {
                        (eq.target, eq.target)
                    } else if can_reach(eq.target, &eq.operands, true) {
                        (0, eq.target)
                    } else {
                        (0, 0)
                    }
                })
                .reduce(|| (0, 0), |a, b| (a.0 + b.0, a.1 + b.1))
        })
    }
}

/// Work backwards from the target, undoing the last operator at each step
fn can_reach(target: u64, operands: &[u64], concat: bool) -> bool {
    let Some((&last, rest)) = operands.split_last() else {
        return false;
    };
    if rest.is_empty() {
        return target == last;
    }
    if target >= last && can_reach(target - last, rest, concat) {
        return true;
    }
    if last != 0 && target % last == 0 && can_reach(target / last, rest, concat) {
        return true;
    }
    if concat {
        let mut magnitude = 10;
        while magnitude <= last {
            magnitude *= 10;
        }
        if target % magnitude == last && can_reach(target / magnitude, rest, concat) {
            return true;
        }
    }
    false
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let equations = lines_with(input, |line| {
            let (target, operands) = line
                .split_once(':')
                .ok_or_else(|| anyhow!("expected 'target: operands', found {:?}", line))?;
            let operands = operands
                .split_whitespace()
                .map(str::parse)
                .collect::<Result<Vec<u64>, _>>()?;
            if operands.is_empty() {
                return Err(anyhow!("no operands in {:?}", line));
            }
            Ok(Equation {
                target: target.trim().parse()?,
                operands,
            })
        })?;
        Ok(SharedData {
            equations,
            totals: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.totals().0.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.totals().1.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    const EXAMPLE: &str = "\
190: 10 19
3267: 81 40 27
83: 17 5
156: 15 6
7290: 6 8 6 15
161011: 16 10 13
192: 17 8 14
21037: 9 7 18 13
292: 11 6 16 20
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "3749");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "11387");
    }

    #[test]
    fn test_concatenation() {
        assert!(can_reach(156, &[15, 6], true));
        assert!(!can_reach(156, &[15, 6], false));
        assert!(can_reach(7290, &[6, 8, 6, 15], true));
    }
}
