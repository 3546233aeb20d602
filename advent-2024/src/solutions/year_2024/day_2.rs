use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::lines_with;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 2, tags = ["2024", "sequences"])]
pub struct Solver;

impl AocParser for Solver {
    type SharedData<'a> = Vec<Vec<i32>>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            line.split_whitespace()
                .map(|n| n.parse::<i32>().map_err(anyhow::Error::from))
                .collect()
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe(report.iter().copied()))
            .count();
        Ok(safe.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let safe = shared
            .iter()
            .filter(|report| is_safe_dampened(report))
            .count();
        Ok(safe.to_string())
    }
}

/// Strictly monotonic with every step between 1 and 3
fn is_safe(levels: impl Iterator<Item = i32>) -> bool {
    let mut direction = 0;
    levels.tuple_windows().all(|(a, b)| {
        let diff = b - a;
        if !(1..=3).contains(&diff.abs()) {
            return false;
        }
        if direction == 0 {
            direction = diff.signum();
        }
        diff.signum() == direction
    })
}

fn is_safe_dampened(report: &[i32]) -> bool {
    is_safe(report.iter().copied())
        || (0..report.len()).any(|skip| {
            is_safe(
                report
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, &v)| v),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    const EXAMPLE: &str = "\
7 6 4 2 1
1 2 7 8 9
9 7 6 2 1
1 3 2 4 5
8 6 4 4 1
1 3 6 7 9
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "2");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "4");
    }

    #[test]
    fn test_removing_first_level() {
        assert!(!is_safe([5, 1, 2, 3].into_iter()));
        assert!(is_safe_dampened(&[5, 1, 2, 3]));
    }
}
