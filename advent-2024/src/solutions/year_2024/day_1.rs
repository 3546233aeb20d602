use anyhow::anyhow;
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::lines_with;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 1, tags = ["2024", "sorting"])]
pub struct Solver;

/// Both location lists, each sorted ascending
#[derive(Debug)]
pub struct SharedData {
    left: Vec<i64>,
    right: Vec<i64>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pairs = lines_with(input, |line| {
            let mut it = line.split_whitespace();
            match (it.next(), it.next(), it.next()) {
                (Some(a), Some(b), None) => Ok((a.parse::<i64>()?, b.parse::<i64>()?)),
                _ => Err(anyhow!("expected two columns, found {:?}", line)),
            }
        })?;

        let (mut left, mut right): (Vec<_>, Vec<_>) = pairs.into_iter().unzip();
        left.sort_unstable();
        right.sort_unstable();
        Ok(SharedData { left, right })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u64 = shared
            .left
            .iter()
            .zip(&shared.right)
            .map(|(a, b)| a.abs_diff(*b))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(similarity(&shared.left, &shared.right).to_string())
    }
}

/// Σ x · (occurrences of x in `right`) by walking both sorted lists once
fn similarity(left: &[i64], right: &[i64]) -> i64 {
    let mut j = 0;
    left.iter()
        .map(|&x| {
            while j < right.len() && right[j] < x {
                j += 1;
            }
            let count = right[j..].iter().take_while(|&&y| y == x).count();
            x * count as i64
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    const EXAMPLE: &str = "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "11");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "31");
    }

    #[test]
    fn test_rejects_single_column() {
        assert!(matches!(
            <Solver as AocParser>::parse("3   4\n5\n"),
            Err(ParseError::InvalidFormat(_))
        ));
    }
}
