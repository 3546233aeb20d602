use std::collections::HashMap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 11, tags = ["2024", "dp"])]
pub struct Solver;

/// Every stone value reachable from the input, numbered densely
pub struct SharedData {
    /// Indices that stone `i` turns into after one blink
    transitions: Vec<(usize, Option<usize>)>,
    /// Initial number of stones per index
    counts: Vec<u64>,
}

/// Stones one stone turns into, `None` once the value leaves `u64`
fn blink(value: u64) -> Option<(u64, Option<u64>)> {
    if value == 0 {
        return Some((1, None));
    }
    let digits = value.ilog10() + 1;
    if digits % 2 == 0 {
        let divisor = 10u64.pow(digits / 2);
        Some((value / divisor, Some(value % divisor)))
    } else {
        value.checked_mul(2024).map(|v| (v, None))
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let stones = input
            .split_whitespace()
            .map(|s| s.parse::<u64>().map_err(invalid_input))
            .collect::<Result<Vec<_>, _>>()?;
        if stones.is_empty() {
            return Err(ParseError::MissingData("no stones".into()));
        }

        let mut index: HashMap<u64, usize> = HashMap::new();
        let mut values = Vec::new();
        let mut intern = |v: u64, values: &mut Vec<u64>| {
            *index.entry(v).or_insert_with(|| {
                values.push(v);
                values.len() - 1
            })
        };

        let mut counts = Vec::new();
        for &s in &stones {
            let i = intern(s, &mut values);
            counts.resize(counts.len().max(i + 1), 0);
            counts[i] += 1;
        }

        // Worklist over newly discovered values until the table is closed
        let mut transitions = Vec::new();
        while transitions.len() < values.len() {
            let value = values[transitions.len()];
            let (a, b) = blink(value)
                .ok_or_else(|| invalid_input(format!("stone {value} grows past 64 bits")))?;
            let a = intern(a, &mut values);
            let b = b.map(|b| intern(b, &mut values));
            transitions.push((a, b));
        }
        counts.resize(values.len(), 0);

        Ok(SharedData {
            transitions,
            counts,
        })
    }
}

impl SharedData {
    fn stones_after(&self, blinks: usize) -> u64 {
        let mut counts = self.counts.clone();
        let mut next = vec![0; counts.len()];
        for _ in 0..blinks {
            next.fill(0);
            for (&(a, b), &count) in self.transitions.iter().zip(&counts) {
                next[a] += count;
                if let Some(b) = b {
                    next[b] += count;
                }
            }
            std::mem::swap(&mut counts, &mut next);
        }
        counts.iter().sum()
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.stones_after(25).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.stones_after(75).to_string())
    }
}
