use std::cmp::Ordering;

use anyhow::{Context, anyhow};
use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::{invalid_input, lines_with};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 5, tags = ["2024", "sorting"])]
pub struct Solver;

const PAGES: usize = 100;

pub struct SharedData {
    /// `before[a * PAGES + b]` is set when page `a` must come before page `b`
    before: Vec<bool>,
    updates: Vec<Vec<u8>>,
}

impl SharedData {
    fn ordering(&self, a: u8, b: u8) -> Ordering {
        if self.before[a as usize * PAGES + b as usize] {
            Ordering::Less
        } else if self.before[b as usize * PAGES + a as usize] {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    fn is_ordered(&self, update: &[u8]) -> bool {
        update.is_sorted_by(|&a, &b| self.ordering(a, b) != Ordering::Greater)
    }
}

fn page(text: &str) -> anyhow::Result<u8> {
    let page: u8 = text.trim().parse().with_context(|| format!("bad page {:?}", text))?;
    if page as usize >= PAGES {
        return Err(anyhow!("page {} out of range", page));
    }
    Ok(page)
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (rules, updates) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line between rules and updates".into()))?;

        let mut before = vec![false; PAGES * PAGES];
        for (a, b) in lines_with(rules, |line| {
            let (a, b) = line
                .split_once('|')
                .ok_or_else(|| anyhow!("expected a|b, found {:?}", line))?;
            Ok((page(a)?, page(b)?))
        })? {
            before[a as usize * PAGES + b as usize] = true;
        }

        let updates = lines_with(updates, |line| line.split(',').map(page).collect())?;
        if updates.iter().any(|u: &Vec<u8>| u.is_empty()) {
            return Err(invalid_input("empty update"));
        }
        Ok(SharedData { before, updates })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .updates
            .iter()
            .filter(|u| shared.is_ordered(u))
            .map(|u| u[u.len() / 2] as u32)
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let total: u32 = shared
            .updates
            .iter()
            .filter(|u| !shared.is_ordered(u))
            .map(|u| {
                let mut u = u.clone();
                u.sort_by(|&a, &b| shared.ordering(a, b));
                u[u.len() / 2] as u32
            })
            .sum();
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    const EXAMPLE: &str = "\
47|53
97|13
97|61
97|47
75|29
61|13
75|53
29|13
97|29
53|29
61|53
97|53
61|29
47|13
75|47
97|75
47|61
75|61
47|29
75|13
53|13

75,47,61,53,29
97,61,53,29,13
75,29,13
75,97,47,61,53
61,13,29
97,13,75,29,47
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "143");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "123");
    }

    #[test]
    fn test_missing_separator() {
        assert!(matches!(
            <Solver as AocParser>::parse("47|53\n75,47\n"),
            Err(ParseError::MissingData(_))
        ));
    }
}
