use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::parse::lines_with;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 22, tags = ["2024", "simulation", "hashing"])]
pub struct Solver;

const STEPS: usize = 2000;
const PRUNE: u32 = (1 << 24) - 1;
/// Four price changes in -9..=9, packed base 19
const SEQUENCES: usize = 19 * 19 * 19 * 19;

fn next_secret(mut n: u32) -> u32 {
    n = (n ^ (n << 6)) & PRUNE;
    n = (n ^ (n >> 5)) & PRUNE;
    (n ^ (n << 11)) & PRUNE
}

/// Per-worker market state for the fold
struct Market {
    secret_sum: u64,
    bananas: Vec<u32>,
    /// Buyer stamp of the last time each sequence was sold on
    seen: Vec<u32>,
}

impl Market {
    fn new() -> Self {
        Self {
            secret_sum: 0,
            bananas: vec![0; SEQUENCES],
            seen: vec![0; SEQUENCES],
        }
    }

    /// Trade with one buyer; `stamp` must be unique and non-zero per buyer
    fn trade(mut self, stamp: u32, mut secret: u32) -> Self {
        let mut key = 0;
        let mut price = secret % 10;
        for step in 0..STEPS {
            secret = next_secret(secret);
            let next = secret % 10;
            key = (key * 19 + (9 + next - price) as usize) % SEQUENCES;
            price = next;
            if step >= 3 && self.seen[key] != stamp {
                self.seen[key] = stamp;
                self.bananas[key] += price;
            }
        }
        self.secret_sum += u64::from(secret);
        self
    }

    fn merge(mut self, other: Self) -> Self {
        self.secret_sum += other.secret_sum;
        for (a, b) in self.bananas.iter_mut().zip(other.bananas) {
            *a += b;
        }
        self
    }
}

pub struct SharedData {
    secrets: Vec<u32>,
    /// (sum of final secrets, best banana total)
    market: Option<(u64, u32)>,
}

impl SharedData {
    fn market(&mut self) -> (u64, u32) {
        let secrets = &self.secrets;
        *self.market.get_or_insert_with(|| {
            let market = secrets
                .par_iter()
                .enumerate()
                .fold(Market::new, |market, (i, &secret)| market.trade(i as u32 + 1, secret))
                .reduce(Market::new, Market::merge);
            let best = market.bananas.iter().copied().max().unwrap_or(0);
            (market.secret_sum, best)
        })
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let secrets = lines_with(input, |line| Ok(line.parse::<u32>()?))?;
        Ok(SharedData {
            secrets,
            market: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.market().0.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.market().1.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    #[test]
    fn test_secret_sequence() {
        let secrets: Vec<u32> = std::iter::successors(Some(123), |&n| Some(next_secret(n)))
            .skip(1)
            .take(10)
            .collect();
        assert_eq!(
            secrets,
            vec![
                15887950, 16495136, 527345, 704524, 1553684, 12683156, 11100544, 12249484, 7753432,
                5908254
            ]
        );
    }

    #[test]
    fn test_part1_example() {
        assert_eq!(solve::<Solver>("1\n10\n100\n2024\n", 1), "37327623");
    }

    #[test]
    fn test_part2_example() {
        assert_eq!(solve::<Solver>("1\n2\n3\n2024\n", 2), "23");
    }
}
