use std::cmp::Reverse;
use std::collections::BinaryHeap;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 9, tags = ["2024", "simulation"])]
pub struct Solver;

impl AocParser for Solver {
    /// Alternating file and free-span lengths
    type SharedData<'a> = Vec<u8>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .trim()
            .bytes()
            .map(|b| match b {
                b'0'..=b'9' => Ok(b - b'0'),
                _ => Err(invalid_input(format!("unexpected {:?} in disk map", b as char))),
            })
            .collect()
    }
}

/// Checksum contribution of `size` blocks of file `id` starting at `start`
fn checksum(id: usize, start: usize, size: usize) -> usize {
    id * (start * size + size * size.saturating_sub(1) / 2)
}

impl PartSolver<1> for Solver {
    fn solve(disk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut blocks: Vec<Option<usize>> = disk
            .iter()
            .enumerate()
            .flat_map(|(i, &len)| {
                let id = (i % 2 == 0).then_some(i / 2);
                std::iter::repeat_n(id, len as usize)
            })
            .collect();

        let (mut left, mut right) = (0, blocks.len());
        while left < right {
            if blocks[left].is_some() {
                left += 1;
            } else if blocks[right - 1].is_none() {
                right -= 1;
            } else {
                blocks.swap(left, right - 1);
                left += 1;
                right -= 1;
            }
        }

        let total: usize = blocks
            .iter()
            .enumerate()
            .map_while(|(pos, id)| id.map(|id| id * pos))
            .sum();
        Ok(total.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(disk: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        // free[len] holds the start of every free span of exactly `len` blocks
        let mut free: Vec<BinaryHeap<Reverse<usize>>> = vec![BinaryHeap::new(); 10];
        let mut files = Vec::with_capacity(disk.len() / 2 + 1);
        let mut pos = 0;
        for (i, &len) in disk.iter().enumerate() {
            let len = len as usize;
            if i % 2 == 0 {
                files.push((pos, len));
            } else if len > 0 {
                free[len].push(Reverse(pos));
            }
            pos += len;
        }

        let mut total = 0;
        for (id, &(start, size)) in files.iter().enumerate().rev() {
            let best = (size.max(1)..10)
                .filter_map(|len| free[len].peek().map(|&Reverse(s)| (s, len)))
                .filter(|&(s, _)| s < start)
                .min();

            let start = match best {
                Some((span, len)) if size > 0 => {
                    free[len].pop();
                    if len > size {
                        free[len - size].push(Reverse(span + size));
                    }
                    span
                }
                _ => start,
            };
            total += checksum(id, start, size);
        }
        Ok(total.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    const EXAMPLE: &str = "2333133121414131402\n";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "1928");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "2858");
    }

    #[test]
    fn test_small_map() {
        // 0..111....22222 compacts to 022111222
        assert_eq!(solve::<Solver>("12345", 1), "60");
    }

    #[test]
    fn test_checksum_run() {
        assert_eq!(checksum(3, 4, 3), 3 * (4 + 5 + 6));
        assert_eq!(checksum(7, 2, 0), 0);
    }
}
