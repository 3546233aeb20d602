use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use rayon::prelude::*;

use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 19, tags = ["2024", "dp", "trie"])]
pub struct Solver;

/// Stripe colours in trie child order
const COLOURS: &[u8; 5] = b"wubrg";

fn colour(b: u8) -> Option<usize> {
    COLOURS.iter().position(|&c| c == b)
}

#[derive(Debug, Default, Clone, Copy)]
struct Node {
    children: [Option<usize>; 5],
    terminal: bool,
}

/// Prefix tree over the available towel patterns
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
}

impl Trie {
    fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
        }
    }

    fn insert(&mut self, pattern: &str) -> Result<(), ParseError> {
        let mut node = 0;
        for b in pattern.bytes() {
            let c = colour(b)
                .ok_or_else(|| invalid_input(format!("unknown stripe colour {:?}", b as char)))?;
            node = match self.nodes[node].children[c] {
                Some(next) => next,
                None => {
                    self.nodes.push(Node::default());
                    let next = self.nodes.len() - 1;
                    self.nodes[node].children[c] = Some(next);
                    next
                }
            };
        }
        self.nodes[node].terminal = true;
        Ok(())
    }

    /// Number of ways to lay out `design` from the patterns, repeats allowed
    fn arrangements(&self, design: &str) -> u64 {
        let design = design.as_bytes();
        let mut ways = vec![0u64; design.len() + 1];
        ways[0] = 1;
        for start in 0..design.len() {
            if ways[start] == 0 {
                continue;
            }
            let mut node = 0;
            for (end, &b) in design.iter().enumerate().skip(start) {
                let Some(next) = colour(b).and_then(|c| self.nodes[node].children[c]) else {
                    break;
                };
                node = next;
                if self.nodes[node].terminal {
                    ways[end + 1] += ways[start];
                }
            }
        }
        ways[design.len()]
    }
}

pub struct SharedData<'a> {
    trie: Trie,
    designs: Vec<&'a str>,
    arrangements: Option<Vec<u64>>,
}

impl SharedData<'_> {
    fn arrangements(&mut self) -> &[u64] {
        let (trie, designs) = (&self.trie, &self.designs);
        self.arrangements
            .get_or_insert_with(|| designs.par_iter().map(|d| trie.arrangements(d)).collect())
    }
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let mut lines = input.lines().map(str::trim);
        let patterns = lines
            .next()
            .filter(|l| !l.is_empty())
            .ok_or_else(|| ParseError::MissingData("towel patterns".into()))?;

        let mut trie = Trie::new();
        for pattern in patterns.split(',').map(str::trim).filter(|p| !p.is_empty()) {
            trie.insert(pattern)?;
        }
        let designs = lines.filter(|l| !l.is_empty()).collect();
        Ok(SharedData {
            trie,
            designs,
            arrangements: None,
        })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.arrangements().iter().filter(|&&n| n > 0).count().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.arrangements().iter().sum::<u64>().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    const EXAMPLE: &str = "\
r, wr, b, g, bwu, rb, gb, br

brwrr
bggr
gbbr
rrbgbr
ubwu
bwurrg
brgr
bbrgwb
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "6");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "16");
    }

    #[test]
    fn test_arrangements_per_design() {
        let shared = <Solver as AocParser>::parse(EXAMPLE).unwrap();
        let counts: Vec<u64> = shared.designs.iter().map(|d| shared.trie.arrangements(d)).collect();
        assert_eq!(counts, vec![2, 1, 4, 6, 0, 1, 2, 0]);
    }

    #[test]
    fn test_unknown_colour_rejected() {
        assert!(<Solver as AocParser>::parse("r, x\n\nrr\n").is_err());
    }
}
