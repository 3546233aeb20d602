use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;

use crate::utils::parse::lines_with;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 23, tags = ["2024", "graph"])]
pub struct Solver;

/// Two lowercase letters
const NAMES: usize = 26 * 26;
const WORDS: usize = NAMES.div_ceil(64);

fn computer_id(name: &str) -> anyhow::Result<usize> {
    match name.as_bytes() {
        &[a @ b'a'..=b'z', b @ b'a'..=b'z'] => Ok((a - b'a') as usize * 26 + (b - b'a') as usize),
        _ => anyhow::bail!("computer names are two lowercase letters, found {:?}", name),
    }
}

fn computer_name(id: usize) -> String {
    [b'a' + (id / 26) as u8, b'a' + (id % 26) as u8]
        .iter()
        .map(|&b| b as char)
        .collect()
}

/// Bitset over every possible computer name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Computers([u64; WORDS]);

impl Computers {
    const EMPTY: Self = Self([0; WORDS]);

    fn insert(&mut self, id: usize) {
        self.0[id / 64] |= 1 << (id % 64);
    }

    fn remove(&mut self, id: usize) {
        self.0[id / 64] &= !(1 << (id % 64));
    }

    fn contains(&self, id: usize) -> bool {
        self.0[id / 64] & (1 << (id % 64)) != 0
    }

    fn is_empty(&self) -> bool {
        self.0.iter().all(|&w| w == 0)
    }

    fn len(&self) -> u32 {
        self.0.iter().map(|w| w.count_ones()).sum()
    }

    fn zip_with(&self, other: &Self, f: impl Fn(u64, u64) -> u64) -> Self {
        Self(std::array::from_fn(|i| f(self.0[i], other.0[i])))
    }

    fn and(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a & b)
    }

    fn or(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a | b)
    }

    fn without(&self, other: &Self) -> Self {
        self.zip_with(other, |a, b| a & !b)
    }

    fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().enumerate().flat_map(|(i, &word)| {
            let mut word = word;
            std::iter::from_fn(move || {
                (word != 0).then(|| {
                    let bit = word.trailing_zeros() as usize;
                    word &= word - 1;
                    i * 64 + bit
                })
            })
        })
    }
}

pub struct Network {
    links: Vec<(usize, usize)>,
    neighbours: Vec<Computers>,
}

impl Network {
    fn triangles_with_t(&self) -> usize {
        let chief = |id: usize| id / 26 == (b't' - b'a') as usize;
        self.links
            .iter()
            .map(|&(a, b)| {
                let (a, b) = (a.min(b), a.max(b));
                self.neighbours[a]
                    .and(&self.neighbours[b])
                    .iter()
                    .filter(|&c| c > b && (chief(a) || chief(b) || chief(c)))
                    .count()
            })
            .sum()
    }

    /// Bron–Kerbosch with pivoting, keeping the largest clique seen
    fn largest_clique(
        &self,
        clique: &mut Vec<usize>,
        mut candidates: Computers,
        mut excluded: Computers,
        best: &mut Vec<usize>,
    ) {
        if candidates.is_empty() {
            if excluded.is_empty() && clique.len() > best.len() {
                best.clone_from(clique);
            }
            return;
        }
        let pivot = candidates
            .or(&excluded)
            .iter()
            .max_by_key(|&u| candidates.and(&self.neighbours[u]).len());
        let Some(pivot) = pivot else {
            return;
        };
        for v in candidates.without(&self.neighbours[pivot]).iter() {
            let links = &self.neighbours[v];
            clique.push(v);
            self.largest_clique(clique, candidates.and(links), excluded.and(links), best);
            clique.pop();
            candidates.remove(v);
            excluded.insert(v);
        }
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Network;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let pairs = lines_with(input, |line| {
            let (a, b) = line
                .split_once('-')
                .ok_or_else(|| anyhow::anyhow!("expected 'aa-bb', found {:?}", line))?;
            Ok((computer_id(a)?, computer_id(b)?))
        })?;
        let mut neighbours = vec![Computers::EMPTY; NAMES];
        let mut links = Vec::with_capacity(pairs.len());
        for (a, b) in pairs {
            if a == b || neighbours[a].contains(b) {
                continue;
            }
            neighbours[a].insert(b);
            neighbours[b].insert(a);
            links.push((a, b));
        }
        Ok(Network { links, neighbours })
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.triangles_with_t().to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let mut all = Computers::EMPTY;
        for &(a, b) in &shared.links {
            all.insert(a);
            all.insert(b);
        }
        let mut best = Vec::new();
        shared.largest_clique(&mut Vec::new(), all, Computers::EMPTY, &mut best);
        Ok(best.into_iter().sorted().map(computer_name).join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    const EXAMPLE: &str = "\
kh-tc
qp-kh
de-cg
ka-co
yn-aq
qp-ub
cg-tb
vc-aq
tb-ka
wh-tc
yn-cg
kh-ub
ta-co
de-co
tc-td
tb-wq
wh-td
ta-ka
td-qp
aq-cg
wq-ub
ub-vc
de-ta
wq-aq
wq-vc
wh-yn
ka-de
kh-ta
co-tc
wh-qp
tb-vc
td-yn
";

    #[test]
    fn test_example() {
        assert_eq!(solve::<Solver>(EXAMPLE, 1), "7");
        assert_eq!(solve::<Solver>(EXAMPLE, 2), "co,de,ka,ta");
    }

    #[test]
    fn test_repeated_link_counted_once() {
        let input = "ta-tb\ntb-tc\ntc-ta\ntb-ta\n";
        assert_eq!(solve::<Solver>(input, 1), "1");
        assert_eq!(solve::<Solver>(input, 2), "ta,tb,tc");
    }

    #[test]
    fn test_names_round_trip() {
        let id = computer_id("tc").unwrap();
        assert_eq!(computer_name(id), "tc");
        assert!(computer_id("t").is_err());
        assert!(computer_id("TC").is_err());
    }

    #[test]
    fn test_bitset() {
        let mut set = Computers::EMPTY;
        set.insert(3);
        set.insert(675);
        assert!(set.contains(675));
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 675]);
        set.remove(3);
        assert_eq!(set.len(), 1);
    }
}
