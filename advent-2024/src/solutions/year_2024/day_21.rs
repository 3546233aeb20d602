use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::Point;
use crate::utils::parse::lines_with;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 21, tags = ["2024", "dp"])]
pub struct Solver;

const SHORT_CHAIN: usize = 2;
const LONG_CHAIN: usize = 25;

struct Keypad {
    keys: &'static [(u8, Point)],
    gap: Point,
}

impl Keypad {
    fn position(&self, key: u8) -> Option<Point> {
        self.keys.iter().find(|&&(k, _)| k == key).map(|&(_, p)| p)
    }

    /// Direction presses (ending in `A`) moving straight from `from` to `to`,
    /// horizontal-first and vertical-first, skipping any that cross the gap
    fn routes(&self, from: Point, to: Point) -> Vec<Vec<u8>> {
        let d = to - from;
        let horizontal = vec![if d.x < 0 { b'<' } else { b'>' }; d.x.unsigned_abs() as usize];
        let vertical = vec![if d.y < 0 { b'^' } else { b'v' }; d.y.unsigned_abs() as usize];

        let mut routes = Vec::with_capacity(2);
        if Point::new(to.x, from.y) != self.gap {
            routes.push([&horizontal[..], &vertical[..], &b"A"[..]].concat());
        }
        if Point::new(from.x, to.y) != self.gap {
            let route = [&vertical[..], &horizontal[..], &b"A"[..]].concat();
            if !routes.contains(&route) {
                routes.push(route);
            }
        }
        routes
    }
}

const NUMERIC: Keypad = Keypad {
    keys: &[
        (b'7', Point::new(0, 0)),
        (b'8', Point::new(1, 0)),
        (b'9', Point::new(2, 0)),
        (b'4', Point::new(0, 1)),
        (b'5', Point::new(1, 1)),
        (b'6', Point::new(2, 1)),
        (b'1', Point::new(0, 2)),
        (b'2', Point::new(1, 2)),
        (b'3', Point::new(2, 2)),
        (b'0', Point::new(1, 3)),
        (b'A', Point::new(2, 3)),
    ],
    gap: Point::new(0, 3),
};

const DIRECTIONAL: Keypad = Keypad {
    keys: &[
        (b'^', Point::new(1, 0)),
        (b'A', Point::new(2, 0)),
        (b'<', Point::new(0, 1)),
        (b'v', Point::new(1, 1)),
        (b'>', Point::new(2, 1)),
    ],
    gap: Point::new(0, 0),
};

/// Position of `A` on the door keypad
const DOOR_START: Point = Point::new(2, 3);

/// Presses needed at the operator's keypad to move between two directional
/// keys and press the second, indexed by position in `DIRECTIONAL.keys`
type CostTable = [[u64; 5]; 5];

fn directional_index(key: u8) -> usize {
    DIRECTIONAL.keys.iter().position(|&(k, _)| k == key).unwrap_or(0)
}

/// Cost of typing `sequence` on a directional keypad, starting from `A`
fn sequence_cost(sequence: &[u8], costs: &CostTable) -> u64 {
    let mut from = directional_index(b'A');
    sequence
        .iter()
        .map(|&key| {
            let to = directional_index(key);
            let cost = costs[from][to];
            from = to;
            cost
        })
        .sum()
}

fn cheapest(pad: &Keypad, from: Point, to: Point, costs: &CostTable) -> u64 {
    pad.routes(from, to)
        .iter()
        .map(|route| sequence_cost(route, costs))
        .min()
        .unwrap_or(u64::MAX)
}

/// Pair costs after `robots` directional keypads between the operator and the door
fn chain_costs(robots: usize) -> CostTable {
    let mut costs = [[1; 5]; 5];
    for _ in 0..robots {
        let mut next = [[0; 5]; 5];
        for (i, &(_, from)) in DIRECTIONAL.keys.iter().enumerate() {
            for (j, &(_, to)) in DIRECTIONAL.keys.iter().enumerate() {
                next[i][j] = cheapest(&DIRECTIONAL, from, to, &costs);
            }
        }
        costs = next;
    }
    costs
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Code {
    keys: Vec<Point>,
    value: u64,
}

impl Code {
    fn presses(&self, costs: &CostTable) -> u64 {
        let mut from = DOOR_START;
        self.keys
            .iter()
            .map(|&to| {
                let cost = cheapest(&NUMERIC, from, to, costs);
                from = to;
                cost
            })
            .sum()
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Vec<Code>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        lines_with(input, |line| {
            let keys = line
                .bytes()
                .map(|b| {
                    NUMERIC
                        .position(b)
                        .ok_or_else(|| anyhow::anyhow!("{:?} is not on the door keypad", b as char))
                })
                .collect::<anyhow::Result<_>>()?;
            let digits: String = line.chars().filter(char::is_ascii_digit).collect();
            let value = if digits.is_empty() { 0 } else { digits.parse()? };
            Ok(Code { keys, value })
        })
    }
}

fn total_complexity(codes: &[Code], robots: usize) -> u64 {
    let costs = chain_costs(robots);
    codes.iter().map(|code| code.presses(&costs) * code.value).sum()
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_complexity(shared, SHORT_CHAIN).to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(total_complexity(shared, LONG_CHAIN).to_string())
    }
}
