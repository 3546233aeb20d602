use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::LazyLock;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};
use itertools::Itertools;
use regex::{Captures, Regex};

use crate::utils::parse::{invalid_input, lines_with};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 24, tags = ["2024", "circuit"])]
pub struct Solver;

static WIRE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+): ([01])$").expect("wire regex"));
static GATE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\w+) (AND|OR|XOR) (\w+) -> (\w+)$").expect("gate regex"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    And,
    Or,
    Xor,
}

impl Op {
    fn apply(self, a: bool, b: bool) -> bool {
        match self {
            Op::And => a & b,
            Op::Or => a | b,
            Op::Xor => a ^ b,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gate<'a> {
    op: Op,
    lhs: &'a str,
    rhs: &'a str,
}

pub struct Circuit<'a> {
    inputs: HashMap<&'a str, bool>,
    /// Gates keyed by the wire they drive
    gates: HashMap<&'a str, Gate<'a>>,
}

fn group<'h>(caps: &Captures<'h>, i: usize) -> &'h str {
    caps.get(i).map_or("", |m| m.as_str())
}

/// Wires named after the adder's inputs or outputs
fn is_io(wire: &str) -> bool {
    wire.starts_with(['x', 'y', 'z'])
}

impl<'a> Circuit<'a> {
    fn value(
        &self,
        wire: &'a str,
        known: &mut HashMap<&'a str, bool>,
        visiting: &mut HashSet<&'a str>,
    ) -> Result<bool, SolveError> {
        if let Some(&v) = known.get(wire).or_else(|| self.inputs.get(wire)) {
            return Ok(v);
        }
        let gate = self
            .gates
            .get(wire)
            .ok_or_else(|| SolveError::failed(format!("wire {wire} has no driver")))?;
        if !visiting.insert(wire) {
            return Err(SolveError::failed(format!("wire {wire} feeds back into itself")));
        }
        let v = gate.op.apply(
            self.value(gate.lhs, known, visiting)?,
            self.value(gate.rhs, known, visiting)?,
        );
        visiting.remove(wire);
        known.insert(wire, v);
        Ok(v)
    }

    /// The number formed by `z00`, `z01`, ... up to the first missing `z` wire
    fn output(&self) -> Result<u64, SolveError> {
        let mut known = HashMap::new();
        let mut visiting = HashSet::new();
        let mut result = 0;
        for bit in 0..u64::BITS {
            let name = format!("z{bit:02}");
            let Some(wire) = self
                .gates
                .get_key_value(name.as_str())
                .map(|(&w, _)| w)
                .or_else(|| self.inputs.get_key_value(name.as_str()).map(|(&w, _)| w))
            else {
                break;
            };
            if self.value(wire, &mut known, &mut visiting)? {
                result |= 1 << bit;
            }
        }
        Ok(result)
    }

    /// Gate outputs breaking the ripple-carry adder shape
    ///
    /// Each bit should be `x XOR y` feeding a `XOR` onto `z` and an `AND`,
    /// with the two `AND`s of a bit combined by an `OR` into the next carry.
    fn miswired(&self) -> BTreeSet<&'a str> {
        let mut consumers: HashMap<&str, Vec<Op>> = HashMap::new();
        for gate in self.gates.values() {
            consumers.entry(gate.lhs).or_default().push(gate.op);
            consumers.entry(gate.rhs).or_default().push(gate.op);
        }
        let feeds = |wire: &str, f: fn(Op) -> bool| {
            consumers
                .get(wire)
                .is_some_and(|ops| ops.iter().any(|&op| f(op)))
        };
        let top_z = self.gates.keys().filter(|w| w.starts_with('z')).max().copied();

        let mut wrong = BTreeSet::new();
        for (&out, gate) in &self.gates {
            let broken = match gate.op {
                Op::Xor if !is_io(out) && !is_io(gate.lhs) && !is_io(gate.rhs) => true,
                Op::Xor => feeds(out, |op| op == Op::Or),
                _ if out.starts_with('z') && Some(out) != top_z => true,
                Op::And if gate.lhs != "x00" && gate.rhs != "x00" => feeds(out, |op| op != Op::Or),
                _ => false,
            };
            if broken {
                wrong.insert(out);
            }
        }
        wrong
    }
}

impl AocParser for Solver {
    type SharedData<'a> = Circuit<'a>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let (wires, gates) = input
            .split_once("\n\n")
            .or_else(|| input.split_once("\r\n\r\n"))
            .ok_or_else(|| ParseError::MissingData("blank line between wires and gates".into()))?;

        let inputs = lines_with(wires, |line| {
            let caps = WIRE
                .captures(line)
                .ok_or_else(|| anyhow::anyhow!("expected 'name: 0|1', found {:?}", line))?;
            Ok((group(&caps, 1), group(&caps, 2) == "1"))
        })?
        .into_iter()
        .collect();

        let mut circuit = Circuit {
            inputs,
            gates: HashMap::new(),
        };
        for (out, gate) in lines_with(gates, |line| {
            let caps = GATE
                .captures(line)
                .ok_or_else(|| anyhow::anyhow!("expected 'a OP b -> c', found {:?}", line))?;
            let op = match group(&caps, 2) {
                "AND" => Op::And,
                "OR" => Op::Or,
                _ => Op::Xor,
            };
            let gate = Gate {
                op,
                lhs: group(&caps, 1),
                rhs: group(&caps, 3),
            };
            Ok((group(&caps, 4), gate))
        })? {
            if circuit.gates.insert(out, gate).is_some() {
                return Err(invalid_input(format!("wire {out} is driven twice")));
            }
        }
        Ok(circuit)
    }
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.output()?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.miswired().into_iter().join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    const SMALL: &str = "\
x00: 1
x01: 1
x02: 1
y00: 0
y01: 1
y02: 0

x00 AND y00 -> z00
x01 XOR y01 -> z01
x02 OR y02 -> z02
";

    const LARGE: &str = "\
x00: 1
x01: 0
x02: 1
x03: 1
x04: 0
y00: 1
y01: 1
y02: 1
y03: 1
y04: 1

ntg XOR fgs -> mjb
y02 OR x01 -> tnw
kwq OR kpj -> z05
x00 OR x03 -> fst
tgd XOR rvg -> z01
vdt OR tnw -> bfw
bfw AND frj -> z10
ffh OR nrd -> bqk
y00 AND y03 -> djm
y03 OR y00 -> psh
bqk OR frj -> z08
tnw OR fst -> frj
gnj AND tgd -> z11
bfw XOR mjb -> z00
x03 OR x00 -> vdt
gnj AND wpb -> z02
x04 AND y00 -> kjc
djm OR pbm -> qhw
nrd AND vdt -> hwm
kjc AND fst -> rvg
y04 OR y02 -> fgs
y01 AND x02 -> pbm
ntg OR kjc -> kwq
psh XOR fgs -> tgd
qhw XOR tgd -> z09
pbm OR djm -> kpj
x03 XOR y03 -> ffh
x00 XOR y04 -> ntg
bfw OR bqk -> z06
nrd XOR fgs -> wpb
frj XOR qhw -> z04
bqk OR frj -> z07
y03 OR x01 -> nrd
hwm AND bqk -> z03
tgd XOR rvg -> z12
tnw OR pbm -> gnj
";

    const ADDER: &str = "\
x00: 1
x01: 1
y00: 1
y01: 0

x00 XOR y00 -> z00
x00 AND y00 -> c00
x01 XOR y01 -> s01
s01 XOR c00 -> z01
x01 AND y01 -> a01
s01 AND c00 -> b01
a01 OR b01 -> z02
";

    #[test]
    fn test_examples() {
        assert_eq!(solve::<Solver>(SMALL, 1), "4");
        assert_eq!(solve::<Solver>(LARGE, 1), "2024");
    }

    #[test]
    fn test_adder_adds() {
        // 3 + 1
        assert_eq!(solve::<Solver>(ADDER, 1), "4");
    }

    #[test]
    fn test_correct_adder_has_no_swaps() {
        assert_eq!(solve::<Solver>(ADDER, 2), "");
    }

    #[test]
    fn test_swapped_outputs_reported() {
        let swapped = ADDER
            .replace("s01 XOR c00 -> z01", "s01 XOR c00 -> tmp")
            .replace("x01 AND y01 -> a01", "x01 AND y01 -> z01")
            .replace("s01 XOR c00 -> tmp", "s01 XOR c00 -> a01");
        assert_eq!(solve::<Solver>(&swapped, 2), "a01,z01");
    }

    #[test]
    fn test_wire_driven_twice() {
        let input = "x00: 1\n\nx00 AND x00 -> z00\nx00 OR x00 -> z00\n";
        assert!(<Solver as AocParser>::parse(input).is_err());
    }

    #[test]
    fn test_output_stops_at_missing_z_wire() {
        let input = "x00: 1\ny00: 0\n\nx00 OR y00 -> z00\nx00 AND x00 -> z02\n";
        assert_eq!(solve::<Solver>(input, 1), "1");
    }
}
