//! Helpers shared across puzzle days

pub mod grid;
pub mod parse;

/// Parse `input` and solve one part, panicking on failure
#[cfg(test)]
pub(crate) fn solve<S: aoc_solver::Solver>(input: &str, part: u8) -> String {
    use aoc_solver::SolverExt;

    let mut shared = S::parse(input).expect("example input should parse");
    S::solve_part_checked_range(&mut shared, part).expect("example should solve")
}
