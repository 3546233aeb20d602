//! Plugin registration, tag filtering and timed solver instances
//!
//! Run with: cargo run -p aoc-solver --example plugin_system

use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, Solver,
    SolverInstance, SolverPlugin, SolverRegistryBuilder,
};

/// Word statistics over a borrowed input
#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 1, tags = ["easy", "words"])]
pub struct Words;

impl AocParser for Words {
    type SharedData<'a> = Vec<&'a str>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let words: Vec<_> = input.split_whitespace().collect();
        if words.is_empty() {
            return Err(ParseError::MissingData("no words".into()));
        }
        Ok(words)
    }
}

impl PartSolver<1> for Words {
    fn solve(words: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(words.len().to_string())
    }
}

impl PartSolver<2> for Words {
    fn solve(words: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let longest = words.iter().max_by_key(|w| w.len()).copied().unwrap_or_default();
        Ok(longest.to_string())
    }
}

/// Sum of integers, registered by hand
pub struct Sum;

impl AocParser for Sum {
    type SharedData<'a> = Vec<i64>;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        input
            .split_whitespace()
            .map(|n| n.parse().map_err(|_| ParseError::InvalidFormat(format!("not a number: {n}"))))
            .collect()
    }
}

impl Solver for Sum {
    const PARTS: u8 = 1;

    fn solve_part(shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        match part {
            1 => Ok(shared.iter().sum::<i64>().to_string()),
            _ => Err(SolveError::PartNotImplemented(part)),
        }
    }
}

aoc_solver::inventory::submit! {
    SolverPlugin {
        year: 2023,
        day: 2,
        solver: &Sum,
        tags: &["hard"],
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let input = "3 14 15 92 65";

    println!("--- All plugins ---");
    let registry = SolverRegistryBuilder::new().register_all_plugins()?.build();
    for info in registry.iter_info() {
        let mut solver = registry.create_solver(info.year, info.day, input)?;
        for part in 1..=info.parts {
            let result = solver.solve(part)?;
            println!(
                "{}/{:02} part {}: {} ({}µs)",
                info.year,
                info.day,
                part,
                result.answer,
                result.duration().num_microseconds().unwrap_or(0)
            );
        }
    }

    println!("\n--- Only 'easy' plugins ---");
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"easy"))?
        .build();
    println!("registered: {}", registry.len());
    match registry.create_solver(2023, 2, input) {
        Ok(_) => println!("2023/02 registered (unexpected)"),
        Err(e) => println!("2023/02 skipped: {e}"),
    }

    println!("\n--- Direct instance ---");
    let mut instance = SolverInstance::<Words>::new(2023, 1, "alpha beta gamma")?;
    println!("words parsed: {:?}", instance.shared());
    println!("longest: {}", aoc_solver::DynSolver::solve(&mut instance, 2)?.answer);

    Ok(())
}
