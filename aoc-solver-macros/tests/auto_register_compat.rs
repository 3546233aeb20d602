use aoc_solver::{
    AocParser, AocSolver, AutoRegisterSolver, ParseError, PartSolver, SolveError, SolverError,
    SolverRegistryBuilder,
};

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2023, day = 20, tags = ["test", "combined"])]
struct CombinedMacroSolver;

impl AocParser for CombinedMacroSolver {
    type SharedData<'a> = Vec<i32>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect()
    }
}

impl PartSolver<1> for CombinedMacroSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().sum::<i32>().to_string())
    }
}

impl PartSolver<2> for CombinedMacroSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().product::<i32>().to_string())
    }
}

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 1)]
#[aoc(year = 2023, day = 21)]
struct UntaggedSolver;

impl AocParser for UntaggedSolver {
    type SharedData<'a> = &'a str;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(input)
    }
}

impl PartSolver<1> for UntaggedSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.chars().rev().collect())
    }
}

#[test]
fn test_combined_solver_auto_registers() {
    let registry = SolverRegistryBuilder::new()
        .register_all_plugins()
        .expect("Failed to register plugins")
        .build();

    let mut solver = registry
        .create_solver(2023, 20, "5\n6\n7")
        .expect("Failed to create solver - was it registered?");

    assert_eq!(solver.parts(), 2);
    assert_eq!(solver.solve(1).unwrap().answer, "18");
    assert_eq!(solver.solve(2).unwrap().answer, "210");
}

#[test]
fn test_tag_filter_selects_plugins() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.tags.contains(&"combined"))
        .expect("Failed to register plugins")
        .build();

    assert!(registry.contains(2023, 20));
    assert!(!registry.contains(2023, 21));
    assert_eq!(registry.len(), 1);
}

#[test]
fn test_untagged_solver_borrows_input() {
    let registry = SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| plugin.year == 2023 && plugin.day == 21)
        .expect("Failed to register plugins")
        .build();

    let input = String::from("abc");
    let mut solver = registry.create_solver(2023, 21, &input).unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "cba");
    assert_eq!(registry.get_info(2023, 21).map(|i| i.parts), Some(1));
}

#[test]
fn test_duplicate_registration_rejected() {
    let result = SolverRegistryBuilder::new()
        .register_all_plugins()
        .and_then(|builder| builder.register_all_plugins());

    assert!(matches!(
        result,
        Err(aoc_solver::RegistrationError::DuplicateSolver(2023, _))
    ));
}

#[test]
fn test_manual_registration_and_errors() {
    let mut builder = SolverRegistryBuilder::new();
    aoc_solver::register_solver!(builder, CombinedMacroSolver, 2024, 5);
    let registry = builder.build();

    assert_eq!(
        registry.iter_info().map(|i| (i.year, i.day)).collect::<Vec<_>>(),
        vec![(2024, 5)]
    );
    assert!(matches!(
        registry.create_solver(2024, 6, ""),
        Err(SolverError::NotFound(2024, 6))
    ));
    assert!(matches!(
        registry.create_solver(2024, 5, "x"),
        Err(SolverError::ParseError(ParseError::InvalidFormat(_)))
    ));
    assert!(matches!(
        registry.create_solver(1999, 1, ""),
        Err(SolverError::InvalidYearDay(1999, 1))
    ));
}
