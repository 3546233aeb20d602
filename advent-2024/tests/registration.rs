use aoc_solver::SolverRegistryBuilder;

// Linking the crate brings its plugins into the inventory
use advent_2024 as _;

fn registry_with_tags(tags: &[&str]) -> aoc_solver::SolverRegistry {
    SolverRegistryBuilder::new()
        .register_solver_plugins(|plugin| tags.iter().all(|tag| plugin.tags.contains(tag)))
        .unwrap()
        .build()
}

#[test]
fn test_every_day_is_registered() {
    let registry = registry_with_tags(&[]);
    let days: Vec<_> = registry.iter_info().map(|info| (info.year, info.day)).collect();
    let expected: Vec<_> = (1..=25).map(|day| (2024, day)).collect();
    assert_eq!(days, expected);
}

#[test]
fn test_part_counts() {
    let registry = registry_with_tags(&[]);
    for info in registry.iter_info() {
        let expected = if info.day == 25 { 1 } else { 2 };
        assert_eq!(info.parts, expected, "day {}", info.day);
    }
}

#[test]
fn test_tag_filter_narrows_registry() {
    let registry = registry_with_tags(&["2024", "grid"]);
    assert!(!registry.is_empty());
    assert!(registry.len() < 25);
    assert!(registry.contains(2024, 6));
    assert!(!registry.contains(2024, 1));
}

#[test]
fn test_solve_through_registry() {
    let registry = registry_with_tags(&["2024"]);
    let mut solver = registry
        .create_solver(2024, 1, "3   4\n4   3\n2   5\n1   3\n3   9\n3   3\n")
        .unwrap();
    assert_eq!(solver.solve(1).unwrap().answer, "11");
    assert_eq!(solver.solve(2).unwrap().answer, "31");
    assert!(solver.solve(3).is_err());
}

#[test]
fn test_bad_input_is_a_parse_error() {
    let registry = registry_with_tags(&[]);
    let err = registry.create_solver(2024, 1, "1 x\n").err().unwrap();
    assert!(matches!(err, aoc_solver::SolverError::ParseError(_)));
}
