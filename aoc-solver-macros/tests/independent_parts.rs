use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver, SolverExt};

/// Borrows its lines straight from the input
#[derive(AocSolver)]
#[aoc_solver(max_parts = 2)]
struct TestSolver;

impl AocParser for TestSolver {
    type SharedData<'a> = Vec<&'a str>;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let lines: Vec<&str> = input.lines().map(str::trim).filter(|l| !l.is_empty()).collect();
        if lines.is_empty() {
            return Err(ParseError::MissingData("no lines".into()));
        }
        Ok(lines)
    }
}

impl PartSolver<1> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().map(|l| l.len()).sum::<usize>().to_string())
    }
}

impl PartSolver<2> for TestSolver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(shared.iter().copied().max().unwrap_or_default().to_string())
    }
}

#[test]
fn test_independent_parts_borrow_input() {
    let input = String::from("ab\ncde\nf\n");
    let shared = <TestSolver as AocParser>::parse(&input).unwrap();
    assert_eq!(shared, vec!["ab", "cde", "f"]);
}

#[test]
fn test_solver_trait_implemented() {
    let mut shared = <TestSolver as AocParser>::parse("ab\ncde\nf").unwrap();

    assert_eq!(<TestSolver as Solver>::PARTS, 2);
    assert_eq!(TestSolver::solve_part(&mut shared, 1).unwrap(), "6");
    assert_eq!(TestSolver::solve_part(&mut shared, 2).unwrap(), "f");
}

#[test]
fn test_unknown_part_not_implemented() {
    let mut shared = <TestSolver as AocParser>::parse("ab").unwrap();

    let result = TestSolver::solve_part(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartNotImplemented(3))));
}

#[test]
fn test_checked_range_rejects_part_above_max() {
    let mut shared = <TestSolver as AocParser>::parse("ab").unwrap();

    let result = TestSolver::solve_part_checked_range(&mut shared, 3);
    assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
}

#[test]
fn test_empty_input_is_parse_error() {
    assert!(matches!(
        <TestSolver as AocParser>::parse("\n\n"),
        Err(ParseError::MissingData(_))
    ));
}
