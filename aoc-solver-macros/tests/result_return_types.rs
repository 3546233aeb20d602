use aoc_solver::{AocParser, AocSolver, ParseError, PartSolver, SolveError, Solver};

#[derive(Debug, Clone)]
struct SharedData {
    numbers: Vec<i32>,
    sum: Option<i32>,
}

#[derive(AocSolver)]
#[aoc_solver(max_parts = 4)]
struct TestResultReturns;

impl AocParser for TestResultReturns {
    type SharedData<'a> = SharedData;

    fn parse(input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        let numbers: Vec<i32> = input
            .lines()
            .map(|line| {
                line.trim()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidFormat("Expected integer".into()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SharedData { numbers, sum: None })
    }
}

// Sum, stored for part 4
impl PartSolver<1> for TestResultReturns {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let sum: i32 = shared.numbers.iter().sum();
        shared.sum = Some(sum);
        Ok(sum.to_string())
    }
}

impl PartSolver<2> for TestResultReturns {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        if shared.numbers.is_empty() {
            Err(SolveError::failed("Empty input"))
        } else {
            Ok(shared.numbers.iter().product::<i32>().to_string())
        }
    }
}

impl PartSolver<3> for TestResultReturns {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        shared
            .numbers
            .iter()
            .try_fold(0i32, |acc, &n| acc.checked_mul(10)?.checked_add(n))
            .map(|n| n.to_string())
            .ok_or_else(|| SolveError::failed("overflow"))
    }
}

// Fails unless part 1 ran first
impl PartSolver<4> for TestResultReturns {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        let prev_sum = shared
            .sum
            .ok_or_else(|| SolveError::failed("No previous data"))?;
        let product: i32 = shared.numbers.iter().product();
        Ok((prev_sum + product).to_string())
    }
}

fn shared(numbers: Vec<i32>) -> SharedData {
    SharedData { numbers, sum: None }
}

#[test]
fn test_string_return() {
    let mut data = shared(vec![1, 2, 3]);
    let result = <TestResultReturns as Solver>::solve_part(&mut data, 1).unwrap();
    assert_eq!(result, "6");
    assert_eq!(data.sum, Some(6));
}

#[test]
fn test_result_string_return_ok() {
    let mut data = shared(vec![2, 3, 4]);
    let result = <TestResultReturns as Solver>::solve_part(&mut data, 2).unwrap();
    assert_eq!(result, "24");
}

#[test]
fn test_result_string_return_err() {
    let mut data = shared(vec![]);
    let result = <TestResultReturns as Solver>::solve_part(&mut data, 2);
    match result {
        Err(SolveError::SolveFailed(e)) => assert_eq!(e.to_string(), "Empty input"),
        other => panic!("Expected SolveFailed, got {:?}", other),
    }
}

#[test]
fn test_checked_arithmetic_failure() {
    let mut data = shared(vec![9; 12]);
    let result = <TestResultReturns as Solver>::solve_part(&mut data, 3);
    assert!(matches!(result, Err(SolveError::SolveFailed(_))));

    let mut data = shared(vec![1, 2, 3]);
    assert_eq!(
        <TestResultReturns as Solver>::solve_part(&mut data, 3).unwrap(),
        "123"
    );
}

#[test]
fn test_part4_uses_part1_data() {
    let mut data = shared(vec![2, 3]);

    <TestResultReturns as Solver>::solve_part(&mut data, 1).unwrap();
    let result4 = <TestResultReturns as Solver>::solve_part(&mut data, 4).unwrap();
    assert_eq!(result4, "11");
}

#[test]
fn test_part4_without_part1_data() {
    let mut data = shared(vec![2, 3]);
    let result = <TestResultReturns as Solver>::solve_part(&mut data, 4);
    assert!(result.is_err());
}
