//! Property-based tests for solver part bounds validation

use aoc_solver::{
    AocParser, DynSolver, ParseError, SolveError, Solver, SolverExt, SolverInstance,
};
use proptest::prelude::*;

/// Test solver with configurable PARTS
struct TestSolver<const N: u8>;

impl<const N: u8> AocParser for TestSolver<N> {
    type SharedData<'a> = ();

    fn parse(_input: &str) -> Result<Self::SharedData<'_>, ParseError> {
        Ok(())
    }
}

impl<const N: u8> Solver for TestSolver<N> {
    const PARTS: u8 = N;

    fn solve_part(_shared: &mut Self::SharedData<'_>, part: u8) -> Result<String, SolveError> {
        Ok(format!("part{}", part))
    }
}

fn checked(max_parts: u8, part: u8) -> Result<String, SolveError> {
    match max_parts {
        1 => TestSolver::<1>::solve_part_checked_range(&mut (), part),
        2 => TestSolver::<2>::solve_part_checked_range(&mut (), part),
        _ => TestSolver::<3>::solve_part_checked_range(&mut (), part),
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Out-of-range parts are rejected with `PartOutOfRange(part)` for
    /// part = 0 or part > PARTS.
    #[test]
    fn prop_out_of_range_rejection(max_parts in 1u8..=3, part in 0u8..=255) {
        let result = checked(max_parts, part);

        if part == 0 || part > max_parts {
            match result {
                Err(SolveError::PartOutOfRange(p)) => prop_assert_eq!(p, part),
                other => prop_assert!(false, "Expected PartOutOfRange, got {:?}", other),
            }
        } else {
            prop_assert_eq!(result.unwrap(), format!("part{}", part));
        }
    }

    /// In-range parts behave exactly like a direct `solve_part` call.
    #[test]
    fn prop_valid_range_delegation(part in 1u8..=2) {
        let checked_result = TestSolver::<2>::solve_part_checked_range(&mut (), part);
        let direct_result = TestSolver::<2>::solve_part(&mut (), part);

        prop_assert_eq!(checked_result.unwrap(), direct_result.unwrap());
    }

    /// The type-erased instance applies the same bounds check.
    #[test]
    fn prop_instance_applies_bounds(part in 0u8..=8) {
        let mut instance = SolverInstance::<TestSolver<2>>::new(2024, 1, "").unwrap();
        let result = instance.solve(part);

        if (1..=2).contains(&part) {
            prop_assert_eq!(result.unwrap().answer, format!("part{}", part));
        } else {
            prop_assert!(matches!(result, Err(SolveError::PartOutOfRange(p)) if p == part));
        }
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn test_part_zero_rejected() {
        let result = TestSolver::<2>::solve_part_checked_range(&mut (), 0);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(0))));
    }

    #[test]
    fn test_part_exceeds_max_rejected() {
        let result = TestSolver::<2>::solve_part_checked_range(&mut (), 3);
        assert!(matches!(result, Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_valid_part_succeeds() {
        let result = TestSolver::<2>::solve_part_checked_range(&mut (), 1);
        assert_eq!(result.unwrap(), "part1");
    }

    #[test]
    fn test_instance_reports_metadata() {
        let instance = SolverInstance::<TestSolver<1>>::new(2024, 7, "").unwrap();
        assert_eq!(instance.year(), 2024);
        assert_eq!(instance.day(), 7);
        assert_eq!(instance.parts(), 1);
        assert!(instance.parse_duration() >= chrono::TimeDelta::zero());
    }

    #[test]
    fn test_solve_timing_is_ordered() {
        let mut instance = SolverInstance::<TestSolver<2>>::new(2024, 7, "").unwrap();
        let result = instance.solve(2).unwrap();
        assert_eq!(result.answer, "part2");
        assert!(result.timing.end >= result.timing.start);
        assert_eq!(result.duration(), result.timing.end - result.timing.start);
        assert!(matches!(instance.solve(3), Err(SolveError::PartOutOfRange(3))));
    }

    #[test]
    fn test_measure_returns_value() {
        let (value, timing) = aoc_solver::Timing::measure(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(timing.duration() >= chrono::TimeDelta::zero());
    }
}
