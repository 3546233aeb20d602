use std::collections::HashSet;

use aoc_solver::{AocParser, ParseError, PartSolver, SolveError};
use aoc_solver_macros::{AocSolver, AutoRegisterSolver};

use crate::utils::grid::{Dir, Grid, Point};
use crate::utils::parse::invalid_input;

#[derive(AocSolver, AutoRegisterSolver)]
#[aoc_solver(max_parts = 2)]
#[aoc(year = 2024, day = 15, tags = ["2024", "grid", "simulation"])]
pub struct Solver;

pub struct SharedData {
    warehouse: Grid,
    moves: Vec<Dir>,
}

impl AocParser for Solver {
    type SharedData<'a> = SharedData;

    fn parse<'a>(input: &'a str) -> Result<Self::SharedData<'a>, ParseError> {
        let input = input.replace("\r\n", "\n");
        let (map, moves) = input
            .split_once("\n\n")
            .ok_or_else(|| ParseError::MissingData("blank line between map and moves".into()))?;

        let warehouse = Grid::parse(map).map_err(invalid_input)?;
        if warehouse.bytes().iter().filter(|&&b| b == b'@').count() != 1 {
            return Err(invalid_input("expected exactly one robot '@'"));
        }
        let moves = moves
            .bytes()
            .filter(|b| !b.is_ascii_whitespace())
            .map(|b| {
                Dir::from_arrow(b).ok_or_else(|| invalid_input(format!("bad move {:?}", b as char)))
            })
            .collect::<Result<_, _>>()?;
        Ok(SharedData { warehouse, moves })
    }
}

/// Every tile doubled: boxes become `[]`, the robot gains a floor tile to its right
fn widen(grid: &Grid) -> Grid {
    let mut wide = Grid::filled(grid.width() * 2, grid.height(), b'.');
    for (p, b) in grid.positions() {
        let (left, right) = match b {
            b'O' => (b'[', b']'),
            b'@' => (b'@', b'.'),
            other => (other, other),
        };
        wide.set(Point::new(p.x * 2, p.y), left);
        wide.set(Point::new(p.x * 2 + 1, p.y), right);
    }
    wide
}

/// Push everything in front of the robot one step, or nothing if a wall is hit
fn try_move(grid: &mut Grid, robot: Point, dir: Dir) -> bool {
    let vertical = matches!(dir, Dir::Up | Dir::Down);
    let mut moving = vec![robot];
    let mut seen = HashSet::from([robot]);
    let mut i = 0;

    while let Some(&p) = moving.get(i) {
        i += 1;
        let next = p + dir;
        let mut push = |q: Point| {
            if seen.insert(q) {
                moving.push(q);
            }
        };
        match grid.get(next) {
            Some(b'#') | None => return false,
            Some(b'O') => push(next),
            Some(b'[') => {
                push(next);
                if vertical {
                    push(next + Dir::Right);
                }
            }
            Some(b']') => {
                push(next);
                if vertical {
                    push(next + Dir::Left);
                }
            }
            _ => {}
        }
    }

    for &p in moving.iter().rev() {
        if let Some(tile) = grid.get(p) {
            grid.set(p + dir, tile);
            grid.set(p, b'.');
        }
    }
    true
}

fn simulate(mut grid: Grid, moves: &[Dir]) -> Result<i32, SolveError> {
    let mut robot = grid
        .find(b'@')
        .ok_or_else(|| SolveError::failed("robot missing"))?;
    for &dir in moves {
        if try_move(&mut grid, robot, dir) {
            robot = robot + dir;
        }
    }
    Ok(grid
        .positions()
        .filter(|&(_, b)| b == b'O' || b == b'[')
        .map(|(p, _)| 100 * p.y + p.x)
        .sum())
}

impl PartSolver<1> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(simulate(shared.warehouse.clone(), &shared.moves)?.to_string())
    }
}

impl PartSolver<2> for Solver {
    fn solve(shared: &mut Self::SharedData<'_>) -> Result<String, SolveError> {
        Ok(simulate(widen(&shared.warehouse), &shared.moves)?.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::solve;

    const SMALL: &str = "\
########
#..O.O.#
##@.O..#
#...O..#
#.#.O..#
#...O..#
#......#
########

<^^>>>vv<v>>v<<
";

    const LARGE: &str = "\
##########
#..O..O.O#
#......O.#
#.OO..O.O#
#..O@..O.#
#O#..O...#
#O..O..O.#
#.OO.O.OO#
#....O...#
##########

<vv>^<v^>v>^vv^v>v<>v^v<v<^vv<<<^><<><>>v<vvv<>^v^>^<<<><<v<<<v^vv^v>^
vvv<<^>^v^^><<>>><>^<<><^vv^^<>vvv<>><^^v>^>vv<>v<<<<v<^v>^<^^>>>^<v<v
><>vv>v^v^<>><>>>><^^>vv>v<^^^>>v^v^<^^>v^^>v^<^v>v<>>v^v^<v>v^^<^^vv<
<<v<^>>^^^^>>>v^<>vvv^><v<<<>^^^vv^<vvv>^>v<^^^^v<>^>vvvv><>>v^<<^^^^^
^><^><>>><>^^<<^^v>>><^<v>^<vv>>v>>>^v><>^v><<<<v>>v<v<v>vvv>^<><<>^><
^>><>^v<><^vvv<^^<><v<<<<<><^v<<<><<<^^<v<^^^><^>>^<v^><<<^>>^v<v^v<v^
>^>>^v>vv>^<<^v<>><<><<v<<v><>v<^vv<<<>^^v^>^^>>><<^v>>v^v><^^>>^<>vv^
<><^^>^^^<><vvvvv^v<v<<>^v<v>v<<^><<><<><<<^^<<<^<<>><<><^^^>^^<>^>v<>
^^>vv<^v^v<vv>^<><v<^v>^^^>>>^^vvv^>vvv<>>>^<^>>>>>^<<^v>^vvv<>^<><<v>
v^^>>><<^^<>>^v^<v^vv<>v^<<>^<^v^v><^<<<><<^<v><v<>vv>>v><v^<vv<>v^<<^
";

    #[test]
    fn test_small_example() {
        assert_eq!(solve::<Solver>(SMALL, 1), "2028");
    }

    #[test]
    fn test_large_example() {
        assert_eq!(solve::<Solver>(LARGE, 1), "10092");
        assert_eq!(solve::<Solver>(LARGE, 2), "9021");
    }

    #[test]
    fn test_wide_box_pushed_up_as_a_unit() {
        let grid = Grid::parse("######\n#....#\n#.[].#\n#..@.#\n######\n").unwrap();
        let mut grid = grid;
        assert!(try_move(&mut grid, Point::new(3, 3), Dir::Up));
        assert_eq!(grid.get(Point::new(2, 1)), Some(b'['));
        assert_eq!(grid.get(Point::new(3, 1)), Some(b']'));
        assert!(!try_move(&mut grid, Point::new(3, 2), Dir::Up));
    }
}
