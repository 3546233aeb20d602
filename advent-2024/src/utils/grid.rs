//! Byte grid with integer points and the four cardinal directions

use std::ops::{Add, AddAssign, Mul, Sub};

use anyhow::{anyhow, bail};

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance
    pub fn manhattan(self, other: Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    pub fn neighbours(self) -> impl Iterator<Item = Point> {
        Dir::ALL.into_iter().map(move |d| self + d)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<Dir> for Point {
    type Output = Point;

    fn add(self, rhs: Dir) -> Point {
        self + rhs.delta()
    }
}

impl AddAssign<Dir> for Point {
    fn add_assign(&mut self, rhs: Dir) {
        *self = *self + rhs;
    }
}

impl Sub for Point {
    type Output = Point;

    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    fn mul(self, rhs: i32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

/// Cardinal direction, clockwise from `Up`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Dir {
    Up = 0,
    Right = 1,
    Down = 2,
    Left = 3,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Up, Dir::Right, Dir::Down, Dir::Left];

    pub const fn turn_right(self) -> Dir {
        Dir::ALL[(self as usize + 1) % 4]
    }

    pub const fn turn_left(self) -> Dir {
        Dir::ALL[(self as usize + 3) % 4]
    }

    pub const fn reverse(self) -> Dir {
        Dir::ALL[(self as usize + 2) % 4]
    }

    pub const fn delta(self) -> Point {
        match self {
            Dir::Up => Point::new(0, -1),
            Dir::Right => Point::new(1, 0),
            Dir::Down => Point::new(0, 1),
            Dir::Left => Point::new(-1, 0),
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    /// Parse one of `^>v<`
    pub fn from_arrow(b: u8) -> Option<Dir> {
        match b {
            b'^' => Some(Dir::Up),
            b'>' => Some(Dir::Right),
            b'v' => Some(Dir::Down),
            b'<' => Some(Dir::Left),
            _ => None,
        }
    }
}

/// Rectangular grid of bytes stored row-major
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    cells: Vec<u8>,
    width: usize,
    height: usize,
}

impl Grid {
    /// Parse non-empty lines of equal length
    pub fn parse(input: &str) -> anyhow::Result<Self> {
        let mut cells = Vec::with_capacity(input.len());
        let mut width = None;
        let mut height = 0;

        for (line_idx, line) in input.lines().map(str::trim_end).enumerate() {
            if line.is_empty() {
                continue;
            }
            match width {
                None => width = Some(line.len()),
                Some(w) if w != line.len() => {
                    bail!("(line {}) expected {} columns, found {}", line_idx + 1, w, line.len())
                }
                Some(_) => {}
            }
            cells.extend_from_slice(line.as_bytes());
            height += 1;
        }

        let width = width.ok_or_else(|| anyhow!("empty grid"))?;
        Ok(Self {
            cells,
            width,
            height,
        })
    }

    pub fn filled(width: usize, height: usize, value: u8) -> Self {
        Self {
            cells: vec![value; width * height],
            width,
            height,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    /// Row-major index; caller guarantees `contains(p)`
    pub fn index(&self, p: Point) -> usize {
        p.y as usize * self.width + p.x as usize
    }

    pub fn point(&self, index: usize) -> Point {
        Point::new((index % self.width) as i32, (index / self.width) as i32)
    }

    pub fn get(&self, p: Point) -> Option<u8> {
        self.contains(p).then(|| self.cells[self.index(p)])
    }

    pub fn set(&mut self, p: Point, value: u8) {
        let i = self.index(p);
        self.cells[i] = value;
    }

    pub fn bytes(&self) -> &[u8] {
        &self.cells
    }

    pub fn find(&self, value: u8) -> Option<Point> {
        self.cells
            .iter()
            .position(|&b| b == value)
            .map(|i| self.point(i))
    }

    pub fn positions(&self) -> impl Iterator<Item = (Point, u8)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(i, &b)| (self.point(i), b))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turns_cycle() {
        for d in Dir::ALL {
            assert_eq!(d.turn_right().turn_left(), d);
            assert_eq!(d.turn_right().turn_right(), d.reverse());
            assert_eq!(d.delta() + d.reverse().delta(), Point::default());
        }
        assert_eq!(Dir::Left.turn_right(), Dir::Up);
    }

    #[test]
    fn test_grid_parse_and_lookup() {
        let grid = Grid::parse("ab.\n.#c\n").unwrap();
        assert_eq!((grid.width(), grid.height()), (3, 2));
        assert_eq!(grid.get(Point::new(2, 1)), Some(b'c'));
        assert_eq!(grid.get(Point::new(3, 0)), None);
        assert_eq!(grid.get(Point::new(0, -1)), None);
        assert_eq!(grid.find(b'#'), Some(Point::new(1, 1)));
        assert_eq!(grid.point(grid.index(Point::new(1, 1))), Point::new(1, 1));
    }

    #[test]
    fn test_grid_rejects_ragged_rows() {
        assert!(Grid::parse("abc\nab").is_err());
        assert!(Grid::parse("\n\n").is_err());
    }
}
