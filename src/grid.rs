/// A cell on the board.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The cell `distance` steps away in `direction`. `None` stays put.
    pub fn step(self, direction: Direction, distance: i32) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx * distance, self.y + dy * distance)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    None,
    North,
    East,
    South,
    West,
}

impl Direction {
    pub fn value(self) -> u8 {
        match self {
            Direction::None => 0,
            Direction::North => 1,
            Direction::East => 2,
            Direction::South => 3,
            Direction::West => 4,
        }
    }

    /// North and South are odd, East and West (and None) are even.
    /// Two directions on the same axis always share a parity.
    pub fn parity(self) -> u8 {
        self.value() % 2
    }

    pub fn name(self) -> &'static str {
        match self {
            Direction::None => "None",
            Direction::North => "North",
            Direction::East => "East",
            Direction::South => "South",
            Direction::West => "West",
        }
    }

    fn delta(self) -> (i32, i32) {
        match self {
            Direction::None => (0, 0),
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }
}

/// Fixed-size grid. The outermost ring of cells is the wall.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Board {
    pub width: i32,
    pub height: i32,
}

impl Board {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Position {
        Position::new(self.width / 2, self.height / 2)
    }

    pub fn is_border(&self, pos: Position) -> bool {
        pos.x == 0 || pos.y == 0 || pos.x == self.width - 1 || pos.y == self.height - 1
    }

    pub fn is_interior(&self, pos: Position) -> bool {
        pos.x > 0 && pos.y > 0 && pos.x < self.width - 1 && pos.y < self.height - 1
    }

    /// Every border cell, top and bottom rows first, then the side columns.
    pub fn border_cells(&self) -> impl Iterator<Item = Position> + '_ {
        let rows = (0..self.width)
            .flat_map(move |x| [Position::new(x, 0), Position::new(x, self.height - 1)]);
        let cols = (0..self.height)
            .flat_map(move |y| [Position::new(0, y), Position::new(self.width - 1, y)]);
        rows.chain(cols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_axis_directions_share_parity() {
        assert_eq!(Direction::North.parity(), Direction::South.parity());
        assert_eq!(Direction::East.parity(), Direction::West.parity());
        assert_ne!(Direction::North.parity(), Direction::East.parity());
    }

    #[test]
    fn step_moves_one_cell() {
        let p = Position::new(12, 12);
        assert_eq!(p.step(Direction::North, 1), Position::new(12, 11));
        assert_eq!(p.step(Direction::South, 1), Position::new(12, 13));
        assert_eq!(p.step(Direction::East, 1), Position::new(13, 12));
        assert_eq!(p.step(Direction::West, 1), Position::new(11, 12));
        assert_eq!(p.step(Direction::None, 1), p);
    }

    #[test]
    fn border_ring() {
        let board = Board::new(25, 25);
        assert!(board.is_border(Position::new(0, 5)));
        assert!(board.is_border(Position::new(24, 5)));
        assert!(board.is_border(Position::new(5, 24)));
        assert!(!board.is_border(Position::new(1, 1)));
        assert!(board.is_interior(Position::new(23, 23)));
        assert!(!board.is_interior(Position::new(23, 24)));
        assert!(board.border_cells().all(|c| board.is_border(c)));
        assert_eq!(board.border_cells().count(), 2 * 25 + 2 * 25);
    }
}
