use super::action::Direction;
use super::rng::RandomSource;

/// A cell on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move cell by delta, without wrapping
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move cell one step in a direction, without wrapping
    pub fn moved_in_direction(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// Fixed-size toroidal board geometry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    width: usize,
    height: usize,
}

impl Grid {
    /// Both dimensions must be non-zero; `GameConfig::validate` guarantees it.
    pub fn new(width: usize, height: usize) -> Self {
        debug_assert!(width > 0 && height > 0, "grid dimensions must be non-zero");
        Self { width, height }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of cells on the board
    pub fn area(&self) -> usize {
        self.width * self.height
    }

    /// Center cell, where a fresh snake spawns
    pub fn center(&self) -> Cell {
        Cell::new((self.width / 2) as i32, (self.height / 2) as i32)
    }

    /// Check if a cell is within the grid bounds
    pub fn contains(&self, cell: Cell) -> bool {
        cell.x >= 0
            && cell.x < self.width as i32
            && cell.y >= 0
            && cell.y < self.height as i32
    }

    /// Maps any cell onto the board, joining opposite edges.
    ///
    /// Each axis is reduced independently with a euclidean modulo, so
    /// negative coordinates wrap to the far edge.
    pub fn wrap(&self, cell: Cell) -> Cell {
        Cell::new(
            cell.x.rem_euclid(self.width as i32),
            cell.y.rem_euclid(self.height as i32),
        )
    }

    /// The neighbouring cell in `direction`, wrapped onto the board
    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        self.wrap(cell.moved_in_direction(direction))
    }

    /// Uniformly random cell over the whole board
    pub fn random_cell(&self, rng: &mut impl RandomSource) -> Cell {
        let x = rng.next_below(self.width) as i32;
        let y = rng.next_below(self.height) as i32;
        Cell::new(x, y)
    }

    /// All cells, row by row
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height as i32)
            .flat_map(move |y| (0..self.width as i32).map(move |x| Cell::new(x, y)))
    }
}
