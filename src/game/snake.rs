use super::{
    action::{Action, Direction},
    grid::{Cell, Grid},
    rng::RandomSource,
};

/// What a single `Snake::step` did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// Head advanced and the tail followed (or was held back by pending growth)
    Moved,
    /// Head landed on the food; the body grew by one
    Ate,
    /// Head ran into the body; the snake was reset to the grid center
    Collided,
}

/// The snake: an ordered body with the head at index 0
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: Vec<Cell>,
    direction: Direction,
    /// Ticks on which the tail stays put
    pending_growth: usize,
    /// Cells gained per food, including the one added on the eating tick
    growth_per_food: usize,
}

impl Snake {
    /// A one-cell snake at `head` moving in `direction`
    pub fn new(head: Cell, direction: Direction) -> Self {
        Self {
            body: vec![head],
            direction,
            pending_growth: 0,
            growth_per_food: 1,
        }
    }

    /// A fresh snake at the grid center with a random heading
    pub fn spawn(grid: &Grid, rng: &mut impl RandomSource) -> Self {
        Self::new(grid.center(), Direction::random(rng))
    }

    /// Builds a snake from explicit cells, head first. Returns `None` for an empty body.
    pub fn from_cells(cells: Vec<Cell>, direction: Direction) -> Option<Self> {
        if cells.is_empty() {
            return None;
        }
        Some(Self {
            body: cells,
            direction,
            pending_growth: 0,
            growth_per_food: 1,
        })
    }

    /// Sets how many cells each food adds; values below 1 are treated as 1
    pub fn with_growth_per_food(mut self, growth: usize) -> Self {
        self.growth_per_food = growth.max(1);
        self
    }

    /// Get the head cell
    pub fn head(&self) -> Cell {
        self.body[0]
    }

    /// Get the tail cell (last segment)
    pub fn tail(&self) -> Cell {
        self.body[self.body.len() - 1]
    }

    /// Body cells, head first
    pub fn body(&self) -> &[Cell] {
        &self.body
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn pending_growth(&self) -> usize {
        self.pending_growth
    }

    /// Get the length of the snake
    pub fn len(&self) -> usize {
        self.body.len()
    }

    /// Always false; a snake keeps at least its head
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Check if a cell is occupied by any segment
    pub fn contains(&self, cell: Cell) -> bool {
        self.body.contains(&cell)
    }

    /// Advances the snake by one tick.
    ///
    /// A reversal request is ignored against the heading in force before the
    /// move. Collision is tested before the tail moves, except that the tail
    /// cell is free to enter when it is being vacated on this same tick.
    pub fn step(
        &mut self,
        action: Action,
        food: Cell,
        grid: &Grid,
        rng: &mut impl RandomSource,
    ) -> StepOutcome {
        if let Action::Move(requested) = action {
            if !self.direction.is_opposite(requested) {
                self.direction = requested;
            }
        }

        let candidate = grid.step(self.head(), self.direction);

        if candidate == food {
            self.body.insert(0, candidate);
            self.pending_growth += self.growth_per_food - 1;
            return StepOutcome::Ate;
        }

        if self.collides(candidate) {
            self.reset(grid, rng);
            return StepOutcome::Collided;
        }

        self.body.insert(0, candidate);
        if self.pending_growth > 0 {
            self.pending_growth -= 1;
        } else {
            self.body.pop();
        }
        StepOutcome::Moved
    }

    /// Whether moving the head onto `cell` would hit the body
    fn collides(&self, cell: Cell) -> bool {
        let tail_index = self.body.len() - 1;
        let tail_vacates = self.pending_growth == 0;
        self.body
            .iter()
            .enumerate()
            .any(|(i, segment)| *segment == cell && !(tail_vacates && i == tail_index))
    }

    /// Back to a single cell at the grid center with a fresh random heading
    pub fn reset(&mut self, grid: &Grid, rng: &mut impl RandomSource) {
        self.body.clear();
        self.body.push(grid.center());
        self.direction = Direction::random(rng);
        self.pending_growth = 0;
    }
}
