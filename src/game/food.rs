use std::collections::HashSet;

use super::{
    error::GameError,
    grid::{Cell, Grid},
    rng::RandomSource,
};

/// The single food cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Food {
    cell: Cell,
}

impl Food {
    /// Places the first food on a free cell
    pub fn spawn(
        grid: &Grid,
        occupied: &[Cell],
        rng: &mut impl RandomSource,
    ) -> Result<Self, GameError> {
        let cell = Self::free_cell(grid, occupied, rng)?;
        Ok(Self { cell })
    }

    /// Food at a fixed cell, for scripted setups
    pub fn at(cell: Cell) -> Self {
        Self { cell }
    }

    pub fn cell(&self) -> Cell {
        self.cell
    }

    /// Moves the food to a random cell outside `occupied` and returns it
    pub fn relocate(
        &mut self,
        grid: &Grid,
        occupied: &[Cell],
        rng: &mut impl RandomSource,
    ) -> Result<Cell, GameError> {
        self.cell = Self::free_cell(grid, occupied, rng)?;
        Ok(self.cell)
    }

    /// Rejection sampling over the whole grid.
    ///
    /// Uniform over the free cells; fails up front when none is left.
    fn free_cell(
        grid: &Grid,
        occupied: &[Cell],
        rng: &mut impl RandomSource,
    ) -> Result<Cell, GameError> {
        let taken: HashSet<Cell> = occupied
            .iter()
            .copied()
            .filter(|cell| grid.contains(*cell))
            .collect();

        if taken.len() >= grid.area() {
            return Err(GameError::GridFull {
                width: grid.width(),
                height: grid.height(),
            });
        }

        loop {
            let cell = grid.random_cell(rng);
            if !taken.contains(&cell) {
                return Ok(cell);
            }
        }
    }
}
