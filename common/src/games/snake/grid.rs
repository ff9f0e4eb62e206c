use std::collections::HashSet;
use thiserror::Error;

use crate::games::SessionRng;
use super::types::{Cell, Direction};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no free cell left on the board")]
pub struct BoardFull;

/// Square playfield of `size` pixels split into cells of `unit` pixels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Board {
    size: i32,
    unit: i32,
}

impl Board {
    pub fn new(size: i32, unit: i32) -> Result<Self, String> {
        if unit <= 0 {
            return Err(format!("grid unit must be positive, got {}", unit));
        }
        if size <= 0 {
            return Err(format!("board size must be positive, got {}", size));
        }
        if size % unit != 0 {
            return Err(format!(
                "board size {} must be an exact multiple of grid unit {}",
                size, unit
            ));
        }
        if size / unit < 2 {
            return Err("board must be at least 2 cells wide".to_string());
        }
        Ok(Self { size, unit })
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn unit(&self) -> i32 {
        self.unit
    }

    pub fn cells_per_side(&self) -> i32 {
        self.size / self.unit
    }

    pub fn cell_count(&self) -> usize {
        let side = self.cells_per_side() as usize;
        side * side
    }

    pub fn add(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.displacement(self.unit);
        Cell::new(cell.x + dx, cell.y + dy)
    }

    pub fn in_bounds(&self, cell: Cell) -> bool {
        (0..self.size).contains(&cell.x) && (0..self.size).contains(&cell.y)
    }

    /// In bounds and on a multiple of the grid unit.
    pub fn contains_aligned(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && cell.x % self.unit == 0 && cell.y % self.unit == 0
    }

    fn cell_at(&self, index: usize) -> Cell {
        let side = self.cells_per_side() as usize;
        let col = (index % side) as i32;
        let row = (index / side) as i32;
        Cell::new(col * self.unit, row * self.unit)
    }

    /// Uniform pick among aligned cells not in `occupied`. Work is bounded by the cell count.
    pub fn random_free_cell(
        &self,
        occupied: &HashSet<Cell>,
        rng: &mut SessionRng,
    ) -> Result<Cell, BoardFull> {
        let taken = occupied
            .iter()
            .filter(|cell| self.contains_aligned(**cell))
            .count();
        let free = self.cell_count().saturating_sub(taken);
        if free == 0 {
            return Err(BoardFull);
        }

        let target = rng.random_range(0..free);
        (0..self.cell_count())
            .map(|index| self.cell_at(index))
            .filter(|cell| !occupied.contains(cell))
            .nth(target)
            .ok_or(BoardFull)
    }
}
