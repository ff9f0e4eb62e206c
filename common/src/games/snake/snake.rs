use std::collections::{HashSet, VecDeque};

use super::types::Cell;

/// Snake body, head first. `body_set` mirrors `body` for constant-time occupancy checks.
#[derive(Clone, Debug)]
pub struct Snake {
    body: VecDeque<Cell>,
    body_set: HashSet<Cell>,
}

impl Snake {
    pub fn new(start: Cell) -> Self {
        Self::from_segments(&[start])
    }

    /// Builds a body from head to tail. Duplicate cells are dropped.
    pub fn from_segments(segments: &[Cell]) -> Self {
        let mut body = VecDeque::with_capacity(segments.len());
        let mut body_set = HashSet::with_capacity(segments.len());
        for cell in segments {
            if body_set.insert(*cell) {
                body.push_back(*cell);
            }
        }
        Self { body, body_set }
    }

    pub fn head(&self) -> Cell {
        *self.body.front().expect("Snake body should never be empty")
    }

    pub fn tail(&self) -> Cell {
        *self.body.back().expect("Snake body should never be empty")
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn contains(&self, cell: &Cell) -> bool {
        self.body_set.contains(cell)
    }

    pub fn occupied(&self) -> &HashSet<Cell> {
        &self.body_set
    }

    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.body.iter()
    }

    /// Moves the head to `new_head`. The tail is vacated first unless `grow` is set,
    /// so a head entering the vacated tail cell stays tracked in `body_set`.
    pub fn step(&mut self, new_head: Cell, grow: bool) {
        if !grow && let Some(tail) = self.body.pop_back() {
            self.body_set.remove(&tail);
        }
        self.body.push_front(new_head);
        self.body_set.insert(new_head);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_single_segment_moves_without_growing() {
        let mut snake = Snake::new(Cell::new(200, 200));
        snake.step(Cell::new(220, 200), false);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Cell::new(220, 200));
        assert!(!snake.contains(&Cell::new(200, 200)));
    }

    #[test]
    fn test_step_grow_keeps_tail() {
        let mut snake = Snake::new(Cell::new(200, 200));
        snake.step(Cell::new(220, 200), true);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.tail(), Cell::new(200, 200));
    }

    #[test]
    fn test_step_into_vacated_tail_keeps_set_in_sync() {
        let ring = [
            Cell::new(20, 0),
            Cell::new(20, 20),
            Cell::new(0, 20),
            Cell::new(0, 0),
        ];
        let mut snake = Snake::from_segments(&ring);
        snake.step(Cell::new(0, 0), false);
        assert_eq!(snake.head(), Cell::new(0, 0));
        assert_eq!(snake.tail(), Cell::new(0, 20));
        assert!(snake.contains(&Cell::new(0, 0)));
        assert_eq!(snake.occupied().len(), snake.len());
    }
}
