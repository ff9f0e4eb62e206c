use super::types::Direction;

/// Holds at most one direction change between ticks. Later input replaces earlier input.
#[derive(Clone, Debug, Default)]
pub struct InputController {
    pending: Option<Direction>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_pending(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    pub fn pending(&self) -> Option<Direction> {
        self.pending
    }

    pub fn take_pending(&mut self) -> Option<Direction> {
        self.pending.take()
    }

    pub fn clear(&mut self) {
        self.pending = None;
    }
}
