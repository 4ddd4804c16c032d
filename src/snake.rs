use crate::direction::{delta_of, Direction};
use crate::position::Position;

/// The snake's body, head first.
///
/// Growth is deferred: [`Snake::grow`] only records how many segments are owed,
/// and the next [`Snake::advance`] pays them out at the tail. This is why the
/// snake visibly lengthens one step after eating.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snake {
    body: Vec<Position>,
    pending_growth: u32,
}

impl Snake {
    pub fn new(head: Position) -> Self {
        Snake { body: vec![head], pending_growth: 0 }
    }

    /// # Panics
    ///
    /// Panics if `segments` is empty.
    pub fn from_segments(segments: Vec<Position>) -> Self {
        assert!(!segments.is_empty(), "a snake needs at least one segment");
        Snake { body: segments, pending_growth: 0 }
    }

    pub fn body(&self) -> &[Position] {
        &self.body
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    pub fn tail(&self) -> Position {
        self.body[self.body.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn pending_growth(&self) -> u32 {
        self.pending_growth
    }

    /// # Panics
    ///
    /// Panics if the owed segments no longer fit in a `u32`.
    pub fn grow(&mut self, amount: u32) {
        self.pending_growth = self
            .pending_growth
            .checked_add(amount)
            .expect("pending growth overflowed");
    }

    pub fn advance(&mut self, direction: Option<Direction>) {
        let tail = self.tail();
        for _ in 0..self.pending_growth {
            self.body.push(tail);
        }
        self.pending_growth = 0;

        // Every segment takes its predecessor's place, back to front
        for i in (0..self.body.len() - 1).rev() {
            self.body[i + 1] = self.body[i];
        }

        self.body[0] = self.body[0].offset(delta_of(direction));
    }

    pub fn occupies(&self, pos: Position, exclude_head: bool) -> bool {
        let skip = if exclude_head { 1 } else { 0 };
        self.body.iter().skip(skip).any(|segment| *segment == pos)
    }
}
