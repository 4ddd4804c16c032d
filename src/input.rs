use log::trace;

use crate::direction::{Axis, Direction};

/// Holds the direction the player asked for and the one the last step used.
///
/// A request on the committed direction's axis is dropped, so the snake can
/// never reverse into itself, however many keys arrive between two steps. The
/// last accepted request wins.
#[derive(Clone, Debug, Default)]
pub struct InputController {
    requested: Option<Direction>,
    committed: Option<Direction>,
}

impl InputController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the candidate was accepted.
    pub fn set_direction(&mut self, candidate: Direction) -> bool {
        if let Some(committed) = self.committed {
            if committed.axis() == candidate.axis() {
                trace!("Ignoring {:?} while moving {:?}", candidate, committed);
                return false;
            }
        }
        self.requested = Some(candidate);
        true
    }

    /// Hands the requested direction to the step and makes it the new baseline.
    pub fn consume_direction(&mut self) -> Option<Direction> {
        self.committed = self.requested;
        self.requested
    }

    pub fn committed(&self) -> Option<Direction> {
        self.committed
    }
}

/// Shortest drag, in terminal cells, that counts as a swipe.
pub const MIN_SWIPE_DISTANCE: i32 = 2;

/// Turns pointer drags into directions, the terminal stand-in for touch swipes.
///
/// The dominant axis of the drag decides the direction. A swipe on the same
/// axis as the previously accepted one is suppressed. Only the caller knows
/// whether the controller took the direction, so it reports that back through
/// [`SwipeTracker::accepted`].
#[derive(Clone, Debug, Default)]
pub struct SwipeTracker {
    start: Option<(i32, i32)>,
    previous_axis: Option<Axis>,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
    }

    /// Feeds a pointer move. Once a swipe is recognised the drag restarts from
    /// this point, so one long drag can turn more than once.
    pub fn track(&mut self, x: i32, y: i32) -> Option<Direction> {
        let (sx, sy) = self.start?;
        let (dx, dy) = (x - sx, y - sy);
        if dx.abs().max(dy.abs()) < MIN_SWIPE_DISTANCE {
            return None;
        }

        let direction = if dx.abs() > dy.abs() {
            if dx > 0 { Direction::Right } else { Direction::Left }
        } else if dy > 0 {
            Direction::Down
        } else {
            Direction::Up
        };
        self.start = Some((x, y));

        if self.previous_axis == Some(direction.axis()) {
            return None;
        }
        Some(direction)
    }

    /// Records a swiped direction the controller took.
    pub fn accepted(&mut self, direction: Direction) {
        self.previous_axis = Some(direction.axis());
    }

    pub fn end(&mut self) {
        self.start = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use Direction::*;

    #[test]
    fn anything_goes_before_the_first_step() {
        for d in Direction::ALL.iter() {
            let mut input = InputController::new();
            assert!(input.set_direction(*d));
            assert_eq!(input.consume_direction(), Some(*d));
        }
    }

    #[test]
    fn same_axis_is_rejected_orthogonal_accepted() {
        for committed in Direction::ALL.iter() {
            for candidate in Direction::ALL.iter() {
                let mut input = InputController::new();
                input.set_direction(*committed);
                input.consume_direction();

                let accepted = input.set_direction(*candidate);
                let same_axis = committed.axis() == candidate.axis();
                assert_eq!(accepted, !same_axis, "{:?} after {:?}", candidate, committed);

                let expected = if same_axis { *committed } else { *candidate };
                assert_eq!(input.consume_direction(), Some(expected));
            }
        }
    }

    #[test]
    fn quick_double_turn_cannot_reverse() {
        let mut input = InputController::new();
        input.set_direction(Right);
        input.consume_direction();

        // Up then Left before the next step: Left is checked against Right, not Up
        assert!(input.set_direction(Up));
        assert!(!input.set_direction(Left));
        assert_eq!(input.consume_direction(), Some(Up));
    }

    #[test]
    fn last_accepted_request_wins() {
        let mut input = InputController::new();
        input.set_direction(Right);
        input.consume_direction();

        input.set_direction(Up);
        input.set_direction(Down);
        assert_eq!(input.consume_direction(), Some(Down));
        assert_eq!(input.committed(), Some(Down));
    }

    #[test]
    fn swipe_uses_dominant_axis() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(10, 10);
        assert_eq!(swipe.track(11, 10), None);
        assert_eq!(swipe.track(15, 12), Some(Right));

        swipe.end();
        swipe.begin(10, 10);
        assert_eq!(swipe.track(9, 3), Some(Up));
    }

    #[test]
    fn repeated_axis_swipe_is_suppressed() {
        let mut swipe = SwipeTracker::new();
        swipe.begin(0, 0);
        assert_eq!(swipe.track(5, 0), Some(Right));
        swipe.accepted(Right);
        swipe.end();

        swipe.begin(5, 0);
        assert_eq!(swipe.track(0, 0), None);
        swipe.end();

        swipe.begin(0, 0);
        assert_eq!(swipe.track(0, 4), Some(Down));
    }

    #[test]
    fn rejected_swipe_does_not_block_its_axis() {
        let mut input = InputController::new();
        let mut swipe = SwipeTracker::new();
        input.set_direction(Right);
        input.consume_direction();

        // Reversal: the controller refuses it, so the axis stays free
        swipe.begin(10, 0);
        let dir = swipe.track(5, 0).unwrap();
        assert_eq!(dir, Left);
        assert!(!input.set_direction(dir));
        swipe.end();

        input.set_direction(Up);
        input.consume_direction();

        swipe.begin(0, 0);
        let dir = swipe.track(5, 0).unwrap();
        assert_eq!(dir, Right);
        assert!(input.set_direction(dir));
        swipe.accepted(dir);
        swipe.end();

        swipe.begin(0, 0);
        assert_eq!(swipe.track(0, 5), Some(Down));
        swipe.begin(0, 0);
        assert_eq!(swipe.track(9, 0), None);
    }

    #[test]
    fn moves_without_press_are_ignored() {
        let mut swipe = SwipeTracker::new();
        assert_eq!(swipe.track(30, 30), None);
    }
}
