use crossterm::event::KeyCode;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Down, Left, Right];

    /// Unit step on the board. `y` grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn axis(self) -> Axis {
        match self {
            Up | Down => Axis::Vertical,
            Left | Right => Axis::Horizontal,
        }
    }

    pub fn from_key(code: KeyCode) -> Option<Direction> {
        match code {
            KeyCode::Char('w') | KeyCode::Up => Some(Up),
            KeyCode::Char('a') | KeyCode::Left => Some(Left),
            KeyCode::Char('s') | KeyCode::Down => Some(Down),
            KeyCode::Char('d') | KeyCode::Right => Some(Right),
            _ => None,
        }
    }

    pub fn head_char(self) -> char {
        match self {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

/// Delta for an optional direction; no input yet means standing still.
pub fn delta_of(direction: Option<Direction>) -> (i32, i32) {
    direction.map_or((0, 0), Direction::delta)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_directions() {
        assert_eq!(Direction::from_key(KeyCode::Up), Some(Up));
        assert_eq!(Direction::from_key(KeyCode::Char('a')), Some(Left));
        assert_eq!(Direction::from_key(KeyCode::Char('s')), Some(Down));
        assert_eq!(Direction::from_key(KeyCode::Right), Some(Right));
        assert_eq!(Direction::from_key(KeyCode::Char('x')), None);
        assert_eq!(Direction::from_key(KeyCode::Enter), None);
    }

    #[test]
    fn opposite_directions_share_an_axis() {
        assert_eq!(Up.axis(), Down.axis());
        assert_eq!(Left.axis(), Right.axis());
        assert_ne!(Up.axis(), Left.axis());
        assert_eq!(delta_of(None), (0, 0));
    }
}
