/// A cell on the board. Coordinates are 1-indexed, `(1, 1)` is the top-left cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    pub fn offset(self, (dx, dy): (i32, i32)) -> Self {
        Position { x: self.x + dx, y: self.y + dy }
    }
}

/// Board extent. Valid cells are `1..=width` by `1..=height`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
}

impl Grid {
    /// # Panics
    ///
    /// Panics if either extent is zero.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(width > 0 && height > 0, "grid extents must be non-zero, got {}x{}", width, height);
        Grid { width, height }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, pos: Position) -> bool {
        (1..=i32::from(self.width)).contains(&pos.x) && (1..=i32::from(self.height)).contains(&pos.y)
    }

    /// Middle cell, rounding up on even extents (11 on a 21-wide board).
    pub fn center(&self) -> Position {
        Position::new(i32::from(self.width) / 2 + 1, i32::from(self.height) / 2 + 1)
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Position> {
        let (w, h) = (i32::from(self.width), i32::from(self.height));
        (1..=h).flat_map(move |y| (1..=w).map(move |x| Position::new(x, y)))
    }
}
