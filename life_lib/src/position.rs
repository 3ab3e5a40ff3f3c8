/// The x & y positions of a cell on the board.
///
/// To move "right" on the board, the x must be increased.
/// To move "down" on the board, the y must be increased.
/// The opposites also apply.
///
/// Equality is structural: two positions are the same cell exactly when
/// their x & y values are the same.
#[derive(
    Eq,
    Hash,
    PartialEq,
    Clone,
    Copy,
    Debug,
    derive_more::Display,
    serde::Serialize,
    serde::Deserialize,
)]
#[display("({x}, {y})")]
pub struct Position {
    pub(crate) x: i32,
    pub(crate) y: i32,
}

impl Position {
    /// Creates a new [`Position`] at the given x & y coordinates.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Gets the represented x position.
    pub fn get_x(&self) -> i32 {
        self.x
    }

    /// Gets the represented y position.
    pub fn get_y(&self) -> i32 {
        self.y
    }
}

impl<T: Into<Position>> std::ops::Sub<T> for Position {
    type Output = Self;

    fn sub(self, other_position: T) -> Self::Output {
        let other_position: Position = other_position.into();
        Position::new(self.x - other_position.x, self.y - other_position.y)
    }
}

impl<T: Into<Position>> std::ops::Add<T> for Position {
    type Output = Self;

    fn add(self, other_position: T) -> Self::Output {
        let other_position: Position = other_position.into();
        Position::new(self.x + other_position.x, self.y + other_position.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from(value: (i32, i32)) -> Self {
        Position {
            x: value.0,
            y: value.1,
        }
    }
}
