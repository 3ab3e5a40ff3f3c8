//! Contains [`Grid`], the bounded board that the cells inhabit.

use bitvec::vec::BitVec;

use crate::{Cell, GridError, Position};

/// The offsets of the up to eight cells surrounding a cell.
const NEIGHBOUR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A bounded board of cells covering every position in
/// `[0, width) x [0, height)`.
///
/// The board is the single source of truth for cell state; there is no
/// separate list of alive cells to fall out of sync. Cells outside of the
/// board do not exist & the board does not wrap around: cells on the border
/// simply have fewer neighbours.
#[derive(Clone)]
#[cfg_attr(any(test, debug_assertions), derive(Debug, PartialEq))]
pub struct Grid {
    width: i32,
    height: i32,
    /// One bit per cell in row-major order. An alive cell is `true`.
    cells: BitVec,
}

impl Grid {
    /// Creates a new [`Grid`] of the given dimensions with every cell dead.
    ///
    /// # Errors
    /// [`GridError::InvalidDimensions`] if the width or height is not
    /// positive.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        if width <= 0 || height <= 0 {
            return Err(GridError::InvalidDimensions { width, height });
        }

        Ok(Self {
            width,
            height,
            cells: BitVec::repeat(false, (width * height) as usize),
        })
    }

    /// The amount of cells in the x axis.
    pub fn width(&self) -> i32 {
        self.width
    }

    /// The amount of cells in the y axis.
    pub fn height(&self) -> i32 {
        self.height
    }

    /// Whether the given position lies on the board.
    fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }

    /// The index of the given position into the cell storage.
    /// The position must lie on the board.
    fn index(&self, position: Position) -> usize {
        (position.y * self.width + position.x) as usize
    }

    fn check_bounds(&self, position: Position) -> Result<(), GridError> {
        match self.contains(position) {
            true => Ok(()),
            false => Err(GridError::OutOfBounds {
                position,
                width: self.width,
                height: self.height,
            }),
        }
    }

    /// Whether the cell at the given position is alive.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the position does not lie on the board.
    pub fn is_alive(&self, position: Position) -> Result<bool, GridError> {
        self.check_bounds(position)?;
        Ok(self.cells[self.index(position)])
    }

    /// Sets the cell at the given position.
    /// Setting a cell to the state it already has is a no-op, not an error.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the position does not lie on the board.
    pub fn set_alive(&mut self, position: Position, alive: bool) -> Result<(), GridError> {
        self.check_bounds(position)?;
        let index = self.index(position);
        self.cells.set(index, alive);
        Ok(())
    }

    /// Flips the cell at the given position & returns its new state.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the position does not lie on the board.
    pub fn toggle(&mut self, position: Position) -> Result<Cell, GridError> {
        let new_state = Cell::from(self.is_alive(position)?).invert();
        self.set_alive(position, new_state.into())?;
        Ok(new_state)
    }

    /// Sets every cell on the board to dead.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// The positions surrounding the given position that lie on the board.
    ///
    /// A cell in the interior of the board has 8 neighbours, a cell on an
    /// edge has 5 & a cell in a corner has 3.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the position does not lie on the board.
    pub fn neighbours_of(&self, position: Position) -> Result<Vec<Position>, GridError> {
        self.check_bounds(position)?;

        Ok(NEIGHBOUR_OFFSETS
            .iter()
            .map(|&offset| position + offset)
            .filter(|&neighbour| self.contains(neighbour))
            .collect())
    }

    /// The amount of alive cells surrounding the given position.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the position does not lie on the board.
    pub fn live_neighbour_count(&self, position: Position) -> Result<u8, GridError> {
        Ok(self
            .neighbours_of(position)?
            .into_iter()
            .filter(|&neighbour| self.cells[self.index(neighbour)])
            .count() as u8)
    }

    /// Returns an iterator over every position on the board in row-major
    /// order.
    ///
    /// Every call returns a fresh iterator, so the board can be walked any
    /// number of times.
    ///
    /// # Examples
    /// ```
    /// # use life_lib::Grid;
    /// let grid = Grid::new(2, 2).unwrap();
    /// let mut positions = grid.positions();
    ///
    /// // A (i32, i32) can be converted into a Position with .into()
    /// assert_eq!(positions.next().unwrap(), (0, 0).into());
    /// assert_eq!(positions.next().unwrap(), (1, 0).into());
    /// assert_eq!(positions.next().unwrap(), (0, 1).into());
    /// assert_eq!(positions.next().unwrap(), (1, 1).into());
    /// assert!(positions.next().is_none());
    /// ```
    pub fn positions(&self) -> impl Iterator<Item = Position> + use<> {
        let width = self.width;
        let height = self.height;

        let mut x_pos = -1;
        let mut y_pos = 0;
        std::iter::from_fn(move || {
            x_pos += 1;

            if x_pos == width {
                x_pos = 0;
                y_pos += 1;
            }

            if y_pos == height {
                return None;
            }

            Some(Position::new(x_pos, y_pos))
        })
    }
}

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    /// A board cannot have a zero or negative extent.
    fn rejects_non_positive_dimensions() {
        assert_eq!(
            Grid::new(0, 10),
            Err(GridError::InvalidDimensions {
                width: 0,
                height: 10
            })
        );
        assert_eq!(
            Grid::new(10, 0),
            Err(GridError::InvalidDimensions {
                width: 10,
                height: 0
            })
        );
        assert_eq!(
            Grid::new(-3, 4),
            Err(GridError::InvalidDimensions {
                width: -3,
                height: 4
            })
        );
    }

    #[test]
    /// Every cell on a new board is dead.
    fn new_board_is_dead() {
        let grid = Grid::new(7, 5).unwrap();
        for position in grid.positions() {
            assert_eq!(grid.is_alive(position), Ok(false));
        }
    }

    #[test]
    /// Queries outside of the board raise an out of bounds error.
    fn out_of_bounds_is_rejected() {
        let mut grid = Grid::new(4, 4).unwrap();

        for position in [(4, 0), (0, 4), (-1, 0), (0, -1), (100, 100)] {
            let position: Position = position.into();
            let expected = Err(GridError::OutOfBounds {
                position,
                width: 4,
                height: 4,
            });

            assert_eq!(grid.is_alive(position), expected);
            assert_eq!(grid.set_alive(position, true), expected.map(|_: bool| ()));
            assert_eq!(grid.toggle(position), expected.map(|_: bool| Cell::Dead));
            assert_eq!(
                grid.neighbours_of(position),
                expected.map(|_: bool| Vec::new())
            );
            assert_eq!(
                grid.live_neighbour_count(position),
                expected.map(|_: bool| 0)
            );
        }
    }

    #[test]
    /// Setting a cell to the state it already has changes nothing.
    fn redundant_set_is_a_no_op() {
        let mut grid = Grid::new(3, 3).unwrap();
        let position = Position::new(1, 1);

        grid.set_alive(position, true).unwrap();
        grid.set_alive(position, true).unwrap();
        assert_eq!(grid.is_alive(position), Ok(true));

        grid.set_alive(position, false).unwrap();
        grid.set_alive(position, false).unwrap();
        assert_eq!(grid.is_alive(position), Ok(false));
    }

    #[test]
    /// Toggling a cell twice restores its original state.
    fn toggle_is_self_inverse() {
        let mut grid = Grid::new(3, 3).unwrap();
        let position = Position::new(2, 0);

        assert_eq!(grid.toggle(position), Ok(Cell::Alive));
        assert_eq!(grid.toggle(position), Ok(Cell::Dead));
        assert_eq!(grid.is_alive(position), Ok(false));
    }

    #[test]
    /// Corner cells have 3 neighbours, edge cells 5 & interior cells 8.
    fn neighbour_counts_at_board_border() {
        let grid = Grid::new(5, 5).unwrap();

        for corner in [(0, 0), (4, 0), (0, 4), (4, 4)] {
            assert_eq!(grid.neighbours_of(corner.into()).unwrap().len(), 3);
        }

        for edge in [(2, 0), (0, 2), (4, 2), (2, 4)] {
            assert_eq!(grid.neighbours_of(edge.into()).unwrap().len(), 5);
        }

        for position in grid.positions() {
            let on_border = position.get_x() == 0
                || position.get_x() == 4
                || position.get_y() == 0
                || position.get_y() == 4;

            let neighbours = grid.neighbours_of(position).unwrap().len();
            match on_border {
                true => assert!(neighbours < 8),
                false => assert_eq!(neighbours, 8),
            }
        }
    }

    #[test]
    /// Neighbours never include the cell itself & never leave the board.
    fn neighbours_are_in_bounds() {
        let grid = Grid::new(3, 3).unwrap();

        for position in grid.positions() {
            for neighbour in grid.neighbours_of(position).unwrap() {
                assert_ne!(neighbour, position);
                assert!(grid.is_alive(neighbour).is_ok());
            }
        }
    }

    #[test]
    /// A 1x1 board has a single cell with no neighbours.
    fn single_cell_board() {
        let grid = Grid::new(1, 1).unwrap();

        assert_eq!(grid.neighbours_of((0, 0).into()), Ok(Vec::new()));
        assert_eq!(grid.live_neighbour_count((0, 0).into()), Ok(0));
        assert_eq!(grid.positions().count(), 1);
    }

    #[test]
    /// The neighbour count only counts alive cells.
    fn counts_alive_neighbours() {
        let mut grid = Grid::new(3, 3).unwrap();
        let centre = Position::new(1, 1);

        assert_eq!(grid.live_neighbour_count(centre), Ok(0));

        grid.set_alive((0, 0).into(), true).unwrap();
        grid.set_alive((2, 1).into(), true).unwrap();
        grid.set_alive((1, 2).into(), true).unwrap();
        // The centre cell itself is never a neighbour of itself.
        grid.set_alive(centre, true).unwrap();

        assert_eq!(grid.live_neighbour_count(centre), Ok(3));
        assert_eq!(grid.live_neighbour_count((0, 0).into()), Ok(2));
    }

    #[test]
    /// The position iterator walks the board in row-major order & can be
    /// restarted.
    fn positions_are_row_major_and_restartable() {
        let grid = Grid::new(3, 2).unwrap();

        let expected: Vec<Position> = [(0, 0), (1, 0), (2, 0), (0, 1), (1, 1), (2, 1)]
            .map(Into::into)
            .into();

        let first_walk: Vec<Position> = grid.positions().collect();
        let second_walk: Vec<Position> = grid.positions().collect();

        assert_eq!(first_walk, expected);
        assert_eq!(second_walk, expected);
    }

    #[test]
    /// Clearing the board kills every cell.
    fn clear_kills_every_cell() {
        let mut grid = Grid::new(4, 4).unwrap();
        for position in grid.positions() {
            grid.set_alive(position, true).unwrap();
        }

        grid.clear();

        for position in grid.positions() {
            assert_eq!(grid.is_alive(position), Ok(false));
        }
    }
}
