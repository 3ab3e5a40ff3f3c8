//! Contains [`Simulator`], which advances a board one generation at a time.

use crate::{Cell, Grid, GridError, Position, StepDelta};

/// Positions handed to the board by the simulator always come from the
/// boards own iterators, so board operations on them cannot fail.
const IN_BOUNDS: &str = "positions from the board iterator lie on the board";

/// Simulates Conways game of life on a bounded [`Grid`].
///
/// The simulator owns exactly one board for its whole lifetime. Each call to
/// [`step`] advances the board by exactly one generation; every cell of the
/// new generation is decided against the complete previous generation.
///
/// [`step`]: Simulator::step
pub struct Simulator {
    grid: Grid,
    /// The generation that this simulation is on.
    generation: u64,
}

impl Simulator {
    /// Creates a new [`Simulator`] with a dead board of the given
    /// dimensions.
    ///
    /// # Errors
    /// [`GridError::InvalidDimensions`] if the width or height is not
    /// positive.
    pub fn new(width: i32, height: i32) -> Result<Self, GridError> {
        Ok(Self {
            grid: Grid::new(width, height)?,
            generation: 0,
        })
    }

    /// Flips the cell at the given position & returns its new state.
    /// Toggling the same cell twice restores its original state.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the position does not lie on the board.
    pub fn toggle_cell(&mut self, position: Position) -> Result<Cell, GridError> {
        self.grid.toggle(position)
    }

    /// Sets the cell at the given position on the board.
    ///
    /// # Errors
    /// [`GridError::OutOfBounds`] if the position does not lie on the board.
    pub fn set_cell(&mut self, position: Position, cell: Cell) -> Result<(), GridError> {
        self.grid.set_alive(position, cell.into())
    }

    /// Advances the simulation by one generation.
    ///
    /// The step happens in two phases. The read phase decides the next state
    /// of every cell against the unmodified current generation; no decision
    /// is committed while any cell still has to be read. The write phase
    /// then applies all of the buffered decisions at once. Writing during
    /// the scan would let freshly updated cells leak into the neighbour
    /// counts of cells read later in the same generation.
    pub fn step(&mut self) -> StepDelta {
        let mut changes = Vec::new();

        // Read phase.
        for position in self.grid.positions() {
            let alive = self.grid.is_alive(position).expect(IN_BOUNDS);
            let neighbours = self.grid.live_neighbour_count(position).expect(IN_BOUNDS);

            let next_state = match (alive, neighbours) {
                // Underpopulation.
                (true, 0 | 1) => Cell::Dead,
                // Survival.
                (true, 2 | 3) => Cell::Alive,
                // Overpopulation.
                (true, _) => Cell::Dead,
                // Birth.
                (false, 3) => Cell::Alive,
                // Nothing happens.
                (false, _) => Cell::Dead,
            };

            if next_state != Cell::from(alive) {
                changes.push((position, next_state));
            }
        }

        // Write phase.
        let mut changed = Vec::with_capacity(changes.len());
        for (position, cell) in changes {
            self.grid.set_alive(position, cell.into()).expect(IN_BOUNDS);
            changed.push(position);
        }

        self.generation += 1;
        StepDelta::new(self.generation, changed)
    }

    /// Gets the current generation of the simulation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Gets the board that the simulation takes place on.
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Sets all cells on the board to dead & sets the generation to 0.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }
}
