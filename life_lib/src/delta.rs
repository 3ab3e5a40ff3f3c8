//! Contains [`StepDelta`].
//! See its documentation for more information.

use std::sync::Arc;

use crate::Position;

/// The outcome of advancing the simulation by one generation.
///
/// Holds the generation that was just reached & the positions of every cell
/// whose state changed during the step. A renderer only needs to redraw the
/// listed cells; every other cell is unchanged.
#[derive(Clone, Default)]
#[cfg_attr(any(test, debug_assertions), derive(Debug, PartialEq))]
pub struct StepDelta {
    /// The generation the board is now on.
    generation: u64,
    /// The cells that changed state, shared cheaply across threads.
    changed: Arc<[Position]>,
}

impl StepDelta {
    pub(crate) fn new(generation: u64, changed: impl Into<Arc<[Position]>>) -> Self {
        Self {
            generation,
            changed: changed.into(),
        }
    }

    /// Gets the generation that the step reached.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Gets the positions of the cells that changed state during the step.
    pub fn changed(&self) -> &[Position] {
        &self.changed
    }
}
