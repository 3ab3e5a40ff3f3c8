//! The data packets exchanged between a front end & the engine thread.

use std::num::NonZeroU32;

use crate::{Cell, Position, StepDelta};

/// Used when a caller asks for a capped speed of zero generations a second.
const FALLBACK_TPS: NonZeroU32 = NonZeroU32::new(10).unwrap();

/// The data packets that the UI will send to the engine.
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
pub enum UiPacket {
    /// Flips a single cell on the board.
    ToggleCell {
        /// The position of the cell to flip.
        position: Position,
    },
    /// Sets a cell on the board.
    Set {
        /// The position of the cell to set.
        position: Position,
        /// The state of the cell to set.
        cell_state: Cell,
    },

    /// Advances the simulation by a single generation.
    /// Ignored while the simulation is running.
    Step,
    /// Starts the simulation.
    Start,
    /// Starts the simulation, with it automatically stopping at the given generation.
    StartUntil { generation: u64 },
    /// Stops the simulation.
    Stop,

    /// Sets the current speed of the simulation.
    SimulationSpeed { speed: SimulationSpeed },

    /// Kills every cell on the board & resets the generation counter.
    Reset,

    /// Terminates the engine thread.
    /// This is unrecoverable without relaunching the application.
    Terminate,
}

/// The data packets that the engine will send to the ui.
#[cfg_attr(any(test, debug_assertions), derive(Debug))]
pub enum EnginePacket {
    /// A generation has been computed.
    /// Only the cells listed in the delta changed state.
    StepCompleted { delta: StepDelta },

    /// A cell was toggled at the request of the ui.
    CellToggled {
        /// The position of the toggled cell.
        position: Position,
        /// The state the cell now has.
        cell_state: Cell,
    },
}

/// The speed that the simulation will run at, in generations a second.
#[derive(Clone, Copy, serde::Serialize, serde::Deserialize)]
#[cfg_attr(any(test, debug_assertions), derive(Debug, PartialEq))]
pub struct SimulationSpeed {
    pub(crate) ticks_per_second: Option<NonZeroU32>,
}

impl SimulationSpeed {
    pub const UNCAPPED: Self = {
        Self {
            ticks_per_second: None,
        }
    };

    pub fn new(ticks_per_second: u32) -> Self {
        Self {
            ticks_per_second: Some(NonZeroU32::new(ticks_per_second).unwrap_or(FALLBACK_TPS)),
        }
    }

    /// Gets the ticks per second the simulation will run at.
    /// If [`None`] is returned there is no cap for the simulation speed.
    pub fn get(&self) -> Option<NonZeroU32> {
        self.ticks_per_second
    }
}
