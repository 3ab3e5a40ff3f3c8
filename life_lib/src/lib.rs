//! A Conways game of life engine on a bounded board.
//!
//! The engine itself is only [`Grid`] & [`Simulator`]; everything that
//! renders cells or maps pointer input to a [`Position`] is a front end
//! living outside of this crate. A front end can either own a [`Simulator`]
//! directly & call [`Simulator::step`] on its own timer, or hand it to
//! [`start_engine`] & drive it over channels.

mod cell;
pub mod communication;
mod delta;
mod error;
mod grid;
mod position;
mod simulator;

pub use cell::Cell;
pub use delta::StepDelta;
pub use error::GridError;
pub use grid::Grid;
pub use position::Position;
pub use simulator::Simulator;

use communication::{EnginePacket, UiPacket};
use std::sync::mpsc;
use std::{
    sync::mpsc::{Receiver, Sender},
    thread,
    time::Duration,
};

const UI_CLOSED_COMS: &str = "UI closed communication to the engine!";

/// The [`Receiver`] for [`UiPacket`]s from the ui.
///
/// [`Receiver`]: std::sync::mpsc::Receiver
pub type UiReceiver = mpsc::Receiver<UiPacket>;
/// The [`Sender`] for [`UiPacket`]s being sent from the ui.
/// Only the ui should ever have this [`Sender`].
///
/// [`Sender`]: std::sync::mpsc::Sender
pub type UiSender = mpsc::Sender<UiPacket>;
/// The [`Receiver`] for [`EnginePacket`]s from the engine.
///
/// [`Receiver`]: std::sync::mpsc::Receiver
pub type EngineReceiver = mpsc::Receiver<EnginePacket>;
/// The [`Sender`] for [`EnginePacket`]s being sent from the engine.
/// Only the engine should ever have this [`Sender`].
///
/// [`Sender`]: std::sync::mpsc::Sender
pub type EngineSender = mpsc::Sender<EnginePacket>;

/// Creates the channels for communication between the engine & the UI.
pub fn create_channels() -> ((UiSender, UiReceiver), (EngineSender, EngineReceiver)) {
    (mpsc::channel(), mpsc::channel())
}

/// Starts the given simulation on a new thread.
///
/// The thread owns the [`Simulator`] outright, so there is exactly one
/// writer of the board & at most one step can ever be in flight. The timing
/// policy lives entirely on this side of the channel: the ui only asks for
/// a speed & the engine paces its own ticks.
///
/// Positions received from the ui are not trusted; a toggle or set outside
/// of the board is logged & dropped rather than crashing the engine.
pub fn start_engine(
    mut simulator: Simulator,
    ui_receiver: Receiver<UiPacket>,
    engine_sender: Sender<EnginePacket>,
) -> Result<thread::JoinHandle<()>, std::io::Error> {
    thread::Builder::new()
        .name("Engine_Thread".into())
        .spawn(move || {
            let send_packet = |packet: EnginePacket| match engine_sender.send(packet) {
                Ok(_) => {}
                Err(_) => {
                    std::panic!("{}", UI_CLOSED_COMS)
                }
            };

            // Used to control the ticks per second.
            let mut tick_rate_limiter = spin_sleep_util::interval(Duration::from_secs(1));
            tick_rate_limiter.set_missed_tick_behavior(spin_sleep_util::MissedTickBehavior::Skip);

            let mut is_running = false;
            let mut run_until = None;
            let mut tick_rate_limited = false;

            loop {
                // Process all received packets.
                loop {
                    use std::sync::mpsc::TryRecvError;
                    let ui_packet = match ui_receiver.try_recv() {
                        Ok(ui_packet) => ui_packet,
                        Err(TryRecvError::Empty) => {
                            break;
                        }
                        Err(TryRecvError::Disconnected) => {
                            std::panic!("{}", UI_CLOSED_COMS);
                        }
                    };

                    match ui_packet {
                        UiPacket::ToggleCell { position } => {
                            match simulator.toggle_cell(position) {
                                Ok(cell_state) => send_packet(EnginePacket::CellToggled {
                                    position,
                                    cell_state,
                                }),
                                // A pointer can land just outside of the board.
                                Err(error) => log::warn!("Ignoring cell toggle: {error}"),
                            }
                        }
                        UiPacket::Set {
                            position,
                            cell_state,
                        } => {
                            if let Err(error) = simulator.set_cell(position, cell_state) {
                                log::warn!("Ignoring cell set: {error}");
                            }
                        }
                        UiPacket::Step => {
                            if !is_running {
                                send_packet(EnginePacket::StepCompleted {
                                    delta: simulator.step(),
                                });
                            }
                        }
                        UiPacket::Start => is_running = true,
                        UiPacket::StartUntil { generation } => {
                            is_running = true;
                            run_until = Some(generation);
                        }
                        UiPacket::Stop => is_running = false,
                        UiPacket::SimulationSpeed { speed } => match speed.get() {
                            Some(ticks_per_second) => {
                                tick_rate_limiter
                                    .set_period(Duration::from_secs(1) / ticks_per_second.get());
                                tick_rate_limited = true;
                            }
                            None => {
                                tick_rate_limited = false;
                            }
                        },
                        UiPacket::Reset => simulator.reset(),
                        UiPacket::Terminate => return,
                    }
                }

                // If the game is not running then wait for ≈ 100ms before polling
                // again to save resources.
                if !is_running {
                    thread::sleep(Duration::from_millis(100));
                    continue;
                }

                if let Some(generation) = run_until {
                    if simulator.generation() >= generation {
                        is_running = false;
                        run_until = None;
                        continue;
                    }
                }

                if tick_rate_limited {
                    tick_rate_limiter.tick();
                }

                send_packet(EnginePacket::StepCompleted {
                    delta: simulator.step(),
                });
            }
        })
}

#[cfg(test)]
mod engine_tests {
    use super::*;

    /// Seeds a blinker, requests a single step & checks the delta that
    /// comes back before terminating the engine thread.
    #[test]
    fn single_step_round_trip() {
        let ((ui_sender, ui_receiver), (engine_sender, engine_receiver)) = create_channels();
        let simulator = Simulator::new(5, 5).unwrap();
        let engine = start_engine(simulator, ui_receiver, engine_sender).unwrap();

        for x in 1..=3 {
            ui_sender
                .send(UiPacket::Set {
                    position: (x, 2).into(),
                    cell_state: Cell::Alive,
                })
                .unwrap();
        }
        ui_sender.send(UiPacket::Step).unwrap();

        let EnginePacket::StepCompleted { delta } = engine_receiver.recv().unwrap() else {
            panic!("expected a step delta as the first reply");
        };

        assert_eq!(delta.generation(), 1);
        let mut changed: Vec<Position> = delta.changed().to_vec();
        changed.sort_by_key(|position| (position.get_y(), position.get_x()));
        let expected: Vec<Position> = [(2, 1), (1, 2), (3, 2), (2, 3)].map(Into::into).into();
        assert_eq!(changed, expected);

        ui_sender.send(UiPacket::Terminate).unwrap();
        engine.join().unwrap();
    }

    /// Out of bounds positions from the ui are dropped; the engine keeps
    /// serving requests afterwards.
    #[test]
    fn out_of_bounds_toggle_is_dropped() {
        let ((ui_sender, ui_receiver), (engine_sender, engine_receiver)) = create_channels();
        let simulator = Simulator::new(4, 4).unwrap();
        let engine = start_engine(simulator, ui_receiver, engine_sender).unwrap();

        ui_sender
            .send(UiPacket::ToggleCell {
                position: (10, 10).into(),
            })
            .unwrap();
        ui_sender
            .send(UiPacket::ToggleCell {
                position: (0, 0).into(),
            })
            .unwrap();

        // The only reply is the toggle that was on the board.
        let EnginePacket::CellToggled {
            position,
            cell_state,
        } = engine_receiver.recv().unwrap()
        else {
            panic!("expected a cell toggle as the first reply");
        };
        assert_eq!(position, (0, 0).into());
        assert_eq!(cell_state, Cell::Alive);

        ui_sender.send(UiPacket::Terminate).unwrap();
        engine.join().unwrap();
    }
}
