//! A minimal terminal front end for the engine.
//!
//! Seeds a glider, runs the simulation at a fixed speed & repaints only the
//! cells named in each step delta. The board size & the step interval are
//! owned here; the engine knows nothing about either the terminal or the
//! timer.

use std::{
    error::Error,
    io::{Write, stdout},
};

use life_lib::{
    Cell, Position,
    communication::{EnginePacket, SimulationSpeed, UiPacket},
};

const WIDTH: i32 = 30;
const HEIGHT: i32 = 15;
/// The generation the run stops at.
const LAST_GENERATION: u64 = 100;
/// Generations a second.
const SPEED: u32 = 10;

/// A glider heading for the bottom-right corner.
const GLIDER: [(i32, i32); 5] = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let simulator = life_lib::Simulator::new(WIDTH, HEIGHT)?;
    let ((ui_sender, ui_receiver), (engine_sender, engine_receiver)) = life_lib::create_channels();
    let engine = life_lib::start_engine(simulator, ui_receiver, engine_sender)?;

    // The front ends own mirror of the board, repainted incrementally.
    let mut cells = vec![vec![Cell::Dead; WIDTH as usize]; HEIGHT as usize];
    for position in GLIDER {
        cells[position.1 as usize][position.0 as usize] = Cell::Alive;
        ui_sender.send(UiPacket::Set {
            position: position.into(),
            cell_state: Cell::Alive,
        })?;
    }

    draw_board(&cells)?;

    ui_sender.send(UiPacket::SimulationSpeed {
        speed: SimulationSpeed::new(SPEED),
    })?;
    ui_sender.send(UiPacket::StartUntil {
        generation: LAST_GENERATION,
    })?;

    loop {
        let EnginePacket::StepCompleted { delta } = engine_receiver.recv()? else {
            continue;
        };

        for &position in delta.changed() {
            let cell = &mut cells[position.get_y() as usize][position.get_x() as usize];
            *cell = cell.invert();
            draw_cell(position, *cell);
        }
        draw_status(delta.generation())?;

        if delta.generation() >= LAST_GENERATION {
            break;
        }
    }

    ui_sender.send(UiPacket::Terminate)?;
    if engine.join().is_err() {
        log::error!("The engine thread panicked before terminating cleanly.");
    }

    // Leave the cursor below the board.
    println!("\x1b[{};1H", HEIGHT + 2);
    Ok(())
}

fn glyph(cell: Cell) -> char {
    match cell {
        Cell::Alive => '█',
        Cell::Dead => '·',
    }
}

/// Clears the terminal & paints the full board once.
fn draw_board(cells: &[Vec<Cell>]) -> Result<(), Box<dyn Error>> {
    print!("\x1b[2J\x1b[1;1H");
    for row in cells {
        for &cell in row {
            print!("{}", glyph(cell));
        }
        println!();
    }
    stdout().flush()?;
    Ok(())
}

/// Repaints a single cell in place. Terminal rows & columns are 1-based.
fn draw_cell(position: Position, cell: Cell) {
    print!(
        "\x1b[{};{}H{}",
        position.get_y() + 1,
        position.get_x() + 1,
        glyph(cell)
    );
}

fn draw_status(generation: u64) -> Result<(), Box<dyn Error>> {
    print!("\x1b[{};1Hgeneration {generation}", HEIGHT + 1);
    stdout().flush()?;
    Ok(())
}
