//! Running without the TUI.

use crate::args::Args;
use lifesim_lib::{encode, Simulation, Status};
use log::info;
use std::{
    io::{self, Write},
    thread,
};

/// Whether the simulation has reached the maximal generation.
pub(crate) fn reached_max(simulation: &Simulation, max_gen: Option<u64>) -> bool {
    max_gen.map_or(false, |max_gen| simulation.generation() >= max_gen)
}

/// Runs the simulation until it converges or reaches the maximal generation,
/// printing every generation.
pub(crate) fn run(args: Args) -> io::Result<()> {
    let Args {
        mut simulation,
        interval,
        max_gen,
        export,
        ..
    } = args;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Generation 0:\n{}", simulation.grid())?;
    simulation.start();
    while !reached_max(&simulation, max_gen) {
        if simulation.tick() != Status::Running {
            break;
        }
        writeln!(
            out,
            "Generation {}:\n{}",
            simulation.generation(),
            simulation.grid()
        )?;
        out.flush()?;
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }

    match simulation.status() {
        Status::Converged => writeln!(
            out,
            "Converged after {} generations, {} living cells.",
            simulation.generation(),
            simulation.grid().cell_count()
        )?,
        _ => writeln!(
            out,
            "Stopped after {} generations, {} living cells.",
            simulation.generation(),
            simulation.grid().cell_count()
        )?,
    }
    info!("Finished with status {:?}.", simulation.status());

    if export {
        write!(out, "{}", encode(simulation.grid()))?;
    }
    Ok(())
}
