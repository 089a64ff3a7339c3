mod args;
mod cli;
#[cfg(feature = "tui")]
mod tui;

use anyhow::Result;
use args::Args;
use log::LevelFilter;
use simple_logger::SimpleLogger;

fn main() -> Result<()> {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(e) => match e.downcast::<clap::Error>() {
            Ok(e) => e.exit(),
            Err(e) => return Err(e),
        },
    };

    #[cfg(feature = "tui")]
    if !args.no_tui {
        let export = args.export;
        let (simulation, drawn) = tui::run(args)?;
        if let Some(text) = drawn {
            print!("{}", text);
        }
        if export {
            print!("{}", lifesim_lib::encode(simulation.grid()));
        }
        return Ok(());
    }

    let level = match args.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    SimpleLogger::new().with_level(level).init()?;
    cli::run(args)?;
    Ok(())
}
