//! Parsing command-line arguments.

use anyhow::{bail, Context, Result};
use clap::{command, value_parser, Arg, ArgAction, ArgMatches, Command};
use lifesim_lib::{BoundaryMode, Config, Seed, Simulation};
use std::{
    ffi::{OsStr, OsString},
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) simulation: Simulation,
    pub(crate) interval: Duration,
    pub(crate) max_gen: Option<u64>,
    pub(crate) export: bool,
    pub(crate) verbose: u8,
    #[cfg(feature = "tui")]
    pub(crate) no_tui: bool,
}

fn app() -> Command {
    let app = command!()
        .long_about(
            "Conway's Game of Life on a finite grid\n\
             \n\
             The grid is shown in Plaintext format:\n\
             * Dead cells are represented by `.`;\n\
             * Living cells are represented by `o`.\n\
             \n\
             The simulation stops when the grid stops changing. Oscillators are \
             not detected, and run until the maximal generation is reached.\n\
             \n\
             Patterns are exported as rows of comma-separated `0`/`1`, one row \
             per x-coordinate.\n",
        )
        .arg(
            Arg::new("X")
                .help("Width of the grid [default: 50]")
                .index(1)
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("Y")
                .help("Height of the grid [default: 50]")
                .index(2)
                .value_parser(value_parser!(i32).range(1..)),
        )
        .arg(
            Arg::new("BOUNDARY")
                .help("Boundary condition [default: bounded]")
                .long_help(
                    "Boundary condition\n\
                     \"periodic\" wraps around the edges, so that the grid becomes a torus.\n\
                     \"bounded\" treats the cells outside the grid as dead.\n",
                )
                .short('b')
                .long("boundary")
                .value_parser(["periodic", "bounded", "p", "b"]),
        )
        .arg(
            Arg::new("SEED")
                .help("How to fill the grid at the start [default: random@0.3]")
                .long_help(
                    "How to fill the grid at the start\n\
                     \"random@RATE\" makes each cell alive with probability RATE.\n\
                     \"blank\" leaves every cell dead.\n\
                     Known patterns: glider, blinker, toad, beacon, block, \
                     r-pentomino, pulsar.\n",
                )
                .short('s')
                .long("seed")
                .value_parser(|s: &str| {
                    s.parse::<Seed>()
                        .map(|_| s.to_string())
                        .map_err(|e| e.to_string())
                }),
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a TOML, YAML or JSON file")
                .long_help(
                    "Reads the configuration from a TOML, YAML or JSON file\n\
                     The format is chosen by the extension. Arguments given on the \
                     command line override the file.\n",
                )
                .short('c')
                .long("config")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("INTERVAL")
                .help("Milliseconds between two generations")
                .short('i')
                .long("interval")
                .default_value("100")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("MAX")
                .help("Stops after this many generations")
                .long_help(
                    "Stops after this many generations\n\
                     If this value is set to 0, it means there is no limitation.\n",
                )
                .short('g')
                .long("max-gen")
                .default_value("0")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("EXPORT")
                .help("Prints the final grid as rows of comma-separated 0/1")
                .long("export")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("VERBOSE")
                .help("Logs more, once per occurrence")
                .short('v')
                .long("verbose")
                .action(ArgAction::Count),
        );

    #[cfg(feature = "tui")]
    let app = app.arg(
        Arg::new("NOTUI")
            .help("Starts running immediately, without entering the TUI")
            .short('n')
            .long("no-tui")
            .action(ArgAction::SetTrue),
    );

    app
}

/// Reads a configuration file, choosing the format by the extension.
fn read_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Unable to read {}", path.display()))?;
    let config = match path.extension().and_then(OsStr::to_str) {
        Some("toml") => toml::from_str(&text).map_err(anyhow::Error::from),
        Some("yaml" | "yml") => serde_yaml::from_str(&text).map_err(anyhow::Error::from),
        Some("json") => serde_json::from_str(&text).map_err(anyhow::Error::from),
        _ => bail!("Unknown config format: {}", path.display()),
    };
    config.with_context(|| format!("Invalid config file {}", path.display()))
}

/// Builds the configuration: defaults, then the config file,
/// then the command line.
fn config(matches: &ArgMatches) -> Result<Config> {
    let mut config = match matches.get_one::<PathBuf>("CONFIG") {
        Some(path) => read_config(path)?,
        None => Config::default(),
    };
    if let Some(&width) = matches.get_one::<i32>("X") {
        config.width = width;
    }
    if let Some(&height) = matches.get_one::<i32>("Y") {
        config.height = height;
    }
    if let Some(boundary) = matches.get_one::<String>("BOUNDARY") {
        config.boundary = boundary.parse::<BoundaryMode>().map_err(anyhow::Error::msg)?;
    }
    if let Some(seed) = matches.get_one::<String>("SEED") {
        config.seed = seed.clone();
    }
    Ok(config)
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self> {
        Self::parse_from(std::env::args_os())
    }

    /// Parses the given arguments.
    pub(crate) fn parse_from<I, T>(itr: I) -> Result<Self>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().try_get_matches_from(itr)?;
        let config = config(&matches)?;
        let simulation = config.simulation().context("Invalid configuration")?;

        let interval = Duration::from_millis(*matches.get_one::<u64>("INTERVAL").unwrap_or(&100));
        let max_gen = match matches.get_one::<u64>("MAX") {
            Some(0) | None => None,
            Some(&i) => Some(i),
        };

        Ok(Args {
            simulation,
            interval,
            max_gen,
            export: matches.get_flag("EXPORT"),
            verbose: matches.get_count("VERBOSE"),
            #[cfg(feature = "tui")]
            no_tui: matches.get_flag("NOTUI"),
        })
    }
}
