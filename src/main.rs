/* 3rd party libraries */
use clap::Parser;
use log::{error, info};
use std::path::PathBuf;

/* Custom libraries */
use config::{Config, OutputFormat, StartFloor};
use console::{Console, ConsoleReporter, ConsoleResolver};
use shared::SimError;
use simulation::{ElevatorSystem, Flow};

/* Modules */
mod config;
mod console;
mod dispatcher;
mod elevator;
mod shared;
mod simulation;

/// Elevator control system simulator.
#[derive(Parser, Debug)]
#[clap(name = "elevator-control", version)]
struct Args {
    /// Number of elevators (1 to 16)
    #[clap(short, long)]
    elevators: Option<u8>,

    /// Number of floors
    #[clap(short, long)]
    floors: Option<u8>,

    /// Configuration file
    #[clap(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Start every elevator on a random floor
    #[clap(long)]
    random_start: bool,

    /// Seed for the random start floors
    #[clap(long)]
    seed: Option<u64>,

    /// Print reports as JSON lines
    #[clap(long)]
    json: bool,
}

impl Args {
    fn apply(&self, config: &mut Config) {
        if let Some(elevators) = self.elevators {
            config.simulation.n_elevators = elevators;
        }
        if let Some(floors) = self.floors {
            config.simulation.n_floors = floors;
        }
        if self.random_start {
            config.simulation.start_floor = StartFloor::Random;
        }
        if self.seed.is_some() {
            config.simulation.seed = self.seed;
        }
        if self.json {
            config.console.output = OutputFormat::Json;
        }
    }
}

/* Main */
fn main() {
    let args = Args::parse();

    // Load the configuration
    let mut config = unwrap_or_exit!(config::load_config(&args.config));
    args.apply(&mut config);

    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(config.console.log_level.as_str()),
    )
    .init();

    // Build the elevator bank
    let mut reporter = ConsoleReporter::new(config.console.output);
    let mut system = unwrap_or_exit!(ElevatorSystem::new(&config.simulation, &mut reporter));

    // Operator input
    let lines = unwrap_or_exit!(console::spawn_stdin_reader());
    let console = Console::new(lines.clone(), config.console.prompt.clone());
    let mut resolver = ConsoleResolver::new(lines);

    loop {
        let command = match console.next_command() {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(e) if e.is_recoverable() => {
                println!("{}", e);
                continue;
            }
            Err(e) => {
                info!("Stopping: {}", e);
                break;
            }
        };

        match system.execute(command, &mut resolver, &mut reporter) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Quit) => {
                println!("Exiting Elevator Control System");
                break;
            }
            Err(e) if e.is_recoverable() => println!("{}", e),
            Err(SimError::InputClosed) => {
                info!("Input closed while waiting for a destination");
                break;
            }
            Err(e) => {
                error!("{}", e);
                eprintln!("{}", e);
                std::process::exit(1);
            }
        }
    }
    info!("Simulation ended after {} steps", system.tick());
}
