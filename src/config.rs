/***************************************/
/*        3rd party libraries          */
/***************************************/
use rand::Rng;
use serde::Deserialize;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{SimError, SimResult};

pub const MAX_ELEVATORS: u8 = 16;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
pub struct SimulationConfig {
    pub n_elevators: u8,
    pub n_floors: u8,
    #[serde(default)]
    pub start_floor: StartFloor,
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Where the elevators are parked when the system starts.
#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StartFloor {
    #[default]
    Bottom,
    Random,
    Fixed(u8),
}

#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct ConsoleConfig {
    pub prompt: String,
    pub output: OutputFormat,
    pub log_level: String,
}

#[derive(Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Default for SimulationConfig {
    fn default() -> SimulationConfig {
        SimulationConfig {
            n_elevators: 1,
            n_floors: 10,
            start_floor: StartFloor::Bottom,
            seed: None,
        }
    }
}

impl Default for ConsoleConfig {
    fn default() -> ConsoleConfig {
        ConsoleConfig {
            prompt: "ECS> ".to_string(),
            output: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/

/// Reads the configuration file at `path`. A missing file yields the default
/// configuration; a malformed one is a configuration error.
pub fn load_config(path: &Path) -> SimResult<Config> {
    match fs::read_to_string(path) {
        Ok(config_str) => parse_config(&config_str),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(Config::default()),
        Err(e) => Err(SimError::Configuration(format!(
            "failed to read {}: {}",
            path.display(),
            e
        ))),
    }
}

pub fn parse_config(config_str: &str) -> SimResult<Config> {
    toml::from_str(config_str)
        .map_err(|e| SimError::Configuration(format!("failed to parse configuration: {}", e)))
}

impl SimulationConfig {
    /// Rejects settings the simulation cannot be built from. Runs before any
    /// simulation state exists.
    pub fn validate(&self) -> SimResult<()> {
        if !(1..=MAX_ELEVATORS).contains(&self.n_elevators) {
            return Err(SimError::Configuration(format!(
                "Illegal number of elevators, {}. The Elevator can only handle 1 to {} elevators.",
                self.n_elevators, MAX_ELEVATORS
            )));
        }
        if self.n_floors == 0 {
            return Err(SimError::Configuration(
                "the building needs at least one floor".to_string(),
            ));
        }
        if let StartFloor::Fixed(floor) = self.start_floor {
            if !(1..=self.n_floors).contains(&floor) {
                return Err(SimError::Configuration(format!(
                    "start floor {} is outside 1..={}",
                    floor, self.n_floors
                )));
            }
        }
        Ok(())
    }
}

impl StartFloor {
    pub fn pick<R: Rng>(&self, n_floors: u8, rng: &mut R) -> u8 {
        match *self {
            StartFloor::Bottom => 1,
            StartFloor::Fixed(floor) => floor,
            StartFloor::Random => rng.gen_range(1..=n_floors),
        }
    }
}
