/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::{debug, warn};
use std::io::{self, BufRead, Write};
use std::thread::Builder;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::OutputFormat;
use crate::console::command::{parse_command, parse_floor};
use crate::shared::{Command, SimError, SimResult};
use crate::simulation::resolver::{DestinationQuery, DestinationResolver};
use crate::simulation::{Reporter, SimEvent};

/***************************************/
/*             Public API              */
/***************************************/

/// Starts a thread forwarding stdin line by line. The channel disconnects
/// when stdin reaches end of file.
pub fn spawn_stdin_reader() -> io::Result<cbc::Receiver<String>> {
    let (line_tx, line_rx) = cbc::unbounded::<String>();

    let stdin_thread = Builder::new().name("stdin_reader".into());
    stdin_thread.spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if line_tx.send(line).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    warn!("Error reading stdin: {}", e);
                    break;
                }
            }
        }
        debug!("stdin closed");
    })?;

    Ok(line_rx)
}

/**
 * The operator's command prompt.
 *
 * # Fields
 * - `lines`:   Raw input lines from the stdin reader thread.
 * - `prompt`:  Printed before every command.
 */
pub struct Console {
    lines: cbc::Receiver<String>,
    prompt: String,
}

impl Console {
    pub fn new(lines: cbc::Receiver<String>, prompt: String) -> Console {
        Console { lines, prompt }
    }

    /// Prompts for and parses the next command. `Ok(None)` for a blank line.
    pub fn next_command(&self) -> SimResult<Option<Command>> {
        let line = read_line(&self.lines, &self.prompt)?;
        parse_command(&line)
    }
}

/// Asks the operator at the console where each boarding rider is going.
pub struct ConsoleResolver {
    lines: cbc::Receiver<String>,
}

impl ConsoleResolver {
    pub fn new(lines: cbc::Receiver<String>) -> ConsoleResolver {
        ConsoleResolver { lines }
    }
}

impl DestinationResolver for ConsoleResolver {
    fn resolve(&mut self, query: &DestinationQuery) -> SimResult<u8> {
        let prompt = format!(
            "Elevator {} arrived at {}, where would you like to go >  ",
            query.elevator, query.floor
        );
        let line = read_line(&self.lines, &prompt)?;
        parse_floor(&line)
    }

    fn rejected(&mut self, _query: &DestinationQuery, error: &SimError) {
        println!("{}, try again", error);
    }
}

/// Prints reports to stdout, as text or as one JSON object per line.
pub struct ConsoleReporter {
    format: OutputFormat,
}

impl ConsoleReporter {
    pub fn new(format: OutputFormat) -> ConsoleReporter {
        ConsoleReporter { format }
    }
}

impl Reporter for ConsoleReporter {
    fn report(&mut self, event: SimEvent) {
        match self.format {
            OutputFormat::Text => println!("{}", event),
            OutputFormat::Json => match serde_json::to_string(&event) {
                Ok(json) => println!("{}", json),
                Err(e) => warn!("Failed to serialize {:?}: {}", event, e),
            },
        }
    }
}

/***************************************/
/*          Private functions          */
/***************************************/
fn read_line(lines: &cbc::Receiver<String>, prompt: &str) -> SimResult<String> {
    print!("{}", prompt);
    if let Err(e) = io::stdout().flush() {
        warn!("Failed to flush stdout: {}", e);
    }
    lines.recv().map_err(|_| SimError::InputClosed)
}
