/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Command, Direction, PickupRequest, SimError, SimResult};

enum Keyword {
    Status,
    Pickup,
}

/// Tokenizes one operator line.
///
/// Understands `status [id]`, `pickup <floor> <up|down>`, `step` and `quit`.
/// After the command word, numbers and directions may come in any order.
/// A blank line yields `Ok(None)`.
pub fn parse_command(line: &str) -> SimResult<Option<Command>> {
    let mut keyword = None;
    let mut number = None;
    let mut direction = None;

    for token in line.split_whitespace() {
        match token.to_ascii_lowercase().as_str() {
            "status" => keyword = Some(Keyword::Status),
            "pickup" => keyword = Some(Keyword::Pickup),
            "step" => return Ok(Some(Command::Step)),
            "quit" | "exit" => return Ok(Some(Command::Quit)),
            "up" => direction = Some(Direction::Up),
            "down" => direction = Some(Direction::Down),
            other => match other.parse::<u8>() {
                Ok(n) => number = Some(n),
                Err(_) => return Err(SimError::UnknownCommand(token.to_string())),
            },
        }
    }

    match keyword {
        None if number.is_none() && direction.is_none() => Ok(None),
        None => Err(SimError::UnknownCommand(line.trim().to_string())),
        Some(Keyword::Status) => Ok(Some(Command::Status(number))),
        Some(Keyword::Pickup) => match (number, direction) {
            (Some(floor), Some(direction)) => {
                Ok(Some(Command::Pickup(PickupRequest { floor, direction })))
            }
            _ => Err(SimError::InvalidPickup(
                "Incorrect pickup notation, expected: pickup <floor> <up|down>".to_string(),
            )),
        },
    }
}

/// Reads a destination floor from the first token of `line`.
pub fn parse_floor(line: &str) -> SimResult<u8> {
    line.split_whitespace()
        .next()
        .and_then(|token| token.parse::<u8>().ok())
        .ok_or_else(|| {
            SimError::InvalidDestination(format!(
                "could not distinguish floor number in {:?}",
                line.trim()
            ))
        })
}
