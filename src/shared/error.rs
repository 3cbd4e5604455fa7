/***************************************/
/*        3rd party libraries          */
/***************************************/
use thiserror::Error;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::Direction;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("invalid pickup: {0}")]
    InvalidPickup(String),

    #[error("invalid destination: {0}")]
    InvalidDestination(String),

    #[error("scheduling invariant violated by elevator {elevator} on floor {floor}: {reason}")]
    SchedulingInvariantViolation {
        elevator: u8,
        floor: u8,
        reason: String,
    },

    #[error("no elevator with number {0}")]
    UnknownElevator(u8),

    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("input closed")]
    InputClosed,
}

impl SimError {
    /// Errors the operator can fix by answering again. Everything else stops
    /// the current operation.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            SimError::InvalidPickup(_)
                | SimError::InvalidDestination(_)
                | SimError::UnknownElevator(_)
                | SimError::UnknownCommand(_)
        )
    }

    pub fn wrong_direction(floor: u8, current: u8, required: Direction) -> SimError {
        SimError::InvalidDestination(format!(
            "floor {} is not {} from floor {}",
            floor,
            match required {
                Direction::Up => "above",
                Direction::Down => "below",
                Direction::Stop => "away",
            },
            current
        ))
    }
}

pub type SimResult<T> = Result<T, SimError>;
