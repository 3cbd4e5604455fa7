/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::warn;
use serde::Serialize;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, SimError, SimResult};

/// What the simulation knows when it asks where a boarding rider is going.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DestinationQuery {
    pub elevator: u8,
    pub floor: u8,
    pub required: Option<Direction>,
}

/**
 * Supplies the destination floor of a rider boarding at a `Load` stop.
 *
 * Answers are validated by the caller; a resolver may return anything and
 * will simply be asked again. Returning a non-recoverable error (such as
 * `SimError::InputClosed`) aborts the operation in progress.
 */
pub trait DestinationResolver {
    fn resolve(&mut self, query: &DestinationQuery) -> SimResult<u8>;

    /// Called with the reason an answer was refused, before asking again.
    fn rejected(&mut self, _query: &DestinationQuery, _error: &SimError) {}
}

impl DestinationQuery {
    pub fn validate(&self, floor: u8, n_floors: u8) -> SimResult<u8> {
        if !(1..=n_floors).contains(&floor) {
            return Err(SimError::InvalidDestination(format!(
                "could not distinguish floor number {}",
                floor
            )));
        }
        let toward = Direction::toward(self.floor, floor);
        if toward == Direction::Stop {
            return Err(SimError::InvalidDestination(format!(
                "already on floor {}",
                floor
            )));
        }
        match self.required {
            Some(required) if required != toward => {
                Err(SimError::wrong_direction(floor, self.floor, required))
            }
            _ => Ok(floor),
        }
    }
}

/// Asks `resolver` until it gives a valid destination for `query`.
pub fn request_destination<D: DestinationResolver>(
    resolver: &mut D,
    query: &DestinationQuery,
    n_floors: u8,
) -> SimResult<u8> {
    loop {
        let error = match resolver
            .resolve(query)
            .and_then(|floor| query.validate(floor, n_floors))
        {
            Ok(floor) => return Ok(floor),
            Err(e) if e.is_recoverable() => e,
            Err(e) => return Err(e),
        };
        warn!("Elevator {}: {}", query.elevator, error);
        resolver.rejected(query, &error);
    }
}
