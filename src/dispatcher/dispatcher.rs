/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::{Direction, PickupRequest, SimError, SimResult, Stop};
use crate::simulation::resolver::DestinationResolver;
use crate::simulation::{Reporter, SimEvent};

/***************************************/
/*             Public API              */
/***************************************/

/// Cost of sending `elevator` to a pickup on `floor`.
///
/// The direct distance is added to twice the detour the elevator has to
/// finish before it can turn towards the pickup.
pub fn cost(elevator: &Elevator, floor: u8) -> u32 {
    let direct = u32::from(elevator.floor().abs_diff(floor));
    2 * detour(elevator, floor) + direct
}

/// Index of the cheapest elevator for a pickup on `floor`, with its cost.
/// Equal costs go to the lowest elevator id.
pub fn select(elevators: &[Elevator], floor: u8) -> Option<(usize, u32)> {
    elevators
        .iter()
        .enumerate()
        .map(|(index, elevator)| (index, elevator.id(), cost(elevator, floor)))
        .inspect(|(_, id, cost)| debug!("elevator {} costs {} for floor {}", id, cost, floor))
        .min_by(|a, b| a.2.cmp(&b.2).then(a.1.cmp(&b.1)))
        .map(|(index, _, cost)| (index, cost))
}

/// Hands a validated pickup to the cheapest elevator and returns its id.
///
/// An idle elevator already standing on the pickup floor boards the rider
/// at once instead of queueing a `Load` stop, holding them to the direction
/// they asked for.
pub fn assign<D, R>(
    elevators: &mut [Elevator],
    request: &PickupRequest,
    resolver: &mut D,
    reporter: &mut R,
) -> SimResult<u8>
where
    D: DestinationResolver,
    R: Reporter,
{
    let (index, cost) = select(elevators, request.floor)
        .ok_or_else(|| SimError::Configuration("no elevators to dispatch".to_string()))?;
    let elevator = elevators
        .get_mut(index)
        .ok_or_else(|| SimError::Configuration("no elevators to dispatch".to_string()))?;

    info!(
        "elevator {} assigned to pickup on floor {} going {:?} (cost {})",
        elevator.id(),
        request.floor,
        request.direction,
        cost
    );
    reporter.report(SimEvent::PickupAssigned {
        elevator: elevator.id(),
        floor: request.floor,
        cost,
    });

    if elevator.is_idle() && elevator.floor() == request.floor {
        elevator.load_passenger_toward(request.direction, resolver, reporter)?;
    } else {
        elevator.enqueue(Stop::load(request.floor));
    }
    Ok(elevator.id())
}

/***************************************/
/*          Private functions          */
/***************************************/

// Zero when the elevator is idle or already closing in on `floor`; otherwise
// the distance out to its farthest goal in the current direction.
fn detour(elevator: &Elevator, floor: u8) -> u32 {
    let here = elevator.floor();
    match elevator.direction() {
        Direction::Stop => 0,
        Direction::Up if here <= floor => 0,
        Direction::Down if here >= floor => 0,
        direction => elevator
            .goals()
            .farthest(direction)
            .map_or(0, |farthest| u32::from(farthest.abs_diff(here))),
    }
}
