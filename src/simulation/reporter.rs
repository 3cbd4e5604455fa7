/***************************************/
/*        3rd party libraries          */
/***************************************/
use crossbeam_channel as cbc;
use log::warn;
use serde::Serialize;
use std::fmt;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::ElevatorStatus;

/***************************************/
/*       Public data structures        */
/***************************************/

/// Everything the simulation tells the outside world. Reports are purely
/// observational; nothing flows back into the simulation.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SimEvent {
    ElevatorStarted { elevator: u8, floor: u8 },
    PickupAssigned { elevator: u8, floor: u8, cost: u32 },
    PassengerLoaded { elevator: u8, floor: u8, destination: u8 },
    DroppedOff { elevator: u8, floor: u8 },
    StepStarted { tick: u64 },
    Status(ElevatorStatus),
}

impl fmt::Display for SimEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimEvent::ElevatorStarted { elevator, floor } => {
                write!(f, "Starting New Elevator ID:{}, on Floor:{}", elevator, floor)
            }
            SimEvent::PickupAssigned { elevator, floor, .. } => {
                write!(f, "Elevator {} will pick up on floor {}", elevator, floor)
            }
            SimEvent::PassengerLoaded {
                elevator,
                floor,
                destination,
            } => write!(
                f,
                "Elevator {} picked up on floor {}, heading to floor {}",
                elevator, floor, destination
            ),
            SimEvent::DroppedOff { elevator, floor } => {
                write!(f, "Elevator {} dropped off on floor {}", elevator, floor)
            }
            SimEvent::StepStarted { .. } => write!(f, "Stepping in time"),
            SimEvent::Status(status) => write!(f, "{}", status),
        }
    }
}

/***************************************/
/*             Public API              */
/***************************************/
pub trait Reporter {
    fn report(&mut self, event: SimEvent);
}

impl Reporter for cbc::Sender<SimEvent> {
    fn report(&mut self, event: SimEvent) {
        if let Err(e) = self.send(event) {
            warn!("Dropping report, receiver is gone: {:?}", e.into_inner());
        }
    }
}
