/***************************************/
/*        3rd party libraries          */
/***************************************/
use serde::Deserialize;
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;

/***************************************/
/*       Public data structures        */
/***************************************/
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Stop,
}

impl Direction {
    /// Direction of travel from `from` to `to`, `Stop` when they are equal.
    pub fn toward(from: u8, to: u8) -> Direction {
        match to.cmp(&from) {
            Ordering::Greater => Direction::Up,
            Ordering::Less => Direction::Down,
            Ordering::Equal => Direction::Stop,
        }
    }

    pub fn opposite(&self) -> Direction {
        match *self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Stop => Direction::Stop,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Direction::Up => write!(f, "moving UP"),
            Direction::Down => write!(f, "moving DOWN"),
            Direction::Stop => write!(f, "STOPPED"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Load,
    Unload,
    Both,
}

impl Action {
    pub fn loads(&self) -> bool {
        matches!(*self, Action::Load | Action::Both)
    }

    pub fn unloads(&self) -> bool {
        matches!(*self, Action::Unload | Action::Both)
    }

    /// Combines two actions scheduled on the same floor.
    pub fn merge(self, other: Action) -> Action {
        if self == other {
            self
        } else {
            Action::Both
        }
    }
}

/// One scheduled floor event in an elevator's goal queue.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stop {
    pub floor: u8,
    pub action: Action,
}

impl Stop {
    pub fn load(floor: u8) -> Stop {
        Stop {
            floor,
            action: Action::Load,
        }
    }

    pub fn unload(floor: u8) -> Stop {
        Stop {
            floor,
            action: Action::Unload,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PickupRequest {
    pub floor: u8,
    pub direction: Direction,
}

/// Read-only snapshot of one elevator, as reported by `status`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ElevatorStatus {
    pub id: u8,
    pub floor: u8,
    pub direction: Direction,
    pub goals: Vec<Stop>,
}

impl fmt::Display for ElevatorStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Elevator Number {} is on floor {} and is {}",
            self.id, self.floor, self.direction
        )
    }
}

/// One operator command, already tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Status(Option<u8>),
    Pickup(PickupRequest),
    Step,
    Quit,
}
