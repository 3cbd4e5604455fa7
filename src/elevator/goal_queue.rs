/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::debug;
use std::collections::VecDeque;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::shared::{Direction, Stop};

/**
 * Ordered stops of a single elevator.
 *
 * Stops are kept in the order the elevator will serve them: monotone in the
 * current direction of travel up to a reversal point, followed by the stops
 * of the return leg. New stops are spliced into the leg that already passes
 * their floor, so the elevator never skips a floor it could have served on
 * the way.
 */
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GoalQueue {
    stops: VecDeque<Stop>,
}

enum Placement {
    Splice(usize),
    Merge(usize),
    Append,
}

impl GoalQueue {
    pub fn new() -> GoalQueue {
        GoalQueue {
            stops: VecDeque::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }

    pub fn head(&self) -> Option<&Stop> {
        self.stops.front()
    }

    pub fn pop_head(&mut self) -> Option<Stop> {
        self.stops.pop_front()
    }

    pub fn to_vec(&self) -> Vec<Stop> {
        self.stops.iter().copied().collect()
    }

    /// The queued floor furthest out in `direction`.
    pub fn farthest(&self, direction: Direction) -> Option<u8> {
        let floors = self.stops.iter().map(|stop| stop.floor);
        match direction {
            Direction::Up => floors.max(),
            Direction::Down => floors.min(),
            Direction::Stop => None,
        }
    }

    /// Inserts `stop` for an elevator standing at `elevator_floor` and
    /// travelling in `direction`, returning the elevator's direction
    /// afterwards.
    ///
    /// The queue is walked leg by leg, starting at the elevator's floor. The
    /// stop is spliced in front of the first queued stop whose incoming leg
    /// passes strictly through its floor, or right behind a turning point it
    /// lies beyond. A queued stop on the same floor absorbs it instead,
    /// becoming `Both` when the actions differ. Anything else belongs to the
    /// final return leg and is appended.
    pub fn insert(&mut self, elevator_floor: u8, direction: Direction, stop: Stop) -> Direction {
        if self.stops.is_empty() {
            self.stops.push_back(stop);
            debug!("queued {:?} as the only goal", stop);
            return match direction {
                Direction::Stop => Direction::toward(elevator_floor, stop.floor),
                moving => moving,
            };
        }

        let mut from = elevator_floor;
        let mut placement = Placement::Append;
        for (index, current) in self.stops.iter().enumerate() {
            if passes_through(from, current.floor, stop.floor) {
                placement = Placement::Splice(index);
                break;
            }
            if current.floor == stop.floor {
                placement = Placement::Merge(index);
                break;
            }

            // A leg that turns around here can be stretched to reach the stop.
            let leg = Direction::toward(from, current.floor);
            let onward = self
                .stops
                .get(index + 1)
                .map(|next| Direction::toward(current.floor, next.floor));
            if leg != Direction::Stop
                && onward != Some(leg)
                && Direction::toward(current.floor, stop.floor) == leg
            {
                placement = Placement::Splice(index + 1);
                break;
            }
            from = current.floor;
        }

        match placement {
            Placement::Splice(index) => {
                debug!("spliced {:?} at position {}", stop, index);
                self.stops.insert(index, stop);
            }
            Placement::Merge(index) => {
                if let Some(current) = self.stops.get_mut(index) {
                    current.action = current.action.merge(stop.action);
                    debug!("merged {:?} into {:?}", stop.action, current);
                }
            }
            Placement::Append => {
                debug!("appended {:?} to the return leg", stop);
                self.stops.push_back(stop);
            }
        }
        direction
    }
}

// True when travelling from `from` to `to` crosses `floor` without ending on it.
fn passes_through(from: u8, to: u8, floor: u8) -> bool {
    (from < floor && floor < to) || (to < floor && floor < from)
}
