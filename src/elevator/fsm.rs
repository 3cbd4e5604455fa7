/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::info;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::GoalQueue;
use crate::shared::{Direction, ElevatorStatus, SimError, SimResult, Stop};
use crate::simulation::resolver::{request_destination, DestinationQuery, DestinationResolver};
use crate::simulation::{Reporter, SimEvent};

/**
 * A single elevator car and its small state machine.
 *
 * The car is `Stop`ped exactly when its goal queue is empty; otherwise it
 * travels one floor per step towards the head of the queue.
 *
 * # Fields
 * - `id`:          Stable identifier, 1-based, assigned at system creation.
 * - `floor`:       Current floor, always within `1..=n_floors`.
 * - `n_floors`:    Number of floors in the building.
 * - `direction`:   Current direction of travel.
 * - `goals`:       The stops still to be served, in service order.
 */
#[derive(Debug, Clone, PartialEq)]
pub struct Elevator {
    id: u8,
    floor: u8,
    n_floors: u8,
    direction: Direction,
    goals: GoalQueue,
}

impl Elevator {
    pub fn new(id: u8, floor: u8, n_floors: u8) -> Elevator {
        Elevator {
            id,
            floor,
            n_floors,
            direction: Direction::Stop,
            goals: GoalQueue::new(),
        }
    }

    pub fn id(&self) -> u8 {
        self.id
    }

    pub fn floor(&self) -> u8 {
        self.floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn goals(&self) -> &GoalQueue {
        &self.goals
    }

    pub fn is_idle(&self) -> bool {
        self.direction == Direction::Stop
    }

    pub fn status(&self) -> ElevatorStatus {
        ElevatorStatus {
            id: self.id,
            floor: self.floor,
            direction: self.direction,
            goals: self.goals.to_vec(),
        }
    }

    /// Schedules `stop`, starting the car if it was idle.
    pub fn enqueue(&mut self, stop: Stop) {
        self.direction = self.goals.insert(self.floor, self.direction, stop);
    }

    /// Moves the car one floor in its direction of travel. Returns whether
    /// the car moved.
    pub fn advance(&mut self) -> SimResult<bool> {
        let next = match self.direction {
            Direction::Stop => return Ok(false),
            Direction::Up if self.floor >= self.n_floors => {
                return Err(self.violation("would move above the top floor"));
            }
            Direction::Down if self.floor <= 1 => {
                return Err(self.violation("would move below the bottom floor"));
            }
            Direction::Up => self.floor + 1,
            Direction::Down => self.floor - 1,
        };

        if self.goals.is_empty() {
            return Err(self.violation("moving with an empty goal queue"));
        }

        self.floor = next;
        Ok(true)
    }

    /// Whether the next goal is on the current floor.
    pub fn head_reached(&self) -> bool {
        self.goals
            .head()
            .map_or(false, |stop| stop.floor == self.floor)
    }

    /// Removes the goal on the current floor. An emptied queue stops the car.
    pub fn take_head(&mut self) -> SimResult<Stop> {
        if !self.head_reached() {
            return Err(self.violation("no goal on this floor"));
        }
        let stop = self
            .goals
            .pop_head()
            .ok_or_else(|| self.violation("no goal on this floor"))?;
        if self.goals.is_empty() {
            self.direction = Direction::Stop;
        }
        Ok(stop)
    }

    /// The direction a boarding rider must travel in, or `None` when the car
    /// has nowhere else to go.
    pub fn required_direction(&self) -> Option<Direction> {
        self.goals
            .head()
            .map(|stop| Direction::toward(self.floor, stop.floor))
            .filter(|direction| *direction != Direction::Stop)
    }

    /// Asks for the boarding rider's destination and schedules the drop-off.
    pub fn load_passenger<D, R>(&mut self, resolver: &mut D, reporter: &mut R) -> SimResult<u8>
    where
        D: DestinationResolver,
        R: Reporter,
    {
        let required = self.required_direction();
        self.board(required, resolver, reporter)
    }

    /// Boards a rider who called the car in `direction` from this floor.
    /// Only destinations that way are accepted.
    pub fn load_passenger_toward<D, R>(
        &mut self,
        direction: Direction,
        resolver: &mut D,
        reporter: &mut R,
    ) -> SimResult<u8>
    where
        D: DestinationResolver,
        R: Reporter,
    {
        let required = Some(direction).filter(|d| *d != Direction::Stop);
        self.board(required, resolver, reporter)
    }

    fn board<D, R>(
        &mut self,
        required: Option<Direction>,
        resolver: &mut D,
        reporter: &mut R,
    ) -> SimResult<u8>
    where
        D: DestinationResolver,
        R: Reporter,
    {
        let query = DestinationQuery {
            elevator: self.id,
            floor: self.floor,
            required,
        };
        let destination = request_destination(resolver, &query, self.n_floors)?;

        self.enqueue(Stop::unload(destination));
        self.settle_direction();

        info!(
            "elevator {} loaded on floor {}, destination {}",
            self.id, self.floor, destination
        );
        reporter.report(SimEvent::PassengerLoaded {
            elevator: self.id,
            floor: self.floor,
            destination,
        });
        Ok(destination)
    }

    /// Points the car at its next goal, reversing at the end of a leg.
    pub fn settle_direction(&mut self) {
        let Some(head) = self.goals.head() else {
            self.direction = Direction::Stop;
            return;
        };

        let toward = Direction::toward(self.floor, head.floor);
        if toward == Direction::Stop || toward == self.direction {
            return;
        }
        if self.direction != Direction::Stop {
            info!(
                "elevator {} reversing on floor {}, now {}",
                self.id, self.floor, toward
            );
            debug_assert_eq!(toward, self.direction.opposite());
        }
        self.direction = toward;
    }

    fn violation(&self, reason: &str) -> SimError {
        SimError::SchedulingInvariantViolation {
            elevator: self.id,
            floor: self.floor,
            reason: reason.to_string(),
        }
    }
}
