/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{info, warn};
use rand::rngs::SmallRng;
use rand::SeedableRng;

/***************************************/
/*           Local modules             */
/***************************************/
use crate::config::SimulationConfig;
use crate::dispatcher;
use crate::elevator::Elevator;
use crate::shared::{Command, Direction, ElevatorStatus, PickupRequest, SimError, SimResult};
use crate::simulation::resolver::DestinationResolver;
use crate::simulation::{Reporter, SimEvent, SimulationClock};

/// Whether the command loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/**
 * The bank of elevators in one building.
 *
 * Owns every elevator and the clock. All state changes go through `pickup`
 * and `step`; `status` is read-only.
 *
 * # Fields
 * - `elevators`:   The cars, stored in ascending id order.
 * - `n_floors`:    Number of floors, numbered `1..=n_floors`.
 * - `clock`:       Simulated time.
 */
#[derive(Debug)]
pub struct ElevatorSystem {
    elevators: Vec<Elevator>,
    n_floors: u8,
    clock: SimulationClock,
}

impl ElevatorSystem {
    pub fn new<R: Reporter>(config: &SimulationConfig, reporter: &mut R) -> SimResult<ElevatorSystem> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => SmallRng::seed_from_u64(seed),
            None => SmallRng::from_entropy(),
        };

        let elevators = (1..=config.n_elevators)
            .map(|id| {
                let floor = config.start_floor.pick(config.n_floors, &mut rng);
                info!("Starting elevator {} on floor {}", id, floor);
                reporter.report(SimEvent::ElevatorStarted { elevator: id, floor });
                Elevator::new(id, floor, config.n_floors)
            })
            .collect();

        Ok(ElevatorSystem {
            elevators,
            n_floors: config.n_floors,
            clock: SimulationClock::new(),
        })
    }

    pub fn elevator(&self, id: u8) -> SimResult<&Elevator> {
        self.elevators
            .iter()
            .find(|elevator| elevator.id() == id)
            .ok_or(SimError::UnknownElevator(id))
    }

    pub fn tick(&self) -> u64 {
        self.clock.tick()
    }

    /// Snapshot of one elevator, or of all of them when `id` is `None`.
    pub fn status(&self, id: Option<u8>) -> SimResult<Vec<ElevatorStatus>> {
        match id {
            Some(id) => Ok(vec![self.elevator(id)?.status()]),
            None => Ok(self.elevators.iter().map(Elevator::status).collect()),
        }
    }

    /// Rejects pickups that name no real floor, or ask to travel past the
    /// end of the building.
    pub fn validate_pickup(&self, request: &PickupRequest) -> SimResult<()> {
        if !(1..=self.n_floors).contains(&request.floor) {
            return Err(SimError::InvalidPickup(format!(
                "floor {} is outside 1..={}",
                request.floor, self.n_floors
            )));
        }
        match request.direction {
            Direction::Stop => Err(SimError::InvalidPickup(
                "a pickup needs a direction".to_string(),
            )),
            Direction::Down if request.floor == 1 => Err(SimError::InvalidPickup(
                "cannot go down from the bottom floor".to_string(),
            )),
            Direction::Up if request.floor == self.n_floors => Err(SimError::InvalidPickup(
                "cannot go up from the top floor".to_string(),
            )),
            _ => Ok(()),
        }
    }

    pub fn pickup<D, R>(
        &mut self,
        request: &PickupRequest,
        resolver: &mut D,
        reporter: &mut R,
    ) -> SimResult<u8>
    where
        D: DestinationResolver,
        R: Reporter,
    {
        if let Err(e) = self.validate_pickup(request) {
            warn!("Rejected pickup {:?}: {}", request, e);
            return Err(e);
        }
        dispatcher::assign(&mut self.elevators, request, resolver, reporter)
    }

    pub fn step<D, R>(&mut self, resolver: &mut D, reporter: &mut R) -> SimResult<()>
    where
        D: DestinationResolver,
        R: Reporter,
    {
        self.clock.step(&mut self.elevators, resolver, reporter)
    }

    pub fn execute<D, R>(&mut self, command: Command, resolver: &mut D, reporter: &mut R) -> SimResult<Flow>
    where
        D: DestinationResolver,
        R: Reporter,
    {
        match command {
            Command::Status(id) => {
                for status in self.status(id)? {
                    reporter.report(SimEvent::Status(status));
                }
            }
            Command::Pickup(request) => {
                self.pickup(&request, resolver, reporter)?;
            }
            Command::Step => self.step(resolver, reporter)?,
            Command::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }
}
