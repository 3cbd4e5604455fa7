/***************************************/
/*        3rd party libraries          */
/***************************************/
use log::{debug, info};

/***************************************/
/*           Local modules             */
/***************************************/
use crate::elevator::Elevator;
use crate::shared::SimResult;
use crate::simulation::resolver::DestinationResolver;
use crate::simulation::{Reporter, SimEvent};

/**
 * Drives simulated time.
 *
 * Every call to `step` moves each moving elevator one floor, in ascending id
 * order, and serves whatever goals the elevator reaches. A `Load` goal blocks
 * the step until the resolver supplies a destination.
 */
#[derive(Debug, Default)]
pub struct SimulationClock {
    tick: u64,
}

impl SimulationClock {
    pub fn new() -> SimulationClock {
        SimulationClock { tick: 0 }
    }

    /// Number of steps started so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn step<D, R>(
        &mut self,
        elevators: &mut [Elevator],
        resolver: &mut D,
        reporter: &mut R,
    ) -> SimResult<()>
    where
        D: DestinationResolver,
        R: Reporter,
    {
        self.tick += 1;
        reporter.report(SimEvent::StepStarted { tick: self.tick });

        for elevator in elevators.iter_mut() {
            if !elevator.advance()? {
                continue;
            }
            debug!(
                "tick {}: elevator {} on floor {}",
                self.tick,
                elevator.id(),
                elevator.floor()
            );

            while elevator.head_reached() {
                let reached = elevator.take_head()?;
                if reached.action.loads() {
                    elevator.load_passenger(resolver, reporter)?;
                }
                if reached.action.unloads() {
                    info!(
                        "elevator {} dropped off on floor {}",
                        elevator.id(),
                        elevator.floor()
                    );
                    reporter.report(SimEvent::DroppedOff {
                        elevator: elevator.id(),
                        floor: elevator.floor(),
                    });
                }
            }

            elevator.settle_direction();
        }
        Ok(())
    }
}
