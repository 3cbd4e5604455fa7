/*
 * Test doubles shared by the unit tests.
 *
 * - ScriptedResolver:  answers destination queries from a fixed script
 * - CompliantResolver: always answers with a valid floor
 * - NoopReporter:      discards every report
 */
use std::collections::VecDeque;

use crate::config::SimulationConfig;
use crate::shared::{Direction, SimError, SimResult};
use crate::simulation::resolver::{DestinationQuery, DestinationResolver};
use crate::simulation::{Reporter, SimEvent};

pub struct ScriptedResolver {
    answers: VecDeque<SimResult<u8>>,
    pub queries: Vec<DestinationQuery>,
    pub rejections: Vec<String>,
}

impl ScriptedResolver {
    pub fn new(floors: &[u8]) -> ScriptedResolver {
        ScriptedResolver::with_answers(floors.iter().map(|floor| Ok(*floor)).collect())
    }

    pub fn with_answers(answers: Vec<SimResult<u8>>) -> ScriptedResolver {
        ScriptedResolver {
            answers: answers.into(),
            queries: Vec::new(),
            rejections: Vec::new(),
        }
    }
}

impl DestinationResolver for ScriptedResolver {
    fn resolve(&mut self, query: &DestinationQuery) -> SimResult<u8> {
        self.queries.push(*query);
        self.answers.pop_front().unwrap_or(Err(SimError::InputClosed))
    }

    fn rejected(&mut self, _query: &DestinationQuery, error: &SimError) {
        self.rejections.push(error.to_string());
    }
}

/// Sends every rider as far as the building allows in the permitted
/// direction, alternating ends when unconstrained.
pub struct CompliantResolver {
    pub n_floors: u8,
    flip: bool,
}

impl CompliantResolver {
    pub fn new(n_floors: u8) -> CompliantResolver {
        CompliantResolver { n_floors, flip: false }
    }
}

impl DestinationResolver for CompliantResolver {
    fn resolve(&mut self, query: &DestinationQuery) -> SimResult<u8> {
        self.flip = !self.flip;
        let up = match query.required {
            Some(Direction::Up) => true,
            Some(Direction::Down) => false,
            _ if query.floor == 1 => true,
            _ if query.floor == self.n_floors => false,
            _ => self.flip,
        };
        Ok(if up {
            self.n_floors
        } else {
            1
        })
    }
}

pub struct NoopReporter;

impl Reporter for NoopReporter {
    fn report(&mut self, _event: SimEvent) {}
}

pub fn simulation_config(n_elevators: u8, n_floors: u8) -> SimulationConfig {
    SimulationConfig {
        n_elevators,
        n_floors,
        ..SimulationConfig::default()
    }
}
