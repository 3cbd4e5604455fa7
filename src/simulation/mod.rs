pub mod clock;
pub mod reporter;
pub mod resolver;
pub mod system;

#[cfg(test)]
pub mod test_support;

pub use clock::SimulationClock;
pub use reporter::Reporter;
pub use reporter::SimEvent;
pub use system::ElevatorSystem;
pub use system::Flow;
