pub mod error;
pub mod macros;
pub mod structs;

pub use error::SimError;
pub use error::SimResult;
pub use structs::Command;
pub use structs::Direction;
pub use structs::ElevatorStatus;
pub use structs::PickupRequest;
pub use structs::Stop;
