pub mod fsm;
pub mod goal_queue;

pub use fsm::Elevator;
pub use goal_queue::GoalQueue;
