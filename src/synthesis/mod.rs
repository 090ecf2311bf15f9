//! Humanized input synthesis: randomness, trajectory and typing planners,
//! and the executor that replays their output against the platform driver.

pub mod executor;
pub mod random;
pub mod trajectory;
pub mod typing;

pub use executor::InputExecutor;
pub use random::{EntropyRandom, RandomSource};
pub use trajectory::{TrajectoryPlanner, Waypoint};
pub use typing::{TypingAction, TypingPlanner};
