pub mod ant;
pub mod field;
pub mod sim;

pub use ant::{Ant, Direction, StepError};
pub use field::{Field, FieldError, Pattern};
pub use sim::{RunError, RunSummary, Simulation};
