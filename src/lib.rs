pub mod dynamics;
pub mod error;
pub mod input;
pub mod io;
pub mod sim;

pub use dynamics::state::SimulationParameters;
pub use error::{ExportError, ValidationError};
pub use input::{parse_parameters, RawParameters};
pub use sim::{integrate, Termination, TrajectoryResult};
