pub mod event;
pub mod integrator;
pub mod runner;
pub mod trajectory;

pub use event::{detect_events, EventKind, SimEvent};
pub use integrator::rk4_step;
pub use runner::{integrate, integrate_with, simulate};
pub use trajectory::{Termination, TrajectoryResult};
