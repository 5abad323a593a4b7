pub mod linear_drag;
pub mod state;

pub use linear_drag::derivatives;
pub use state::{Deriv, SimConfig, SimulationParameters, State, DT, G, T_END};
