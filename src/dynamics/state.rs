use nalgebra::Vector2;

use crate::error::ValidationError;

// ---------------------------------------------------------------------------
// Physical and numerical constants
// ---------------------------------------------------------------------------

pub const G: f64 = 9.81; // gravitational acceleration, m/s^2
pub const DT: f64 = 0.01; // integration timestep, s
pub const T_END: f64 = 100.0; // hard stop, s

// ---------------------------------------------------------------------------
// Launch parameters
// ---------------------------------------------------------------------------

/// Validated inputs for one run. Construct through [`SimulationParameters::new`]
/// or [`crate::input::parse_parameters`]; both enforce the same ranges.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParameters {
    initial_speed: f64,        // m/s, > 0
    launch_angle_degrees: f64, // deg, 0..=90
    initial_height: f64,       // m, >= 0
    drag_coefficient: f64,     // 1/s, >= 0
}

impl SimulationParameters {
    pub fn new(
        initial_speed: f64,
        launch_angle_degrees: f64,
        initial_height: f64,
        drag_coefficient: f64,
    ) -> Result<Self, ValidationError> {
        if initial_speed.is_nan() || initial_speed <= 0.0 {
            return Err(ValidationError::NonPositiveSpeed(initial_speed));
        }
        if !(0.0..=90.0).contains(&launch_angle_degrees) {
            return Err(ValidationError::AngleOutOfRange(launch_angle_degrees));
        }
        if initial_height.is_nan() || initial_height < 0.0 {
            return Err(ValidationError::NegativeHeight(initial_height));
        }
        if drag_coefficient.is_nan() || drag_coefficient < 0.0 {
            return Err(ValidationError::NegativeDragCoefficient(drag_coefficient));
        }

        Ok(Self {
            initial_speed,
            launch_angle_degrees,
            initial_height,
            drag_coefficient,
        })
    }

    pub fn initial_speed(&self) -> f64 {
        self.initial_speed
    }

    pub fn launch_angle_degrees(&self) -> f64 {
        self.launch_angle_degrees
    }

    pub fn initial_height(&self) -> f64 {
        self.initial_height
    }

    pub fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    /// State at t = 0: launched from x = 0 at the given height.
    pub fn initial_state(&self) -> State {
        let theta = self.launch_angle_degrees.to_radians();
        State {
            time: 0.0,
            pos: Vector2::new(0.0, self.initial_height),
            vel: Vector2::new(
                self.initial_speed * theta.cos(),
                self.initial_speed * theta.sin(),
            ),
        }
    }
}

// ---------------------------------------------------------------------------
// Simulation state
// ---------------------------------------------------------------------------

/// One point of the trajectory. Frame: x downrange, y up, origin at the
/// launch point projected onto the ground.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    pub time: f64,         // s
    pub pos: Vector2<f64>, // m
    pub vel: Vector2<f64>, // m/s
}

impl State {
    /// Advance state by a derivative scaled by dt (used inside RK4).
    pub fn apply(&self, d: &Deriv, dt: f64) -> State {
        State {
            time: self.time + dt,
            pos: self.pos + d.dpos * dt,
            vel: self.vel + d.dvel * dt,
        }
    }

    /// Speed magnitude, sqrt(vx^2 + vy^2).
    pub fn speed(&self) -> f64 {
        self.vel.norm()
    }
}

// ---------------------------------------------------------------------------
// State derivative
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct Deriv {
    pub dpos: Vector2<f64>, // velocity
    pub dvel: Vector2<f64>, // acceleration
}

// ---------------------------------------------------------------------------
// Simulation config
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct SimConfig {
    pub dt: f64,       // s
    pub max_time: f64, // s, loop bound on the last recorded time
    pub gravity: f64,  // m/s^2
}

impl SimConfig {
    /// Upper bound on recorded states for this config, initial point included.
    pub fn max_points(&self) -> usize {
        (self.max_time / self.dt).ceil() as usize + 2
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            dt: DT,
            max_time: T_END,
            gravity: G,
        }
    }
}
