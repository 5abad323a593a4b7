use crate::dynamics::state::{SimConfig, SimulationParameters, State};
use super::integrator::rk4_step;
use super::trajectory::TrajectoryResult;

// ---------------------------------------------------------------------------
// Full flight simulation
// ---------------------------------------------------------------------------

/// Run from launch until the body drops below ground or the last recorded
/// time passes `config.max_time`. Returns every recorded state, launch
/// point first.
///
/// The step that first crosses below y = 0 is recorded as-is, so the last
/// point can lie up to one step under ground. No interpolation to the exact
/// impact time is done.
pub fn simulate(params: &SimulationParameters, config: &SimConfig) -> Vec<State> {
    let g = config.gravity;
    let k = params.drag_coefficient();

    let mut state = params.initial_state();
    let mut trajectory = Vec::with_capacity(config.max_points());
    trajectory.push(state.clone());

    while state.pos.y >= 0.0 && state.time <= config.max_time {
        state = rk4_step(&state, g, k, config.dt);
        trajectory.push(state.clone());

        // Ground impact
        if state.pos.y < 0.0 {
            break;
        }
    }

    trajectory
}

/// Integrate with a custom config and collect the four output sequences.
pub fn integrate_with(params: &SimulationParameters, config: &SimConfig) -> TrajectoryResult {
    TrajectoryResult::from_run(&simulate(params, config))
}

/// Integrate with g = 9.81 m/s^2, dt = 0.01 s and a 100 s bound.
pub fn integrate(params: &SimulationParameters) -> TrajectoryResult {
    integrate_with(params, &SimConfig::default())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
