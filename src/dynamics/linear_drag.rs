use nalgebra::Vector2;

use crate::dynamics::state::{Deriv, State};

// ---------------------------------------------------------------------------
// Equations of motion: uniform gravity + linear drag
// ---------------------------------------------------------------------------

/// Derivative of (x, y, vx, vy) for a point mass under gravity `g` and a
/// drag acceleration proportional to velocity with coefficient `k` (1/s):
///
///   dx/dt  = vx          dvx/dt = -k*vx
///   dy/dt  = vy          dvy/dt = -g - k*vy
pub fn derivatives(state: &State, g: f64, k: f64) -> Deriv {
    Deriv {
        dpos: state.vel,
        dvel: Vector2::new(-k * state.vel.x, -g - k * state.vel.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::G;

    fn state(vx: f64, vy: f64) -> State {
        State {
            time: 0.0,
            pos: Vector2::new(3.0, 7.0),
            vel: Vector2::new(vx, vy),
        }
    }

    #[test]
    fn position_rate_is_velocity() {
        let d = derivatives(&state(4.0, -2.0), G, 0.5);
        assert_eq!(d.dpos, Vector2::new(4.0, -2.0));
    }

    #[test]
    fn vacuum_has_only_gravity() {
        let d = derivatives(&state(30.0, 20.0), G, 0.0);
        assert_eq!(d.dvel.x, 0.0);
        assert_eq!(d.dvel.y, -G);
    }

    #[test]
    fn drag_opposes_velocity() {
        let d = derivatives(&state(10.0, 0.0), G, 0.2);
        assert!((d.dvel.x + 2.0).abs() < 1e-12);

        // Falling body: drag pushes up, partially cancelling gravity
        let d = derivatives(&state(0.0, -5.0), G, 0.2);
        assert!((d.dvel.y - (-G + 1.0)).abs() < 1e-12);
    }

    #[test]
    fn zero_acceleration_at_terminal_velocity() {
        let k = 0.5;
        let d = derivatives(&state(0.0, -G / k), G, k);
        assert!(d.dvel.norm() < 1e-12);
    }
}
