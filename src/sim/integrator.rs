use crate::dynamics;
use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Classical 4th-order Runge-Kutta integrator
// ---------------------------------------------------------------------------

/// Single RK4 step: advance state by dt under gravity `g` and linear drag `k`.
pub fn rk4_step(state: &State, g: f64, k: f64, dt: f64) -> State {
    let k1 = dynamics::derivatives(state, g, k);
    let k2 = dynamics::derivatives(&state.apply(&k1, dt * 0.5), g, k);
    let k3 = dynamics::derivatives(&state.apply(&k2, dt * 0.5), g, k);
    let k4 = dynamics::derivatives(&state.apply(&k3, dt), g, k);

    State {
        time: state.time + dt,
        pos: state.pos + (k1.dpos + 2.0 * k2.dpos + 2.0 * k3.dpos + k4.dpos) * (dt / 6.0),
        vel: state.vel + (k1.dvel + 2.0 * k2.dvel + 2.0 * k3.dvel + k4.dvel) * (dt / 6.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dynamics::state::G;
    use nalgebra::Vector2;

    fn launch(vx: f64, vy: f64) -> State {
        State {
            time: 0.0,
            pos: Vector2::new(0.0, 0.0),
            vel: Vector2::new(vx, vy),
        }
    }

    #[test]
    fn time_advances_by_dt() {
        let s = rk4_step(&launch(1.0, 1.0), G, 0.1, 0.01);
        assert!((s.time - 0.01).abs() < 1e-15);
    }

    #[test]
    fn exact_for_constant_gravity() {
        // Polynomial motion of degree 2 is integrated without truncation error
        let dt = 0.5;
        let s = rk4_step(&launch(3.0, 20.0), G, 0.0, dt);
        assert!((s.pos.x - 1.5).abs() < 1e-12);
        assert!((s.pos.y - (20.0 * dt - 0.5 * G * dt * dt)).abs() < 1e-12);
        assert!((s.vel.y - (20.0 - G * dt)).abs() < 1e-12);
        assert_eq!(s.vel.x, 3.0);
    }

    #[test]
    fn matches_exponential_decay_with_drag() {
        // vx(t) = vx0 * exp(-k t); RK4 local error is O(dt^5)
        let k = 0.8;
        let dt = 0.01;
        let s = rk4_step(&launch(10.0, 0.0), G, k, dt);
        let exact_vx = 10.0 * (-k * dt).exp();
        let exact_x = 10.0 / k * (1.0 - (-k * dt).exp());
        assert!((s.vel.x - exact_vx).abs() < 1e-10);
        assert!((s.pos.x - exact_x).abs() < 1e-10);
    }

    #[test]
    fn speed_follows_new_velocity() {
        let s = rk4_step(&launch(6.0, 8.0), G, 0.3, 0.01);
        assert!((s.speed() - (s.vel.x.powi(2) + s.vel.y.powi(2)).sqrt()).abs() < 1e-12);
    }
}
