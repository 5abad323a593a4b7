use approx::{assert_abs_diff_eq, assert_relative_eq};

use projectile_sim::dynamics::state::{SimConfig, G};
use projectile_sim::sim::{self, Termination};
use projectile_sim::{integrate, RawParameters, SimulationParameters, ValidationError};

fn params(speed: f64, angle: f64, height: f64, k: f64) -> SimulationParameters {
    SimulationParameters::new(speed, angle, height, k).unwrap()
}

#[test]
fn vacuum_45_degree_shot() {
    let v0 = 50.0_f64;
    let theta = 45.0_f64.to_radians();
    let r = integrate(&params(v0, 45.0, 0.0, 0.0));

    let apex = r.y.iter().copied().fold(f64::MIN, f64::max);
    let (t_last, x_last, _, _) = r.last().unwrap();

    assert_relative_eq!(apex, (v0 * theta.sin()).powi(2) / (2.0 * G), max_relative = 0.01);
    assert_relative_eq!(t_last, 2.0 * v0 * theta.sin() / G, max_relative = 0.01);
    assert_relative_eq!(x_last, v0 * v0 / G, max_relative = 0.01);
    assert_eq!(r.termination, Termination::GroundImpact);
}

#[test]
fn vacuum_matches_closed_form() {
    let (v0, angle, h0) = (30.0_f64, 35.0_f64, 12.0_f64);
    let theta = angle.to_radians();
    let r = integrate(&params(v0, angle, h0, 0.0));

    for (t, x, y, _) in r.points() {
        let x_exact = v0 * theta.cos() * t;
        let y_exact = h0 + v0 * theta.sin() * t - 0.5 * G * t * t;
        assert!((x - x_exact).abs() <= 1e-6 + 1e-3 * x_exact.abs(), "x at t={t}");
        assert!((y - y_exact).abs() <= 1e-6 + 1e-3 * y_exact.abs(), "y at t={t}");
    }
}

#[test]
fn horizontal_shot_with_drag() {
    let r = integrate(&params(10.0, 0.0, 5.0, 1.0));
    let n = r.len();

    assert!(r.y.windows(2).all(|w| w[1] < w[0]), "y strictly decreasing");
    assert!(r.x.windows(2).all(|w| w[1] > w[0]), "x strictly increasing");
    assert!(r.y[n - 1] < 0.0);
    assert!(r.y[..n - 1].iter().all(|&y| y >= 0.0));
}

#[test]
fn vertical_shot_stays_on_axis() {
    let r = integrate(&params(1.0, 90.0, 0.0, 0.0));
    for &x in &r.x {
        assert_abs_diff_eq!(x, 0.0, epsilon = 1e-12);
    }
    assert!(r.len() >= 2);
}

#[test]
fn time_grid_is_uniform() {
    let r = integrate(&params(40.0, 70.0, 3.0, 0.05));
    assert_eq!(r.t[0], 0.0);
    for (i, &t) in r.t.iter().enumerate() {
        assert_abs_diff_eq!(t, i as f64 * 0.01, epsilon = 1e-9);
    }
    for w in r.t.windows(2) {
        assert_abs_diff_eq!(w[1] - w[0], 0.01, epsilon = 1e-9);
    }
}

#[test]
fn speed_is_norm_of_velocity() {
    let p = params(25.0, 20.0, 2.0, 0.4);
    let states = sim::simulate(&p, &SimConfig::default());
    let r = integrate(&p);
    assert_eq!(states.len(), r.len());
    for (s, &v) in states.iter().zip(&r.v) {
        assert_abs_diff_eq!(v, (s.vel.x * s.vel.x + s.vel.y * s.vel.y).sqrt(), epsilon = 1e-9);
    }
}

#[test]
fn time_bound_caps_the_loop() {
    let r = integrate(&params(5000.0, 90.0, 0.0, 0.0));
    assert_eq!(r.termination, Termination::TimeLimit);
    assert!(r.len() - 1 <= 10_001);
    assert!(r.last().unwrap().2 >= 0.0);
}

#[test]
fn invalid_inputs_rejected_before_integration() {
    let cases = [
        (RawParameters::new("10", "95", "0", "0"), ValidationError::AngleOutOfRange(95.0)),
        (RawParameters::new("-1", "45", "0", "0"), ValidationError::NonPositiveSpeed(-1.0)),
        (RawParameters::new("10", "45", "-5", "0"), ValidationError::NegativeHeight(-5.0)),
        (
            RawParameters::new("10", "45", "0", "-0.1"),
            ValidationError::NegativeDragCoefficient(-0.1),
        ),
        (
            RawParameters::new("10", "", "0", "0"),
            ValidationError::MissingField { field: "launch angle" },
        ),
    ];
    for (raw, expected) in cases {
        assert_eq!(raw.parse(), Err(expected));
    }
}

#[test]
fn comma_input_runs_end_to_end() {
    let p = RawParameters::new("12,5", "30", "0", "0,2").parse().unwrap();
    let r = integrate(&p);
    assert_eq!(r.v[0], 12.5);
    assert_eq!(r.termination, Termination::GroundImpact);
}
