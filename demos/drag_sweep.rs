use projectile_sim::io::json::FlightSummary;
use projectile_sim::{integrate, SimulationParameters};

/// Range and apex for a fixed launch across drag coefficients.
fn main() {
    println!("  {:>6}  {:>10}  {:>10}  {:>8}", "k", "range (m)", "apex (m)", "t (s)");
    println!("  {}", "─".repeat(40));

    for k in [0.0, 0.01, 0.05, 0.1, 0.2, 0.5, 1.0] {
        let params = SimulationParameters::new(50.0, 45.0, 0.0, k).expect("Valid launch");
        let trajectory = integrate(&params);
        let s = FlightSummary::from_trajectory(&trajectory).expect("Trajectory is never empty");
        println!(
            "  {:>6.2}  {:>10.2}  {:>10.2}  {:>8.2}",
            k, s.range_m, s.apex_m, s.flight_time_s
        );
    }
}
