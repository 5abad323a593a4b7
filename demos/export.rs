use projectile_sim::io::csv;
use projectile_sim::io::json::{self, FlightSummary};
use projectile_sim::{integrate, RawParameters};

fn main() {
    let params = RawParameters::new("50", "45", "10", "0,1")
        .parse()
        .expect("Demo parameters are valid");

    println!("Simulating v0=50 m/s at 45 deg from 10 m, k=0.1 ...");
    let trajectory = integrate(&params);

    let summary = FlightSummary::from_trajectory(&trajectory).expect("Trajectory is never empty");
    println!("Max height: {:.2} m", summary.apex_m);
    println!("Range: {:.2} m", summary.range_m);
    println!("Flight time: {:.2} s", summary.flight_time_s);

    csv::write_trajectory_file("projectile_trajectory.csv", &trajectory)
        .expect("Failed to write CSV");
    json::write_summary_file("projectile_summary.json", &params, &summary)
        .expect("Failed to write JSON");

    println!("Exported: projectile_trajectory.csv, projectile_summary.json");
}
