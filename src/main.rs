use std::process::ExitCode;

use clap::Parser;

use projectile_sim::dynamics::state::{SimConfig, SimulationParameters};
use projectile_sim::io::csv;
use projectile_sim::io::json::{self, FlightSummary};
use projectile_sim::sim::{self, EventKind, SimEvent, Termination, TrajectoryResult};
use projectile_sim::RawParameters;

/// Projectile flight with linear air drag (fixed-step RK4).
///
/// Decimal values may use either '.' or ',' as separator.
#[derive(Parser)]
#[command(name = "projectile-sim", version, about, long_about = None)]
struct Cli {
    /// Initial speed (m/s), > 0
    #[arg(short = 'v', long, allow_hyphen_values = true)]
    speed: String,

    /// Launch angle (degrees), 0 - 90
    #[arg(short = 'a', long, allow_hyphen_values = true)]
    angle: String,

    /// Initial height (m), >= 0
    #[arg(short = 'H', long, allow_hyphen_values = true)]
    height: String,

    /// Drag coefficient k (1/s), >= 0
    #[arg(short = 'k', long, allow_hyphen_values = true)]
    drag: String,

    /// Export the trajectory (t, x, y, v) to a CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Export launch parameters and flight summary to a JSON file
    #[arg(long)]
    json: Option<String>,

    /// Approximate number of rows in the printed trajectory table
    #[arg(long, default_value_t = 30)]
    rows: usize,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let raw = RawParameters::new(&cli.speed, &cli.angle, &cli.height, &cli.drag);
    let params = match raw.parse() {
        Ok(p) => p,
        Err(err) => {
            eprintln!("Input error: {err}");
            return ExitCode::FAILURE;
        }
    };

    // -----------------------------------------------------------------------
    // Run simulation
    // -----------------------------------------------------------------------
    let config = SimConfig::default();
    let states = sim::simulate(&params, &config);
    let events = sim::detect_events(&states);
    let trajectory = TrajectoryResult::from_run(&states);

    let Some(summary) = FlightSummary::from_trajectory(&trajectory) else {
        eprintln!("Simulation produced no trajectory");
        return ExitCode::FAILURE;
    };

    print_report(&params, &config, &trajectory, &summary, &events, cli.rows);

    // -----------------------------------------------------------------------
    // Export
    // -----------------------------------------------------------------------
    if let Some(path) = &cli.csv {
        if let Err(err) = csv::write_trajectory_file(path, &trajectory) {
            eprintln!("Failed to write {path}: {err}");
            return ExitCode::FAILURE;
        }
        println!("Exported trajectory: {path}");
    }
    if let Some(path) = &cli.json {
        if let Err(err) = json::write_summary_file(path, &params, &summary) {
            eprintln!("Failed to write {path}: {err}");
            return ExitCode::FAILURE;
        }
        println!("Exported summary: {path}");
    }

    ExitCode::SUCCESS
}

fn event_label(kind: EventKind) -> &'static str {
    match kind {
        EventKind::Apex => "APEX",
        EventKind::GroundImpact => "IMPACT",
    }
}

fn print_report(
    params: &SimulationParameters,
    config: &SimConfig,
    trajectory: &TrajectoryResult,
    summary: &FlightSummary,
    events: &[SimEvent],
    rows: usize,
) {
    println!();
    println!("====================================================================");
    println!("  PROJECTILE FLIGHT WITH LINEAR DRAG");
    println!("====================================================================");
    println!();
    println!("  Launch Parameters");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Speed:         {:>8.2} m/s   Angle:        {:>8.2} deg",
        params.initial_speed(),
        params.launch_angle_degrees()
    );
    println!(
        "  Height:        {:>8.2} m     Drag k:       {:>8.4} 1/s",
        params.initial_height(),
        params.drag_coefficient()
    );
    println!(
        "  g:             {:>8.2} m/s^2 dt:           {:>8.3} s",
        config.gravity, config.dt
    );
    println!();

    println!("  Performance Summary");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  Max height:    {:>8.2} m     at t = {:.2} s",
        summary.apex_m, summary.apex_time_s
    );
    println!("  Range:         {:>8.2} m", summary.range_m);
    println!("  Flight time:   {:>8.2} s", summary.flight_time_s);
    println!("  Max speed:     {:>8.2} m/s", summary.max_speed_ms);
    println!("  Final speed:   {:>8.2} m/s", summary.impact_speed_ms);
    if summary.termination == Termination::TimeLimit {
        println!(
            "  Stopped at the {:.0} s time limit before reaching the ground",
            config.max_time
        );
    }
    println!();

    // -----------------------------------------------------------------------
    // Trajectory table (sampled)
    // -----------------------------------------------------------------------
    println!("  Trajectory");
    println!("  ──────────────────────────────────────────────────────────────────");
    println!(
        "  {:>7}  {:>10}  {:>10}  {:>10}",
        "t (s)", "x (m)", "y (m)", "v (m/s)"
    );
    println!("  {}", "─".repeat(44));

    let n = trajectory.len();
    let sample_interval = (n / rows.max(1)).max(1);
    for (i, (t, x, y, v)) in trajectory.points().enumerate() {
        if i % sample_interval != 0 && i != n - 1 {
            continue;
        }
        println!("  {:>7.2}  {:>10.2}  {:>10.2}  {:>10.2}", t, x, y, v);
    }

    println!();
    println!("  Simulation: {} steps, dt={} s", summary.steps, config.dt);
    println!();
    println!("  Flight Events");
    println!("  ──────────────────────────────────────────────────────────────────");
    for e in events {
        println!(
            "  {:<8}  t={:>7.2}s   x={:>9.2}m   y={:>9.2}m   v={:>8.2}m/s",
            event_label(e.kind),
            e.time,
            e.state.pos.x,
            e.state.pos.y,
            e.state.speed()
        );
    }
    println!("====================================================================");
    println!();
}
