use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::dynamics::state::SimulationParameters;
use crate::error::ExportError;
use crate::sim::{Termination, TrajectoryResult};

/// Summary statistics computed from a flight trajectory.
#[derive(Debug, Clone, Serialize)]
pub struct FlightSummary {
    pub apex_m: f64,
    pub apex_time_s: f64,
    pub range_m: f64,
    pub flight_time_s: f64,
    pub max_speed_ms: f64,
    pub impact_speed_ms: f64,
    pub steps: usize,
    pub termination: Termination,
}

impl FlightSummary {
    /// Compute summary from trajectory data. `None` for an empty trajectory.
    pub fn from_trajectory(trajectory: &TrajectoryResult) -> Option<Self> {
        let (flight_time, range, _, impact_speed) = trajectory.last()?;

        let (apex_idx, apex) = trajectory
            .y
            .iter()
            .copied()
            .enumerate()
            .fold((0, f64::NEG_INFINITY), |best, (i, y)| if y > best.1 { (i, y) } else { best });

        let max_speed = trajectory.v.iter().copied().fold(0.0_f64, f64::max);

        Some(FlightSummary {
            apex_m: apex,
            apex_time_s: trajectory.t[apex_idx],
            range_m: range,
            flight_time_s: flight_time,
            max_speed_ms: max_speed,
            impact_speed_ms: impact_speed,
            steps: trajectory.len() - 1,
            termination: trajectory.termination,
        })
    }
}

#[derive(Serialize)]
struct LaunchRecord {
    initial_speed_ms: f64,
    launch_angle_deg: f64,
    initial_height_m: f64,
    drag_coefficient: f64,
}

#[derive(Serialize)]
struct SummaryDocument<'a> {
    launch: LaunchRecord,
    performance: &'a FlightSummary,
}

/// Write launch parameters and flight summary as pretty JSON.
pub fn write_summary<W: Write>(
    writer: W,
    params: &SimulationParameters,
    summary: &FlightSummary,
) -> Result<(), ExportError> {
    let doc = SummaryDocument {
        launch: LaunchRecord {
            initial_speed_ms: params.initial_speed(),
            launch_angle_deg: params.launch_angle_degrees(),
            initial_height_m: params.initial_height(),
            drag_coefficient: params.drag_coefficient(),
        },
        performance: summary,
    };
    serde_json::to_writer_pretty(writer, &doc)?;
    Ok(())
}

/// Write flight summary JSON to a file.
pub fn write_summary_file<P: AsRef<Path>>(
    path: P,
    params: &SimulationParameters,
    summary: &FlightSummary,
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_summary(file, params, summary)
}
