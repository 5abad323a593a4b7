use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::error::ExportError;
use crate::sim::TrajectoryResult;

#[derive(Serialize)]
struct Row {
    t: f64,
    x: f64,
    y: f64,
    v: f64,
}

/// Write trajectory data to CSV format.
///
/// Columns: t, x, y, v
pub fn write_trajectory<W: Write>(writer: W, trajectory: &TrajectoryResult) -> Result<(), ExportError> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (t, x, y, v) in trajectory.points() {
        wtr.serialize(Row { t, x, y, v })?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write trajectory to a CSV file at the given path.
pub fn write_trajectory_file<P: AsRef<Path>>(
    path: P,
    trajectory: &TrajectoryResult,
) -> Result<(), ExportError> {
    let file = std::fs::File::create(path)?;
    write_trajectory(file, trajectory)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::Termination;

    #[test]
    fn csv_output_has_header_and_rows() {
        let traj = TrajectoryResult {
            t: vec![0.0, 0.01],
            x: vec![0.0, 0.5],
            y: vec![1.0, 1.25],
            v: vec![50.0, 49.9],
            termination: Termination::TimeLimit,
        };

        let mut buf = Vec::new();
        write_trajectory(&mut buf, &traj).unwrap();
        let output = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "t,x,y,v");
        assert_eq!(lines.len(), 3); // header + 2 data rows
        assert_eq!(lines[2], "0.01,0.5,1.25,49.9");
    }
}
