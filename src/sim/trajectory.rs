use serde::Serialize;

use crate::dynamics::state::State;

/// Why the integration loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Termination {
    /// The last recorded point is the first one below y = 0.
    GroundImpact,
    /// The last recorded time passed the configured bound while airborne.
    TimeLimit,
}

/// Recorded trajectory as four parallel sequences of equal length:
/// time, downrange position, height and speed.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrajectoryResult {
    pub t: Vec<f64>,
    pub x: Vec<f64>,
    pub y: Vec<f64>,
    pub v: Vec<f64>,
    pub termination: Termination,
}

impl TrajectoryResult {
    pub fn from_states(states: &[State], termination: Termination) -> Self {
        let n = states.len();
        let mut result = TrajectoryResult {
            t: Vec::with_capacity(n),
            x: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            v: Vec::with_capacity(n),
            termination,
        };
        for s in states {
            result.t.push(s.time);
            result.x.push(s.pos.x);
            result.y.push(s.pos.y);
            result.v.push(s.speed());
        }
        result
    }

    /// Collect a finished run, deriving the termination from its last point.
    pub fn from_run(states: &[State]) -> Self {
        let termination = match states.last() {
            Some(s) if s.pos.y < 0.0 => Termination::GroundImpact,
            _ => Termination::TimeLimit,
        };
        Self::from_states(states, termination)
    }

    /// Number of recorded points, initial condition included.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    /// Rows of `(t, x, y, v)`.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64, f64)> + '_ {
        self.t
            .iter()
            .zip(&self.x)
            .zip(&self.y)
            .zip(&self.v)
            .map(|(((&t, &x), &y), &v)| (t, x, y, v))
    }

    pub fn last(&self) -> Option<(f64, f64, f64, f64)> {
        let i = self.len().checked_sub(1)?;
        Some((self.t[i], self.x[i], self.y[i], self.v[i]))
    }
}
