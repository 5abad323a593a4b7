use crate::dynamics::state::State;

// ---------------------------------------------------------------------------
// Flight events
// ---------------------------------------------------------------------------

/// Kinds of flight events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Apex,
    GroundImpact,
}

/// A discrete event found in a recorded trajectory.
#[derive(Debug, Clone)]
pub struct SimEvent {
    pub time: f64,
    pub kind: EventKind,
    pub state: State,
}

/// Trait for passive event detectors.
/// Implementations inspect consecutive states and report events.
pub trait EventDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind>;
}

/// Detects the apex (vertical velocity turning from rising to falling).
/// Reports on the first state with vy <= 0.
#[derive(Debug, Default)]
pub struct ApexDetector {
    fired: bool,
}

impl EventDetector for ApexDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        if !self.fired && prev.vel.y > 0.0 && current.vel.y <= 0.0 {
            self.fired = true;
            Some(EventKind::Apex)
        } else {
            None
        }
    }
}

/// Detects the step that crosses from y >= 0 to below ground.
#[derive(Debug, Default)]
pub struct GroundDetector;

impl EventDetector for GroundDetector {
    fn check(&mut self, prev: &State, current: &State) -> Option<EventKind> {
        (prev.pos.y >= 0.0 && current.pos.y < 0.0).then_some(EventKind::GroundImpact)
    }
}

/// Scan a trajectory with the apex and ground detectors, in time order.
pub fn detect_events(trajectory: &[State]) -> Vec<SimEvent> {
    let mut detectors: Vec<Box<dyn EventDetector>> =
        vec![Box::new(ApexDetector::default()), Box::new(GroundDetector)];
    let mut events = Vec::new();

    for pair in trajectory.windows(2) {
        for det in detectors.iter_mut() {
            if let Some(kind) = det.check(&pair[0], &pair[1]) {
                events.push(SimEvent {
                    time: pair[1].time,
                    kind,
                    state: pair[1].clone(),
                });
            }
        }
    }

    events
}
