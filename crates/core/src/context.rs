use crate::params::Params;

/// Read-only per-tick inputs shared by every system in the tick.
#[derive(Copy, Clone, Debug)]
pub struct SimulationContext<'a> {
    /// Monotonic simulation time in seconds at this tick.
    pub now: f64,
    /// Tick duration in seconds. Only ever used as a multiplier.
    pub dt: f32,
    pub params: &'a Params,
}

impl<'a> SimulationContext<'a> {
    pub fn new(params: &'a Params, now: f64, dt: f32) -> Self {
        Self { now, dt, params }
    }
}
