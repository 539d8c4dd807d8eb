//! Progress reporting hooks.
//!
//! The annealer reports once per outer step, before the inner trials run.
//! Sinks only observe; a run produces the same result with or without one.

/// Snapshot handed to a [`ProgressSink`] at the start of each outer step.
#[derive(Debug)]
pub struct StepReport<'a, S> {
    /// Temperature step index `t`.
    pub step: usize,
    /// Schedule temperature at `step`.
    pub temperature: f64,
    /// Current state.
    pub state: &'a S,
    /// Energy of the current state.
    pub energy: f64,
    /// Best energy seen so far in the run.
    pub best_energy: f64,
}

/// Receives per-step progress from the annealer.
///
/// Closures taking a `&StepReport` are sinks, as is any type implementing
/// the trait:
///
/// ```
/// use u_anneal::sa::{ProgressSink, StepReport};
///
/// #[derive(Default)]
/// struct Steps(Vec<usize>);
///
/// impl<S> ProgressSink<S> for Steps {
///     fn on_step(&mut self, report: &StepReport<'_, S>) {
///         self.0.push(report.step);
///     }
/// }
///
/// let mut sink = Steps::default();
/// let state = vec![0usize];
/// sink.on_step(&StepReport { step: 3, temperature: 1.0, state: &state, energy: 0.0, best_energy: 0.0 });
/// assert_eq!(sink.0, vec![3]);
/// ```
pub trait ProgressSink<S> {
    fn on_step(&mut self, report: &StepReport<'_, S>);
}

impl<S, F> ProgressSink<S> for F
where
    F: FnMut(&StepReport<'_, S>),
{
    fn on_step(&mut self, report: &StepReport<'_, S>) {
        self(report)
    }
}

/// Discards every report.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl<S> ProgressSink<S> for NoProgress {
    fn on_step(&mut self, _report: &StepReport<'_, S>) {}
}

/// Records `(step, energy)` for every outer step.
///
/// This is the series a caller plots as the energy curve of a run (route
/// length, negated knapsack value, scaled Hamming distance).
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnergyTrace {
    points: Vec<(usize, f64)>,
}

impl EnergyTrace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded `(step, energy)` pairs in step order.
    pub fn points(&self) -> &[(usize, f64)] {
        &self.points
    }

    /// Recorded energies in step order.
    pub fn energies(&self) -> Vec<f64> {
        self.points.iter().map(|&(_, e)| e).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Clears the trace so it can be reused for another run.
    pub fn clear(&mut self) {
        self.points.clear();
    }
}

impl<S> ProgressSink<S> for EnergyTrace {
    fn on_step(&mut self, report: &StepReport<'_, S>) {
        self.points.push((report.step, report.energy));
    }
}

/// Emits one `info` log line per outer step.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogProgress;

impl<S: std::fmt::Debug> ProgressSink<S> for LogProgress {
    fn on_step(&mut self, report: &StepReport<'_, S>) {
        log::info!(
            "iter: t = {}, T = {:.6}, E = {}, best = {}",
            report.step,
            report.temperature,
            report.energy,
            report.best_energy
        );
        log::trace!("state at t = {}: {:?}", report.step, report.state);
    }
}
