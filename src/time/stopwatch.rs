use std::time::{Duration, Instant};

use tracing::info;

/// Measures the running time of a block of code.
///
/// Timing starts when the stopwatch is created; [`Stopwatch::start`] restarts
/// it. [`Stopwatch::stop`] reports the elapsed time through `tracing`.
///
/// ```
/// use sciutil::time::Stopwatch;
///
/// let mut watch = Stopwatch::new();
/// watch.start();
/// let total: u64 = (0..1000).sum();
/// let elapsed = watch.stop();
/// assert!(total > 0 && elapsed.as_secs() < 60);
/// ```
#[derive(Debug, Clone)]
pub struct Stopwatch {
    label: Option<String>,
    started: Instant,
}

impl Default for Stopwatch {
    fn default() -> Self {
        Self::new()
    }
}

impl Stopwatch {
    #[must_use]
    pub fn new() -> Self {
        Self {
            label: None,
            started: Instant::now(),
        }
    }

    /// A stopwatch whose report names what was timed
    #[must_use]
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            started: Instant::now(),
        }
    }

    /// Restart timing from now
    pub fn start(&mut self) {
        self.started = Instant::now();
    }

    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Log the elapsed time in seconds and minutes and return it
    pub fn stop(&self) -> Duration {
        let elapsed = self.elapsed();
        let seconds = elapsed.as_secs_f64();
        match &self.label {
            Some(label) => info!(label = %label, "Runtime: {seconds:.3} [sec]"),
            None => info!("Runtime: {seconds:.3} [sec]"),
        }
        info!("Runtime: {:.3} [min]", seconds / 60.0);
        elapsed
    }
}
