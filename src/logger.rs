//! Verbosity-gated progress output for pipeline runs.

use crate::metrics::MetricValue;

/// Output level, ordered from quietest to loudest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    Silent,
    Warning,
    Info,
    Debug,
}

impl Default for Verbosity {
    fn default() -> Self {
        Verbosity::Info
    }
}

impl Verbosity {
    /// Parse a CLI-style level name.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "silent" => Some(Verbosity::Silent),
            "warning" => Some(Verbosity::Warning),
            "info" => Some(Verbosity::Info),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }
}

/// Stage-aware logger for the batch pipeline. Everything goes to stdout;
/// failures are reported by the caller through the error path instead.
#[derive(Debug, Clone, Copy)]
pub struct PipelineLogger {
    verbosity: Verbosity,
}

impl PipelineLogger {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    pub fn log_dataset(&self, path: &str, n_rows: usize) {
        if self.verbosity >= Verbosity::Info {
            println!("loaded {n_rows} scenario rows from {path}");
        }
    }

    pub fn log_split(&self, n_train: usize, n_test: usize, seed: u64) {
        if self.verbosity >= Verbosity::Info {
            println!("split into {n_train} train / {n_test} test rows (seed {seed})");
        }
    }

    pub fn log_fit(&self, n_coefficients: usize) {
        if self.verbosity >= Verbosity::Info {
            println!("fitted OLS model with {n_coefficients} coefficients + intercept");
        }
    }

    pub fn log_metric(&self, value: &MetricValue) {
        if self.verbosity >= Verbosity::Info {
            println!("{value}");
        }
    }

    pub fn warn(&self, message: &str) {
        if self.verbosity >= Verbosity::Warning {
            println!("warning: {message}");
        }
    }

    pub fn debug(&self, message: &str) {
        if self.verbosity >= Verbosity::Debug {
            println!("debug: {message}");
        }
    }
}
