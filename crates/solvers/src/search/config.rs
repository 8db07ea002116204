use std::time::Duration;

use thiserror::Error;

/// How much the solver reports through `tracing` as it runs.
///
/// Limit reports are logged at `info` at every level.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum TraceLevel {
    /// No per-cell or per-solution logging.
    #[default]
    Silent,

    /// Log each accepted solution at `info`.
    Solutions,

    /// Also log the buffer state at `debug` on every iteration.
    Buffer,
}

impl TryFrom<u8> for TraceLevel {
    type Error = ConfigError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Self::Silent),
            1 => Ok(Self::Solutions),
            2 => Ok(Self::Buffer),
            _ => Err(ConfigError::TraceLevel(level)),
        }
    }
}

/// Configuration for the search engine.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Config {
    time_limit: Option<Duration>,
    cell_limit: Option<u64>,
    trace: TraceLevel,
}

/// Errors that can occur when validating a search config.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("time_limit must be finite (got {0} s); use a negative value for no limit")]
    TimeLimit(f64),

    #[error("trace level must be 0, 1, or 2 (got {0})")]
    TraceLevel(u8),
}

impl Config {
    /// Creates a new config.
    ///
    /// `None` means unlimited. A time limit is given in seconds.
    ///
    /// # Errors
    ///
    /// Returns an error if the time limit is negative or non-finite.
    pub fn new(
        time_limit: Option<f64>,
        cell_limit: Option<u64>,
        trace: TraceLevel,
    ) -> Result<Self, ConfigError> {
        let time_limit = match time_limit {
            Some(secs) => Some(
                Duration::try_from_secs_f64(secs).map_err(|_| ConfigError::TimeLimit(secs))?,
            ),
            None => None,
        };

        Ok(Self {
            time_limit,
            cell_limit,
            trace,
        })
    }

    /// Creates a config from raw option values.
    ///
    /// A negative time limit (seconds) or cell limit means unlimited.
    /// The trace level is 0 (silent), 1 (solutions), or 2 (buffer).
    ///
    /// # Errors
    ///
    /// Returns an error if the time limit is NaN or infinite, or if the trace
    /// level is above 2.
    pub fn from_raw(
        time_limit_secs: f64,
        cell_limit: i64,
        trace_level: u8,
    ) -> Result<Self, ConfigError> {
        let time_limit = if time_limit_secs < 0.0 {
            None
        } else {
            Some(time_limit_secs)
        };

        Self::new(
            time_limit,
            u64::try_from(cell_limit).ok(),
            TraceLevel::try_from(trace_level)?,
        )
    }

    /// Sets the wall-clock limit accumulated across `advance` calls.
    #[must_use]
    pub fn with_time_limit(self, time_limit: Duration) -> Self {
        Self {
            time_limit: Some(time_limit),
            ..self
        }
    }

    /// Sets the maximum number of cells created by bisection.
    #[must_use]
    pub fn with_cell_limit(self, cell_limit: u64) -> Self {
        Self {
            cell_limit: Some(cell_limit),
            ..self
        }
    }

    /// Sets the trace level.
    #[must_use]
    pub fn with_trace(self, trace: TraceLevel) -> Self {
        Self { trace, ..self }
    }

    /// Returns the time limit, if any.
    #[must_use]
    pub fn time_limit(&self) -> Option<Duration> {
        self.time_limit
    }

    /// Returns the cell limit, if any.
    #[must_use]
    pub fn cell_limit(&self) -> Option<u64> {
        self.cell_limit
    }

    /// Returns the trace level.
    #[must_use]
    pub fn trace(&self) -> TraceLevel {
        self.trace
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unlimited_and_silent() {
        let config = Config::default();

        assert_eq!(config.time_limit(), None);
        assert_eq!(config.cell_limit(), None);
        assert_eq!(config.trace(), TraceLevel::Silent);
    }

    #[test]
    fn negative_raw_values_mean_unlimited() {
        let config = Config::from_raw(-1.0, -1, 0).unwrap();

        assert_eq!(config, Config::default());
    }

    #[test]
    fn raw_values_become_limits() {
        let config = Config::from_raw(2.5, 100, 2).unwrap();

        assert_eq!(config.time_limit(), Some(Duration::from_millis(2500)));
        assert_eq!(config.cell_limit(), Some(100));
        assert_eq!(config.trace(), TraceLevel::Buffer);
    }

    #[test]
    fn zero_limits_are_kept() {
        let config = Config::from_raw(0.0, 0, 1).unwrap();

        assert_eq!(config.time_limit(), Some(Duration::ZERO));
        assert_eq!(config.cell_limit(), Some(0));
    }

    #[test]
    fn rejects_non_finite_time_limit() {
        assert!(matches!(
            Config::from_raw(f64::INFINITY, -1, 0),
            Err(ConfigError::TimeLimit(_))
        ));
        assert!(matches!(
            Config::from_raw(f64::NAN, -1, 0),
            Err(ConfigError::TimeLimit(_))
        ));
        assert!(matches!(
            Config::new(Some(-3.0), None, TraceLevel::Silent),
            Err(ConfigError::TimeLimit(_))
        ));
    }

    #[test]
    fn rejects_unknown_trace_level() {
        assert_eq!(Config::from_raw(-1.0, -1, 3), Err(ConfigError::TraceLevel(3)));
    }

    #[test]
    fn builders_set_fields() {
        let config = Config::default()
            .with_time_limit(Duration::from_secs(1))
            .with_cell_limit(8)
            .with_trace(TraceLevel::Solutions);

        assert_eq!(config.time_limit(), Some(Duration::from_secs(1)));
        assert_eq!(config.cell_limit(), Some(8));
        assert!(config.trace() >= TraceLevel::Solutions);
    }
}
