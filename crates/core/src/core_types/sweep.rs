//! External-temperature sweep generator

use serde::{Deserialize, Serialize};

use super::units::Celsius;
use crate::error::SweepError;

/// Inclusive, ascending range of external surface temperatures.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TemperatureSweep {
    /// First sample
    pub start: Celsius,
    /// Last sample (included when it lies on the step grid)
    pub end: Celsius,
    /// Spacing between samples in °C
    pub step: f64,
}

impl Default for TemperatureSweep {
    fn default() -> Self {
        Self::reference()
    }
}

impl TemperatureSweep {
    /// Upper bound on the number of samples a sweep may produce.
    pub const MAX_SAMPLES: usize = 100_000;

    /// 25°C to 300°C in 5°C steps (56 samples).
    pub const fn reference() -> Self {
        Self {
            start: Celsius::new(25.0),
            end: Celsius::new(300.0),
            step: 5.0,
        }
    }

    /// Create a sweep; not validated until sampled.
    pub fn new(start: f64, end: f64, step: f64) -> Self {
        Self {
            start: Celsius::new(start),
            end: Celsius::new(end),
            step,
        }
    }

    /// Check bounds and step.
    ///
    /// # Errors
    /// Returns `SweepError` for non-finite values, a step `<= 0`, or `end < start`.
    pub fn validate(&self) -> Result<(), SweepError> {
        for (field, value) in [("start", *self.start), ("end", *self.end), ("step", self.step)] {
            if !value.is_finite() {
                return Err(SweepError::NonFinite { field, value });
            }
        }
        if self.step <= 0.0 {
            return Err(SweepError::NonPositiveStep(self.step));
        }
        if self.end < self.start {
            return Err(SweepError::Descending {
                start: *self.start,
                end: *self.end,
            });
        }
        Ok(())
    }

    /// Number of samples.
    ///
    /// # Errors
    /// See [`Self::validate`]; also `SweepError::TooManySamples` above
    /// [`Self::MAX_SAMPLES`].
    pub fn len(&self) -> Result<usize, SweepError> {
        self.validate()?;
        // Tolerance keeps an end point that lands on the grid despite rounding
        let span = (self.end - self.start) / self.step;
        let count = (span + 1e-9).floor() + 1.0;
        if count > Self::MAX_SAMPLES as f64 {
            return Err(SweepError::TooManySamples {
                requested: count,
                limit: Self::MAX_SAMPLES,
            });
        }
        Ok(count as usize)
    }

    /// Ascending samples `start + i * step`, end inclusive.
    ///
    /// # Errors
    /// See [`Self::len`].
    pub fn samples(&self) -> Result<Vec<Celsius>, SweepError> {
        let count = self.len()?;
        Ok((0..count)
            .map(|i| self.start + i as f64 * self.step)
            .collect())
    }
}
