//! Parameters → curve → report pipeline

use crate::core_types::{TemperatureSweep, ThermalParameters};
use crate::error::CalculationError;
use crate::physics::compute_curve;
use crate::report::{build_report, Report};

/// Run the whole pipeline for one request.
///
/// # Errors
/// `CalculationError::Sweep` for a bad sweep, `CalculationError::Model` for
/// anything the thermal model rejects. Nothing is returned on failure.
pub fn calculate(
    params: &ThermalParameters,
    sweep: &TemperatureSweep,
) -> Result<Report, CalculationError> {
    let samples = sweep.samples().inspect_err(|e| {
        tracing::warn!(error = %e, "rejected temperature sweep");
    })?;
    let curve = compute_curve(params, &samples).inspect_err(|e| {
        tracing::warn!(error = %e, "thermal model rejected parameters");
    })?;
    Ok(build_report(params, &curve))
}

/// Recomputes only when its inputs change.
///
/// Front-ends that re-run on every edit hand each new immutable parameter set
/// to [`Calculator::report`]; identical inputs reuse the last report.
#[derive(Debug, Default)]
pub struct Calculator {
    last: Option<(ThermalParameters, TemperatureSweep, Report)>,
}

impl Calculator {
    /// Empty cache
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for `params`/`sweep`, cached when unchanged.
    ///
    /// A failed calculation leaves the previous report in place.
    ///
    /// # Errors
    /// See [`calculate`].
    pub fn report(
        &mut self,
        params: &ThermalParameters,
        sweep: &TemperatureSweep,
    ) -> Result<&Report, CalculationError> {
        let entry = match self.last.take() {
            Some(entry) if entry.0 == *params && entry.1 == *sweep => {
                tracing::trace!("reusing cached report");
                entry
            }
            previous => match calculate(params, sweep) {
                Ok(report) => (*params, *sweep, report),
                Err(e) => {
                    self.last = previous;
                    return Err(e);
                }
            },
        };
        Ok(&self.last.insert(entry).2)
    }

    /// Most recent successful report, if any
    pub fn last_report(&self) -> Option<&Report> {
        self.last.as_ref().map(|(_, _, report)| report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Seconds;
    use crate::error::{SweepError, ThermalModelError};

    #[test]
    fn test_reference_calculation() {
        let report = calculate(&ThermalParameters::default(), &TemperatureSweep::reference()).unwrap();
        assert_eq!(report.table().len(), 56);
    }

    #[test]
    fn test_errors_are_propagated_unchanged() {
        let singular = ThermalParameters {
            elapsed: Seconds::new(0.0),
            ..ThermalParameters::default()
        };
        assert_eq!(
            calculate(&singular, &TemperatureSweep::reference()).unwrap_err(),
            CalculationError::Model(ThermalModelError::SingularModel)
        );
        assert_eq!(
            calculate(&ThermalParameters::default(), &TemperatureSweep::new(0.0, 10.0, -1.0)).unwrap_err(),
            CalculationError::Sweep(SweepError::NonPositiveStep(-1.0))
        );
    }

    #[test]
    fn test_cache_reused_and_refreshed() {
        let mut calc = Calculator::new();
        let sweep = TemperatureSweep::reference();
        let params = ThermalParameters::default();

        let first = calc.report(&params, &sweep).unwrap().clone();
        let again = calc.report(&params, &sweep).unwrap().clone();
        assert_eq!(first, again);

        let later = ThermalParameters {
            elapsed: Seconds::new(60.0),
            ..params
        };
        let refreshed = calc.report(&later, &sweep).unwrap();
        assert_eq!(refreshed.parameters().elapsed, Seconds::new(60.0));
        assert_ne!(refreshed.table().rows()[55], first.table().rows()[55]);
    }

    #[test]
    fn test_failure_keeps_previous_report() {
        let mut calc = Calculator::new();
        let sweep = TemperatureSweep::reference();
        calc.report(&ThermalParameters::default(), &sweep).unwrap();

        let bad = ThermalParameters {
            elapsed: Seconds::new(0.0),
            ..ThermalParameters::default()
        };
        assert!(calc.report(&bad, &sweep).is_err());
        assert_eq!(
            calc.last_report().map(|r| *r.parameters()),
            Some(ThermalParameters::default())
        );
    }
}
