//! C ABI for the barrel temperature calculator.
//!
//! Every fallible function returns a `BarrelTempErrorCode` and records a
//! message retrievable with `barrel_temp_get_last_error()` on the same thread.
//! All output buffers are caller-owned; nothing allocated here crosses the
//! boundary except the borrowed last-error string.

mod error;
mod helpers;
mod parameters;

use barrel_temp_core::{compute_internal_temperatures, Celsius, TemperatureSweep, ThermalParameters};
use std::slice;

pub use error::{barrel_temp_get_last_error, barrel_temp_get_last_error_code, BarrelTempErrorCode};
pub use parameters::{barrel_temp_default_parameters, BarrelThermalParameters};

use error::DefaultBarrelTempError;
use helpers::handle_ffi_result_error;

/// Estimate internal wall temperatures for `len` external temperatures.
///
/// - `params` points to the wall parameters.
/// - `external` points to `len` external temperatures (°C), any order.
/// - `out_internal` receives `len` internal temperatures (°C), unrounded, in
///   the same order. Left untouched on error.
///
/// When `len` is 0, `external` and `out_internal` may be null.
///
/// Returns
/// - `Ok` (0) on success
/// - `NullPointer` if a required pointer is null
/// - `InvalidParameter` if a parameter or external temperature is out of domain
/// - `SingularModel` if the elapsed time is zero
/// - `NumericOverflow` if the result is not finite
///
/// # Safety
/// `params` must be valid for reads. When `len > 0`, `external` must be valid
/// for `len` reads and `out_internal` for `len` writes, and they must not overlap.
#[no_mangle]
pub unsafe extern "C" fn barrel_temp_compute(
    params: *const BarrelThermalParameters,
    external: *const f64,
    len: usize,
    out_internal: *mut f64,
) -> BarrelTempErrorCode {
    handle_ffi_result_error(|| {
        if params.is_null() {
            return Err(DefaultBarrelTempError::null_pointer("params"));
        }
        if len > 0 && external.is_null() {
            return Err(DefaultBarrelTempError::null_pointer("external"));
        }
        if len > 0 && out_internal.is_null() {
            return Err(DefaultBarrelTempError::null_pointer("out_internal"));
        }

        // SAFETY: non-null checked above, validity is the caller's contract
        let params = ThermalParameters::from(unsafe { *params });
        let external: Vec<Celsius> = if len == 0 {
            Vec::new()
        } else {
            // SAFETY: non-null, caller guarantees `len` readable values
            unsafe { slice::from_raw_parts(external, len) }
                .iter()
                .copied()
                .map(Celsius::new)
                .collect()
        };

        let internal = compute_internal_temperatures(&params, &external)?;
        if len > 0 {
            // SAFETY: non-null, caller guarantees `len` writable values
            let out = unsafe { slice::from_raw_parts_mut(out_internal, len) };
            for (slot, value) in out.iter_mut().zip(internal) {
                *slot = *value;
            }
        }
        Ok(())
    })
}

/// Write the reference sweep (25°C to 300°C in 5°C steps) into `out`.
///
/// - `out` receives up to `capacity` temperatures (°C), ascending.
/// - `out_len` receives the number of samples in the sweep, also on
///   `BufferTooSmall`, so callers can size their buffer with a first call
///   using `capacity = 0`.
///
/// Returns
/// - `Ok` (0) on success
/// - `NullPointer` if `out_len` is null, or `out` is null with `capacity > 0`
/// - `BufferTooSmall` if `capacity` is less than the sweep length
///
/// # Safety
/// `out_len` must be valid for a write and `out` valid for `capacity` writes.
#[no_mangle]
pub unsafe extern "C" fn barrel_temp_reference_sweep(
    out: *mut f64,
    capacity: usize,
    out_len: *mut usize,
) -> BarrelTempErrorCode {
    handle_ffi_result_error(|| {
        if out_len.is_null() {
            return Err(DefaultBarrelTempError::null_pointer("out_len"));
        }
        let samples = TemperatureSweep::reference().samples()?;
        // SAFETY: non-null checked above
        unsafe {
            *out_len = samples.len();
        }

        if capacity < samples.len() {
            return Err(DefaultBarrelTempError::buffer_too_small(samples.len(), capacity));
        }
        if out.is_null() {
            return Err(DefaultBarrelTempError::null_pointer("out"));
        }
        // SAFETY: non-null, capacity >= samples.len() per caller contract
        let out = unsafe { slice::from_raw_parts_mut(out, samples.len()) };
        for (slot, sample) in out.iter_mut().zip(samples) {
            *slot = *sample;
        }
        Ok(())
    })
}
