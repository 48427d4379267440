use crate::error::{with_last_error_mut, BarrelTempError, BarrelTempErrorCode};
use std::ffi::CString;

/// Record `error` as this thread's last error and return its code.
fn record_error(error: &impl BarrelTempError) -> BarrelTempErrorCode {
    let code = error.code();
    with_last_error_mut(|(message, last_code)| {
        // An interior NUL drops the message; the code is still recorded
        *message = CString::new(error.msg()).ok();
        *last_code = code;
    });
    code
}

/// Reset this thread's last error after a successful call.
fn clear_last_error() {
    with_last_error_mut(|(message, last_code)| {
        *message = None;
        *last_code = BarrelTempErrorCode::Ok;
    });
}

/// Body wrapper for `barrel_temp_compute` and `barrel_temp_reference_sweep`.
///
/// Runs `body`, then either clears the last error (returning `Ok`) or stores
/// the failure for `barrel_temp_get_last_error` and returns its code.
pub(crate) fn handle_ffi_result_error<E, F>(body: F) -> BarrelTempErrorCode
where
    E: BarrelTempError,
    F: FnOnce() -> Result<(), E>,
{
    match body() {
        Ok(()) => {
            clear_last_error();
            BarrelTempErrorCode::Ok
        }
        Err(error) => record_error(&error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{barrel_temp_get_last_error, barrel_temp_get_last_error_code, DefaultBarrelTempError};

    #[test]
    fn test_failure_then_success_clears_last_error() {
        let code = handle_ffi_result_error(|| Err(DefaultBarrelTempError::buffer_too_small(56, 10)));
        assert_eq!(code, BarrelTempErrorCode::BufferTooSmall);
        assert_eq!(barrel_temp_get_last_error_code(), BarrelTempErrorCode::BufferTooSmall);
        assert!(!barrel_temp_get_last_error().is_null());

        let code = handle_ffi_result_error(|| Ok::<(), DefaultBarrelTempError>(()));
        assert_eq!(code, BarrelTempErrorCode::Ok);
        assert_eq!(barrel_temp_get_last_error_code(), BarrelTempErrorCode::Ok);
        assert!(barrel_temp_get_last_error().is_null());
    }
}
