use std::cell::RefCell;
use std::ffi::CString;
use std::os::raw::c_char;
use std::ptr;

use barrel_temp_core::{SweepError, ThermalModelError};

/// An error that can be reported through `barrel_temp_get_last_error*`.
pub(crate) trait BarrelTempError {
    /// Code handed back to the C caller.
    fn code(&self) -> BarrelTempErrorCode;

    /// Message stored for `barrel_temp_get_last_error`.
    fn msg(&self) -> &str;
}

/// Default implementation of `BarrelTempError` for FFI failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct DefaultBarrelTempError {
    code: BarrelTempErrorCode,
    msg: String,
}

impl DefaultBarrelTempError {
    /// A required pointer argument was null.
    ///
    /// # Arguments
    /// * `param_name` - The name of the parameter that was null (e.g., `"params"`, `"out_internal"`)
    pub fn null_pointer(param_name: &str) -> Self {
        Self {
            code: BarrelTempErrorCode::NullPointer,
            msg: format!("Parameter '{param_name}' cannot be null"),
        }
    }

    /// Create error for an output buffer that cannot hold the result.
    ///
    /// # Arguments
    /// * `required` - Number of elements the caller must provide room for
    /// * `capacity` - Number of elements the caller provided
    pub fn buffer_too_small(required: usize, capacity: usize) -> Self {
        Self {
            code: BarrelTempErrorCode::BufferTooSmall,
            msg: format!("Output buffer holds {capacity} values, {required} required"),
        }
    }
}

impl From<ThermalModelError> for DefaultBarrelTempError {
    fn from(error: ThermalModelError) -> Self {
        let code = match error {
            ThermalModelError::InvalidParameter { .. } => BarrelTempErrorCode::InvalidParameter,
            ThermalModelError::SingularModel => BarrelTempErrorCode::SingularModel,
            ThermalModelError::NumericOverflow { .. } => BarrelTempErrorCode::NumericOverflow,
        };
        Self {
            code,
            msg: error.to_string(),
        }
    }
}

impl From<SweepError> for DefaultBarrelTempError {
    fn from(error: SweepError) -> Self {
        Self {
            code: BarrelTempErrorCode::InvalidParameter,
            msg: error.to_string(),
        }
    }
}

impl BarrelTempError for DefaultBarrelTempError {
    fn code(&self) -> BarrelTempErrorCode {
        self.code
    }

    fn msg(&self) -> &str {
        &self.msg
    }
}

/// FFI error codes returned by barrel temperature functions.
/// Zero means success.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarrelTempErrorCode {
    /// Success.
    Ok = 0,

    /// A required pointer argument was null.
    NullPointer = 1,

    /// A wall parameter or external temperature is outside its valid domain
    /// (non-finite, non-positive thickness/conductivity/density/specific heat,
    /// or negative elapsed time).
    InvalidParameter = 2,

    /// Elapsed time is zero: the wall model cannot be inverted.
    SingularModel = 3,

    /// The decay factor or a result is not a finite number.
    NumericOverflow = 4,

    /// Caller-provided output buffer is too small.
    BufferTooSmall = 5,
}

impl From<DefaultBarrelTempError> for BarrelTempErrorCode {
    fn from(error: DefaultBarrelTempError) -> Self {
        error.code
    }
}

thread_local! {
    /// Last error on this thread. Owning the `CString` here keeps pointers
    /// returned by `barrel_temp_get_last_error` valid until the next call.
    static LAST_ERROR: RefCell<(Option<CString>, BarrelTempErrorCode)> = const { RefCell::new((None, BarrelTempErrorCode::Ok)) };
}

/// Borrow this thread's last error.
pub(crate) fn with_last_error<F, R>(f: F) -> R
where
    F: FnOnce(&(Option<CString>, BarrelTempErrorCode)) -> R,
{
    LAST_ERROR.with_borrow(f)
}

/// Mutably borrow this thread's last error.
pub(crate) fn with_last_error_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut (Option<CString>, BarrelTempErrorCode)) -> R,
{
    LAST_ERROR.with_borrow_mut(f)
}

/// Message of the last failed call on this thread, as a NUL-terminated string.
///
/// Returns:
/// - A borrowed pointer to the error message if the last call on this thread failed.
/// - `null` if the last call succeeded.
///
/// # Lifetime
/// The returned pointer is valid until the next FFI call on this thread.
///
/// The string is owned by the library; callers must not free it.
///
/// Example:
/// ```c
/// double internal[56];
/// BarrelTempErrorCode err = barrel_temp_compute(&params, external, 56, internal);
/// if (err != Ok) {
///     const char* error = barrel_temp_get_last_error();
///     if (error) {
///         printf("Calculation failed: %s\n", error);
///     }
/// }
/// ```
#[no_mangle]
pub extern "C" fn barrel_temp_get_last_error() -> *const c_char {
    with_last_error(|(cstring, _code)| cstring.as_ref().map_or(ptr::null(), |cs| cs.as_ptr()))
}

/// Code of the last failed call on this thread.
///
/// Returns:
/// - `BarrelTempErrorCode::Ok` (0) if the last call on this thread succeeded
/// - otherwise the code of the last failure
#[no_mangle]
pub extern "C" fn barrel_temp_get_last_error_code() -> BarrelTempErrorCode {
    with_last_error(|(_cstring, code)| *code)
}
