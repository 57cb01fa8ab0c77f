use crate::pa::{PaResult, PaError};
use std::ffi::CStr;
use std::time::Duration;

use libc::c_char;

pub fn to_pa_result(code: ll::PaError) -> PaResult
{
    if code == ll::paNoError
    {
        return Ok(());
    }
    Err(PaError::from_i32(code))
}

/// Non-negative counts and indices pass through, negative values are error codes.
pub fn to_pa_count(code: i32) -> Result<u32, PaError>
{
    match code
    {
        n if n >= 0 => Ok(n as u32),
        m => to_pa_result(m).map(|_| 0),
    }
}

/// Latencies below zero are clamped to zero.
pub fn pa_time_to_duration(seconds: ll::PaTime) -> Duration
{
    if seconds.is_finite() && seconds > 0.0
    {
        Duration::from_secs_f64(seconds)
    }
    else
    {
        Duration::from_secs(0)
    }
}

pub fn duration_to_pa_time(duration: Duration) -> ll::PaTime
{
    duration.as_secs_f64()
}

/// Copies a C string owned by PortAudio. A null pointer gives an empty string.
pub unsafe fn string_from_c(ptr: *const c_char) -> String
{
    if ptr.is_null()
    {
        return String::new();
    }
    String::from_utf8_lossy(CStr::from_ptr(ptr).to_bytes()).into_owned()
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn no_error_is_ok()
    {
        assert_eq!(to_pa_result(ll::paNoError), Ok(()));
        assert_eq!(to_pa_result(ll::paInternalError), Err(PaError::InternalError));
    }

    #[test]
    fn counts()
    {
        assert_eq!(to_pa_count(0), Ok(0));
        assert_eq!(to_pa_count(2), Ok(2));
        assert_eq!(to_pa_count(ll::paInvalidDevice), Err(PaError::InvalidDevice));
        assert_eq!(to_pa_count(-1), Err(PaError::UnknownError));
    }

    #[test]
    fn time_conversion()
    {
        assert_eq!(pa_time_to_duration(0.01), Duration::from_millis(10));
        assert_eq!(pa_time_to_duration(0.0), Duration::from_secs(0));
        assert_eq!(pa_time_to_duration(-3.0), Duration::from_secs(0));
        assert_eq!(pa_time_to_duration(f64::NAN), Duration::from_secs(0));
        assert_eq!(duration_to_pa_time(Duration::from_millis(100)), 0.1);
    }

    #[test]
    fn null_string()
    {
        assert_eq!(unsafe { string_from_c(::std::ptr::null()) }, "");
        assert_eq!(unsafe { string_from_c(c"Stub".as_ptr()) }, "Stub");
    }
}
