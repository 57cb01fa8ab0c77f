//! General utilities for PortAudio

use crate::util::{string_from_c, to_pa_result};
use std::error::Error;
use std::fmt;

/// PortAudio version
pub fn version() -> i32
{
    unsafe { ll::Pa_GetVersion() }
}

/// Human-readable PortAudio version
///
/// The stub backend embeds the time it was compiled.
pub fn version_text() -> String
{
    unsafe { string_from_c(ll::Pa_GetVersionText()) }
}

/// Whether the stub backend is serving the PortAudio calls
///
/// The stub reports two fixed devices and only supports blocking streams.
pub fn is_stub() -> bool
{
    ll::STUB_BACKEND
}

/// Initialize the PortAudio API
///
/// Each successful call must be matched by a call to terminate
pub fn initialize() -> PaResult
{
    to_pa_result(unsafe { ll::Pa_Initialize() })
}

/// Terminate the PortAudio API
///
/// Call this function exactly once for each successful call to initialize
pub fn terminate() -> PaResult
{
    to_pa_result(unsafe { ll::Pa_Terminate() })
}

// PaError and PaResult

/// Enum for all possible errors given by PortAudio
///
/// The NoError value (0) is not present since the Result type can be used then.
#[repr(i32)]
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[allow(missing_docs)]
pub enum PaError
{
    // paNoError is not present in this enum
    NotInitialized = ll::paNotInitialized,
    UnanticipatedHostError = ll::paUnanticipatedHostError,
    InvalidChannelCount = ll::paInvalidChannelCount,
    InvalidSampleRate = ll::paInvalidSampleRate,
    InvalidDevice = ll::paInvalidDevice,
    InvalidFlag = ll::paInvalidFlag,
    SampleFormatNotSupported = ll::paSampleFormatNotSupported,
    BadIODeviceCombination = ll::paBadIODeviceCombination,
    InsufficientMemory = ll::paInsufficientMemory,
    BufferTooBig = ll::paBufferTooBig,
    BufferTooSmall = ll::paBufferTooSmall,
    NullCallback = ll::paNullCallback,
    BadStreamPtr = ll::paBadStreamPtr,
    TimedOut = ll::paTimedOut,
    InternalError = ll::paInternalError,
    DeviceUnavailable = ll::paDeviceUnavailable,
    IncompatibleHostApiSpecificStreamInfo = ll::paIncompatibleHostApiSpecificStreamInfo,
    StreamIsStopped = ll::paStreamIsStopped,
    StreamIsNotStopped = ll::paStreamIsNotStopped,
    InputOverflowed = ll::paInputOverflowed,
    OutputUnderflowed = ll::paOutputUnderflowed,
    HostApiNotFound = ll::paHostApiNotFound,
    InvalidHostApi = ll::paInvalidHostApi,
    CanNotReadFromACallbackStream = ll::paCanNotReadFromACallbackStream,
    CanNotWriteToACallbackStream = ll::paCanNotWriteToACallbackStream,
    CanNotReadFromAnOutputOnlyStream = ll::paCanNotReadFromAnOutputOnlyStream,
    CanNotWriteToAnInputOnlyStream = ll::paCanNotWriteToAnInputOnlyStream,
    IncompatibleStreamHostApi = ll::paIncompatibleStreamHostApi,
    BadBufferPtr = ll::paBadBufferPtr,

    /// A code PortAudio does not document
    UnknownError,
}

impl PaError
{
    /// Map a raw PortAudio error code. Codes without a variant, including
    /// paNoError, become UnknownError.
    pub fn from_i32(code: i32) -> PaError
    {
        match code
        {
            ll::paNotInitialized => PaError::NotInitialized,
            ll::paUnanticipatedHostError => PaError::UnanticipatedHostError,
            ll::paInvalidChannelCount => PaError::InvalidChannelCount,
            ll::paInvalidSampleRate => PaError::InvalidSampleRate,
            ll::paInvalidDevice => PaError::InvalidDevice,
            ll::paInvalidFlag => PaError::InvalidFlag,
            ll::paSampleFormatNotSupported => PaError::SampleFormatNotSupported,
            ll::paBadIODeviceCombination => PaError::BadIODeviceCombination,
            ll::paInsufficientMemory => PaError::InsufficientMemory,
            ll::paBufferTooBig => PaError::BufferTooBig,
            ll::paBufferTooSmall => PaError::BufferTooSmall,
            ll::paNullCallback => PaError::NullCallback,
            ll::paBadStreamPtr => PaError::BadStreamPtr,
            ll::paTimedOut => PaError::TimedOut,
            ll::paInternalError => PaError::InternalError,
            ll::paDeviceUnavailable => PaError::DeviceUnavailable,
            ll::paIncompatibleHostApiSpecificStreamInfo => PaError::IncompatibleHostApiSpecificStreamInfo,
            ll::paStreamIsStopped => PaError::StreamIsStopped,
            ll::paStreamIsNotStopped => PaError::StreamIsNotStopped,
            ll::paInputOverflowed => PaError::InputOverflowed,
            ll::paOutputUnderflowed => PaError::OutputUnderflowed,
            ll::paHostApiNotFound => PaError::HostApiNotFound,
            ll::paInvalidHostApi => PaError::InvalidHostApi,
            ll::paCanNotReadFromACallbackStream => PaError::CanNotReadFromACallbackStream,
            ll::paCanNotWriteToACallbackStream => PaError::CanNotWriteToACallbackStream,
            ll::paCanNotReadFromAnOutputOnlyStream => PaError::CanNotReadFromAnOutputOnlyStream,
            ll::paCanNotWriteToAnInputOnlyStream => PaError::CanNotWriteToAnInputOnlyStream,
            ll::paIncompatibleStreamHostApi => PaError::IncompatibleStreamHostApi,
            ll::paBadBufferPtr => PaError::BadBufferPtr,
            _ => PaError::UnknownError,
        }
    }
}

impl fmt::Display for PaError
{
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result
    {
        match *self
        {
            PaError::UnknownError => write!(f, "Unknown Error"),
            other =>
            {
                let message = unsafe { string_from_c(ll::Pa_GetErrorText(other as i32)) };
                f.write_str(&message)
            }
        }
    }
}

impl Error for PaError {}

/// A result type wrapping PaError.
///
/// PortAudio's paNoError is mapped to Ok(()) and other values mapped to Err(x)
pub type PaResult = Result<(), PaError>;

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn codes_round_trip_through_the_enum()
    {
        for code in ll::paNotInitialized..=ll::paBadBufferPtr
        {
            assert_eq!(PaError::from_i32(code) as i32, code);
        }
    }

    #[test]
    fn undocumented_codes()
    {
        assert_eq!(PaError::from_i32(ll::paNoError), PaError::UnknownError);
        assert_eq!(PaError::from_i32(-1), PaError::UnknownError);
        assert_eq!(PaError::from_i32(-20000), PaError::UnknownError);
    }

    #[test]
    fn messages()
    {
        assert_eq!(PaError::InternalError.to_string(), "Internal PortAudio error");
        assert_eq!(PaError::InvalidDevice.to_string(), "Invalid device");
        assert_eq!(PaError::UnknownError.to_string(), "Unknown Error");
    }

    #[test]
    fn init_terminate_pairs()
    {
        for _ in 0..3
        {
            assert_eq!(initialize(), Ok(()));
            assert_eq!(terminate(), Ok(()));
        }
    }

    #[cfg(not(feature = "system"))]
    #[test]
    fn stub_version()
    {
        assert!(is_stub());
        assert_eq!(version(), 19_070_000);
        assert!(version_text().starts_with("PortAudio V19.7.0-devel (compiled "));
    }
}
