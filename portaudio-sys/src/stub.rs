//! Stub backend
//!
//! Exports the PortAudio entry points for builds where the real library is not
//! available. Every call returns immediately with a fixed result: two virtual
//! devices (one capture, one playback) on a single host API, and a stream handle
//! that is the same non-null sentinel for every open stream.
//!
//! Only blocking I/O is emulated. Opening a stream with a callback fails with
//! `paInternalError`. No stream state is tracked, so lifecycle calls succeed in
//! any order, `Pa_IsStreamStopped` is always 1 and `Pa_IsStreamActive` always 0.
//! Read and write never touch the caller's buffer.

use std::ffi::CStr;
use std::ptr;

use libc::{c_char, c_int, c_ulong, c_void};
use log::{debug, warn};

use super::*;

/// Handle given out by every successful open.
pub const STUB_STREAM: *mut PaStream = 1 as *mut PaStream;

const STUB_VERSION: c_int = 19_070_000;
static STUB_VERSION_TEXT: &str = concat!(
    "PortAudio V19.7.0-devel (compiled ",
    env!("PORTAUDIO_STUB_BUILD_TIME"),
    ")\0"
);

const INPUT_DEVICE_INDEX: PaDeviceIndex = 0;
const OUTPUT_DEVICE_INDEX: PaDeviceIndex = 1;
const DEVICE_COUNT: PaDeviceIndex = 2;
const STUB_HOST_API: PaHostApiIndex = 0;

/// Read-only record in static storage. The C structs carry raw string pointers,
/// which keeps them from being `Sync` on their own; the pointees are literals.
#[repr(transparent)]
struct Fixed<T>(T);

unsafe impl<T> Sync for Fixed<T> {}

static INPUT_DEVICE: Fixed<PaDeviceInfo> = Fixed(PaDeviceInfo {
    structVersion: 2,
    name: c"Default Input Device".as_ptr(),
    hostApi: STUB_HOST_API,
    maxInputChannels: 2,
    maxOutputChannels: 0,
    defaultLowInputLatency: 0.01,
    defaultLowOutputLatency: 0.0,
    defaultHighInputLatency: 0.1,
    defaultHighOutputLatency: 0.0,
    defaultSampleRate: 44100.0,
});

static OUTPUT_DEVICE: Fixed<PaDeviceInfo> = Fixed(PaDeviceInfo {
    structVersion: 2,
    name: c"Default Output Device".as_ptr(),
    hostApi: STUB_HOST_API,
    maxInputChannels: 0,
    maxOutputChannels: 2,
    defaultLowInputLatency: 0.0,
    defaultLowOutputLatency: 0.01,
    defaultHighInputLatency: 0.0,
    defaultHighOutputLatency: 0.1,
    defaultSampleRate: 44100.0,
});

static HOST_API: Fixed<PaHostApiInfo> = Fixed(PaHostApiInfo {
    structVersion: 1,
    _type: paInDevelopment,
    name: c"Stub Host API".as_ptr(),
    deviceCount: DEVICE_COUNT,
    defaultInputDevice: INPUT_DEVICE_INDEX,
    defaultOutputDevice: OUTPUT_DEVICE_INDEX,
});

static LAST_HOST_ERROR: Fixed<PaHostErrorInfo> = Fixed(PaHostErrorInfo {
    hostApiType: paInDevelopment,
    errorCode: 0,
    errorText: c"".as_ptr(),
});

#[no_mangle]
pub unsafe extern "C" fn Pa_Initialize() -> PaError {
    debug!("stub backend initialized");
    paNoError
}

#[no_mangle]
pub unsafe extern "C" fn Pa_Terminate() -> PaError {
    debug!("stub backend terminated");
    paNoError
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetVersion() -> c_int {
    STUB_VERSION
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetVersionText() -> *const c_char {
    STUB_VERSION_TEXT.as_ptr() as *const c_char
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetErrorText(errorCode: PaError) -> *const c_char {
    error_text(errorCode).as_ptr()
}

fn error_text(code: PaError) -> &'static CStr {
    match code
    {
        paNoError => c"Success",
        paNotInitialized => c"PortAudio not initialized",
        paUnanticipatedHostError => c"Unanticipated host error",
        paInvalidChannelCount => c"Invalid number of channels",
        paInvalidSampleRate => c"Invalid sample rate",
        paInvalidDevice => c"Invalid device",
        paInvalidFlag => c"Invalid flag",
        paSampleFormatNotSupported => c"Sample format not supported",
        paBadIODeviceCombination => c"Illegal combination of I/O devices",
        paInsufficientMemory => c"Insufficient memory",
        paBufferTooBig => c"Buffer too big",
        paBufferTooSmall => c"Buffer too small",
        paNullCallback => c"No callback routine specified",
        paBadStreamPtr => c"Invalid stream pointer",
        paTimedOut => c"Wait timed out",
        paInternalError => c"Internal PortAudio error",
        paDeviceUnavailable => c"Device unavailable",
        paIncompatibleHostApiSpecificStreamInfo => c"Incompatible host API specific stream info",
        paStreamIsStopped => c"Stream is stopped",
        paStreamIsNotStopped => c"Stream is not stopped",
        paInputOverflowed => c"Input overflowed",
        paOutputUnderflowed => c"Output underflowed",
        paHostApiNotFound => c"Host API not found",
        paInvalidHostApi => c"Invalid host API",
        paCanNotReadFromACallbackStream => c"Can't read from a callback stream",
        paCanNotWriteToACallbackStream => c"Can't write to a callback stream",
        paCanNotReadFromAnOutputOnlyStream => c"Can't read from an output only stream",
        paCanNotWriteToAnInputOnlyStream => c"Can't write to an input only stream",
        paIncompatibleStreamHostApi => c"Incompatible stream host API",
        paBadBufferPtr => c"Bad buffer pointer",
        _ => c"Invalid error code",
    }
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetHostApiCount() -> PaHostApiIndex {
    1
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetDefaultHostApi() -> PaHostApiIndex {
    STUB_HOST_API
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetHostApiInfo(hostApi: PaHostApiIndex) -> *const PaHostApiInfo {
    match hostApi
    {
        STUB_HOST_API => &HOST_API.0,
        _ => ptr::null(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn Pa_HostApiTypeIdToHostApiIndex(type_: PaHostApiTypeId) -> PaHostApiIndex {
    match type_
    {
        paInDevelopment => STUB_HOST_API,
        _ => paHostApiNotFound,
    }
}

#[no_mangle]
pub unsafe extern "C" fn Pa_HostApiDeviceIndexToDeviceIndex(hostApi: PaHostApiIndex,
                                                            hostApiDeviceIndex: c_int) -> PaDeviceIndex {
    if hostApi != STUB_HOST_API
    {
        return paInvalidHostApi;
    }
    match hostApiDeviceIndex
    {
        n @ 0..=1 => n,
        _ => paInvalidDevice,
    }
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetLastHostErrorInfo() -> *const PaHostErrorInfo {
    &LAST_HOST_ERROR.0
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetDeviceCount() -> PaDeviceIndex {
    DEVICE_COUNT
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetDefaultInputDevice() -> PaDeviceIndex {
    INPUT_DEVICE_INDEX
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetDefaultOutputDevice() -> PaDeviceIndex {
    OUTPUT_DEVICE_INDEX
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetDeviceInfo(device: PaDeviceIndex) -> *const PaDeviceInfo {
    match device
    {
        INPUT_DEVICE_INDEX => &INPUT_DEVICE.0,
        OUTPUT_DEVICE_INDEX => &OUTPUT_DEVICE.0,
        _ => ptr::null(),
    }
}

#[no_mangle]
pub unsafe extern "C" fn Pa_IsFormatSupported(_inputParameters: *const PaStreamParameters,
                                              _outputParameters: *const PaStreamParameters,
                                              _sampleRate: f64) -> PaError {
    paFormatIsSupported
}

#[no_mangle]
pub unsafe extern "C" fn Pa_GetSampleSize(format: PaSampleFormat) -> PaError {
    match format & !paNonInterleaved
    {
        paFloat32 | paInt32 => 4,
        paInt24 => 3,
        paInt16 => 2,
        paInt8 | paUInt8 => 1,
        _ => paSampleFormatNotSupported,
    }
}

/// Shared by both open calls: only the callback and the out-pointer matter.
unsafe fn open_blocking_stream(stream: *mut *mut PaStream, callback: Option<PaStreamCallback>) -> PaError {
    if callback.is_some()
    {
        warn!("stub backend cannot run callback streams");
        return paInternalError;
    }
    if stream.is_null()
    {
        return paBadStreamPtr;
    }
    *stream = STUB_STREAM;
    debug!("stub stream opened");
    paNoError
}

#[no_mangle]
pub unsafe extern "C" fn Pa_OpenStream(stream: *mut *mut PaStream,
                                       _inputParameters: *const PaStreamParameters,
                                       _outputParameters: *const PaStreamParameters,
                                       _sampleRate: f64,
                                       _framesPerBuffer: c_ulong,
                                       _streamFlags: PaStreamFlags,
                                       streamCallback: Option<PaStreamCallback>,
                                       _userData: *mut c_void) -> PaError {
    open_blocking_stream(stream, streamCallback)
}

#[no_mangle]
pub unsafe extern "C" fn Pa_OpenDefaultStream(stream: *mut *mut PaStream,
                                              _numInputChannels: c_int,
                                              _numOutputChannels: c_int,
                                              _sampleFormat: PaSampleFormat,
                                              _sampleRate: f64,
                                              _framesPerBuffer: c_ulong,
                                              streamCallback: Option<PaStreamCallback>,
                                              _userData: *mut c_void) -> PaError {
    open_blocking_stream(stream, streamCallback)
}

#[no_mangle]
pub unsafe extern "C" fn Pa_CloseStream(_stream: *mut PaStream) -> PaError {
    paNoError
}

#[no_mangle]
pub unsafe extern "C" fn Pa_StartStream(_stream: *mut PaStream) -> PaError {
    paNoError
}

#[no_mangle]
pub unsafe extern "C" fn Pa_StopStream(_stream: *mut PaStream) -> PaError {
    paNoError
}

#[no_mangle]
pub unsafe extern "C" fn Pa_AbortStream(_stream: *mut PaStream) -> PaError {
    paNoError
}

#[no_mangle]
pub unsafe extern "C" fn Pa_IsStreamStopped(_stream: *mut PaStream) -> PaError {
    1
}

#[no_mangle]
pub unsafe extern "C" fn Pa_IsStreamActive(_stream: *mut PaStream) -> PaError {
    0
}

#[no_mangle]
pub unsafe extern "C" fn Pa_ReadStream(_stream: *mut PaStream, _buffer: *mut c_void, _frames: c_ulong) -> PaError {
    paNoError
}

#[no_mangle]
pub unsafe extern "C" fn Pa_WriteStream(_stream: *mut PaStream, _buffer: *const c_void, _frames: c_ulong) -> PaError {
    paNoError
}
