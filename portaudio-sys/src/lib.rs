//! Raw PortAudio C API
//!
//! The entry points come from one of two backends, chosen by the build script:
//!
//! * the system `portaudio-2.0` library, when the `system` feature is enabled and
//!   the library can be found;
//! * otherwise a stub backend in this crate, which exports the same symbols and
//!   reports two fixed virtual devices.
//!
//! Types and constants are identical in both cases.

#![allow(non_camel_case_types, non_snake_case, non_upper_case_globals)]
#![allow(clippy::missing_safety_doc)]

use libc::{c_char, c_int, c_long, c_ulong, c_void};

#[cfg(portaudio_stub)]
mod stub;
#[cfg(portaudio_stub)]
pub use stub::*;

#[cfg(not(portaudio_stub))]
mod linked;
#[cfg(not(portaudio_stub))]
pub use linked::*;

#[cfg(test)]
mod build_time;

/// True when the entry points are served by the stub backend.
pub const STUB_BACKEND: bool = cfg!(portaudio_stub);

pub type PaError = c_int;
pub type PaDeviceIndex = c_int;
pub type PaHostApiIndex = c_int;
pub type PaHostApiTypeId = c_int;
pub type PaTime = f64;
pub type PaSampleFormat = c_ulong;
pub type PaStreamFlags = c_ulong;
pub type PaStreamCallbackFlags = c_ulong;

/// Opaque stream object
pub type PaStream = c_void;

pub type PaStreamCallback = unsafe extern "C" fn(
    input: *const c_void,
    output: *mut c_void,
    frameCount: c_ulong,
    timeInfo: *const PaStreamCallbackTimeInfo,
    statusFlags: PaStreamCallbackFlags,
    userData: *mut c_void,
) -> c_int;

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PaDeviceInfo
{
    pub structVersion: c_int,
    pub name: *const c_char,
    pub hostApi: PaHostApiIndex,
    pub maxInputChannels: c_int,
    pub maxOutputChannels: c_int,
    pub defaultLowInputLatency: PaTime,
    pub defaultLowOutputLatency: PaTime,
    pub defaultHighInputLatency: PaTime,
    pub defaultHighOutputLatency: PaTime,
    pub defaultSampleRate: f64,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PaHostApiInfo
{
    pub structVersion: c_int,
    pub _type: PaHostApiTypeId,
    pub name: *const c_char,
    pub deviceCount: c_int,
    pub defaultInputDevice: PaDeviceIndex,
    pub defaultOutputDevice: PaDeviceIndex,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PaHostErrorInfo
{
    pub hostApiType: PaHostApiTypeId,
    pub errorCode: c_long,
    pub errorText: *const c_char,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PaStreamParameters
{
    pub device: PaDeviceIndex,
    pub channelCount: c_int,
    pub sampleFormat: PaSampleFormat,
    pub suggestedLatency: PaTime,
    pub hostApiSpecificStreamInfo: *mut c_void,
}

#[repr(C)]
#[derive(Copy, Clone, Debug)]
pub struct PaStreamCallbackTimeInfo
{
    pub inputBufferAdcTime: PaTime,
    pub currentTime: PaTime,
    pub outputBufferDacTime: PaTime,
}

pub const paNoDevice: PaDeviceIndex = -1;
pub const paFramesPerBufferUnspecified: c_ulong = 0;
pub const paFormatIsSupported: PaError = 0;

// PaErrorCode
pub const paNoError: PaError = 0;
pub const paNotInitialized: PaError = -10000;
pub const paUnanticipatedHostError: PaError = -9999;
pub const paInvalidChannelCount: PaError = -9998;
pub const paInvalidSampleRate: PaError = -9997;
pub const paInvalidDevice: PaError = -9996;
pub const paInvalidFlag: PaError = -9995;
pub const paSampleFormatNotSupported: PaError = -9994;
pub const paBadIODeviceCombination: PaError = -9993;
pub const paInsufficientMemory: PaError = -9992;
pub const paBufferTooBig: PaError = -9991;
pub const paBufferTooSmall: PaError = -9990;
pub const paNullCallback: PaError = -9989;
pub const paBadStreamPtr: PaError = -9988;
pub const paTimedOut: PaError = -9987;
pub const paInternalError: PaError = -9986;
pub const paDeviceUnavailable: PaError = -9985;
pub const paIncompatibleHostApiSpecificStreamInfo: PaError = -9984;
pub const paStreamIsStopped: PaError = -9983;
pub const paStreamIsNotStopped: PaError = -9982;
pub const paInputOverflowed: PaError = -9981;
pub const paOutputUnderflowed: PaError = -9980;
pub const paHostApiNotFound: PaError = -9979;
pub const paInvalidHostApi: PaError = -9978;
pub const paCanNotReadFromACallbackStream: PaError = -9977;
pub const paCanNotWriteToACallbackStream: PaError = -9976;
pub const paCanNotReadFromAnOutputOnlyStream: PaError = -9975;
pub const paCanNotWriteToAnInputOnlyStream: PaError = -9974;
pub const paIncompatibleStreamHostApi: PaError = -9973;
pub const paBadBufferPtr: PaError = -9972;

// PaHostApiTypeId
pub const paInDevelopment: PaHostApiTypeId = 0;
pub const paDirectSound: PaHostApiTypeId = 1;
pub const paMME: PaHostApiTypeId = 2;
pub const paASIO: PaHostApiTypeId = 3;
pub const paSoundManager: PaHostApiTypeId = 4;
pub const paCoreAudio: PaHostApiTypeId = 5;
pub const paOSS: PaHostApiTypeId = 7;
pub const paALSA: PaHostApiTypeId = 8;
pub const paAL: PaHostApiTypeId = 9;
pub const paBeOS: PaHostApiTypeId = 10;
pub const paWDMKS: PaHostApiTypeId = 11;
pub const paJACK: PaHostApiTypeId = 12;
pub const paWASAPI: PaHostApiTypeId = 13;
pub const paAudioScienceHPI: PaHostApiTypeId = 14;
pub const paAudioIO: PaHostApiTypeId = 15;
pub const paPulseAudio: PaHostApiTypeId = 16;
pub const paSndio: PaHostApiTypeId = 17;

// PaSampleFormat
pub const paFloat32: PaSampleFormat = 0x0000_0001;
pub const paInt32: PaSampleFormat = 0x0000_0002;
pub const paInt24: PaSampleFormat = 0x0000_0004;
pub const paInt16: PaSampleFormat = 0x0000_0008;
pub const paInt8: PaSampleFormat = 0x0000_0010;
pub const paUInt8: PaSampleFormat = 0x0000_0020;
pub const paCustomFormat: PaSampleFormat = 0x0001_0000;
pub const paNonInterleaved: PaSampleFormat = 0x8000_0000;

// PaStreamFlags
pub const paNoFlag: PaStreamFlags = 0;
pub const paClipOff: PaStreamFlags = 0x0000_0001;
pub const paDitherOff: PaStreamFlags = 0x0000_0002;
pub const paNeverDropInput: PaStreamFlags = 0x0000_0004;
pub const paPrimeOutputBuffersUsingStreamCallback: PaStreamFlags = 0x0000_0008;
pub const paPlatformSpecificFlags: PaStreamFlags = 0xFFFF_0000;

// PaStreamCallbackFlags
pub const paInputUnderflow: PaStreamCallbackFlags = 0x0000_0001;
pub const paInputOverflow: PaStreamCallbackFlags = 0x0000_0002;
pub const paOutputUnderflow: PaStreamCallbackFlags = 0x0000_0004;
pub const paOutputOverflow: PaStreamCallbackFlags = 0x0000_0008;
pub const paPrimingOutput: PaStreamCallbackFlags = 0x0000_0010;

// PaStreamCallbackResult
pub const paContinue: c_int = 0;
pub const paComplete: c_int = 1;
pub const paAbort: c_int = 2;
