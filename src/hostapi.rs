//! Info module for available audio host API's

use crate::pa::PaError;
use crate::util::{string_from_c, to_pa_count};

/// Index number of a Host API
pub type HostApiIndex = u32;

/// Possible Host API types
///
/// The stub backend registers itself as InDevelopment.
#[repr(i32)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
#[allow(missing_docs)]
pub enum HostApiType
{
    InDevelopment = ll::paInDevelopment,
    DirectSound = ll::paDirectSound,
    MME = ll::paMME,
    ASIO = ll::paASIO,
    SoundManager = ll::paSoundManager,
    CoreAudio = ll::paCoreAudio,
    OSS = ll::paOSS,
    ALSA = ll::paALSA,
    AL = ll::paAL,
    BeOS = ll::paBeOS,
    WDMKS = ll::paWDMKS,
    JACK = ll::paJACK,
    WASAPI = ll::paWASAPI,
    AudioScienceHPI = ll::paAudioScienceHPI,
    AudioIO = ll::paAudioIO,
    PulseAudio = ll::paPulseAudio,
    Sndio = ll::paSndio,

    /// A type id this crate does not know about
    Unknown,
}

impl HostApiType
{
    fn from_ll(id: ll::PaHostApiTypeId) -> HostApiType
    {
        match id
        {
            ll::paInDevelopment => HostApiType::InDevelopment,
            ll::paDirectSound => HostApiType::DirectSound,
            ll::paMME => HostApiType::MME,
            ll::paASIO => HostApiType::ASIO,
            ll::paSoundManager => HostApiType::SoundManager,
            ll::paCoreAudio => HostApiType::CoreAudio,
            ll::paOSS => HostApiType::OSS,
            ll::paALSA => HostApiType::ALSA,
            ll::paAL => HostApiType::AL,
            ll::paBeOS => HostApiType::BeOS,
            ll::paWDMKS => HostApiType::WDMKS,
            ll::paJACK => HostApiType::JACK,
            ll::paWASAPI => HostApiType::WASAPI,
            ll::paAudioScienceHPI => HostApiType::AudioScienceHPI,
            ll::paAudioIO => HostApiType::AudioIO,
            ll::paPulseAudio => HostApiType::PulseAudio,
            ll::paSndio => HostApiType::Sndio,
            _ => HostApiType::Unknown,
        }
    }

    /// Convert a static host API unique identifier, into a runtime host API index.
    pub fn to_api_index(self) -> Result<HostApiIndex, PaError>
    {
        if self == HostApiType::Unknown
        {
            return Err(PaError::HostApiNotFound);
        }
        to_pa_count(unsafe { ll::Pa_HostApiTypeIdToHostApiIndex(self as ll::PaHostApiTypeId) })
    }
}

/// Information about a specific host API
#[derive(Debug, Clone, PartialEq)]
pub struct HostApiInfo
{
    /// The type of the API
    pub api_type: HostApiType,

    /// Human-readable name of the API
    pub name: String,

    /// Number of devices this API has
    pub device_count: u32,

    /// Default input device of the API. Is None if there is no input device available.
    pub default_input: Option<u32>,

    /// Default output device of the API. Is None if there is no output device available.
    pub default_output: Option<u32>,
}

impl HostApiInfo
{
    fn from_ll(input: &ll::PaHostApiInfo) -> HostApiInfo
    {
        HostApiInfo
        {
            api_type: HostApiType::from_ll(input._type),
            name: unsafe { string_from_c(input.name) },
            device_count: input.deviceCount.max(0) as u32,
            default_input: match input.defaultInputDevice { n if n >= 0 => Some(n as u32), _ => None },
            default_output: match input.defaultOutputDevice { n if n >= 0 => Some(n as u32), _ => None },
        }
    }
}

/// Error info obtained by get_last_error
#[derive(Debug, Clone, PartialEq)]
pub struct HostErrorInfo
{
    /// The error code given
    pub code: i64,

    /// A human readable error message
    pub text: String,

    /// The type of the API that produced the error
    pub api_type: HostApiType,
}

impl HostErrorInfo
{
    fn from_ll(input: &ll::PaHostErrorInfo) -> HostErrorInfo
    {
        HostErrorInfo
        {
            code: input.errorCode as i64,
            text: unsafe { string_from_c(input.errorText) },
            api_type: HostApiType::from_ll(input.hostApiType),
        }
    }
}

/// Return information about the last host error encountered.
///
/// The values in this structure will only be valid if a PortAudio function has previously returned
/// the UnanticipatedHostError error code.
pub fn get_last_error() -> Option<HostErrorInfo>
{
    unsafe
    {
        ll::Pa_GetLastHostErrorInfo()
            .as_ref()
            .map(HostErrorInfo::from_ll)
    }
}

/// Get the number of host API's available
pub fn get_count() -> Result<u32, PaError>
{
    to_pa_count(unsafe { ll::Pa_GetHostApiCount() })
}

/// Get the default Host API
pub fn get_default_index() -> Result<HostApiIndex, PaError>
{
    to_pa_count(unsafe { ll::Pa_GetDefaultHostApi() })
}

/// Get information about a specific Host API
///
/// Returns None when an invalid index is given
pub fn get_info(index: HostApiIndex) -> Option<HostApiInfo>
{
    if index > i32::MAX as u32
    {
        return None;
    }
    unsafe
    {
        ll::Pa_GetHostApiInfo(index as i32)
            .as_ref()
            .map(HostApiInfo::from_ll)
    }
}
