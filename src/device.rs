//! Info about connected audio devices

use crate::hostapi::HostApiIndex;
use crate::pa::PaError;
use crate::util::{pa_time_to_duration, string_from_c, to_pa_count};
use std::time::Duration;

/// Index of a Device
pub type DeviceIndex = u32;

/// Information for a specific device
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceInfo
{
    /// Human readable name
    pub name: String,

    /// Index of the host API this device belongs to
    pub host_api: HostApiIndex,

    /// Maximal number of input channels that can be used
    pub max_input_channels: u32,

    /// Maximal number of ouput channels that can be used
    pub max_output_channels: u32,

    /// Default input latency for interactive performance
    pub default_low_input_latency: Duration,

    /// Default output latency for interactive performance
    pub default_low_output_latency: Duration,

    /// Default input latency for robust non-interactive applications
    pub default_high_input_latency: Duration,

    /// Default output latency for robust non-interactive applications
    pub default_high_output_latency: Duration,

    /// Default sample rate
    pub default_sample_rate: f64,
}

impl DeviceInfo
{
    fn from_ll(input: &ll::PaDeviceInfo) -> DeviceInfo
    {
        DeviceInfo
        {
            name: unsafe { string_from_c(input.name) },
            host_api: input.hostApi.max(0) as HostApiIndex,
            max_input_channels: input.maxInputChannels.max(0) as u32,
            max_output_channels: input.maxOutputChannels.max(0) as u32,
            default_low_input_latency: pa_time_to_duration(input.defaultLowInputLatency),
            default_low_output_latency: pa_time_to_duration(input.defaultLowOutputLatency),
            default_high_input_latency: pa_time_to_duration(input.defaultHighInputLatency),
            default_high_output_latency: pa_time_to_duration(input.defaultHighOutputLatency),
            default_sample_rate: input.defaultSampleRate,
        }
    }

    /// True when the device can capture audio
    pub fn is_input(&self) -> bool
    {
        self.max_input_channels > 0
    }

    /// True when the device can play audio
    pub fn is_output(&self) -> bool
    {
        self.max_output_channels > 0
    }
}

/// Retrieve the number of available devices.
pub fn get_count() -> Result<u32, PaError>
{
    to_pa_count(unsafe { ll::Pa_GetDeviceCount() })
}

/// Retrieve the index of the default input device
///
/// Will return Err when none is available.
pub fn get_default_input_index() -> Result<DeviceIndex, PaError>
{
    to_pa_count(unsafe { ll::Pa_GetDefaultInputDevice() })
}

/// Retrieve the index of the default output device
///
/// Will return Err when none is available.
pub fn get_default_output_index() -> Result<DeviceIndex, PaError>
{
    to_pa_count(unsafe { ll::Pa_GetDefaultOutputDevice() })
}

/// Get info about a particular device
///
/// Returns None when the index is out of range.
pub fn get_info(index: DeviceIndex) -> Option<DeviceInfo>
{
    if index > i32::MAX as u32
    {
        return None;
    }
    unsafe
    {
        ll::Pa_GetDeviceInfo(index as i32)
            .as_ref()
            .map(DeviceInfo::from_ll)
    }
}

/// Converts a device index from a specific host API to a global device index
///
/// Returns Err(InvalidHostApi) when the host_api is out of range, and Err(InvalidDevice) when
/// host_api_device_index is out of range.
///
/// ```
/// // We retrieve the index of the second device of the default api
/// let device_index = match portaudio_shim::device::get_from_host_api_device_index(0, 1)
/// {
///     Ok(n) => n,
///     Err(e) => { println!("Error: {:?}", e); return },
/// };
/// println!("device {}", device_index);
/// ```
pub fn get_from_host_api_device_index(host_api: HostApiIndex, host_api_device_index: u32) -> Result<DeviceIndex, PaError>
{
    to_pa_count(unsafe { ll::Pa_HostApiDeviceIndexToDeviceIndex(host_api as i32, host_api_device_index as i32) })
}
