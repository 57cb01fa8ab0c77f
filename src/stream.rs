//! Opening audio streams and moving samples through them
//!
//! Streams work in one of two modes. A blocking stream is driven by the caller with
//! `read` and `write`. A callback stream hands PortAudio a closure that is run on
//! PortAudio's audio thread. The stub backend only does blocking streams and answers
//! a callback stream with `PaError::InternalError`.

use crate::device::{self, DeviceIndex};
use crate::pa::{PaError, PaResult};
use crate::util::{duration_to_pa_time, pa_time_to_duration, to_pa_count, to_pa_result};
use libc::{c_int, c_ulong, c_void};
use std::panic::{self, AssertUnwindSafe};
use std::ptr;
use std::slice;
use std::time::Duration;

/// Let PortAudio pick the buffer size
pub const FRAMES_PER_BUFFER_UNSPECIFIED: u64 = ll::paFramesPerBufferUnspecified as u64;

/// What a stream callback wants to happen next
#[repr(i32)]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum StreamCallbackResult
{
    /// Keep calling the callback
    Continue = ll::paContinue,
    /// Play out the buffers already handed over, then stop
    Complete = ll::paComplete,
    /// Stop as soon as possible
    Abort = ll::paAbort,
}

bitflags! {
    /// Conditions reported to a stream callback
    pub struct StreamCallbackFlags: c_ulong {
        /// Input data is all silence because no real data was available
        const INPUT_UNDERFLOW = ll::paInputUnderflow;
        /// Input data was discarded before this callback
        const INPUT_OVERFLOW = ll::paInputOverflow;
        /// A gap was inserted in the output because the callback was too slow
        const OUTPUT_UNDERFLOW = ll::paOutputUnderflow;
        /// Output data will be discarded
        const OUTPUT_OVERFLOW = ll::paOutputOverflow;
        /// Some or all of the output is priming data
        const PRIMING_OUTPUT = ll::paPrimingOutput;
    }
}

bitflags! {
    /// Options for opening a stream
    pub struct StreamFlags: c_ulong {
        /// Disable default clipping of out of range samples
        const CLIP_OFF = ll::paClipOff;
        /// Disable default dithering
        const DITHER_OFF = ll::paDitherOff;
        /// Request that full duplex streams never discard overflowed input
        const NEVER_DROP_INPUT = ll::paNeverDropInput;
        /// Fill the initial output buffers through the callback
        const PRIME_OUTPUT_BUFFERS_USING_STREAM_CALLBACK = ll::paPrimeOutputBuffersUsingStreamCallback;
        /// Host API specific flags
        const PLATFORM_SPECIFIC_FLAGS = ll::paPlatformSpecificFlags;
    }
}

/// Timestamps given to a stream callback, in stream time
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct StreamTimeInfo
{
    /// When the first input sample was captured
    pub input_adc_time: Duration,
    /// When the callback was invoked
    pub current_time: Duration,
    /// When the first output sample will reach the DAC
    pub output_dac_time: Duration,
}

impl StreamTimeInfo
{
    fn from_ll(info: &ll::PaStreamCallbackTimeInfo) -> StreamTimeInfo
    {
        StreamTimeInfo
        {
            input_adc_time: pa_time_to_duration(info.inputBufferAdcTime),
            current_time: pa_time_to_duration(info.currentTime),
            output_dac_time: pa_time_to_duration(info.outputBufferDacTime),
        }
    }
}

/// Closure run by PortAudio for every buffer of a callback stream
///
/// Buffers are interleaved: `input` holds `frames * input channels` samples and
/// `output` holds `frames * output channels` samples. The closure runs on PortAudio's
/// audio thread, hence the `Send` bound.
pub type StreamCallback<'a, T> = Box<dyn FnMut(&[T], &mut [T], StreamTimeInfo, StreamCallbackFlags) -> StreamCallbackResult + Send + 'a>;

struct StreamUserData<'a, T>
{
    num_input: usize,
    num_output: usize,
    callback: StreamCallback<'a, T>,
}

unsafe extern "C" fn stream_callback<T>(input: *const c_void,
                                        output: *mut c_void,
                                        frame_count: c_ulong,
                                        time_info: *const ll::PaStreamCallbackTimeInfo,
                                        status_flags: ll::PaStreamCallbackFlags,
                                        user_data: *mut c_void) -> c_int
{
    let stream_data = &mut *(user_data as *mut StreamUserData<T>);
    let frames = frame_count as usize;

    let input_buffer: &[T] = if input.is_null() { &[] }
        else { slice::from_raw_parts(input as *const T, frames * stream_data.num_input) };
    let output_buffer: &mut [T] = if output.is_null() { &mut [] }
        else { slice::from_raw_parts_mut(output as *mut T, frames * stream_data.num_output) };

    let flags = StreamCallbackFlags::from_bits_truncate(status_flags);
    let timeinfo = time_info.as_ref().map(StreamTimeInfo::from_ll).unwrap_or_default();

    // Unwinding into C would abort the process
    let result = panic::catch_unwind(AssertUnwindSafe(|| (stream_data.callback)(input_buffer, output_buffer, timeinfo, flags)))
        .unwrap_or(StreamCallbackResult::Abort);

    result as c_int
}

/// Sample types PortAudio can carry
pub trait SampleType: Copy + Default
{
    /// The PortAudio sample format flag for this type
    fn sample_format() -> ll::PaSampleFormat;
}

impl SampleType for f32 { fn sample_format() -> ll::PaSampleFormat { ll::paFloat32 } }
impl SampleType for i32 { fn sample_format() -> ll::PaSampleFormat { ll::paInt32 } }
impl SampleType for i16 { fn sample_format() -> ll::PaSampleFormat { ll::paInt16 } }
impl SampleType for i8 { fn sample_format() -> ll::PaSampleFormat { ll::paInt8 } }
impl SampleType for u8 { fn sample_format() -> ll::PaSampleFormat { ll::paUInt8 } }

/// Size in bytes of one sample of T, as reported by PortAudio
pub fn get_sample_size<T: SampleType>() -> Result<u32, PaError>
{
    to_pa_count(unsafe { ll::Pa_GetSampleSize(T::sample_format()) })
}

/// Device, channel count and latency for one direction of a stream
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StreamParameters
{
    /// Device to open
    pub device: DeviceIndex,

    /// Number of interleaved channels
    pub channel_count: u32,

    /// Desired latency, PortAudio picks the closest it can do
    pub suggested_latency: Duration,
}

impl StreamParameters
{
    /// Parameters for the default input device at its low latency
    pub fn default_input(channel_count: u32) -> Result<StreamParameters, PaError>
    {
        let device = device::get_default_input_index()?;
        let info = device::get_info(device).ok_or(PaError::InvalidDevice)?;
        Ok(StreamParameters { device, channel_count, suggested_latency: info.default_low_input_latency })
    }

    /// Parameters for the default output device at its low latency
    pub fn default_output(channel_count: u32) -> Result<StreamParameters, PaError>
    {
        let device = device::get_default_output_index()?;
        let info = device::get_info(device).ok_or(PaError::InvalidDevice)?;
        Ok(StreamParameters { device, channel_count, suggested_latency: info.default_low_output_latency })
    }

    fn to_ll(self, format: ll::PaSampleFormat) -> Result<ll::PaStreamParameters, PaError>
    {
        Ok(ll::PaStreamParameters
        {
            device: ll::PaDeviceIndex::try_from(self.device).map_err(|_| PaError::InvalidDevice)?,
            channelCount: channels_to_ll(self.channel_count)?,
            sampleFormat: format,
            suggestedLatency: duration_to_pa_time(self.suggested_latency),
            hostApiSpecificStreamInfo: ptr::null_mut(),
        })
    }
}

fn channels_to_ll(channel_count: u32) -> Result<c_int, PaError>
{
    c_int::try_from(channel_count).map_err(|_| PaError::InvalidChannelCount)
}

// c_ulong is 32 bits wide on Windows
fn frames_to_ll(frames_per_buffer: u64) -> Result<c_ulong, PaError>
{
    c_ulong::try_from(frames_per_buffer).map_err(|_| PaError::BufferTooBig)
}

fn as_ptr(params: &Option<ll::PaStreamParameters>) -> *const ll::PaStreamParameters
{
    params.as_ref().map_or(ptr::null(), |p| p as *const ll::PaStreamParameters)
}

/// Check whether a stream with these parameters could be opened for samples of type T
pub fn is_format_supported<T: SampleType>(input: Option<StreamParameters>,
                                          output: Option<StreamParameters>,
                                          sample_rate: f64) -> PaResult
{
    let input_ll = input.map(|p| p.to_ll(T::sample_format())).transpose()?;
    let output_ll = output.map(|p| p.to_ll(T::sample_format())).transpose()?;
    to_pa_result(unsafe { ll::Pa_IsFormatSupported(as_ptr(&input_ll), as_ptr(&output_ll), sample_rate) })
}

/// An open PortAudio stream carrying samples of type T
///
/// The stream is closed when dropped.
pub struct Stream<'a, T: SampleType>
{
    pa_stream: *mut ll::PaStream,
    num_input: usize,
    num_output: usize,
    _callback: Option<Box<StreamUserData<'a, T>>>,
}

impl<'a, T: SampleType> Stream<'a, T>
{
    /// Open a stream on explicit devices
    ///
    /// Leave `input` or `output` as None for a one-directional stream. Without a callback
    /// the stream is blocking and is driven through `read` and `write`.
    pub fn open(input: Option<StreamParameters>,
                output: Option<StreamParameters>,
                sample_rate: f64,
                frames_per_buffer: u64,
                flags: StreamFlags,
                callback: Option<StreamCallback<'a, T>>)
               -> Result<Stream<'a, T>, PaError>
    {
        let num_input = input.map_or(0, |p| p.channel_count as usize);
        let num_output = output.map_or(0, |p| p.channel_count as usize);
        let input_ll = input.map(|p| p.to_ll(T::sample_format())).transpose()?;
        let output_ll = output.map(|p| p.to_ll(T::sample_format())).transpose()?;
        let frames_per_buffer = frames_to_ll(frames_per_buffer)?;

        let mut user_data = callback.map(|callback| Box::new(StreamUserData { num_input, num_output, callback }));
        let (ll_callback, ud_pointer) = callback_args(&mut user_data);

        let mut pa_stream = ptr::null_mut();
        let code = unsafe
        {
            ll::Pa_OpenStream(&mut pa_stream,
                              as_ptr(&input_ll),
                              as_ptr(&output_ll),
                              sample_rate,
                              frames_per_buffer,
                              flags.bits(),
                              ll_callback,
                              ud_pointer)
        };
        to_pa_result(code)?;
        debug!("opened stream {:p}: {} in, {} out at {} Hz", pa_stream, num_input, num_output, sample_rate);

        Ok(Stream { pa_stream, num_input, num_output, _callback: user_data })
    }

    /// Open a stream on the default input and output devices
    pub fn open_default(num_input_channels: u32,
                        num_output_channels: u32,
                        sample_rate: f64,
                        frames_per_buffer: u64,
                        callback: Option<StreamCallback<'a, T>>)
                       -> Result<Stream<'a, T>, PaError>
    {
        let num_input = num_input_channels as usize;
        let num_output = num_output_channels as usize;
        let ll_input = channels_to_ll(num_input_channels)?;
        let ll_output = channels_to_ll(num_output_channels)?;
        let frames_per_buffer = frames_to_ll(frames_per_buffer)?;

        let mut user_data = callback.map(|callback| Box::new(StreamUserData { num_input, num_output, callback }));
        let (ll_callback, ud_pointer) = callback_args(&mut user_data);

        let mut pa_stream = ptr::null_mut();
        let code = unsafe
        {
            ll::Pa_OpenDefaultStream(&mut pa_stream,
                                     ll_input,
                                     ll_output,
                                     T::sample_format(),
                                     sample_rate,
                                     frames_per_buffer,
                                     ll_callback,
                                     ud_pointer)
        };
        to_pa_result(code)?;
        debug!("opened default stream {:p}: {} in, {} out at {} Hz", pa_stream, num_input, num_output, sample_rate);

        Ok(Stream { pa_stream, num_input, num_output, _callback: user_data })
    }

    /// Number of interleaved input channels
    pub fn num_input_channels(&self) -> u32
    {
        self.num_input as u32
    }

    /// Number of interleaved output channels
    pub fn num_output_channels(&self) -> u32
    {
        self.num_output as u32
    }

    /// Start processing audio
    pub fn start(&self) -> PaResult
    {
        to_pa_result(unsafe { ll::Pa_StartStream(self.pa_stream) })
    }

    /// Stop after the pending output buffers have been played
    pub fn stop(&self) -> PaResult
    {
        to_pa_result(unsafe { ll::Pa_StopStream(self.pa_stream) })
    }

    /// Stop immediately, discarding pending output
    pub fn abort(&self) -> PaResult
    {
        to_pa_result(unsafe { ll::Pa_AbortStream(self.pa_stream) })
    }

    fn close(&self) -> PaResult
    {
        to_pa_result(unsafe { ll::Pa_CloseStream(self.pa_stream) })
    }

    /// True when the stream is stopped
    pub fn is_stopped(&self) -> Result<bool, PaError>
    {
        match unsafe { ll::Pa_IsStreamStopped(self.pa_stream) }
        {
            1 => Ok(true),
            n => to_pa_result(n).map(|_| false),
        }
    }

    /// True when the stream is running or finishing
    pub fn is_active(&self) -> Result<bool, PaError>
    {
        match unsafe { ll::Pa_IsStreamActive(self.pa_stream) }
        {
            1 => Ok(true),
            n => to_pa_result(n).map(|_| false),
        }
    }

    /// Read `frames` frames of interleaved input, blocking until they are available
    pub fn read(&self, frames: u32) -> Result<Vec<T>, PaError>
    {
        if self.num_input == 0
        {
            return Err(PaError::CanNotReadFromAnOutputOnlyStream);
        }
        let mut buffer = vec![T::default(); frames as usize * self.num_input];
        to_pa_result(unsafe { ll::Pa_ReadStream(self.pa_stream, buffer.as_mut_ptr() as *mut c_void, c_ulong::from(frames)) })?;
        Ok(buffer)
    }

    /// Write interleaved output, blocking until it has been queued
    ///
    /// A trailing partial frame is not written.
    pub fn write(&self, buffer: &[T]) -> PaResult
    {
        if self.num_output == 0
        {
            return Err(PaError::CanNotWriteToAnInputOnlyStream);
        }
        let frames = c_ulong::try_from(buffer.len() / self.num_output).map_err(|_| PaError::BufferTooBig)?;
        to_pa_result(unsafe { ll::Pa_WriteStream(self.pa_stream, buffer.as_ptr() as *const c_void, frames) })
    }
}

fn callback_args<T>(user_data: &mut Option<Box<StreamUserData<'_, T>>>) -> (Option<ll::PaStreamCallback>, *mut c_void)
{
    match user_data
    {
        Some(data) =>
        {
            let pointer = &mut **data as *mut StreamUserData<T> as *mut c_void;
            (Some(stream_callback::<T> as ll::PaStreamCallback), pointer)
        },
        None => (None, ptr::null_mut()),
    }
}

impl<'a, T: SampleType> Drop for Stream<'a, T>
{
    fn drop(&mut self)
    {
        if let Err(v) = self.close()
        {
            error!("Error closing stream: {}", v);
        }
    }
}

#[cfg(test)]
mod tests
{
    use super::*;

    #[test]
    fn sample_formats()
    {
        assert_eq!(f32::sample_format(), 0x01);
        assert_eq!(i32::sample_format(), 0x02);
        assert_eq!(i16::sample_format(), 0x08);
        assert_eq!(i8::sample_format(), 0x10);
        assert_eq!(u8::sample_format(), 0x20);
    }

    #[test]
    fn sample_sizes()
    {
        assert_eq!(get_sample_size::<f32>(), Ok(4));
        assert_eq!(get_sample_size::<i16>(), Ok(2));
        assert_eq!(get_sample_size::<u8>(), Ok(1));
    }

    #[test]
    fn unknown_callback_flags_are_dropped()
    {
        let flags = StreamCallbackFlags::from_bits_truncate(0x1000 | ll::paOutputUnderflow);
        assert_eq!(flags, StreamCallbackFlags::OUTPUT_UNDERFLOW);
    }

    #[test]
    fn parameters_to_ll()
    {
        let params = StreamParameters { device: 1, channel_count: 2, suggested_latency: Duration::from_millis(10) };
        let raw = params.to_ll(ll::paInt16).unwrap();
        assert_eq!(raw.device, 1);
        assert_eq!(raw.channelCount, 2);
        assert_eq!(raw.sampleFormat, ll::paInt16);
        assert_eq!(raw.suggestedLatency, 0.01);
        assert!(raw.hostApiSpecificStreamInfo.is_null());
    }

    #[test]
    fn oversized_parameters_are_rejected()
    {
        let params = StreamParameters { device: 0, channel_count: u32::MAX, suggested_latency: Duration::from_millis(10) };
        assert_eq!(params.to_ll(ll::paFloat32).err(), Some(PaError::InvalidChannelCount));
        assert_eq!(channels_to_ll(i32::MAX as u32), Ok(i32::MAX));
        assert_eq!(channels_to_ll(i32::MAX as u32 + 1), Err(PaError::InvalidChannelCount));

        let params = StreamParameters { device: u32::MAX, channel_count: 2, suggested_latency: Duration::from_millis(10) };
        assert_eq!(params.to_ll(ll::paFloat32).err(), Some(PaError::InvalidDevice));
    }

    #[test]
    fn frames_per_buffer_must_fit_c_ulong()
    {
        assert_eq!(frames_to_ll(0), Ok(0));
        assert_eq!(frames_to_ll(c_ulong::MAX as u64), Ok(c_ulong::MAX));
        match (c_ulong::MAX as u64).checked_add(1)
        {
            Some(too_many) => assert_eq!(frames_to_ll(too_many), Err(PaError::BufferTooBig)),
            None => assert_eq!(frames_to_ll(u64::MAX), Ok(c_ulong::MAX)),
        }
    }

    fn assert_send<S: Send>() {}

    #[test]
    fn callbacks_can_move_to_the_audio_thread()
    {
        assert_send::<StreamCallback<'static, f32>>();
        assert_send::<StreamCallback<'static, i16>>();

        let callback: StreamCallback<f32> = Box::new(|_: &[f32], _: &mut [f32], _: StreamTimeInfo, _: StreamCallbackFlags| StreamCallbackResult::Continue);
        let mut callback = std::thread::spawn(move || callback).join().unwrap();
        let mut output = [1.0f32; 2];
        assert_eq!(callback(&[], &mut output, StreamTimeInfo::default(), StreamCallbackFlags::empty()), StreamCallbackResult::Continue);
    }

    #[test]
    fn trampoline_slices_interleaved_buffers()
    {
        let mut seen = (0, 0);
        let callback: StreamCallback<f32> = Box::new(|input: &[f32], output: &mut [f32], _time: StreamTimeInfo, flags: StreamCallbackFlags|
        {
            seen = (input.len(), output.len());
            assert_eq!(flags, StreamCallbackFlags::PRIMING_OUTPUT);
            for (o, i) in output.iter_mut().zip(input.iter())
            {
                *o = i * 2.0;
            }
            StreamCallbackResult::Complete
        });
        let mut data = StreamUserData { num_input: 1, num_output: 2, callback };

        let input = [0.25f32; 4];
        let mut output = [0.0f32; 8];
        let time = ll::PaStreamCallbackTimeInfo { inputBufferAdcTime: 1.0, currentTime: 1.5, outputBufferDacTime: 2.0 };
        let result = unsafe
        {
            stream_callback::<f32>(input.as_ptr() as *const c_void,
                                   output.as_mut_ptr() as *mut c_void,
                                   4,
                                   &time,
                                   ll::paPrimingOutput,
                                   &mut data as *mut StreamUserData<f32> as *mut c_void)
        };
        drop(data);

        assert_eq!(result, ll::paComplete);
        assert_eq!(seen, (4, 8));
        assert_eq!(&output[..4], &[0.5f32; 4]);
        assert_eq!(&output[4..], &[0.0f32; 4]);
    }

    #[test]
    fn panicking_callback_aborts()
    {
        let callback: StreamCallback<i16> = Box::new(|_: &[i16], _: &mut [i16], _: StreamTimeInfo, _: StreamCallbackFlags| -> StreamCallbackResult { panic!("boom") });
        let mut data = StreamUserData { num_input: 0, num_output: 0, callback };
        let result = unsafe
        {
            stream_callback::<i16>(ptr::null(), ptr::null_mut(), 0, ptr::null(), 0,
                                   &mut data as *mut StreamUserData<i16> as *mut c_void)
        };
        assert_eq!(result, ll::paAbort);
    }
}
