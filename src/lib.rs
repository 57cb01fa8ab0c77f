#![warn(missing_docs)]

//! PortAudio for Rust
//!
//! The raw API comes from `portaudio-shim-sys`. By default that crate serves the calls
//! from a built-in stub: two fixed devices ("Default Input Device" and "Default Output
//! Device", stereo, 44100 Hz) and blocking streams that accept every read and write.
//! Enable the `system` feature to link the PortAudio library found by pkg-config
//! instead; `pa::is_stub` tells which one is in use.
//!
//! # Example
//!
//! ```
//! fn demo() -> portaudio_shim::PaResult
//! {
//!     let stream = portaudio_shim::stream::Stream::open_default(
//!                           0, // input channels
//!                           1, // output channels
//!                           44100.0, // sample rate
//!                           portaudio_shim::stream::FRAMES_PER_BUFFER_UNSPECIFIED,
//!                           None // no callback
//!                      )?;
//!
//!     stream.start()?;
//!
//!     let mut phase = 0.0f32;
//!     let mut buffer = Vec::with_capacity(44100);
//!     for _i in 0..44100
//!     {
//!         // Small amplitude such that the test does not produce sound
//!         buffer.push(phase * 0.001);
//!
//!         phase += 0.03;
//!         if phase > 1.0 { phase -= 2.0; }
//!     }
//!
//!     stream.write(&buffer)?;
//!
//!     Ok(())
//! }
//!
//! portaudio_shim::initialize().unwrap();
//! println!("{:?}", demo());
//! portaudio_shim::terminate().unwrap();
//! ```

extern crate libc;
#[macro_use] extern crate log;
#[macro_use] extern crate bitflags;
extern crate portaudio_sys as ll;

pub use pa::{PaError, PaResult, initialize, terminate, version, version_text, is_stub};

pub mod stream;
pub mod pa;
pub mod hostapi;
pub mod device;

mod util;
