extern crate portaudio_shim as portaudio;

use portaudio::stream::{Stream, FRAMES_PER_BUFFER_UNSPECIFIED};

const SAMPLE_RATE: u32 = 44100;
const SECONDS: u32 = 1;

fn main()
{
    if let Err(e) = portaudio::initialize()
    {
        eprintln!("init: {}", e);
        std::process::exit(1);
    }
    let result = demo();
    println!("{:?}", result);
    if let Err(e) = portaudio::terminate()
    {
        eprintln!("term: {}", e);
    }
    if result.is_err()
    {
        std::process::exit(1);
    }
}

fn demo() -> portaudio::PaResult
{
    let stream = Stream::<f32>::open_default(0, 1, SAMPLE_RATE as f64, FRAMES_PER_BUFFER_UNSPECIFIED, None)?;

    stream.start()?;

    let mut phase = 0.0f32;
    let mut buffer = Vec::with_capacity((SAMPLE_RATE * SECONDS) as usize);
    for _i in 0..SAMPLE_RATE * SECONDS
    {
        buffer.push(phase);

        phase += 0.007;
        if phase > 1.0 { phase -= 2.0; }
    }

    // Blocks until the whole buffer is queued, so no timer is needed
    stream.write(&buffer)?;
    stream.stop()
}
