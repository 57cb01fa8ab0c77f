extern crate portaudio_shim as portaudio;

use portaudio::{device, hostapi, pa};
use portaudio::stream::{Stream, StreamCallback, StreamCallbackFlags, StreamCallbackResult, StreamFlags, StreamParameters, StreamTimeInfo};

fn main()
{
    println!("version: {} \"{}\"", pa::version(), pa::version_text());
    println!("backend: {}", if pa::is_stub() { "stub" } else { "system" });
    println!("init: {:?}", pa::initialize());

    print_info();
    callback_demo();
    write_demo();

    println!("term: {:?}", pa::terminate());
}

fn print_info()
{
    if let Ok(api_count) = hostapi::get_count()
    {
        for i in 0..api_count
        {
            match hostapi::get_info(i)
            {
                None => println!("api {}: ???", i),
                Some(ha) => println!("api {}: {} ({:?}, {} devices)", i, ha.name, ha.api_type, ha.device_count),
            }
        }
    }

    if let Ok(device_count) = device::get_count()
    {
        for i in 0..device_count
        {
            match device::get_info(i)
            {
                None => println!("dev {}: ???", i),
                Some(d) => println!("dev {}: {} ({} in, {} out, {} Hz, low latency in {:?} out {:?})",
                                    i, d.name, d.max_input_channels, d.max_output_channels, d.default_sample_rate,
                                    d.default_low_input_latency, d.default_low_output_latency),
            }
        }
    }

    println!("default input: {:?}", device::get_default_input_index());
    println!("default output: {:?}", device::get_default_output_index());
}

fn callback_demo()
{
    let mut left_phase = 0.0f32;
    let mut right_phase = 0.0f32;
    let callback: StreamCallback<f32> = Box::new(move |_input: &[f32], output: &mut [f32], _time: StreamTimeInfo, _flags: StreamCallbackFlags|
    {
        for frame in output.chunks_mut(2)
        {
            frame[0] = left_phase;
            if let Some(right) = frame.get_mut(1)
            {
                *right = right_phase;
            }

            left_phase += 0.01;
            if left_phase >= 1.0 { left_phase -= 2.0; }

            right_phase += 0.03;
            if right_phase >= 1.0 { right_phase -= 2.0; }
        }
        StreamCallbackResult::Continue
    });

    let stream = match Stream::open_default(0, 2, 44100f64, 0, Some(callback))
    {
        Err(v) => { println!("callback stream: Err({})", v); return },
        Ok(stream) => stream,
    };
    println!("start: {:?}", stream.start());
    std::thread::sleep(std::time::Duration::from_secs(1));
    println!("stop: {:?}", stream.stop());
}

fn write_demo()
{
    let output = match StreamParameters::default_output(2)
    {
        Err(v) => { println!("output parameters: Err({})", v); return },
        Ok(params) => params,
    };
    let stream = match Stream::<f32>::open(None, Some(output), 44100f64, 0, StreamFlags::empty(), None)
    {
        Err(v) => { println!("Err({})", v); return },
        Ok(stream) => stream,
    };

    println!("start: {:?}", stream.start());
    println!("active: {:?} stopped: {:?}", stream.is_active(), stream.is_stopped());
    println!("write: {:?}", stream.write(&get_buffer(44100 * 3)));
    println!("stop: {:?}", stream.stop());
}

fn get_buffer(len: usize) -> Vec<f32>
{
    let mut left = 0.0f32;
    let mut right = 0.0f32;
    let mut result = Vec::with_capacity(len);
    for _ in 0..len / 2
    {
        result.push(left);
        result.push(right);
        left += 0.03;
        right += 0.01;
        if left >= 1.0 { left -= 2.0; }
        if right >= 1.0 { right -= 2.0; }
    }
    result
}

