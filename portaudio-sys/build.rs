extern crate chrono;
extern crate pkg_config;

use chrono::Utc;
use std::env;

#[path = "src/build_time.rs"]
mod build_time;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src/build_time.rs");
    println!("cargo:rerun-if-env-changed=PORTAUDIO_FORCE_STUB");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");
    println!("cargo:rustc-check-cfg=cfg(portaudio_stub)");
    println!("cargo:rustc-env=PORTAUDIO_STUB_BUILD_TIME={}", compile_timestamp());

    let wants_system = env::var_os("CARGO_FEATURE_SYSTEM").is_some()
        && env::var_os("PORTAUDIO_FORCE_STUB").is_none();
    if !wants_system
    {
        use_stub();
        return;
    }

    match link_system()
    {
        Ok(..) => {},
        Err(e) => {
            println!("cargo:warning=portaudio-2.0 unavailable, using the stub backend: {}", e);
            use_stub();
        },
    }
}

fn use_stub() {
    println!("cargo:rustc-cfg=portaudio_stub");
}

#[cfg(not(windows))]
fn link_system() -> Result<(), String> {
    pkg_config::probe_library("portaudio-2.0")
        .map(|_| ())
        .map_err(|e| e.to_string())
}

#[cfg(windows)]
fn link_system() -> Result<(), String> {
    // Assume the library is in the correct path
    println!("cargo:rustc-link-lib=portaudio");
    Ok(())
}

fn compile_timestamp() -> String {
    let now = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| build_time::parse_source_date_epoch(&s))
        .unwrap_or_else(Utc::now);
    build_time::format_build_time(now)
}
