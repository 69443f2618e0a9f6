use std::ffi::OsStr;

use current_platform::CURRENT_PLATFORM;

pub fn maybe_print_help_and_exit(bin_name: &str) {
    match std::env::args_os().nth(1) {
        None => print_help_and_exit(bin_name),
        Some(arg) => {
            if arg.as_os_str() == OsStr::new("--help") || arg.as_os_str() == OsStr::new("-help") {
                print_help_and_exit(bin_name)
            }
        }
    }
}

fn print_help_and_exit(bin_name: &str) -> ! {
    print_help(bin_name);
    std::process::exit(0);
}

fn print_help(bin_name: &str) {
    println!("Version: {}", version_string());
    println!("Copyright: (C) 2025-2026 WonderGray contributors");
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Usage: {bin_name} file");
    println!();
    println!("Converts an RGB image to grayscale using the luminosity method.");
    println!("The result is saved next to the input as {{name}}_grayscale.{{ext}},");
    println!("in the same container format as the input.");
}

fn version_string() -> String {
    let cpu = CURRENT_PLATFORM.split('-').next().unwrap_or("unknown");
    let major = env!("CARGO_PKG_VERSION_MAJOR");
    let minor = env!("CARGO_PKG_VERSION_MINOR");
    let patch = env!("CARGO_PKG_VERSION_PATCH");
    let repo = env!("CARGO_PKG_REPOSITORY");

    format!("WonderGray {major}.{minor}.{patch} Q8 {cpu} {repo}")
}
