//! image-cropper CLI entrypoint.
//!
//! All diagnostics, including errors, are printed to stdout.

use std::process::ExitCode;

fn main() -> ExitCode {
    match image_cropper::run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            println!("{err}");
            ExitCode::FAILURE
        }
    }
}
