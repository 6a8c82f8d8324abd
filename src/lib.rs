//! image-cropper: crop a whole folder of images to one rectangle.
//!
//! The rectangle comes from a four-line config file (see [`config`]) and is
//! applied to every entry of the input folder by [`crop`], writing each
//! result under the same name into the output folder.
//!
//! # Modules
//!
//! - [`config`]: Crop config parsing
//! - [`geometry`]: Crop region types ([`CropSpec`], [`CropRect`])
//! - [`crop`]: Batch cropping on top of the `image` crate
//! - [`cli`]: Argument checks, help text and the output folder prompt
//! - [`error`]: Error types for image-cropper operations

pub mod cli;
pub mod config;
pub mod crop;
pub mod error;
pub mod geometry;

use std::ffi::OsString;
use std::io;

use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

pub use error::{CropperError, InvalidConfig, UsageError};
pub use geometry::{CropRect, CropSpec};

use cli::{CropArgs, Invocation};

/// The image-cropper CLI application.
///
/// clap only collects the raw arguments; [`cli::parse_invocation`] checks
/// them so that every usage problem ends in one of the fixed diagnostics.
#[derive(Parser)]
#[command(name = "image-cropper")]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
    /// Command followed by its arguments.
    #[arg(num_args = 0.., allow_hyphen_values = true, trailing_var_arg = true)]
    args: Vec<OsString>,
}

/// Run the image-cropper CLI.
///
/// This is the main entry point for the CLI, called from `main.rs`.
pub fn run() -> Result<(), CropperError> {
    init_tracing();

    let cli = Cli::try_parse().map_err(|err| {
        debug!(%err, "could not collect arguments");
        UsageError::MissingCommand
    })?;

    run_with_args(&cli.args)
}

/// Run the CLI on explicit arguments (without the program name).
pub fn run_with_args(args: &[OsString]) -> Result<(), CropperError> {
    match cli::parse_invocation(args)? {
        Invocation::Help => {
            println!("{}", cli::HELP_MESSAGE);
            Ok(())
        }
        Invocation::Crop(args) => run_crop(args),
    }
}

/// Execute the `--input` command.
fn run_crop(args: CropArgs) -> Result<(), CropperError> {
    let proceed = {
        let stdin = io::stdin();
        let stdout = io::stdout();
        cli::ensure_output_folder(&args, &mut stdin.lock(), &mut stdout.lock())?
    };
    if !proceed {
        return Ok(());
    }

    let rect = config::read_crop_config(&args.config_file)?;

    crop::crop_images(&args.input_folder, rect, &args.output_folder, |path| {
        println!("Image successfully saved at `{}`", path.display());
    })?;

    Ok(())
}

/// Log to stderr, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}
