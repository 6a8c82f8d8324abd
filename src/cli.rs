//! Command-line front end.
//!
//! Arguments are checked in a fixed order and each failure maps to one of
//! the [`UsageError`] diagnostics. A missing output folder is offered for
//! creation through an interactive y/n prompt.

use std::ffi::OsString;
use std::fs;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CropperError, UsageError};

pub const HELP_MESSAGE: &str = "
    Image cropper v1.0

    Commands:

        --input | -i [INPUT FILE] [INPUT FOLDER] [OUTPUT FOLDER]:

            Crops the pictures inside [INPUT FOLDER], as defined
            inside [INPUT FILE], and saves the cropped pictures inside [OUTPUT FOLDER].

            The format for the [INPUT FILE] is as follows:
                - it requires 4 different lines of text, each containing one different
                  piece of information
                - on one line, there must be something like \"X = N\", where 'N' must be an integer
                - on one line, there must be something like \"Y = N\", where 'N' must be an integer
                - on one line, there must be something like \"Width = N\", where 'N' must be an integer
                - on one line, there must be something like \"Height = N\", where 'N' must be an integer

            In particular, 'X' and 'Y' define the upper-left pixel of the region
            that will be used to crop the images, while 'Width' and 'Height' respectively define the
            width and height of the region. Empty lines are ignored, as well as spaces and tabs,
            and the order of the lines does not matter.
            Here is an example of a correctly formatted input file:

            X = 12
            Y = 16
            Width = 236
            Height = 234

        --help | -h:

            Shows this help message.
";

pub const INVALID_CHOICE: &str = "Error: invalid choice";

/// What the user asked for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Invocation {
    Help,
    Crop(CropArgs),
}

/// Checked arguments of the `--input` command.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CropArgs {
    /// Existing regular file holding the crop config.
    pub config_file: PathBuf,
    /// Existing path that is not a regular file.
    pub input_folder: PathBuf,
    pub output_folder: PathBuf,
    /// False when the output folder still has to be created.
    pub output_exists: bool,
}

/// Check raw arguments (without the program name) in order.
///
/// Arguments after the output folder are ignored.
pub fn parse_invocation(args: &[OsString]) -> Result<Invocation, UsageError> {
    let command = args.first().ok_or(UsageError::MissingCommand)?;

    match command.to_str() {
        Some("--help" | "-h") => return Ok(Invocation::Help),
        Some("--input" | "-i") => {}
        _ => return Err(UsageError::MissingCommand),
    }

    let config_file = PathBuf::from(args.get(1).ok_or(UsageError::MissingArgument)?);
    if !config_file.is_file() {
        debug!(path = %config_file.display(), "config file is not a regular file");
        return Err(UsageError::InvalidArgument);
    }

    let input_folder = PathBuf::from(args.get(2).ok_or(UsageError::MissingArgument)?);
    if !input_folder.exists() || input_folder.is_file() {
        debug!(path = %input_folder.display(), "input folder is missing or a file");
        return Err(UsageError::InvalidArgument);
    }

    let output_folder = PathBuf::from(args.get(3).ok_or(UsageError::MissingArgument)?);
    let output_exists = output_folder.exists();

    Ok(Invocation::Crop(CropArgs {
        config_file,
        input_folder,
        output_folder,
        output_exists,
    }))
}

/// Ask whether `folder` should be created until the answer is `y` or `n`.
///
/// Answers are case-insensitive and surrounding whitespace is ignored. End
/// of input counts as `n`.
pub fn confirm_create_folder<R, W>(folder: &Path, input: &mut R, out: &mut W) -> io::Result<bool>
where
    R: BufRead,
    W: Write,
{
    let mut answer = String::new();

    loop {
        write!(
            out,
            "Would you like to create `{}` and proceed? [y/n] ",
            folder.display()
        )?;
        out.flush()?;

        answer.clear();
        if input.read_line(&mut answer)? == 0 {
            writeln!(out)?;
            return Ok(false);
        }

        match answer.trim().to_lowercase().as_str() {
            "y" => return Ok(true),
            "n" => return Ok(false),
            _ => writeln!(out, "{INVALID_CHOICE}")?,
        }
    }
}

/// Make sure the output folder exists, prompting for creation if needed.
///
/// Returns false when the user declined.
pub fn ensure_output_folder<R, W>(
    args: &CropArgs,
    input: &mut R,
    out: &mut W,
) -> Result<bool, CropperError>
where
    R: BufRead,
    W: Write,
{
    if args.output_exists {
        return Ok(true);
    }

    writeln!(out, "{}", UsageError::InvalidArgument)?;
    writeln!(
        out,
        "\nThe specified output folder `{}` does not exist",
        args.output_folder.display()
    )?;

    if !confirm_create_folder(&args.output_folder, input, out)? {
        debug!(path = %args.output_folder.display(), "output folder creation declined");
        return Ok(false);
    }

    fs::create_dir(&args.output_folder)?;
    debug!(path = %args.output_folder.display(), "created output folder");
    Ok(true)
}
