//! Crop config reader.
//!
//! A crop config is four `Key = N` lines (`X`, `Y`, `Width`, `Height`) in any
//! order. Spaces and tabs are ignored wherever they appear and blank lines
//! are skipped:
//!
//! ```text
//! X = 12
//! Y = 16
//! Width = 236
//! Height = 234
//! ```

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{CropperError, InvalidConfig};
use crate::geometry::{CropRect, CropSpec};

/// Recognized line prefixes, tried in this order.
const KEYS: [Key; 4] = [Key::X, Key::Y, Key::Width, Key::Height];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Key {
    X,
    Y,
    Width,
    Height,
}

impl Key {
    fn prefix(self) -> &'static str {
        match self {
            Key::X => "X=",
            Key::Y => "Y=",
            Key::Width => "Width=",
            Key::Height => "Height=",
        }
    }
}

/// Values seen so far; a [`CropSpec`] is only produced once all four are set.
#[derive(Debug, Default)]
struct PartialSpec {
    x: Option<u32>,
    y: Option<u32>,
    width: Option<u32>,
    height: Option<u32>,
}

impl PartialSpec {
    fn set(&mut self, key: Key, value: u32) {
        let slot = match key {
            Key::X => &mut self.x,
            Key::Y => &mut self.y,
            Key::Width => &mut self.width,
            Key::Height => &mut self.height,
        };
        *slot = Some(value);
    }

    fn finish(self) -> Option<CropSpec> {
        Some(CropSpec::new(self.x?, self.y?, self.width?, self.height?))
    }
}

/// Parse crop config lines into a [`CropSpec`].
///
/// A later line for the same key overwrites an earlier one.
pub fn parse_crop_spec<I, S>(lines: I) -> Result<CropSpec, InvalidConfig>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut partial = PartialSpec::default();

    for (line_idx, line) in lines.into_iter().enumerate() {
        let line_num = line_idx + 1;
        let filtered: String = line
            .as_ref()
            .chars()
            .filter(|c| *c != ' ' && *c != '\t')
            .collect();

        if filtered.is_empty() {
            continue;
        }

        let (key, value) = parse_line(&filtered).map_err(|reason| {
            debug!(line = line_num, reason, "rejected crop config line");
            InvalidConfig
        })?;
        partial.set(key, value);
    }

    match partial.finish() {
        Some(spec) => Ok(spec),
        None => {
            debug!("crop config is missing a key");
            Err(InvalidConfig)
        }
    }
}

/// Parse crop config text straight into the rectangle the cropper uses.
///
/// Lines may end in `\n` or `\r\n`.
pub fn parse_crop_config(text: &str) -> Result<CropRect, InvalidConfig> {
    parse_crop_spec(text.lines())?.to_rect()
}

/// Read and parse a crop config file.
///
/// A file that cannot be read is an I/O error; one that reads fine but does
/// not parse is [`CropperError::InvalidConfig`].
pub fn read_crop_config(path: &Path) -> Result<CropRect, CropperError> {
    let text = fs::read_to_string(path)?;
    let rect = parse_crop_config(&text)?;
    debug!(path = %path.display(), %rect, "loaded crop config");
    Ok(rect)
}

/// Matches one whitespace-free, non-empty line.
fn parse_line(line: &str) -> Result<(Key, u32), &'static str> {
    let key = KEYS
        .into_iter()
        .find(|key| line.starts_with(key.prefix()))
        .ok_or("unknown key")?;

    let value = &line[key.prefix().len()..];
    if value.contains('=') {
        return Err("more than one '='");
    }
    if value.is_empty() || !value.bytes().all(|b| b.is_ascii_digit()) {
        return Err("value is not a non-negative integer");
    }

    let value = value.parse::<u32>().map_err(|_| "value out of range")?;
    Ok((key, value))
}

/// Fuzzing entry point for crop config parsing.
#[cfg(feature = "fuzzing")]
pub fn fuzz_parse_crop_config(input: &str) -> Result<(), InvalidConfig> {
    let _ = parse_crop_config(input)?;
    Ok(())
}
