//! Batch cropping.
//!
//! Every entry of the source folder is decoded, cropped to the same
//! [`CropRect`] and written under the same file name in the destination
//! folder. The encoded format always matches the decoded one.
//!
//! A rectangle reaching past the image edge is clamped by
//! [`image::DynamicImage::crop_imm`]; no further checks are made here.

use std::fs;
use std::path::{Path, PathBuf};

use image::{ImageError, ImageReader};
use tracing::{debug, info};

use crate::error::CropperError;
use crate::geometry::CropRect;

/// The outputs written by one [`crop_images`] call, in processing order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct BatchReport {
    pub saved: Vec<PathBuf>,
}

impl BatchReport {
    /// Returns the number of images written.
    pub fn len(&self) -> usize {
        self.saved.len()
    }

    /// Returns true if the batch wrote nothing.
    pub fn is_empty(&self) -> bool {
        self.saved.is_empty()
    }
}

/// Crop a single image file and write the result to `destination`.
pub fn crop_image(source: &Path, rect: CropRect, destination: &Path) -> Result<(), CropperError> {
    let read_err = |source_err: ImageError| CropperError::ImageRead {
        path: source.to_path_buf(),
        source: source_err,
    };

    let reader = ImageReader::open(source)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|err| read_err(ImageError::IoError(err)))?;
    let format = reader.format();
    let image = reader.decode().map_err(read_err)?;

    debug!(
        path = %source.display(),
        ?format,
        width = image.width(),
        height = image.height(),
        "decoded image"
    );

    let cropped = image.crop_imm(rect.left(), rect.top(), rect.width(), rect.height());

    let written = match format {
        Some(format) => cropped.save_with_format(destination, format),
        None => cropped.save(destination),
    };
    written.map_err(|source| CropperError::ImageWrite {
        path: destination.to_path_buf(),
        source,
    })
}

/// Crop every entry of `input_dir` into `output_dir`.
///
/// Entries are handled one at a time in directory listing order.
/// `on_saved` runs after each successful write with the output path. The
/// first failure stops the batch; outputs already written are left in place.
pub fn crop_images<F>(
    input_dir: &Path,
    rect: CropRect,
    output_dir: &Path,
    mut on_saved: F,
) -> Result<BatchReport, CropperError>
where
    F: FnMut(&Path),
{
    info!(
        input = %input_dir.display(),
        output = %output_dir.display(),
        %rect,
        "starting batch crop"
    );

    let mut report = BatchReport::default();

    for entry in fs::read_dir(input_dir)? {
        let entry = entry?;
        let source = entry.path();
        let destination = output_dir.join(entry.file_name());

        crop_image(&source, rect, &destination)?;
        on_saved(&destination);
        report.saved.push(destination);
    }

    info!(count = report.len(), "batch crop finished");
    Ok(report)
}
