use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use image::io::Reader as ImageReader;
use image::{DynamicImage, ImageFormat, RgbImage};
use log::error;

use crate::buffer::PixelBuffer;
use crate::error::StegoError;
use crate::result::Result;

pub trait Persist {
    fn save_as(&mut self, _: &Path) -> Result<()>;
}

/// An RGB image acting as the carrier of a hidden payload.
///
/// All the "a path, or an already-open image, or a byte stream"
/// convenience lives here. Non RGB inputs are converted on the way in,
/// so the codec only ever sees a 3 channel [`PixelBuffer`].
#[derive(Debug, Clone)]
pub struct Carrier {
    image: RgbImage,
}

impl Carrier {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let image = image::open(path).map_err(|e| {
            error!("Error opening carrier image {path:?}: {e}");
            StegoError::InvalidImageMedia
        })?;

        Ok(Self::from_image(image))
    }

    pub fn from_reader<R: Read + Seek>(reader: R) -> Result<Self> {
        let image = ImageReader::new(BufReader::new(reader))
            .with_guessed_format()
            .map_err(|e| {
                error!("Error probing carrier image format: {e}");
                StegoError::InvalidImageMedia
            })?
            .decode()
            .map_err(|e| {
                error!("Error decoding carrier image: {e}");
                StegoError::InvalidImageMedia
            })?;

        Ok(Self::from_image(image))
    }

    pub fn from_image(image: DynamicImage) -> Self {
        Self {
            image: image.to_rgb8(),
        }
    }

    /// Rewraps a buffer that came out of the codec, typically to save it.
    pub fn from_buffer(buffer: PixelBuffer) -> Result<Self> {
        Ok(Self {
            image: buffer.to_image()?,
        })
    }

    pub fn to_buffer(&self) -> PixelBuffer {
        PixelBuffer::from(&self.image)
    }

    pub fn image(&self) -> &RgbImage {
        &self.image
    }
}

impl Persist for Carrier {
    /// PNG only on the way out: the embedded bits would not survive a
    /// lossy container.
    fn save_as(&mut self, path: &Path) -> Result<()> {
        let mut file = File::create(path).map_err(|e| {
            error!("Error creating file {path:?}: {e}");
            StegoError::WriteError { source: e }
        })?;

        self.image
            .write_to(&mut file, ImageFormat::Png)
            .map_err(|e| {
                error!("Error saving image: {e}");
                StegoError::ImageEncodingError
            })
    }
}
