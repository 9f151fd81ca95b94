use image::RgbImage;

use crate::error::StegoError;
use crate::result::Result;

/// A flat run of 8 bit samples plus the image shape they came from.
///
/// Samples are stored row-major and channel-interleaved, exactly as
/// [`image::RgbImage`] lays out its raw container. Every sample carries
/// one embeddable bit in its least significant position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u8>,
}

impl PixelBuffer {
    /// Wraps a raw sample vector, checking it against the given shape.
    pub fn from_raw(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * channels as usize;
        if channels == 0 || samples.len() != expected {
            return Err(StegoError::ShapeMismatch {
                width,
                height,
                channels,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    /// One bit per sample, so the capacity equals the sample count.
    pub fn capacity_bits(&self) -> usize {
        self.samples.len()
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub(crate) fn samples_mut(&mut self) -> &mut [u8] {
        &mut self.samples
    }

    pub fn into_raw(self) -> Vec<u8> {
        self.samples
    }

    /// Reassembles the buffer into an [`RgbImage`].
    ///
    /// Only 3 channel buffers can go back to an image.
    pub fn to_image(&self) -> Result<RgbImage> {
        if self.channels != 3 {
            return Err(StegoError::ShapeMismatch {
                width: self.width,
                height: self.height,
                channels: self.channels,
                actual: self.samples.len(),
            });
        }

        RgbImage::from_raw(self.width, self.height, self.samples.clone()).ok_or(
            StegoError::ShapeMismatch {
                width: self.width,
                height: self.height,
                channels: self.channels,
                actual: self.samples.len(),
            },
        )
    }
}

impl From<&RgbImage> for PixelBuffer {
    fn from(image: &RgbImage) -> Self {
        Self {
            width: image.width(),
            height: image.height(),
            channels: 3,
            samples: image.as_raw().clone(),
        }
    }
}
