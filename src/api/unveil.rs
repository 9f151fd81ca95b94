use std::fs;
use std::path::{Path, PathBuf};

use crate::carrier::Carrier;
use crate::codec::LsbCodec;
use crate::error::StegoError;
use crate::result::Result;

pub fn prepare() -> UnveilApi {
    UnveilApi::default()
}

/// File-to-text convenience around [`LsbCodec::decode`].
#[derive(Default, Debug)]
pub struct UnveilApi {
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl UnveilApi {
    pub fn with_secret_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    /// Additionally writes the recovered text to a file.
    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn use_output<A: AsRef<Path>>(mut self, output: Option<A>) -> Self {
        self.output = output.map(|o| o.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<String> {
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };

        let carrier = Carrier::from_file(&image)?;
        let message = LsbCodec::decode(&carrier.to_buffer())?;

        if let Some(output) = self.output {
            fs::write(&output, message.as_bytes())
                .map_err(|e| StegoError::WriteError { source: e })?;
        }

        Ok(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_insist_on_a_secret_image() {
        assert!(matches!(
            prepare().execute(),
            Err(StegoError::CarrierNotSet)
        ));
    }
}
