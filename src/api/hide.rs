use std::path::{Path, PathBuf};

use crate::carrier::{Carrier, Persist};
use crate::codec::LsbCodec;
use crate::error::StegoError;
use crate::result::Result;

pub fn prepare() -> HideApi {
    HideApi::default()
}

/// File-to-file convenience around [`LsbCodec::encode`].
#[derive(Default, Debug)]
pub struct HideApi {
    message: Option<String>,
    image: Option<PathBuf>,
    output: Option<PathBuf>,
}

impl HideApi {
    pub fn with_message(mut self, message: &str) -> Self {
        self.message = Some(message.to_string());
        self
    }

    pub fn use_message<S: AsRef<str>>(mut self, message: Option<S>) -> Self {
        self.message = message.map(|s| s.as_ref().to_string());
        self
    }

    pub fn with_image<A: AsRef<Path>>(mut self, image: A) -> Self {
        self.image = Some(image.as_ref().to_path_buf());
        self
    }

    pub fn with_output<A: AsRef<Path>>(mut self, output: A) -> Self {
        self.output = Some(output.as_ref().to_path_buf());
        self
    }

    pub fn execute(self) -> Result<()> {
        let Some(message) = self.message else {
            return Err(StegoError::MissingMessage);
        };
        let Some(image) = self.image else {
            return Err(StegoError::CarrierNotSet);
        };
        let Some(output) = self.output else {
            return Err(StegoError::TargetNotSet);
        };

        let carrier = Carrier::from_file(&image)?;
        let stego = LsbCodec::encode(&carrier.to_buffer(), &message)?;
        Carrier::from_buffer(stego)?.save_as(&output)
    }
}
