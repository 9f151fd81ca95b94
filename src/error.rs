use thiserror::Error;

#[derive(Error, Debug)]
pub enum StegoError {
    /// Represents a payload character above U+00FF, which cannot be framed as a single byte
    #[error("Payload contains character {0:?} outside of the single-byte range 0-255")]
    InvalidPayload(char),

    /// Represents a payload whose frame does not fit into the carrier
    #[error("Payload needs {required} bits but the carrier only holds {capacity}")]
    PayloadTooLarge { required: usize, capacity: usize },

    /// Represents a carrier that cannot even hold the length header
    #[error("Carrier holds {0} samples, too small for the 32 bit length header")]
    BufferTooSmall(usize),

    /// Represents a length header that announces zero bits or more bits than the carrier has left
    #[error("Length header announces {0} payload bits, which is zero or exceeds the remaining capacity")]
    CorruptPayload(usize),

    /// Represents an extracted payload that is not a whole number of bytes
    #[error("Extracted {0} payload bits, not a multiple of 8")]
    InvalidPayloadLength(usize),

    /// Represents a decoded byte with no character mapping
    #[error("Decoded code point {0:#x} does not map to a character")]
    InvalidCharacterCode(u32),

    /// Represents a sample buffer whose length disagrees with its shape
    #[error("Buffer of {actual} samples does not match the shape {width}x{height}x{channels}")]
    ShapeMismatch {
        width: u32,
        height: u32,
        channels: u8,
        actual: usize,
    },

    /// Represents an invalid carrier image. For example, a broken PNG file
    #[error("Image media is invalid")]
    InvalidImageMedia,

    /// Represents a failure when serializing an image file.
    #[error("Image encoding error")]
    ImageEncodingError,

    /// Represents a failure to write the target file.
    #[error("Write error")]
    WriteError { source: std::io::Error },

    /// Represents all other cases of `std::io::Error`.
    #[error(transparent)]
    IoError(#[from] std::io::Error),

    #[error("API Error: Missing message")]
    MissingMessage,

    #[error("No carrier media set")]
    CarrierNotSet,

    #[error("No target file set")]
    TargetNotSet,
}
