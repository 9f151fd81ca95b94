//! # Pixelveil
//!
//! Hides a text payload in the least significant bits of an image's
//! pixel samples and recovers it later. The embedded data is length
//! prefixed, so extraction needs nothing but the image itself.
//!
//! The heart of the crate is [`LsbCodec`], a pair of pure functions over
//! a [`PixelBuffer`]: one bit of payload per sample, a 32 bit big endian
//! header counting the payload bits, every byte embedded most
//! significant bit first.
//!
//! # Usage Examples
//!
//! ## In memory, straight on a pixel buffer
//!
//! ```rust
//! use pixelveil::{LsbCodec, PixelBuffer};
//!
//! let carrier = PixelBuffer::from_raw(10, 10, 3, vec![0u8; 300]).unwrap();
//!
//! let stego = LsbCodec::encode(&carrier, "Hello, World!").unwrap();
//! assert_eq!(LsbCodec::decode(&stego).unwrap(), "Hello, World!");
//! ```
//!
//! ## File to file
//!
//! ```rust,no_run
//! pixelveil::api::hide::prepare()
//!     .with_message("Hello, World!")
//!     .with_image("carrier.png")
//!     .with_output("image-with-a-secret.png")
//!     .execute()
//!     .expect("Failed to hide message in image");
//!
//! let message = pixelveil::api::unveil::prepare()
//!     .with_secret_image("image-with-a-secret.png")
//!     .execute()
//!     .expect("Failed to unveil message from image");
//! ```

pub mod api;
pub mod buffer;
pub mod carrier;
pub mod codec;
pub mod error;
pub mod frame;
pub mod result;

pub use crate::buffer::PixelBuffer;
pub use crate::carrier::{Carrier, Persist};
pub use crate::codec::LsbCodec;
pub use crate::error::StegoError;
pub use crate::result::Result;
