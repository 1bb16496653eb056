#![deny(unsafe_code)]
//! Deterministic blob-avatar generation.
//!
//! Turns an arbitrary seed string into a reproducible vector avatar: a
//! seeded PRNG drives blob geometry (two anchors, four bezier control
//! points per shape) and a correlated color walk, and the result is emitted
//! as drawing primitives or assembled SVG markup. The same seed and size
//! always produce bit-identical output.

pub mod avatar;
pub mod color;
pub mod error;
pub mod prng;
pub mod shape;
pub mod svg;

pub use avatar::{compose, AvatarOptions, Primitive, DEFAULT_SIZE};
pub use color::{ColorWalk, Rgb};
pub use error::AvatarError;
pub use prng::Xorshift64;
pub use shape::Blob;
pub use svg::{generate_avatar, SvgDocument, SVG_NS};
