//! Avatar composition.
//!
//! [`compose`] turns a seed string into an ordered list of drawing
//! primitives: one background rectangle followed by a small number of blob
//! paths. The same seed and options always produce the identical list,
//! bit for bit; that reproducibility is the contract of the whole crate.

use crate::color::{random_hex_color, ColorWalk};
use crate::error::AvatarError;
use crate::prng::Xorshift64;
use crate::shape::Blob;
use crate::svg::SVG_NS;
use serde::{Deserialize, Serialize};

/// Default canvas size (width and height) in user units.
pub const DEFAULT_SIZE: f64 = 128.0;
/// Smallest number of blob shapes per avatar.
const MIN_SHAPES: usize = 2;
/// Width of the random shape-count range above the minimum; the count
/// formula `MIN_SHAPES + floor(r * (RANDOM_SHAPES + 1))` yields 2..=4.
const RANDOM_SHAPES: usize = 2;

/// Configuration for one avatar generation.
///
/// Defaults are applied here, at the boundary, rather than threaded through
/// optional parameters; [`validate`](AvatarOptions::validate) rejects
/// unusable sizes before any geometry runs.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AvatarOptions {
    /// Canvas width and height in user units (the canvas is square).
    pub size: f64,
    /// XML namespace stamped on the generated `<svg>` element.
    pub xmlns: String,
}

impl Default for AvatarOptions {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            xmlns: SVG_NS.to_owned(),
        }
    }
}

impl AvatarOptions {
    /// Creates options with the given size and the default namespace.
    pub fn with_size(size: f64) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }

    /// Validates that the size is usable for geometry.
    ///
    /// Returns [`AvatarError::InvalidSize`] for non-finite or non-positive
    /// sizes, so NaNs never propagate into coordinates.
    pub fn validate(&self) -> Result<(), AvatarError> {
        if !self.size.is_finite() || self.size <= 0.0 {
            return Err(AvatarError::InvalidSize { size: self.size });
        }
        Ok(())
    }
}

/// One drawing instruction handed to a rendering target.
///
/// Carries geometry plus a single fill color and nothing else; the SVG
/// layer turns it into markup, and headless callers can inspect it as data.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    /// A filled rectangle anchored at the origin (the background).
    Rect { width: f64, height: f64, fill: String },
    /// A filled closed curved path (one blob).
    Path { data: String, fill: String },
}

/// Composes the primitive sequence for one avatar.
///
/// Consumes random draws in a frozen order: one for the shape count, one
/// for the background color, then ten geometry draws plus three color draws
/// per shape. Returns `1 + count` primitives with the background first,
/// where `count` is in 2..=4.
pub fn compose(seed: &str, options: &AvatarOptions) -> Result<Vec<Primitive>, AvatarError> {
    options.validate()?;
    let mut rng = Xorshift64::from_seed_str(seed);
    let shapes = MIN_SHAPES + (rng.next_f64() * (RANDOM_SHAPES + 1) as f64).floor() as usize;

    let mut primitives = Vec::with_capacity(1 + shapes);
    primitives.push(Primitive::Rect {
        width: options.size,
        height: options.size,
        fill: random_hex_color(&mut rng),
    });

    let mut walk = ColorWalk::new();
    for _ in 0..shapes {
        let blob = Blob::generate(&mut rng, options.size);
        let (next, color) = walk.step(&mut rng);
        walk = next;
        primitives.push(Primitive::Path {
            data: blob.path_data(),
            fill: color.to_css(),
        });
    }
    Ok(primitives)
}
