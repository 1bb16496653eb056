//! Color sequencing for avatar shapes.
//!
//! Two color sources feed an avatar: a plain uniform draw for the background
//! (sets the overall tone, uncorrelated with anything else) and a bounded
//! random walk ([`ColorWalk`]) for the shape fills, so successive blobs read
//! as one coherent palette instead of clashing random colors.

use crate::prng::Xorshift64;

/// Walk step half-width as a fraction of the 256-value channel range.
const COLOR_SPREAD: f64 = 0.15;
/// Exclusive upper bound for a running channel value before flooring.
const CHANNEL_MAX: f64 = 255.999;
/// Largest background color value (`0xfff`).
const MAX_BACKGROUND: f64 = 4095.0;

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Formats the color as a CSS `rgb(r,g,b)` string.
    pub fn to_css(self) -> String {
        format!("rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Bounded random walk over three RGB channels.
///
/// Starts with all channels unset. The first [`step`](ColorWalk::step) draws
/// a uniform random color; every later step moves each channel at most
/// `COLOR_SPREAD * 256` in either direction before clamping, producing a
/// soft palette drift across a shape sequence.
///
/// The walk is an immutable-update value: `step` consumes the previous walk
/// and returns the advanced one alongside the emitted color.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ColorWalk {
    channels: Option<[f64; 3]>,
}

impl ColorWalk {
    /// Creates a walk with all channels unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the walk by one color, consuming exactly three random draws
    /// (R, then G, then B).
    ///
    /// Each channel is clamped to [0, 255.999) after the update; the emitted
    /// color is the floor of the running values. Returns the advanced walk
    /// and the color.
    #[must_use]
    pub fn step(self, rng: &mut Xorshift64) -> (ColorWalk, Rgb) {
        let mut next = [0.0_f64; 3];
        for (i, slot) in next.iter_mut().enumerate() {
            let value = match self.channels {
                None => rng.next_f64() * 256.0,
                Some(prev) => {
                    prev[i] - COLOR_SPREAD * 256.0
                        + rng.next_f64() * (2.0 * COLOR_SPREAD * 256.0)
                }
            };
            *slot = value.clamp(0.0, CHANNEL_MAX);
        }
        let color = Rgb {
            r: next[0].floor() as u8,
            g: next[1].floor() as u8,
            b: next[2].floor() as u8,
        };
        (ColorWalk { channels: Some(next) }, color)
    }
}

/// Draws a uniform random background color formatted as a hex string.
///
/// The value is `floor(r * 0xfff)` printed without zero padding, so small
/// draws produce short strings (e.g. `#a2`). This is the wire format the
/// SVG layer expects and must stay stable.
pub fn random_hex_color(rng: &mut Xorshift64) -> String {
    format!("#{:x}", (rng.next_f64() * MAX_BACKGROUND).floor() as u32)
}
