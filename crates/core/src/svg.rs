//! SVG document assembly.
//!
//! Thin glue between composed primitives and SVG text: an [`SvgDocument`]
//! holds the canvas dimensions and primitive list and renders markup on
//! demand through `Display`. The generation algorithm itself never touches
//! XML; any other rendering target can consume the primitives directly.

use crate::avatar::{compose, AvatarOptions, Primitive};
use crate::error::AvatarError;
use std::fmt;

/// Default XML namespace for generated documents.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// A generated avatar as a renderable SVG document.
///
/// Immutable snapshot of one generation: square canvas dimensions, the
/// namespace, and the ordered primitive list (background first).
#[derive(Debug, Clone, PartialEq)]
pub struct SvgDocument {
    width: f64,
    height: f64,
    xmlns: String,
    primitives: Vec<Primitive>,
}

impl SvgDocument {
    /// Canvas width in user units.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Canvas height in user units.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// The ordered primitives, background rectangle first.
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }
}

impl fmt::Display for SvgDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"<svg xmlns="{}" width="{}" height="{}"><g>"#,
            self.xmlns, self.width, self.height
        )?;
        for primitive in &self.primitives {
            match primitive {
                Primitive::Rect { width, height, fill } => {
                    write!(f, r#"<rect width="{width}" height="{height}" fill="{fill}"/>"#)?;
                }
                Primitive::Path { data, fill } => {
                    write!(f, r#"<path d="{data}" fill="{fill}"/>"#)?;
                }
            }
        }
        write!(f, "</g></svg>")
    }
}

/// Generates a complete avatar document for `seed`.
///
/// Same seed and options always produce an identical document; distinct
/// seeds produce visually distinct avatars. Returns
/// [`AvatarError::InvalidSize`] for unusable sizes.
pub fn generate_avatar(seed: &str, options: &AvatarOptions) -> Result<SvgDocument, AvatarError> {
    let primitives = compose(seed, options)?;
    Ok(SvgDocument {
        width: options.size,
        height: options.size,
        xmlns: options.xmlns.clone(),
        primitives,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Test 1: Document structure --

    #[test]
    fn document_wraps_primitives_in_svg_and_group() {
        let doc = generate_avatar("test", &AvatarOptions::default()).unwrap();
        let markup = doc.to_string();
        assert!(
            markup.starts_with(r#"<svg xmlns="http://www.w3.org/2000/svg" width="128" height="128"><g>"#),
            "unexpected prefix: {markup}"
        );
        assert!(markup.ends_with("</g></svg>"), "unexpected suffix: {markup}");
        assert_eq!(markup.matches("<rect ").count(), 1);
        assert_eq!(
            markup.matches("<path ").count(),
            doc.primitives().len() - 1
        );
    }

    // -- Test 2: Determinism of the markup --

    #[test]
    fn same_seed_renders_byte_identical_markup() {
        let options = AvatarOptions::default();
        let first = generate_avatar("carol", &options).unwrap().to_string();
        let second = generate_avatar("carol", &options).unwrap().to_string();
        assert_eq!(first, second);
    }

    #[test]
    fn distinct_seeds_render_distinct_markup() {
        let options = AvatarOptions::default();
        let alice = generate_avatar("alice", &options).unwrap().to_string();
        let bob = generate_avatar("bob", &options).unwrap().to_string();
        assert_ne!(alice, bob);
    }

    // -- Test 3: Dimensions and namespace follow the options --

    #[test]
    fn document_carries_the_requested_size() {
        let doc = generate_avatar("alice", &AvatarOptions::with_size(256.0)).unwrap();
        assert_eq!(doc.width(), 256.0);
        assert_eq!(doc.height(), 256.0);
        assert!(doc.to_string().contains(r#"width="256""#));
    }

    #[test]
    fn custom_namespace_is_stamped_on_the_root() {
        let options = AvatarOptions {
            xmlns: "urn:example:svg".to_owned(),
            ..AvatarOptions::default()
        };
        let markup = generate_avatar("alice", &options).unwrap().to_string();
        assert!(markup.starts_with(r#"<svg xmlns="urn:example:svg""#));
    }

    // -- Test 4: Boundary validation passes through --

    #[test]
    fn invalid_size_is_rejected() {
        let err = generate_avatar("alice", &AvatarOptions::with_size(0.0)).unwrap_err();
        assert!(matches!(err, AvatarError::InvalidSize { .. }));
    }
}
