//! SVG rendering of a computed [Layout](crate::layout::Layout).
//!
//! # API
//! * [`to_svg`] - returns the SVG document as a string
//! * [`write_svg_file`] - writes the SVG document to a file
//! * [`SvgStyle`] - how record attributes map to colours and sizes
//!
//! # Output
//! Branches are drawn as `<line>` elements in pre-order, then leaves as
//! `<circle>` elements and finally bunches as grey `<circle>` elements.
//! Leaves and bunches keep the order of the layout (largest first), so
//! smaller circles are drawn on top of larger ones.

mod defs;
pub mod writer;

pub use self::writer::{ColorStrategy, SvgStyle, ThicknessStrategy, to_svg, write_svg_file};
