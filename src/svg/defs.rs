//! Constants for SVG writing.
//!
//! Sizes are in pixels, colours are `(r, g, b)` triples.

/// Namespace of the root `<svg>` element
pub(crate) const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";

/// Branch stroke width for [ThicknessStrategy::Uniform](super::ThicknessStrategy::Uniform)
pub(crate) const UNIFORM_STROKE_WIDTH: f64 = 2.0;

/// Stroke width of a branch holding no samples
pub(crate) const MIN_STROKE_WIDTH: f64 = 1.0;

/// Stroke width of a branch holding all samples
pub(crate) const MAX_STROKE_WIDTH: f64 = 12.0;

/// Radius of a leaf or bunch holding no samples
pub(crate) const MIN_RADIUS: f64 = 2.0;

/// Radius of a leaf or bunch holding all samples
pub(crate) const MAX_RADIUS: f64 = 16.0;

/// Colour of pure nodes
pub(crate) const PURE_COLOR: (u8, u8, u8) = (46, 160, 67);

/// Colour of nodes with impurity 1 or more
pub(crate) const IMPURE_COLOR: (u8, u8, u8) = (214, 39, 40);

/// Colour of nodes holding no samples
pub(crate) const FEW_SAMPLES_COLOR: (u8, u8, u8) = (198, 219, 239);

/// Colour of nodes holding all samples
pub(crate) const MANY_SAMPLES_COLOR: (u8, u8, u8) = (8, 48, 107);

/// Branch colour when colouring leaves by class
pub(crate) const WOOD_COLOR: (u8, u8, u8) = (121, 85, 61);

/// Colour of highlighted nodes
pub(crate) const SELECTED_COLOR: (u8, u8, u8) = (255, 127, 14);

/// Colour of nodes off the highlighted paths
pub(crate) const UNSELECTED_COLOR: (u8, u8, u8) = (190, 190, 190);

/// Fill of bunches
pub(crate) const BUNCH_COLOR: (u8, u8, u8) = (128, 128, 128);

/// Leaf colours by best class, repeating for more classes
pub(crate) const CLASS_PALETTE: &[(u8, u8, u8)] = &[
    (31, 119, 180),
    (255, 127, 14),
    (44, 160, 44),
    (214, 39, 40),
    (148, 103, 189),
    (140, 86, 75),
    (227, 119, 194),
    (127, 127, 127),
    (188, 189, 34),
    (23, 190, 207),
];
