//! SVG document writing for layouts.

use crate::layout::{Branch, Bunch, Layout, LayoutConfig, LeafRecord};
use crate::svg::defs::{
    BUNCH_COLOR, CLASS_PALETTE, FEW_SAMPLES_COLOR, IMPURE_COLOR, MANY_SAMPLES_COLOR, MAX_RADIUS,
    MAX_STROKE_WIDTH, MIN_RADIUS, MIN_STROKE_WIDTH, PURE_COLOR, SELECTED_COLOR, SVG_NAMESPACE,
    UNIFORM_STROKE_WIDTH, UNSELECTED_COLOR, WOOD_COLOR,
};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};

/// Characters of the document header and footer
const FRAME_CHARS: usize = 200;

/// Approximate characters of one `<line>` element
const LINE_CHARS: usize = 110;

/// Approximate characters of one `<circle>` element
const CIRCLE_CHARS: usize = 80;

/// How branches and leaves are coloured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColorStrategy {
    /// Green for pure nodes fading to red for impurity 1
    #[default]
    Impurity,
    /// Light to dark blue by share of the total samples
    Samples,
    /// Leaves by their best class, branches in a neutral colour
    BestClass,
    /// Highlighted paths in orange, everything else grey
    Path,
}

/// How thick branches are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ThicknessStrategy {
    /// Proportional to the share of the total samples
    #[default]
    Samples,
    /// Same width for every branch
    Uniform,
}

/// Visual mapping of record attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SvgStyle {
    /// Colour mapping
    pub color: ColorStrategy,
    /// Stroke width mapping
    pub thickness: ThicknessStrategy,
}

impl SvgStyle {
    /// Parses a style from JSON; absent fields keep their defaults.
    ///
    /// # Example
    /// ```
    /// use arborist::svg::{ColorStrategy, SvgStyle, ThicknessStrategy};
    ///
    /// let style = SvgStyle::from_json(r#"{"color": "PATH"}"#).unwrap();
    /// assert_eq!(style.color, ColorStrategy::Path);
    /// assert_eq!(style.thickness, ThicknessStrategy::Samples);
    /// ```
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Sets the colour mapping.
    pub fn with_color(mut self, color: ColorStrategy) -> Self {
        self.color = color;
        self
    }

    /// Sets the stroke width mapping.
    pub fn with_thickness(mut self, thickness: ThicknessStrategy) -> Self {
        self.thickness = thickness;
        self
    }
}

/// Writes the SVG document of a layout to a file.
///
/// # Arguments
/// * `file` - The file to write to
/// * `layout` - The computed layout
/// * `config` - Config the layout was computed with; provides the canvas size
/// * `style` - Colour and size mapping
///
/// # Errors
/// Returns an I/O error if writing fails.
///
/// # Example
/// ```no_run
/// use arborist::layout::{LayoutConfig, layout};
/// use arborist::statistics::parse_statistics_file;
/// use arborist::svg::{SvgStyle, write_svg_file};
/// use std::fs::File;
///
/// let tree = parse_statistics_file("tree_0.txt")?;
/// let config = LayoutConfig::default();
/// let result = layout(&tree, tree.root().samples(), &config);
/// write_svg_file(File::create("tree_0.svg")?, &result, &config, &SvgStyle::default())?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub fn write_svg_file(
    file: File,
    layout: &Layout,
    config: &LayoutConfig,
    style: &SvgStyle,
) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(to_svg(layout, config, style).as_bytes())?;
    writer.write_all(b"\n")?;
    writer.flush()?;
    Ok(())
}

/// Returns the SVG document of a layout.
///
/// The canvas has the size of `config`; branches, leaves and bunches are
/// each wrapped in a `<g>` group.
///
/// # Example
/// ```
/// use arborist::layout::{LayoutConfig, layout};
/// use arborist::statistics::parse_statistics;
/// use arborist::svg::{SvgStyle, to_svg};
///
/// let text = "H1\nH2\n0;10;0.5;0.1;a;b;c;d;e;f;g\n1;4;0.0;0;1;4\n1;6;0.0;1;1;6\n";
/// let tree = parse_statistics(text).unwrap();
/// let config = LayoutConfig::default();
/// let svg = to_svg(&layout(&tree, 10, &config), &config, &SvgStyle::default());
///
/// assert!(svg.starts_with("<svg"));
/// assert_eq!(svg.matches("<line").count(), 3);
/// assert_eq!(svg.matches("<circle").count(), 2);
/// ```
pub fn to_svg(layout: &Layout, config: &LayoutConfig, style: &SvgStyle) -> String {
    let mut svg = String::with_capacity(estimate_svg_len(layout));

    svg.push_str(&format!(
        "<svg xmlns=\"{}\" width=\"{}\" height=\"{}\" viewBox=\"0 0 {} {}\">\n",
        SVG_NAMESPACE, config.width, config.height, config.width, config.height
    ));

    svg.push_str("<g class=\"branches\" stroke-linecap=\"round\">\n");
    for branch in &layout.branches {
        svg.push_str(&branch_element(branch, layout, style));
    }
    svg.push_str("</g>\n");

    svg.push_str("<g class=\"leaves\">\n");
    for leaf in &layout.leaves {
        svg.push_str(&leaf_element(leaf, layout, style));
    }
    svg.push_str("</g>\n");

    svg.push_str("<g class=\"bunches\">\n");
    for bunch in &layout.bunches {
        svg.push_str(&bunch_element(bunch, layout));
    }
    svg.push_str("</g>\n");

    svg.push_str("</svg>");
    svg
}

// =#========================================================================#=
// ELEMENTS
// =#========================================================================#=
fn branch_element(branch: &Branch, layout: &Layout, style: &SvgStyle) -> String {
    let share = layout.share(branch.samples);
    let color = match style.color {
        ColorStrategy::Impurity => impurity_color(branch.impurity),
        ColorStrategy::Samples => samples_color(share),
        ColorStrategy::BestClass => WOOD_COLOR,
        ColorStrategy::Path => path_color(branch.selected),
    };
    let width = match style.thickness {
        ThicknessStrategy::Samples => scale(share, MIN_STROKE_WIDTH, MAX_STROKE_WIDTH),
        ThicknessStrategy::Uniform => UNIFORM_STROKE_WIDTH,
    };
    let g = &branch.geometry;
    format!(
        "<line x1=\"{:.2}\" y1=\"{:.2}\" x2=\"{:.2}\" y2=\"{:.2}\" stroke=\"{}\" stroke-width=\"{:.2}\"/>\n",
        g.x,
        g.y,
        g.x2,
        g.y2,
        hex(color),
        width
    )
}

fn leaf_element(leaf: &LeafRecord, layout: &Layout, style: &SvgStyle) -> String {
    let share = layout.share(leaf.samples);
    let color = match style.color {
        ColorStrategy::Impurity => impurity_color(leaf.impurity),
        ColorStrategy::Samples => samples_color(share),
        ColorStrategy::BestClass => CLASS_PALETTE[leaf.best_class % CLASS_PALETTE.len()],
        ColorStrategy::Path => path_color(leaf.selected),
    };
    format!(
        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" data-leaf-id=\"{}\"/>\n",
        leaf.x,
        leaf.y,
        scale(share, MIN_RADIUS, MAX_RADIUS),
        hex(color),
        leaf.leaf_id
    )
}

fn bunch_element(bunch: &Bunch, layout: &Layout) -> String {
    format!(
        "<circle cx=\"{:.2}\" cy=\"{:.2}\" r=\"{:.2}\" fill=\"{}\" fill-opacity=\"0.6\"/>\n",
        bunch.x,
        bunch.y,
        scale(layout.share(bunch.samples), MIN_RADIUS, MAX_RADIUS),
        hex(BUNCH_COLOR)
    )
}

// =#========================================================================#=
// COLOUR AND SIZE MAPPING
// =#========================================================================#=
fn impurity_color(impurity: f64) -> (u8, u8, u8) {
    blend(PURE_COLOR, IMPURE_COLOR, impurity)
}

fn samples_color(share: f64) -> (u8, u8, u8) {
    blend(FEW_SAMPLES_COLOR, MANY_SAMPLES_COLOR, share)
}

fn path_color(selected: bool) -> (u8, u8, u8) {
    if selected {
        SELECTED_COLOR
    } else {
        UNSELECTED_COLOR
    }
}

/// Linear interpolation between `min` and `max`, `t` clamped to `[0, 1]`.
fn scale(t: f64, min: f64, max: f64) -> f64 {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
    min + t * (max - min)
}

fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let channel = |a: u8, b: u8| scale(t, a as f64, b as f64).round() as u8;
    (
        channel(from.0, to.0),
        channel(from.1, to.1),
        channel(from.2, to.2),
    )
}

fn hex((r, g, b): (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Estimates the length of the SVG document to pre-allocate.
fn estimate_svg_len(layout: &Layout) -> usize {
    FRAME_CHARS
        + layout.branches.len() * LINE_CHARS
        + (layout.leaves.len() + layout.bunches.len()) * CIRCLE_CHARS
}
