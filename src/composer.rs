use crate::error::MarginError;
use image::{imageops, Rgb, RgbImage};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Side of the canvas that receives the margin strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    #[default]
    Top,
    Bottom,
    Left,
    Right,
}

impl Edge {
    pub fn as_str(self) -> &'static str {
        match self {
            Edge::Top => "top",
            Edge::Bottom => "bottom",
            Edge::Left => "left",
            Edge::Right => "right",
        }
    }

    /// Canvas size for a `width`x`height` source, `None` on u32 overflow.
    pub fn canvas_size(self, width: u32, height: u32, margin: u32) -> Option<(u32, u32)> {
        match self {
            Edge::Top | Edge::Bottom => Some((width, height.checked_add(margin)?)),
            Edge::Left | Edge::Right => Some((width.checked_add(margin)?, height)),
        }
    }

    /// Where the source's top-left corner lands on the canvas.
    pub fn origin(self, margin: u32) -> (u32, u32) {
        match self {
            Edge::Top => (0, margin),
            Edge::Left => (margin, 0),
            Edge::Bottom | Edge::Right => (0, 0),
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Builds a new canvas filled with `fill` and copies `source` onto it so that
/// a `margin`-pixel strip is left on `edge`.
///
/// Source pixels are copied as-is: nothing is scaled, cropped or blended.
pub fn compose(
    source: &RgbImage,
    margin: u32,
    fill: Rgb<u8>,
    edge: Edge,
) -> Result<RgbImage, MarginError> {
    let (width, height) = source.dimensions();
    let (canvas_width, canvas_height) = edge.canvas_size(width, height, margin).ok_or(
        MarginError::CanvasTooLarge {
            width,
            height,
            margin,
        },
    )?;

    log::debug!(
        "🖼 Composing {}x{} canvas ({}px margin at {})",
        canvas_width,
        canvas_height,
        margin,
        edge
    );

    let mut canvas = RgbImage::from_pixel(canvas_width, canvas_height, fill);
    let (x, y) = edge.origin(margin);
    imageops::replace(&mut canvas, source, i64::from(x), i64::from(y));

    Ok(canvas)
}
