use crate::composer::Edge;
use image::Rgb;

/// Rounded pixels-per-centimetre at 300 DPI, as printed in the summary.
/// The exact figure is 118.11.
pub const PIXELS_PER_CM: f64 = 118.0;
pub const CM_PER_INCH: f64 = 2.54;
pub const PRINT_DPI: f64 = 300.0;

pub fn pixels_to_cm(pixels: u32) -> f64 {
    f64::from(pixels) / PIXELS_PER_CM
}

/// Pixel count covering `cm` centimetres at `dpi`, rounded to the nearest pixel.
pub fn cm_to_pixels(cm: f64, dpi: f64) -> u32 {
    (cm / CM_PER_INCH * dpi).round().max(0.0) as u32
}

/// What a run produced, for the console.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MarginSummary {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
    pub edge: Edge,
    pub fill: Rgb<u8>,
}

impl MarginSummary {
    pub fn lines(&self) -> [String; 2] {
        [
            format!("Created new letterhead: {}x{} pixels", self.width, self.height),
            format!(
                "Added {}px ({:.1}cm at 300 DPI) {} margin at {}",
                self.margin,
                pixels_to_cm(self.margin),
                color_name(self.fill),
                self.edge
            ),
        ]
    }
}

fn color_name(color: Rgb<u8>) -> String {
    match color.0 {
        [255, 255, 255] => "white".to_string(),
        [0, 0, 0] => "black".to_string(),
        [r, g, b] => format!("#{:02x}{:02x}{:02x}", r, g, b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cm_to_pixels() {
        assert_eq!(cm_to_pixels(3.5, PRINT_DPI), 413);
        assert_eq!(cm_to_pixels(3.5, 96.0), 132);
        assert_eq!(cm_to_pixels(0.0, PRINT_DPI), 0);
        assert_eq!(cm_to_pixels(2.54, 72.0), 72);
    }

    #[test]
    fn test_pixels_to_cm_uses_rounded_factor() {
        assert_eq!(pixels_to_cm(118), 1.0);
        assert_eq!(format!("{:.1}", pixels_to_cm(413)), "3.5");
    }

    #[test]
    fn test_summary_lines() {
        let summary = MarginSummary {
            width: 2000,
            height: 3413,
            margin: 413,
            edge: Edge::Top,
            fill: Rgb([255, 255, 255]),
        };
        let [first, second] = summary.lines();
        assert_eq!(first, "Created new letterhead: 2000x3413 pixels");
        assert_eq!(second, "Added 413px (3.5cm at 300 DPI) white margin at top");
    }

    #[test]
    fn test_summary_names_other_colors() {
        let summary = MarginSummary {
            width: 10,
            height: 10,
            margin: 0,
            edge: Edge::Left,
            fill: Rgb([0x12, 0xab, 0x00]),
        };
        assert_eq!(
            summary.lines()[1],
            "Added 0px (0.0cm at 300 DPI) #12ab00 margin at left"
        );
    }
}
