use crate::composer::compose;
use crate::config::MarginConfig;
use crate::error::MarginError;
use crate::loader::load_image;
use crate::units::MarginSummary;
use crate::writer::save_jpeg;
use image::Rgb;

/// Load, compose, save. The source is decoded before the destination is
/// touched, so a bad input never leaves an output file behind.
pub fn add_margin(config: &MarginConfig) -> Result<MarginSummary, MarginError> {
    let source = load_image(&config.input)?;
    let fill = Rgb(config.fill);
    let canvas = compose(&source, config.margin, fill, config.edge)?;
    save_jpeg(&canvas, &config.output, config.quality)?;

    log::info!("✅ Letterhead written to {}", config.output.display());

    Ok(MarginSummary {
        width: canvas.width(),
        height: canvas.height(),
        margin: config.margin,
        edge: config.edge,
        fill,
    })
}
