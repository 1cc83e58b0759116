use std::path::Path;

mod error;
mod stats;

pub use error::*;
pub use stats::*;

pub fn analyze_file(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    tracing::debug!("analyzing image: {}", path.display());
    let bytes = std::fs::read(path)?;
    analyze_bytes(&bytes)
}

pub fn analyze_bytes(bytes: &[u8]) -> Result<String, Error> {
    let img = image::load_from_memory(bytes)?;
    Ok(describe(&img))
}

/// Plain-language description of what the pixel statistics support, with
/// an explicit statement of what this analysis cannot do.
pub fn describe(img: &image::DynamicImage) -> String {
    let rgb = img.to_rgb8();
    let (width, height) = rgb.dimensions();
    let stats = sample_stats(&rgb);

    let mut out = String::new();
    out.push_str(&format!(
        "I can see a user-uploaded image ({width}×{height} pixels) "
    ));

    if stats.text_like {
        out.push_str("that appears to contain text or documents based on pixel patterns. ");
        out.push_str(
            "This could be educational material like textbooks, articles, or written content. ",
        );
    } else if stats.high_contrast {
        out.push_str("with high contrast areas suggesting it might contain diagrams, charts, or structured visual content. ");
        out.push_str("This could be educational diagrams, graphs, or technical illustrations. ");
    } else if stats.uniform_areas {
        out.push_str("with large uniform color areas suggesting it might be a simple diagram, presentation slide, or minimalist design. ");
    } else {
        out.push_str("with varied colors and patterns. ");
    }

    out.push_str(&format!(
        "The image has predominantly {} colors. ",
        stats.dominant_color
    ));

    if stats.average_brightness > 0.7 {
        out.push_str("It appears to be a bright image, possibly a document with light background. ");
    } else if stats.average_brightness < 0.3 {
        out.push_str("It appears to be a darker image. ");
    } else {
        out.push_str("It has moderate brightness levels. ");
    }

    out.push_str("Note: I can only analyze basic visual properties like colors, brightness, and patterns. ");
    out.push_str("I cannot identify specific objects, read text content, or recognize faces/people in images. ");
    out.push_str("This analysis is based solely on pixel-level characteristics.");

    out
}
