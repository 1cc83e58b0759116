use image::RgbImage;

const MAX_SAMPLES: usize = 400;
const GRID: u32 = 20;

/// What a coarse pixel sample can honestly say about an image.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelStats {
    pub text_like: bool,
    pub high_contrast: bool,
    pub uniform_areas: bool,
    pub dominant_color: &'static str,
    pub average_brightness: f32,
}

/// Samples up to 400 pixels on a 20x20 grid and derives brightness and
/// color statistics from them.
pub fn sample_stats(img: &RgbImage) -> PixelStats {
    let (width, height) = img.dimensions();
    let step_x = (width / GRID).max(1);
    let step_y = (height / GRID).max(1);

    let mut brightnesses: Vec<f32> = Vec::with_capacity(MAX_SAMPLES);
    let mut sum_r = 0.0f64;
    let mut sum_g = 0.0f64;
    let mut sum_b = 0.0f64;

    'outer: for y in (0..height).step_by(step_y as usize) {
        for x in (0..width).step_by(step_x as usize) {
            let [r, g, b] = img.get_pixel(x, y).0;
            sum_r += r as f64;
            sum_g += g as f64;
            sum_b += b as f64;
            brightnesses.push(luminance(r, g, b));
            if brightnesses.len() >= MAX_SAMPLES {
                break 'outer;
            }
        }
    }

    if brightnesses.is_empty() {
        return PixelStats {
            text_like: false,
            high_contrast: false,
            uniform_areas: false,
            dominant_color: "mixed",
            average_brightness: 0.5,
        };
    }

    let count = brightnesses.len() as f32;
    let avg_brightness = brightnesses.iter().sum::<f32>() / count;

    // Frequent large brightness swings between neighboring samples read
    // as text or line art.
    let avg_change = brightnesses
        .windows(2)
        .map(|w| (w[0] - w[1]).abs())
        .sum::<f32>()
        / (count - 1.0).max(1.0);
    let text_like = avg_change > 0.3 && brightnesses.len() > 50;

    let max = brightnesses.iter().cloned().fold(0.0f32, f32::max);
    let min = brightnesses.iter().cloned().fold(1.0f32, f32::min);
    let high_contrast = (max - min) > 0.6;

    let variance = brightnesses
        .iter()
        .map(|b| (b - avg_brightness) * (b - avg_brightness))
        .sum::<f32>()
        / count;
    let uniform_areas = variance < 0.1;

    let avg_r = sum_r / count as f64;
    let avg_g = sum_g / count as f64;
    let avg_b = sum_b / count as f64;

    let dominant_color = if avg_brightness > 0.8 {
        "very light/white"
    } else if avg_brightness < 0.2 {
        "very dark/black"
    } else if avg_r > avg_g + 20.0 && avg_r > avg_b + 20.0 {
        "warm/reddish"
    } else if avg_g > avg_r + 20.0 && avg_g > avg_b + 20.0 {
        "green/natural"
    } else if avg_b > avg_r + 20.0 && avg_b > avg_g + 20.0 {
        "cool/bluish"
    } else {
        "balanced/neutral"
    };

    PixelStats {
        text_like,
        high_contrast,
        uniform_areas,
        dominant_color,
        average_brightness: avg_brightness,
    }
}

fn luminance(r: u8, g: u8, b: u8) -> f32 {
    (0.2126 * r as f32 + 0.7152 * g as f32 + 0.0722 * b as f32) / 255.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uniform_gray_image() {
        let img = RgbImage::from_pixel(100, 100, image::Rgb([128, 128, 128]));
        let stats = sample_stats(&img);

        assert!(stats.uniform_areas);
        assert!(!stats.text_like);
        assert!(!stats.high_contrast);
        assert_eq!(stats.dominant_color, "balanced/neutral");
        assert!((stats.average_brightness - 128.0 / 255.0).abs() < 0.01);
    }

    #[test]
    fn test_checkerboard_reads_as_text_like() {
        let img = RgbImage::from_fn(100, 100, |x, y| {
            if (x + y) % 2 == 0 {
                image::Rgb([255, 255, 255])
            } else {
                image::Rgb([0, 0, 0])
            }
        });
        let stats = sample_stats(&img);

        assert!(stats.text_like);
        assert!(stats.high_contrast);
    }

    #[test]
    fn test_dominant_color_channels() {
        let red = RgbImage::from_pixel(50, 50, image::Rgb([180, 60, 60]));
        assert_eq!(sample_stats(&red).dominant_color, "warm/reddish");

        let green = RgbImage::from_pixel(50, 50, image::Rgb([60, 180, 60]));
        assert_eq!(sample_stats(&green).dominant_color, "green/natural");

        let blue = RgbImage::from_pixel(50, 50, image::Rgb([60, 60, 180]));
        assert_eq!(sample_stats(&blue).dominant_color, "cool/bluish");

        let white = RgbImage::from_pixel(50, 50, image::Rgb([250, 250, 250]));
        assert_eq!(sample_stats(&white).dominant_color, "very light/white");

        let black = RgbImage::from_pixel(50, 50, image::Rgb([10, 10, 10]));
        assert_eq!(sample_stats(&black).dominant_color, "very dark/black");
    }

    #[test]
    fn test_sampling_is_deterministic() {
        let img = RgbImage::from_fn(333, 217, |x, y| {
            image::Rgb([(x % 256) as u8, (y % 256) as u8, ((x + y) % 256) as u8])
        });
        assert_eq!(sample_stats(&img), sample_stats(&img));
    }
}
