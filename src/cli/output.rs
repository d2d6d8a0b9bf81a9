//! Output formatting utilities

use crate::application::ImageSummary;

/// Format image summaries for display, one line per image
pub fn format_image_list(images: &[ImageSummary]) -> String {
    if images.is_empty() {
        return "No images found".to_string();
    }

    let mut output = String::new();
    for image in images {
        let format = image.format.map(|f| f.name()).unwrap_or("unknown");
        output.push_str(&format!(
            "{:>3}  {}  {}  {:<7}  {}\n",
            image.index,
            image.created_at.format("%Y-%m-%d %H:%M:%S"),
            image.id,
            format,
            format_size(image.size)
        ));
    }
    output
}

/// Human-readable byte count
pub fn format_size(bytes: usize) -> String {
    const UNITS: [&str; 3] = ["KiB", "MiB", "GiB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", value, UNITS[unit])
}
