use serde::Serialize;

use crate::models::{CityInfo, ImageResult};

/// Renders a serializable record as pretty JSON for a tool result
pub fn format_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(value)
}

/// Formats a city record into a human-readable summary
pub fn format_city_info(info: &CityInfo) -> String {
    format!(
        "{}\n\n{}\n\n{}",
        info.city,
        info.description,
        format_image(&info.image)
    )
}

/// Formats an image result into a human-readable line
pub fn format_image(image: &ImageResult) -> String {
    format!("Image ({}): {}", image.source.as_str(), image.image_url)
}

/// Formats a city's landmark list into a human-readable string
pub fn format_landmarks(city: &str, landmarks: &[&str]) -> String {
    if landmarks.is_empty() {
        return format!("No landmarks known for {}.", city);
    }

    let mut output = format!("Landmarks for {}:\n\n", city);
    for (i, landmark) in landmarks.iter().enumerate() {
        output.push_str(&format!("  {}. {}\n", i + 1, landmark));
    }
    output
}
