use std::time::Duration;

/// User agent string for HTTP requests
pub const USER_AGENT: &str = "mcp-rust-city-info/0.1.0";

/// Google Generative Language API base URL
pub const GEMINI_API_BASE: &str = "https://generativelanguage.googleapis.com";

/// Pexels API base URL
pub const PEXELS_API_BASE: &str = "https://api.pexels.com";

/// Unsplash API base URL
pub const UNSPLASH_API_BASE: &str = "https://api.unsplash.com";

/// Default Gemini model used for descriptions
pub const GEMINI_MODEL: &str = "gemini-2.0-flash";

pub const GEMINI_TIMEOUT: Duration = Duration::from_secs(12);
pub const PEXELS_TIMEOUT: Duration = Duration::from_secs(12);
pub const UNSPLASH_TIMEOUT: Duration = Duration::from_secs(10);

/// Results requested per photo search
pub const PHOTOS_PER_PAGE: &str = "10";

/// Image returned when no search strategy finds a relevant photo
pub const FALLBACK_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1503264116251-35a269479413?q=80";

/// Description used when the text provider fails
pub fn fallback_description(city: &str) -> String {
    format!("{} is a culturally rich destination with unique attractions.", city)
}

/// Prompt sent to the text provider
pub fn description_prompt(city: &str) -> String {
    format!(
        "Write a warm, appealing, SEO-friendly travel description for '{}'. \
         Highlight attractions, culture, vibes, and unique features. 2\u{2013}4 sentences.",
        city
    )
}
