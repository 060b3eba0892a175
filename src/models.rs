use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// ============================================================================
// Output Records
// ============================================================================

/// Generated description and photo for a city
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CityInfo {
    pub city: String,
    pub description: String,
    pub image: ImageResult,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageResult {
    pub source: ImageSource,
    pub image_url: String,
}

/// Which search strategy produced an image
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ImageSource {
    Pexels,
    Unsplash,
    PexelsLandmark,
    UnsplashLandmark,
    Fallback,
}

impl ImageSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSource::Pexels => "pexels",
            ImageSource::Unsplash => "unsplash",
            ImageSource::PexelsLandmark => "pexels-landmark",
            ImageSource::UnsplashLandmark => "unsplash-landmark",
            ImageSource::Fallback => "fallback",
        }
    }
}

// ============================================================================
// Gemini API Models
// ============================================================================

#[derive(Debug, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<GeminiContent>,
}

impl GenerateContentRequest {
    pub fn from_prompt(prompt: String) -> Self {
        Self {
            contents: vec![GeminiContent {
                parts: vec![GeminiPart { text: Some(prompt) }],
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiContent {
    #[serde(default)]
    pub parts: Vec<GeminiPart>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GeminiPart {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<GeminiCandidate>,
}

#[derive(Debug, Deserialize)]
pub struct GeminiCandidate {
    pub content: Option<GeminiContent>,
}

impl GenerateContentResponse {
    /// Concatenated text of the first candidate
    pub fn text(&self) -> String {
        self.candidates
            .first()
            .and_then(|candidate| candidate.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|part| part.text.as_deref())
                    .collect::<String>()
            })
            .unwrap_or_default()
    }
}

// ============================================================================
// Pexels API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct PexelsSearchResponse {
    #[serde(default)]
    pub photos: Vec<PexelsPhoto>,
}

#[derive(Debug, Deserialize)]
pub struct PexelsPhoto {
    #[serde(default)]
    pub alt: Option<String>,
    pub src: Option<PexelsSrc>,
}

#[derive(Debug, Deserialize)]
pub struct PexelsSrc {
    pub large: Option<String>,
}

// ============================================================================
// Unsplash API Models
// ============================================================================

#[derive(Debug, Deserialize)]
pub struct UnsplashSearchResponse {
    #[serde(default)]
    pub results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
pub struct UnsplashPhoto {
    #[serde(default)]
    pub alt_description: Option<String>,
    pub urls: Option<UnsplashUrls>,
}

#[derive(Debug, Deserialize)]
pub struct UnsplashUrls {
    pub regular: Option<String>,
}

// ============================================================================
// MCP Tool Request Models
// ============================================================================

#[derive(Debug, Deserialize, Serialize, JsonSchema)]
pub struct CityRequest {
    /// City name, e.g. "Ranchi"
    pub city: String,
}
