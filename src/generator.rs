use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use crate::config::Config;
use crate::constants::{
    description_prompt, fallback_description, FALLBACK_IMAGE_URL, GEMINI_TIMEOUT,
    PEXELS_TIMEOUT, PHOTOS_PER_PAGE, UNSPLASH_TIMEOUT, USER_AGENT,
};
use crate::error::ProviderError;
use crate::landmarks::landmarks_for;
use crate::models::{
    CityInfo, GenerateContentRequest, GenerateContentResponse, ImageResult, ImageSource,
    PexelsSearchResponse, UnsplashSearchResponse,
};
use crate::relevance::is_relevant;

/// Stock photo provider searched for city images
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhotoProvider {
    Pexels,
    Unsplash,
}

impl PhotoProvider {
    fn name(&self) -> &'static str {
        match self {
            PhotoProvider::Pexels => "Pexels",
            PhotoProvider::Unsplash => "Unsplash",
        }
    }
}

/// One provider query in the image search chain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchStep {
    pub provider: PhotoProvider,
    pub query: String,
    pub landmark: Option<&'static str>,
    pub source: ImageSource,
}

/// Direct city queries, each tried against Pexels then Unsplash
pub fn direct_steps(city: &str) -> Vec<SearchStep> {
    [
        format!("{} skyline", city),
        format!("{} landmarks", city),
        format!("{} cityscape", city),
        city.to_string(),
    ]
    .into_iter()
    .flat_map(|query| {
        [
            SearchStep {
                provider: PhotoProvider::Pexels,
                query: query.clone(),
                landmark: None,
                source: ImageSource::Pexels,
            },
            SearchStep {
                provider: PhotoProvider::Unsplash,
                query,
                landmark: None,
                source: ImageSource::Unsplash,
            },
        ]
    })
    .collect()
}

/// Landmark queries in table order, each tried against Pexels then Unsplash
pub fn landmark_steps(city: &str) -> Vec<SearchStep> {
    landmarks_for(city)
        .iter()
        .flat_map(|&landmark| {
            [
                SearchStep {
                    provider: PhotoProvider::Pexels,
                    query: landmark.to_string(),
                    landmark: Some(landmark),
                    source: ImageSource::PexelsLandmark,
                },
                SearchStep {
                    provider: PhotoProvider::Unsplash,
                    query: landmark.to_string(),
                    landmark: Some(landmark),
                    source: ImageSource::UnsplashLandmark,
                },
            ]
        })
        .collect()
}

/// Produces a description and a relevant photo for a city.
///
/// Every call is issued sequentially. No operation on this type returns an
/// error: provider failures degrade to fallback values.
pub struct CityInfoGenerator {
    client: Client,
    config: Config,
}

impl CityInfoGenerator {
    /// Creates a generator from provider credentials and endpoints
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client, config })
    }

    /// Generates the full city record
    pub async fn generate(&self, city: &str) -> CityInfo {
        tracing::info!("Generating city info for: {}", city);

        let description = self.describe(city).await;
        let image = self.find_image(city).await;

        CityInfo {
            city: city.to_string(),
            description,
            image,
        }
    }

    /// Asks the text provider for a short travel description
    pub async fn describe(&self, city: &str) -> String {
        match self.request_description(city).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Description generation failed for {}: {}", city, e);
                fallback_description(city)
            }
        }
    }

    async fn request_description(&self, city: &str) -> Result<String, ProviderError> {
        const PROVIDER: &str = "Gemini";

        let url = format!(
            "{}/v1beta/models/{}:generateContent",
            self.config.gemini_api_base, self.config.gemini_model
        );
        let request = self
            .client
            .post(url)
            .header("x-goog-api-key", &self.config.gemini_api_key)
            .json(&GenerateContentRequest::from_prompt(description_prompt(city)));

        let response: GenerateContentResponse =
            Self::send_json(PROVIDER, request, GEMINI_TIMEOUT).await?;

        let text = response.text();
        let text = text.trim();
        if text.is_empty() {
            return Err(ProviderError::EmptyResponse { provider: PROVIDER });
        }
        Ok(text.to_string())
    }

    /// Sends a request and deserializes a successful JSON response
    async fn send_json<T: DeserializeOwned>(
        provider: &'static str,
        request: RequestBuilder,
        timeout: Duration,
    ) -> Result<T, ProviderError> {
        let response = request
            .timeout(timeout)
            .send()
            .await
            .map_err(ProviderError::http(provider))?;

        if !response.status().is_success() {
            return Err(ProviderError::Status {
                provider,
                status: response.status(),
            });
        }

        response.json::<T>().await.map_err(ProviderError::http(provider))
    }

    fn photo_search(&self, base: &str, path: &str, query: &str) -> RequestBuilder {
        self.client.get(format!("{}{}", base, path)).query(&[
            ("query", query),
            ("orientation", "landscape"),
            ("per_page", PHOTOS_PER_PAGE),
        ])
    }

    /// Searches Pexels and returns the large URL of the first relevant photo
    pub async fn search_pexels(
        &self,
        query: &str,
        city: &str,
        landmark: Option<&str>,
    ) -> Option<String> {
        self.search(PhotoProvider::Pexels, query, city, landmark).await
    }

    /// Searches Unsplash and returns the regular URL of the first relevant photo
    pub async fn search_unsplash(
        &self,
        query: &str,
        city: &str,
        landmark: Option<&str>,
    ) -> Option<String> {
        self.search(PhotoProvider::Unsplash, query, city, landmark).await
    }

    async fn search(
        &self,
        provider: PhotoProvider,
        query: &str,
        city: &str,
        landmark: Option<&str>,
    ) -> Option<String> {
        tracing::info!("{}: {}", provider.name(), query);

        let result = match provider {
            PhotoProvider::Pexels => self.try_search_pexels(query, city, landmark).await,
            PhotoProvider::Unsplash => self.try_search_unsplash(query, city, landmark).await,
        };

        match result {
            Ok(Some(url)) => Some(url),
            Ok(None) => {
                tracing::debug!("No relevant {} match for: {}", provider.name(), query);
                None
            }
            Err(e) => {
                tracing::warn!("{}", e);
                None
            }
        }
    }

    async fn try_search_pexels(
        &self,
        query: &str,
        city: &str,
        landmark: Option<&str>,
    ) -> Result<Option<String>, ProviderError> {
        const PROVIDER: &str = "Pexels";

        let request = self
            .photo_search(&self.config.pexels_api_base, "/v1/search", query)
            .header(reqwest::header::AUTHORIZATION, &self.config.pexels_api_key);
        let response: PexelsSearchResponse =
            Self::send_json(PROVIDER, request, PEXELS_TIMEOUT).await?;

        let Some(photo) = response
            .photos
            .into_iter()
            .find(|photo| is_relevant(photo.alt.as_deref(), city, landmark))
        else {
            return Ok(None);
        };

        tracing::info!(
            "Relevant Pexels match: {}",
            photo.alt.as_deref().unwrap_or_default()
        );
        photo
            .src
            .and_then(|src| src.large)
            .map(Some)
            .ok_or(ProviderError::MissingImageUrl { provider: PROVIDER })
    }

    async fn try_search_unsplash(
        &self,
        query: &str,
        city: &str,
        landmark: Option<&str>,
    ) -> Result<Option<String>, ProviderError> {
        const PROVIDER: &str = "Unsplash";

        let request = self
            .photo_search(&self.config.unsplash_api_base, "/search/photos", query)
            .header(
                reqwest::header::AUTHORIZATION,
                format!("Client-ID {}", self.config.unsplash_api_key),
            );
        let response: UnsplashSearchResponse =
            Self::send_json(PROVIDER, request, UNSPLASH_TIMEOUT).await?;

        let Some(photo) = response
            .results
            .into_iter()
            .find(|photo| is_relevant(photo.alt_description.as_deref(), city, landmark))
        else {
            return Ok(None);
        };

        tracing::info!(
            "Relevant Unsplash match: {}",
            photo.alt_description.as_deref().unwrap_or_default()
        );
        photo
            .urls
            .and_then(|urls| urls.regular)
            .map(Some)
            .ok_or(ProviderError::MissingImageUrl { provider: PROVIDER })
    }

    /// Runs search steps in order and stops at the first relevant photo
    async fn run_steps(&self, city: &str, steps: Vec<SearchStep>) -> Option<ImageResult> {
        for step in steps {
            if let Some(image_url) = self
                .search(step.provider, &step.query, city, step.landmark)
                .await
            {
                return Some(ImageResult {
                    source: step.source,
                    image_url,
                });
            }
        }
        None
    }

    /// Searches the city's known landmarks in table order
    pub async fn search_landmarks(&self, city: &str) -> Option<ImageResult> {
        tracing::info!("No direct match for {}, trying landmarks", city);
        self.run_steps(city, landmark_steps(city)).await
    }

    /// Finds a relevant photo, falling back to landmarks and then a fixed image
    pub async fn find_image(&self, city: &str) -> ImageResult {
        if let Some(image) = self.run_steps(city, direct_steps(city)).await {
            return image;
        }

        if let Some(image) = self.search_landmarks(city).await {
            return image;
        }

        tracing::info!("Fallback image used for: {}", city);
        ImageResult {
            source: ImageSource::Fallback,
            image_url: FALLBACK_IMAGE_URL.to_string(),
        }
    }
}
