use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};
use std::sync::Arc;

use crate::formatters::{format_city_info, format_image, format_json, format_landmarks};
use crate::generator::CityInfoGenerator;
use crate::landmarks::landmarks_for;
use crate::models::CityRequest;

/// MCP service exposing the city info generator as tools
#[derive(Clone)]
pub struct CityInfoService {
    generator: Arc<CityInfoGenerator>,
    tool_router: ToolRouter<Self>,
}

impl CityInfoService {
    /// Creates a new service around a generator
    pub fn new(generator: CityInfoGenerator) -> Self {
        Self {
            generator: Arc::new(generator),
            tool_router: Self::tool_router(),
        }
    }

    /// Returns the trimmed city name or an invalid-params error
    fn city_param(request: &CityRequest) -> Result<&str, McpError> {
        let city = request.city.trim();
        if city.is_empty() {
            return Err(McpError::invalid_params("City name must not be empty.", None));
        }
        Ok(city)
    }

    fn json_content<T: serde::Serialize>(value: &T) -> Result<Content, McpError> {
        format_json(value)
            .map(Content::text)
            .map_err(|e| McpError::internal_error(format!("Failed to encode result: {}", e), None))
    }
}

#[tool_handler]
impl ServerHandler for CityInfoService {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-city-info".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A city information service powered by Gemini, Pexels and Unsplash. \
                Generates a travel description and a relevant photograph for a city."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl CityInfoService {
    /// Generates a description and a photo for a city
    #[tool(description = "Generate a short travel description and a relevant photograph for a city. Returns JSON with 'city', 'description' and 'image' ('source', 'image_url').")]
    async fn generate_city_info(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        let city = Self::city_param(&request)?;
        tracing::info!("Tool generate_city_info for: {}", city);

        let info = self.generator.generate(city).await;

        Ok(CallToolResult::success(vec![
            Self::json_content(&info)?,
            Content::text(format_city_info(&info)),
        ]))
    }

    /// Generates only the travel description
    #[tool(description = "Write a short, SEO-friendly travel description for a city.")]
    async fn describe_city(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        let city = Self::city_param(&request)?;
        tracing::info!("Tool describe_city for: {}", city);

        let description = self.generator.describe(city).await;

        Ok(CallToolResult::success(vec![Content::text(description)]))
    }

    /// Finds only the photograph
    #[tool(description = "Find a relevant landscape photograph of a city, searching Pexels and Unsplash, then well-known landmarks. Returns JSON with 'source' and 'image_url'.")]
    async fn find_city_image(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        let city = Self::city_param(&request)?;
        tracing::info!("Tool find_city_image for: {}", city);

        let image = self.generator.find_image(city).await;

        Ok(CallToolResult::success(vec![
            Self::json_content(&image)?,
            Content::text(format_image(&image)),
        ]))
    }

    /// Lists the landmarks searched for a city
    #[tool(description = "List the well-known landmarks used as an image search fallback for a city.")]
    async fn list_landmarks(
        &self,
        Parameters(request): Parameters<CityRequest>,
    ) -> Result<CallToolResult, McpError> {
        let city = Self::city_param(&request)?;

        Ok(CallToolResult::success(vec![Content::text(format_landmarks(
            city,
            landmarks_for(city),
        ))]))
    }
}
