//! Wraps rendered documents as HTTP-style responses.
//!
//! The status is always `200`: a request that cannot be drawn still gets the fallback document.

use super::{HeadlessError, RenderedSvg, SvgRenderOptions};
use serde::{Deserialize, Serialize};
use vehicle_form_core::VehicleDescriptor;

pub const STATUS_OK: u16 = 200;
pub const DEFAULT_CACHE_MAX_AGE_SECS: u64 = 86_400;
pub const DEFAULT_FALLBACK_CACHE_CONTROL: &str = "no-store";
pub const SVG_CONTENT_TYPE: &str = "image/svg+xml; charset=utf-8";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponseConfig {
    /// `max-age` advertised for normal renders.
    pub cache_max_age_secs: u64,
    /// `cache-control` value for fallback documents; empty omits the header.
    pub fallback_cache_control: String,
    pub content_type: String,
}

impl Default for ResponseConfig {
    fn default() -> Self {
        Self {
            cache_max_age_secs: DEFAULT_CACHE_MAX_AGE_SECS,
            fallback_cache_control: DEFAULT_FALLBACK_CACHE_CONTROL.to_string(),
            content_type: SVG_CONTENT_TYPE.to_string(),
        }
    }
}

impl ResponseConfig {
    pub fn from_json_str(text: &str) -> Result<Self, HeadlessError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn cache_control(&self, fallback: bool) -> Option<String> {
        if fallback {
            let value = self.fallback_cache_control.trim();
            (!value.is_empty()).then(|| value.to_string())
        } else {
            Some(format!("public, max-age={}", self.cache_max_age_secs))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResponse {
    pub status: u16,
    /// Lower-case header names, in emission order.
    pub headers: Vec<(String, String)>,
    pub body: String,
    pub fallback: bool,
}

impl RenderResponse {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }
}

pub fn respond(rendered: RenderedSvg, config: &ResponseConfig) -> RenderResponse {
    let mut headers = vec![("content-type".to_string(), config.content_type.clone())];
    if let Some(cache) = config.cache_control(rendered.fallback) {
        headers.push(("cache-control".to_string(), cache));
    }
    tracing::debug!(
        fallback = rendered.fallback,
        bytes = rendered.svg.len(),
        "vehicle render response"
    );
    RenderResponse {
        status: STATUS_OK,
        headers,
        body: rendered.svg,
        fallback: rendered.fallback,
    }
}

/// Parses `make`, `model`, `year`, `bodyClass` and `vehicleType` from a query string and renders.
pub fn respond_to_query(query: &str, config: &ResponseConfig) -> RenderResponse {
    let descriptor = VehicleDescriptor::from_query(query);
    let rendered = vehicle_form_render::render_vehicle_svg(&descriptor, &SvgRenderOptions::default());
    respond(rendered, config)
}
