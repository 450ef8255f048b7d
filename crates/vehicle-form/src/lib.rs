#![forbid(unsafe_code)]

//! `vehicle-form` draws a representative, deterministic silhouette for a decoded vehicle identity.
//!
//! The same make/model/year/body class/vehicle type always yields the same document, and a
//! document is always produced: anything that cannot be drawn is answered with a generic sedan.
//!
//! # Features
//!
//! - `render`: enable SVG rendering and the HTTP-style response shim (`vehicle_form::render`)
//! - `raster`: enable PNG/JPG/PDF output via pure-Rust SVG rasterization/conversion

pub use vehicle_form_core::*;

#[cfg(feature = "render")]
pub mod render {
    pub use vehicle_form_render::archetype::{ARCHETYPES, Archetype, Wheel, archetype_by_name};
    pub use vehicle_form_render::deform::deform_path;
    pub use vehicle_form_render::{
        RenderedSvg, SketchRequest, SvgRenderOptions, render_fallback, render_sketch_svg,
    };

    #[cfg(feature = "raster")]
    pub mod raster;
    pub mod response;

    pub use response::{RenderResponse, ResponseConfig, respond, respond_to_query};

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Resolve(#[from] vehicle_form_core::Error),
        #[error(transparent)]
        Render(#[from] vehicle_form_render::Error),
        #[error("invalid JSON: {0}")]
        Json(#[from] serde_json::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Synchronous render helper that surfaces failures instead of degrading.
    pub fn try_render_svg_sync(
        engine: &vehicle_form_core::Engine,
        descriptor: &vehicle_form_core::VehicleDescriptor,
        svg_options: &SvgRenderOptions,
    ) -> Result<RenderedSvg> {
        Ok(vehicle_form_render::try_render_with_engine(
            engine,
            descriptor,
            svg_options,
        )?)
    }

    /// Synchronous render helper (executor-free). Never fails; see [`render_fallback`].
    pub fn render_svg_sync(
        engine: &vehicle_form_core::Engine,
        descriptor: &vehicle_form_core::VehicleDescriptor,
        svg_options: &SvgRenderOptions,
    ) -> RenderedSvg {
        vehicle_form_render::render_with_engine(engine, descriptor, svg_options)
    }

    pub async fn render_svg(
        engine: &vehicle_form_core::Engine,
        descriptor: &vehicle_form_core::VehicleDescriptor,
        svg_options: &SvgRenderOptions,
    ) -> RenderedSvg {
        render_svg_sync(engine, descriptor, svg_options)
    }

    /// Bundles an [`Engine`](vehicle_form_core::Engine) with render and response options.
    ///
    /// All work is CPU-bound and performs no I/O, so the async methods simply run inline.
    #[derive(Debug, Clone, Default)]
    pub struct VehicleRenderer {
        pub engine: vehicle_form_core::Engine,
        pub svg: SvgRenderOptions,
        pub response: ResponseConfig,
    }

    impl VehicleRenderer {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_classifier(mut self, classifier: vehicle_form_core::Classifier) -> Self {
            self.engine = self.engine.with_classifier(classifier);
            self
        }

        pub fn with_response_config(mut self, response: ResponseConfig) -> Self {
            self.response = response;
            self
        }

        pub fn force_fallback(mut self, force: bool) -> Self {
            self.svg.force_fallback = force;
            self
        }

        pub fn resolve(
            &self,
            descriptor: &vehicle_form_core::VehicleDescriptor,
        ) -> Result<vehicle_form_core::ResolvedIdentity> {
            Ok(self.engine.resolve(descriptor)?)
        }

        pub fn try_render_svg_sync(
            &self,
            descriptor: &vehicle_form_core::VehicleDescriptor,
        ) -> Result<RenderedSvg> {
            try_render_svg_sync(&self.engine, descriptor, &self.svg)
        }

        pub fn render_svg_sync(&self, descriptor: &vehicle_form_core::VehicleDescriptor) -> RenderedSvg {
            render_svg_sync(&self.engine, descriptor, &self.svg)
        }

        pub async fn render_svg(
            &self,
            descriptor: &vehicle_form_core::VehicleDescriptor,
        ) -> RenderedSvg {
            self.render_svg_sync(descriptor)
        }

        /// Renders the descriptor encoded in a URL query string and wraps it as a response.
        pub fn respond_to_query_sync(&self, query: &str) -> RenderResponse {
            let descriptor = vehicle_form_core::VehicleDescriptor::from_query(query);
            respond(self.render_svg_sync(&descriptor), &self.response)
        }

        pub async fn respond_to_query(&self, query: &str) -> RenderResponse {
            self.respond_to_query_sync(query)
        }

        #[cfg(feature = "raster")]
        pub fn render_png_sync(
            &self,
            descriptor: &vehicle_form_core::VehicleDescriptor,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::svg_to_png(&self.render_svg_sync(descriptor).svg, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_jpeg_sync(
            &self,
            descriptor: &vehicle_form_core::VehicleDescriptor,
            raster: &raster::RasterOptions,
        ) -> raster::Result<Vec<u8>> {
            raster::svg_to_jpeg(&self.render_svg_sync(descriptor).svg, raster)
        }

        #[cfg(feature = "raster")]
        pub fn render_pdf_sync(
            &self,
            descriptor: &vehicle_form_core::VehicleDescriptor,
        ) -> raster::Result<Vec<u8>> {
            raster::svg_to_pdf(&self.render_svg_sync(descriptor).svg)
        }
    }
}
