#![forbid(unsafe_code)]

//! Deterministic SVG silhouettes for vehicle identities.
//!
//! `render_vehicle_svg` never fails: any error on the way from descriptor to document is logged
//! and answered with the fixed fallback rendition.

pub mod archetype;
pub mod deform;
pub mod fallback;
pub mod svg;
pub mod util;

pub use archetype::{ARCHETYPES, Archetype, Wheel};
pub use fallback::render_fallback;
pub use svg::{SketchRequest, SvgRenderOptions, render_sketch_svg};

use vehicle_form_core::{Engine, ResolvedIdentity, VehicleDescriptor};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] vehicle_form_core::Error),
    #[error("path token #{index} `{token}` is not a number")]
    MalformedToken { index: usize, token: String },
    #[error("path token #{index} `{token}` deforms to a non-finite coordinate")]
    NonFiniteToken { index: usize, token: String },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A finished document plus the identity it was drawn for.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedSvg {
    pub svg: String,
    pub identity: ResolvedIdentity,
    /// `true` when the plain fallback rendition was served.
    pub fallback: bool,
}

/// Resolves and renders, surfacing the first failure.
pub fn try_render_with_engine(
    engine: &Engine,
    descriptor: &VehicleDescriptor,
    options: &SvgRenderOptions,
) -> Result<RenderedSvg> {
    if options.force_fallback {
        return Ok(render_fallback());
    }

    let identity = engine.resolve(descriptor)?;
    let svg = render_sketch_svg(&SketchRequest {
        label: &identity.label,
        kind: identity.kind,
        seed: identity.seed,
        fallback: false,
    })?;
    Ok(RenderedSvg {
        svg,
        identity,
        fallback: false,
    })
}

pub fn try_render_vehicle_svg(
    descriptor: &VehicleDescriptor,
    options: &SvgRenderOptions,
) -> Result<RenderedSvg> {
    try_render_with_engine(&Engine::new(), descriptor, options)
}

/// Renders a descriptor, substituting the fallback rendition on any failure.
pub fn render_with_engine(
    engine: &Engine,
    descriptor: &VehicleDescriptor,
    options: &SvgRenderOptions,
) -> RenderedSvg {
    match try_render_with_engine(engine, descriptor, options) {
        Ok(rendered) => rendered,
        Err(err) => fallback::recover(descriptor, &err),
    }
}

pub fn render_vehicle_svg(descriptor: &VehicleDescriptor, options: &SvgRenderOptions) -> RenderedSvg {
    render_with_engine(&Engine::new(), descriptor, options)
}
