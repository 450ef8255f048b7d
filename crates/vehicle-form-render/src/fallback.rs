use crate::svg::{SketchRequest, render_sketch_svg};
use crate::RenderedSvg;
use vehicle_form_core::{ResolvedIdentity, VehicleDescriptor};

/// Last-resort card, used only if the fixed fallback rendition itself cannot be produced.
const BLANK_CARD_SVG: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<svg xmlns="http://www.w3.org/2000/svg" width="980" height="520" viewBox="0 0 980 520" role="img" aria-label="Vehicle"><rect x="0" y="0" width="980" height="520" rx="24" fill="rgba(255,255,255,.06)"/></svg>"#;

/// The generic plain sedan served when the identity cannot be rendered.
pub fn render_fallback() -> RenderedSvg {
    let identity = ResolvedIdentity::fallback();
    let request = SketchRequest {
        label: &identity.label,
        kind: identity.kind,
        seed: identity.seed,
        fallback: true,
    };
    let svg = match render_sketch_svg(&request) {
        Ok(svg) => svg,
        Err(err) => {
            tracing::error!(error = %err, "fallback rendition failed; serving blank card");
            BLANK_CARD_SVG.to_string()
        }
    };
    RenderedSvg {
        svg,
        identity,
        fallback: true,
    }
}

/// Logs why `descriptor` could not be rendered and returns the fallback document.
pub(crate) fn recover(descriptor: &VehicleDescriptor, err: &crate::Error) -> RenderedSvg {
    tracing::warn!(
        error = %err,
        make = %descriptor.make,
        model = %descriptor.model,
        year = %descriptor.year,
        body_class = %descriptor.body_class,
        vehicle_type = %descriptor.vehicle_type,
        "vehicle render failed; serving fallback document"
    );
    render_fallback()
}
