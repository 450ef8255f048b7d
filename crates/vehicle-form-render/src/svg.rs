//! SVG document assembly.
//!
//! The layout is fixed: a 980x520 card with a brand caption, the identity subtitle, the deformed
//! vehicle sketch group and a provenance caption. Whitespace in the output is stable and covered
//! by golden fixtures.

use crate::archetype::{Archetype, Wheel};
use crate::deform::deform_path;
use crate::util::{escape_xml, fmt_fixed, fmt_number};
use crate::Result;
use std::fmt::Write as _;
use vehicle_form_core::{BodyKind, Mulberry32, Personality, Seed};

pub const CANVAS_WIDTH: u32 = 980;
pub const CANVAS_HEIGHT: u32 = 520;
pub const CORNER_RADIUS: u32 = 24;

pub const BRAND_CAPTION: &str = "VINVOYANT · VEHICLE FORM";
pub const PROVENANCE_CAPTION: &str = "Representative model render · Derived from decoded make/model/year · Not a photo of your exact vehicle";

/// Peak-to-peak size of the hand-drawn offset applied to the sketch group.
const JITTER_SPAN: f64 = 1.5;
/// Turbulence seeds are reduced modulo this prime.
const FILTER_SEED_MODULUS: u64 = 997;

#[derive(Debug, Clone, Default)]
pub struct SvgRenderOptions {
    /// Always emit the plain fallback rendition (no filters, grain or jitter).
    pub force_fallback: bool,
}

/// Inputs of one document. `label` is raw text; it is escaped here, once.
#[derive(Debug, Clone, Copy)]
pub struct SketchRequest<'a> {
    pub label: &'a str,
    pub kind: BodyKind,
    pub seed: Seed,
    /// Plain rendition: skips the sketch and paper filters, grain overlay and jitter.
    pub fallback: bool,
}

/// Builds the SVG document for one identity.
///
/// Draw order from the seeded generator: six personality parameters, then (sketch mode only)
/// the x and y jitter.
pub fn render_sketch_svg(request: &SketchRequest<'_>) -> Result<String> {
    let sketch = !request.fallback;
    let seed = request.seed.get();

    let mut rng = Mulberry32::from_seed(request.seed);
    let personality = Personality::draw(&mut rng);

    let archetype = Archetype::for_kind(request.kind);
    let body_path = deform_path(archetype.body, &personality)?;
    let glass_path = deform_path(archetype.glass, &personality)?;

    let mut jitter = || {
        if sketch {
            (rng.next_f64() - 0.5) * JITTER_SPAN
        } else {
            0.0
        }
    };
    let jitter_x = jitter();
    let jitter_y = jitter();

    let ink = personality.ink;
    let label = escape_xml(request.label);
    let (w, h, rx) = (CANVAS_WIDTH, CANVAS_HEIGHT, CORNER_RADIUS);

    let mut out = String::with_capacity(4096);
    let _ = writeln!(out, r#"<?xml version="1.0" encoding="UTF-8"?>"#);
    let _ = writeln!(
        out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" role="img" aria-label="{label}">"#
    );
    let _ = writeln!(out, "  <defs>");
    let _ = writeln!(
        out,
        r#"    <linearGradient id="bg" x1="0" y1="0" x2="1" y2="1">"#
    );
    let _ = writeln!(
        out,
        r#"      <stop offset="0" stop-color="rgba(255,255,255,.06)"/>"#
    );
    let _ = writeln!(
        out,
        r#"      <stop offset="1" stop-color="rgba(255,255,255,.02)"/>"#
    );
    let _ = writeln!(out, "    </linearGradient>");
    out.push('\n');
    out.push_str("    ");
    if sketch {
        write_filters(&mut out, seed);
    }
    out.push('\n');
    let _ = writeln!(out, "  </defs>");
    out.push('\n');
    let _ = writeln!(
        out,
        r#"  <rect x="0" y="0" width="{w}" height="{h}" rx="{rx}" fill="url(#bg)"/>"#
    );
    out.push('\n');

    let _ = writeln!(out, "  <!-- Top label -->");
    let _ = writeln!(
        out,
        r#"  <text x="34" y="56" fill="rgba(255,255,255,.70)" font-family="Arial, system-ui" font-size="15" font-weight="800" letter-spacing=".10em">"#
    );
    let _ = writeln!(out, "    {BRAND_CAPTION}");
    let _ = writeln!(out, "  </text>");
    let _ = writeln!(
        out,
        r#"  <text x="34" y="82" fill="rgba(255,255,255,.55)" font-family="Arial, system-ui" font-size="13">"#
    );
    let _ = writeln!(out, "    {label}");
    let _ = writeln!(out, "  </text>");
    out.push('\n');

    let _ = writeln!(out, "  <!-- Vehicle sketch group -->");
    let filter_attr = if sketch { r#"filter="url(#sketch)""# } else { "" };
    let _ = writeln!(
        out,
        r#"  <g transform="translate({},{})" {filter_attr}>"#,
        fmt_number(jitter_x),
        fmt_number(jitter_y)
    );
    let _ = writeln!(out, "    <!-- Body silhouette base -->");
    let _ = writeln!(
        out,
        r#"    <path d="{body_path}" fill="rgba(255,255,255,.10)" stroke="rgba(255,255,255,{})" stroke-width="2.2" />"#,
        fmt_fixed(0.32 * ink, 3)
    );
    out.push('\n');
    let _ = writeln!(out, "    <!-- Glass / cabin -->");
    let _ = writeln!(
        out,
        r#"    <path d="{glass_path}" fill="rgba(255,255,255,.08)" stroke="rgba(170,210,255,{})" stroke-width="2" />"#,
        fmt_fixed(0.26 * ink, 3)
    );
    out.push('\n');
    let _ = writeln!(out, "    <!-- Wheels -->");
    let _ = writeln!(out, "    <g>");
    for wheel in archetype.wheels() {
        out.push_str("      ");
        write_wheel(&mut out, &wheel, ink);
        out.push('\n');
    }
    let _ = writeln!(out, "    </g>");
    out.push('\n');
    let _ = writeln!(out, "    <!-- Ground line -->");
    let _ = writeln!(
        out,
        r#"    <path d="M150 394 H 830" stroke="rgba(255,255,255,0.10)" stroke-width="2" stroke-linecap="round"/>"#
    );
    let _ = writeln!(out, "  </g>");
    out.push('\n');

    let _ = writeln!(out, "  <!-- Paper grain overlay -->");
    out.push_str("  ");
    if sketch {
        let _ = write!(
            out,
            r#"<rect x="0" y="0" width="{w}" height="{h}" rx="{rx}" filter="url(#paper)" opacity="0.25"/>"#
        );
    }
    out.push('\n');
    out.push('\n');

    let _ = writeln!(out, "  <!-- Provenance (laser-clean) -->");
    let _ = writeln!(out, "  <g>");
    let _ = writeln!(
        out,
        r#"    <text x="34" y="{}" fill="rgba(255,255,255,.46)" font-family="Arial, system-ui" font-size="12">"#,
        h - 26
    );
    let _ = writeln!(out, "      {}", escape_xml(PROVENANCE_CAPTION));
    let _ = writeln!(out, "    </text>");
    let _ = writeln!(out, "  </g>");
    out.push_str("</svg>");

    Ok(out)
}

fn write_filters(out: &mut String, seed: u32) {
    let sketch_seed = u64::from(seed) % FILTER_SEED_MODULUS;
    let paper_seed = (u64::from(seed) + 7) % FILTER_SEED_MODULUS;

    out.push('\n');
    let _ = writeln!(
        out,
        "    <!-- Sketch filter: subtle paper + ink wobble (premium, not cartoon) -->"
    );
    let _ = writeln!(
        out,
        r#"    <filter id="sketch" x="-10%" y="-10%" width="120%" height="120%">"#
    );
    let _ = writeln!(
        out,
        r#"      <feTurbulence type="fractalNoise" baseFrequency="0.9" numOctaves="1" seed="{sketch_seed}" result="noise"/>"#
    );
    let _ = writeln!(
        out,
        r#"      <feDisplacementMap in="SourceGraphic" in2="noise" scale="1.2" xChannelSelector="R" yChannelSelector="G" result="wobble"/>"#
    );
    let _ = writeln!(out, r#"      <feColorMatrix in="wobble" type="matrix""#);
    let _ = writeln!(out, r#"        values="1 0 0 0 0"#);
    let _ = writeln!(out, "                0 1 0 0 0");
    let _ = writeln!(out, "                0 0 1 0 0");
    let _ = writeln!(out, r#"                0 0 0 1 0" />"#);
    let _ = writeln!(out, "    </filter>");
    out.push('\n');
    let _ = writeln!(
        out,
        r#"    <filter id="paper" x="-10%" y="-10%" width="120%" height="120%">"#
    );
    let _ = writeln!(
        out,
        r#"      <feTurbulence type="fractalNoise" baseFrequency="0.8" numOctaves="2" seed="{paper_seed}" result="grain"/>"#
    );
    let _ = writeln!(out, r#"      <feColorMatrix in="grain" type="matrix""#);
    let _ = writeln!(out, r#"        values="0 0 0 0 0.9"#);
    let _ = writeln!(out, "                0 0 0 0 0.9");
    let _ = writeln!(out, "                0 0 0 0 0.9");
    let _ = writeln!(out, r#"                0 0 0 .20 0" />"#);
    out.push_str("    </filter>");
}

// Tire, rim and hub as concentric circles; stroke alpha follows `ink`.
fn write_wheel(out: &mut String, wheel: &Wheel, ink: f64) {
    let cx = fmt_number(wheel.cx);
    let cy = fmt_number(wheel.cy);

    out.push('\n');
    let _ = writeln!(
        out,
        r#"    <circle cx="{cx}" cy="{cy}" r="{}" fill="rgba(255,255,255,.12)" stroke="rgba(255,255,255,{})" stroke-width="2"/>"#,
        fmt_number(wheel.r),
        fmt_fixed(0.22 * ink, 3)
    );
    let _ = writeln!(
        out,
        r#"    <circle cx="{cx}" cy="{cy}" r="{}" fill="rgba(0,0,0,.30)" stroke="rgba(255,255,255,{})" stroke-width="2"/>"#,
        fmt_number(wheel.r * 0.62),
        fmt_fixed(0.12 * ink, 3)
    );
    let _ = writeln!(
        out,
        r#"    <circle cx="{cx}" cy="{cy}" r="{}" fill="rgba(255,255,255,.08)" stroke="rgba(170,210,255,{})" stroke-width="1.6"/>"#,
        fmt_number(wheel.r * 0.32),
        fmt_fixed(0.10 * ink, 3)
    );
    out.push_str("  ");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(label: &str, kind: BodyKind, seed: u32, fallback: bool) -> SketchRequest<'_> {
        SketchRequest {
            label,
            kind,
            seed: Seed::new(seed),
            fallback,
        }
    }

    #[test]
    fn sketch_mode_has_filters_grain_and_jitter() {
        let svg = render_sketch_svg(&request("2022 Toyota Camry", BodyKind::Sedan, 1337, false))
            .unwrap();
        assert!(svg.contains(r#"<filter id="sketch""#));
        assert!(svg.contains(r#"<filter id="paper""#));
        assert!(svg.contains(r#"filter="url(#sketch)""#));
        assert!(svg.contains(r#"filter="url(#paper)" opacity="0.25""#));
        assert!(!svg.contains(r#"translate(0,0)"#));
    }

    #[test]
    fn fallback_mode_is_plain() {
        let svg = render_sketch_svg(&request("Vehicle", BodyKind::Sedan, 42, true)).unwrap();
        assert!(!svg.contains("<filter"));
        assert!(!svg.contains("url(#sketch)"));
        assert!(!svg.contains("url(#paper)"));
        assert!(svg.contains(r#"<g transform="translate(0,0)" >"#));
    }

    #[test]
    fn label_is_escaped_once_in_both_places() {
        let svg = render_sketch_svg(&request("A&B <C>", BodyKind::Coupe, 7, false)).unwrap();
        assert!(svg.contains(r#"aria-label="A&amp;B &lt;C&gt;""#));
        assert!(svg.contains("    A&amp;B &lt;C&gt;\n"));
        assert!(!svg.contains("&amp;amp;"));
    }

    #[test]
    fn fixed_geometry_is_present() {
        let svg = render_sketch_svg(&request("x", BodyKind::Truck, 9, false)).unwrap();
        assert!(svg.contains(r#"viewBox="0 0 980 520""#));
        assert!(svg.contains(r#"rx="24""#));
        assert!(svg.contains(r#"<path d="M150 394 H 830""#));
        assert!(svg.contains(r#"<text x="34" y="494""#));
        assert!(svg.contains(BRAND_CAPTION));
        assert!(svg.contains(PROVENANCE_CAPTION));
        assert!(svg.contains(r#"<circle cx="250" cy="360" r="38""#));
        assert!(svg.contains(r#"<circle cx="640" cy="360" r="23.56""#));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn filter_seeds_do_not_overflow() {
        let svg = render_sketch_svg(&request("x", BodyKind::Sedan, u32::MAX, false)).unwrap();
        let paper = (u64::from(u32::MAX) + 7) % 997;
        assert!(svg.contains(&format!(r#"seed="{paper}" result="grain""#)));
    }

    #[test]
    fn same_request_same_bytes() {
        let a = render_sketch_svg(&request("2021 BMW 4 Series", BodyKind::Coupe, 123, false));
        let b = render_sketch_svg(&request("2021 BMW 4 Series", BodyKind::Coupe, 123, false));
        assert_eq!(a.unwrap(), b.unwrap());
    }
}
