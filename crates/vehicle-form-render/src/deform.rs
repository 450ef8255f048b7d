//! Path deformation: per-identity proportions applied to archetype templates.
//!
//! The engine does not parse path commands. It walks the numeric tokens of the template in
//! order, treats even positions as x and odd positions as y, remaps each value through a few
//! banded rules and re-serializes it with one decimal. Everything between tokens (commands,
//! whitespace, newlines) is copied verbatim.
//!
//! Parity is purely positional. A command with a single operand (`H`, `V`) shifts the x/y
//! assignment of every later token; the shipped templates are tuned with that behavior baked in.

use crate::util::fmt_fixed_into;
use crate::{Error, Result};
use regex::{Matches, Regex};
use std::sync::OnceLock;
use vehicle_form_core::Personality;

/// Horizontal center the stance, nose and tail scaling pivot around.
pub const CENTER_X: f64 = 490.0;
/// Template x values below this are front overhang (scaled by `nose`).
pub const FRONT_X: f64 = 340.0;
/// Template x values above this are rear overhang (scaled by `tail`).
pub const REAR_X: f64 = 640.0;
/// Template y values above the roofline (smaller y) pivot here, scaled by `roof`.
pub const ROOF_Y: f64 = 260.0;
/// Inclusive beltline band, scaled by `belt` around [`BELT_PIVOT_Y`].
pub const BELT_BAND_Y: (f64, f64) = (260.0, 320.0);
pub const BELT_PIVOT_Y: f64 = 290.0;

fn token_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // ASCII digits only; `\d` would also accept other Unicode decimal digits.
    RE.get_or_init(|| Regex::new(r"-?[0-9]+(?:\.[0-9]+)?").expect("token regex must compile"))
}

/// Numeric tokens of a path template, in stream order.
pub fn coordinate_tokens(path: &str) -> Matches<'static, '_> {
    token_re().find_iter(path)
}

pub fn deform_x(x: f64, p: &Personality) -> f64 {
    let mut out = CENTER_X + (x - CENTER_X) * p.stance;
    if x < FRONT_X {
        out = CENTER_X + (out - CENTER_X) * p.nose;
    }
    if x > REAR_X {
        out = CENTER_X + (out - CENTER_X) * p.tail;
    }
    out
}

pub fn deform_y(y: f64, p: &Personality) -> f64 {
    let mut out = y;
    if y < ROOF_Y {
        out = ROOF_Y + (y - ROOF_Y) * p.roof;
    }
    if (BELT_BAND_Y.0..=BELT_BAND_Y.1).contains(&y) {
        out = BELT_PIVOT_Y + (y - BELT_PIVOT_Y) * p.belt;
    }
    out
}

/// Deforms one path template. Each call starts its own x/y parity at x.
pub fn deform_path(template: &str, personality: &Personality) -> Result<String> {
    let mut out = String::with_capacity(template.len() + template.len() / 4);
    let mut last = 0usize;

    for (index, m) in coordinate_tokens(template).enumerate() {
        out.push_str(&template[last..m.start()]);
        last = m.end();

        let token = m.as_str();
        let value: f64 = token.parse().map_err(|_| Error::MalformedToken {
            index,
            token: token.to_string(),
        })?;

        let deformed = if index % 2 == 0 {
            deform_x(value, personality)
        } else {
            deform_y(value, personality)
        };
        if !deformed.is_finite() {
            return Err(Error::NonFiniteToken {
                index,
                token: token.to_string(),
            });
        }
        fmt_fixed_into(&mut out, deformed, 1);
    }

    out.push_str(&template[last..]);
    Ok(out)
}
