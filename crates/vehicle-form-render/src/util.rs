// Number formatting and markup escaping shared by the deformation engine and the SVG writer.

/// Escapes the five markup-reserved characters.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    escape_xml_into(&mut out, text);
    out
}

pub fn escape_xml_into(out: &mut String, text: &str) {
    let bytes = text.as_bytes();
    let mut start = 0usize;
    for (i, &b) in bytes.iter().enumerate() {
        let esc = match b {
            b'&' => "&amp;",
            b'<' => "&lt;",
            b'>' => "&gt;",
            b'"' => "&quot;",
            b'\'' => "&#039;",
            _ => continue,
        };
        if start < i {
            out.push_str(&text[start..i]);
        }
        out.push_str(esc);
        start = i + 1;
    }
    if start < text.len() {
        out.push_str(&text[start..]);
    }
}

/// Fixed-point formatting with `digits` fractional digits.
///
/// Rounds half away from zero on the exact decimal value of `v` (so `12.25` gives `12.3` while
/// `0.15`, stored as `0.1499...`, gives `0.1`). Negative values keep their sign even when they
/// round to zero; `-0.0` prints unsigned.
pub fn fmt_fixed(v: f64, digits: usize) -> String {
    let mut out = String::new();
    fmt_fixed_into(&mut out, v, digits);
    out
}

pub fn fmt_fixed_into(out: &mut String, v: f64, digits: usize) {
    if !v.is_finite() {
        out.push_str(if v.is_nan() {
            "NaN"
        } else if v > 0.0 {
            "Infinity"
        } else {
            "-Infinity"
        });
        return;
    }

    // 1100 fractional digits is enough to print any finite f64 exactly, so nothing below is
    // rounded by the formatter.
    let exact = format!("{:.1100}", v.abs());
    let (int_part, frac_part) = exact.split_once('.').unwrap_or((exact.as_str(), ""));

    let mut kept: Vec<u8> = int_part
        .bytes()
        .chain(frac_part.bytes().chain(std::iter::repeat(b'0')).take(digits))
        .collect();
    let round_up = frac_part.as_bytes().get(digits).is_some_and(|&d| d >= b'5');

    if round_up {
        let mut i = kept.len();
        loop {
            if i == 0 {
                kept.insert(0, b'1');
                break;
            }
            i -= 1;
            if kept[i] == b'9' {
                kept[i] = b'0';
            } else {
                kept[i] += 1;
                break;
            }
        }
    }

    if v < 0.0 {
        out.push('-');
    }
    let split = kept.len() - digits;
    for &b in &kept[..split] {
        out.push(b as char);
    }
    if digits > 0 {
        out.push('.');
        for &b in &kept[split..] {
            out.push(b as char);
        }
    }
}

/// Shortest round-trip number text, written the way ECMAScript's `Number#toString` does
/// (`270` rather than `270.0`, `1e-7` rather than `0.0000001`).
pub fn fmt_number(v: f64) -> String {
    let mut out = String::new();
    fmt_number_into(&mut out, v);
    out
}

pub fn fmt_number_into(out: &mut String, v: f64) {
    let mut buf = ryu_js::Buffer::new();
    out.push_str(buf.format(v));
}
