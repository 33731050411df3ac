use log::debug;

use crate::models::RawColor;

/// Color used when a cell's fill cannot be read.
pub const DEFAULT_COLOR: u32 = 0;

fn clamp_channel(v: f64) -> Option<u32> {
    if !v.is_finite() {
        return None;
    }
    Some(v.round().clamp(0.0, 255.0) as u32)
}

/// Pack three channels into `0xRRGGBB`, clamping each to [0, 255].
pub fn decode_channels(r: f64, g: f64, b: f64) -> u32 {
    match (clamp_channel(r), clamp_channel(g), clamp_channel(b)) {
        (Some(r), Some(g), Some(b)) => (r << 16) | (g << 8) | b,
        _ => {
            debug!("Non-finite color channel ({}, {}, {})", r, g, b);
            DEFAULT_COLOR
        }
    }
}

pub fn decode_raw(raw: &RawColor) -> u32 {
    match raw {
        RawColor::Channels([r, g, b]) => decode_channels(*r, *g, *b),
        RawColor::Text(s) => decode_str(s),
        RawColor::Other(value) => decode_value(value),
    }
}

/// Channel arrays with numeric strings or gaps; anything unreadable is the default.
fn decode_value(value: &serde_json::Value) -> u32 {
    let channel = |v: &serde_json::Value| match v {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    let parsed = match value.as_array().map(Vec::as_slice) {
        Some([r, g, b, ..]) => match (channel(r), channel(g), channel(b)) {
            (Some(r), Some(g), Some(b)) => Some(decode_channels(r, g, b)),
            _ => None,
        },
        _ => None,
    };
    parsed.unwrap_or_else(|| {
        debug!("Unreadable color value {}, using default", value);
        DEFAULT_COLOR
    })
}

/// Accepts `rgb(r, g, b)`, `rgb(r g b)`, `rgba(...)`, `#rrggbb` and `rrggbb`.
pub fn decode_str(s: &str) -> u32 {
    let s = s.trim();
    let parsed = if let Some(inner) = functional_body(s) {
        parse_functional(inner)
    } else {
        parse_hex(s.trim_start_matches('#'))
    };
    parsed.unwrap_or_else(|| {
        debug!("Unrecognised color {:?}, using default", s);
        DEFAULT_COLOR
    })
}

fn functional_body(s: &str) -> Option<&str> {
    let lower = s.to_ascii_lowercase();
    let open = if lower.starts_with("rgba(") {
        5
    } else if lower.starts_with("rgb(") {
        4
    } else {
        return None;
    };
    let close = s.find(')')?;
    (close >= open).then(|| &s[open..close])
}

fn parse_functional(body: &str) -> Option<u32> {
    let separator = if body.contains(',') { ',' } else { ' ' };
    let parts: Vec<&str> = body
        .split(separator)
        .map(str::trim)
        .filter(|p| !p.is_empty() && *p != "/")
        .collect();
    if parts.len() < 3 {
        return None;
    }
    let r: f64 = parts[0].parse().ok()?;
    let g: f64 = parts[1].parse().ok()?;
    let b: f64 = parts[2].parse().ok()?;
    if !(r.is_finite() && g.is_finite() && b.is_finite()) {
        return None;
    }
    Some(decode_channels(r, g, b))
}

fn parse_hex(s: &str) -> Option<u32> {
    if s.len() != 6 || !s.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    u32::from_str_radix(s, 16).ok()
}

/// Six lowercase hex digits, no prefix.
pub fn to_hex(color: u32) -> String {
    format!("{:06x}", color & 0xFF_FFFF)
}

/// Serde adapter that writes colors as hex strings and reads any form
/// [`decode_str`] accepts.
pub mod hex {
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(color: &u32, s: S) -> Result<S::Ok, S::Error> {
        s.serialize_str(&super::to_hex(*color))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<u32, D::Error> {
        let raw = String::deserialize(d)?;
        Ok(super::decode_str(&raw))
    }
}
