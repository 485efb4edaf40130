use anyhow::{anyhow, Result};

pub fn string_is_valid_hex(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| c.is_ascii_hexdigit())
}

/// Round and clamp a channel value to the 0-255 display range.
pub fn clamp_channel(v: f64) -> u8 {
    v.round().clamp(0.0, 255.0) as u8
}

/// Parse an `RRGGBB` hex color, with or without a leading `#`.
pub fn parse_hex_color(s: &str) -> Result<(u8, u8, u8)> {
    let digits = s.strip_prefix('#').unwrap_or(s);
    if digits.len() != 6 || !string_is_valid_hex(digits) {
        return Err(anyhow!("Invalid hex color: {}", s));
    }

    let r = u8::from_str_radix(&digits[0..2], 16)?;
    let g = u8::from_str_radix(&digits[2..4], 16)?;
    let b = u8::from_str_radix(&digits[4..6], 16)?;
    Ok((r, g, b))
}

pub fn format_hex_color(rgb: (u8, u8, u8)) -> String {
    format!("#{:02x}{:02x}{:02x}", rgb.0, rgb.1, rgb.2)
}
