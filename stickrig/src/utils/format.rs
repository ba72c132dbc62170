//! Formatting utilities

use stickrig_core::DVec2;

/// Format an angle in radians with its degree equivalent
pub fn format_angle(radians: f64) -> String {
    format!("{radians:.4} ({:.1}°)", radians.to_degrees())
}

/// Format a point with 4 decimal places
pub fn format_point((x, y): (f64, f64)) -> String {
    format!("({x:.4}, {y:.4})")
}

/// Parse an `x,y` pair such as `0.5,-1.25`
pub fn parse_point(value: &str) -> Result<DVec2, String> {
    let (x, y) = value
        .split_once(',')
        .ok_or_else(|| format!("expected 'x,y', got '{value}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| format!("invalid coordinate '{}': {e}", part.trim()))
    };
    Ok(DVec2::new(parse(x)?, parse(y)?))
}
