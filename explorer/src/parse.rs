use realcurve::Point;

use crate::errors::PointParseError;

/// Read a point written as `x,y` (whitespace allowed) or `O` for infinity.
pub fn parse_point(input: &str) -> Result<Point, PointParseError> {
    let trimmed = input.trim();
    if trimmed.eq_ignore_ascii_case("o") || trimmed.eq_ignore_ascii_case("inf") {
        return Ok(Point::Infinity);
    }

    let trimmed = trimmed
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .unwrap_or(trimmed);
    let (x, y) = trimmed
        .split_once(',')
        .ok_or_else(|| PointParseError::Malformed(input.to_owned()))?;

    Ok(Point::new(parse_coordinate(x)?, parse_coordinate(y)?))
}

/// Read a single finite number. NaN and infinities are refused.
pub fn parse_coordinate(raw: &str) -> Result<f64, PointParseError> {
    let raw = raw.trim();
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(PointParseError::InvalidCoordinate(raw.to_owned())),
    }
}
