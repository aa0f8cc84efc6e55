use crate::error::GridError;

pub const ZOOM_MIN: f32 = 0.5;
pub const ZOOM_MAX: f32 = 2.0;
pub const ZOOM_STEP: f32 = 0.25;
pub const ZOOM_DEFAULT: f32 = 1.0;

/// Zoom factor applied to the base tile size. Only moves in whole steps, so
/// the value is always an exact multiple of `ZOOM_STEP` inside the bounds.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zoom(f32);

impl Zoom {
    pub fn new(value: f32) -> Self {
        let steps = (value / ZOOM_STEP).round();
        Self((steps * ZOOM_STEP).clamp(ZOOM_MIN, ZOOM_MAX))
    }

    /// Parses a query-string style value like `1.5`. Non-finite input is an
    /// error; finite input is snapped to the nearest step.
    pub fn parse(raw: &str) -> Result<Self, GridError> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| GridError::InvalidNumber {
                value: trimmed.to_string(),
            })?;
        Ok(Self::new(value))
    }

    pub fn value(self) -> f32 {
        self.0
    }

    pub fn can_zoom_in(self) -> bool {
        self.0 < ZOOM_MAX
    }

    pub fn can_zoom_out(self) -> bool {
        self.0 > ZOOM_MIN
    }

    pub fn zoom_in(&mut self) -> bool {
        if !self.can_zoom_in() {
            return false;
        }
        self.0 = (self.0 + ZOOM_STEP).min(ZOOM_MAX);
        true
    }

    pub fn zoom_out(&mut self) -> bool {
        if !self.can_zoom_out() {
            return false;
        }
        self.0 = (self.0 - ZOOM_STEP).max(ZOOM_MIN);
        true
    }

    pub fn percent(self) -> u32 {
        (self.0 * 100.0).round() as u32
    }
}

impl Default for Zoom {
    fn default() -> Self {
        Self(ZOOM_DEFAULT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_snaps_and_clamps() {
        assert_eq!(Zoom::new(1.1).value(), 1.0);
        assert_eq!(Zoom::new(1.2).value(), 1.25);
        assert_eq!(Zoom::new(0.1).value(), ZOOM_MIN);
        assert_eq!(Zoom::new(9.0).value(), ZOOM_MAX);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert_eq!(Zoom::parse("1.5").map(Zoom::value), Ok(1.5));
        assert!(Zoom::parse("wide").is_err());
        assert!(Zoom::parse("NaN").is_err());
        assert!(Zoom::parse("inf").is_err());
    }

    #[test]
    fn percent_rounds() {
        assert_eq!(Zoom::default().percent(), 100);
        assert_eq!(Zoom::new(0.75).percent(), 75);
        assert_eq!(Zoom::new(2.0).percent(), 200);
    }
}
