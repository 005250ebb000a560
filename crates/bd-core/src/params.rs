//! Design parameters and slider bounds

use serde::{Deserialize, Serialize};

use crate::constants::TORPEDO_BULGE;
use crate::material::Material;

/// Inclusive bounds for a slider-driven numeric parameter
#[derive(Debug, Clone, Copy)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    /// Slider step for the control surface
    pub step: f32,
}

impl ParamRange {
    /// Clamp a value into this range
    pub fn clamp(&self, value: f32) -> f32 {
        value.clamp(self.min, self.max)
    }
}

/// Barrel length bounds (mm)
pub const LENGTH_RANGE: ParamRange = ParamRange {
    min: 30.0,
    max: 60.0,
    step: 1.0,
};

/// Barrel diameter bounds (mm)
pub const DIAMETER_RANGE: ParamRange = ParamRange {
    min: 5.0,
    max: 10.0,
    step: 0.5,
};

/// Barrel weight bounds (g)
pub const WEIGHT_RANGE: ParamRange = ParamRange {
    min: 12.0,
    max: 30.0,
    step: 0.5,
};

/// Grip style of the barrel surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum GripType {
    #[default]
    Straight,
    Torpedo,
    Scallop,
}

impl GripType {
    /// Get display name
    pub fn display_name(&self) -> &'static str {
        match self {
            GripType::Straight => "Straight",
            GripType::Torpedo => "Torpedo",
            GripType::Scallop => "Scallop",
        }
    }

    /// All grip types for UI
    pub fn all() -> &'static [GripType] {
        &[GripType::Straight, GripType::Torpedo, GripType::Scallop]
    }

    /// Peak body radius relative to the nominal radius.
    ///
    /// Scallop shares the straight cylinder body; only its cut overlay
    /// differs.
    pub fn max_profile_factor(&self) -> f32 {
        match self {
            GripType::Torpedo => 1.0 + TORPEDO_BULGE,
            GripType::Straight | GripType::Scallop => 1.0,
        }
    }
}

/// The full parameter set both renderers derive their output from.
///
/// Numeric fields stay within the slider bounds above; the control surface
/// clamps before geometry ever sees a value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DesignParameters {
    /// Barrel length (mm)
    pub length_mm: f32,
    /// Barrel diameter (mm)
    pub diameter_mm: f32,
    /// Barrel weight (g) - display only, no geometric effect
    pub weight_g: f32,
    pub grip: GripType,
    pub material: Material,
}

impl Default for DesignParameters {
    fn default() -> Self {
        Self {
            length_mm: 45.0,
            diameter_mm: 7.0,
            weight_g: 18.0,
            grip: GripType::default(),
            material: Material::default(),
        }
    }
}

impl DesignParameters {
    /// Nominal body radius (mm)
    pub fn radius(&self) -> f32 {
        self.diameter_mm / 2.0
    }

    /// Return a copy with all numeric fields clamped into their slider
    /// bounds
    pub fn clamped(mut self) -> Self {
        self.length_mm = LENGTH_RANGE.clamp(self.length_mm);
        self.diameter_mm = DIAMETER_RANGE.clamp(self.diameter_mm);
        self.weight_g = WEIGHT_RANGE.clamp(self.weight_g);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_within_bounds() {
        let params = DesignParameters::default();
        assert_eq!(params, params.clamped());
    }

    #[test]
    fn test_clamped_pulls_values_into_range() {
        let params = DesignParameters {
            length_mm: 500.0,
            diameter_mm: 0.1,
            weight_g: -3.0,
            ..DesignParameters::default()
        }
        .clamped();
        assert_eq!(params.length_mm, LENGTH_RANGE.max);
        assert_eq!(params.diameter_mm, DIAMETER_RANGE.min);
        assert_eq!(params.weight_g, WEIGHT_RANGE.min);
    }

    #[test]
    fn test_grip_catalog() {
        assert_eq!(GripType::all().len(), 3);
        assert_eq!(GripType::Torpedo.max_profile_factor(), 1.3);
        assert_eq!(GripType::Straight.max_profile_factor(), 1.0);
        assert_eq!(GripType::Scallop.max_profile_factor(), 1.0);
    }
}
