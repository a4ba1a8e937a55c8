use crate::{CubeError, Result};
use serde::{Deserialize, Serialize};

/// Smallest relative thickness used for geometry. Thinner values collapse the
/// boxes into zero-depth planes.
pub const THICKNESS_FLOOR: f32 = 0.00001;

/// Scalar knobs for the cube geometry.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StyleParameters {
    /// Edge length of the cube. Must be positive.
    pub main_cube_side: f32,
    /// Box depth relative to half the cube side. May be negative.
    pub thickness: f32,
    /// Outward push of every face along its normal
    pub explosion: f32,
    /// Shrinks sub-squares within their cell, clamped to `0..=1`
    pub sub_squares_scale: f32,
    /// Handed to the renderer as is
    pub sub_square_opacity: f32,
    /// Corner cylinder radius factor, clamped to `0..=1`
    pub cylinder_thickness: f32,
    pub cylinder_opacity: f32,
}

impl Default for StyleParameters {
    fn default() -> Self {
        Self {
            main_cube_side: 10.0,
            thickness: 0.01,
            explosion: 0.1,
            sub_squares_scale: 0.9,
            sub_square_opacity: 0.9,
            cylinder_thickness: 0.1,
            cylinder_opacity: 0.8,
        }
    }
}

fn reject(name: &'static str, value: f32, reason: &'static str) -> CubeError {
    CubeError::InvalidStyle {
        name,
        value,
        reason,
    }
}

impl StyleParameters {
    /// Check the values that cannot be clamped without distorting the cube.
    pub fn validate(&self) -> Result<()> {
        let all = [
            ("mainCubeSide", self.main_cube_side),
            ("thickness", self.thickness),
            ("explosion", self.explosion),
            ("subSquaresScale", self.sub_squares_scale),
            ("subSquareOpacity", self.sub_square_opacity),
            ("cylinderThickness", self.cylinder_thickness),
            ("cylinderOpacity", self.cylinder_opacity),
        ];
        for (name, value) in all {
            if !value.is_finite() {
                return Err(reject(name, value, "must be finite"));
            }
        }
        if self.main_cube_side <= 0.0 {
            return Err(reject("mainCubeSide", self.main_cube_side, "must be positive"));
        }
        if self.explosion < 0.0 {
            return Err(reject("explosion", self.explosion, "must not be negative"));
        }
        Ok(())
    }

    pub fn clamped_scale(&self) -> f32 {
        self.sub_squares_scale.clamp(0.0, 1.0)
    }

    pub fn clamped_cylinder_thickness(&self) -> f32 {
        self.cylinder_thickness.clamp(0.0, 1.0)
    }

    /// Thickness with near-zero magnitudes replaced by [`THICKNESS_FLOOR`]
    pub fn effective_thickness(&self) -> f32 {
        if self.thickness.abs() < THICKNESS_FLOOR {
            THICKNESS_FLOOR
        } else {
            self.thickness
        }
    }
}
