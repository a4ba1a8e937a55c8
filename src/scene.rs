//! The options surface a UI panel drives: style knobs, per-face colors and
//! the regenerate action, with layouts recomputed only when something changed.

use crate::generate::{FaceConfigGenerator, IntersectionConfigGenerator};
use crate::layout::{layout, Layout};
use crate::palette::{Color, Palette, PaletteAssigner};
use crate::style::StyleParameters;
use crate::{CubeConfig, CubeError, Result};
use rand::rngs::SmallRng;
use rand::Rng;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SceneOption {
    MainCubeSide(f32),
    Thickness(f32),
    Explosion(f32),
    SubSquaresScale(f32),
    SubSquareOpacity(f32),
    CylinderOpacity(f32),
    CylinderThickness(f32),
    Color(usize, Color),
    Regenerate,
}

impl SceneOption {
    /// Parse an option by its panel name, e.g. `("explosion", "2.5")`,
    /// `("color4", "#1e63ff")` or `("regenerate", "")`.
    pub fn parse(name: &str, value: &str) -> Result<Self> {
        let number = || {
            value.trim().parse::<f32>().map_err(|_| CubeError::OptionValue {
                name: name.to_string(),
                expected: "a number",
                value: value.to_string(),
            })
        };

        Ok(match name {
            "mainCubeSide" => Self::MainCubeSide(number()?),
            "thickness" => Self::Thickness(number()?),
            "explosion" => Self::Explosion(number()?),
            "subSquaresScale" => Self::SubSquaresScale(number()?),
            "subSquareOpacity" => Self::SubSquareOpacity(number()?),
            "cylinderOpacity" => Self::CylinderOpacity(number()?),
            "cylinderThickness" => Self::CylinderThickness(number()?),
            "regenerate" => Self::Regenerate,
            _ => {
                let face = name
                    .strip_prefix("color")
                    .and_then(|idx| idx.parse::<usize>().ok())
                    .ok_or_else(|| CubeError::UnknownOption(name.to_string()))?;
                Self::Color(face, value.parse()?)
            }
        })
    }
}

/// A primary cube, its intersecting secondary, and everything needed to lay
/// them out.
#[derive(Debug)]
pub struct Scene<R = SmallRng> {
    rng: R,
    primary: CubeConfig,
    secondary: CubeConfig,
    palette: PaletteAssigner,
    style: StyleParameters,
    layouts: Option<(Layout, Layout)>,
}

impl<R: Rng> Scene<R> {
    pub fn new(rng: R) -> Self {
        Self::with_style(rng, StyleParameters::default())
            .expect("default style is valid")
    }

    pub fn with_style(mut rng: R, style: StyleParameters) -> Result<Self> {
        style.validate()?;
        let (primary, secondary) = draw_pair(&mut rng);
        Ok(Self {
            rng,
            primary,
            secondary,
            palette: PaletteAssigner::new(Palette::DEFAULT),
            style,
            layouts: None,
        })
    }

    pub fn primary(&self) -> &CubeConfig {
        &self.primary
    }

    pub fn secondary(&self) -> &CubeConfig {
        &self.secondary
    }

    pub fn palette(&self) -> &Palette {
        self.palette.palette()
    }

    pub fn style(&self) -> &StyleParameters {
        &self.style
    }

    /// Draw a new primary cube and a secondary derived from it. Colors and
    /// style are kept.
    pub fn regenerate(&mut self) {
        let (primary, secondary) = draw_pair(&mut self.rng);
        info!(
            primary = ?primary.active_counts(),
            secondary = ?secondary.active_counts(),
            "regenerated cubes"
        );
        self.primary = primary;
        self.secondary = secondary;
        self.layouts = None;
    }

    /// Apply one option. Style values are validated before they are stored,
    /// so a rejected option leaves the scene untouched.
    pub fn apply(&mut self, option: SceneOption) -> Result<()> {
        let mut style = self.style;
        match option {
            SceneOption::MainCubeSide(v) => style.main_cube_side = v,
            SceneOption::Thickness(v) => style.thickness = v,
            SceneOption::Explosion(v) => style.explosion = v,
            SceneOption::SubSquaresScale(v) => style.sub_squares_scale = v,
            SceneOption::SubSquareOpacity(v) => style.sub_square_opacity = v,
            SceneOption::CylinderOpacity(v) => style.cylinder_opacity = v,
            SceneOption::CylinderThickness(v) => style.cylinder_thickness = v,
            SceneOption::Color(face, color) => return self.palette.set_color(face, color),
            SceneOption::Regenerate => {
                self.regenerate();
                return Ok(());
            }
        }
        style.validate()?;
        if style != self.style {
            self.style = style;
            self.layouts = None;
        }
        Ok(())
    }

    /// Layouts of the primary and secondary cubes, recomputed if any input changed.
    pub fn layouts(&mut self) -> Result<(&Layout, &Layout)> {
        if self.palette.take_changed() {
            self.layouts = None;
        }
        let layouts = match self.layouts.take() {
            Some(layouts) => layouts,
            None => {
                let palette = self.palette.palette();
                (
                    layout(&self.primary, palette, &self.style)?,
                    layout(&self.secondary, palette, &self.style)?,
                )
            }
        };
        let (primary, secondary) = &*self.layouts.insert(layouts);
        Ok((primary, secondary))
    }
}

fn draw_pair<R: Rng + ?Sized>(rng: &mut R) -> (CubeConfig, CubeConfig) {
    let primary = FaceConfigGenerator::new().generate(rng);
    let secondary = IntersectionConfigGenerator::new().derive_secondary(&primary, rng);
    (primary, secondary)
}
