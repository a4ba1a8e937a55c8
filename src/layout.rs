//! Turns a [`CubeConfig`] into per-instance transforms for two instance pools:
//! one box per grid cell and four corner cylinders per box.
//!
//! Inactive cells keep their slots and get a zero scale, so pool sizes depend
//! only on the grid lengths and instance ids stay stable across activity changes.

use crate::face::FACES;
use crate::palette::{Color, Palette};
use crate::style::StyleParameters;
use crate::{CubeConfig, Result, FACE_COUNT};
use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};
use std::f32::consts::FRAC_PI_2;
use std::ops::Range;
use tracing::debug;

/// Radius of the unit cylinder mesh the corner instances are scaled from
pub const CYLINDER_RADIUS: f32 = 0.05;

/// Corner order for the four cylinders of a cell, as signs along the two moving axes
pub const CORNER_SIGNS: [(f32, f32); 4] = [(1.0, 1.0), (1.0, -1.0), (-1.0, -1.0), (-1.0, 1.0)];

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InstanceTransform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub color: Color,
}

impl InstanceTransform {
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }

    /// Zero-scaled instances stand in for inactive cells
    pub fn is_hidden(&self) -> bool {
        self.scale == Vec3::ZERO
    }
}

/// Output of [`layout`]
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Layout {
    pub boxes: Vec<InstanceTransform>,
    /// `boxes.len() * 4` entries; cylinder `box_id * 4 + corner` belongs to box `box_id`
    pub cylinders: Vec<InstanceTransform>,
    pub box_opacity: f32,
    pub cylinder_opacity: f32,
    #[serde(skip)]
    face_offsets: [usize; FACE_COUNT + 1],
}

impl Layout {
    /// Box ids belonging to `face`
    pub fn face_range(&self, face: usize) -> Option<Range<usize>> {
        if face >= FACE_COUNT {
            return None;
        }
        Some(self.face_offsets[face]..self.face_offsets[face + 1])
    }

    /// The four cylinders of box `box_id`, in [`CORNER_SIGNS`] order
    pub fn corners(&self, box_id: usize) -> Option<&[InstanceTransform]> {
        let start = box_id.checked_mul(4)?;
        self.cylinders.get(start..start.checked_add(4)?)
    }
}

/// Compute every box and cylinder transform for `config`.
///
/// Pure: the same inputs always give bit-identical output. Fails only when
/// `style` holds a value that cannot be clamped into shape.
pub fn layout(config: &CubeConfig, palette: &Palette, style: &StyleParameters) -> Result<Layout> {
    style.validate()?;

    let side = style.main_cube_side;
    let half_side = side / 2.0;
    let thickness = style.effective_thickness();
    let absolute_thickness = half_side * thickness;
    let scale = style.clamped_scale();
    let cylinder_thickness = style.clamped_cylinder_thickness();

    let total = config.total_cells();
    let mut boxes = Vec::with_capacity(total);
    let mut cylinders = Vec::with_capacity(total * 4);
    let mut face_offsets = [0; FACE_COUNT + 1];

    for (face_idx, (face, grid)) in FACES.iter().zip(config.faces()).enumerate() {
        face_offsets[face_idx] = boxes.len();

        let color = palette.0[face_idx];
        let n = grid.side();
        let cell_side = side / n as f32;
        let relative_side = (1.0 / n as f32) * scale;

        let displacement = face.normal() * (half_side + absolute_thickness + style.explosion);
        let [m0, m1] = face.moving();
        let start = (m0 + m1) * (half_side - cell_side / 2.0);

        let rotation = Quat::from_axis_angle(face.rotation_axis(), FRAC_PI_2);
        // Cylinder mesh runs along local Y; a local quarter turn about X points it along the normal
        let cylinder_rotation = rotation * Quat::from_rotation_x(FRAC_PI_2);

        let box_scale = Vec3::new(relative_side * scale, relative_side * scale, thickness);
        let cylinder_scale = Vec3::new(
            cylinder_thickness,
            side + 2.0 * style.explosion,
            cylinder_thickness,
        );
        let corner_span = relative_side * scale * side;
        let inset = cylinder_thickness * CYLINDER_RADIUS;

        for (i, &active) in grid.cells().iter().enumerate() {
            let (r, c) = (i / n, i % n);
            let position = displacement + start
                - m0 * (r as f32 * cell_side)
                - m1 * (c as f32 * cell_side);

            boxes.push(InstanceTransform {
                position,
                rotation,
                scale: if active { box_scale } else { Vec3::ZERO },
                color,
            });

            let center = position - displacement;
            for (s0, s1) in CORNER_SIGNS {
                let offset = m0 * (s0 * corner_span / 2.0 - s0 * inset)
                    + m1 * (s1 * corner_span / 2.0 - s1 * inset);
                cylinders.push(InstanceTransform {
                    position: center + offset,
                    rotation: cylinder_rotation,
                    scale: if active { cylinder_scale } else { Vec3::ZERO },
                    color,
                });
            }
        }
    }
    face_offsets[FACE_COUNT] = boxes.len();

    debug!(
        boxes = boxes.len(),
        cylinders = cylinders.len(),
        visible = boxes.iter().filter(|b| !b.is_hidden()).count(),
        "laid out cube"
    );

    Ok(Layout {
        boxes,
        cylinders,
        box_opacity: style.sub_square_opacity,
        cylinder_opacity: style.cylinder_opacity,
        face_offsets,
    })
}
