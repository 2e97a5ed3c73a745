use crate::ArrowConfig;

use ilattice::glam::{Quat, Vec3};
use serde::Serialize;

/// A cylinder or cone, built pointing up the local +Y axis and then rotated
/// into place.
///
/// The renderer should create the primitive centred on its local origin,
/// translate its geometry by `pivot_offset`, rotate it by `rotation` and place
/// it at `position`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ArrowSegment {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub position: [f32; 3],
    pub pivot_offset: [f32; 3],
    /// `[x, y, z, w]` quaternion.
    pub rotation: [f32; 4],
}

impl ArrowSegment {
    /// World positions of the bottom and top of the segment's axis.
    pub fn end_points(&self) -> [Vec3; 2] {
        let rotation = Quat::from_array(self.rotation);
        let position = Vec3::from(self.position);
        let pivot = Vec3::from(self.pivot_offset);
        let half = Vec3::Y * self.height / 2.0;

        [
            position + rotation * (pivot - half),
            position + rotation * (pivot + half),
        ]
    }
}

/// An arrow from a base point toward a target: a thin shaft followed by a cone
/// whose tip touches the target.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct VectorGeometry {
    /// Unit direction from base to target.
    pub direction: [f32; 3],
    pub shaft: ArrowSegment,
    pub head: ArrowSegment,
}

impl VectorGeometry {
    /// Builds the arrow from `base` to `target`.
    ///
    /// `config.base_margin` world units are left empty at the base and the cone
    /// takes the last `config.arrow_length`. When the target is too close for
    /// both, the shaft shrinks to zero height.
    ///
    /// Returns `None` if `base == target`, since the arrow has no direction.
    pub fn new(base: Vec3, target: Vec3, config: &ArrowConfig) -> Option<Self> {
        let full = target - base;
        let length = full.length();
        if length == 0.0 || !length.is_finite() {
            return None;
        }
        let direction = full / length;

        let start = base + full * (config.base_margin / length);
        let rotation: [f32; 4] = Quat::from_rotation_arc(Vec3::Y, direction).into();

        let mut shaft_height = length - config.base_margin - config.arrow_length;
        if shaft_height < 0.0 {
            tracing::debug!(length, ?config, "arrow shorter than margin and head");
            shaft_height = 0.0;
        }
        let head_height = config.arrow_length;

        let shaft = ArrowSegment {
            radius_top: config.thickness / 2.0,
            radius_bottom: config.thickness / 2.0,
            height: shaft_height,
            position: start.to_array(),
            pivot_offset: [0.0, shaft_height / 2.0, 0.0],
            rotation,
        };
        let head = ArrowSegment {
            radius_top: 0.0,
            radius_bottom: config.thickness,
            height: head_height,
            position: target.to_array(),
            pivot_offset: [0.0, -head_height / 2.0, 0.0],
            rotation,
        };

        Some(Self {
            direction: direction.to_array(),
            shaft,
            head,
        })
    }
}
