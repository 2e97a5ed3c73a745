use crate::{MarkerConfig, VectorGeometry};

use ilattice::glam::Vec3;
use serde::Serialize;

/// A sphere marking a position.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Marker {
    pub position: [f32; 3],
    pub radius: f32,
}

/// A marked position with arrows pointing from it toward other positions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LocationGeometry {
    pub marker: Marker,
    pub vectors: Vec<VectorGeometry>,
}

impl LocationGeometry {
    /// Targets equal to `point` have no direction and are left out.
    pub fn new(point: Vec3, targets: &[Vec3], config: &MarkerConfig) -> Self {
        let vectors = targets
            .iter()
            .filter_map(|&target| {
                let vector = VectorGeometry::new(point, target, &config.arrows);
                if vector.is_none() {
                    tracing::warn!(%point, %target, "skipping vector to its own base");
                }
                vector
            })
            .collect();

        Self {
            marker: Marker {
                position: point.to_array(),
                radius: config.radius,
            },
            vectors,
        }
    }
}
