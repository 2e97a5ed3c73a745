use crate::{color_of, CubeConfig, HexColor, LabelDescriptor};

use ilattice::glam::Vec3;
use serde::Serialize;

/// Pole names for each cube vertex, in the order of [`cube_vertices`].
pub const CUBE_VERTEX_LABELS: [&str; 8] = [
    "Medievalist",
    "Conservative",
    "Right Wing",
    "Anti-intrusion\nLibertarian",
    "Security &\nHealth & Safety\nStatist",
    "Leftist",
    "Progressive",
    "Liberal",
];

/// The 12 edges of the cube as pairs of indices into [`cube_vertices`]: three
/// edges leaving each of the alternating corners 0, 3, 5 and 6.
pub const CUBE_EDGES: [[usize; 2]; 12] = [
    [0, 1],
    [0, 2],
    [0, 4],
    [3, 2],
    [3, 1],
    [3, 7],
    [5, 4],
    [5, 7],
    [5, 1],
    [6, 7],
    [6, 4],
    [6, 2],
];

/// Returns the 8 corners of a cube in this order:
///
/// ```text
///     2--------6
///   / |      / |
/// 3--------7   |        +Y
/// |   |    |   |        |
/// |   0----|---4        |____+X
/// | /      | /         /
/// 1--------5         +Z
/// ```
///
/// Bit 2 of the index selects the max X, bit 1 the max Y and bit 0 the max Z.
pub fn cube_vertices(center: Vec3, size: f32) -> [Vec3; 8] {
    let min = center - Vec3::splat(size / 2.0);
    let max = center + Vec3::splat(size / 2.0);

    std::array::from_fn(|i| {
        Vec3::new(
            if i & 0b100 == 0 { min.x } else { max.x },
            if i & 0b010 == 0 { min.y } else { max.y },
            if i & 0b001 == 0 { min.z } else { max.z },
        )
    })
}

/// How one side of an edge bar is filled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FaceFill {
    /// An end cap, filled with the colour of the vertex it touches.
    Solid { color: HexColor },
    /// A side running along the edge, filled with a linear gradient between
    /// the edge's two colours.
    Gradient {
        /// `[x0, y0, x1, y1]` of the gradient line on the canvas.
        linear: [f32; 4],
        /// Canvas `[width, height]` the gradient is drawn on.
        canvas: [f32; 2],
    },
}

/// One edge of the cube, modelled as a thin box.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct EdgeBar {
    pub start: [f32; 3],
    pub end: [f32; 3],
    /// Box `[width, height, depth]`.
    pub dimensions: [f32; 3],
    pub center: [f32; 3],
    /// Colours of `start` and `end`.
    pub colors: [HexColor; 2],
    /// Fills for the `+X, -X, +Y, -Y, +Z, -Z` sides of the box.
    pub faces: [FaceFill; 6],
}

impl EdgeBar {
    pub fn new(start: Vec3, end: Vec3, thickness: f32) -> Self {
        let extent = (end - start).abs();
        let colors = [color_of(start), color_of(end)];

        Self {
            start: start.to_array(),
            end: end.to_array(),
            dimensions: (extent + Vec3::splat(thickness)).to_array(),
            center: ((start + end) / 2.0).to_array(),
            colors,
            faces: face_fills(start, end, extent, colors, thickness),
        }
    }
}

/// The gradient on each long side runs from the start colour to the end colour.
/// Which canvas axes carry the edge depends on the edge direction.
fn face_fills(
    start: Vec3,
    end: Vec3,
    extent: Vec3,
    colors: [HexColor; 2],
    thickness: f32,
) -> [FaceFill; 6] {
    let [x1, y1, z1] = start.to_array();
    let [x2, y2, z2] = end.to_array();

    // The cap facing +A gets the colour of whichever endpoint is further along A.
    let cap = |a: f32, b: f32| FaceFill::Solid {
        color: if a > b { colors[0] } else { colors[1] },
    };
    let gradient = |linear: [f32; 4]| FaceFill::Gradient {
        linear,
        canvas: [
            (linear[0] - linear[2]).abs() + thickness,
            (linear[1] - linear[3]).abs() + thickness,
        ],
    };

    if extent.x != 0.0 {
        [
            cap(x1, x2),
            cap(x2, x1),
            gradient([x1, y1, x2, y2]),
            gradient([x1, y1, x2, y2]),
            gradient([x1, y1, x2, y2]),
            gradient([x2, y2, x1, y1]),
        ]
    } else if extent.y != 0.0 {
        [
            gradient([x2, y2, x1, y1]),
            gradient([x2, y2, x1, y1]),
            cap(y1, y2),
            cap(y2, y1),
            gradient([x2, y2, x1, y1]),
            gradient([x2, y2, x1, y1]),
        ]
    } else {
        [
            gradient([z2, y2, z1, y1]),
            gradient([z1, y1, z2, y2]),
            gradient([x1, z1, x2, z2]),
            gradient([x2, z2, x1, z1]),
            cap(z1, z2),
            cap(z2, z1),
        ]
    }
}

/// A cube corner and its pole label.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VertexLabel {
    pub position: [f32; 3],
    pub label: LabelDescriptor,
}

/// Render-ready description of the labeled cube.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct CubeGeometry {
    pub center: [f32; 3],
    pub size: f32,
    pub vertices: [VertexLabel; 8],
    pub edges: [EdgeBar; 12],
}

impl CubeGeometry {
    pub fn new(config: &CubeConfig) -> Self {
        let center = Vec3::from(config.center);
        let corners = cube_vertices(center, config.size);

        // Labels are pushed twice as far vertically so they clear the top and
        // bottom faces.
        let distance = config.size * config.label_distance;
        let offset = Vec3::new(distance, 2.0 * distance, distance);

        let vertices = std::array::from_fn(|i| {
            let position = corners[i];
            let outward = |p: f32, c: f32| if p > c { 1.0 } else { -1.0 };
            let direction = Vec3::new(
                outward(position.x, center.x),
                outward(position.y, center.y),
                outward(position.z, center.z),
            );
            let anchor = position + direction * offset;

            VertexLabel {
                position: position.to_array(),
                label: LabelDescriptor::new(CUBE_VERTEX_LABELS[i], anchor).centered(),
            }
        });
        let edges = CUBE_EDGES.map(|[a, b]| EdgeBar::new(corners[a], corners[b], config.thickness));

        tracing::debug!(?config, "built cube geometry");

        Self {
            center: config.center,
            size: config.size,
            vertices,
            edges,
        }
    }
}
