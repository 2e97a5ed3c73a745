//! Geometry for the political-space cube.
//!
//! The political space is a cube whose 8 corners are ideological poles. Its 4
//! space diagonals are the [`PoliticalAxis`]es, and a person is placed inside
//! it from their fundamental axis and their affinity for each axis.
//!
//! This crate is the renderer-independent part:
//! - [`calculate_position`]: places a person in the cube (see the [`solver`]
//!   module for the construction)
//! - [`CubeGeometry`]: edge bars, vertex labels and colours for the cube
//! - [`VectorGeometry`] and [`LocationGeometry`]: a marker and arrows toward
//!   other positions
//! - [`color_of`]: the colour of a point in the cube
//! - [`SpaceParams`] and [`SpaceStore`]: the URL query and change notifications
//!   at the UI boundary
//!
//! All outputs are plain data (and serialize with `serde`), ready to hand to
//! whichever 3D library draws them.
//!
//! # Example Code
//!
//! ```
//! use political_space::glam::Vec3;
//! use political_space::{
//!     calculate_position, fundamental_sphere, AxisAffinities, PoliticalAxis, SceneDescription,
//!     SpaceConfig, SpaceParams,
//! };
//!
//! // 30% of the way from Conservative to Progressive, leaning Leftist and
//! // Libertarian.
//! let axis = PoliticalAxis::ConservativeProgressive;
//! let affinities = AxisAffinities::new([0.5, 0.3, 0.2, 0.9]);
//! let position = calculate_position(axis, &affinities);
//!
//! // The position is on the sphere around the Conservative vertex.
//! let sphere = fundamental_sphere(axis, &affinities);
//! assert_eq!(sphere.center, Vec3::new(0.0, 0.0, 255.0));
//! assert!((position.distance(sphere.center) - sphere.radius).abs() < 1e-2);
//!
//! // The same person, described by URL parameters, with an arrow to the centre.
//! let params = SpaceParams::parse("?axis=1&affinities=0.5,0.3,0.2,0.9&vectors=127.5,127.5,127.5").unwrap();
//! let scene = SceneDescription::build(&SpaceConfig::default(), &params).unwrap();
//!
//! let location = scene.location.unwrap();
//! assert_eq!(location.marker.position, position.to_array());
//! assert_eq!(location.vectors.len(), 1);
//! assert_eq!(scene.cube.edges.len(), 12);
//! ```

mod config;
mod error;
pub mod geometry;
mod location;
mod params;
mod scene;
pub mod solver;
mod store;

pub use config::*;
pub use error::*;
#[doc(inline)]
pub use geometry::*;
pub use location::*;
pub use params::*;
pub use scene::*;
#[doc(inline)]
pub use solver::*;
pub use store::*;

pub use ilattice;
pub use ilattice::glam;
