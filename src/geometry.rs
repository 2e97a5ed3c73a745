//! Cube, arrow and label geometry, and the coordinate system they share.
//!
//! Everything in this module produces plain data for a renderer. Nothing here
//! holds renderer handles, so the same descriptions work with any 3D library.
//!
//! # Coordinate System
//!
//! Positions use a right-handed coordinate system with Y up.
//!
//! ```text
//!       +Y
//!       | -Z
//! -X____|/____+X
//!      /|
//!    +Z |
//!       -Y
//! ```
//!
//! The solver works in a cube with its minimum corner at the origin and edges
//! of 255, so a position doubles as an RGB colour (see [`color_of`]). The
//! displayed cube is usually drawn a little larger around the same centre to
//! leave room for the thickness of its edges.
//!
//! # Axes and Poles
//!
//! The four space diagonals of the cube are the [`PoliticalAxis`]es. Each joins
//! two opposite **poles**:
//!
//! ```text
//!     Right Wing -------- Libertarian
//!        / |                 / |
//! Progressive -------- Liberal |
//!       |  |                |  |
//!       | Medievalist ------|-- Conservative
//!       | /                 | /
//!   Statist ----------- Leftist
//!
//! Medievalist  <-> Liberal
//! Conservative <-> Progressive
//! Leftist      <-> Right Wing
//! Statist      <-> Libertarian
//! ```
//!
//! # Primitives
//!
//! - [`CubeGeometry`]: 12 [`EdgeBar`]s and 8 [`VertexLabel`]s.
//! - [`VectorGeometry`]: a shaft and a head ([`ArrowSegment`]s), each built
//!   along +Y and rotated onto the arrow's direction.
//! - [`LabelDescriptor`]: text whose final placement waits for font metrics.

mod axis;
mod color;
mod cube;
mod label;
mod vector;

pub use axis::*;
pub use color::*;
pub use cube::*;
pub use label::*;
pub use vector::*;
