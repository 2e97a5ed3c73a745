use crate::{Error, Result};

use ilattice::glam::Vec3;

use std::ops::{Index, IndexMut};

/// One of the four space diagonals of the political cube.
///
/// Each axis joins a [`Pole::Near`] vertex (affinity `0.0`) to the antipodal
/// [`Pole::Far`] vertex (affinity `1.0`). See the
/// [`geometry` module documentation][crate::geometry] for the layout.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum PoliticalAxis {
    MedievalistLiberal = 0,
    ConservativeProgressive = 1,
    LeftistRightWing = 2,
    StatistLibertarian = 3,
}

impl PoliticalAxis {
    pub const ALL: [PoliticalAxis; 4] = [
        PoliticalAxis::MedievalistLiberal,
        PoliticalAxis::ConservativeProgressive,
        PoliticalAxis::LeftistRightWing,
        PoliticalAxis::StatistLibertarian,
    ];

    /// The index for this axis' affinity.
    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// The axes other than this one, in index order.
    #[inline]
    pub fn others(&self) -> [PoliticalAxis; 3] {
        let mut others = [*self; 3];
        let mut i = 0;
        for axis in Self::ALL {
            if axis != *self {
                others[i] = axis;
                i += 1;
            }
        }
        others
    }

    /// Index into [`CUBE_VERTEX_LABELS`](crate::CUBE_VERTEX_LABELS) of the
    /// vertex at `pole`.
    #[inline]
    pub const fn vertex_label_index(&self, pole: Pole) -> usize {
        match (*self, pole) {
            (PoliticalAxis::MedievalistLiberal, Pole::Near) => 0,
            (PoliticalAxis::MedievalistLiberal, Pole::Far) => 7,
            (PoliticalAxis::ConservativeProgressive, Pole::Near) => 1,
            (PoliticalAxis::ConservativeProgressive, Pole::Far) => 6,
            (PoliticalAxis::LeftistRightWing, Pole::Near) => 5,
            (PoliticalAxis::LeftistRightWing, Pole::Far) => 2,
            (PoliticalAxis::StatistLibertarian, Pole::Near) => 4,
            (PoliticalAxis::StatistLibertarian, Pole::Far) => 3,
        }
    }

    /// The label of the vertex at `pole`.
    #[inline]
    pub fn pole_name(&self, pole: Pole) -> &'static str {
        crate::CUBE_VERTEX_LABELS[self.vertex_label_index(pole)]
    }
}

impl TryFrom<usize> for PoliticalAxis {
    type Error = Error;

    fn try_from(index: usize) -> Result<Self> {
        Self::ALL
            .get(index)
            .copied()
            .ok_or(Error::UnknownAxis(index))
    }
}

/// Which end of a [`PoliticalAxis`] a value leans toward.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[repr(u8)]
pub enum Pole {
    Near = 0,
    Far = 1,
}

impl Pole {
    /// Rounds `affinity` half-up to pick a pole. An affinity of exactly `0.5`
    /// leans [`Pole::Far`], anything below it [`Pole::Near`].
    #[inline]
    pub fn from_affinity(affinity: f32) -> Self {
        // `(a + 0.5).floor()` would round the largest float below 0.5 up to 1.
        // Half away from zero agrees with half-up for every non-negative value.
        if affinity.round() >= 1.0 {
            Pole::Far
        } else {
            Pole::Near
        }
    }

    #[inline]
    pub fn index(&self) -> usize {
        *self as usize
    }
}

/// The vertices of each [`PoliticalAxis`] for a cube of edge `size` with its
/// minimum corner at the origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AxisLayout {
    pub size: f32,
}

impl AxisLayout {
    /// The layout positions are computed in. Channels map directly to RGB.
    pub const POLITICAL: AxisLayout = AxisLayout { size: 255.0 };

    pub const fn new(size: f32) -> Self {
        Self { size }
    }

    /// The [`Pole::Near`] vertex of `axis`.
    pub fn near_vertex(&self, axis: PoliticalAxis) -> Vec3 {
        let s = self.size;
        match axis {
            PoliticalAxis::MedievalistLiberal => Vec3::new(0.0, 0.0, 0.0),
            PoliticalAxis::ConservativeProgressive => Vec3::new(0.0, 0.0, s),
            PoliticalAxis::LeftistRightWing => Vec3::new(s, 0.0, s),
            PoliticalAxis::StatistLibertarian => Vec3::new(s, 0.0, 0.0),
        }
    }

    /// Both vertices of `axis`, indexed by [`Pole::index`].
    pub fn vertices(&self, axis: PoliticalAxis) -> [Vec3; 2] {
        let near = self.near_vertex(axis);
        let half = self.size / 2.0;
        let flip = |c: f32| if c < half { c + self.size } else { c - self.size };
        let far = Vec3::new(flip(near.x), flip(near.y), flip(near.z));

        [near, far]
    }

    #[inline]
    pub fn vertex(&self, axis: PoliticalAxis, pole: Pole) -> Vec3 {
        self.vertices(axis)[pole.index()]
    }

    /// Length of the space diagonal joining the two vertices of an axis.
    #[inline]
    pub fn axis_length(&self, axis: PoliticalAxis) -> f32 {
        let [near, far] = self.vertices(axis);
        near.distance(far)
    }
}

impl Default for AxisLayout {
    fn default() -> Self {
        Self::POLITICAL
    }
}

/// A person's affinity for each [`PoliticalAxis`], where `0.0` is entirely the
/// near pole and `1.0` entirely the far pole.
///
/// Values are not clamped; see [`AxisAffinities::validate`].
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AxisAffinities(pub [f32; 4]);

impl AxisAffinities {
    pub const fn new(affinities: [f32; 4]) -> Self {
        Self(affinities)
    }

    /// Checks that every affinity lies in `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        for axis in PoliticalAxis::ALL {
            let value = self[axis];
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::AffinityOutOfRange { axis, value });
            }
        }
        Ok(())
    }

    #[inline]
    pub fn to_array(&self) -> [f32; 4] {
        self.0
    }
}

impl From<[f32; 4]> for AxisAffinities {
    #[inline]
    fn from(affinities: [f32; 4]) -> Self {
        Self(affinities)
    }
}

impl Index<PoliticalAxis> for AxisAffinities {
    type Output = f32;

    #[inline]
    fn index(&self, axis: PoliticalAxis) -> &f32 {
        &self.0[axis.index()]
    }
}

impl IndexMut<PoliticalAxis> for AxisAffinities {
    #[inline]
    fn index_mut(&mut self, axis: PoliticalAxis) -> &mut f32 {
        &mut self.0[axis.index()]
    }
}
