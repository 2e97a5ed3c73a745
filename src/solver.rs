//! Placement of a person inside the political cube.
//!
//! A person is described by a fundamental [`PoliticalAxis`] and an affinity for
//! every axis. Their position is found in five steps:
//!
//! 1. The fundamental affinity picks the **fundamental vertex**: whichever pole
//!    of the fundamental axis it rounds to.
//! 2. The **fundamental sphere** is centred on that vertex, with a radius of
//!    `axis length * min(a, 1 - a)`. A decisive person (affinity near 0 or 1)
//!    gets a tiny sphere and sits close to their pole. A wavering one
//!    (affinity near 0.5) can be pulled far from it.
//! 3. For each of the three other axes, the person's affinity marks a point
//!    along that axis. A ray from the fundamental vertex through that point
//!    meets the sphere at an **affinity point**.
//! 4. The centroid of the three affinity points is the **center of mass**.
//! 5. A ray from the fundamental vertex through the center of mass meets the
//!    sphere at the final position.
//!
//! ```text
//!                  affinity points
//!                   x    x
//!              . '    o    ' .        o  center of mass
//!           .'        |        '.     *  position
//!          /          *          \
//!         |     fundamental       |
//!          \       vertex        /
//!           '.                .'
//!              ' . ______ . '
//! ```
//!
//! So the position always lies on the fundamental sphere, and it collapses
//! onto the fundamental vertex for affinities of exactly `0.0` or `1.0`.

use crate::{AxisAffinities, AxisLayout, PoliticalAxis, Pole};

use ilattice::glam::Vec3;

use std::num::NonZeroU32;

/// A ray with a unit (or zero) direction.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Ray {
    origin: Vec3,
    direction: Vec3,
}

impl Ray {
    /// The ray from `origin` toward `through`. If the two coincide the ray has a
    /// zero direction and every point along it is `origin`.
    #[inline]
    fn toward(origin: Vec3, through: Vec3) -> Self {
        Self {
            origin,
            direction: (through - origin).normalize_or_zero(),
        }
    }

    #[inline]
    fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// The nearest point at or ahead of the origin where the ray meets the
    /// sphere's surface.
    fn intersect_sphere(&self, sphere: &FundamentalSphere) -> Option<Vec3> {
        let to_center = sphere.center - self.origin;
        let tca = to_center.dot(self.direction);
        let d2 = to_center.dot(to_center) - tca * tca;
        let radius2 = sphere.radius * sphere.radius;
        if d2 > radius2 {
            return None;
        }

        let thc = (radius2 - d2).sqrt();
        let t0 = tca - thc;
        let t1 = tca + thc;
        if t1 < 0.0 {
            None
        } else if t0 < 0.0 {
            Some(self.at(t1))
        } else {
            Some(self.at(t0))
        }
    }
}

/// The sphere every position with a given fundamental axis and affinity lies
/// on.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FundamentalSphere {
    /// The fundamental vertex.
    pub center: Vec3,
    pub radius: f32,
    pub pole: Pole,
}

impl FundamentalSphere {
    /// Affinities outside `[0, 1]` are not clamped. They give a sphere whose
    /// radius is the magnitude of the same formula.
    pub fn new(layout: &AxisLayout, axis: PoliticalAxis, affinity: f32) -> Self {
        let pole = Pole::from_affinity(affinity);
        let radius = (layout.axis_length(axis) * affinity.min(1.0 - affinity)).abs();

        Self {
            center: layout.vertex(axis, pole),
            radius,
            pole,
        }
    }

    /// Where the ray from the center through `point` leaves the sphere. Returns
    /// the center if `point` is the center.
    #[inline]
    pub fn project(&self, point: Vec3) -> Vec3 {
        Ray::toward(self.center, point)
            .intersect_sphere(self)
            .unwrap_or(self.center)
    }
}

/// The fundamental sphere for `axis` in the [`AxisLayout::POLITICAL`] layout.
pub fn fundamental_sphere(axis: PoliticalAxis, affinities: &AxisAffinities) -> FundamentalSphere {
    FundamentalSphere::new(&AxisLayout::POLITICAL, axis, affinities[axis])
}

/// Computes a person's position in the [`AxisLayout::POLITICAL`] cube.
///
/// # Example
///
/// ```
/// # use political_space::*;
/// # use political_space::glam::Vec3;
/// // Entirely Liberal: the other affinities cannot move them.
/// let position = calculate_position(
///     PoliticalAxis::MedievalistLiberal,
///     &AxisAffinities::new([1.0, 0.5, 0.5, 0.5]),
/// );
/// assert_eq!(position, Vec3::splat(255.0));
/// ```
#[inline]
pub fn calculate_position(axis: PoliticalAxis, affinities: &AxisAffinities) -> Vec3 {
    calculate_position_in(&AxisLayout::POLITICAL, axis, affinities)
}

/// Same as [`calculate_position`] for a cube of any size.
pub fn calculate_position_in(
    layout: &AxisLayout,
    axis: PoliticalAxis,
    affinities: &AxisAffinities,
) -> Vec3 {
    let sphere = FundamentalSphere::new(layout, axis, affinities[axis]);

    let affinity_points = axis.others().map(|other| {
        let [near, far] = layout.vertices(other);
        sphere.project(near.lerp(far, affinities[other]))
    });
    let position = position_from_affinity_points(&sphere, &affinity_points);

    tracing::trace!(?axis, ?affinities, ?sphere, %position, "calculated position");

    position
}

fn position_from_affinity_points(sphere: &FundamentalSphere, points: &[Vec3]) -> Vec3 {
    let center_of_mass = points.iter().fold(Vec3::ZERO, |sum, p| sum + *p) / points.len() as f32;
    sphere.project(center_of_mass)
}

/// A position produced by [`sample_positions`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PositionSample {
    pub axis: PoliticalAxis,
    pub affinities: AxisAffinities,
    pub position: Vec3,
}

/// Every position reachable with affinities on a grid of `step_percent`, for
/// every fundamental axis.
///
/// Each affinity takes the values `0%, step%, 2*step%, ...` up to `100%`, so a
/// step of 20 yields `4 * 6^4` samples.
pub fn sample_positions(step_percent: NonZeroU32) -> impl Iterator<Item = PositionSample> {
    let steps: Vec<f32> = (0..=100)
        .step_by(step_percent.get() as usize)
        .map(|p| p as f32 / 100.0)
        .collect();
    let n = steps.len();

    PoliticalAxis::ALL.into_iter().flat_map(move |axis| {
        let steps = steps.clone();
        (0..n.pow(4)).map(move |i| {
            let affinities = AxisAffinities::new([
                steps[i / (n * n * n)],
                steps[(i / (n * n)) % n],
                steps[(i / n) % n],
                steps[i % n],
            ]);
            PositionSample {
                axis,
                affinities,
                position: calculate_position(axis, &affinities),
            }
        })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    fn step(percent: u32) -> NonZeroU32 {
        NonZeroU32::new(percent).unwrap()
    }

    fn axis_strategy() -> impl Strategy<Value = PoliticalAxis> {
        (0usize..4).prop_map(|i| PoliticalAxis::ALL[i])
    }

    #[test]
    fn pure_pole_collapses_to_vertex() {
        let affinities = AxisAffinities::new([1.0, 0.5, 0.5, 0.5]);
        let position = calculate_position(PoliticalAxis::MedievalistLiberal, &affinities);
        assert_eq!(position, Vec3::splat(255.0));

        let affinities = AxisAffinities::new([0.3, 0.1, 0.0, 0.9]);
        let position = calculate_position(PoliticalAxis::LeftistRightWing, &affinities);
        assert_eq!(position, Vec3::new(255.0, 0.0, 255.0));
    }

    #[test]
    fn full_affinity_lands_on_far_vertex() {
        let affinities = AxisAffinities::new([1.0, 0.5, 0.5, 0.5]);
        for axis in PoliticalAxis::ALL {
            let mut affinities = affinities;
            affinities[axis] = 1.0;
            assert_eq!(
                calculate_position(axis, &affinities),
                AxisLayout::POLITICAL.vertex(axis, Pole::Far)
            );
        }
        assert_eq!(
            calculate_position(PoliticalAxis::MedievalistLiberal, &affinities),
            Vec3::new(255.0, 255.0, 255.0)
        );
    }

    #[test]
    fn affinity_just_below_half_stays_on_near_sphere() {
        let axis = PoliticalAxis::MedievalistLiberal;
        let affinities = AxisAffinities::new([0.5 - f32::EPSILON / 4.0, 0.2, 0.4, 0.9]);

        let sphere = fundamental_sphere(axis, &affinities);
        assert_eq!(sphere.pole, Pole::Near);
        assert_eq!(sphere.center, Vec3::ZERO);

        let position = calculate_position(axis, &affinities);
        assert_relative_eq!(position.length(), 255.0 * 3f32.sqrt() / 2.0, epsilon = 1e-2);
    }

    #[test]
    fn sphere_is_largest_at_half() {
        let layout = AxisLayout::POLITICAL;
        let axis = PoliticalAxis::StatistLibertarian;
        let diagonal = 255.0 * 3f32.sqrt();

        let sphere = FundamentalSphere::new(&layout, axis, 0.5);
        assert_eq!(sphere.pole, Pole::Far);
        assert_eq!(sphere.center, Vec3::new(0.0, 255.0, 255.0));
        assert_relative_eq!(sphere.radius, diagonal / 2.0, epsilon = 1e-3);

        let sphere = FundamentalSphere::new(&layout, axis, 0.2);
        assert_eq!(sphere.pole, Pole::Near);
        assert_relative_eq!(sphere.radius, diagonal * 0.2, epsilon = 1e-3);
    }

    #[test]
    fn out_of_range_affinity_uses_radius_magnitude() {
        let sphere = FundamentalSphere::new(&AxisLayout::POLITICAL, PoliticalAxis::MedievalistLiberal, -0.5);
        assert_eq!(sphere.pole, Pole::Near);
        assert_relative_eq!(sphere.radius, 255.0 * 3f32.sqrt() * 0.5, epsilon = 1e-3);
    }

    #[test]
    fn projecting_the_center_returns_the_center() {
        let sphere = FundamentalSphere {
            center: Vec3::new(1.0, 2.0, 3.0),
            radius: 10.0,
            pole: Pole::Near,
        };
        assert_eq!(sphere.project(sphere.center), sphere.center);
    }

    #[test]
    fn ray_from_outside_hits_near_side() {
        let sphere = FundamentalSphere {
            center: Vec3::ZERO,
            radius: 2.0,
            pole: Pole::Near,
        };
        let ray = Ray::toward(Vec3::new(-10.0, 0.0, 0.0), Vec3::ZERO);
        assert_eq!(ray.intersect_sphere(&sphere), Some(Vec3::new(-2.0, 0.0, 0.0)));

        let away = Ray::toward(Vec3::new(-10.0, 0.0, 0.0), Vec3::new(-20.0, 0.0, 0.0));
        assert_eq!(away.intersect_sphere(&sphere), None);

        let miss = Ray::toward(Vec3::new(-10.0, 5.0, 0.0), Vec3::new(0.0, 5.0, 0.0));
        assert_eq!(miss.intersect_sphere(&sphere), None);
    }

    #[test]
    fn centrist_sits_between_poles() {
        // Half Liberal, with no leaning on any other axis.
        let affinities = AxisAffinities::new([0.5; 4]);
        let position = calculate_position(PoliticalAxis::MedievalistLiberal, &affinities);
        let sphere = fundamental_sphere(PoliticalAxis::MedievalistLiberal, &affinities);

        assert_relative_eq!(position.distance(sphere.center), sphere.radius, epsilon = 1e-2);
        // Every other axis passes through the cube's center at 0.5.
        assert!(position.abs_diff_eq(Vec3::splat(127.5), 1e-2), "{position}");
    }

    #[test]
    fn larger_cube_scales_positions() {
        let affinities = AxisAffinities::new([0.3, 0.7, 0.2, 0.9]);
        let axis = PoliticalAxis::ConservativeProgressive;
        let small = calculate_position_in(&AxisLayout::new(255.0), axis, &affinities);
        let large = calculate_position_in(&AxisLayout::new(510.0), axis, &affinities);
        assert!((small * 2.0).abs_diff_eq(large, 1e-2), "{small} {large}");
    }

    #[test]
    fn sample_grid_covers_every_combination() {
        let samples: Vec<_> = sample_positions(step(20)).collect();
        assert_eq!(samples.len(), 4 * 6usize.pow(4));
        assert_eq!(samples[0].affinities, AxisAffinities::new([0.0; 4]));
        assert_eq!(samples[1].affinities, AxisAffinities::new([0.0, 0.0, 0.0, 0.2]));
        assert_eq!(samples.last().unwrap().affinities, AxisAffinities::new([1.0; 4]));
        assert_eq!(samples.last().unwrap().axis, PoliticalAxis::StatistLibertarian);
    }

    #[test]
    fn step_above_full_affinity_samples_only_zero() {
        let samples: Vec<_> = sample_positions(step(150)).collect();
        assert_eq!(samples.len(), 4);
        assert!(samples.iter().all(|s| s.affinities == AxisAffinities::new([0.0; 4])));
    }

    #[test]
    fn uneven_step_stops_before_full_affinity() {
        let samples: Vec<_> = sample_positions(step(30)).collect();
        // 0, 30, 60, 90
        assert_eq!(samples.len(), 4 * 4usize.pow(4));
    }

    proptest! {
        #[test]
        fn position_lies_on_fundamental_sphere(
            axis in axis_strategy(),
            affinities in prop::array::uniform4(0.0f32..=1.0),
        ) {
            let affinities = AxisAffinities::new(affinities);
            let sphere = fundamental_sphere(axis, &affinities);
            let position = calculate_position(axis, &affinities);

            let a = affinities[axis];
            if a == 0.0 || a == 1.0 {
                prop_assert_eq!(position, sphere.center);
            } else {
                let distance = position.distance(sphere.center);
                prop_assert!((distance - sphere.radius).abs() <= 1e-3 * sphere.radius.max(1.0));
            }
        }

        #[test]
        fn position_stays_inside_the_cube(
            axis in axis_strategy(),
            affinities in prop::array::uniform4(0.0f32..=1.0),
        ) {
            let position = calculate_position(axis, &AxisAffinities::new(affinities));
            prop_assert!(position.cmpge(Vec3::splat(-1e-2)).all(), "{}", position);
            prop_assert!(position.cmple(Vec3::splat(255.0 + 1e-2)).all(), "{}", position);
        }

        #[test]
        fn axis_order_does_not_matter(
            axis in axis_strategy(),
            affinities in prop::array::uniform4(0.0f32..=1.0),
        ) {
            let affinities = AxisAffinities::new(affinities);
            let layout = AxisLayout::POLITICAL;
            let sphere = fundamental_sphere(axis, &affinities);
            let mut points = axis.others().map(|other| {
                let [near, far] = layout.vertices(other);
                sphere.project(near.lerp(far, affinities[other]))
            });

            let forward = position_from_affinity_points(&sphere, &points);
            prop_assert!(forward.abs_diff_eq(calculate_position(axis, &affinities), 1e-3));

            points.reverse();
            let reversed = position_from_affinity_points(&sphere, &points);
            points.rotate_left(1);
            let rotated = position_from_affinity_points(&sphere, &points);
            prop_assert!(forward.abs_diff_eq(reversed, 1e-3));
            prop_assert!(forward.abs_diff_eq(rotated, 1e-3));
        }
    }
}
