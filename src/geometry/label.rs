use ilattice::glam::Vec3;
use serde::Serialize;

/// An operation on a label's text geometry that can only run once the font
/// has been loaded and the text laid out.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LabelOp {
    /// Move the pivot to the centre of the text's bounding box.
    Center,
}

/// Axis-aligned bounds of laid-out text, in the text's local space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextBounds {
    pub min: Vec3,
    pub max: Vec3,
}

impl TextBounds {
    #[inline]
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) / 2.0
    }
}

/// A label whose geometry is not available yet.
///
/// The descriptor is built up front with whatever operations the label needs,
/// and those operations are applied by [`LabelDescriptor::resolve`] once the
/// text's bounds are known.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LabelDescriptor {
    pub text: String,
    /// World position of the label's pivot.
    pub anchor: [f32; 3],
    pub pending: Vec<LabelOp>,
}

impl LabelDescriptor {
    pub fn new(text: impl Into<String>, anchor: Vec3) -> Self {
        Self {
            text: text.into(),
            anchor: anchor.to_array(),
            pending: Vec::new(),
        }
    }

    /// Queues [`LabelOp::Center`].
    pub fn centered(mut self) -> Self {
        self.pending.push(LabelOp::Center);
        self
    }

    /// Applies the pending operations, in order, to text with the given
    /// bounds.
    pub fn resolve(&self, bounds: &TextBounds) -> PlacedLabel {
        let mut offset = Vec3::ZERO;
        let mut bounds = *bounds;

        for op in self.pending.iter() {
            match op {
                LabelOp::Center => {
                    let shift = -bounds.center();
                    offset += shift;
                    bounds.min += shift;
                    bounds.max += shift;
                }
            }
        }

        PlacedLabel {
            text: self.text.clone(),
            anchor: self.anchor,
            geometry_offset: offset.to_array(),
        }
    }
}

/// A label with all deferred operations applied.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlacedLabel {
    pub text: String,
    pub anchor: [f32; 3],
    /// Translation to apply to the text geometry relative to `anchor`.
    pub geometry_offset: [f32; 3],
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centering_moves_bounds_center_to_pivot() {
        let label = LabelDescriptor::new("Leftist", Vec3::new(1.0, 2.0, 3.0)).centered();
        let placed = label.resolve(&TextBounds {
            min: Vec3::new(0.0, -2.0, 0.0),
            max: Vec3::new(40.0, 10.0, 0.0),
        });
        assert_eq!(placed.anchor, [1.0, 2.0, 3.0]);
        assert_eq!(placed.geometry_offset, [-20.0, -4.0, 0.0]);
    }

    #[test]
    fn centering_twice_is_the_same_as_once() {
        let bounds = TextBounds {
            min: Vec3::new(2.0, 2.0, 2.0),
            max: Vec3::new(6.0, 4.0, 2.0),
        };
        let once = LabelDescriptor::new("x", Vec3::ZERO).centered().resolve(&bounds);
        let twice = LabelDescriptor::new("x", Vec3::ZERO).centered().centered().resolve(&bounds);
        assert_eq!(once, twice);
    }

    #[test]
    fn no_pending_ops_leaves_geometry_in_place() {
        let placed = LabelDescriptor::new("x", Vec3::ONE).resolve(&TextBounds {
            min: Vec3::ZERO,
            max: Vec3::splat(5.0),
        });
        assert_eq!(placed.geometry_offset, [0.0; 3]);
    }
}
