use ilattice::glam::Vec3;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use std::fmt;
use std::str::FromStr;

/// An RGB colour written as `#rrggbb`.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct HexColor(pub [u8; 3]);

impl HexColor {
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    #[inline]
    pub fn channels(&self) -> [u8; 3] {
        self.0
    }
}

/// Maps a position in the cube to a colour by using its coordinates directly
/// as RGB channels.
///
/// Each coordinate is clamped to `[0, 255]` and rounded, so every input has a
/// colour.
///
/// ```
/// # use political_space::*;
/// # use political_space::glam::Vec3;
/// assert_eq!(color_of(Vec3::new(255.0, 16.0, 0.0)).to_string(), "#ff1000");
/// assert_eq!(color_of(Vec3::new(-10.0, 300.0, 127.6)).to_string(), "#00ff80");
/// ```
#[inline]
pub fn color_of(point: Vec3) -> HexColor {
    // NaN saturates to zero in the cast.
    let channel = |c: f32| c.clamp(0.0, 255.0).round() as u8;
    HexColor([channel(point.x), channel(point.y), channel(point.z)])
}

impl fmt::Display for HexColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("`{0}` is not a #rrggbb colour")]
pub struct ParseHexColorError(String);

impl FromStr for HexColor {
    type Err = ParseHexColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseHexColorError(s.to_owned());
        let digits = s.strip_prefix('#').ok_or_else(err)?;
        if digits.len() != 6 || !digits.is_ascii() {
            return Err(err());
        }
        let mut channels = [0; 3];
        for (i, channel) in channels.iter_mut().enumerate() {
            *channel = u8::from_str_radix(&digits[2 * i..2 * i + 2], 16).map_err(|_| err())?;
        }
        Ok(Self(channels))
    }
}

impl Serialize for HexColor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for HexColor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn clamps_out_of_range_channels() {
        assert_eq!(color_of(Vec3::new(-10.0, -10.0, -10.0)), HexColor::new(0, 0, 0));
        assert_eq!(color_of(Vec3::new(265.0, 1e9, 255.0)), HexColor::new(255, 255, 255));
        assert_eq!(color_of(Vec3::new(f32::NAN, 1.0, 2.0)), HexColor::new(0, 1, 2));
    }

    #[test]
    fn pads_single_digit_channels() {
        assert_eq!(color_of(Vec3::new(1.0, 10.0, 15.0)).to_string(), "#010a0f");
    }

    #[test]
    fn rejects_malformed_strings() {
        assert!("010a0f".parse::<HexColor>().is_err());
        assert!("#010a0".parse::<HexColor>().is_err());
        assert!("#01xa0f".parse::<HexColor>().is_err());
        assert_eq!("#CBD5E5".parse::<HexColor>().unwrap(), HexColor::new(0xcb, 0xd5, 0xe5));
    }

    #[test]
    fn serializes_as_hex_string() {
        let json = serde_json::to_string(&HexColor::new(0xcb, 0xd5, 0xe5)).unwrap();
        assert_eq!(json, "\"#cbd5e5\"");
        let back: HexColor = serde_json::from_str(&json).unwrap();
        assert_eq!(back, HexColor::new(0xcb, 0xd5, 0xe5));
    }

    proptest! {
        #[test]
        fn integer_points_map_exactly(r in 0u8..=255, g in 0u8..=255, b in 0u8..=255) {
            let color = color_of(Vec3::new(r as f32, g as f32, b as f32));
            prop_assert_eq!(color, HexColor::new(r, g, b));
            let s = color.to_string();
            prop_assert_eq!(s.len(), 7);
            prop_assert_eq!(s.parse::<HexColor>().unwrap(), color);
        }

        #[test]
        fn any_point_has_a_colour(x in -1e6f32..1e6, y in -1e6f32..1e6, z in -1e6f32..1e6) {
            let s = color_of(Vec3::new(x, y, z)).to_string();
            prop_assert!(s.starts_with('#'));
            prop_assert_eq!(s.len(), 7);
        }
    }
}
