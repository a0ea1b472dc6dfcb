use std::fmt;
use std::str::FromStr;

use crate::paint::ColorPoint;

use super::Colormap;

/// Built-in colormaps.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Preset {
    /// Black to white on [0, 1].
    Grey,
    /// Black, red, yellow, white on [0, 1].
    Hot,
    /// Blue, white, yellow, red on [-1, 1]. Suited to signed activity
    /// levels centered on zero.
    IceAndFire,
}

impl Preset {
    pub const ALL: [Preset; 3] = [Preset::Grey, Preset::Hot, Preset::IceAndFire];

    pub fn name(self) -> &'static str {
        match self {
            Preset::Grey => "grey",
            Preset::Hot => "hot",
            Preset::IceAndFire => "ice_and_fire",
        }
    }

    fn points(self) -> &'static [(f32, [f32; 3])] {
        match self {
            Preset::Grey => &[(0.0, [0.0, 0.0, 0.0]), (1.0, [1.0, 1.0, 1.0])],
            Preset::Hot => &[
                (0.0, [0.0, 0.0, 0.0]),
                (1.0 / 3.0, [1.0, 0.0, 0.0]),
                (2.0 / 3.0, [1.0, 1.0, 0.0]),
                (1.0, [1.0, 1.0, 1.0]),
            ],
            Preset::IceAndFire => &[
                (-1.0, [0.0, 0.0, 1.0]),
                (0.0, [1.0, 1.0, 1.0]),
                (0.5, [1.0, 1.0, 0.0]),
                (1.0, [1.0, 0.0, 0.0]),
            ],
        }
    }

    /// Fresh colormap at the default resolution.
    pub fn build(self) -> Colormap {
        self.points()
            .iter()
            .map(|&(value, [r, g, b])| ColorPoint::rgb(r, g, b, value))
            .collect()
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Unknown preset name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownPreset(pub String);

impl fmt::Display for UnknownPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = Preset::ALL.iter().map(|p| p.name()).collect();
        write!(f, "unknown preset {:?} (expected one of: {})", self.0, names.join(", "))
    }
}

impl std::error::Error for UnknownPreset {}

impl FromStr for Preset {
    type Err = UnknownPreset;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase().replace('-', "_");
        Preset::ALL
            .into_iter()
            .find(|p| p.name() == wanted || (wanted == "gray" && *p == Preset::Grey))
            .ok_or_else(|| UnknownPreset(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(preset.name().parse::<Preset>(), Ok(preset));
        }
        assert_eq!("Ice-And-Fire".parse::<Preset>(), Ok(Preset::IceAndFire));
        assert_eq!("gray".parse::<Preset>(), Ok(Preset::Grey));
        assert!("viridis".parse::<Preset>().is_err());
    }

    #[test]
    fn ice_and_fire_domain() {
        let map = Preset::IceAndFire.build();
        assert_eq!(map.bounds(), (-1.0, 1.0));
        assert_eq!(map.rgba(-1.0), [0.0, 0.0, 1.0, 1.0]);
        assert_eq!(map.rgba(0.0), [1.0, 1.0, 1.0, 1.0]);
        assert_eq!(map.rgba(1.0), [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn hot_starts_black_ends_white() {
        let map = Preset::Hot.build();
        assert_eq!(map.len(), 4);
        assert_eq!(map.rgba(0.0), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(map.rgba(1.0), [1.0, 1.0, 1.0, 1.0]);
    }
}
