//! Fixed three-color palettes.
//!
//! Colors are never baked into generated source; they are bound as the
//! `color1`..`color3` uniforms every frame, so switching harmony is free.

use std::fmt;
use std::str::FromStr;

use crate::error::StudioError;

pub type Rgb = [f32; 3];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HarmonyPalette {
    pub color1: Rgb,
    pub color2: Rgb,
    pub color3: Rgb,
}

impl HarmonyPalette {
    pub const fn colors(&self) -> [Rgb; 3] {
        [self.color1, self.color2, self.color3]
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Harmony {
    Ash,
    Ocean,
    Forest,
    Sunset,
    Moonlight,
    Earth,
}

const ASH: HarmonyPalette = HarmonyPalette {
    color1: [0.902, 0.494, 0.314], // #E67E50
    color2: [0.490, 0.561, 0.412], // #7D8F69
    color3: [0.961, 0.663, 0.384], // #F5A962
};
const OCEAN: HarmonyPalette = HarmonyPalette {
    color1: [0.290, 0.565, 0.643], // #4A90A4
    color2: [0.353, 0.694, 0.733], // #5AB1BB
    color3: [0.176, 0.373, 0.427], // #2D5F6D
};
const FOREST: HarmonyPalette = HarmonyPalette {
    color1: [0.420, 0.561, 0.443], // #6B8F71
    color2: [0.561, 0.659, 0.533], // #8FA888
    color3: [0.290, 0.420, 0.322], // #4A6B52
};
const SUNSET: HarmonyPalette = HarmonyPalette {
    color1: [0.910, 0.553, 0.404], // #E88D67
    color2: [0.608, 0.420, 0.620], // #9B6B9E
    color3: [0.957, 0.635, 0.380], // #F4A261
};
const MOONLIGHT: HarmonyPalette = HarmonyPalette {
    color1: [0.482, 0.561, 0.639], // #7B8FA3
    color2: [0.659, 0.710, 0.780], // #A8B5C7
    color3: [0.306, 0.365, 0.424], // #4E5D6C
};
const EARTH: HarmonyPalette = HarmonyPalette {
    color1: [0.608, 0.494, 0.435], // #9B7E6F
    color2: [0.420, 0.561, 0.639], // #6B8FA3
    color3: [0.769, 0.647, 0.482], // #C4A57B
};

impl Harmony {
    pub const ALL: [Self; 6] = [
        Self::Ash,
        Self::Ocean,
        Self::Forest,
        Self::Sunset,
        Self::Moonlight,
        Self::Earth,
    ];

    pub const fn id(self) -> &'static str {
        match self {
            Self::Ash => "ash",
            Self::Ocean => "ocean",
            Self::Forest => "forest",
            Self::Sunset => "sunset",
            Self::Moonlight => "moonlight",
            Self::Earth => "earth",
        }
    }

    pub const fn palette(self) -> &'static HarmonyPalette {
        match self {
            Self::Ash => &ASH,
            Self::Ocean => &OCEAN,
            Self::Forest => &FOREST,
            Self::Sunset => &SUNSET,
            Self::Moonlight => &MOONLIGHT,
            Self::Earth => &EARTH,
        }
    }
}

impl FromStr for Harmony {
    type Err = StudioError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|h| h.id() == s)
            .ok_or_else(|| StudioError::UnknownHarmony(s.to_string()))
    }
}

impl fmt::Display for Harmony {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}
