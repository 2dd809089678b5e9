//! Color space tags.
//!
//! Every [`PixelImage`](crate::PixelImage) carries a [`ColorSpaceTag`]
//! naming the domain its channel values live in. The set is closed: the
//! conversion graph in `chromatch-color` matches on these four variants.
//!
//! # Channel Domains
//!
//! | Tag | Channel 0 | Channel 1 | Channel 2 | Range |
//! |-----|-----------|-----------|-----------|-------|
//! | Rgb | R | G | B | [0, 1], optionally scaled by 235/255 |
//! | Lms | L | M | S | positive reals |
//! | Lab | l | alpha | beta | log-domain reals, may be negative |
//! | Hsl | H | S | L | H in degrees [0, 360), S and L in [0, 1] |

use std::fmt;
use std::str::FromStr;

/// Identifies the domain of a pixel image's channel values.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ColorSpaceTag {
    /// Normalized red, green, blue.
    Rgb,
    /// Cone response space (long, medium, short wavelengths).
    Lms,
    /// Decorrelated logarithmic opponent space built from log10 LMS.
    Lab,
    /// Hue (degrees), saturation, lightness.
    Hsl,
}

impl ColorSpaceTag {
    /// All tags in declaration order.
    pub const ALL: [ColorSpaceTag; 4] = [Self::Rgb, Self::Lms, Self::Lab, Self::Hsl];

    /// Human-readable name, used for display and logging.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rgb => "Rgb",
            Self::Lms => "Lms",
            Self::Lab => "Lab",
            Self::Hsl => "Hsl",
        }
    }

    /// Short names of the three channels.
    pub const fn channel_names(self) -> [&'static str; 3] {
        match self {
            Self::Rgb => ["R", "G", "B"],
            Self::Lms => ["L", "M", "S"],
            Self::Lab => ["l", "alpha", "beta"],
            Self::Hsl => ["H", "S", "L"],
        }
    }
}

impl fmt::Display for ColorSpaceTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorSpaceTag {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "rgb" => Ok(Self::Rgb),
            "lms" => Ok(Self::Lms),
            "lab" => Ok(Self::Lab),
            "hsl" => Ok(Self::Hsl),
            other => Err(format!("unknown color space: {other}")),
        }
    }
}
