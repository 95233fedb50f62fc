//! Named color maps for station markers and the color bar.
//!
//! Each map is a ramp of color stops sampled by a normalized value in [0, 1].
//! Names follow the widely used scientific palette names, so `--cmap Oranges`
//! selects the expected ramp.

use buoy_common::{BuoyError, BuoyResult};

use crate::canvas::{interpolate_color, Color};

/// A color ramp with evenly spaced stops.
#[derive(Debug, Clone)]
pub struct Colormap {
    name: &'static str,
    stops: &'static [(u8, u8, u8)],
}

impl Colormap {
    /// Resolve a color map by name. Unknown names are a fatal error.
    ///
    /// Matching is case-sensitive: `Oranges` and `viridis` are valid,
    /// `oranges` is not.
    pub fn by_name(name: &str) -> BuoyResult<Colormap> {
        NAMED_MAPS
            .iter()
            .find(|m| m.name == name)
            .cloned()
            .ok_or_else(|| BuoyError::UnknownColormap(name.to_string()))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All recognized map names, for error messages.
    pub fn names() -> Vec<&'static str> {
        NAMED_MAPS.iter().map(|m| m.name).collect()
    }

    /// Sample the ramp at a normalized position. Input is clamped to [0, 1].
    pub fn sample(&self, t: f32) -> Color {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        let segments = (self.stops.len() - 1) as f32;
        let pos = t * segments;
        let low = (pos.floor() as usize).min(self.stops.len() - 2);
        let frac = pos - low as f32;

        let (r1, g1, b1) = self.stops[low];
        let (r2, g2, b2) = self.stops[low + 1];
        interpolate_color(Color::rgb(r1, g1, b1), Color::rgb(r2, g2, b2), frac)
    }
}

/// Value-to-[0, 1] normalization with optional fixed bounds.
///
/// Unset bounds default to the data min/max. A `min` greater than `max` is
/// accepted and passed through unvalidated: normalization then runs over an
/// inverted domain and every value clamps to a ramp end. Known unguarded
/// edge case, kept deliberately.
#[derive(Debug, Clone, Copy)]
pub struct ColorScale {
    pub vmin: f64,
    pub vmax: f64,
}

impl ColorScale {
    /// Build the scale from optional fixed bounds and the plotted values.
    pub fn from_bounds(vmin: Option<f64>, vmax: Option<f64>, values: &[f64]) -> ColorScale {
        let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        ColorScale {
            vmin: vmin.unwrap_or(data_min),
            vmax: vmax.unwrap_or(data_max),
        }
    }

    /// Normalize a value into [0, 1], clamping out-of-range values.
    pub fn normalize(&self, value: f64) -> f32 {
        let range = self.vmax - self.vmin;
        if range.abs() < 1e-12 {
            return 0.5;
        }
        (((value - self.vmin) / range).clamp(0.0, 1.0)) as f32
    }
}

/// Evenly spaced anchor colors for each named ramp.
///
/// Sequential ramps use the 5-anchor single-hue progressions of the upstream
/// palettes; perceptual ramps (viridis, plasma, inferno) use their published
/// anchor hexes.
static NAMED_MAPS: &[Colormap] = &[
    Colormap {
        name: "Oranges",
        stops: &[
            (255, 245, 235),
            (253, 208, 162),
            (253, 141, 60),
            (217, 72, 1),
            (127, 39, 4),
        ],
    },
    Colormap {
        name: "Blues",
        stops: &[
            (247, 251, 255),
            (198, 219, 239),
            (107, 174, 214),
            (33, 113, 181),
            (8, 48, 107),
        ],
    },
    Colormap {
        name: "Greens",
        stops: &[
            (247, 252, 245),
            (199, 233, 192),
            (116, 196, 118),
            (35, 139, 69),
            (0, 68, 27),
        ],
    },
    Colormap {
        name: "Reds",
        stops: &[
            (255, 245, 240),
            (252, 187, 161),
            (251, 106, 74),
            (203, 24, 29),
            (103, 0, 13),
        ],
    },
    Colormap {
        name: "Purples",
        stops: &[
            (252, 251, 253),
            (218, 218, 235),
            (158, 154, 200),
            (106, 81, 163),
            (63, 0, 125),
        ],
    },
    Colormap {
        name: "Greys",
        stops: &[
            (255, 255, 255),
            (217, 217, 217),
            (150, 150, 150),
            (82, 82, 82),
            (0, 0, 0),
        ],
    },
    Colormap {
        name: "viridis",
        stops: &[
            (68, 1, 84),
            (59, 82, 139),
            (33, 145, 140),
            (94, 201, 98),
            (253, 231, 37),
        ],
    },
    Colormap {
        name: "plasma",
        stops: &[
            (13, 8, 135),
            (126, 3, 168),
            (204, 71, 120),
            (248, 149, 64),
            (240, 249, 33),
        ],
    },
    Colormap {
        name: "inferno",
        stops: &[
            (0, 0, 4),
            (87, 16, 110),
            (188, 55, 84),
            (249, 142, 9),
            (252, 255, 164),
        ],
    },
    Colormap {
        name: "coolwarm",
        stops: &[
            (59, 76, 192),
            (141, 176, 254),
            (221, 221, 221),
            (244, 154, 123),
            (180, 4, 38),
        ],
    },
];
