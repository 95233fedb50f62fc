//! Observation variable catalog.
//!
//! Maps the CLI-facing variable names onto the columns of the NDBC
//! latest-observations product. The names match what the upstream web
//! service exposes, so `--var water_temperature` selects the WTMP column.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::BuoyError;

/// A measured variable reported by NDBC stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variable {
    WindDirection,
    WindSpeed,
    WindGust,
    WaveHeight,
    DominantWavePeriod,
    AverageWavePeriod,
    DominantWaveDirection,
    Pressure,
    PressureTendency,
    AirTemperature,
    WaterTemperature,
    Dewpoint,
    Visibility,
    WaterLevel,
}

impl Variable {
    /// All catalog variables, in NDBC column order (WDIR through TIDE).
    pub const ALL: [Variable; 14] = [
        Variable::WindDirection,
        Variable::WindSpeed,
        Variable::WindGust,
        Variable::WaveHeight,
        Variable::DominantWavePeriod,
        Variable::AverageWavePeriod,
        Variable::DominantWaveDirection,
        Variable::Pressure,
        Variable::PressureTendency,
        Variable::AirTemperature,
        Variable::WaterTemperature,
        Variable::Dewpoint,
        Variable::Visibility,
        Variable::WaterLevel,
    ];

    /// Index of this variable's column within an observation row.
    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|v| v == self).unwrap_or(0)
    }

    /// The CLI-facing name (snake_case).
    pub fn name(&self) -> &'static str {
        match self {
            Variable::WindDirection => "wind_direction",
            Variable::WindSpeed => "wind_speed",
            Variable::WindGust => "wind_gust",
            Variable::WaveHeight => "wave_height",
            Variable::DominantWavePeriod => "dominant_wave_period",
            Variable::AverageWavePeriod => "average_wave_period",
            Variable::DominantWaveDirection => "dominant_wave_direction",
            Variable::Pressure => "pressure",
            Variable::PressureTendency => "pressure_tendency",
            Variable::AirTemperature => "air_temperature",
            Variable::WaterTemperature => "water_temperature",
            Variable::Dewpoint => "dewpoint",
            Variable::Visibility => "visibility",
            Variable::WaterLevel => "water_level",
        }
    }

    /// The NDBC column header this variable is read from.
    pub fn ndbc_column(&self) -> &'static str {
        match self {
            Variable::WindDirection => "WDIR",
            Variable::WindSpeed => "WSPD",
            Variable::WindGust => "GST",
            Variable::WaveHeight => "WVHT",
            Variable::DominantWavePeriod => "DPD",
            Variable::AverageWavePeriod => "APD",
            Variable::DominantWaveDirection => "MWD",
            Variable::Pressure => "PRES",
            Variable::PressureTendency => "PTDY",
            Variable::AirTemperature => "ATMP",
            Variable::WaterTemperature => "WTMP",
            Variable::Dewpoint => "DEWP",
            Variable::Visibility => "VIS",
            Variable::WaterLevel => "TIDE",
        }
    }

    /// Resolve a CLI name against the catalog.
    pub fn from_name(name: &str) -> Result<Variable, BuoyError> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name() == name)
            .ok_or_else(|| BuoyError::UnknownVariable(name.to_string()))
    }

    /// Human-readable label: underscores become spaces, words title-cased.
    ///
    /// `water_temperature` renders as `Water Temperature`.
    pub fn label(&self) -> String {
        title_case(self.name())
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Title-case a snake_case identifier for display.
pub fn title_case(name: &str) -> String {
    name.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_known() {
        let v = Variable::from_name("water_temperature").unwrap();
        assert_eq!(v, Variable::WaterTemperature);
        assert_eq!(v.ndbc_column(), "WTMP");
    }

    #[test]
    fn test_from_name_unknown() {
        let err = Variable::from_name("sea_surface_salinity").unwrap_err();
        assert!(matches!(err, BuoyError::UnknownVariable(_)));
    }

    #[test]
    fn test_label_title_case() {
        assert_eq!(Variable::WaterTemperature.label(), "Water Temperature");
        assert_eq!(Variable::WaveHeight.label(), "Wave Height");
        assert_eq!(Variable::Pressure.label(), "Pressure");
    }

    #[test]
    fn test_index_matches_column_order() {
        assert_eq!(Variable::WindDirection.index(), 0);
        assert_eq!(Variable::WaterLevel.index(), Variable::ALL.len() - 1);
        for (i, v) in Variable::ALL.iter().enumerate() {
            assert_eq!(v.index(), i);
        }
    }
}
