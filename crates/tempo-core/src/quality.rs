//! Quality labeling and AQI-like index for NO2 concentrations.

use serde::{Deserialize, Serialize};

/// Coarse quality label derived from a tropospheric NO2 concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AirQualityLabel {
    #[serde(rename = "Buena")]
    Buena,
    #[serde(rename = "Moderada")]
    Moderada,
    #[serde(rename = "Mala")]
    Mala,
    #[serde(rename = "Muy Mala")]
    MuyMala,
}

impl AirQualityLabel {
    /// Fixed thresholds: <20 Buena, <40 Moderada, <60 Mala, else Muy Mala.
    pub fn from_no2(no2: f64) -> Self {
        if no2 < 20.0 {
            Self::Buena
        } else if no2 < 40.0 {
            Self::Moderada
        } else if no2 < 60.0 {
            Self::Mala
        } else {
            Self::MuyMala
        }
    }

    /// AQI-like severity score for the same thresholds.
    pub fn aqi_value(self) -> u32 {
        match self {
            Self::Buena => 25,
            Self::Moderada => 50,
            Self::Mala => 75,
            Self::MuyMala => 100,
        }
    }
}

/// Round a reported concentration to 2 decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Round a reported weather field to 1 decimal.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_fixed_thresholds() {
        assert_eq!(AirQualityLabel::from_no2(0.0), AirQualityLabel::Buena);
        assert_eq!(AirQualityLabel::from_no2(19.99), AirQualityLabel::Buena);
        assert_eq!(AirQualityLabel::from_no2(20.0), AirQualityLabel::Moderada);
        assert_eq!(AirQualityLabel::from_no2(39.99), AirQualityLabel::Moderada);
        assert_eq!(AirQualityLabel::from_no2(40.0), AirQualityLabel::Mala);
        assert_eq!(AirQualityLabel::from_no2(59.99), AirQualityLabel::Mala);
        assert_eq!(AirQualityLabel::from_no2(60.0), AirQualityLabel::MuyMala);
        assert_eq!(AirQualityLabel::from_no2(250.0), AirQualityLabel::MuyMala);
    }

    #[test]
    fn aqi_values_match_labels() {
        assert_eq!(AirQualityLabel::from_no2(10.0).aqi_value(), 25);
        assert_eq!(AirQualityLabel::from_no2(25.0).aqi_value(), 50);
        assert_eq!(AirQualityLabel::from_no2(45.0).aqi_value(), 75);
        assert_eq!(AirQualityLabel::from_no2(80.0).aqi_value(), 100);
    }

    #[test]
    fn labels_serialize_to_spanish_names() {
        assert_eq!(
            serde_json::to_value(AirQualityLabel::MuyMala).unwrap(),
            "Muy Mala"
        );
        assert_eq!(serde_json::to_value(AirQualityLabel::Buena).unwrap(), "Buena");
    }

    #[test]
    fn rounding_helpers() {
        assert_eq!(round2(15.456), 15.46);
        assert_eq!(round2(1.004), 1.0);
        assert_eq!(round1(21.77), 21.8);
    }
}
