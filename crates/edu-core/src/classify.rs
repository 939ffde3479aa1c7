//! Distribution-shape classification from sample moments
//!
//! Two independent labels are derived from a [`Moments`] value:
//!
//! | Label | Rule |
//! |-------|------|
//! | [`SkewType`] | `skew > 0.5` right, `skew < -0.5` left, otherwise not skewed |
//! | [`KurtType`] | `kurt > 1` leptokurtic, `kurt < -1` platykurtic, otherwise mesokurtic |
//!
//! Both comparisons are strict, so a value sitting exactly on a threshold
//! lands in the neutral class. NaN compares false against every threshold and
//! therefore also lands in the neutral class.

use crate::Moments;
use serde::Serialize;
use std::fmt;

/// Skewness above this is right skewed, below its negation left skewed.
pub const SKEW_THRESHOLD: f64 = 0.5;

/// Excess kurtosis above this is leptokurtic, below its negation platykurtic.
pub const KURTOSIS_THRESHOLD: f64 = 1.0;

/// Direction of asymmetry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SkewType {
    #[serde(rename = "right skewed")]
    RightSkewed,
    #[serde(rename = "left skewed")]
    LeftSkewed,
    #[serde(rename = "not skewed")]
    NotSkewed,
}

impl SkewType {
    pub fn from_skewness(skewness: f64) -> Self {
        if skewness > SKEW_THRESHOLD {
            Self::RightSkewed
        } else if skewness < -SKEW_THRESHOLD {
            Self::LeftSkewed
        } else {
            Self::NotSkewed
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::RightSkewed => "right skewed",
            Self::LeftSkewed => "left skewed",
            Self::NotSkewed => "not skewed",
        }
    }
}

impl fmt::Display for SkewType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Tailedness relative to a normal distribution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum KurtType {
    /// Heavier tails than normal
    Leptokurtic,
    /// Lighter tails than normal
    Platykurtic,
    /// Normal-like tails
    Mesokurtic,
}

impl KurtType {
    pub fn from_excess_kurtosis(excess_kurtosis: f64) -> Self {
        if excess_kurtosis > KURTOSIS_THRESHOLD {
            Self::Leptokurtic
        } else if excess_kurtosis < -KURTOSIS_THRESHOLD {
            Self::Platykurtic
        } else {
            Self::Mesokurtic
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Leptokurtic => "leptokurtic",
            Self::Platykurtic => "platykurtic",
            Self::Mesokurtic => "mesokurtic",
        }
    }
}

impl fmt::Display for KurtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Both shape labels for one sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Classification {
    pub skew_type: SkewType,
    pub kurt_type: KurtType,
}

impl Classification {
    /// Classify a distribution from its moments. Total: never fails.
    pub fn from_moments(moments: &Moments) -> Self {
        Self {
            skew_type: SkewType::from_skewness(moments.skewness()),
            kurt_type: KurtType::from_excess_kurtosis(moments.excess_kurtosis()),
        }
    }
}

/// Convenience wrapper returning the labels as a pair.
pub fn classify(moments: &Moments) -> (SkewType, KurtType) {
    let c = Classification::from_moments(moments);
    (c.skew_type, c.kurt_type)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_shape(skewness: f64, excess_kurtosis: f64) -> Moments {
        Moments::new(0.0, 1.0, skewness, excess_kurtosis)
    }

    #[test]
    fn test_skew_boundaries() {
        assert_eq!(SkewType::from_skewness(0.5), SkewType::NotSkewed);
        assert_eq!(SkewType::from_skewness(0.50001), SkewType::RightSkewed);
        assert_eq!(SkewType::from_skewness(-0.5), SkewType::NotSkewed);
        assert_eq!(SkewType::from_skewness(-0.50001), SkewType::LeftSkewed);
        assert_eq!(SkewType::from_skewness(0.0), SkewType::NotSkewed);
    }

    #[test]
    fn test_kurtosis_boundaries() {
        assert_eq!(KurtType::from_excess_kurtosis(1.0), KurtType::Mesokurtic);
        assert_eq!(KurtType::from_excess_kurtosis(1.00001), KurtType::Leptokurtic);
        assert_eq!(KurtType::from_excess_kurtosis(-1.0), KurtType::Mesokurtic);
        assert_eq!(KurtType::from_excess_kurtosis(-1.00001), KurtType::Platykurtic);
    }

    #[test]
    fn test_nan_falls_through_to_neutral() {
        let (skew, kurt) = classify(&with_shape(f64::NAN, f64::NAN));
        assert_eq!(skew, SkewType::NotSkewed);
        assert_eq!(kurt, KurtType::Mesokurtic);
    }

    #[test]
    fn test_infinities_classify() {
        let (skew, kurt) = classify(&with_shape(f64::INFINITY, f64::NEG_INFINITY));
        assert_eq!(skew, SkewType::RightSkewed);
        assert_eq!(kurt, KurtType::Platykurtic);
    }

    #[test]
    fn test_labels_are_independent() {
        let c = Classification::from_moments(&with_shape(-3.0, 0.2));
        assert_eq!(c.skew_type, SkewType::LeftSkewed);
        assert_eq!(c.kurt_type, KurtType::Mesokurtic);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(SkewType::RightSkewed.to_string(), "right skewed");
        assert_eq!(SkewType::LeftSkewed.to_string(), "left skewed");
        assert_eq!(SkewType::NotSkewed.to_string(), "not skewed");
        assert_eq!(KurtType::Leptokurtic.to_string(), "leptokurtic");
        assert_eq!(KurtType::Platykurtic.to_string(), "platykurtic");
        assert_eq!(KurtType::Mesokurtic.to_string(), "mesokurtic");
    }

    #[test]
    fn test_serialized_labels_match_display() {
        let c = Classification {
            skew_type: SkewType::RightSkewed,
            kurt_type: KurtType::Leptokurtic,
        };
        let json = serde_json::to_value(c).unwrap();
        assert_eq!(json["skew_type"], "right skewed");
        assert_eq!(json["kurt_type"], "leptokurtic");
    }
}
