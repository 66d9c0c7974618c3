use serde::Serialize;

/// Color class of a cell, picked from its variance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBucket {
    Coldest,
    Cool,
    Warm,
    Hottest,
}

impl ColorBucket {
    pub const ALL: [Self; 4] = [Self::Coldest, Self::Cool, Self::Warm, Self::Hottest];

    /// Each threshold belongs to the cooler bucket: -1 is coldest, 0 is cool,
    /// 1 is warm.
    pub fn from_variance(variance: f64) -> Self {
        if variance <= -1.0 {
            Self::Coldest
        } else if variance <= 0.0 {
            Self::Cool
        } else if variance <= 1.0 {
            Self::Warm
        } else {
            Self::Hottest
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Coldest => "coldest",
            Self::Cool => "cool",
            Self::Warm => "warm",
            Self::Hottest => "hottest",
        }
    }

    /// CSS color keyword used for the fill.
    pub const fn css_name(self) -> &'static str {
        match self {
            Self::Coldest => "SteelBlue",
            Self::Cool => "LightSteelBlue",
            Self::Warm => "Orange",
            Self::Hottest => "Crimson",
        }
    }

    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Self::Coldest => (70, 130, 180),
            Self::Cool => (176, 196, 222),
            Self::Warm => (255, 165, 0),
            Self::Hottest => (220, 20, 60),
        }
    }

    /// Human-readable variance range for the legend.
    pub const fn range_label(self) -> &'static str {
        match self {
            Self::Coldest => "≤ -1",
            Self::Cool => "-1 to 0",
            Self::Warm => "0 to 1",
            Self::Hottest => "> 1",
        }
    }

    pub const fn index(self) -> usize {
        match self {
            Self::Coldest => 0,
            Self::Cool => 1,
            Self::Warm => 2,
            Self::Hottest => 3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::ColorBucket;

    #[test]
    fn thresholds_fall_into_cooler_bucket() {
        assert_eq!(ColorBucket::from_variance(-1.0), ColorBucket::Coldest);
        assert_eq!(ColorBucket::from_variance(0.0), ColorBucket::Cool);
        assert_eq!(ColorBucket::from_variance(1.0), ColorBucket::Warm);
    }

    #[test]
    fn values_between_thresholds() {
        assert_eq!(ColorBucket::from_variance(-6.976), ColorBucket::Coldest);
        assert_eq!(ColorBucket::from_variance(-0.999), ColorBucket::Cool);
        assert_eq!(ColorBucket::from_variance(0.001), ColorBucket::Warm);
        assert_eq!(ColorBucket::from_variance(1.001), ColorBucket::Hottest);
        assert_eq!(ColorBucket::from_variance(5.228), ColorBucket::Hottest);
    }

    #[test]
    fn just_past_thresholds() {
        let above_minus_one = -1.0 + f64::EPSILON;
        assert_eq!(ColorBucket::from_variance(above_minus_one), ColorBucket::Cool);
        assert_eq!(
            ColorBucket::from_variance(f64::MIN_POSITIVE),
            ColorBucket::Warm
        );
        assert_eq!(
            ColorBucket::from_variance(1.0 + f64::EPSILON),
            ColorBucket::Hottest
        );
    }

    #[test]
    fn indices_follow_order() {
        for (expected, bucket) in ColorBucket::ALL.iter().enumerate() {
            assert_eq!(bucket.index(), expected);
        }
    }
}
