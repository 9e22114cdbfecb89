use serde::{Deserialize, Serialize};

/// Upper bound reported for the last, open-ended bucket.
pub const UNBOUNDED: u64 = 9_007_199_254_740_991;

/// A half-open price interval `[min, max)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: u64,
}

impl PriceRange {
    /// True for the last bucket, which has no upper price check.
    pub fn is_open(&self) -> bool {
        self.max == UNBOUNDED
    }

    pub fn contains(&self, price: f64) -> bool {
        price >= self.min as f64 && (self.is_open() || price < self.max as f64)
    }
}

/// The ten histogram buckets, ascending and contiguous over `[0, ∞)`.
pub const PRICE_RANGES: [PriceRange; 10] = [
    PriceRange { min: 0, max: 100 },
    PriceRange { min: 100, max: 200 },
    PriceRange { min: 200, max: 300 },
    PriceRange { min: 300, max: 400 },
    PriceRange { min: 400, max: 500 },
    PriceRange { min: 500, max: 600 },
    PriceRange { min: 600, max: 700 },
    PriceRange { min: 700, max: 800 },
    PriceRange { min: 800, max: 900 },
    PriceRange { min: 900, max: UNBOUNDED },
];
