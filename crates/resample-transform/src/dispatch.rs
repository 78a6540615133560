//! Algorithm selection
//!
//! The algorithm is a two-axis lookup, direction x method:
//!
//! | direction  | `Primary` (code 1) | `Alternate` (any other code) |
//! |------------|--------------------|------------------------------|
//! | Downsample | Decimation         | Gaussian-weighted            |
//! | Upsample   | Nearest-neighbor   | Bilinear                     |

use crate::SampleDirection;
use std::fmt;

/// Binary method selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MethodSelector {
    /// Pure sampling: decimation or nearest-neighbor
    Primary,
    /// Filtered: Gaussian-weighted or bilinear
    #[default]
    Alternate,
}

impl MethodSelector {
    /// Map an integer method code: 1 is [`Primary`](Self::Primary), anything
    /// else is [`Alternate`](Self::Alternate).
    pub fn from_code(code: i32) -> Self {
        if code == 1 {
            MethodSelector::Primary
        } else {
            MethodSelector::Alternate
        }
    }

    /// Canonical code: 1 for `Primary`, 2 for `Alternate`.
    pub fn code(self) -> i32 {
        match self {
            MethodSelector::Primary => 1,
            MethodSelector::Alternate => 2,
        }
    }

    fn index(self) -> usize {
        match self {
            MethodSelector::Primary => 0,
            MethodSelector::Alternate => 1,
        }
    }
}

/// One of the four resampling algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    /// Pick every n-th source pixel (downsampling, may alias)
    Decimation,
    /// Gaussian-weighted neighborhood average (downsampling)
    GaussianWeighted,
    /// Replicate the nearest source pixel (upsampling)
    NearestNeighbor,
    /// Two-pass interpolation (upsampling)
    Bilinear,
}

/// Rows: direction. Columns: method.
const DISPATCH: [[Algorithm; 2]; 2] = [
    [Algorithm::Decimation, Algorithm::GaussianWeighted],
    [Algorithm::NearestNeighbor, Algorithm::Bilinear],
];

impl Algorithm {
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Decimation,
        Algorithm::GaussianWeighted,
        Algorithm::NearestNeighbor,
        Algorithm::Bilinear,
    ];

    /// Look up the algorithm for a direction and method.
    pub fn select(direction: SampleDirection, method: MethodSelector) -> Self {
        let row = match direction {
            SampleDirection::Downsample => 0,
            SampleDirection::Upsample => 1,
        };
        DISPATCH[row][method.index()]
    }

    /// The direction this algorithm is designed for.
    pub fn direction(self) -> SampleDirection {
        match self {
            Algorithm::Decimation | Algorithm::GaussianWeighted => SampleDirection::Downsample,
            Algorithm::NearestNeighbor | Algorithm::Bilinear => SampleDirection::Upsample,
        }
    }

    /// The method selector that picks this algorithm in its direction.
    pub fn method(self) -> MethodSelector {
        match self {
            Algorithm::Decimation | Algorithm::NearestNeighbor => MethodSelector::Primary,
            Algorithm::GaussianWeighted | Algorithm::Bilinear => MethodSelector::Alternate,
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Algorithm::Decimation => "decimation",
            Algorithm::GaussianWeighted => "gaussian-weighted",
            Algorithm::NearestNeighbor => "nearest-neighbor",
            Algorithm::Bilinear => "bilinear",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_codes() {
        assert_eq!(MethodSelector::from_code(1), MethodSelector::Primary);
        for code in [0, 2, 3, -1, i32::MAX] {
            assert_eq!(MethodSelector::from_code(code), MethodSelector::Alternate);
        }
        assert_eq!(MethodSelector::Primary.code(), 1);
        assert_eq!(MethodSelector::from_code(MethodSelector::Alternate.code()), MethodSelector::Alternate);
    }

    #[test]
    fn test_dispatch_table() {
        use MethodSelector::*;
        use SampleDirection::*;
        assert_eq!(Algorithm::select(Downsample, Primary), Algorithm::Decimation);
        assert_eq!(Algorithm::select(Downsample, Alternate), Algorithm::GaussianWeighted);
        assert_eq!(Algorithm::select(Upsample, Primary), Algorithm::NearestNeighbor);
        assert_eq!(Algorithm::select(Upsample, Alternate), Algorithm::Bilinear);
    }

    #[test]
    fn test_select_inverts_direction_and_method() {
        for algorithm in Algorithm::ALL {
            assert_eq!(
                Algorithm::select(algorithm.direction(), algorithm.method()),
                algorithm
            );
        }
    }
}
