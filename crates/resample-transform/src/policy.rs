//! Target-size and direction policies
//!
//! - [`Preset`] / [`resolve_target`] map a short textual tag to an output
//!   size. Unknown tags fall back to the source size; this never fails.
//! - [`SampleDirection::classify`] decides whether a size change is a
//!   downsample or an upsample, which picks the algorithm family.

use crate::{TransformError, TransformResult};
use resample_core::PixelBuffer;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Desired output resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetSize {
    width: u32,
    height: u32,
}

impl TargetSize {
    /// Create a target size.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidTargetSize`] if either dimension is 0.
    pub fn new(width: u32, height: u32) -> TransformResult<Self> {
        if width == 0 || height == 0 {
            return Err(TransformError::InvalidTargetSize { width, height });
        }
        Ok(Self { width, height })
    }

    /// The identity target for `pix`.
    pub fn of(pix: &PixelBuffer) -> Self {
        Self {
            width: pix.width(),
            height: pix.height(),
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

impl fmt::Display for TargetSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Named output resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Preset {
    /// 1920x1080
    O1,
    /// 1280x720
    O2,
    /// 640x480
    O3,
    /// 3840x2160
    O4,
    /// Same size as the source
    #[default]
    Custom,
}

impl Preset {
    /// Every fixed-size preset.
    pub const FIXED: [Preset; 4] = [Preset::O1, Preset::O2, Preset::O3, Preset::O4];

    /// The fixed size of this preset, `None` for [`Preset::Custom`].
    pub fn size(self) -> Option<(u32, u32)> {
        match self {
            Preset::O1 => Some((1920, 1080)),
            Preset::O2 => Some((1280, 720)),
            Preset::O3 => Some((640, 480)),
            Preset::O4 => Some((3840, 2160)),
            Preset::Custom => None,
        }
    }

    /// Resolve to a concrete size for a source of `source_width` x `source_height`.
    ///
    /// The source dimensions are only used by [`Preset::Custom`] and are
    /// expected to be positive.
    pub fn resolve(self, source_width: u32, source_height: u32) -> TargetSize {
        let (width, height) = self.size().unwrap_or((source_width, source_height));
        TargetSize { width, height }
    }

    /// The tag this preset is parsed from.
    pub fn tag(self) -> &'static str {
        match self {
            Preset::O1 => "O1",
            Preset::O2 => "O2",
            Preset::O3 => "O3",
            Preset::O4 => "O4",
            Preset::Custom => "custom",
        }
    }
}

/// Parsing never fails: unrecognized tags become [`Preset::Custom`].
impl FromStr for Preset {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "O1" => Preset::O1,
            "O2" => Preset::O2,
            "O3" => Preset::O3,
            "O4" => Preset::O4,
            _ => Preset::Custom,
        })
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Map a preset tag to a target size; unknown tags give the source size.
pub fn resolve_target(preset_id: &str, source_width: u32, source_height: u32) -> TargetSize {
    let Ok(preset) = preset_id.parse::<Preset>();
    preset.resolve(source_width, source_height)
}

/// Whether a resample shrinks or enlarges the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleDirection {
    Downsample,
    Upsample,
}

impl SampleDirection {
    /// Downsample if either target dimension is strictly smaller than the
    /// source, otherwise Upsample.
    ///
    /// A target that shrinks one axis while enlarging the other is still a
    /// downsample, and an unchanged size is an upsample.
    pub fn classify(
        source_width: u32,
        source_height: u32,
        target_width: u32,
        target_height: u32,
    ) -> Self {
        if target_width < source_width || target_height < source_height {
            SampleDirection::Downsample
        } else {
            SampleDirection::Upsample
        }
    }

    /// [`classify`](Self::classify) for a buffer and a target.
    pub fn for_target(source: &PixelBuffer, target: TargetSize) -> Self {
        Self::classify(
            source.width(),
            source.height(),
            target.width(),
            target.height(),
        )
    }
}

impl fmt::Display for SampleDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SampleDirection::Downsample => "Downsample",
            SampleDirection::Upsample => "Upsample",
        })
    }
}
