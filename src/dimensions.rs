//! Fit a source resolution into the THP container's dimension bounds.
//!
//! THP caps the width at 672 px and the playback engine caps the height at
//! 480 px; both dimensions must be multiples of 16 for the codec, with the
//! single exception of a height pinned at the 480 cap (480 itself is not a
//! multiple of 16 -- the cap wins over the normalization there). Within
//! those bounds the fitter keeps the source aspect ratio as closely as
//! rounding allows and maximizes the non-limiting axis.

use std::fmt;

/// Maximum THP frame width in pixels.
pub const MAX_WIDTH: u32 = 672;
/// Maximum playable frame height in pixels.
pub const MAX_HEIGHT: u32 = 480;
/// Minimum size of either dimension.
pub const MIN_DIMENSION: u32 = 16;

/// A fitted output resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Map a source resolution to the largest fitting THP resolution.
///
/// Total function: any positive source resolution yields an in-bounds
/// result.
///
/// The limiting axis is found by first assuming the source is wider than it
/// is tall (width pinned to the 672 cap). If the derived height overshoots
/// the 480 cap, the axes switch roles: height is pinned to 480 and the
/// width is derived instead. The derived (non-pinned) axis is then rounded
/// to the nearest multiple of 16, remainders of 8 or more rounding up.
pub fn fit(src_width: u32, src_height: u32) -> Resolution {
    let aspect_ratio = f64::from(src_width) / f64::from(src_height);

    let mut width = MAX_WIDTH;
    let mut height = (f64::from(width) / aspect_ratio) as u32;

    if height > MAX_HEIGHT {
        // Taller than the width-limited assumption allows; the height cap
        // takes over and stays at 480 un-normalized.
        height = MAX_HEIGHT;
        width = round_to_16((f64::from(height) * aspect_ratio) as u32);
    } else {
        height = round_to_16(height);
    }

    // Safeguard against rounding overshoot.
    Resolution {
        width: width.clamp(MIN_DIMENSION, MAX_WIDTH),
        height: height.clamp(MIN_DIMENSION, MAX_HEIGHT),
    }
}

/// Round to the nearest multiple of 16; a remainder of 8 rounds up.
fn round_to_16(value: u32) -> u32 {
    let rem = value % 16;
    if rem < 8 {
        value - rem
    } else {
        value + (16 - rem)
    }
}
