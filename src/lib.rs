//! Analog and brightness RGB color schemes.
//!
//! Two independent, per-call-pure generators:
//!
//! - [`analog_scheme`] (and its streaming form [`AnalogWalk`]) walks the
//!   surface of the RGB cube, changing one channel per step and reversing
//!   direction at the saturation boundaries, to produce visually distinct
//!   but harmonically related colors.
//! - [`brightness_scheme`] (and [`BrightnessRamp`]) lightens a base color
//!   toward white, either as a whole gradient or as a single color.
//!
//! The random source is an injected [`RngCore`], so generation is
//! reproducible under test.
//!
//! ```
//! use color_schemer::{analog_scheme, Rgb, Seed};
//!
//! let seed = Seed::Color(Rgb { r: 120, g: 40, b: 200 });
//! let colors = analog_scheme(6, seed, &mut rand::thread_rng())?;
//! assert_eq!(colors.len(), 6);
//! # Ok::<(), color_schemer::Error>(())
//! ```

use rand::{Rng, RngCore};
use rgb::{RGB, RGB8};

mod analog;
mod brightness;

pub use analog::{analog_scheme, AnalogWalk, Channel};
pub use brightness::{brightness_scheme, BrightnessOptions, BrightnessRamp};

/// Lower edge of the usable intensity band.
pub const LOW: i32 = 20;
/// Upper edge of the usable intensity band.
pub const HIGH: i32 = 240;

/// Working color type of the generators.
///
/// Channels are `i32` rather than `u8` on purpose: seed channels are not
/// range-checked, and the analog walk may overshoot \[[`LOW`], [`HIGH`]\]
/// by up to one step, so intermediate values can leave \[0, 255\].
/// [`to_rgb8`] clamps a finished color for display.
pub type Rgb = RGB<i32>;

/// Clamp a scheme color to \[0, 255\] per channel.
pub fn to_rgb8(c: Rgb) -> RGB8 {
    RGB8 { r: c.r.clamp(0, 255) as u8,
           g: c.g.clamp(0, 255) as u8,
           b: c.b.clamp(0, 255) as u8 }
}

/// Starting color of a scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Seed {
    /// Start from this color.  Channels are nominally in \[0, 255\] but
    /// are not validated; out-of-range values flow through the
    /// arithmetic.
    Color(Rgb),
    /// Draw each channel uniformly from \[[`LOW`], [`HIGH`]\).
    Random,
}

impl Seed {
    pub(crate) fn resolve(self, rng: &mut dyn RngCore) -> Rgb {
        match self {
            Seed::Color(c) => c,
            Seed::Random => Rgb { r: rng.gen_range(LOW..HIGH),
                                  g: rng.gen_range(LOW..HIGH),
                                  b: rng.gen_range(LOW..HIGH) },
        }
    }
}

/// Errors reported by the scheme generators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The requested number of colors was zero.
    #[error("a color scheme needs at least one color")]
    InvalidCount,
}
