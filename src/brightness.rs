//! Brightness scheme: lighten a base color toward white.
//!
//! Hue is preserved; each channel only gains the same share of its
//! remaining headroom, so saturation fades while the base color stays
//! recognisable.

use rand::RngCore;

use crate::{Error, Rgb, Seed};

/// Ceiling of every channel.
const MAX: i32 = 255;

/// Configuration of [`brightness_scheme`].
#[derive(Debug, Clone, Copy)]
pub struct BrightnessOptions {
    /// In gradient mode (`complex`): the number of lightening steps,
    /// truncated to an integer.  In single-color mode: the lightening
    /// amount, read as a percentage when `> 1` and as a fraction of the
    /// remaining headroom when `≤ 1`.
    pub count: f64,
    /// Emit a whole base-to-white gradient instead of one color.
    pub complex: bool,
    /// When false, the gradient is emitted white-first.  Single-color
    /// mode ignores it.
    pub forward: bool,
    /// Base color.
    pub seed: Seed,
}

/// An exact-size iterator over the colors of a base-to-white gradient.
///
/// A ramp of `steps` steps yields `steps + 1` colors: the base color,
/// then one color per integer step `(255 - base) / steps` on each
/// channel, capped at 255.  When any channel has no headroom left for a
/// positive step, the ramp is empty.
#[derive(Debug, Clone)]
pub struct BrightnessRamp {
    base: Rgb,
    d: Rgb, // per-channel step
    i: usize, // first position to be consumed (i ≤ j)
    j: usize, // last position to be consumed
}

impl BrightnessRamp {
    /// Build a ramp of `steps` lightening steps from `base`.
    pub fn new(base: Rgb, steps: usize) -> Result<Self, Error> {
        if steps == 0 {
            return Err(Error::InvalidCount);
        }
        let n = i32::try_from(steps).unwrap_or(i32::MAX);
        let d = Rgb { r: (MAX - base.r) / n,
                      g: (MAX - base.g) / n,
                      b: (MAX - base.b) / n };
        log::trace!("brightness ramp: base {base:?}, steps {steps}, d {d:?}");
        if d.r <= 0 || d.g <= 0 || d.b <= 0 {
            // Too many steps for the remaining headroom: a documented
            // degenerate case yielding no colors.
            Ok(BrightnessRamp { base, d, i: 1, j: 0 })
        } else {
            Ok(BrightnessRamp { base, d, i: 0, j: steps })
        }
    }

    /// Color at position `k` (assuming `k` is in `0 ..= steps`).
    fn rgb(&self, k: usize) -> Rgb {
        let k = k as i32;
        Rgb { r: (self.base.r + k * self.d.r).min(MAX),
              g: (self.base.g + k * self.d.g).min(MAX),
              b: (self.base.b + k * self.d.b).min(MAX) }
    }
}

impl Iterator for BrightnessRamp {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        if self.i > self.j {
            return None;
        }
        let c = self.rgb(self.i);
        self.i += 1;
        Some(c)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.j + 1 - self.i;
        (len, Some(len))
    }
}

impl ExactSizeIterator for BrightnessRamp {}

impl DoubleEndedIterator for BrightnessRamp {
    fn next_back(&mut self) -> Option<Rgb> {
        if self.i > self.j {
            return None;
        }
        let c = self.rgb(self.j);
        if self.j == 0 {
            self.i = 1;
        } else {
            self.j -= 1;
        }
        Some(c)
    }
}

/// Lighten `base` by `amount`: a percentage when `amount > 1`, a
/// fraction of the remaining headroom when `amount ≤ 1`.  Each channel
/// gains `trunc(frac * (255 - v))`, capped at 255.
fn lighten(base: Rgb, amount: f64) -> Rgb {
    let frac = if amount > 1.0 { amount / 100.0 } else { amount };
    let chan = |v: i32| (v + (frac * (MAX - v) as f64) as i32).min(MAX);
    Rgb { r: chan(base.r), g: chan(base.g), b: chan(base.b) }
}

/// Generate a brightness scheme.
///
/// Gradient mode returns `count + 1` colors from the base color to
/// white (or the empty sequence when a channel lacks headroom, see
/// [`BrightnessRamp`]); single-color mode returns exactly one lightened
/// color.
///
/// ```
/// use color_schemer::{brightness_scheme, BrightnessOptions, Rgb, Seed};
///
/// let opts = BrightnessOptions {
///     count: 5.0,
///     complex: true,
///     forward: true,
///     seed: Seed::Color(Rgb { r: 100, g: 100, b: 100 }),
/// };
/// let colors = brightness_scheme(&opts, &mut rand::thread_rng())?;
/// assert_eq!(colors.len(), 6);
/// assert_eq!(colors[5], Rgb { r: 255, g: 255, b: 255 });
/// # Ok::<(), color_schemer::Error>(())
/// ```
pub fn brightness_scheme(opts: &BrightnessOptions,
                         rng: &mut dyn RngCore) -> Result<Vec<Rgb>, Error> {
    let base = opts.seed.resolve(rng);
    if opts.complex {
        let ramp = BrightnessRamp::new(base, opts.count as usize)?;
        if opts.forward {
            Ok(ramp.collect())
        } else {
            Ok(ramp.rev().collect())
        }
    } else {
        Ok(vec![lighten(base, opts.count)])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn rng() -> StdRng { StdRng::seed_from_u64(0xB00) }

    fn gray(v: i32) -> Rgb { Rgb { r: v, g: v, b: v } }

    fn opts(count: f64, complex: bool, seed: Rgb) -> BrightnessOptions {
        BrightnessOptions { count, complex, forward: true,
                            seed: Seed::Color(seed) }
    }

    #[test]
    fn gradient_from_gray_100_in_5_steps() {
        let colors =
            brightness_scheme(&opts(5.0, true, gray(100)), &mut rng())
                .unwrap();
        // floor(155 / 5) = 31 per channel.
        let expected: Vec<_> =
            [100, 131, 162, 193, 224, 255].map(gray).to_vec();
        assert_eq!(colors, expected);
    }

    #[test]
    fn uneven_division_stops_short_of_white() {
        // floor(155 / 7) = 22, so the ramp tops out at 100 + 7 * 22.
        let colors =
            brightness_scheme(&opts(7.0, true, gray(100)), &mut rng())
                .unwrap();
        assert_eq!(colors.len(), 8);
        assert_eq!(colors[7], gray(254));
        for c in &colors {
            assert!(c.r <= 255 && c.g <= 255 && c.b <= 255);
        }
    }

    #[test]
    fn exhausted_headroom_yields_no_colors() {
        // floor((255 - 253) / 5) = 0 on every channel.
        let colors =
            brightness_scheme(&opts(5.0, true, gray(253)), &mut rng())
                .unwrap();
        assert!(colors.is_empty());
    }

    #[test]
    fn one_flat_channel_empties_the_whole_gradient() {
        let base = Rgb { r: 100, g: 100, b: 255 };
        let colors =
            brightness_scheme(&opts(5.0, true, base), &mut rng()).unwrap();
        assert!(colors.is_empty());
    }

    #[test]
    fn tight_headroom_still_ramps() {
        // floor((255 - 253) / 1) = 2 > 0.
        let colors =
            brightness_scheme(&opts(1.0, true, gray(253)), &mut rng())
                .unwrap();
        assert_eq!(colors, vec![gray(253), gray(255)]);
    }

    #[test]
    fn zero_steps_is_rejected() {
        let e = brightness_scheme(&opts(0.0, true, gray(10)), &mut rng());
        assert_eq!(e, Err(Error::InvalidCount));
        // A fractional count below one step truncates to zero.
        let e = brightness_scheme(&opts(0.7, true, gray(10)), &mut rng());
        assert_eq!(e, Err(Error::InvalidCount));
    }

    #[test]
    fn backward_gradient_is_the_exact_reverse() {
        let forward =
            brightness_scheme(&opts(4.0, true, gray(60)), &mut rng())
                .unwrap();
        let mut o = opts(4.0, true, gray(60));
        o.forward = false;
        let backward = brightness_scheme(&o, &mut rng()).unwrap();
        let mut reversed = forward.clone();
        reversed.reverse();
        assert_eq!(backward, reversed);
        // floor(195 / 4) = 48, so the lightest color is 60 + 4 * 48.
        assert_eq!(backward[0], gray(252));
    }

    #[test]
    fn percentage_lightening() {
        let colors =
            brightness_scheme(&opts(50.0, false, gray(100)), &mut rng())
                .unwrap();
        // 100 + trunc(0.5 * 155) = 177.
        assert_eq!(colors, vec![gray(177)]);
    }

    #[test]
    fn fraction_and_percentage_agree_at_the_branch() {
        let pct =
            brightness_scheme(&opts(50.0, false, gray(100)), &mut rng())
                .unwrap();
        let frac =
            brightness_scheme(&opts(0.5, false, gray(100)), &mut rng())
                .unwrap();
        assert_eq!(pct, frac);
        assert_eq!(pct, vec![gray(177)]);
    }

    #[test]
    fn full_lightening_reaches_white() {
        let colors =
            brightness_scheme(&opts(100.0, false, gray(31)), &mut rng())
                .unwrap();
        assert_eq!(colors, vec![gray(255)]);
    }

    #[test]
    fn single_color_ignores_forward() {
        let mut o = opts(25.0, false, gray(40));
        o.forward = false;
        let colors = brightness_scheme(&o, &mut rng()).unwrap();
        // 40 + trunc(0.25 * 215) = 93.
        assert_eq!(colors, vec![gray(93)]);
    }

    #[test]
    fn random_base_stays_in_band_and_reproduces() {
        let o = BrightnessOptions { count: 3.0, complex: true,
                                    forward: true, seed: Seed::Random };
        let a = brightness_scheme(&o, &mut StdRng::seed_from_u64(5))
            .unwrap();
        let b = brightness_scheme(&o, &mut StdRng::seed_from_u64(5))
            .unwrap();
        assert_eq!(a, b);
        if let Some(first) = a.first() {
            for v in [first.r, first.g, first.b] {
                assert!((crate::LOW..crate::HIGH).contains(&v));
            }
        }
    }

    #[test]
    fn ramp_is_double_ended_and_exact_size() {
        let mut ramp = BrightnessRamp::new(gray(0), 5).unwrap();
        assert_eq!(ramp.len(), 6);
        assert_eq!(ramp.next(), Some(gray(0)));
        assert_eq!(ramp.next_back(), Some(gray(255)));
        assert_eq!(ramp.len(), 4);
        assert_eq!(ramp.last(), Some(gray(204)));
    }
}
