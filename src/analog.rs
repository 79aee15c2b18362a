//! Analog scheme: a stepping walk over the surface of the RGB cube.
//!
//! One channel (the *pivot*) moves per emitted color.  The pivot climbs
//! toward [`HIGH`] and, once it can no longer take a full step, descends;
//! when it comes within one step of [`LOW`] the walk hands the pivot to
//! the next channel of the rotation and starts climbing again.

use rand::RngCore;

use crate::{Error, Rgb, Seed, HIGH, LOW};

/// Smallest admissible distance between consecutive colors.
const STEP_MIN: i32 = 35;
/// Largest admissible distance between consecutive colors.
const STEP_MAX: i32 = 120;

/// One RGB channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    R,
    G,
    B,
}

impl Channel {
    /// The channel the walk pivots to next: R → B → G → R.
    ///
    /// Deliberately not the component order R → G → B; changing the
    /// rotation changes the traversal path over the cube surface.
    pub fn next(self) -> Channel {
        match self {
            Channel::R => Channel::B,
            Channel::B => Channel::G,
            Channel::G => Channel::R,
        }
    }

    fn get(self, c: &Rgb) -> i32 {
        match self {
            Channel::R => c.r,
            Channel::G => c.g,
            Channel::B => c.b,
        }
    }

    fn set(self, c: &mut Rgb, v: i32) {
        match self {
            Channel::R => c.r = v,
            Channel::G => c.g = v,
            Channel::B => c.b = v,
        }
    }
}

/// Distance from `v` to the farther of the two band boundaries.
fn boundary_distance(v: i32) -> i32 {
    (HIGH - v).max(v - LOW)
}

/// Channel with the most room to move, i.e. maximising
/// [`boundary_distance`].  Among equal maxima the last channel in
/// R, G, B order wins.
fn starting_pivot(c: &Rgb) -> Channel {
    let mut pivot = Channel::R;
    let mut best = i32::MIN;
    for ch in [Channel::R, Channel::G, Channel::B] {
        let d = boundary_distance(ch.get(c));
        if d >= best {
            best = d;
            pivot = ch;
        }
    }
    pivot
}

/// Distance between consecutive colors for a walk of `count` colors.
fn step_size(count: usize) -> i32 {
    let count = i32::try_from(count).unwrap_or(i32::MAX);
    ((HIGH - LOW) / count).clamp(STEP_MIN, STEP_MAX)
}

/// The analog-scheme state machine, exposed as an iterator.
///
/// Yields exactly `count` colors.  The first is the seed; every later
/// color differs from its predecessor in exactly one channel, by exactly
/// [`step`](Self::step).
///
/// ```
/// use color_schemer::{AnalogWalk, Rgb, Seed};
///
/// let seed = Seed::Color(Rgb { r: 40, g: 200, b: 90 });
/// let walk = AnalogWalk::new(5, seed, &mut rand::thread_rng())?;
/// assert_eq!(walk.len(), 5);
/// # Ok::<(), color_schemer::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct AnalogWalk {
    current: Rgb,
    pivot: Channel,
    increasing: bool,
    step: i32,
    i: usize, // colors yielded so far
    count: usize,
}

impl AnalogWalk {
    /// Set up a walk of `count` colors starting from `seed`.
    ///
    /// `rng` is only consulted for [`Seed::Random`].
    pub fn new(count: usize, seed: Seed,
               rng: &mut dyn RngCore) -> Result<Self, Error> {
        if count == 0 {
            return Err(Error::InvalidCount);
        }
        let current = seed.resolve(rng);
        let step = step_size(count);
        let pivot = starting_pivot(&current);
        log::trace!("analog walk: start {:?}, step {step}, pivot {pivot:?}",
                    current);
        Ok(AnalogWalk { current, pivot, increasing: true, step, i: 0, count })
    }

    /// Channel currently being stepped.
    pub fn pivot(&self) -> Channel { self.pivot }

    /// Whether the current pivot is climbing toward [`HIGH`].
    pub fn increasing(&self) -> bool { self.increasing }

    /// Distance between consecutive colors on the stepped channel.
    pub fn step(&self) -> i32 { self.step }

    /// One transition: move the pivot channel and, on reaching a band
    /// boundary, hand the pivot to the next channel of the rotation.
    fn advance(&mut self) {
        let s = self.step;
        let v = self.pivot.get(&self.current);
        if v <= HIGH - s && self.increasing {
            self.pivot.set(&mut self.current, v + s);
            if v + s > HIGH - s {
                // within one step of the ceiling
                self.pivot = self.pivot.next();
                self.increasing = true;
            }
        } else {
            self.pivot.set(&mut self.current, v - s);
            self.increasing = false;
            if v - s - s <= LOW {
                // next step would cross the floor
                self.pivot = self.pivot.next();
                self.increasing = true;
            }
        }
    }
}

impl Iterator for AnalogWalk {
    type Item = Rgb;

    fn next(&mut self) -> Option<Rgb> {
        if self.i >= self.count {
            return None;
        }
        if self.i > 0 {
            self.advance();
        }
        self.i += 1;
        Some(self.current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.count - self.i;
        (len, Some(len))
    }
}

impl ExactSizeIterator for AnalogWalk {}

/// Generate `count` analog colors.
///
/// Fixed seed channels should be nominal 0–255 values; they are not
/// validated, and out-of-range values flow through the arithmetic.
pub fn analog_scheme(count: usize, seed: Seed,
                     rng: &mut dyn RngCore) -> Result<Vec<Rgb>, Error> {
    Ok(AnalogWalk::new(count, seed, rng)?.collect())
}
