//! Mod-6 wheel candidates.
//!
//! Every prime above 3 is congruent to 1 or 5 modulo 6, so the wheel
//! emits 2 and 3 literally and then alternates steps of 2 and 4 through
//! the residues 5, 7, 11, 13, 17, 19, ... The first block of six is
//! irregular (1 is not a candidate, 2 and 3 are), so values below 6 are
//! handled explicitly.

use std::iter::{FusedIterator, Peekable};

use eratos_integers::PrimeInt;

/// Snaps `value` up to the nearest wheel residue at or above it.
///
/// Returns the candidate and whether the step after it is 2, or `None`
/// when no residue at or above `value` fits the type.
fn wheel_ceil<T: PrimeInt>(value: T) -> Option<(T, bool)> {
    let six = T::lit(6);
    let residue = (value.clone() % six).to_u8().unwrap_or(0);
    match residue {
        0 => Some((value.checked_add_lit(1)?, false)),
        1 => Some((value, false)),
        2 => Some((value.checked_add_lit(3)?, true)),
        3 => Some((value.checked_add_lit(2)?, true)),
        4 => Some((value.checked_add_lit(1)?, true)),
        _ => Some((value, true)),
    }
}

/// Snaps `value` (at least 5) down to the nearest wheel residue at or below it.
///
/// Returns the candidate and whether the step below it is 4.
fn wheel_floor<T: PrimeInt>(value: T) -> (T, bool) {
    let six = T::lit(6);
    let residue = (value.clone() % six).to_u8().unwrap_or(0);
    match residue {
        0 => (value - T::one(), true),
        1 => (value, false),
        2 => (value - T::one(), false),
        3 => (value - T::lit(2), false),
        4 => (value - T::lit(3), false),
        _ => (value, true),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Rising {
    Two,
    Three,
    Wheel,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Falling {
    Wheel,
    Three,
    Two,
    Done,
}

/// Ascending wheel candidates.
///
/// Infinite for arbitrary-precision types. Fixed-width types end at the
/// last candidate the type can hold.
#[derive(Clone, Debug)]
pub struct Ascending<T> {
    stage: Rising,
    next: Option<T>,
    step_two: bool,
}

/// Candidates `>= start_at` in ascending order: 2, 3, then every
/// integer congruent to 1 or 5 modulo 6.
#[must_use]
pub fn ascending_candidates<T: PrimeInt>(start_at: T) -> Ascending<T> {
    let stage = if start_at <= T::lit(2) {
        Rising::Two
    } else if start_at <= T::lit(3) {
        Rising::Three
    } else {
        Rising::Wheel
    };
    let first = if start_at > T::lit(5) {
        start_at
    } else {
        T::lit(5)
    };
    let (next, step_two) = match wheel_ceil(first) {
        Some((next, step_two)) => (Some(next), step_two),
        None => (None, false),
    };
    Ascending {
        stage,
        next,
        step_two,
    }
}

impl<T: PrimeInt> Iterator for Ascending<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.stage {
            Rising::Two => {
                self.stage = Rising::Three;
                Some(T::lit(2))
            }
            Rising::Three => {
                self.stage = Rising::Wheel;
                Some(T::lit(3))
            }
            Rising::Wheel => {
                let candidate = self.next.take()?;
                let step = if self.step_two { 2 } else { 4 };
                self.next = candidate.checked_add_lit(step);
                self.step_two = !self.step_two;
                Some(candidate)
            }
        }
    }
}

impl<T: PrimeInt> FusedIterator for Ascending<T> {}

/// Descending wheel candidates, ending with 3 and 2.
#[derive(Clone, Debug)]
pub struct Descending<T> {
    stage: Falling,
    next: T,
    step_four: bool,
}

impl<T: PrimeInt> Descending<T> {
    fn empty() -> Self {
        Self {
            stage: Falling::Done,
            next: T::zero(),
            step_four: false,
        }
    }
}

/// Candidates `<= start_at` in descending order. Terminates after 2.
#[must_use]
pub fn descending_candidates<T: PrimeInt>(start_at: T) -> Descending<T> {
    if start_at < T::lit(2) {
        return Descending::empty();
    }
    if start_at < T::lit(3) {
        return Descending {
            stage: Falling::Two,
            ..Descending::empty()
        };
    }
    if start_at < T::lit(5) {
        return Descending {
            stage: Falling::Three,
            ..Descending::empty()
        };
    }

    let (next, step_four) = wheel_floor(start_at);
    Descending {
        stage: Falling::Wheel,
        next,
        step_four,
    }
}

impl<T: PrimeInt> Iterator for Descending<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        match self.stage {
            Falling::Wheel => {
                let candidate = self.next.clone();
                if candidate == T::lit(5) {
                    self.stage = Falling::Three;
                } else {
                    let step = if self.step_four { T::lit(4) } else { T::lit(2) };
                    self.next = candidate.clone() - step;
                    self.step_four = !self.step_four;
                }
                Some(candidate)
            }
            Falling::Three => {
                self.stage = Falling::Two;
                Some(T::lit(3))
            }
            Falling::Two => {
                self.stage = Falling::Done;
                Some(T::lit(2))
            }
            Falling::Done => None,
        }
    }
}

impl<T: PrimeInt> FusedIterator for Descending<T> {}

/// Candidates ordered by distance from a pivot. Infinite.
///
/// Equidistant candidates come out lower first.
#[derive(Clone, Debug)]
pub struct Closest<T: PrimeInt> {
    pivot: T,
    above: Peekable<Ascending<T>>,
    below: Peekable<Descending<T>>,
}

/// Candidates interleaved above and below `pivot` in increasing
/// distance order. The pivot itself counts as above.
#[must_use]
pub fn closest_candidates<T: PrimeInt>(pivot: T) -> Closest<T> {
    let below = if pivot > T::zero() {
        descending_candidates(pivot.clone() - T::one())
    } else {
        Descending::empty()
    };
    Closest {
        above: ascending_candidates(pivot.clone()).peekable(),
        below: below.peekable(),
        pivot,
    }
}

impl<T: PrimeInt> Iterator for Closest<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let take_below = match (self.above.peek(), self.below.peek()) {
            (Some(up), Some(down)) => {
                self.pivot.clone() - down.clone() <= up.clone() - self.pivot.clone()
            }
            (None, Some(_)) => true,
            _ => false,
        };
        if take_below {
            self.below.next()
        } else {
            self.above.next()
        }
    }
}

impl<T: PrimeInt> FusedIterator for Closest<T> {}
