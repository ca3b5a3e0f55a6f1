// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! Strongly typed positions and identities for the coach seating domain.
//!
//! Three index spaces coexist in this library and are easy to confuse when
//! all of them are raw integers: the row within the coach, the seat within a
//! row, and the passenger-facing seat number printed on a ticket. Each gets
//! its own `#[repr(transparent)]` newtype so the compiler rejects accidental
//! swaps at zero runtime cost.
//!
//! Conventions:
//! - [`RowIndex`] and [`SeatIndex`] are 0-based grid coordinates.
//! - [`SeatNumber`] is the 1-based identity of a seat across the whole
//!   vehicle. It displays as the bare number, since that is what a boarding
//!   display or ticket shows.
//!
//! The mapping between the two coordinate systems lives on
//! [`CoachLayout`](crate::layout::CoachLayout), which owns the vehicle
//! dimensions needed to compute it.

/// A 0-based row position within the coach.
///
/// # Examples
///
/// ```rust
/// use seat_alloc_model::index::RowIndex;
///
/// let row = RowIndex::new(3);
/// assert_eq!(row.get(), 3);
/// assert_eq!(format!("{}", row), "RowIndex(3)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct RowIndex(usize);

impl RowIndex {
    /// Creates a new `RowIndex` from a 0-based row position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying 0-based row position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for RowIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RowIndex({})", self.0)
    }
}

impl From<usize> for RowIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<RowIndex> for usize {
    fn from(row: RowIndex) -> Self {
        row.0
    }
}

/// A 0-based seat position within a single row.
///
/// # Examples
///
/// ```rust
/// use seat_alloc_model::index::SeatIndex;
///
/// let seat = SeatIndex::new(6);
/// assert_eq!(seat.get(), 6);
/// assert_eq!(format!("{}", seat), "SeatIndex(6)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SeatIndex(usize);

impl SeatIndex {
    /// Creates a new `SeatIndex` from a 0-based in-row position.
    #[inline(always)]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the underlying 0-based in-row position.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for SeatIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeatIndex({})", self.0)
    }
}

impl From<usize> for SeatIndex {
    fn from(index: usize) -> Self {
        Self::new(index)
    }
}

impl From<SeatIndex> for usize {
    fn from(seat: SeatIndex) -> Self {
        seat.0
    }
}

/// The 1-based identity of a seat across the whole vehicle.
///
/// Seat numbers are what passengers see; they are never 0. Construction goes
/// through [`SeatNumber::new`] on purpose: a bare `From<usize>` would make it
/// too easy to smuggle a 0-based coordinate into the 1-based space.
///
/// # Examples
///
/// ```rust
/// use seat_alloc_model::index::SeatNumber;
///
/// let number = SeatNumber::new(80);
/// assert_eq!(number.get(), 80);
/// assert_eq!(format!("{}", number), "80");
/// assert_eq!(format!("{:?}", number), "SeatNumber(80)");
/// ```
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct SeatNumber(usize);

impl SeatNumber {
    /// Creates a new `SeatNumber`.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `number` is 0. Seat numbering starts at 1.
    #[inline(always)]
    pub fn new(number: usize) -> Self {
        debug_assert!(
            number >= 1,
            "called `SeatNumber::new` with 0: seat numbering starts at 1"
        );

        Self(number)
    }

    /// Returns the underlying 1-based seat number.
    #[inline(always)]
    pub const fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for SeatNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<SeatNumber> for usize {
    fn from(number: SeatNumber) -> Self {
        number.0
    }
}
