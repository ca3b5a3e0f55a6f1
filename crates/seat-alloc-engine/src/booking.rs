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

//! The confirmed result of a booking request.

use seat_alloc_model::index::SeatNumber;
use smallvec::SmallVec;

/// The seat numbers of one booking, inline up to a full row of the standard
/// coach.
///
/// A booking never exceeds one row's width, so for the standard coach the
/// numbers always stay on the stack.
pub type SeatNumbers = SmallVec<[SeatNumber; 8]>;

/// A confirmed booking: the assigned seat numbers in selection order, plus
/// whether the party had to be split across rows.
///
/// Bookings are normally produced by
/// [`BookingEngine::book`](crate::engine::BookingEngine::book); the numbers
/// are final and cannot be released.
///
/// # Examples
///
/// ```rust
/// use seat_alloc_engine::booking::{Booking, SeatNumbers};
/// use seat_alloc_model::index::SeatNumber;
///
/// let seats = SeatNumbers::from_slice(&[SeatNumber::new(1), SeatNumber::new(2)]);
/// let booking = Booking::same_row(seats);
/// assert_eq!(booking.num_seats(), 2);
/// assert!(booking.is_same_row());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    seat_numbers: SeatNumbers,
    split: bool,
}

impl Booking {
    /// Creates a booking whose party shares a single row.
    #[inline]
    pub fn same_row(seat_numbers: SeatNumbers) -> Self {
        Self {
            seat_numbers,
            split: false,
        }
    }

    /// Creates a booking whose party is scattered across more than one row.
    #[inline]
    pub fn split(seat_numbers: SeatNumbers) -> Self {
        Self {
            seat_numbers,
            split: true,
        }
    }

    /// Returns the assigned seat numbers in selection order.
    #[inline]
    pub fn seat_numbers(&self) -> &[SeatNumber] {
        &self.seat_numbers
    }

    /// Returns the number of seats in this booking.
    #[inline]
    pub fn num_seats(&self) -> usize {
        self.seat_numbers.len()
    }

    /// Checks if the party was split across rows.
    #[inline]
    pub fn is_split(&self) -> bool {
        self.split
    }

    /// Checks if the whole party sits in a single row.
    #[inline]
    pub fn is_same_row(&self) -> bool {
        !self.split
    }

    /// Returns an iterator over the assigned seat numbers.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, SeatNumber> {
        self.seat_numbers.iter()
    }
}

impl<'a> IntoIterator for &'a Booking {
    type Item = &'a SeatNumber;
    type IntoIter = std::slice::Iter<'a, SeatNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.seat_numbers.iter()
    }
}

impl std::fmt::Display for Booking {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Booking(seats: [")?;
        for (i, number) in self.seat_numbers.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", number)?;
        }
        write!(f, "], split: {})", self.split)
    }
}
