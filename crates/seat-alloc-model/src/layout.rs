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

//! The geometry of a coach: how many seats it has, how they are arranged
//! into rows, and the bijection between grid coordinates and the 1-based
//! seat numbers passengers see.
//!
//! A [`CoachLayout`] is validated once at construction and is immutable for
//! the lifetime of the allocator built on top of it. The last row may be
//! shorter than the others when the total seat count is not divisible by the
//! row width; the standard 80-seat coach has 11 full rows of 7 and a tail
//! row of 3.

use crate::index::{RowIndex, SeatIndex, SeatNumber};

/// Total seat count of the standard coach.
pub const STANDARD_TOTAL_SEATS: usize = 80;

/// Width of a full row in the standard coach.
pub const STANDARD_SEATS_PER_ROW: usize = 7;

/// An error describing why a pair of coach dimensions is invalid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// The total seat count was 0.
    ZeroTotalSeats,
    /// The row width was 0.
    ZeroSeatsPerRow,
    /// The row width exceeds the total seat count, so not even one
    /// full-width row fits into the coach.
    RowExceedsCoach {
        /// The rejected row width.
        seats_per_row: usize,
        /// The total seat count it was checked against.
        total_seats: usize,
    },
}

impl std::fmt::Display for LayoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ZeroTotalSeats => write!(f, "Total seat count must be a positive integer"),
            Self::ZeroSeatsPerRow => write!(f, "Row width must be a positive integer"),
            Self::RowExceedsCoach {
                seats_per_row,
                total_seats,
            } => write!(
                f,
                "Row width {} exceeds the total seat count {}",
                seats_per_row, total_seats
            ),
        }
    }
}

impl std::error::Error for LayoutError {}

/// The validated, immutable dimensions of a coach.
///
/// Rows are indexed `0..num_rows()`. Every row except possibly the last has
/// `seats_per_row` seats; the last row holds the remainder when the total
/// seat count is not an exact multiple of the row width.
///
/// # Examples
///
/// ```rust
/// use seat_alloc_model::layout::CoachLayout;
/// use seat_alloc_model::index::RowIndex;
///
/// let layout = CoachLayout::standard();
/// assert_eq!(layout.total_seats(), 80);
/// assert_eq!(layout.num_rows(), 12);
/// assert_eq!(layout.row_len(RowIndex::new(0)), 7);
/// assert_eq!(layout.row_len(RowIndex::new(11)), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CoachLayout {
    total_seats: usize,
    seats_per_row: usize,
    full_row_count: usize,
    last_row_len: usize,
}

impl CoachLayout {
    /// Creates a new `CoachLayout` from a total seat count and a row width.
    ///
    /// Both dimensions must be positive and the row width must not exceed
    /// the total seat count.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seat_alloc_model::layout::{CoachLayout, LayoutError};
    ///
    /// let layout = CoachLayout::new(80, 7).unwrap();
    /// assert_eq!(layout.full_row_count(), 11);
    /// assert_eq!(layout.last_row_len(), 3);
    ///
    /// assert_eq!(CoachLayout::new(0, 7), Err(LayoutError::ZeroTotalSeats));
    /// ```
    pub fn new(total_seats: usize, seats_per_row: usize) -> Result<Self, LayoutError> {
        if total_seats == 0 {
            return Err(LayoutError::ZeroTotalSeats);
        }
        if seats_per_row == 0 {
            return Err(LayoutError::ZeroSeatsPerRow);
        }
        if seats_per_row > total_seats {
            return Err(LayoutError::RowExceedsCoach {
                seats_per_row,
                total_seats,
            });
        }

        Ok(Self {
            total_seats,
            seats_per_row,
            full_row_count: total_seats / seats_per_row,
            last_row_len: total_seats % seats_per_row,
        })
    }

    /// Creates the standard 80-seat coach with rows of 7.
    #[inline]
    pub fn standard() -> Self {
        Self::new(STANDARD_TOTAL_SEATS, STANDARD_SEATS_PER_ROW)
            .expect("standard coach dimensions are valid")
    }

    /// Returns the total number of seats in the coach.
    #[inline(always)]
    pub const fn total_seats(&self) -> usize {
        self.total_seats
    }

    /// Returns the width of a full row.
    #[inline(always)]
    pub const fn seats_per_row(&self) -> usize {
        self.seats_per_row
    }

    /// Returns the number of full-width rows.
    #[inline(always)]
    pub const fn full_row_count(&self) -> usize {
        self.full_row_count
    }

    /// Returns the length of the partial last row, or 0 when the total seat
    /// count divides evenly into full rows.
    #[inline(always)]
    pub const fn last_row_len(&self) -> usize {
        self.last_row_len
    }

    /// Returns `true` if the coach ends in a row shorter than the others.
    #[inline(always)]
    pub const fn has_partial_row(&self) -> bool {
        self.last_row_len > 0
    }

    /// Returns the number of rows, counting the partial last row if present.
    #[inline(always)]
    pub const fn num_rows(&self) -> usize {
        self.full_row_count + (self.last_row_len > 0) as usize
    }

    /// Returns the number of seats in the given row.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `row` is out of bounds `0..num_rows`.
    #[inline]
    pub fn row_len(&self, row: RowIndex) -> usize {
        let num_rows = self.num_rows();
        debug_assert!(
            row.get() < num_rows,
            "called `CoachLayout::row_len` with a row index out of bounds: the row count is {} but the index is {}",
            num_rows,
            row.get()
        );

        if row.get() < self.full_row_count {
            self.seats_per_row
        } else {
            self.last_row_len
        }
    }

    /// Maps a grid coordinate to its 1-based seat number, or `None` when the
    /// computed number falls past the end of the coach.
    ///
    /// The number is `row * seats_per_row + seat + 1`; the single upper
    /// bound is what keeps the short last row honest, since its missing
    /// trailing coordinates compute to numbers beyond `total_seats()`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seat_alloc_model::layout::CoachLayout;
    /// use seat_alloc_model::index::{RowIndex, SeatIndex};
    ///
    /// let layout = CoachLayout::standard();
    /// let number = layout
    ///     .seat_number(RowIndex::new(11), SeatIndex::new(2))
    ///     .unwrap();
    /// assert_eq!(number.get(), 80);
    /// assert_eq!(
    ///     layout.seat_number(RowIndex::new(11), SeatIndex::new(3)),
    ///     None
    /// );
    /// ```
    #[inline]
    pub fn seat_number(&self, row: RowIndex, seat: SeatIndex) -> Option<SeatNumber> {
        let number = row.get() * self.seats_per_row + seat.get() + 1;
        if number > self.total_seats {
            return None;
        }

        Some(SeatNumber::new(number))
    }

    /// Maps a 1-based seat number back to its grid coordinate, or `None`
    /// when the number lies outside `[1, total_seats]`.
    #[inline]
    pub fn position_of(&self, number: SeatNumber) -> Option<(RowIndex, SeatIndex)> {
        let n = number.get();
        if n == 0 || n > self.total_seats {
            return None;
        }

        let zero_based = n - 1;
        Some((
            RowIndex::new(zero_based / self.seats_per_row),
            SeatIndex::new(zero_based % self.seats_per_row),
        ))
    }
}

impl std::fmt::Display for CoachLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} seats in {} rows ({} per full row)",
            self.total_seats,
            self.num_rows(),
            self.seats_per_row
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ri(i: usize) -> RowIndex {
        RowIndex::new(i)
    }

    fn si(i: usize) -> SeatIndex {
        SeatIndex::new(i)
    }

    #[test]
    fn test_new_rejects_zero_total_seats() {
        assert_eq!(CoachLayout::new(0, 7), Err(LayoutError::ZeroTotalSeats));
    }

    #[test]
    fn test_new_rejects_zero_row_width() {
        assert_eq!(CoachLayout::new(80, 0), Err(LayoutError::ZeroSeatsPerRow));
    }

    #[test]
    fn test_new_rejects_row_wider_than_coach() {
        assert_eq!(
            CoachLayout::new(5, 7),
            Err(LayoutError::RowExceedsCoach {
                seats_per_row: 7,
                total_seats: 5
            })
        );
    }

    #[test]
    fn test_standard_dimensions() {
        let layout = CoachLayout::standard();
        assert_eq!(layout.total_seats(), 80);
        assert_eq!(layout.seats_per_row(), 7);
        assert_eq!(layout.full_row_count(), 11);
        assert_eq!(layout.last_row_len(), 3);
        assert_eq!(layout.num_rows(), 12);
        assert!(layout.has_partial_row());
    }

    #[test]
    fn test_exact_division_has_no_partial_row() {
        let layout = CoachLayout::new(14, 7).unwrap();
        assert_eq!(layout.full_row_count(), 2);
        assert_eq!(layout.last_row_len(), 0);
        assert_eq!(layout.num_rows(), 2);
        assert!(!layout.has_partial_row());
    }

    #[test]
    fn test_row_len_distinguishes_full_and_partial_rows() {
        let layout = CoachLayout::standard();
        assert_eq!(layout.row_len(ri(0)), 7);
        assert_eq!(layout.row_len(ri(10)), 7);
        assert_eq!(layout.row_len(ri(11)), 3);
    }

    #[test]
    #[should_panic(expected = "the row count is 12 but the index is 12")]
    fn test_row_len_panics_out_of_bounds() {
        let layout = CoachLayout::standard();
        let _ = layout.row_len(ri(12));
    }

    #[test]
    fn test_seat_number_walks_the_grid_row_major() {
        let layout = CoachLayout::standard();
        assert_eq!(layout.seat_number(ri(0), si(0)).unwrap().get(), 1);
        assert_eq!(layout.seat_number(ri(0), si(6)).unwrap().get(), 7);
        assert_eq!(layout.seat_number(ri(1), si(0)).unwrap().get(), 8);
        assert_eq!(layout.seat_number(ri(11), si(0)).unwrap().get(), 78);
        assert_eq!(layout.seat_number(ri(11), si(2)).unwrap().get(), 80);
    }

    #[test]
    fn test_seat_number_rejects_past_the_last_seat() {
        let layout = CoachLayout::standard();
        assert_eq!(layout.seat_number(ri(11), si(3)), None);
        assert_eq!(layout.seat_number(ri(12), si(0)), None);
    }

    #[test]
    fn test_position_of_inverts_seat_number_for_every_seat() {
        let layout = CoachLayout::standard();
        for row in 0..layout.num_rows() {
            for seat in 0..layout.row_len(ri(row)) {
                let number = layout.seat_number(ri(row), si(seat)).unwrap();
                assert_eq!(layout.position_of(number), Some((ri(row), si(seat))));
            }
        }
    }

    #[test]
    fn test_position_of_rejects_out_of_range_numbers() {
        let layout = CoachLayout::standard();
        assert_eq!(layout.position_of(SeatNumber::new(81)), None);
        assert_eq!(
            layout.position_of(SeatNumber::new(80)),
            Some((ri(11), si(2)))
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(
            format!("{}", LayoutError::ZeroTotalSeats),
            "Total seat count must be a positive integer"
        );
        assert_eq!(
            format!("{}", LayoutError::ZeroSeatsPerRow),
            "Row width must be a positive integer"
        );
        assert_eq!(
            format!(
                "{}",
                LayoutError::RowExceedsCoach {
                    seats_per_row: 9,
                    total_seats: 4
                }
            ),
            "Row width 9 exceeds the total seat count 4"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(
            format!("{}", CoachLayout::standard()),
            "80 seats in 12 rows (7 per full row)"
        );
    }
}
