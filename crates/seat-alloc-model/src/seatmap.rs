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

//! Occupancy tracking for every seat in the coach.
//!
//! This module provides `SeatMap`, a compact, mutable container recording
//! which seats are taken. One `FixedBitSet` per row, sized to that row's
//! length, with a set bit meaning occupied.
//!
//! Key responsibilities:
//! - Answer per-seat occupancy queries and per-row free counts.
//! - Maintain the cached total of occupied seats so `free_seat_count` is
//!   O(1) regardless of coach size.
//! - Iterate the free seats of a row in ascending order ([`FreeSeats`]).
//!
//! Seats only ever move from free to occupied; there is no release
//! operation. Debug assertions catch out-of-bounds coordinates and
//! double-occupation in debug builds.

use crate::{
    index::{RowIndex, SeatIndex},
    layout::CoachLayout,
};
use fixedbitset::FixedBitSet;

/// A mutable occupancy grid over a [`CoachLayout`].
///
/// Rows mirror the layout: every row except possibly the last spans the full
/// row width, the last row may be shorter. The map starts with every seat
/// free and caches the occupied-seat count.
///
/// Invariants (debug-checked):
/// - `occupied <= layout.total_seats()`
/// - `occupied` equals the number of set bits across all rows.
///
/// # Examples
///
/// ```rust
/// use seat_alloc_model::layout::CoachLayout;
/// use seat_alloc_model::seatmap::SeatMap;
/// use seat_alloc_model::index::{RowIndex, SeatIndex};
///
/// let mut map = SeatMap::new(CoachLayout::standard());
/// assert_eq!(map.free_seat_count(), 80);
///
/// map.occupy(RowIndex::new(0), SeatIndex::new(0));
/// assert!(map.is_occupied(RowIndex::new(0), SeatIndex::new(0)));
/// assert_eq!(map.free_seat_count(), 79);
/// ```
#[derive(Debug, Clone)]
pub struct SeatMap {
    layout: CoachLayout,
    rows: Vec<FixedBitSet>,
    occupied: usize,
}

impl SeatMap {
    /// Creates a new `SeatMap` with every seat free.
    #[inline]
    pub fn new(layout: CoachLayout) -> Self {
        let rows = (0..layout.num_rows())
            .map(|row| FixedBitSet::with_capacity(layout.row_len(RowIndex::new(row))))
            .collect();

        Self {
            layout,
            rows,
            occupied: 0,
        }
    }

    /// Returns the layout this map is built over.
    #[inline]
    pub fn layout(&self) -> &CoachLayout {
        &self.layout
    }

    /// Returns the number of rows in this map.
    #[inline]
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Returns the number of seats in the given row.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `row` is out of bounds `0..num_rows`.
    #[inline]
    pub fn row_len(&self, row: RowIndex) -> usize {
        let r = row.get();
        debug_assert!(
            r < self.rows.len(),
            "called `SeatMap::row_len` with a row index out of bounds: the row count is {} but the index is {}",
            self.rows.len(),
            r
        );

        self.rows[r].len()
    }

    /// Returns an iterator over all row indices in ascending order.
    ///
    /// The iterator owns its bounds and does not borrow the map, so callers
    /// may occupy seats while walking the rows.
    #[inline]
    pub fn row_indices(&self) -> impl Iterator<Item = RowIndex> {
        (0..self.rows.len()).map(RowIndex::new)
    }

    /// Checks if the specified seat is occupied.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `row` or `seat` is out of bounds.
    #[inline]
    pub fn is_occupied(&self, row: RowIndex, seat: SeatIndex) -> bool {
        let r = row.get();
        debug_assert!(
            r < self.rows.len(),
            "called `SeatMap::is_occupied` with a row index out of bounds: the row count is {} but the index is {}",
            self.rows.len(),
            r
        );
        let bits = &self.rows[r];
        debug_assert!(
            seat.get() < bits.len(),
            "called `SeatMap::is_occupied` with a seat index out of bounds: the row length is {} but the index is {}",
            bits.len(),
            seat.get()
        );

        bits.contains(seat.get())
    }

    /// Marks the specified seat as occupied.
    ///
    /// # Panics
    ///
    /// Panics if `seat` is out of bounds for `row`. In debug mode, also
    /// panics if `row` is out of bounds or the seat is already occupied.
    #[inline]
    pub fn occupy(&mut self, row: RowIndex, seat: SeatIndex) {
        let r = row.get();
        debug_assert!(
            r < self.rows.len(),
            "called `SeatMap::occupy` with a row index out of bounds: the row count is {} but the index is {}",
            self.rows.len(),
            r
        );
        let bits = &mut self.rows[r];
        debug_assert!(
            seat.get() < bits.len(),
            "called `SeatMap::occupy` with a seat index out of bounds: the row length is {} but the index is {}",
            bits.len(),
            seat.get()
        );
        debug_assert!(
            !bits.contains(seat.get()),
            "called `SeatMap::occupy` with seat ({}, {}) already occupied",
            r,
            seat.get()
        );

        // `put` reports the previous value, so the cached counter stays
        // exact even if a release build repeats an occupation.
        let was_occupied = bits.put(seat.get());
        if !was_occupied {
            self.occupied += 1;
        }

        debug_assert!(self.occupied <= self.layout.total_seats());
    }

    /// Returns the number of occupied seats in the whole coach.
    #[inline]
    pub fn occupied_seat_count(&self) -> usize {
        self.occupied
    }

    /// Returns the number of free seats in the whole coach.
    #[inline]
    pub fn free_seat_count(&self) -> usize {
        self.layout.total_seats() - self.occupied
    }

    /// Checks if every seat in the coach is occupied.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.occupied == self.layout.total_seats()
    }

    /// Returns the number of free seats in the given row.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `row` is out of bounds `0..num_rows`.
    #[inline]
    pub fn row_free_count(&self, row: RowIndex) -> usize {
        let r = row.get();
        debug_assert!(
            r < self.rows.len(),
            "called `SeatMap::row_free_count` with a row index out of bounds: the row count is {} but the index is {}",
            self.rows.len(),
            r
        );
        let bits = &self.rows[r];

        bits.len() - bits.count_ones(..)
    }

    /// Returns an iterator over the free seats of the given row in ascending
    /// order.
    ///
    /// # Panics
    ///
    /// In debug mode, panics if `row` is out of bounds `0..num_rows`.
    #[inline]
    pub fn free_seats_in_row(&self, row: RowIndex) -> FreeSeats<'_> {
        let r = row.get();
        debug_assert!(
            r < self.rows.len(),
            "called `SeatMap::free_seats_in_row` with a row index out of bounds: the row count is {} but the index is {}",
            self.rows.len(),
            r
        );
        let bits = &self.rows[r];

        FreeSeats {
            bits,
            cursor: 0,
            len: bits.len(),
        }
    }
}

impl std::fmt::Display for SeatMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "Seat Map ({} free / {} total)",
            self.free_seat_count(),
            self.layout.total_seats()
        )?;
        for row in self.row_indices() {
            write!(f, "   Row {:>2}:", row.get())?;
            for seat in 0..self.row_len(row) {
                let cell = if self.is_occupied(row, SeatIndex::new(seat)) {
                    "[X]"
                } else {
                    "[ ]"
                };
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

/// An iterator over the free seats of a single row in ascending order.
///
/// # Examples
///
/// ```rust
/// use seat_alloc_model::layout::CoachLayout;
/// use seat_alloc_model::seatmap::SeatMap;
/// use seat_alloc_model::index::{RowIndex, SeatIndex};
///
/// let mut map = SeatMap::new(CoachLayout::standard());
/// map.occupy(RowIndex::new(0), SeatIndex::new(1));
///
/// let free: Vec<usize> = map
///     .free_seats_in_row(RowIndex::new(0))
///     .map(|seat| seat.get())
///     .collect();
/// assert_eq!(free, vec![0, 2, 3, 4, 5, 6]);
/// ```
pub struct FreeSeats<'a> {
    bits: &'a FixedBitSet,
    cursor: usize,
    len: usize,
}

impl<'a> Iterator for FreeSeats<'a> {
    type Item = SeatIndex;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.cursor < self.len {
            let index = self.cursor;
            self.cursor += 1;
            if !self.bits.contains(index) {
                return Some(SeatIndex::new(index));
            }
        }

        None
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.len - self.cursor))
    }
}

impl<'a> std::iter::FusedIterator for FreeSeats<'a> {}

#[cfg(test)]
mod tests {
    use super::*;

    // Helper constructors for indices
    fn ri(i: usize) -> RowIndex {
        RowIndex::new(i)
    }
    fn si(i: usize) -> SeatIndex {
        SeatIndex::new(i)
    }

    fn standard_map() -> SeatMap {
        SeatMap::new(CoachLayout::standard())
    }

    #[test]
    fn test_new_initial_state_and_sizes() {
        let map = standard_map();

        assert_eq!(map.num_rows(), 12);
        assert_eq!(map.row_len(ri(0)), 7);
        assert_eq!(map.row_len(ri(11)), 3);
        assert_eq!(map.occupied_seat_count(), 0);
        assert_eq!(map.free_seat_count(), 80);
        assert!(!map.is_full());

        for row in map.row_indices() {
            assert_eq!(map.row_free_count(row), map.row_len(row));
            for seat in 0..map.row_len(row) {
                assert!(!map.is_occupied(row, si(seat)));
            }
        }
    }

    #[test]
    fn test_occupy_updates_counts() {
        let mut map = standard_map();

        map.occupy(ri(0), si(0));
        map.occupy(ri(0), si(3));
        map.occupy(ri(11), si(2));

        assert!(map.is_occupied(ri(0), si(0)));
        assert!(map.is_occupied(ri(0), si(3)));
        assert!(map.is_occupied(ri(11), si(2)));
        assert!(!map.is_occupied(ri(0), si(1)));

        assert_eq!(map.occupied_seat_count(), 3);
        assert_eq!(map.free_seat_count(), 77);
        assert_eq!(map.row_free_count(ri(0)), 5);
        assert_eq!(map.row_free_count(ri(11)), 2);
        assert_eq!(map.row_free_count(ri(5)), 7);
    }

    #[test]
    #[should_panic(expected = "already occupied")]
    fn test_occupy_twice_panics_in_debug() {
        let mut map = standard_map();
        map.occupy(ri(2), si(4));
        map.occupy(ri(2), si(4));
    }

    #[test]
    #[should_panic(expected = "the row count is 12 but the index is 12")]
    fn test_is_occupied_panics_out_of_bounds_row() {
        let map = standard_map();
        let _ = map.is_occupied(ri(12), si(0));
    }

    #[test]
    #[should_panic(expected = "the row length is 3 but the index is 3")]
    fn test_is_occupied_panics_out_of_bounds_seat() {
        let map = standard_map();
        let _ = map.is_occupied(ri(11), si(3));
    }

    #[test]
    fn test_is_full_at_capacity() {
        let mut map = standard_map();
        for row in map.row_indices() {
            for seat in 0..map.row_len(row) {
                map.occupy(row, si(seat));
            }
        }

        assert!(map.is_full());
        assert_eq!(map.free_seat_count(), 0);
        assert_eq!(map.occupied_seat_count(), 80);
    }

    #[test]
    fn test_row_indices_ascending() {
        let map = standard_map();
        let rows: Vec<usize> = map.row_indices().map(|r| r.get()).collect();
        assert_eq!(rows, (0..12).collect::<Vec<_>>());
    }

    #[test]
    fn test_free_seats_in_row_skips_occupied() {
        let mut map = standard_map();
        map.occupy(ri(1), si(0));
        map.occupy(ri(1), si(2));
        map.occupy(ri(1), si(6));

        let free: Vec<usize> = map.free_seats_in_row(ri(1)).map(|s| s.get()).collect();
        assert_eq!(free, vec![1, 3, 4, 5]);
    }

    #[test]
    fn test_free_seats_in_full_row_is_empty() {
        let mut map = standard_map();
        for seat in 0..7 {
            map.occupy(ri(4), si(seat));
        }

        assert_eq!(map.free_seats_in_row(ri(4)).count(), 0);
        assert_eq!(map.row_free_count(ri(4)), 0);
    }

    #[test]
    fn test_free_seats_iterator_is_fused() {
        let mut map = standard_map();
        for seat in 0..3 {
            map.occupy(ri(11), si(seat));
        }

        let mut iter = map.free_seats_in_row(ri(11));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_display_renders_grid() {
        let mut map = SeatMap::new(CoachLayout::new(10, 7).unwrap());
        map.occupy(ri(0), si(0));
        map.occupy(ri(1), si(2));

        let rendered = format!("{}", map);
        assert!(rendered.contains("Seat Map (8 free / 10 total)"));
        assert!(rendered.contains("Row  0: [X] [ ] [ ] [ ] [ ] [ ] [ ]"));
        assert!(rendered.contains("Row  1: [ ] [ ] [X]"));
    }

    #[test]
    fn test_partial_row_has_short_bitset() {
        let map = standard_map();
        assert_eq!(map.row_len(ri(11)), 3);
        assert_eq!(
            map.free_seats_in_row(ri(11)).map(|s| s.get()).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }
}
