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

//! Booking engine for a fixed-capacity coach.
//!
//! This module implements the stateful allocator that turns a party-size
//! request into concrete seat numbers. The `BookingEngine` owns the seat
//! map, the booking manifest, and the statistics; callers hold the engine
//! mutably for the duration of a booking and borrow it immutably for
//! rendering and queries. Every confirmed booking appends to the manifest
//! and in debug builds is followed by a full consistency audit against the
//! seat map.
//!
//! Allocation is deterministic and two-phase. Phase one scans rows in index
//! order and seats the whole party in the first row with enough free seats,
//! taking the lowest free seat indices. Only when no single row can host the
//! party does phase two run: a fresh row-major scan from row 0, seat 0 that
//! greedily takes every free seat until the party is covered. The capacity
//! precheck guarantees phase two always completes, so a validated request
//! either gets exactly the seats it asked for or a typed error.

use crate::{
    audit,
    booking::{Booking, SeatNumbers},
    error::BookingError,
    manifest::BookingManifest,
    stats::BookingStatistics,
};
use seat_alloc_model::{
    index::{RowIndex, SeatIndex, SeatNumber},
    layout::CoachLayout,
    seatmap::SeatMap,
};
use smallvec::SmallVec;

/// A deterministic seat allocator over a fixed coach layout.
///
/// The engine is the only mutator of its seat map and manifest. It is not
/// internally synchronized: `book` takes `&mut self`, which makes a booking
/// indivisible from the caller's perspective, and concurrent callers must
/// add their own mutual exclusion (for example a `Mutex<BookingEngine>`).
///
/// # Examples
///
/// ```rust
/// use seat_alloc_engine::engine::BookingEngine;
///
/// let mut engine = BookingEngine::standard();
///
/// let first = engine.book(5).unwrap();
/// let numbers: Vec<usize> = first.iter().map(|n| n.get()).collect();
/// assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
///
/// // Row 0 has only 2 seats left, so the next party opens row 1.
/// let second = engine.book(7).unwrap();
/// let numbers: Vec<usize> = second.iter().map(|n| n.get()).collect();
/// assert_eq!(numbers, vec![8, 9, 10, 11, 12, 13, 14]);
/// ```
#[derive(Debug, Clone)]
pub struct BookingEngine {
    seat_map: SeatMap,
    manifest: BookingManifest,
    stats: BookingStatistics,
}

impl Default for BookingEngine {
    fn default() -> Self {
        Self::standard()
    }
}

impl BookingEngine {
    /// Creates a new engine over the given layout with every seat free.
    #[inline]
    pub fn new(layout: CoachLayout) -> Self {
        Self {
            seat_map: SeatMap::new(layout),
            manifest: BookingManifest::new(),
            stats: BookingStatistics::default(),
        }
    }

    /// Creates a new engine over the standard 80-seat coach.
    #[inline]
    pub fn standard() -> Self {
        Self::new(CoachLayout::standard())
    }

    /// Books `requested_seats` seats and returns their seat numbers.
    ///
    /// The request is validated first: the party size must be in
    /// `[1, seats_per_row]`, and the coach must have at least
    /// `requested_seats` free seats in total. The first failing check wins
    /// and a failed request leaves the seat map and manifest untouched, no
    /// matter how often it is repeated.
    ///
    /// A valid request is seated in the first row whose free-seat count
    /// covers the whole party; if no such row exists the party is split and
    /// seated greedily in row-major order starting over from row 0, seat 0.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use seat_alloc_engine::{engine::BookingEngine, error::BookingError};
    ///
    /// let mut engine = BookingEngine::standard();
    /// assert_eq!(
    ///     engine.book(0),
    ///     Err(BookingError::InvalidRequestSize {
    ///         requested: 0,
    ///         seats_per_row: 7
    ///     })
    /// );
    ///
    /// let booking = engine.book(3).unwrap();
    /// assert_eq!(booking.num_seats(), 3);
    /// assert!(booking.is_same_row());
    /// ```
    pub fn book(&mut self, requested_seats: usize) -> Result<Booking, BookingError> {
        self.stats.on_request_received();

        let seats_per_row = self.seat_map.layout().seats_per_row();
        if requested_seats == 0 || requested_seats > seats_per_row {
            self.stats.on_rejected_invalid_size();
            return Err(BookingError::InvalidRequestSize {
                requested: requested_seats,
                seats_per_row,
            });
        }

        let available = self.seat_map.free_seat_count();
        if available < requested_seats {
            self.stats.on_rejected_insufficient_capacity();
            return Err(BookingError::InsufficientCapacity {
                requested: requested_seats,
                available,
            });
        }

        let booking = match self.find_host_row(requested_seats) {
            Some(row) => self.reserve_in_row(row, requested_seats),
            None => self.reserve_scattered(requested_seats),
        };

        self.manifest.record(booking.seat_numbers());
        self.stats.on_booking_confirmed(&booking);

        debug_assert!(
            audit::is_consistent(self),
            "seat map and manifest diverged after a confirmed booking"
        );

        Ok(booking)
    }

    /// Finds the first row that can host the whole party, scanning rows in
    /// index order.
    #[inline]
    fn find_host_row(&self, requested_seats: usize) -> Option<RowIndex> {
        self.seat_map
            .row_indices()
            .find(|&row| self.seat_map.row_free_count(row) >= requested_seats)
    }

    /// Reserves the lowest `requested_seats` free seats of `row`.
    fn reserve_in_row(&mut self, row: RowIndex, requested_seats: usize) -> Booking {
        let picks: SmallVec<[SeatIndex; 8]> = self
            .seat_map
            .free_seats_in_row(row)
            .take(requested_seats)
            .collect();
        debug_assert_eq!(
            picks.len(),
            requested_seats,
            "host row {} no longer holds the promised free seats",
            row.get()
        );

        let mut seat_numbers = SeatNumbers::new();
        for seat in picks {
            seat_numbers.push(self.reserve_seat(row, seat));
        }

        Booking::same_row(seat_numbers)
    }

    /// Reserves `requested_seats` free seats in row-major order, restarting
    /// the scan from row 0, seat 0.
    fn reserve_scattered(&mut self, requested_seats: usize) -> Booking {
        let mut seat_numbers = SeatNumbers::new();

        'rows: for row in self.seat_map.row_indices() {
            for seat in 0..self.seat_map.row_len(row) {
                if seat_numbers.len() == requested_seats {
                    break 'rows;
                }
                let seat = SeatIndex::new(seat);
                if !self.seat_map.is_occupied(row, seat) {
                    seat_numbers.push(self.reserve_seat(row, seat));
                }
            }
        }

        debug_assert_eq!(
            seat_numbers.len(),
            requested_seats,
            "the capacity precheck promised more free seats than the scan found"
        );

        Booking::split(seat_numbers)
    }

    /// Occupies one seat and returns its passenger-facing number.
    #[inline]
    fn reserve_seat(&mut self, row: RowIndex, seat: SeatIndex) -> SeatNumber {
        self.seat_map.occupy(row, seat);
        self.seat_map
            .layout()
            .seat_number(row, seat)
            .expect("occupied seat coordinates stay within the coach")
    }

    /// Returns the layout the engine allocates over.
    #[inline]
    pub fn layout(&self) -> &CoachLayout {
        self.seat_map.layout()
    }

    /// Returns the seat map for rendering and queries.
    #[inline]
    pub fn seat_map(&self) -> &SeatMap {
        &self.seat_map
    }

    /// Returns the manifest of all reserved seat numbers in booking order.
    #[inline]
    pub fn manifest(&self) -> &BookingManifest {
        &self.manifest
    }

    /// Returns the statistics collected so far.
    #[inline]
    pub fn statistics(&self) -> &BookingStatistics {
        &self.stats
    }

    /// Returns the number of free seats in the whole coach.
    #[inline]
    pub fn free_seat_count(&self) -> usize {
        self.seat_map.free_seat_count()
    }

    /// Checks if every seat in the coach is taken.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.seat_map.is_full()
    }
}
