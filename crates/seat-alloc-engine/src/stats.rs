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

use crate::booking::Booking;

/// Statistics collected during the lifetime of a booking engine.
///
/// Rejection counters tick on failed requests even though the seat map and
/// manifest stay untouched; the counters describe traffic, not state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingStatistics {
    /// Total booking requests received, confirmed or rejected.
    pub requests_received: u64,
    /// Requests confirmed with seats assigned.
    pub bookings_confirmed: u64,
    /// Total seats assigned across all confirmed bookings.
    pub seats_assigned: u64,
    /// Confirmed bookings whose party shares a single row.
    pub same_row_bookings: u64,
    /// Confirmed bookings scattered across more than one row.
    pub split_bookings: u64,
    /// Requests rejected because the party size was invalid.
    pub rejected_invalid_size: u64,
    /// Requests rejected because not enough seats were free.
    pub rejected_insufficient_capacity: u64,
}

impl BookingStatistics {
    #[inline]
    pub fn on_request_received(&mut self) {
        self.requests_received = self.requests_received.saturating_add(1);
    }

    #[inline]
    pub fn on_booking_confirmed(&mut self, booking: &Booking) {
        self.bookings_confirmed = self.bookings_confirmed.saturating_add(1);
        self.seats_assigned = self.seats_assigned.saturating_add(booking.num_seats() as u64);
        if booking.is_split() {
            self.split_bookings = self.split_bookings.saturating_add(1);
        } else {
            self.same_row_bookings = self.same_row_bookings.saturating_add(1);
        }
    }

    #[inline]
    pub fn on_rejected_invalid_size(&mut self) {
        self.rejected_invalid_size = self.rejected_invalid_size.saturating_add(1);
    }

    #[inline]
    pub fn on_rejected_insufficient_capacity(&mut self) {
        self.rejected_insufficient_capacity = self.rejected_insufficient_capacity.saturating_add(1);
    }
}

impl std::fmt::Display for BookingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Booking Engine Statistics:")?;
        writeln!(f, "  Requests received:    {}", self.requests_received)?;
        writeln!(f, "  Bookings confirmed:   {}", self.bookings_confirmed)?;
        writeln!(f, "  Seats assigned:       {}", self.seats_assigned)?;
        writeln!(f, "  Same-row bookings:    {}", self.same_row_bookings)?;
        writeln!(f, "  Split bookings:       {}", self.split_bookings)?;
        writeln!(f, "  Rejected (size):      {}", self.rejected_invalid_size)?;
        writeln!(
            f,
            "  Rejected (capacity):  {}",
            self.rejected_insufficient_capacity
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::booking::SeatNumbers;
    use seat_alloc_model::index::SeatNumber;

    fn booking_of(numbers: &[usize], split: bool) -> Booking {
        let seats: SeatNumbers = numbers.iter().map(|&n| SeatNumber::new(n)).collect();
        if split {
            Booking::split(seats)
        } else {
            Booking::same_row(seats)
        }
    }

    #[test]
    fn test_default_is_all_zero() {
        let stats = BookingStatistics::default();
        assert_eq!(stats.requests_received, 0);
        assert_eq!(stats.bookings_confirmed, 0);
        assert_eq!(stats.seats_assigned, 0);
        assert_eq!(stats.same_row_bookings, 0);
        assert_eq!(stats.split_bookings, 0);
        assert_eq!(stats.rejected_invalid_size, 0);
        assert_eq!(stats.rejected_insufficient_capacity, 0);
    }

    #[test]
    fn test_confirmed_bookings_update_tallies() {
        let mut stats = BookingStatistics::default();

        stats.on_request_received();
        stats.on_booking_confirmed(&booking_of(&[1, 2, 3], false));
        stats.on_request_received();
        stats.on_booking_confirmed(&booking_of(&[7, 14], true));

        assert_eq!(stats.requests_received, 2);
        assert_eq!(stats.bookings_confirmed, 2);
        assert_eq!(stats.seats_assigned, 5);
        assert_eq!(stats.same_row_bookings, 1);
        assert_eq!(stats.split_bookings, 1);
    }

    #[test]
    fn test_rejections_update_counters_only() {
        let mut stats = BookingStatistics::default();

        stats.on_request_received();
        stats.on_rejected_invalid_size();
        stats.on_request_received();
        stats.on_rejected_insufficient_capacity();
        stats.on_request_received();
        stats.on_rejected_insufficient_capacity();

        assert_eq!(stats.requests_received, 3);
        assert_eq!(stats.rejected_invalid_size, 1);
        assert_eq!(stats.rejected_insufficient_capacity, 2);
        assert_eq!(stats.bookings_confirmed, 0);
        assert_eq!(stats.seats_assigned, 0);
    }

    #[test]
    fn test_counters_saturate_instead_of_wrapping() {
        let mut stats = BookingStatistics {
            requests_received: u64::MAX,
            ..Default::default()
        };

        stats.on_request_received();
        assert_eq!(stats.requests_received, u64::MAX);
    }

    #[test]
    fn test_display_formats_all_counters() {
        let mut stats = BookingStatistics::default();
        stats.on_request_received();
        stats.on_booking_confirmed(&booking_of(&[1, 2], false));

        let rendered = format!("{}", stats);
        assert!(
            rendered.contains("Booking Engine Statistics:"),
            "missing header"
        );
        assert!(
            rendered.contains("Requests received:    1"),
            "missing requests_received"
        );
        assert!(
            rendered.contains("Bookings confirmed:   1"),
            "missing bookings_confirmed"
        );
        assert!(
            rendered.contains("Seats assigned:       2"),
            "missing seats_assigned"
        );
    }
}
