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

//! The running log of every seat the engine has handed out.

use seat_alloc_model::index::SeatNumber;

/// An append-only log of reserved seat numbers in booking order.
///
/// The engine extends the manifest on every confirmed booking and nothing
/// ever removes an entry, so the manifest doubles as the booking history:
/// reading it front to back replays every assignment in the order it was
/// made.
///
/// Invariants (debug-checked on append, verified by the consistency audit):
/// - no seat number appears twice;
/// - every entry maps onto an occupied seat of the engine's seat map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingManifest {
    seat_numbers: Vec<SeatNumber>,
}

impl BookingManifest {
    /// Creates a new, empty `BookingManifest`.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the seats of one confirmed booking in selection order.
    #[inline]
    pub(crate) fn record(&mut self, seats: &[SeatNumber]) {
        debug_assert!(
            seats.iter().all(|seat| !self.contains(*seat)),
            "called `BookingManifest::record` with a seat number that is already reserved"
        );

        self.seat_numbers.extend_from_slice(seats);
    }

    /// Checks if the given seat number has been reserved.
    #[inline]
    pub fn contains(&self, number: SeatNumber) -> bool {
        self.seat_numbers.contains(&number)
    }

    /// Returns all reserved seat numbers in booking order.
    #[inline]
    pub fn seat_numbers(&self) -> &[SeatNumber] {
        &self.seat_numbers
    }

    /// Returns the number of reserved seats.
    #[inline]
    pub fn len(&self) -> usize {
        self.seat_numbers.len()
    }

    /// Checks if no seat has been reserved yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.seat_numbers.is_empty()
    }

    /// Returns an iterator over the reserved seat numbers in booking order.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, SeatNumber> {
        self.seat_numbers.iter()
    }
}

impl<'a> IntoIterator for &'a BookingManifest {
    type Item = &'a SeatNumber;
    type IntoIter = std::slice::Iter<'a, SeatNumber>;

    fn into_iter(self) -> Self::IntoIter {
        self.seat_numbers.iter()
    }
}

impl std::fmt::Display for BookingManifest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Booking Manifest")?;

        if self.is_empty() {
            writeln!(f, "   (No seats reserved)")?;
            return Ok(());
        }

        writeln!(f, "   {:<8} | {:<12}", "Entry", "Seat Number")?;
        writeln!(f, "   {:-<8}-+-{:-<12}", "", "")?;
        for (i, number) in self.seat_numbers.iter().enumerate() {
            writeln!(f, "   {:<8} | {:<12}", i, number)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sn(n: usize) -> SeatNumber {
        SeatNumber::new(n)
    }

    #[test]
    fn test_new_manifest_is_empty() {
        let manifest = BookingManifest::new();
        assert!(manifest.is_empty());
        assert_eq!(manifest.len(), 0);
        assert!(manifest.seat_numbers().is_empty());
    }

    #[test]
    fn test_record_preserves_booking_order() {
        let mut manifest = BookingManifest::new();
        manifest.record(&[sn(1), sn(2), sn(3)]);
        manifest.record(&[sn(8), sn(9)]);

        assert_eq!(manifest.len(), 5);
        assert_eq!(
            manifest.seat_numbers(),
            &[sn(1), sn(2), sn(3), sn(8), sn(9)]
        );
        let collected: Vec<usize> = manifest.iter().map(|n| n.get()).collect();
        assert_eq!(collected, vec![1, 2, 3, 8, 9]);
    }

    #[test]
    fn test_contains_reserved_numbers_only() {
        let mut manifest = BookingManifest::new();
        manifest.record(&[sn(4), sn(5)]);

        assert!(manifest.contains(sn(4)));
        assert!(manifest.contains(sn(5)));
        assert!(!manifest.contains(sn(6)));
    }

    #[test]
    #[should_panic(expected = "already reserved")]
    fn test_record_duplicate_panics_in_debug() {
        let mut manifest = BookingManifest::new();
        manifest.record(&[sn(10)]);
        manifest.record(&[sn(10)]);
    }

    #[test]
    fn test_display_empty() {
        let rendered = format!("{}", BookingManifest::new());
        assert!(rendered.contains("Booking Manifest"));
        assert!(rendered.contains("(No seats reserved)"));
    }

    #[test]
    fn test_display_lists_entries() {
        let mut manifest = BookingManifest::new();
        manifest.record(&[sn(1), sn(14)]);

        let rendered = format!("{}", manifest);
        assert!(rendered.contains("Entry"), "missing header");
        assert!(rendered.contains("Seat Number"), "missing header");
        assert!(rendered.contains("0"), "missing first entry index");
        assert!(rendered.contains("14"), "missing seat number");
    }
}
