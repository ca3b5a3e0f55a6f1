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

//! Consistency checking between the seat map and the booking manifest.
//!
//! The engine maintains two views of the same facts: the seat map records
//! which grid positions are taken, and the manifest records which seat
//! numbers have been handed out. This module provides a harness verifying
//! that the two views agree: every manifest entry is unique, every entry
//! maps onto an occupied seat, and the number of occupied seats equals the
//! number of manifest entries. Together these imply the occupied set is
//! exactly the union of all seat numbers ever returned to callers.
//!
//! The check is intended for diagnostics during development and testing; it
//! walks the full manifest and does not alter engine state. The engine runs
//! it after every confirmed booking in debug builds.

use crate::engine::BookingEngine;
use rustc_hash::FxHashSet;

/// Checks whether a booking engine's seat map and manifest agree.
///
/// Verifies, in order: no seat number appears twice in the manifest, every
/// manifest entry maps onto an occupied seat of the map, and the occupied
/// seat count equals the manifest length. The function returns `true` when
/// all three hold, and `false` at the first violation found.
pub fn is_consistent(engine: &BookingEngine) -> bool {
    let layout = engine.layout();
    let seat_map = engine.seat_map();
    let manifest = engine.manifest();

    let mut seen: FxHashSet<usize> = FxHashSet::default();
    for &number in manifest.iter() {
        if !seen.insert(number.get()) {
            return false;
        }

        match layout.position_of(number) {
            Some((row, seat)) => {
                if !seat_map.is_occupied(row, seat) {
                    return false;
                }
            }
            None => return false,
        }
    }

    seat_map.occupied_seat_count() == manifest.len()
}
