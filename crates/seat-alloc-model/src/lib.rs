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

//! # Seat Alloc Model
//!
//! **The Core Domain Model for the Seat Alloc Coach Seating Library.**
//!
//! This crate defines the fundamental data structures used to represent a
//! fixed-capacity coach and its seat occupancy. It serves as the data layer
//! beneath the booking engine (`seat_alloc_engine`), which owns the
//! allocation policy.
//!
//! ## Architecture
//!
//! The crate is designed around a strict separation between **geometry**
//! (validated once, then immutable) and **occupancy** (mutated by the
//! engine):
//!
//! * **`index`**: Provides strongly-typed wrappers (`RowIndex`, `SeatIndex`,
//!   `SeatNumber`) to prevent logical indexing errors.
//! * **`layout`**: Contains the validated `CoachLayout` and the bijection
//!   between grid coordinates and 1-based seat numbers.
//! * **`seatmap`**: Tracks which seats are taken, one bitset per row, with
//!   O(1) free-seat counting.
//!
//! ## Design Philosophy
//!
//! 1.  **Type Safety**: Row positions, in-row positions, and passenger-facing
//!     seat numbers are distinct types. You cannot accidentally index a row
//!     with a `SeatNumber`.
//! 2.  **Fail-Fast**: `CoachLayout::new` validates its dimensions eagerly so
//!     the engine never operates on a degenerate coach.
//! 3.  **One-Way Occupancy**: The seat map exposes no release operation;
//!     confirmed seats stay taken for the lifetime of the map.

pub mod index;
pub mod layout;
pub mod seatmap;
