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

//! Seat-Alloc Engine: deterministic booking for a fixed-capacity coach
//!
//! High-level crate that allocates seats for booking requests against a
//! `seat_alloc_model::seatmap::SeatMap`. The engine keeps parties together
//! in one row whenever a row can host them and falls back to scattering the
//! party across rows in row-major order; the result is a typed `Booking` or
//! a typed `BookingError`, never a side effect.
//!
//! Core flow
//! - Build a validated `seat_alloc_model::layout::CoachLayout` (or use
//!   `engine::BookingEngine::standard()` for the 80-seat coach).
//! - Call `engine::BookingEngine::book` with a party size.
//! - Render from the read accessors: the seat map grid, the manifest table,
//!   and the statistics counters all implement `Display`.
//!
//! Design highlights
//! - Deterministic: equal request sequences produce equal seat assignments.
//! - Transactional: a failed request leaves the seat map and manifest
//!   exactly as they were, no matter how often it is repeated.
//! - Debug-audited: every confirmed booking is followed by a consistency
//!   audit between seat map and manifest in debug builds.
//!
//! Module map
//! - `engine`: the booking engine and its two-phase allocation policy.
//! - `booking`: the confirmed result value (seat numbers, split flag).
//! - `error`: typed rejection reasons.
//! - `manifest`: the append-only log of reserved seat numbers.
//! - `stats`: lightweight request/outcome counters.
//! - `audit`: the seat-map/manifest consistency harness.

pub mod audit;
pub mod booking;
pub mod engine;
pub mod error;
pub mod manifest;
pub mod stats;
