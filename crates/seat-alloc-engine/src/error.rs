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

//! Typed errors for rejected booking requests.
//!
//! A rejected request is an expected outcome, not a fault: the caller decides
//! whether to re-prompt, shrink the party, or give up. Every variant carries
//! the numbers needed to render a useful message, and `Display` provides a
//! sensible default wording.

/// An error describing why a booking request was rejected.
///
/// Rejection never mutates the engine: the seat map and the booking manifest
/// are exactly as they were before the call, no matter how often the same
/// request is repeated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingError {
    /// The request was for 0 seats or for more seats than one row holds.
    InvalidRequestSize {
        /// The rejected party size.
        requested: usize,
        /// The largest party a single booking may cover.
        seats_per_row: usize,
    },
    /// The coach does not have enough free seats left, in any arrangement.
    InsufficientCapacity {
        /// The requested party size.
        requested: usize,
        /// How many seats were free at the time of the request.
        available: usize,
    },
}

impl std::fmt::Display for BookingError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRequestSize {
                requested,
                seats_per_row,
            } => write!(
                f,
                "A booking must request between 1 and {} seats, but {} were requested",
                seats_per_row, requested
            ),
            Self::InsufficientCapacity {
                requested,
                available,
            } => write!(
                f,
                "Not enough seats available: {} requested but only {} free",
                requested, available
            ),
        }
    }
}

impl std::error::Error for BookingError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_request_size_display() {
        let err = BookingError::InvalidRequestSize {
            requested: 9,
            seats_per_row: 7,
        };
        assert_eq!(
            format!("{}", err),
            "A booking must request between 1 and 7 seats, but 9 were requested"
        );
    }

    #[test]
    fn test_insufficient_capacity_display() {
        let err = BookingError::InsufficientCapacity {
            requested: 5,
            available: 2,
        };
        assert_eq!(
            format!("{}", err),
            "Not enough seats available: 5 requested but only 2 free"
        );
    }

    #[test]
    fn test_errors_are_comparable() {
        let a = BookingError::InvalidRequestSize {
            requested: 0,
            seats_per_row: 7,
        };
        let b = BookingError::InvalidRequestSize {
            requested: 0,
            seats_per_row: 7,
        };
        assert_eq!(a, b);
        assert_ne!(
            a,
            BookingError::InsufficientCapacity {
                requested: 0,
                available: 7
            }
        );
    }
}
