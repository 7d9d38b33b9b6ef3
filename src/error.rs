// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at http://mozilla.org/MPL/2.0/.

//! Usage errors.
//!
//! Looking something up that isn't there is not an error: those
//! operations return an [`Option`]. The variants here are contract
//! violations by the caller, reported at the point of detection. The
//! container they were raised on is left untouched.

use thiserror::Error;

/// Result type for container operations that can be misused.
pub type Result<T> = std::result::Result<T, Error>;

/// Ways a container can be misused.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum Error {
    /// A cursor was advanced past its last element, or the first or
    /// last element of an empty ordered set was requested.
    #[error("no such element")]
    NoSuchElement,

    /// A cursor was asked to remove an element before it was advanced,
    /// or twice for the same element.
    #[error("no element is pending removal")]
    IllegalState,

    /// A hash table was configured with zero buckets.
    #[error("invalid hash table capacity: {0}")]
    InvalidCapacity(usize),

    /// A hash table was configured with a load factor that isn't a
    /// finite number of at least 1/1024.
    #[error("invalid load factor: {0}")]
    InvalidLoadFactor(f32),
}
