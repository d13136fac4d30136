// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use thiserror::Error;

/// Result type for matching operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when driving the matcher.
///
/// Absence of a match is never an error; it is reported as `None` by the
/// matching functions. Errors only arise from malformed caller input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}
