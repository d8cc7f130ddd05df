// Speedplot - Benchmark speed-ratio reporting
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Error types for loading and aggregating benchmark results.
//!
//! Every failure here is fatal to a report run. The one recoverable
//! condition, an input file that is not JSON at all, never becomes an error:
//! the loader skips it.

use crate::method::Method;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for speedplot-core operations.
pub type Result<T> = std::result::Result<T, CoreError>;

/// Errors raised while turning benchmark files into buckets and ratios.
///
/// # Examples
///
/// ```rust
/// use speedplot_core::CoreError;
///
/// let err = CoreError::invalid_name("bm_eigen(float)");
/// assert!(err.to_string().contains("bm_eigen(float)"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// An input file could not be opened or read.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The file that failed
        path: PathBuf,
        /// The underlying error message
        message: String,
    },

    /// The file is valid JSON but not a benchmark result document.
    ///
    /// Raised when the `benchmarks` key is missing or a record lacks
    /// `name` or `cpu_time`.
    #[error("'{path}' is not a benchmark result document: {message}")]
    Schema {
        /// The offending file
        path: PathBuf,
        /// What serde rejected
        message: String,
    },

    /// A benchmark name does not follow `bm_<method><type, rows, cols>`.
    #[error("Benchmark name '{name}' does not match bm_<method><type, rows, cols>")]
    InvalidName {
        /// The name as found in the input
        name: String,
    },

    /// A bucket has no measurements at all for a method the report needs.
    #[error("No measurements recorded for method '{method}'")]
    MissingMethod {
        /// The absent method
        method: Method,
    },

    /// Two time series that are divided point by point differ in length.
    #[error("Cannot divide series of {numerator} points by series of {baseline} points")]
    LengthMismatch {
        /// Points in the numerator series
        numerator: usize,
        /// Points in the baseline series
        baseline: usize,
    },
}

impl CoreError {
    /// Create an I/O error with file path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a schema error with file path context.
    pub fn schema(path: impl Into<PathBuf>, source: &serde_json::Error) -> Self {
        Self::Schema {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid name error.
    pub fn invalid_name(name: impl Into<String>) -> Self {
        Self::InvalidName { name: name.into() }
    }
}
