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

//! Structured error types for the speedplot CLI.

use speedplot_core::{BucketKey, CoreError};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// The main error type for speedplot CLI operations.
///
/// Any of these ends the run with a non-zero exit status.
#[derive(Error, Debug, Clone)]
pub enum CliError {
    /// Loading or aggregating the input failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A bucket could not be summarized.
    #[error("[{key}] {source}")]
    Bucket {
        /// The bucket being reported
        key: BucketKey,
        /// What went wrong
        #[source]
        source: CoreError,
    },

    /// I/O operation failed (output directory or summary output).
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// The path involved
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// Rendering a plot failed.
    #[error("Failed to render plot '{path}': {message}")]
    Plot {
        /// The plot file being written
        path: PathBuf,
        /// The backend error message
        message: String,
    },
}

impl CliError {
    /// Create an I/O error with path context.
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create a plot rendering error.
    pub fn plot(path: impl Into<PathBuf>, message: impl ToString) -> Self {
        Self::Plot {
            path: path.into(),
            message: message.to_string(),
        }
    }
}
