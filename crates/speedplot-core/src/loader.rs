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

//! Loading benchmark result files.
//!
//! Files are read one at a time, in the order given. A file whose content is
//! not JSON is skipped with a warning; every other failure aborts the run.

use crate::error::{CoreError, Result};
use crate::record::BenchmarkFile;
use std::fs;
use std::path::{Path, PathBuf};

/// Load a single benchmark result file.
///
/// Returns `Ok(None)` when the file content is not valid JSON.
///
/// # Errors
///
/// - [`CoreError::Io`] if the file cannot be read
/// - [`CoreError::Schema`] if the JSON is not a benchmark result document
pub fn load_file(path: &Path) -> Result<Option<BenchmarkFile>> {
    let content = fs::read_to_string(path).map_err(|e| CoreError::io_error(path, e))?;

    let value: serde_json::Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "skipping file that is not valid JSON");
            return Ok(None);
        }
    };

    let file = serde_json::from_value(value).map_err(|e| CoreError::schema(path, &e))?;
    Ok(Some(file))
}

/// Lazily load benchmark documents from `paths`.
///
/// Files that are not JSON produce no item. Each item carries the path it was
/// loaded from.
///
/// # Examples
///
/// ```rust,no_run
/// use speedplot_core::load_documents;
///
/// for doc in load_documents(["run_a.json", "run_b.json"]) {
///     let (path, file) = doc?;
///     println!("{}: {} runs", path.display(), file.benchmarks.len());
/// }
/// # Ok::<(), speedplot_core::CoreError>(())
/// ```
pub fn load_documents<I, P>(paths: I) -> impl Iterator<Item = Result<(PathBuf, BenchmarkFile)>>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    paths.into_iter().filter_map(|p| {
        let path = p.as_ref().to_path_buf();
        match load_file(&path) {
            Ok(Some(file)) => Some(Ok((path, file))),
            Ok(None) => None,
            Err(e) => Some(Err(e)),
        }
    })
}
