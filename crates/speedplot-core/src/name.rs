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

//! Structured parsing of benchmark names.
//!
//! Benchmark harnesses encode the compared method, the element type and the
//! matrix shape in the benchmark name, e.g. `bm_eigen<f32, (17), (4)>`. The
//! integer parameters may or may not be parenthesised depending on how the
//! harness stringified its template arguments.

use crate::error::{CoreError, Result};
use crate::method::Method;
use once_cell::sync::Lazy;
use regex::Regex;
use std::str::FromStr;

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^bm_(?P<method>\w{5})<\s*(?P<dtype>[^,<>\s][^,<>]*?)\s*,\s*(?P<rows>\(\s*\d+\s*\)|\d+)\s*,\s*(?P<cols>\(\s*\d+\s*\)|\d+)\s*>$",
    )
    .expect("benchmark name pattern is valid")
});

/// The parameters encoded in a benchmark name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchName {
    /// The raw 5-character method tag.
    pub method_tag: String,
    /// Element type, e.g. `f32` or `double`.
    pub dtype: String,
    /// Number of matrix rows.
    pub rows: u32,
    /// Number of matrix columns.
    pub cols: u32,
}

impl BenchName {
    /// Parse a benchmark name.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidName`] if the name does not have the shape
    /// `bm_<method><type, rows, cols>` or a dimension does not fit in `u32`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use speedplot_core::{BenchName, Method};
    ///
    /// let name = BenchName::parse("bm_simd_<f64, (32), (8)>").unwrap();
    /// assert_eq!(name.method(), Some(Method::Simd));
    /// assert_eq!((name.dtype.as_str(), name.rows, name.cols), ("f64", 32, 8));
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        let caps = NAME_RE
            .captures(name)
            .ok_or_else(|| CoreError::invalid_name(name))?;

        let dimension = |group: &str| -> Result<u32> {
            caps[group]
                .trim_matches(|c: char| c == '(' || c == ')' || c.is_whitespace())
                .parse::<u32>()
                .map_err(|_| CoreError::invalid_name(name))
        };

        Ok(Self {
            method_tag: caps["method"].to_string(),
            dtype: caps["dtype"].to_string(),
            rows: dimension("rows")?,
            cols: dimension("cols")?,
        })
    }

    /// The recognized method, or `None` for tags outside the compared set.
    pub fn method(&self) -> Option<Method> {
        Method::from_tag(&self.method_tag)
    }
}

impl FromStr for BenchName {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}
