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

//! Report configuration.
//!
//! The command line only takes input files; everything else a report needs
//! is fixed here. Tests construct their own values.

use speedplot_core::WARMUP_SKIP;
use std::path::{Path, PathBuf};

/// Directory plots are written to, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "out_plots";

/// Figure size in pixels (two side-by-side panels).
pub const DEFAULT_FIGURE_SIZE: (u32, u32) = (1000, 500);

/// Settings for one report run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportConfig {
    /// Where plot files are written. Created if absent.
    pub output_dir: PathBuf,
    /// Smallest-row-count points left out of summary ratios.
    pub warmup_skip: usize,
    /// Figure width and height in pixels.
    pub figure_size: (u32, u32),
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            warmup_skip: WARMUP_SKIP,
            figure_size: DEFAULT_FIGURE_SIZE,
        }
    }
}

impl ReportConfig {
    /// Use a different output directory.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        self.output_dir = dir.as_ref().to_path_buf();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.output_dir, PathBuf::from("out_plots"));
        assert_eq!(config.warmup_skip, 6);
        assert_eq!(config.figure_size, (1000, 500));
    }

    #[test]
    fn test_with_output_dir() {
        let config = ReportConfig::default().with_output_dir("/tmp/plots");
        assert_eq!(config.output_dir, PathBuf::from("/tmp/plots"));
        assert_eq!(config.warmup_skip, WARMUP_SKIP);
    }
}
