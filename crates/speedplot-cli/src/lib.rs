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

//! Speedplot CLI library.
//!
//! Reads JSON benchmark results, groups the runs of three matrix kernel
//! implementations by element type and column count, and for each group:
//!
//! - prints how many times faster the `simd` variant is than `eigen` and
//!   `blaze` (geometric mean over the larger problem sizes)
//! - writes a two-panel SVG figure with absolute times and time ratios
//!
//! # Modules
//!
//! - [`config`] - Output directory, warm-up skip and figure size
//! - [`report`] - The load/aggregate/summarize/plot pipeline
//! - [`summary`] - Text summary formatting
//! - [`plot`] - Figure rendering
//! - [`error`] - CLI error type

pub mod config;
pub mod error;
pub mod plot;
pub mod report;
pub mod summary;

pub use config::ReportConfig;
pub use error::CliError;
pub use report::{run, BucketReport};
