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

//! Speedplot core: benchmark result loading, bucketing and speed ratios.
//!
//! This crate turns JSON benchmark reporter output into per-shape speed
//! comparisons of three implementation variants (see [`Method`]):
//!
//! - [`loader`] - Read result files, skipping files that are not JSON
//! - [`name`] - Parse `bm_<method><type, rows, cols>` benchmark names
//! - [`aggregator`] - Bucket runs by (element type, column count)
//! - [`stats`] - Point-wise ratios and geometric-mean summaries
//!
//! # Example
//!
//! ```rust,no_run
//! use speedplot_core::{load_documents, Aggregator, SpeedRatios, WARMUP_SKIP};
//!
//! let mut agg = Aggregator::new();
//! for doc in load_documents(["results.json"]) {
//!     let (_, file) = doc?;
//!     agg.extend(&file.benchmarks)?;
//! }
//!
//! for (key, mut bucket) in agg.finish() {
//!     bucket.sort_by_rows();
//!     let ratios = SpeedRatios::compute(&bucket, WARMUP_SKIP)?;
//!     println!("{key}: eigen/simd = {:?}", ratios.eigen);
//! }
//! # Ok::<(), speedplot_core::CoreError>(())
//! ```

#![warn(missing_docs)]

pub mod aggregator;
pub mod error;
pub mod loader;
pub mod method;
pub mod name;
pub mod record;
pub mod stats;

pub use aggregator::{aggregate, Aggregator, Bucket, BucketKey, Buckets, Series};
pub use error::{CoreError, Result};
pub use loader::{load_documents, load_file};
pub use method::Method;
pub use name::BenchName;
pub use record::{BenchmarkFile, BenchmarkRecord};
pub use stats::{geometric_mean, ratios, require_all_methods, windowed_ratio, SpeedRatios, WARMUP_SKIP};
