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

//! The report pipeline: load, bucket, summarize, plot.

use crate::config::ReportConfig;
use crate::error::CliError;
use crate::plot;
use crate::summary;
use speedplot_core::{load_documents, ratios, Aggregator, Bucket, BucketKey, Method, SpeedRatios};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// A bucket ready for reporting: sorted series plus summary ratios.
#[derive(Debug, Clone)]
pub struct BucketReport {
    /// Which bucket this is.
    pub key: BucketKey,
    /// The bucket's series, sorted by row count.
    pub bucket: Bucket,
    /// Warm-up-excluded geometric-mean ratios.
    pub ratios: SpeedRatios,
}

impl BucketReport {
    /// Sort `bucket` and compute its ratios.
    ///
    /// # Errors
    ///
    /// Fails if a method has no measurements or the series lengths differ.
    pub fn build(key: BucketKey, mut bucket: Bucket, warmup_skip: usize) -> Result<Self, CliError> {
        bucket.sort_by_rows();
        match SpeedRatios::compute(&bucket, warmup_skip) {
            Ok(ratios) => Ok(Self { key, bucket, ratios }),
            Err(source) => Err(CliError::Bucket { key, source }),
        }
    }

    /// (rows, time) points for `method`.
    pub fn absolute_curve(&self, method: Method) -> Vec<(f64, f64)> {
        self.bucket
            .series(method)
            .points()
            .map(|(rows, time)| (f64::from(rows), time))
            .collect()
    }

    /// Point-wise `method / baseline` time ratios, plotted at the baseline's
    /// row counts.
    pub fn relative_curve(&self, method: Method) -> Result<Vec<(f64, f64)>, CliError> {
        let baseline = self.bucket.series(Method::BASELINE);
        let values = ratios(self.bucket.series(method).times(), baseline.times()).map_err(|source| {
            CliError::Bucket {
                key: self.key.clone(),
                source,
            }
        })?;
        Ok(baseline
            .rows()
            .iter()
            .map(|&rows| f64::from(rows))
            .zip(values)
            .collect())
    }

    /// The constant 1.0 reference line at the baseline's row counts.
    pub fn reference_curve(&self) -> Vec<(f64, f64)> {
        self.bucket
            .series(Method::BASELINE)
            .rows()
            .iter()
            .map(|&rows| (f64::from(rows), 1.0))
            .collect()
    }
}

/// Run a full report over `files`, writing summaries to `out` and plots to
/// the configured output directory.
///
/// Buckets are reported in key order. Returns the paths of the written plots.
///
/// # Errors
///
/// Stops at the first unreadable file, schema violation, malformed name,
/// incomplete bucket, or write failure. Plots already written stay on disk.
pub fn run<P, W>(files: &[P], config: &ReportConfig, out: &mut W) -> Result<Vec<PathBuf>, CliError>
where
    P: AsRef<Path>,
    W: Write,
{
    fs::create_dir_all(&config.output_dir).map_err(|e| CliError::io_error(&config.output_dir, e))?;

    let mut aggregator = Aggregator::new();
    let mut loaded = 0usize;
    for doc in load_documents(files) {
        let (path, file) = doc?;
        debug!(path = %path.display(), runs = file.benchmarks.len(), "loaded result file");
        aggregator.extend(&file.benchmarks)?;
        loaded += 1;
    }
    info!(
        files = loaded,
        buckets = aggregator.buckets().len(),
        ignored = aggregator.ignored(),
        "aggregated benchmark runs"
    );

    let mut written = Vec::new();
    for (key, bucket) in aggregator.finish() {
        let report = BucketReport::build(key, bucket, config.warmup_skip)?;
        for method in Method::COMPARED {
            if report.ratios.get(method).is_none() {
                warn!(
                    bucket = %report.key,
                    method = %method,
                    skip = config.warmup_skip,
                    "no measurements past warm-up, ratio undefined"
                );
            }
        }

        summary::write_summary(out, &report.key, &report.ratios)
            .map_err(|e| CliError::io_error("<stdout>", e))?;

        let path = plot::render(&report, config)?;
        info!(bucket = %report.key, path = %path.display(), "wrote plot");
        written.push(path);
    }

    Ok(written)
}
