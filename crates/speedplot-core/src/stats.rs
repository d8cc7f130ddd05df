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

//! Speed-ratio statistics.
//!
//! Ratios are taken point by point between a method's times and the
//! baseline's times after both series are sorted by row count. The smallest
//! [`WARMUP_SKIP`] points are too noisy to trust and are left out of the
//! summary ratio, but not out of the plotted curves.

use crate::aggregator::Bucket;
use crate::error::{CoreError, Result};
use crate::method::Method;

/// Number of smallest-row-count points excluded from summary ratios.
pub const WARMUP_SKIP: usize = 6;

/// Divide `numerator` by `baseline` point by point.
///
/// # Errors
///
/// Returns [`CoreError::LengthMismatch`] if the slices differ in length.
pub fn ratios(numerator: &[f64], baseline: &[f64]) -> Result<Vec<f64>> {
    if numerator.len() != baseline.len() {
        return Err(CoreError::LengthMismatch {
            numerator: numerator.len(),
            baseline: baseline.len(),
        });
    }
    Ok(numerator.iter().zip(baseline).map(|(n, b)| n / b).collect())
}

/// Geometric mean: the exponential of the mean natural log.
///
/// Returns `None` for an empty slice. Zero and negative inputs follow IEEE
/// semantics (a zero drives the mean to `0.0`, a negative yields `NaN`).
///
/// # Examples
///
/// ```rust
/// use speedplot_core::geometric_mean;
///
/// let g = geometric_mean(&[1.0, 4.0]).unwrap();
/// assert!((g - 2.0).abs() < 1e-12);
/// assert_eq!(geometric_mean(&[]), None);
/// ```
pub fn geometric_mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let log_sum: f64 = values.iter().map(|v| v.ln()).sum();
    Some((log_sum / values.len() as f64).exp())
}

/// Geometric mean of `numerator / baseline` over the points after `skip`.
///
/// Returns `Ok(None)` when no points remain after the skip.
pub fn windowed_ratio(numerator: &[f64], baseline: &[f64], skip: usize) -> Result<Option<f64>> {
    let all = ratios(numerator, baseline)?;
    Ok(geometric_mean(all.get(skip..).unwrap_or_default()))
}

/// Summary ratios of each compared method against the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedRatios {
    /// Geometric-mean eigen / simd time, `None` if the window was empty.
    pub eigen: Option<f64>,
    /// Geometric-mean blaze / simd time, `None` if the window was empty.
    pub blaze: Option<f64>,
}

impl SpeedRatios {
    /// Compute the ratios for a bucket whose series are already sorted.
    ///
    /// # Errors
    ///
    /// - [`CoreError::MissingMethod`] if any method has no measurements
    /// - [`CoreError::LengthMismatch`] if a method's series and the baseline
    ///   differ in length
    pub fn compute(bucket: &Bucket, skip: usize) -> Result<Self> {
        require_all_methods(bucket)?;
        let baseline = bucket.series(Method::BASELINE).times();
        Ok(Self {
            eigen: windowed_ratio(bucket.series(Method::Eigen).times(), baseline, skip)?,
            blaze: windowed_ratio(bucket.series(Method::Blaze).times(), baseline, skip)?,
        })
    }

    /// The ratio for a compared method.
    pub fn get(&self, method: Method) -> Option<f64> {
        match method {
            Method::Eigen => self.eigen,
            Method::Blaze => self.blaze,
            Method::Simd => Some(1.0),
        }
    }
}

/// Fail with [`CoreError::MissingMethod`] unless every method has data.
pub fn require_all_methods(bucket: &Bucket) -> Result<()> {
    match Method::ALL.into_iter().find(|m| bucket.series(*m).is_empty()) {
        Some(method) => Err(CoreError::MissingMethod { method }),
        None => Ok(()),
    }
}
