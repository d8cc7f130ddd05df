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

//! Bucketing of benchmark runs by element type and column count.
//!
//! Every bucket holds one (rows, time) series per [`Method`]. Series are
//! appended to in input order and sorted by row count before reporting.

use crate::error::Result;
use crate::method::Method;
use crate::name::BenchName;
use crate::record::BenchmarkRecord;
use std::collections::BTreeMap;
use std::fmt;

/// Identifies a bucket: all runs sharing an element type and column count.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct BucketKey {
    /// Element type.
    pub dtype: String,
    /// Matrix column count.
    pub cols: u32,
}

impl BucketKey {
    /// Create a bucket key.
    pub fn new(dtype: impl Into<String>, cols: u32) -> Self {
        Self {
            dtype: dtype.into(),
            cols,
        }
    }
}

impl fmt::Display for BucketKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x {} cols", self.dtype, self.cols)
    }
}

/// Parallel row-count and time sequences for one method.
///
/// The two sequences always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Series {
    rows: Vec<u32>,
    times: Vec<f64>,
}

impl Series {
    /// Create an empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one measurement.
    pub fn push(&mut self, rows: u32, time: f64) {
        self.rows.push(rows);
        self.times.push(time);
    }

    /// Row counts, in current order.
    pub fn rows(&self) -> &[u32] {
        &self.rows
    }

    /// Times, aligned with [`Series::rows`].
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of measurements.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the series has no measurements.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sort by row count ascending, permuting times identically.
    ///
    /// The relative order of equal row counts is unspecified.
    pub fn sort_by_rows(&mut self) {
        let mut pairs: Vec<(u32, f64)> = self
            .rows
            .iter()
            .copied()
            .zip(self.times.iter().copied())
            .collect();
        pairs.sort_unstable_by_key(|&(rows, _)| rows);
        let (rows, times): (Vec<u32>, Vec<f64>) = pairs.into_iter().unzip();
        self.rows = rows;
        self.times = times;
    }

    /// Iterate over (rows, time) pairs.
    pub fn points(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.rows.iter().copied().zip(self.times.iter().copied())
    }
}

impl FromIterator<(u32, f64)> for Series {
    fn from_iter<T: IntoIterator<Item = (u32, f64)>>(iter: T) -> Self {
        let (rows, times) = iter.into_iter().unzip();
        Self { rows, times }
    }
}

/// One series per method for a single bucket.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bucket {
    series: [Series; 3],
}

impl Bucket {
    /// Create a bucket with three empty series.
    pub fn new() -> Self {
        Self::default()
    }

    /// The series recorded for `method`.
    pub fn series(&self, method: Method) -> &Series {
        &self.series[method.index()]
    }

    /// Mutable access to the series recorded for `method`.
    pub fn series_mut(&mut self, method: Method) -> &mut Series {
        &mut self.series[method.index()]
    }

    /// Sort every series by row count.
    pub fn sort_by_rows(&mut self) {
        for series in &mut self.series {
            series.sort_by_rows();
        }
    }

    /// Total measurements across all methods.
    pub fn len(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }

    /// Whether no method has any measurement.
    pub fn is_empty(&self) -> bool {
        self.series.iter().all(Series::is_empty)
    }
}

/// All buckets of a report run, ordered by key.
pub type Buckets = BTreeMap<BucketKey, Bucket>;

/// Accumulates benchmark runs into buckets.
///
/// # Examples
///
/// ```rust
/// use speedplot_core::{Aggregator, BenchmarkRecord, BucketKey, Method};
///
/// let mut agg = Aggregator::new();
/// agg.add(&BenchmarkRecord::new("bm_eigen<f32, 8, 4>", 12.0))?;
/// agg.add(&BenchmarkRecord::new("bm_loop_<f32, 8, 4>", 30.0))?;
///
/// let buckets = agg.finish();
/// let bucket = &buckets[&BucketKey::new("f32", 4)];
/// assert_eq!(bucket.series(Method::Eigen).rows(), &[8]);
/// assert_eq!(bucket.len(), 1);
/// # Ok::<(), speedplot_core::CoreError>(())
/// ```
#[derive(Debug, Default)]
pub struct Aggregator {
    buckets: Buckets,
    ignored: usize,
}

impl Aggregator {
    /// Create an empty aggregator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one run.
    ///
    /// Runs whose method tag is not recognized are counted as ignored and
    /// contribute to no series; their bucket is not created.
    ///
    /// # Errors
    ///
    /// Returns [`crate::CoreError::InvalidName`] if the run name is malformed.
    pub fn add(&mut self, record: &BenchmarkRecord) -> Result<()> {
        let name = BenchName::parse(&record.name)?;

        let Some(method) = name.method() else {
            tracing::debug!(name = %record.name, tag = %name.method_tag, "ignoring unrecognized method");
            self.ignored += 1;
            return Ok(());
        };

        self.buckets
            .entry(BucketKey::new(name.dtype, name.cols))
            .or_default()
            .series_mut(method)
            .push(name.rows, record.cpu_time);
        Ok(())
    }

    /// Add every run in `records`, stopping at the first malformed name.
    pub fn extend<'a, I>(&mut self, records: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a BenchmarkRecord>,
    {
        records.into_iter().try_for_each(|r| self.add(r))
    }

    /// Runs skipped because of an unrecognized method tag.
    pub fn ignored(&self) -> usize {
        self.ignored
    }

    /// Buckets accumulated so far.
    pub fn buckets(&self) -> &Buckets {
        &self.buckets
    }

    /// Consume the aggregator, returning the buckets.
    pub fn finish(self) -> Buckets {
        self.buckets
    }
}

/// Aggregate a flat sequence of runs into buckets.
pub fn aggregate<'a, I>(records: I) -> Result<Buckets>
where
    I: IntoIterator<Item = &'a BenchmarkRecord>,
{
    let mut agg = Aggregator::new();
    agg.extend(records)?;
    Ok(agg.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CoreError;

    fn rec(name: &str, t: f64) -> BenchmarkRecord {
        BenchmarkRecord::new(name, t)
    }

    #[test]
    fn test_sort_by_rows_permutes_times() {
        let mut series: Series = [(50, 5.0), (10, 1.0), (30, 3.0)].into_iter().collect();
        series.sort_by_rows();
        assert_eq!(series.rows(), &[10, 30, 50]);
        assert_eq!(series.times(), &[1.0, 3.0, 5.0]);
    }

    #[test]
    fn test_sort_empty_series() {
        let mut series = Series::new();
        series.sort_by_rows();
        assert!(series.is_empty());
    }

    #[test]
    fn test_buckets_keyed_by_dtype_and_cols() {
        let buckets = aggregate(&[
            rec("bm_eigen<f32, 8, 2>", 1.0),
            rec("bm_eigen<f32, 8, 4>", 2.0),
            rec("bm_eigen<f64, 8, 2>", 3.0),
            rec("bm_blaze<f32, 16, 2>", 4.0),
        ])
        .unwrap();

        assert_eq!(buckets.len(), 3);
        let f32_2 = &buckets[&BucketKey::new("f32", 2)];
        assert_eq!(f32_2.series(Method::Eigen).times(), &[1.0]);
        assert_eq!(f32_2.series(Method::Blaze).rows(), &[16]);
        assert!(f32_2.series(Method::Simd).is_empty());
    }

    #[test]
    fn test_unrecognized_method_is_ignored() {
        let mut agg = Aggregator::new();
        agg.add(&rec("bm_simd_<f32, 8, 2>", 1.0)).unwrap();
        agg.add(&rec("bm_loop_<f32, 9, 2>", 1.0)).unwrap();
        agg.add(&rec("bm_loop_<f32, 9, 16>", 1.0)).unwrap();

        assert_eq!(agg.ignored(), 2);
        let buckets = agg.finish();
        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[&BucketKey::new("f32", 2)].len(), 1);
    }

    #[test]
    fn test_malformed_name_is_fatal() {
        let err = aggregate(&[rec("bm_eigen<f32, 8, 2>", 1.0), rec("matvec_64x4", 2.0)]).unwrap_err();
        assert_eq!(err, CoreError::invalid_name("matvec_64x4"));
    }

    #[test]
    fn test_appends_in_input_order() {
        let buckets = aggregate(&[
            rec("bm_simd_<f32, 50, 2>", 5.0),
            rec("bm_simd_<f32, 10, 2>", 1.0),
            rec("bm_simd_<f32, 30, 2>", 3.0),
        ])
        .unwrap();
        let series = buckets[&BucketKey::new("f32", 2)].series(Method::Simd);
        assert_eq!(series.rows(), &[50, 10, 30]);
        assert_eq!(series.points().count(), 3);
    }

    #[test]
    fn test_bucket_key_ordering() {
        let mut keys = vec![
            BucketKey::new("f64", 2),
            BucketKey::new("f32", 8),
            BucketKey::new("f32", 2),
        ];
        keys.sort();
        assert_eq!(keys[0], BucketKey::new("f32", 2));
        assert_eq!(keys[2], BucketKey::new("f64", 2));
    }
}
