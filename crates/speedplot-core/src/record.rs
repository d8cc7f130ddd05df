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

//! Benchmark result documents as written by JSON benchmark reporters.

use serde::{Deserialize, Serialize};

/// One measured benchmark run.
///
/// Only the fields the report consumes are modelled; everything else in the
/// reporter output (iterations, real time, time unit, ...) is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkRecord {
    /// Encoded benchmark name, see [`crate::BenchName`].
    pub name: String,
    /// Measured CPU time per iteration.
    pub cpu_time: f64,
}

/// A complete benchmark result document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BenchmarkFile {
    /// All runs in the document, in reporter order.
    pub benchmarks: Vec<BenchmarkRecord>,
}

impl BenchmarkRecord {
    /// Create a record.
    pub fn new(name: impl Into<String>, cpu_time: f64) -> Self {
        Self {
            name: name.into(),
            cpu_time,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_ignores_extra_fields() {
        let json = r#"{
            "context": {"date": "2020-06-01", "num_cpus": 8},
            "benchmarks": [
                {
                    "name": "bm_eigen<f32, (4), (2)>",
                    "run_name": "bm_eigen<f32, (4), (2)>",
                    "iterations": 1000,
                    "real_time": 2.5,
                    "cpu_time": 2.25,
                    "time_unit": "ns"
                }
            ]
        }"#;
        let file: BenchmarkFile = serde_json::from_str(json).unwrap();
        assert_eq!(file.benchmarks.len(), 1);
        assert_eq!(file.benchmarks[0].name, "bm_eigen<f32, (4), (2)>");
        assert_eq!(file.benchmarks[0].cpu_time, 2.25);
    }

    #[test]
    fn test_integer_cpu_time() {
        let file: BenchmarkFile =
            serde_json::from_str(r#"{"benchmarks": [{"name": "n", "cpu_time": 3}]}"#).unwrap();
        assert_eq!(file.benchmarks[0].cpu_time, 3.0);
    }

    #[test]
    fn test_missing_benchmarks_key() {
        let err = serde_json::from_str::<BenchmarkFile>(r#"{"context": {}}"#).unwrap_err();
        assert!(err.to_string().contains("benchmarks"));
    }

    #[test]
    fn test_missing_cpu_time() {
        assert!(serde_json::from_str::<BenchmarkFile>(r#"{"benchmarks": [{"name": "n"}]}"#).is_err());
    }
}
