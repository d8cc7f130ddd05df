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

//! End-to-end tests for the speedplot binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::{tempdir, TempDir};

/// Test helper to create a speedplot command running in `dir`
fn speedplot_cmd(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("speedplot").expect("Failed to find speedplot binary");
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// Benchmark records for a full sweep of one bucket.
///
/// Times are `factor * rows` so every point-wise ratio is a factor ratio.
fn sweep(dtype: &str, cols: u32, methods: &[(&str, f64)]) -> Vec<serde_json::Value> {
    let mut records = Vec::new();
    for rows in (1..=10).map(|i| i * 16) {
        for (tag, factor) in methods {
            records.push(serde_json::json!({
                "name": format!("bm_{}<{}, ({}), ({})>", tag, dtype, rows, cols),
                "cpu_time": factor * f64::from(rows),
                "iterations": 1000,
            }));
        }
    }
    records
}

fn all_methods() -> Vec<(&'static str, f64)> {
    vec![("eigen", 2.0), ("blaze", 0.5), ("simd_", 1.0), ("loop_", 8.0)]
}

fn write_results(dir: &Path, name: &str, records: Vec<serde_json::Value>) -> PathBuf {
    let path = dir.join(name);
    let doc = serde_json::json!({ "context": { "host_name": "bench" }, "benchmarks": records });
    fs::write(&path, serde_json::to_string_pretty(&doc).unwrap()).expect("Failed to write results");
    path
}

fn workspace() -> TempDir {
    tempdir().expect("Failed to create temp dir")
}

// ===== Help and Version =====

#[test]
fn test_help() {
    let dir = workspace();
    speedplot_cmd(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("FILE"));
}

#[test]
fn test_version() {
    let dir = workspace();
    speedplot_cmd(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("speedplot"));
}

// ===== Reports =====

#[test]
fn test_summary_and_plot() {
    let dir = workspace();
    let input = write_results(dir.path(), "f32.json", sweep("f32", 4, &all_methods()));

    speedplot_cmd(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(
            "[f32][n×4][4] => n : geometric average:\n\
             2.0  faster than eigen\n\
             0.5  faster than blaze\n",
        );

    let plot = dir.path().join("out_plots").join("f32_4_cols.svg");
    let svg = fs::read_to_string(&plot).expect("plot was not written");
    assert!(svg.starts_with("<svg"));
    assert!(svg.contains("absolute time"));
    assert!(svg.contains("relative time"));
}

#[test]
fn test_buckets_reported_in_order() {
    let dir = workspace();
    let a = write_results(dir.path(), "a.json", sweep("f64", 2, &all_methods()));
    let b = write_results(dir.path(), "b.json", sweep("f32", 8, &all_methods()));

    let output = speedplot_cmd(dir.path()).arg(&a).arg(&b).output().unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let f32_pos = stdout.find("[f32][n×8][8]").unwrap();
    let f64_pos = stdout.find("[f64][n×2][2]").unwrap();
    assert!(f32_pos < f64_pos);

    let out = dir.path().join("out_plots");
    assert!(out.join("f32_8_cols.svg").exists());
    assert!(out.join("f64_2_cols.svg").exists());
}

#[test]
fn test_no_files_creates_output_dir() {
    let dir = workspace();
    speedplot_cmd(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
    assert!(dir.path().join("out_plots").is_dir());
}

#[test]
fn test_short_sweep_prints_nan() {
    let dir = workspace();
    let records: Vec<_> = sweep("f32", 2, &all_methods())
        .into_iter()
        .take(4 * 5)
        .collect();
    let input = write_results(dir.path(), "short.json", records);

    speedplot_cmd(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("nan  faster than eigen"))
        .stdout(predicate::str::contains("nan  faster than blaze"));
}

// ===== Skipped Input =====

#[test]
fn test_invalid_json_is_skipped() {
    let dir = workspace();
    let input = write_results(dir.path(), "good.json", sweep("f32", 4, &all_methods()));
    let junk = dir.path().join("notes.txt");
    fs::write(&junk, "not json at all").unwrap();

    speedplot_cmd(dir.path())
        .arg(&junk)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("2.0  faster than eigen"));
}

// ===== Errors =====

#[test]
fn test_missing_file_fails() {
    let dir = workspace();
    speedplot_cmd(dir.path())
        .arg("does_not_exist.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"))
        .stderr(predicate::str::contains("does_not_exist.json"));
}

#[test]
fn test_missing_method_fails() {
    let dir = workspace();
    let input = write_results(
        dir.path(),
        "partial.json",
        sweep("f32", 4, &[("eigen", 2.0), ("simd_", 1.0)]),
    );

    speedplot_cmd(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("blaze"));
}

#[test]
fn test_missing_benchmarks_key_fails() {
    let dir = workspace();
    let input = dir.path().join("other.json");
    fs::write(&input, r#"{"results": []}"#).unwrap();

    speedplot_cmd(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}

#[test]
fn test_malformed_name_fails() {
    let dir = workspace();
    let input = dir.path().join("bad.json");
    fs::write(
        &input,
        r#"{"benchmarks": [{"name": "BM_MatVec/64", "cpu_time": 1.0}]}"#,
    )
    .unwrap();

    speedplot_cmd(dir.path())
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("BM_MatVec/64"));
}
