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

//! Speedplot command line interface

use clap::Parser;
use speedplot_cli::{run, ReportConfig};
use std::io;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Speedplot - benchmark speed-ratio reports
///
/// Summarizes how much faster the simd kernels are than eigen and blaze
/// for every (element type, column count) combination found in the given
/// benchmark result files, and writes comparison plots to `out_plots/`.
///
/// # Examples
///
/// ```bash
/// # Report on two result files
/// speedplot results_f32.json results_f64.json
///
/// # Show which files were skipped and why
/// RUST_LOG=info speedplot results/*.json
/// ```
#[derive(Parser)]
#[command(name = "speedplot")]
#[command(author, version, about = "Speedplot - benchmark speed-ratio reports", long_about = None)]
struct Cli {
    /// Benchmark result files (JSON, `{"benchmarks": [...]}`)
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,
}

fn main() -> ExitCode {
    // Logs go to stderr; stdout carries only the summaries.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = ReportConfig::default();

    let stdout = io::stdout();
    match run(&cli.files, &config, &mut stdout.lock()) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
