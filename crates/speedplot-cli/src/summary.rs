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

//! Text summary printed for each bucket.

use speedplot_core::{BucketKey, Method, SpeedRatios};
use std::io::{self, Write};

/// Significant digits shown for a ratio.
const RATIO_PRECISION: usize = 3;

/// Minimum width of a ratio column.
const RATIO_WIDTH: usize = 4;

/// The bucket heading shared by the summary and the figure caption.
pub fn caption(key: &BucketKey) -> String {
    format!("[{}][n×{}][{}] => n", key.dtype, key.cols, key.cols)
}

/// Format `value` with `precision` significant digits.
///
/// Fixed notation is used while the decimal exponent is in `-4..precision - 1`
/// and always keeps one digit after the point (`2.0`, `12.0`). Outside that
/// range the result is scientific with trailing zeros removed (`1e+02`,
/// `1.23e-05`).
pub fn format_significant(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return "0.0".to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 - 1 {
        let mantissa = trim_fraction(mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        return format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs());
    }

    let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
    let fixed = format!("{:.*}", decimals, value);
    let trimmed = trim_fraction(&fixed);
    if trimmed.contains('.') {
        trimmed.to_string()
    } else {
        format!("{}.0", trimmed)
    }
}

fn trim_fraction(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

/// Format a speed ratio for the summary: three significant digits, padded to
/// four characters. An undefined ratio prints as `nan`.
pub fn format_ratio(ratio: Option<f64>) -> String {
    let text = format_significant(ratio.unwrap_or(f64::NAN), RATIO_PRECISION);
    format!("{:<width$}", text, width = RATIO_WIDTH)
}

/// Write the three-line summary for one bucket.
///
/// ```text
/// [f32][n×4][4] => n : geometric average:
/// 2.0  faster than eigen
/// 0.5  faster than blaze
/// ```
pub fn write_summary<W: Write>(out: &mut W, key: &BucketKey, ratios: &SpeedRatios) -> io::Result<()> {
    writeln!(out, "{} : geometric average:", caption(key))?;
    for method in Method::COMPARED {
        writeln!(out, "{} faster than {}", format_ratio(ratios.get(method)), method)?;
    }
    Ok(())
}
