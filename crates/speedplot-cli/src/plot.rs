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

//! Two-panel comparison figures.
//!
//! The left panel shows absolute times per method against row count, the
//! right panel the point-wise ratio of each compared method to the baseline
//! with a 1.0 reference line. Both panels start their y axis at zero.

use crate::config::ReportConfig;
use crate::error::CliError;
use crate::report::BucketReport;
use crate::summary::caption;
use plotters::coord::Shift;
use plotters::prelude::*;
use speedplot_core::{BucketKey, Method};
use std::ops::Range;
use std::path::{Path, PathBuf};

const PANEL_BACKGROUND: RGBColor = RGBColor(229, 229, 229);
const REFERENCE_COLOR: RGBColor = RGBColor(119, 119, 119);
const X_LABEL: &str = "n rows";

/// One labelled line in a panel.
#[derive(Debug, Clone)]
pub struct Curve {
    /// Legend text.
    pub label: String,
    /// Line color.
    pub color: RGBColor,
    /// (x, y) points in drawing order.
    pub points: Vec<(f64, f64)>,
}

impl Curve {
    fn new(label: impl Into<String>, color: RGBColor, points: Vec<(f64, f64)>) -> Self {
        Self {
            label: label.into(),
            color,
            points,
        }
    }
}

fn method_color(method: Method) -> RGBColor {
    match method {
        Method::Eigen => RGBColor(226, 74, 51),
        Method::Blaze => RGBColor(52, 138, 189),
        Method::Simd => RGBColor(152, 142, 213),
    }
}

/// File name for a bucket's figure: `<dtype>_<cols>_cols.svg`.
///
/// Characters of the element type that are unsafe in a file name are
/// replaced with `_`.
pub fn plot_file_name(key: &BucketKey) -> String {
    let dtype: String = key
        .dtype
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.') {
                c
            } else {
                '_'
            }
        })
        .collect();
    format!("{}_{}_cols.svg", dtype, key.cols)
}

/// Curves of the absolute-time panel: eigen, blaze, then the baseline.
pub fn absolute_curves(report: &BucketReport) -> Vec<Curve> {
    [Method::Eigen, Method::Blaze, Method::BASELINE]
        .into_iter()
        .map(|m| Curve::new(m.label(), method_color(m), report.absolute_curve(m)))
        .collect()
}

/// Curves of the relative-time panel: each compared method over the
/// baseline, plus the 1.0 reference.
pub fn relative_curves(report: &BucketReport) -> Result<Vec<Curve>, CliError> {
    let mut curves = Vec::with_capacity(Method::COMPARED.len() + 1);
    for method in Method::COMPARED {
        curves.push(Curve::new(
            format!("{} / {}", method, Method::BASELINE),
            method_color(method),
            report.relative_curve(method)?,
        ));
    }
    curves.push(Curve::new(
        Method::BASELINE.label(),
        REFERENCE_COLOR,
        report.reference_curve(),
    ));
    Ok(curves)
}

/// X range covering every point, widened when degenerate.
fn x_range(curves: &[Curve]) -> Range<f64> {
    let (min, max) = curves
        .iter()
        .flat_map(|c| c.points.iter().map(|&(x, _)| x))
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| (lo.min(x), hi.max(x)));
    if !min.is_finite() || !max.is_finite() {
        0.0..1.0
    } else if min == max {
        (min - 1.0)..(max + 1.0)
    } else {
        min..max
    }
}

/// Y range from zero to just above the largest finite value.
fn y_range(curves: &[Curve]) -> Range<f64> {
    let max = curves
        .iter()
        .flat_map(|c| c.points.iter().map(|&(_, y)| y))
        .filter(|y| y.is_finite())
        .fold(0.0f64, f64::max);
    if max > 0.0 {
        0.0..max * 1.05
    } else {
        0.0..1.0
    }
}

fn draw_panel(
    area: &DrawingArea<SVGBackend<'_>, Shift>,
    title: &str,
    curves: &[Curve],
    path: &Path,
) -> Result<(), CliError> {
    let err = |e: DrawingAreaErrorKind<std::io::Error>| CliError::plot(path, e);

    let mut chart = ChartBuilder::on(area)
        .caption(title, ("sans-serif", 18))
        .margin(10)
        .x_label_area_size(35)
        .y_label_area_size(55)
        .build_cartesian_2d(x_range(curves), y_range(curves))
        .map_err(err)?;

    chart.plotting_area().fill(&PANEL_BACKGROUND).map_err(err)?;
    chart
        .configure_mesh()
        .bold_line_style(WHITE)
        .light_line_style(WHITE.mix(0.5))
        .x_desc(X_LABEL)
        .draw()
        .map_err(err)?;

    for curve in curves {
        let color = curve.color;
        chart
            .draw_series(LineSeries::new(curve.points.iter().copied(), color.stroke_width(2)))
            .map_err(err)?
            .label(curve.label.as_str())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(2)));
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperLeft)
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(err)?;

    Ok(())
}

/// Render the figure for one bucket into the configured output directory.
///
/// Returns the path of the written file.
pub fn render(report: &BucketReport, config: &ReportConfig) -> Result<PathBuf, CliError> {
    let path = config.output_dir.join(plot_file_name(&report.key));
    let relative = relative_curves(report)?;
    let absolute = absolute_curves(report);

    {
        let root = SVGBackend::new(&path, config.figure_size).into_drawing_area();
        root.fill(&WHITE).map_err(|e| CliError::plot(&path, e))?;
        let titled = root
            .titled(&caption(&report.key), ("sans-serif", 22))
            .map_err(|e| CliError::plot(&path, e))?;

        let panels = titled.split_evenly((1, 2));
        draw_panel(&panels[0], "absolute time", &absolute, &path)?;
        draw_panel(&panels[1], "relative time", &relative, &path)?;

        root.present().map_err(|e| CliError::plot(&path, e))?;
    }
    Ok(path)
}
