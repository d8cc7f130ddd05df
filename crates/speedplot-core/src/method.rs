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

//! The three implementation variants under comparison.

use std::fmt;

/// A benchmarked implementation variant.
///
/// Each variant is identified in benchmark names by a fixed 5-character tag.
/// [`Method::Simd`] is the baseline every other method is divided by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Method {
    /// Blaze library implementation (`blaze`).
    Blaze,
    /// Eigen library implementation (`eigen`).
    Eigen,
    /// Hand-written SIMD implementation (`simd_`).
    Simd,
}

impl Method {
    /// All methods, in series storage order.
    pub const ALL: [Method; 3] = [Method::Blaze, Method::Eigen, Method::Simd];

    /// The method all ratios are computed against.
    pub const BASELINE: Method = Method::Simd;

    /// Methods compared against the baseline, in report order.
    pub const COMPARED: [Method; 2] = [Method::Eigen, Method::Blaze];

    /// Resolve a 5-character name tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "blaze" => Some(Method::Blaze),
            "eigen" => Some(Method::Eigen),
            "simd_" => Some(Method::Simd),
            _ => None,
        }
    }

    /// The tag as it appears in benchmark names.
    pub fn tag(self) -> &'static str {
        match self {
            Method::Blaze => "blaze",
            Method::Eigen => "eigen",
            Method::Simd => "simd_",
        }
    }

    /// Human-readable label used in summaries and legends.
    pub fn label(self) -> &'static str {
        match self {
            Method::Blaze => "blaze",
            Method::Eigen => "eigen",
            Method::Simd => "simd",
        }
    }

    pub(crate) fn index(self) -> usize {
        match self {
            Method::Blaze => 0,
            Method::Eigen => 1,
            Method::Simd => 2,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_roundtrip() {
        for method in Method::ALL {
            assert_eq!(Method::from_tag(method.tag()), Some(method));
        }
    }

    #[test]
    fn test_unknown_tags() {
        assert_eq!(Method::from_tag("loop_"), None);
        assert_eq!(Method::from_tag("simd"), None);
        assert_eq!(Method::from_tag("EIGEN"), None);
        assert_eq!(Method::from_tag(""), None);
    }

    #[test]
    fn test_indices_are_distinct() {
        let mut seen: Vec<usize> = Method::ALL.iter().map(|m| m.index()).collect();
        seen.sort_unstable();
        assert_eq!(seen, vec![0, 1, 2]);
    }

    #[test]
    fn test_baseline_not_compared() {
        assert!(!Method::COMPARED.contains(&Method::BASELINE));
        assert_eq!(Method::Simd.to_string(), "simd");
    }
}
