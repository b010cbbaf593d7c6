// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Snapping point markers onto a smoothed curve.

extern crate alloc;

use kurbo::Point;

use crate::ArcLengthPath;
#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Moves vertex y-coordinates onto a curve by walking it at fixed arc-length steps.
///
/// At every sample, the first vertex (in input order) whose x lies within `threshold` of the
/// sample's x and closer than any earlier sample takes the sample's y. Each sample moves at
/// most one vertex, and vertices outside the curve's horizontal extent are never touched.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurveSampler {
    threshold: f64,
    step: f64,
}

impl Default for CurveSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl CurveSampler {
    /// Maximum horizontal distance, in scene units, between a vertex and a matching sample.
    pub const DEFAULT_THRESHOLD: f64 = 1.0;
    /// Arc-length distance between samples, in scene units.
    pub const DEFAULT_STEP: f64 = 1.0;

    /// Creates a sampler with unit threshold and unit step.
    pub fn new() -> Self {
        Self {
            threshold: Self::DEFAULT_THRESHOLD,
            step: Self::DEFAULT_STEP,
        }
    }

    /// Sets the matching threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Sets the sampling step. Non-positive or non-finite steps are ignored.
    pub fn with_step(mut self, step: f64) -> Self {
        if step.is_finite() && step > 0.0 {
            self.step = step;
        }
        self
    }

    /// The matching threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// The sampling step.
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Snaps `vertices` onto `path` and returns how many y-coordinates were overwritten.
    ///
    /// Samples are taken at `0, step, 2 * step, ...` strictly below the whole-unit part of
    /// the path length, so a path shorter than one unit leaves every vertex untouched.
    pub fn snap<P: ArcLengthPath + ?Sized>(&self, path: &P, vertices: &mut [Point]) -> usize {
        let limit = path.length().floor();
        let Some(bounds) = path.bounds() else {
            return 0;
        };
        if !(limit > 0.0) || vertices.is_empty() {
            return 0;
        }

        let mut best = alloc::vec![f64::INFINITY; vertices.len()];
        let mut updates = 0;
        let mut samples = 0_u32;
        let mut distance = 0.0;
        while distance < limit {
            let Some(pos) = path.point_at(distance) else {
                break;
            };
            for (vertex, best) in vertices.iter_mut().zip(best.iter_mut()) {
                if vertex.x < bounds.x0 || vertex.x > bounds.x1 {
                    continue;
                }
                let diff = (vertex.x - pos.x).abs();
                if diff < self.threshold && diff < *best {
                    vertex.y = pos.y;
                    *best = diff;
                    updates += 1;
                    break;
                }
            }
            samples += 1;
            distance = f64::from(samples) * self.step;
        }

        tracing::debug!(
            length = path.length(),
            samples,
            vertices = vertices.len(),
            updates,
            "snapped markers to curve"
        );
        updates
    }
}
