// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Demo binary for `vizir_geometry`.
//!
//! Lays out a doughnut, resolves a few taps against it, smooths a time series and snaps its
//! markers onto the curve, then writes `vizir_geometry_demo.svg`.

mod svg;

use kurbo::{Circle, Point, Rect, Shape};
use peniko::Color;
use peniko::color::palette::css;
use tracing_subscriber::EnvFilter;
use vizir_geometry::{
    CurveSampler, CurveSmoother, MeasuredPath, RadialLayout, RadialMapper, encode_point,
};

/// Gap, in degrees, painted at the start of each slice.
const SLICE_MARGIN: f64 = 3.0;
const START_ANGLE: f64 = 3.0;
const TOLERANCE: f64 = 0.1;

fn main() {
    init_logging();

    let mut svg = svg::SvgDoc::new(Rect::new(0.0, 0.0, 800.0, 300.0));
    doughnut_demo(&mut svg);
    line_demo(&mut svg);

    let out = "vizir_geometry_demo.svg";
    if let Err(err) = std::fs::write(out, svg.to_svg_string()) {
        tracing::error!(%err, out, "failed to write svg");
        std::process::exit(1);
    }
    println!("wrote {out}");
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn doughnut_demo(svg: &mut svg::SvgDoc) {
    let values = [10.0, 20.0, 30.0];
    let colors = [css::TOMATO, css::STEEL_BLUE, css::GOLDENROD];

    let mut mapper = RadialMapper::new();
    RadialLayout::doughnut(Rect::new(0.0, 0.0, 300.0, 300.0), 1.0, 1).apply(&mut mapper);
    mapper.register_values(&values, START_ANGLE);

    // A second layout pass with the same dataset keeps the registered segments.
    RadialLayout::doughnut(Rect::new(0.0, 0.0, 300.0, 300.0), 1.0, 1).apply(&mut mapper);
    let rebuilt = mapper.register_values(&values, START_ANGLE);
    tracing::info!(rebuilt, segments = mapper.segments().len(), "doughnut laid out");

    for (segment, color) in mapper.segments().iter().zip(colors) {
        let sector = mapper.sector(segment, SLICE_MARGIN);
        svg.fill_path(&sector.to_path(TOLERANCE), color);
    }

    let c = mapper.center();
    let taps = [
        Point::new(c.x - 100.0, c.y + 20.0),
        Point::new(c.x + 95.0, c.y + 30.0),
        Point::new(c.x, c.y - 110.0),
        c,
        Point::new(c.x + 200.0, c.y),
    ];
    for tap in taps {
        let angle = mapper.angle_of(tap);
        match mapper.selection_at(tap) {
            Some(sel) => tracing::info!(
                x = tap.x,
                y = tap.y,
                angle,
                data_index = sel.data_index,
                value = sel.value,
                "tap selected segment"
            ),
            None => tracing::info!(x = tap.x, y = tap.y, angle, "tap missed"),
        }
        let bytes = encode_point(tap);
        tracing::debug!(?bytes, "encoded tap");
        svg.fill_path(&Circle::new(tap, 3.0).to_path(TOLERANCE), css::BLACK);
    }
}

fn line_demo(svg: &mut svg::SvgDoc) {
    // Hourly samples, projected into a 400x200 plot area at (350, 50).
    let samples = [12.0, 18.0, 9.0, 22.0, 25.0, 14.0, 16.0, 30.0, 21.0];
    let (x0, y0, w, h) = (350.0, 50.0, 400.0, 200.0);
    let max = samples.iter().copied().fold(f64::MIN, f64::max);
    let step = w / (samples.len() - 1) as f64;
    let vertices: Vec<Point> = samples
        .iter()
        .enumerate()
        .map(|(i, v)| Point::new(x0 + step * i as f64, y0 + h - v / max * h))
        .collect();

    let smoothed = CurveSmoother::default().smooth(&vertices, false);
    svg.stroke_path(&smoothed.to_bez_path(), css::STEEL_BLUE, 2.0);

    // The same series as a closed area down to the baseline.
    let mut area = vertices.clone();
    area.push(Point::new(x0 + w, y0 + h));
    area.push(Point::new(x0, y0 + h));
    let fill = CurveSmoother::default().smooth(&area, true);
    svg.fill_path(&fill.to_bez_path(), Color::from_rgba8(70, 130, 180, 60));

    let mut markers = vertices.clone();
    let curve = smoothed.measure(MeasuredPath::DEFAULT_ACCURACY);
    let updates = CurveSampler::new().snap(&curve, &mut markers);
    tracing::info!(
        markers = markers.len(),
        updates,
        cubics = smoothed.cubics().count(),
        "line markers snapped"
    );

    for (raw, snapped) in vertices.iter().zip(&markers) {
        svg.fill_path(&Circle::new(*raw, 2.0).to_path(TOLERANCE), css::LIGHT_GRAY);
        svg.fill_path(&Circle::new(*snapped, 3.0).to_path(TOLERANCE), css::BLACK);
    }
}
