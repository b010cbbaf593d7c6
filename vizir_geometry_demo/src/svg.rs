// Copyright 2025 the VizIR Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal SVG writer for `vizir_geometry_demo`.

use kurbo::{BezPath, Rect};
use peniko::Color;

#[derive(Debug)]
pub(crate) struct SvgDoc {
    view_box: Rect,
    body: String,
}

impl SvgDoc {
    pub(crate) fn new(view_box: Rect) -> Self {
        Self {
            view_box,
            body: String::new(),
        }
    }

    pub(crate) fn fill_path(&mut self, path: &BezPath, fill: Color) {
        let d = path.to_svg();
        self.body.push_str(&format!(r#"<path d="{d}""#));
        write_paint_attr(&mut self.body, "fill", fill);
        self.body.push_str("/>\n");
    }

    pub(crate) fn stroke_path(&mut self, path: &BezPath, stroke: Color, stroke_width: f64) {
        let d = path.to_svg();
        self.body.push_str(&format!(r#"<path d="{d}" fill="none""#));
        write_paint_attr(&mut self.body, "stroke", stroke);
        self.body
            .push_str(&format!(r#" stroke-width="{stroke_width}"/>"#));
        self.body.push('\n');
    }

    pub(crate) fn to_svg_string(&self) -> String {
        let vb = self.view_box;
        let mut out = String::new();
        out.push_str(r#"<svg xmlns="http://www.w3.org/2000/svg" "#);
        out.push_str(&format!(
            r#"viewBox="{} {} {} {}" width="{}" height="{}">"#,
            vb.x0,
            vb.y0,
            vb.width(),
            vb.height(),
            vb.width(),
            vb.height()
        ));
        out.push('\n');
        out.push_str(&self.body);
        out.push_str("</svg>\n");
        out
    }
}

fn svg_paint(color: Color) -> (String, Option<f64>) {
    let rgba = color.to_rgba8();
    let value = format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b);
    let opacity = if rgba.a == 255 {
        None
    } else {
        Some(f64::from(rgba.a) / 255.0)
    };
    (value, opacity)
}

fn write_paint_attr(out: &mut String, name: &str, color: Color) {
    let (value, opacity) = svg_paint(color);
    out.push_str(&format!(r#" {name}="{value}""#));
    if let Some(o) = opacity {
        out.push_str(&format!(r#" {name}-opacity="{o}""#));
    }
}
