//! Figure drawing with tiny-skia on top of an `image` RGBA buffer.

use crate::config::RenderConfig;
use crate::error::RenderError;
use cuboidviz_core::figure::{reconstruct, Figure, FigureKind, Reconstruction, SkipReason};
use cuboidviz_core::model::Shape;
use image::RgbaImage;
use serde::Serialize;
use tiny_skia::{IntSize, Paint, Path, PathBuilder, Pixmap, Stroke, Transform};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShapeFailure {
    /// Position of the shape in the frame's shape list.
    pub index: usize,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderReport {
    pub line_width: u32,
    pub drawn: usize,
    pub skipped: usize,
    pub failed: Vec<ShapeFailure>,
}

/// Draws every shape of a frame onto `img`, in order.
///
/// A shape that cannot be reconstructed is recorded in the report and
/// leaves the image untouched; the remaining shapes are still drawn.
pub fn render_shapes(
    img: &mut RgbaImage,
    shapes: &[Shape],
    cfg: &RenderConfig,
) -> Result<RenderReport, RenderError> {
    let mut report = RenderReport {
        line_width: cfg.line_width(img.width(), img.height()),
        ..RenderReport::default()
    };

    let mut figures: Vec<Figure> = Vec::new();
    for (index, shape) in shapes.iter().enumerate() {
        match reconstruct(shape, &cfg.palette) {
            Ok(Reconstruction::Figures(mut fs)) => {
                report.drawn += 1;
                figures.append(&mut fs);
            }
            Ok(Reconstruction::Skipped(reason)) => {
                report.skipped += 1;
                log::debug!("shape {index}: skipped ({})", skip_label(reason));
            }
            Err(err) => {
                log::warn!("shape {index}: {err}");
                report.failed.push(ShapeFailure {
                    index,
                    message: err.to_string(),
                });
            }
        }
    }

    if !figures.is_empty() {
        draw_figures(img, &figures, report.line_width)?;
    }
    Ok(report)
}

fn skip_label(reason: SkipReason) -> &'static str {
    match reason {
        SkipReason::NotPolyline => "not a polyline",
        SkipReason::NoFaceCode => "no face code",
    }
}

/// Strokes `figures` onto `img` without anti-aliasing, later figures over
/// earlier ones.
pub fn draw_figures(img: &mut RgbaImage, figures: &[Figure], line_width: u32) -> Result<(), RenderError> {
    let (width, height) = (img.width(), img.height());
    let mut pixmap = IntSize::from_wh(width, height)
        .and_then(|size| Pixmap::from_vec(img.as_raw().clone(), size))
        .ok_or(RenderError::Surface { width, height })?;

    let stroke = Stroke {
        width: line_width as f32,
        ..Stroke::default()
    };

    for figure in figures {
        let Some(path) = build_path(figure) else {
            continue;
        };
        let [r, g, b, a] = figure.color.to_rgba_u8();
        let mut paint = Paint::default();
        paint.set_color_rgba8(r, g, b, a);
        paint.anti_alias = false;
        pixmap.stroke_path(&path, &paint, &stroke, Transform::identity(), None);
    }

    img.copy_from_slice(pixmap.data());
    Ok(())
}

/// `None` for figures with nothing to draw: fewer than two points or a
/// non-finite coordinate.
fn build_path(figure: &Figure) -> Option<Path> {
    if figure.points.len() < 2 || !figure.points.iter().all(|p| p.is_finite()) {
        return None;
    }

    let mut pb = PathBuilder::new();
    let first = figure.points[0];
    pb.move_to(first.x as f32, first.y as f32);
    for p in &figure.points[1..] {
        pb.line_to(p.x as f32, p.y as f32);
    }
    if figure.kind == FigureKind::Polygon {
        pb.close();
    }
    pb.finish()
}
