//! Turns one annotated shape into the list of figures drawn for it.

use crate::color::Color;
use crate::cuboid::Cuboid;
use crate::error::Result;
use crate::geom::{points_from_flat, BBox2, Vec2};
use crate::model::{Shape, ShapeType};
use crate::polyline;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FigureKind {
    /// Closed, unfilled outline.
    Polygon,
    /// Open polyline through the points.
    Line,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Figure {
    pub kind: FigureKind,
    pub points: Vec<Vec2>,
    pub color: Color,
}

impl Figure {
    pub fn polygon(points: impl Into<Vec<Vec2>>, color: Color) -> Self {
        Self {
            kind: FigureKind::Polygon,
            points: points.into(),
            color,
        }
    }

    pub fn line(points: impl Into<Vec<Vec2>>, color: Color) -> Self {
        Self {
            kind: FigureKind::Line,
            points: points.into(),
            color,
        }
    }

    pub fn bbox(&self) -> BBox2 {
        let mut bbox = BBox2::empty();
        for p in &self.points {
            bbox.include_point(*p);
        }
        bbox
    }
}

/// Fixed colors that do not come from the shape's label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    /// Raw polyline and front diagonals of a four-corner box.
    pub guide: Color,
    /// Faces of an eight-point box.
    pub face: Color,
    /// Raw polyline of an eight-point box.
    pub polyline: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            guide: Color::rgb(0x3d, 0x3d, 0xf5),
            face: Color::rgb(0xff, 0xd5, 0x00),
            polyline: Color::rgb(0x3d, 0x3d, 0xf5),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    NotPolyline,
    NoFaceCode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Reconstruction {
    Figures(Vec<Figure>),
    Skipped(SkipReason),
}

/// Reconstructs `shape` into figures in draw order.
///
/// 16 coordinates select the eight-point variant. Anything else needs a
/// face code; without one the shape is skipped before its points are
/// looked at, and with one it must carry exactly 8 coordinates.
pub fn reconstruct(shape: &Shape, palette: &Palette) -> Result<Reconstruction> {
    if shape.shape_type != ShapeType::Polyline {
        return Ok(Reconstruction::Skipped(SkipReason::NotPolyline));
    }

    if shape.points.len() == 16 {
        return Ok(Reconstruction::Figures(eight_point_figures(shape, palette)?));
    }

    let Some(code) = shape.face_code() else {
        return Ok(Reconstruction::Skipped(SkipReason::NoFaceCode));
    };
    let cuboid = Cuboid::from_flat(code, &shape.points)?;
    let color: Color = shape.color.parse()?;

    let mut figures = vec![
        Figure::polygon(cuboid.rear(), color),
        Figure::polygon(cuboid.left(), color),
        Figure::polygon(cuboid.right(), color),
        Figure::polygon(cuboid.front(), color),
        Figure::line(points_from_flat(&shape.points), palette.guide),
    ];
    for diagonal in cuboid.front_diagonals() {
        figures.push(Figure::line(diagonal, palette.guide));
    }
    Ok(Reconstruction::Figures(figures))
}

fn eight_point_figures(shape: &Shape, palette: &Palette) -> Result<Vec<Figure>> {
    let faces = polyline::derive_faces_flat(&shape.points)?;
    let mut figures: Vec<Figure> = faces
        .into_iter()
        .map(|f| Figure::polygon(f, palette.face))
        .collect();
    figures.push(Figure::line(points_from_flat(&shape.points), palette.polyline));
    Ok(figures)
}

/// Bounding box of everything drawn for a shape, or `None` if nothing is.
pub fn figures_bbox(figures: &[Figure]) -> Option<BBox2> {
    let bbox = figures
        .iter()
        .fold(BBox2::empty(), |acc, f| acc.union(&f.bbox()));
    if bbox.is_empty() {
        None
    } else {
        Some(bbox)
    }
}
