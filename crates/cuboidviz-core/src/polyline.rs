//! Eight-point polyline reconstruction.
//!
//! The polyline traces two adjacent faces of a box that share the
//! front-right vertical edge, as two 4-point windows:
//! `ftl, fbl, fbr, ftr | fbr, rbr, rtr, ftr`. The last point of each
//! window is the annotator's own closing corner; geometry replaces it
//! with the exact parallelogram completion.

use crate::error::{Error, Result};
use crate::geom::{fourth_point, points_from_flat, Vec2};

pub type Quad = [Vec2; 4];

/// Completes a window from its first three points.
fn complete(a: Vec2, b: Vec2, c: Vec2) -> Quad {
    [a, b, c, fourth_point(a, b, c)]
}

/// Derives the five faces, in order: front, side, top, bottom, rear.
///
/// Later faces are built from corners of earlier ones, so the order is
/// fixed: top and bottom read the front and side faces, the rear face
/// reads the side, top and bottom faces.
pub fn derive_faces(p: &[Vec2; 8]) -> [Quad; 5] {
    let front = complete(p[0], p[1], p[2]);
    let side = complete(p[4], p[5], p[6]);
    let top = complete(front[0], front[3], side[2]);
    let bottom = complete(front[1], front[2], side[1]);
    let rear = [top[3], side[2], side[1], bottom[3]];
    [front, side, top, bottom, rear]
}

/// Like [`derive_faces`], from a flat list of exactly 16 coordinates.
pub fn derive_faces_flat(flat: &[f64]) -> Result<[Quad; 5]> {
    if flat.len() != 16 {
        return Err(Error::PointCount(flat.len()));
    }
    let p = points_from_flat(flat);
    Ok(derive_faces(&[p[0], p[1], p[2], p[3], p[4], p[5], p[6], p[7]]))
}
