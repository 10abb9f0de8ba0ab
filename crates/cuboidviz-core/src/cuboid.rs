//! Four-corner cuboid reconstruction.
//!
//! An annotator marks four corners of a box seen in perspective-free
//! projection and tags which face they belong to. Every hidden corner is
//! then one parallelogram completion away from three known ones.

use crate::error::{Error, Result};
use crate::geom::{fourth_point, points_from_flat, Vec2};
use crate::model::FaceCode;
use serde::{Deserialize, Serialize};

/// Corner roles: front/rear, top/bottom, left/right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Corner {
    FrontTopLeft,
    FrontTopRight,
    FrontBottomLeft,
    FrontBottomRight,
    RearTopLeft,
    RearTopRight,
    RearBottomLeft,
    RearBottomRight,
}

impl Corner {
    const fn index(self) -> usize {
        self as usize
    }
}

use Corner::{
    FrontBottomLeft as FBL, FrontBottomRight as FBR, FrontTopLeft as FTL, FrontTopRight as FTR,
    RearBottomLeft as RBL, RearBottomRight as RBR, RearTopLeft as RTL, RearTopRight as RTR,
};

/// `target = fourth_point(from[0], from[1], from[2])`.
#[derive(Debug, Clone, Copy)]
struct Derivation {
    target: Corner,
    from: [Corner; 3],
}

const fn derive(target: Corner, a: Corner, b: Corner, c: Corner) -> Derivation {
    Derivation {
        target,
        from: [a, b, c],
    }
}

/// Roles of the four annotated points and the order in which the hidden
/// corners are completed. Each step only reads corners that are annotated
/// or derived by an earlier step.
#[derive(Debug, Clone, Copy)]
struct Recipe {
    inputs: [Corner; 4],
    steps: [Derivation; 4],
}

static RECIPES: [(FaceCode, Recipe); 4] = [
    (
        FaceCode::One,
        Recipe {
            inputs: [FTL, FBL, FBR, RBR],
            steps: [
                derive(FTR, FTL, FBL, FBR),
                derive(RTR, FTR, FBR, RBR),
                derive(RTL, FTL, FTR, RTR),
                derive(RBL, RTL, RTR, RBR),
            ],
        },
    ),
    (
        FaceCode::Two,
        Recipe {
            inputs: [FTR, RTR, RBR, RBL],
            steps: [
                derive(FBR, FTR, RTR, RBR),
                derive(FBL, FBR, RBR, RBL),
                derive(RTL, RTR, RBR, RBL),
                derive(FTL, RTL, RTR, FTR),
            ],
        },
    ),
    (
        FaceCode::Three,
        Recipe {
            inputs: [RTL, RBL, FBL, FBR],
            steps: [
                derive(FTL, RTL, RBL, FBL),
                derive(FTR, FTL, FBL, FBR),
                derive(RTR, RTL, FTL, FTR),
                derive(RBR, RTR, FTR, FBR),
            ],
        },
    ),
    (
        FaceCode::Four,
        Recipe {
            inputs: [RTR, RBR, RBL, FBL],
            steps: [
                derive(RTL, RTR, RBR, RBL),
                derive(FTL, RTL, RBL, FBL),
                derive(FTR, RTR, RTL, FTL),
                derive(FBR, FTR, FTL, FBL),
            ],
        },
    ),
];

fn recipe(code: FaceCode) -> &'static Recipe {
    &RECIPES[code as usize].1
}

/// Roles of the four annotated points for `code`, in annotation order.
pub fn input_roles(code: FaceCode) -> [Corner; 4] {
    recipe(code).inputs
}

/// All eight corners of a projected box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cuboid {
    corners: [Vec2; 8],
}

impl Cuboid {
    /// Completes the box from the four points annotated for `code`.
    pub fn reconstruct(code: FaceCode, points: [Vec2; 4]) -> Self {
        let recipe = recipe(code);
        let mut corners = [Vec2::new(0.0, 0.0); 8];
        for (role, p) in recipe.inputs.iter().zip(points) {
            corners[role.index()] = p;
        }
        for step in &recipe.steps {
            let [a, b, c] = step.from.map(|r| corners[r.index()]);
            corners[step.target.index()] = fourth_point(a, b, c);
        }
        Self { corners }
    }

    /// Like [`Cuboid::reconstruct`], from a flat list of exactly 8 coordinates.
    pub fn from_flat(code: FaceCode, flat: &[f64]) -> Result<Self> {
        if flat.len() != 8 {
            return Err(Error::PointCount(flat.len()));
        }
        let p = points_from_flat(flat);
        Ok(Self::reconstruct(code, [p[0], p[1], p[2], p[3]]))
    }

    pub fn corner(&self, corner: Corner) -> Vec2 {
        self.corners[corner.index()]
    }

    fn quad(&self, roles: [Corner; 4]) -> [Vec2; 4] {
        roles.map(|r| self.corner(r))
    }

    pub fn rear(&self) -> [Vec2; 4] {
        self.quad([RTL, RTR, RBR, RBL])
    }

    pub fn left(&self) -> [Vec2; 4] {
        self.quad([FTL, FBL, RBL, RTL])
    }

    pub fn right(&self) -> [Vec2; 4] {
        self.quad([FTR, FBR, RBR, RTR])
    }

    pub fn front(&self) -> [Vec2; 4] {
        self.quad([FTL, FTR, FBR, FBL])
    }

    /// The two front-face diagonals, `ftl-fbr` then `ftr-fbl`.
    pub fn front_diagonals(&self) -> [[Vec2; 2]; 2] {
        [
            [self.corner(FTL), self.corner(FBR)],
            [self.corner(FTR), self.corner(FBL)],
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipes_are_indexed_by_code() {
        for code in FaceCode::ALL {
            assert_eq!(code, RECIPES[code as usize].0);
        }
    }

    #[test]
    fn every_recipe_only_reads_known_corners() {
        for (code, recipe) in &RECIPES {
            let mut known: Vec<Corner> = recipe.inputs.to_vec();
            for step in &recipe.steps {
                for c in step.from {
                    assert!(known.contains(&c), "{code:?}: {c:?} read before it is known");
                }
                assert!(!known.contains(&step.target), "{code:?}: {:?} derived twice", step.target);
                known.push(step.target);
            }
            assert_eq!(8, known.len());
        }
    }
}
