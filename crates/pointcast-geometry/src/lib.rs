//! Pure math/data for screen and world coordinates in Pointcast
//!
//! This crate contains the geometry primitives shared by the input pipeline:
//! screen-space points and displacement vectors, plus the 3D point/vector
//! pair carried by ray-cast results.

mod geometry;

pub use geometry::*;

pub mod prelude {
    pub use crate::geometry::{Point, Point3, Vector, Vector3};
}
