//! Cube wireframe model
//!
//! Geometry matches the sensor rig's marker body: one unit square in X/Y
//! and a quarter unit thick in Z, so roll and pitch read clearly even on
//! a low-resolution canvas.

use super::math::{orientation_matrix, Projection, Vec3};
use crate::state::Orientation;

/// Cube corners
pub const VERTICES: [Vec3; 8] = [
    Vec3::new(1.0, -1.0, -0.25),
    Vec3::new(1.0, 1.0, -0.25),
    Vec3::new(-1.0, 1.0, -0.25),
    Vec3::new(-1.0, -1.0, -0.25),
    Vec3::new(1.0, -1.0, 0.25),
    Vec3::new(1.0, 1.0, 0.25),
    Vec3::new(-1.0, -1.0, 0.25),
    Vec3::new(-1.0, 1.0, 0.25),
];

/// The 12 wireframe edges as vertex index pairs
pub const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (0, 3),
    (0, 4),
    (2, 1),
    (2, 3),
    (2, 7),
    (6, 3),
    (6, 4),
    (6, 7),
    (5, 1),
    (5, 4),
    (5, 7),
];

/// A projected line segment in fractional canvas coordinates
pub type Segment = ((f32, f32), (f32, f32));

/// Project the wireframe under the given orientation
///
/// Rotation is applied as rotate-X, then rotate-Y, then rotate-Z. Edges
/// with an endpoint behind the near plane are skipped rather than
/// clipped; at the fixed camera distance this cannot happen for the unit
/// cube.
pub fn wireframe(orientation: &Orientation, projection: &Projection) -> Vec<Segment> {
    let rot = orientation_matrix(
        orientation.x as f32,
        orientation.y as f32,
        orientation.z as f32,
    );

    let projected: Vec<Option<(f32, f32)>> = VERTICES
        .iter()
        .map(|&v| projection.project(rot.transform(v)))
        .collect();

    EDGES
        .iter()
        .filter_map(|&(a, b)| match (projected[a], projected[b]) {
            (Some(pa), Some(pb)) => Some((pa, pb)),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_each_vertex_touches_three_edges() {
        let mut degree = [0usize; 8];
        for &(a, b) in &EDGES {
            degree[a] += 1;
            degree[b] += 1;
        }
        assert!(degree.iter().all(|&d| d == 3), "cube degrees: {:?}", degree);
    }

    #[test]
    fn test_wireframe_has_twelve_edges() {
        let projection = Projection::new(96, 36);
        let segments = wireframe(&Orientation::default(), &projection);
        assert_eq!(segments.len(), 12);
    }

    #[test]
    fn test_identity_orientation_is_symmetric_about_center() {
        let projection = Projection::new(96, 36);
        let segments = wireframe(&Orientation::default(), &projection);

        // Unrotated, the silhouette is centered on the canvas.
        let (min_col, max_col) = segments
            .iter()
            .flat_map(|&(a, b)| [a.0, b.0])
            .fold((f32::MAX, f32::MIN), |(lo, hi), c| (lo.min(c), hi.max(c)));
        let mid = (min_col + max_col) / 2.0;
        assert!((mid - 48.0).abs() < 0.5, "silhouette midline at {}", mid);
    }

    #[test]
    fn test_rotation_moves_the_silhouette() {
        let projection = Projection::new(96, 36);
        let still = wireframe(&Orientation::default(), &projection);
        let turned = wireframe(
            &Orientation {
                x: 30.0,
                y: 45.0,
                z: 10.0,
                elapsed_seconds: 0.0,
            },
            &projection,
        );
        assert_ne!(still, turned);
    }
}
