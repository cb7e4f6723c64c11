//! Rotation and projection math for the wireframe view

/// 3-component vector
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Row-major 3x3 matrix
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mat3 {
    m: [[f32; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Self = Self {
        m: [[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]],
    };

    /// Rotation about the X axis, counter-clockwise for positive degrees
    /// when looking down the axis toward the origin
    pub fn rotation_x(deg: f32) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        Self {
            m: [[1.0, 0.0, 0.0], [0.0, c, -s], [0.0, s, c]],
        }
    }

    /// Rotation about the Y axis
    pub fn rotation_y(deg: f32) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        Self {
            m: [[c, 0.0, s], [0.0, 1.0, 0.0], [-s, 0.0, c]],
        }
    }

    /// Rotation about the Z axis
    pub fn rotation_z(deg: f32) -> Self {
        let (s, c) = deg.to_radians().sin_cos();
        Self {
            m: [[c, -s, 0.0], [s, c, 0.0], [0.0, 0.0, 1.0]],
        }
    }

    /// Matrix product `self * other`
    pub fn mul(&self, other: &Self) -> Self {
        let mut m = [[0.0f32; 3]; 3];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, cell) in row.iter_mut().enumerate() {
                *cell = (0..3).map(|k| self.m[i][k] * other.m[k][j]).sum();
            }
        }
        Self { m }
    }

    /// Apply to a vector
    pub fn transform(&self, v: Vec3) -> Vec3 {
        Vec3 {
            x: self.m[0][0] * v.x + self.m[0][1] * v.y + self.m[0][2] * v.z,
            y: self.m[1][0] * v.x + self.m[1][1] * v.y + self.m[1][2] * v.z,
            z: self.m[2][0] * v.x + self.m[2][1] * v.y + self.m[2][2] * v.z,
        }
    }
}

/// Compose the per-axis rotations the way a transform stack applies them:
/// rotate-X, then rotate-Y, then rotate-Z, each an independent axis-angle
/// rotation multiplied in sequence
pub fn orientation_matrix(x_deg: f32, y_deg: f32, z_deg: f32) -> Mat3 {
    Mat3::rotation_x(x_deg)
        .mul(&Mat3::rotation_y(y_deg))
        .mul(&Mat3::rotation_z(z_deg))
}

/// Width over height of one terminal cell; cells are roughly twice as
/// tall as they are wide, so the horizontal axis is stretched to keep the
/// cube square on screen
const CELL_ASPECT: f32 = 0.5;

/// Perspective projection of scene points onto the cell canvas
///
/// The camera sits on the +Z axis at `camera_distance` looking at the
/// origin, matching a scene translated away from a camera at the origin.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// Vertical field of view in degrees
    pub fov_deg: f32,
    /// Points closer to the camera than this are culled
    pub near: f32,
    /// Distance from the camera to the scene origin
    pub camera_distance: f32,
    width: f32,
    height: f32,
}

impl Projection {
    /// Standard view for a canvas of the given cell size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            fov_deg: 45.0,
            near: 0.1,
            camera_distance: 5.0,
            width: f32::from(width),
            height: f32::from(height),
        }
    }

    /// Project a scene-space point to fractional canvas coordinates
    ///
    /// Returns `None` when the point lies on or behind the near plane.
    pub fn project(&self, v: Vec3) -> Option<(f32, f32)> {
        let depth = self.camera_distance - v.z;
        if depth <= self.near {
            return None;
        }

        let f = 1.0 / (self.fov_deg.to_radians() * 0.5).tan();
        let aspect = self.width * CELL_ASPECT / self.height;
        let ndc_x = f / aspect * v.x / depth;
        let ndc_y = f * v.y / depth;

        let col = (ndc_x + 1.0) * 0.5 * self.width;
        let row = (1.0 - ndc_y) * 0.5 * self.height;
        Some((col, row))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f32 = 1e-5;

    fn assert_vec_eq(a: Vec3, b: Vec3) {
        assert!(
            (a.x - b.x).abs() < EPS && (a.y - b.y).abs() < EPS && (a.z - b.z).abs() < EPS,
            "{:?} != {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_rotation_x_90_maps_y_to_z() {
        let r = Mat3::rotation_x(90.0);
        assert_vec_eq(r.transform(Vec3::new(0.0, 1.0, 0.0)), Vec3::new(0.0, 0.0, 1.0));
        assert_vec_eq(r.transform(Vec3::new(0.0, 0.0, 1.0)), Vec3::new(0.0, -1.0, 0.0));
        // The rotation axis is unmoved.
        assert_vec_eq(r.transform(Vec3::new(1.0, 0.0, 0.0)), Vec3::new(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_x_only_orientation_is_pure_x_rotation() {
        // With y and z at zero, the composed transform must equal a lone
        // X-axis rotation applied before anything else.
        let m = orientation_matrix(90.0, 0.0, 0.0);
        let lone = Mat3::rotation_x(90.0);
        let v = Vec3::new(0.3, 0.7, -0.2);
        assert_vec_eq(m.transform(v), lone.transform(v));
    }

    #[test]
    fn test_orientation_matches_sequential_composition() {
        // The combined matrix must equal rotating about Z, then Y, then X
        // applied to the vector in turn, i.e. the transform-stack order
        // rotate-X, rotate-Y, rotate-Z.
        let (x, y, z) = (30.0, 45.0, 60.0);
        let m = orientation_matrix(x, y, z);

        let v = Vec3::new(1.0, -1.0, 0.25);
        let sequential = Mat3::rotation_x(x)
            .transform(Mat3::rotation_y(y).transform(Mat3::rotation_z(z).transform(v)));
        assert_vec_eq(m.transform(v), sequential);
    }

    #[test]
    fn test_rotation_order_is_not_commutative_here() {
        // Guards against silently swapping the composition order.
        let (x, y, z) = (90.0, 90.0, 0.0);
        let ours = orientation_matrix(x, y, z);
        let swapped = Mat3::rotation_y(y).mul(&Mat3::rotation_x(x));
        let v = Vec3::new(0.0, 1.0, 0.0);

        let a = ours.transform(v);
        let b = swapped.transform(v);
        assert!(
            (a.x - b.x).abs() > 0.5 || (a.y - b.y).abs() > 0.5 || (a.z - b.z).abs() > 0.5,
            "orders should disagree for these angles: {:?} vs {:?}",
            a,
            b
        );
    }

    #[test]
    fn test_project_origin_hits_canvas_center() {
        let p = Projection::new(96, 36);
        let (col, row) = p.project(Vec3::default()).unwrap();
        assert!((col - 48.0).abs() < EPS);
        assert!((row - 18.0).abs() < EPS);
    }

    #[test]
    fn test_project_up_is_smaller_row() {
        let p = Projection::new(96, 36);
        let (_, center_row) = p.project(Vec3::default()).unwrap();
        let (_, up_row) = p.project(Vec3::new(0.0, 1.0, 0.0)).unwrap();
        assert!(up_row < center_row, "+Y must render above the center");
    }

    #[test]
    fn test_project_culls_behind_near_plane() {
        let p = Projection::new(96, 36);
        assert!(p.project(Vec3::new(0.0, 0.0, 5.0)).is_none());
        assert!(p.project(Vec3::new(0.0, 0.0, 6.0)).is_none());
    }

    #[test]
    fn test_closer_points_project_larger() {
        let p = Projection::new(96, 36);
        let (far_col, _) = p.project(Vec3::new(1.0, 0.0, -1.0)).unwrap();
        let (near_col, _) = p.project(Vec3::new(1.0, 0.0, 1.0)).unwrap();
        assert!(near_col > far_col, "perspective must magnify nearer points");
    }
}
