use glam::Vec3;

/// Where a face sits on the cube and which world axes its grid runs along.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FaceOrientation {
    /// Index of the world axis the face normal lies on (0 = x, 1 = y, 2 = z)
    pub normal_axis: usize,
    /// The two remaining world axes, in increasing order. Row steps go along
    /// the first, column steps along the second.
    pub moving_axes: [usize; 2],
    /// +1.0 for faces on the positive side, -1.0 otherwise
    pub sign: f32,
}

/// Face order is fixed: +Z, +X, -Z, -X, +Y, -Y.
pub const FACES: [FaceOrientation; 6] = [
    FaceOrientation::new(2, 1.0),
    FaceOrientation::new(0, 1.0),
    FaceOrientation::new(2, -1.0),
    FaceOrientation::new(0, -1.0),
    FaceOrientation::new(1, 1.0),
    FaceOrientation::new(1, -1.0),
];

const fn unit(axis: usize) -> Vec3 {
    match axis {
        0 => Vec3::X,
        1 => Vec3::Y,
        _ => Vec3::Z,
    }
}

impl FaceOrientation {
    const fn new(normal_axis: usize, sign: f32) -> Self {
        let moving_axes = match normal_axis {
            0 => [1, 2],
            1 => [0, 2],
            _ => [0, 1],
        };
        Self {
            normal_axis,
            moving_axes,
            sign,
        }
    }

    /// Outward unit normal
    pub fn normal(&self) -> Vec3 {
        unit(self.normal_axis) * self.sign
    }

    /// Unit vectors of the two in-plane axes
    pub fn moving(&self) -> [Vec3; 2] {
        [unit(self.moving_axes[0]), unit(self.moving_axes[1])]
    }

    /// Axis the cell boxes are turned a quarter turn about so their flat side
    /// faces outward: the normal's axis with x and y swapped, times the sign.
    pub fn rotation_axis(&self) -> Vec3 {
        let n = unit(self.normal_axis);
        Vec3::new(n.y, n.x, n.z) * self.sign
    }
}
