pub mod error;
pub mod face;
pub mod generate;
pub mod layout;
pub mod palette;
pub mod scene;
pub mod style;

pub use error::{CubeError, Result};
pub use face::{FaceOrientation, FACES};
pub use generate::{FaceConfigGenerator, IntersectionConfigGenerator};
pub use layout::{layout, InstanceTransform, Layout};
pub use palette::{Color, Palette, PaletteAssigner};
pub use scene::{Scene, SceneOption};
pub use style::StyleParameters;

/// Number of faces on the cube
pub const FACE_COUNT: usize = 6;

/// Grid length each face index is generated with
pub const CAPACITIES: [usize; FACE_COUNT] = [9, 16, 25, 36, 49, 64];

/// One face's cells, row-major in the face's local frame. Always N×N.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FaceGrid {
    cells: Vec<bool>,
}

impl FaceGrid {
    /// Wraps `cells` after checking its length is one of the allowed grid sizes.
    /// `face` is only used to report which face was wrong.
    pub fn new(face: usize, cells: Vec<bool>) -> Result<Self> {
        if !CAPACITIES.contains(&cells.len()) {
            return Err(CubeError::InvalidGridLength {
                face,
                len: cells.len(),
            });
        }
        Ok(Self { cells })
    }

    /// Cells per row
    pub fn side(&self) -> usize {
        // Lengths are validated on construction, so this is exact
        let n = (self.cells.len() as f64).sqrt() as usize;
        assert_eq!(n * n, self.cells.len(), "face grid is not square");
        n
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn active_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c).count()
    }

    /// Cell at row `r`, column `c`
    pub fn get(&self, r: usize, c: usize) -> Option<bool> {
        let n = self.side();
        if r >= n || c >= n {
            return None;
        }
        self.cells.get(r * n + c).copied()
    }
}

/// Six face grids, indexed like [`FACES`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CubeConfig {
    faces: Vec<FaceGrid>,
}

impl CubeConfig {
    /// Build a config from raw cell vectors, validating every face.
    /// No partial config is returned on error.
    pub fn new(faces: Vec<Vec<bool>>) -> Result<Self> {
        if faces.len() != FACE_COUNT {
            return Err(CubeError::FaceCount(faces.len()));
        }

        let faces = faces
            .into_iter()
            .enumerate()
            .map(|(i, cells)| FaceGrid::new(i, cells))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { faces })
    }

    pub(crate) fn from_grids(faces: Vec<FaceGrid>) -> Self {
        debug_assert_eq!(faces.len(), FACE_COUNT);
        Self { faces }
    }

    pub fn faces(&self) -> &[FaceGrid] {
        &self.faces
    }

    pub fn face(&self, i: usize) -> Option<&FaceGrid> {
        self.faces.get(i)
    }

    pub fn active_counts(&self) -> [usize; FACE_COUNT] {
        let mut counts = [0; FACE_COUNT];
        for (count, face) in counts.iter_mut().zip(&self.faces) {
            *count = face.active_count();
        }
        counts
    }

    /// Total number of cells over all faces (the box pool size)
    pub fn total_cells(&self) -> usize {
        self.faces.iter().map(FaceGrid::len).sum()
    }
}
