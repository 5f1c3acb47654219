use ndarray::{s, Array3, ArrayD, Ix3};

/// Errors caused by incompatible array shapes.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum ShapeError {
    /// Padding cannot shrink a grid.
    #[error("cannot pad a grid of size {size} into {target} along axis {axis}")]
    TargetTooSmall {
        /// The faulty axis.
        axis: usize,
        /// The size of the padded grid along `axis`.
        size: usize,
        /// The requested size along `axis`.
        target: usize,
    },
    /// The cropping window does not fit in the grid.
    #[error("the window of shape {shape:?} at {origin:?} exceeds the grid of shape {grid:?}")]
    CropOutOfBounds {
        /// The first cell of the window.
        origin: [usize; 3],
        /// The shape of the window.
        shape: [usize; 3],
        /// The shape of the cropped grid.
        grid: [usize; 3],
    },
    /// The array has the wrong number of dimensions.
    #[error("expected a 3-dimensional array, found {ndim} dimensions")]
    NotThreeDimensional {
        /// The number of dimensions of the array.
        ndim: usize,
    },
    /// The axis does not exist in a 3-dimensional array.
    #[error("the axis {0} does not exist in a 3-dimensional array")]
    InvalidAxis(usize),
    /// The slab is empty or starts past the end of the collapsed axis.
    #[error("the slab {start}..{end} is empty or starts past the axis length {len}")]
    InvalidSlab {
        /// The first index of the slab.
        start: usize,
        /// The index past the end of the slab.
        end: usize,
        /// The length of the collapsed axis.
        len: usize,
    },
}

/// A dense 3D grid of boolean occupancy values, indexed `[x, y, z]`.
///
/// The cell `[i, j, k]` of a grid with pitch `p` covers the box
/// `[i p, (i + 1) p) × [j p, (j + 1) p) × [k p, (k + 1) p)` of the scene. Axis 1 is the
/// vertical axis: its index 0 is the floor.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VoxelGrid {
    cells: Array3<bool>,
}

impl VoxelGrid {
    /// An empty grid of the given shape.
    pub fn new(shape: [usize; 3]) -> Self {
        Self {
            cells: Array3::from_elem(shape, false),
        }
    }

    /// Wraps an existing occupancy array.
    pub fn from_cells(cells: Array3<bool>) -> Self {
        Self { cells }
    }

    /// Wraps an occupancy array of dynamic dimension, failing if it is not 3-dimensional.
    pub fn try_from_dyn(cells: ArrayD<bool>) -> Result<Self, ShapeError> {
        let ndim = cells.ndim();
        cells
            .into_dimensionality::<Ix3>()
            .map(Self::from_cells)
            .map_err(|_| ShapeError::NotThreeDimensional { ndim })
    }

    /// The number of cells along each axis.
    pub fn shape(&self) -> [usize; 3] {
        let (ni, nj, nk) = self.cells.dim();
        [ni, nj, nk]
    }

    /// The occupancy array.
    pub fn cells(&self) -> &Array3<bool> {
        &self.cells
    }

    /// Unwraps the occupancy array.
    pub fn into_cells(self) -> Array3<bool> {
        self.cells
    }

    /// Is the given cell occupied?
    ///
    /// Cells outside of the grid are empty.
    pub fn get(&self, cell: [usize; 3]) -> bool {
        self.cells.get(cell).copied().unwrap_or(false)
    }

    /// Sets the occupancy of a cell.
    ///
    /// # Panics
    ///
    /// Panics if `cell` is outside of the grid.
    pub fn set(&mut self, cell: [usize; 3], occupied: bool) {
        self.cells[cell] = occupied;
    }

    /// The number of occupied cells.
    pub fn num_occupied(&self) -> usize {
        self.cells.iter().filter(|occupied| **occupied).count()
    }

    /// Is no cell occupied?
    pub fn is_empty(&self) -> bool {
        !self.cells.iter().any(|occupied| *occupied)
    }

    /// The first and last occupied indices along each axis, or `None` if the grid is empty.
    pub fn occupied_bounds(&self) -> Option<([usize; 3], [usize; 3])> {
        let mut bounds: Option<([usize; 3], [usize; 3])> = None;

        for ((i, j, k), _) in self.cells.indexed_iter().filter(|(_, occupied)| **occupied) {
            let cell = [i, j, k];
            match &mut bounds {
                Some((mins, maxs)) => {
                    for a in 0..3 {
                        mins[a] = mins[a].min(cell[a]);
                        maxs[a] = maxs[a].max(cell[a]);
                    }
                }
                None => bounds = Some((cell, cell)),
            }
        }

        bounds
    }

    /// Turns a surface shell into the solid it encloses.
    ///
    /// Every empty cell connected through face neighbors to an empty cell on the boundary
    /// of the grid stays empty, all the others become occupied. This operation is
    /// idempotent.
    pub fn fill_interior(&self) -> VoxelGrid {
        Self::from_cells(super::flood_fill::fill_interior(&self.cells))
    }

    /// The index of the first cell of a grid of shape `source` once padded into `target`.
    ///
    /// Axes 0 and 2 are centered, with the odd remainder on the trailing side. Axis 1 starts
    /// at 0 so the floor stays on the first layer.
    pub fn pad_offsets(source: [usize; 3], target: [usize; 3]) -> Result<[usize; 3], ShapeError> {
        for axis in 0..3 {
            if target[axis] < source[axis] {
                return Err(ShapeError::TargetTooSmall {
                    axis,
                    size: source[axis],
                    target: target[axis],
                });
            }
        }

        Ok([
            (target[0] - source[0]) / 2,
            0,
            (target[2] - source[2]) / 2,
        ])
    }

    /// Copies this grid into an empty grid of shape `target`, placed at [`Self::pad_offsets`].
    pub fn pad(&self, target: [usize; 3]) -> Result<VoxelGrid, ShapeError> {
        let [ni, nj, nk] = self.shape();
        let [oi, oj, ok] = Self::pad_offsets(self.shape(), target)?;
        let mut result = Self::new(target);
        result
            .cells
            .slice_mut(s![oi..oi + ni, oj..oj + nj, ok..ok + nk])
            .assign(&self.cells);
        Ok(result)
    }

    /// Extracts the window of the given shape starting at `origin`.
    ///
    /// Cropping a padded grid at its padding offsets gives back the original grid.
    pub fn crop(&self, origin: [usize; 3], shape: [usize; 3]) -> Result<VoxelGrid, ShapeError> {
        let grid = self.shape();

        if (0..3).any(|a| origin[a].checked_add(shape[a]).map_or(true, |end| end > grid[a])) {
            return Err(ShapeError::CropOutOfBounds {
                origin,
                shape,
                grid,
            });
        }

        let [oi, oj, ok] = origin;
        let [ni, nj, nk] = shape;
        Ok(Self::from_cells(
            self.cells
                .slice(s![oi..oi + ni, oj..oj + nj, ok..ok + nk])
                .to_owned(),
        ))
    }
}
