//! Uniform acceleration grid for neighbourhood queries.
//!
//! The grid partitions the domain into square cells of side `radius / sqrt(2)`.
//! At that size two points inside one cell are always closer than `radius`, so a
//! cell holds at most one accepted sample and stores a single optional index into
//! the sampler's point list.
use glam::DVec2;

use crate::error::{Error, Result};

/// Cell offsets that can hold a point closer than `radius` to a point in the
/// center cell: the center, its 8-connected ring and the 12 cells at Chebyshev
/// distance 2. The four distance-2 corners are at least `radius` away and skipped.
pub const NEIGHBOURHOOD: [(isize, isize); 21] = [
    (0, 0),
    (0, -1),
    (-1, 0),
    (1, 0),
    (0, 1),
    (-1, -1),
    (1, -1),
    (-1, 1),
    (1, 1),
    (0, -2),
    (-2, 0),
    (2, 0),
    (0, 2),
    (-1, -2),
    (1, -2),
    (-2, -1),
    (2, -1),
    (-2, 1),
    (2, 1),
    (-1, 2),
    (1, 2),
];

const MAX_CELLS: usize = isize::MAX as usize / std::mem::size_of::<Option<usize>>();

/// Fixed-size 2D table mapping cells to accepted sample indices.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    cell_size: f64,
    width: usize,
    height: usize,
    cells: Vec<Option<usize>>,
}

impl SpatialGrid {
    /// Allocates an empty grid covering `domain_extent` with square cells of `cell_size`.
    ///
    /// Fails when the resulting cell count is zero or cannot be allocated.
    pub fn try_new(domain_extent: DVec2, cell_size: f64) -> Result<Self> {
        let (width, height) = grid_dimensions(domain_extent, cell_size).ok_or_else(|| {
            Error::InvalidConfig(format!(
                "cannot build a grid of {}x{} with cell size {}",
                domain_extent.x, domain_extent.y, cell_size
            ))
        })?;

        Ok(Self {
            cell_size,
            width,
            height,
            cells: vec![None; width * height],
        })
    }

    /// Side length of a cell in domain units.
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Number of cells along X.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of cells along Y.
    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    fn index(&self, cx: usize, cy: usize) -> usize {
        debug_assert!(cx < self.width && cy < self.height);
        cy * self.width + cx
    }

    /// Cell coordinates of `point`.
    ///
    /// Points on the far edge of the domain can round onto the cell past the last
    /// one; those are clamped back into the grid.
    #[inline]
    pub fn cell_of(&self, point: DVec2) -> (usize, usize) {
        let cx = ((point.x / self.cell_size).floor() as isize).clamp(0, self.width as isize - 1);
        let cy = ((point.y / self.cell_size).floor() as isize).clamp(0, self.height as isize - 1);
        (cx as usize, cy as usize)
    }

    /// Whether the (possibly negative) cell coordinates address a cell of this grid.
    #[inline]
    pub fn contains_cell(&self, cx: isize, cy: isize) -> bool {
        cx >= 0 && cy >= 0 && (cx as usize) < self.width && (cy as usize) < self.height
    }

    /// Sample index stored in a cell. The cell must be inside the grid.
    #[inline]
    pub fn get(&self, cx: usize, cy: usize) -> Option<usize> {
        self.cells[self.index(cx, cy)]
    }

    /// Stores a sample index in a cell. The cell must be inside the grid.
    #[inline]
    pub fn set(&mut self, cx: usize, cy: usize, sample: usize) {
        let idx = self.index(cx, cy);
        self.cells[idx] = Some(sample);
    }

    /// Records `sample` in the cell containing `point`.
    pub fn insert(&mut self, point: DVec2, sample: usize) {
        let (cx, cy) = self.cell_of(point);
        self.set(cx, cy, sample);
    }

    /// Indices of the samples stored in the neighbourhood of the cell containing `point`.
    pub fn neighbours(&self, point: DVec2) -> impl Iterator<Item = usize> + '_ {
        let (cx, cy) = self.cell_of(point);
        NEIGHBOURHOOD.iter().filter_map(move |&(dx, dy)| {
            let nx = cx as isize + dx;
            let ny = cy as isize + dy;
            if self.contains_cell(nx, ny) {
                self.get(nx as usize, ny as usize)
            } else {
                None
            }
        })
    }

    /// Empties every cell, keeping the allocation.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Number of occupied cells.
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }
}

fn grid_dimensions(domain_extent: DVec2, cell_size: f64) -> Option<(usize, usize)> {
    if !cell_size.is_finite() || cell_size <= 0.0 {
        return None;
    }

    let w = (domain_extent.x / cell_size).ceil();
    let h = (domain_extent.y / cell_size).ceil();
    if !(w >= 1.0 && h >= 1.0) || w > MAX_CELLS as f64 || h > MAX_CELLS as f64 {
        return None;
    }

    let (w, h) = (w as usize, h as usize);
    w.checked_mul(h)
        .filter(|&count| count <= MAX_CELLS)
        .map(|_| (w, h))
}
