//! Shift-level keyed surface collections.
//!
//! A `SurfaceSet` holds the full set of pre-computed vega grids available for
//! interpolation, keyed by each grid's `spot_shift`. Keys are `f64`, so the
//! set is stored as a vector kept sorted ascending by shift, with insertion
//! replacing any existing level within `SHIFT_KEY_TOLERANCE` (unique keys).

use super::grid::VegaGrid;

/// Absolute tolerance under which two shift levels are considered the same
/// key (and under which an interpolation query matches a stored level).
pub const SHIFT_KEY_TOLERANCE: f64 = 1e-10;

/// The set of pre-computed market states available for interpolation.
///
/// # Examples
///
/// ```
/// use vega_core::types::{Date, GridRow, SurfaceSet, VegaGrid};
///
/// let expiry = vec![Date::from_ymd(2026, 6, 19).unwrap()];
/// let mut surfaces = SurfaceSet::new();
/// surfaces.insert(VegaGrid::new(0.05, expiry.clone(), vec![GridRow::new(1.0, vec![200.0])]).unwrap());
/// surfaces.insert(VegaGrid::new(-0.05, expiry, vec![GridRow::new(1.0, vec![100.0])]).unwrap());
///
/// assert_eq!(surfaces.shifts(), vec![-0.05, 0.05]);
/// assert_eq!(surfaces.shift_range(), Some((-0.05, 0.05)));
/// assert_eq!(surfaces.clamp(-0.10), Some(-0.05));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SurfaceSet {
    surfaces: Vec<VegaGrid>,
}

impl SurfaceSet {
    /// Create an empty surface set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from grids, replacing duplicate shift levels (last wins).
    pub fn from_grids(grids: impl IntoIterator<Item = VegaGrid>) -> Self {
        let mut set = Self::new();
        for grid in grids {
            set.insert(grid);
        }
        set
    }

    /// Insert a grid, keeping the set sorted by shift level.
    ///
    /// A grid whose shift is within `SHIFT_KEY_TOLERANCE` of an existing
    /// level replaces that level.
    pub fn insert(&mut self, grid: VegaGrid) {
        if let Some(existing) = self
            .surfaces
            .iter_mut()
            .find(|g| (g.spot_shift - grid.spot_shift).abs() <= SHIFT_KEY_TOLERANCE)
        {
            *existing = grid;
            return;
        }
        let pos = self
            .surfaces
            .partition_point(|g| g.spot_shift < grid.spot_shift);
        self.surfaces.insert(pos, grid);
    }

    /// Number of distinct shift levels.
    pub fn len(&self) -> usize {
        self.surfaces.len()
    }

    /// True when no surfaces are loaded.
    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
    }

    /// All grids, sorted ascending by shift level.
    pub fn grids(&self) -> &[VegaGrid] {
        &self.surfaces
    }

    /// Sorted distinct shift levels.
    pub fn shifts(&self) -> Vec<f64> {
        self.surfaces.iter().map(|g| g.spot_shift).collect()
    }

    /// `(min, max)` shift levels, or `None` when empty.
    pub fn shift_range(&self) -> Option<(f64, f64)> {
        match (self.surfaces.first(), self.surfaces.last()) {
            (Some(first), Some(last)) => Some((first.spot_shift, last.spot_shift)),
            _ => None,
        }
    }

    /// Clamp a requested spot move into the available shift range.
    ///
    /// Returns `None` when the set is empty; callers that need to surface a
    /// "clamped" warning compare the result against the requested value.
    pub fn clamp(&self, spot_move: f64) -> Option<f64> {
        let (min, max) = self.shift_range()?;
        Some(spot_move.clamp(min, max))
    }

    /// Grid stored at `shift`, matched within `SHIFT_KEY_TOLERANCE`.
    pub fn get(&self, shift: f64) -> Option<&VegaGrid> {
        self.surfaces
            .iter()
            .find(|g| (g.spot_shift - shift).abs() <= SHIFT_KEY_TOLERANCE)
    }

    /// The adjacent pair `(lower, upper)` bracketing `shift`.
    ///
    /// Requires `shift` to lie inside the shift range (clamp first) and at
    /// least two surfaces; returns `None` otherwise.
    pub fn bracketing(&self, shift: f64) -> Option<(&VegaGrid, &VegaGrid)> {
        if self.surfaces.len() < 2 {
            return None;
        }
        let (min, max) = self.shift_range()?;
        if shift < min || shift > max {
            return None;
        }
        // partition_point gives the first level strictly above `shift`;
        // clamp so the last segment also brackets shift == max.
        let upper = self
            .surfaces
            .partition_point(|g| g.spot_shift <= shift)
            .clamp(1, self.surfaces.len() - 1);
        Some((&self.surfaces[upper - 1], &self.surfaces[upper]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Date, GridRow};

    fn grid(shift: f64, vega: f64) -> VegaGrid {
        VegaGrid::new(
            shift,
            vec![Date::from_ymd(2026, 6, 19).unwrap()],
            vec![GridRow::new(1.0, vec![vega])],
        )
        .unwrap()
    }

    fn seven_level_set() -> SurfaceSet {
        SurfaceSet::from_grids(
            [-0.075, -0.05, -0.025, 0.0, 0.025, 0.05, 0.075]
                .iter()
                .map(|&s| grid(s, s * 1000.0)),
        )
    }

    #[test]
    fn test_insert_keeps_sorted_order() {
        let mut set = SurfaceSet::new();
        set.insert(grid(0.05, 1.0));
        set.insert(grid(-0.075, 2.0));
        set.insert(grid(0.0, 3.0));
        assert_eq!(set.shifts(), vec![-0.075, 0.0, 0.05]);
    }

    #[test]
    fn test_insert_replaces_duplicate_level() {
        let mut set = SurfaceSet::new();
        set.insert(grid(0.05, 1.0));
        set.insert(grid(0.05 + 1e-12, 99.0));
        assert_eq!(set.len(), 1);
        assert_eq!(set.grids()[0].rows[0].values[0], 99.0);
    }

    #[test]
    fn test_shift_range_and_clamp() {
        let set = seven_level_set();
        assert_eq!(set.shift_range(), Some((-0.075, 0.075)));
        assert_eq!(set.clamp(-0.10), Some(-0.075));
        assert_eq!(set.clamp(0.10), Some(0.075));
        assert_eq!(set.clamp(0.01), Some(0.01));
    }

    #[test]
    fn test_clamp_empty_set() {
        assert_eq!(SurfaceSet::new().clamp(0.0), None);
    }

    #[test]
    fn test_get_with_tolerance() {
        let set = seven_level_set();
        assert!(set.get(0.025).is_some());
        assert!(set.get(0.025 + 1e-11).is_some());
        assert!(set.get(0.03).is_none());
    }

    #[test]
    fn test_bracketing_interior() {
        let set = seven_level_set();
        let (lo, hi) = set.bracketing(0.01).unwrap();
        assert_eq!(lo.spot_shift, 0.0);
        assert_eq!(hi.spot_shift, 0.025);
    }

    #[test]
    fn test_bracketing_at_boundaries() {
        let set = seven_level_set();
        let (lo, hi) = set.bracketing(-0.075).unwrap();
        assert_eq!((lo.spot_shift, hi.spot_shift), (-0.075, -0.05));
        let (lo, hi) = set.bracketing(0.075).unwrap();
        assert_eq!((lo.spot_shift, hi.spot_shift), (0.05, 0.075));
    }

    #[test]
    fn test_bracketing_on_knot() {
        let set = seven_level_set();
        let (lo, hi) = set.bracketing(0.025).unwrap();
        assert_eq!((lo.spot_shift, hi.spot_shift), (0.025, 0.05));
    }

    #[test]
    fn test_bracketing_degenerate() {
        assert!(SurfaceSet::new().bracketing(0.0).is_none());
        let single = SurfaceSet::from_grids([grid(0.0, 1.0)]);
        assert!(single.bracketing(0.0).is_none());
        let set = seven_level_set();
        assert!(set.bracketing(0.10).is_none());
    }
}
