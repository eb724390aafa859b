use crate::config::{AREA_CELLS, AREA_CELL_SIZE};

/// The finite horizontal play area: a square of `cells` x `cells` grid cells
/// centred at the origin. Positions past half the side length on either
/// horizontal axis are out of bounds and have no ground plane.
#[derive(Debug, Clone, Copy)]
pub struct PlayArea {
    cells: u32,
    cell_size: f32,
}

impl PlayArea {
    pub fn new(cells: u32, cell_size: f32) -> Self {
        Self { cells, cell_size }
    }

    pub fn half_size(&self) -> f32 {
        self.cells as f32 * self.cell_size / 2.0
    }

    pub fn is_out_of_bounds(&self, x: f32, z: f32) -> bool {
        let half = self.half_size();
        x < -half || x > half || z < -half || z > half
    }
}

impl Default for PlayArea {
    fn default() -> Self {
        Self::new(AREA_CELLS, AREA_CELL_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edge_is_in_bounds() {
        let area = PlayArea::new(40, 20.0);
        assert_eq!(area.half_size(), 400.0);
        assert!(!area.is_out_of_bounds(400.0, -400.0));
        assert!(area.is_out_of_bounds(400.1, 0.0));
        assert!(area.is_out_of_bounds(0.0, -400.1));
    }
}
