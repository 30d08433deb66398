use std::fmt;

use crate::error::StructuralError;
use crate::vision::palette::Color;

/// A 3x3 grid of sticker colors for one physical face, row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceGrid {
    cells: [[Color; 3]; 3],
}

impl FaceGrid {
    pub fn new(cells: [[Color; 3]; 3]) -> Self {
        Self { cells }
    }

    /// A face with all nine stickers the same color.
    pub fn uniform(color: Color) -> Self {
        Self {
            cells: [[color; 3]; 3],
        }
    }

    pub fn get(&self, row: usize, col: usize) -> Result<Color, StructuralError> {
        Self::check_bounds(row, col)?;
        Ok(self.cells[row][col])
    }

    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Result<(), StructuralError> {
        Self::check_bounds(row, col)?;
        self.cells[row][col] = color;
        Ok(())
    }

    /// Row-major iteration, the cell order used by the facelet string.
    pub fn cells(&self) -> impl Iterator<Item = Color> + '_ {
        self.cells.iter().flat_map(|row| row.iter().copied())
    }

    fn check_bounds(row: usize, col: usize) -> Result<(), StructuralError> {
        if row > 2 || col > 2 {
            return Err(StructuralError::IndexOutOfRange { row, col });
        }
        Ok(())
    }
}

impl fmt::Display for FaceGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(
                f,
                "{:<7} {:<7} {:<7}",
                row[0].name(),
                row[1].name(),
                row[2].name()
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_then_get_returns_the_new_color() {
        let mut grid = FaceGrid::uniform(Color::White);
        grid.set(1, 2, Color::Green).unwrap();
        assert_eq!(grid.get(1, 2).unwrap(), Color::Green);
        assert_eq!(grid.get(1, 1).unwrap(), Color::White);
    }

    #[test]
    fn out_of_range_indices_are_rejected() {
        let mut grid = FaceGrid::uniform(Color::Red);
        assert_eq!(
            grid.set(3, 0, Color::Blue),
            Err(StructuralError::IndexOutOfRange { row: 3, col: 0 })
        );
        assert_eq!(
            grid.get(0, 5),
            Err(StructuralError::IndexOutOfRange { row: 0, col: 5 })
        );
    }

    #[test]
    fn cells_iterate_row_major() {
        let grid = FaceGrid::new([
            [Color::White, Color::Red, Color::Blue],
            [Color::Yellow, Color::Orange, Color::Green],
            [Color::White, Color::White, Color::White],
        ]);
        let cells: Vec<Color> = grid.cells().collect();
        assert_eq!(cells[0], Color::White);
        assert_eq!(cells[1], Color::Red);
        assert_eq!(cells[3], Color::Yellow);
        assert_eq!(cells.len(), 9);
    }
}
