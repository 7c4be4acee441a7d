//! Text surface for terminals and tests
//!
//! Samples each cell's center in world space; the last shape drawn over a
//! cell wins.

use std::fmt;

use glam::Vec2;

use super::Surface;
use super::shapes::{Circle, Rect, colors};

const EMPTY: char = ' ';
const GATE: char = '#';
const FLYER: char = '@';

pub struct AsciiSurface {
    cols: usize,
    rows: usize,
    /// World units per cell
    cell: Vec2,
    cells: Vec<char>,
    score: Option<u64>,
}

impl AsciiSurface {
    pub fn new(cols: usize, rows: usize, world_width: f32, world_height: f32) -> Self {
        let cols = cols.max(1);
        let rows = rows.max(1);
        Self {
            cols,
            rows,
            cell: Vec2::new(world_width / cols as f32, world_height / rows as f32),
            cells: vec![EMPTY; cols * rows],
            score: None,
        }
    }

    /// Character at a cell (None when out of range)
    pub fn at(&self, col: usize, row: usize) -> Option<char> {
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some(self.cells[row * self.cols + col])
    }

    fn cell_center(&self, col: usize, row: usize) -> Vec2 {
        Vec2::new(
            (col as f32 + 0.5) * self.cell.x,
            (row as f32 + 0.5) * self.cell.y,
        )
    }

    fn fill_where(&mut self, glyph: char, inside: impl Fn(Vec2) -> bool) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                if inside(self.cell_center(col, row)) {
                    self.cells[row * self.cols + col] = glyph;
                }
            }
        }
    }
}

impl Surface for AsciiSurface {
    fn clear(&mut self) {
        self.cells.fill(EMPTY);
        self.score = None;
    }

    fn fill_rect(&mut self, rect: Rect, color: u32) {
        let glyph = if color == colors::GATE { GATE } else { FLYER };
        self.fill_where(glyph, |p| rect.contains(p));
    }

    fn fill_circle(&mut self, circle: Circle, _color: u32) {
        self.fill_where(FLYER, |p| circle.contains(p));
    }

    fn draw_score(&mut self, score: u64, _color: u32) {
        self.score = Some(score);
    }
}

impl fmt::Display for AsciiSurface {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(score) = self.score {
            writeln!(f, "{:^width$}", score, width = self.cols + 2)?;
        }
        writeln!(f, "+{}+", "-".repeat(self.cols))?;
        for row in self.cells.chunks(self.cols) {
            writeln!(f, "|{}|", row.iter().collect::<String>())?;
        }
        write!(f, "+{}+", "-".repeat(self.cols))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fills_cells_under_shapes() {
        // 10x10 world units per cell
        let mut surface = AsciiSurface::new(40, 60, 400.0, 600.0);
        surface.fill_rect(Rect::new(100.0, 0.0, 60.0, 200.0), colors::GATE);
        surface.fill_circle(
            Circle {
                center: Vec2::new(50.0, 300.0),
                radius: 15.0,
            },
            0xFF0000,
        );

        assert_eq!(surface.at(10, 0), Some('#'));
        assert_eq!(surface.at(15, 19), Some('#'));
        assert_eq!(surface.at(16, 0), Some(' '));
        assert_eq!(surface.at(4, 29), Some('@'));
        assert_eq!(surface.at(40, 0), None);
    }

    #[test]
    fn test_display_frame() {
        let mut surface = AsciiSurface::new(3, 2, 30.0, 20.0);
        surface.draw_score(7, colors::SCORE);
        assert_eq!(surface.to_string(), "  7  \n+---+\n|   |\n|   |\n+---+");

        surface.clear();
        assert_eq!(surface.to_string(), "+---+\n|   |\n|   |\n+---+");
    }
}
