use macroquad::color::Color;
use macroquad::math::Rect;

use crate::grid::{Board, Position};

pub const BORDER: Color = Color::new(1.0, 1.0, 1.0, 1.0); // #FFFFFF
pub const FOOD_FILL: Color = Color::new(0.8, 0.2, 0.2, 1.0); // #CC3333
pub const FOOD_STROKE: Color = Color::new(1.0, 0.4, 0.4, 1.0); // #FF6666
pub const SNAKE_FILL: Color = Color::new(0.2, 0.667, 0.2, 1.0); // #33AA33
pub const SNAKE_STROKE: Color = Color::new(0.0, 1.0, 0.0, 1.0); // #00FF00
pub const DEAD_FILL: Color = Color::new(0.8, 0.8, 0.8, 1.0); // #CCCCCC
pub const DEAD_STROKE: Color = Color::new(0.0, 0.0, 0.0, 1.0); // #000000

pub const LINE_WIDTH: f32 = 2.0;

/// Drawing surface addressed in board cells rather than pixels.
pub trait RenderContext {
    fn clear(&mut self);
    fn draw_rect(&mut self, cell: Position, line_width: f32, fill: Option<Color>, stroke: Option<Color>);
    fn draw_circle(&mut self, cell: Position, line_width: f32, fill: Option<Color>, stroke: Option<Color>);
    /// Human-readable status line, replaced on every render.
    fn status(&mut self, line: &str);
}

/// Maps board cells onto a pixel area of the screen.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CellGeometry {
    pub cell_w: f32,
    pub cell_h: f32,
    pub off_x: f32,
    pub off_y: f32,
}

impl CellGeometry {
    /// Stretch the board over a `width` x `height` pixel surface.
    pub fn new(board: &Board, width: f32, height: f32) -> Self {
        Self {
            cell_w: width / board.width as f32,
            cell_h: height / board.height as f32,
            off_x: 0.0,
            off_y: 0.0,
        }
    }

    /// Largest square-celled grid fitting the area, centered in it.
    pub fn fit(board: &Board, width: f32, height: f32) -> Self {
        let tile = (width / board.width as f32).min(height / board.height as f32);
        let grid_w = tile * board.width as f32;
        let grid_h = tile * board.height as f32;
        Self {
            cell_w: tile,
            cell_h: tile,
            off_x: (width - grid_w) * 0.5,
            off_y: (height - grid_h) * 0.5,
        }
    }

    /// Cell rectangle, one pixel short on each axis so neighbours stay apart.
    pub fn cell_rect(&self, cell: Position) -> Rect {
        Rect::new(
            self.off_x + self.cell_w * cell.x as f32,
            self.off_y + self.cell_h * cell.y as f32,
            self.cell_w - 1.0,
            self.cell_h - 1.0,
        )
    }

    /// Center and radius of the circle inscribed in a cell.
    pub fn cell_circle(&self, cell: Position) -> (f32, f32, f32) {
        let cx = self.off_x + self.cell_w * cell.x as f32 + self.cell_w / 2.0;
        let cy = self.off_y + self.cell_h * cell.y as f32 + self.cell_h / 2.0;
        let radius = self.cell_w.max(self.cell_h) / 2.0 - 2.0;
        (cx, cy, radius)
    }
}

/// Draw the wall ring.
pub fn render_board(board: &Board, ctx: &mut impl RenderContext) {
    for cell in board.border_cells() {
        ctx.draw_rect(cell, LINE_WIDTH, Some(BORDER), Some(BORDER));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cells_scale_with_surface() {
        let board = Board::new(25, 25);
        let geom = CellGeometry::new(&board, 500.0, 250.0);
        assert_eq!(geom.cell_w, 20.0);
        assert_eq!(geom.cell_h, 10.0);
        let r = geom.cell_rect(Position::new(3, 4));
        assert_eq!((r.x, r.y, r.w, r.h), (60.0, 40.0, 19.0, 9.0));
        let (cx, cy, radius) = geom.cell_circle(Position::new(3, 4));
        assert_eq!((cx, cy, radius), (70.0, 45.0, 8.0));
    }

    #[test]
    fn fit_centers_square_cells() {
        let board = Board::new(25, 25);
        let geom = CellGeometry::fit(&board, 600.0, 500.0);
        assert_eq!(geom.cell_w, 20.0);
        assert_eq!(geom.cell_h, 20.0);
        assert_eq!(geom.off_x, 50.0);
        assert_eq!(geom.off_y, 0.0);
    }
}
