use log::trace;
use rand::Rng;

use crate::grid::{Board, Position};
use crate::render::{self, RenderContext};
use crate::snake::Snake;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Position,
}

impl Food {
    pub fn new(position: Position) -> Self {
        Self { position }
    }

    pub fn render(&self, ctx: &mut impl RenderContext) {
        ctx.draw_circle(
            self.position,
            render::LINE_WIDTH,
            Some(render::FOOD_FILL),
            Some(render::FOOD_STROKE),
        );
    }
}

/// Pick a random interior cell not covered by the snake.
///
/// Retries until it finds one, so it never returns on a board whose
/// interior is entirely snake.
pub fn place_food(board: &Board, snake: &Snake, rng: &mut impl Rng) -> Food {
    loop {
        let pos = Position::new(
            rng.gen_range(1..board.width - 1),
            rng.gen_range(1..board.height - 1),
        );
        if !snake.occupies(pos) {
            trace!("food placed at ({}, {})", pos.x, pos.y);
            return Food::new(pos);
        }
    }
}
