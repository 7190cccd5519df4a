use log::{debug, info};

use crate::audio::{AudioCues, Cue};
use crate::grid::{Direction, Position};
use crate::render::{self, RenderContext};

#[derive(Clone, Debug)]
pub struct Snake {
    segments: Vec<Position>,
    direction: Direction,
    speed: i32,
    eating: bool,
    dead: bool,
    music_on: bool,
}

impl Snake {
    /// A snake heading North with its body trailing south of `head`.
    pub fn new(head: Position, length: usize, music_on: bool) -> Self {
        let segments = (0..length as i32)
            .map(|i| Position::new(head.x, head.y + i))
            .collect();
        Self {
            segments,
            direction: Direction::North,
            speed: 1,
            eating: false,
            dead: false,
            music_on,
        }
    }

    /// Build a snake from explicit segments, head first.
    pub fn from_segments(segments: Vec<Position>, direction: Direction) -> Self {
        Self {
            segments,
            direction,
            speed: 1,
            eating: false,
            dead: false,
            music_on: false,
        }
    }

    pub fn segments(&self) -> &[Position] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn head(&self) -> Option<Position> {
        self.segments.first().copied()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_eating(&self) -> bool {
        self.eating
    }

    pub fn is_dead(&self) -> bool {
        self.dead
    }

    pub fn music_on(&self) -> bool {
        self.music_on
    }

    pub fn occupies(&self, pos: Position) -> bool {
        self.segments.contains(&pos)
    }

    /// Turn towards `heading` unless it is None or on the current axis.
    pub fn change_direction(&mut self, heading: Direction) {
        if heading != Direction::None && heading.parity() != self.direction.parity() {
            self.direction = heading;
        }
    }

    pub fn next_head(&self) -> Option<Position> {
        match self.direction {
            Direction::None => None,
            dir => self.head().map(|head| head.step(dir, self.speed)),
        }
    }

    /// Move one step. The tail is kept when `growing`, so the body gets one longer.
    /// The eating flag is consumed either way.
    pub fn advance(&mut self, growing: bool) {
        self.eating = false;
        let Some(new_head) = self.next_head() else {
            return;
        };
        if !growing {
            self.segments.pop();
        }
        self.segments.insert(0, new_head);
    }

    /// Whether the head sits on the body or on/outside the given bounds.
    pub fn check_collision(&self, min_x: i32, min_y: i32, max_x: i32, max_y: i32) -> bool {
        let Some((head, body)) = self.segments.split_first() else {
            return false;
        };
        body.contains(head)
            || head.x <= min_x
            || head.y <= min_y
            || head.x >= max_x
            || head.y >= max_y
    }

    pub fn feed(&mut self, audio: &mut impl AudioCues) {
        audio.play(Cue::Eating);
        self.eating = true;
    }

    pub fn kill(&mut self, audio: &mut impl AudioCues) {
        audio.pause(Cue::Music);
        audio.play(Cue::Dying);
        self.dead = true;
        info!("snake died at length {}", self.segments.len());
    }

    pub fn toggle_music(&mut self, audio: &mut impl AudioCues) {
        self.music_on = !self.music_on;
        if self.music_on {
            audio.play(Cue::Music);
        } else {
            audio.pause(Cue::Music);
        }
        debug!("music {}", if self.music_on { "on" } else { "off" });
    }

    pub fn render(&self, ctx: &mut impl RenderContext) {
        let (fill, stroke) = if self.dead {
            (render::DEAD_FILL, render::DEAD_STROKE)
        } else {
            (render::SNAKE_FILL, render::SNAKE_STROKE)
        };
        for &segment in &self.segments {
            ctx.draw_rect(segment, render::LINE_WIDTH, Some(fill), Some(stroke));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::Silent;

    fn snake_at(head: Position, len: usize) -> Snake {
        Snake::new(head, len, false)
    }

    #[test]
    fn new_snake_trails_south() {
        let snake = snake_at(Position::new(12, 12), 5);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), Some(Position::new(12, 12)));
        assert_eq!(snake.segments()[4], Position::new(12, 16));
        assert_eq!(snake.direction(), Direction::North);
    }

    #[test]
    fn advance_keeps_or_grows_length() {
        let mut snake = snake_at(Position::new(12, 12), 5);
        snake.advance(false);
        assert_eq!(snake.len(), 5);
        assert_eq!(snake.head(), Some(Position::new(12, 11)));
        assert!(!snake.occupies(Position::new(12, 16)));

        snake.advance(true);
        assert_eq!(snake.len(), 6);
        assert_eq!(snake.head(), Some(Position::new(12, 10)));
        assert_eq!(snake.segments()[5], Position::new(12, 15));
    }

    #[test]
    fn eating_flag_is_one_shot() {
        let mut snake = snake_at(Position::new(12, 12), 5);
        snake.feed(&mut Silent);
        assert!(snake.is_eating());
        snake.advance(snake.is_eating());
        assert_eq!(snake.len(), 6);
        assert!(!snake.is_eating());
        snake.advance(snake.is_eating());
        assert_eq!(snake.len(), 6);
    }

    #[test]
    fn empty_snake_goes_nowhere() {
        let mut snake = Snake::from_segments(Vec::new(), Direction::North);
        assert_eq!(snake.next_head(), None);
        snake.advance(true);
        assert!(snake.is_empty());
        assert!(!snake.check_collision(0, 0, 24, 24));
    }

    #[test]
    fn reversal_is_rejected() {
        let all = [
            Direction::None,
            Direction::North,
            Direction::East,
            Direction::South,
            Direction::West,
        ];
        for current in [Direction::North, Direction::East, Direction::South, Direction::West] {
            for requested in all {
                let mut snake = Snake::from_segments(vec![Position::new(5, 5)], current);
                snake.change_direction(requested);
                let accepted =
                    requested != Direction::None && requested.parity() != current.parity();
                let expected = if accepted { requested } else { current };
                assert_eq!(snake.direction(), expected, "{current:?} -> {requested:?}");
            }
        }
    }

    #[test]
    fn turning_north_to_east() {
        let mut snake = snake_at(Position::new(12, 12), 5);
        snake.change_direction(Direction::South);
        assert_eq!(snake.direction(), Direction::North);
        snake.change_direction(Direction::East);
        assert_eq!(snake.direction(), Direction::East);
    }

    #[test]
    fn self_collision() {
        let body = vec![
            Position::new(5, 5),
            Position::new(5, 6),
            Position::new(6, 6),
            Position::new(6, 5),
            Position::new(5, 5),
        ];
        let snake = Snake::from_segments(body, Direction::North);
        assert!(snake.check_collision(0, 0, 24, 24));
    }

    #[test]
    fn border_collision_includes_the_ring() {
        for head in [
            Position::new(0, 5),
            Position::new(24, 5),
            Position::new(5, 0),
            Position::new(5, 24),
            Position::new(-1, 5),
        ] {
            let snake = Snake::from_segments(vec![head], Direction::North);
            assert!(snake.check_collision(0, 0, 24, 24), "{head:?}");
        }
        let snake = Snake::from_segments(
            vec![Position::new(1, 1), Position::new(1, 2)],
            Direction::North,
        );
        assert!(!snake.check_collision(0, 0, 24, 24));
    }
}
