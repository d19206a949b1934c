use glam::Vec2;

use crate::components::Rect;
use crate::entity::{Body, Entity};

/// Logical playfield size. The renderer stretches this onto whatever
/// surface the window actually has.
pub const SCREEN_WIDTH: f32 = 1280.0;
pub const SCREEN_HEIGHT: f32 = 720.0;

pub const STARTING_LIVES: i32 = 3;

const BALL_SIZE: f32 = 10.0;
const BALL_START_VELOCITY: Vec2 = Vec2::new(2.0, 2.0);

const PADDLE_WIDTH: f32 = 100.0;
const PADDLE_HEIGHT: f32 = 20.0;
const PADDLE_BOTTOM_MARGIN: f32 = 50.0;

const BRICK_WIDTH: f32 = 48.0;
const BRICK_HEIGHT: f32 = 10.0;
const BRICKS_PER_ROW: usize = 20;
const BRICK_ROW_YS: [f32; 4] = [50.0, 65.0, 80.0, 95.0];

/// One-pixel border strips framing the playfield.
pub struct Bounds {
    pub top: Rect,
    pub bottom: Rect,
    pub left: Rect,
    pub right: Rect,
}

impl Bounds {
    fn new() -> Self {
        Self {
            top: Rect::new(0.0, 0.0, SCREEN_WIDTH, 1.0),
            bottom: Rect::new(0.0, SCREEN_HEIGHT - 1.0, SCREEN_WIDTH, 1.0),
            left: Rect::new(0.0, 0.0, 1.0, SCREEN_HEIGHT),
            right: Rect::new(SCREEN_WIDTH - 1.0, 0.0, 1.0, SCREEN_HEIGHT),
        }
    }
}

/// World owns the whole session: both actors, the brick field, the border
/// rects, lives and score. Systems query and mutate it in place.
pub struct World {
    pub ball: Entity,
    pub paddle: Entity,
    pub bricks: Vec<Body>,
    pub bounds: Bounds,
    pub lives: i32,
    pub score: u32,
}

impl World {
    pub fn new() -> Self {
        Self {
            ball: Self::spawn_ball(),
            paddle: Entity::new_paddle(
                Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT - PADDLE_BOTTOM_MARGIN),
                PADDLE_WIDTH,
                PADDLE_HEIGHT,
            ),
            bricks: Self::create_bricks(),
            bounds: Bounds::new(),
            lives: STARTING_LIVES,
            score: 0,
        }
    }

    /// Fresh ball at the playfield center with the fixed serve velocity.
    fn spawn_ball() -> Entity {
        let mut ball = Entity::new_ball(
            Vec2::new(SCREEN_WIDTH / 2.0, SCREEN_HEIGHT / 2.0),
            BALL_SIZE,
            BALL_SIZE,
        );
        ball.body_mut().velocity = BALL_START_VELOCITY;
        ball
    }

    /// Replace the ball outright, as happens after a bottom-edge miss.
    pub fn reset_ball(&mut self) {
        self.ball = Self::spawn_ball();
    }

    // Row-major grid; iteration order here is the order the brick scan
    // resolves multi-overlap hits in.
    fn create_bricks() -> Vec<Body> {
        let mut bricks = Vec::with_capacity(BRICK_ROW_YS.len() * BRICKS_PER_ROW);
        for y in BRICK_ROW_YS {
            for i in 0..BRICKS_PER_ROW {
                let x = 50.0 + 50.0 * i as f32;
                bricks.push(Body::new(Vec2::new(x, y), BRICK_WIDTH, BRICK_HEIGHT));
            }
        }
        bricks
    }

    /// Game over is an absorbing render state, not a stop: the loop and the
    /// counters keep running.
    pub fn game_over(&self) -> bool {
        self.lives <= 0
    }

    /// Lives as shown on the HUD. The internal counter may run negative
    /// when the ball keeps dropping after game over.
    pub fn lives_display(&self) -> i32 {
        self.lives.max(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_session_state() {
        let world = World::new();
        assert_eq!(world.lives, 3);
        assert_eq!(world.score, 0);
        assert_eq!(world.bricks.len(), 80);
        assert!(!world.game_over());

        assert_eq!(world.ball.body().position, Vec2::new(640.0, 360.0));
        assert_eq!(world.ball.body().velocity, Vec2::new(2.0, 2.0));
        assert_eq!(world.paddle.body().position, Vec2::new(640.0, 670.0));
    }

    #[test]
    fn brick_grid_layout() {
        let world = World::new();
        assert_eq!(world.bricks[0].position, Vec2::new(50.0, 50.0));
        assert_eq!(world.bricks[19].position, Vec2::new(1000.0, 50.0));
        assert_eq!(world.bricks[20].position, Vec2::new(50.0, 65.0));
        assert_eq!(world.bricks[79].position, Vec2::new(1000.0, 95.0));
    }

    #[test]
    fn border_strips_frame_the_playfield() {
        let bounds = Bounds::new();
        assert_eq!(bounds.top, Rect::new(0.0, 0.0, 1280.0, 1.0));
        assert_eq!(bounds.bottom, Rect::new(0.0, 719.0, 1280.0, 1.0));
        assert_eq!(bounds.left, Rect::new(0.0, 0.0, 1.0, 720.0));
        assert_eq!(bounds.right, Rect::new(1279.0, 0.0, 1.0, 720.0));
    }

    #[test]
    fn lives_display_clamps_at_zero() {
        let mut world = World::new();
        world.lives = -2;
        assert!(world.game_over());
        assert_eq!(world.lives_display(), 0);
    }
}
