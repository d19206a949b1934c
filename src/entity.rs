use glam::Vec2;

use crate::components::{Rect, colors};

// Paddle steering policy, in pixels/tick units.
const STEER_STEP: f32 = 0.1;
const MAX_ACCEL: f32 = 0.3;
const FRICTION: f32 = 0.2;
const STOP_SPEED: f32 = 2.0;

/// A positioned, sized, colored box moved by straight-line velocity.
/// `position` is the authoritative center; the cached rect is resynced on
/// every move and never read stale.
#[derive(Clone, Debug)]
pub struct Body {
    pub position: Vec2,
    pub velocity: Vec2,
    pub width: f32,
    pub height: f32,
    pub color: [f32; 3],
    rect: Rect,
}

impl Body {
    pub fn new(position: Vec2, width: f32, height: f32) -> Self {
        let mut body = Self {
            position,
            velocity: Vec2::ZERO,
            width,
            height,
            color: colors::RAYWHITE,
            rect: Rect::default(),
        };
        body.sync_rect();
        body
    }

    pub fn rect(&self) -> &Rect {
        &self.rect
    }

    /// One tick of motion: position += velocity, then rect resync.
    /// Velocities are in pixels per tick, no delta-time scaling.
    pub fn update(&mut self) {
        self.position += self.velocity;
        self.sync_rect();
    }

    pub fn overlaps(&self, other: &Rect) -> bool {
        self.rect.overlaps(other)
    }

    // The corner sits at center PLUS half extent, so every hitbox hangs
    // below-right of its stated center. All collision geometry agrees on
    // the shift; see the pinning test before changing it.
    fn sync_rect(&mut self) {
        self.rect.x = self.position.x + self.width / 2.0;
        self.rect.y = self.position.y + self.height / 2.0;
        self.rect.width = self.width;
        self.rect.height = self.height;
    }
}

/// The two moving actors, dispatched by variant in the physics system.
/// Bricks are plain `Body` values; "ball-ness" is behavioral, not a field.
#[derive(Clone, Debug)]
pub enum Entity {
    Ball { body: Body },
    Paddle { body: Body, acceleration: Vec2 },
}

impl Entity {
    pub fn new_ball(position: Vec2, width: f32, height: f32) -> Self {
        Entity::Ball {
            body: Body::new(position, width, height),
        }
    }

    pub fn new_paddle(position: Vec2, width: f32, height: f32) -> Self {
        let mut paddle = Entity::Paddle {
            body: Body::new(position, width, height),
            acceleration: Vec2::ZERO,
        };
        paddle.reset_motion();
        paddle
    }

    pub fn body(&self) -> &Body {
        match self {
            Entity::Ball { body } | Entity::Paddle { body, .. } => body,
        }
    }

    pub fn body_mut(&mut self) -> &mut Body {
        match self {
            Entity::Ball { body } | Entity::Paddle { body, .. } => body,
        }
    }

    pub fn rect(&self) -> &Rect {
        self.body().rect()
    }

    /// Variant-dispatched motion step. The paddle integrates position from
    /// the previous tick's velocity before acceleration is folded in, so
    /// steering reaches the position one tick late. That lag is observable
    /// behavior and deliberate.
    pub fn update(&mut self) {
        match self {
            Entity::Ball { body } => body.update(),
            Entity::Paddle { body, acceleration } => {
                body.update();
                body.velocity += *acceleration;
            }
        }
    }

    /// Zero the paddle's motion state. Idempotent; no-op for the ball.
    pub fn reset_motion(&mut self) {
        if let Entity::Paddle { body, acceleration } = self {
            *acceleration = Vec2::ZERO;
            body.velocity = Vec2::ZERO;
        }
    }

    /// Apply one tick of held-key steering to the paddle. Left wins when
    /// both keys are held. With no key held the acceleration snaps to zero
    /// and friction bleeds the velocity, snapping to a dead stop below
    /// `STOP_SPEED` so the paddle never creeps.
    pub fn steer(&mut self, left_held: bool, right_held: bool) {
        let Entity::Paddle { body, acceleration } = self else {
            return;
        };

        if left_held {
            acceleration.x -= STEER_STEP;
            if acceleration.x < -MAX_ACCEL {
                acceleration.x = -MAX_ACCEL;
            }
        } else if right_held {
            acceleration.x += STEER_STEP;
            if acceleration.x > MAX_ACCEL {
                acceleration.x = MAX_ACCEL;
            }
        } else {
            acceleration.x = 0.0;
        }

        if acceleration.x == 0.0 && body.velocity.x != 0.0 {
            if body.velocity.x > 0.0 {
                body.velocity.x -= FRICTION;
            } else if body.velocity.x < 0.0 {
                body.velocity.x += FRICTION;
            }
        }

        if acceleration.x == 0.0 && body.velocity.x.abs() < STOP_SPEED {
            body.velocity.x = 0.0;
        }
    }

    /// Push-back when the paddle runs into the left wall: flip and halve
    /// the inward velocity. Float arithmetic on purpose.
    pub fn block_left(&mut self) {
        if let Entity::Paddle { body, .. } = self {
            if body.velocity.x < 0.0 {
                body.velocity.x *= -0.5;
            }
        }
    }

    /// Mirror of `block_left` for the right wall.
    pub fn block_right(&mut self) {
        if let Entity::Paddle { body, .. } = self {
            if body.velocity.x > 0.0 {
                body.velocity.x *= -0.5;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paddle() -> Entity {
        Entity::new_paddle(Vec2::new(640.0, 670.0), 100.0, 20.0)
    }

    #[test]
    fn update_is_pure_translation() {
        let mut body = Body::new(Vec2::new(100.0, 200.0), 10.0, 10.0);
        body.velocity = Vec2::new(3.0, -4.0);
        body.update();
        assert_eq!(body.position, Vec2::new(103.0, 196.0));
        body.update();
        assert_eq!(body.position, Vec2::new(106.0, 192.0));
    }

    #[test]
    fn rect_hangs_below_right_of_center() {
        // Pins the corner = center + half extent rule. A "fix" to proper
        // centering must be a conscious change of this test.
        let mut body = Body::new(Vec2::new(100.0, 200.0), 10.0, 20.0);
        assert_eq!(*body.rect(), Rect::new(105.0, 210.0, 10.0, 20.0));

        body.velocity = Vec2::new(1.0, 1.0);
        body.update();
        assert_eq!(*body.rect(), Rect::new(106.0, 211.0, 10.0, 20.0));
    }

    #[test]
    fn steering_clamps_acceleration() {
        let mut paddle = paddle();
        for _ in 0..100 {
            paddle.steer(false, true);
            paddle.update();
        }
        let Entity::Paddle { acceleration, .. } = &paddle else {
            unreachable!()
        };
        assert!(acceleration.x <= MAX_ACCEL);
        assert_eq!(acceleration.x, MAX_ACCEL);

        for _ in 0..100 {
            paddle.steer(true, false);
            paddle.update();
        }
        let Entity::Paddle { acceleration, .. } = &paddle else {
            unreachable!()
        };
        assert_eq!(acceleration.x, -MAX_ACCEL);
    }

    #[test]
    fn left_wins_when_both_keys_held() {
        let mut paddle = paddle();
        paddle.steer(true, true);
        let Entity::Paddle { acceleration, .. } = &paddle else {
            unreachable!()
        };
        assert!(acceleration.x < 0.0);
    }

    #[test]
    fn friction_stops_without_oscillation() {
        let mut paddle = paddle();
        paddle.body_mut().velocity.x = 5.0;
        for _ in 0..60 {
            paddle.steer(false, false);
            assert!(paddle.body().velocity.x >= 0.0, "friction overshot zero");
        }
        assert_eq!(paddle.body().velocity.x, 0.0);

        // And stays stopped
        paddle.steer(false, false);
        assert_eq!(paddle.body().velocity.x, 0.0);
    }

    #[test]
    fn paddle_position_lags_steering_by_one_tick() {
        let mut paddle = paddle();
        paddle.steer(false, true);
        paddle.update();
        // This tick integrated the old zero velocity
        assert_eq!(paddle.body().position.x, 640.0);
        let vx = paddle.body().velocity.x;
        assert!(vx > 0.0);

        paddle.update();
        assert_eq!(paddle.body().position.x, 640.0 + vx);
    }

    #[test]
    fn wall_push_back_flips_and_halves() {
        let mut paddle = paddle();
        paddle.body_mut().velocity.x = -4.0;
        paddle.block_left();
        assert_eq!(paddle.body().velocity.x, 2.0);

        // Only inward motion is pushed back
        paddle.block_left();
        assert_eq!(paddle.body().velocity.x, 2.0);

        paddle.block_right();
        assert_eq!(paddle.body().velocity.x, -1.0);
    }

    #[test]
    fn reset_motion_is_idempotent() {
        let mut paddle = paddle();
        paddle.body_mut().velocity.x = 3.0;
        paddle.steer(false, true);
        paddle.reset_motion();
        assert_eq!(paddle.body().velocity, Vec2::ZERO);
        paddle.reset_motion();
        assert_eq!(paddle.body().velocity, Vec2::ZERO);
    }
}
