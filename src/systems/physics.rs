use crate::entity::Entity;
use crate::world::World;

/// Which way the ball deflects off whatever it hit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Bounce {
    /// Top wall, or a brick struck from underneath: flip vy.
    Top,
    /// Left wall or brick edge: flip vx.
    Left,
    /// Right wall or brick edge: flip vx. Same effect as `Left`; the two
    /// variants mirror which side was hit.
    Right,
    /// Paddle, or a brick struck from above: force vy upward.
    Up,
}

/// Instantaneous deflection: a sign flip or forced sign, not a simulated
/// reflection.
fn bounce(ball: &mut Entity, dir: Bounce) {
    let vel = &mut ball.body_mut().velocity;
    match dir {
        Bounce::Top => vel.y *= -1.0,
        Bounce::Left | Bounce::Right => vel.x *= -1.0,
        Bounce::Up => vel.y = -vel.y.abs(),
    }
}

/// Runs one fixed simulation tick over the whole world: input, motion,
/// then collision resolution in the order the rules demand.
pub struct PhysicsSystem;

impl PhysicsSystem {
    pub fn new() -> Self {
        Self
    }

    pub fn update(&mut self, world: &mut World, left_held: bool, right_held: bool) {
        world.paddle.steer(left_held, right_held);
        world.paddle.update();
        world.ball.update();

        self.resolve_ball_chain(world);
        self.resolve_paddle_bounds(world);
        self.resolve_bricks(world);
    }

    // Mutually exclusive chain, first match wins: a ball pinned in a corner
    // gets exactly one bounce per tick. Bottom outranks everything because
    // it replaces the ball outright.
    fn resolve_ball_chain(&mut self, world: &mut World) {
        let ball_rect = *world.ball.rect();

        if ball_rect.overlaps(&world.bounds.bottom) {
            world.lives -= 1;
            world.reset_ball();
        } else if ball_rect.overlaps(&world.bounds.top) {
            bounce(&mut world.ball, Bounce::Top);
        } else if ball_rect.overlaps(&world.bounds.left) {
            bounce(&mut world.ball, Bounce::Left);
        } else if ball_rect.overlaps(&world.bounds.right) {
            bounce(&mut world.ball, Bounce::Right);
        } else if ball_rect.overlaps(world.paddle.rect()) {
            bounce(&mut world.ball, Bounce::Up);
        }
    }

    fn resolve_paddle_bounds(&mut self, world: &mut World) {
        let paddle_rect = *world.paddle.rect();
        if paddle_rect.overlaps(&world.bounds.left) {
            world.paddle.block_left();
        } else if paddle_rect.overlaps(&world.bounds.right) {
            world.paddle.block_right();
        }
    }

    // At most one brick reacts per tick. The deflection compares ball
    // center to brick center per axis; the checks are not exclusive, so a
    // corner hit flips both axes. The last brick is a permanent floor:
    // it deflects and scores but is never removed.
    fn resolve_bricks(&mut self, world: &mut World) {
        let ball_rect = *world.ball.rect();
        let ball_pos = world.ball.body().position;

        for i in 0..world.bricks.len() {
            let brick = &world.bricks[i];
            if !ball_rect.overlaps(brick.rect()) {
                continue;
            }

            let center = brick.position;
            let half_w = brick.width / 2.0;
            let half_h = brick.height / 2.0;

            if ball_pos.y > center.y + half_h {
                bounce(&mut world.ball, Bounce::Top);
            }
            if ball_pos.y < center.y - half_h {
                bounce(&mut world.ball, Bounce::Up);
            }
            if ball_pos.x < center.x - half_w {
                bounce(&mut world.ball, Bounce::Left);
            }
            if ball_pos.x > center.x + half_w {
                bounce(&mut world.ball, Bounce::Right);
            }

            if world.bricks.len() > 1 {
                world.bricks.remove(i);
            }
            world.score += 1;
            break;
        }
    }
}
