//! Game entities and session state
//!
//! A session owns a ball, a platform, and a grid of blocks inside a fixed
//! 640x360 world. All collision checks are look-ahead: they test the box an
//! entity will occupy after its pending move, so velocity can be reflected
//! before the move is committed.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::{Edge, world_edge_contact};
use super::rect::Rect;
use crate::consts::*;
use crate::settings::Settings;

/// Horizontal movement request from the input boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Left,
    Right,
}

/// Session phase. `Won` and `Lost` are terminal; once reached, only a full
/// reset produces a `Running` session again.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Running,
    Won,
    Lost,
}

impl GamePhase {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Running)
    }

    /// The user-facing message for a terminal phase.
    pub fn end_message(&self) -> Option<&'static str> {
        match self {
            GamePhase::Running => None,
            GamePhase::Won => Some("WIN"),
            GamePhase::Lost => Some("game over!"),
        }
    }
}

/// The moving ball. Starts at rest on the platform (`vel == 0`) until
/// launched; speed caps both velocity components.
#[derive(Debug, Clone)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per frame; reflections swap signs, never add magnitudes.
    pub speed: f32,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(speed: f32) -> Self {
        Self {
            rect: Rect::new(BALL_START_X, BALL_START_Y, BALL_SIZE, BALL_SIZE),
            speed,
            vel: Vec2::ZERO,
        }
    }

    pub fn at_rest(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// The box the ball will occupy after its pending move.
    pub fn predicted(&self) -> Rect {
        self.rect.translate(self.vel)
    }

    /// Look-ahead collision test: the *predicted* ball box against the
    /// target's *current* box. Reflecting before the move is committed keeps
    /// the ball out of thin rectangles at discrete frame steps; a ball faster
    /// than a target is thick can still tunnel, which is accepted here.
    pub fn collides(&self, target: &Rect) -> bool {
        self.predicted().overlaps(target)
    }

    /// Send a resting ball on its way: straight up, with a random integer
    /// horizontal component in `[-speed, speed]`.
    pub fn launch(&mut self, rng: &mut Pcg32) {
        debug_assert!(self.at_rest());
        let span = self.speed as i32;
        self.vel.y = -self.speed;
        self.vel.x = rng.random_range(-span..=span) as f32;
    }

    /// Commit the pending move, one axis at a time.
    pub fn step(&mut self) {
        if self.vel.y != 0.0 {
            self.rect.pos.y += self.vel.y;
        }
        if self.vel.x != 0.0 {
            self.rect.pos.x += self.vel.x;
        }
    }

    /// Resolve contact with the world box and return the edge hit, if any.
    /// Side walls flip the horizontal velocity, the ceiling the vertical.
    /// Floor contact is the lose signal; the ball is left untouched because
    /// the session is ending.
    pub fn resolve_world_bounds(&mut self, bounds: Vec2) -> Option<Edge> {
        let edge = world_edge_contact(&self.predicted(), bounds)?;
        match edge {
            Edge::Left | Edge::Right => self.vel.x = -self.vel.x,
            Edge::Top => self.vel.y = -self.vel.y,
            Edge::Floor => {}
        }
        Some(edge)
    }

    /// Rebound off a block and break it. The bounce is always vertical,
    /// whatever the contact angle.
    pub fn bounce_off_block(&mut self, block: &mut Block) {
        self.vel.y = -self.vel.y;
        block.active = false;
    }

    /// Deflect off the platform. A moving platform first drags the ball
    /// along its surface. Only a downward ball rebounds - a side graze while
    /// already rising must not flip the ball a second time. The rebound
    /// angle comes from where along the platform the ball touched: edge hits
    /// leave steep, center hits leave straight up.
    pub fn bounce_off_platform(&mut self, platform: &Platform) {
        if platform.dx != 0.0 {
            self.rect.pos.x += platform.dx;
        }
        if self.vel.y > 0.0 {
            self.vel.y = -self.speed;
            self.vel.x = self.speed * platform.touch_offset(self.rect.center_x());
        }
    }
}

/// Whether the platform still carries the resting ball. Flips to `Launched`
/// exactly once, on fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BallHold {
    Carrying,
    Launched,
}

/// The player's paddle. Moves horizontally at a fixed speed, so
/// `dx` is always one of `{-speed, 0, +speed}`.
#[derive(Debug, Clone)]
pub struct Platform {
    pub rect: Rect,
    pub speed: f32,
    pub dx: f32,
    pub hold: BallHold,
}

impl Platform {
    pub fn new(speed: f32) -> Self {
        Self {
            rect: Rect::new(
                PLATFORM_START_X,
                PLATFORM_START_Y,
                PLATFORM_WIDTH,
                PLATFORM_HEIGHT,
            ),
            speed,
            dx: 0.0,
            hold: BallHold::Carrying,
        }
    }

    pub fn is_carrying(&self) -> bool {
        self.hold == BallHold::Carrying
    }

    pub fn start_move(&mut self, direction: Direction) {
        self.dx = match direction {
            Direction::Left => -self.speed,
            Direction::Right => self.speed,
        };
    }

    /// Any key release stops the platform, whichever key it was.
    pub fn stop_move(&mut self) {
        self.dx = 0.0;
    }

    /// Commit the pending move. A carried ball is dragged by the same dx at
    /// the world level, so it stays glued to the platform pre-launch.
    pub fn step(&mut self) {
        if self.dx != 0.0 {
            self.rect.pos.x += self.dx;
        }
    }

    /// Hard stop at the side walls: if the predicted x leaves the world,
    /// the pending move is cancelled. Not a bounce.
    pub fn clamp_to_world(&mut self, world_width: f32) {
        let next = self.rect.translate(Vec2::new(self.dx, 0.0));
        if next.left() < 0.0 || next.right() > world_width {
            self.dx = 0.0;
        }
    }

    /// Normalized contact position along the platform width: -1.0 at the
    /// left edge, 0.0 at the center, +1.0 at the right edge.
    pub fn touch_offset(&self, touch_x: f32) -> f32 {
        let diff = self.rect.right() - touch_x;
        let offset = self.rect.size.x - diff;
        2.0 * offset / self.rect.size.x - 1.0
    }
}

/// One cell of the block grid. The position never changes; `active` flips
/// true to false exactly once, when the ball breaks the block.
#[derive(Debug, Clone)]
pub struct Block {
    pub rect: Rect,
    pub active: bool,
}

/// Lay out the rows x cols grid. Fixed cardinality for the session; only the
/// `active` flags mutate afterwards.
pub fn block_grid(rows: u32, cols: u32) -> Vec<Block> {
    let mut blocks = Vec::with_capacity((rows * cols) as usize);
    for row in 0..rows {
        for col in 0..cols {
            blocks.push(Block {
                rect: Rect::new(
                    col as f32 * GRID_PITCH_X + GRID_ORIGIN_X,
                    row as f32 * GRID_PITCH_Y + GRID_ORIGIN_Y,
                    BLOCK_WIDTH,
                    BLOCK_HEIGHT,
                ),
                active: true,
            });
        }
    }
    blocks
}

/// Complete session state. Owns every entity; lives from construction (or
/// [`GameState::reset`]) until the phase turns terminal.
#[derive(Debug, Clone)]
pub struct GameState {
    pub seed: u64,
    rng: Pcg32,
    settings: Settings,
    pub bounds: Vec2,
    pub phase: GamePhase,
    /// Broken-block count; monotonic, capped at the grid size.
    pub score: u32,
    pub ball: Ball,
    pub platform: Platform,
    pub blocks: Vec<Block>,
}

impl GameState {
    pub fn new(settings: &Settings, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            settings: settings.clone(),
            bounds: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT),
            phase: GamePhase::Running,
            score: 0,
            ball: Ball::new(settings.ball_speed),
            platform: Platform::new(settings.platform_speed),
            blocks: block_grid(settings.rows, settings.cols),
        }
    }

    pub fn running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    /// Hard session reset: every entity is discarded and rebuilt from the
    /// original configuration.
    pub fn reset(&mut self, seed: u64) {
        let settings = self.settings.clone();
        *self = Self::new(&settings, seed);
    }

    /// Launch the carried ball. Once launched, the hold is cleared, so later
    /// fires are no-ops until the next session.
    pub fn fire(&mut self) {
        if self.platform.is_carrying() {
            self.ball.launch(&mut self.rng);
            self.platform.hold = BallHold::Launched;
            log::debug!(
                "ball launched with vel ({}, {})",
                self.ball.vel.x,
                self.ball.vel.y
            );
        }
    }

    /// Score one broken block. Reaching the full block count wins the
    /// session, exactly once.
    pub(crate) fn add_score(&mut self) {
        self.score += 1;
        if self.phase == GamePhase::Running && self.score >= self.blocks.len() as u32 {
            self.phase = GamePhase::Won;
            log::info!("all {} blocks broken", self.score);
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn test_settings(rows: u32, cols: u32) -> Settings {
        Settings {
            rows,
            cols,
            ..Settings::default()
        }
    }

    #[test]
    fn ball_starts_resting_on_the_platform() {
        let state = GameState::new(&test_settings(1, 1), 7);
        assert!(state.ball.at_rest());
        assert_eq!(state.ball.rect.pos, Vec2::new(320.0, 280.0));
        assert!(state.platform.is_carrying());
    }

    #[test]
    fn fire_launches_upward_with_bounded_spin() {
        let mut state = GameState::new(&test_settings(1, 1), 7);
        state.fire();

        assert_eq!(state.ball.vel.y, -4.0);
        assert!(state.ball.vel.x >= -4.0 && state.ball.vel.x <= 4.0);
        assert_eq!(state.ball.vel.x.fract(), 0.0);
        assert!(!state.platform.is_carrying());
    }

    #[test]
    fn second_fire_is_a_noop() {
        let mut state = GameState::new(&test_settings(1, 1), 7);
        state.fire();
        let vel = state.ball.vel;

        state.fire();
        assert_eq!(state.ball.vel, vel);
    }

    #[test]
    fn touch_offset_spans_the_platform() {
        let platform = Platform::new(PLATFORM_SPEED);
        let left = platform.rect.left();
        let width = platform.rect.size.x;

        assert_eq!(platform.touch_offset(left), -1.0);
        assert_eq!(platform.touch_offset(left + width / 2.0), 0.0);
        assert_eq!(platform.touch_offset(left + width), 1.0);
    }

    #[test]
    fn clamp_stops_the_platform_at_the_walls() {
        let mut platform = Platform::new(PLATFORM_SPEED);
        platform.rect.pos.x = 0.0;
        platform.start_move(Direction::Left);
        platform.clamp_to_world(WORLD_WIDTH);
        assert_eq!(platform.dx, 0.0);

        platform.rect.pos.x = WORLD_WIDTH - platform.rect.size.x;
        platform.start_move(Direction::Right);
        platform.clamp_to_world(WORLD_WIDTH);
        assert_eq!(platform.dx, 0.0);
    }

    #[test]
    fn clamp_keeps_a_free_platform_moving() {
        let mut platform = Platform::new(PLATFORM_SPEED);
        platform.start_move(Direction::Right);
        platform.clamp_to_world(WORLD_WIDTH);
        assert_eq!(platform.dx, PLATFORM_SPEED);
    }

    #[test]
    fn stop_move_zeroes_dx() {
        let mut platform = Platform::new(PLATFORM_SPEED);
        platform.start_move(Direction::Left);
        assert_eq!(platform.dx, -PLATFORM_SPEED);
        platform.stop_move();
        assert_eq!(platform.dx, 0.0);
    }

    #[test]
    fn downward_ball_rebounds_off_the_platform() {
        let platform = Platform::new(PLATFORM_SPEED);
        let mut ball = Ball::new(BALL_SPEED);
        // Center the ball over the platform, falling.
        ball.rect.pos.x = platform.rect.center_x() - ball.rect.size.x / 2.0;
        ball.vel = Vec2::new(0.0, BALL_SPEED);

        ball.bounce_off_platform(&platform);
        assert_eq!(ball.vel.y, -BALL_SPEED);
        assert_eq!(ball.vel.x, 0.0);
    }

    #[test]
    fn rising_ball_is_not_double_bounced() {
        let platform = Platform::new(PLATFORM_SPEED);
        let mut ball = Ball::new(BALL_SPEED);
        ball.vel = Vec2::new(2.0, -BALL_SPEED);

        ball.bounce_off_platform(&platform);
        assert_eq!(ball.vel, Vec2::new(2.0, -BALL_SPEED));
    }

    #[test]
    fn moving_platform_drags_the_ball_on_contact() {
        let mut platform = Platform::new(PLATFORM_SPEED);
        platform.start_move(Direction::Right);
        let mut ball = Ball::new(BALL_SPEED);
        let x_before = ball.rect.pos.x;
        ball.vel = Vec2::new(0.0, -BALL_SPEED);

        ball.bounce_off_platform(&platform);
        assert_eq!(ball.rect.pos.x, x_before + PLATFORM_SPEED);
    }

    #[test]
    fn edge_hits_leave_at_full_tilt() {
        let platform = Platform::new(PLATFORM_SPEED);
        let mut ball = Ball::new(BALL_SPEED);
        // Ball center exactly on the platform's right edge.
        ball.rect.pos.x = platform.rect.right() - ball.rect.size.x / 2.0;
        ball.vel = Vec2::new(0.0, BALL_SPEED);

        ball.bounce_off_platform(&platform);
        assert_eq!(ball.vel.x, BALL_SPEED);
    }

    #[test]
    fn wall_reflection_flips_one_axis_only() {
        let mut ball = Ball::new(BALL_SPEED);
        ball.rect.pos = Vec2::new(2.0, 100.0);
        ball.vel = Vec2::new(-4.0, -4.0);

        let bounds = Vec2::new(WORLD_WIDTH, WORLD_HEIGHT);
        assert_eq!(ball.resolve_world_bounds(bounds), Some(Edge::Left));
        assert_eq!(ball.vel, Vec2::new(4.0, -4.0));
    }

    #[test]
    fn ceiling_reflection_preserves_horizontal_velocity() {
        let mut ball = Ball::new(BALL_SPEED);
        ball.rect.pos = Vec2::new(100.0, 2.0);
        ball.vel = Vec2::new(3.0, -4.0);

        let bounds = Vec2::new(WORLD_WIDTH, WORLD_HEIGHT);
        assert_eq!(ball.resolve_world_bounds(bounds), Some(Edge::Top));
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn floor_contact_reports_but_does_not_mutate() {
        let mut ball = Ball::new(BALL_SPEED);
        ball.rect.pos = Vec2::new(100.0, 338.0);
        ball.vel = Vec2::new(0.0, 4.0);

        let bounds = Vec2::new(WORLD_WIDTH, WORLD_HEIGHT);
        assert_eq!(ball.resolve_world_bounds(bounds), Some(Edge::Floor));
        assert_eq!(ball.vel, Vec2::new(0.0, 4.0));
    }

    #[test]
    fn block_bounce_is_always_vertical() {
        let mut ball = Ball::new(BALL_SPEED);
        ball.vel = Vec2::new(3.0, -4.0);
        let mut block = Block {
            rect: Rect::new(65.0, 35.0, 60.0, 20.0),
            active: true,
        };

        ball.bounce_off_block(&mut block);
        assert_eq!(ball.vel, Vec2::new(3.0, 4.0));
        assert!(!block.active);
    }

    #[test]
    fn one_by_one_grid_matches_the_layout() {
        let blocks = block_grid(1, 1);
        assert_eq!(blocks.len(), 1);
        assert_eq!(blocks[0].rect, Rect::new(65.0, 35.0, 60.0, 20.0));
        assert!(blocks[0].active);
    }

    #[test]
    fn grid_cells_step_by_the_fixed_pitch() {
        let blocks = block_grid(2, 3);
        assert_eq!(blocks.len(), 6);
        // Row-major: second cell is one column over.
        assert_eq!(blocks[1].rect.pos, Vec2::new(129.0, 35.0));
        // Fourth cell starts the second row.
        assert_eq!(blocks[3].rect.pos, Vec2::new(65.0, 59.0));
    }

    #[test]
    fn reset_discards_the_whole_session() {
        let mut state = GameState::new(&test_settings(1, 1), 7);
        state.fire();
        state.score = 1;
        state.phase = GamePhase::Won;

        state.reset(8);
        assert_eq!(state.score, 0);
        assert!(state.running());
        assert!(state.ball.at_rest());
        assert!(state.platform.is_carrying());
        assert!(state.blocks[0].active);
    }

    proptest! {
        #[test]
        fn touch_offset_is_normalized(x in 0.0f32..=100.0) {
            let platform = Platform::new(PLATFORM_SPEED);
            let offset = platform.touch_offset(platform.rect.left() + x);
            prop_assert!((-1.0..=1.0).contains(&offset));
        }

        #[test]
        // x range keeps the contact point on the platform even after the
        // drag; off-platform grazes are outside the formula's domain.
        fn platform_rebound_never_exceeds_ball_speed(x in 6.0f32..=94.0, dx in -6.0f32..=6.0) {
            let mut platform = Platform::new(PLATFORM_SPEED);
            platform.dx = dx;
            let mut ball = Ball::new(BALL_SPEED);
            ball.rect.pos.x = platform.rect.left() + x - ball.rect.size.x / 2.0;
            ball.vel = Vec2::new(0.0, BALL_SPEED);

            ball.bounce_off_platform(&platform);
            prop_assert!(ball.vel.x.abs() <= ball.speed + 1e-4);
            prop_assert!(ball.vel.y.abs() <= ball.speed + 1e-4);
        }

        #[test]
        fn launch_components_stay_within_speed(seed in any::<u64>()) {
            let mut rng = Pcg32::seed_from_u64(seed);
            let mut ball = Ball::new(BALL_SPEED);
            ball.launch(&mut rng);
            prop_assert_eq!(ball.vel.y, -BALL_SPEED);
            prop_assert!(ball.vel.x.abs() <= BALL_SPEED);
        }
    }
}
