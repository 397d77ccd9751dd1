use glam::{Vec2, Vec3};

pub const WALL_TAG: &str = "Wall";
pub const PADDLE_TAG: &str = "Paddle";
pub const BRICK_TAG: &str = "Brick";

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Vec2,
    pub max: Vec2,
}

impl Aabb {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_size(center: Vec2, size: Vec2) -> Self {
        let half = size * 0.5;
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        point.clamp(self.min, self.max)
    }

    /// Check if circle intersects AABB
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        (center - self.closest_point(center)).length_squared() <= radius * radius
    }
}

/// What the ball touched during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    Wall,
    Paddle,
    Brick,
}

impl Contact {
    pub fn tag(&self) -> &'static str {
        match self {
            Contact::Wall => WALL_TAG,
            Contact::Paddle => PADDLE_TAG,
            Contact::Brick => BRICK_TAG,
        }
    }
}

/// Playfield in the XY plane: walls left, right and top, kill line at the bottom
#[derive(Debug, Clone)]
pub struct Arena {
    pub width: f32,
    pub height: f32,
    pub kill_y: f32,
    pub paddle_y: f32,
    pub paddle_size: Vec2,
    pub ball_radius: f32,
    pub bricks: Vec<Aabb>,
}

impl Arena {
    pub const WIDTH: f32 = 24.0;
    pub const HEIGHT: f32 = 32.0;
    pub const BRICK_ROWS: usize = 4;
    pub const BRICK_COLS: usize = 8;

    pub fn new() -> Self {
        let mut arena = Self {
            width: Self::WIDTH,
            height: Self::HEIGHT,
            kill_y: 0.0,
            paddle_y: 2.0,
            paddle_size: Vec2::new(4.0, 0.6),
            ball_radius: 0.5,
            bricks: Vec::new(),
        };
        arena.reset_bricks();
        arena
    }

    /// Lay out a fresh wall of bricks across the top
    pub fn reset_bricks(&mut self) {
        self.bricks.clear();
        let size = Vec2::new(2.6, 1.0);
        let gap = 0.2;
        let row_width = Self::BRICK_COLS as f32 * (size.x + gap) - gap;
        let left = (self.width - row_width) / 2.0 + size.x / 2.0;
        let top = self.height - 4.0;

        for row in 0..Self::BRICK_ROWS {
            for col in 0..Self::BRICK_COLS {
                let center = Vec2::new(
                    left + col as f32 * (size.x + gap),
                    top - row as f32 * (size.y + gap),
                );
                self.bricks.push(Aabb::from_center_size(center, size));
            }
        }
    }

    pub fn is_cleared(&self) -> bool {
        self.bricks.is_empty()
    }

    pub fn paddle_box(&self, paddle_x: f32) -> Aabb {
        Aabb::from_center_size(Vec2::new(paddle_x, self.paddle_y), self.paddle_size)
    }

    /// Clamp paddle X to arena bounds
    pub fn clamp_paddle_x(&self, x: f32) -> f32 {
        let half_width = self.paddle_size.x / 2.0;
        x.clamp(half_width, self.width - half_width)
    }

    /// Where a fresh ball rests on the paddle
    pub fn ball_rest(&self, paddle_x: f32) -> Vec3 {
        Vec3::new(
            paddle_x,
            self.paddle_y + self.paddle_size.y / 2.0 + self.ball_radius,
            0.0,
        )
    }

    pub fn is_lost(&self, pos: Vec3) -> bool {
        pos.y < self.kill_y
    }

    /// Bounce the ball off walls, paddle and at most one brick.
    /// Bricks that get hit are removed.
    pub fn resolve(&mut self, pos: &mut Vec3, vel: &mut Vec3, paddle_x: f32) -> Vec<Contact> {
        let mut contacts = Vec::new();
        let r = self.ball_radius;

        // Side walls
        if pos.x - r <= 0.0 && vel.x < 0.0 {
            vel.x = -vel.x;
            pos.x = r;
            contacts.push(Contact::Wall);
        } else if pos.x + r >= self.width && vel.x > 0.0 {
            vel.x = -vel.x;
            pos.x = self.width - r;
            contacts.push(Contact::Wall);
        }

        // Ceiling
        if pos.y + r >= self.height && vel.y > 0.0 {
            vel.y = -vel.y;
            pos.y = self.height - r;
            contacts.push(Contact::Wall);
        }

        // Paddle only bounces a falling ball
        let center = pos.truncate();
        let paddle = self.paddle_box(paddle_x);
        if vel.y < 0.0 && paddle.intersects_circle(center, r) {
            vel.y = -vel.y;
            pos.y = paddle.max.y + r;
            contacts.push(Contact::Paddle);
        }

        if let Some(index) = self
            .bricks
            .iter()
            .position(|b| b.intersects_circle(center, r))
        {
            let brick = self.bricks.swap_remove(index);
            let normal = center - brick.closest_point(center);
            if normal.x.abs() > normal.y.abs() {
                vel.x = -vel.x;
            } else {
                vel.y = -vel.y;
            }
            contacts.push(Contact::Brick);
        }

        contacts
    }
}

impl Default for Arena {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aabb_contains() {
        let aabb = Aabb::from_center_size(Vec2::new(1.0, 1.0), Vec2::new(2.0, 2.0));
        assert!(aabb.contains(Vec2::new(0.5, 1.5)));
        assert!(!aabb.contains(Vec2::new(2.5, 1.0)));
    }

    #[test]
    fn test_aabb_intersects_circle() {
        let aabb = Aabb::new(Vec2::ZERO, Vec2::new(2.0, 2.0));
        assert!(aabb.intersects_circle(Vec2::new(2.4, 1.0), 0.5));
        assert!(!aabb.intersects_circle(Vec2::new(3.0, 1.0), 0.5));
    }

    #[test]
    fn test_brick_layout() {
        let arena = Arena::new();
        assert_eq!(arena.bricks.len(), Arena::BRICK_ROWS * Arena::BRICK_COLS);
        for brick in &arena.bricks {
            assert!(brick.min.x >= 0.0 && brick.max.x <= arena.width);
            assert!(brick.max.y < arena.height);
        }
    }

    #[test]
    fn test_side_wall_bounce() {
        let mut arena = Arena::new();
        let mut pos = Vec3::new(0.2, 10.0, 0.0);
        let mut vel = Vec3::new(-5.0, 3.0, 0.0);

        let contacts = arena.resolve(&mut pos, &mut vel, 12.0);

        assert_eq!(contacts, vec![Contact::Wall]);
        assert_eq!(vel, Vec3::new(5.0, 3.0, 0.0));
        assert_eq!(pos.x, arena.ball_radius);
    }

    #[test]
    fn test_paddle_bounces_falling_ball_only() {
        let mut arena = Arena::new();
        let rest = arena.ball_rest(12.0);

        let mut pos = rest - Vec3::new(0.0, 0.2, 0.0);
        let mut vel = Vec3::new(1.0, -10.0, 0.0);
        assert_eq!(arena.resolve(&mut pos, &mut vel, 12.0), vec![Contact::Paddle]);
        assert!(vel.y > 0.0);

        let mut pos = rest;
        let mut vel = Vec3::new(1.0, 10.0, 0.0);
        assert!(arena.resolve(&mut pos, &mut vel, 12.0).is_empty());
    }

    #[test]
    fn test_brick_hit_removes_brick() {
        let mut arena = Arena::new();
        let target = *arena.bricks.last().unwrap(); // bottom row
        let below = Vec2::new((target.min.x + target.max.x) / 2.0, target.min.y - 0.3);
        let mut pos = below.extend(0.0);
        let mut vel = Vec3::new(0.0, 10.0, 0.0);

        let contacts = arena.resolve(&mut pos, &mut vel, 12.0);

        assert_eq!(contacts, vec![Contact::Brick]);
        assert_eq!(vel.y, -10.0);
        assert_eq!(arena.bricks.len(), Arena::BRICK_ROWS * Arena::BRICK_COLS - 1);
        assert!(!arena.bricks.contains(&target));
    }

    #[test]
    fn test_clamp_paddle_x() {
        let arena = Arena::new();
        assert_eq!(arena.clamp_paddle_x(-5.0), 2.0);
        assert_eq!(arena.clamp_paddle_x(100.0), arena.width - 2.0);
        assert_eq!(arena.clamp_paddle_x(12.0), 12.0);
    }

    #[test]
    fn test_kill_line() {
        let arena = Arena::new();
        assert!(arena.is_lost(Vec3::new(5.0, -0.1, 0.0)));
        assert!(!arena.is_lost(Vec3::new(5.0, 0.1, 0.0)));
    }
}
