use glam::Vec2;

use crate::components::Side;
use crate::params::Params;

/// Axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_center_half_extent(center: Vec2, half: Vec2) -> Self {
        Self {
            min: center - half,
            max: center + half,
        }
    }

    pub fn left(&self) -> f32 {
        self.min.x
    }

    pub fn right(&self) -> f32 {
        self.max.x
    }

    pub fn top(&self) -> f32 {
        self.min.y
    }

    pub fn bottom(&self) -> f32 {
        self.max.y
    }

    /// Strict overlap test: boxes sharing only an edge do not overlap.
    pub fn overlaps(&self, other: &Bounds) -> bool {
        self.min.x < other.max.x
            && self.max.x > other.min.x
            && self.min.y < other.max.y
            && self.max.y > other.min.y
    }
}

/// The rectangular play area. All positions are relative to its top-left corner,
/// with y growing downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Court {
    pub width: f32,
    pub height: f32,
}

impl Court {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height / 2.0)
    }

    /// Fixed x of a paddle's left edge.
    pub fn paddle_x(&self, side: Side, paddle_width: f32) -> f32 {
        match side {
            Side::Left => Params::PADDLE_MARGIN,
            Side::Right => self.width - Params::PADDLE_MARGIN - paddle_width,
        }
    }

    /// Top edge that centres a paddle vertically.
    pub fn paddle_spawn_y(&self, paddle_height: f32) -> f32 {
        self.height / 2.0 - paddle_height / 2.0
    }

    /// Clamp a paddle's top edge so the whole paddle stays inside the court.
    pub fn clamp_paddle_y(&self, y: f32, paddle_height: f32) -> f32 {
        y.clamp(0.0, self.height - paddle_height)
    }
}

impl Default for Court {
    fn default() -> Self {
        Self::new(Params::COURT_WIDTH, Params::COURT_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paddle_x_per_side() {
        let court = Court::default();
        assert_eq!(court.paddle_x(Side::Left, 15.0), 20.0, "Left paddle X");
        assert_eq!(court.paddle_x(Side::Right, 15.0), 765.0, "Right paddle X");
    }

    #[test]
    fn test_paddle_spawn_is_centered() {
        let court = Court::default();
        assert_eq!(court.paddle_spawn_y(80.0), 160.0);
    }

    #[test]
    fn test_clamp_paddle_y() {
        let court = Court::default();
        assert_eq!(court.clamp_paddle_y(-12.0, 80.0), 0.0);
        assert_eq!(court.clamp_paddle_y(1000.0, 80.0), 320.0);
        assert_eq!(court.clamp_paddle_y(100.0, 80.0), 100.0);
    }

    #[test]
    fn test_touching_bounds_do_not_overlap() {
        let a = Bounds::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Bounds::new(Vec2::new(10.0, 0.0), Vec2::new(20.0, 10.0));
        assert!(!a.overlaps(&b), "Edge contact is not an overlap");

        let c = Bounds::new(Vec2::new(9.5, 5.0), Vec2::new(20.0, 20.0));
        assert!(a.overlaps(&c));
        assert!(c.overlaps(&a));
    }
}
