//! Wireframe cube drawn on a canvas from the album zone's rotation.

use iced::mouse;
use iced::widget::canvas::{self, Frame, Path, Stroke};
use iced::{Color, Point, Rectangle, Renderer, Theme};

const VERTICES: [[f32; 3]; 8] = [
    [-1.0, -1.0, -1.0],
    [1.0, -1.0, -1.0],
    [1.0, 1.0, -1.0],
    [-1.0, 1.0, -1.0],
    [-1.0, -1.0, 1.0],
    [1.0, -1.0, 1.0],
    [1.0, 1.0, 1.0],
    [-1.0, 1.0, 1.0],
];

const EDGES: [(usize, usize); 12] = [
    (0, 1),
    (1, 2),
    (2, 3),
    (3, 0),
    (4, 5),
    (5, 6),
    (6, 7),
    (7, 4),
    (0, 4),
    (1, 5),
    (2, 6),
    (3, 7),
];

/// Camera distance in cube half-widths.
const CAMERA_DISTANCE: f32 = 4.5;

/// Which of the four side faces points at the camera after turning by
/// `rotation_y` radians.
pub(super) fn facing_side(rotation_y: f32) -> usize {
    if !rotation_y.is_finite() {
        return 0;
    }
    let quarter_turns = (rotation_y / std::f32::consts::FRAC_PI_2).round() as i64;
    quarter_turns.rem_euclid(4) as usize
}

#[derive(Debug, Clone, Copy)]
pub(super) struct CubeView {
    pub(super) rotation_x: f32,
    pub(super) rotation_y: f32,
    pub(super) color: Color,
}

impl CubeView {
    /// Rotate around X then Y and project onto a `size`-wide square.
    fn project(&self, vertex: [f32; 3], center: Point, size: f32) -> Point {
        let [x, y, z] = vertex;
        let (sin_x, cos_x) = self.rotation_x.sin_cos();
        let (y, z) = (y * cos_x - z * sin_x, y * sin_x + z * cos_x);
        let (sin_y, cos_y) = self.rotation_y.sin_cos();
        let (x, z) = (x * cos_y + z * sin_y, -x * sin_y + z * cos_y);

        let scale = size * 0.5 * (CAMERA_DISTANCE - 1.0) / (CAMERA_DISTANCE + z) * 0.5;
        Point::new(center.x + x * scale, center.y + y * scale)
    }
}

impl<Message> canvas::Program<Message> for CubeView {
    type State = ();

    fn draw(
        &self,
        _state: &(),
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let size = bounds.width.min(bounds.height);
        let center = frame.center();
        let points: Vec<Point> = VERTICES
            .iter()
            .map(|vertex| self.project(*vertex, center, size))
            .collect();

        let edges = Path::new(|builder| {
            for (from, to) in EDGES {
                builder.move_to(points[from]);
                builder.line_to(points[to]);
            }
        });
        frame.stroke(
            &edges,
            Stroke::default().with_color(self.color).with_width(2.0),
        );
        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cube(rotation_x: f32, rotation_y: f32) -> CubeView {
        CubeView {
            rotation_x,
            rotation_y,
            color: Color::WHITE,
        }
    }

    #[test]
    fn unrotated_front_face_is_centered_square() {
        let center = Point::new(100.0, 100.0);
        let view = cube(0.0, 0.0);
        let a = view.project([-1.0, -1.0, -1.0], center, 200.0);
        let b = view.project([1.0, 1.0, -1.0], center, 200.0);
        assert!((a.x + b.x - 200.0).abs() < 1e-3);
        assert!((a.y + b.y - 200.0).abs() < 1e-3);
        assert!(b.x > a.x);
    }

    #[test]
    fn near_face_projects_larger_than_far_face() {
        let center = Point::new(0.0, 0.0);
        let view = cube(0.0, 0.0);
        let near = view.project([1.0, 1.0, -1.0], center, 200.0);
        let far = view.project([1.0, 1.0, 1.0], center, 200.0);
        assert!(near.x > far.x);
    }

    #[test]
    fn facing_side_cycles_every_quarter_turn() {
        use std::f32::consts::{FRAC_PI_2, PI};
        assert_eq!(facing_side(0.0), 0);
        assert_eq!(facing_side(FRAC_PI_2), 1);
        assert_eq!(facing_side(PI + 0.2), 2);
        assert_eq!(facing_side(2.0 * PI), 0);
        assert_eq!(facing_side(-FRAC_PI_2), 3);
        assert_eq!(facing_side(f32::NAN), 0);
    }

    #[test]
    fn half_turn_mirrors_horizontally() {
        let center = Point::new(0.0, 0.0);
        let front = cube(0.0, 0.0).project([1.0, 0.0, -1.0], center, 200.0);
        let turned = cube(0.0, std::f32::consts::PI).project([-1.0, 0.0, 1.0], center, 200.0);
        assert!((front.x - turned.x).abs() < 1e-3);
    }
}
