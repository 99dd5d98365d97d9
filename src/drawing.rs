use winit::window::CursorIcon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tool {
    #[default]
    Pointer,
    Circle,
    Square,
    Arrow,
}

impl Tool {
    /// Toolbar order, also used for the 1-4 keyboard shortcuts.
    pub const ALL: [Tool; 4] = [Tool::Pointer, Tool::Circle, Tool::Square, Tool::Arrow];

    pub fn cursor(self) -> CursorIcon {
        match self {
            Tool::Circle | Tool::Square => CursorIcon::Crosshair,
            Tool::Pointer | Tool::Arrow => CursorIcon::Default,
        }
    }

    /// Whether a drag on the canvas with this tool produces a drawing.
    pub fn draws(self) -> bool {
        matches!(self, Tool::Square)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<Point> for [f32; 2] {
    fn from(p: Point) -> Self {
        [p.x, p.y]
    }
}

/// A committed shape: the pointer position at mouse-down and at mouse-up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Drawing {
    pub start: Option<Point>,
    pub end: Option<Point>,
}

impl Drawing {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Origin and size of the rectangle to render, or `None` until both
    /// points are known. The origin sits on the half pixel so one-pixel
    /// strokes land on pixel centres. The size keeps the drag direction and
    /// may be negative.
    pub fn rect(&self) -> Option<([f32; 2], [f32; 2])> {
        let (start, end) = (self.start?, self.end?);
        Some((
            [start.x + 0.5, start.y + 0.5],
            [end.x - start.x, end.y - start.y],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crosshair_only_for_shape_tools() {
        assert_eq!(Tool::Circle.cursor(), CursorIcon::Crosshair);
        assert_eq!(Tool::Square.cursor(), CursorIcon::Crosshair);
        assert_eq!(Tool::Pointer.cursor(), CursorIcon::Default);
        assert_eq!(Tool::Arrow.cursor(), CursorIcon::Default);
    }

    #[test]
    fn rect_needs_both_points() {
        let half = Drawing {
            start: Some(Point::new(1.0, 2.0)),
            end: None,
        };
        assert!(half.rect().is_none());
        assert!(Drawing::default().rect().is_none());
    }

    #[test]
    fn rect_accepts_zero_coordinates() {
        let d = Drawing::new(Point::new(0.0, 0.0), Point::new(10.0, 0.0));
        let (origin, size) = d.rect().unwrap();
        assert_eq!(origin, [0.5, 0.5]);
        assert_eq!(size, [10.0, 0.0]);
    }

    #[test]
    fn rect_keeps_drag_direction() {
        let d = Drawing::new(Point::new(50.0, 40.0), Point::new(20.0, 10.0));
        let (origin, size) = d.rect().unwrap();
        assert_eq!(origin, [50.5, 40.5]);
        assert_eq!(size, [-30.0, -30.0]);
    }
}
