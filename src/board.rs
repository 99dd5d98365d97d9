use crate::drawing::{Drawing, Point};

/// In-memory drawing model: every committed drawing plus the one being
/// dragged out right now.
#[derive(Debug, Default)]
pub struct Board {
    drawings: Vec<Drawing>,
    start: Option<Point>,
    holding: bool,
    preview: Option<Drawing>,
    dirty: bool,
}

impl Board {
    pub fn drawings(&self) -> &[Drawing] {
        &self.drawings
    }

    pub fn preview(&self) -> Option<&Drawing> {
        self.preview.as_ref()
    }

    pub fn is_holding(&self) -> bool {
        self.holding
    }

    /// Mouse-down: remember where the drag started.
    pub fn user_click(&mut self, at: Point) {
        self.start = Some(at);
        self.holding = true;
    }

    /// Mouse-move while the button is held. Returns `true` when the scene
    /// has to be redrawn.
    pub fn draw_shape(&mut self, at: Point) -> bool {
        if !self.holding {
            return false;
        }
        let Some(start) = self.start else {
            self.holding = false;
            return false;
        };

        log::trace!("Dragging from {:?} to {:?}", start, at);
        self.preview = Some(Drawing::new(start, at));
        self.dirty = true;
        true
    }

    /// Mouse-up: commit the drawing if a drag was in progress.
    pub fn stop_drawing(&mut self, at: Point) -> Option<&Drawing> {
        self.holding = false;
        self.preview = None;
        let start = self.start.take()?;

        self.drawings.push(Drawing::new(start, at));
        self.dirty = true;
        log::debug!(
            "Committed drawing #{} from {:?} to {:?}",
            self.drawings.len(),
            start,
            at
        );
        self.drawings.last()
    }

    /// Drops a drag in progress without committing it.
    pub fn cancel(&mut self) {
        self.holding = false;
        self.start = None;
        if self.preview.take().is_some() {
            self.dirty = true;
        }
    }

    /// Returns whether anything changed since the last call, and resets the
    /// flag.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Committed drawings followed by the live preview, in paint order.
    pub fn scene(&self) -> impl Iterator<Item = &Drawing> {
        self.drawings.iter().chain(self.preview.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drag(board: &mut Board, from: (f32, f32), to: (f32, f32)) {
        board.user_click(Point::new(from.0, from.1));
        board.draw_shape(Point::new(
            (from.0 + to.0) / 2.0,
            (from.1 + to.1) / 2.0,
        ));
        board.draw_shape(Point::new(to.0, to.1));
        board.stop_drawing(Point::new(to.0, to.1));
    }

    #[test]
    fn one_drawing_per_completed_drag() {
        let mut board = Board::default();
        drag(&mut board, (10.0, 10.0), (60.0, 40.0));
        assert_eq!(board.drawings().len(), 1);
        drag(&mut board, (100.0, 100.0), (80.0, 120.0));
        assert_eq!(board.drawings().len(), 2);

        assert_eq!(
            board.drawings()[1],
            Drawing::new(Point::new(100.0, 100.0), Point::new(80.0, 120.0))
        );
    }

    #[test]
    fn move_without_press_is_ignored() {
        let mut board = Board::default();
        assert!(!board.draw_shape(Point::new(5.0, 5.0)));
        assert!(board.preview().is_none());
        assert!(!board.take_dirty());
    }

    #[test]
    fn release_without_press_commits_nothing() {
        let mut board = Board::default();
        assert!(board.stop_drawing(Point::new(5.0, 5.0)).is_none());
        assert!(board.drawings().is_empty());
    }

    #[test]
    fn click_without_move_still_commits() {
        let mut board = Board::default();
        board.user_click(Point::new(3.0, 4.0));
        let committed = board.stop_drawing(Point::new(3.0, 4.0)).copied();
        assert_eq!(
            committed,
            Some(Drawing::new(Point::new(3.0, 4.0), Point::new(3.0, 4.0)))
        );
    }

    #[test]
    fn preview_follows_pointer_and_clears_on_commit() {
        let mut board = Board::default();
        board.user_click(Point::new(0.0, 0.0));
        assert!(board.is_holding());

        assert!(board.draw_shape(Point::new(20.0, 30.0)));
        assert_eq!(board.preview().and_then(|d| d.end), Some(Point::new(20.0, 30.0)));
        board.draw_shape(Point::new(25.0, 35.0));
        assert_eq!(board.preview().and_then(|d| d.end), Some(Point::new(25.0, 35.0)));
        assert_eq!(board.scene().count(), 1);

        board.stop_drawing(Point::new(25.0, 35.0));
        assert!(board.preview().is_none());
        assert!(!board.is_holding());
        assert_eq!(board.scene().count(), 1);
    }

    #[test]
    fn scene_paints_preview_last() {
        let mut board = Board::default();
        drag(&mut board, (0.0, 0.0), (10.0, 10.0));
        board.user_click(Point::new(50.0, 50.0));
        board.draw_shape(Point::new(70.0, 70.0));

        let scene: Vec<_> = board.scene().collect();
        assert_eq!(scene.len(), 2);
        assert_eq!(scene[1].start, Some(Point::new(50.0, 50.0)));
    }

    #[test]
    fn cancel_discards_the_drag() {
        let mut board = Board::default();
        board.user_click(Point::new(0.0, 0.0));
        board.draw_shape(Point::new(30.0, 30.0));
        board.take_dirty();

        board.cancel();
        assert!(board.preview().is_none());
        assert!(!board.is_holding());
        assert!(board.take_dirty());
        assert!(board.stop_drawing(Point::new(30.0, 30.0)).is_none());
        assert!(board.drawings().is_empty());
    }

    #[test]
    fn dirty_flag_resets() {
        let mut board = Board::default();
        board.user_click(Point::new(0.0, 0.0));
        board.draw_shape(Point::new(1.0, 1.0));
        assert!(board.take_dirty());
        assert!(!board.take_dirty());
    }
}
