use crate::board::Board;
use crate::config::BoardConfig;
use crate::drawing::{Point, Tool};
use crate::mesh::Mesh;
use crate::rough::{HandDrawnOptions, RoughGenerator};
use crate::selection::ToolSelection;
use crate::state::InputState;
use crate::state::UserInputState::{Drawing, Idle};
use crate::ui::UiRenderer;

/// Everything the whiteboard knows apart from the GPU: the board, the tool
/// selection, the toolbar and the pointer routing between them.
pub struct Sketch {
    pub board: Board,
    pub tools: ToolSelection,
    pub input: InputState,
    pub ui_renderer: UiRenderer,
    pub rough: RoughGenerator,
    pub style: HandDrawnOptions,
    pub background: [f32; 4],
    /// Set whenever the toolbar or viewport changed and the mesh must be
    /// rebuilt even though the board is unchanged.
    pub needs_rebuild: bool,
}

impl Sketch {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            board: Board::default(),
            tools: ToolSelection::default(),
            input: InputState::default(),
            ui_renderer: UiRenderer::new(),
            rough: RoughGenerator::new(config.seed),
            style: config.stroke_style(),
            background: config.background,
            needs_rebuild: true,
        }
    }

    /// Switching tools ends any drag in progress without committing it.
    /// Returns `true` when the selection changed.
    pub fn select_tool(&mut self, tool: Tool) -> bool {
        if !self.tools.select(tool) {
            return false;
        }
        if self.input.state == Drawing {
            self.input.state = Idle;
            self.board.cancel();
        }
        self.needs_rebuild = true;
        true
    }

    /// Left button down at the last known pointer position. Returns the
    /// tool picked in the toolbar, if the press landed on a button.
    pub fn pointer_pressed(&mut self, viewport: [f32; 2]) -> Option<Tool> {
        let mouse_pos = self.input.mouse_pos.into();

        if let Some(tool) = self.ui_renderer.handle_click(mouse_pos, viewport) {
            self.select_tool(tool);
            return Some(tool);
        }

        if self.ui_renderer.is_mouse_over_ui(mouse_pos, viewport) {
            return None;
        }

        if self.tools.selected().draws() {
            self.input.state = Drawing;
            self.board.user_click(self.input.mouse_pos);
        }
        None
    }

    /// Returns `true` when the scene has to be redrawn.
    pub fn pointer_moved(&mut self, at: Point) -> bool {
        self.input.mouse_pos = at;
        if self.input.state == Drawing {
            self.board.draw_shape(at)
        } else {
            false
        }
    }

    pub fn pointer_released(&mut self) {
        if self.input.state == Drawing {
            self.input.state = Idle;
            self.board.stop_drawing(self.input.mouse_pos);
        }
    }

    /// Clears both change flags and reports whether either was set.
    pub fn take_rebuild(&mut self) -> bool {
        let board_changed = self.board.take_dirty();
        let rebuild = std::mem::take(&mut self.needs_rebuild);
        board_changed || rebuild
    }

    /// Fills `mesh` with every drawing, the live preview and the toolbar.
    /// Jitter is regenerated on every call.
    pub fn build_mesh(&mut self, mesh: &mut Mesh, viewport: [f32; 2]) {
        mesh.clear();

        for drawing in self.board.scene() {
            let Some((position, size)) = drawing.rect() else {
                continue;
            };
            for edge in self.rough.hand_drawn_rect(position, size, &self.style) {
                mesh.push_polyline(&edge, self.style.stroke_width, self.style.stroke);
            }
        }

        self.ui_renderer
            .generate_ui_vertices(mesh, self.tools.selected(), viewport);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWPORT: [f32; 2] = [1000.0, 800.0];

    // Toolbar centred in a 1000px viewport: buttons start at x=405 and are
    // 40px wide with 10px gaps, between y=15 and y=55.
    const SQUARE_BUTTON: Point = Point { x: 525.0, y: 35.0 };
    const BUTTON_GAP: Point = Point { x: 450.0, y: 35.0 };

    fn sketch_with(tool: Tool) -> Sketch {
        let mut sketch = Sketch::new(&BoardConfig {
            seed: Some(5),
            ..BoardConfig::default()
        });
        sketch.select_tool(tool);
        sketch
    }

    fn drag(sketch: &mut Sketch, from: Point, to: Point) {
        sketch.pointer_moved(from);
        sketch.pointer_pressed(VIEWPORT);
        sketch.pointer_moved(Point::new((from.x + to.x) / 2.0, (from.y + to.y) / 2.0));
        sketch.pointer_moved(to);
        sketch.pointer_released();
    }

    #[test]
    fn only_square_draws() {
        assert!(Tool::Square.draws());
        for tool in [Tool::Pointer, Tool::Circle, Tool::Arrow] {
            assert!(!tool.draws());

            let mut sketch = sketch_with(tool);
            drag(&mut sketch, Point::new(100.0, 200.0), Point::new(300.0, 400.0));
            assert!(sketch.board.drawings().is_empty(), "{:?} drew a shape", tool);
            assert_eq!(sketch.input.state, Idle);
        }
    }

    #[test]
    fn square_drag_commits_one_drawing() {
        let mut sketch = sketch_with(Tool::Square);
        drag(&mut sketch, Point::new(100.0, 200.0), Point::new(300.0, 400.0));

        assert_eq!(sketch.board.drawings().len(), 1);
        assert_eq!(sketch.board.drawings()[0].start, Some(Point::new(100.0, 200.0)));
        assert_eq!(sketch.board.drawings()[0].end, Some(Point::new(300.0, 400.0)));
        assert!(sketch.board.preview().is_none());
    }

    #[test]
    fn toolbar_press_selects_without_drawing() {
        let mut sketch = sketch_with(Tool::Pointer);
        sketch.pointer_moved(SQUARE_BUTTON);
        assert_eq!(sketch.pointer_pressed(VIEWPORT), Some(Tool::Square));
        assert!(sketch.tools.is_active(Tool::Square));
        assert!(!sketch.board.is_holding());

        sketch.pointer_moved(Point::new(500.0, 500.0));
        sketch.pointer_released();
        assert!(sketch.board.drawings().is_empty());
    }

    #[test]
    fn press_between_toolbar_buttons_does_not_draw() {
        let mut sketch = sketch_with(Tool::Square);
        drag(&mut sketch, BUTTON_GAP, Point::new(500.0, 500.0));
        assert!(sketch.board.drawings().is_empty());
        assert!(sketch.tools.is_active(Tool::Square));
    }

    #[test]
    fn release_while_idle_commits_nothing() {
        let mut sketch = sketch_with(Tool::Square);
        sketch.pointer_moved(Point::new(300.0, 300.0));
        sketch.pointer_released();
        assert!(sketch.board.drawings().is_empty());
    }

    #[test]
    fn switching_tool_mid_drag_drops_the_shape() {
        let mut sketch = sketch_with(Tool::Square);
        sketch.pointer_moved(Point::new(100.0, 100.0));
        sketch.pointer_pressed(VIEWPORT);
        sketch.pointer_moved(Point::new(200.0, 200.0));
        assert!(sketch.board.preview().is_some());

        assert!(sketch.select_tool(Tool::Pointer));
        assert_eq!(sketch.input.state, Idle);
        assert!(sketch.board.preview().is_none());

        sketch.pointer_moved(Point::new(250.0, 250.0));
        sketch.pointer_released();
        assert!(sketch.board.drawings().is_empty());
    }

    #[test]
    fn config_reaches_the_sketch() {
        let config = BoardConfig {
            stroke_color: [1.0, 0.0, 0.0, 1.0],
            stroke_width: 4.0,
            roughness: 0.0,
            background: [0.2, 0.2, 0.2, 1.0],
            seed: Some(3),
            ..BoardConfig::default()
        };
        let mut sketch = Sketch::new(&config);
        assert_eq!(sketch.style, config.stroke_style());
        assert_eq!(sketch.background, [0.2, 0.2, 0.2, 1.0]);

        sketch.select_tool(Tool::Square);
        drag(&mut sketch, Point::new(100.0, 100.0), Point::new(200.0, 150.0));
        let mut mesh = Mesh::default();
        sketch.build_mesh(&mut mesh, VIEWPORT);
        let red = mesh
            .vertices
            .iter()
            .filter(|v| v.color == [1.0, 0.0, 0.0, 1.0])
            .count();
        // Four edges of two segments each, one quad per segment.
        assert_eq!(red, 4 * 2 * 4);
    }

    #[test]
    fn same_seed_gives_same_mesh() {
        let build = || {
            let mut sketch = sketch_with(Tool::Square);
            drag(&mut sketch, Point::new(100.0, 100.0), Point::new(200.0, 150.0));
            let mut mesh = Mesh::default();
            sketch.build_mesh(&mut mesh, VIEWPORT);
            mesh.vertices
        };
        assert_eq!(build(), build());
    }

    #[test]
    fn rebuild_flags_clear_together() {
        let mut sketch = sketch_with(Tool::Square);
        assert!(sketch.take_rebuild());
        assert!(!sketch.take_rebuild());

        sketch.needs_rebuild = true;
        drag(&mut sketch, Point::new(100.0, 100.0), Point::new(200.0, 150.0));
        assert!(sketch.take_rebuild());
        assert!(!sketch.take_rebuild());
    }

    #[test]
    fn reselecting_the_same_tool_needs_no_rebuild() {
        let mut sketch = sketch_with(Tool::Circle);
        sketch.take_rebuild();
        assert!(!sketch.select_tool(Tool::Circle));
        assert!(!sketch.take_rebuild());
    }
}
