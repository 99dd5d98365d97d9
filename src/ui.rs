use crate::drawing::Tool;
use crate::mesh::Mesh;

const BUTTON_SIZE: f32 = 40.0;
const BUTTON_GAP: f32 = 10.0;
const BAR_PADDING: f32 = 5.0;
const BAR_TOP: f32 = 10.0;

const BAR_COLOR: [f32; 4] = [0.14, 0.14, 0.16, 0.95];
const BUTTON_COLOR: [f32; 4] = [0.20, 0.20, 0.23, 1.0];
const ACTIVE_COLOR: [f32; 4] = [0.40, 0.36, 0.85, 1.0];
const ICON_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];

pub struct UiRenderer {
    tool_icons: Vec<ToolIcon>,
}

struct ToolIcon {
    tool: Tool,
    /// Offset from the toolbar's left edge.
    offset: f32,
}

impl UiRenderer {
    pub fn new() -> Self {
        let tool_icons = Tool::ALL
            .iter()
            .enumerate()
            .map(|(i, &tool)| ToolIcon {
                tool,
                offset: BAR_PADDING + i as f32 * (BUTTON_SIZE + BUTTON_GAP),
            })
            .collect();

        Self { tool_icons }
    }

    fn bar_width(&self) -> f32 {
        let n = self.tool_icons.len() as f32;
        BAR_PADDING * 2.0 + n * BUTTON_SIZE + (n - 1.0).max(0.0) * BUTTON_GAP
    }

    /// Top-left corner of the toolbar, centred horizontally.
    fn bar_origin(&self, viewport: [f32; 2]) -> [f32; 2] {
        [((viewport[0] - self.bar_width()) / 2.0).max(0.0), BAR_TOP]
    }

    fn button_position(&self, icon: &ToolIcon, viewport: [f32; 2]) -> [f32; 2] {
        let origin = self.bar_origin(viewport);
        [origin[0] + icon.offset, origin[1] + BAR_PADDING]
    }

    pub fn generate_ui_vertices(&self, mesh: &mut Mesh, current_tool: Tool, viewport: [f32; 2]) {
        let origin = self.bar_origin(viewport);
        mesh.push_rect(
            origin,
            [self.bar_width(), BUTTON_SIZE + BAR_PADDING * 2.0],
            BAR_COLOR,
        );

        for icon in &self.tool_icons {
            let position = self.button_position(icon, viewport);
            let color = if icon.tool == current_tool {
                ACTIVE_COLOR
            } else {
                BUTTON_COLOR
            };
            mesh.push_rect(position, [BUTTON_SIZE, BUTTON_SIZE], color);

            let center = [
                position[0] + BUTTON_SIZE / 2.0,
                position[1] + BUTTON_SIZE / 2.0,
            ];
            Self::add_icon(mesh, icon.tool, center);
        }
    }

    fn add_icon(mesh: &mut Mesh, tool: Tool, center: [f32; 2]) {
        let [cx, cy] = center;
        match tool {
            Tool::Pointer => {
                mesh.push_triangle(
                    [[cx - 5.0, cy - 8.0], [cx + 5.0, cy], [cx, cy + 8.0]],
                    ICON_COLOR,
                );
            }
            Tool::Circle => {
                const SEGMENTS: u32 = 16;
                let ring: Vec<[f32; 2]> = (0..=SEGMENTS)
                    .map(|i| {
                        let angle = i as f32 * std::f32::consts::TAU / SEGMENTS as f32;
                        [cx + angle.cos() * 8.0, cy + angle.sin() * 8.0]
                    })
                    .collect();
                mesh.push_polyline(&ring, 2.0, ICON_COLOR);
            }
            Tool::Square => {
                mesh.push_polyline(
                    &[
                        [cx - 8.0, cy - 8.0],
                        [cx + 8.0, cy - 8.0],
                        [cx + 8.0, cy + 8.0],
                        [cx - 8.0, cy + 8.0],
                        [cx - 8.0, cy - 8.0],
                    ],
                    2.0,
                    ICON_COLOR,
                );
            }
            Tool::Arrow => {
                mesh.push_line([cx - 9.0, cy], [cx + 4.0, cy], 2.0, ICON_COLOR);
                mesh.push_triangle(
                    [[cx + 9.0, cy], [cx + 3.0, cy + 5.0], [cx + 3.0, cy - 5.0]],
                    ICON_COLOR,
                );
            }
        }
    }

    pub fn handle_click(&self, mouse_pos: [f32; 2], viewport: [f32; 2]) -> Option<Tool> {
        self.tool_icons
            .iter()
            .find(|icon| {
                let position = self.button_position(icon, viewport);
                mouse_pos[0] >= position[0]
                    && mouse_pos[0] <= position[0] + BUTTON_SIZE
                    && mouse_pos[1] >= position[1]
                    && mouse_pos[1] <= position[1] + BUTTON_SIZE
            })
            .map(|icon| icon.tool)
    }

    pub fn is_mouse_over_ui(&self, mouse_pos: [f32; 2], viewport: [f32; 2]) -> bool {
        let origin = self.bar_origin(viewport);
        mouse_pos[0] >= origin[0]
            && mouse_pos[0] <= origin[0] + self.bar_width()
            && mouse_pos[1] >= origin[1]
            && mouse_pos[1] <= origin[1] + BUTTON_SIZE + BAR_PADDING * 2.0
    }
}
