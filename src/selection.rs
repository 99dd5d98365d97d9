use crate::drawing::Tool;

/// Holds the tool picked in the toolbar.
#[derive(Debug, Default)]
pub struct ToolSelection {
    selected: Tool,
}

impl ToolSelection {
    pub fn selected(&self) -> Tool {
        self.selected
    }

    pub fn is_active(&self, tool: Tool) -> bool {
        self.selected == tool
    }

    /// Returns `true` when the selection actually changed.
    pub fn select(&mut self, tool: Tool) -> bool {
        if self.selected == tool {
            return false;
        }
        log::info!("Tool selected: {:?}", tool);
        self.selected = tool;
        true
    }
}
