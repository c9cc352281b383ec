use crate::prompt;

use super::{Gesture, Mode, SketchApp};

impl SketchApp {
    /// Adds a state at the canvas center. New states deliberately stack at
    /// the same anchor; the user drags them apart in move mode.
    pub(super) fn add_state(&mut self) {
        self.diagram.add_node(self.canvas_center, self.node_radius);
    }

    /// Deletes the selected state and everything connected to it. No-op
    /// without a selection.
    pub(super) fn delete_selected(&mut self) {
        let Some(id) = self.selected.take() else {
            return;
        };
        self.diagram.remove_node(id);
        self.gesture = Gesture::Idle;
    }

    pub(super) fn toggle_initial(&mut self) {
        if let Some(node) = self.selected.and_then(|id| self.diagram.node_mut(id)) {
            node.is_initial = !node.is_initial;
        }
    }

    pub(super) fn toggle_final(&mut self) {
        if let Some(node) = self.selected.and_then(|id| self.diagram.node_mut(id)) {
            node.is_final = !node.is_final;
        }
    }

    pub(super) fn clear_connections(&mut self) {
        self.diagram.clear_transitions();
    }

    pub(super) fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            Mode::Move => Mode::Draw,
            Mode::Draw => Mode::Move,
        };
    }

    /// Advances to a fresh prompt and resets the whole diagram with it.
    pub(super) fn next_question(&mut self) {
        self.prompt = prompt::random_prompt();
        self.diagram.clear();
        self.selected = None;
        self.gesture = Gesture::Idle;
        log::info!("new prompt: {}", self.prompt);
    }
}
