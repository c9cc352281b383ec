use crate::model;
use eframe::egui;

use super::{Gesture, Mode, SketchApp};

impl SketchApp {
    /// Pointer went down at `pos` (canvas coordinates). A hit selects the
    /// topmost node and starts a drag or a connect depending on the mode; a
    /// miss clears the selection.
    pub(super) fn pointer_pressed(&mut self, pos: egui::Pos2) {
        if let Some(id) = self.diagram.hit_test(pos) {
            self.selected = Some(id);
            self.gesture = match self.mode {
                Mode::Move => Gesture::DragNode(id),
                Mode::Draw => Gesture::Connect { from: id, pointer: pos },
            };
        } else {
            self.selected = None;
            self.gesture = Gesture::Idle;
        }
    }

    /// Pointer moved while down. Dragged nodes follow the pointer exactly,
    /// with no clamping to the visible canvas.
    pub(super) fn pointer_moved(&mut self, pos: egui::Pos2) {
        match &mut self.gesture {
            Gesture::DragNode(id) => {
                if let Some(node) = self.diagram.node_mut(*id) {
                    node.pos = model::Point::from_pos2(pos);
                }
            }
            Gesture::Connect { pointer, .. } => *pointer = pos,
            Gesture::Idle => {}
        }
    }

    /// Pointer released at `pos`. Completing a connect over a node other than
    /// the origin creates the transition; releasing over the origin itself or
    /// over empty canvas creates nothing. Always returns to `Idle`.
    pub(super) fn pointer_released(&mut self, pos: egui::Pos2) {
        if let Gesture::Connect { from, .. } = self.gesture {
            if let Some(hit) = self.diagram.hit_test(pos) {
                if hit != from {
                    self.diagram
                        .add_transition(from, hit, self.transition_label.clone());
                    log::debug!("transition created: {from:?} -> {hit:?}");
                }
            }
        }
        self.gesture = Gesture::Idle;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Two nodes at distinct positions, far enough apart not to overlap.
    fn app_with_two_nodes() -> (SketchApp, model::NodeId, model::NodeId) {
        let mut app = SketchApp::default();
        app.add_state();
        app.add_state();
        let a = app.diagram.nodes[0].id;
        let b = app.diagram.nodes[1].id;
        app.diagram.node_mut(a).unwrap().pos = model::Point { x: 100.0, y: 100.0 };
        app.diagram.node_mut(b).unwrap().pos = model::Point { x: 300.0, y: 100.0 };
        (app, a, b)
    }

    #[test]
    fn test_connect_gesture_creates_single_transition() {
        let (mut app, a, b) = app_with_two_nodes();
        app.mode = Mode::Draw;

        app.pointer_pressed(egui::pos2(100.0, 100.0));
        app.pointer_moved(egui::pos2(200.0, 100.0));
        app.pointer_released(egui::pos2(300.0, 100.0));

        assert_eq!(app.diagram.transitions.len(), 1);
        let t = &app.diagram.transitions[0];
        assert_eq!(t.from, a);
        assert_eq!(t.to, b);
        assert_eq!(t.label, "a");
        assert_eq!(app.gesture, Gesture::Idle);
    }

    #[test]
    fn test_release_over_origin_creates_nothing() {
        let (mut app, _, _) = app_with_two_nodes();
        app.mode = Mode::Draw;

        app.pointer_pressed(egui::pos2(100.0, 100.0));
        app.pointer_released(egui::pos2(105.0, 100.0));

        assert!(app.diagram.transitions.is_empty());
        assert_eq!(app.gesture, Gesture::Idle);
    }

    #[test]
    fn test_release_over_empty_canvas_creates_nothing() {
        let (mut app, _, _) = app_with_two_nodes();
        app.mode = Mode::Draw;

        app.pointer_pressed(egui::pos2(100.0, 100.0));
        app.pointer_released(egui::pos2(200.0, 400.0));

        assert!(app.diagram.transitions.is_empty());
        assert_eq!(app.gesture, Gesture::Idle);
    }

    #[test]
    fn test_drag_moves_node_unclamped() {
        let (mut app, a, _) = app_with_two_nodes();

        app.pointer_pressed(egui::pos2(100.0, 100.0));
        assert_eq!(app.gesture, Gesture::DragNode(a));
        app.pointer_moved(egui::pos2(-50.0, 900.0));

        let node = app.diagram.node(a).unwrap();
        assert_eq!(node.pos, model::Point { x: -50.0, y: 900.0 });
        app.pointer_released(egui::pos2(-50.0, 900.0));
        assert_eq!(app.gesture, Gesture::Idle);
        // Still selected after the drag.
        assert_eq!(app.selected, Some(a));
    }

    #[test]
    fn test_drag_in_draw_mode_does_not_move_node() {
        let (mut app, a, _) = app_with_two_nodes();
        app.mode = Mode::Draw;

        app.pointer_pressed(egui::pos2(100.0, 100.0));
        app.pointer_moved(egui::pos2(250.0, 250.0));

        assert_eq!(app.diagram.node(a).unwrap().pos, model::Point { x: 100.0, y: 100.0 });
        assert_eq!(
            app.gesture,
            Gesture::Connect {
                from: a,
                pointer: egui::pos2(250.0, 250.0)
            }
        );
    }

    #[test]
    fn test_press_on_empty_clears_selection() {
        let (mut app, a, _) = app_with_two_nodes();
        app.pointer_pressed(egui::pos2(100.0, 100.0));
        assert_eq!(app.selected, Some(a));

        app.pointer_released(egui::pos2(100.0, 100.0));
        app.pointer_pressed(egui::pos2(500.0, 500.0));

        assert_eq!(app.selected, None);
        assert_eq!(app.gesture, Gesture::Idle);
    }

    #[test]
    fn test_press_selects_topmost_on_overlap() {
        let mut app = SketchApp::default();
        app.add_state();
        app.add_state();
        let top = app.diagram.nodes[1].id;

        app.pointer_pressed(app.canvas_center);

        assert_eq!(app.selected, Some(top));
    }
}
