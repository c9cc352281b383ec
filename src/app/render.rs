use crate::model;
use eframe::egui;

use super::Gesture;

const TRANSITION_COLOR: egui::Color32 = egui::Color32::GRAY;
const PREVIEW_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 90, 200);
const OUTLINE_DEFAULT: egui::Color32 = egui::Color32::from_rgb(20, 20, 20);
const OUTLINE_SELECTED: egui::Color32 = egui::Color32::from_rgb(200, 40, 40);
const OUTLINE_DRAGGING: egui::Color32 = egui::Color32::from_rgb(40, 90, 200);
const INITIAL_ARROW_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 140, 60);
const FINAL_RING_COLOR: egui::Color32 = egui::Color32::from_rgb(40, 90, 200);
const TEXT_COLOR: egui::Color32 = egui::Color32::from_rgb(20, 20, 20);

const STROKE_WIDTH: f32 = 2.0;
const ARROWHEAD_LEN: f32 = 10.0;
const ARROWHEAD_HALF_ANGLE: f32 = std::f32::consts::PI / 6.0;

fn to_screen(origin: egui::Pos2, p: model::Point) -> egui::Pos2 {
    origin + egui::vec2(p.x, p.y)
}

pub(super) fn draw_background(
    painter: &egui::Painter,
    rect: egui::Rect,
    show_grid: bool,
    spacing: f32,
) {
    let bg = painter.ctx().style().visuals.extreme_bg_color;
    painter.rect_filled(rect, 0.0, bg);
    if !show_grid || spacing < 4.0 {
        return;
    }
    let grid_color = egui::Color32::from_gray(60);
    let mut x = rect.min.x;
    while x < rect.max.x {
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            egui::Stroke::new(1.0, grid_color),
        );
        x += spacing;
    }
    let mut y = rect.min.y;
    while y < rect.max.y {
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(1.0, grid_color),
        );
        y += spacing;
    }
}

pub(super) fn draw_transitions(painter: &egui::Painter, origin: egui::Pos2, diagram: &model::Diagram) {
    for transition in &diagram.transitions {
        let (Some(from), Some(to)) = (diagram.node(transition.from), diagram.node(transition.to))
        else {
            continue;
        };
        let a = to_screen(origin, from.pos);
        let b = to_screen(origin, to.pos);
        draw_arrow(painter, a, b, TRANSITION_COLOR);
        if !transition.label.is_empty() {
            draw_label(painter, &transition.label, a, b);
        }
    }
}

/// Live preview arrow from the connecting node to the current pointer.
pub(super) fn draw_connect_preview(
    painter: &egui::Painter,
    origin: egui::Pos2,
    diagram: &model::Diagram,
    gesture: &Gesture,
) {
    let Gesture::Connect { from, pointer } = gesture else {
        return;
    };
    let Some(node) = diagram.node(*from) else {
        return;
    };
    draw_arrow(
        painter,
        to_screen(origin, node.pos),
        origin + pointer.to_vec2(),
        PREVIEW_COLOR,
    );
}

pub(super) fn draw_nodes(
    painter: &egui::Painter,
    origin: egui::Pos2,
    diagram: &model::Diagram,
    selected: Option<model::NodeId>,
    gesture: &Gesture,
) {
    let dragging = match gesture {
        Gesture::DragNode(id) => Some(*id),
        _ => None,
    };
    for node in &diagram.nodes {
        let outline = if dragging == Some(node.id) {
            OUTLINE_DRAGGING
        } else if selected == Some(node.id) {
            OUTLINE_SELECTED
        } else {
            OUTLINE_DEFAULT
        };
        let center = to_screen(origin, node.pos);
        painter.circle(
            center,
            node.radius,
            egui::Color32::WHITE,
            egui::Stroke::new(STROKE_WIDTH, outline),
        );

        if node.is_initial {
            let tail = center - egui::vec2(node.radius + 10.0, 0.0);
            let head = center - egui::vec2(node.radius / 3.0, 0.0);
            draw_arrow(painter, tail, head, INITIAL_ARROW_COLOR);
        }
        if node.is_final {
            painter.circle_stroke(
                center,
                node.radius - 5.0,
                egui::Stroke::new(STROKE_WIDTH, FINAL_RING_COLOR),
            );
        }

        painter.text(
            center,
            egui::Align2::CENTER_CENTER,
            &node.name,
            egui::FontId::proportional(16.0),
            TEXT_COLOR,
        );
    }
}

fn draw_arrow(painter: &egui::Painter, a: egui::Pos2, b: egui::Pos2, color: egui::Color32) {
    painter.line_segment([a, b], egui::Stroke::new(STROKE_WIDTH, color));
    draw_arrowhead(painter, a, b, color);
}

/// Filled triangular head at `b`, two short edges at a fixed angle off the
/// segment direction.
fn draw_arrowhead(painter: &egui::Painter, a: egui::Pos2, b: egui::Pos2, color: egui::Color32) {
    let angle = (b.y - a.y).atan2(b.x - a.x);
    let left = egui::pos2(
        b.x - ARROWHEAD_LEN * (angle - ARROWHEAD_HALF_ANGLE).cos(),
        b.y - ARROWHEAD_LEN * (angle - ARROWHEAD_HALF_ANGLE).sin(),
    );
    let right = egui::pos2(
        b.x - ARROWHEAD_LEN * (angle + ARROWHEAD_HALF_ANGLE).cos(),
        b.y - ARROWHEAD_LEN * (angle + ARROWHEAD_HALF_ANGLE).sin(),
    );
    painter.add(egui::Shape::convex_polygon(
        vec![b, left, right],
        color,
        egui::Stroke::NONE,
    ));
}

fn draw_label(painter: &egui::Painter, label: &str, a: egui::Pos2, b: egui::Pos2) {
    let mid = egui::pos2((a.x + b.x) * 0.5, (a.y + b.y) * 0.5);
    painter.text(
        mid,
        egui::Align2::CENTER_CENTER,
        label,
        egui::FontId::proportional(14.0),
        TEXT_COLOR,
    );
}
