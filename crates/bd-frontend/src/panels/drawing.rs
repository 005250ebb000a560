//! 2D engineering drawing panel
//!
//! Rasterizes one `DrawingFrame` with the egui painter. The frame is laid
//! out by `bd_core::drawing` against the current panel size, so a resize
//! simply produces the next frame at the new size. Nothing is retained
//! between paints.

use bd_core::drawing::{
    Arrowhead, BodyOutline, CircleShape, DimensionLine, DrawingFrame, Line, Polygon, RectShape,
    Text, TextAlign, build_frame,
};

use crate::panels::Panel;
use crate::state::SharedAppState;

/// Paper background behind the drawing
const PAPER_COLOR: egui::Color32 = egui::Color32::WHITE;

/// Dash pattern for centerlines
const DASH_LENGTH: f32 = 6.0;
const GAP_LENGTH: f32 = 4.0;

/// 2D drawing panel
pub struct DrawingPanel;

impl DrawingPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for DrawingPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for DrawingPanel {
    fn name(&self) -> &str {
        "2D Drawing"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        let params = app_state.lock().params;

        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::hover());
        let origin = response.rect.min;

        painter.rect_filled(response.rect, 0.0, PAPER_COLOR);

        let frame = build_frame(&params, available_size.x, available_size.y);
        paint_frame(&painter, origin, &frame);
    }
}

fn paint_frame(painter: &egui::Painter, origin: egui::Pos2, frame: &DrawingFrame) {
    for line in &frame.grid {
        paint_line(painter, origin, line);
    }

    paint_text(painter, origin, &frame.title);

    // Side view: centerline under the body, marks on top
    paint_line(painter, origin, &frame.side.centerline);
    match &frame.side.body {
        BodyOutline::Straight(rect) => paint_rect(painter, origin, rect),
        BodyOutline::Torpedo(outline) => paint_polygon(painter, origin, outline),
    }
    for tick in &frame.side.ring_ticks {
        paint_line(painter, origin, tick);
    }
    for cut in &frame.side.cut_lines {
        paint_line(painter, origin, cut);
    }
    paint_rect(painter, origin, &frame.side.collar);
    paint_polygon(painter, origin, &frame.side.tip);

    // Front view
    paint_circle(painter, origin, &frame.front.outline);
    for line in &frame.front.centerlines {
        paint_line(painter, origin, line);
    }
    for tick in &frame.front.grip_ticks {
        paint_line(painter, origin, tick);
    }
    paint_text(painter, origin, &frame.front.caption);

    paint_dimension(painter, origin, &frame.length_dim);
    paint_dimension(painter, origin, &frame.diameter_dim);

    for line in &frame.spec {
        paint_text(painter, origin, line);
    }
}

fn paint_line(painter: &egui::Painter, origin: egui::Pos2, line: &Line) {
    let stroke = egui::Stroke::new(line.width, color32(line.color));
    let points = [pos(origin, line.a), pos(origin, line.b)];
    if line.dashed {
        painter.extend(egui::Shape::dashed_line(
            &points,
            stroke,
            DASH_LENGTH,
            GAP_LENGTH,
        ));
    } else {
        painter.line_segment(points, stroke);
    }
}

fn paint_rect(painter: &egui::Painter, origin: egui::Pos2, rect: &RectShape) {
    let egui_rect = egui::Rect::from_min_max(pos(origin, rect.min), pos(origin, rect.max));
    if let Some(fill) = rect.fill {
        painter.rect_filled(egui_rect, 0.0, color32(fill));
    }
    painter.rect_stroke(
        egui_rect,
        0.0,
        egui::Stroke::new(rect.stroke_width, color32(rect.stroke)),
        egui::StrokeKind::Middle,
    );
}

fn paint_polygon(painter: &egui::Painter, origin: egui::Pos2, polygon: &Polygon) {
    let points: Vec<egui::Pos2> = polygon.points.iter().map(|p| pos(origin, *p)).collect();
    painter.add(egui::Shape::convex_polygon(
        points,
        polygon
            .fill
            .map_or(egui::Color32::TRANSPARENT, color32),
        egui::Stroke::new(polygon.stroke_width, color32(polygon.stroke)),
    ));
}

fn paint_circle(painter: &egui::Painter, origin: egui::Pos2, circle: &CircleShape) {
    painter.circle_stroke(
        pos(origin, circle.center),
        circle.radius,
        egui::Stroke::new(circle.stroke_width, color32(circle.stroke)),
    );
}

fn paint_dimension(painter: &egui::Painter, origin: egui::Pos2, dim: &DimensionLine) {
    paint_line(painter, origin, &dim.line);
    for arrow in &dim.arrows {
        paint_arrowhead(painter, origin, arrow, dim.line.width, dim.line.color);
    }
    paint_text(painter, origin, &dim.label);
}

/// Double-wing arrowhead: shaft stub plus two wings folded back from the
/// endpoint
fn paint_arrowhead(
    painter: &egui::Painter,
    origin: egui::Pos2,
    arrow: &Arrowhead,
    width: f32,
    color: [f32; 3],
) {
    let stroke = egui::Stroke::new(width, color32(color));
    let tip = pos(origin, [
        arrow.origin[0] + arrow.delta[0],
        arrow.origin[1] + arrow.delta[1],
    ]);
    let base = pos(origin, arrow.origin);
    // Perpendicular wing offset, scaled off the shaft direction
    let wing = egui::vec2(-arrow.delta[1], arrow.delta[0]) * 0.4;
    let mid = base + (tip - base) * 0.5;

    painter.line_segment([base, tip], stroke);
    painter.line_segment([tip, mid + wing], stroke);
    painter.line_segment([tip, mid - wing], stroke);
}

fn paint_text(painter: &egui::Painter, origin: egui::Pos2, text: &Text) {
    let anchor = match text.align {
        TextAlign::Left => egui::Align2::LEFT_CENTER,
        TextAlign::Center => egui::Align2::CENTER_CENTER,
    };
    painter.text(
        pos(origin, text.pos),
        anchor,
        &text.text,
        egui::FontId::proportional(text.size),
        color32(text.color),
    );
}

fn pos(origin: egui::Pos2, [x, y]: [f32; 2]) -> egui::Pos2 {
    origin + egui::vec2(x, y)
}

fn color32([r, g, b]: [f32; 3]) -> egui::Color32 {
    egui::Color32::from_rgb(
        (r * 255.0).round() as u8,
        (g * 255.0).round() as u8,
        (b * 255.0).round() as u8,
    )
}
