//! Small painter-based charts: bars, heatmap, and ROC lines.

use super::style;
use crate::egui_app::view_model;
use crate::ml::metrics::ConfusionMatrix;
use crate::pipeline::ClassRoc;
use eframe::egui::{self, Align2, FontId, Pos2, Rect, Stroke, StrokeKind};

const LABEL_GUTTER: f32 = 130.0;
const AXIS_GUTTER: f32 = 36.0;

/// Map a point of the unit square onto `rect`, y growing upwards.
pub(crate) fn unit_to_screen(rect: Rect, x: f64, y: f64) -> Pos2 {
    let x = x.clamp(0.0, 1.0) as f32;
    let y = y.clamp(0.0, 1.0) as f32;
    egui::pos2(
        rect.left() + x * rect.width(),
        rect.bottom() - y * rect.height(),
    )
}

/// Vertical bars for values in `[0, 1]`, one per label.
pub(crate) fn column_chart(ui: &mut egui::Ui, bars: &[(String, f64)], highlight: Option<usize>) {
    let palette = style::palette();
    let desired = egui::vec2(ui.available_width().min(520.0), 220.0);
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let plot = Rect::from_min_max(
        egui::pos2(rect.left() + AXIS_GUTTER, rect.top() + 8.0),
        egui::pos2(rect.right() - 8.0, rect.bottom() - 22.0),
    );
    painter.rect_filled(plot, 0.0, palette.bg_primary);
    for tick in [0.25, 0.5, 0.75, 1.0] {
        let y = unit_to_screen(plot, 0.0, tick).y;
        painter.line_segment(
            [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            Stroke::new(1.0, palette.grid_soft),
        );
        painter.text(
            egui::pos2(plot.left() - 4.0, y),
            Align2::RIGHT_CENTER,
            format!("{tick:.2}"),
            FontId::proportional(10.0),
            palette.text_muted,
        );
    }
    if bars.is_empty() {
        return;
    }
    let slot = plot.width() / bars.len() as f32;
    for (idx, (label, value)) in bars.iter().enumerate() {
        let left = plot.left() + slot * idx as f32 + slot * 0.2;
        let right = left + slot * 0.6;
        let top = unit_to_screen(plot, 0.0, *value).y;
        let color = if highlight == Some(idx) {
            palette.accent_violet
        } else {
            palette.accent_ice
        };
        let bar = Rect::from_min_max(egui::pos2(left, top), egui::pos2(right, plot.bottom()));
        painter.rect_filled(bar, 0.0, color);
        painter.text(
            egui::pos2(bar.center().x, top - 2.0),
            Align2::CENTER_BOTTOM,
            format!("{value:.2}"),
            FontId::proportional(11.0),
            palette.text_primary,
        );
        painter.text(
            egui::pos2(bar.center().x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(12.0),
            palette.text_primary,
        );
    }
    painter.rect_stroke(plot, 0.0, style::chart_border(), StrokeKind::Inside);
}

/// Horizontal bars scaled to the largest value, drawn in the given order.
pub(crate) fn horizontal_bars(ui: &mut egui::Ui, rows: &[(String, f64)]) {
    let palette = style::palette();
    let row_height = 24.0;
    let desired = egui::vec2(
        ui.available_width().min(520.0),
        row_height * rows.len().max(1) as f32 + 8.0,
    );
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let max_value = rows
        .iter()
        .map(|(_, value)| *value)
        .fold(0.0f64, f64::max)
        .max(f64::EPSILON);
    let bar_left = rect.left() + LABEL_GUTTER;
    let bar_span = (rect.right() - bar_left - 56.0).max(1.0);
    for (idx, (label, value)) in rows.iter().enumerate() {
        let center_y = rect.top() + 4.0 + row_height * (idx as f32 + 0.5);
        painter.text(
            egui::pos2(bar_left - 8.0, center_y),
            Align2::RIGHT_CENTER,
            label,
            FontId::proportional(12.0),
            palette.text_primary,
        );
        let width = (value / max_value) as f32 * bar_span;
        let bar = Rect::from_min_max(
            egui::pos2(bar_left, center_y - row_height * 0.35),
            egui::pos2(bar_left + width, center_y + row_height * 0.35),
        );
        painter.rect_filled(bar, 0.0, palette.accent_copper);
        painter.text(
            egui::pos2(bar.right() + 6.0, center_y),
            Align2::LEFT_CENTER,
            format!("{value:.3}"),
            FontId::proportional(11.0),
            palette.text_muted,
        );
    }
}

/// Confusion matrix heatmap; rows are true classes, columns predictions.
pub(crate) fn confusion_heatmap(ui: &mut egui::Ui, matrix: &ConfusionMatrix, labels: &[String]) {
    let palette = style::palette();
    let n = matrix.n_classes.max(1);
    let cell = 64.0;
    let desired = egui::vec2(LABEL_GUTTER + cell * n as f32 + 8.0, cell * n as f32 + 44.0);
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let origin = egui::pos2(rect.left() + LABEL_GUTTER, rect.top() + 4.0);
    let max_count = matrix.max_count();
    for truth in 0..matrix.n_classes {
        let row_y = origin.y + cell * truth as f32;
        if let Some(label) = labels.get(truth) {
            painter.text(
                egui::pos2(origin.x - 8.0, row_y + cell * 0.5),
                Align2::RIGHT_CENTER,
                label,
                FontId::proportional(12.0),
                palette.text_primary,
            );
        }
        for predicted in 0..matrix.n_classes {
            let count = matrix.get(truth, predicted);
            let t = view_model::heat_fraction(count, max_count);
            let min = egui::pos2(origin.x + cell * predicted as f32, row_y);
            let cell_rect = Rect::from_min_size(min, egui::vec2(cell, cell));
            painter.rect_filled(cell_rect, 0.0, style::heat_color(t));
            painter.rect_stroke(cell_rect, 0.0, style::chart_border(), StrokeKind::Inside);
            painter.text(
                cell_rect.center(),
                Align2::CENTER_CENTER,
                count.to_string(),
                FontId::proportional(16.0),
                style::heat_text_color(t),
            );
        }
    }
    let axis_y = origin.y + cell * matrix.n_classes as f32 + 4.0;
    for (predicted, label) in labels.iter().enumerate().take(matrix.n_classes) {
        painter.text(
            egui::pos2(origin.x + cell * (predicted as f32 + 0.5), axis_y),
            Align2::CENTER_TOP,
            label,
            FontId::proportional(12.0),
            palette.text_primary,
        );
    }
    painter.text(
        egui::pos2(origin.x + cell * n as f32 * 0.5, axis_y + 18.0),
        Align2::CENTER_TOP,
        "Predicted",
        FontId::proportional(11.0),
        palette.text_muted,
    );
}

/// One-vs-rest ROC curves over a dashed chance diagonal.
pub(crate) fn roc_chart(ui: &mut egui::Ui, curves: &[ClassRoc]) {
    let palette = style::palette();
    let side = ui.available_width().min(420.0);
    let desired = egui::vec2(side, side * 0.8);
    let (rect, _) = ui.allocate_exact_size(desired, egui::Sense::hover());
    let painter = ui.painter_at(rect);
    let plot = Rect::from_min_max(
        egui::pos2(rect.left() + AXIS_GUTTER, rect.top() + 8.0),
        egui::pos2(rect.right() - 8.0, rect.bottom() - AXIS_GUTTER),
    );
    painter.rect_filled(plot, 0.0, palette.bg_primary);
    for tick in [0.0, 0.5, 1.0] {
        let x = unit_to_screen(plot, tick, 0.0).x;
        let y = unit_to_screen(plot, 0.0, tick).y;
        painter.line_segment(
            [egui::pos2(x, plot.top()), egui::pos2(x, plot.bottom())],
            Stroke::new(1.0, palette.grid_soft),
        );
        painter.line_segment(
            [egui::pos2(plot.left(), y), egui::pos2(plot.right(), y)],
            Stroke::new(1.0, palette.grid_soft),
        );
        painter.text(
            egui::pos2(x, plot.bottom() + 4.0),
            Align2::CENTER_TOP,
            format!("{tick:.1}"),
            FontId::proportional(10.0),
            palette.text_muted,
        );
        painter.text(
            egui::pos2(plot.left() - 4.0, y),
            Align2::RIGHT_CENTER,
            format!("{tick:.1}"),
            FontId::proportional(10.0),
            palette.text_muted,
        );
    }
    painter.extend(egui::Shape::dashed_line(
        &[
            unit_to_screen(plot, 0.0, 0.0),
            unit_to_screen(plot, 1.0, 1.0),
        ],
        Stroke::new(1.0, palette.text_muted),
        6.0,
        4.0,
    ));
    for roc in curves {
        let points: Vec<Pos2> = roc
            .points()
            .iter()
            .map(|point| unit_to_screen(plot, point.fpr, point.tpr))
            .collect();
        if points.len() >= 2 {
            painter.add(egui::Shape::line(
                points,
                Stroke::new(2.0, style::series_color(roc.class_index())),
            ));
        }
    }
    painter.rect_stroke(plot, 0.0, style::chart_border(), StrokeKind::Inside);
    painter.text(
        egui::pos2(plot.center().x, plot.bottom() + 18.0),
        Align2::CENTER_TOP,
        "False Positive Rate",
        FontId::proportional(11.0),
        palette.text_muted,
    );
    painter.text(
        egui::pos2(plot.left() + 6.0, plot.top() + 6.0),
        Align2::LEFT_TOP,
        "True Positive Rate",
        FontId::proportional(11.0),
        palette.text_muted,
    );
}
