use eframe::egui::{
    Color32, Stroke, Visuals,
    epaint::{CornerRadius, Shadow},
    style::WidgetVisuals,
};

#[derive(Clone, Copy)]
pub struct Palette {
    pub bg_primary: Color32,
    pub bg_secondary: Color32,
    pub bg_tertiary: Color32,
    pub panel_outline: Color32,
    pub grid_strong: Color32,
    pub grid_soft: Color32,
    pub text_primary: Color32,
    pub text_muted: Color32,
    pub accent_violet: Color32,
    pub accent_mint: Color32,
    pub accent_ice: Color32,
    pub accent_copper: Color32,
    pub warning: Color32,
}

pub fn palette() -> Palette {
    Palette {
        bg_primary: Color32::from_rgb(10, 10, 12),
        bg_secondary: Color32::from_rgb(26, 28, 30),
        bg_tertiary: Color32::from_rgb(42, 44, 48),
        panel_outline: Color32::from_rgb(38, 42, 48),
        grid_strong: Color32::from_rgb(56, 60, 66),
        grid_soft: Color32::from_rgb(30, 32, 36),
        text_primary: Color32::from_rgb(185, 192, 200),
        text_muted: Color32::from_rgb(140, 146, 155),
        accent_violet: Color32::from_rgb(176, 140, 255),
        accent_mint: Color32::from_rgb(127, 255, 212),
        accent_ice: Color32::from_rgb(167, 217, 255),
        accent_copper: Color32::from_rgb(195, 165, 122),
        warning: Color32::from_rgb(200, 128, 96),
    }
}

pub fn apply_visuals(visuals: &mut Visuals) {
    let palette = palette();
    visuals.window_fill = palette.bg_primary;
    visuals.panel_fill = palette.bg_secondary;
    visuals.override_text_color = Some(palette.text_primary);
    visuals.hyperlink_color = palette.accent_ice;
    visuals.extreme_bg_color = palette.bg_primary;
    visuals.faint_bg_color = palette.grid_soft;
    visuals.error_fg_color = palette.warning;
    visuals.warn_fg_color = palette.warning;
    visuals.selection.bg_fill = palette.grid_strong;
    visuals.selection.stroke = Stroke::new(1.0, palette.accent_violet);
    visuals.widgets.noninteractive.bg_fill = palette.bg_secondary;
    visuals.widgets.noninteractive.fg_stroke = Stroke::new(1.0, palette.text_primary);
    set_rectilinear(&mut visuals.widgets.inactive, palette);
    set_rectilinear(&mut visuals.widgets.hovered, palette);
    set_rectilinear(&mut visuals.widgets.active, palette);
    set_rectilinear(&mut visuals.widgets.open, palette);
    visuals.window_corner_radius = CornerRadius::ZERO;
    visuals.menu_corner_radius = CornerRadius::ZERO;
    visuals.popup_shadow = Shadow::NONE;
}

fn set_rectilinear(vis: &mut WidgetVisuals, palette: Palette) {
    vis.corner_radius = CornerRadius::ZERO;
    vis.bg_fill = palette.bg_tertiary;
    vis.weak_bg_fill = palette.grid_soft;
    vis.bg_stroke = Stroke::new(1.0, palette.panel_outline);
    vis.fg_stroke = Stroke::new(1.0, palette.text_primary);
}

pub fn chart_border() -> Stroke {
    Stroke::new(1.0, palette().panel_outline)
}

/// Line color for the n-th class series.
pub fn series_color(index: usize) -> Color32 {
    let palette = palette();
    match index % 3 {
        0 => palette.accent_ice,
        1 => palette.accent_copper,
        _ => palette.accent_mint,
    }
}

/// Sequential blue scale for heatmap cells, `t` in `[0, 1]`.
pub fn heat_color(t: f32) -> Color32 {
    const LOW: [f32; 3] = [239.0, 243.0, 255.0];
    const HIGH: [f32; 3] = [8.0, 48.0, 107.0];
    let t = t.clamp(0.0, 1.0);
    let mix = |idx: usize| (LOW[idx] + (HIGH[idx] - LOW[idx]) * t).round() as u8;
    Color32::from_rgb(mix(0), mix(1), mix(2))
}

/// Text color that stays readable on a heatmap cell.
pub fn heat_text_color(t: f32) -> Color32 {
    if t > 0.5 {
        Color32::WHITE
    } else {
        Color32::from_rgb(20, 24, 32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn heat_scale_endpoints() {
        assert_eq!(heat_color(0.0), Color32::from_rgb(239, 243, 255));
        assert_eq!(heat_color(1.0), Color32::from_rgb(8, 48, 107));
        assert_eq!(heat_color(4.0), heat_color(1.0));
    }

    #[test]
    fn series_colors_cycle() {
        assert_eq!(series_color(0), series_color(3));
        assert_ne!(series_color(0), series_color(1));
    }
}
