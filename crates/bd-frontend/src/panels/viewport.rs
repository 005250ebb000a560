//! 3D viewport panel

use crate::panels::Panel;
use crate::state::{AppAction, SharedAppState, SharedViewportState};

/// 3D viewport panel
pub struct ViewportPanel {
    last_size: egui::Vec2,
    orbit_sensitivity: f32,
    zoom_sensitivity: f32,
}

impl ViewportPanel {
    pub fn new(orbit_sensitivity: f32, zoom_sensitivity: f32) -> Self {
        Self {
            last_size: egui::Vec2::ZERO,
            orbit_sensitivity,
            zoom_sensitivity,
        }
    }
}

impl Default for ViewportPanel {
    fn default() -> Self {
        Self::new(0.005, 0.1)
    }
}

impl Panel for ViewportPanel {
    fn name(&self) -> &str {
        "3D View"
    }

    fn needs_render_context(&self) -> bool {
        true
    }

    fn ui(&mut self, ui: &mut egui::Ui, _app_state: &SharedAppState) {
        // Fallback when no render context
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::hover());

        painter.rect_filled(response.rect, 0.0, egui::Color32::from_rgb(30, 30, 30));
        painter.text(
            response.rect.center(),
            egui::Align2::CENTER_CENTER,
            "3D View\n(WebGPU not available)",
            egui::FontId::proportional(16.0),
            egui::Color32::GRAY,
        );

        self.last_size = available_size;
    }

    fn ui_with_render_context(
        &mut self,
        ui: &mut egui::Ui,
        app_state: &SharedAppState,
        render_state: &egui_wgpu::RenderState,
        viewport_state: &SharedViewportState,
    ) {
        // Toolbar
        ui.horizontal(|ui| {
            ui.label("View:");
            if ui.button("Top").clicked() {
                viewport_state.lock().renderer.camera_mut().set_top_view();
            }
            if ui.button("Front").clicked() {
                viewport_state.lock().renderer.camera_mut().set_front_view();
            }
            if ui.button("Side").clicked() {
                viewport_state.lock().renderer.camera_mut().set_side_view();
            }
            if ui.button("Fit").clicked() {
                app_state.lock().queue_action(AppAction::FitView);
            }

            ui.separator();

            let mut state = viewport_state.lock();
            let mut show_grid = state.renderer.show_grid();
            let mut shadows = state.renderer.shadows_enabled();
            if ui.checkbox(&mut show_grid, "Grid").changed() {
                state.renderer.set_show_grid(show_grid);
            }
            if ui.checkbox(&mut shadows, "Shadows").changed() {
                state.renderer.set_shadows_enabled(shadows);
            }
        });

        // Main viewport area
        let available_size = ui.available_size();
        let width = available_size.x as u32;
        let height = available_size.y as u32;

        if width == 0 || height == 0 {
            return;
        }

        // Advance the turntable and render into the offscreen texture
        let time = ui.input(|i| i.time);
        let texture_id = {
            let mut state = viewport_state.lock();
            let mut egui_renderer = render_state.renderer.write();
            let tex_id = state.ensure_texture(width, height, &mut egui_renderer);
            state.advance(time);
            state.render();
            tex_id
        };

        // Display the rendered texture
        let response = ui.add(
            egui::Image::new(egui::load::SizedTexture::new(
                texture_id,
                [available_size.x, available_size.y],
            ))
            .sense(egui::Sense::click_and_drag()),
        );

        let mut vp_state = viewport_state.lock();

        // Drag to orbit, shift-drag to pan
        if response.dragged_by(egui::PointerButton::Primary)
            || response.dragged_by(egui::PointerButton::Secondary)
        {
            let delta = response.drag_delta();
            if ui.input(|i| i.modifiers.shift) {
                vp_state.renderer.camera_mut().pan(delta.x, delta.y);
            } else {
                vp_state.renderer.camera_mut().orbit(
                    -delta.x * self.orbit_sensitivity,
                    delta.y * self.orbit_sensitivity,
                );
            }
        }

        // Middle mouse button always pans
        if response.dragged_by(egui::PointerButton::Middle) {
            let delta = response.drag_delta();
            vp_state.renderer.camera_mut().pan(delta.x, delta.y);
        }

        // Zoom with scroll
        if response.hovered() {
            let scroll_delta = ui.input(|i| i.smooth_scroll_delta.y);
            if scroll_delta != 0.0 {
                vp_state
                    .renderer
                    .camera_mut()
                    .zoom(scroll_delta * self.zoom_sensitivity * 0.1);
            }
        }

        // Context menu
        response.context_menu(|ui| {
            if ui.button("Fit View").clicked() {
                app_state.lock().queue_action(AppAction::FitView);
                ui.close();
            }
            ui.separator();
            if ui.button("Top View").clicked() {
                vp_state.renderer.camera_mut().set_top_view();
                ui.close();
            }
            if ui.button("Front View").clicked() {
                vp_state.renderer.camera_mut().set_front_view();
                ui.close();
            }
            if ui.button("Side View").clicked() {
                vp_state.renderer.camera_mut().set_side_view();
                ui.close();
            }
        });

        self.last_size = available_size;
    }
}
