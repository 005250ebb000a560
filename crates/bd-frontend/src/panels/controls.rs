//! Parameter controls panel

use bd_core::{DIAMETER_RANGE, GripType, LENGTH_RANGE, Material, WEIGHT_RANGE};

use crate::panels::Panel;
use crate::state::{AppAction, SharedAppState, ViewMode};

/// Side panel with the design parameter controls and the mode buttons
pub struct ControlsPanel;

impl ControlsPanel {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ControlsPanel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel for ControlsPanel {
    fn name(&self) -> &str {
        "Barrel Settings"
    }

    fn ui(&mut self, ui: &mut egui::Ui, app_state: &SharedAppState) {
        // Edits go through the action queue; the snapshot here is only for
        // widget display
        let (mut params, view_mode) = {
            let state = app_state.lock();
            (state.params, state.view_mode)
        };

        ui.heading(self.name());
        ui.separator();

        ui.label("Length");
        if ui
            .add(
                egui::Slider::new(&mut params.length_mm, LENGTH_RANGE.min..=LENGTH_RANGE.max)
                    .step_by(LENGTH_RANGE.step as f64)
                    .fixed_decimals(0)
                    .suffix(" mm"),
            )
            .changed()
        {
            app_state
                .lock()
                .queue_action(AppAction::SetLength(params.length_mm));
        }

        ui.label("Diameter");
        if ui
            .add(
                egui::Slider::new(&mut params.diameter_mm, DIAMETER_RANGE.min..=DIAMETER_RANGE.max)
                    .step_by(DIAMETER_RANGE.step as f64)
                    .fixed_decimals(1)
                    .suffix(" mm"),
            )
            .changed()
        {
            app_state
                .lock()
                .queue_action(AppAction::SetDiameter(params.diameter_mm));
        }

        ui.label("Weight");
        if ui
            .add(
                egui::Slider::new(&mut params.weight_g, WEIGHT_RANGE.min..=WEIGHT_RANGE.max)
                    .step_by(WEIGHT_RANGE.step as f64)
                    .fixed_decimals(1)
                    .suffix(" g"),
            )
            .changed()
        {
            app_state
                .lock()
                .queue_action(AppAction::SetWeight(params.weight_g));
        }

        ui.separator();

        ui.label("Grip");
        for &grip in GripType::all() {
            if ui
                .selectable_label(params.grip == grip, grip.display_name())
                .clicked()
            {
                app_state.lock().queue_action(AppAction::SetGripType(grip));
            }
        }

        ui.separator();

        ui.label("Material");
        for &material in Material::all() {
            if ui
                .selectable_label(params.material == material, material.display_name())
                .clicked()
            {
                app_state
                    .lock()
                    .queue_action(AppAction::SetMaterial(material));
            }
        }

        ui.separator();

        ui.label("View");
        ui.horizontal(|ui| {
            if ui
                .selectable_label(view_mode == ViewMode::ThreeD, "3D View")
                .clicked()
            {
                app_state
                    .lock()
                    .queue_action(AppAction::SetViewMode(ViewMode::ThreeD));
            }
            if ui
                .selectable_label(view_mode == ViewMode::TwoD, "2D Drawing")
                .clicked()
            {
                app_state
                    .lock()
                    .queue_action(AppAction::SetViewMode(ViewMode::TwoD));
            }
        });
    }
}
