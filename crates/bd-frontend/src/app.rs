//! Main application module

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::AppConfig;
use crate::panels::{ControlsPanel, DrawingPanel, Panel, ViewportPanel};
use crate::state::{
    SharedAppState, SharedViewportState, ViewMode, ViewportState, create_shared_state,
};

/// Main application
pub struct BarrelDesignerApp {
    app_state: SharedAppState,
    viewport_state: Option<SharedViewportState>,
    config: AppConfig,

    controls_panel: ControlsPanel,
    viewport_panel: ViewportPanel,
    drawing_panel: DrawingPanel,
}

impl BarrelDesignerApp {
    /// Create a new app
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = AppConfig::load_or_default();

        // Create viewport state if WGPU is available
        let viewport_state = cc.wgpu_render_state.as_ref().map(|render_state| {
            let device = render_state.device.clone();
            let queue = render_state.queue.clone();
            let format = render_state.target_format;

            let mut viewport = ViewportState::new(device, queue, format);
            viewport
                .renderer
                .apply_config(&config.renderer, &viewport.device);
            Arc::new(Mutex::new(viewport))
        });

        if viewport_state.is_none() {
            tracing::error!("No wgpu render state available; 3D view disabled");
        }

        let viewport_panel = ViewportPanel::new(
            config.renderer.camera.orbit_sensitivity,
            config.renderer.camera.zoom_sensitivity,
        );

        Self {
            app_state: create_shared_state(),
            viewport_state,
            config,
            controls_panel: ControlsPanel::new(),
            viewport_panel,
            drawing_panel: DrawingPanel::new(),
        }
    }

    /// Drain the action queue, then rebuild and re-frame as flagged.
    ///
    /// The rebuild consumes a full parameter snapshot; there is no
    /// incremental update path.
    fn process_actions(&mut self) {
        let mut state = self.app_state.lock();
        for action in state.take_pending_actions() {
            state.apply_action(action);
        }

        let params = state.params;
        let rebuild = state.barrel_dirty;
        let fit = state.fit_requested;
        state.barrel_dirty = false;
        state.fit_requested = false;
        drop(state);

        if let Some(viewport_state) = &self.viewport_state {
            let mut viewport = viewport_state.lock();
            if rebuild {
                viewport.rebuild_barrel(&params);
            }
            if fit {
                viewport.fit_view();
            }
        }
    }

    /// Pull the toggles the viewport owns back into the persisted config
    fn sync_config(&mut self) {
        let Some(viewport_state) = &self.viewport_state else {
            return;
        };
        let viewport = viewport_state.lock();
        self.config.renderer.grid.enabled = viewport.renderer.show_grid();
        self.config.renderer.shadow.enabled = viewport.renderer.shadows_enabled();
        self.config.renderer.camera.fov_degrees = viewport.renderer.camera().fov_degrees();
    }
}

impl eframe::App for BarrelDesignerApp {
    fn update(&mut self, ctx: &egui::Context, frame: &mut eframe::Frame) {
        self.process_actions();

        egui::SidePanel::left("controls")
            .default_width(260.0)
            .show(ctx, |ui| {
                self.controls_panel.ui(ui, &self.app_state);
            });

        let view_mode = self.app_state.lock().view_mode;
        let render_state = frame.wgpu_render_state();

        egui::CentralPanel::default().show(ctx, |ui| match view_mode {
            ViewMode::ThreeD => {
                if let (Some(render_state), Some(viewport_state)) =
                    (render_state, self.viewport_state.as_ref())
                {
                    self.viewport_panel.ui_with_render_context(
                        ui,
                        &self.app_state,
                        render_state,
                        viewport_state,
                    );
                } else {
                    self.viewport_panel.ui(ui, &self.app_state);
                }
            }
            ViewMode::TwoD => self.drawing_panel.ui(ui, &self.app_state),
        });

        // The 3D view animates continuously; 2D repaints only on events
        if view_mode == ViewMode::ThreeD {
            ctx.request_repaint();
        }
    }

    fn save(&mut self, _storage: &mut dyn eframe::Storage) {
        self.sync_config();
        let Some(path) = AppConfig::default_path() else {
            return;
        };
        if let Err(e) = self.config.save(&path) {
            tracing::warn!("Failed to save preferences: {}", e);
        }
    }
}
