//! Application state module

mod viewport;

pub use viewport::{SharedViewportState, ViewportState};

use std::sync::Arc;

use parking_lot::Mutex;

use bd_core::{
    DIAMETER_RANGE, DesignParameters, GripType, LENGTH_RANGE, Material, WEIGHT_RANGE,
};

/// Which rendering surface is visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    ThreeD,
    TwoD,
}

/// Actions queued by the UI and applied once per frame
#[derive(Debug, Clone)]
pub enum AppAction {
    /// Set barrel length (mm)
    SetLength(f32),
    /// Set barrel diameter (mm)
    SetDiameter(f32),
    /// Set barrel weight (g)
    SetWeight(f32),
    /// Switch grip style
    SetGripType(GripType),
    /// Switch material
    SetMaterial(Material),
    /// Switch the visible rendering surface
    SetViewMode(ViewMode),
    /// Re-frame the camera on the barrel
    FitView,
}

/// Application state
pub struct AppState {
    /// Current design, the single source of truth for both views
    pub params: DesignParameters,
    /// Active rendering surface
    pub view_mode: ViewMode,
    /// The 3D mesh needs a rebuild
    pub barrel_dirty: bool,
    /// A camera re-frame was requested
    pub fit_requested: bool,
    /// Pending actions
    pending_actions: Vec<AppAction>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            params: DesignParameters::default(),
            view_mode: ViewMode::default(),
            // Build and frame the initial barrel on the first frame
            barrel_dirty: true,
            fit_requested: true,
            pending_actions: Vec::new(),
        }
    }
}

impl AppState {
    /// Create a new app state
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action
    pub fn queue_action(&mut self, action: AppAction) {
        self.pending_actions.push(action);
    }

    /// Take pending actions
    pub fn take_pending_actions(&mut self) -> Vec<AppAction> {
        std::mem::take(&mut self.pending_actions)
    }

    /// Apply one action. Geometry-affecting edits mark the 3D mesh dirty;
    /// weight only changes the drawing and the spec block.
    pub fn apply_action(&mut self, action: AppAction) {
        match action {
            AppAction::SetLength(value) => {
                self.params.length_mm = LENGTH_RANGE.clamp(value);
                self.barrel_dirty = true;
            }
            AppAction::SetDiameter(value) => {
                self.params.diameter_mm = DIAMETER_RANGE.clamp(value);
                self.barrel_dirty = true;
            }
            AppAction::SetWeight(value) => {
                self.params.weight_g = WEIGHT_RANGE.clamp(value);
            }
            AppAction::SetGripType(grip) => {
                self.params.grip = grip;
                self.barrel_dirty = true;
            }
            AppAction::SetMaterial(material) => {
                self.params.material = material;
                self.barrel_dirty = true;
            }
            AppAction::SetViewMode(mode) => {
                self.view_mode = mode;
            }
            AppAction::FitView => {
                self.fit_requested = true;
            }
        }
    }
}

pub type SharedAppState = Arc<Mutex<AppState>>;

/// Create a new shared app state
pub fn create_shared_state() -> SharedAppState {
    Arc::new(Mutex::new(AppState::new()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_edits_are_clamped() {
        let mut state = AppState::new();
        state.apply_action(AppAction::SetLength(1000.0));
        assert_eq!(state.params.length_mm, LENGTH_RANGE.max);
        state.apply_action(AppAction::SetDiameter(0.0));
        assert_eq!(state.params.diameter_mm, DIAMETER_RANGE.min);
    }

    #[test]
    fn test_weight_does_not_dirty_the_mesh() {
        let mut state = AppState::new();
        state.barrel_dirty = false;
        state.apply_action(AppAction::SetWeight(22.0));
        assert!(!state.barrel_dirty);
        state.apply_action(AppAction::SetDiameter(8.0));
        assert!(state.barrel_dirty);
    }

    #[test]
    fn test_view_mode_switch_preserves_params() {
        let mut state = AppState::new();
        let before = state.params;
        state.apply_action(AppAction::SetViewMode(ViewMode::TwoD));
        state.apply_action(AppAction::SetViewMode(ViewMode::ThreeD));
        assert_eq!(state.params, before);
    }

    #[test]
    fn test_action_queue_drains() {
        let mut state = AppState::new();
        state.queue_action(AppAction::SetViewMode(ViewMode::TwoD));
        state.queue_action(AppAction::FitView);
        assert_eq!(state.take_pending_actions().len(), 2);
        assert!(state.take_pending_actions().is_empty());
    }
}
