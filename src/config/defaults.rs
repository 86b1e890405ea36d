//! Default values for the demo configuration.

/// Number of blocks laid out on scene start.
pub const DEFAULT_BLOCK_COUNT: usize = 2000;

/// Block edge length in scene units.
pub const DEFAULT_CELL_WIDTH: f64 = 10.0;
pub const DEFAULT_CELL_HEIGHT: f64 = 10.0;

/// Camera scale when zoomed in (0.25 = 4x magnification).
pub const DEFAULT_ZOOM_FACTOR: f64 = 0.25;

/// Length of zoom in/out transitions.
pub const DEFAULT_ANIMATION_DURATION_MS: u32 = 250;

/// Upper bound offered by the settings panel.
pub const MAX_BLOCK_COUNT: usize = 20_000;

/// `localStorage` key holding the saved configuration.
pub const STORAGE_KEY: &str = "bv_config";
