//! Tuning constants for the glyph weight effect.
//!
//! These express intended behavior (breakpoints, smoothing factors, weight
//! ranges, easing durations) and keep magic numbers out of the code.

// Mode selection: gravity strictly below, hover at or above
pub const BREAKPOINT_PX: f32 = 991.0;
pub const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

// DOM contract
pub const ROOT_SELECTOR: &str = "[data-animate=\"font-weight\"]";
pub const GLYPH_CLASS: &str = "char";
pub const GLYPH_SELECTOR: &str = ".char";
pub const LAYOUT_EVENT: &str = "fitline:updated";

// Gravity smoothing and projection
pub const SMOOTHING_ALPHA: f32 = 0.15; // lower = smoother/slower
pub const SENSITIVITY: f32 = 4.0; // projection gain before clamping to [-1, 1]
pub const SETTLE_EPSILON: f32 = 1e-3; // smoothed/target distance treated as converged
pub const TILT_CLAMP_DEG: f32 = 90.0;

// Gravity weight ranges
pub const GRAVITY_WEIGHT_MIN: f32 = 100.0;
pub const GRAVITY_WEIGHT_MAX: f32 = 800.0;
pub const REDUCED_WEIGHT_MIN: f32 = 300.0;
pub const REDUCED_WEIGHT_MAX: f32 = 600.0;

// Hover proximity mapping
pub const MAX_DISTANCE: f32 = 300.0; // px; at or beyond this a glyph rests at MIN_WEIGHT
pub const MIN_WEIGHT: f32 = 100.0;
pub const MAX_FONT_WEIGHT: f32 = 800.0;

// Per-glyph transitions
pub const GRAVITY_TWEEN_SEC: f32 = 0.35;
pub const HOVER_TWEEN_SEC: f32 = 0.5;
pub const GRAVITY_WEIGHT_PROPERTY: &str = "--w";
pub const HOVER_WEIGHT_PROPERTY: &str = "font-weight";

// Permission affordance
pub const PERMISSION_BUTTON_ID: &str = "gw-motion-permission";
pub const PERMISSION_BUTTON_LABEL: &str = "Enable Motion";
