//! Pipeline-wide constants.
//!
//! Centralizes palette values and descriptor defaults to make the codebase
//! more maintainable and self-documenting.

// ============================================================================
// Palette
// ============================================================================

/// Number of entries in the deterministic base palette
pub const BASE_PALETTE_LEN: usize = 10;

/// RGB triples of the deterministic base palette, in assignment order
pub const BASE_PALETTE_RGB: [(u8, u8, u8); BASE_PALETTE_LEN] = [
    (54, 162, 235),  // Blue
    (255, 99, 132),  // Red
    (255, 206, 86),  // Yellow
    (75, 192, 192),  // Teal
    (153, 102, 255), // Purple
    (255, 159, 64),  // Orange
    (46, 204, 113),  // Green
    (201, 203, 207), // Grey
    (231, 76, 160),  // Pink
    (52, 73, 94),    // Slate
];

/// Background alpha of deterministic palette entries
pub const BASE_BACKGROUND_ALPHA: f32 = 0.6;

/// Border alpha of deterministic palette entries
pub const BASE_BORDER_ALPHA: f32 = 1.0;

/// Background alpha of randomized palette entries
pub const RANDOM_BACKGROUND_ALPHA: f32 = 0.7;

// ============================================================================
// Descriptor Defaults
// ============================================================================

/// Stroke width applied to every dataset
pub const DEFAULT_BORDER_WIDTH: u32 = 1;

/// Legend placement for per-point charts
pub const LEGEND_POSITION: &str = "top";

/// Rows shown in the data preview
pub const DEFAULT_PREVIEW_ROWS: usize = 10;

// ============================================================================
// Performance
// ============================================================================

/// Pipeline stages slower than this are logged at warn level
pub const DEFAULT_SLOW_STAGE_MS: f64 = 50.0;
