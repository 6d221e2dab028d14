//! Spacing constants for consistent layout throughout the application.
//!
//! All spacing values are in pixels (f32) and follow a consistent scale.

// =============================================================================
// SPACING SCALE
// =============================================================================

/// Extra small spacing - tight gaps between related elements
pub const SPACING_XS: f32 = 4.0;

/// Small spacing - small gaps, list padding
pub const SPACING_SM: f32 = 8.0;

/// Medium spacing - default padding, standard gaps
pub const SPACING_MD: f32 = 16.0;

/// Large spacing - placeholder padding
pub const SPACING_LG: f32 = 24.0;

// =============================================================================
// BORDERS
// =============================================================================

/// Small radius - buttons, inputs, array boxes
pub const BORDER_RADIUS_SM: f32 = 4.0;

/// Medium radius - panes
pub const BORDER_RADIUS_MD: f32 = 6.0;

/// Thin border - subtle separators
pub const BORDER_WIDTH_THIN: f32 = 1.0;

// =============================================================================
// LAYOUT
// =============================================================================

/// Width share of the type list pane.
pub const TYPE_PANE_PORTION: u16 = 3;

/// Width share of the documents pane.
pub const DOCUMENT_PANE_PORTION: u16 = 7;

/// Indentation of a nested section body in the property view.
pub const SECTION_INDENT: f32 = 16.0;

// =============================================================================
// TEXT SIZES
// =============================================================================

/// Pane titles.
pub const TEXT_TITLE: f32 = 16.0;

/// Regular body text.
pub const TEXT_BODY: f32 = 13.0;

/// Captions and labels.
pub const TEXT_CAPTION: f32 = 11.0;
