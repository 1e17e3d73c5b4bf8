//! Shared numeric constants for the canvas crate.

// ── Viewport ────────────────────────────────────────────────────

/// Multiplicative zoom step per wheel notch. Zoom-out uses the reciprocal so
/// an equal number of in/out steps returns to the starting zoom.
pub const ZOOM_STEP: f64 = 1.1;

/// Initial zoom factor for a freshly mounted workspace.
pub const INITIAL_ZOOM: f64 = 1.0;

// ── Grid ────────────────────────────────────────────────────────

/// Distance between grid lines, in logical units.
pub const GRID_SPACING: f64 = 50.0;

/// Logical extent covered by the grid along each axis (`0..=GRID_EXTENT`).
pub const GRID_EXTENT: f64 = 1000.0;

/// Screen-space inset of ruler labels from the workspace edge, in CSS pixels.
pub const RULER_INSET_PX: f64 = 10.0;

// ── Buffer ──────────────────────────────────────────────────────

/// Maximum number of shapes the buffer tray may hold.
pub const BUFFER_CAPACITY: usize = 20;

/// Smallest batch a single Create command tries to add.
pub const CREATE_BATCH_MIN: usize = 5;

/// Largest batch a single Create command tries to add.
pub const CREATE_BATCH_MAX: usize = 20;

/// View box edge length of a buffer thumbnail.
pub const THUMBNAIL_VIEWBOX: f64 = 200.0;

// ── Shapes ──────────────────────────────────────────────────────

/// Fill used for every polygon, in the buffer and once placed.
pub const PLACEMENT_FILL: &str = "#800000";

/// Fewest sides a generated polygon may have.
pub const MIN_SIDES: usize = 3;

/// Most sides a generated polygon may have.
pub const MAX_SIDES: usize = 7;

// ── Persistence ─────────────────────────────────────────────────

/// Key of the single persisted document slot.
pub const STORAGE_KEY: &str = "polygonData";

/// Media type used for the drag-transfer payload.
pub const DRAG_MEDIA_TYPE: &str = "text/plain";

// ── Cursors ─────────────────────────────────────────────────────

/// Workspace cursor while idle.
pub const CURSOR_IDLE: &str = "grab";

/// Workspace cursor while panning.
pub const CURSOR_PANNING: &str = "grabbing";
