// Shared layout, interaction and palette tuning for the feature galaxy.

// Node set
pub const DEFAULT_NODE_COUNT: usize = 44;
pub const MAX_NODE_COUNT: usize = 5_000;

// Shell radius: r = max_radius * (RADIUS_MIN_FACTOR + RADIUS_SPAN_FACTOR * u)
pub const RADIUS_MIN_FACTOR: f32 = 0.5;
pub const RADIUS_SPAN_FACTOR: f32 = 0.8;
// fraction of the smaller half-extent used as max radius (keeps a margin to the edge)
pub const MAX_RADIUS_VIEWPORT_FRACTION: f32 = 0.8;

// Radial line length as a fraction of center -> node distance
pub const LINE_SCALE_MIN: f32 = 0.5;
pub const LINE_SCALE_SPAN: f32 = 0.6;

// Projection
pub const PERSPECTIVE: f32 = 600.0; // world units from eye to projection plane
pub const MIN_PERSPECTIVE_DENOMINATOR: f32 = 1e-3;

// Interaction
pub const HIT_RADIUS_PX: f32 = 16.0;
pub const DRAG_RADIANS_PER_PX: f32 = 0.005;
pub const AUTO_ROTATE_Y: f32 = 0.003; // radians per frame
pub const AUTO_ROTATE_X: f32 = 0.0007; // radians per frame
pub const INITIAL_ANGLE_X: f32 = 0.35;
pub const INITIAL_ANGLE_Y: f32 = 0.0;

// Marker sizing: side = MARKER_BASE_PX + MARKER_SCALE_PX * scale
pub const MARKER_BASE_PX: f32 = 3.0;
pub const MARKER_SCALE_PX: f32 = 6.0;

// Palette
pub const LINE_COLOR: &str = "#444444";
pub const LINE_WIDTH: f32 = 0.5;
pub const OUTLINE_COLOR: &str = "#222222";
pub const OUTLINE_WIDTH: f32 = 1.0;
pub const HOVER_COLOR: &str = "#ffffff";
pub const FALLBACK_NODE_COLOR: &str = "#bcd8ff";
