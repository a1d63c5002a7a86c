// DOM hooks and front-end tuning.

// Elements the galaxy attaches to
pub const CANVAS_ID: &str = "universeCanvas";
pub const TOOLTIP_ID: &str = "universeTooltip";

// CSS custom property holding the node fill color
pub const NODE_COLOR_PROPERTY: &str = "--node-color";

// Frame-rate summary window for debug logging
pub const FPS_LOG_INTERVAL_SECS: u64 = 5;

// Key that re-samples the node layout
pub const REGENERATE_KEYS: [&str; 2] = ["r", "R"];
