//! Platform-free core of the feature galaxy: node generation, rotation and
//! projection, pointer interaction, picking and per-frame painting through
//! the [`Surface`] and [`Overlay`] capabilities.

pub mod catalog;
pub mod config;
pub mod constants;
pub mod hit;
pub mod interaction;
pub mod nodes;
pub mod scene;
pub mod schedule;
pub mod surface;
pub mod transform;
pub mod viewport;

pub use catalog::{default_catalog, Feature};
pub use config::{ConfigError, GalaxyConfig, Stroke, Theme};
pub use interaction::{Interaction, InteractionMode, ViewState};
pub use nodes::Node;
pub use scene::{FrameReport, ProjectedPoint, Scene};
pub use schedule::{FrameStats, LoopHandle};
pub use surface::{Overlay, Surface};
pub use viewport::Viewport;
