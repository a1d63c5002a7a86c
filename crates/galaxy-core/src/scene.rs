//! Per-frame rendering of the galaxy.
//!
//! [`Scene`] owns the node set together with the view and pointer state, so
//! event handlers and the frame tick share one context. One call to
//! [`Scene::render_frame`] is one iteration of the display loop.

use crate::catalog::Feature;
use crate::config::GalaxyConfig;
use crate::constants::{MARKER_BASE_PX, MARKER_SCALE_PX};
use crate::hit;
use crate::interaction::{Interaction, InteractionMode, ViewState};
use crate::nodes::{self, Node};
use crate::surface::{Overlay, Surface};
use crate::transform::{project, view_transform};
use crate::viewport::Viewport;
use glam::Vec2;
use rand::Rng;

/// A node after rotation and projection for the current frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ProjectedPoint {
    pub screen: Vec2,
    pub scale: f32,
    /// Rotated z; only used for paint order.
    pub depth: f32,
    /// Index into [`Scene::nodes`].
    pub node: usize,
}

/// What a single frame did, mostly for tests and diagnostics.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameReport {
    pub drawn: usize,
    /// Nodes whose projection was not finite this frame.
    pub skipped: usize,
    pub hovered: Option<usize>,
    pub auto_rotated: bool,
}

pub struct Scene {
    config: GalaxyConfig,
    catalog: Vec<Feature>,
    nodes: Vec<Node>,
    viewport: Viewport,
    generation_radius: f32,
    hovered: Option<usize>,
    projected: Vec<ProjectedPoint>,
    pub view: ViewState,
    pub interaction: Interaction,
}

impl Scene {
    /// Generate nodes for `viewport` and set up the initial view.
    pub fn new<R: Rng + ?Sized>(
        config: GalaxyConfig,
        catalog: Vec<Feature>,
        viewport: Viewport,
        rng: &mut R,
    ) -> Self {
        let generation_radius = viewport.max_radius();
        let nodes = nodes::generate(&catalog, config.node_count, generation_radius, rng);
        Self::assemble(config, catalog, nodes, viewport, generation_radius)
    }

    /// Use a prebuilt node set instead of generating one. `catalog` is kept
    /// for later [`Scene::regenerate`] calls.
    pub fn with_nodes(
        config: GalaxyConfig,
        catalog: Vec<Feature>,
        nodes: Vec<Node>,
        viewport: Viewport,
    ) -> Self {
        let generation_radius = viewport.max_radius();
        Self::assemble(config, catalog, nodes, viewport, generation_radius)
    }

    fn assemble(
        config: GalaxyConfig,
        catalog: Vec<Feature>,
        nodes: Vec<Node>,
        viewport: Viewport,
        generation_radius: f32,
    ) -> Self {
        let (angle_y, angle_x) = config.initial_angles;
        let interaction = Interaction::new(config.drag_radians_per_px, config.auto_rotate);
        Self {
            view: ViewState::new(angle_y, angle_x, viewport.center()),
            interaction,
            projected: Vec::with_capacity(nodes.len()),
            config,
            catalog,
            nodes,
            viewport,
            generation_radius,
            hovered: None,
        }
    }

    pub fn config(&self) -> &GalaxyConfig {
        &self.config
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// Max radius the current node set was generated with.
    pub fn generation_radius(&self) -> f32 {
        self.generation_radius
    }

    /// Max radius the next [`Scene::regenerate`] will use.
    pub fn next_generation_radius(&self) -> f32 {
        self.viewport.max_radius()
    }

    pub fn hovered(&self) -> Option<&Node> {
        self.hovered.and_then(|i| self.nodes.get(i))
    }

    /// Points from the last frame, in paint order.
    pub fn projected(&self) -> &[ProjectedPoint] {
        &self.projected
    }

    /// Re-center on a new surface size. Node positions are kept.
    pub fn resize(&mut self, viewport: Viewport) {
        self.viewport = viewport;
        self.view.center = viewport.center();
    }

    /// Re-sample every node for the current viewport.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.generation_radius = self.viewport.max_radius();
        self.nodes = nodes::generate(
            &self.catalog,
            self.config.node_count,
            self.generation_radius,
            rng,
        );
        self.hovered = None;
        self.projected.clear();
        log::info!(
            "[scene] regenerated {} nodes, max radius {:.1}",
            self.nodes.len(),
            self.generation_radius
        );
    }

    pub fn mode(&self) -> InteractionMode {
        self.interaction.mode()
    }

    /// Starts a drag when `pos` lies on the surface.
    pub fn pointer_down(&mut self, pos: Vec2) {
        if self.viewport.contains(pos) {
            self.interaction.pointer_down(pos);
        }
    }

    pub fn pointer_move(&mut self, pos: Vec2) {
        self.interaction.pointer_move(pos, &mut self.view);
    }

    pub fn pointer_up(&mut self) {
        self.interaction.pointer_up();
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.pointer_leave();
        self.hovered = None;
    }

    /// Rotate and project every node into the scratch buffer, in node order.
    /// Returns how many nodes were dropped for a non-finite result.
    fn project_nodes(&mut self) -> usize {
        self.projected.clear();
        let mut skipped = 0;
        for (i, node) in self.nodes.iter().enumerate() {
            let p = view_transform(node.position, self.view.angle_y, self.view.angle_x);
            let proj = project(p, self.config.perspective, self.view.center);
            if !(proj.screen.is_finite() && proj.scale.is_finite() && p.z.is_finite()) {
                skipped += 1;
                continue;
            }
            self.projected.push(ProjectedPoint {
                screen: proj.screen,
                scale: proj.scale,
                depth: p.z,
                node: i,
            });
        }
        skipped
    }

    /// Paint one frame and advance the idle rotation.
    pub fn render_frame<S, O>(&mut self, surface: &mut S, overlay: &mut O) -> FrameReport
    where
        S: Surface + ?Sized,
        O: Overlay + ?Sized,
    {
        surface.clear();
        let skipped = self.project_nodes();
        if skipped > 0 {
            log::debug!("[frame] skipped {} non-finite nodes", skipped);
        }

        let center = self.view.center;
        let line = &self.config.theme.line;
        for pp in &self.projected {
            let scale = self.nodes[pp.node].line_scale;
            surface.draw_line(center, center + (pp.screen - center) * scale, line);
        }

        self.hovered = if self.interaction.pointer.inside {
            hit::find_nearest(
                self.projected.iter().map(|pp| pp.screen),
                self.interaction.pointer.position,
                self.config.hit_radius_px,
            )
            .map(|i| self.projected[i].node)
        } else {
            None
        };

        // Ascending z; with scale = p / (p + z) the nearest markers paint first.
        self.projected.sort_by(|a, b| a.depth.total_cmp(&b.depth));

        let theme = &self.config.theme;
        let node_fill = surface
            .theme_color()
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| theme.fallback_fill.clone());
        let mut hovered_screen = None;
        for pp in &self.projected {
            let side = MARKER_BASE_PX + MARKER_SCALE_PX * pp.scale;
            let is_hovered = self.hovered == Some(pp.node);
            if is_hovered {
                hovered_screen = Some(pp.screen);
            }
            let fill = if is_hovered {
                theme.hover_fill.as_str()
            } else {
                node_fill.as_str()
            };
            surface.draw_rect(
                pp.screen - Vec2::splat(side * 0.5),
                Vec2::splat(side),
                fill,
                &theme.outline,
            );
        }

        match (self.hovered(), hovered_screen) {
            (Some(node), Some(at)) => overlay.show(at, &node.feature.tooltip_text()),
            _ => overlay.hide(),
        }

        let auto_rotated = self.interaction.auto_rotate(&mut self.view);

        FrameReport {
            drawn: self.projected.len(),
            skipped,
            hovered: self.hovered,
            auto_rotated,
        }
    }
}
