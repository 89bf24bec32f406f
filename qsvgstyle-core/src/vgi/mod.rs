// SPDX-License-Identifier: LGPL-3.0-only

//! Vector Graphics Interface abstraction.
//!
//! The renderer only talks to a [Painter], so the style is decoupled from
//! the surface it draws on. [VelloPainter] records into a [vello::Scene];
//! [RecordingPainter] keeps a list of device-space draw calls for debugging
//! tools and tests.

use std::sync::Arc;

use vello::kurbo::{Affine, BezPath, Point};
use vello::peniko::Color;
use vello::Scene;

use crate::geometry::{Alignment, Rect, Size};
use crate::svg::SvgElementRenderer;

mod recording;
mod vello_vg;

pub use recording::{DrawCall, RecordingPainter};
pub use vello_vg::VelloPainter;

/// An icon drawn next to or instead of a label.
///
/// The icon's scene is authored at `size` and scaled into the target rect.
#[derive(Clone)]
pub struct Icon {
    size: Size,
    scene: Option<Arc<Scene>>,
}

impl std::fmt::Debug for Icon {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Icon")
            .field("size", &self.size)
            .field("has_scene", &self.scene.is_some())
            .finish()
    }
}

impl Icon {
    /// An icon drawn from a scene authored at `size`.
    pub fn from_scene(scene: Arc<Scene>, size: Size) -> Self {
        Self {
            size,
            scene: Some(scene),
        }
    }

    /// An icon that only occupies space. Useful for measuring.
    pub fn placeholder(size: Size) -> Self {
        Self { size, scene: None }
    }

    /// Natural size of the icon.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The icon's scene, if it has one.
    pub fn scene(&self) -> Option<&Scene> {
        self.scene.as_deref()
    }

    /// Transform mapping the icon's own space onto `rect`.
    pub fn transform_into(&self, rect: &Rect) -> Affine {
        let sx = if self.size.width > 0 {
            rect.width as f64 / self.size.width as f64
        } else {
            1.0
        };
        let sy = if self.size.height > 0 {
            rect.height as f64 / self.size.height as f64
        } else {
            1.0
        };
        Affine::translate((rect.x as f64, rect.y as f64)) * Affine::scale_non_uniform(sx, sy)
    }
}

/// A drawing surface.
///
/// Every call is affected by the current transform. [Painter::save] and
/// [Painter::restore] bracket transform and clip changes.
pub trait Painter {
    /// Push the current transform and clip.
    fn save(&mut self);

    /// Pop the state pushed by the matching [Painter::save].
    fn restore(&mut self);

    /// The current transform.
    fn transform(&self) -> Affine;

    /// Replace the current transform.
    fn set_transform(&mut self, transform: Affine);

    /// Apply `transform` before the current transform.
    fn concat_transform(&mut self, transform: Affine) {
        let current = self.transform();
        self.set_transform(current * transform);
    }

    /// Restrict drawing to `rect` until the next [Painter::restore].
    fn clip_rect(&mut self, rect: &Rect);

    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: &Rect, color: Color);

    /// Fill a path.
    fn fill_path(&mut self, path: &BezPath, color: Color);

    /// Outline a rectangle with a one pixel pen.
    fn stroke_rect(&mut self, rect: &Rect, color: Color);

    /// Draw a one pixel line.
    fn draw_line(&mut self, from: Point, to: Point, color: Color);

    /// Draw text aligned in `rect`.
    fn draw_text(&mut self, rect: &Rect, alignment: Alignment, text: &str, color: Color);

    /// Draw an icon scaled into `rect`.
    fn draw_icon(&mut self, rect: &Rect, icon: &Icon);

    /// Append a scene under the current transform followed by `transform`.
    fn append_scene(&mut self, scene: &Scene, transform: Affine);

    /// Draw the SVG element `id` stretched into `rect`.
    ///
    /// Implementations usually forward to [SvgElementRenderer::render].
    fn draw_element(&mut self, svg: &dyn SvgElementRenderer, id: &str, rect: &Rect);

    /// Access the underlying Scene, if the painter has one.
    fn as_scene_mut(&mut self) -> Option<&mut Scene> {
        None
    }
}

/// Map an integer rect through an affine transform, returning its bounding box.
pub fn device_rect(transform: Affine, rect: &Rect) -> vello::kurbo::Rect {
    transform.transform_rect_bbox(rect.to_kurbo())
}
