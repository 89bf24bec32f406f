// SPDX-License-Identifier: LGPL-3.0-only
use vello::kurbo::{Affine, BezPath, Line, Point, Stroke, Vec2};
use vello::peniko::{Brush, Color, Fill, Mix};
use vello::Scene;

use crate::geometry::{Alignment, Rect};
use crate::svg::SvgElementRenderer;
use crate::text::ParleyText;
use crate::vgi::{Icon, Painter};

#[derive(Debug, Clone, Copy)]
struct SavedState {
    transform: Affine,
    layers: usize,
}

/// A Vello-based implementation of the [Painter] trait.
pub struct VelloPainter<'a> {
    scene: &'a mut Scene,
    text: Option<&'a ParleyText>,
    transform: Affine,
    layers: usize,
    stack: Vec<SavedState>,
}

impl<'a> VelloPainter<'a> {
    /// Create a new VelloPainter from a Scene reference.
    pub fn new(scene: &'a mut Scene) -> Self {
        Self {
            scene,
            text: None,
            transform: Affine::IDENTITY,
            layers: 0,
            stack: Vec::new(),
        }
    }

    /// Draw text through `text`. Without it text calls are skipped.
    pub fn with_text(mut self, text: &'a ParleyText) -> Self {
        self.text = Some(text);
        self
    }

    /// Get a mutable reference to the underlying Scene.
    pub fn scene_mut(&mut self) -> &mut Scene {
        self.scene
    }
}

impl Drop for VelloPainter<'_> {
    fn drop(&mut self) {
        // Unbalanced save/restore must not leave clip layers open.
        for _ in 0..self.layers {
            self.scene.pop_layer();
        }
    }
}

impl Painter for VelloPainter<'_> {
    fn save(&mut self) {
        self.stack.push(SavedState {
            transform: self.transform,
            layers: self.layers,
        });
    }

    fn restore(&mut self) {
        let Some(state) = self.stack.pop() else {
            log::debug!("restore without save");
            return;
        };
        while self.layers > state.layers {
            self.scene.pop_layer();
            self.layers -= 1;
        }
        self.transform = state.transform;
    }

    fn transform(&self) -> Affine {
        self.transform
    }

    fn set_transform(&mut self, transform: Affine) {
        self.transform = transform;
    }

    fn clip_rect(&mut self, rect: &Rect) {
        self.scene
            .push_layer(Mix::Clip, 1.0, self.transform, &rect.to_kurbo());
        self.layers += 1;
    }

    fn fill_rect(&mut self, rect: &Rect, color: Color) {
        if rect.is_empty() {
            return;
        }
        self.scene.fill(
            Fill::NonZero,
            self.transform,
            &Brush::Solid(color),
            None,
            &rect.to_kurbo(),
        );
    }

    fn fill_path(&mut self, path: &BezPath, color: Color) {
        self.scene
            .fill(Fill::NonZero, self.transform, &Brush::Solid(color), None, path);
    }

    fn stroke_rect(&mut self, rect: &Rect, color: Color) {
        // Center the pen on the pixel grid inside the rect.
        let r = rect.to_kurbo().inset(-0.5);
        self.scene
            .stroke(&Stroke::new(1.0), self.transform, &Brush::Solid(color), None, &r);
    }

    fn draw_line(&mut self, from: Point, to: Point, color: Color) {
        let offset = Vec2::new(0.5, 0.5);
        let line = Line::new(from + offset, to + offset);
        self.scene
            .stroke(&Stroke::new(1.0), self.transform, &Brush::Solid(color), None, &line);
    }

    fn draw_text(&mut self, rect: &Rect, alignment: Alignment, text: &str, color: Color) {
        match self.text {
            Some(ctx) => ctx.draw(self.scene, self.transform, rect, alignment, text, color),
            None => log::trace!("no text context, skipping '{}'", text),
        }
    }

    fn draw_icon(&mut self, rect: &Rect, icon: &Icon) {
        if let Some(scene) = icon.scene() {
            self.scene
                .append(scene, Some(self.transform * icon.transform_into(rect)));
        }
    }

    fn append_scene(&mut self, scene: &Scene, transform: Affine) {
        self.scene.append(scene, Some(self.transform * transform));
    }

    fn draw_element(&mut self, svg: &dyn SvgElementRenderer, id: &str, rect: &Rect) {
        svg.render(self, id, rect);
    }

    fn as_scene_mut(&mut self) -> Option<&mut Scene> {
        Some(self.scene)
    }
}
