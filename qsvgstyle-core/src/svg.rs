// SPDX-License-Identifier: LGPL-3.0-only

//! The SVG document backing a theme.
//!
//! Every themed part is an element of the document, addressed by its `id`.
//! [VelloSvgRenderer] encodes each requested element into its own Vello
//! scene on first use and draws it by appending that scene, mapped so the
//! element's bounding box lands on the target rectangle and clipped to it.
//! Elements holding images or text are drawn from the scene of the whole
//! document instead.

use std::cell::RefCell;
use std::num::NonZeroUsize;
use std::path::Path;
use std::rc::Rc;

use lru::LruCache;
use qsvgstyle_theme::builtin::{BUILTIN_THEME_NAME, DEFAULT_SVG};
use qsvgstyle_theme::error::{read_to_string, ThemeError, ThemeResult};
use vello::kurbo::{self, Affine, BezPath};
use vello::peniko::{BlendMode, Compose, Fill, Mix};
use vello::Scene;
use vello_svg::usvg::{
    self, ImageRendering, Node, Options, ShapeRendering, TextRendering, Tree,
};
use vello_svg::util;

use crate::geometry::Rect;
use crate::vgi::Painter;

/// Number of element bounding boxes kept by [VelloSvgRenderer].
pub const BOUNDS_CACHE_SIZE: usize = 512;

/// Number of encoded element scenes kept by [VelloSvgRenderer].
pub const SCENE_CACHE_SIZE: usize = 256;

/// Draws named elements of an SVG document.
pub trait SvgElementRenderer {
    /// Whether the document has a drawable element with `id`.
    fn element_exists(&self, id: &str) -> bool;

    /// Draw the element `id` stretched into `rect`.
    fn render(&self, painter: &mut dyn Painter, id: &str, rect: &Rect);
}

/// [SvgElementRenderer] on top of `usvg` and `vello_svg`.
pub struct VelloSvgRenderer {
    tree: Tree,
    /// The whole document, for elements that cannot be encoded alone.
    scene: Rc<Scene>,
    bounds: RefCell<LruCache<String, Option<kurbo::Rect>>>,
    scenes: RefCell<LruCache<String, Rc<Scene>>>,
}

impl std::fmt::Debug for VelloSvgRenderer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let size = self.tree.size();
        f.debug_struct("VelloSvgRenderer")
            .field("width", &size.width())
            .field("height", &size.height())
            .finish()
    }
}

fn cache<V>(size: usize) -> RefCell<LruCache<String, V>> {
    let size = NonZeroUsize::new(size).unwrap_or(NonZeroUsize::MIN);
    RefCell::new(LruCache::new(size))
}

/// Encode `node` and its children in document coordinates.
///
/// Follows the conversion of `vello_svg`. Returns `false` when the node holds
/// content only the whole-document conversion handles.
fn encode_node(scene: &mut Scene, node: &Node) -> bool {
    let transform = util::to_affine(&node.abs_transform());
    match node {
        Node::Group(group) => {
            if group.blend_mode() != usvg::BlendMode::Normal {
                return false;
            }
            let clip = match group.clip_path() {
                Some(clip) => match clip.root().children().first() {
                    Some(Node::Path(path)) => Some(util::to_bez_path(path)),
                    _ => return false,
                },
                None => None,
            };
            let alpha = group.opacity().get();
            let blend = BlendMode::new(Mix::Normal, Compose::SrcOver);
            let layered = match (&clip, alpha < 1.0) {
                (Some(path), false) => {
                    scene.push_clip_layer(transform, path);
                    true
                }
                (Some(path), true) => {
                    scene.push_layer(blend, alpha, transform, path);
                    true
                }
                (None, true) => {
                    let b = group.layer_bounding_box();
                    let rect = kurbo::Rect::from_origin_size(
                        (b.x() as f64, b.y() as f64),
                        (b.width() as f64, b.height() as f64),
                    );
                    scene.push_layer(blend, alpha, transform, &rect);
                    true
                }
                (None, false) => false,
            };
            if !group.children().iter().all(|child| encode_node(scene, child)) {
                return false;
            }
            if layered {
                scene.pop_layer();
            }
            true
        }
        Node::Path(path) => {
            if !path.is_visible() {
                return true;
            }
            let local = util::to_bez_path(path);
            match path.paint_order() {
                usvg::PaintOrder::FillAndStroke => {
                    fill_path(scene, node, path, transform, &local);
                    stroke_path(scene, node, path, transform, &local);
                }
                usvg::PaintOrder::StrokeAndFill => {
                    stroke_path(scene, node, path, transform, &local);
                    fill_path(scene, node, path, transform, &local);
                }
            }
            true
        }
        Node::Image(_) | Node::Text(_) => false,
    }
}

fn fill_path(scene: &mut Scene, node: &Node, path: &usvg::Path, transform: Affine, local: &BezPath) {
    let Some(fill) = path.fill() else {
        return;
    };
    match util::to_brush(fill.paint(), fill.opacity()) {
        Some((brush, brush_transform)) => {
            let rule = match fill.rule() {
                usvg::FillRule::NonZero => Fill::NonZero,
                usvg::FillRule::EvenOdd => Fill::EvenOdd,
            };
            scene.fill(rule, transform, &brush, Some(brush_transform), local);
        }
        None => util::default_error_handler(scene, node),
    }
}

fn stroke_path(scene: &mut Scene, node: &Node, path: &usvg::Path, transform: Affine, local: &BezPath) {
    let Some(stroke) = path.stroke() else {
        return;
    };
    match util::to_brush(stroke.paint(), stroke.opacity()) {
        Some((brush, brush_transform)) => {
            scene.stroke(&util::to_stroke(stroke), transform, &brush, Some(brush_transform), local);
        }
        None => util::default_error_handler(scene, node),
    }
}

impl VelloSvgRenderer {
    /// Parse an SVG document. `path` is only used in errors.
    pub fn from_str(source: &str, path: impl AsRef<Path>) -> ThemeResult<Self> {
        let tree = Tree::from_str(
            source,
            &Options {
                shape_rendering: ShapeRendering::GeometricPrecision,
                text_rendering: TextRendering::OptimizeLegibility,
                image_rendering: ImageRendering::OptimizeSpeed,
                ..Default::default()
            },
        )
        .map_err(|e| ThemeError::svg_error(path.as_ref(), e.to_string()))?;
        let scene = Rc::new(vello_svg::render_tree(&tree));
        Ok(Self {
            tree,
            scene,
            bounds: cache(BOUNDS_CACHE_SIZE),
            scenes: cache(SCENE_CACHE_SIZE),
        })
    }

    /// Read and parse an SVG document.
    pub fn from_file(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let source = read_to_string(path)?;
        Self::from_str(&source, path)
    }

    /// The document bundled with the built-in theme.
    pub fn builtin() -> ThemeResult<Self> {
        Self::from_str(DEFAULT_SVG, BUILTIN_THEME_NAME)
    }

    /// Replace the document with the one at `path`.
    ///
    /// On failure the current document stays loaded.
    pub fn load(&mut self, path: impl AsRef<Path>) -> ThemeResult<()> {
        *self = Self::from_file(path)?;
        Ok(())
    }

    /// Bounding box of an element in document coordinates, strokes included.
    ///
    /// Elements without area, such as empty groups, have none.
    pub fn element_bounds(&self, id: &str) -> Option<kurbo::Rect> {
        let mut cache = self.bounds.borrow_mut();
        if let Some(bounds) = cache.get(id) {
            return *bounds;
        }
        let bounds = self.tree.node_by_id(id).and_then(|node| {
            let b = node.abs_stroke_bounding_box();
            let r = kurbo::Rect::new(
                b.x() as f64,
                b.y() as f64,
                (b.x() + b.width()) as f64,
                (b.y() + b.height()) as f64,
            );
            (r.width() > 0.0 && r.height() > 0.0).then_some(r)
        });
        cache.put(id.to_string(), bounds);
        bounds
    }

    /// Scene drawing the element `id` in document coordinates.
    ///
    /// Falls back to the whole document for unknown ids and for elements
    /// that cannot be encoded alone.
    pub fn element_scene(&self, id: &str) -> Rc<Scene> {
        if let Some(scene) = self.scenes.borrow_mut().get(id) {
            return Rc::clone(scene);
        }
        let scene = self
            .tree
            .node_by_id(id)
            .and_then(|node| {
                let mut scene = Scene::new();
                encode_node(&mut scene, node).then(|| Rc::new(scene))
            })
            .unwrap_or_else(|| {
                log::debug!("element '{}' is drawn from the whole document", id);
                Rc::clone(&self.scene)
            });
        self.scenes.borrow_mut().put(id.to_string(), Rc::clone(&scene));
        scene
    }
}

impl SvgElementRenderer for VelloSvgRenderer {
    fn element_exists(&self, id: &str) -> bool {
        self.element_bounds(id).is_some()
    }

    fn render(&self, painter: &mut dyn Painter, id: &str, rect: &Rect) {
        if rect.is_empty() {
            return;
        }
        let Some(b) = self.element_bounds(id) else {
            return;
        };
        let transform = Affine::translate((rect.x as f64, rect.y as f64))
            * Affine::scale_non_uniform(rect.width as f64 / b.width(), rect.height as f64 / b.height())
            * Affine::translate((-b.x0, -b.y0));

        let scene = self.element_scene(id);
        painter.save();
        painter.clip_rect(rect);
        painter.append_scene(&scene, transform);
        painter.restore();
    }
}

/// A theme document layered over the bundled one.
///
/// Elements missing from the theme document are taken from the fallback, so
/// partial themes still draw every part.
#[derive(Debug)]
pub struct LayeredSvg {
    theme: Option<VelloSvgRenderer>,
    fallback: VelloSvgRenderer,
}

impl LayeredSvg {
    pub fn new(theme: Option<VelloSvgRenderer>, fallback: VelloSvgRenderer) -> Self {
        Self { theme, fallback }
    }

    /// The bundled document alone.
    pub fn builtin() -> ThemeResult<Self> {
        Ok(Self::new(None, VelloSvgRenderer::builtin()?))
    }

    /// Layer the document at `path` over the bundled one.
    ///
    /// A document that fails to load is skipped with a warning.
    pub fn load(path: impl AsRef<Path>) -> ThemeResult<Self> {
        let path = path.as_ref();
        let theme = match VelloSvgRenderer::from_file(path) {
            Ok(svg) => Some(svg),
            Err(e) => {
                log::warn!("{}; using built-in SVG", e);
                None
            }
        };
        Ok(Self::new(theme, VelloSvgRenderer::builtin()?))
    }

    pub fn has_theme(&self) -> bool {
        self.theme.is_some()
    }

    fn source(&self, id: &str) -> Option<&VelloSvgRenderer> {
        self.theme
            .as_ref()
            .filter(|svg| svg.element_exists(id))
            .or_else(|| self.fallback.element_exists(id).then_some(&self.fallback))
    }
}

impl SvgElementRenderer for LayeredSvg {
    fn element_exists(&self, id: &str) -> bool {
        self.source(id).is_some()
    }

    fn render(&self, painter: &mut dyn Painter, id: &str, rect: &Rect) {
        if let Some(svg) = self.source(id) {
            svg.render(painter, id, rect);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vgi::{DrawCall, RecordingPainter};

    const DOC: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
        <rect id="button-normal-top" x="10" y="0" width="20" height="4" fill="#888"/>
        <g id="empty"/>
    </svg>"##;

    #[test]
    fn finds_elements_by_id() {
        let svg = VelloSvgRenderer::from_str(DOC, "doc.svg").unwrap();
        assert!(svg.element_exists("button-normal-top"));
        assert!(!svg.element_exists("button-normal-bottom"));
        assert!(!svg.element_exists("empty"));
        assert_eq!(
            svg.element_bounds("button-normal-top"),
            Some(kurbo::Rect::new(10.0, 0.0, 30.0, 4.0))
        );
    }

    #[test]
    fn render_maps_bounds_onto_the_rect() {
        let svg = VelloSvgRenderer::from_str(DOC, "doc.svg").unwrap();
        let mut painter = RecordingPainter::new();
        svg.render(&mut painter, "button-normal-top", &Rect::new(0, 0, 40, 8));

        let transform = painter
            .calls()
            .iter()
            .find_map(|c| match c {
                DrawCall::Scene { transform } => Some(*transform),
                _ => None,
            })
            .unwrap();
        let mapped = transform.transform_rect_bbox(kurbo::Rect::new(10.0, 0.0, 30.0, 4.0));
        assert_eq!(mapped, kurbo::Rect::new(0.0, 0.0, 40.0, 8.0));
    }

    #[test]
    fn invalid_documents_are_errors() {
        let err = VelloSvgRenderer::from_str("<svg", "broken.svg").unwrap_err();
        assert!(matches!(err, ThemeError::SvgError { .. }));
    }

    #[test]
    fn layered_documents_prefer_the_theme() {
        let theme = VelloSvgRenderer::from_str(DOC, "doc.svg").unwrap();
        let fallback = VelloSvgRenderer::from_str(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
                <rect id="button-normal-top" x="50" y="50" width="10" height="10"/>
                <rect id="button-normal-left" x="0" y="50" width="4" height="10"/>
            </svg>"##,
            "fallback.svg",
        )
        .unwrap();
        let layered = LayeredSvg::new(Some(theme), fallback);
        assert!(layered.has_theme());
        assert!(layered.element_exists("button-normal-left"));
        assert!(!layered.element_exists("button-normal-right"));
        assert_eq!(
            layered.source("button-normal-top").and_then(|s| s.element_bounds("button-normal-top")),
            Some(kurbo::Rect::new(10.0, 0.0, 30.0, 4.0))
        );
    }

    #[test]
    fn missing_theme_document_falls_back() {
        let layered = LayeredSvg::load("/nonexistent/theme.svg").unwrap();
        assert!(!layered.has_theme());
        assert!(layered.element_exists("button-normal-top"));
    }

    #[test]
    fn stroked_elements_include_their_stroke() {
        let svg = VelloSvgRenderer::from_str(
            r##"<svg xmlns="http://www.w3.org/2000/svg" width="16" height="16">
                <path id="line" d="M 0 8 H 16" stroke="#000" stroke-width="2"/>
            </svg>"##,
            "line.svg",
        )
        .unwrap();
        assert!(svg.element_exists("line"));
        assert_eq!(svg.element_bounds("line"), Some(kurbo::Rect::new(0.0, 7.0, 16.0, 9.0)));
    }

    #[test]
    fn element_scenes_hold_only_the_element() {
        let svg = VelloSvgRenderer::from_str(DOC_TWO, "two.svg").unwrap();
        let whole = svg.scene.encoding().n_paths;
        let scene = svg.element_scene("a");
        assert!(scene.encoding().n_paths > 0);
        assert!(scene.encoding().n_paths < whole);
        assert!(Rc::ptr_eq(&scene, &svg.element_scene("a")));
        assert!(Rc::ptr_eq(&svg.element_scene("unknown"), &svg.scene));
    }

    const DOC_TWO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
        <rect id="a" x="0" y="0" width="10" height="10" fill="#f00"/>
        <g id="b" opacity="0.5"><rect x="20" y="20" width="10" height="10" fill="#00f"/></g>
    </svg>"##;

    #[test]
    fn builtin_document_parses() {
        let svg = VelloSvgRenderer::builtin().unwrap();
        assert!(svg.element_exists("button-normal-top"));
        assert!(svg.element_exists("button-normal"));
        assert!(svg.element_exists("menuitem-tearoff-normal"));
    }
}
