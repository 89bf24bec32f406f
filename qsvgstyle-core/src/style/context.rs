// SPDX-License-Identifier: LGPL-3.0-only

use std::path::Path;
use std::rc::Rc;

use qsvgstyle_theme::palette::PaletteConfig;
use qsvgstyle_theme::tweaks::ThemeTweaks;
use qsvgstyle_theme::{ThemeConfig, ThemeResult};

use crate::animation::ProgressAnimations;
use crate::layout::WidgetId;
use crate::observer::RenderObserver;
use crate::render::{DebugFlags, Renderer};
use crate::svg::{LayeredSvg, SvgElementRenderer};
use crate::text::FontMetrics;

/// The loaded theme and everything drawing with it needs.
///
/// One context replaces the global style object of toolkit styles: hosts
/// keep it next to their widget tree and pass it to every paint call.
pub struct ThemeContext {
    theme: ThemeConfig,
    svg: Box<dyn SvgElementRenderer>,
    metrics: Box<dyn FontMetrics>,
    animations: ProgressAnimations,
    animation_count: u32,
    debug: DebugFlags,
    observer: Option<Rc<dyn RenderObserver>>,
}

impl std::fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThemeContext")
            .field("theme", &self.theme.path())
            .field("animations", &self.animations)
            .field("animation_count", &self.animation_count)
            .field("debug", &self.debug)
            .field("has_observer", &self.observer.is_some())
            .finish()
    }
}

impl ThemeContext {
    pub fn new(
        theme: ThemeConfig,
        svg: Box<dyn SvgElementRenderer>,
        metrics: Box<dyn FontMetrics>,
    ) -> Self {
        Self {
            theme,
            svg,
            metrics,
            animations: ProgressAnimations::new(),
            animation_count: 0,
            debug: DebugFlags::empty(),
            observer: None,
        }
    }

    /// The bundled theme and SVG.
    pub fn builtin(metrics: Box<dyn FontMetrics>) -> ThemeResult<Self> {
        Ok(Self::new(
            ThemeConfig::builtin(),
            Box::new(LayeredSvg::builtin()?),
            metrics,
        ))
    }

    /// Switch to the theme file at `path`, keeping the current palette.
    ///
    /// An unreadable theme leaves the built-in one in place.
    pub fn load_theme(&mut self, path: impl AsRef<Path>) {
        let palette = self.theme.palette().cloned();
        self.theme = ThemeConfig::load_or_builtin(path);
        self.theme.set_palette(palette);
        log::debug!("theme loaded from {:?}", self.theme.path());
    }

    /// Switch to the SVG document at `path`, layered over the bundled one.
    pub fn load_svg(&mut self, path: impl AsRef<Path>) -> ThemeResult<()> {
        self.svg = Box::new(LayeredSvg::load(path)?);
        Ok(())
    }

    /// Replace the SVG backend.
    pub fn set_svg(&mut self, svg: Box<dyn SvgElementRenderer>) {
        self.svg = svg;
    }

    pub fn set_palette(&mut self, palette: Option<PaletteConfig>) {
        self.theme.set_palette(palette);
    }

    pub fn theme(&self) -> &ThemeConfig {
        &self.theme
    }

    pub fn theme_mut(&mut self) -> &mut ThemeConfig {
        &mut self.theme
    }

    pub fn tweaks(&self) -> &ThemeTweaks {
        self.theme.tweaks()
    }

    pub fn metrics(&self) -> &dyn FontMetrics {
        &*self.metrics
    }

    pub fn set_debug(&mut self, debug: DebugFlags) {
        self.debug = debug;
    }

    pub fn set_observer(&mut self, observer: Option<Rc<dyn RenderObserver>>) {
        self.observer = observer;
    }

    pub fn animations(&self) -> &ProgressAnimations {
        &self.animations
    }

    /// Busy progress bars: call `show`/`hide`/`destroy` from widget events.
    pub fn animations_mut(&mut self) -> &mut ProgressAnimations {
        &mut self.animations
    }

    /// Advance busy progress bars. Returns the widgets to repaint.
    pub fn tick_progress(&mut self) -> Vec<WidgetId> {
        self.animations.tick()
    }

    /// Advance the theme's frame animation.
    ///
    /// Returns whether anything animates, so hosts know to repaint.
    pub fn tick_animation(&mut self) -> bool {
        if !self.theme.info().animated {
            return false;
        }
        self.animation_count = self.animation_count.wrapping_add(1);
        true
    }

    pub fn animation_count(&self) -> u32 {
        self.animation_count
    }

    /// A renderer drawing with the current theme state.
    pub fn renderer(&self) -> Renderer<'_> {
        Renderer::new(&*self.svg, &self.theme.tweaks().palette, &*self.metrics)
            .with_debug(self.debug)
            .with_observer(self.observer.as_deref())
            .with_animation_count(self.animation_count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observer::RenderLog;
    use crate::text::FixedMetrics;
    use std::io::Write;

    fn context() -> ThemeContext {
        ThemeContext::builtin(Box::new(FixedMetrics::default())).unwrap()
    }

    #[test]
    fn unreadable_theme_falls_back_to_builtin() {
        let mut ctx = context();
        ctx.load_theme("/nonexistent/theme.toml");
        assert!(ctx.theme().is_builtin());
    }

    #[test]
    fn loading_a_theme_keeps_the_palette() {
        let mut ctx = context();
        let palette = PaletteConfig::from_toml("[PushButton]\nbackground = \"#ff0000\"\n", "red.toml").unwrap();
        ctx.set_palette(Some(palette));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "[general]\nanimated = true\n").unwrap();
        ctx.load_theme(file.path());

        assert!(ctx.theme().palette().is_some());
        assert!(ctx.tick_animation());
        assert_eq!(ctx.animation_count(), 1);
    }

    #[test]
    fn static_themes_do_not_animate() {
        let mut ctx = context();
        assert!(!ctx.tick_animation());
        assert_eq!(ctx.animation_count(), 0);
    }

    #[test]
    fn renderer_reports_to_the_observer() {
        use crate::layout::{LayoutDirection, Orientation};
        use qsvgstyle_theme::SpecProvider;

        let mut ctx = context();
        let log = Rc::new(RenderLog::new());
        ctx.set_observer(Some(log.clone() as Rc<dyn RenderObserver>));

        let frame = ctx.theme().frame_spec("PushButton");
        let mut painter = crate::vgi::RecordingPainter::new();
        ctx.renderer().render_frame(
            &mut painter,
            None,
            &crate::geometry::Rect::new(0, 0, 80, 24),
            &frame,
            "button-normal",
            LayoutDirection::Ltr,
            Orientation::Horizontal,
        );

        let events = log.take();
        assert_eq!(events.len(), 2);
        assert!(events[0].begin);
        assert_eq!(events[1].subject, "button-normal");
        assert_eq!(painter.elements().len(), 8);
    }
}
