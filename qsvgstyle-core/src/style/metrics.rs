// SPDX-License-Identifier: LGPL-3.0-only

//! Pixel metrics, contents sizes and sub-element rectangles.

use qsvgstyle_theme::groups::{ContentsType, SubElement};
use qsvgstyle_theme::{ElementSpec, FrameSpec, SpecProvider};

use super::{
    from_canonical, ArrowType, CheckType, Features, MenuItemKind, OptionExtra, PixelMetric,
    SortIndicator, StyleOption, TabShape, ThemeContext, WidgetInfo,
};
use crate::geometry::{aligned_rect, visual_rect, Alignment, Margins, Rect, Size};
use crate::interior::{interior_rect, label_rect};
use crate::layout::Orientation;
use crate::size::{apply_size_spec, size_from_contents, TextIconMode};
use crate::text::text_size;

/// Width of the buttons of spin boxes and the arrow of combo boxes.
pub(crate) const BUTTON_WIDTH: i32 = 20;

/// Extra width of a tool button's separate menu button.
pub(crate) const MENU_BUTTON_WIDTH: i32 = 20;

/// Horizontal room kept around a group box title.
pub(crate) const GROUPBOX_TITLE_INDENT: i32 = 30;

/// Position of `value` along `span` pixels for a range control.
///
/// Values below `minimum` or an empty range map to 0; values above
/// `maximum` map to the far end. The result is rounded to the nearest pixel.
pub fn slider_position_from_value(
    minimum: i32,
    maximum: i32,
    value: i32,
    span: i32,
    upside_down: bool,
) -> i32 {
    if span <= 0 || value < minimum || maximum <= minimum {
        return 0;
    }
    if value > maximum {
        return if upside_down { span } else { 0 };
    }
    let range = maximum as i64 - minimum as i64;
    let p = if upside_down {
        maximum as i64 - value as i64
    } else {
        value as i64 - minimum as i64
    };
    ((2 * p * span as i64 + range) / (2 * range)) as i32
}

/// Sides of a frame that take room; all zero without a frame.
pub(crate) fn frame_margins(frame: &FrameSpec) -> Margins {
    if !frame.has_frame {
        return Margins::default();
    }
    Margins::new(frame.left, frame.top, frame.right, frame.bottom)
}

/// Widest side of a frame.
fn frame_width(frame: &FrameSpec) -> i32 {
    let m = frame_margins(frame);
    m.left.max(m.right).max(m.top.max(m.bottom))
}

impl ThemeContext {
    /// A style-wide size.
    ///
    /// `None` lets the host use its default.
    pub fn pixel_metric(
        &self,
        metric: PixelMetric,
        option: Option<&StyleOption>,
        _widget: Option<WidgetInfo<'_>>,
    ) -> Option<i32> {
        let t = self.tweaks();
        let theme = self.theme();
        let value = match metric {
            PixelMetric::ButtonMargin => 0,
            PixelMetric::ButtonShiftHorizontal | PixelMetric::ButtonShiftVertical => 1,
            PixelMetric::DefaultFrameWidth => frame_width(&theme.frame_spec("Frame")),
            PixelMetric::SpinBoxFrameWidth | PixelMetric::ComboBoxFrameWidth => 0,
            PixelMetric::LayoutLeftMargin => t.layout_margins.left,
            PixelMetric::LayoutRightMargin => t.layout_margins.right,
            PixelMetric::LayoutTopMargin => t.layout_margins.top,
            PixelMetric::LayoutBottomMargin => t.layout_margins.bottom,
            PixelMetric::LayoutHorizontalSpacing => t.layout_margins.hspace,
            PixelMetric::LayoutVerticalSpacing => t.layout_margins.vspace,
            PixelMetric::MenuBarPanelWidth | PixelMetric::MenuBarVMargin => 0,
            PixelMetric::MenuBarHMargin => t.menubar.hspace,
            PixelMetric::MenuBarItemSpacing => t.menubar.space,
            PixelMetric::MenuHMargin | PixelMetric::MenuVMargin => 0,
            PixelMetric::MenuPanelWidth => frame_width(&theme.frame_spec("Menu")),
            PixelMetric::MenuTearoffHeight => t.menu.tearoff_height,
            PixelMetric::MenuScrollerHeight => return None,
            PixelMetric::ToolBarFrameWidth => frame_width(&theme.frame_spec("ToolBar")),
            PixelMetric::ToolBarHandleExtent => t.toolbar.handle_width,
            PixelMetric::ToolBarSeparatorExtent => t.toolbar.separator_width,
            PixelMetric::ToolBarItemSpacing => t.toolbar.space,
            PixelMetric::ToolBarItemMargin => t.toolbar.item_margin,
            PixelMetric::ToolBarExtensionExtent => t.toolbar.extension_width,
            PixelMetric::ToolBarIconSize => t.toolbar.icon_size,
            PixelMetric::TabBarIconSize | PixelMetric::SmallIconSize | PixelMetric::ButtonIconSize => 16,
            PixelMetric::LargeIconSize => 32,
            PixelMetric::TabCloseIndicatorWidth | PixelMetric::TabCloseIndicatorHeight => {
                theme.indicator_spec("TabWidget").size
            }
            PixelMetric::IndicatorWidth | PixelMetric::IndicatorHeight => {
                theme.indicator_spec("CheckBox").size
            }
            PixelMetric::ExclusiveIndicatorWidth | PixelMetric::ExclusiveIndicatorHeight => {
                theme.indicator_spec("RadioButton").size
            }
            PixelMetric::CheckBoxLabelSpacing | PixelMetric::RadioButtonLabelSpacing => {
                t.radiocheckbox.label_tispace
            }
            PixelMetric::SplitterWidth => 6,
            PixelMetric::ScrollBarExtent => t.scrollbar.thickness,
            PixelMetric::ScrollBarSliderMin => t.scrollbar.slider_min_size,
            PixelMetric::SliderThickness => t.slider.thickness,
            PixelMetric::SliderLength | PixelMetric::SliderControlThickness => t.slider.cursor_size,
            PixelMetric::SliderTickmarkOffset => t.slider.ticks_offset,
            PixelMetric::ProgressBarChunkWidth => t.progressbar.chunk_width,
            PixelMetric::DockWidgetFrameWidth => frame_width(&theme.frame_spec("DockWidget")),
            PixelMetric::DockWidgetTitleMargin => theme.label_spec("DockWidget").hmargin,
            PixelMetric::DockWidgetTitleBarButtonMargin => 0,
            PixelMetric::DockWidgetSeparatorExtent => t.dock.separator_size,
            PixelMetric::DockWidgetHandleExtent => t.dock.handle_width,
            PixelMetric::TitleBarHeight => {
                let spec = theme.element_spec("TitleBar");
                let m = frame_margins(&spec.frame);
                let text = option.map_or("W", |o| if o.text.is_empty() { "W" } else { o.text.as_str() });
                text_size(self.metrics(), text).height + m.vertical() + 2 * spec.label.vmargin
            }
        };
        Some(value)
    }

    /// Size of a control showing contents of `contents_size`.
    ///
    /// Text and icon are taken from `option`. `None` means the contents type
    /// is not themed.
    pub fn size_from_contents(
        &self,
        contents: ContentsType,
        option: &StyleOption,
        contents_size: Size,
        _widget: Option<WidgetInfo<'_>>,
    ) -> Option<Size> {
        let group = contents.group()?;
        let spec = self.theme().element_spec(group);
        let t = self.tweaks();
        let metrics = self.metrics();
        let fm = frame_margins(&spec.frame);
        let csz = contents_size;
        let icon = option.shown_icon_size();
        let has_label = !option.text.is_empty() || option.icon.is_some();
        let ds = t.dropdown.size;
        let tispace = spec.label.tispace;

        let contents_size_of = |text: &str, mode: TextIconMode| {
            size_from_contents(metrics, &spec.frame, &spec.label, text, icon, mode)
        };
        let framed = Size::new(csz.width + fm.horizontal(), csz.height + fm.vertical());

        let s = match contents {
            ContentsType::LineEdit | ContentsType::TabWidget => framed,
            ContentsType::SpinBox => {
                let mut s = framed.expanded_to(contents_size_of(&option.text, TextIconMode::TextBesideIcon));
                s.width += 2 * BUTTON_WIDTH + 8;
                s
            }
            ContentsType::ComboBox => {
                let text = if option.text.is_empty() { "W" } else { &option.text };
                let mut s = contents_size_of(text, TextIconMode::TextBesideIcon).expanded_to(framed);
                s.width += BUTTON_WIDTH;
                s
            }
            ContentsType::PushButton => {
                let text = if has_label { option.text.as_str() } else { "W" };
                let mut s = contents_size_of(text, TextIconMode::TextBesideIcon);
                if option.features.contains(Features::HAS_MENU) {
                    s.width += tispace + spec.indicator.size;
                }
                s
            }
            ContentsType::CheckBox | ContentsType::RadioButton => {
                let is = spec.indicator.size;
                let mut s = if has_label {
                    let label = size_from_contents(metrics, &FrameSpec::default(), &spec.label, &option.text, icon, TextIconMode::TextBesideIcon);
                    Size::new(label.width + t.radiocheckbox.label_tispace, label.height)
                } else {
                    Size::default()
                };
                s.width += is;
                s.expanded_to(Size::new(is, is))
            }
            ContentsType::ToolButton => {
                let mut s = contents_size_of(&option.text, option.mode);
                if let OptionExtra::ToolButton { arrow } = option.extra {
                    if arrow != ArrowType::None {
                        s.width += ds;
                        if has_label {
                            s.width += tispace;
                        }
                    }
                }
                if option.features.contains(Features::MENU) {
                    s.width += MENU_BUTTON_WIDTH;
                } else if option.features.contains(Features::HAS_MENU) {
                    s.width += tispace + ds;
                }
                s.expanded_to(contents_size_of("W", TextIconMode::TextOnly))
            }
            ContentsType::MenuItem => self.menu_item_size(&spec, option, csz),
            ContentsType::MenuBarItem | ContentsType::MenuBar => {
                contents_size_of(&option.text, TextIconMode::TextBesideIcon)
            }
            ContentsType::ProgressBar => {
                let text = if option.features.contains(Features::TEXT_VISIBLE) && option.text.is_empty() {
                    "W"
                } else if option.features.contains(Features::TEXT_VISIBLE) {
                    option.text.as_str()
                } else {
                    ""
                };
                let s = contents_size_of(text, TextIconMode::TextOnly).expanded_to(framed);
                match option.range() {
                    Some(r) if r.orientation.is_vertical() => s.transposed(),
                    _ => s,
                }
            }
            ContentsType::TabBarTab => {
                let mut s = contents_size_of(&option.text, TextIconMode::TextBesideIcon);
                if option.features.contains(Features::CLOSABLE) {
                    s.width += self.theme().indicator_spec("TabWidget").size + tispace;
                }
                match option.extra {
                    OptionExtra::Tab {
                        shape: TabShape::West | TabShape::East,
                        ..
                    } => s.transposed(),
                    _ => s,
                }
            }
            ContentsType::HeaderSection => {
                let mut s = contents_size_of(&option.text, TextIconMode::TextBesideIcon);
                if let OptionExtra::Header { sort, .. } = option.extra {
                    if sort != SortIndicator::None {
                        s.width += spec.indicator.size + tispace;
                    }
                }
                s
            }
            ContentsType::Slider => {
                let thickness = t.slider.cursor_size + 2;
                match option.orientation() {
                    Orientation::Horizontal => Size::new(csz.width, thickness),
                    Orientation::Vertical => Size::new(thickness, csz.height),
                }
            }
            ContentsType::ScrollBar => {
                let thickness = t.scrollbar.thickness;
                match option.orientation() {
                    Orientation::Horizontal => Size::new(csz.width, thickness),
                    Orientation::Vertical => Size::new(thickness, csz.height),
                }
            }
            ContentsType::Splitter => csz,
            ContentsType::GroupBox => {
                let mut title = size_from_contents(metrics, &FrameSpec::default(), &spec.label, &option.text, icon, TextIconMode::TextBesideIcon);
                if option.features.contains(Features::CHECKABLE) {
                    title.width += spec.indicator.size + tispace;
                    title.height = title.height.max(spec.indicator.size);
                }
                Size::new(
                    (title.width + 2 * GROUPBOX_TITLE_INDENT).max(csz.width + fm.horizontal()),
                    csz.height + title.height + fm.vertical(),
                )
            }
            ContentsType::SizeGrip | ContentsType::ItemViewItem => return None,
        };
        Some(apply_size_spec(s, &spec.size))
    }

    fn menu_item_size(&self, spec: &ElementSpec, option: &StyleOption, csz: Size) -> Size {
        let t = self.tweaks();
        let (kind, check, max_icon) = match option.extra {
            OptionExtra::MenuItem {
                kind,
                check,
                max_icon_width,
                ..
            } => (kind, check, max_icon_width),
            _ => (MenuItemKind::Normal, CheckType::NotCheckable, 0),
        };
        match kind {
            MenuItemKind::Separator => return Size::new(csz.width, t.menu.separator_height),
            MenuItemKind::TearOff => return Size::new(csz.width, t.menu.tearoff_height),
            _ => {}
        }

        let (label, shortcut) = split_shortcut(&option.text);
        let tispace = spec.label.tispace;
        let mut s = size_from_contents(
            self.metrics(),
            &spec.frame,
            &spec.label,
            label,
            option.shown_icon_size(),
            TextIconMode::TextBesideIcon,
        );
        if !shortcut.is_empty() {
            s.width += text_size(self.metrics(), shortcut).width + 2 * tispace;
        }
        if option.icon.is_none() {
            s.width += tispace + max_icon;
        }
        let mark = spec.indicator.size + t.radiocheckbox.label_tispace;
        if kind == MenuItemKind::SubMenu {
            s.width += mark;
        }
        if check != CheckType::NotCheckable {
            s.width += mark;
        }
        s
    }

    /// Rectangle of a part of a control.
    ///
    /// `None` lets the host compute it.
    pub fn sub_element_rect(
        &self,
        element: SubElement,
        option: &StyleOption,
        widget: Option<WidgetInfo<'_>>,
    ) -> Option<Rect> {
        let group = element.group()?;
        let theme = self.theme();
        let r = option.rect;
        let dir = option.direction;

        let rect = match element {
            SubElement::PushButtonContents => {
                let job = self.job(group, option, widget);
                interior_rect(&r, &self.capsule_frame(&job), Orientation::Horizontal)
            }
            SubElement::LineEditContents | SubElement::FrameContents | SubElement::ShapedFrameContents => {
                interior_rect(&r, &theme.frame_spec(group), Orientation::Horizontal)
            }
            SubElement::TabWidgetTabContents => {
                interior_rect(&r, &theme.frame_spec(group), Orientation::Horizontal)
            }
            SubElement::ProgressBarGroove => r,
            SubElement::ProgressBarContents | SubElement::ProgressBarLabel => {
                let orientation = option.range().map_or(Orientation::Horizontal, |range| range.orientation);
                let inner = interior_rect(&r, &theme.frame_spec(group), orientation);
                from_canonical(&r, &inner, orientation)
            }
            SubElement::CheckBoxIndicator | SubElement::RadioButtonIndicator => {
                let is = theme.indicator_spec(group).size;
                aligned_rect(dir, Alignment::LEFT | Alignment::VCENTER, Size::new(is, is), &r)
            }
            SubElement::CheckBoxContents | SubElement::RadioButtonContents => {
                let is = theme.indicator_spec(group).size;
                let spacing = self.tweaks().radiocheckbox.label_tispace;
                visual_rect(dir, &r, &r.adjusted(is + spacing, 0, 0, 0))
            }
            SubElement::CheckBoxClickRect | SubElement::RadioButtonClickRect => {
                let (indicator, contents) = match element {
                    SubElement::CheckBoxClickRect => (SubElement::CheckBoxIndicator, SubElement::CheckBoxContents),
                    _ => (SubElement::RadioButtonIndicator, SubElement::RadioButtonContents),
                };
                let i = self.sub_element_rect(indicator, option, widget)?;
                let c = self.sub_element_rect(contents, option, widget)?;
                i.united(&c)
            }
            SubElement::HeaderArrow => {
                let spec = theme.element_spec(group);
                let inner = label_rect(&r, &spec.frame, &spec.label);
                let is = spec.indicator.size;
                aligned_rect(dir, Alignment::RIGHT | Alignment::VCENTER, Size::new(is, is), &inner)
            }
            SubElement::HeaderLabel => {
                let spec = theme.element_spec(group);
                let inner = label_rect(&r, &spec.frame, &spec.label);
                match option.extra {
                    OptionExtra::Header { sort, .. } if sort != SortIndicator::None => visual_rect(
                        dir,
                        &inner,
                        &inner.adjusted(0, 0, -(spec.indicator.size + spec.label.tispace), 0),
                    ),
                    _ => inner,
                }
            }
            SubElement::DockWidgetTitleBarText => {
                let spec = theme.element_spec(group);
                label_rect(&r, &spec.frame, &spec.label)
            }
            SubElement::ToolBarHandle => {
                let extent = self.tweaks().toolbar.handle_width;
                let handle = match option.orientation() {
                    Orientation::Horizontal => Rect::new(r.x, r.y, extent, r.height),
                    Orientation::Vertical => Rect::new(r.x, r.y, r.width, extent),
                };
                visual_rect(dir, &r, &handle)
            }
            _ => return None,
        };
        Some(rect)
    }
}

/// Split a menu item text at the tab into label and shortcut.
pub(crate) fn split_shortcut(text: &str) -> (&str, &str) {
    text.split_once('\t').unwrap_or((text, ""))
}
