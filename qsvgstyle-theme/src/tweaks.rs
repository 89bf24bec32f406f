//! Theme-wide settings from the `[specific]` table of a theme file.
//!
//! ```toml
//! [specific.palette]
//! intensity = 80
//! frames_3d = true
//!
//! [specific.button]
//! use_capsule = true
//!
//! [specific.scrollbar]
//! variant = "buttons"
//! thickness = 14
//! ```
//!
//! Every table and field is optional; missing values use [Default].

use serde::Deserialize;

/// All theme-wide settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ThemeTweaks {
    pub palette: PaletteTweaks,
    pub button: ButtonTweaks,
    pub menu: MenuTweaks,
    pub menubar: MenuBarTweaks,
    pub toolbar: ToolBarTweaks,
    pub layout_margins: LayoutMargins,
    pub scrollbar: ScrollBarTweaks,
    pub slider: SliderTweaks,
    pub progressbar: ProgressBarTweaks,
    pub spinbox: SpinBoxTweaks,
    pub tab: TabTweaks,
    pub dropdown: DropDownTweaks,
    pub radiocheckbox: RadioCheckBoxTweaks,
    pub dock: DockTweaks,
}

/// Palette overlay settings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct PaletteTweaks {
    /// Alpha (0-255) of the color overlay.
    pub intensity: u8,
    /// Draw frames with light and dark bevel colors.
    #[serde(alias = "3dframes")]
    pub frames_3d: bool,
    pub use_palette: bool,
}

impl Default for PaletteTweaks {
    fn default() -> Self {
        Self {
            intensity: 0,
            frames_3d: false,
            use_palette: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ButtonTweaks {
    /// Group adjacent buttons into capsules.
    pub use_capsule: bool,
}

impl Default for ButtonTweaks {
    fn default() -> Self {
        Self { use_capsule: true }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuTweaks {
    pub use_capsule: bool,
    pub force_tearoff: bool,
    pub separator_height: i32,
    pub tearoff_height: i32,
}

impl Default for MenuTweaks {
    fn default() -> Self {
        Self {
            use_capsule: false,
            force_tearoff: false,
            separator_height: 6,
            tearoff_height: 8,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct MenuBarTweaks {
    pub hspace: i32,
    pub space: i32,
}

impl Default for MenuBarTweaks {
    fn default() -> Self {
        Self { hspace: 0, space: 2 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolBarTweaks {
    pub item_margin: i32,
    pub handle_width: i32,
    pub separator_width: i32,
    pub space: i32,
    pub extension_width: i32,
    pub icon_size: i32,
}

impl Default for ToolBarTweaks {
    fn default() -> Self {
        Self {
            item_margin: 2,
            handle_width: 8,
            separator_width: 4,
            space: 0,
            extension_width: 12,
            icon_size: 22,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LayoutMargins {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
    pub hspace: i32,
    pub vspace: i32,
}

impl Default for LayoutMargins {
    fn default() -> Self {
        Self {
            left: 4,
            right: 4,
            top: 4,
            bottom: 4,
            hspace: 2,
            vspace: 2,
        }
    }
}

/// Placement of the scroll bar arrow buttons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScrollBarVariant {
    #[default]
    Buttons,
    NoButtons,
}

/// How the scroll bar slider relates to the groove frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SliderArea {
    /// The slider moves inside the groove interior.
    #[default]
    InsideGroove,
    /// The slider covers the groove frame too.
    OverlapsGroove,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ScrollBarTweaks {
    pub variant: ScrollBarVariant,
    pub slider_area: SliderArea,
    pub thickness: i32,
    pub slider_min_size: i32,
}

impl Default for ScrollBarTweaks {
    fn default() -> Self {
        Self {
            variant: ScrollBarVariant::Buttons,
            slider_area: SliderArea::InsideGroove,
            thickness: 16,
            slider_min_size: 16,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SliderTweaks {
    pub thickness: i32,
    pub cursor_size: i32,
    pub ticks_offset: i32,
}

impl Default for SliderTweaks {
    fn default() -> Self {
        Self {
            thickness: 6,
            cursor_size: 16,
            ticks_offset: 2,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProgressBarVariant {
    #[default]
    Normal,
    /// Thin bar with the label outside.
    Thin,
}

/// Animation of progress bars with an unknown value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyVariant {
    /// A chunk runs to the end and re-enters at the start.
    #[default]
    Wrap,
    /// A chunk bounces between both ends.
    BackAndForth,
    /// The whole bar is filled with a moving pattern.
    FullLength,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BusyDirection {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ProgressBarTweaks {
    pub variant: ProgressBarVariant,
    pub busy_variant: BusyVariant,
    pub busy_full_direction: BusyDirection,
    pub chunk_width: i32,
    pub thin_min_height: i32,
}

impl Default for ProgressBarTweaks {
    fn default() -> Self {
        Self {
            variant: ProgressBarVariant::Normal,
            busy_variant: BusyVariant::Wrap,
            busy_full_direction: BusyDirection::Forward,
            chunk_width: 20,
            thin_min_height: 6,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpinBoxVariant {
    #[default]
    SideBySide,
    Opposite,
    Stacked,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SpinBoxTweaks {
    pub variant: SpinBoxVariant,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TabVariant {
    /// Every tab has its own full frame.
    Individual,
    /// Tabs form a capsule, the selected one is drawn apart.
    GroupNonSelected,
    /// All tabs form one capsule.
    #[default]
    GroupAll,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TabTweaks {
    pub variant: TabVariant,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DropDownTweaks {
    /// Width of the drop-down arrow area of combo boxes and menu buttons.
    pub size: i32,
}

impl Default for DropDownTweaks {
    fn default() -> Self {
        Self { size: 16 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RadioCheckBoxTweaks {
    pub label_tispace: i32,
}

impl Default for RadioCheckBoxTweaks {
    fn default() -> Self {
        Self { label_tispace: 4 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct DockTweaks {
    pub handle_width: i32,
    pub separator_size: i32,
}

impl Default for DockTweaks {
    fn default() -> Self {
        Self {
            handle_width: 8,
            separator_size: 4,
        }
    }
}
