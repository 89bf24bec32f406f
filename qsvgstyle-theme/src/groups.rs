//! # Widget roles and their configuration groups
//!
//! Every drawable role of a widget (a primitive, a control, a complex control,
//! a contents type or a sub-element) maps to at most one group of the theme.
//! `None` means the role is not themed and the host should render it with its
//! default style.

macro_rules! roles {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => $group:expr, )*
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )*
        }

        impl $name {
            /// Every role of this kind.
            pub const ALL: &'static [$name] = &[$($name::$variant,)*];

            /// The configuration group drawing this role, if it is themed.
            pub fn group(self) -> Option<&'static str> {
                match self {
                    $( $name::$variant => $group, )*
                }
            }
        }
    };
}

roles! {
    /// Primitive elements: frames, panels and indicators.
    pub enum PrimitiveElement {
        Frame => Some("Frame"),
        FrameDefaultButton => Some("PushButton"),
        FrameDockWidget => Some("DockWidget"),
        FrameFocusRect => Some("Frame"),
        FrameGroupBox => Some("GroupBox"),
        FrameLineEdit => Some("LineEdit"),
        FrameMenu => Some("MenuItem"),
        FrameStatusBarItem => Some("StatusBar"),
        FrameTabWidget => Some("Frame"),
        FrameWindow => Some("Window"),
        FrameButtonBevel => Some("PushButton"),
        FrameButtonTool => Some("ToolButton"),
        FrameTabBarBase => Some("TabWidget"),
        PanelButtonCommand => Some("PushButton"),
        PanelButtonBevel => Some("PushButton"),
        PanelButtonTool => Some("ToolButton"),
        PanelMenuBar => Some("MenuBarItem"),
        PanelToolBar => Some("ToolBar"),
        PanelLineEdit => Some("LineEdit"),
        PanelTipLabel => Some("Tooltip"),
        PanelScrollAreaCorner => Some("PE_PanelScrollAreaCorner"),
        PanelItemViewItem => Some("ViewItem"),
        PanelItemViewRow => Some("ViewItem"),
        PanelStatusBar => Some("StatusBar"),
        PanelMenu => Some("Menu"),
        IndicatorArrowDown => Some("Indicator"),
        IndicatorArrowLeft => Some("Indicator"),
        IndicatorArrowRight => Some("Indicator"),
        IndicatorArrowUp => Some("Indicator"),
        IndicatorBranch => Some("Indicator"),
        IndicatorButtonDropDown => Some("Indicator"),
        IndicatorItemViewItemCheck => Some("CheckBox"),
        IndicatorCheckBox => Some("CheckBox"),
        IndicatorDockWidgetResizeHandle => Some("DockWidget"),
        IndicatorHeaderArrow => Some("Indicator"),
        IndicatorMenuCheckMark => Some("CheckBox"),
        IndicatorProgressChunk => Some("ProgressbarContents"),
        IndicatorRadioButton => Some("RadioButton"),
        IndicatorSpinDown => Some("Indicator"),
        IndicatorSpinMinus => Some("Indicator"),
        IndicatorSpinPlus => Some("Indicator"),
        IndicatorSpinUp => Some("Indicator"),
        IndicatorToolBarHandle => Some("ToolBar"),
        IndicatorToolBarSeparator => Some("ToolBar"),
        IndicatorTabTear => Some("TabWidget"),
        IndicatorColumnViewArrow => Some("Indicator"),
        IndicatorItemViewItemDrop => Some("Indicator"),
        IndicatorTabClose => Some("TabWidget"),
        PanelWidget => None,
        Widget => None,
    }
}

roles! {
    /// Control elements: whole controls or labelled parts of them.
    pub enum ControlElement {
        PushButton => Some("PushButton"),
        PushButtonBevel => Some("PushButton"),
        PushButtonLabel => Some("PushButton"),
        CheckBox => Some("CheckBox"),
        CheckBoxLabel => Some("CheckBox"),
        RadioButton => Some("RadioButton"),
        RadioButtonLabel => Some("RadioButton"),
        TabBarTab => Some("TabBar"),
        TabBarTabShape => Some("TabBar"),
        TabBarTabLabel => Some("TabBar"),
        ProgressBar => Some("ProgressBar"),
        ProgressBarGroove => Some("ProgressBar"),
        ProgressBarContents => Some("ProgressBar"),
        ProgressBarLabel => Some("ProgressBar"),
        MenuItem => Some("MenuItem"),
        MenuScroller => Some("MenuItem"),
        MenuTearoff => Some("MenuItem"),
        MenuEmptyArea => Some("MenuItem"),
        MenuBarItem => Some("MenuBarItem"),
        MenuBarEmptyArea => Some("MenuBarItem"),
        ToolButtonLabel => Some("ToolButton"),
        Header => Some("Header"),
        HeaderSection => Some("Header"),
        HeaderLabel => Some("Header"),
        HeaderEmptyArea => Some("Header"),
        ToolBoxTab => Some("ToolBox"),
        ToolBoxTabShape => Some("ToolBox"),
        ToolBoxTabLabel => Some("ToolBox"),
        SizeGrip => Some("Indicator"),
        Splitter => Some("Splitter"),
        RubberBand => Some("RubberBand"),
        DockWidgetTitle => Some("DockWidget"),
        ScrollBarAddLine => Some("ScrollBar"),
        ScrollBarSubLine => Some("ScrollBar"),
        ScrollBarAddPage => Some("ScrollBar"),
        ScrollBarSubPage => Some("ScrollBar"),
        ScrollBarSlider => Some("ScrollBar"),
        ScrollBarFirst => Some("ScrollBar"),
        ScrollBarLast => Some("ScrollBar"),
        FocusFrame => Some("Frame"),
        ComboBoxLabel => Some("ComboBox"),
        ToolBar => Some("ToolBar"),
        ItemViewItem => Some("ItemView"),
        ShapedFrame => Some("Frame"),
        ColumnViewGrip => None,
    }
}

roles! {
    /// Controls made of several sub-controls.
    pub enum ComplexControl {
        SpinBox => Some("SpinBox"),
        ComboBox => Some("ComboBox"),
        ScrollBar => Some("ScrollBar"),
        Slider => Some("Slider"),
        ToolButton => Some("ToolButton"),
        TitleBar => Some("TitleBar"),
        Dial => Some("Dial"),
        GroupBox => Some("GroupBox"),
        MdiControls => None,
    }
}

roles! {
    /// Kinds of contents a size query can be about.
    pub enum ContentsType {
        PushButton => Some("PushButton"),
        CheckBox => Some("CheckBox"),
        RadioButton => Some("RadioButton"),
        ToolButton => Some("ToolButton"),
        ComboBox => Some("PushButton"),
        Splitter => Some("Splitter"),
        ProgressBar => Some("ProgressBar"),
        MenuItem => Some("MenuItem"),
        MenuBarItem => Some("MenuBarItem"),
        MenuBar => Some("MenuBarItem"),
        TabBarTab => Some("TabBar"),
        Slider => Some("Slider"),
        ScrollBar => Some("ScrollBar"),
        LineEdit => Some("LineEdit"),
        SpinBox => Some("SpinBox"),
        TabWidget => Some("TabWidget"),
        HeaderSection => Some("Header"),
        GroupBox => Some("GroupBox"),
        SizeGrip => None,
        ItemViewItem => None,
    }
}

roles! {
    /// Sub-rectangles of controls that the host asks about.
    pub enum SubElement {
        PushButtonContents => Some("PushButton"),
        PushButtonFocusRect => Some("Frame"),
        CheckBoxIndicator => Some("CheckBox"),
        CheckBoxContents => Some("CheckBox"),
        CheckBoxFocusRect => Some("Frame"),
        CheckBoxClickRect => Some("CheckBox"),
        RadioButtonIndicator => Some("RadioButton"),
        RadioButtonContents => Some("RadioButton"),
        RadioButtonFocusRect => Some("Frame"),
        RadioButtonClickRect => Some("RadioButton"),
        ComboBoxFocusRect => Some("Frame"),
        SliderFocusRect => Some("Frame"),
        ProgressBarGroove => Some("ProgressBar"),
        ProgressBarContents => Some("ProgressBar"),
        ProgressBarLabel => Some("ProgressBar"),
        ToolBoxTabContents => Some("ToolBox"),
        HeaderLabel => Some("Header"),
        HeaderArrow => Some("Header"),
        TabWidgetTabBar => Some("TabBar"),
        TabWidgetTabPane => Some("TabWidget"),
        TabWidgetTabContents => Some("TabWidget"),
        TabWidgetLeftCorner => Some("TabWidget"),
        TabWidgetRightCorner => Some("TabWidget"),
        ItemViewItemCheckIndicator => Some("ItemView"),
        TabBarTearIndicator => Some("TabBar"),
        LineEditContents => Some("LineEdit"),
        FrameContents => Some("Frame"),
        DockWidgetCloseButton => Some("DockWidget"),
        DockWidgetFloatButton => Some("DockWidget"),
        DockWidgetTitleBarText => Some("DockWidget"),
        DockWidgetIcon => Some("DockWidget"),
        ItemViewItemDecoration => Some("ItemView"),
        ItemViewItemText => Some("ItemView"),
        ItemViewItemFocusRect => Some("Frame"),
        TabBarTabLeftButton => Some("TabBar"),
        TabBarTabRightButton => Some("TabBar"),
        TabBarTabText => Some("TabBar"),
        ShapedFrameContents => Some("Frame"),
        ToolBarHandle => Some("ToolBar"),
        ToolButtonLayoutItem => None,
    }
}

/// Group of a primitive element.
pub fn primitive_group(element: PrimitiveElement) -> Option<&'static str> {
    element.group()
}

/// Group of a control element.
pub fn control_group(element: ControlElement) -> Option<&'static str> {
    element.group()
}

/// Group of a complex control.
pub fn complex_control_group(control: ComplexControl) -> Option<&'static str> {
    control.group()
}

/// Group of a contents type.
pub fn contents_group(contents: ContentsType) -> Option<&'static str> {
    contents.group()
}

/// Group of a sub-element.
pub fn sub_element_group(element: SubElement) -> Option<&'static str> {
    element.group()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buttons_share_a_group() {
        assert_eq!(primitive_group(PrimitiveElement::PanelButtonCommand), Some("PushButton"));
        assert_eq!(control_group(ControlElement::PushButtonLabel), Some("PushButton"));
        assert_eq!(contents_group(ContentsType::ComboBox), Some("PushButton"));
    }

    #[test]
    fn unthemed_roles_have_no_group() {
        assert_eq!(primitive_group(PrimitiveElement::PanelWidget), None);
        assert_eq!(complex_control_group(ComplexControl::MdiControls), None);
        assert_eq!(sub_element_group(SubElement::ToolButtonLayoutItem), None);
    }

    #[test]
    fn focus_rects_use_the_frame_group() {
        for e in [
            SubElement::PushButtonFocusRect,
            SubElement::CheckBoxFocusRect,
            SubElement::RadioButtonFocusRect,
            SubElement::ComboBoxFocusRect,
            SubElement::SliderFocusRect,
            SubElement::ItemViewItemFocusRect,
        ] {
            assert_eq!(e.group(), Some("Frame"), "{e:?}");
        }
    }

    #[test]
    fn group_names_are_identifiers() {
        let names = PrimitiveElement::ALL
            .iter()
            .filter_map(|e| e.group())
            .chain(ControlElement::ALL.iter().filter_map(|e| e.group()))
            .chain(ComplexControl::ALL.iter().filter_map(|e| e.group()))
            .chain(ContentsType::ALL.iter().filter_map(|e| e.group()))
            .chain(SubElement::ALL.iter().filter_map(|e| e.group()));
        for name in names {
            assert!(!name.is_empty());
            assert!(name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'), "{name}");
        }
    }
}
