//! # Spec store
//!
//! In-memory groups of a theme (or palette) with inheritance-aware lookup.
//!
//! A part of a group is resolved in this order:
//!
//! 1. the group's own table;
//! 2. the part-level `inherits` group, then the group-level `inherits`
//!    group, each resolved the same way;
//! 3. the parent store (the built-in theme when a user theme is loaded),
//!    queried for the same group name;
//! 4. the hardcoded defaults of the resolved spec type.
//!
//! Step 2 follows at most [MAX_INHERITANCE_DEPTH] links and never visits a
//! group twice, so cyclic or very deep chains end quietly.

use std::sync::Arc;

use indexmap::IndexMap;

use crate::specs::{
    ColorConfig, ColorSpec, ElementSpec, FrameConfig, FrameSpec, GroupConfig, IndicatorConfig,
    IndicatorSpec, InteriorConfig, InteriorSpec, LabelConfig, LabelSpec, PartConfig, SizeConfig,
    SizeSpec,
};

/// Maximum number of `inherits` links followed from a group.
pub const MAX_INHERITANCE_DEPTH: usize = 2;

/// Access to resolved specs by group name.
pub trait SpecProvider {
    /// Resolved frame of `group`.
    fn frame_spec(&self, group: &str) -> FrameSpec;
    /// Resolved interior of `group`.
    fn interior_spec(&self, group: &str) -> InteriorSpec;
    /// Resolved indicator of `group`.
    fn indicator_spec(&self, group: &str) -> IndicatorSpec;
    /// Resolved label layout of `group`.
    fn label_spec(&self, group: &str) -> LabelSpec;
    /// Resolved size constraints of `group`.
    fn size_spec(&self, group: &str) -> SizeSpec;
    /// Resolved palette overlay of `group`.
    fn color_spec(&self, group: &str) -> ColorSpec;

    /// Every resolved spec of `group` at once.
    fn element_spec(&self, group: &str) -> ElementSpec {
        ElementSpec {
            inherits: None,
            frame: self.frame_spec(group),
            interior: self.interior_spec(group),
            indicator: self.indicator_spec(group),
            label: self.label_spec(group),
            size: self.size_spec(group),
            color: self.color_spec(group),
        }
    }
}

/// Named groups plus an optional parent store.
#[derive(Debug, Clone, Default)]
pub struct SpecStore {
    groups: IndexMap<String, GroupConfig>,
    parent: Option<Arc<SpecStore>>,
}

impl SpecStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from parsed groups.
    pub fn from_groups(groups: IndexMap<String, GroupConfig>) -> Self {
        Self {
            groups,
            parent: None,
        }
    }

    /// Set the store consulted when a group cannot resolve a field itself.
    pub fn with_parent(mut self, parent: Arc<SpecStore>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The parent store, if any.
    pub fn parent(&self) -> Option<&Arc<SpecStore>> {
        self.parent.as_ref()
    }

    /// Insert or replace a group.
    pub fn insert(&mut self, name: impl Into<String>, group: GroupConfig) {
        self.groups.insert(name.into(), group);
    }

    /// Raw table of a group, without inheritance.
    pub fn group(&self, name: &str) -> Option<&GroupConfig> {
        self.groups.get(name)
    }

    /// Whether the group is defined here or in a parent store.
    pub fn contains(&self, name: &str) -> bool {
        self.groups.contains_key(name) || self.parent.as_ref().is_some_and(|p| p.contains(name))
    }

    /// Group names in file order.
    pub fn group_names(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    /// Number of groups defined directly in this store.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Whether this store defines no group itself.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The group-level `inherits` key of a group.
    pub fn inherits(&self, name: &str) -> Option<&str> {
        self.groups.get(name).and_then(|g| g.inherits.as_deref())
    }

    /// Merge a part of `group` through its inheritance chain and the parent store.
    pub fn resolve<C: PartConfig>(&self, group: &str) -> C {
        let mut visited = Vec::new();
        let mut config: C = self.merged(group, 0, &mut visited);
        if let Some(parent) = &self.parent {
            config.merge_from(&parent.resolve::<C>(group));
        }
        config
    }

    fn merged<C: PartConfig>(&self, group: &str, depth: usize, visited: &mut Vec<String>) -> C {
        if visited.iter().any(|g| g == group) {
            log::debug!("inheritance cycle through group '{}'", group);
            return C::default();
        }
        visited.push(group.to_string());

        let Some(table) = self.groups.get(group) else {
            return C::default();
        };
        let own = C::of(table);
        let mut config = own.cloned().unwrap_or_default();

        if depth >= MAX_INHERITANCE_DEPTH {
            return config;
        }

        let chain = [own.and_then(|c| c.inherits()), table.inherits.as_deref()];
        for inherited in chain.into_iter().flatten() {
            let fallback: C = self.merged(inherited, depth + 1, visited);
            config.merge_from(&fallback);
        }
        config
    }
}

impl SpecProvider for SpecStore {
    fn frame_spec(&self, group: &str) -> FrameSpec {
        FrameSpec::from_config(&self.resolve::<FrameConfig>(group))
    }

    fn interior_spec(&self, group: &str) -> InteriorSpec {
        InteriorSpec::from_config(&self.resolve::<InteriorConfig>(group))
    }

    fn indicator_spec(&self, group: &str) -> IndicatorSpec {
        IndicatorSpec::from_config(&self.resolve::<IndicatorConfig>(group))
    }

    fn label_spec(&self, group: &str) -> LabelSpec {
        LabelSpec::from_config(&self.resolve::<LabelConfig>(group))
    }

    fn size_spec(&self, group: &str) -> SizeSpec {
        SizeSpec::from_config(&self.resolve::<SizeConfig>(group))
    }

    fn color_spec(&self, group: &str) -> ColorSpec {
        ColorSpec::from_config(&self.resolve::<ColorConfig>(group))
    }

    fn element_spec(&self, group: &str) -> ElementSpec {
        ElementSpec {
            inherits: self.inherits(group).map(str::to_string),
            frame: self.frame_spec(group),
            interior: self.interior_spec(group),
            indicator: self.indicator_spec(group),
            label: self.label_spec(group),
            size: self.size_spec(group),
            color: self.color_spec(group),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(top: Option<i32>, inherits: Option<&str>) -> FrameConfig {
        FrameConfig {
            enabled: Some(true),
            top,
            inherits: inherits.map(str::to_string),
            ..Default::default()
        }
    }

    fn group(frame: FrameConfig, inherits: Option<&str>) -> GroupConfig {
        GroupConfig {
            inherits: inherits.map(str::to_string),
            frame: Some(frame),
            ..Default::default()
        }
    }

    #[test]
    fn own_value_wins() {
        let mut store = SpecStore::new();
        store.insert("Base", group(frame(Some(5), None), None));
        store.insert("Button", group(frame(Some(2), None), Some("Base")));
        assert_eq!(store.frame_spec("Button").top, 2);
    }

    #[test]
    fn part_inherits_before_group_inherits() {
        let mut store = SpecStore::new();
        store.insert("A", group(FrameConfig { left: Some(1), ..Default::default() }, None));
        store.insert("B", group(FrameConfig { left: Some(2), ..Default::default() }, None));
        store.insert(
            "C",
            group(
                FrameConfig {
                    enabled: Some(true),
                    inherits: Some("A".into()),
                    ..Default::default()
                },
                Some("B"),
            ),
        );
        assert_eq!(store.frame_spec("C").left, 1);
    }

    #[test]
    fn chain_stops_at_max_depth() {
        let mut store = SpecStore::new();
        store.insert("L3", group(frame(Some(30), None), None));
        store.insert("L2", group(FrameConfig::default(), Some("L3")));
        store.insert("L1", group(FrameConfig::default(), Some("L2")));
        store.insert("L0", group(frame(None, None), Some("L1")));

        // L0 -> L1 -> L2 are followed, L3 is one link too far.
        assert_eq!(store.resolve::<FrameConfig>("L0").top, None);
        assert_eq!(store.resolve::<FrameConfig>("L1").top, Some(30));
    }

    #[test]
    fn cycles_terminate() {
        let mut store = SpecStore::new();
        store.insert("A", group(frame(None, None), Some("B")));
        store.insert("B", group(FrameConfig { left: Some(3), ..Default::default() }, Some("A")));
        let spec = store.frame_spec("A");
        assert!(spec.has_frame);
        assert_eq!(spec.left, 3);
    }

    #[test]
    fn parent_store_fills_gaps() {
        let mut builtin = SpecStore::new();
        builtin.insert("PushButton", group(frame(Some(4), None), None));
        let mut user = SpecStore::new();
        user.insert(
            "PushButton",
            group(FrameConfig { element: Some("mybutton".into()), ..Default::default() }, None),
        );
        let user = user.with_parent(Arc::new(builtin));

        let spec = user.frame_spec("PushButton");
        assert!(spec.has_frame);
        assert_eq!(spec.element, "mybutton");
        assert_eq!(spec.top, 4);
        assert!(user.contains("PushButton"));
    }

    #[test]
    fn unknown_group_yields_defaults() {
        let store = SpecStore::new();
        assert!(!store.frame_spec("Nope").has_frame);
        assert!(store.interior_spec("Nope").has_interior);
        assert_eq!(store.indicator_spec("Nope").size, 15);
    }
}
