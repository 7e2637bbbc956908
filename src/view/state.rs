//! View state and command handlers.

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::content::{Block, Course, TabGroupKind};

use super::MIN_FILTER_LEN;

/// Number of animation ticks a card reveal takes to complete.
pub const REVEAL_FRAMES: u8 = 6;

/// Interactive content item the keyboard cursor can land on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item {
    /// Expandable layer block.
    Layer { block: usize },
    /// One checklist entry.
    Check { block: usize, item: usize },
    /// Code listing (select-to-copy).
    Code { block: usize },
}

/// Active-tab state for one `Tabs` block.
#[derive(Debug, Clone)]
pub struct TabBlockState {
    /// Block index within the section.
    pub block: usize,
    pub group: TabGroupKind,
    /// Tab keys in authored order.
    pub keys: Vec<String>,
    /// Index of the active tab. Exactly one per group by construction.
    pub active: usize,
}

/// Per-section metadata derived once from the course document.
#[derive(Debug, Clone)]
struct SectionMeta {
    id: String,
    /// Lowercased full text, matched against by the search filter.
    search_text: String,
    /// Cursor targets in display order.
    items: Vec<Item>,
    checklist_items: usize,
}

/// The whole mutable state of the viewer, independent of any rendering
/// framework. Command methods absorb "target not found" conditions as
/// no-ops and never panic on unknown ids or indices.
pub struct ViewState {
    metas: Vec<SectionMeta>,
    active: usize,
    visible: Vec<bool>,
    /// Tab states per section, one entry per `Tabs` block.
    tabs: Vec<Vec<TabBlockState>>,
    /// The single expanded layer, if any, as (section, block).
    expanded_layer: Option<(usize, usize)>,
    checked: HashSet<(usize, usize, usize)>,
    selected_code: Option<(usize, usize)>,
    filter: Option<String>,
    cursor: usize,
    scroll: u16,
    scroll_target: u16,
    /// Card reveal progress per (section, block). Presence means the card
    /// has been seen; reveals are one-shot and never removed.
    reveal: HashMap<(usize, usize), u8>,
}

impl ViewState {
    pub fn new(course: &Course) -> Self {
        let metas = course
            .sections
            .iter()
            .map(|section| {
                let mut items = Vec::new();
                let mut checklist_items = 0;
                for (block_idx, block) in section.blocks.iter().enumerate() {
                    match block {
                        Block::Layer { .. } => items.push(Item::Layer { block: block_idx }),
                        Block::Checklist { items: entries } => {
                            checklist_items += entries.len();
                            for item_idx in 0..entries.len() {
                                items.push(Item::Check {
                                    block: block_idx,
                                    item: item_idx,
                                });
                            }
                        }
                        Block::Code { .. } => items.push(Item::Code { block: block_idx }),
                        _ => {}
                    }
                }
                SectionMeta {
                    id: section.id.clone(),
                    search_text: section.full_text().to_lowercase(),
                    items,
                    checklist_items,
                }
            })
            .collect::<Vec<_>>();

        let tabs = course
            .sections
            .iter()
            .map(|section| {
                section
                    .blocks
                    .iter()
                    .enumerate()
                    .filter_map(|(block_idx, block)| match block {
                        Block::Tabs { group, tabs } => Some(TabBlockState {
                            block: block_idx,
                            group: *group,
                            keys: tabs.iter().map(|t| t.key.clone()).collect(),
                            active: 0,
                        }),
                        _ => None,
                    })
                    .collect()
            })
            .collect();

        let count = metas.len();
        Self {
            metas,
            active: 0,
            visible: vec![true; count],
            tabs,
            expanded_layer: None,
            checked: HashSet::new(),
            selected_code: None,
            filter: None,
            cursor: 0,
            scroll: 0,
            scroll_target: 0,
            reveal: HashMap::new(),
        }
    }

    // --- sections ---

    pub fn section_count(&self) -> usize {
        self.metas.len()
    }

    pub fn active_section(&self) -> usize {
        self.active
    }

    pub fn active_section_id(&self) -> &str {
        self.metas
            .get(self.active)
            .map(|m| m.id.as_str())
            .unwrap_or("")
    }

    /// Id of the section at `index`, if in range.
    pub fn section_id(&self, index: usize) -> Option<&str> {
        self.metas.get(index).map(|m| m.id.as_str())
    }

    /// Whether the section passes the current search filter.
    pub fn is_visible(&self, section: usize) -> bool {
        self.visible.get(section).copied().unwrap_or(false)
    }

    /// Progress through the course, derived from the active section's
    /// position: `round((index + 1) / total * 100)`.
    pub fn progress_percent(&self) -> u8 {
        let total = self.metas.len().max(1);
        (((self.active + 1) as f64 / total as f64) * 100.0).round() as u8
    }

    /// Activates the section with the given id. Unknown ids leave the
    /// state untouched. Returns whether the id matched, so the caller can
    /// persist the change.
    pub fn select_section(&mut self, id: &str) -> bool {
        match self.metas.iter().position(|m| m.id == id) {
            Some(index) => {
                self.select_index(index);
                true
            }
            None => false,
        }
    }

    fn select_index(&mut self, index: usize) {
        self.active = index;
        self.cursor = 0;
        self.selected_code = None;
        // Content viewport resets to top on every section change.
        self.scroll = 0;
        self.scroll_target = 0;
        debug!("course progress: {}%", self.progress_percent());
    }

    /// Advances to the next section, wrapping at the end.
    pub fn next_section(&mut self) {
        if !self.metas.is_empty() {
            let next = (self.active + 1) % self.metas.len();
            self.select_index(next);
        }
    }

    /// Moves to the previous section, wrapping at the start.
    pub fn prev_section(&mut self) {
        if !self.metas.is_empty() {
            let prev = if self.active == 0 {
                self.metas.len() - 1
            } else {
                self.active - 1
            };
            self.select_index(prev);
        }
    }

    // --- tab groups ---

    /// Tab states of a section, for rendering.
    pub fn section_tabs(&self, section: usize) -> &[TabBlockState] {
        self.tabs.get(section).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Active tab index of one `Tabs` block.
    pub fn active_tab(&self, section: usize, block: usize) -> Option<usize> {
        self.tabs
            .get(section)?
            .iter()
            .find(|t| t.block == block)
            .map(|t| t.active)
    }

    /// Activates the tab with the given key within one `Tabs` block.
    /// Other blocks and sections are untouched. Unknown targets are a
    /// no-op. Returns whether the key matched.
    pub fn select_tab(&mut self, section: usize, block: usize, key: &str) -> bool {
        let Some(tab_block) = self
            .tabs
            .get_mut(section)
            .and_then(|blocks| blocks.iter_mut().find(|t| t.block == block))
        else {
            return false;
        };
        match tab_block.keys.iter().position(|k| k == key) {
            Some(index) => {
                tab_block.active = index;
                true
            }
            None => false,
        }
    }

    /// Cycles the first tab group of the given kind in the active section.
    pub fn cycle_tab(&mut self, group: TabGroupKind) -> bool {
        let Some(tab_block) = self
            .tabs
            .get_mut(self.active)
            .and_then(|blocks| blocks.iter_mut().find(|t| t.group == group))
        else {
            return false;
        };
        if tab_block.keys.is_empty() {
            return false;
        }
        tab_block.active = (tab_block.active + 1) % tab_block.keys.len();
        true
    }

    // --- layers ---

    /// Flips the expansion of one layer. Expanding a layer collapses any
    /// other expanded layer, course-wide.
    pub fn toggle_layer(&mut self, section: usize, block: usize) {
        let is_layer = self
            .metas
            .get(section)
            .is_some_and(|m| m.items.contains(&Item::Layer { block }));
        if !is_layer {
            return;
        }
        let target = (section, block);
        self.expanded_layer = if self.expanded_layer == Some(target) {
            None
        } else {
            Some(target)
        };
    }

    pub fn is_layer_expanded(&self, section: usize, block: usize) -> bool {
        self.expanded_layer == Some((section, block))
    }

    // --- checklists ---

    /// Flips one checklist entry and reports overall assessment progress.
    pub fn toggle_checklist(&mut self, section: usize, block: usize, item: usize) {
        let valid = self
            .metas
            .get(section)
            .is_some_and(|m| m.items.contains(&Item::Check { block, item }));
        if !valid {
            return;
        }
        let key = (section, block, item);
        if !self.checked.insert(key) {
            self.checked.remove(&key);
        }
        let total: usize = self.metas.iter().map(|m| m.checklist_items).sum();
        debug!("assessment progress: {}/{} items checked", self.checked.len(), total);
    }

    pub fn is_checked(&self, section: usize, block: usize, item: usize) -> bool {
        self.checked.contains(&(section, block, item))
    }

    // --- code selection ---

    /// Toggles select-for-copy on a code block.
    pub fn toggle_code_selected(&mut self, section: usize, block: usize) {
        let target = (section, block);
        self.selected_code = if self.selected_code == Some(target) {
            None
        } else {
            Some(target)
        };
    }

    pub fn is_code_selected(&self, section: usize, block: usize) -> bool {
        self.selected_code == Some((section, block))
    }

    // --- item cursor ---

    /// The interactive item under the cursor in the active section.
    pub fn cursor_item(&self) -> Option<Item> {
        self.metas
            .get(self.active)?
            .items
            .get(self.cursor)
            .copied()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    fn active_item_count(&self) -> usize {
        self.metas.get(self.active).map_or(0, |m| m.items.len())
    }

    pub fn cursor_next(&mut self) {
        let count = self.active_item_count();
        if count > 0 {
            self.cursor = (self.cursor + 1) % count;
        }
    }

    pub fn cursor_prev(&mut self) {
        let count = self.active_item_count();
        if count > 0 {
            self.cursor = if self.cursor == 0 { count - 1 } else { self.cursor - 1 };
        }
    }

    /// Activates the item under the cursor.
    pub fn activate_cursor(&mut self) {
        let section = self.active;
        match self.cursor_item() {
            Some(Item::Layer { block }) => self.toggle_layer(section, block),
            Some(Item::Check { block, item }) => self.toggle_checklist(section, block, item),
            Some(Item::Code { block }) => self.toggle_code_selected(section, block),
            None => {}
        }
    }

    // --- search filter ---

    /// Applies a case-insensitive substring filter over each section's
    /// full text. Terms shorter than two characters clear the filter and
    /// show everything. The active section is never changed by filtering.
    pub fn apply_filter(&mut self, term: &str) {
        let term = term.to_lowercase();
        if term.len() < MIN_FILTER_LEN {
            self.filter = None;
            self.visible.fill(true);
            return;
        }
        for (index, meta) in self.metas.iter().enumerate() {
            self.visible[index] = meta.search_text.contains(&term);
        }
        self.filter = Some(term);
    }

    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    // --- viewport scrolling ---

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Sets the smooth-scroll target; the offset eases toward it on ticks.
    pub fn scroll_to(&mut self, target: u16) {
        self.scroll_target = target;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        let target = self.scroll_target as i32 + delta;
        self.scroll_target = target.clamp(0, u16::MAX as i32) as u16;
    }

    /// Advances the eased scroll animation one frame. Returns whether the
    /// offset moved.
    pub fn tick_scroll(&mut self) -> bool {
        if self.scroll == self.scroll_target {
            return false;
        }
        let diff = self.scroll_target as i32 - self.scroll as i32;
        let step = (diff.abs() / 3).max(1);
        if diff > 0 {
            self.scroll += step as u16;
        } else {
            self.scroll -= step as u16;
        }
        true
    }

    /// Clamps the scroll target to the rendered content height.
    pub fn clamp_scroll(&mut self, max: u16) {
        if self.scroll_target > max {
            self.scroll_target = max;
        }
        if self.scroll > max {
            self.scroll = max;
        }
    }

    // --- card reveals ---

    /// Marks a card as seen. The first call starts its fade-in; later
    /// calls are no-ops (reveals are one-shot).
    pub fn reveal_card(&mut self, section: usize, block: usize) {
        self.reveal.entry((section, block)).or_insert(0);
    }

    /// Reveal progress of a card in `0..=REVEAL_FRAMES`, or `None` if the
    /// card has not been scrolled into view yet.
    pub fn card_reveal(&self, section: usize, block: usize) -> Option<u8> {
        self.reveal.get(&(section, block)).copied()
    }

    /// Advances all in-progress reveals one frame. Returns whether any
    /// animation is still running.
    pub fn tick_reveals(&mut self) -> bool {
        let mut animating = false;
        for progress in self.reveal.values_mut() {
            if *progress < REVEAL_FRAMES {
                *progress += 1;
                animating = true;
            }
        }
        animating
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{Section, TabPanel};

    fn course3() -> Course {
        Course {
            title: "Test".to_string(),
            sections: vec![
                Section {
                    id: "intro".to_string(),
                    title: "Intro".to_string(),
                    blocks: vec![Block::Text {
                        body: "Database layer".to_string(),
                    }],
                },
                Section {
                    id: "design".to_string(),
                    title: "Design".to_string(),
                    blocks: vec![
                        Block::Text {
                            body: "UI layout".to_string(),
                        },
                        Block::Layer {
                            title: "Web tier".to_string(),
                            detail: "servlets".to_string(),
                        },
                        Block::Layer {
                            title: "Data tier".to_string(),
                            detail: "entities".to_string(),
                        },
                        Block::Tabs {
                            group: TabGroupKind::Feature,
                            tabs: vec![
                                TabPanel {
                                    key: "cdi".to_string(),
                                    label: "CDI".to_string(),
                                    body: "injection".to_string(),
                                },
                                TabPanel {
                                    key: "jpa".to_string(),
                                    label: "JPA".to_string(),
                                    body: "persistence".to_string(),
                                },
                            ],
                        },
                        Block::Tabs {
                            group: TabGroupKind::Example,
                            tabs: vec![
                                TabPanel {
                                    key: "servlet".to_string(),
                                    label: "Servlet".to_string(),
                                    body: "hello".to_string(),
                                },
                                TabPanel {
                                    key: "entity".to_string(),
                                    label: "Entity".to_string(),
                                    body: "user".to_string(),
                                },
                            ],
                        },
                    ],
                },
                Section {
                    id: "ops".to_string(),
                    title: "Ops".to_string(),
                    blocks: vec![],
                },
            ],
        }
    }

    #[test]
    fn test_select_section_activates_exactly_one() {
        let course = course3();
        let mut state = ViewState::new(&course);

        assert!(state.select_section("design"));
        assert_eq!(state.active_section(), 1);
        assert_eq!(state.active_section_id(), "design");
    }

    #[test]
    fn test_select_section_unknown_id_is_noop() {
        let course = course3();
        let mut state = ViewState::new(&course);
        state.select_section("design");
        state.scroll_to(5);

        assert!(!state.select_section("no-such-id"));
        assert_eq!(state.active_section_id(), "design");
        // Scroll target untouched by the failed call.
        state.tick_scroll();
        assert!(state.scroll() > 0);
    }

    #[test]
    fn test_select_section_is_idempotent() {
        let course = course3();
        let mut state = ViewState::new(&course);

        state.select_section("ops");
        let first = (state.active_section(), state.scroll(), state.cursor());
        state.select_section("ops");
        assert_eq!(
            (state.active_section(), state.scroll(), state.cursor()),
            first
        );
    }

    #[test]
    fn test_select_section_resets_scroll() {
        let course = course3();
        let mut state = ViewState::new(&course);
        state.scroll_to(40);
        while state.tick_scroll() {}
        assert!(state.scroll() > 0);

        state.select_section("design");
        assert_eq!(state.scroll(), 0);
        assert!(!state.tick_scroll());
    }

    #[test]
    fn test_next_section_wraps_from_last_to_first() {
        let course = course3();
        let mut state = ViewState::new(&course);

        state.select_section("ops");
        state.next_section();
        assert_eq!(state.active_section_id(), "intro");
    }

    #[test]
    fn test_prev_section_wraps_from_first_to_last() {
        let course = course3();
        let mut state = ViewState::new(&course);

        state.prev_section();
        assert_eq!(state.active_section_id(), "ops");
    }

    #[test]
    fn test_progress_percent() {
        let course = course3();
        let mut state = ViewState::new(&course);

        assert_eq!(state.progress_percent(), 33);
        state.select_section("design");
        assert_eq!(state.progress_percent(), 67);
        state.select_section("ops");
        assert_eq!(state.progress_percent(), 100);
    }

    #[test]
    fn test_select_tab_exclusive_within_group() {
        let course = course3();
        let mut state = ViewState::new(&course);

        assert!(state.select_tab(1, 3, "jpa"));
        assert_eq!(state.active_tab(1, 3), Some(1));
        // Other group in the same section unaffected.
        assert_eq!(state.active_tab(1, 4), Some(0));
    }

    #[test]
    fn test_select_tab_unknown_key_is_noop() {
        let course = course3();
        let mut state = ViewState::new(&course);

        assert!(!state.select_tab(1, 3, "nope"));
        assert_eq!(state.active_tab(1, 3), Some(0));
        // Non-tabs block index is also a no-op.
        assert!(!state.select_tab(1, 0, "cdi"));
    }

    #[test]
    fn test_cycle_tab_wraps() {
        let course = course3();
        let mut state = ViewState::new(&course);
        state.select_section("design");

        assert!(state.cycle_tab(TabGroupKind::Feature));
        assert_eq!(state.active_tab(1, 3), Some(1));
        assert!(state.cycle_tab(TabGroupKind::Feature));
        assert_eq!(state.active_tab(1, 3), Some(0));
        // No feature tabs in the intro section.
        state.select_section("intro");
        assert!(!state.cycle_tab(TabGroupKind::Feature));
    }

    #[test]
    fn test_at_most_one_layer_expanded() {
        let course = course3();
        let mut state = ViewState::new(&course);

        state.toggle_layer(1, 1);
        assert!(state.is_layer_expanded(1, 1));

        // Expanding another layer collapses the first.
        state.toggle_layer(1, 2);
        assert!(state.is_layer_expanded(1, 2));
        assert!(!state.is_layer_expanded(1, 1));

        // Toggling the expanded layer collapses it.
        state.toggle_layer(1, 2);
        assert!(!state.is_layer_expanded(1, 2));
    }

    #[test]
    fn test_toggle_layer_ignores_non_layer_blocks() {
        let course = course3();
        let mut state = ViewState::new(&course);

        state.toggle_layer(1, 0); // text block
        state.toggle_layer(9, 0); // section out of range
        assert!(!state.is_layer_expanded(1, 0));
    }

    #[test]
    fn test_filter_hides_non_matching_sections() {
        let course = course3();
        let mut state = ViewState::new(&course);

        state.apply_filter("db");
        assert!(state.is_visible(0)); // "Database layer"
        assert!(!state.is_visible(1)); // "UI layout"
        assert!(!state.is_visible(2));

        state.apply_filter("");
        assert!(state.is_visible(0));
        assert!(state.is_visible(1));
        assert!(state.is_visible(2));
    }

    #[test]
    fn test_filter_is_case_insensitive_and_min_length() {
        let course = course3();
        let mut state = ViewState::new(&course);

        state.apply_filter("DATABASE");
        assert!(state.is_visible(0));
        assert!(!state.is_visible(1));

        // Single character clears the filter.
        state.apply_filter("d");
        assert!(state.is_visible(1));
        assert_eq!(state.filter(), None);
    }

    #[test]
    fn test_filter_does_not_change_active_section() {
        let course = course3();
        let mut state = ViewState::new(&course);
        state.select_section("design");

        state.apply_filter("database");
        assert_eq!(state.active_section_id(), "design");
        assert!(!state.is_visible(1));
    }

    #[test]
    fn test_checklist_toggle_round_trip() {
        let course = Course::sample();
        let mut state = ViewState::new(&course);
        let section = course.section_index("assessment").unwrap();

        state.toggle_checklist(section, 1, 0);
        assert!(state.is_checked(section, 1, 0));
        state.toggle_checklist(section, 1, 0);
        assert!(!state.is_checked(section, 1, 0));

        // Out-of-range item is absorbed.
        state.toggle_checklist(section, 1, 99);
        assert!(!state.is_checked(section, 1, 99));
    }

    #[test]
    fn test_cursor_walks_interactive_items() {
        let course = course3();
        let mut state = ViewState::new(&course);
        state.select_section("design");

        assert_eq!(state.cursor_item(), Some(Item::Layer { block: 1 }));
        state.cursor_next();
        assert_eq!(state.cursor_item(), Some(Item::Layer { block: 2 }));
        state.cursor_next();
        // Wraps back to the first item.
        assert_eq!(state.cursor_item(), Some(Item::Layer { block: 1 }));

        state.activate_cursor();
        assert!(state.is_layer_expanded(1, 1));
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let course = course3();
        let mut state = ViewState::new(&course);

        assert_eq!(state.card_reveal(0, 0), None);
        state.reveal_card(0, 0);
        while state.tick_reveals() {}
        assert_eq!(state.card_reveal(0, 0), Some(REVEAL_FRAMES));

        // Re-revealing does not restart the animation.
        state.reveal_card(0, 0);
        assert_eq!(state.card_reveal(0, 0), Some(REVEAL_FRAMES));
    }

    #[test]
    fn test_smooth_scroll_eases_to_target() {
        let course = course3();
        let mut state = ViewState::new(&course);

        state.scroll_to(30);
        let mut frames = 0;
        while state.tick_scroll() {
            frames += 1;
            assert!(frames < 100, "scroll animation did not converge");
        }
        assert_eq!(state.scroll(), 30);
        // More than one frame: animated, not jumped.
        assert!(frames > 1);
    }
}
