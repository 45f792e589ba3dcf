//! FAQ accordion state: loaded entries, filters, and per-item open flags.
//!
//! DESIGN
//! ======
//! One owned struct replaces the page-global arrays and flags. The page holds
//! it in an `RwSignal`; every mutation goes through a method here so the
//! visibility and open-state rules stay testable without a browser. Methods
//! that should touch the address fragment return a [`FragmentChange`] for the
//! caller to apply instead of writing it themselves.

#[cfg(test)]
#[path = "faq_test.rs"]
mod faq_test;

use std::collections::{BTreeSet, HashSet};

use crate::net::types::FaqEntry;
use crate::util::date::format_short_es;
use crate::util::sanitize::{escape_text, html_to_text};

pub const EXPAND_ALL_LABEL: &str = "Expandir todo";
pub const COLLAPSE_ALL_LABEL: &str = "Contraer todo";
const EMPTY_ANSWER_HTML: &str = "<p>—</p>";

/// Free-text query plus selected categories.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub query: String,
    pub categories: BTreeSet<String>,
}

impl FilterState {
    /// Category filter AND text filter.
    #[must_use]
    pub fn matches(&self, entry: &FaqEntry) -> bool {
        let category_ok = self.categories.is_empty()
            || entry.category.as_ref().is_some_and(|c| self.categories.contains(c));
        if !category_ok {
            return false;
        }
        let needle = self.query.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        let haystack = format!("{} {}", entry.question, html_to_text(&entry.answer)).to_lowercase();
        haystack.contains(&needle)
    }
}

/// Lifecycle of the initial load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Loading,
    Ready,
    Failed,
}

/// Address-fragment side effect requested by a toggle.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FragmentChange {
    Set(String),
    Clear,
}

/// Category chip as rendered in the filter bar.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterChip {
    pub label: String,
    pub pressed: bool,
}

/// Render-ready description of one accordion item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FaqItemView {
    pub key: String,
    pub button_id: String,
    pub panel_id: String,
    /// Escaped question, category badge, and update date.
    pub header_html: String,
    /// Answer markup, inserted verbatim.
    pub answer_html: String,
}

#[derive(Clone, Debug, Default)]
pub struct FaqState {
    pub entries: Vec<FaqEntry>,
    pub filter: FilterState,
    pub status: LoadStatus,
    /// Anchor keys of currently open items.
    pub open: HashSet<String>,
    /// Last known address fragment, without the leading `#`.
    pub fragment: String,
}

impl FaqState {
    #[must_use]
    pub fn new(fragment: &str) -> Self {
        Self { fragment: fragment.to_owned(), ..Self::default() }
    }

    /// Replace entries after a successful load and rebuild the list.
    pub fn load(&mut self, entries: Vec<FaqEntry>) {
        self.entries = entries;
        self.status = LoadStatus::Ready;
        self.rebuild();
    }

    /// Record a failed load; the list is cleared.
    pub fn fail(&mut self) {
        self.entries.clear();
        self.open.clear();
        self.status = LoadStatus::Failed;
    }

    /// Entries passing the current filter, in load order.
    #[must_use]
    pub fn visible(&self) -> Vec<&FaqEntry> {
        self.entries.iter().filter(|e| e.published && self.filter.matches(e)).collect()
    }

    #[must_use]
    pub fn is_empty_result(&self) -> bool {
        self.status == LoadStatus::Ready && self.visible().is_empty()
    }

    /// Distinct non-empty categories, sorted.
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.entries
            .iter()
            .filter_map(|e| e.category.as_deref())
            .filter(|c| !c.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(str::to_owned)
            .collect()
    }

    #[must_use]
    pub fn chips(&self) -> Vec<FilterChip> {
        self.categories()
            .into_iter()
            .map(|label| {
                let pressed = self.filter.categories.contains(&label);
                FilterChip { label, pressed }
            })
            .collect()
    }

    pub fn set_query(&mut self, query: &str) {
        self.filter.query = query.to_owned();
        self.rebuild();
    }

    pub fn toggle_category(&mut self, category: &str) {
        if !self.filter.categories.remove(category) {
            self.filter.categories.insert(category.to_owned());
        }
        self.rebuild();
    }

    /// Re-derive open state from the fragment: at most the first visible
    /// item whose anchor equals it starts open.
    pub fn rebuild(&mut self) {
        self.open.clear();
        if self.fragment.is_empty() {
            return;
        }
        let hit = self.visible().into_iter().map(FaqEntry::anchor).find(|key| *key == self.fragment);
        if let Some(key) = hit {
            self.open.insert(key);
        }
    }

    /// React to a fragment change coming from outside the page (links,
    /// history navigation). Writes the page made itself are ignored.
    pub fn apply_fragment(&mut self, fragment: &str) {
        if fragment == self.fragment {
            return;
        }
        fragment.clone_into(&mut self.fragment);
        self.rebuild();
    }

    #[must_use]
    pub fn is_open(&self, key: &str) -> bool {
        self.open.contains(key)
    }

    /// Flip one item. Opening points the fragment at it; closing the item the
    /// fragment points at clears the fragment.
    pub fn toggle_item(&mut self, key: &str) -> Option<FragmentChange> {
        if self.open.remove(key) {
            if self.fragment == key {
                self.fragment.clear();
                return Some(FragmentChange::Clear);
            }
            return None;
        }
        self.open.insert(key.to_owned());
        key.clone_into(&mut self.fragment);
        Some(FragmentChange::Set(key.to_owned()))
    }

    /// True when at least one item is visible and every visible item is open.
    #[must_use]
    pub fn all_open(&self) -> bool {
        let visible = self.visible();
        !visible.is_empty() && visible.iter().all(|e| self.open.contains(&e.anchor()))
    }

    /// Open everything unless everything is already open, then close all.
    /// The fragment is left untouched.
    pub fn toggle_all(&mut self) {
        if self.all_open() {
            self.open.clear();
        } else {
            self.open = self.visible().into_iter().map(FaqEntry::anchor).collect();
        }
    }

    #[must_use]
    pub fn toggle_all_label(&self) -> &'static str {
        if self.all_open() { COLLAPSE_ALL_LABEL } else { EXPAND_ALL_LABEL }
    }

    /// View models for the visible items.
    #[must_use]
    pub fn item_views(&self) -> Vec<FaqItemView> {
        self.visible().into_iter().map(item_view).collect()
    }
}

#[must_use]
pub fn item_view(entry: &FaqEntry) -> FaqItemView {
    let key = entry.anchor();
    FaqItemView {
        button_id: format!("btn-{key}"),
        panel_id: format!("panel-{key}"),
        header_html: header_html(entry),
        answer_html: answer_html(&entry.answer),
        key,
    }
}

fn header_html(entry: &FaqEntry) -> String {
    let mut meta = String::new();
    if let Some(category) = entry.category.as_deref().filter(|c| !c.is_empty()) {
        meta.push_str(&format!(r#"<span class="badge">{}</span>"#, escape_text(category)));
    }
    if let Some(updated) = entry.updated_at.as_deref() {
        meta.push_str(&format!("<span>Actualizado: {}</span>", escape_text(&format_short_es(updated))));
    }
    format!(
        r#"<div class="faq-header"><div class="faq-q-text">{}</div><div class="faq-meta">{meta}</div></div>"#,
        escape_text(&entry.question)
    )
}

fn answer_html(answer: &str) -> String {
    let trimmed = answer.trim();
    if trimmed.is_empty() { EMPTY_ANSWER_HTML.to_owned() } else { trimmed.to_owned() }
}
