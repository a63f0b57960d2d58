//! Icon coloring rules derived from the record list
//!
//! The cache is a pure function of the records: every refresh throws the old
//! rules away and rebuilds them. Lists are user-curated and small, so there
//! is no diffing.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use tracing::debug;

use crate::callout::{CalloutRecord, Rgb};

/// How one callout's icon preview is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconRule {
    pub color: Rgb,
    pub icon: String,
}

impl IconRule {
    /// Stylesheet rule coloring the preview for callout `name`
    pub fn css(&self, name: &str) -> String {
        format!(
            ".callout-icon-{name} svg {{ color: rgb({}); }}",
            self.color.to_triple()
        )
    }
}

#[derive(Debug, Default, Clone)]
pub struct PresentationCache {
    rules: BTreeMap<String, IconRule>,
}

impl PresentationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every rule with one per record name; later records override earlier ones
    pub fn build(&mut self, records: &[CalloutRecord]) {
        self.rules.clear();
        for record in records {
            self.rules.insert(
                record.name.clone(),
                IconRule {
                    color: record.color,
                    icon: record.icon.clone(),
                },
            );
        }
        debug!(records = records.len(), rules = self.rules.len(), "rebuilt icon rules");
    }

    /// Same as [`build`](Self::build); called after every mutation
    pub fn refresh(&mut self, records: &[CalloutRecord]) {
        self.build(records);
    }

    pub fn rule(&self, name: &str) -> Option<&IconRule> {
        self.rules.get(name)
    }

    pub fn color_for(&self, name: &str) -> Option<Rgb> {
        self.rules.get(name).map(|rule| rule.color)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// All rules as one stylesheet, ordered by name
    pub fn stylesheet(&self) -> String {
        let mut css = String::new();
        for (name, rule) in &self.rules {
            let _ = writeln!(css, "{}", rule.css(name));
        }
        css
    }
}
