//! Callout records and their stylesheet representation
//!
//! - **color**: [`Rgb`] and the triple/hex conversions used by the editors
//! - **stylesheet**: `parse`/`serialize` between records and snippet text
//! - **template**: ready-to-paste callout markup

pub mod color;
pub mod stylesheet;
pub mod template;

pub use color::Rgb;

/// One custom callout: the type name, its accent color and the icon it shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalloutRecord {
    pub name: String,
    pub color: Rgb,
    pub icon: String,
}

impl CalloutRecord {
    pub fn new(name: impl Into<String>, color: Rgb, icon: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            color,
            icon: icon.into(),
        }
    }

    /// Case-insensitive substring match on name or icon; an empty term matches
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.to_lowercase();
        self.name.to_lowercase().contains(&term) || self.icon.to_lowercase().contains(&term)
    }
}

/// Records matching `term`, in list order
pub fn search<'a>(records: &'a [CalloutRecord], term: &str) -> Vec<&'a CalloutRecord> {
    records.iter().filter(|r| r.matches_search(term)).collect()
}
