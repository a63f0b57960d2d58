//! Snippet stylesheet format
//!
//! Each record is persisted as one rule:
//!
//! ```css
//! .callout[data-callout="recipe"] {
//!   --callout-color: 200, 100, 0;
//!   --callout-icon: chef-hat;
//! }
//! ```
//!
//! followed by a single trailing rule that makes collapsible titles
//! clickable. Only this fixed shape is recognized; anything else in the file
//! is ignored when parsing and dropped on the next save.

use std::fmt::Write as _;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, warn};

use super::{CalloutRecord, Rgb};
use crate::constants::stylesheet::{COLOR_PROPERTY, ICON_PROPERTY, TRAILING_RULE};

static BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"\.callout\[data-callout="([A-Za-z0-9_-]+)"\]\s*\{([^}]*)\}"#)
        .expect("callout block pattern is valid")
});

static COLOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{COLOR_PROPERTY}:\s*([0-9]+,\s*[0-9]+,\s*[0-9]+)"))
        .expect("color property pattern is valid")
});

static ICON: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{ICON_PROPERTY}:\s*([A-Za-z0-9_-]+)"))
        .expect("icon property pattern is valid")
});

/// Extract every complete callout rule from `text`, in file order.
///
/// Properties may appear in any order inside the braces. A rule missing the
/// color or the icon produces no record. When a property is declared twice
/// the later declaration wins.
pub fn parse(text: &str) -> Vec<CalloutRecord> {
    let mut records = Vec::new();

    for block in BLOCK.captures_iter(text) {
        let name = &block[1];
        let body = &block[2];

        let color = COLOR.captures_iter(body).last().map(|c| c[1].to_string());
        let icon = ICON.captures_iter(body).last().map(|c| c[1].to_string());

        let (Some(color), Some(icon)) = (color, icon) else {
            debug!(callout = %name, "skipping callout rule without color and icon");
            continue;
        };

        match Rgb::parse_triple(&color) {
            Ok(rgb) => {
                if is_out_of_range(&color) {
                    warn!(
                        callout = %name,
                        color = %color,
                        clamped = %rgb.to_triple(),
                        "color component out of range, clamped to 255; the snippet will be rewritten with the clamped value on next save"
                    );
                }
                records.push(CalloutRecord::new(name, rgb, icon));
            }
            Err(err) => debug!(callout = %name, error = %err, "skipping callout rule with bad color"),
        }
    }

    records
}

/// Render the whole snippet file for `records`, in list order
pub fn serialize(records: &[CalloutRecord]) -> String {
    let mut out = String::new();
    for record in records {
        // Writing into a String cannot fail
        let _ = write!(
            out,
            ".callout[data-callout=\"{}\"] {{\n  {COLOR_PROPERTY}: {};\n  {ICON_PROPERTY}: {};\n}}\n\n",
            record.name,
            record.color.to_triple(),
            record.icon,
        );
    }
    out.push_str(TRAILING_RULE);
    out.push('\n');
    out
}

fn is_out_of_range(raw: &str) -> bool {
    raw.split(',').any(|c| c.trim().parse::<u8>().is_err())
}
