/// Markdown for a callout of type `name`, ready to paste into a note
pub fn callout_template(name: &str) -> String {
    format!("> [!{name}] Title\n> Contents")
}
