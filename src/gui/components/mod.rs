pub mod callout_browser;
pub mod callout_editor;
pub mod callout_list;

pub use callout_browser::CalloutBrowser;
pub use callout_editor::{CalloutEditor, EditorAction};
pub use callout_list::{CalloutList, ListAction};
