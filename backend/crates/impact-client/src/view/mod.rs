//! Views the controller renders into.
//!
//! A view owns the page regions (form, submit control, loading indicator,
//! list container, message area). The controller only talks to the
//! [`ProjectView`] trait, so any surface that can show and replace those
//! regions can be driven by it.

pub(crate) mod html_view;
pub(crate) mod list_content;
pub(crate) mod notice;
pub(crate) mod terminal_view;

pub use html_view::{HtmlDocument, HtmlView};
pub use list_content::{LOAD_FAILED_MESSAGE, ListContent, NO_PROJECTS_MESSAGE};
pub use notice::{Notice, NoticeKind};
pub use terminal_view::TerminalView;

/// Page regions the controller writes into.
///
/// Methods take `&self`: flows may overlap, and each region is overwritten
/// wholesale, so implementations keep their state behind interior mutability.
pub trait ProjectView: Send + Sync + 'static {
    /// Disable or re-enable the submit control
    fn set_submitting(&self, submitting: bool);

    /// Show or hide the loading indicator
    fn set_loading(&self, visible: bool);

    /// Replace the list region
    fn show_list(&self, content: &ListContent);

    /// Replace the message region
    fn show_notice(&self, notice: &Notice);

    /// Hide the message region
    fn hide_notice(&self);

    /// Reset the form fields
    fn clear_form(&self);
}
