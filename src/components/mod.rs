pub mod copy_button;
pub mod feedback_form;
pub mod header;
pub mod reveal;
pub mod terminal;
