//! Demo window body and the secondary windows it opens.

pub mod message_box;
pub mod palette_editor;
pub mod widget_catalogue;
