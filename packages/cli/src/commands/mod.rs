pub mod init;
pub mod note;
pub mod render;

pub use init::{init, InitArgs};
pub use note::{note, NoteArgs};
pub use render::{render, RenderArgs};
