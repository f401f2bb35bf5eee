pub mod console;
pub mod delete;
pub mod events;
pub mod guests;
pub mod new;
pub mod show;
