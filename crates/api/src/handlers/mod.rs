pub mod categories;
pub mod scenes;
