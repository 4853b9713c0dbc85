mod update;

pub use update::{handle_update_command, update_platform, UpdateReport};
