pub mod changelog;
pub mod common;
pub mod config;
pub mod diff;
pub mod mod_updates;
pub mod mods;
pub mod release_notes;

pub use changelog::Changelog;
pub use common::CommandOptions;
pub use config::Config;
pub use diff::Diff;
pub use mod_updates::ModUpdates;
pub use mods::Mods;
pub use release_notes::ReleaseNotes;
