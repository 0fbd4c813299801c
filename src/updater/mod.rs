pub mod declaration;
pub mod version_updater;

pub use declaration::{DeclarationPattern, VersionMatch};
pub use version_updater::VersionUpdater;
