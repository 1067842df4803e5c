mod leafref;
mod loader;
mod renderer;
mod symbols;

pub use leafref::{compact_target, type_label};
pub use loader::{LoadError, ModuleLoader};
pub use renderer::TreeRenderer;
pub use symbols::{access_flags, status_marker, Mode};
