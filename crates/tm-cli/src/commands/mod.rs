pub mod check;
pub mod play;

use std::path::Path;

use tm_core::World;
use tracing::debug;

/// Load a world file, or the bundled maze when no path is given.
fn load_world(path: Option<&Path>) -> Result<World, String> {
    match path {
        Some(path) => {
            debug!(path = %path.display(), "loading world file");
            World::load(path).map_err(|e| e.to_string())
        }
        None => World::bundled().map_err(|e| e.to_string()),
    }
}
