use std::path::Path;

/// Load and validate a world file, then print a short summary of its content.
pub fn run(world: Option<&Path>) -> Result<(), String> {
    let world = super::load_world(world)?;

    println!("  All checks passed for '{}'.", world.meta.title);
    println!(
        "  {} rooms, {} items, {} events",
        world.room_count(),
        world.item_count(),
        world.events.len()
    );

    Ok(())
}
