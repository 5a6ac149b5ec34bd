use crate::settings::MAX_HEALTH;
use crate::world::World;

/// Check a dataset for internal consistency.
///
/// Returns one human-readable line per problem; an empty list means the
/// world is safe to play.
pub fn validate_world(world: &World) -> Vec<String> {
    let mut problems = Vec::new();

    if world.room_count() == 0 {
        problems.push("world has no rooms".to_string());
    }

    if !world.has_room(&world.meta.start_room) {
        problems.push(format!(
            "start_room '{}' not found among rooms",
            world.meta.start_room
        ));
    }

    for (room_id, room) in world.rooms() {
        for item in &room.items {
            check_item_name(&mut problems, &format!("room '{room_id}' item"), item);
        }

        for (direction, target) in &room.exits {
            if !world.has_room(target) {
                problems.push(format!(
                    "room '{room_id}' exit '{direction}' targets missing room '{target}'"
                ));
            }
        }

        if room
            .trap
            .as_ref()
            .is_some_and(|trap| trap.damage.is_some_and(|d| d <= 0))
        {
            problems.push(format!("room '{room_id}' trap damage must be positive"));
        }

        if let Some(puzzle) = &room.puzzle {
            if puzzle.answer.trim().is_empty() {
                problems.push(format!("room '{room_id}' puzzle has an empty answer"));
            }
            if puzzle.reward.trim().is_empty() {
                problems.push(format!("room '{room_id}' puzzle has an empty reward"));
            } else {
                check_item_name(
                    &mut problems,
                    &format!("room '{room_id}' puzzle reward"),
                    &puzzle.reward,
                );
            }
        }
    }

    for (item_id, item) in world.items() {
        check_item_name(&mut problems, "item", item_id);

        let required = item
            .winning_effect
            .as_ref()
            .and_then(|e| e.requires_room.as_deref());
        if let Some(room) = required.filter(|room| !world.has_room(room)) {
            problems.push(format!(
                "item '{item_id}' winning effect requires missing room '{room}'"
            ));
        }
    }

    let settings = &world.settings;
    if !(1..=MAX_HEALTH).contains(&settings.max_health) {
        problems.push(format!(
            "settings.max_health must be between 1 and {MAX_HEALTH}"
        ));
    }
    if settings.trap_damage <= 0 {
        problems.push("settings.trap_damage must be positive".to_string());
    }
    for (name, value) in [
        ("trap_chance", settings.trap_chance),
        ("random_event_chance", settings.random_event_chance),
    ] {
        if !(0.0..=1.0).contains(&value) {
            problems.push(format!("settings.{name} must be between 0 and 1"));
        }
    }

    problems
}

/// Player input is lowercased and split on whitespace, so an item name is
/// only reachable if it is already in that form.
fn normalized_name(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

fn check_item_name(problems: &mut Vec<String>, context: &str, name: &str) {
    let normalized = normalized_name(name);
    if normalized != name {
        problems.push(format!(
            "{context} '{name}' cannot be typed by the player; use '{normalized}'"
        ));
    }
}
