//! Text templates for rooms, inventory, health and outcomes.

use tm_core::Room;

/// Width of the thin separators around room and inventory headers.
pub const SEPARATOR_WIDTH: usize = 50;
/// Width of the heavy separators around banners.
pub const BANNER_WIDTH: usize = 60;

/// A line made of `ch` repeated `width` times.
pub fn separator(ch: char, width: usize) -> String {
    std::iter::repeat_n(ch, width).collect()
}

/// Frame a message between two heavy separators.
pub fn banner(text: &str) -> String {
    let rule = separator('=', BANNER_WIDTH);
    format!("{rule}\n{text}\n{rule}")
}

/// Describe a room: name, description, exits, items, puzzle and trap hints.
pub fn describe_room(room: &Room) -> String {
    let mut output = String::new();

    output.push_str(&separator('=', SEPARATOR_WIDTH));
    output.push_str(&format!("\n=== {} ===\n", room.name));
    output.push_str(&separator('-', SEPARATOR_WIDTH));
    output.push('\n');
    output.push_str(&room.description);

    if !room.exits.is_empty() {
        let exits: Vec<&str> = room.exits.keys().map(|d| d.name()).collect();
        output.push_str(&format!("\n\nВыходы: {}", exits.join(", ")));
    }

    if !room.items.is_empty() {
        output.push_str(&format!("\nПредметы: {}", room.items.join(", ")));
    }

    if room.has_puzzle() {
        output.push_str("\nЗдесь есть загадка!");
    }

    if room.has_trap() {
        output.push_str("\nОсторожно! Здесь могут быть ловушки!");
    }

    output
}

/// List the carried items, numbered from 1.
pub fn describe_inventory(items: &[String]) -> String {
    let mut output = format!(
        "{}\nИНВЕНТАРЬ\n{}",
        separator('=', SEPARATOR_WIDTH),
        separator('-', SEPARATOR_WIDTH)
    );

    if items.is_empty() {
        output.push_str("\nИнвентарь пуст.");
    } else {
        for (i, item) in items.iter().enumerate() {
            output.push_str(&format!("\n{}. {}", i + 1, item));
        }
    }

    output
}

/// Render health as a bar of `max` slots.
///
/// Filled slots equal the current health, clamped to `0..=max`, so a
/// negative health still renders as an empty bar of full width.
pub fn health_bar(health: i32, max: i32) -> String {
    let max = max.max(0);
    let filled = health.clamp(0, max);
    let empty = max - filled;
    format!(
        "Здоровье: {}{} ({}/{})",
        "[*]".repeat(filled as usize),
        "[ ]".repeat(empty as usize),
        filled,
        max
    )
}

/// Render the command reference.
pub fn help_text(lines: &[String]) -> String {
    let mut output = format!(
        "{}\nСПРАВКА ПО КОМАНДАМ\n{}",
        separator('=', SEPARATOR_WIDTH),
        separator('-', SEPARATOR_WIDTH)
    );
    for line in lines {
        output.push_str(&format!("\n• {line}"));
    }
    output
}
