use serde::{Deserialize, Serialize};

/// Player-facing message templates.
///
/// `{item}` in a template is replaced with the item name. Every field has a
/// built-in default, so a custom dataset only needs to override what it
/// wants to change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Messages {
    /// Shown once before the first room.
    pub welcome: String,
    /// Prompt before each command.
    pub command_prompt: String,
    /// Prompt before a puzzle answer.
    pub answer_prompt: String,
    /// Unknown verb.
    pub invalid_command: String,
    /// Bad or unavailable direction.
    pub invalid_direction: String,
    /// `go` without a direction.
    pub missing_direction: String,
    /// `take` or `use` without an item name.
    pub missing_item: String,
    /// `take` of something not in the room.
    pub no_item: String,
    /// `use` of something not in the inventory.
    pub not_in_inventory: String,
    /// `use` of something with no item definition.
    pub unknown_item: String,
    /// `solve` in a room without a riddle.
    pub no_puzzle: String,
    /// `solve` in a room whose riddle is already solved.
    pub already_solved: String,
    /// Correct puzzle answer.
    pub puzzle_solved: String,
    /// Wrong puzzle answer.
    pub puzzle_failed: String,
    /// A trap fired.
    pub trap_triggered: String,
    /// Death banner.
    pub game_over: String,
    /// Victory banner.
    pub victory: String,
    /// Farewell after `quit`.
    pub game_ended: String,
    /// Any command after the game ended.
    pub game_finished: String,
    /// Input that is not valid UTF-8.
    pub encoding_error: String,
    /// Hint shown after an encoding error.
    pub invalid_characters: String,
    /// The session was interrupted.
    pub interrupted: String,
    /// Input ended without `quit`.
    pub input_closed: String,
    /// Unexpected failure while processing a turn.
    pub turn_failed: String,
    /// Prefix for "did you mean" hints.
    pub suggestion: String,
    /// Summary headline after a win.
    pub victory_summary: String,
    /// Summary headline after death.
    pub death_summary: String,
    /// Summary headline after quitting, end of input or an interrupt.
    pub farewell: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            welcome: "Добро пожаловать в Лабиринт сокровищ! Найдите сокровище и выберитесь живым."
                .to_string(),
            command_prompt: "Введите команду: ".to_string(),
            answer_prompt: "Ваш ответ: ".to_string(),
            invalid_command: "Неизвестная команда. Введите 'help' для справки.".to_string(),
            invalid_direction: "Туда пройти нельзя.".to_string(),
            missing_direction:
                "Укажите направление. Например: go north, go south, go east, go west".to_string(),
            missing_item: "Укажите предмет. Например: take факел".to_string(),
            no_item: "Такого предмета здесь нет.".to_string(),
            not_in_inventory: "У вас нет предмета '{item}'".to_string(),
            unknown_item: "Неизвестный предмет '{item}'".to_string(),
            no_puzzle: "Здесь нет загадки.".to_string(),
            already_solved: "Вы уже решили эту загадку.".to_string(),
            puzzle_solved: "Загадка решена!".to_string(),
            puzzle_failed: "Неправильный ответ. Попробуйте еще раз.".to_string(),
            trap_triggered: "Вы попали в ловушку!".to_string(),
            game_over: "ИГРА ОКОНЧЕНА. Лабиринт оказался сильнее.".to_string(),
            victory: "ПОБЕДА! Сокровище ваше!".to_string(),
            game_ended: "Вы покидаете лабиринт. Игра завершена.".to_string(),
            game_finished: "Игра уже закончена.".to_string(),
            encoding_error: "Не удалось прочитать ввод.".to_string(),
            invalid_characters: "Используйте только корректные символы UTF-8.".to_string(),
            interrupted: "Игра прервана пользователем.".to_string(),
            input_closed: "Игра завершена.".to_string(),
            turn_failed: "Произошла ошибка. Ход отменён, попробуйте снова.".to_string(),
            suggestion: "Возможно, вы имели в виду".to_string(),
            victory_summary: "Поздравляем с победой!".to_string(),
            death_summary: "Игра окончена.".to_string(),
            farewell: "До свидания!".to_string(),
        }
    }
}

impl Messages {
    /// Fill the `{item}` placeholder of a template.
    pub fn with_item(template: &str, item: &str) -> String {
        template.replace("{item}", item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_placeholder_is_filled() {
        let messages = Messages::default();
        assert_eq!(
            Messages::with_item(&messages.not_in_inventory, "ключ"),
            "У вас нет предмета 'ключ'"
        );
    }

    #[test]
    fn overrides_merge_with_defaults() {
        let messages: Messages =
            serde_json::from_str(r#"{ "victory": "You win!" }"#).unwrap();
        assert_eq!(messages.victory, "You win!");
        assert_eq!(messages.answer_prompt, "Ваш ответ: ");
    }
}
