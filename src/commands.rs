//! User-triggerable commands and their context-menu layout.
//!
//! Each command converts toward one [`CaseMode`]. Hosts register the ids
//! below with their command system and bind chords to them through the
//! keybinding config.

use crate::case_convert::CaseMode;
use camelsnake_config::defaults::{TO_CAMEL_ACTION, TO_SNAKE_ACTION};
use std::fmt;

/// The commands this plugin contributes to the host editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CaseCommand {
    ToCamel,
    ToSnake,
}

impl CaseCommand {
    /// Stable id used for registration and keybindings.
    pub fn id(&self) -> &'static str {
        match self {
            Self::ToCamel => TO_CAMEL_ACTION,
            Self::ToSnake => TO_SNAKE_ACTION,
        }
    }

    /// Title shown in menus and command palettes.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ToCamel => "Convert camelCase",
            Self::ToSnake => "Convert snakeCase",
        }
    }

    pub fn mode(&self) -> CaseMode {
        match self {
            Self::ToCamel => CaseMode::ToCamel,
            Self::ToSnake => CaseMode::ToSnake,
        }
    }

    pub fn for_mode(mode: CaseMode) -> Self {
        match mode {
            CaseMode::ToCamel => Self::ToCamel,
            CaseMode::ToSnake => Self::ToSnake,
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::all().iter().copied().find(|command| command.id() == id)
    }

    /// All commands in menu order.
    pub fn all() -> &'static [CaseCommand] {
        &[Self::ToCamel, Self::ToSnake]
    }
}

impl fmt::Display for CaseCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.title())
    }
}

/// One entry of the editor context menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Divider,
    Command(CaseCommand),
}

/// Context-menu entries: the commands fenced by dividers, or nothing when disabled.
pub fn context_menu(enabled: bool) -> Vec<MenuItem> {
    if !enabled {
        return Vec::new();
    }

    let mut items = Vec::with_capacity(CaseCommand::all().len() + 2);
    items.push(MenuItem::Divider);
    items.extend(CaseCommand::all().iter().copied().map(MenuItem::Command));
    items.push(MenuItem::Divider);
    items
}
