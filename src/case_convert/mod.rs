//! camelCase ⇄ snake_case conversion.
//!
//! Both directions are a single left-to-right pass over the input with
//! non-overlapping windows; replaced text is never rescanned, so
//! `"a_b_c"` becomes `"aB_c"` and only a second pass yields `"aBC"`.
//!
//! The two directions are not inverses. Text that mixes both styles loses
//! information: `"my_varName"` → snake `"my_var_name"` → camel `"myVarName"`.
//!
//! # Sub-modules
//!
//! - [`camel`]: underscore + lowercase letter → uppercase letter
//! - [`snake`]: lowercase + uppercase letter pair → `lower_lower`

mod camel;
mod snake;


use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Target naming convention for a conversion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaseMode {
    /// snake_case → camelCase
    #[default]
    ToCamel,
    /// camelCase → snake_case
    ToSnake,
}

impl CaseMode {
    /// Resolve a mode from its short name.
    ///
    /// `"camel"` (also `"to_camel"` / `"tocamel"`, any case) selects
    /// [`CaseMode::ToCamel`]; every other string selects [`CaseMode::ToSnake`].
    pub fn from_name(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "camel" | "to_camel" | "tocamel" => CaseMode::ToCamel,
            _ => CaseMode::ToSnake,
        }
    }

    /// Short name, accepted back by [`CaseMode::from_name`].
    pub fn name(&self) -> &'static str {
        match self {
            CaseMode::ToCamel => "camel",
            CaseMode::ToSnake => "snake",
        }
    }

    /// All modes in display order.
    pub fn all() -> &'static [CaseMode] {
        &[CaseMode::ToCamel, CaseMode::ToSnake]
    }
}

impl fmt::Display for CaseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Convert `input` to the naming convention selected by `mode`.
///
/// Returns the input borrowed when no window matched, so callers can cheaply
/// tell whether anything changed.
pub fn convert(input: &str, mode: CaseMode) -> Cow<'_, str> {
    match mode {
        CaseMode::ToCamel => camel::to_camel(input),
        CaseMode::ToSnake => snake::to_snake(input),
    }
}

/// Stateful front end over [`convert`] for callers that set a mode once and
/// convert several inputs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CaseConverter {
    mode: CaseMode,
}

impl CaseConverter {
    pub fn new(mode: CaseMode) -> Self {
        Self { mode }
    }

    pub fn mode(&self) -> CaseMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: CaseMode) {
        self.mode = mode;
    }

    /// Set the mode from its short name; unknown names select [`CaseMode::ToSnake`].
    pub fn set_mode_name(&mut self, name: &str) {
        self.mode = CaseMode::from_name(name);
    }

    pub fn convert<'a>(&self, input: &'a str) -> Cow<'a, str> {
        convert(input, self.mode)
    }
}
