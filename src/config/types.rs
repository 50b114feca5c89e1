// Configuration type definitions

use serde::Deserialize;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Letters bound to the calculator functions that have no symbol key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct KeysConfig {
    #[serde(default = "default_square_root_key")]
    pub square_root: char,
    #[serde(default = "default_square_key")]
    pub square: char,
    #[serde(default = "default_toggle_sign_key")]
    pub toggle_sign: char,
}

fn default_square_root_key() -> char {
    'r'
}

fn default_square_key() -> char {
    's'
}

fn default_toggle_sign_key() -> char {
    'n'
}

/// Characters already bound to digits, operators and app controls
const RESERVED_KEYS: &str = "0123456789.+-*/^=%()q?";

impl Default for KeysConfig {
    fn default() -> Self {
        KeysConfig {
            square_root: default_square_root_key(),
            square: default_square_key(),
            toggle_sign: default_toggle_sign_key(),
        }
    }
}

impl KeysConfig {
    /// Check that the bindings are distinct and do not shadow built-in keys
    pub fn validate(&self) -> Result<(), String> {
        let bindings = [
            ("square_root", self.square_root),
            ("square", self.square),
            ("toggle_sign", self.toggle_sign),
        ];

        for (name, key) in bindings {
            let lower = key.to_ascii_lowercase();
            if RESERVED_KEYS.contains(lower) {
                return Err(format!("keys.{name} = '{key}' is already bound"));
            }
            if key.is_whitespace() || key.is_control() {
                return Err(format!("keys.{name} must be a printable character"));
            }
        }

        for (i, (name, key)) in bindings.iter().enumerate() {
            for (other, other_key) in &bindings[i + 1..] {
                if key.eq_ignore_ascii_case(other_key) {
                    return Err(format!("keys.{name} and keys.{other} share '{key}'"));
                }
            }
        }

        Ok(())
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub clipboard: ClipboardConfig,
    #[serde(default)]
    pub keys: KeysConfig,
}
