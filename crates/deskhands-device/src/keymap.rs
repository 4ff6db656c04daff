//! Key name normalization.
//!
//! Agents name keys loosely ("Enter", "ctrl", "Cmd+Shift+P"). The mapper
//! turns those names into backend [`KeyCode`]s. Resolution order for one
//! name, first hit wins:
//!
//! 1. exact canonical name
//! 2. case-insensitive canonical name
//! 3. numeric key-code value
//! 4. alias table (case-insensitive)

use deskhands_protocols::{ActionError, KeyCode};
use std::fmt;
use tracing::warn;

#[derive(Debug, Clone, Copy)]
enum AliasTarget {
    Key(KeyCode),
    /// The platform's command key: Cmd on macOS, Meta elsewhere.
    Command,
}

const ALIASES: &[(&str, AliasTarget)] = &[
    ("Enter", AliasTarget::Key(KeyCode::Return)),
    ("Ctrl", AliasTarget::Key(KeyCode::LeftControl)),
    ("Control", AliasTarget::Key(KeyCode::LeftControl)),
    ("Cmd", AliasTarget::Command),
    ("Command", AliasTarget::Command),
    ("Win", AliasTarget::Command),
    ("Windows", AliasTarget::Command),
    ("Meta", AliasTarget::Command),
    ("Super", AliasTarget::Key(KeyCode::LeftSuper)),
    ("Alt", AliasTarget::Key(KeyCode::LeftAlt)),
    ("Option", AliasTarget::Key(KeyCode::LeftAlt)),
    ("Shift", AliasTarget::Key(KeyCode::LeftShift)),
    ("Esc", AliasTarget::Key(KeyCode::Escape)),
    ("Del", AliasTarget::Key(KeyCode::Delete)),
    ("PgUp", AliasTarget::Key(KeyCode::PageUp)),
    ("PgDn", AliasTarget::Key(KeyCode::PageDown)),
    ("ArrowUp", AliasTarget::Key(KeyCode::Up)),
    ("ArrowDown", AliasTarget::Key(KeyCode::Down)),
    ("ArrowLeft", AliasTarget::Key(KeyCode::Left)),
    ("ArrowRight", AliasTarget::Key(KeyCode::Right)),
    ("Space", AliasTarget::Key(KeyCode::Space)),
    ("Tab", AliasTarget::Key(KeyCode::Tab)),
    ("Up", AliasTarget::Key(KeyCode::Up)),
    ("Down", AliasTarget::Key(KeyCode::Down)),
    ("Left", AliasTarget::Key(KeyCode::Left)),
    ("Right", AliasTarget::Key(KeyCode::Right)),
    ("Delete", AliasTarget::Key(KeyCode::Delete)),
    ("CapsLock", AliasTarget::Key(KeyCode::CapsLock)),
    ("Backspace", AliasTarget::Key(KeyCode::Backspace)),
];

/// An ordered set of keys pressed and released together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombo {
    keys: Vec<KeyCode>,
}

impl KeyCombo {
    pub fn new(keys: Vec<KeyCode>) -> Self {
        Self { keys }
    }

    pub fn keys(&self) -> &[KeyCode] {
        &self.keys
    }

    /// More than one key.
    pub fn is_chord(&self) -> bool {
        self.keys.len() > 1
    }
}

impl fmt::Display for KeyCombo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.keys.iter().map(|k| k.name()).collect();
        f.write_str(&names.join("+"))
    }
}

/// Maps agent key names to backend key codes.
#[derive(Debug, Clone)]
pub struct KeyMapper {
    command_key: KeyCode,
}

impl KeyMapper {
    /// Mapper for a platform identifier (`macos`, `windows`, `linux`, ...).
    pub fn new(platform: &str) -> Self {
        let command_key = if platform == "macos" {
            KeyCode::LeftCmd
        } else {
            KeyCode::LeftMeta
        };
        Self { command_key }
    }

    /// Resolve a single key name. Unmapped names are logged and yield `None`.
    pub fn resolve(&self, name: &str) -> Option<KeyCode> {
        let name = name.trim();
        if name.is_empty() {
            warn!("Empty key name");
            return None;
        }

        let key = KeyCode::from_name(name)
            .or_else(|| KeyCode::from_name_ignore_case(name))
            .or_else(|| name.parse::<u32>().ok().and_then(KeyCode::from_code))
            .or_else(|| self.alias(name));

        if key.is_none() {
            warn!("Key {} not mapped", name);
        }
        key
    }

    /// Resolve a key spec such as `"Enter"` or `"Ctrl+Shift+P"`.
    ///
    /// Fails on the first unmapped segment, so no partial chord is ever pressed.
    pub fn resolve_combo(&self, spec: &str) -> Result<KeyCombo, ActionError> {
        let spec = spec.trim();
        let segments: Vec<&str> = if spec.find('+').is_some_and(|idx| idx > 0) {
            spec.split('+').map(str::trim).collect()
        } else {
            vec![spec]
        };

        let keys = segments
            .into_iter()
            .map(|segment| {
                self.resolve(segment)
                    .ok_or_else(|| ActionError::UnmappedKey(spec.to_string()))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(KeyCombo::new(keys))
    }

    /// Every alias with the key code it resolves to on this platform.
    pub fn aliases(&self) -> impl Iterator<Item = (&'static str, KeyCode)> + '_ {
        ALIASES
            .iter()
            .map(move |(alias, target)| (*alias, self.alias_target(*target)))
    }

    fn alias(&self, name: &str) -> Option<KeyCode> {
        ALIASES
            .iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(name))
            .map(|(_, target)| self.alias_target(*target))
    }

    fn alias_target(&self, target: AliasTarget) -> KeyCode {
        match target {
            AliasTarget::Key(key) => key,
            AliasTarget::Command => self.command_key,
        }
    }
}

impl Default for KeyMapper {
    fn default() -> Self {
        Self::new(std::env::consts::OS)
    }
}

#[cfg(test)]
#[path = "keymap_tests.rs"]
mod tests;
