//! Keyboard shortcut specs like `ctrlcmd-g d`.
//!
//! A spec is a whitespace-separated sequence of key combos; each combo is
//! `-`-joined modifiers followed by a key. `ctrlcmd` means Cmd on macOS and
//! Ctrl everywhere else.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Modifier {
    CtrlCmd,
    Ctrl,
    Cmd,
    Alt,
    Shift,
}

impl Modifier {
    fn parse(token: &str) -> Option<Modifier> {
        match token.to_ascii_lowercase().as_str() {
            "ctrlcmd" => Some(Modifier::CtrlCmd),
            "ctrl" | "c" => Some(Modifier::Ctrl),
            "cmd" | "meta" | "m" => Some(Modifier::Cmd),
            "alt" | "a" => Some(Modifier::Alt),
            "shift" | "s" => Some(Modifier::Shift),
            _ => None,
        }
    }

    fn repr(self) -> &'static str {
        match self {
            Modifier::CtrlCmd if cfg!(target_os = "macos") => "Cmd",
            Modifier::CtrlCmd => "Ctrl",
            Modifier::Ctrl => "Ctrl",
            Modifier::Cmd => "Cmd",
            Modifier::Alt => "Alt",
            Modifier::Shift => "Shift",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub modifiers: Vec<Modifier>,
    pub key: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Shortcut {
    pub combos: Vec<KeyCombo>,
}

#[derive(Debug, Error, PartialEq)]
pub enum ShortcutError {
    #[error("empty shortcut")]
    Empty,
    #[error("unknown modifier '{0}'")]
    UnknownModifier(String),
    #[error("missing key in '{0}'")]
    MissingKey(String),
}

impl Shortcut {
    pub fn parse(spec: &str) -> Result<Shortcut, ShortcutError> {
        let combos = spec
            .split_whitespace()
            .map(parse_combo)
            .collect::<Result<Vec<_>, _>>()?;
        if combos.is_empty() {
            return Err(ShortcutError::Empty);
        }
        Ok(Shortcut { combos })
    }

    /// Display form for menus, e.g. `Ctrl-g d`.
    pub fn repr(&self) -> String {
        self.combos
            .iter()
            .map(|combo| {
                let mut parts: Vec<&str> = combo.modifiers.iter().map(|m| m.repr()).collect();
                parts.push(&combo.key);
                parts.join("-")
            })
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn parse_combo(token: &str) -> Result<KeyCombo, ShortcutError> {
    // A trailing `-` is the minus key itself, e.g. `ctrl--`.
    let (head, key) = match token.strip_suffix("--") {
        Some(head) => (head, "-"),
        None => match token.rsplit_once('-') {
            Some((head, key)) => (head, key),
            None => ("", token),
        },
    };
    if key.is_empty() {
        return Err(ShortcutError::MissingKey(token.to_string()));
    }

    let modifiers = head
        .split('-')
        .filter(|m| !m.is_empty())
        .map(|m| Modifier::parse(m).ok_or_else(|| ShortcutError::UnknownModifier(m.to_string())))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(KeyCombo {
        modifiers,
        key: key.to_ascii_lowercase(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_step_sequence() {
        let shortcut = Shortcut::parse("ctrlcmd-g d").unwrap();
        assert_eq!(shortcut.combos.len(), 2);
        assert_eq!(shortcut.combos[0].modifiers, vec![Modifier::CtrlCmd]);
        assert_eq!(shortcut.combos[0].key, "g");
        assert!(shortcut.combos[1].modifiers.is_empty());
        assert_eq!(shortcut.combos[1].key, "d");
    }

    #[test]
    fn repr_uses_platform_modifier() {
        let repr = Shortcut::parse("ctrlcmd-g t").unwrap().repr();
        if cfg!(target_os = "macos") {
            assert_eq!(repr, "Cmd-g t");
        } else {
            assert_eq!(repr, "Ctrl-g t");
        }
    }

    #[test]
    fn minus_key_is_allowed() {
        let shortcut = Shortcut::parse("shift--").unwrap();
        assert_eq!(shortcut.combos[0].key, "-");
        assert_eq!(shortcut.combos[0].modifiers, vec![Modifier::Shift]);
    }

    #[test]
    fn rejects_bad_specs() {
        assert_eq!(Shortcut::parse("   "), Err(ShortcutError::Empty));
        assert_eq!(
            Shortcut::parse("hyper-x"),
            Err(ShortcutError::UnknownModifier("hyper".to_string()))
        );
        assert_eq!(
            Shortcut::parse("ctrl-"),
            Err(ShortcutError::MissingKey("ctrl-".to_string()))
        );
    }
}
