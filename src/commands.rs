//! Command surface registration.
//!
//! Each operation is offered to the host as a menu command labelled
//! `"<Command> (<shortcut>)"` and, when it has one, a global shortcut.
//! Nothing is registered without settings (no API key).

use crate::prompts::shortcut::Shortcut;
use crate::prompts::Operation;
use crate::settings::Settings;

/// Host-side command menu and shortcut binder.
pub trait CommandHost {
    fn register_command(&mut self, label: &str, operation: Operation);
    fn register_shortcut(&mut self, shortcut: &Shortcut, operation: Operation);
}

/// Register every operation with the host. Returns how many were registered.
pub fn register_operations(host: &mut impl CommandHost, settings: Option<&Settings>) -> usize {
    if settings.is_none() {
        log::warn!("[COMMANDS] No API key — no commands registered");
        return 0;
    }

    for operation in Operation::ALL {
        let definition = operation.definition();
        if let Some(shortcut) = definition.shortcut() {
            host.register_shortcut(&shortcut, operation);
        }
        let label = definition.command_label();
        log::info!("[COMMANDS] Registered: {}", label);
        host.register_command(&label, operation);
    }
    Operation::ALL.len()
}
