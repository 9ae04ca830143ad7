//! gloss-panel — select text, pick an operation, read the answer in a panel.
//!
//! This file only wires modules together and performs startup.
//! The host application supplies the page, the panel and the command menu
//! through the traits in `selection`, `panel` and `commands`.
//!
//! Modules:
//!   - selection  — selection reader + panel placement
//!   - prompts    — operation catalog (define / translate / improve)
//!   - llm        — model client
//!   - pipeline   — per-invocation workflow
//!   - commands   — command menu + shortcut registration
//!   - settings   — API key + overrides

pub mod commands;
pub mod llm;
pub mod markup;
pub mod panel;
pub mod pipeline;
pub mod prompts;
pub mod selection;
pub mod settings;

pub use pipeline::{Outcome, Workflow, WorkflowState};
pub use settings::Settings;

/// Startup: load `.env.local` → `.env`, init logging, load settings.
///
/// Returns `None` when no API key is available; the host should then
/// register nothing.
pub fn bootstrap() -> Option<Settings> {
    'env_load: for env_file in [".env.local", ".env"] {
        let path = std::path::Path::new(env_file);
        if path.exists() {
            match dotenvy::from_path(path) {
                Ok(_) => eprintln!("[STARTUP] Loaded {}", path.display()),
                Err(e) => eprintln!("[STARTUP] Failed to load {}: {}", path.display(), e),
            }
            break 'env_load;
        }
    }

    env_logger::init();
    log::info!("gloss-panel starting up");

    Settings::load()
}
