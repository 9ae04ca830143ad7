//! Terminal host for gloss-panel.
//!
//! Stands in for a browser page: the selection comes from the command line
//! (or stdin), the "panel" prints its markup to stdout.
//!
//!   gloss-panel define serendipity
//!   echo "bonjour tout le monde" | gloss-panel translate
//!   gloss-panel commands
//!   gloss-panel set-key <API_KEY>

use gloss_panel_lib::commands::{register_operations, CommandHost};
use gloss_panel_lib::llm::GeminiClient;
use gloss_panel_lib::panel::PanelSurface;
use gloss_panel_lib::prompts::shortcut::Shortcut;
use gloss_panel_lib::prompts::Operation;
use gloss_panel_lib::selection::{ActiveElement, DocumentSelection, PageHost, Placement, Viewport};
use gloss_panel_lib::{settings, Outcome, Workflow};
use std::io::Read;
use std::process::ExitCode;

const USAGE: &str = "usage: gloss-panel <define|translate|improve> [text...]
       gloss-panel commands
       gloss-panel set-key <API_KEY>";

/// Viewport reported to the placement step; a terminal has no pixels.
const TERMINAL_VIEWPORT: Viewport = Viewport {
    width: 1280.0,
    height: 800.0,
};

/// The whole argument text is the "document selection", with no range box.
struct TerminalPage {
    text: String,
}

impl PageHost for TerminalPage {
    fn active_element(&self) -> ActiveElement {
        ActiveElement::Other
    }

    fn document_selection(&self) -> DocumentSelection {
        DocumentSelection {
            text: self.text.clone(),
            range_rects: Vec::new(),
        }
    }

    fn viewport(&self) -> Viewport {
        TERMINAL_VIEWPORT
    }
}

struct TerminalPanel;

impl PanelSurface for TerminalPanel {
    fn show(&self) {}

    fn hide(&self) {}

    fn set_content(&self, markup: &str) {
        println!("{}\n", markup);
    }

    fn set_placement(&self, placement: &Placement) {
        log::debug!("[PANEL] {}", placement.to_css());
    }
}

struct PrintingHost;

impl CommandHost for PrintingHost {
    fn register_command(&mut self, label: &str, operation: Operation) {
        println!("{:<10} {}", operation.name(), label);
    }

    fn register_shortcut(&mut self, _shortcut: &Shortcut, _operation: Operation) {}
}

#[tokio::main]
async fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some(command) = args.first() else {
        eprintln!("{}", USAGE);
        return ExitCode::FAILURE;
    };

    if command == "set-key" {
        let Some(key) = args.get(1) else {
            eprintln!("{}", USAGE);
            return ExitCode::FAILURE;
        };
        env_logger::init();
        return match settings::save_api_key(key) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("{}", e);
                ExitCode::FAILURE
            }
        };
    }

    let settings = gloss_panel_lib::bootstrap();

    if command == "commands" {
        let count = register_operations(&mut PrintingHost, settings.as_ref());
        return if count > 0 {
            ExitCode::SUCCESS
        } else {
            eprintln!("No API key configured. Set {} or run `gloss-panel set-key`.", settings::API_KEY_ENV);
            ExitCode::FAILURE
        };
    }

    let Some(operation) = Operation::from_name(command) else {
        eprintln!("Unknown operation '{}'\n{}", command, USAGE);
        return ExitCode::FAILURE;
    };
    let Some(settings) = settings else {
        eprintln!("No API key configured. Set {} or run `gloss-panel set-key`.", settings::API_KEY_ENV);
        return ExitCode::FAILURE;
    };

    let text = if args.len() > 1 {
        args[1..].join(" ")
    } else {
        let mut buf = String::new();
        if let Err(e) = std::io::stdin().read_to_string(&mut buf) {
            eprintln!("Failed to read stdin: {}", e);
            return ExitCode::FAILURE;
        }
        buf
    };

    let workflow = Workflow::new(&settings, GeminiClient::from_settings(&settings), TerminalPanel);
    match workflow.run(&TerminalPage { text }, operation).await {
        Outcome::Rendered => ExitCode::SUCCESS,
        Outcome::NoSelection => {
            eprintln!("Nothing to {}: input is empty.", operation.name());
            ExitCode::FAILURE
        }
        Outcome::Superseded => ExitCode::FAILURE,
    }
}
