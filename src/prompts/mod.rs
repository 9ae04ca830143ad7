//! Operation catalog — the define / translate / improve templates.
//!
//! Each operation is a static `OperationDefinition`: three pure views over
//! a `QueryContext`. The loading and result views return HTML for the
//! panel body; the prompt view returns the text sent to the model.
//!
//! Prompt wording is the contract with the model. Keep it verbatim.

pub mod shortcut;

use crate::markup::{render_markdown, safe_html};
use shortcut::Shortcut;

pub const DEFAULT_LOCALE: &str = "en";
pub const DEFAULT_ALTERNATE_LOCALE: &str = "zh";

/// Per-invocation state: what was selected and what the model said.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryContext {
    pub locale: String,
    pub alternate_locale: String,
    pub input: String,
    pub output: String,
}

impl QueryContext {
    pub fn new(locale: &str, alternate_locale: &str, input: &str) -> Self {
        Self {
            locale: locale.to_string(),
            alternate_locale: alternate_locale.to_string(),
            input: input.to_string(),
            output: String::new(),
        }
    }
}

/// The user-facing operations, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Define,
    Translate,
    Improve,
}

impl Operation {
    pub const ALL: [Operation; 3] = [Operation::Define, Operation::Translate, Operation::Improve];

    pub fn definition(self) -> &'static OperationDefinition {
        match self {
            Operation::Define => &DEFINE,
            Operation::Translate => &TRANSLATE,
            Operation::Improve => &IMPROVE,
        }
    }

    pub fn name(self) -> &'static str {
        self.definition().name
    }

    /// Look up an operation by its short name (`define`, `translate`, `improve`).
    pub fn from_name(name: &str) -> Option<Operation> {
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(name))
    }
}

/// A pure projection of the context to markup or prompt text.
pub type View = fn(&QueryContext) -> String;

/// Static template bundle for one operation.
pub struct OperationDefinition {
    pub name: &'static str,
    /// Label shown in the host's command menu.
    pub command: &'static str,
    pub shortcut: Option<&'static str>,
    pub loading_view: View,
    pub prompt_view: View,
    pub result_view: View,
}

impl OperationDefinition {
    pub fn shortcut(&self) -> Option<Shortcut> {
        self.shortcut.and_then(|spec| match Shortcut::parse(spec) {
            Ok(shortcut) => Some(shortcut),
            Err(e) => {
                log::warn!("[COMMANDS] Bad shortcut for {}: {}", self.name, e);
                None
            }
        })
    }

    /// Menu label with the shortcut appended, e.g. `Gemini Define (Ctrl-g d)`.
    pub fn command_label(&self) -> String {
        match self.shortcut() {
            Some(shortcut) => format!("{} ({})", self.command, shortcut.repr()),
            None => self.command.to_string(),
        }
    }
}

static DEFINE: OperationDefinition = OperationDefinition {
    name: "define",
    command: "Gemini Define",
    shortcut: Some("ctrlcmd-g d"),
    loading_view: define_loading,
    prompt_view: define_prompt,
    result_view: define_result,
};

static TRANSLATE: OperationDefinition = OperationDefinition {
    name: "translate",
    command: "Gemini Translate",
    shortcut: Some("ctrlcmd-g t"),
    loading_view: translate_loading,
    prompt_view: translate_prompt,
    result_view: translate_result,
};

static IMPROVE: OperationDefinition = OperationDefinition {
    name: "improve",
    command: "Gemini Improve",
    shortcut: Some("ctrlcmd-g i"),
    loading_view: improve_loading,
    prompt_view: improve_prompt,
    result_view: improve_result,
};

/// JSON string literal of the input, quotes included.
fn quoted(input: &str) -> String {
    serde_json::Value::String(input.to_string()).to_string()
}

// ── define ─────────────────────────────────────────────────────────

fn define_loading(ctx: &QueryContext) -> String {
    render_markdown(&format!(
        "**Define:** {}\n\n*Asking model...*\n",
        safe_html(&ctx.input)
    ))
}

fn define_prompt(ctx: &QueryContext) -> String {
    format!(
        "Define the content below in locale {}. The output is a bullet list of definitions grouped by parts of speech in plain text. Each item contains IPA pronunciation, meaning, and up to 2 usage examples. Return nothing else. Content: {}",
        ctx.locale,
        quoted(&ctx.input)
    )
}

fn define_result(ctx: &QueryContext) -> String {
    render_markdown(&format!(
        "**Define:** {}\n\n{}\n",
        safe_html(&ctx.input),
        ctx.output
    ))
}

// ── translate ──────────────────────────────────────────────────────

fn translate_loading(ctx: &QueryContext) -> String {
    render_markdown(&format!(
        "**Translating by model...**\n\n{}\n",
        safe_html(&ctx.input)
    ))
}

fn translate_prompt(ctx: &QueryContext) -> String {
    format!(
        "Translate the content below into locale {locale}. Translate into {alternate} instead if it is already in {locale}. Return nothing else. Content: {content}",
        locale = ctx.locale,
        alternate = ctx.alternate_locale,
        content = quoted(&ctx.input)
    )
}

fn translate_result(ctx: &QueryContext) -> String {
    render_markdown(&format!(
        "**Translated by model**\n\n{}\n\n->\n\n{}\n",
        safe_html(&ctx.input),
        ctx.output
    ))
}

// ── improve ────────────────────────────────────────────────────────

fn improve_loading(ctx: &QueryContext) -> String {
    render_markdown(&format!(
        "**Improving by model...**\n\n{}\n",
        safe_html(&ctx.input)
    ))
}

fn improve_prompt(ctx: &QueryContext) -> String {
    format!(
        "Improve the content below in the same locale. Return nothing else. Content: {}",
        quoted(&ctx.input)
    )
}

fn improve_result(ctx: &QueryContext) -> String {
    render_markdown(&format!(
        "**Improved by model**\n\n{}\n\n->\n\n{}\n",
        safe_html(&ctx.input),
        ctx.output
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(input: &str) -> QueryContext {
        QueryContext::new(DEFAULT_LOCALE, DEFAULT_ALTERNATE_LOCALE, input)
    }

    #[test]
    fn define_prompt_quotes_input() {
        let prompt = (Operation::Define.definition().prompt_view)(&ctx("cat"));
        assert!(prompt.contains("\"cat\""));
        assert!(prompt.contains("bullet list of definitions"));
        assert!(prompt.contains("in locale en."));
    }

    #[test]
    fn prompt_input_is_json_escaped() {
        let prompt = (Operation::Improve.definition().prompt_view)(&ctx("say \"hi\"\nnow"));
        assert!(prompt.ends_with(r#"Content: "say \"hi\"\nnow""#));
    }

    #[test]
    fn translate_prompt_names_both_locales() {
        let prompt = (Operation::Translate.definition().prompt_view)(&ctx("bonjour"));
        assert!(prompt.starts_with("Translate the content below into locale en."));
        assert!(prompt.contains("Translate into zh instead if it is already in en."));
    }

    #[test]
    fn loading_views_escape_input() {
        for op in Operation::ALL {
            let html = (op.definition().loading_view)(&ctx("<b>x</b> & y"));
            assert!(!html.contains("<b>x</b>"), "{} leaked markup", op.name());
            assert!(html.contains("&amp;"), "{} lost ampersand", op.name());
        }
    }

    #[test]
    fn result_view_keeps_model_output_markup() {
        let mut c = ctx("cat");
        c.output = "- **noun** /kæt/ a small animal".to_string();
        let html = (Operation::Define.definition().result_view)(&c);
        assert!(html.contains("<strong>Define:</strong> cat"));
        assert!(html.contains("<li><strong>noun</strong>"));
    }

    #[test]
    fn translate_result_shows_arrow_between_input_and_output() {
        let mut c = ctx("hello");
        c.output = "你好".to_string();
        let html = (Operation::Translate.definition().result_view)(&c);
        let input_at = html.find("hello").unwrap();
        let arrow_at = html.find("-&gt;").unwrap();
        let output_at = html.find("你好").unwrap();
        assert!(input_at < arrow_at && arrow_at < output_at);
    }

    #[test]
    fn operations_resolve_by_name() {
        assert_eq!(Operation::from_name("Translate"), Some(Operation::Translate));
        assert_eq!(Operation::from_name("summarize"), None);
    }

    #[test]
    fn command_labels_include_shortcut() {
        let label = Operation::Improve.definition().command_label();
        assert!(label.starts_with("Gemini Improve ("));
        assert!(label.ends_with("-g i)"));
    }
}
