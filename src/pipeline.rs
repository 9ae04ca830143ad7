//! Selection-to-answer pipeline.
//!
//! read selection → place + show panel → loading view → model call →
//! result view.
//!
//! Everything runs on one cooperative task. The only suspension point is
//! the model call, so a new invocation can start while an older one is
//! still waiting. Each invocation gets a fresh `ContextId`; a result is
//! written only if its id is still the active one. Older calls are never
//! cancelled, their answers are just dropped.

use crate::llm::ModelClient;
use crate::panel::{compose_panel, PanelSurface, PointerTarget};
use crate::prompts::{Operation, QueryContext};
use crate::selection::{compute_placement, read_selection, PageHost, PanelSize};
use crate::settings::Settings;
use std::cell::{Cell, RefCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WorkflowState {
    Idle,
    Selected,
    Loading,
    Done,
}

/// How one invocation ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Nothing selected; the panel was not touched.
    NoSelection,
    /// Result view written to the panel.
    Rendered,
    /// A newer invocation (or a dismissal) took over; result dropped.
    Superseded,
}

/// Identity of one invocation's context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContextId(u64);

struct ActiveQuery {
    id: ContextId,
    operation: Operation,
    context: QueryContext,
}

pub struct Workflow<M, P> {
    locale: String,
    alternate_locale: String,
    panel_size: PanelSize,
    model: M,
    panel: P,
    next_id: Cell<u64>,
    state: Cell<WorkflowState>,
    active: RefCell<Option<ActiveQuery>>,
}

impl<M: ModelClient, P: PanelSurface> Workflow<M, P> {
    pub fn new(settings: &Settings, model: M, panel: P) -> Self {
        Self {
            locale: settings.locale.clone(),
            alternate_locale: settings.alternate_locale.clone(),
            panel_size: PanelSize::default(),
            model,
            panel,
            next_id: Cell::new(0),
            state: Cell::new(WorkflowState::Idle),
            active: RefCell::new(None),
        }
    }

    pub fn with_panel_size(mut self, panel_size: PanelSize) -> Self {
        self.panel_size = panel_size;
        self
    }

    pub fn state(&self) -> WorkflowState {
        self.state.get()
    }

    pub fn panel(&self) -> &P {
        &self.panel
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    /// Snapshot of the context currently owning the panel.
    pub fn active_context(&self) -> Option<(ContextId, Operation, QueryContext)> {
        self.active
            .borrow()
            .as_ref()
            .map(|q| (q.id, q.operation, q.context.clone()))
    }

    /// Run one operation against the page's current selection.
    pub async fn run(&self, page: &impl PageHost, operation: Operation) -> Outcome {
        let Some(selection) = read_selection(page) else {
            return Outcome::NoSelection;
        };
        self.state.set(WorkflowState::Selected);
        let definition = operation.definition();

        let placement = compute_placement(selection.rect.as_ref(), page.viewport(), self.panel_size);
        log::debug!("[PIPELINE] Placement: {}", placement.to_css());
        self.panel.set_placement(&placement);
        self.panel.show();

        let id = self.allocate_id();
        let context = QueryContext::new(&self.locale, &self.alternate_locale, &selection.text);
        let loading = (definition.loading_view)(&context);
        let prompt = (definition.prompt_view)(&context);
        *self.active.borrow_mut() = Some(ActiveQuery {
            id,
            operation,
            context,
        });
        self.state.set(WorkflowState::Loading);
        self.panel.set_content(&compose_panel(&loading));
        log::info!("[PIPELINE] {:?} #{}: loading", operation, id.0);

        let output = self.model.generate(&prompt).await;

        let result = {
            let mut active = self.active.borrow_mut();
            match active.as_mut() {
                Some(query) if query.id == id => {
                    query.context.output = output;
                    (definition.result_view)(&query.context)
                }
                _ => {
                    log::debug!("[PIPELINE] {:?} #{}: superseded, result dropped", operation, id.0);
                    return Outcome::Superseded;
                }
            }
        };
        self.state.set(WorkflowState::Done);
        self.panel.set_content(&compose_panel(&result));
        log::info!("[PIPELINE] {:?} #{}: done", operation, id.0);
        Outcome::Rendered
    }

    /// Pointer press anywhere on the page. Returns true if the panel was
    /// dismissed.
    pub fn pointer_down(&self, target: PointerTarget) -> bool {
        match target {
            PointerTarget::PanelBody => false,
            PointerTarget::Outside => {
                self.panel.hide();
                if let Some(query) = self.active.borrow_mut().take() {
                    log::debug!("[PIPELINE] Dismissed #{}", query.id.0);
                }
                self.state.set(WorkflowState::Idle);
                true
            }
        }
    }

    fn allocate_id(&self) -> ContextId {
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        ContextId(id)
    }
}
