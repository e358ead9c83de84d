//! Page bootstrap and event wiring.

use std::cell::RefCell;
use std::rc::Rc;

use tryout_editor::{EditScheduler, LiveEditController, SourceDocument};
use tryout_runtime::{wait_until, BootstrapPhase, ExecutionBridge, RuntimeBootstrap};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Event, HtmlInputElement, HtmlTextAreaElement, KeyboardEvent};

use crate::config::PlaygroundConfig;
use crate::dom::{self, DomSurface, TextAreaField};
use crate::engine::{PyodideEngine, PyodideLoader};
use crate::error::{HostError, HostResult};
use crate::timer;

thread_local! {
    /// The page's one runtime bootstrap. Survives re-mounts of the playground.
    static BOOTSTRAP: RefCell<Option<Rc<RuntimeBootstrap<PyodideLoader>>>> = const { RefCell::new(None) };
}

fn runtime(config: &PlaygroundConfig) -> Rc<RuntimeBootstrap<PyodideLoader>> {
    BOOTSTRAP.with(|slot| {
        let mut slot = slot.borrow_mut();
        if let Some(boot) = slot.as_ref() {
            return Rc::clone(boot);
        }
        let loading = config.selectors.loading.clone();
        let boot = Rc::new(
            RuntimeBootstrap::new(PyodideLoader, config.bootstrap.clone())
                .with_observer(move |phase| show_progress(loading.as_deref(), phase)),
        );
        *slot = Some(Rc::clone(&boot));
        boot
    })
}

/// Mirror bootstrap progress in the loading indicator, if the page has one.
fn show_progress(selector: Option<&str>, phase: BootstrapPhase) {
    let Some(selector) = selector else { return };
    let Ok(document) = dom::document() else { return };
    let Ok(Some(indicator)) = dom::find(&document, selector) else {
        return;
    };
    match phase {
        BootstrapPhase::LoadingEngine => indicator.set_text_content(Some("Loading pyodide...")),
        BootstrapPhase::InstallingPackage => indicator.set_text_content(Some("Loading radon...")),
        BootstrapPhase::Ready => indicator.remove(),
    }
}

/// Bootstrap the runtime and wire the page's fields to it.
pub async fn start(config: PlaygroundConfig) -> HostResult<()> {
    let document = dom::document()?;

    // The version element is mounted by the page framework, possibly after
    // this script runs.
    let version_selector = config.selectors.version.clone();
    wait_until(
        &version_selector,
        &config.bootstrap.poll,
        || matches!(dom::find(&document, &version_selector), Ok(Some(_))),
        timer::sleep,
    )
    .await?;

    let ready = runtime(&config).ensure_ready().await?;

    let version: web_sys::Element = dom::require(&document, &config.selectors.version)?;
    version.set_text_content(Some(&config.version_label(ready.version())));
    if let Some(selector) = &config.selectors.loading {
        if let Some(indicator) = dom::find(&document, selector)? {
            indicator.remove();
        }
    }

    let page = Page::mount(&document, &config, ready.bridge())?;
    page.listen()?;
    tracing::info!("playground ready");
    Ok(())
}

/// The wired-up page: fields, controller, and the edit scheduler.
struct Page {
    namespace: HtmlInputElement,
    code: HtmlTextAreaElement,
    controller: RefCell<LiveEditController<PyodideEngine, DomSurface>>,
    scheduler: EditScheduler,
}

impl Page {
    fn mount(
        document: &Document,
        config: &PlaygroundConfig,
        bridge: ExecutionBridge<PyodideEngine>,
    ) -> HostResult<Rc<Self>> {
        let namespace = dom::require(document, &config.selectors.namespace)?;
        let code = dom::require(document, &config.selectors.code)?;
        let output = dom::require(document, &config.selectors.output)?;

        let controller = LiveEditController::new(bridge, DomSurface::new(document.clone(), output))
            .with_default_namespace(config.default_namespace.clone())
            .with_tab_width(config.tab_width);

        Ok(Rc::new(Self {
            namespace,
            code,
            controller: RefCell::new(controller),
            scheduler: EditScheduler::new(),
        }))
    }

    fn listen(self: &Rc<Self>) -> HostResult<()> {
        let page = Rc::clone(self);
        let on_namespace = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            page.schedule_recompute();
        });

        let page = Rc::clone(self);
        let on_code = Closure::<dyn FnMut(Event)>::new(move |_: Event| {
            page.grow();
            page.schedule_recompute();
        });

        let page = Rc::clone(self);
        let on_keydown = Closure::<dyn FnMut(KeyboardEvent)>::new(move |event: KeyboardEvent| {
            if event.key() == "Tab" {
                event.prevent_default();
                page.indent();
            }
        });

        self.namespace
            .add_event_listener_with_callback("input", on_namespace.as_ref().unchecked_ref())
            .map_err(HostError::js)?;
        self.code
            .add_event_listener_with_callback("input", on_code.as_ref().unchecked_ref())
            .map_err(HostError::js)?;
        self.code
            .add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref())
            .map_err(HostError::js)?;

        // Listeners live as long as the page.
        on_namespace.forget();
        on_code.forget();
        on_keydown.forget();
        Ok(())
    }

    fn grow(&self) {
        let mut field = TextAreaField(self.code.clone());
        self.controller.borrow().grow(&mut field);
    }

    fn indent(&self) {
        let mut field = TextAreaField(self.code.clone());
        self.controller.borrow().indent(&mut field);
    }

    /// Recompute on a later turn unless another edit arrives first.
    fn schedule_recompute(self: &Rc<Self>) {
        let ticket = self.scheduler.issue();
        let page = Rc::clone(self);
        wasm_bindgen_futures::spawn_local(async move {
            timer::next_tick().await;
            if !page.scheduler.is_current(ticket) {
                tracing::trace!(?ticket, "skipping superseded edit");
                return;
            }
            page.recompute();
        });
    }

    fn recompute(&self) {
        let doc = SourceDocument::new(self.namespace.value(), self.code.value());
        match self.controller.borrow_mut().recompute(&doc) {
            Ok(outcome) => tracing::debug!(?outcome, "recomputed"),
            Err(err) => tracing::error!(error = %err, "recompute failed"),
        }
    }
}
