//! The live-edit controller.

use tryout_runtime::{Engine, ExecutionBridge};
use tryout_types::Output;

use crate::caret::{indent, DEFAULT_TAB_WIDTH};
use crate::document::{SourceDocument, DEFAULT_NAMESPACE};
use crate::error::PlaygroundResult;
use crate::field::{auto_grow, insert_at_caret, CodeField};
use crate::render::{render, Surface};

/// What a recompute put on the surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Recompute {
    /// Blank code: surface cleared, compiler not called.
    Cleared,
    /// Generated files, with their count.
    Files(usize),
    /// A diagnostic.
    Diagnostic,
}

/// Owns the output surface and the bridge it recompiles through.
///
/// Constructing one needs an [`ExecutionBridge`], which only exists once
/// the runtime is ready, so edits can never reach the compiler early.
pub struct LiveEditController<E, S> {
    bridge: ExecutionBridge<E>,
    surface: S,
    default_namespace: String,
    indent: String,
}

impl<E: Engine, S: Surface> LiveEditController<E, S> {
    pub fn new(bridge: ExecutionBridge<E>, surface: S) -> Self {
        Self {
            bridge,
            surface,
            default_namespace: DEFAULT_NAMESPACE.to_string(),
            indent: indent(DEFAULT_TAB_WIDTH),
        }
    }

    pub fn with_default_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.default_namespace = namespace.into();
        self
    }

    pub fn with_tab_width(mut self, width: usize) -> Self {
        self.indent = indent(width);
        self
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    /// Code field edited: grow it to fit.
    pub fn grow(&self, field: &mut impl CodeField) {
        auto_grow(field);
    }

    /// Tab pressed in the code field: insert the indent at the caret.
    ///
    /// The caller suppresses the browser's focus change.
    pub fn indent(&self, field: &mut impl CodeField) {
        insert_at_caret(field, &self.indent);
    }

    /// Recompile `doc` and redraw the surface.
    ///
    /// The surface is cleared before the compiler is called, so a fault
    /// leaves it empty rather than showing stale output.
    pub fn recompute(&mut self, doc: &SourceDocument) -> PlaygroundResult<Recompute> {
        self.surface.clear();
        if doc.is_blank() {
            return Ok(Recompute::Cleared);
        }

        let namespace = doc.namespace_or(&self.default_namespace);
        let raw = self.bridge.run(namespace, &doc.code)?;
        let output = tryout_decoder::classify(&raw)?;

        let outcome = match &output {
            Output::Files(files) => Recompute::Files(files.len()),
            Output::Diagnostic(_) => Recompute::Diagnostic,
        };
        render(&mut self.surface, &output);
        tracing::debug!(?outcome, "output rendered");
        Ok(outcome)
    }
}
