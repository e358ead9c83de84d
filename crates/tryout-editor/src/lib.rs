//! Live editing for the Radon playground.
//!
//! The controller reacts to edits of the namespace and code fields: it
//! grows the code field with its content, turns Tab into spaces, and on
//! every edit recompiles through the [`ExecutionBridge`] and redraws the
//! output [`Surface`].
//!
//! Nothing here touches the DOM. Fields and surfaces are traits so the
//! browser host and the tests plug in their own.
//!
//! [`ExecutionBridge`]: tryout_runtime::ExecutionBridge

pub mod caret;
pub mod controller;
pub mod document;
pub mod error;
pub mod field;
pub mod render;
pub mod schedule;

pub use caret::{indent, splice_at_caret, DEFAULT_TAB_WIDTH};
pub use controller::{LiveEditController, Recompute};
pub use document::{SourceDocument, DEFAULT_NAMESPACE};
pub use error::{PlaygroundError, PlaygroundResult};
pub use field::{auto_grow, insert_at_caret, CodeField};
pub use render::{blocks, render, Block, InlineStyle, Surface};
pub use schedule::{EditScheduler, Ticket};
