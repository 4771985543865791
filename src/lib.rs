//! # touchmark
//!
//! Server-side helpers for jQTouch-style mobile single-page UIs.
//!
//! Three concerns live here:
//! - a markup composition engine — nested, scoped builders for pages,
//!   panels, toolbars, lists and buttons, emitting into a per-render sink
//! - a settings-script emitter that turns a snake_case settings map into
//!   the client library's initialization `<script>` fragment
//! - a per-request format negotiator deciding mobile vs. desktop
//!
//! ## Example — composing a page
//! ```ignore
//! use touchmark::{body, Composer, HtmlRenderer, PageOptions, StringSink, ToolbarOptions};
//!
//! let renderer = HtmlRenderer;
//! let mut sink = StringSink::new();
//! let mut c = Composer::new(&renderer, &mut sink);
//! c.page("home", &PageOptions { selected: true, ..Default::default() }, body(|c| {
//!     c.toolbar("jQTouch", &ToolbarOptions::default(), body(|c| {
//!         let about = c.button_to("About", "#about", &Default::default());
//!         c.emit(&about);
//!         Ok(())
//!     }))
//! }))?;
//! ```
//!
//! ## Example — init script
//! ```ignore
//! use serde_json::{json, Map};
//! use touchmark::InitScript;
//!
//! let mut settings = Map::new();
//! settings.insert("status_bar".into(), json!("black-translucent"));
//! let script = InitScript::default().build(&mut settings);
//! // var jQT = new $.jQTouch({"statusBar":"black-translucent"});
//! ```

pub mod attrs;
pub mod case;
pub mod composer;
pub mod error;
pub mod format;
pub mod render;
pub mod settings;
pub mod sink;

// --- Core types ---
pub use attrs::{AttrValue, Attrs, ClassList};
pub use composer::{
    body, Body, BodyFn, ButtonOptions, Composer, FieldsetOptions, ListItem, ListOptions,
    PadOptions, PageOptions, PageWithToolbarOptions, RightButton, RowOptions, ToolbarOptions,
};
pub use error::{HelperError, HelperResult};
pub use render::{HtmlRenderer, MarkupRenderer};
pub use settings::InitScript;
pub use sink::{OutputSink, StringSink};

// --- Format negotiation ---
pub use format::{
    is_mobile_user_agent, FormatDecision, FormatNegotiator, RequestContext, ResponseFormat,
};

// --- Key case rewriting ---
pub use case::{camelize, camelize_keys, CaseMode};
