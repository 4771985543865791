//! The builder family for mobile single-page markup: pages, pads,
//! panels, fieldsets, rows, toolbars, buttons and lists.
//!
//! A [`Composer`] is created per render pass around a renderer and an
//! output sink. Operations that take a body run the caller's closure to
//! completion first, capturing everything it emits; the captured output
//! becomes the enclosing tag's content, so composition order is strictly
//! call order and fragments are final once emitted.

use crate::attrs::{Attrs, ClassList};
use crate::case::underscore;
use crate::error::{HelperError, HelperResult};
use crate::render::MarkupRenderer;
use crate::sink::OutputSink;
use serde::{Deserialize, Serialize};

/// A body-producing callback. Bodies emit nested fragments through the
/// composer they are handed; the enclosing builder wraps whatever they
/// produced.
pub type BodyFn<'b, 'a, R> = Box<dyn FnOnce(&mut Composer<'a, R>) -> HelperResult<()> + 'b>;

/// Optional body argument. Builders that require a body fail with
/// [`HelperError::MissingBody`] when handed `None`, before emitting
/// anything.
pub type Body<'b, 'a, R> = Option<BodyFn<'b, 'a, R>>;

/// Wrap a closure as a [`Body`] argument.
pub fn body<'b, 'a, R, F>(f: F) -> Body<'b, 'a, R>
where
    R: MarkupRenderer,
    F: FnOnce(&mut Composer<'a, R>) -> HelperResult<()> + 'b,
{
    Some(Box::new(f))
}

/// Options for [`Composer::page`] and [`Composer::panel`].
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    /// Marks this page as the one shown on load; rendered as the class
    /// `current`, never as an attribute.
    pub selected: bool,
    /// Inject a tab-bar fragment (built from the page id) before the
    /// body content. On by default.
    pub tab_bar: bool,
    pub class: Option<String>,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            selected: false,
            tab_bar: true,
            class: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PadOptions {
    pub class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FieldsetOptions {
    pub class: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowOptions {
    pub class: Option<String>,
}

/// The toolbar's optional trailing control, right-aligned by the client
/// library's styles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RightButton {
    pub name: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ToolbarOptions {
    pub back_button: Option<String>,
    pub home_button: Option<String>,
    pub right_button: Option<RightButton>,
}

/// Options for [`Composer::page_with_toolbar`]: the page fields plus the
/// toolbar controls.
#[derive(Debug, Clone, PartialEq)]
pub struct PageWithToolbarOptions {
    /// Explicit page id; defaults to the title with spaces replaced by
    /// underscores, lower-snaked.
    pub id: Option<String>,
    pub selected: bool,
    pub tab_bar: bool,
    pub class: Option<String>,
    pub toolbar: ToolbarOptions,
}

impl Default for PageWithToolbarOptions {
    fn default() -> Self {
        Self {
            id: None,
            selected: false,
            tab_bar: true,
            class: None,
            toolbar: ToolbarOptions::default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ButtonOptions {
    pub class: Option<String>,
    /// Transition effect, appended as the last class token.
    pub effect: Option<String>,
}

/// One entry of a [`Composer::list`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subhead: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_filename: Option<String>,
}

impl ListItem {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
            subhead: None,
            target: None,
            image_filename: None,
        }
    }
}

/// Link options shared by every item of one list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    /// Class of the `<ul>` wrapper; defaults to `rounded`.
    pub list_class: Option<String>,
    /// Transition effect. Replaces the anchor's class attribute
    /// entirely, unlike the merge rule other builders use.
    pub effect: Option<String>,
    /// Explicit `rel` attribute, kept verbatim when supplied.
    pub rel: Option<String>,
}

/// Per-render builder around a renderer and an output sink.
///
/// Top-level emissions go to the sink; emissions made inside a body
/// callback are captured by the enclosing builder instead.
pub struct Composer<'a, R: MarkupRenderer> {
    renderer: &'a R,
    sink: &'a mut dyn OutputSink,
    captures: Vec<String>,
}

impl<'a, R: MarkupRenderer> Composer<'a, R> {
    pub fn new(renderer: &'a R, sink: &'a mut dyn OutputSink) -> Self {
        Self {
            renderer,
            sink,
            captures: Vec::new(),
        }
    }

    pub fn renderer(&self) -> &R {
        self.renderer
    }

    /// Append a fragment to the current destination: the enclosing
    /// builder's capture when inside a body, the sink otherwise.
    pub fn emit(&mut self, fragment: &str) {
        match self.captures.last_mut() {
            Some(capture) => capture.push_str(fragment),
            None => self.sink.append(fragment),
        }
    }

    /// Run a body to completion and return everything it emitted.
    fn capture(&mut self, body: BodyFn<'_, 'a, R>) -> HelperResult<String> {
        self.captures.push(String::new());
        let result = body(self);
        let captured = self.captures.pop().unwrap_or_default();
        result?;
        Ok(captured)
    }

    /// Wrapper for a page, referenced by its id:
    /// `<div id="home" class="current">...tab bar...body...</div>`.
    pub fn page(&mut self, id: &str, opts: &PageOptions, body: Body<'_, 'a, R>) -> HelperResult<()> {
        self.page_inner("page", id, None, opts, String::new(), body)
    }

    /// Like [`Composer::page`] with the class `panel` prepended.
    pub fn panel(
        &mut self,
        id: &str,
        opts: &PageOptions,
        body: Body<'_, 'a, R>,
    ) -> HelperResult<()> {
        self.page_inner("panel", id, Some("panel"), opts, String::new(), body)
    }

    fn page_inner(
        &mut self,
        builder: &'static str,
        id: &str,
        base_class: Option<&str>,
        opts: &PageOptions,
        prelude: String,
        body: Body<'_, 'a, R>,
    ) -> HelperResult<()> {
        let Some(body) = body else {
            return Err(HelperError::MissingBody { builder });
        };
        let inner = self.capture(body)?;

        let mut prebody = prelude;
        if opts.tab_bar {
            prebody = format!("{}{}", self.tab_bar(id), prebody);
        }

        let class = ClassList::new()
            .push_opt(base_class)
            .push_opt(opts.class.as_deref())
            .push_if(opts.selected, "current")
            .into_attr();
        let mut attrs = Attrs::new();
        attrs.set("id", id);
        attrs.set_opt("class", class.as_deref());

        let html = self
            .renderer
            .tag("div", &attrs, &format!("{}{}", prebody, inner));
        self.emit(&html);
        Ok(())
    }

    /// The tab-bar fragment auto-injected into pages.
    fn tab_bar(&self, id: &str) -> String {
        let mut attrs = Attrs::new();
        attrs.set("id", format!("{}_tabbar", id));
        attrs.set("class", "tabbar");
        self.renderer.tag("div", &attrs, "")
    }

    /// Container `<div class="pad">` for text and form elements.
    pub fn pad(&mut self, opts: &PadOptions, body: Body<'_, 'a, R>) -> HelperResult<()> {
        let Some(body) = body else {
            return Err(HelperError::MissingBody { builder: "pad" });
        };
        let inner = self.capture(body)?;
        let class = ClassList::with_base("pad")
            .push_opt(opts.class.as_deref())
            .into_attr();
        let mut attrs = Attrs::new();
        attrs.set_opt("class", class.as_deref());
        let html = self.renderer.tag("div", &attrs, &inner);
        self.emit(&html);
        Ok(())
    }

    /// `<fieldset>` wrapper, in practice containing several rows.
    pub fn fieldset(&mut self, opts: &FieldsetOptions, body: Body<'_, 'a, R>) -> HelperResult<()> {
        let Some(body) = body else {
            return Err(HelperError::MissingBody { builder: "fieldset" });
        };
        let inner = self.capture(body)?;
        let mut attrs = Attrs::new();
        attrs.set_opt("class", opts.class.as_deref());
        let html = self.renderer.tag("fieldset", &attrs, &inner);
        self.emit(&html);
        Ok(())
    }

    /// Emit a `<div class="row">` around an optional label and the body
    /// content. For a label-only row without emission, use
    /// [`Composer::build_row`].
    pub fn row(
        &mut self,
        name: Option<&str>,
        opts: &RowOptions,
        body: Body<'_, 'a, R>,
    ) -> HelperResult<()> {
        let Some(body) = body else {
            return Err(HelperError::MissingBody { builder: "row" });
        };
        let inner = self.capture(body)?;
        let html = self.row_tag(name, opts, &inner);
        self.emit(&html);
        Ok(())
    }

    /// Build a row fragment without emitting it; the caller decides
    /// where it goes.
    pub fn build_row(&self, name: Option<&str>, opts: &RowOptions) -> String {
        self.row_tag(name, opts, "")
    }

    fn row_tag(&self, name: Option<&str>, opts: &RowOptions, content: &str) -> String {
        let label = name
            .map(|n| {
                self.renderer
                    .tag("label", &Attrs::new(), &self.renderer.escape(n))
            })
            .unwrap_or_default();
        let class = ClassList::with_base("row")
            .push_opt(opts.class.as_deref())
            .into_attr();
        let mut attrs = Attrs::new();
        attrs.set_opt("class", class.as_deref());
        self.renderer
            .tag("div", &attrs, &format!("{}{}", label, content))
    }

    /// Toolbar with a heading, the captured body and at most one
    /// trailing control.
    ///
    /// Control precedence: a back button is rendered first; a home
    /// button overwrites it (not appends); a right button appends to
    /// whatever control markup is left. With all three supplied the
    /// result is home followed by right, and the back button is
    /// silently discarded.
    pub fn toolbar(
        &mut self,
        title: &str,
        opts: &ToolbarOptions,
        body: Body<'_, 'a, R>,
    ) -> HelperResult<()> {
        let Some(body) = body else {
            return Err(HelperError::MissingBody { builder: "toolbar" });
        };
        let inner = self.capture(body)?;
        let html = self.toolbar_tag(title, opts, &inner);
        self.emit(&html);
        Ok(())
    }

    fn toolbar_tag(&self, title: &str, opts: &ToolbarOptions, inner: &str) -> String {
        let mut control = opts
            .back_button
            .as_deref()
            .map(|label| self.back_button(label, &ButtonOptions::default()))
            .unwrap_or_default();
        if let Some(home) = opts.home_button.as_deref() {
            control = self.home_back_button(home, &ButtonOptions::default());
        }
        if let Some(right) = &opts.right_button {
            control.push_str(&self.button_to(&right.name, &right.link, &ButtonOptions::default()));
        }

        let heading = self
            .renderer
            .tag("h1", &Attrs::new(), &self.renderer.escape(title));
        let mut attrs = Attrs::new();
        attrs.set("class", "toolbar");
        self.renderer
            .tag("div", &attrs, &format!("{}{}{}", heading, inner, control))
    }

    /// Page with an automatic toolbar. The page id defaults to the
    /// title with spaces replaced by underscores, lower-snaked
    /// (`"JQ Touch"` becomes `"jq_touch"`).
    pub fn page_with_toolbar(
        &mut self,
        title: &str,
        opts: &PageWithToolbarOptions,
        body: Body<'_, 'a, R>,
    ) -> HelperResult<()> {
        if body.is_none() {
            return Err(HelperError::MissingBody {
                builder: "page_with_toolbar",
            });
        }
        let id = opts
            .id
            .clone()
            .unwrap_or_else(|| underscore(&title.replace(' ', "_")));
        let toolbar = self.toolbar_tag(title, &opts.toolbar, "");
        let page_opts = PageOptions {
            selected: opts.selected,
            tab_bar: opts.tab_bar,
            class: opts.class.clone(),
        };
        self.page_inner("page_with_toolbar", &id, None, &page_opts, toolbar, body)
    }

    /// Back button: `<a href="#" class="button back">...</a>`.
    pub fn back_button(&self, label: &str, opts: &ButtonOptions) -> String {
        self.back_button_to(label, "#", opts)
    }

    /// Back button targeting the home page (`#Home`).
    pub fn home_back_button(&self, label: &str, opts: &ButtonOptions) -> String {
        self.back_button_to(label, "#Home", opts)
    }

    fn back_button_to(&self, label: &str, href: &str, opts: &ButtonOptions) -> String {
        let class = ClassList::with_base("back")
            .push_opt(opts.class.as_deref())
            .into_attr();
        let merged = ButtonOptions {
            class,
            effect: opts.effect.clone(),
        };
        self.button_to(label, href, &merged)
    }

    /// Button link. Class tokens in order: `button`, the caller class,
    /// the transition effect, absent ones dropped.
    pub fn button_to(&self, label: &str, href: &str, opts: &ButtonOptions) -> String {
        let class = ClassList::with_base("button")
            .push_opt(opts.class.as_deref())
            .push_opt(opts.effect.as_deref())
            .into_attr();
        let mut attrs = Attrs::new();
        attrs.set_opt("class", class.as_deref());
        self.renderer
            .anchor(&self.renderer.escape(label), href, &attrs)
    }

    /// One `<li class="arrow">` entry.
    ///
    /// The `rel` attribute: an explicit `opts.rel` is kept verbatim;
    /// otherwise URLs starting with `http` get `rel="external"` and
    /// everything else gets none. With `image_filename` set the content
    /// becomes an image followed by the name text and `subhead` is
    /// ignored in that branch.
    pub fn list_item(&self, item: &ListItem, opts: &ListOptions) -> HelperResult<String> {
        if item.name.is_empty() || item.url.is_empty() {
            return Err(HelperError::InvalidListItem {
                reason: "item requires both 'name' and 'url'".to_string(),
            });
        }

        let mut attrs = Attrs::new();
        // An effect replaces the class attribute outright.
        attrs.set_opt("class", opts.effect.as_deref());
        attrs.set_opt("target", item.target.as_deref());
        if let Some(rel) = opts.rel.as_deref() {
            attrs.set("rel", rel);
        } else if item.url.starts_with("http") {
            attrs.set("rel", "external");
        }

        let content = if let Some(image) = item.image_filename.as_deref() {
            let label = format!(
                "<img src=\"{}\" class=\"sp-list-image\"> {}",
                self.renderer.escape(image),
                self.renderer.escape(&item.name)
            );
            self.renderer.anchor(&label, &item.url, &Attrs::new())
        } else {
            let mut content =
                self.renderer
                    .anchor(&self.renderer.escape(&item.name), &item.url, &attrs);
            if let Some(subhead) = item.subhead.as_deref() {
                content.push_str(&self.renderer.anchor(
                    &self.renderer.escape(subhead),
                    &item.url,
                    &attrs,
                ));
            }
            content
        };

        let mut li = Attrs::new();
        li.set("class", "arrow");
        Ok(self.renderer.tag("li", &li, &content))
    }

    /// Emit a `<ul>` of list items. Items are read-only; rendering the
    /// same slice twice produces identical output.
    ///
    /// Every item is validated before anything reaches the sink, so a
    /// failing item leaves no partial list behind.
    pub fn list(&mut self, items: &[ListItem], opts: &ListOptions) -> HelperResult<()> {
        let html = self.build_list(items, opts)?;
        self.emit(&html);
        Ok(())
    }

    /// Build the list fragment without emitting it.
    pub fn build_list(&self, items: &[ListItem], opts: &ListOptions) -> HelperResult<String> {
        let mut inner = String::new();
        for item in items {
            inner.push_str(&self.list_item(item, opts)?);
        }
        let mut attrs = Attrs::new();
        attrs.set("class", opts.list_class.as_deref().unwrap_or("rounded"));
        Ok(self.renderer.tag("ul", &attrs, &inner))
    }
}
