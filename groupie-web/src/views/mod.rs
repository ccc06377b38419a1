//! HTML views
//!
//! Pages are plain `format!` templates compiled into the binary. Each known
//! page is a [`TemplateName`] bound to a render function in a
//! [`TemplateRegistry`] at startup; every page body is wrapped by
//! [`layout::wrap`].
//!
//! Lookup of a name the registry does not hold is an explicit
//! [`RenderError::UnknownTemplate`] (reported as 404). Handing a page the
//! wrong kind of model is a [`RenderError::ModelMismatch`] (reported as 500).

use axum::http::StatusCode;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

use crate::aggregator::ArtistDetailView;
use crate::catalog::Entry;
use crate::search::SearchResult;

mod details;
mod errors;
mod index;
pub mod layout;
mod search;

/// The fixed set of page templates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateName {
    Index,
    Details,
    Search,
    Errors,
}

impl TemplateName {
    pub const ALL: [TemplateName; 4] = [
        TemplateName::Index,
        TemplateName::Details,
        TemplateName::Search,
        TemplateName::Errors,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateName::Index => "index",
            TemplateName::Details => "details",
            TemplateName::Search => "search",
            TemplateName::Errors => "errors",
        }
    }
}

impl fmt::Display for TemplateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Data bound into a page
#[derive(Debug)]
pub enum ViewModel<'a> {
    Index { artists: Vec<Entry<'a>> },
    Details(ArtistDetailView),
    Search(SearchResult<'a>),
    Error(ErrorView),
}

impl ViewModel<'_> {
    fn kind(&self) -> &'static str {
        match self {
            ViewModel::Index { .. } => "index",
            ViewModel::Details(_) => "details",
            ViewModel::Search(_) => "search",
            ViewModel::Error(_) => "error",
        }
    }
}

/// Model for the error page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorView {
    pub status: u16,
    pub message: &'static str,
}

/// Template rendering errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// Name not present in the registry
    #[error("template '{0}' not found")]
    UnknownTemplate(TemplateName),

    /// Template executed against a model it cannot bind
    #[error("template '{template}' cannot render a {found} model")]
    ModelMismatch {
        template: TemplateName,
        found: &'static str,
    },
}

impl RenderError {
    /// HTTP status reported for this failure
    pub fn status(&self) -> StatusCode {
        match self {
            RenderError::UnknownTemplate(_) => StatusCode::NOT_FOUND,
            RenderError::ModelMismatch { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Render function bound to a template name
pub type RenderFn = fn(&ViewModel<'_>) -> Result<String, RenderError>;

/// Name -> render function table, built once at startup
#[derive(Clone)]
pub struct TemplateRegistry {
    templates: HashMap<TemplateName, RenderFn>,
}

impl TemplateRegistry {
    /// Empty registry (every lookup fails)
    pub fn empty() -> Self {
        Self {
            templates: HashMap::new(),
        }
    }

    /// Registry holding all built-in pages
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(TemplateName::Index, index::render);
        registry.register(TemplateName::Details, details::render);
        registry.register(TemplateName::Search, search::render);
        registry.register(TemplateName::Errors, errors::render);
        registry
    }

    pub fn register(&mut self, name: TemplateName, render: RenderFn) {
        self.templates.insert(name, render);
    }

    pub fn remove(&mut self, name: TemplateName) {
        self.templates.remove(&name);
    }

    pub fn contains(&self, name: TemplateName) -> bool {
        self.templates.contains_key(&name)
    }

    /// Render `name` with `model`
    pub fn render(&self, name: TemplateName, model: &ViewModel<'_>) -> Result<String, RenderError> {
        let render = self
            .templates
            .get(&name)
            .ok_or(RenderError::UnknownTemplate(name))?;
        render(model)
    }
}

impl fmt::Debug for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<&str> = self.templates.keys().map(TemplateName::as_str).collect();
        names.sort_unstable();
        f.debug_struct("TemplateRegistry").field("templates", &names).finish()
    }
}

/// Escape text for inclusion in HTML element content or quoted attributes
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn mismatch(template: TemplateName, model: &ViewModel<'_>) -> RenderError {
    RenderError::ModelMismatch {
        template,
        found: model.kind(),
    }
}
