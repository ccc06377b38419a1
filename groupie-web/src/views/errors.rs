//! Error page

use super::{escape, layout, mismatch, RenderError, TemplateName, ViewModel};

pub const TITLE: &str = "Error";

pub(super) fn render(model: &ViewModel<'_>) -> Result<String, RenderError> {
    let ViewModel::Error(error) = model else {
        return Err(mismatch(TemplateName::Errors, model));
    };

    let body = format!(
        r#"        <div class="error-page">
            <h1>{status}</h1>
            <p>{message}</p>
            <a href="/" class="home-link" data-tooltip="Back to all artists">Go home</a>
        </div>"#,
        status = error.status,
        message = escape(error.message),
    );

    Ok(layout::wrap(TITLE, &body))
}
