//! Search results page

use super::{escape, layout, mismatch, RenderError, TemplateName, ViewModel};

pub const TITLE: &str = "Search Results";

pub(super) fn render(model: &ViewModel<'_>) -> Result<String, RenderError> {
    let ViewModel::Search(result) = model else {
        return Err(mismatch(TemplateName::Search, model));
    };

    let mut body = format!(
        "        <h1>Results for &quot;{}&quot;</h1>\n",
        escape(&result.query)
    );

    if let Some(message) = result.empty_message {
        body.push_str(&format!("        <p class=\"no-results\">{}</p>\n", escape(message)));
    } else {
        body.push_str("        <ul class=\"search-results\">\n");
        for entry in &result.matches {
            body.push_str(&format!(
                "            <li><a href=\"/artists/?id={}\">{}</a></li>\n",
                entry.ordinal,
                escape(&entry.artist.name)
            ));
        }
        body.push_str("        </ul>\n");
    }

    Ok(layout::wrap(TITLE, &body))
}
