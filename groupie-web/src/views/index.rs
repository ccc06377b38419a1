//! Artist list page

use super::{escape, layout, mismatch, RenderError, TemplateName, ViewModel};

pub const TITLE: &str = "Groupie Trackers - Artists";

pub(super) fn render(model: &ViewModel<'_>) -> Result<String, RenderError> {
    let ViewModel::Index { artists } = model else {
        return Err(mismatch(TemplateName::Index, model));
    };

    let mut cards = String::new();
    for entry in artists {
        let artist = entry.artist;
        cards.push_str(&format!(
            r#"            <div class="artist-card">
                <img src="{image}" alt="{name}">
                <h2>{name}</h2>
                <p>Since {year}</p>
                <a href="/artists/?id={ordinal}" class="details-button" data-tooltip="Members, concerts and more">Details</a>
            </div>
"#,
            image = escape(&artist.image),
            name = escape(&artist.name),
            year = artist.creation_year,
            ordinal = entry.ordinal,
        ));
    }

    let body = format!(
        r#"        <h1>Artists</h1>
        <div class="artist-grid">
{cards}        </div>"#
    );

    Ok(layout::wrap(TITLE, &body))
}
