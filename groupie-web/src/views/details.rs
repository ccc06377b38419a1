//! Artist detail page: profile plus locations, dates and relations tabs

use super::{escape, layout, mismatch, RenderError, TemplateName, ViewModel};

pub const TITLE: &str = "Artist Details";

pub(super) fn render(model: &ViewModel<'_>) -> Result<String, RenderError> {
    let ViewModel::Details(view) = model else {
        return Err(mismatch(TemplateName::Details, model));
    };
    let artist = &view.artist;

    let members: String = artist
        .members
        .iter()
        .map(|m| format!("                    <li>{}</li>\n", escape(m)))
        .collect();

    let locations: String = view
        .locations
        .locations
        .iter()
        .map(|l| format!("                <li>{}</li>\n", escape(&pretty_location(l))))
        .collect();

    let dates: String = view
        .dates
        .dates
        .iter()
        .map(|d| format!("                <li>{}</li>\n", escape(pretty_date(d))))
        .collect();

    let mut relations = String::new();
    for (location, dates) in &view.relations.by_location {
        let dates = dates
            .iter()
            .map(|d| escape(pretty_date(d)))
            .collect::<Vec<_>>()
            .join(", ");
        relations.push_str(&format!(
            "                    <tr><td>{}</td><td>{}</td></tr>\n",
            escape(&pretty_location(location)),
            dates
        ));
    }

    let body = format!(
        r#"        <div class="artist-details">
            <img src="{image}" alt="{name}">
            <div class="artist-info">
                <h1>{name}</h1>
                <p><strong>Created:</strong> {year}</p>
                <p><strong>First album:</strong> {first_album}</p>
                <h3>Members</h3>
                <ul class="members">
{members}                </ul>
            </div>
        </div>
        <div class="tabs">
            <button class="tab active" onclick="openTab(event, 'Locations')">Locations</button>
            <button class="tab" onclick="openTab(event, 'Dates')">Dates</button>
            <button class="tab" onclick="openTab(event, 'Relations')">Concerts</button>
        </div>
        <div id="Locations" class="tab-content" style="display: block;">
            <ul>
{locations}            </ul>
        </div>
        <div id="Dates" class="tab-content">
            <ul>
{dates}            </ul>
        </div>
        <div id="Relations" class="tab-content">
            <table>
                <thead><tr><th>Location</th><th>Dates</th></tr></thead>
                <tbody>
{relations}                </tbody>
            </table>
        </div>"#,
        image = escape(&artist.image),
        name = escape(&artist.name),
        year = artist.creation_year,
        first_album = escape(&artist.first_album),
    );

    Ok(layout::wrap(TITLE, &body))
}

/// "north_carolina-usa" -> "north carolina, usa"
fn pretty_location(raw: &str) -> String {
    raw.replace('_', " ").replace('-', ", ")
}

/// The API marks some dates with a leading '*'
fn pretty_date(raw: &str) -> &str {
    raw.trim_start_matches('*')
}
