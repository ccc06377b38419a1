//! Shared page layout: head, navigation bar with search form, footer

use super::escape;

/// Wrap a page body in the common layout
///
/// `body` is inserted verbatim and must already be escaped.
pub fn wrap(title: &str, body: &str) -> String {
    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <link rel="stylesheet" href="/static/style.css">
</head>
<body>
    <header>
        <nav class="navbar">
            <a href="/" class="home-link" data-tooltip="Back to all artists">Groupie Trackers</a>
            <form action="/search/" method="GET" class="search-form">
                <input type="text" name="q" placeholder="Search artists..." aria-label="Search artists">
                <button type="submit" class="search-button" data-tooltip="Search by artist name">Search</button>
            </form>
        </nav>
    </header>
    <div id="tooltip" class="tooltip"></div>
    <main>
{body}
    </main>
    <footer>
        <p>groupie-web v{version}</p>
    </footer>
    <script src="/static/script.js"></script>
</body>
</html>
"#,
        title = escape(title),
        body = body,
        version = env!("CARGO_PKG_VERSION"),
    )
}
