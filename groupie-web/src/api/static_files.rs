//! Static asset serving
//!
//! Files are read from the configured static root. Only extensions in an
//! explicit allow-list are served, each with a fixed content type; anything
//! else is 404 whether or not the file exists.

use axum::{
    extract::{rejection::PathRejection, Path, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use std::io::ErrorKind;
use std::path::{Component, Path as FsPath, PathBuf};

use crate::error::PageError;
use crate::AppState;

/// Content type for an allowed extension
pub fn content_type(path: &FsPath) -> Option<&'static str> {
    match path.extension()?.to_str()? {
        "css" => Some("text/css"),
        "js" => Some("application/javascript"),
        "png" => Some("image/png"),
        "jpg" | "jpeg" => Some("image/jpeg"),
        "otf" => Some("font/otf"),
        _ => None,
    }
}

/// Join `requested` onto `root`, refusing anything that could leave it
pub fn resolve(root: &FsPath, requested: &str) -> Option<PathBuf> {
    let requested = FsPath::new(requested);
    let mut path = root.to_path_buf();
    let mut depth = 0;
    for component in requested.components() {
        match component {
            Component::Normal(part) => {
                path.push(part);
                depth += 1;
            }
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => return None,
        }
    }
    (depth > 0).then_some(path)
}

/// GET /static/*path
pub async fn serve_static(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    match load(&state.static_root, path).await {
        Ok(response) => response,
        Err(err) => state.presenter.fail(&err),
    }
}

async fn load(
    root: &FsPath,
    path: Result<Path<String>, PathRejection>,
) -> Result<Response, PageError> {
    let Path(requested) = path.map_err(|e| PageError::NotFound(e.body_text()))?;
    let not_found = || PageError::NotFound(format!("/static/{}", requested));

    let file = resolve(root, &requested).ok_or_else(not_found)?;

    let metadata = tokio::fs::metadata(&file).await.map_err(|_| not_found())?;
    if !metadata.is_file() {
        return Err(not_found());
    }

    let content_type = content_type(&file).ok_or_else(not_found)?;

    let bytes = tokio::fs::read(&file).await.map_err(|e| match e.kind() {
        ErrorKind::NotFound => not_found(),
        _ => PageError::Io(e),
    })?;

    Ok((StatusCode::OK, [(header::CONTENT_TYPE, content_type)], bytes).into_response())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_allow_list() {
        assert_eq!(content_type(FsPath::new("style.css")), Some("text/css"));
        assert_eq!(content_type(FsPath::new("a/script.js")), Some("application/javascript"));
        assert_eq!(content_type(FsPath::new("logo.png")), Some("image/png"));
        assert_eq!(content_type(FsPath::new("photo.jpg")), Some("image/jpeg"));
        assert_eq!(content_type(FsPath::new("photo.jpeg")), Some("image/jpeg"));
        assert_eq!(content_type(FsPath::new("font.otf")), Some("font/otf"));
        assert_eq!(content_type(FsPath::new("index.html")), None);
        assert_eq!(content_type(FsPath::new("Cargo.toml")), None);
        assert_eq!(content_type(FsPath::new("README")), None);
        assert_eq!(content_type(FsPath::new("STYLE.CSS")), None);
    }

    #[test]
    fn test_resolve_inside_root() {
        let root = FsPath::new("/srv/static");
        assert_eq!(
            resolve(root, "css/style.css"),
            Some(PathBuf::from("/srv/static/css/style.css"))
        );
        assert_eq!(
            resolve(root, "./script.js"),
            Some(PathBuf::from("/srv/static/script.js"))
        );
    }

    #[test]
    fn test_resolve_rejects_escapes() {
        let root = FsPath::new("/srv/static");
        assert_eq!(resolve(root, "../Cargo.toml"), None);
        assert_eq!(resolve(root, "css/../../secret.css"), None);
        assert_eq!(resolve(root, "/etc/passwd"), None);
        assert_eq!(resolve(root, ""), None);
    }
}
