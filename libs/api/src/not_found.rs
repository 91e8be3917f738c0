use axum::{http::StatusCode, response::Html};

const NOT_FOUND_PAGE: &str = "<!doctype html>\n<html><head><title>Not \
                              Found</title></head>\n<body><h1>404 Not \
                              Found</h1>\n<p><a href=\"/\">Back to the \
                              board</a></p>\n</body></html>\n";

pub(crate) fn page() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

pub(super) async fn get_404() -> (StatusCode, Html<&'static str>) {
    page()
}
