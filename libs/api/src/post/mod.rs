use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse},
    Form,
};

mod request;
pub mod response;

use crate::response::{ApiError, ApiResponse, IntoApiResponse};
use crate::ApiState;

use self::request::NewPostForm;

pub async fn get_posts(
    State(state): State<ApiState>,
) -> ApiResponse<Html<String>> {
    let posts = state
        .repo
        .post
        .find_all()
        .await
        .into_response("failed to list posts")?;

    Ok(Html(response::render_list(&posts)))
}

pub async fn get_post(
    State(state): State<ApiState>,
    Path(id): Path<String>,
) -> ApiResponse<Html<String>> {
    // ids are positive integers; anything else never matched a post
    let Some(id) = id.parse::<i32>().ok().filter(|id| *id > 0) else {
        return Err(ApiError::NotFoundError);
    };

    let post = state
        .repo
        .post
        .find_by_id(id)
        .await
        .into_response("failed to load post")?;

    let Some(post) = post else {
        return Err(ApiError::NotFoundError);
    };

    Ok(Html(response::render_detail(&post)))
}

pub async fn new_post() -> Html<&'static str> {
    Html(response::FORM_PAGE)
}

pub async fn create_post(
    State(state): State<ApiState>,
    Form(form): Form<NewPostForm>,
) -> ApiResponse<impl IntoResponse> {
    let (title, content) = form.validated()?;

    state
        .repo
        .post
        .create(title, content)
        .await
        .into_response("failed to save post")?;

    // 302 redirect-after-POST so a refresh never resubmits
    Ok((StatusCode::FOUND, [(header::LOCATION, "/")]))
}
