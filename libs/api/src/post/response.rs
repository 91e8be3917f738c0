use entity::prelude::*;

pub(super) const FORM_PAGE: &str = "<!doctype html>\n<html><head><title>New \
    post</title></head>\n<body>\n<h1>New post</h1>\n<form method=\"post\" \
    action=\"/new\">\n<p><input name=\"title\" \
    placeholder=\"Title\"></p>\n<p><textarea name=\"content\" \
    placeholder=\"Content\"></textarea></p>\n<p><button \
    type=\"submit\">Post</button></p>\n</form>\n<p><a \
    href=\"/\">Back</a></p>\n</body></html>\n";

pub(super) fn render_list(posts: &[PostSummaryEntity]) -> String {
    let mut rows = String::new();
    for post in posts {
        rows.push_str(&format!(
            "<li class=\"post\"><a href=\"/post/{id}\">{title}</a> \
             <small>#{id} {created}</small></li>\n",
            id = post.id,
            title = escape(&post.title),
            created = post.created_at.format("%Y-%m-%d %H:%M:%S"),
        ));
    }

    format!(
        "<!doctype html>\n<html><head><title>Board</title></head>\n<body>\n\
         <h1>Board</h1>\n<p><a href=\"/new\">New post</a></p>\n\
         <ul>\n{rows}</ul>\n</body></html>\n"
    )
}

pub(super) fn render_detail(post: &PostEntity) -> String {
    format!(
        "<!doctype html>\n<html><head><title>{title}</title></head>\n<body>\n\
         <h1>{title}</h1>\n<p><small>#{id} {created}</small></p>\n\
         <div>{content}</div>\n<p><a href=\"/\">Back</a></p>\n\
         </body></html>\n",
        id = post.id,
        title = escape(&post.title),
        content = escape(&post.content),
        created = post.created_at.format("%Y-%m-%d %H:%M:%S"),
    )
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
