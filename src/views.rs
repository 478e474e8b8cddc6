use axum::response::Html;
use entity::{comment, post, user};
use html_escape::encode_text;

/// Minimal server-rendered HTML. No template engine; pages are built inline
/// the same way the handlers' static responses are. User-supplied strings are
/// escaped, except post bodies, which are rich-text HTML by design.

fn layout(
    title: &str,
    viewer: Option<&user::Model>,
    flash: Option<&str>,
    body: &str,
) -> Html<String> {
    let nav = match viewer {
        Some(user) => format!(
            r#"<span>Signed in as {}</span> <a href="/logout">Logout</a>"#,
            encode_text(&user.name)
        ),
        None => r#"<a href="/login">Login</a> <a href="/register">Register</a>"#.to_string(),
    };
    let flash_html = match flash {
        Some(message) => format!(r#"<p class="flash">{}</p>"#, encode_text(message)),
        None => String::new(),
    };
    Html(format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"><title>{title}</title></head>
<body>
<nav><a href="/">Home</a> <a href="/about">About</a> <a href="/contact">Contact</a> {nav}</nav>
{flash_html}
{body}
</body>
</html>"#,
        title = encode_text(title),
    ))
}

pub fn index_page(
    viewer: Option<&user::Model>,
    flash: Option<&str>,
    posts: &[(post::Model, Option<user::Model>)],
) -> Html<String> {
    let mut items = String::new();
    for (post, author) in posts {
        let author_name = author.as_ref().map(|a| a.name.as_str()).unwrap_or("unknown");
        items.push_str(&format!(
            r#"<article>
<h2><a href="/post/{id}">{title}</a></h2>
<h3>{subtitle}</h3>
<p>Posted by {author} on {date}</p>
</article>
"#,
            id = post.id,
            title = encode_text(&post.title),
            subtitle = encode_text(&post.subtitle),
            author = encode_text(author_name),
            date = encode_text(&post.date),
        ));
    }
    if is_admin_viewer(viewer) {
        items.push_str(r#"<p><a href="/new-post">New Post</a></p>"#);
    }
    layout("Blog", viewer, flash, &items)
}

pub fn post_page(
    viewer: Option<&user::Model>,
    flash: Option<&str>,
    post: &post::Model,
    comments: &[(comment::Model, Option<user::Model>)],
) -> Html<String> {
    let mut body = format!(
        r#"<article>
<h1>{title}</h1>
<h2>{subtitle}</h2>
<p>{date}</p>
<img src="{img_url}" alt="">
{post_body}
</article>
"#,
        title = encode_text(&post.title),
        subtitle = encode_text(&post.subtitle),
        date = encode_text(&post.date),
        img_url = encode_text(&post.img_url),
        post_body = post.body,
    );
    if is_admin_viewer(viewer) {
        body.push_str(&format!(
            r#"<p><a href="/edit-post/{id}">Edit Post</a> <a href="/delete/{id}">Delete Post</a></p>"#,
            id = post.id
        ));
    }
    body.push_str("<section><h3>Comments</h3>\n");
    for (comment, author) in comments {
        let author_name = author.as_ref().map(|a| a.name.as_str()).unwrap_or("unknown");
        body.push_str(&format!(
            "<p><strong>{}</strong>: {}</p>\n",
            encode_text(author_name),
            encode_text(&comment.text),
        ));
    }
    if viewer.is_some() {
        body.push_str(&format!(
            r#"<form method="post" action="/post/{id}">
<textarea name="comment" required></textarea>
<input type="submit" value="Post">
</form>
"#,
            id = post.id
        ));
    } else {
        body.push_str(r#"<p><a href="/login">Sign in</a> to comment.</p>"#);
    }
    body.push_str("</section>");
    layout(&post.title, viewer, flash, &body)
}

pub fn register_page(
    viewer: Option<&user::Model>,
    flash: Option<&str>,
    error: Option<&str>,
) -> Html<String> {
    let body = format!(
        r#"{error}<form method="post" action="/register">
<label>Email <input type="email" name="email" required></label>
<label>Name <input type="text" name="name" required></label>
<label>Password <input type="password" name="password" required></label>
<input type="submit" value="Register">
</form>"#,
        error = error_html(error),
    );
    layout("Register", viewer, flash, &body)
}

pub fn login_page(
    viewer: Option<&user::Model>,
    flash: Option<&str>,
    error: Option<&str>,
) -> Html<String> {
    let body = format!(
        r#"{error}<form method="post" action="/login">
<label>Email <input type="email" name="email" required></label>
<label>Password <input type="password" name="password" required></label>
<input type="submit" value="Login">
</form>"#,
        error = error_html(error),
    );
    layout("Login", viewer, flash, &body)
}

/// Shared editor for new and existing posts; `existing` prefills the fields
/// and decides the action URL.
pub fn post_editor_page(
    viewer: Option<&user::Model>,
    existing: Option<&post::Model>,
    error: Option<&str>,
) -> Html<String> {
    let (title, action) = match existing {
        Some(post) => ("Edit Post", format!("/edit-post/{}", post.id)),
        None => ("New Post", "/new-post".to_string()),
    };
    let field = |name: &str| {
        existing
            .map(|post| match name {
                "title" => post.title.clone(),
                "subtitle" => post.subtitle.clone(),
                "img_url" => post.img_url.clone(),
                "body" => post.body.clone(),
                _ => String::new(),
            })
            .unwrap_or_default()
    };
    let body = format!(
        r#"{error}<form method="post" action="{action}">
<label>Blog Post Title <input type="text" name="title" value="{title_value}" required></label>
<label>Subtitle <input type="text" name="subtitle" value="{subtitle}" required></label>
<label>Blog Image URL <input type="url" name="img_url" value="{img_url}" required></label>
<label>Blog Content <textarea name="body" required>{body_value}</textarea></label>
<input type="submit" value="Submit Post">
</form>"#,
        error = error_html(error),
        title_value = encode_text(&field("title")),
        subtitle = encode_text(&field("subtitle")),
        img_url = encode_text(&field("img_url")),
        body_value = encode_text(&field("body")),
    );
    layout(title, viewer, None, &body)
}

pub fn about_page(viewer: Option<&user::Model>) -> Html<String> {
    layout("About", viewer, None, "<h1>About</h1><p>A small blog.</p>")
}

pub fn contact_page(viewer: Option<&user::Model>) -> Html<String> {
    layout(
        "Contact",
        viewer,
        None,
        "<h1>Contact</h1><p>Write to the admin.</p>",
    )
}

fn error_html(error: Option<&str>) -> String {
    match error {
        Some(message) => format!(r#"<p class="error">{}</p>"#, encode_text(message)),
        None => String::new(),
    }
}

fn is_admin_viewer(viewer: Option<&user::Model>) -> bool {
    crate::service::is_admin(viewer)
}
