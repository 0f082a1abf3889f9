use leptos::*;
use pulldown_cmark::{html, Event, Parser};

/// Render markdown to HTML, escaping any raw HTML in the source.
pub fn render_markdown(text: &str) -> String {
    let parser = Parser::new(text).map(|event| match event {
        Event::Html(raw) => Event::Text(raw),
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

/// Renders markdown content as HTML
#[component]
pub fn MarkdownView(
    /// The markdown content to render
    #[prop(into)]
    content: String,
) -> impl IntoView {
    view! {
        <div class="markdown-content" inner_html=render_markdown(&content)></div>
    }
}
