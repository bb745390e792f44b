use leptos::prelude::*;
use pulldown_cmark::{html, Options, Parser};

const MARKDOWN_STYLES: &str = r#"
    .markdown-content p { margin-bottom: 0.8em; line-height: 1.7; }
    .markdown-content ul { list-style-type: disc; padding-left: 1.5em; margin-bottom: 1em; }
    .markdown-content ol { list-style-type: decimal; padding-left: 1.5em; margin-bottom: 1em; }
    .markdown-content li { margin-bottom: 0.25em; }
    .markdown-content strong { font-weight: 600; color: #292524; }
    .markdown-content em { font-style: italic; }
    .markdown-content a { color: #047857; text-decoration: underline; }
"#;

/// Render guide prose to HTML. Raw HTML in the source is escaped.
pub fn render_markdown(content: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);

    let parser = Parser::new_ext(content, options).map(|event| match event {
        pulldown_cmark::Event::Html(raw) | pulldown_cmark::Event::InlineHtml(raw) => {
            pulldown_cmark::Event::Text(raw)
        }
        other => other,
    });
    let mut html_output = String::new();
    html::push_html(&mut html_output, parser);
    html_output
}

#[component]
pub fn Markdown(
    #[prop(into)]
    content: String,
    #[prop(into, optional)]
    class: String,
) -> impl IntoView {
    let html_content = render_markdown(&content);
    let full_class = format!("markdown-content text-stone-700 {class}");

    view! {
        <style>{MARKDOWN_STYLES}</style>
        <div class=full_class inner_html=html_content />
    }
}
