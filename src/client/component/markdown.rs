use dioxus::prelude::*;
use pulldown_cmark::{html, Event, Options, Parser};

/// Renders Markdown to HTML. Raw HTML blocks in the source are dropped.
pub fn render_markdown(source: &str) -> String {
    let parser = Parser::new_ext(source, Options::all())
        .filter(|event| !matches!(event, Event::Html(_)));

    let mut output = String::with_capacity(source.len() * 3 / 2);
    html::push_html(&mut output, parser);
    output
}

#[component]
pub fn Markdown(source: String) -> Element {
    let rendered = render_markdown(&source);

    rsx! {
        div {
            class: "prose max-w-none",
            dangerous_inner_html: "{rendered}",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_lists_and_emphasis() {
        let html = render_markdown("- **Faster** queue loading\n- Fixed skip");

        assert!(html.contains("<li><strong>Faster</strong> queue loading</li>"));
        assert!(html.contains("<li>Fixed skip</li>"));
    }

    #[test]
    fn drops_raw_html() {
        let html = render_markdown("<script>alert(1)</script>\n\nSafe text");

        assert!(!html.contains("<script>"));
        assert!(html.contains("Safe text"));
    }
}
