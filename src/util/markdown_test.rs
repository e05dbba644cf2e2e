use super::*;

#[test]
fn renders_inline_emphasis() {
    assert_eq!(render_markdown_html("Hello **world**"), "<p>Hello <strong>world</strong></p>\n");
}

#[test]
fn drops_raw_html() {
    let html = render_markdown_html("before <script>alert(1)</script> after");
    assert!(!html.contains("<script>"));
    assert!(html.contains("before"));
    assert!(html.contains("after"));
}

#[test]
fn renders_links() {
    let html = render_markdown_html("[repo](https://example.com)");
    assert!(html.contains(r#"<a href="https://example.com">repo</a>"#));
}

#[test]
fn empty_input_renders_nothing() {
    assert_eq!(render_markdown_html(""), "");
}
