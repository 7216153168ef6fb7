use pulldown_cmark::{html, Options, Parser};

/// markdown 轉 HTML，結果不做 sanitize
pub fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_TASKLISTS);

    let parser = Parser::new_ext(markdown, options);
    let mut output = String::with_capacity(markdown.len() * 3 / 2);
    html::push_html(&mut output, parser);

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_headings_and_emphasis() {
        let html = render_markdown("# Title\n\nSome *text*.");

        assert!(html.contains("<h1>Title</h1>"));
        assert!(html.contains("<em>text</em>"));
    }

    #[test]
    fn passes_raw_html_through() {
        let html = render_markdown("<div class=\"note\">hi</div>");

        assert!(html.contains("<div class=\"note\">hi</div>"));
    }

    #[test]
    fn renders_tables() {
        let html = render_markdown("| a | b |\n|---|---|\n| 1 | 2 |\n");

        assert!(html.contains("<table>"));
        assert!(html.contains("<td>1</td>"));
    }
}
