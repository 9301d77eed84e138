// src/core/html.rs
//
// Thin helpers over `scraper` for walking table markup by element children.
// Text nodes and comments between tags are never counted as children.

use scraper::{ElementRef, Html, Selector};

use crate::error::{Result, ScrapeError};

pub fn parse_document(html: &str) -> Html {
    Html::parse_document(html)
}

pub fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::Selector(format!("{css:?}: {e:?}")))
}

pub fn element_children<'a>(el: ElementRef<'a>) -> impl Iterator<Item = ElementRef<'a>> {
    el.children().filter_map(ElementRef::wrap)
}

/// Element children with the given tag name (`tr`, `td`, …).
pub fn children_named<'a>(el: ElementRef<'a>, name: &'a str) -> impl Iterator<Item = ElementRef<'a>> {
    element_children(el).filter(move |c| c.value().name().eq_ignore_ascii_case(name))
}

pub fn nth_element_child(el: ElementRef<'_>, n: usize) -> Option<ElementRef<'_>> {
    element_children(el).nth(n)
}

pub fn last_element_child(el: ElementRef<'_>) -> Option<ElementRef<'_>> {
    element_children(el).last()
}

/// Concatenated text of every descendant text node.
pub fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first<'a>(doc: &'a Html, css: &str) -> ElementRef<'a> {
        doc.select(&selector(css).unwrap()).next().unwrap()
    }

    #[test]
    fn whitespace_between_tags_is_not_a_child() {
        let doc = parse_document(
            "<div id=x>\n  <span>a</span>\n  <b>b</b>\n  <!-- note -->\n</div>",
        );
        let div = first(&doc, "#x");
        assert_eq!(element_children(div).count(), 2);
        assert_eq!(last_element_child(div).unwrap().value().name(), "b");
        assert_eq!(nth_element_child(div, 0).unwrap().value().name(), "span");
        assert!(nth_element_child(div, 2).is_none());
    }

    #[test]
    fn children_named_skips_other_tags() {
        let doc = parse_document(
            "<table><tbody><tr id=r><th>h</th><td>1</td><td>2</td></tr></tbody></table>",
        );
        let tr = first(&doc, "#r");
        let tds: Vec<String> = children_named(tr, "td").map(text_of).collect();
        assert_eq!(tds, vec!["1", "2"]);
    }

    #[test]
    fn text_of_joins_nested_text() {
        let doc = parse_document("<p id=p>one <i>two</i> three</p>");
        assert_eq!(text_of(first(&doc, "#p")), "one two three");
    }

    #[test]
    fn bad_selector_is_an_error() {
        assert!(matches!(selector("tr[["), Err(ScrapeError::Selector(_))));
    }
}
