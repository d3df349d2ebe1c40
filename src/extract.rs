use scraper::{Html, Selector};

/// Concatenate the visible text of every `<p>` element, space-separated.
///
/// Returns an empty string when the document has no paragraphs; callers
/// treat that as "no usable content".
pub fn extract_paragraph_text(html: &str) -> String {
    let document = Html::parse_document(html);
    let paragraph = Selector::parse("p").unwrap();

    let fragments: Vec<String> = document
        .select(&paragraph)
        .map(|el| el.text().collect::<String>())
        .collect();

    fragments.join(" ").trim().to_string()
}

// ── Tests ──

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture(name: &str) -> String {
        std::fs::read_to_string(format!("tests/fixtures/{}.html", name)).unwrap()
    }

    #[test]
    fn city_park_paragraphs() {
        let text = extract_paragraph_text(&fixture("city_park"));
        assert!(text.contains("guided birdwatching walk"));
        assert!(text.contains("open-air concerts"));
        // Paragraph order is document order
        let walk = text.find("birdwatching").unwrap();
        let concert = text.find("concerts").unwrap();
        assert!(walk < concert);
        // Nav chrome and script bodies never leak in
        assert!(!text.contains("Toggle menu"));
        assert!(!text.contains("analytics"));
    }

    #[test]
    fn photo_wall_has_no_paragraphs() {
        assert_eq!(extract_paragraph_text(&fixture("photo_wall")), "");
    }

    #[test]
    fn nested_markup_keeps_inner_text() {
        let html = "<p>Join the <a href=\"/hike\"><strong>Saturday hike</strong></a> now</p>";
        assert_eq!(extract_paragraph_text(html), "Join the Saturday hike now");
    }

    #[test]
    fn paragraphs_joined_with_single_space() {
        let html = "<p>one</p><div><p>two</p></div><p>three</p>";
        assert_eq!(extract_paragraph_text(html), "one two three");
    }

    #[test]
    fn result_is_trimmed() {
        let html = "<p>  padded  </p>";
        assert_eq!(extract_paragraph_text(html), "padded");
    }

    #[test]
    fn empty_document_yields_empty_string() {
        assert_eq!(extract_paragraph_text(""), "");
        assert_eq!(extract_paragraph_text("<html><body></body></html>"), "");
    }
}
