use scraper::{ElementRef, Html, Node, Selector};

use crate::{genius::Genius, http::Transport, warning};

/// Anchor elements inside the classic lyrics region.
const LYRIC_LINES: &str = ".lyrics a";
/// Containers used by the current page layout, one per verse block.
const LYRIC_CONTAINERS: &str = "div[data-lyrics-container='true']";

impl<T: Transport> Genius<T> {
    /// Fetches a song page and returns its lyric lines.
    ///
    /// Never fails: a page that cannot be fetched or has no lyrics markup
    /// yields an empty list.
    pub async fn get_lyrics(&self, page_url: &str) -> Vec<String> {
        match self.fetcher.fetch_page(page_url).await {
            Ok(html) => extract_lyrics(&html),
            Err(e) => {
                warning!("Cannot fetch lyrics page. Err: {}", e);
                Vec::new()
            }
        }
    }
}

/// Extracts lyric lines from a song page in document order.
///
/// Reads the trimmed text of every anchor inside `.lyrics`. Pages without
/// that region fall back to the `data-lyrics-container` blocks, split at
/// `<br>` with blank lines dropped.
pub fn extract_lyrics(html: &str) -> Vec<String> {
    let doc = Html::parse_document(html);

    let lines = match Selector::parse(LYRIC_LINES) {
        Ok(selector) => doc
            .select(&selector)
            .map(|line| line.text().collect::<String>().trim().to_string())
            .collect::<Vec<_>>(),
        Err(_) => Vec::new(),
    };
    if !lines.is_empty() {
        return lines;
    }

    match Selector::parse(LYRIC_CONTAINERS) {
        Ok(selector) => doc
            .select(&selector)
            .flat_map(container_lines)
            .collect(),
        Err(_) => Vec::new(),
    }
}

fn container_lines(container: ElementRef<'_>) -> Vec<String> {
    let mut raw = String::new();
    collect_text(container, &mut raw);

    raw.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for node in element.children() {
        match node.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(el) if el.name() == "br" => out.push('\n'),
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(node) {
                    collect_text(child, out);
                }
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_anchor_lines_in_order() {
        let html = r#"
            <html><body>
              <div class="lyrics">
                <p>
                  <a href="/1">  First line </a><br>
                  <a href="/2">Second <i>line</i></a>
                </p>
              </div>
              <a href="/elsewhere">Not a lyric</a>
            </body></html>"#;

        assert_eq!(extract_lyrics(html), vec!["First line", "Second line"]);
    }

    #[test]
    fn falls_back_to_lyrics_containers() {
        let html = r#"
            <div data-lyrics-container="true">[Verse 1]<br>Hello <a href="/x"><span>there</span></a><br><br>world</div>
            <div data-lyrics-container="true">Again</div>"#;

        assert_eq!(
            extract_lyrics(html),
            vec!["[Verse 1]", "Hello there", "world", "Again"]
        );
    }

    #[test]
    fn missing_markup_means_no_lyrics() {
        assert!(extract_lyrics("<html><body><p>Nothing here</p></body></html>").is_empty());
        assert!(extract_lyrics("").is_empty());
    }
}
