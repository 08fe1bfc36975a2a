use std::borrow::Cow;

use super::model::Bookmark;

/// Escapes angle brackets so embedded tags render as text.
pub fn escape_markup(input: &str) -> Cow<'_, str> {
    if !input.contains(['<', '>']) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Outbound copy of `bookmark` with markup neutralized in every text field.
pub fn sanitize_bookmark(bookmark: Bookmark) -> Bookmark {
    Bookmark {
        id: bookmark.id,
        title: escape_markup(&bookmark.title).into_owned(),
        url: escape_markup(&bookmark.url).into_owned(),
        description: bookmark
            .description
            .as_deref()
            .map(|d| escape_markup(d).into_owned()),
        rating: bookmark.rating,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clean_text_is_borrowed() {
        assert!(matches!(
            escape_markup("https://example.com/?a=1&b=2"),
            Cow::Borrowed(_)
        ));
    }

    #[test]
    fn script_tags_are_escaped() {
        assert_eq!(
            escape_markup(r#"Naughty <script>alert("xss");</script>"#),
            r#"Naughty &lt;script&gt;alert("xss");&lt;/script&gt;"#
        );
    }

    #[test]
    fn sanitizes_every_text_field() {
        let raw = Bookmark {
            id: 1,
            title: "<b>bold</b>".to_string(),
            url: "https://example.com/<img>".to_string(),
            description: Some(r#"<img src="x" onerror="alert(1)">"#.to_string()),
            rating: 4,
        };

        let clean = sanitize_bookmark(raw);
        assert_eq!(clean.id, 1);
        assert_eq!(clean.title, "&lt;b&gt;bold&lt;/b&gt;");
        assert_eq!(clean.url, "https://example.com/&lt;img&gt;");
        assert_eq!(
            clean.description.as_deref(),
            Some(r#"&lt;img src="x" onerror="alert(1)"&gt;"#)
        );
        assert_eq!(clean.rating, 4);
    }
}
