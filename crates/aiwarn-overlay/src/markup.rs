use aiwarn_core::Credit;

use crate::style;

/// Fallback noun when the sidecar carries no title.
const GENERIC_TITLE: &str = "Product";

/// Turns a category list into the warning's body sentence. Zero categories
/// read as plain "content"; the last two are joined with " and ", anything
/// before them with ", " (no Oxford comma).
pub fn describe_categories(categories: &[String]) -> String {
    let list = match categories {
        [] => "content".to_string(),
        [only] => only.clone(),
        [head @ .., a, b] => {
            let tail = format!("{a} and {b}");
            if head.is_empty() {
                tail
            } else {
                format!("{}, {}", head.join(", "), tail)
            }
        }
    };
    format!("The creator of this product has specified that it contains AI-generated {list}.")
}

/// Heading line of the dialog. An absent or empty title falls back to the
/// generic noun.
pub fn heading(title: Option<&str>) -> String {
    let title = title.filter(|t| !t.is_empty()).unwrap_or(GENERIC_TITLE);
    format!("{title} contains AI-generated content")
}

/// Inner markup of the overlay container: the dialog with its corner close
/// icon, heading, description, Close button, and footer credit.
pub fn render_dialog(title: Option<&str>, categories: &[String], credit: &Credit) -> String {
    format!(
        concat!(
            "<div class=\"{popup}\">",
            "<svg class=\"{close} {close_corner}\" viewBox=\"0 0 24 24\">",
            "<line x1=\"6\" y1=\"6\" x2=\"18\" y2=\"18\"></line>",
            "<line x1=\"18\" y1=\"6\" x2=\"6\" y2=\"18\"></line>",
            "</svg>",
            "<h2>{heading}</h2>",
            "<p>{description}</p>",
            "<div class=\"{bottom_row}\">",
            "<button class=\"{close} button\">Close</button>",
            "</div>",
            "<a href=\"{homepage}\" class=\"{watermark}\">{label}</a>",
            "</div>"
        ),
        popup = style::POPUP_CLASS,
        close = style::CLOSE_CLASS,
        close_corner = style::CLOSE_CORNER_CLASS,
        bottom_row = style::BOTTOM_ROW_CLASS,
        watermark = style::WATERMARK_CLASS,
        heading = escape_html(&heading(title)),
        description = escape_html(&describe_categories(categories)),
        homepage = escape_html(credit.homepage.as_deref().unwrap_or("")),
        label = escape_html(&watermark_label(credit)),
    )
}

fn watermark_label(credit: &Credit) -> String {
    match (&credit.name, &credit.version) {
        (None, None) => String::new(),
        (name, version) => format!(
            "{} v{}",
            name.as_deref().unwrap_or(""),
            version.as_deref().unwrap_or("")
        ),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn categories(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn empty_list_describes_generic_content() {
        assert_eq!(
            describe_categories(&[]),
            "The creator of this product has specified that it contains AI-generated content."
        );
    }

    #[test]
    fn single_category_renders_verbatim() {
        assert_eq!(
            describe_categories(&categories(&["code"])),
            "The creator of this product has specified that it contains AI-generated code."
        );
    }

    #[test]
    fn two_categories_join_with_and() {
        assert_eq!(
            describe_categories(&categories(&["code", "text"])),
            "The creator of this product has specified that it contains AI-generated code and text."
        );
    }

    #[test]
    fn three_categories_join_without_oxford_comma() {
        assert_eq!(
            describe_categories(&categories(&["graphics", "audio", "code"])),
            "The creator of this product has specified that it contains AI-generated graphics, audio and code."
        );
    }

    #[test]
    fn four_categories_keep_commas_before_final_pair() {
        assert_eq!(
            describe_categories(&categories(&["graphics", "audio", "text", "code"])),
            "The creator of this product has specified that it contains AI-generated graphics, audio, text and code."
        );
    }

    #[test]
    fn heading_uses_title_when_present() {
        assert_eq!(heading(Some("MyGame")), "MyGame contains AI-generated content");
    }

    #[test]
    fn heading_falls_back_on_missing_or_empty_title() {
        assert_eq!(heading(None), "Product contains AI-generated content");
        assert_eq!(heading(Some("")), "Product contains AI-generated content");
    }

    #[test]
    fn dialog_escapes_interpolated_title() {
        let html = render_dialog(
            Some("<script>alert(1)</script>"),
            &[],
            &Credit::default(),
        );
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn dialog_carries_credit_fields() {
        let credit = Credit {
            name: Some("aiwarn".to_string()),
            version: Some("0.1.0".to_string()),
            homepage: Some("https://example.com/aiwarn".to_string()),
        };
        let html = render_dialog(Some("MyGame"), &categories(&["text"]), &credit);
        assert!(html.contains("href=\"https://example.com/aiwarn\""));
        assert!(html.contains("aiwarn v0.1.0"));
    }

    #[test]
    fn empty_credit_renders_blank_watermark() {
        let html = render_dialog(Some("MyGame"), &[], &Credit::default());
        assert!(html.contains("href=\"\""));
        assert!(html.contains(&format!("class=\"{}\"></a>", style::WATERMARK_CLASS)));
    }
}
