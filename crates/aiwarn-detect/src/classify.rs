use aiwarn_core::AiContentReport;

/// Tag declaring AI-generated content, bare or with a `-<category>` suffix.
pub const AI_TAG: &str = "ai-generated";

/// Categories with a reserved spot at the front of the report, in the fixed
/// order they are listed in.
pub const KNOWN_CATEGORIES: [&str; 4] = ["graphics", "audio", "text", "code"];

/// Inspects a page's tag list for AI-content declarations.
///
/// Known categories are seeded first, in `KNOWN_CATEGORIES` order, by exact
/// match against `ai-generated-<category>`. Every remaining `ai-generated*`
/// tag then flips `has_ai` and appends any novel category suffix in
/// first-seen order. A bare `ai-generated` tag contributes no category.
pub fn classify_tags(tags: &[String]) -> AiContentReport {
    let mut has_ai = false;
    let mut categories: Vec<String> = Vec::new();

    for known in KNOWN_CATEGORIES {
        let tagged = format!("{AI_TAG}-{known}");
        if tags.iter().any(|t| *t == tagged) {
            categories.push(known.to_string());
        }
    }

    for tag in tags {
        let Some(rest) = tag.strip_prefix(AI_TAG) else {
            continue;
        };
        let suffix = match rest {
            "" => None,
            dashed => match dashed.strip_prefix('-') {
                Some(category) => Some(category),
                // e.g. "ai-generatedfoo", not a declaration
                None => continue,
            },
        };
        has_ai = true;
        if let Some(category) = suffix.filter(|c| !c.is_empty()) {
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
    }

    AiContentReport { has_ai, categories }
}
