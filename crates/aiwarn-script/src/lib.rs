use aiwarn_detect::classify_tags;
use aiwarn_overlay::credit::{resolve_credit, CreditSource};
use aiwarn_overlay::Overlay;
use aiwarn_page::{Document, SidecarClient};
use tracing::debug;

/// Body dataset key carrying the host page's template kind.
pub const PAGE_KIND_KEY: &str = "page_name";

/// The single page template the warning runs on. Everything else is a no-op.
pub const PRODUCT_PAGE_KIND: &str = "view_game";

/// What a page-load trigger ended up doing. Every failure mode collapses to
/// a quiet no-op variant; nothing here is an error.
#[derive(Debug)]
pub enum RunOutcome {
    /// Not a product view; the sidecar was never fetched.
    NotProductPage,
    /// The sidecar yielded no usable data; the warning is suppressed.
    NoMetadata,
    /// Metadata declared no AI-generated content.
    NoAiContent,
    /// An earlier trigger already mounted the overlay.
    AlreadyPresented,
    /// The warning overlay was mounted; the handle drives dismissal.
    Presented(Overlay),
}

/// The whole script, run once per page load: activation gate, one sidecar
/// fetch awaited before anything else, classification, then the singleton
/// presentation. Never returns an error and never panics on bad data.
pub async fn run_page_load(
    doc: &mut Document,
    sidecar: &SidecarClient,
    credit_sources: &[Box<dyn CreditSource>],
) -> RunOutcome {
    if doc.dataset(PAGE_KIND_KEY) != Some(PRODUCT_PAGE_KIND) {
        return RunOutcome::NotProductPage;
    }

    let Some(metadata) = sidecar.fetch(doc.url()).await else {
        return RunOutcome::NoMetadata;
    };

    let tags = metadata.tags.unwrap_or_default();
    let report = classify_tags(&tags);
    if !report.has_ai {
        return RunOutcome::NoAiContent;
    }

    let credit = resolve_credit(credit_sources);
    match Overlay::present(doc, metadata.title.as_deref(), &report.categories, &credit) {
        Some(overlay) => {
            debug!(categories = ?report.categories, "ai content warning presented");
            RunOutcome::Presented(overlay)
        }
        None => RunOutcome::AlreadyPresented,
    }
}
