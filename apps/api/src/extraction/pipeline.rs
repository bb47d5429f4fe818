//! End-to-end extraction: extract → reconcile → assemble.
//!
//! The active theme is threaded through as a parameter; nothing here holds
//! request-scoped state.

use tracing::{info, info_span, Instrument};
use uuid::Uuid;

use crate::catalog::TechCatalog;
use crate::extraction::extractor::{extract, ExtractionError};
use crate::extraction::reconcile::reconcile;
use crate::llm_client::{ImageInput, TextModel};
use crate::portfolio::assembler::assemble;
use crate::portfolio::sections::PortfolioDocument;
use crate::portfolio::themes::ResolvedTheme;

pub async fn build_portfolio(
    model: &dyn TextModel,
    image: &ImageInput,
    theme: ResolvedTheme<'_>,
) -> Result<PortfolioDocument, ExtractionError> {
    let run_id = Uuid::new_v4();
    let span = info_span!("extraction", %run_id, theme = theme.name);

    async move {
        let catalog = TechCatalog::global();
        info!("Starting portfolio extraction ({})", image.media_type);

        let extracted = extract(model, image, theme.flags(), catalog).await?;
        let resume = reconcile(extracted.resume, catalog);
        let portfolio = assemble(&resume, &extracted.enrichment, theme);

        info!("Portfolio assembled: sections={:?}", portfolio.kinds());
        Ok(portfolio)
    }
    .instrument(span)
    .await
}
