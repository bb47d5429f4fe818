//! Tech stack reconciliation — resolves every technology mention in a resume
//! against the catalog.
//!
//! Hits keep the name as written and take the catalog logo. Misses are
//! dropped. Never fails and never grows a list.

use tracing::debug;

use crate::catalog::TechCatalog;
use crate::models::resume::{ResumeDocument, TechItem};

pub fn reconcile(mut doc: ResumeDocument, catalog: &TechCatalog) -> ResumeDocument {
    doc.skills = reconcile_items(doc.skills, catalog);
    for experience in &mut doc.experience {
        experience.tech_stack = reconcile_items(std::mem::take(&mut experience.tech_stack), catalog);
    }
    for project in &mut doc.projects {
        project.tech_stack = reconcile_items(std::mem::take(&mut project.tech_stack), catalog);
    }
    doc
}

pub fn reconcile_items(items: Vec<TechItem>, catalog: &TechCatalog) -> Vec<TechItem> {
    items
        .into_iter()
        .filter_map(|item| match catalog.lookup(&item.name) {
            Some(entry) => Some(TechItem {
                name: item.name,
                logo: entry.logo.to_string(),
            }),
            None => {
                debug!("Dropping unknown technology '{}'", item.name);
                None
            }
        })
        .collect()
}
