use std::path::{Path, PathBuf};

use crate::assets::logo::LogoSource;
use crate::document::load_document;
use crate::foundation::error::OgResult;
use crate::render::compose::Compositor;

/// Render every speaker of the document at `document_path`, in order.
///
/// The first failing speaker aborts the batch; cards already written stay on disk and no later
/// speaker is attempted. The logo is resolved again for every speaker.
#[tracing::instrument(skip(compositor))]
pub fn generate_all(document_path: &Path, compositor: &mut Compositor) -> OgResult<Vec<PathBuf>> {
    let doc = load_document(document_path)?;
    let logo = doc.logo().and_then(LogoSource::parse);

    let mut created = Vec::with_capacity(doc.speakers.len());
    for speaker in &doc.speakers {
        created.push(compositor.render_speaker(speaker, logo.as_ref())?);
    }
    Ok(created)
}
