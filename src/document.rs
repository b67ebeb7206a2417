use std::path::Path;

use crate::foundation::error::{OgError, OgResult};

pub const DEFAULT_NAME: &str = "Name not specified";
pub const DEFAULT_JOB_TITLE: &str = "Job title not specified";
pub const DEFAULT_TALK_TITLE: &str = "Talk title not specified";

/// One speaker entry of the `speakers` array.
///
/// Every field is optional in JSON. Missing text fields fall back to fixed placeholders; a
/// missing or empty `avatar_url` means the badge is not drawn.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct SpeakerRecord {
    #[serde(default = "default_name")]
    pub name: String,
    #[serde(default = "default_job_title")]
    pub job_title: String,
    #[serde(default = "default_talk_title")]
    pub talk_title: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

impl SpeakerRecord {
    /// Avatar URL, treating the empty string as absent.
    pub fn avatar(&self) -> Option<&str> {
        self.avatar_url.as_deref().filter(|u| !u.is_empty())
    }

    /// Output file name for this speaker: spaces and `/` become `_`.
    ///
    /// Two speakers whose names sanitize identically map to the same file.
    pub fn output_file_name(&self) -> String {
        format!("{}_opengraph.png", self.name.replace([' ', '/'], "_"))
    }
}

fn default_name() -> String {
    DEFAULT_NAME.to_string()
}

fn default_job_title() -> String {
    DEFAULT_JOB_TITLE.to_string()
}

fn default_talk_title() -> String {
    DEFAULT_TALK_TITLE.to_string()
}

/// Top-level input document: a shared logo reference plus the ordered speaker lineup.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct ConferenceDocument {
    #[serde(default)]
    pub logo: Option<String>,
    pub speakers: Vec<SpeakerRecord>,
}

impl ConferenceDocument {
    /// Logo reference, treating the empty string as absent.
    pub fn logo(&self) -> Option<&str> {
        self.logo.as_deref().filter(|l| !l.is_empty())
    }
}

pub fn parse_document(json: &str) -> OgResult<ConferenceDocument> {
    serde_json::from_str(json).map_err(|e| OgError::parse(format!("conference document: {e}")))
}

#[tracing::instrument]
pub fn load_document(path: &Path) -> OgResult<ConferenceDocument> {
    if !path.exists() {
        return Err(OgError::NotFound(path.to_path_buf()));
    }
    let text = std::fs::read_to_string(path)?;
    let doc = parse_document(&text)?;
    tracing::debug!(speakers = doc.speakers.len(), "loaded conference document");
    Ok(doc)
}
