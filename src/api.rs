use serde::{Deserialize, Serialize};
use persona_playback::library::{ContentItem, NewContentItem};
use persona_playback::scoring::FeedbackBand;
use persona_playback::{
    ContentAnalysis, ContentKind, ContentVariant, Persona, PreviewError, Reaction, Style,
    VariationAxis,
};

#[derive(Debug, Deserialize)]
pub struct ApiSimulateRequest {
    pub request_id: Option<String>,
    pub persona_id: Option<String>,
    pub text: Option<String>,
}

impl ApiSimulateRequest {
    pub fn text(&self) -> Result<String, PreviewError> {
        required_text(self.text.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct ApiSimulateResponse {
    pub request_id: String,
    pub persona: Persona,
    pub band: FeedbackBand,
    pub band_label: String,
    pub reaction: Reaction,
}

impl ApiSimulateResponse {
    pub fn new(request_id: String, persona: Persona, reaction: Reaction) -> Self {
        let band = reaction.band();
        Self {
            request_id,
            persona,
            band,
            band_label: band.label().to_string(),
            reaction,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiTransformRequest {
    pub text: Option<String>,
    pub style: String,
}

#[derive(Debug, Serialize)]
pub struct ApiTransformResponse {
    pub style: Option<Style>,
    pub content: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiVariationsRequest {
    pub persona_id: Option<String>,
    pub text: Option<String>,
    pub axis: Option<String>,
}

impl ApiVariationsRequest {
    pub fn axis(&self) -> Result<VariationAxis, PreviewError> {
        match self.axis.as_deref() {
            None => Ok(VariationAxis::Tone),
            Some(value) => VariationAxis::from_str(value)
                .ok_or_else(|| PreviewError::invalid_tag("variation axis", value)),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ApiVariationsResponse {
    pub persona_id: String,
    pub axis: VariationAxis,
    pub variations: Vec<ContentVariant>,
}

#[derive(Debug, Deserialize)]
pub struct ApiRespondRequest {
    pub persona_id: Option<String>,
    pub kind: Option<String>,
    pub text: Option<String>,
}

impl ApiRespondRequest {
    pub fn kind(&self) -> Result<ContentKind, PreviewError> {
        parse_kind(self.kind.as_deref())
    }
}

#[derive(Debug, Serialize)]
pub struct ApiRespondResponse {
    pub persona_id: String,
    pub kind: ContentKind,
    pub response: String,
}

#[derive(Debug, Deserialize)]
pub struct ApiAnalyzeRequest {
    pub text: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct ApiAnalyzeResponse {
    pub analysis: ContentAnalysis,
}

#[derive(Debug, Deserialize)]
pub struct ApiLibraryQuery {
    pub kind: Option<String>,
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiLibraryCreateRequest {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub persona_id: Option<String>,
    pub content: Option<String>,
}

impl ApiLibraryCreateRequest {
    pub fn into_new_item(self) -> Result<NewContentItem, PreviewError> {
        let kind = parse_kind(self.kind.as_deref())?;
        Ok(NewContentItem {
            title: self.title.unwrap_or_default(),
            kind,
            content: self.content.unwrap_or_default(),
        })
    }
}

#[derive(Debug, Serialize)]
pub struct ApiLibraryResponse {
    pub items: Vec<ContentItem>,
}

#[derive(Debug, Deserialize)]
pub struct ApiPersonaQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct ApiSelectionRequest {
    pub persona_id: String,
}

pub fn required_text(text: Option<&str>) -> Result<String, PreviewError> {
    let text = text.unwrap_or_default().trim();
    if text.is_empty() {
        return Err(PreviewError::MissingContent);
    }
    Ok(text.to_string())
}

pub fn parse_kind(value: Option<&str>) -> Result<ContentKind, PreviewError> {
    match value {
        None => Ok(ContentKind::Text),
        Some(value) => ContentKind::from_str(value)
            .ok_or_else(|| PreviewError::invalid_tag("content kind", value)),
    }
}
