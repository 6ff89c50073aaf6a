use serde::Serialize;

use crate::error::{PreviewError, PreviewResult};
use crate::persona::Persona;
use crate::response::assemble_response;
use crate::samples::Platform;
use crate::scoring::{Reaction, ScoreSource};
use crate::variation::{generate_variations, ContentVariant, VariationAxis};
use crate::{ContentKind, PlaybackEngine};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContentDraft {
    pub text: String,
    pub platform: Platform,
    pub title: Option<String>,
}

/// Explicit state of one preview: the chosen persona, the submitted content
/// and whatever has been derived from them.
///
/// Changing the persona or the content drops derived results; a later call
/// simply replaces earlier ones.
#[derive(Debug, Clone, Default, Serialize)]
pub struct PreviewSession {
    persona: Option<Persona>,
    draft: Option<ContentDraft>,
    reaction: Option<Reaction>,
    variation_axis: Option<VariationAxis>,
    variations: Vec<ContentVariant>,
}

impl PreviewSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn persona(&self) -> Option<&Persona> {
        self.persona.as_ref()
    }

    pub fn draft(&self) -> Option<&ContentDraft> {
        self.draft.as_ref()
    }

    pub fn reaction(&self) -> Option<&Reaction> {
        self.reaction.as_ref()
    }

    pub fn variations(&self) -> &[ContentVariant] {
        &self.variations
    }

    pub fn variation_axis(&self) -> Option<VariationAxis> {
        self.variation_axis
    }

    pub fn select_persona(&mut self, persona: Persona) {
        if self.persona.as_ref() == Some(&persona) {
            return;
        }
        self.persona = Some(persona);
        self.invalidate();
    }

    /// Selecting the already selected persona deselects it.
    pub fn toggle_persona(&mut self, persona: Persona) {
        if self.persona.as_ref().map(|p| p.id.as_str()) == Some(persona.id.as_str()) {
            self.clear_persona();
        } else {
            self.select_persona(persona);
        }
    }

    pub fn clear_persona(&mut self) {
        self.persona = None;
        self.invalidate();
    }

    pub fn submit_content(
        &mut self,
        text: &str,
        platform: Platform,
        title: Option<String>,
    ) -> PreviewResult<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(PreviewError::MissingContent);
        }
        self.draft = Some(ContentDraft {
            text: text.to_string(),
            platform,
            title: title.filter(|title| !title.trim().is_empty()),
        });
        self.invalidate();
        Ok(())
    }

    pub fn simulate(
        &mut self,
        engine: &PlaybackEngine,
        source: &mut dyn ScoreSource,
    ) -> PreviewResult<&Reaction> {
        let (persona, draft) = self.require_inputs()?;
        let reaction = engine.reactions().react(persona, &draft.text, source)?;
        Ok(self.reaction.insert(reaction))
    }

    pub fn generate_variations(
        &mut self,
        axis: VariationAxis,
        engine: &PlaybackEngine,
        source: &mut dyn ScoreSource,
    ) -> PreviewResult<&[ContentVariant]> {
        let (_, draft) = self.require_inputs()?;
        let variations = generate_variations(&draft.text, axis, engine.metrics(), source)?;
        self.variation_axis = Some(axis);
        self.variations = variations;
        Ok(&self.variations)
    }

    pub fn respond(&self, kind: ContentKind) -> PreviewResult<String> {
        let (persona, draft) = self.require_inputs()?;
        Ok(assemble_response(&persona.name, kind, &draft.text))
    }

    fn require_inputs(&self) -> PreviewResult<(&Persona, &ContentDraft)> {
        let persona = self.persona.as_ref().ok_or(PreviewError::MissingPersona)?;
        let draft = self.draft.as_ref().ok_or(PreviewError::MissingContent)?;
        Ok((persona, draft))
    }

    fn invalidate(&mut self) {
        self.reaction = None;
        self.variation_axis = None;
        self.variations.clear();
    }
}
