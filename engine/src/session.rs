//! The interaction state of the studio window.
//!
//! A [`Session`] owns the prompt, the in-flight indicator, the last generated
//! image and the user-facing error. Every operation is split into a `begin_*`
//! transition, which hands out an [`Attempt`] and the prompt to send, and a
//! `finish_*` transition that applies the outcome. Outcomes tagged with an
//! attempt other than the latest one are dropped.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use color_eyre::{Report, Result};
use log::{debug, error, info};
use strum::Display;

use crate::{download, image_model::Image, locale::Language};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Display)]
pub enum OperationStatus {
    #[default]
    Idle,
    Enhancing,
    Generating,
}

/// Identifies one started enhancement or generation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Attempt(u64);

/// What happens to the error of a failed operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailurePolicy {
    /// Logged, the user never sees it
    Absorb,
    /// Logged, the user sees the generic failure message
    Surface,
}

pub const ENHANCEMENT_FAILURES: FailurePolicy = FailurePolicy::Absorb;
pub const GENERATION_FAILURES: FailurePolicy = FailurePolicy::Surface;

#[derive(Debug, Clone, Default)]
pub struct Session {
    prompt: String,
    status: OperationStatus,
    result: Option<Image>,
    error: Option<&'static str>,
    latest_attempt: u64,
    language: Language,
}

impl Session {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            ..Default::default()
        }
    }

    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    pub fn status(&self) -> OperationStatus {
        self.status
    }

    pub fn result(&self) -> Option<&Image> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&'static str> {
        self.error
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn set_language(&mut self, language: Language) {
        self.language = language;
    }

    /// Any text is accepted, also while an operation is running
    pub fn edit_prompt(&mut self, text: impl Into<String>) {
        self.prompt = text.into();
    }

    /// Whether enhance and generate may be triggered
    pub fn can_act(&self) -> bool {
        !self.prompt.is_empty() && self.status == OperationStatus::Idle
    }

    pub fn begin_enhance(&mut self) -> Option<(Attempt, String)> {
        if !self.can_act() {
            return None;
        }
        self.status = OperationStatus::Enhancing;
        Some((self.next_attempt(), self.prompt.clone()))
    }

    /// Replaces the prompt with the trimmed suggestion, unless it is blank.
    /// Failures are handled with [`ENHANCEMENT_FAILURES`]. Returns whether the
    /// outcome was applied.
    pub fn finish_enhance(&mut self, attempt: Attempt, outcome: Result<Option<String>>) -> bool {
        if !self.is_current(attempt, OperationStatus::Enhancing) {
            return false;
        }
        self.status = OperationStatus::Idle;

        let suggestion = outcome.map(|text| {
            text.map(|t| t.trim().to_string())
                .filter(|t| !t.is_empty())
        });
        match suggestion {
            Ok(Some(suggestion)) => self.prompt = suggestion,
            Ok(None) => debug!("No suggestion, keeping prompt"),
            Err(e) => self.fail(ENHANCEMENT_FAILURES, "Prompt enhancement", e),
        }
        true
    }

    /// Clears the previous image and error
    pub fn begin_generate(&mut self) -> Option<(Attempt, String)> {
        if !self.can_act() {
            return None;
        }
        self.error = None;
        self.result = None;
        self.status = OperationStatus::Generating;
        Some((self.next_attempt(), self.prompt.clone()))
    }

    /// Stores the image. Failures are handled with [`GENERATION_FAILURES`].
    /// Returns whether the outcome was applied.
    pub fn finish_generate(&mut self, attempt: Attempt, outcome: Result<Image>) -> bool {
        if !self.is_current(attempt, OperationStatus::Generating) {
            return false;
        }
        self.status = OperationStatus::Idle;

        match outcome {
            Ok(image) => {
                info!("Generated image, {} bytes", image.data.len());
                self.result = Some(image);
            }
            Err(e) => self.fail(GENERATION_FAILURES, "Image generation", e),
        }
        true
    }

    /// Saves the current image into `dir`. Does nothing without an image.
    pub fn download(&self, dir: &Path) -> Result<Option<PathBuf>> {
        self.download_at(dir, Utc::now())
    }

    pub fn download_at(&self, dir: &Path, now: DateTime<Utc>) -> Result<Option<PathBuf>> {
        match &self.result {
            Some(image) => download::save(image, dir, now).map(Some),
            None => Ok(None),
        }
    }

    fn next_attempt(&mut self) -> Attempt {
        self.latest_attempt += 1;
        Attempt(self.latest_attempt)
    }

    fn is_current(&self, attempt: Attempt, expected: OperationStatus) -> bool {
        let current = attempt.0 == self.latest_attempt && self.status == expected;
        if !current {
            debug!(
                "Dropping outcome of {attempt:?}, latest is {} while {}",
                self.latest_attempt, self.status
            );
        }
        current
    }

    fn fail(&mut self, policy: FailurePolicy, operation: &str, err: Report) {
        error!("{operation} failed: {err:?}");
        match policy {
            FailurePolicy::Absorb => {}
            FailurePolicy::Surface => self.error = Some(self.language.generation_failed()),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use color_eyre::eyre::eyre;
    use reqwest::StatusCode;

    use super::*;
    use crate::{
        enhancer::{PromptEnhancer, tests::FakeLLM},
        google_api,
        image_model::{ImageModel, imagen::imagen_api, tests::FakeImageModel},
    };

    fn png() -> Image {
        Image {
            data: b"\x89PNG\r\n\x1a\n".to_vec(),
            mime_type: "image/png".into(),
        }
    }

    fn session_with(prompt: &str) -> Session {
        let mut s = Session::new(Language::English);
        s.edit_prompt(prompt);
        s
    }

    #[test]
    fn buttons_need_prompt_and_idle() {
        let mut s = Session::default();
        assert!(!s.can_act());
        assert_eq!(s.begin_enhance(), None);
        assert_eq!(s.begin_generate(), None);

        s.edit_prompt("a cat");
        assert!(s.can_act());

        let (attempt, _) = s.begin_enhance().unwrap();
        assert_eq!(s.status(), OperationStatus::Enhancing);
        assert!(!s.can_act());
        assert_eq!(s.begin_generate(), None);
        assert_eq!(s.begin_enhance(), None);

        s.finish_enhance(attempt, Ok(None));
        let (attempt, _) = s.begin_generate().unwrap();
        assert!(!s.can_act());
        assert_eq!(s.begin_enhance(), None);

        s.finish_generate(attempt, Ok(png()));
        assert!(s.can_act());

        s.edit_prompt("");
        assert!(!s.can_act());
    }

    #[test]
    fn enhancement_replaces_prompt_with_trimmed_text() {
        let mut s = session_with("a cat");
        let (attempt, sent) = s.begin_enhance().unwrap();
        assert_eq!(sent, "a cat");

        assert!(s.finish_enhance(attempt, Ok(Some("  a fluffy cat at dusk \n".into()))));
        assert_eq!(s.prompt(), "a fluffy cat at dusk");
        assert_eq!(s.status(), OperationStatus::Idle);
    }

    #[test]
    fn enhancement_without_text_keeps_prompt() {
        let mut s = session_with("  a cat ");
        let (attempt, _) = s.begin_enhance().unwrap();
        s.finish_enhance(attempt, Ok(None));
        assert_eq!(s.prompt(), "  a cat ");
        assert_eq!(s.status(), OperationStatus::Idle);
    }

    #[test]
    fn enhancement_with_blank_text_keeps_prompt() {
        for text in ["", " \n "] {
            let mut s = session_with("a cat");
            let (attempt, _) = s.begin_enhance().unwrap();
            assert!(s.finish_enhance(attempt, Ok(Some(text.into()))));
            assert_eq!(s.prompt(), "a cat", "{text:?}");
            assert!(s.can_act());
        }
    }

    #[test]
    fn enhancement_failure_is_absorbed() {
        let mut s = session_with("a cat");
        let (attempt, _) = s.begin_enhance().unwrap();
        s.finish_enhance(attempt, Err(eyre!("connection refused")));

        assert_eq!(s.prompt(), "a cat");
        assert_eq!(s.error(), None);
        assert_eq!(s.status(), OperationStatus::Idle);
    }

    #[test]
    fn enhancement_failure_keeps_previous_generation_state() {
        let mut s = session_with("a cat");
        let (attempt, _) = s.begin_generate().unwrap();
        s.finish_generate(attempt, Err(eyre!("boom")));
        let (attempt, _) = s.begin_enhance().unwrap();
        s.finish_enhance(attempt, Err(eyre!("boom")));

        assert_eq!(
            s.error(),
            Some(Language::English.generation_failed()),
            "enhancement neither sets nor clears the error"
        );
    }

    #[test]
    fn generation_success_stores_image() {
        let mut s = session_with("a cat");
        let (attempt, sent) = s.begin_generate().unwrap();
        assert_eq!(sent, "a cat");
        assert_eq!(s.status(), OperationStatus::Generating);

        assert!(s.finish_generate(attempt, Ok(png())));
        assert_eq!(s.result(), Some(&png()));
        assert_eq!(s.error(), None);
        assert_eq!(s.status(), OperationStatus::Idle);
    }

    #[test]
    fn generation_failure_is_surfaced() {
        let mut s = session_with("a cat");
        let (attempt, _) = s.begin_generate().unwrap();
        s.finish_generate(attempt, Err(eyre!("Response contained no predictions")));

        assert_eq!(
            s.error(),
            Some("Oops! Something went wrong while creating the image. Please try again.")
        );
        assert_eq!(s.result(), None);
        assert_eq!(s.status(), OperationStatus::Idle);
    }

    #[test]
    fn failure_policies_differ() {
        assert_eq!(ENHANCEMENT_FAILURES, FailurePolicy::Absorb);
        assert_eq!(GENERATION_FAILURES, FailurePolicy::Surface);
    }

    #[test]
    fn failure_message_follows_language() {
        let mut s = session_with("kucing");
        s.set_language(Language::Indonesian);
        let (attempt, _) = s.begin_generate().unwrap();
        s.finish_generate(attempt, Err(eyre!("boom")));
        assert_eq!(
            s.error(),
            Some("Ups! Terjadi kesalahan saat membuat gambar. Silakan coba lagi.")
        );
    }

    #[test]
    fn new_generation_clears_previous_outcome() {
        let mut s = session_with("a cat");
        let (attempt, _) = s.begin_generate().unwrap();
        s.finish_generate(attempt, Ok(png()));

        s.begin_generate().unwrap();
        assert_eq!(s.result(), None);
        assert_eq!(s.error(), None);

        let mut s = session_with("a cat");
        let (attempt, _) = s.begin_generate().unwrap();
        s.finish_generate(attempt, Err(eyre!("boom")));
        assert!(s.error().is_some());

        s.begin_generate().unwrap();
        assert_eq!(s.error(), None);
    }

    #[test]
    fn stale_outcomes_are_dropped() {
        let mut s = session_with("a cat");
        let (first, _) = s.begin_generate().unwrap();
        assert!(s.finish_generate(first, Err(eyre!("boom"))));

        let (second, _) = s.begin_generate().unwrap();
        assert!(!s.finish_generate(first, Ok(png())));
        assert_eq!(s.result(), None);
        assert_eq!(s.status(), OperationStatus::Generating);

        // an id from the other kind of operation doesn't count either
        assert!(!s.finish_enhance(second, Ok(Some("hijacked".into()))));
        assert_eq!(s.prompt(), "a cat");

        assert!(s.finish_generate(second, Ok(png())));
        assert!(!s.finish_generate(second, Err(eyre!("duplicate"))));
        assert_eq!(s.result(), Some(&png()));
        assert_eq!(s.error(), None);
    }

    #[test]
    fn download_needs_an_image() -> Result<()> {
        let dir = tempfile::tempdir()?;
        let now = Utc.timestamp_millis_opt(1_760_612_345_678).unwrap();

        let mut s = session_with("a cat");
        assert_eq!(s.download_at(dir.path(), now)?, None);
        assert_eq!(std::fs::read_dir(dir.path())?.count(), 0);

        let (attempt, _) = s.begin_generate().unwrap();
        s.finish_generate(attempt, Ok(png()));
        let path = s.download_at(dir.path(), now)?.unwrap();

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.contains("1760612345678"));
        assert!(name.ends_with(".png"));
        assert_eq!(std::fs::read(&path)?, png().data);
        assert_eq!(s.status(), OperationStatus::Idle);
        Ok(())
    }

    #[tokio::test]
    async fn enhancer_round_trip() -> Result<()> {
        let enhancer = PromptEnhancer::new(Box::new(FakeLLM::answering(Some(
            " a majestic cat, cinematic lighting ",
        ))));
        let mut s = session_with("a cat");

        let (attempt, prompt) = s.begin_enhance().unwrap();
        let outcome = enhancer.enhance(&prompt).await;
        s.finish_enhance(attempt, outcome);

        assert_eq!(s.prompt(), "a majestic cat, cinematic lighting");
        Ok(())
    }

    #[tokio::test]
    async fn a_cat_from_imagen_payload() -> Result<()> {
        let body: imagen_api::ResponseBody =
            serde_json::from_str(r#"{"predictions":[{"bytesBase64Encoded":"iVBORw0KGgo="}]}"#)?;
        let model = FakeImageModel {
            reply: body.into_image().map_err(|e| e.to_string()),
        };
        let mut s = session_with("a cat");

        let (attempt, prompt) = s.begin_generate().unwrap();
        s.finish_generate(attempt, model.get_image(&prompt).await);

        let image = s.result().unwrap();
        assert_eq!(image.data_url(), "data:image/png;base64,iVBORw0KGgo=");
        assert_eq!(s.error(), None);
        Ok(())
    }

    #[tokio::test]
    async fn a_cat_with_server_error() -> Result<()> {
        let err = google_api::error_from_body(StatusCode::INTERNAL_SERVER_ERROR, "");
        let model = FakeImageModel {
            reply: Err(err.to_string()),
        };
        let mut s = session_with("a cat");

        let (attempt, prompt) = s.begin_generate().unwrap();
        s.finish_generate(attempt, model.get_image(&prompt).await);

        assert_eq!(s.error(), Some(Language::English.generation_failed()));
        assert_eq!(s.result(), None);
        assert_eq!(s.status(), OperationStatus::Idle);
        Ok(())
    }
}
