pub mod aws;

use async_trait::async_trait;
use aws_sdk_comprehend::config::http::HttpResponse;
use aws_sdk_comprehend::error::SdkError;
use aws_sdk_comprehend::operation::detect_dominant_language::DetectDominantLanguageError;
use aws_sdk_translate::operation::translate_text::TranslateTextError;

pub use aws::AwsTranslator;

#[derive(Debug, thiserror::Error)]
pub enum TranslateError {
    #[error("no dominant language detected")]
    NoLanguageDetected,

    #[error(transparent)]
    Detect(#[from] Box<SdkError<DetectDominantLanguageError, HttpResponse>>),

    #[error(transparent)]
    Translate(#[from] Box<SdkError<TranslateTextError, HttpResponse>>),
}

/// Language detection and machine translation.
#[async_trait]
pub trait Translator: Send + Sync {
    /// Language code of the dominant language in `text`.
    async fn detect_dominant_language(&self, text: &str) -> Result<String, TranslateError>;

    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslateError>;
}
