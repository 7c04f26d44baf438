use async_trait::async_trait;
use aws_sdk_translate::config::Region;
use tracing::info;

use crate::config::Config;
use crate::translation::{TranslateError, Translator};

/// Comprehend for language detection, Translate for the translation itself.
#[derive(Debug, Clone)]
pub struct AwsTranslator {
    comprehend_client: aws_sdk_comprehend::Client,
    translate_client: aws_sdk_translate::Client,
}

impl AwsTranslator {
    pub fn new(
        comprehend_client: aws_sdk_comprehend::Client,
        translate_client: aws_sdk_translate::Client,
    ) -> Self {
        Self {
            comprehend_client,
            translate_client,
        }
    }

    /// Both clients are pinned to `config.translate_region`.
    pub fn from_config(sdk_config: &aws_config::SdkConfig, config: &Config) -> Self {
        let region = Region::new(config.translate_region.clone());

        let comprehend_config = aws_sdk_comprehend::config::Builder::from(sdk_config)
            .region(region.clone())
            .build();
        let translate_config = aws_sdk_translate::config::Builder::from(sdk_config)
            .region(region)
            .build();

        Self::new(
            aws_sdk_comprehend::Client::from_conf(comprehend_config),
            aws_sdk_translate::Client::from_conf(translate_config),
        )
    }
}

#[async_trait]
impl Translator for AwsTranslator {
    async fn detect_dominant_language(&self, text: &str) -> Result<String, TranslateError> {
        let output = self
            .comprehend_client
            .detect_dominant_language()
            .text(text)
            .send()
            .await
            .map_err(Box::new)?;

        let language = output
            .languages()
            .iter()
            .filter(|language| language.language_code().is_some())
            .max_by(|a, b| {
                a.score()
                    .unwrap_or_default()
                    .total_cmp(&b.score().unwrap_or_default())
            })
            .and_then(|language| language.language_code())
            .ok_or(TranslateError::NoLanguageDetected)?;

        info!("Detected language: {}", language);
        Ok(language.to_string())
    }

    async fn translate(
        &self,
        text: &str,
        source_language: &str,
        target_language: &str,
    ) -> Result<String, TranslateError> {
        let output = self
            .translate_client
            .translate_text()
            .text(text)
            .source_language_code(source_language)
            .target_language_code(target_language)
            .send()
            .await
            .map_err(Box::new)?;

        Ok(output.translated_text().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aws_sdk_translate::config::{BehaviorVersion, Credentials};
    use aws_smithy_runtime::client::http::test_util::{ReplayEvent, StaticReplayClient};
    use aws_smithy_types::body::SdkBody;

    fn event(uri: &str, status: u16, body: &str) -> ReplayEvent {
        ReplayEvent::new(
            http::Request::builder()
                .uri(uri)
                .body(SdkBody::empty())
                .unwrap(),
            http::Response::builder()
                .status(status)
                .header("content-type", "application/x-amz-json-1.1")
                .body(SdkBody::from(body.to_string()))
                .unwrap(),
        )
    }

    fn translator(comprehend: Vec<ReplayEvent>, translate: Vec<ReplayEvent>) -> AwsTranslator {
        let region = Region::new("us-east-1");
        let credentials = Credentials::new("akid", "secret", None, None, "test");

        let comprehend_config = aws_sdk_comprehend::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(region.clone())
            .credentials_provider(credentials.clone())
            .http_client(StaticReplayClient::new(comprehend))
            .build();
        let translate_config = aws_sdk_translate::Config::builder()
            .behavior_version(BehaviorVersion::latest())
            .region(region)
            .credentials_provider(credentials)
            .http_client(StaticReplayClient::new(translate))
            .build();

        AwsTranslator::new(
            aws_sdk_comprehend::Client::from_conf(comprehend_config),
            aws_sdk_translate::Client::from_conf(translate_config),
        )
    }

    const COMPREHEND_URI: &str = "https://comprehend.us-east-1.amazonaws.com/";
    const TRANSLATE_URI: &str = "https://translate.us-east-1.amazonaws.com/";

    #[tokio::test]
    async fn highest_scoring_language_wins() {
        let translator = translator(
            vec![event(
                COMPREHEND_URI,
                200,
                r#"{"Languages":[{"LanguageCode":"en","Score":0.21},{"LanguageCode":"es","Score":0.74},{"LanguageCode":"pt","Score":0.05}]}"#,
            )],
            vec![],
        );

        let language = translator
            .detect_dominant_language("comprar leche")
            .await
            .unwrap();
        assert_eq!(language, "es");
    }

    #[tokio::test]
    async fn no_languages_is_an_error() {
        let translator = translator(vec![event(COMPREHEND_URI, 200, r#"{"Languages":[]}"#)], vec![]);

        let err = translator.detect_dominant_language("?").await.unwrap_err();
        assert!(matches!(err, TranslateError::NoLanguageDetected));
    }

    #[tokio::test]
    async fn translated_text_is_returned() {
        let translator = translator(
            vec![],
            vec![event(
                TRANSLATE_URI,
                200,
                r#"{"TranslatedText":"buy milk","SourceLanguageCode":"es","TargetLanguageCode":"en"}"#,
            )],
        );

        let text = translator.translate("comprar leche", "es", "en").await.unwrap();
        assert_eq!(text, "buy milk");
    }

    #[tokio::test]
    async fn unsupported_pair_is_propagated() {
        let translator = translator(
            vec![],
            vec![event(
                TRANSLATE_URI,
                400,
                r#"{"__type":"UnsupportedLanguagePairException","Message":"Unsupported language pair: es to xx"}"#,
            )],
        );

        let err = translator.translate("comprar leche", "es", "xx").await.unwrap_err();
        assert!(matches!(err, TranslateError::Translate(_)));
    }
}
