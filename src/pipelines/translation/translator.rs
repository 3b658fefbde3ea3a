use crate::common::error::BatchTranslateError;
use crate::pipelines::translation::TargetLanguage;

/// # Translation engine for a batch of sentences
///
/// Receives sentences already tagged with the target language marker and returns exactly one
/// translation per sentence, in the same order.
pub trait Translator {
    fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>, BatchTranslateError>;
}

/// # Provides a `Translator` for a target language
///
/// Called once per target language before its sentences are processed. Implemented for closures
/// taking a `&TargetLanguage`, which allows plugging in alternative engines.
///
/// # Example
///
/// ```
/// use opus_batch_translate::pipelines::translation::{
///     TargetLanguage, Translator, TranslatorLoader,
/// };
/// use opus_batch_translate::BatchTranslateError;
///
/// struct Echo;
///
/// impl Translator for Echo {
///     fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>, BatchTranslateError> {
///         Ok(texts.to_vec())
///     }
/// }
///
/// let loader = |_: &TargetLanguage| -> Result<Echo, BatchTranslateError> { Ok(Echo) };
/// let translator = loader.load(&TargetLanguage::new("es")?)?;
/// assert_eq!(translator.translate_batch(&["a".to_string()])?, vec!["a"]);
/// # Ok::<(), BatchTranslateError>(())
/// ```
pub trait TranslatorLoader {
    type Translator: Translator;

    fn load(&self, target_language: &TargetLanguage)
        -> Result<Self::Translator, BatchTranslateError>;
}

impl<F, T> TranslatorLoader for F
where
    F: Fn(&TargetLanguage) -> Result<T, BatchTranslateError>,
    T: Translator,
{
    type Translator = T;

    fn load(&self, target_language: &TargetLanguage) -> Result<T, BatchTranslateError> {
        self(target_language)
    }
}

impl<T: Translator + ?Sized> Translator for Box<T> {
    fn translate_batch(&self, texts: &[String]) -> Result<Vec<String>, BatchTranslateError> {
        (**self).translate_batch(texts)
    }
}
