//! Static catalogue of languages the practice app supports.

use serde::Serialize;

/// One supported language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LanguageDescriptor {
    /// Short language code, e.g. `hi`.
    pub code: &'static str,
    /// English name.
    pub name: &'static str,
    /// Name written in the language itself.
    pub native: &'static str,
    /// Writing system used for practice texts.
    pub script: &'static str,
}

const fn language(
    code: &'static str,
    name: &'static str,
    native: &'static str,
    script: &'static str,
) -> LanguageDescriptor {
    LanguageDescriptor {
        code,
        name,
        native,
        script,
    }
}

static SUPPORTED_LANGUAGES: [LanguageDescriptor; 20] = [
    language("hi", "Hindi", "हिन्दी", "Devanagari"),
    language("mr", "Marathi", "मराठी", "Devanagari"),
    language("sa", "Sanskrit", "संस्कृत", "Devanagari"),
    language("bn", "Bengali", "বাংলা", "Bengali"),
    language("ta", "Tamil", "தமிழ்", "Tamil"),
    language("te", "Telugu", "తెలుగు", "Telugu"),
    language("kn", "Kannada", "ಕನ್ನಡ", "Kannada"),
    language("ml", "Malayalam", "മലയാളം", "Malayalam"),
    language("gu", "Gujarati", "ગુજરાતી", "Gujarati"),
    language("pa", "Punjabi", "ਪੰਜਾਬੀ", "Gurmukhi"),
    language("ur", "Urdu", "اردو", "Arabic"),
    language("ar", "Arabic", "العربية", "Arabic"),
    language("en", "English", "English", "Latin"),
    language("fr", "French", "Français", "Latin"),
    language("ru", "Russian", "Русский", "Cyrillic"),
    language("el", "Greek", "Ελληνικά", "Greek"),
    language("th", "Thai", "ไทย", "Thai"),
    language("ko", "Korean", "한국어", "Hangul"),
    language("zh", "Chinese", "中文", "Han"),
    language("ja", "Japanese", "日本語", "Mixed"),
];

/// All supported languages in display order.
///
/// # Examples
/// ```
/// use typing_backend::domain::supported_languages;
///
/// assert_eq!(supported_languages().len(), 20);
/// ```
pub fn supported_languages() -> &'static [LanguageDescriptor] {
    &SUPPORTED_LANGUAGES
}
