//! Derives a base name and locale tag from a `.resx` file name.
//!
//! `Resources.fr-FR.resx` and `Resources.resx` share the base name
//! `Resources`; the first carries the locale tag `fr-FR`, the second the
//! sentinel [`DEFAULT_LOCALE`]. Locale suffixes are recognized by shape, not
//! by a fixed table, so unknown or future codes still classify.
//!
//! The shape test cannot tell a locale from a short word: `Resources.to.resx`
//! classifies `to` as a locale. There is no escape for this.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::DEFAULT_LOCALE;

lazy_static! {
    static ref RESX_EXTENSION_REGEX: Regex = Regex::new(r"(?i-u)\.resx$").unwrap();
    static ref LOCALE_SHAPE_REGEXES: [Regex; 5] = [
        // en, fr, DE
        Regex::new(r"(?i-u)^[a-z]{2}$").unwrap(),
        // en-US, fr-FR
        Regex::new(r"^[a-z]{2}-[A-Z]{2}$").unwrap(),
        // zh-Hans region/script
        Regex::new(r"^[a-z]{2}-[A-Z]{2,4}$").unwrap(),
        // eng, fra
        Regex::new(r"(?i-u)^[a-z]{3}$").unwrap(),
        // smj-no, EN-us
        Regex::new(r"(?i-u)^[a-z]{2,3}-[a-z]{2,4}$").unwrap(),
    ];
}

/// Result of classifying one file name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct Classification {
    pub base_name: String,
    /// A locale suffix exactly as written in the file name, or [`DEFAULT_LOCALE`].
    pub locale_tag: String,
}

impl Classification {
    fn new(base_name: impl Into<String>, locale_tag: impl Into<String>) -> Self {
        Self {
            base_name: base_name.into(),
            locale_tag: locale_tag.into(),
        }
    }

    fn default_locale(base_name: &str) -> Self {
        Self::new(base_name, DEFAULT_LOCALE)
    }

    pub fn is_default(&self) -> bool {
        self.locale_tag == DEFAULT_LOCALE
    }
}

/// One step of the classification chain. Receives the file name with the
/// `.resx` extension already removed.
pub type Rule = fn(&str) -> Option<Classification>;

/// The classification chain, in precedence order. The first rule that
/// returns `Some` decides.
pub const RULES: [(&str, Rule); 4] = [
    ("plain-name", plain_name),
    ("dot-suffix", dot_suffix),
    ("underscore-suffix", underscore_suffix),
    ("fallback", fallback),
];

/// Classifies `file_name` into a base name and locale tag.
///
/// # Example
/// ```rust
/// use resxkit::classify::classify;
/// let c = classify("MyApp.Resources.de.resx");
/// assert_eq!(c.base_name, "MyApp.Resources");
/// assert_eq!(c.locale_tag, "de");
/// ```
pub fn classify(file_name: &str) -> Classification {
    let stem = strip_resx_extension(file_name);
    RULES
        .iter()
        .find_map(|(_, rule)| rule(stem))
        .unwrap_or_else(|| Classification::default_locale(stem))
}

/// Removes a trailing `.resx`, in any letter case.
pub fn strip_resx_extension(file_name: &str) -> &str {
    match RESX_EXTENSION_REGEX.find(file_name) {
        Some(m) => &file_name[..m.start()],
        None => file_name,
    }
}

/// Returns `true` when `segment` has the shape of a locale code.
pub fn is_locale_shaped(segment: &str) -> bool {
    LOCALE_SHAPE_REGEXES.iter().any(|re| re.is_match(segment))
}

/// `Resources` has no separator at all, so it cannot carry a locale.
pub fn plain_name(stem: &str) -> Option<Classification> {
    if stem.contains('.') || stem.contains('_') {
        None
    } else {
        Some(Classification::default_locale(stem))
    }
}

/// `Resources.en-US`
pub fn dot_suffix(stem: &str) -> Option<Classification> {
    split_locale_suffix(stem, '.')
}

/// `Resources_en-US`
pub fn underscore_suffix(stem: &str) -> Option<Classification> {
    split_locale_suffix(stem, '_')
}

pub fn fallback(stem: &str) -> Option<Classification> {
    Some(Classification::default_locale(stem))
}

fn split_locale_suffix(stem: &str, separator: char) -> Option<Classification> {
    let (base, suffix) = stem.rsplit_once(separator)?;
    is_locale_shaped(suffix).then(|| Classification::new(base, suffix))
}

// Display names for well-known tags. Unknown tags display as themselves.
const LANGUAGE_NAMES: &[(&str, &str)] = &[
    ("default", "Default"),
    ("en", "English"),
    ("en-US", "English (US)"),
    ("en-GB", "English (UK)"),
    ("fr", "French"),
    ("fr-FR", "French (France)"),
    ("fr-CA", "French (Canada)"),
    ("de", "German"),
    ("de-DE", "German (Germany)"),
    ("es", "Spanish"),
    ("es-ES", "Spanish (Spain)"),
    ("es-MX", "Spanish (Mexico)"),
    ("it", "Italian"),
    ("it-IT", "Italian (Italy)"),
    ("pt", "Portuguese"),
    ("pt-BR", "Portuguese (Brazil)"),
    ("pt-PT", "Portuguese (Portugal)"),
    ("ru", "Russian"),
    ("ru-RU", "Russian (Russia)"),
    ("zh", "Chinese"),
    ("zh-CN", "Chinese (Simplified)"),
    ("zh-TW", "Chinese (Traditional)"),
    ("ja", "Japanese"),
    ("ja-JP", "Japanese (Japan)"),
    ("ko", "Korean"),
    ("ko-KR", "Korean (Korea)"),
    ("ar", "Arabic"),
    ("ar-SA", "Arabic (Saudi Arabia)"),
    ("hi", "Hindi"),
    ("hi-IN", "Hindi (India)"),
    ("th", "Thai"),
    ("th-TH", "Thai (Thailand)"),
    ("vi", "Vietnamese"),
    ("vi-VN", "Vietnamese (Vietnam)"),
    ("nl", "Dutch"),
    ("nl-NL", "Dutch (Netherlands)"),
    ("sv", "Swedish"),
    ("sv-SE", "Swedish (Sweden)"),
    ("no", "Norwegian"),
    ("no-NO", "Norwegian (Norway)"),
    ("da", "Danish"),
    ("da-DK", "Danish (Denmark)"),
    ("fi", "Finnish"),
    ("fi-FI", "Finnish (Finland)"),
    ("pl", "Polish"),
    ("pl-PL", "Polish (Poland)"),
    ("cs", "Czech"),
    ("cs-CZ", "Czech (Czech Republic)"),
    ("sk", "Slovak"),
    ("sk-SK", "Slovak (Slovakia)"),
    ("hu", "Hungarian"),
    ("hu-HU", "Hungarian (Hungary)"),
    ("ro", "Romanian"),
    ("ro-RO", "Romanian (Romania)"),
    ("bg", "Bulgarian"),
    ("bg-BG", "Bulgarian (Bulgaria)"),
    ("hr", "Croatian"),
    ("hr-HR", "Croatian (Croatia)"),
    ("sr", "Serbian"),
    ("sr-RS", "Serbian (Serbia)"),
    ("sl", "Slovenian"),
    ("sl-SI", "Slovenian (Slovenia)"),
    ("et", "Estonian"),
    ("et-EE", "Estonian (Estonia)"),
    ("lv", "Latvian"),
    ("lv-LV", "Latvian (Latvia)"),
    ("lt", "Lithuanian"),
    ("lt-LT", "Lithuanian (Lithuania)"),
    ("tr", "Turkish"),
    ("tr-TR", "Turkish (Turkey)"),
    ("el", "Greek"),
    ("el-GR", "Greek (Greece)"),
    ("he", "Hebrew"),
    ("he-IL", "Hebrew (Israel)"),
    ("fa", "Persian"),
    ("fa-IR", "Persian (Iran)"),
    ("ur", "Urdu"),
    ("ur-PK", "Urdu (Pakistan)"),
    ("bn", "Bengali"),
    ("bn-BD", "Bengali (Bangladesh)"),
    ("ta", "Tamil"),
    ("ta-IN", "Tamil (India)"),
    ("te", "Telugu"),
    ("te-IN", "Telugu (India)"),
    ("ml", "Malayalam"),
    ("ml-IN", "Malayalam (India)"),
    ("kn", "Kannada"),
    ("kn-IN", "Kannada (India)"),
    ("gu", "Gujarati"),
    ("gu-IN", "Gujarati (India)"),
    ("pa", "Punjabi"),
    ("pa-IN", "Punjabi (India)"),
    ("mr", "Marathi"),
    ("mr-IN", "Marathi (India)"),
    ("or", "Odia"),
    ("or-IN", "Odia (India)"),
    ("as", "Assamese"),
    ("as-IN", "Assamese (India)"),
    ("ne", "Nepali"),
    ("ne-NP", "Nepali (Nepal)"),
    ("si", "Sinhala"),
    ("si-LK", "Sinhala (Sri Lanka)"),
    ("my", "Myanmar"),
    ("my-MM", "Myanmar (Myanmar)"),
    ("km", "Khmer"),
    ("km-KH", "Khmer (Cambodia)"),
    ("lo", "Lao"),
    ("lo-LA", "Lao (Laos)"),
    ("ka", "Georgian"),
    ("ka-GE", "Georgian (Georgia)"),
    ("am", "Amharic"),
    ("am-ET", "Amharic (Ethiopia)"),
    ("sw", "Swahili"),
    ("sw-KE", "Swahili (Kenya)"),
    ("zu", "Zulu"),
    ("zu-ZA", "Zulu (South Africa)"),
    ("af", "Afrikaans"),
    ("af-ZA", "Afrikaans (South Africa)"),
    ("is", "Icelandic"),
    ("is-IS", "Icelandic (Iceland)"),
    ("mt", "Maltese"),
    ("mt-MT", "Maltese (Malta)"),
    ("cy", "Welsh"),
    ("cy-GB", "Welsh (United Kingdom)"),
    ("ga", "Irish"),
    ("ga-IE", "Irish (Ireland)"),
    ("gd", "Scottish Gaelic"),
    ("gd-GB", "Scottish Gaelic (United Kingdom)"),
    ("eu", "Basque"),
    ("eu-ES", "Basque (Spain)"),
    ("ca", "Catalan"),
    ("ca-ES", "Catalan (Spain)"),
    ("gl", "Galician"),
    ("gl-ES", "Galician (Spain)"),
    ("br", "Breton"),
    ("br-FR", "Breton (France)"),
    ("co", "Corsican"),
    ("co-FR", "Corsican (France)"),
    ("oc", "Occitan"),
    ("oc-FR", "Occitan (France)"),
    ("rm", "Romansh"),
    ("rm-CH", "Romansh (Switzerland)"),
    ("lb", "Luxembourgish"),
    ("lb-LU", "Luxembourgish (Luxembourg)"),
    ("fo", "Faroese"),
    ("fo-FO", "Faroese (Faroe Islands)"),
    ("kl", "Greenlandic"),
    ("kl-GL", "Greenlandic (Greenland)"),
    ("se", "Northern Sami"),
    ("se-NO", "Northern Sami (Norway)"),
    ("smj", "Lule Sami"),
    ("smj-NO", "Lule Sami (Norway)"),
    ("sma", "Southern Sami"),
    ("sma-NO", "Southern Sami (Norway)"),
    ("smn", "Inari Sami"),
    ("smn-FI", "Inari Sami (Finland)"),
    ("sms", "Skolt Sami"),
    ("sms-FI", "Skolt Sami (Finland)"),
];

fn lookup_language_name(tag: &str) -> Option<&'static str> {
    LANGUAGE_NAMES
        .iter()
        .find(|(known, _)| *known == tag)
        .map(|(_, name)| *name)
}

/// Human-readable name for a locale tag, e.g. `fr-CA` → `French (Canada)`.
///
/// Tags written in unusual case (`en-us`) are canonicalized before lookup.
/// Tags that are not known are returned as-is.
pub fn language_display_name(tag: &str) -> String {
    if let Some(name) = lookup_language_name(tag) {
        return name.to_string();
    }
    tag.parse::<unic_langid::LanguageIdentifier>()
        .ok()
        .and_then(|id| lookup_language_name(&id.to_string()))
        .map_or_else(|| tag.to_string(), str::to_string)
}

/// Label for a file inside its group: the file name without extension for
/// the default locale, the language display name otherwise.
pub fn short_display_name(file_name: &str, locale_tag: &str) -> String {
    if locale_tag == DEFAULT_LOCALE {
        strip_resx_extension(file_name).to_string()
    } else {
        language_display_name(locale_tag)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_classified(file_name: &str, base_name: &str, locale_tag: &str) {
        let c = classify(file_name);
        assert_eq!(
            (c.base_name.as_str(), c.locale_tag.as_str()),
            (base_name, locale_tag),
            "classifying {file_name}"
        );
    }

    #[test]
    fn test_documented_cases() {
        assert_classified("Resources.resx", "Resources", "default");
        assert_classified("Resources.en-US.resx", "Resources", "en-US");
        assert_classified("Messages.fr.resx", "Messages", "fr");
        assert_classified("App_Resources.en.resx", "App_Resources", "en");
        assert_classified("MyApp.Resources.de.resx", "MyApp.Resources", "de");
    }

    #[test]
    fn test_extension_is_case_insensitive() {
        assert_classified("Strings.RESX", "Strings", "default");
        assert_classified("Strings.fr-FR.Resx", "Strings", "fr-FR");
    }

    #[test]
    fn test_name_without_resx_extension() {
        assert_classified("Resources", "Resources", "default");
        assert_classified("Resources.de", "Resources", "de");
    }

    #[test]
    fn test_locale_case_is_preserved() {
        assert_classified("Labels.EN.resx", "Labels", "EN");
        assert_classified("Labels.en-us.resx", "Labels", "en-us");
        assert_classified("Labels.zh-Hans.resx", "Labels", "zh-Hans");
    }

    #[test]
    fn test_three_letter_codes() {
        assert_classified("Labels.eng.resx", "Labels", "eng");
        assert_classified("Labels.smj-NO.resx", "Labels", "smj-NO");
    }

    #[test]
    fn test_underscore_suffix() {
        assert_classified("Strings_fr.resx", "Strings", "fr");
        assert_classified("My_App_Strings_pt-BR.resx", "My_App_Strings", "pt-BR");
    }

    #[test]
    fn test_dot_rule_wins_over_underscore_rule() {
        // The dot suffix `de_Strings` is not locale-shaped, so the underscore rule
        // runs on the whole stem, dots included.
        assert_classified("App.de_Strings.resx", "App.de_Strings", "default");
        assert_classified("Common_fr.Strings_de.resx", "Common_fr.Strings", "de");
    }

    #[test]
    fn test_non_locale_suffixes_fall_back_to_default() {
        assert_classified("Resources.Designer.resx", "Resources.Designer", "default");
        assert_classified("Form1_Labels.resx", "Form1_Labels", "default");
        assert_classified("v1.2.resx", "v1.2", "default");
    }

    #[test]
    fn test_short_word_is_taken_as_locale() {
        assert_classified("Resources.to.resx", "Resources", "to");
    }

    #[test]
    fn test_only_ascii_letters_are_locale_shaped() {
        // U+017F and U+212A case-fold to `s` and `k` under Unicode rules.
        for tag in ["\u{17f}\u{17f}", "\u{212a}o", "en-\u{212a}R", "\u{17f}ma"] {
            assert!(!is_locale_shaped(tag), "{tag} should not be locale shaped");
        }
        assert_classified("Resources.\u{17f}\u{17f}.resx", "Resources.\u{17f}\u{17f}", "default");
        assert_eq!(strip_resx_extension("A.re\u{17f}x"), "A.re\u{17f}x");
    }

    #[test]
    fn test_rules_in_isolation() {
        assert!(plain_name("Resources").unwrap().is_default());
        assert!(plain_name("Resources.fr").is_none());
        assert_eq!(dot_suffix("A.fr").unwrap().locale_tag, "fr");
        assert!(dot_suffix("A_fr").is_none());
        assert_eq!(underscore_suffix("A_fr").unwrap().base_name, "A");
        assert!(underscore_suffix("A.fr").is_none());
        assert!(fallback("anything").unwrap().is_default());
    }

    #[test]
    fn test_rule_order() {
        let names: Vec<_> = RULES.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["plain-name", "dot-suffix", "underscore-suffix", "fallback"]
        );
    }

    #[test]
    fn test_is_locale_shaped() {
        for tag in ["en", "FR", "en-US", "zh-Hant", "eng", "sma-no", "EN-us"] {
            assert!(is_locale_shaped(tag), "{tag} should be locale shaped");
        }
        for tag in ["", "e", "Designer", "en_US", "en-", "english", "12", "en-USAXX"] {
            assert!(!is_locale_shaped(tag), "{tag} should not be locale shaped");
        }
    }

    #[test]
    fn test_strip_resx_extension() {
        assert_eq!(strip_resx_extension("A.resx"), "A");
        assert_eq!(strip_resx_extension("A.ReSx"), "A");
        assert_eq!(strip_resx_extension("A.resx.bak"), "A.resx.bak");
        assert_eq!(strip_resx_extension(".resx"), "");
    }

    #[test]
    fn test_language_display_name() {
        assert_eq!(language_display_name("default"), "Default");
        assert_eq!(language_display_name("en-US"), "English (US)");
        assert_eq!(language_display_name("fr-CA"), "French (Canada)");
        assert_eq!(language_display_name("smn-FI"), "Inari Sami (Finland)");
        assert_eq!(language_display_name("en-us"), "English (US)");
        assert_eq!(language_display_name("xx-YY"), "xx-YY");
    }

    #[test]
    fn test_short_display_name() {
        assert_eq!(short_display_name("Resources.resx", "default"), "Resources");
        assert_eq!(short_display_name("Resources.de.resx", "de"), "German");
        assert_eq!(short_display_name("Resources.qq.resx", "qq"), "qq");
    }
}
