//! Locale bundles and numeral policy for the time picker.
//!
//! ## Usage
//!
//! Resolve display strings, text direction, and digit shapes from an explicit
//! locale tag or from the host environment.

use derive_setters::Setters;

/// Numeral shapes used for wheel item glyphs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NumeralFormat {
    /// Always Latin digits.
    En,
    /// Always Persian digits.
    Fa,
    /// Follow the locale: Persian digits for Persian/Arabic locales.
    #[default]
    Auto,
}

/// Display strings for the time picker chrome.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TimePickerLocale {
    /// Heading shown above the wheels.
    pub title: String,
    /// Label for the hour wheel.
    pub hour_label: String,
    /// Label for the minute wheel.
    pub minute_label: String,
    /// Label for the day period wheel.
    pub period_label: String,
    /// Caption of the confirm button.
    pub confirm: String,
}

impl TimePickerLocale {
    /// Built-in English strings.
    pub fn english() -> Self {
        Self {
            title: "Select Time".to_string(),
            hour_label: "Hour".to_string(),
            minute_label: "Minute".to_string(),
            period_label: "AM/PM".to_string(),
            confirm: "Confirm".to_string(),
        }
    }

    /// Built-in Persian strings.
    pub fn persian() -> Self {
        Self {
            title: "انتخاب ساعت".to_string(),
            hour_label: "ساعت".to_string(),
            minute_label: "دقیقه".to_string(),
            period_label: "صبح/عصر".to_string(),
            confirm: "تأیید".to_string(),
        }
    }

    /// Returns the built-in string table for a primary locale subtag.
    pub fn for_locale(locale: &str) -> Self {
        if locale == "fa" {
            Self::persian()
        } else {
            Self::english()
        }
    }
}

impl Default for TimePickerLocale {
    fn default() -> Self {
        Self::english()
    }
}

/// Optional per-string overrides layered over a built-in locale table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Setters)]
#[setters(strip_option, into)]
pub struct TimePickerLocaleOverrides {
    /// Replacement heading.
    pub title: Option<String>,
    /// Replacement hour wheel label.
    pub hour_label: Option<String>,
    /// Replacement minute wheel label.
    pub minute_label: Option<String>,
    /// Replacement day period wheel label.
    pub period_label: Option<String>,
    /// Replacement confirm caption.
    pub confirm: Option<String>,
}

impl TimePickerLocaleOverrides {
    /// Applies the overrides on top of `base`, keeping unset strings.
    pub fn apply(&self, base: TimePickerLocale) -> TimePickerLocale {
        TimePickerLocale {
            title: self.title.clone().unwrap_or(base.title),
            hour_label: self.hour_label.clone().unwrap_or(base.hour_label),
            minute_label: self.minute_label.clone().unwrap_or(base.minute_label),
            period_label: self.period_label.clone().unwrap_or(base.period_label),
            confirm: self.confirm.clone().unwrap_or(base.confirm),
        }
    }
}

/// Returns whether text should lay out right-to-left for a locale under the
/// given numeral format.
///
/// An explicit [`NumeralFormat::En`] or [`NumeralFormat::Fa`] wins; `Auto`
/// follows the locale tag.
pub fn is_rtl(locale: &str, format: NumeralFormat) -> bool {
    match format {
        NumeralFormat::En => false,
        NumeralFormat::Fa => true,
        NumeralFormat::Auto => matches!(locale, "fa" | "ar"),
    }
}

/// Returns whether wheel glyphs should use Persian-Indic digits for a locale
/// under the given numeral format.
///
/// Follows [`is_rtl`]: locales that read right-to-left take Persian-Indic
/// digits.
pub fn uses_persian_numerals(locale: &str, format: NumeralFormat) -> bool {
    is_rtl(locale, format)
}

/// # detect_locale
///
/// Detects the primary locale subtag from the process environment.
///
/// Reads `LC_ALL`, `LC_MESSAGES`, and `LANG` in POSIX precedence order and
/// extracts the lowercase primary subtag (`"fa_IR.UTF-8"` → `"fa"`). Falls
/// back to `"en"` when nothing usable is set.
///
/// ## Examples
///
/// ```
/// let locale = tessera_wheel_picker::locale::detect_locale();
/// assert!(!locale.is_empty());
/// ```
pub fn detect_locale() -> String {
    for key in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(raw) = std::env::var(key)
            && let Some(tag) = primary_subtag(&raw)
        {
            return tag;
        }
    }
    "en".to_string()
}

/// Extracts the lowercase primary subtag from a locale string, ignoring the
/// `C`/`POSIX` pseudo-locales.
fn primary_subtag(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() || raw == "C" || raw == "POSIX" {
        return None;
    }
    let tag = raw
        .split(['_', '-', '.', '@'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    if tag.is_empty() { None } else { Some(tag) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_primary_subtags() {
        assert_eq!(primary_subtag("fa_IR.UTF-8"), Some("fa".to_string()));
        assert_eq!(primary_subtag("en-US"), Some("en".to_string()));
        assert_eq!(primary_subtag("de_DE@euro"), Some("de".to_string()));
        assert_eq!(primary_subtag("FR"), Some("fr".to_string()));
    }

    #[test]
    fn ignores_pseudo_locales() {
        assert_eq!(primary_subtag("C"), None);
        assert_eq!(primary_subtag("POSIX"), None);
        assert_eq!(primary_subtag(""), None);
        assert_eq!(primary_subtag("  "), None);
    }

    #[test]
    fn explicit_numeral_format_wins() {
        assert!(is_rtl("en", NumeralFormat::Fa));
        assert!(!is_rtl("fa", NumeralFormat::En));
        assert!(uses_persian_numerals("en", NumeralFormat::Fa));
        assert!(!uses_persian_numerals("fa", NumeralFormat::En));
    }

    #[test]
    fn auto_follows_locale() {
        assert!(is_rtl("fa", NumeralFormat::Auto));
        assert!(is_rtl("ar", NumeralFormat::Auto));
        assert!(!is_rtl("en", NumeralFormat::Auto));
        assert!(!is_rtl("de", NumeralFormat::Auto));
        assert!(uses_persian_numerals("fa", NumeralFormat::Auto));
        assert!(uses_persian_numerals("ar", NumeralFormat::Auto));
        assert!(!uses_persian_numerals("en", NumeralFormat::Auto));
    }

    #[test]
    fn selects_builtin_tables() {
        assert_eq!(TimePickerLocale::for_locale("fa").title, "انتخاب ساعت");
        assert_eq!(TimePickerLocale::for_locale("en").title, "Select Time");
        assert_eq!(TimePickerLocale::for_locale("de").title, "Select Time");
    }

    #[test]
    fn overrides_layer_over_base() {
        let strings = TimePickerLocaleOverrides::default()
            .title("Pick a departure")
            .confirm("Done")
            .apply(TimePickerLocale::english());
        assert_eq!(strings.title, "Pick a departure");
        assert_eq!(strings.confirm, "Done");
        assert_eq!(strings.hour_label, "Hour");
    }
}
