//! Locale-qualified field keys and the accessor layer around them.
//!
//! A key like `slug___en` is a view onto the `en` translation of the `slug`
//! attribute, not a stored field of its own. Reads and writes go through the
//! accessors here so that redirection stays explicit.

use crate::config::SlugSettings;
use crate::domain::slug::field_config::SluggableConfig;
use crate::domain::slug::record::SluggableRecord;

pub const LOCALE_DELIMITER: &str = "___";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LocalizedKey<'a> {
    pub base: &'a str,
    pub locale: &'a str,
}

pub fn qualify(base: &str, locale: &str) -> String {
    format!("{base}{LOCALE_DELIMITER}{locale}")
}

/// Split a locale-qualified key against the supported locale set. Keys that
/// do not end in a supported locale are treated as plain attribute names.
pub fn parse<'a>(key: &'a str, settings: &'a SlugSettings) -> Option<LocalizedKey<'a>> {
    for locale in settings.supported_locales() {
        if let Some(prefix) = key.strip_suffix(locale.as_str()) {
            if let Some(base) = prefix.strip_suffix(LOCALE_DELIMITER) {
                if !base.is_empty() {
                    return Some(LocalizedKey { base, locale });
                }
            }
        }
    }
    None
}

/// Read an attribute, redirecting locale-qualified keys to the translation
/// of the base attribute.
pub fn read_attribute(
    record: &dyn SluggableRecord,
    key: &str,
    settings: &SlugSettings,
) -> Option<String> {
    if settings.is_localized() {
        if let Some(localized) = parse(key, settings) {
            if let Some(translatable) = record.as_translatable() {
                if translatable
                    .translatable_attributes()
                    .iter()
                    .any(|a| a == localized.base)
                {
                    return translatable.translation(localized.base, localized.locale);
                }
            }
            // Qualified key over a plain attribute still reads the base.
            return record.attribute(localized.base);
        }
    }
    record.attribute(key)
}

/// Write an attribute, redirecting locale-qualified keys to the translation
/// of the base attribute.
pub fn write_attribute(
    record: &mut dyn SluggableRecord,
    key: &str,
    value: String,
    settings: &SlugSettings,
) {
    if settings.is_localized() {
        if let Some(localized) = parse(key, settings) {
            let base = localized.base.to_string();
            let locale = localized.locale.to_string();
            if let Some(translatable) = record.as_translatable_mut() {
                if translatable
                    .translatable_attributes()
                    .iter()
                    .any(|a| *a == base)
                {
                    translatable.set_translation(&base, &locale, value);
                    return;
                }
            }
            record.set_attribute(&base, value);
            return;
        }
    }
    record.set_attribute(key, value);
}

/// Expand the declared config for one slugging pass: every slug field whose
/// attribute is translatable becomes one entry per supported locale, keyed
/// `field___locale`, its source rewritten to the locale-qualified source.
/// Everything else passes through unchanged.
pub fn expand(
    config: SluggableConfig,
    record: &dyn SluggableRecord,
    settings: &SlugSettings,
) -> SluggableConfig {
    if !settings.is_localized() {
        return config;
    }
    let Some(translatable) = record.as_translatable() else {
        return config;
    };
    let translatable_attributes = translatable.translatable_attributes();

    let mut expanded = SluggableConfig::new();
    for (field, field_config) in config.iter() {
        if translatable_attributes.iter().any(|a| a == field) {
            for locale in settings.supported_locales() {
                let localized = field_config
                    .clone()
                    .with_source(field_config.source().localized(locale));
                expanded.insert(qualify(field, locale), localized);
            }
        } else {
            expanded.insert(field, field_config.clone());
        }
    }
    expanded
}
