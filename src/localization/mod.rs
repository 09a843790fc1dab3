use fluent_bundle::{FluentArgs, FluentBundle, FluentResource};
use std::cell::RefCell;
use std::collections::HashMap;
use thiserror::Error;
use unic_langid::LanguageIdentifier;

type Bundle = FluentBundle<FluentResource>;

const SUPPORTED_LANGS: [&str; 2] = ["en", "zh"];
const FALLBACK_LANG: &str = "en";

fn load_ftl_source(lang: &str) -> &'static str {
    match lang {
        "zh" => include_str!("resources/zh.ftl"),
        _ => include_str!("resources/en.ftl"),
    }
}

fn parse_lang(lang_code: &str) -> LanguageIdentifier {
    lang_code
        .parse::<LanguageIdentifier>()
        .unwrap_or_else(|_| FALLBACK_LANG.parse().unwrap())
}

fn normalize_lang(mut code: String) -> String {
    code.make_ascii_lowercase();
    let sep = code.find(['-', '_']).unwrap_or(code.len());
    let short = &code[..sep];
    if SUPPORTED_LANGS.contains(&short) {
        short.to_string()
    } else {
        FALLBACK_LANG.to_string()
    }
}

fn detect_system_lang() -> String {
    normalize_lang(sys_locale::get_locale().unwrap_or_default())
}

struct LocalizationManager {
    current: String,
    fallback: String,
    bundles: HashMap<String, Bundle>,
}

impl LocalizationManager {
    fn new() -> Self {
        let mut bundles: HashMap<String, Bundle> = HashMap::new();
        for &code in SUPPORTED_LANGS.iter() {
            let mut bundle: Bundle = FluentBundle::new(vec![parse_lang(code)]);
            let res = FluentResource::try_new(load_ftl_source(code).to_string())
                .expect("Failed to parse embedded FTL resource");
            bundle.add_resource(res).expect("Failed to add FTL to bundle");
            bundles.insert(code.to_string(), bundle);
        }
        Self {
            current: FALLBACK_LANG.to_string(),
            fallback: FALLBACK_LANG.to_string(),
            bundles,
        }
    }

    fn set_current(&mut self, code: &str) -> Result<(), LocalizationError> {
        let code = normalize_lang(code.to_string());
        if !self.bundles.contains_key(&code) {
            return Err(LocalizationError::UnsupportedLanguage(code));
        }
        self.current = code;
        Ok(())
    }

    fn set_auto(&mut self) -> Result<(), LocalizationError> {
        self.current = detect_system_lang();
        Ok(())
    }

    fn format(&self, id: &str, args: Option<&FluentArgs>) -> String {
        for code in [self.current.as_str(), self.fallback.as_str()] {
            if let Some(b) = self.bundles.get(code) {
                if let Some(pat) = b.get_message(id).and_then(|m| m.value()) {
                    let mut errors = vec![];
                    return b.format_pattern(pat, args, &mut errors).to_string();
                }
            }
        }
        format!("[missing: {id}]")
    }
}

thread_local! {
    static LOCALIZATION: RefCell<LocalizationManager> = RefCell::new(LocalizationManager::new());
}

#[derive(Debug, Error)]
pub enum LocalizationError {
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),
}

/// Initialize the localization system. With `None` the system locale is used;
/// unsupported codes fall back to "en".
pub fn initialize_localization(preferred_lang: Option<&str>) -> Result<(), LocalizationError> {
    LOCALIZATION.with(|cell| {
        let mut mgr = cell.borrow_mut();
        match preferred_lang {
            Some(code) => mgr
                .set_current(code)
                .or_else(|_| mgr.set_current(FALLBACK_LANG)),
            None => mgr.set_auto(),
        }
    })
}

/// Translate a message without arguments.
pub fn translate(message_id: &str) -> String {
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, None))
}

/// Translate a message with arguments given as (&str, String) pairs.
pub fn translate_with(message_id: &str, args: &[(&str, String)]) -> String {
    let mut fargs = FluentArgs::new();
    for (k, v) in args {
        fargs.set(*k, v.clone());
    }
    LOCALIZATION.with(|cell| cell.borrow().format(message_id, Some(&fargs)))
}

#[cfg(test)]
mod tests {
    use super::*;

    const UI_KEYS: [&str; 19] = [
        "app-window-title",
        "app-title",
        "app-instructions",
        "action-shuffle",
        "filter-all",
        "filter-none",
        "filter-some",
        "category-work",
        "category-virtue",
        "category-relationship",
        "category-self",
        "selected-count",
        "action-download",
        "action-downloading",
        "action-clear",
        "action-logs",
        "empty-grid",
        "export-title",
        "export-failed",
    ];

    #[test]
    fn every_ui_key_resolves_in_every_bundle() {
        for lang in SUPPORTED_LANGS {
            initialize_localization(Some(lang)).unwrap();
            for key in UI_KEYS {
                let s = translate(key);
                assert!(
                    !s.starts_with("[missing:"),
                    "{key} missing in bundle {lang}"
                );
            }
        }
    }

    #[test]
    fn unknown_lang_falls_back_to_english() {
        initialize_localization(Some("fr")).unwrap();
        assert!(!translate("app-title").starts_with("[missing:"));
    }

    #[test]
    fn count_argument_is_interpolated() {
        initialize_localization(Some("en")).unwrap();
        let s = translate_with("filter-some", &[("count", "2".to_string())]);
        assert!(s.contains('2'), "got {s:?}");
    }
}
