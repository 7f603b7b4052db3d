use super::keys;
use crate::abstract_trait::Translator;
use std::collections::HashMap;
use tracing::warn;

const FALLBACK_LOCALE: &str = "en";

const EN: &[(&str, &str)] = &[
    (keys::DELETE_CONFIRM, "Are you sure you want to delete {{item}}?"),
    (keys::ACTIVE, "Active"),
    (keys::EDIT, "Edit"),
    (keys::LOADING, "Loading..."),
    (keys::EMPTY, "No products found."),
    (keys::CREATE, "Create a product"),
];

const AR: &[(&str, &str)] = &[
    (keys::DELETE_CONFIRM, "هل أنت متأكد من حذف {{item}}؟"),
    (keys::ACTIVE, "نشط"),
    (keys::EDIT, "تعديل"),
    (keys::LOADING, "جار التحميل..."),
    (keys::EMPTY, "لا توجد منتجات."),
    (keys::CREATE, "إنشاء منتج"),
];

/// In-memory bundles keyed by `namespace:key`, with `{{param}}`
/// interpolation. Unknown keys render as the key itself.
#[derive(Debug, Clone)]
pub struct StaticTranslator {
    locale: String,
    bundles: HashMap<&'static str, HashMap<&'static str, &'static str>>,
}

impl StaticTranslator {
    pub fn new(locale: &str) -> Self {
        let bundles: HashMap<&'static str, HashMap<&'static str, &'static str>> =
            [("en", EN), ("ar", AR)]
                .into_iter()
                .map(|(lang, entries)| (lang, entries.iter().copied().collect()))
                .collect();

        let locale = if bundles.contains_key(locale) {
            locale.to_string()
        } else {
            warn!("Unsupported locale '{locale}', falling back to '{FALLBACK_LOCALE}'");
            FALLBACK_LOCALE.to_string()
        };

        Self { locale, bundles }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    fn lookup(&self, key: &str) -> Option<&'static str> {
        self.bundles
            .get(self.locale.as_str())
            .and_then(|bundle| bundle.get(key))
            .or_else(|| {
                self.bundles
                    .get(FALLBACK_LOCALE)
                    .and_then(|bundle| bundle.get(key))
            })
            .copied()
    }
}

impl Translator for StaticTranslator {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let Some(template) = self.lookup(key) else {
            warn!("Missing translation for key '{key}'");
            return key.to_string();
        };

        params
            .iter()
            .fold(template.to_string(), |text, (name, value)| {
                text.replace(&format!("{{{{{name}}}}}"), value)
            })
    }
}
