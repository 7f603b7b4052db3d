use std::sync::Arc;

pub type DynTranslator = Arc<dyn Translator + Send + Sync>;

pub trait Translator {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;

    fn t(&self, key: &str) -> String {
        self.translate(key, &[])
    }
}
