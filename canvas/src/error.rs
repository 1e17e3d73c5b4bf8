//! Errors raised while binding the engine to the page.

use wasm_bindgen::JsValue;

use crate::persist::PersistError;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("required element #{0} not found")]
    MissingElement(&'static str),
    #[error("element #{id} is not a {expected}")]
    WrongElementType { id: &'static str, expected: &'static str },
    #[error("persistence unavailable: {0}")]
    Persist(#[from] PersistError),
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl From<JsValue> for EngineError {
    fn from(value: JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl From<EngineError> for JsValue {
    fn from(err: EngineError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}
