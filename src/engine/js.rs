//! Engine backed by JavaScript callbacks
//!
//! The front end loads its ABC engine as a separate module and hands us the
//! functions it exports: `tokenize(code)`, `parse(code)` returning
//! `{tune, diagnostics}` and `analyze(tune)` returning `{diagnostics}`.

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;

use super::{AbcEngine, EngineError};
use crate::diagnostics::ExternalDiagnostic;
use crate::parse::ExternalToken;

pub struct JsEngine {
    tokenize: Function,
    parse: Option<Function>,
    analyze: Option<Function>,
}

impl JsEngine {
    pub fn new(tokenize: Function, parse: Option<Function>, analyze: Option<Function>) -> Self {
        Self {
            tokenize,
            parse,
            analyze,
        }
    }
}

fn describe(error: &JsValue) -> String {
    error.as_string().unwrap_or_else(|| format!("{:?}", error))
}

fn call(function: &Function, argument: &JsValue) -> Result<JsValue, EngineError> {
    function
        .call1(&JsValue::NULL, argument)
        .map_err(|e| EngineError::Failed(describe(&e)))
}

/// Read `result[field]`, treating `null`/`undefined` as absent
fn field(result: &JsValue, name: &str) -> Result<Option<JsValue>, EngineError> {
    let value = Reflect::get(result, &JsValue::from_str(name))
        .map_err(|e| EngineError::Malformed(describe(&e)))?;
    Ok((!value.is_null() && !value.is_undefined()).then_some(value))
}

fn read_diagnostics(result: &JsValue) -> Result<Vec<ExternalDiagnostic>, EngineError> {
    match field(result, "diagnostics")? {
        Some(value) => serde_wasm_bindgen::from_value(value)
            .map_err(|e| EngineError::Malformed(e.to_string())),
        None => Ok(Vec::new()),
    }
}

impl AbcEngine for JsEngine {
    fn tokenize(&self, source: &str) -> Result<Vec<ExternalToken>, EngineError> {
        let value = call(&self.tokenize, &JsValue::from_str(source))?;
        serde_wasm_bindgen::from_value(value).map_err(|e| EngineError::Malformed(e.to_string()))
    }

    fn diagnostics(&self, source: &str) -> Result<Vec<ExternalDiagnostic>, EngineError> {
        let Some(parse) = &self.parse else {
            return Ok(Vec::new());
        };

        let parsed = call(parse, &JsValue::from_str(source))?;
        let mut diagnostics = read_diagnostics(&parsed)?;

        if let (Some(analyze), Some(tune)) = (&self.analyze, field(&parsed, "tune")?) {
            // parser findings are kept even when the analyzer fails
            match call(analyze, &tune).and_then(|analysis| read_diagnostics(&analysis)) {
                Ok(found) => diagnostics.extend(found),
                Err(err) => log::warn!("analyzer skipped: {}", err),
            }
        }

        Ok(diagnostics)
    }
}
