//! Browser-facing entry points, compiled when the `wasm` feature is enabled.

use wasm_bindgen::prelude::*;

use crate::board::Board;

fn parse(text: &str) -> Result<Board, JsError> {
    let lines = text.lines().map(str::trim).collect::<Vec<_>>();
    Board::from_lines(&lines).map_err(|e| JsError::new(&e.to_string()))
}

/// Check a board given as newline-separated rows, returning whether it satisfies every rule.
#[wasm_bindgen]
pub fn check(text: &str) -> Result<bool, JsError> {
    Ok(parse(text)?.validate())
}

/// Check a board given as newline-separated rows, returning the verdict name:
/// `"Valid"`, `"Unfinished"`, `"DuplicateHeight"`, or `"VisibilityMismatch"`.
#[wasm_bindgen]
pub fn verdict(text: &str) -> Result<String, JsError> {
    Ok(parse(text)?.check().to_string())
}
