//! Asynchronous file reading for image previews.
//!
//! Wraps the browser's `FileReader` so callers get a plain callback with
//! the base64 data-URL once decoding completes. Reads are fire-and-forget:
//! they cannot be cancelled, and completion order is unrelated to the
//! order the files were picked.

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{File, FileReader, ProgressEvent};

use crate::types::{AppError, AppResult};

/// Start reading `file` into a data-URL, invoking `on_done` on completion.
///
/// Errors here mean the read could not even start; a read that starts and
/// then fails is logged and produces no callback.
pub fn read_as_data_url(file: &File, mut on_done: impl FnMut(String) + 'static) -> AppResult<()> {
    let reader = FileReader::new()
        .map_err(|e| AppError::Preview(format!("failed to create FileReader: {:?}", e)))?;

    let name = file.name();

    // Le résultat arrive via l'événement loadend, pas en valeur de retour
    let target = reader.clone();
    let onloadend = Closure::wrap(Box::new(move |_: ProgressEvent| {
        match target.result() {
            Ok(value) => {
                // Null si la lecture a échoué ; le onerror ci-dessous a déjà loggé
                if let Some(data_url) = value.as_string() {
                    on_done(data_url);
                }
            }
            Err(e) => log::warn!("⚠️ Could not get read result for {}: {:?}", name, e),
        }
    }) as Box<dyn FnMut(ProgressEvent)>);
    reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
    onloadend.forget();

    let error_name = file.name();
    let onerror = Closure::wrap(Box::new(move |_: ProgressEvent| {
        log::warn!("⚠️ Preview read failed for {}", error_name);
    }) as Box<dyn FnMut(ProgressEvent)>);
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    onerror.forget();

    reader
        .read_as_data_url(file)
        .map_err(|e| AppError::Preview(format!("failed to start read: {:?}", e)))
}
