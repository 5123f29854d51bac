//! Multipart Bodies
//!
//! `FormFields` → browser `FormData`. Text fields are appended as-is,
//! attachments as named files; empty attachments are left out.

use list_manager::{Attachment, FieldValue, FormFields, ListError, ListResult};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

fn js_error(context: &str, err: JsValue) -> ListError {
    ListError::Transport(format!("{}: {:?}", context, err))
}

fn to_blob(file: &Attachment) -> ListResult<Blob> {
    let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
    let parts = js_sys::Array::of1(&bytes);
    let options = BlobPropertyBag::new();
    options.set_type(&file.mime_type);
    Blob::new_with_u8_array_sequence_and_options(&parts, &options).map_err(|e| js_error("blob", e))
}

pub fn to_form_data(fields: &FormFields) -> ListResult<FormData> {
    let form = FormData::new().map_err(|e| js_error("form data", e))?;
    for (name, value) in fields.iter() {
        match value {
            FieldValue::Text(text) => form
                .append_with_str(name, text)
                .map_err(|e| js_error(name, e))?,
            FieldValue::File(file) if file.is_empty() => {}
            FieldValue::File(file) => form
                .append_with_blob_and_filename(name, &to_blob(file)?, &file.file_name)
                .map_err(|e| js_error(name, e))?,
        }
    }
    Ok(form)
}
