//! Async wrapper around the browser `FileReader`.
//!
//! Reading is the first suspension point of an upload cycle: the file is
//! decoded to a base64 data URL off the UI thread and the result arrives
//! through a oneshot channel. Requires a browser environment.

/// Read a file as a base64 data URL.
///
/// # Errors
///
/// Returns a message when the reader cannot be created, the read fails, or
/// the result is not a string.
#[cfg(feature = "hydrate")]
pub async fn read_as_data_url(file: &web_sys::File) -> Result<String, String> {
    use std::cell::RefCell;
    use std::rc::Rc;

    use futures::channel::oneshot;
    use wasm_bindgen::JsCast;
    use wasm_bindgen::closure::Closure;

    let reader =
        web_sys::FileReader::new().map_err(|_| "failed to create FileReader".to_owned())?;
    let (tx, rx) = oneshot::channel::<Result<String, String>>();
    let tx = Rc::new(RefCell::new(Some(tx)));

    let onload = {
        let reader = reader.clone();
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_event| {
            let outcome = reader
                .result()
                .ok()
                .and_then(|value| value.as_string())
                .ok_or_else(|| "file read produced no data".to_owned());
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(outcome);
            }
        })
    };
    let onerror = {
        let tx = Rc::clone(&tx);
        Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(move |_event| {
            if let Some(tx) = tx.borrow_mut().take() {
                let _ = tx.send(Err("failed to read file".to_owned()));
            }
        })
    };

    reader.set_onload(Some(onload.as_ref().unchecked_ref()));
    reader.set_onerror(Some(onerror.as_ref().unchecked_ref()));
    reader
        .read_as_data_url(file)
        .map_err(|_| "failed to start file read".to_owned())?;

    let outcome = rx
        .await
        .map_err(|_| "file read interrupted".to_owned())?;

    // Closures must outlive the read; drop them only after it resolved.
    drop(onload);
    drop(onerror);
    outcome
}
