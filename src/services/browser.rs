//! Small bridges into the host page.

use crate::error::AppError;
use dioxus::prelude::*;

const HEAD_PROBE_JS: &str = r#"
    const path = await dioxus.recv();
    try {
        const res = await fetch(path, { method: "HEAD" });
        dioxus.send(res.ok);
    } catch (e) {
        dioxus.send(false);
    }
"#;

/// Ask the page whether a resource answers a `HEAD` request. Frames do not
/// reliably report a missing PDF through `onerror`.
pub async fn resource_exists(path: &str) -> Result<bool, AppError> {
    let mut eval = document::eval(HEAD_PROBE_JS);
    eval.send(path.to_string())
        .map_err(|e| AppError::Probe(e.to_string()))?;
    eval.recv::<bool>()
        .await
        .map_err(|e| AppError::Probe(e.to_string()))
}

pub fn open_in_new_tab(url: &str) {
    let Ok(literal) = serde_json::to_string(url) else {
        return;
    };
    let _ = document::eval(&format!("window.open({literal}, \"_blank\");"));
}
