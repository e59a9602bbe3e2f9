//! Chamadas HTTP para o serviço de classificação

use contracts::triage::{ClassifyRequest, ClassifyResponse};
use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{FormData, RequestInit, RequestMode, Response};

fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// POST /classify com o texto do e-mail (já aparado pelo chamador)
///
/// Erros HTTP devolvem o corpo da resposta como texto, para o alert.
pub async fn classify_text(text: &str) -> Result<ClassifyResponse, String> {
    let url = format!("{}/classify", api_base());
    let payload = ClassifyRequest {
        text: text.to_string(),
    };

    let response = Request::post(&url)
        .json(&payload)
        .map_err(|e| format!("Failed to serialize request: {e}"))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {e}"))?;

    if !response.ok() {
        let body = response
            .text()
            .await
            .unwrap_or_else(|_| format!("HTTP {}", response.status()));
        return Err(body);
    }

    response
        .json::<ClassifyResponse>()
        .await
        .map_err(|e| format!("Failed to parse response: {e}"))
}

/// POST /upload com o arquivo selecionado no campo `file`
pub async fn upload_file(file: web_sys::File) -> Result<ClassifyResponse, String> {
    let form_data = FormData::new().map_err(|e| format!("{e:?}"))?;
    form_data
        .append_with_blob("file", &file)
        .map_err(|e| format!("{e:?}"))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(&form_data);

    let url = format!("{}/upload", api_base());
    let request =
        web_sys::Request::new_with_str_and_init(&url, &opts).map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    let text: String = text.as_string().ok_or_else(|| "bad text".to_string())?;

    if !resp.ok() {
        return Err(text);
    }

    let data: ClassifyResponse = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;

    Ok(data)
}
