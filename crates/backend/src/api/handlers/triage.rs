use axum::extract::Multipart;
use axum::Json;
use contracts::triage::{ClassifyRequest, ClassifyResponse};

use crate::api::error::ApiError;
use crate::domain::triage::{document, extract, service};
use crate::shared::nlp::preprocess;

/// POST /classify
///
/// Текст приходит как есть; assunto/conteúdo в ответе — маркеры,
/// так как тело письма не разбирается на этом пути.
pub async fn classify(
    Json(payload): Json<ClassifyRequest>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let pre = preprocess::preprocess(&payload.text, false);
    let (category, confidence) = service::classify_text(&pre).await;
    let reply = service::generate_reply(category, &payload.text).await;

    Ok(Json(ClassifyResponse {
        category,
        confidence,
        reply,
        subject: "(Texto Fornecido no Body)".to_string(),
        content: payload.text,
    }))
}

/// POST /upload
///
/// Multipart с одной частью `file` (.txt или .pdf).
pub async fn upload(mut multipart: Multipart) -> Result<Json<ClassifyResponse>, ApiError> {
    let mut file: Option<(String, String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Multipart inválido: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field.file_name().unwrap_or_default().to_string();
            let content_type = field.content_type().unwrap_or_default().to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| ApiError::BadRequest(format!("Falha ao ler o arquivo: {e}")))?;
            file = Some((filename, content_type, data.to_vec()));
        }
    }

    let Some((filename, content_type, data)) = file else {
        return Err(ApiError::BadRequest(
            "Nenhum arquivo enviado no campo 'file'".to_string(),
        ));
    };

    let raw = document::extract_text(&data, &filename, &content_type);
    let parts = extract::email_parts(&raw);

    let pre = preprocess::preprocess(&parts.text_to_process, false);
    tracing::debug!("Texto pré-processado para classificação: {pre}");

    let (category, confidence) = service::classify_text(&pre).await;
    let reply = service::generate_reply(category, &parts.content).await;

    Ok(Json(ClassifyResponse {
        category,
        confidence,
        reply,
        subject: parts.subject,
        content: parts.content,
    }))
}
