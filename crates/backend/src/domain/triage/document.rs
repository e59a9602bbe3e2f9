//! Extração de texto do arquivo enviado (.txt ou .pdf)

/// Extrai o texto bruto dos bytes recebidos no upload
///
/// PDF é detectado pelo nome do arquivo ou pelo content-type; qualquer outra
/// coisa (ou um PDF do qual nada foi extraído) é tratada como texto UTF-8.
pub fn extract_text(data: &[u8], filename: &str, content_type: &str) -> String {
    let filename = filename.to_lowercase();
    let content_type = content_type.to_lowercase();

    let mut raw = String::new();

    if filename.ends_with(".pdf") || content_type.contains("pdf") {
        match pdf_extract::extract_text_from_mem(data) {
            Ok(text) => raw = text.trim().to_string(),
            Err(e) => {
                tracing::warn!("Falha ao extrair texto do PDF '{filename}': {e}");
            }
        }
    }

    if raw.is_empty() {
        raw = String::from_utf8_lossy(data).into_owned();
    }

    raw
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_is_decoded() {
        let data = "Preciso de ajuda com o sistema".as_bytes();
        assert_eq!(
            extract_text(data, "email.txt", "text/plain"),
            "Preciso de ajuda com o sistema"
        );
    }

    #[test]
    fn test_invalid_utf8_is_decoded_lossily() {
        let data = vec![b'o', b'k', 0xFF, b'!'];
        let text = extract_text(&data, "email.txt", "text/plain");
        assert!(text.starts_with("ok"));
        assert!(text.ends_with('!'));
    }

    #[test]
    fn test_broken_pdf_falls_back_to_utf8() {
        // Content-type diz PDF mas os bytes não são; a extração falha e o
        // conteúdo é tratado como texto
        let data = "isso não é um pdf".as_bytes();
        assert_eq!(
            extract_text(data, "email.pdf", "application/pdf"),
            "isso não é um pdf"
        );
    }
}
