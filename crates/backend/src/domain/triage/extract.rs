//! Extração de assunto e corpo a partir do texto bruto de um e-mail
//!
//! Textos vindos de PDF exportado de webmail trazem metadados (datas, URLs,
//! remetente, artefatos da UI do Gmail) que poluem a classificação; este
//! módulo faz a limpeza antes do pipeline de NLP.

use once_cell::sync::Lazy;
use regex::Regex;

/// Partes extraídas do texto bruto
#[derive(Debug, Clone, PartialEq)]
pub struct EmailParts {
    pub subject: String,
    pub content: String,
    /// Texto efetivamente enviado ao classificador: o conteúdo limpo,
    /// ou o assunto quando o conteúdo fica vazio
    pub text_to_process: String,
}

const NO_SUBJECT: &str = "(Sem Assunto Detectado)";

static SUBJECT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\(sem assunto\)").unwrap());

// Datas/horários, URLs e números de página (ex: 1/1)
static METADATA_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\d{1,2}[/-]\d{1,2}[/-]\d{4}.*|\d{1,2}:\d{2}.*|https?://\S+|\s\d/\d\s").unwrap()
});

// Endereços de e-mail e marcadores de remetente/destinatário
static ADDRESS_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)[\w.-]+@[\w.-]+.*|Para:.*|De:.*").unwrap());

// Termos de UI do Gmail
static GMAIL_UI_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)M Gmail|Gmail \(sem assunto\)|1 mensagem|\(sem assunto\)").unwrap()
});

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());

/// Tenta extrair o assunto e o corpo da mensagem do texto bruto de um e-mail
pub fn email_parts(raw_text: &str) -> EmailParts {
    let subject = SUBJECT_RE
        .find(raw_text)
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_else(|| NO_SUBJECT.to_string());

    let content = METADATA_RE.replace_all(raw_text, "");
    let content = ADDRESS_RE.replace_all(&content, "");
    let mut content = GMAIL_UI_RE.replace_all(&content, "").into_owned();

    // Remove o texto do assunto do conteúdo, se for encontrado
    if subject != NO_SUBJECT {
        let subject_re = Regex::new(&format!("(?i){}", regex::escape(&subject)))
            .expect("escaped subject is a valid pattern");
        content = subject_re.replace_all(&content, "").trim().to_string();
    }

    let content = WHITESPACE_RE.replace_all(&content, " ").trim().to_string();

    let text_to_process = if content.is_empty() {
        subject.clone()
    } else {
        content.clone()
    };

    EmailParts {
        subject,
        content,
        text_to_process,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_passes_through() {
        let parts = email_parts("Preciso do relatório de vendas");
        assert_eq!(parts.subject, NO_SUBJECT);
        assert_eq!(parts.content, "Preciso do relatório de vendas");
        assert_eq!(parts.text_to_process, parts.content);
    }

    #[test]
    fn test_gmail_export_is_cleaned() {
        let raw = "M Gmail (sem assunto)\n1 mensagem\nDe: joao@empresa.com\nobrigado pelo suporte";
        let parts = email_parts(raw);
        assert_eq!(parts.subject, "(sem assunto)");
        assert_eq!(parts.content, "obrigado pelo suporte");
        assert_eq!(parts.text_to_process, "obrigado pelo suporte");
    }

    #[test]
    fn test_urls_and_dates_are_stripped() {
        let raw = "Veja https://exemplo.com/doc\n12/03/2024 relatório anexo\nSegue o contrato";
        let parts = email_parts(raw);
        assert!(!parts.content.contains("https://"));
        assert!(!parts.content.contains("12/03/2024"));
        assert!(parts.content.contains("Segue o contrato"));
    }

    #[test]
    fn test_empty_content_falls_back_to_subject() {
        let raw = "(sem assunto)\nDe: alguem@exemplo.com";
        let parts = email_parts(raw);
        assert_eq!(parts.subject, "(sem assunto)");
        assert_eq!(parts.content, "");
        assert_eq!(parts.text_to_process, "(sem assunto)");
    }

    #[test]
    fn test_sender_lines_are_removed() {
        let raw = "Para: suporte@empresa.com\nDe: cliente@gmail.com\nNão consigo acessar o sistema";
        let parts = email_parts(raw);
        assert_eq!(parts.content, "Não consigo acessar o sistema");
    }
}
