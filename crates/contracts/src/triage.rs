use serde::{Deserialize, Serialize};

/// Categoria atribuída a um e-mail pelo classificador
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Produtivo,
    Improdutivo,
}

impl Category {
    /// Nome da categoria como vai no JSON
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Produtivo => "Produtivo",
            Category::Improdutivo => "Improdutivo",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Corpo do POST /classify
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// Resposta dos endpoints /classify e /upload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifyResponse {
    pub category: Category,

    /// Confiança da classificação, de 0 a 1
    pub confidence: f64,

    /// Resposta sugerida para o e-mail
    pub reply: String,

    #[serde(default = "default_subject")]
    pub subject: String,

    #[serde(default = "default_content")]
    pub content: String,
}

fn default_subject() -> String {
    "(Sem Assunto Detectado)".to_string()
}

fn default_content() -> String {
    "(Sem Conteúdo Detectado)".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_as_plain_string() {
        assert_eq!(
            serde_json::to_string(&Category::Produtivo).unwrap(),
            "\"Produtivo\""
        );
        assert_eq!(
            serde_json::to_string(&Category::Improdutivo).unwrap(),
            "\"Improdutivo\""
        );
    }

    #[test]
    fn test_response_round_trip() {
        let json = r#"{"category":"Improdutivo","confidence":0.92,"reply":"Obrigado!","subject":"(sem assunto)","content":"obrigado pelo suporte"}"#;
        let r: ClassifyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.category, Category::Improdutivo);
        assert!((r.confidence - 0.92).abs() < f64::EPSILON);
        assert_eq!(r.subject, "(sem assunto)");
    }

    #[test]
    fn test_response_fills_missing_parts_with_markers() {
        let json = r#"{"category":"Produtivo","confidence":0.6,"reply":"ok"}"#;
        let r: ClassifyResponse = serde_json::from_str(json).unwrap();
        assert_eq!(r.subject, "(Sem Assunto Detectado)");
        assert_eq!(r.content, "(Sem Conteúdo Detectado)");
    }
}
