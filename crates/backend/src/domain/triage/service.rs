//! Classificação e geração de resposta
//!
//! Quando há `OPENAI_API_KEY` no ambiente, a classificação e a resposta
//! passam pela OpenAI; sem chave (ou em qualquer falha da API) o fluxo cai
//! no classificador por palavras-chave e em templates de resposta.

use contracts::triage::Category;
use once_cell::sync::Lazy;

use super::keyword;
use crate::shared::config;
use crate::shared::llm::openai_provider::OpenAiProvider;
use crate::shared::llm::{ChatMessage, LlmProvider};

const CLASSIFICATION_PROMPT: &str = r#"
Você é um especialista em classificação de emails. Analise o texto do email a seguir e classifique-o em uma das duas categorias:

**Produtivo**: Emails que requerem ação, resposta ou acompanhamento
- Exemplos: perguntas, solicitações, pedidos de informação, problemas técnicos, agendamentos

**Improdutivo**: Emails apenas informativos ou de cortesia que não requerem ação
- Exemplos: agradecimentos, felicitações, confirmações simples, mensagens de cortesia

IMPORTANTE: Responda EXATAMENTE no formato:
CATEGORIA: [Produtivo ou Improdutivo]
CONFIANÇA: [número de 0 a 1]
JUSTIFICATIVA: [breve explicação]
"#;

const REPLY_PROMPT: &str = r#"
Você é um assistente especializado em gerar respostas para emails.

Para emails PRODUTIVOS: Gere uma resposta que reconheça a solicitação e indique próximos passos.
Para emails IMPRODUTIVOS: Gere uma resposta educada de agradecimento sem criar expectativas de ação.

Mantenha as respostas curtas (2-4 frases) e profissionais.
"#;

// Classificação pede temperatura baixa para consistência; a resposta pode
// ser mais livre
const CLASSIFY_TEMPERATURE: f64 = 0.1;
const CLASSIFY_MAX_TOKENS: i32 = 150;
const REPLY_TEMPERATURE: f64 = 0.7;
const REPLY_MAX_TOKENS: i32 = 200;

static CLASSIFY_PROVIDER: Lazy<Option<OpenAiProvider>> = Lazy::new(|| {
    let cfg = config::get();
    cfg.openai_api_key().map(|key| {
        OpenAiProvider::new(
            key,
            cfg.llm.model.clone(),
            CLASSIFY_TEMPERATURE,
            CLASSIFY_MAX_TOKENS,
        )
    })
});

static REPLY_PROVIDER: Lazy<Option<OpenAiProvider>> = Lazy::new(|| {
    let cfg = config::get();
    cfg.openai_api_key().map(|key| {
        OpenAiProvider::new(
            key,
            cfg.llm.model.clone(),
            REPLY_TEMPERATURE,
            REPLY_MAX_TOKENS,
        )
    })
});

/// Classifica o texto do e-mail
pub async fn classify_text(text: &str) -> (Category, f64) {
    let Some(provider) = CLASSIFY_PROVIDER.as_ref() else {
        return keyword::classify(text);
    };

    let messages = vec![
        ChatMessage::system(CLASSIFICATION_PROMPT),
        ChatMessage::user(format!("Email para classificar:\n\n{text}")),
    ];

    match provider.chat_completion(messages).await {
        Ok(response) => {
            tracing::debug!(
                model = %response.model,
                tokens = ?response.tokens_used,
                finish_reason = ?response.finish_reason,
                "Resposta de classificação recebida"
            );
            parse_classification_response(&response.content)
        }
        Err(e) => {
            tracing::warn!(
                "Classificação via {} falhou, usando palavras-chave: {e}",
                provider.provider_name()
            );
            keyword::classify(text)
        }
    }
}

/// Extrai categoria e confiança da resposta do modelo
pub fn parse_classification_response(response: &str) -> (Category, f64) {
    let mut category = Category::Produtivo;
    let mut confidence = 0.5;

    for line in response.lines() {
        let line = line.trim();
        if let Some(rest) = line.strip_prefix("CATEGORIA:") {
            category = if rest.contains("Improdutivo") {
                Category::Improdutivo
            } else {
                Category::Produtivo
            };
        } else if let Some(rest) = line.strip_prefix("CONFIANÇA:") {
            // Default alto se o número não parsear
            confidence = rest.trim().parse::<f64>().unwrap_or(0.8);
        }
    }

    (category, confidence)
}

/// Gera resposta sugerida com contexto da categoria
pub async fn generate_reply(category: Category, email_text: &str) -> String {
    let Some(provider) = REPLY_PROVIDER.as_ref() else {
        return fallback_reply(category);
    };

    let user_prompt = format!(
        "Categoria do email: {category}\nTexto do email:\n\n{email_text}\n\nGere uma resposta apropriada em 2-4 frases."
    );

    let messages = vec![
        ChatMessage::system(REPLY_PROMPT),
        ChatMessage::user(user_prompt),
    ];

    match provider.chat_completion(messages).await {
        Ok(response) => response.content.trim().to_string(),
        Err(e) => {
            tracing::warn!("Geração de resposta via OpenAI falhou, usando template: {e}");
            fallback_reply(category)
        }
    }
}

/// Templates de resposta usados sem OpenAI
fn fallback_reply(category: Category) -> String {
    match category {
        Category::Produtivo => {
            "Olá! Recebi sua mensagem e vou analisar sua solicitação. \
             Retornarei em breve com mais informações."
        }
        Category::Improdutivo => {
            "Olá! Muito obrigado pela sua mensagem. Fico feliz em saber disso!"
        }
    }
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_response() {
        let response = "CATEGORIA: Improdutivo\nCONFIANÇA: 0.92\nJUSTIFICATIVA: agradecimento";
        let (category, confidence) = parse_classification_response(response);
        assert_eq!(category, Category::Improdutivo);
        assert!((confidence - 0.92).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_unparseable_confidence_defaults_high() {
        let response = "CATEGORIA: Produtivo\nCONFIANÇA: alta";
        let (category, confidence) = parse_classification_response(response);
        assert_eq!(category, Category::Produtivo);
        assert!((confidence - 0.8).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_garbage_uses_defaults() {
        let (category, confidence) = parse_classification_response("resposta fora do formato");
        assert_eq!(category, Category::Produtivo);
        assert!((confidence - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_fallback_replies_differ_by_category() {
        assert_ne!(
            fallback_reply(Category::Produtivo),
            fallback_reply(Category::Improdutivo)
        );
    }

    #[tokio::test]
    async fn test_classify_without_api_key_uses_keywords() {
        // Sem OPENAI_API_KEY no ambiente de teste o provider é None
        if std::env::var("OPENAI_API_KEY").is_ok() {
            return;
        }
        let (category, _) = classify_text("Estou com um problema, você pode me ajudar?").await;
        assert_eq!(category, Category::Produtivo);
    }
}
