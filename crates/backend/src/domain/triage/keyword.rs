//! Classificador de fallback por palavras-chave
//!
//! Usado quando não há chave OpenAI configurada ou quando a chamada à API
//! falha. A pontuação soma indicadores simples (substrings), frases com peso
//! maior e heurísticas de estrutura do texto.

use contracts::triage::Category;

/// Indicadores de mensagem improdutiva (cortesia, agradecimentos, confirmações)
const IMPRODUTIVO_INDICATORS: &[&str] = &[
    // Agradecimentos
    "obrigado",
    "obrigada",
    "agradecimento",
    "agradeço",
    "grato",
    "grata",
    "valeu",
    "thanks",
    "thank you",
    "gracias",
    // Felicitações
    "parabéns",
    "felicitações",
    "congratulações",
    "meus parabéns",
    "parabenizo",
    "congratulations",
    "felicito",
    // Elogios
    "ótimo",
    "excelente",
    "perfeito",
    "maravilhoso",
    "bom trabalho",
    "incrível",
    "fantástico",
    "espetacular",
    "sensacional",
    "excepcional",
    "admirável",
    "impressionante",
    "notável",
    "extraordinário",
    // Saudações e despedidas
    "tenha um",
    "bom dia",
    "boa tarde",
    "boa noite",
    "abraços",
    "abraço",
    "atenciosamente",
    "cordialmente",
    "saudações",
    "até mais",
    "até logo",
    "até breve",
    "até a próxima",
    "até amanhã",
    // Confirmações simples
    "recebi",
    "recebido",
    "confirmado",
    "ciente",
    "entendido",
    "compreendido",
    "ok",
    "beleza",
    "combinado",
    "fechado",
    "tudo bem",
    // Expressões de cortesia
    "gentileza",
    "atenção",
    "disponibilidade",
    "presteza",
    "cordialidade",
];

/// Indicadores de mensagem produtiva (ação necessária, perguntas, solicitações)
const PRODUTIVO_INDICATORS: &[&str] = &[
    // Necessidade/Urgência
    "preciso",
    "necessito",
    "necessário",
    "urgente",
    "importante",
    "crucial",
    "essencial",
    "fundamental",
    "imprescindível",
    "prioritário",
    // Perguntas
    "quando",
    "como",
    "onde",
    "por que",
    "qual",
    "quais",
    "quem",
    "quanto",
    "quantos",
    "quantas",
    "aonde",
    "o que",
    "será que",
    "poderia me informar",
    // Solicitações
    "por favor",
    "poderia",
    "gostaria",
    "solicito",
    "pedido",
    "requisição",
    "favor",
    "peço",
    "requeiro",
    "demando",
    "exijo",
    "requisito",
    // Problemas
    "problema",
    "erro",
    "falha",
    "bug",
    "defeito",
    "dificuldade",
    "obstáculo",
    "empecilho",
    "complicação",
    "transtorno",
    "inconveniente",
    "impasse",
    // Ajuda
    "ajuda",
    "suporte",
    "auxílio",
    "assistência",
    "apoio",
    "socorro",
    "amparo",
    // Ações futuras
    "precisa ser feito",
    "deve ser realizado",
    "necessita ser",
    "aguardo",
    "espero",
    "aguardando",
    "esperando",
    "pendente",
    "em aberto",
    // Verbos de ação no imperativo ou futuro
    "faça",
    "envie",
    "prepare",
    "organize",
    "desenvolva",
    "crie",
    "elabore",
    "analise",
    "verifique",
    "confira",
    "avalie",
    "examine",
    "investigue",
    "será",
    "faremos",
    "vamos",
    "iremos",
    "precisamos",
    "devemos",
];

/// Frases completas que indicam improdutividade (peso 2)
const IMPRODUTIVO_PHRASES: &[&str] = &[
    "muito obrigado",
    "agradeço sua atenção",
    "grato pela atenção",
    "só para confirmar",
    "apenas confirmando",
    "só para avisar",
    "só para informar",
    "apenas para informar",
    "só queria agradecer",
    "só isso mesmo",
    "era só isso",
    "sem mais para o momento",
    "tenha um bom dia",
    "tenha uma boa semana",
    "bom final de semana",
    "recebi sua mensagem",
    "mensagem recebida",
    "email recebido",
    "entendi perfeitamente",
    "compreendi completamente",
];

/// Frases completas que indicam produtividade (peso 2)
const PRODUTIVO_PHRASES: &[&str] = &[
    "preciso de sua ajuda",
    "gostaria de solicitar",
    "poderia me ajudar",
    "quando podemos",
    "como faço para",
    "por favor verifique",
    "aguardo retorno",
    "aguardo resposta",
    "espero seu feedback",
    "preciso que você",
    "necessito que seja",
    "é necessário que",
    "por gentileza",
    "favor verificar",
    "favor analisar",
    "estou com problema",
    "estou com dificuldade",
    "não consigo",
    "você poderia",
    "seria possível",
    "é possível",
    "o que acha de",
    "o que você pensa sobre",
    "qual sua opinião",
];

/// Verbos no imperativo ou futuro (peso 1.5, indicam ação necessária)
const IMPERATIVE_FUTURE_VERBS: &[&str] = &[
    "faça", "envie", "prepare", "organize", "desenvolva", "será", "faremos",
];

/// Marcadores de lista (indicam tarefas ou itens a serem considerados)
const LIST_MARKERS: &[&str] = &["1.", "2.", "•", "-", "*", "primeiro", "segundo", "terceiro"];

fn count_hits(text: &str, needles: &[&str]) -> f64 {
    needles.iter().filter(|n| text.contains(*n)).count() as f64
}

/// Classifica texto por palavras-chave e análise de contexto
pub fn classify(text: &str) -> (Category, f64) {
    let text_lower = text.to_lowercase();
    let word_count = text_lower.split_whitespace().count();
    let has_question = text.contains('?');

    // Análise de palavras individuais
    let mut improdutivo_score = count_hits(&text_lower, IMPRODUTIVO_INDICATORS);
    let mut produtivo_score = count_hits(&text_lower, PRODUTIVO_INDICATORS);

    // Análise de frases completas (peso maior)
    improdutivo_score += 2.0 * count_hits(&text_lower, IMPRODUTIVO_PHRASES);
    produtivo_score += 2.0 * count_hits(&text_lower, PRODUTIVO_PHRASES);

    // Perguntas são fortes indicadores de produtividade
    if has_question {
        produtivo_score += 3.0;
    }

    // Verbos no imperativo ou futuro
    produtivo_score += 1.5 * count_hits(&text_lower, IMPERATIVE_FUTURE_VERBS);

    // Análise de comprimento e contexto
    if word_count < 15 {
        // Textos curtos com palavras de cortesia tendem a ser improdutivos
        if improdutivo_score > 0.0 {
            improdutivo_score += 2.0;
        }
        // Perguntas curtas são muito produtivas
        if has_question {
            produtivo_score += 2.0;
        }
    } else if produtivo_score > 3.0 {
        produtivo_score += 1.0;
    }

    // Emails com várias frases tendem a ser mais produtivos
    if text.split('.').count() >= 3 {
        produtivo_score += 1.0;
    }

    // Detecção de listas
    if LIST_MARKERS.iter().any(|m| text.contains(m)) {
        produtivo_score += 2.0;
    }

    if improdutivo_score > produtivo_score {
        let confidence = (0.6 + (improdutivo_score - produtivo_score) * 0.08).min(0.95);
        (Category::Improdutivo, confidence)
    } else {
        let confidence = (0.6 + (produtivo_score - improdutivo_score) * 0.08).min(0.95);
        (Category::Produtivo, confidence)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_category(text: &str, expected: Category) {
        let (category, confidence) = classify(text);
        assert_eq!(category, expected, "texto: {text}");
        assert!((0.0..=1.0).contains(&confidence));
        assert!(confidence >= 0.6, "confiança abaixo do piso: {confidence}");
    }

    #[test]
    fn test_courtesy_messages_are_improdutivo() {
        assert_category(
            "Muito obrigado pelo seu trabalho, ficou excelente!",
            Category::Improdutivo,
        );
        assert_category("Recebi sua mensagem, obrigado.", Category::Improdutivo);
        assert_category("Entendido, tenha um bom dia!", Category::Improdutivo);
        assert_category(
            "Mensagem recebida, agradeço a atenção.",
            Category::Improdutivo,
        );
    }

    #[test]
    fn test_requests_and_problems_are_produtivo() {
        assert_category(
            "Preciso que você me envie o relatório até amanhã.",
            Category::Produtivo,
        );
        assert_category(
            "Quando podemos marcar uma reunião para discutir o projeto?",
            Category::Produtivo,
        );
        assert_category(
            "Estou com um problema no sistema, você pode me ajudar?",
            Category::Produtivo,
        );
        assert_category(
            "Gostaria de solicitar informações sobre o novo produto.",
            Category::Produtivo,
        );
    }

    #[test]
    fn test_mixed_message_with_follow_up_is_produtivo() {
        // Agradece mas pede ação: a pergunta e a solicitação pesam mais
        assert_category(
            "Agradeço o envio. Quando teremos a versão final?",
            Category::Produtivo,
        );
    }

    #[test]
    fn test_question_mark_pushes_towards_produtivo() {
        let (with_question, _) = classify("Podemos conversar sobre o contrato?");
        assert_eq!(with_question, Category::Produtivo);
    }

    #[test]
    fn test_confidence_is_capped() {
        // Texto saturado de indicadores improdutivos
        let (category, confidence) =
            classify("Muito obrigado! Perfeito, excelente, ótimo trabalho, parabéns!");
        assert_eq!(category, Category::Improdutivo);
        assert!(confidence <= 0.95);
    }

    #[test]
    fn test_neutral_text_defaults_to_produtivo() {
        // Empate (0 x 0) cai no ramo produtivo com confiança mínima
        let (category, confidence) = classify("segue em anexo");
        assert_eq!(category, Category::Produtivo);
        assert!((confidence - 0.6).abs() < 1e-9);
    }
}
