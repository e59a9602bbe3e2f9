//! Pré-processamento de texto para classificação

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

/// Stopwords do português (lista padrão, embutida no binário)
const PORTUGUESE_STOPWORDS: &[&str] = &[
    "a", "à", "ao", "aos", "aquela", "aquelas", "aquele", "aqueles", "aquilo", "as", "às", "até",
    "com", "como", "da", "das", "de", "dela", "delas", "dele", "deles", "depois", "do", "dos", "e",
    "é", "ela", "elas", "ele", "eles", "em", "entre", "era", "eram", "éramos", "essa", "essas",
    "esse", "esses", "esta", "está", "estamos", "estão", "estar", "estas", "estava", "estavam",
    "estávamos", "este", "esteja", "estejam", "estejamos", "estes", "esteve", "estive",
    "estivemos", "estiver", "estivera", "estiveram", "estivéramos", "estiverem", "estivermos",
    "estivesse", "estivessem", "estivéssemos", "estou", "eu", "foi", "fomos", "for", "fora",
    "foram", "fôramos", "forem", "formos", "fosse", "fossem", "fôssemos", "fui", "há", "haja",
    "hajam", "hajamos", "hão", "havemos", "haver", "hei", "houve", "houvemos", "houver", "houvera",
    "houverá", "houveram", "houvéramos", "houverão", "houverei", "houverem", "houveremos",
    "houveria", "houveriam", "houveríamos", "houvermos", "houvesse", "houvessem", "houvéssemos",
    "isso", "isto", "já", "lhe", "lhes", "mais", "mas", "me", "mesmo", "meu", "meus", "minha",
    "minhas", "muito", "na", "não", "nas", "nem", "no", "nos", "nós", "nossa", "nossas", "nosso",
    "nossos", "num", "numa", "o", "os", "ou", "para", "pela", "pelas", "pelo", "pelos", "por",
    "qual", "quando", "que", "quem", "são", "se", "seja", "sejam", "sejamos", "sem", "ser", "será",
    "serão", "serei", "seremos", "seria", "seriam", "seríamos", "seu", "seus", "só", "somos",
    "sou", "sua", "suas", "também", "te", "tem", "tém", "temos", "tenha", "tenham", "tenhamos",
    "tenho", "terá", "terão", "terei", "teremos", "teria", "teriam", "teríamos", "teu", "teus",
    "teve", "tinha", "tinham", "tínhamos", "tive", "tivemos", "tiver", "tivera", "tiveram",
    "tivéramos", "tiverem", "tivermos", "tivesse", "tivessem", "tivéssemos", "tu", "tua", "tuas",
    "um", "uma", "você", "vocês", "vos",
];

static STOPWORDS: Lazy<HashSet<&'static str>> =
    Lazy::new(|| PORTUGUESE_STOPWORDS.iter().copied().collect());

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").unwrap());
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b\w+\b").unwrap());

/// Remove espaços extras e normaliza o texto
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Quebra texto em tokens alfanuméricos
pub fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(&text.to_lowercase())
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Remove stopwords e tokens de 1 letra
pub fn remove_stopwords(tokens: Vec<String>) -> Vec<String> {
    tokens
        .into_iter()
        .filter(|t| !STOPWORDS.contains(t.as_str()) && t.chars().count() > 1)
        .collect()
}

/// Pré-processa texto (limpa, tokeniza, remove stopwords)
///
/// `do_stem` is accepted for parity with the classification pipeline but
/// stemming itself is not applied; the keyword classifier matches on
/// unstemmed forms.
pub fn preprocess(text: &str, _do_stem: bool) -> String {
    let text = normalize_whitespace(text).to_lowercase();
    let tokens = tokenize(&text);
    let tokens = remove_stopwords(tokens);
    tokens.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_whitespace() {
        assert_eq!(normalize_whitespace("  a\n\tb   c  "), "a b c");
        assert_eq!(normalize_whitespace("já limpo"), "já limpo");
    }

    #[test]
    fn test_tokenize_lowercases_and_splits() {
        assert_eq!(
            tokenize("Olá, Mundo! 123"),
            vec!["olá".to_string(), "mundo".to_string(), "123".to_string()]
        );
    }

    #[test]
    fn test_remove_stopwords_drops_short_tokens() {
        let tokens = vec![
            "o".to_string(),
            "relatório".to_string(),
            "de".to_string(),
            "vendas".to_string(),
        ];
        assert_eq!(
            remove_stopwords(tokens),
            vec!["relatório".to_string(), "vendas".to_string()]
        );
    }

    #[test]
    fn test_preprocess_pipeline() {
        assert_eq!(preprocess("Obrigado  pelo  SUPORTE!", false), "obrigado suporte");
        assert_eq!(preprocess("", false), "");
    }
}
