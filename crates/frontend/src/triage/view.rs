use contracts::triage::ClassifyResponse;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::components::{LoadingButton, TextLoadingButton};
use crate::shared::format::format_confidence;

fn alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

/// Prepara o texto do formulário para envio: apara espaços e rejeita vazio
///
/// `None` significa que nenhuma requisição deve ser feita; `Some` carrega
/// exatamente o valor que vai no corpo do POST.
fn prepare_text_submission(raw: &str) -> Option<String> {
    let text = raw.trim();
    if text.is_empty() {
        None
    } else {
        Some(text.to_string())
    }
}

/// Página única: envio de arquivo ou texto + painel de resultado
///
/// Os dois formulários são independentes; cada um desabilita apenas o seu
/// próprio botão enquanto a requisição está em andamento.
#[component]
pub fn TriagePage() -> impl IntoView {
    let (email_text, set_email_text) = signal(String::new());
    let (is_uploading, set_is_uploading) = signal(false);
    let (is_classifying, set_is_classifying) = signal(false);
    let (result, set_result) = signal(Option::<ClassifyResponse>::None);

    let file_input: NodeRef<leptos::html::Input> = NodeRef::new();

    let on_submit_file = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let file = file_input
            .get_untracked()
            .and_then(|input| input.files())
            .and_then(|files| files.get(0));

        let Some(file) = file else {
            alert("Selecione um arquivo .txt ou .pdf");
            return;
        };

        set_is_uploading.set(true);
        spawn_local(async move {
            match api::upload_file(file).await {
                Ok(r) => set_result.set(Some(r)),
                Err(e) => alert(&format!("Erro: {e}")),
            }
            set_is_uploading.set(false);
        });
    };

    let on_submit_text = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let Some(text) = prepare_text_submission(&email_text.get_untracked()) else {
            alert("Cole o texto do e-mail.");
            return;
        };

        set_is_classifying.set(true);
        spawn_local(async move {
            match api::classify_text(&text).await {
                Ok(r) => set_result.set(Some(r)),
                Err(e) => alert(&format!("Erro: {e}")),
            }
            set_is_classifying.set(false);
        });
    };

    view! {
        <div class="triage-page">
            <h1>"Classificador de E-mails"</h1>

            <form class="triage-form" on:submit=on_submit_file>
                <label for="file">"Arquivo (.txt ou .pdf)"</label>
                <input id="file" type="file" accept=".txt,.pdf" node_ref=file_input />
                <LoadingButton loading=is_uploading>
                    "Enviar arquivo"
                </LoadingButton>
            </form>

            <form class="triage-form" on:submit=on_submit_text>
                <label for="email-text">"Texto do e-mail"</label>
                <textarea
                    id="email-text"
                    rows="8"
                    placeholder="Cole aqui o texto do e-mail"
                    prop:value=move || email_text.get()
                    on:input=move |ev| set_email_text.set(event_target_value(&ev))
                ></textarea>
                <TextLoadingButton loading=is_classifying>
                    "Classificar texto"
                </TextLoadingButton>
            </form>

            <Show when=move || result.get().is_some()>
                <div id="result" class="triage-result">
                    <h2>"Resultado"</h2>
                    <p>
                        "Categoria: "
                        <span id="category">
                            {move || result.get().map(|r| r.category.to_string())}
                        </span>
                    </p>
                    <p>
                        "Confiança: "
                        <span id="confidence">
                            {move || result.get().map(|r| format_confidence(r.confidence))}
                        </span>
                    </p>
                    <p>
                        "Resposta sugerida: "
                        <span id="reply">{move || result.get().map(|r| r.reply)}</span>
                    </p>
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_empty_text_is_sent_trimmed() {
        assert_eq!(
            prepare_text_submission("  Preciso do relatório.  \n"),
            Some("Preciso do relatório.".to_string())
        );
        // Sem espaços nas bordas o texto passa intacto
        assert_eq!(
            prepare_text_submission("obrigado pelo suporte"),
            Some("obrigado pelo suporte".to_string())
        );
    }

    #[test]
    fn test_empty_or_whitespace_text_is_rejected() {
        assert_eq!(prepare_text_submission(""), None);
        assert_eq!(prepare_text_submission("   "), None);
        assert_eq!(prepare_text_submission("\n\t  \n"), None);
    }
}
