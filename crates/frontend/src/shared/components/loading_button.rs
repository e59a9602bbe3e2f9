use leptos::prelude::*;

/// Botão de submit com estado ocupado: spinner + troca de rótulo + classe
/// `loading` enquanto a requisição está em andamento
///
/// O conteúdo original volta sozinho quando `loading` fica falso; o botão
/// só é reabilitado junto com a restauração do rótulo.
#[component]
pub fn LoadingButton(
    /// Estado ocupado (reactive)
    #[prop(into)]
    loading: Signal<bool>,
    /// Rótulo mostrado durante o carregamento
    #[prop(optional, into)]
    loading_label: MaybeProp<String>,
    /// Conteúdo original do botão
    children: ChildrenFn,
) -> impl IntoView {
    let label = move || {
        loading_label
            .get()
            .unwrap_or_else(|| "Processando...".to_string())
    };

    view! {
        <button
            type="submit"
            class=move || {
                if loading.get() {
                    "button button--primary loading"
                } else {
                    "button button--primary"
                }
            }
            disabled=move || loading.get()
        >
            {move || {
                if loading.get() {
                    view! {
                        <span class="loading-spinner"></span>
                        {label()}
                    }
                        .into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}

/// Versão alternativa mais simples: só troca o rótulo e desabilita
#[component]
pub fn TextLoadingButton(
    /// Estado ocupado (reactive)
    #[prop(into)]
    loading: Signal<bool>,
    /// Rótulo mostrado durante o carregamento
    #[prop(optional, into)]
    loading_label: MaybeProp<String>,
    /// Conteúdo original do botão
    children: ChildrenFn,
) -> impl IntoView {
    let label = move || {
        loading_label
            .get()
            .unwrap_or_else(|| "Carregando...".to_string())
    };

    view! {
        <button
            type="submit"
            class="button button--primary"
            disabled=move || loading.get()
        >
            {move || {
                if loading.get() {
                    label().into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
