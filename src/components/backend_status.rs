use yew::prelude::*;

use crate::components::RefreshProps;
use crate::config::Config;
use crate::fetch::{use_remote, RemoteState};
use crate::gateway::{fetch_health, HttpBackend};

#[function_component(BackendStatus)]
pub fn backend_status(props: &RefreshProps) -> Html {
    let config = use_context::<Config>().unwrap_or_default();
    let backend = HttpBackend::new(&config);
    let health = use_remote(props.refresh, move |_| async move { fetch_health(&backend).await });

    let (dot, label) = match &health {
        RemoteState::Loading => ("bg-slate-400", "Checking backend...".to_string()),
        RemoteState::Failed(_) => ("bg-red-500", "Backend unreachable".to_string()),
        RemoteState::Ready(status) if status.is_healthy() => (
            "bg-green-500",
            format!("Backend online · {} stored", status.transactions_count),
        ),
        RemoteState::Ready(status) => ("bg-amber-500", format!("Backend {}", status.status)),
    };

    html! {
        <div class="flex items-center gap-2 text-[11px] font-bold text-[#173E63]" title={config.api_base_url.clone()}>
            <span class={classes!("w-2", "h-2", "rounded-full", dot)}></span>
            <span>{ label }</span>
        </div>
    }
}
