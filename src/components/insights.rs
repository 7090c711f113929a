use yew::prelude::*;

use crate::components::layout::{
    empty_line, error_line, icon_lightbulb, icon_trending_up, loading_line, panel,
};
use crate::components::RefreshProps;
use crate::config::Config;
use crate::fetch::{use_remote, RemoteState};
use crate::gateway::{fetch_insights, HttpBackend};

#[function_component(Insights)]
pub fn insights(props: &RefreshProps) -> Html {
    let config = use_context::<Config>().unwrap_or_default();
    let backend = HttpBackend::new(&config);
    let insights = use_remote(props.refresh, move |_| async move { fetch_insights(&backend).await });

    let body = match &insights {
        RemoteState::Loading => loading_line("Generating insights..."),
        RemoteState::Failed(message) => error_line(message),
        RemoteState::Ready(lines) if lines.is_empty() => empty_line("No insights available yet."),
        RemoteState::Ready(lines) => html! {
            <ul class="space-y-3">
                { for lines.iter().enumerate().map(|(idx, line)| html! {
                    <li key={idx} class="flex items-start gap-3 text-sm">
                        <span class="p-1.5 bg-[#eef4f9] rounded-lg text-[#1D617A] shrink-0">
                            { if idx % 2 == 0 { icon_lightbulb() } else { icon_trending_up() } }
                        </span>
                        <span class="text-foreground pt-1">{ line.clone() }</span>
                    </li>
                }) }
            </ul>
        },
    };

    panel("Insights", body)
}
