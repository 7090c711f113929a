use yew::prelude::*;

use crate::components::layout::{error_line, loading_line};
use crate::config::Config;
use crate::fetch::{use_remote, RemoteState};
use crate::format::{format_currency, format_date};
use crate::gateway::{fetch_category_details, HttpBackend};
use crate::models::CategoryDetail;
use crate::refresh::RefreshSignal;
use crate::validator::normalize_transactions;

#[derive(Properties, PartialEq)]
pub struct CategoryDetailsProps {
    pub category: String,
    pub refresh: RefreshSignal,
}

#[function_component(CategoryDetails)]
pub fn category_details(props: &CategoryDetailsProps) -> Html {
    let config = use_context::<Config>().unwrap_or_default();
    let backend = HttpBackend::new(&config);
    let detail = use_remote(
        (props.category.clone(), props.refresh),
        move |(category, _)| async move { fetch_category_details(&backend, &category).await },
    );

    let body = match &detail {
        RemoteState::Loading => loading_line("Loading category details..."),
        RemoteState::Failed(message) => error_line(message),
        RemoteState::Ready(detail) => detail_body(detail, &config.currency_symbol),
    };

    html! {
        <div class="mt-6 bg-[#f1f4f9] rounded-[10px] p-5">
            <h4 class="text-[#1D617A] font-bold text-[15px] mb-3 tracking-wider">{ props.category.clone() }</h4>
            { body }
        </div>
    }
}

fn detail_body(detail: &CategoryDetail, symbol: &str) -> Html {
    let stats = [
        ("Total", format_currency(detail.total, symbol)),
        ("Transactions", detail.count.to_string()),
        ("Average", format_currency(detail.average, symbol)),
        ("Highest", format_currency(detail.highest, symbol)),
        ("Lowest", format_currency(detail.lowest, symbol)),
    ];
    let recent = normalize_transactions(detail.transactions.clone());

    html! {
        <>
            <div class="grid grid-cols-2 md:grid-cols-5 gap-3 mb-4">
                { for stats.iter().map(|(label, value)| html! {
                    <div class="bg-white rounded-[10px] p-3">
                        <p class="text-muted-foreground text-[10px] font-bold tracking-widest">{ *label }</p>
                        <p class="text-sm font-bold text-[#173E63]">{ value.clone() }</p>
                    </div>
                }) }
            </div>
            <p class="text-xs text-muted-foreground mb-2">{ format!("{} transactions by date", detail.category) }</p>
            <ul class="divide-y divide-border text-sm">
                { for recent.iter().map(|tx| html! {
                    <li class="flex justify-between py-2">
                        <span class="text-muted-foreground">{ format_date(&tx.date) }</span>
                        <span class="font-semibold text-foreground">{ format_currency(tx.amount, symbol) }</span>
                    </li>
                }) }
            </ul>
        </>
    }
}
