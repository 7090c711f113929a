use yew::prelude::*;

use crate::components::layout::panel;
use crate::components::RefreshProps;
use crate::config::Config;
use crate::fetch::{use_remote, RemoteState};
use crate::format::{format_currency, format_date, format_id};
use crate::gateway::{fetch_transactions, HttpBackend};

#[function_component(TransactionsTable)]
pub fn transactions_table(props: &RefreshProps) -> Html {
    let config = use_context::<Config>().unwrap_or_default();
    let backend = HttpBackend::new(&config);
    let transactions = use_remote(props.refresh, move |_| async move {
        fetch_transactions(&backend).await
    });
    let symbol = config.currency_symbol.clone();

    let rows = match &transactions {
        RemoteState::Loading => html! {
            <tr><td colspan="4" class="px-8 py-6 text-center text-muted-foreground">{"Loading..."}</td></tr>
        },
        RemoteState::Failed(message) => html! {
            <tr><td colspan="4" class="px-8 py-6 text-center text-red-500">{ message.clone() }</td></tr>
        },
        RemoteState::Ready(list) if list.is_empty() => html! {
            <tr><td colspan="4" class="px-8 py-6 text-center text-muted-foreground">{"No transactions to show. Upload a file to get started."}</td></tr>
        },
        RemoteState::Ready(list) => html! {
            <>
                { for list.iter().enumerate().map(|(idx, tx)| html! {
                    <tr key={idx} class="text-sm hover:bg-muted/30 transition-colors">
                        <td class="px-8 py-4 text-muted-foreground">{ format_id(tx.id) }</td>
                        <td class="px-8 py-4 text-muted-foreground">{ format_date(&tx.date) }</td>
                        <td class="px-8 py-4">
                            <span class="bg-secondary text-secondary-foreground px-3 py-1 rounded-full text-[10px] font-bold">{ tx.category.clone() }</span>
                        </td>
                        <td class="px-8 py-4 text-right font-semibold text-foreground">{ format_currency(tx.amount, &symbol) }</td>
                    </tr>
                }) }
            </>
        },
    };

    panel(
        "Transactions",
        html! {
            <div class="overflow-x-auto -m-6">
                <table class="w-full text-left border-collapse">
                    <thead>
                        <tr class="bg-muted/50 text-muted-foreground text-[10px] uppercase tracking-widest">
                            <th class="px-8 py-4 font-bold">{"ID"}</th>
                            <th class="px-8 py-4 font-bold">{"Date"}</th>
                            <th class="px-8 py-4 font-bold">{"Category"}</th>
                            <th class="px-8 py-4 font-bold text-right">{"Amount"}</th>
                        </tr>
                    </thead>
                    <tbody class="divide-y divide-border">
                        { rows }
                    </tbody>
                </table>
            </div>
        },
    )
}
