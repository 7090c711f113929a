use yew::prelude::*;

use crate::chart::{
    clamp_selection, grand_total, layout_slices, toggle_selection, Slice, SliceShape, PIE_CENTER,
    PIE_RADIUS,
};
use crate::components::category_details::CategoryDetails;
use crate::components::layout::{empty_line, error_line, loading_line, panel};
use crate::components::RefreshProps;
use crate::config::Config;
use crate::fetch::{use_remote, RemoteState};
use crate::format::format_currency;
use crate::gateway::{fetch_summary, HttpBackend};

#[function_component(SummaryChart)]
pub fn summary_chart(props: &RefreshProps) -> Html {
    let config = use_context::<Config>().unwrap_or_default();
    let backend = HttpBackend::new(&config);
    let summary = use_remote(props.refresh, move |_| async move { fetch_summary(&backend).await });
    let selected = use_state(|| None::<usize>);

    // Only settled data may clear a selection; a reload in progress keeps it.
    {
        let selected = selected.clone();
        let settled_len = summary.ready().map(Vec::len);
        use_effect_with_deps(
            move |settled_len: &Option<usize>| {
                if let Some(len) = *settled_len {
                    let clamped = clamp_selection(*selected, len);
                    if clamped != *selected {
                        selected.set(clamped);
                    }
                }
                || ()
            },
            settled_len,
        );
    }

    let body = match &summary {
        RemoteState::Loading => loading_line("Loading summary..."),
        RemoteState::Failed(message) => error_line(message),
        RemoteState::Ready(items) if items.is_empty() => {
            empty_line("No spending data yet. Upload a transactions file to see the breakdown.")
        }
        RemoteState::Ready(items) => {
            let total = grand_total(items);
            let slices = layout_slices(items);
            let current = clamp_selection(*selected, slices.len());
            let on_pick = {
                let selected = selected.clone();
                Callback::from(move |index: usize| selected.set(toggle_selection(current, index)))
            };
            let symbol = config.currency_symbol.clone();

            html! {
                <>
                    <div class="grid grid-cols-1 md:grid-cols-2 gap-6 items-center">
                        <svg viewBox="0 0 200 200" class="w-64 h-64 mx-auto">
                            { for slices.iter().map(|slice| pie_slice(slice, current, &symbol, on_pick.clone())) }
                        </svg>
                        <div class="space-y-2">
                            <div class="flex items-center justify-between text-sm pb-2 border-b border-border">
                                <span class="text-muted-foreground">{"Total spending"}</span>
                                <span class="font-bold text-[#1D617A]">{ format_currency(total, &symbol) }</span>
                            </div>
                            { for slices.iter().map(|slice| legend_row(slice, current, &symbol, on_pick.clone())) }
                        </div>
                    </div>
                    if let Some(index) = current {
                        <CategoryDetails category={slices[index].category.clone()} refresh={props.refresh} />
                    }
                </>
            }
        }
    };

    panel("Spending by Category", body)
}

fn slice_label(slice: &Slice, symbol: &str) -> String {
    format!(
        "{}: {} ({}%)",
        slice.category,
        format_currency(slice.total, symbol),
        slice.percent
    )
}

fn pie_slice(slice: &Slice, selected: Option<usize>, symbol: &str, on_pick: Callback<usize>) -> Html {
    let index = slice.index;
    let onclick = Callback::from(move |_: MouseEvent| on_pick.emit(index));
    let stroke_width = if selected == Some(index) { "4" } else { "1" };
    let title = slice_label(slice, symbol);

    match &slice.shape {
        SliceShape::Hidden => html! {},
        SliceShape::Full => html! {
            <circle cx={PIE_CENTER.to_string()} cy={PIE_CENTER.to_string()} r={PIE_RADIUS.to_string()}
                fill={slice.color} stroke="#ffffff" stroke-width={stroke_width} class="cursor-pointer" onclick={onclick}>
                <title>{ title }</title>
            </circle>
        },
        SliceShape::Arc(d) => html! {
            <path d={d.clone()} fill={slice.color} stroke="#ffffff" stroke-width={stroke_width} class="cursor-pointer" onclick={onclick}>
                <title>{ title }</title>
            </path>
        },
    }
}

fn legend_row(slice: &Slice, selected: Option<usize>, symbol: &str, on_pick: Callback<usize>) -> Html {
    let index = slice.index;
    let onclick = Callback::from(move |_: MouseEvent| on_pick.emit(index));
    let row_class = if selected == Some(index) {
        "w-full flex items-center justify-between text-sm px-2 py-1 rounded-md bg-[#eef4f9]"
    } else {
        "w-full flex items-center justify-between text-sm px-2 py-1 rounded-md hover:bg-muted/40"
    };

    html! {
        <button type="button" class={row_class} onclick={onclick}>
            <span class="flex items-center gap-2">
                <span class="w-3 h-3 rounded-sm" style={format!("background: {}", slice.color)}></span>
                <span class="text-foreground">{ slice.category.clone() }</span>
            </span>
            <span class="text-muted-foreground">
                { format!("{} · {}%", format_currency(slice.total, symbol), slice.percent) }
            </span>
        </button>
    }
}
