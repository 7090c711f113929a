use yew::prelude::*;

use crate::components::layout::{empty_line, error_line, icon_bar_chart, loading_line, panel};
use crate::components::RefreshProps;
use crate::config::Config;
use crate::fetch::{use_remote, RemoteState};
use crate::format::format_currency;
use crate::gateway::{fetch_trends, HttpBackend};
use crate::models::MonthlyTrend;

/// Bar width relative to the busiest month, in whole percent.
fn bar_width(total: f64, peak: f64) -> i64 {
    if peak <= 0.0 || total <= 0.0 {
        0
    } else {
        ((total / peak) * 100.0).round().min(100.0) as i64
    }
}

#[function_component(MonthlyTrends)]
pub fn monthly_trends(props: &RefreshProps) -> Html {
    let config = use_context::<Config>().unwrap_or_default();
    let backend = HttpBackend::new(&config);
    let trends = use_remote(props.refresh, move |_| async move { fetch_trends(&backend).await });

    let body = match &trends {
        RemoteState::Loading => loading_line("Loading monthly trends..."),
        RemoteState::Failed(message) => error_line(message),
        RemoteState::Ready(months) if months.is_empty() => empty_line("No monthly trends yet."),
        RemoteState::Ready(months) => trend_rows(months, &config.currency_symbol),
    };

    panel("Monthly Trends", body)
}

fn trend_rows(months: &[MonthlyTrend], symbol: &str) -> Html {
    let peak = months.iter().map(|m| m.total).fold(0.0_f64, f64::max);

    html! {
        <div class="space-y-3">
            { for months.iter().map(|month| html! {
                <div class="flex flex-col gap-1 text-sm">
                    <div class="flex items-center justify-between">
                        <span class="flex items-center gap-2 text-foreground">
                            <span class="text-[#1D617A]">{ icon_bar_chart() }</span>
                            { month.month.clone() }
                        </span>
                        <span class="font-semibold text-foreground">{ format_currency(month.total, symbol) }</span>
                    </div>
                    <div class="h-2 w-full bg-secondary rounded-full overflow-hidden">
                        <div class="h-full bg-primary" style={format!("width: {}%", bar_width(month.total, peak))}></div>
                    </div>
                    <div class="flex items-center justify-between text-xs text-muted-foreground">
                        <span>{ format!("{} transactions · avg {}", month.count, format_currency(month.average, symbol)) }</span>
                        if let Some(top) = &month.top_category {
                            <span>{ format!("Top: {}", top) }</span>
                        }
                    </div>
                </div>
            }) }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bars_scale_to_the_peak_month() {
        assert_eq!(bar_width(50.0, 200.0), 25);
        assert_eq!(bar_width(200.0, 200.0), 100);
        assert_eq!(bar_width(10.0, 0.0), 0);
        assert_eq!(bar_width(-5.0, 100.0), 0);
    }
}
