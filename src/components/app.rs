use yew::prelude::*;

use crate::components::insights::Insights;
use crate::components::layout::{page_shell, Layout};
use crate::components::summary_chart::SummaryChart;
use crate::components::transactions_table::TransactionsTable;
use crate::components::trends::MonthlyTrends;
use crate::components::upload::Upload;
use crate::config::Config;
use crate::refresh::{DashboardAction, DashboardState};

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Config,
}

/// Page orchestrator. Owns the refresh signal and the upload badge and does no
/// fetching of its own.
#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let dashboard = use_reducer(DashboardState::default);

    let on_uploaded = {
        let dashboard = dashboard.dispatcher();
        Callback::from(move |count: usize| dashboard.dispatch(DashboardAction::UploadCompleted(count)))
    };

    let refresh = dashboard.refresh;

    html! {
        <ContextProvider<Config> context={props.config.clone()}>
            <Layout refresh={refresh} badge={dashboard.badge()}>
                { page_shell(
                    "Overview",
                    html! {},
                    html! {
                        <>
                            <div class="grid grid-cols-1 lg:grid-cols-12 gap-6 items-start">
                                <div class="lg:col-span-4 space-y-6">
                                    <Upload on_uploaded={on_uploaded} />
                                    <Insights refresh={refresh} />
                                </div>
                                <div class="lg:col-span-8 space-y-6">
                                    <SummaryChart refresh={refresh} />
                                    <MonthlyTrends refresh={refresh} />
                                </div>
                            </div>
                            <TransactionsTable refresh={refresh} />
                        </>
                    }
                ) }
            </Layout>
        </ContextProvider<Config>>
    }
}
