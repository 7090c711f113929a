use yew::prelude::*;

use crate::refresh::RefreshSignal;

pub mod app;
pub mod backend_status;
pub mod category_details;
pub mod insights;
pub mod layout;
pub mod summary_chart;
pub mod transactions_table;
pub mod trends;
pub mod upload;

/// Props for every read-only view: the shared signal they reload on.
#[derive(Properties, PartialEq)]
pub struct RefreshProps {
    pub refresh: RefreshSignal,
}
