use yew::prelude::*;

use crate::components::backend_status::BackendStatus;
use crate::refresh::RefreshSignal;

#[derive(Properties, PartialEq)]
pub struct LayoutProps {
    pub children: Children,
    pub refresh: RefreshSignal,
    pub badge: Option<String>,
}

#[function_component(Layout)]
pub fn layout(props: &LayoutProps) -> Html {
    html! {
        <div class="min-h-screen bg-background flex flex-col">
            <Header refresh={props.refresh} badge={props.badge.clone()} />
            <main class="flex-1 overflow-y-auto">
                { for props.children.iter() }
            </main>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct HeaderProps {
    refresh: RefreshSignal,
    badge: Option<String>,
}

#[function_component(Header)]
fn header(props: &HeaderProps) -> Html {
    html! {
        <header class="bg-[#D8E1E8] border-b border-border h-16 flex items-center justify-between px-6">
            <div class="flex items-center gap-3">
                <div class="w-10 h-10 bg-[#173E63] rounded-full flex items-center justify-center text-white">
                    { icon_wallet() }
                </div>
                <span class="text-[#173E63] text-xl font-black tracking-tight">{"Spending Dashboard"}</span>
            </div>
            <div class="flex items-center gap-4">
                if let Some(badge) = &props.badge {
                    <span class="bg-[#B2CBDE] text-[#173E63] px-3 py-1 rounded-full text-[11px] font-bold">{ badge.clone() }</span>
                }
                <BackendStatus refresh={props.refresh} />
            </div>
        </header>
    }
}

pub fn page_shell(title: &'static str, actions: Html, children: Html) -> Html {
    html! {
        <div class="p-6 max-w-7xl mx-auto">
            <div class="flex items-center justify-between pb-4 border-b border-border">
                <h1 class="text-2xl font-bold text-foreground">{ title }</h1>
                { actions }
            </div>
            <div class="pt-5 space-y-6">
                { children }
            </div>
        </div>
    }
}

/// Card with a heading, used by every dashboard panel.
pub fn panel(title: &'static str, children: Html) -> Html {
    html! {
        <div class="bg-card rounded-[10px] shadow-sm border border-border overflow-hidden">
            <div class="px-6 py-4 border-b border-border">
                <h3 class="font-bold text-lg text-foreground">{ title }</h3>
            </div>
            <div class="p-6">
                { children }
            </div>
        </div>
    }
}

pub fn loading_line(label: &'static str) -> Html {
    html! { <p class="text-sm text-muted-foreground animate-pulse">{ label }</p> }
}

pub fn error_line(message: &str) -> Html {
    html! { <p class="text-sm text-red-500">{ message.to_string() }</p> }
}

pub fn empty_line(message: &'static str) -> Html {
    html! { <p class="text-sm text-muted-foreground">{ message }</p> }
}

fn icon_base(path: &'static str) -> Html {
    html! {
        <svg width="20" height="20" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
            <path d={path}></path>
        </svg>
    }
}

pub fn icon_wallet() -> Html {
    icon_base("M3 7h18v10H3zM16 7V5H5v2")
}
pub fn icon_trending_up() -> Html {
    icon_base("M3 17l6-6 4 4 7-7")
}
pub fn icon_lightbulb() -> Html {
    icon_base("M9 18h6M10 22h4M12 2a7 7 0 00-4 12.7V17h8v-2.3A7 7 0 0012 2z")
}
pub fn icon_upload() -> Html {
    icon_base("M21 15v4a2 2 0 01-2 2H5a2 2 0 01-2-2v-4M17 8l-5-5-5 5M12 3v12")
}
pub fn icon_bar_chart() -> Html {
    icon_base("M4 20V10M10 20V4M16 20v-6M22 20H2")
}
