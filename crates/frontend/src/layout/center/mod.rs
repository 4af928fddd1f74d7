pub mod tab_bar;

use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;
use tab_bar::TabBar;

#[component]
pub fn Center(children: Children) -> impl IntoView {
    let tabs_store = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <div data-zone="center" class="app-tabs" style="flex: 1; overflow: auto;">
            <Show when=move || tabs_store.opened.with(|tabs| !tabs.is_empty())>
                <TabBar />
            </Show>
            {children()}
        </div>
    }
}
