use formdeck::config::Settings;
use formdeck::routes::{View, ROUTES};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn Home() -> impl IntoView {
    let title = expect_context::<Settings>().app.title;

    view! {
        <div class="p-6">
            <h2 class="text-2xl font-bold mb-2">{title}</h2>
            <p class="text-gray-600 mb-6">
                "Pick a demo form. Values you enter are kept while you move between pages."
            </p>
            <ul class="space-y-2">
                {ROUTES
                    .iter()
                    .filter(|route| route.view != View::Home)
                    .map(|route| view! {
                        <li>
                            <A href=route.path attr:class="text-blue-600 hover:underline">
                                {route.view.title()}
                            </A>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}
