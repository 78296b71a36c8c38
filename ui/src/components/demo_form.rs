use formdeck::catalog;
use formdeck::config::Settings;
use formdeck::routes::View;
use leptos::prelude::*;

use super::schema_form::SchemaForm;
use crate::state::use_form_state;

#[component]
pub fn DemoForm1() -> impl IntoView {
    view! { <DemoFormPage page=View::DemoForm1 /> }
}

#[component]
pub fn DemoForm2() -> impl IntoView {
    view! { <DemoFormPage page=View::DemoForm2 /> }
}

#[component]
fn DemoFormPage(page: View) -> impl IntoView {
    let form = use_form_state();
    let show_preview = expect_context::<Settings>().app.show_preview;

    let schema = match catalog::schema_for(page) {
        Ok(Some(schema)) => schema,
        Ok(None) => {
            return view! {
                <div class="p-6 text-gray-500">"This page has no form."</div>
            }
            .into_any();
        }
        Err(e) => {
            log::error!("Failed to build form for {}: {}", page.title(), e);
            return view! {
                <div class="p-6">
                    <div class="bg-red-50 border border-red-200 rounded-lg p-4">
                        <p class="text-red-800">
                            <strong>"Failed to build form."</strong>
                            " " {e.to_string()}
                        </p>
                    </div>
                </div>
            }
            .into_any();
        }
    };
    let title = schema.title.clone();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        match serde_json::to_string(&form.form_data()) {
            Ok(json) => log::info!("Submitted {}: {}", page.title(), json),
            Err(e) => log::error!("Failed to serialize form data: {}", e),
        }
    };

    view! {
        <div class="p-6 max-w-2xl">
            <h2 class="text-2xl font-bold mb-6">{title}</h2>
            <form class="bg-white p-6 rounded-lg shadow" on:submit=on_submit>
                <SchemaForm schema=schema />
                <div class="flex gap-2 mt-6">
                    <button
                        type="submit"
                        class="px-4 py-2 bg-blue-600 text-white rounded hover:bg-blue-700"
                    >
                        "Submit"
                    </button>
                    <button
                        type="button"
                        class="px-4 py-2 bg-gray-200 text-gray-800 rounded hover:bg-gray-300"
                        on:click=move |_| form.reset_form_data()
                    >
                        "Reset"
                    </button>
                </div>
            </form>
            <Show when=move || show_preview>
                <FormDataPreview />
            </Show>
        </div>
    }
    .into_any()
}

/// Live JSON view of the session form data
#[component]
fn FormDataPreview() -> impl IntoView {
    let form = use_form_state();

    let json = move || {
        serde_json::to_string_pretty(&form.form_data()).unwrap_or_else(|e| e.to_string())
    };

    view! {
        <div class="mt-6">
            <h3 class="text-sm font-semibold text-gray-600 mb-2">
                "Form data "
                <span class="font-normal text-gray-400">{move || format!("(revision {})", form.revision())}</span>
            </h3>
            <pre class="bg-gray-900 text-green-200 text-xs p-4 rounded overflow-x-auto">{json}</pre>
        </div>
    }
}
