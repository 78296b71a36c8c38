//! Schema-Driven Form Rendering
//!
//! Renders a [`FormSchema`] field by field. The schema is linted once when
//! the form mounts; `FormSchema::lint` logs the problems and rendering
//! carries on, with `options` ignored on fields that are not selects.

pub mod fields;

use formdeck::schema::FormSchema;
use leptos::prelude::*;

use fields::FieldRow;

#[component]
pub fn SchemaForm(schema: FormSchema) -> impl IntoView {
    schema.lint();

    view! {
        <div>
            {schema.fields.into_iter().map(|field| {
                view! { <FieldRow field=field /> }
            }).collect_view()}
        </div>
    }
}
