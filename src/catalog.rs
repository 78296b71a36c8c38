//! Built-in demo forms

use crate::error::SchemaError;
use crate::routes::View;
use crate::schema::{FieldAttrs, FormField, FormSchema, SelectOption};

/// Contact details form shown at `/demo1`
pub fn demo_form_1() -> Result<FormSchema, SchemaError> {
    Ok(FormSchema::new("Contact details")
        .field(
            FormField::input("name", "Full name")
                .with_attrs(FieldAttrs::default().description("As it appears on your ID"))
                .with_error_message("Please enter your name")
                .required(),
        )
        .field(
            FormField::input("email", "Email")
                .with_attrs(
                    FieldAttrs::default()
                        .input_type("email")
                        .hint("autocomplete", "email"),
                )
                .with_pattern(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")?
                .with_error_message("Please enter a valid email address")
                .required(),
        )
        .field(
            FormField::select("country", "Country")
                .with_options([
                    SelectOption::new("fr", "France"),
                    SelectOption::new("de", "Germany"),
                    SelectOption::new("jp", "Japan"),
                    SelectOption::new("us", "United States"),
                ])
                .with_error_message("Please pick a country"),
        )
        .field(
            FormField::checkbox("newsletter", "Subscribe to the newsletter")
                .with_attrs(FieldAttrs::default().description("At most one email a month")),
        ))
}

/// Feedback form shown at `/demo2`
pub fn demo_form_2() -> Result<FormSchema, SchemaError> {
    Ok(FormSchema::new("Feedback")
        .field(
            FormField::select("topic", "Topic")
                .with_options([
                    SelectOption::new("bug", "Bug report"),
                    SelectOption::new("feature", "Feature request"),
                    SelectOption::new("other", "Something else"),
                ])
                .with_error_message("Please pick a topic")
                .required(),
        )
        .field(
            FormField::input("rating", "Rating (1-5)")
                .with_attrs(FieldAttrs::default().input_type("number").hint("min", 1).hint("max", 5))
                .with_pattern("^[1-5]$")?
                .with_error_message("Rating must be between 1 and 5"),
        )
        .field(
            FormField::textarea("message", "Message")
                .with_attrs(
                    FieldAttrs::default()
                        .rows(6)
                        .description("Tell us what happened"),
                )
                .with_error_message("Please write a message")
                .required(),
        )
        .field(FormField::checkbox("follow_up", "I'd like a follow-up")))
}

/// Schema rendered by a view, if it renders a form
pub fn schema_for(view: View) -> Result<Option<FormSchema>, SchemaError> {
    match view {
        View::Home => Ok(None),
        View::DemoForm1 => demo_form_1().map(Some),
        View::DemoForm2 => demo_form_2().map(Some),
    }
}
