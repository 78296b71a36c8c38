use formdeck::catalog;
use formdeck::routes::{self, View};
use formdeck::store::{FieldValue, FormData, FormStore};

fn snapshot(entries: &[(&str, &str)]) -> FormData {
    entries.iter().map(|(k, v)| (*k, *v)).collect()
}

#[test]
fn test_session_scenario() {
    let mut store = FormStore::new();
    assert!(store.form_data().is_empty());

    store.update_form_data([("name", "Alice")]);
    assert_eq!(store.form_data(), &snapshot(&[("name", "Alice")]));

    store.update_form_data([("email", "a@x.com")]);
    assert_eq!(
        store.form_data(),
        &snapshot(&[("name", "Alice"), ("email", "a@x.com")])
    );

    store.update_form_data([("name", "Bob")]);
    assert_eq!(
        store.form_data(),
        &snapshot(&[("name", "Bob"), ("email", "a@x.com")])
    );

    store.reset_form_data();
    assert_eq!(store.form_data(), &FormData::new());
}

#[test]
fn test_update_sequence_matches_left_to_right_merge() {
    let updates: Vec<Vec<(&str, FieldValue)>> = vec![
        vec![("a", 1i64.into()), ("b", "one".into())],
        vec![("b", "two".into()), ("c", true.into())],
        vec![],
        vec![("a", 3i64.into())],
        vec![("c", false.into()), ("d", "four".into())],
    ];

    let mut store = FormStore::new();
    let mut expected = std::collections::BTreeMap::new();
    for partial in &updates {
        store.update_form_data(partial.clone());
        for (k, v) in partial {
            expected.insert(k.to_string(), v.clone());
        }
    }

    let expected: FormData = expected.into_iter().collect();
    assert_eq!(store.form_data(), &expected);
    assert_eq!(store.get("a"), Some(&FieldValue::from(3i64)));
    assert_eq!(store.get("b").and_then(|v| v.as_str()), Some("two"));
}

#[test]
fn test_reset_after_any_history_is_empty() {
    for n in 0..5 {
        let mut store = FormStore::new();
        for i in 0..n {
            store.update_form_data([(format!("field_{}", i), i as i64)]);
        }
        store.reset_form_data();
        assert!(store.form_data().is_empty());
    }
}

#[test]
fn test_every_form_route_has_a_consistent_schema() {
    for route in routes::ROUTES.iter() {
        let schema = catalog::schema_for(route.view).expect("demo patterns compile");
        match route.view {
            View::Home => assert!(schema.is_none()),
            _ => {
                let schema = schema.expect("form view has a schema");
                assert!(schema.check().is_ok());
            }
        }
    }
}

#[test]
fn test_filling_a_demo_form_keeps_unrelated_fields() {
    let schema = catalog::demo_form_1().unwrap();
    let mut store = FormStore::new();

    store.update_form_data([("name", FieldValue::from("Alice")), ("newsletter", true.into())]);
    store.update_form_data([("country", "jp")]);

    for field in &schema.fields {
        assert!(store.get(&field.name).is_some() || field.name == "email");
    }
    assert_eq!(store.get("newsletter").and_then(|v| v.as_bool()), Some(true));
}
