// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Patch Merging

use company_registry::domain::PatchFields;
use company_registry::{CompanyCandidate, CompanyPatch, ValidationError};
use proptest::prelude::*;
use serde_json::{json, Value};

fn base() -> CompanyCandidate {
    CompanyCandidate::new("Base", 5, false, "NonProfit").with_description("original")
}

fn to_fields(value: Value) -> PatchFields {
    value.as_object().cloned().unwrap_or_default()
}

proptest! {
    /// Property: a patch touching only `employees` changes nothing else
    #[test]
    fn prop_single_field_patch_is_local(employees in 0i64..1_000_000) {
        let patch = CompanyPatch::from_fields(&to_fields(json!({ "employees": employees }))).unwrap();
        let merged = patch.apply(&base());

        prop_assert_eq!(merged.employees, employees);
        prop_assert_eq!(
            CompanyCandidate { employees: base().employees, ..merged },
            base()
        );
    }

    /// Property: applying the same patch twice equals applying it once
    #[test]
    fn prop_apply_idempotent(
        name in prop::option::of("[a-z]{1,15}"),
        registered in prop::option::of(any::<bool>()),
        clear_description in any::<bool>(),
    ) {
        let mut fields = PatchFields::new();
        if let Some(name) = &name {
            fields.insert("name".into(), json!(name));
        }
        if let Some(registered) = registered {
            fields.insert("registered".into(), json!(registered));
        }
        if clear_description {
            fields.insert("description".into(), Value::Null);
        }
        prop_assume!(!fields.is_empty());

        let patch = CompanyPatch::from_fields(&fields).unwrap();
        let once = patch.apply(&base());
        prop_assert_eq!(patch.apply(&once), once);
    }

    /// Property: fractional headcounts truncate toward zero
    #[test]
    fn prop_float_employees_truncate(whole in 0i64..1_000_000, fraction in 0.0f64..0.99) {
        let value = whole as f64 + fraction;
        let patch = CompanyPatch::from_fields(&to_fields(json!({ "employees": value }))).unwrap();
        prop_assert_eq!(patch.employees, Some(whole));
    }

    /// Property: keys outside the mutable set never form a patch on their own
    #[test]
    fn prop_unknown_keys_only_is_empty(key in "[a-z]{1,10}", value in any::<i32>()) {
        prop_assume!(!["name", "description", "employees", "registered", "type"].contains(&key.as_str()));
        let fields = to_fields(json!({ key: value, "id": "ignored" }));
        prop_assert_eq!(CompanyPatch::from_fields(&fields), Err(ValidationError::EmptyPatch));
    }

    /// Property: a wrongly-typed field rejects the whole patch
    #[test]
    fn prop_type_mismatch_rejects_everything(text in "[a-z]{1,10}") {
        let fields = to_fields(json!({ "name": "Fine", "employees": text }));
        prop_assert_eq!(
            CompanyPatch::from_fields(&fields),
            Err(ValidationError::TypeMismatch { field: "employees", expected: "a number" })
        );
    }
}
