// Copyright (c) 2025 - Cowboy AI, Inc.
//! Property-Based Tests for Company Invariants
//!
//! A candidate is accepted exactly when every field is within its rule, and
//! an accepted candidate turns into a record with the same field values.

use company_registry::domain::invariants::{MAX_DESCRIPTION_LENGTH, MAX_NAME_LENGTH};
use company_registry::{Company, CompanyCandidate, CompanyType, ValidationError};
use proptest::prelude::*;
use uuid::Uuid;

// ============================================================================
// Generators
// ============================================================================

fn legal_type() -> impl Strategy<Value = String> {
    prop::sample::select(CompanyType::ALL.to_vec()).prop_map(|t| t.as_str().to_string())
}

fn legal_name() -> impl Strategy<Value = String> {
    "[A-Za-z0-9 &.-]{1,15}"
}

fn legal_candidate() -> impl Strategy<Value = CompanyCandidate> {
    (
        legal_name(),
        prop::option::of("[a-z ]{0,200}"),
        0i64..1_000_000,
        any::<bool>(),
        legal_type(),
    )
        .prop_map(|(name, description, employees, registered, company_type)| {
            CompanyCandidate {
                name,
                description,
                employees,
                registered,
                company_type,
            }
        })
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    /// Property: every legal candidate is accepted unchanged
    #[test]
    fn prop_legal_candidates_accepted(candidate in legal_candidate()) {
        let id = Uuid::now_v7();
        let company = Company::from_candidate(id, candidate.clone()).unwrap();

        prop_assert_eq!(company.id, id);
        prop_assert_eq!(company.to_candidate(), candidate);
    }

    /// Property: any name longer than the limit is rejected with its length
    #[test]
    fn prop_long_names_rejected(name in "[a-z]{16,64}", candidate in legal_candidate()) {
        let length = name.len();
        let candidate = CompanyCandidate { name, ..candidate };

        prop_assert_eq!(
            candidate.validate(),
            Err(ValidationError::NameTooLong { length })
        );
        prop_assert!(length > MAX_NAME_LENGTH);
    }

    /// Property: descriptions are bounded, absence is always fine
    #[test]
    fn prop_description_bound(extra in 1usize..64, candidate in legal_candidate()) {
        let length = MAX_DESCRIPTION_LENGTH + extra;
        let too_long = CompanyCandidate {
            description: Some("x".repeat(length)),
            ..candidate.clone()
        };
        prop_assert_eq!(
            too_long.validate(),
            Err(ValidationError::DescriptionTooLong { length })
        );

        let absent = CompanyCandidate { description: None, ..candidate };
        prop_assert!(absent.validate().is_ok());
    }

    /// Property: any negative headcount is rejected
    #[test]
    fn prop_negative_employees_rejected(employees in i64::MIN..0, candidate in legal_candidate()) {
        let candidate = CompanyCandidate { employees, ..candidate };
        prop_assert_eq!(
            candidate.validate(),
            Err(ValidationError::NegativeEmployees(employees))
        );
    }

    /// Property: only the four exact legal forms pass
    #[test]
    fn prop_unknown_types_rejected(raw in "[A-Za-z ]{0,24}", candidate in legal_candidate()) {
        prop_assume!(raw.parse::<CompanyType>().is_err());
        let candidate = CompanyCandidate { company_type: raw.clone(), ..candidate };
        prop_assert_eq!(
            candidate.validate(),
            Err(ValidationError::InvalidCompanyType(raw))
        );
    }

    /// Property: validation is deterministic
    #[test]
    fn prop_validation_deterministic(
        name in ".{0,20}",
        employees in any::<i64>(),
        company_type in ".{0,20}",
    ) {
        let candidate = CompanyCandidate::new(name, employees, true, company_type);
        prop_assert_eq!(candidate.validate(), candidate.validate());
    }
}
