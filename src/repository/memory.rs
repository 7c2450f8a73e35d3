// Copyright (c) 2025 - Cowboy AI, Inc.
//! In-memory company repository
//!
//! Every write holds the map's write lock for the whole check-and-write, so
//! name exclusivity holds across concurrent callers the same way a unique
//! index would.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CompanyRepository, RepositoryError, RepositoryResult};
use crate::domain::Company;

/// Company repository backed by a `HashMap`
#[derive(Debug, Default)]
pub struct InMemoryCompanyRepository {
    companies: RwLock<HashMap<Uuid, Company>>,
}

impl InMemoryCompanyRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored records
    pub async fn len(&self) -> usize {
        self.companies.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.companies.read().await.is_empty()
    }
}

fn name_taken(companies: &HashMap<Uuid, Company>, name: &str, except: Option<Uuid>) -> bool {
    companies
        .values()
        .any(|existing| existing.name == name && Some(existing.id) != except)
}

#[async_trait]
impl CompanyRepository for InMemoryCompanyRepository {
    async fn create(&self, company: &Company) -> RepositoryResult<()> {
        let mut companies = self.companies.write().await;

        if name_taken(&companies, &company.name, None) {
            return Err(RepositoryError::DuplicateName(company.name.clone()));
        }
        if companies.contains_key(&company.id) {
            return Err(RepositoryError::Storage(format!(
                "company id already exists: {}",
                company.id
            )));
        }

        companies.insert(company.id, company.clone());
        Ok(())
    }

    async fn get_by_id(&self, id: Uuid) -> RepositoryResult<Company> {
        self.companies
            .read()
            .await
            .get(&id)
            .cloned()
            .ok_or(RepositoryError::NotFound(id))
    }

    async fn get_by_name(&self, name: &str) -> RepositoryResult<Option<Company>> {
        Ok(self
            .companies
            .read()
            .await
            .values()
            .find(|company| company.name == name)
            .cloned())
    }

    async fn update(&self, company: &Company) -> RepositoryResult<()> {
        let mut companies = self.companies.write().await;

        if !companies.contains_key(&company.id) {
            return Err(RepositoryError::NotFound(company.id));
        }
        if name_taken(&companies, &company.name, Some(company.id)) {
            return Err(RepositoryError::DuplicateName(company.name.clone()));
        }

        companies.insert(company.id, company.clone());
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> RepositoryResult<()> {
        self.companies
            .write()
            .await
            .remove(&id)
            .map(|_| ())
            .ok_or(RepositoryError::NotFound(id))
    }
}
