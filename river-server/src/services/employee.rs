//! Employee service

use crate::store::RecordStore;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{Employee, EmployeeCreate, EmployeeUpdate, RecordId, RosterEntry};
use std::sync::Arc;

/// Business operations over the employee collection
#[derive(Clone)]
pub struct EmployeeService {
    store: Arc<dyn RecordStore<Employee>>,
}

impl EmployeeService {
    pub fn new(store: Arc<dyn RecordStore<Employee>>) -> Self {
        Self { store }
    }

    /// All employees
    pub async fn list(&self) -> AppResult<Vec<Employee>> {
        Ok(self.store.list().await?)
    }

    /// Create an employee; the store assigns the id.
    ///
    /// `branch_id` is taken as given — no check against existing
    /// branches, matching the documented contract gap.
    pub async fn create(&self, data: EmployeeCreate) -> AppResult<Employee> {
        Ok(self.store.insert(data).await?)
    }

    /// Get an employee by id
    pub async fn get(&self, id: &RecordId) -> AppResult<Employee> {
        self.store
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Employee with id {id}")))
    }

    /// Partial update: only fields present in `data` change; absent
    /// fields keep their stored values.
    pub async fn update(&self, id: &RecordId, data: EmployeeUpdate) -> AppResult<Employee> {
        let mut employee = self.get(id).await?;

        if let Some(position) = data.position {
            employee.position = position;
        }
        if let Some(department) = data.department {
            employee.department = department;
        }
        if let Some(email) = data.email {
            employee.email = email;
        }
        if let Some(phone_number) = data.phone_number {
            employee.phone_number = phone_number;
        }
        if let Some(branch_id) = data.branch_id {
            employee.branch_id = branch_id;
        }

        self.store.replace(id, employee.clone()).await?;
        Ok(employee)
    }

    /// Delete an employee permanently, returning the pre-removal snapshot
    pub async fn delete(&self, id: &RecordId) -> AppResult<Employee> {
        Ok(self.store.remove(id).await?)
    }

    /// Roster of the employees working at `branch_id`, in store order.
    ///
    /// An empty roster is an error: a valid branch with zero employees is
    /// indistinguishable from an unknown branch id, and both answer 404.
    pub async fn by_branch(&self, branch_id: &RecordId) -> AppResult<Vec<RosterEntry>> {
        let roster: Vec<RosterEntry> = self
            .store
            .list()
            .await?
            .iter()
            .filter(|e| &e.branch_id == branch_id)
            .map(RosterEntry::from)
            .collect();

        if roster.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::NotFound,
                "This branch has no employees",
            ));
        }
        Ok(roster)
    }

    /// Roster of the employees in `department`, in store order.
    ///
    /// Department matching is exact and case-sensitive; no trimming or
    /// normalization. Empty rosters answer 404, as with [`Self::by_branch`].
    pub async fn by_department(&self, department: &str) -> AppResult<Vec<RosterEntry>> {
        let roster: Vec<RosterEntry> = self
            .store
            .list()
            .await?
            .iter()
            .filter(|e| e.department == department)
            .map(RosterEntry::from)
            .collect();

        if roster.is_empty() {
            return Err(AppError::with_message(
                ErrorCode::NotFound,
                "This department has no employees",
            ));
        }
        Ok(roster)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MemoryStore, seed};
    use shared::error::ErrorCode;

    fn seeded_service() -> EmployeeService {
        EmployeeService::new(Arc::new(MemoryStore::with_records(seed::employees())))
    }

    fn draft(name: &str, department: &str, branch_id: u64) -> EmployeeCreate {
        EmployeeCreate {
            name: name.to_string(),
            position: "Teller".to_string(),
            department: department.to_string(),
            email: "new.hire@pixell-river.com".to_string(),
            phone_number: 2045550000,
            branch_id: RecordId::Seq(branch_id),
        }
    }

    #[tokio::test]
    async fn test_update_merges_allow_listed_fields() {
        let svc = seeded_service();
        let id = RecordId::Seq(1);
        let before = svc.get(&id).await.unwrap();

        let updated = svc
            .update(
                &id,
                EmployeeUpdate {
                    position: Some("Regional Manager".to_string()),
                    branch_id: Some(RecordId::Seq(5)),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.position, "Regional Manager");
        assert_eq!(updated.branch_id, RecordId::Seq(5));
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.email, before.email);
        assert_eq!(updated.department, before.department);
    }

    #[tokio::test]
    async fn test_by_branch_projects_in_source_order() {
        let svc = seeded_service();
        let roster = svc.by_branch(&RecordId::Seq(3)).await.unwrap();

        let names: Vec<&str> = roster.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["Maria Garcia", "Michael Brown", "Patricia Taylor"]);
        for entry in &roster {
            assert_eq!(entry.branch_id, RecordId::Seq(3));
        }
    }

    #[tokio::test]
    async fn test_by_branch_empty_is_not_found() {
        let svc = seeded_service();
        // Branch 10 exists in the seed data but has no employees; an
        // unknown branch id behaves identically.
        let err = svc.by_branch(&RecordId::Seq(10)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = svc.by_branch(&RecordId::Seq(999)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[tokio::test]
    async fn test_by_department_matches_exact_string() {
        let svc = seeded_service();
        let roster = svc.by_department("Customer Service").await.unwrap();

        assert_eq!(roster.len(), 3);
        for entry in &roster {
            assert_eq!(entry.department, "Customer Service");
        }

        // Case-sensitive, no trimming
        assert!(svc.by_department("customer service").await.is_err());
        assert!(svc.by_department("Customer Service ").await.is_err());
    }

    #[tokio::test]
    async fn test_create_then_group_lookup_sees_new_employee() {
        let svc = seeded_service();
        let created = svc.create(draft("Lila Spence", "Loans", 4)).await.unwrap();

        let roster = svc.by_branch(&RecordId::Seq(4)).await.unwrap();
        assert_eq!(roster.last().unwrap().name, "Lila Spence");

        svc.delete(&created.id).await.unwrap();
        assert!(svc.by_branch(&RecordId::Seq(4)).await.is_err());
    }
}
