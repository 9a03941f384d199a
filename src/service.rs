use crate::{
    error::{AppError, AppResult},
    model::employee::{Employee, NewEmployee},
    store::EmployeeStore,
};
use chrono::{DateTime, Utc};
use std::ops::RangeInclusive;
use std::sync::Arc;
use tracing::{debug, info, warn};
use uuid::Uuid;

const VALID_AGE: RangeInclusive<i32> = 18..=120;

pub struct EmployeeService {
    store: Arc<EmployeeStore>,
}

impl EmployeeService {
    pub fn new(store: Arc<EmployeeStore>) -> Self {
        Self { store }
    }

    pub fn get_all_employees(&self) -> Vec<Employee> {
        self.store.list()
    }

    pub fn get_employee_by_uuid(&self, uuid: &Uuid) -> Option<Employee> {
        let employee = self.store.get(uuid);
        if employee.is_none() {
            debug!(%uuid, "Employee lookup missed");
        }
        employee
    }

    /// Validates the candidate, fills in uuid, hire date and full name where
    /// missing, and stores the result.
    pub fn create_employee(&self, candidate: NewEmployee) -> AppResult<Employee> {
        let employee = build_employee(candidate, Utc::now()).inspect_err(|e| {
            warn!(reason = %e, "Rejected employee");
        })?;

        self.store.put(employee.clone());
        info!(uuid = %employee.uuid, "Employee created");

        Ok(employee)
    }
}

/// Rules run in a fixed order and the first failure wins.
fn build_employee(candidate: NewEmployee, now: DateTime<Utc>) -> AppResult<Employee> {
    let first_name = required_text(candidate.first_name, "First name is required")?;
    let last_name = required_text(candidate.last_name, "Last name is required")?;
    let email = required_text(candidate.email, "Email is required")?;
    let salary = candidate
        .salary
        .filter(|salary| *salary >= 0)
        .ok_or_else(|| AppError::invalid_input("Valid salary is required"))?;
    let age = candidate
        .age
        .filter(|age| VALID_AGE.contains(age))
        .ok_or_else(|| AppError::invalid_input("Valid age is required (18-120)"))?;

    let full_name = candidate
        .full_name
        .unwrap_or_else(|| format!("{first_name} {last_name}"));

    Ok(Employee {
        uuid: candidate.uuid.unwrap_or_else(Uuid::new_v4),
        first_name,
        last_name,
        full_name,
        salary,
        age,
        job_title: candidate.job_title,
        email,
        contract_hire_date: candidate.contract_hire_date.unwrap_or(now),
    })
}

fn required_text(value: Option<String>, message: &str) -> AppResult<String> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::invalid_input(message))
}
