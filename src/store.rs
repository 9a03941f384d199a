use crate::model::employee::Employee;
use chrono::{Duration, Utc};
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::info;
use uuid::Uuid;

/// (first, last, salary, age, job title, hired N days ago)
const SEED_EMPLOYEES: [(&str, &str, i32, i32, &str, i64); 5] = [
    ("John", "Doe", 75_000, 30, "Software Engineer", 730),
    ("Jane", "Smith", 95_000, 35, "Senior Software Engineer", 1460),
    ("Michael", "Johnson", 120_000, 42, "Engineering Manager", 2190),
    ("Emily", "Williams", 68_000, 28, "Junior Developer", 365),
    ("David", "Brown", 85_000, 33, "DevOps Engineer", 1095),
];

/// In-memory employee table keyed by uuid. Safe to share between workers.
#[derive(Default)]
pub struct EmployeeStore {
    employees: RwLock<HashMap<Uuid, Employee>>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-filled with the sample employees. Uuids are fresh on every call.
    pub fn seeded() -> Self {
        let store = Self::new();
        let now = Utc::now();

        for (first, last, salary, age, title, days_ago) in SEED_EMPLOYEES {
            store.put(Employee {
                uuid: Uuid::new_v4(),
                first_name: first.to_string(),
                last_name: last.to_string(),
                full_name: format!("{first} {last}"),
                salary,
                age,
                job_title: Some(title.to_string()),
                email: format!("{first}.{last}@company.com").to_lowercase(),
                contract_hire_date: now - Duration::days(days_ago),
            });
        }

        info!(count = store.len(), "Employee store seeded");
        store
    }

    /// Snapshot of every stored employee, in no particular order.
    pub fn list(&self) -> Vec<Employee> {
        self.employees.read().values().cloned().collect()
    }

    pub fn get(&self, uuid: &Uuid) -> Option<Employee> {
        self.employees.read().get(uuid).cloned()
    }

    /// Inserts or overwrites by uuid.
    pub fn put(&self, employee: Employee) {
        self.employees.write().insert(employee.uuid, employee);
    }

    fn len(&self) -> usize {
        self.employees.read().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::thread;

    fn sample(first: &str) -> Employee {
        Employee {
            uuid: Uuid::new_v4(),
            first_name: first.to_string(),
            last_name: "Tester".to_string(),
            full_name: format!("{first} Tester"),
            salary: 1,
            age: 40,
            job_title: None,
            email: "t@example.com".to_string(),
            contract_hire_date: Utc::now(),
        }
    }

    #[test]
    fn seeded_store_has_five_distinct_employees() {
        let store = EmployeeStore::seeded();
        let all = store.list();
        assert_eq!(all.len(), 5);

        let uuids: HashSet<_> = all.iter().map(|e| e.uuid).collect();
        assert_eq!(uuids.len(), 5);

        let names: HashSet<_> = all.iter().map(|e| e.full_name.as_str()).collect();
        for name in [
            "John Doe",
            "Jane Smith",
            "Michael Johnson",
            "Emily Williams",
            "David Brown",
        ] {
            assert!(names.contains(name), "missing seed {name}");
        }
    }

    #[test]
    fn seed_fields_are_derived() {
        let store = EmployeeStore::seeded();
        let now = Utc::now();
        let john = store
            .list()
            .into_iter()
            .find(|e| e.first_name == "John")
            .unwrap();

        assert_eq!(john.email, "john.doe@company.com");
        assert_eq!(john.salary, 75_000);
        assert_eq!(john.age, 30);
        assert_eq!(john.job_title.as_deref(), Some("Software Engineer"));
        let days = (now - john.contract_hire_date).num_days();
        assert!((729..=730).contains(&days), "hired {days} days ago");
    }

    #[test]
    fn seeds_differ_between_constructions() {
        let a: HashSet<_> = EmployeeStore::seeded().list().iter().map(|e| e.uuid).collect();
        let b: HashSet<_> = EmployeeStore::seeded().list().iter().map(|e| e.uuid).collect();
        assert!(a.is_disjoint(&b));
    }

    #[test]
    fn put_then_get() {
        let store = EmployeeStore::new();
        let employee = sample("Ada");
        store.put(employee.clone());

        assert_eq!(store.get(&employee.uuid), Some(employee));
        assert_eq!(store.get(&Uuid::nil()), None);
    }

    #[test]
    fn put_overwrites_same_uuid() {
        let store = EmployeeStore::new();
        let first = sample("Ada");
        let replacement = Employee {
            first_name: "Grace".to_string(),
            ..first.clone()
        };

        store.put(first.clone());
        store.put(replacement.clone());

        assert_eq!(store.len(), 1);
        assert_eq!(store.get(&first.uuid), Some(replacement));
    }

    #[test]
    fn concurrent_writers_and_readers() {
        let store = EmployeeStore::new();

        thread::scope(|s| {
            for _ in 0..8 {
                s.spawn(|| {
                    for _ in 0..100 {
                        let employee = sample("Worker");
                        store.put(employee.clone());
                        assert_eq!(store.get(&employee.uuid), Some(employee));
                        let _ = store.list();
                    }
                });
            }
        });

        assert_eq!(store.len(), 800);
    }
}
