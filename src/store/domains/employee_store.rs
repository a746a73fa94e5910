use crate::models::employee::{Employee, EmployeeRequest, EmployeeUpdate};
use std::sync::RwLock;

struct EmployeeState {
    employees: Vec<Employee>,
    next_id: u32,
}

/// In-memory employee collection. One lock guards the sequence and the id
/// counter so allocation and insertion happen under the same critical section.
pub struct EmployeeStore {
    state: RwLock<EmployeeState>,
}

impl EmployeeStore {
    pub fn new() -> Self {
        Self {
            state: RwLock::new(EmployeeState {
                employees: vec![],
                next_id: 1,
            }),
        }
    }

    pub fn with_employees(employees: Vec<Employee>) -> Self {
        let next_id = employees.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self {
            state: RwLock::new(EmployeeState { employees, next_id }),
        }
    }

    pub fn get_employees(&self) -> Vec<Employee> {
        let state = self.state.read().unwrap();
        state.employees.clone()
    }

    pub fn get_employee(&self, id: u32) -> Option<Employee> {
        let state = self.state.read().unwrap();
        state.employees.iter().find(|e| e.id == id).cloned()
    }

    pub fn create_employee(&self, request: EmployeeRequest) -> Employee {
        let mut state = self.state.write().unwrap();
        let employee = Employee {
            id: state.next_id,
            name: request.name,
            role: request.role,
            department: request.department,
        };
        state.next_id += 1;
        state.employees.push(employee.clone());
        employee
    }

    /// Merges the supplied fields over the stored employee. The id always stays
    /// the path-supplied one.
    pub fn update_employee(&self, id: u32, update: EmployeeUpdate) -> Option<Employee> {
        let mut state = self.state.write().unwrap();
        let employee = state.employees.iter_mut().find(|e| e.id == id)?;
        if let Some(name) = update.name {
            employee.name = name;
        }
        if let Some(role) = update.role {
            employee.role = role;
        }
        if let Some(department) = update.department {
            employee.department = department;
        }
        Some(employee.clone())
    }

    /// Unconditional success; removing an absent id is a no-op. Does not touch
    /// assets or repairs that still reference the employee.
    pub fn delete_employee(&self, id: u32) {
        let mut state = self.state.write().unwrap();
        state.employees.retain(|e| e.id != id);
    }
}

impl Default for EmployeeStore {
    fn default() -> Self {
        Self::new()
    }
}
