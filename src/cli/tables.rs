//! Tabular rendering of listing results.

use tabled::{Table, Tabled};

use crate::domain::{BudgetLine, Department, EmployeeOverview, RoleOverview, EMPTY_FIELD};

#[derive(Tabled)]
struct DepartmentRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Department")]
    name: String,
}

#[derive(Tabled)]
struct RoleRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Salary")]
    salary: String,
}

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: i32,
    #[tabled(rename = "First Name")]
    first_name: String,
    #[tabled(rename = "Last Name")]
    last_name: String,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Salary")]
    salary: String,
    #[tabled(rename = "Manager")]
    manager: String,
}

#[derive(Tabled)]
struct BudgetRow {
    #[tabled(rename = "Department")]
    department: String,
    #[tabled(rename = "Utilized Budget")]
    utilized_budget: String,
}

fn placeholder(value: Option<String>) -> String {
    value.unwrap_or_else(|| EMPTY_FIELD.to_string())
}

fn print_table<T: Tabled>(rows: Vec<T>) {
    if rows.is_empty() {
        println!();
        println!("  (no rows)");
        println!();
        return;
    }
    let table = Table::new(rows).to_string();
    println!();
    for line in table.lines() {
        println!("  {line}");
    }
    println!();
}

pub fn render_departments(departments: &[Department]) {
    print_table(
        departments
            .iter()
            .map(|d| DepartmentRow {
                id: d.id,
                name: d.name.clone(),
            })
            .collect(),
    );
}

pub fn render_roles(roles: &[RoleOverview]) {
    print_table(
        roles
            .iter()
            .map(|r| RoleRow {
                id: r.id,
                title: r.title.clone(),
                department: r.department.clone(),
                salary: r.salary.to_string(),
            })
            .collect(),
    );
}

pub fn render_employees(employees: &[EmployeeOverview]) {
    print_table(
        employees
            .iter()
            .map(|e| EmployeeRow {
                id: e.id,
                first_name: e.first_name.clone(),
                last_name: e.last_name.clone(),
                title: placeholder(e.title.clone()),
                department: placeholder(e.department.clone()),
                salary: placeholder(e.salary.map(|s| s.to_string())),
                manager: placeholder(e.manager.clone()),
            })
            .collect(),
    );
}

pub fn render_budgets(budgets: &[BudgetLine]) {
    print_table(
        budgets
            .iter()
            .map(|b| BudgetRow {
                department: b.department.clone(),
                utilized_budget: b.utilized_budget.to_string(),
            })
            .collect(),
    );
}
