//! Main menu state machine.
//!
//! The dispatcher maps a selected action to its prompt flow and the
//! matching gateway call, looping until Quit. An explicit iterative loop
//! keeps long sessions off the call stack, and every action fully
//! completes (including its store round trip) before the next prompt.

use tracing::warn;

use crate::cli::output;
use crate::cli::prompt::{self, PromptKind, PromptSpec, Prompter};
use crate::cli::tables;
use crate::domain;
use crate::error::{Error, Result};
use crate::store::Gateway;

/// Everything the main menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    ViewEmployeesByManager,
    ViewEmployeesByDepartment,
    ViewUtilizedBudget,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    UpdateEmployeeManager,
    DeleteDepartment,
    DeleteRole,
    DeleteEmployee,
    Quit,
}

impl Action {
    pub const ALL: [Action; 15] = [
        Action::ViewDepartments,
        Action::ViewRoles,
        Action::ViewEmployees,
        Action::ViewEmployeesByManager,
        Action::ViewEmployeesByDepartment,
        Action::ViewUtilizedBudget,
        Action::AddDepartment,
        Action::AddRole,
        Action::AddEmployee,
        Action::UpdateEmployeeRole,
        Action::UpdateEmployeeManager,
        Action::DeleteDepartment,
        Action::DeleteRole,
        Action::DeleteEmployee,
        Action::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Action::ViewDepartments => "View All Departments",
            Action::ViewRoles => "View All Roles",
            Action::ViewEmployees => "View All Employees",
            Action::ViewEmployeesByManager => "View All Employees By Manager",
            Action::ViewEmployeesByDepartment => "View All Employees By Department",
            Action::ViewUtilizedBudget => "View Utilized Budget Summary",
            Action::AddDepartment => "Add Department",
            Action::AddRole => "Add Role",
            Action::AddEmployee => "Add Employee",
            Action::UpdateEmployeeRole => "Update Employee Role",
            Action::UpdateEmployeeManager => "Update Employee Manager",
            Action::DeleteDepartment => "Delete Department",
            Action::DeleteRole => "Delete Role",
            Action::DeleteEmployee => "Delete Employee",
            Action::Quit => "Quit",
        }
    }
}

/// A choice prompt with nothing to offer is unusable; abort the action
/// with a diagnostic instead of showing it.
fn ensure_selectable(specs: &[PromptSpec]) -> Result<()> {
    for spec in specs {
        if let PromptKind::SingleChoice { choices } = &spec.kind {
            if choices.is_empty() {
                return Err(Error::NoChoices { field: spec.field });
            }
        }
    }
    Ok(())
}

/// The menu loop. One action is in flight at a time; errors inside an
/// action are reported and the loop continues.
pub struct Dispatcher<P> {
    gateway: Gateway,
    prompter: P,
}

impl<P: Prompter> Dispatcher<P> {
    pub fn new(gateway: Gateway, prompter: P) -> Self {
        Self { gateway, prompter }
    }

    pub fn run(&mut self) -> Result<()> {
        loop {
            let action = match self
                .prompter
                .select_action("What would you like to do?", &Action::ALL)
            {
                Ok(action) => action,
                // Backing out of the main menu itself means quit.
                Err(Error::Cancelled) => break,
                Err(err) => return Err(err),
            };
            if action == Action::Quit {
                break;
            }
            if let Err(err) = self.dispatch(action) {
                warn!(action = action.label(), error = %err, "action failed");
                output::error(&err.to_string());
            }
        }
        Ok(())
    }

    /// Run a single action end to end: build prompts, collect answers,
    /// invoke the one matching gateway operation, render the result.
    pub fn dispatch(&mut self, action: Action) -> Result<()> {
        let specs = prompt::build_prompts(action, &self.gateway)?;
        ensure_selectable(&specs)?;
        let answers = self.prompter.collect(&specs)?;

        match action {
            Action::ViewDepartments => {
                tables::render_departments(&self.gateway.list_departments()?);
            }
            Action::ViewRoles => {
                tables::render_roles(&self.gateway.list_roles()?);
            }
            Action::ViewEmployees => {
                tables::render_employees(&self.gateway.list_employees()?);
            }
            Action::ViewEmployeesByManager => {
                let manager = answers.get("manager")?;
                tables::render_employees(&self.gateway.list_employees_by_manager(manager)?);
            }
            Action::ViewEmployeesByDepartment => {
                let department = answers.get("department")?;
                tables::render_employees(&self.gateway.list_employees_by_department(department)?);
            }
            Action::ViewUtilizedBudget => {
                tables::render_budgets(&self.gateway.utilized_budget_by_department()?);
            }
            Action::AddDepartment => {
                let name = answers.get("name")?;
                self.gateway.add_department(name)?;
                output::success(&format!("Added {name} department to the database"));
            }
            Action::AddRole => {
                let title = answers.get("title")?;
                let salary = domain::parse_salary(answers.get("salary")?)?;
                let department = answers.get("department")?;
                self.gateway.add_role(title, salary, department)?;
                output::success(&format!("Added {title} role to the database"));
            }
            Action::AddEmployee => {
                let first = answers.get("first")?;
                let last = answers.get("last")?;
                let role = answers.get("role")?;
                let manager = answers.get("manager")?;
                self.gateway.add_employee(first, last, role, manager)?;
                output::success(&format!("Added {first} {last} to the database"));
            }
            Action::UpdateEmployeeRole => {
                let employee = answers.get("employee")?;
                let role = answers.get("role")?;
                self.gateway.update_employee_role(employee, role)?;
                output::success(&format!("Updated {employee}'s role in the database"));
            }
            Action::UpdateEmployeeManager => {
                let employee = answers.get("employee")?;
                let manager = answers.get("manager")?;
                self.gateway.update_employee_manager(employee, manager)?;
                output::success(&format!("Updated {employee}'s manager in the database"));
            }
            Action::DeleteDepartment => {
                let department = answers.get("department")?;
                self.gateway.delete_department(department)?;
                output::success(&format!("Deleted {department} from the database"));
            }
            Action::DeleteRole => {
                let role = answers.get("role")?;
                self.gateway.delete_role(role)?;
                output::success(&format!("Deleted {role} from the database"));
            }
            Action::DeleteEmployee => {
                let employee = answers.get("employee")?;
                self.gateway.delete_employee(employee)?;
                output::success(&format!("Deleted {employee} from the database"));
            }
            Action::Quit => {}
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NO_MANAGER;
    use crate::store::{create_pool, run_migrations};
    use crate::testkit::ScriptedPrompter;
    use rust_decimal_macros::dec;

    fn setup_gateway() -> Gateway {
        let pool = create_pool(":memory:", 1).expect("create pool");
        run_migrations(&pool).expect("run migrations");
        Gateway::new(pool)
    }

    #[test]
    fn every_action_has_a_distinct_label() {
        let mut labels: Vec<&str> = Action::ALL.iter().map(|a| a.label()).collect();
        labels.sort_unstable();
        labels.dedup();
        assert_eq!(labels.len(), Action::ALL.len());
    }

    #[test]
    fn add_role_on_empty_database_aborts_before_the_gateway() {
        let gateway = setup_gateway();
        let prompter = ScriptedPrompter::new();
        let mut dispatcher = Dispatcher::new(gateway, prompter);

        let result = dispatcher.dispatch(Action::AddRole);
        assert!(matches!(
            result,
            Err(Error::NoChoices {
                field: "department"
            })
        ));
    }

    #[test]
    fn add_department_flow_writes_through_the_gateway() {
        let gateway = setup_gateway();
        let mut prompter = ScriptedPrompter::new();
        prompter.push_answers(&[("name", "Engineering")]);
        let mut dispatcher = Dispatcher::new(gateway, prompter);

        dispatcher.dispatch(Action::AddDepartment).unwrap();

        let names: Vec<String> = dispatcher
            .gateway
            .list_departments()
            .unwrap()
            .into_iter()
            .map(|d| d.name)
            .collect();
        assert_eq!(names, vec!["Engineering"]);
    }

    #[test]
    fn add_role_rejects_unparseable_salary_before_writing() {
        let gateway = setup_gateway();
        gateway.add_department("Engineering").unwrap();
        let mut prompter = ScriptedPrompter::new();
        prompter.push_answers(&[
            ("title", "Engineer"),
            ("salary", "lots"),
            ("department", "Engineering"),
        ]);
        let mut dispatcher = Dispatcher::new(gateway, prompter);

        let result = dispatcher.dispatch(Action::AddRole);
        assert!(matches!(result, Err(Error::InvalidSalary(_))));
        assert!(dispatcher.gateway.list_roles().unwrap().is_empty());
    }

    #[test]
    fn missing_answer_aborts_without_a_store_call() {
        let gateway = setup_gateway();
        // Script provides no answers at all.
        let prompter = ScriptedPrompter::new();
        let mut dispatcher = Dispatcher::new(gateway, prompter);

        let result = dispatcher.dispatch(Action::AddDepartment);
        assert!(matches!(
            result,
            Err(Error::MissingAnswer { field: "name" })
        ));
        assert!(dispatcher.gateway.list_departments().unwrap().is_empty());
    }

    #[test]
    fn run_loop_survives_failed_actions_and_stops_on_quit() {
        let gateway = setup_gateway();
        let mut prompter = ScriptedPrompter::new();
        // AddRole fails (no departments), then AddDepartment succeeds,
        // then Quit ends the loop.
        prompter.push_action(Action::AddRole);
        prompter.push_action(Action::AddDepartment);
        prompter.push_answers(&[("name", "Engineering")]);
        prompter.push_action(Action::Quit);
        let mut dispatcher = Dispatcher::new(gateway, prompter);

        dispatcher.run().unwrap();

        assert_eq!(dispatcher.gateway.list_departments().unwrap().len(), 1);
    }

    #[test]
    fn cancelling_the_main_menu_quits_cleanly() {
        let gateway = setup_gateway();
        // An empty script cancels the action selection.
        let prompter = ScriptedPrompter::new();
        let mut dispatcher = Dispatcher::new(gateway, prompter);
        assert!(dispatcher.run().is_ok());
    }

    #[test]
    fn full_company_flow_through_the_dispatcher() {
        let gateway = setup_gateway();
        gateway.add_department("Engineering").unwrap();
        gateway
            .add_role("Engineer", dec!(90000), "Engineering")
            .unwrap();

        let mut prompter = ScriptedPrompter::new();
        prompter.push_answers(&[
            ("first", "Ada"),
            ("last", "Lovelace"),
            ("role", "Engineer"),
            ("manager", NO_MANAGER),
        ]);
        let mut dispatcher = Dispatcher::new(gateway, prompter);

        dispatcher.dispatch(Action::AddEmployee).unwrap();

        let employees = dispatcher.gateway.list_employees().unwrap();
        assert_eq!(employees.len(), 1);
        assert_eq!(employees[0].full_name(), "Ada Lovelace");
        assert_eq!(employees[0].manager, None);
    }
}
