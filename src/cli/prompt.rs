//! Declarative prompt specifications and the terminal prompter.
//!
//! `build_prompts` assembles the ordered prompt sequence for an action,
//! fetching choice sets fresh from the gateway at build time so the menu
//! always reflects current data.

use std::collections::BTreeMap;

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};

use crate::cli::menu::Action;
use crate::domain::NO_MANAGER;
use crate::error::{Error, Result};
use crate::store::Gateway;

/// One interactive question: free text, or a single choice from a list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PromptKind {
    FreeText,
    SingleChoice { choices: Vec<String> },
}

/// A declarative description of one interactive question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptSpec {
    pub field: &'static str,
    pub message: &'static str,
    pub kind: PromptKind,
}

impl PromptSpec {
    fn free_text(field: &'static str, message: &'static str) -> Self {
        Self {
            field,
            message,
            kind: PromptKind::FreeText,
        }
    }

    fn single_choice(field: &'static str, message: &'static str, choices: Vec<String>) -> Self {
        Self {
            field,
            message,
            kind: PromptKind::SingleChoice { choices },
        }
    }
}

/// Collected prompt answers keyed by field name.
#[derive(Debug, Default, Clone)]
pub struct Answers(BTreeMap<&'static str, String>);

impl Answers {
    pub fn insert(&mut self, field: &'static str, value: String) {
        self.0.insert(field, value);
    }

    /// Fetch a required answer; absence is a validation error.
    pub fn get(&self, field: &'static str) -> Result<&str> {
        self.0
            .get(field)
            .map(String::as_str)
            .ok_or(Error::MissingAnswer { field })
    }
}

/// Build the ordered prompt sequence for an action. View-all actions and
/// Quit take no input and produce an empty sequence.
pub fn build_prompts(action: Action, gateway: &Gateway) -> Result<Vec<PromptSpec>> {
    match action {
        Action::AddDepartment => Ok(vec![PromptSpec::free_text(
            "name",
            "What is the name of the department?",
        )]),
        Action::AddRole => Ok(vec![
            PromptSpec::free_text("title", "What is the name of the role?"),
            PromptSpec::free_text("salary", "What is the salary of the role?"),
            PromptSpec::single_choice(
                "department",
                "Which department does the role belong to?",
                department_names(gateway)?,
            ),
        ]),
        Action::AddEmployee => Ok(vec![
            PromptSpec::free_text("first", "What is the employee's first name?"),
            PromptSpec::free_text("last", "What is the employee's last name?"),
            PromptSpec::single_choice(
                "role",
                "What is the employee's role?",
                role_titles(gateway)?,
            ),
            PromptSpec::single_choice(
                "manager",
                "Who is the employee's manager?",
                with_none_sentinel(employee_names(gateway)?),
            ),
        ]),
        Action::UpdateEmployeeRole => Ok(vec![
            PromptSpec::single_choice(
                "employee",
                "Which employee's role do you want to update?",
                employee_names(gateway)?,
            ),
            PromptSpec::single_choice(
                "role",
                "Which role do you want to assign the selected employee?",
                role_titles(gateway)?,
            ),
        ]),
        Action::UpdateEmployeeManager => Ok(vec![
            PromptSpec::single_choice(
                "employee",
                "Which employee's manager do you want to update?",
                employee_names(gateway)?,
            ),
            PromptSpec::single_choice(
                "manager",
                "Who is the employee's new manager?",
                with_none_sentinel(employee_names(gateway)?),
            ),
        ]),
        Action::ViewEmployeesByManager => Ok(vec![PromptSpec::single_choice(
            "manager",
            "Which manager's employees would you like to see?",
            gateway.list_managers()?,
        )]),
        Action::ViewEmployeesByDepartment => Ok(vec![PromptSpec::single_choice(
            "department",
            "Which department's employees would you like to see?",
            department_names(gateway)?,
        )]),
        Action::DeleteDepartment => Ok(vec![PromptSpec::single_choice(
            "department",
            "Which department would you like to delete?",
            department_names(gateway)?,
        )]),
        Action::DeleteRole => Ok(vec![PromptSpec::single_choice(
            "role",
            "Which role would you like to delete?",
            role_titles(gateway)?,
        )]),
        Action::DeleteEmployee => Ok(vec![PromptSpec::single_choice(
            "employee",
            "Which employee would you like to delete?",
            employee_names(gateway)?,
        )]),
        Action::ViewDepartments
        | Action::ViewRoles
        | Action::ViewEmployees
        | Action::ViewUtilizedBudget
        | Action::Quit => Ok(vec![]),
    }
}

fn department_names(gateway: &Gateway) -> Result<Vec<String>> {
    Ok(gateway
        .list_departments()?
        .into_iter()
        .map(|d| d.name)
        .collect())
}

fn role_titles(gateway: &Gateway) -> Result<Vec<String>> {
    Ok(gateway.list_roles()?.into_iter().map(|r| r.title).collect())
}

fn employee_names(gateway: &Gateway) -> Result<Vec<String>> {
    Ok(gateway
        .list_employees()?
        .iter()
        .map(|e| e.full_name())
        .collect())
}

fn with_none_sentinel(names: Vec<String>) -> Vec<String> {
    let mut choices = Vec::with_capacity(names.len() + 1);
    choices.push(NO_MANAGER.to_string());
    choices.extend(names);
    choices
}

/// Terminal interaction boundary: select an action, then collect answers
/// for a prompt sequence.
pub trait Prompter {
    fn select_action(&mut self, message: &str, actions: &[Action]) -> Result<Action>;
    fn collect(&mut self, specs: &[PromptSpec]) -> Result<Answers>;
}

/// Interactive prompter backed by dialoguer.
pub struct TerminalPrompter {
    theme: ColorfulTheme,
}

impl TerminalPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalPrompter {
    fn default() -> Self {
        Self::new()
    }
}

impl Prompter for TerminalPrompter {
    fn select_action(&mut self, message: &str, actions: &[Action]) -> Result<Action> {
        let labels: Vec<&str> = actions.iter().map(|a| a.label()).collect();
        let index = Select::with_theme(&self.theme)
            .with_prompt(message)
            .items(&labels)
            .default(0)
            .interact_opt()?;
        match index {
            Some(i) => Ok(actions[i]),
            None => Err(Error::Cancelled),
        }
    }

    fn collect(&mut self, specs: &[PromptSpec]) -> Result<Answers> {
        let mut answers = Answers::default();
        for spec in specs {
            let value = match &spec.kind {
                PromptKind::FreeText => Input::<String>::with_theme(&self.theme)
                    .with_prompt(spec.message)
                    .interact_text()?,
                PromptKind::SingleChoice { choices } => {
                    let index = Select::with_theme(&self.theme)
                        .with_prompt(spec.message)
                        .items(choices)
                        .default(0)
                        .interact_opt()?;
                    match index {
                        Some(i) => choices[i].clone(),
                        None => return Err(Error::Cancelled),
                    }
                }
            };
            answers.insert(spec.field, value);
        }
        Ok(answers)
    }
}
