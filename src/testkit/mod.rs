//! Test support utilities shared by unit and integration tests.
//!
//! Enabled with the `testkit` feature (or under `cfg(test)`), never
//! compiled into release binaries.

use std::collections::VecDeque;

use crate::cli::menu::Action;
use crate::cli::prompt::{Answers, PromptSpec, Prompter};
use crate::error::{Error, Result};
use crate::store::{create_pool, run_migrations, DbPool};

/// In-memory database pool with migrations applied. Capped at a single
/// connection so the `:memory:` database is shared across every borrow.
pub fn memory_pool() -> DbPool {
    let pool = create_pool(":memory:", 1).expect("create in-memory pool");
    run_migrations(&pool).expect("run migrations");
    pool
}

/// A prompter that replays scripted action selections and answer sets.
///
/// An exhausted action script cancels the main menu; an exhausted answer
/// script leaves fields unanswered so validation paths can be exercised.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    actions: VecDeque<Action>,
    answers: VecDeque<Vec<(&'static str, String)>>,
}

impl ScriptedPrompter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_action(&mut self, action: Action) {
        self.actions.push_back(action);
    }

    pub fn push_answers(&mut self, answers: &[(&'static str, &str)]) {
        self.answers
            .push_back(answers.iter().map(|(f, v)| (*f, v.to_string())).collect());
    }
}

impl Prompter for ScriptedPrompter {
    fn select_action(&mut self, _message: &str, _actions: &[Action]) -> Result<Action> {
        self.actions.pop_front().ok_or(Error::Cancelled)
    }

    fn collect(&mut self, specs: &[PromptSpec]) -> Result<Answers> {
        let script = self.answers.pop_front().unwrap_or_default();
        let mut answers = Answers::default();
        for spec in specs {
            if let Some((field, value)) = script.iter().find(|(f, _)| *f == spec.field) {
                answers.insert(field, value.clone());
            }
        }
        Ok(answers)
    }
}
