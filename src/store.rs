//! The persistence-gateway contract for expense records.
//!
//! The engine never talks to storage directly; it consumes whatever record
//! set the caller fetched. This module defines the trait that fetch goes
//! through, plus an in-memory implementation used by the CLI and tests.
//! Implementations make no ordering guarantees.

use time::{OffsetDateTime, format_description::well_known::Rfc3339};

use crate::{
    Error,
    expense::{Expense, ExpenseDraft},
};

/// Handles the creation and retrieval of expense records.
pub trait ExpenseStore {
    /// Create a new expense from a draft, assigning it an ID and
    /// bookkeeping timestamps.
    fn create(&mut self, draft: ExpenseDraft) -> Result<Expense, Error>;

    /// Retrieve a single expense by its ID.
    ///
    /// # Errors
    /// Returns [Error::NotFound] if no expense has the given ID.
    fn get(&self, id: &str) -> Result<Expense, Error>;

    /// Retrieve every expense with the given category label.
    fn get_by_category(&self, category: &str) -> Result<Vec<Expense>, Error>;

    /// Retrieve every expense in the store, in no particular order.
    fn get_all(&self) -> Result<Vec<Expense>, Error>;
}

/// An [ExpenseStore] backed by a plain vector.
#[derive(Debug, Default)]
pub struct InMemoryExpenseStore {
    expenses: Vec<Expense>,
    next_id: u64,
}

impl InMemoryExpenseStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store seeded with existing records, e.g. from an import
    /// file.
    pub fn with_expenses(expenses: Vec<Expense>) -> Self {
        Self {
            next_id: expenses.len() as u64,
            expenses,
        }
    }
}

impl ExpenseStore for InMemoryExpenseStore {
    fn create(&mut self, draft: ExpenseDraft) -> Result<Expense, Error> {
        self.next_id += 1;
        let timestamp = OffsetDateTime::now_utc().format(&Rfc3339).ok();

        let expense = Expense {
            id: format!("exp-{}", self.next_id),
            title: draft.title,
            amount: draft.amount,
            category: draft.category,
            date: draft.date.to_string(),
            description: draft.description,
            created_at: timestamp.clone(),
            updated_at: timestamp,
        };

        self.expenses.push(expense.clone());
        Ok(expense)
    }

    fn get(&self, id: &str) -> Result<Expense, Error> {
        self.expenses
            .iter()
            .find(|expense| expense.id == id)
            .cloned()
            .ok_or(Error::NotFound)
    }

    fn get_by_category(&self, category: &str) -> Result<Vec<Expense>, Error> {
        Ok(self
            .expenses
            .iter()
            .filter(|expense| expense.category == category)
            .cloned()
            .collect())
    }

    fn get_all(&self) -> Result<Vec<Expense>, Error> {
        Ok(self.expenses.clone())
    }
}
