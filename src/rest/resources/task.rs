//! Tasks (`entity/task`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::resources::common::{
    Employee, HasMeta, Meta, MetaArray, MetaWrapper, Note, Timestamp,
};
use crate::rest::service::{impl_capabilities, impl_entity};

/// A to-do item assigned to an employee, optionally linked to a
/// counterparty and a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    // --- Read-only fields ---
    /// Object id.
    #[serde(skip_serializing)]
    pub id: Option<Uuid>,

    /// Account the object belongs to.
    #[serde(skip_serializing)]
    pub account_id: Option<Uuid>,

    // --- Writable fields ---
    /// Task text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Employee the task is assigned to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<Employee>,

    /// Counterparty or legal entity the task is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent: Option<MetaWrapper>,

    /// Document the task is about.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<MetaWrapper>,

    /// Due date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_to_date: Option<Timestamp>,

    /// Whether the task is done.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,

    /// Employee who created the task.
    #[serde(skip_serializing)]
    pub author: Option<Employee>,

    /// Application that made the change, if any.
    #[serde(skip_serializing)]
    pub author_application: Option<MetaWrapper>,

    /// Employee who closed the task.
    #[serde(skip_serializing)]
    pub implementer: Option<Employee>,

    /// When the task was closed.
    #[serde(skip_serializing)]
    pub completed: Option<Timestamp>,

    /// Task comments.
    #[serde(skip_serializing)]
    pub notes: Option<MetaArray<Note>>,

    /// When it was created.
    #[serde(skip_serializing)]
    pub created: Option<Timestamp>,

    /// When it was last changed.
    #[serde(skip_serializing)]
    pub updated: Option<Timestamp>,
}

impl_entity!(Task, "Task", "entity/task", Task);

impl_capabilities!(Task:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany, NamedFilters, Notes,
);

impl Task {
    /// Creates a task with a description.
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Default::default()
        }
    }

    pub fn set_assignee(&mut self, assignee: &Employee) -> &mut Self {
        self.assignee = Some(assignee.clean());
        self
    }

    pub fn set_agent(&mut self, agent: &impl HasMeta) -> &mut Self {
        self.agent = agent.meta().cloned().map(MetaWrapper::from);
        self
    }

    pub fn set_operation(&mut self, operation: &impl HasMeta) -> &mut Self {
        self.operation = operation.meta().cloned().map(MetaWrapper::from);
        self
    }

    pub fn set_due_to_date(&mut self, due: impl Into<Timestamp>) -> &mut Self {
        self.due_to_date = Some(due.into());
        self
    }

    pub fn set_done(&mut self, done: bool) -> &mut Self {
        self.done = Some(done);
        self
    }
}
