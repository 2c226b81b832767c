//! Webhook subscriptions (`entity/webhook`).

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::rest::resources::common::{Meta, MetaType, MetaWrapper};
use crate::rest::service::{impl_capabilities, impl_entity};

/// Entity event a webhook fires on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookAction {
    Create,
    Update,
    Delete,
    /// Only valid for asynchronous jobs.
    Processed,
    #[serde(other)]
    Unknown,
}

/// How an `UPDATE` notification describes the change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookDiff {
    #[default]
    None,
    /// The payload lists the changed fields.
    Fields,
    #[serde(other)]
    Unknown,
}

/// HTTP method of the callback. MoySklad only supports POST.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum WebhookMethod {
    #[default]
    Post,
    #[serde(other)]
    Unknown,
}

/// A subscription that POSTs to `url` when an entity event happens.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Webhook {
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
    /// Event that fires the webhook.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<WebhookAction>,

    /// How update events describe changes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub diff_type: Option<WebhookDiff>,

    /// Whether the webhook is active.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,

    /// Entity type it applies to.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<MetaType>,

    /// HTTP method of the callback.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<WebhookMethod>,

    /// Callback URL, up to 255 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Fields changed by the update.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub updated_fields: Vec<String>,

    /// Application that made the change, if any.
    #[serde(skip_serializing)]
    pub author_application: Option<MetaWrapper>,
}

impl_entity!(Webhook, "Webhook", "entity/webhook", Webhook);

impl_capabilities!(Webhook:
    GetList, GetById, Create, CreateUpdateMany, Update, Delete, DeleteMany,
);

impl Webhook {
    /// Creates an enabled subscription.
    #[must_use]
    pub fn new(entity_type: MetaType, action: WebhookAction, url: impl Into<String>) -> Self {
        Self {
            entity_type: Some(entity_type),
            action: Some(action),
            url: Some(url.into()),
            method: Some(WebhookMethod::Post),
            enabled: Some(true),
            ..Default::default()
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) -> &mut Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn set_diff_type(&mut self, diff_type: WebhookDiff) -> &mut Self {
        self.diff_type = Some(diff_type);
        self
    }

    pub fn set_url(&mut self, url: impl Into<String>) -> &mut Self {
        self.url = Some(url.into());
        self
    }
}
