//! Document publications and print templates.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::meta::{impl_has_meta, HasMeta, Meta, MetaWrapper};

/// A print template shipped with MoySklad (`metadata/embeddedtemplate`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddedTemplate {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Template kind: `entity`, `mxtemplate` or `pricetype`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,
    /// Link to download the template file.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A print template uploaded by the account (`metadata/customtemplate`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTemplate {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,
    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,
    /// Name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Template kind.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub template_type: Option<String>,
    /// Template file URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

/// A published copy of a document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publication {
    /// Object meta.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Meta>,

    /// Object id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Uuid>,

    /// Public URL of the publication.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,

    /// Template the publication was rendered with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<MetaWrapper>,
}

impl_has_meta!(EmbeddedTemplate, CustomTemplate, Publication);

impl Publication {
    /// Creates a publication request for a template.
    ///
    /// # Example
    ///
    /// ```rust
    /// use moysklad::rest::resources::common::{EmbeddedTemplate, Meta, MetaType, Publication};
    ///
    /// let template = EmbeddedTemplate {
    ///     meta: Some(Meta::new("https://example/entity/customerorder/metadata/embeddedtemplate/1", MetaType::EmbeddedTemplate)),
    ///     name: Some("Order".to_string()),
    ///     ..Default::default()
    /// };
    ///
    /// let publication = Publication::with_template(&template);
    /// let json = serde_json::to_value(&publication).unwrap();
    /// assert_eq!(json["template"]["meta"]["type"], "embeddedtemplate");
    /// ```
    #[must_use]
    pub fn with_template(template: &impl HasMeta) -> Self {
        Self {
            template: template.meta().cloned().map(Meta::wrap),
            ..Default::default()
        }
    }
}

/// Arguments of a print (`export`) request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportRequest {
    /// Template to render.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<MetaWrapper>,

    /// Output format such as `pdf`, `xls` or `odt`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,

    /// Several templates rendered into one package.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub templates: Option<Vec<ExportTemplate>>,
}

/// One template in a multi-template print request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExportTemplate {
    /// Print template.
    pub template: MetaWrapper,
    /// Number of copies.
    pub count: u32,
}

impl ExportRequest {
    /// Creates a request rendering one template in the given format.
    #[must_use]
    pub fn new(template: &impl HasMeta, extension: impl Into<String>) -> Self {
        Self {
            template: template.meta().cloned().map(Meta::wrap),
            extension: Some(extension.into()),
            templates: None,
        }
    }

    /// Adds a template to a multi-template request.
    pub fn add_template(&mut self, template: &impl HasMeta, count: u32) -> &mut Self {
        if let Some(meta) = template.meta() {
            self.templates
                .get_or_insert_with(Vec::new)
                .push(ExportTemplate {
                    template: meta.clone().wrap(),
                    count,
                });
        }
        self
    }
}

/// A rendered document downloaded in content mode.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrintFile {
    /// File name from `Content-Disposition`, if the server sent one.
    pub file_name: Option<String>,
    /// Media type from `Content-Type`.
    pub content_type: Option<String>,
    /// Raw bytes.
    pub content: Vec<u8>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rest::resources::common::MetaType;

    fn template() -> CustomTemplate {
        CustomTemplate {
            meta: Some(Meta::new(
                "https://example/entity/invoiceout/metadata/customtemplate/5",
                MetaType::CustomTemplate,
            )),
            name: Some("Invoice".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_export_request_shape() {
        let request = ExportRequest::new(&template(), "pdf");
        let value = serde_json::to_value(&request).unwrap();

        assert_eq!(value["extension"], "pdf");
        assert_eq!(value["template"]["meta"]["type"], "customtemplate");
        assert!(value.get("templates").is_none());
    }

    #[test]
    fn test_multi_template_export() {
        let mut request = ExportRequest {
            extension: Some("pdf".to_string()),
            ..Default::default()
        };
        request.add_template(&template(), 2).add_template(&template(), 1);

        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["templates"][0]["count"], 2);
        assert_eq!(value["templates"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_publication_without_template_meta() {
        let publication = Publication::with_template(&CustomTemplate::default());
        assert!(publication.template.is_none());
    }
}
