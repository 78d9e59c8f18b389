//! Stored email templates.

use crate::client::{Client, TokenScope};
use crate::models::null_as_default;
use crate::query::{self, QueryOptions};
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A template as stored on the server.
///
/// Also used as the payload for [`Client::create_template`] and
/// [`Client::edit_template`]; every field is sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Template {
    pub template_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    /// Subject used when sending with this template.
    #[serde(deserialize_with = "null_as_default")]
    pub subject: String,
    #[serde(deserialize_with = "null_as_default")]
    pub html_body: String,
    #[serde(deserialize_with = "null_as_default")]
    pub text_body: String,
    pub associated_server_id: i64,
    /// Only active templates can be used for sending.
    pub active: bool,
}

/// Subset of template fields returned by list, create and edit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TemplateInfo {
    pub template_id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub name: String,
    pub active: bool,
}

/// One page of templates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct TemplateList {
    pub total_count: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub templates: Vec<TemplateInfo>,
}

/// Template content and a test model to render it with.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ValidateTemplateBody {
    pub subject: String,
    pub text_body: String,
    pub html_body: String,
    pub test_render_model: Value,
    pub inline_css_for_html_test_render: bool,
}

/// Outcome of a template validation.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ValidateTemplateResponse {
    pub all_content_is_valid: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub html_body: Validation,
    #[serde(deserialize_with = "null_as_default")]
    pub text_body: Validation,
    #[serde(deserialize_with = "null_as_default")]
    pub subject: Validation,
    /// Model inferred from the template placeholders.
    pub suggested_template_model: Value,
}

/// Validation result for one template field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct Validation {
    pub content_is_valid: bool,
    #[serde(deserialize_with = "null_as_default")]
    pub validation_errors: Vec<ValidationError>,
    #[serde(deserialize_with = "null_as_default")]
    pub rendered_content: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "PascalCase")]
pub struct ValidationError {
    #[serde(deserialize_with = "null_as_default")]
    pub message: String,
    pub line: i64,
    pub character_position: i64,
}

impl Client {
    /// Fetch a template by numeric id or alias.
    pub async fn get_template(&self, template_id: &str) -> Result<Template> {
        self.get(&format!("templates/{template_id}"), TokenScope::Server)
            .await
    }

    /// Page through templates. Only summary fields are returned; use
    /// [`Client::get_template`] for the content.
    pub async fn get_templates(&self, count: i64, offset: i64) -> Result<TemplateList> {
        let path = query::paged_path("templates", count, offset, &QueryOptions::new());
        self.get(&path, TokenScope::Server).await
    }

    pub async fn create_template(&self, template: &Template) -> Result<TemplateInfo> {
        self.post("templates", template, TokenScope::Server).await
    }

    pub async fn edit_template(&self, template_id: &str, template: &Template) -> Result<TemplateInfo> {
        self.put(&format!("templates/{template_id}"), template, TokenScope::Server)
            .await
    }

    pub async fn delete_template(&self, template_id: &str) -> Result<()> {
        let _: Value = self
            .delete(&format!("templates/{template_id}"), TokenScope::Server)
            .await?;
        Ok(())
    }

    /// Render template content against a test model without saving it.
    pub async fn validate_template(
        &self,
        body: &ValidateTemplateBody,
    ) -> Result<ValidateTemplateResponse> {
        self.post("templates/validate", body, TokenScope::Server)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn template_payload_keeps_zero_values() {
        let template = Template {
            name: "Onboarding Email".to_string(),
            subject: "Hello from {{company.name}}!".to_string(),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            json!({
                "TemplateId": 0,
                "Name": "Onboarding Email",
                "Subject": "Hello from {{company.name}}!",
                "HtmlBody": "",
                "TextBody": "",
                "AssociatedServerId": 0,
                "Active": false
            })
        );
    }

    #[test]
    fn validate_body_uses_wire_names() {
        let body = ValidateTemplateBody {
            subject: "{{subjectHeadline}}".to_string(),
            test_render_model: json!({"userName": "bobby joe"}),
            ..Default::default()
        };
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["InlineCssForHtmlTestRender"], json!(false));
        assert_eq!(value["HtmlBody"], json!(""));
        assert_eq!(value["TestRenderModel"]["userName"], "bobby joe");
    }
}
