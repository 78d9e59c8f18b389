mod common;

use common::{client, SERVER_HEADER, SERVER_TOKEN};
use httpmock::prelude::*;
use postmark_client::{Template, ValidateTemplateBody};
use serde_json::json;

#[tokio::test]
async fn get_template_by_id() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/templates/1234")
                .header(SERVER_HEADER, SERVER_TOKEN);
            then.status(200).json_body(json!({
                "Name": "Onboarding Email",
                "TemplateId": 1234,
                "Subject": "Hi there, {{Name}}",
                "HtmlBody": "Hello dear Postmark user. {{Name}}",
                "TextBody": "{{Name}} is a {{Occupation}}",
                "AssociatedServerId": 1,
                "Active": false
            }));
        })
        .await;

    let template = client(&server).get_template("1234").await.unwrap();

    assert_eq!(template.template_id, 1234);
    assert_eq!(template.name, "Onboarding Email");
    assert_eq!(template.associated_server_id, 1);
    assert!(!template.active);
}

#[tokio::test]
async fn list_templates_pages() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET)
                .path("/templates")
                .query_param("count", "100")
                .query_param("offset", "0");
            then.status(200).json_body(json!({
                "TotalCount": 2,
                "Templates": [
                    {"Active": true, "TemplateId": 1234, "Name": "Account Activation Email"},
                    {"Active": true, "TemplateId": 5678, "Name": "Password Recovery Email"}
                ]
            }));
        })
        .await;

    let list = client(&server).get_templates(100, 0).await.unwrap();

    mock.assert_async().await;
    assert_eq!(list.total_count, 2);
    assert_eq!(list.templates[1].name, "Password Recovery Email");
}

#[tokio::test]
async fn create_template_sends_every_field() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/templates").json_body(json!({
                "TemplateId": 0,
                "Name": "Onboarding Email",
                "Subject": "Hello from {{company.name}}!",
                "HtmlBody": "<html><body>Hello, {{name}}!</body></html>",
                "TextBody": "Hello, {{name}}!",
                "AssociatedServerId": 0,
                "Active": false
            }));
            then.status(200).json_body(json!({
                "TemplateId": 1234,
                "Name": "Onboarding Email",
                "Active": true
            }));
        })
        .await;

    let template = Template {
        name: "Onboarding Email".to_string(),
        subject: "Hello from {{company.name}}!".to_string(),
        html_body: "<html><body>Hello, {{name}}!</body></html>".to_string(),
        text_body: "Hello, {{name}}!".to_string(),
        ..Default::default()
    };
    let info = client(&server).create_template(&template).await.unwrap();

    mock.assert_async().await;
    assert_eq!(info.template_id, 1234);
    assert!(info.active);
}

#[tokio::test]
async fn edit_template_uses_put() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(PUT).path("/templates/1234");
            then.status(200).json_body(json!({
                "TemplateId": 1234,
                "Name": "Onboarding Emailzzzzz",
                "Active": true
            }));
        })
        .await;

    let template = Template {
        name: "Onboarding Emailzzzzz".to_string(),
        ..Default::default()
    };
    let info = client(&server)
        .edit_template("1234", &template)
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(info.name, "Onboarding Emailzzzzz");
}

#[tokio::test]
async fn delete_template_succeeds() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(DELETE).path("/templates/1234");
            then.status(200)
                .json_body(json!({"ErrorCode": 0, "Message": "Template 1234 removed."}));
        })
        .await;

    client(&server).delete_template("1234").await.unwrap();

    mock.assert_async().await;
}

#[tokio::test]
async fn delete_template_reports_failure() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(DELETE).path("/templates/1234");
            then.status(422).json_body(json!({
                "ErrorCode": 402,
                "Message": "Invalid JSON"
            }));
        })
        .await;

    let err = client(&server).delete_template("1234").await.unwrap_err();

    assert_eq!(err.api_error().map(|e| e.error_code), Some(402));
    assert_eq!(err.to_string(), "Invalid JSON");
}

#[tokio::test]
async fn validate_template_decodes_each_part() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST).path("/templates/validate").json_body(json!({
                "Subject": "{{#company}}{{name}}{{/company}} {{subjectHeadline}}",
                "TextBody": "{{#company}}{{address}}{{/company}}",
                "HtmlBody": "{{#company}}{{ name }}{{/company}}",
                "TestRenderModel": {"userName": "bobby joe"},
                "InlineCssForHtmlTestRender": false
            }));
            then.status(200).json_body(json!({
                "AllContentIsValid": true,
                "HtmlBody": {
                    "ContentIsValid": true,
                    "ValidationErrors": [],
                    "RenderedContent": "<html><head></head><body>_Name_</body></html>"
                },
                "TextBody": {
                    "ContentIsValid": true,
                    "ValidationErrors": [{"Message": "The syntax for this template is invalid.", "Line": 1, "CharacterPosition": 1}],
                    "RenderedContent": "_Address_"
                },
                "Subject": {
                    "ContentIsValid": true,
                    "ValidationErrors": [],
                    "RenderedContent": "_Name_ _SubjectHeadline_"
                },
                "SuggestedTemplateModel": {
                    "userName": "bobby joe",
                    "company": {"address": "Address_Value", "name": "Name_Value"}
                }
            }));
        })
        .await;

    let body = ValidateTemplateBody {
        subject: "{{#company}}{{name}}{{/company}} {{subjectHeadline}}".to_string(),
        text_body: "{{#company}}{{address}}{{/company}}".to_string(),
        html_body: "{{#company}}{{ name }}{{/company}}".to_string(),
        test_render_model: json!({"userName": "bobby joe"}),
        inline_css_for_html_test_render: false,
    };
    let res = client(&server).validate_template(&body).await.unwrap();

    mock.assert_async().await;
    assert!(res.all_content_is_valid);
    assert_eq!(res.subject.rendered_content, "_Name_ _SubjectHeadline_");
    assert_eq!(res.text_body.validation_errors[0].character_position, 1);
    assert_eq!(res.suggested_template_model["company"]["name"], "Name_Value");
}
