use async_trait::async_trait;
use http::StatusCode;
use portfolio_site::contact::{
    ContactFields, ContactForm, Field, SubmitBlocked, SubmitError, SUBMIT_FAILED_MSG,
};
use portfolio_site::relay::{ContactRelay, FormRelay, RelayConfig, DEFAULT_RELAY_ENDPOINT};
use wiremock::{
    matchers::{body_string, header, method, path},
    Mock, MockServer, ResponseTemplate,
};

// ============================================================================
// Helper Functions
// ============================================================================

fn fields() -> ContactFields {
    ContactFields {
        name: "John Doe".to_string(),
        email: "john@example.com".to_string(),
        message: "Lets build something great".to_string(),
    }
}

fn filled_form() -> ContactForm {
    let f = fields();
    let mut form = ContactForm::new();
    form.set_field(Field::Name, f.name);
    form.set_field(Field::Email, f.email);
    form.set_field(Field::Message, f.message);
    form
}

fn relay_for(server: &MockServer) -> FormRelay {
    FormRelay::new(RelayConfig {
        endpoint: format!("{}/ajax/inbox", server.uri()),
    })
}

/// Relay that never touches the network and always fails.
struct OfflineRelay;

#[async_trait(?Send)]
impl ContactRelay for OfflineRelay {
    async fn deliver(&self, _fields: &ContactFields) -> Result<(), SubmitError> {
        Err(SubmitError::Network("offline".to_string()))
    }
}

// ============================================================================
// FormRelay Tests
// ============================================================================

#[test]
fn test_default_endpoint() {
    assert_eq!(FormRelay::default().endpoint(), DEFAULT_RELAY_ENDPOINT);
}

#[tokio::test]
async fn test_posts_form_encoded_fields() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ajax/inbox"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string(
            "name=John+Doe&email=john%40example.com&message=Lets+build+something+great",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"success":"true"}"#))
        .expect(1)
        .mount(&mock_server)
        .await;

    let res = relay_for(&mock_server).deliver(&fields()).await;
    assert_eq!(res, Ok(()));
}

#[tokio::test]
async fn test_non_success_status_is_rejected() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let res = relay_for(&mock_server).deliver(&fields()).await;
    assert_eq!(
        res,
        Err(SubmitError::Rejected(StatusCode::INTERNAL_SERVER_ERROR))
    );
}

#[tokio::test]
async fn test_unreachable_relay_is_network_error() {
    let relay = FormRelay::new(RelayConfig {
        endpoint: "http://127.0.0.1:1/ajax/nobody".to_string(),
    });

    let res = relay.deliver(&fields()).await;
    assert!(matches!(res, Err(SubmitError::Network(_))), "got {res:?}");
}

// ============================================================================
// Submit Flow Tests
// ============================================================================

#[tokio::test]
async fn test_successful_delivery_clears_form() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&mock_server)
        .await;

    let mut form = filled_form();
    let payload = form.begin_submit().expect("form should be valid");
    assert!(form.is_submitting());
    assert_eq!(form.begin_submit(), Err(SubmitBlocked::InFlight));

    let outcome = relay_for(&mock_server).deliver(&payload).await;
    let ticket = form.finish_submit(outcome).expect("success issues a ticket");

    assert!(!form.is_submitting());
    assert!(form.fields().is_blank());
    assert!(form.success());

    form.expire_success(ticket);
    assert!(!form.success());
}

#[tokio::test]
async fn test_failed_delivery_keeps_fields_for_retry() {
    let mut form = filled_form();
    let payload = form.begin_submit().expect("form should be valid");

    let outcome = OfflineRelay.deliver(&payload).await;
    assert!(form.finish_submit(outcome).is_none());

    assert_eq!(form.fields(), &fields());
    assert_eq!(form.submit_error(), Some(SUBMIT_FAILED_MSG));
    assert!(!form.success());
    assert!(!form.is_submitting());
}

#[tokio::test]
async fn test_invalid_form_never_reaches_relay() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&mock_server)
        .await;

    let mut form = ContactForm::new();
    form.set_field(Field::Name, "John");
    form.set_field(Field::Email, "foo@bar");
    form.set_field(Field::Message, "hi");

    assert_eq!(form.begin_submit(), Err(SubmitBlocked::Invalid));
    assert!(!form.is_submitting());
    assert!(form.error(Field::Email).is_some());
    assert!(form.error(Field::Message).is_some());
    assert!(form.error(Field::Name).is_none());
}
