mod common;

use common::{demo_settings, fixture, transaction_not_found, vault_not_found, vault_status};
use rust_decimal_macros::dec;
use sevd::application::gateway::{Gateway, IdentifierScope, VaultAuthorization};
use sevd::config::{DECRYPT_URL, ENCRYPT_URL, PAYMENT_URL, Settings};
use sevd::domain::catalog::REQUEST;
use sevd::error::SevdError;
use sevd::infrastructure::in_memory::{InMemoryTransport, RecordedRequest};
use sevd::interfaces::xml;

const VAULT_GUID: &str = "dd83d7559a274fb2b66e774a4febced7";

fn posted_text(request: &RecordedRequest, path: &[&str]) -> Option<String> {
    let body = request.field("request").expect("request field is posted");
    let (document, _) = xml::read_node(&REQUEST, body).unwrap();
    document.text_at(path).unwrap()
}

fn authorization() -> VaultAuthorization {
    VaultAuthorization {
        vault_guid: VAULT_GUID.to_string(),
        amount: dec!(1892.59),
        street1: "67890 Road".to_string(),
        street2: None,
        city: "South Padre Island".to_string(),
        state: "Texas".to_string(),
        zip_code: "78597".to_string(),
        country: Some("USA".to_string()),
        first_name: Some("Jane".to_string()),
        middle_initial: None,
        last_name: Some("Doe".to_string()),
    }
}

#[test]
fn test_vault_delete_checks_then_deletes() {
    let transport = InMemoryTransport::new();
    transport
        .respond_with(vault_status("000000"))
        .respond_with(vault_not_found())
        .respond_with(format!(
            "<Response_v1><VaultResponse><Response>\
             <ResponseIndicator>A</ResponseIndicator>\
             <ResponseCode>000000</ResponseCode>\
             <ResponseMessage>DELETED</ResponseMessage>\
             </Response><GUID>{VAULT_GUID}</GUID></VaultResponse></Response_v1>"
        ));
    let gateway = Gateway::new(&transport, demo_settings());

    let reply = gateway.vault_delete(VAULT_GUID).unwrap();
    assert!(reply.diagnostics.is_empty());
    assert_eq!(
        reply.document.text_at(&["vault_response", "response", "response_message"]).unwrap().as_deref(),
        Some("DELETED")
    );

    let requests = transport.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|request| request.url == PAYMENT_URL));

    let queried = posted_text(&requests[1], &["vault_status_query", "vault_id"]);
    let used = posted_text(&requests[2], &["vault_operation", "vault_id"]);
    assert!(queried.is_some());
    assert_eq!(queried, used);
    assert_ne!(posted_text(&requests[0], &["vault_status_query", "vault_id"]), used);
    assert_eq!(
        posted_text(&requests[2], &["vault_operation", "vault_storage", "service"]).as_deref(),
        Some("DELETE")
    );
    assert_eq!(
        posted_text(&requests[2], &["vault_operation", "vault_storage", "guid"]).as_deref(),
        Some(VAULT_GUID)
    );
}

#[test]
fn test_auth_with_vault_posts_authorization() {
    let transport = InMemoryTransport::new();
    transport
        .respond_with(transaction_not_found())
        .respond_with(fixture("payment_response.xml"));
    let gateway = Gateway::new(&transport, demo_settings());

    let reply = gateway.auth_with_vault(&authorization()).unwrap();
    assert!(reply.diagnostics.reports_unparsed("RiskCode"));
    assert_eq!(
        reply
            .document
            .text_at(&["payment_responses", "payment_responses", "transaction_response", "auth_code"])
            .unwrap()
            .as_deref(),
        Some("000001")
    );

    let requests = transport.requests();
    let queried = posted_text(
        &requests[0],
        &["transaction_status_queries", "transaction_status_queries", "trans_id"],
    );
    let base = ["payments", "payment_type", "transaction_base"];
    let at = |property: &str| {
        let path = [base[0], base[1], base[2], property];
        posted_text(&requests[1], &path)
    };
    assert_eq!(at("trans_id"), queried);
    assert_eq!(at("trans_type").as_deref(), Some("02"));
    assert_eq!(at("amount").as_deref(), Some("1892.59"));

    let body = requests[1].field("request").unwrap();
    assert!(body.contains("<Name><FirstName>Jane</FirstName><LastName>Doe</LastName></Name>"));
    assert!(body.contains(&format!("<VaultStorage><GUID>{VAULT_GUID}</GUID><Service>RETRIEVE</Service></VaultStorage>")));
    assert!(!body.contains("AddressLine2"));
}

#[test]
fn test_void_posts_van_reference() {
    let transport = InMemoryTransport::new();
    transport
        .respond_with(transaction_not_found())
        .respond_with(fixture("payment_response.xml"));
    let gateway = Gateway::new(&transport, demo_settings());

    gateway.void("ABL9LKQaI0").unwrap();

    let body = transport.requests()[1].field("request").unwrap().to_string();
    assert!(body.contains("<TransactionType>04</TransactionType><VANReference>ABL9LKQaI0</VANReference>"));
    assert!(!body.contains("<Customer>"));
    assert_eq!(transport.pending(), 0);
}

#[test]
fn test_vault_form_wraps_encrypted_request() {
    let transport = InMemoryTransport::new();
    transport
        .respond_with(vault_not_found())
        .respond_with("\u{feff}<?xml version=\"1.0\"?><Envelope>abc</Envelope>\r\n");
    let settings = Settings {
        vault_create_return_url: Some("https://shop.example/vault/done".to_string()),
        vault_create_postback_url: Some("https://shop.example/vault/postback".to_string()),
        ..demo_settings()
    };
    let gateway = Gateway::new(&transport, settings);

    let form = gateway.vault_form().unwrap();
    assert_eq!(form.vault_id.len(), 36);
    assert!(form.html.contains(&format!(r#"action="{PAYMENT_URL}""#)));
    assert!(form.html.contains(
        r#"name="request" value="&lt;?xml version=&quot;1.0&quot;?&gt;&lt;Envelope&gt;abc&lt;/Envelope&gt;""#
    ));
    assert!(form.html.contains(r#"name="redirect_url" value="https://shop.example/vault/done""#));
    assert!(form.html.contains(r#"<input type="submit" value="Submit"/>"#));

    let requests = transport.requests();
    assert_eq!(requests[1].url, ENCRYPT_URL);
    assert_eq!(
        posted_text(&requests[1], &["vault_operation", "vault_id"]),
        Some(form.vault_id.clone())
    );
    assert_eq!(
        posted_text(&requests[1], &["vault_operation", "vault_storage", "service"]).as_deref(),
        Some("CREATE")
    );
    assert_eq!(
        posted_text(&requests[1], &["postback", "url"]).as_deref(),
        Some("https://shop.example/vault/postback")
    );
}

#[test]
fn test_vault_form_requires_return_url() {
    let transport = InMemoryTransport::new();
    let gateway = Gateway::new(&transport, demo_settings());

    assert!(matches!(gateway.vault_form(), Err(SevdError::Config(_))));
    assert!(transport.requests().is_empty());
}

#[test]
fn test_decrypt_response_trims_envelope_noise() {
    let transport = InMemoryTransport::new();
    transport.respond_with("\u{feff}<Response_v1></Response_v1>\r\n\0");
    let gateway = Gateway::new(&transport, demo_settings());

    let text = gateway.decrypt_response("<Envelope>sealed</Envelope>").unwrap();
    assert_eq!(text, "<Response_v1></Response_v1>");

    let requests = transport.requests();
    let request = &requests[0];
    assert_eq!(request.url, DECRYPT_URL);
    assert_eq!(request.field("request"), Some("<Envelope>sealed</Envelope>"));
}

#[test]
fn test_replies_without_markup_are_transport_errors() {
    let transport = InMemoryTransport::new();
    transport
        .respond_with("Service Unavailable")
        .respond_with("Service Unavailable");
    let gateway = Gateway::new(&transport, demo_settings());

    assert!(matches!(
        gateway.vault_status_query("x"),
        Err(SevdError::Transport(_))
    ));
    let request = sevd::application::gateway::void_request(
        &demo_settings().credentials().unwrap(),
        "TID",
        "VAN",
    )
    .unwrap();
    assert!(matches!(
        gateway.encrypt_request(&request),
        Err(SevdError::Transport(_))
    ));
}

#[test]
fn test_payment_scope_queries_transaction_status() {
    let transport = InMemoryTransport::new();
    transport.respond_with(transaction_not_found());
    let gateway = Gateway::new(&transport, demo_settings());

    let id = gateway.allocate_identifier(IdentifierScope::Payment).unwrap();
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(
        posted_text(
            &requests[0],
            &["transaction_status_queries", "transaction_status_queries", "trans_id"]
        ),
        Some(id)
    );
}
