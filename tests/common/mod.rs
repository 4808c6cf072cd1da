#![allow(dead_code)]

use sevd::config::Settings;
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).expect("fixture is readable")
}

/// Settings for the demo account, without vault form options.
pub fn demo_settings() -> Settings {
    Settings {
        application_id: Some("DEMO".to_string()),
        merchant_id: Some("999999999997".to_string()),
        merchant_key: Some("K3QD6YWyhfD".to_string()),
        ..Settings::default()
    }
}

/// The reply to a vault status query for an identifier the gateway never saw.
pub fn vault_not_found() -> String {
    vault_status("411411")
}

pub fn vault_status(code: &str) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"utf-8\"?>\r\n\
         <Response_v1><VaultStatusQueryResponse><Response>\
         <ResponseIndicator>X</ResponseIndicator>\
         <ResponseCode>{code}</ResponseCode>\
         <ResponseMessage>NOT FOUND</ResponseMessage>\
         </Response></VaultStatusQueryResponse></Response_v1>\r\n"
    )
}

/// The reply to a transaction status query for an unused identifier.
pub fn transaction_not_found() -> String {
    "<Response_v1><TransactionStatusQueryResponses>\
     <TransactionStatusQueryResponseType><Response>\
     <ResponseIndicator>X</ResponseIndicator>\
     <ResponseCode>411411</ResponseCode>\
     </Response></TransactionStatusQueryResponseType>\
     </TransactionStatusQueryResponses></Response_v1>"
        .to_string()
}
