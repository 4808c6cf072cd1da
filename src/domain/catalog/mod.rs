//! Declarations of every node type exchanged with the gateway.
//!
//! Requests are rooted at [`REQUEST`] (`Request_v1`) and responses at
//! [`RESPONSE`] (`Response_v1`).

pub mod common;
pub mod payment;
pub mod response;
pub mod ui;

pub use common::*;
pub use payment::*;
pub use response::{
    ACCOUNT_QUERY_RESPONSE, BATCH_RESPONSE, PAYMENT_RESPONSE, PAYMENT_RESPONSES,
    RECURRING_RESPONSE, RECURRING_STATUS_QUERY_RESPONSE, RECURRING_STATUS_QUERY_RESPONSES,
    RESPONSE, RESPONSE_TYPE, RESPONSES, TRANSACTION_RESPONSE, TRANSACTION_RESPONSES,
    TRANSACTION_SETTLEMENT_STATUS, TRANSACTION_SETTLEMENT_STATUSES,
    TRANSACTION_STATUS_QUERY_RESPONSE, TRANSACTION_STATUS_QUERY_RESPONSES,
    VAULT_ACCOUNT_RESPONSE, VAULT_RESPONSE, VAULT_STATUS_QUERY_RESPONSE,
};
pub use ui::*;

use super::schema::NodeSchema;

/// Every declared node type.
pub static ALL: &[&NodeSchema] = &[
    &APPLICATION,
    &MERCHANT,
    &ADDRESS,
    &NAME,
    &COMPANY,
    &PERSON,
    &PERSONS,
    &LEVEL2,
    &LEVEL3_LINE_ITEM,
    &LEVEL3_LINE_ITEMS,
    &LEVEL3,
    &TRANSACTION_BASE,
    &TRANSACTION_STATUS_QUERY,
    &TRANSACTION_STATUS_QUERIES,
    &RECURRING,
    &RECURRING_STATUS_QUERY,
    &RECURRING_STATUS_QUERIES,
    &VAULT_STORAGE,
    &VAULT_OPERATION,
    &VAULT_ACCOUNT,
    &ACCOUNT_QUERY,
    &VAULT_STATUS_QUERY,
    &UI_FIELD,
    &UI_NAME,
    &UI_ADDRESS,
    &UI_PERSON,
    &UI_TRANSACTION_BASE,
    &VAULT_OPERATION_UI,
    &SINGLE_PAYMENT_UI,
    &UI_BORDER_STYLE,
    &UI_FIELD_STYLE,
    &UI_WIZARD,
    &UI_WIZARD_SUPPORT,
    &UI_STYLE,
    &UI_DISPLAY,
    &UI_THEME,
    &UI,
    &POSTBACK,
    &PAYMENT,
    &PAYMENTS,
    &BATCH,
    &REQUEST,
    &RESPONSE_TYPE,
    &RESPONSES,
    &VAULT_RESPONSE,
    &RECURRING_RESPONSE,
    &TRANSACTION_RESPONSE,
    &TRANSACTION_RESPONSES,
    &PAYMENT_RESPONSE,
    &PAYMENT_RESPONSES,
    &BATCH_RESPONSE,
    &TRANSACTION_SETTLEMENT_STATUS,
    &TRANSACTION_SETTLEMENT_STATUSES,
    &TRANSACTION_STATUS_QUERY_RESPONSE,
    &TRANSACTION_STATUS_QUERY_RESPONSES,
    &RECURRING_STATUS_QUERY_RESPONSE,
    &RECURRING_STATUS_QUERY_RESPONSES,
    &VAULT_STATUS_QUERY_RESPONSE,
    &VAULT_ACCOUNT_RESPONSE,
    &ACCOUNT_QUERY_RESPONSE,
    &RESPONSE,
];

/// Looks up a node type by its type name, e.g. `AddressType`.
pub fn schema_named(name: &str) -> Option<&'static NodeSchema> {
    ALL.iter().copied().find(|schema| schema.name == name)
}
