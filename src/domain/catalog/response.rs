//! Response-side node types, rooted at `Response_v1`.

use super::common::{MERCHANT, PERSON, PERSONS};
use super::payment::{BATCH_PAYMENT, VAULT_ACCOUNT};
use crate::domain::schema::{FieldDecl, NodeSchema};
use crate::domain::validators::{BOOLEAN, DOUBLE, INTEGER};

pub static RESPONSE_TYPE: NodeSchema = NodeSchema {
    name: "ResponseType",
    tag: "Response",
    fields: &[
        FieldDecl::text("ResponseIndicator", "response_indicator"),
        FieldDecl::text("ResponseCode", "response_code"),
        FieldDecl::text("ResponseMessage", "response_message"),
    ],
};

pub static RESPONSES: NodeSchema = NodeSchema {
    name: "ResponsesType",
    tag: "Responses",
    fields: &[FieldDecl::many("ResponseType", "responses", &RESPONSE_TYPE)],
};

pub static VAULT_RESPONSE: NodeSchema = NodeSchema {
    name: "VaultResponseType",
    tag: "VaultResponse",
    fields: &[
        FieldDecl::nested("Response", "response", &RESPONSE_TYPE),
        FieldDecl::text("GUID", "guid"),
        FieldDecl::text("ExpirationDate", "expiration_date"),
        FieldDecl::text("Last4", "last4"),
        FieldDecl::text("PaymentDescription", "payment_description"),
        FieldDecl::text("PaymentTypeID", "payment_type_id"),
    ],
};

pub static RECURRING_RESPONSE: NodeSchema = NodeSchema {
    name: "RecurringResponseType",
    tag: "RecurringResponse",
    fields: &[FieldDecl::text("RecurringID", "recurring_id")],
};

pub static TRANSACTION_RESPONSE: NodeSchema = NodeSchema {
    name: "TransactionResponseType",
    tag: "TransactionResponse",
    fields: &[
        FieldDecl::text("AuthCode", "auth_code"),
        FieldDecl::text("AVSResult", "avs_result"),
        FieldDecl::text("CVVResult", "cvv_result"),
        FieldDecl::text("VANReference", "van_reference"),
        FieldDecl::text("TransactionID", "transaction_id"),
        FieldDecl::text("Last4", "last4"),
        FieldDecl::text("PaymentDescription", "payment_description"),
        FieldDecl::scalar("Amount", "amount", &DOUBLE).required(),
        FieldDecl::text("PaymentTypeID", "payment_type_id"),
        FieldDecl::text("Reference1", "reference1"),
        FieldDecl::text("TransactionDate", "transaction_date"),
        FieldDecl::text("AuxiliaryData", "auxiliary_data"),
        FieldDecl::text("EntryMode", "entry_mode"),
        FieldDecl::scalar("TaxAmount", "tax_amount", &DOUBLE).required(),
        FieldDecl::scalar("ShippingAmount", "shipping_amount", &DOUBLE).required(),
    ],
};

pub static TRANSACTION_RESPONSES: NodeSchema = NodeSchema {
    name: "TransactionResponsesType",
    tag: "TransactionResponses",
    fields: &[FieldDecl::many(
        "TransactionResponseType",
        "transaction_responses",
        &TRANSACTION_RESPONSE,
    )],
};

pub static PAYMENT_RESPONSE: NodeSchema = NodeSchema {
    name: "PaymentResponseType",
    tag: "PaymentResponseType",
    fields: &[
        FieldDecl::nested("Response", "response", &RESPONSE_TYPE),
        FieldDecl::nested("VaultResponse", "vault_response", &VAULT_RESPONSE),
        FieldDecl::nested("RecurringResponse", "recurring_response", &RECURRING_RESPONSE),
        FieldDecl::nested("TransactionResponse", "transaction_response", &TRANSACTION_RESPONSE),
        FieldDecl::nested("Customer", "customer", &PERSON),
    ],
};

pub static PAYMENT_RESPONSES: NodeSchema = NodeSchema {
    name: "PaymentResponsesType",
    tag: "PaymentResponses",
    fields: &[FieldDecl::many(
        "PaymentResponseType",
        "payment_responses",
        &PAYMENT_RESPONSE,
    )],
};

pub static BATCH_RESPONSE: NodeSchema = NodeSchema {
    name: "BatchResponseType",
    tag: "BatchResponse",
    fields: &[
        FieldDecl::nested("Response", "response", &RESPONSE_TYPE),
        FieldDecl::text("BatchNumber", "batch_number"),
        FieldDecl::text("BatchReference", "batch_reference"),
        FieldDecl::scalar("Net", "net", &DOUBLE).required(),
        FieldDecl::scalar("Count", "count", &INTEGER).required(),
        FieldDecl::scalar("BatchPayment", "batch_payment", &BATCH_PAYMENT).required(),
    ],
};

pub static TRANSACTION_SETTLEMENT_STATUS: NodeSchema = NodeSchema {
    name: "TransactionSettlementStatusType",
    tag: "TransactionSettlementStatus",
    fields: &[
        FieldDecl::text("TransactionType", "transaction_type"),
        FieldDecl::text("SettlementType", "settlement_type"),
        FieldDecl::text("SettlementDate", "settlement_date"),
        FieldDecl::text("BatchReference", "batch_reference"),
    ],
};

pub static TRANSACTION_SETTLEMENT_STATUSES: NodeSchema = NodeSchema {
    name: "TransactionSettlementStatusesType",
    tag: "TransactionSettlementStatuses",
    fields: &[FieldDecl::many(
        "TransactionSettlementStatusType",
        "transaction_settlement_statuses",
        &TRANSACTION_SETTLEMENT_STATUS,
    )],
};

pub static TRANSACTION_STATUS_QUERY_RESPONSE: NodeSchema = NodeSchema {
    name: "TransactionStatusQueryResponseType",
    tag: "TransactionStatusQueryResponseType",
    fields: &[
        FieldDecl::nested("Response", "response", &RESPONSE_TYPE),
        FieldDecl::nested("VaultResponse", "vault_response", &VAULT_RESPONSE),
        FieldDecl::nested("RecurringResponse", "recurring_response", &RECURRING_RESPONSE),
        FieldDecl::nested("TransactionResponse", "transaction_response", &TRANSACTION_RESPONSE),
        FieldDecl::nested(
            "TransactionSettlementStatus",
            "transaction_settlement_status",
            &TRANSACTION_SETTLEMENT_STATUS,
        ),
        FieldDecl::nested("Customer", "customer", &PERSON),
    ],
};

pub static TRANSACTION_STATUS_QUERY_RESPONSES: NodeSchema = NodeSchema {
    name: "TransactionStatusQueryResponsesType",
    tag: "TransactionStatusQueryResponses",
    fields: &[FieldDecl::many(
        "TransactionStatusQueryResponseType",
        "transaction_status_query_responses",
        &TRANSACTION_STATUS_QUERY_RESPONSE,
    )],
};

pub static RECURRING_STATUS_QUERY_RESPONSE: NodeSchema = NodeSchema {
    name: "RecurringStatusQueryResponseType",
    tag: "RecurringStatusQueryResponseType",
    fields: &[
        FieldDecl::nested("Responses", "responses", &RESPONSES),
        FieldDecl::nested("TransactionResponses", "transaction_responses", &TRANSACTION_RESPONSES),
        FieldDecl::nested(
            "TransactionSettlementStatuses",
            "transaction_settlement_statuses",
            &TRANSACTION_SETTLEMENT_STATUSES,
        ),
        FieldDecl::nested("Customers", "customers", &PERSONS),
    ],
};

pub static RECURRING_STATUS_QUERY_RESPONSES: NodeSchema = NodeSchema {
    name: "RecurringStatusQueryResponsesType",
    tag: "RecurringStatusQueryResponses",
    fields: &[FieldDecl::many(
        "RecurringStatusQueryResponseType",
        "recurring_status_query",
        &RECURRING_STATUS_QUERY_RESPONSE,
    )],
};

pub static VAULT_STATUS_QUERY_RESPONSE: NodeSchema = NodeSchema {
    name: "VaultStatusQueryResponseType",
    tag: "VaultStatusQueryResponse",
    fields: &[
        FieldDecl::nested("Response", "response", &RESPONSE_TYPE),
        FieldDecl::nested("VaultResponse", "vault_response", &VAULT_RESPONSE),
    ],
};

pub static VAULT_ACCOUNT_RESPONSE: NodeSchema = NodeSchema {
    name: "VaultAccountResponseType",
    tag: "VaultAccountResponse",
    fields: &[
        FieldDecl::nested("Response", "response", &RESPONSE_TYPE),
        FieldDecl::nested("VaultAccount", "vault_account", &VAULT_ACCOUNT),
        FieldDecl::nested("Merchant", "merchant", &MERCHANT),
    ],
};

pub static ACCOUNT_QUERY_RESPONSE: NodeSchema = NodeSchema {
    name: "AccountQueryResponseType",
    tag: "AccountQueryResponse",
    fields: &[
        FieldDecl::nested("Response", "response", &RESPONSE_TYPE),
        FieldDecl::nested("Merchant", "merchant", &MERCHANT),
        FieldDecl::text("Services", "services"),
        FieldDecl::scalar("Active", "active", &BOOLEAN).required(),
    ],
};

/// Root of every document returned by the gateway.
pub static RESPONSE: NodeSchema = NodeSchema {
    name: "Response",
    tag: "Response_v1",
    fields: &[
        FieldDecl::nested("PaymentResponses", "payment_responses", &PAYMENT_RESPONSES),
        FieldDecl::nested("BatchResponse", "batch_response", &BATCH_RESPONSE),
        FieldDecl::nested(
            "TransactionStatusQueryResponses",
            "transaction_query_responses",
            &TRANSACTION_STATUS_QUERY_RESPONSES,
        ),
        FieldDecl::nested(
            "RecurringStatusQueryResponses",
            "recurring_query_responses",
            &RECURRING_STATUS_QUERY_RESPONSES,
        ),
        FieldDecl::nested(
            "VaultStatusQueryResponse",
            "vault_query_response",
            &VAULT_STATUS_QUERY_RESPONSE,
        ),
        FieldDecl::nested("VaultResponse", "vault_response", &VAULT_RESPONSE),
        FieldDecl::nested(
            "VaultAccountResponse",
            "vault_account_response",
            &VAULT_ACCOUNT_RESPONSE,
        ),
        FieldDecl::nested(
            "AccountQueryResponse",
            "account_query_response",
            &ACCOUNT_QUERY_RESPONSE,
        ),
    ],
};
