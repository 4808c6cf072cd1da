//! Request-side node types: payments, queries, vault operations and batches.

use super::common::{APPLICATION, COMPANY, MERCHANT, PERSON};
use super::ui::UI;
use crate::domain::schema::{FieldDecl, NodeSchema};
use crate::domain::validators::{BOOLEAN, DOUBLE, INTEGER, OneOf};

/// Transaction type codes. Codes 01-07 run without the hosted UI, 11-17
/// with it. There is no 14.
pub const TRANSACTION_TYPES: &[&str] = &[
    "01", // sale
    "02", // authorization
    "03", // capture
    "04", // void
    "05", // force
    "06", // credit
    "07", // credit without reference
    "11", // sale
    "12", // authorization
    "13", // capture
    "15", // force
    "16", // credit
    "17", // credit without reference
];
pub const SCHEDULE_OPTIONS: &[&str] = &["DAILY", "MONTHLY"];
pub const NONBUSINESS_DAY_OPTIONS: &[&str] = &["THATDAY", "BEFORE", "AFTER"];
pub const VAULT_SERVICE_OPTIONS: &[&str] = &["CREATE", "UPDATE", "RETRIEVE", "DELETE"];
pub const BATCH_PAYMENT_OPTIONS: &[&str] = &["CREDITCARD", "PURCHASECARD"];

pub static TRANSACTION_TYPE: OneOf = OneOf::new("Transaction Type", TRANSACTION_TYPES);
pub static SCHEDULE: OneOf = OneOf::new("Schedule", SCHEDULE_OPTIONS);
pub static NONBUSINESS_DAY: OneOf = OneOf::new("Non Business Day", NONBUSINESS_DAY_OPTIONS);
pub static VAULT_SERVICE: OneOf = OneOf::new("Vault Service", VAULT_SERVICE_OPTIONS);
pub static BATCH_PAYMENT: OneOf = OneOf::new("Batch Payment", BATCH_PAYMENT_OPTIONS);

pub static LEVEL2: NodeSchema = NodeSchema {
    name: "Level2Type",
    tag: "Level2",
    fields: &[
        FieldDecl::text("CustomerNumber", "customer_number").required(),
        FieldDecl::scalar("TaxAmount", "tax_amount", &DOUBLE).required(),
    ],
};

pub static LEVEL3_LINE_ITEM: NodeSchema = NodeSchema {
    name: "Level3LineItemType",
    tag: "Level3LineItem",
    fields: &[
        FieldDecl::text("CommodityCode", "commodity_code").required(),
        FieldDecl::text("Description", "description").required(),
        FieldDecl::text("ProductCode", "product_code").required(),
        FieldDecl::scalar("Quantity", "quantity", &INTEGER).required(),
        FieldDecl::text("UnitOfMeasure", "unit_of_measure").required(),
        FieldDecl::scalar("UnitCost", "unit_cost", &DOUBLE).required(),
        FieldDecl::scalar("TaxAmount", "tax_amount", &DOUBLE).required(),
        FieldDecl::scalar("TaxRate", "tax_rate", &DOUBLE).required(),
        FieldDecl::scalar("DiscountAmount", "discount_amount", &DOUBLE).required(),
        FieldDecl::text("AlternateTaxIdentifier", "alternate_tax_identifier").required(),
        FieldDecl::text("TaxTypeApplied", "tax_type_applied").required(),
        FieldDecl::text("DiscountIndicator", "discount_indicator").required(),
        FieldDecl::text("NetGrossIndicator", "net_gross_indicator").required(),
        FieldDecl::scalar("ExtendedItemAmount", "extended_item_amount", &DOUBLE).required(),
        FieldDecl::text("DebitCreditIndicator", "debit_credit_indicator").required(),
    ],
};

pub static LEVEL3_LINE_ITEMS: NodeSchema = NodeSchema {
    name: "Level3LineItems",
    tag: "LineItems",
    fields: &[
        FieldDecl::many("Level3LineItemType", "level3_line_item", &LEVEL3_LINE_ITEM).required(),
    ],
};

pub static LEVEL3: NodeSchema = NodeSchema {
    name: "Level3Type",
    tag: "Level3",
    fields: &[
        FieldDecl::nested("Level2", "level2", &LEVEL2).required(),
        FieldDecl::scalar("ShippingAmount", "shipping_amount", &DOUBLE).required(),
        FieldDecl::text("DestinationZipCode", "destination_zip_code").required(),
        FieldDecl::text("DestinationCountryCode", "destination_country").required(),
        FieldDecl::text("VATNumber", "vat_number").required(),
        FieldDecl::scalar("DiscountAmount", "discount_amount", &DOUBLE).required(),
        FieldDecl::scalar("DutyAmount", "duty_amount", &DOUBLE).required(),
        FieldDecl::scalar("NationalTaxAmount", "national_tax_amount", &DOUBLE).required(),
        FieldDecl::text("VATInvoiceNumber", "vat_invoice_number").required(),
        FieldDecl::scalar("VATTaxAmount", "vat_tax_amount", &DOUBLE).required(),
        FieldDecl::scalar("VATTaxRate", "vat_tax_rate", &DOUBLE).required(),
        FieldDecl::nested("LineItems", "line_items", &LEVEL3_LINE_ITEMS),
    ],
};

pub static TRANSACTION_BASE: NodeSchema = NodeSchema {
    name: "TransactionBaseType",
    tag: "TransactionBase",
    fields: &[
        FieldDecl::text("TransactionID", "trans_id").required(),
        FieldDecl::scalar("TransactionType", "trans_type", &TRANSACTION_TYPE).required(),
        FieldDecl::text("Reference1", "ref1"),
        FieldDecl::text("Reference2", "ref2"),
        FieldDecl::scalar("Amount", "amount", &DOUBLE),
        FieldDecl::text("AuthCode", "auth_code"),
        FieldDecl::text("VANReference", "van_reference"),
    ],
};

pub static TRANSACTION_STATUS_QUERY: NodeSchema = NodeSchema {
    name: "TransactionStatusQueryType",
    tag: "TransactionStatusQuery",
    fields: &[
        FieldDecl::nested("Merchant", "merchant", &MERCHANT).required(),
        FieldDecl::text("TransactionID", "trans_id").required(),
    ],
};

pub static TRANSACTION_STATUS_QUERIES: NodeSchema = NodeSchema {
    name: "TransactionStatusQueriesType",
    tag: "TransactionStatusQueries",
    fields: &[FieldDecl::many(
        "TransactionStatusQueryType",
        "transaction_status_queries",
        &TRANSACTION_STATUS_QUERY,
    )],
};

pub static RECURRING: NodeSchema = NodeSchema {
    name: "RecurringType",
    tag: "Recurring",
    fields: &[
        FieldDecl::scalar("Schedule", "schedule", &SCHEDULE).required(),
        FieldDecl::scalar("Interval", "interval", &INTEGER),
        FieldDecl::scalar("DayOfMonth", "day_of_month", &INTEGER),
        FieldDecl::text("StartDate", "start_date"),
        FieldDecl::scalar("Amount", "amount", &DOUBLE),
        FieldDecl::scalar("TimesToProcess", "times_to_process", &INTEGER),
        FieldDecl::scalar("NonBusinessDay", "non_business_day", &NONBUSINESS_DAY),
    ],
};

pub static RECURRING_STATUS_QUERY: NodeSchema = NodeSchema {
    name: "RecurringStatusQueryType",
    tag: "RecurringStatusQuery",
    fields: &[
        FieldDecl::nested("Merchant", "merchant", &MERCHANT).required(),
        FieldDecl::text("RecurringID", "recur_id").required(),
        FieldDecl::text("StartDate", "start_date").required(),
        FieldDecl::text("EndDate", "end_date").required(),
    ],
};

pub static RECURRING_STATUS_QUERIES: NodeSchema = NodeSchema {
    name: "RecurringStatusQueriesType",
    tag: "RecurringStatusQueries",
    fields: &[FieldDecl::many(
        "RecurringStatusQueryType",
        "recurring_status_queries",
        &RECURRING_STATUS_QUERY,
    )],
};

pub static VAULT_STORAGE: NodeSchema = NodeSchema {
    name: "VaultStorageType",
    tag: "VaultStorage",
    fields: &[
        FieldDecl::text("GUID", "guid"),
        FieldDecl::scalar("Service", "service", &VAULT_SERVICE).required(),
    ],
};

pub static VAULT_OPERATION: NodeSchema = NodeSchema {
    name: "VaultOperationType",
    tag: "VaultOperation",
    fields: &[
        FieldDecl::text("VaultID", "vault_id"),
        FieldDecl::nested("Merchant", "merchant", &MERCHANT).required(),
        FieldDecl::nested("VaultStorage", "vault_storage", &VAULT_STORAGE).required(),
    ],
};

pub static VAULT_ACCOUNT: NodeSchema = NodeSchema {
    name: "VaultAccountType",
    tag: "VaultAccountType",
    fields: &[
        FieldDecl::nested("Company", "company", &COMPANY).required(),
        FieldDecl::nested("Contact", "contact", &PERSON).required(),
    ],
};

pub static ACCOUNT_QUERY: NodeSchema = NodeSchema {
    name: "AccountQueryType",
    tag: "AccountQuery",
    fields: &[FieldDecl::nested("Merchant", "merchant", &MERCHANT).required()],
};

pub static VAULT_STATUS_QUERY: NodeSchema = NodeSchema {
    name: "VaultStatusQueryType",
    tag: "VaultStatusQuery",
    fields: &[
        FieldDecl::nested("Merchant", "merchant", &MERCHANT),
        FieldDecl::text("VaultID", "vault_id"),
    ],
};

pub static POSTBACK: NodeSchema = NodeSchema {
    name: "PostbackType",
    tag: "PostBack",
    fields: &[FieldDecl::text("HttpsUrl", "url").required()],
};

pub static PAYMENT: NodeSchema = NodeSchema {
    name: "PaymentType",
    tag: "PaymentType",
    fields: &[
        FieldDecl::nested("Merchant", "merchant", &MERCHANT).required(),
        FieldDecl::nested("TransactionBase", "transaction_base", &TRANSACTION_BASE).required(),
        FieldDecl::nested("Customer", "customer", &PERSON),
        FieldDecl::nested("ShippingRecipient", "shipping_recipient", &PERSON),
        FieldDecl::nested("Level2", "level2", &LEVEL2),
        FieldDecl::nested("Level3", "level3", &LEVEL3),
        FieldDecl::nested("VaultStorage", "vault_storage", &VAULT_STORAGE),
        FieldDecl::nested("Recurring", "recurring", &RECURRING),
        FieldDecl::nested("Postback", "postback", &POSTBACK),
    ],
};

pub static PAYMENTS: NodeSchema = NodeSchema {
    name: "Payments",
    tag: "Payments",
    fields: &[FieldDecl::many("PaymentType", "payment_type", &PAYMENT)],
};

pub static BATCH: NodeSchema = NodeSchema {
    name: "BatchType",
    tag: "BatchType",
    fields: &[
        FieldDecl::nested("Merchant", "merchant", &MERCHANT).required(),
        FieldDecl::scalar("Net", "net", &DOUBLE),
        FieldDecl::scalar("Count", "count", &INTEGER),
        FieldDecl::scalar("BatchPayment", "batch_payment", &BATCH_PAYMENT).required(),
    ],
};

/// Root of every document sent to the gateway.
pub static REQUEST: NodeSchema = NodeSchema {
    name: "Request",
    tag: "Request_v1",
    fields: &[
        FieldDecl::nested("Application", "application", &APPLICATION),
        FieldDecl::scalar("IsSplitPayment", "is_split_payment", &BOOLEAN),
        FieldDecl::nested("Payments", "payments", &PAYMENTS),
        FieldDecl::nested("Batch", "batch", &BATCH),
        FieldDecl::nested(
            "TransactionStatusQueries",
            "transaction_status_queries",
            &TRANSACTION_STATUS_QUERIES,
        ),
        FieldDecl::nested(
            "RecurringStatusQueries",
            "recurring_status_queries",
            &RECURRING_STATUS_QUERIES,
        ),
        FieldDecl::nested("VaultStatusQuery", "vault_status_query", &VAULT_STATUS_QUERY),
        FieldDecl::nested("VaultOperation", "vault_operation", &VAULT_OPERATION),
        FieldDecl::nested("VaultAccount", "vault_account", &VAULT_ACCOUNT),
        FieldDecl::nested("UI", "ui", &UI),
        FieldDecl::nested("AccountQuery", "account_query", &ACCOUNT_QUERY),
        FieldDecl::nested("Postback", "postback", &POSTBACK),
    ],
};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::node::Node;
    use crate::domain::value::Value;
    use crate::error::SevdError;

    #[test]
    fn test_transaction_types_skip_fourteen() {
        assert_eq!(TRANSACTION_TYPES.len(), 13);
        assert!(!TRANSACTION_TYPES.contains(&"14"));

        let mut base = Node::new(&TRANSACTION_BASE).unwrap();
        for code in TRANSACTION_TYPES {
            base.set("trans_type", *code).unwrap();
        }
        for rejected in ["14", "08", "1", ""] {
            assert!(matches!(
                base.set("trans_type", rejected),
                Err(SevdError::InvalidValue { .. })
            ));
        }
    }

    #[test]
    fn test_enumerations_accept_their_members() {
        let cases: [(&'static NodeSchema, &str, &[&str]); 4] = [
            (&RECURRING, "schedule", SCHEDULE_OPTIONS),
            (&RECURRING, "non_business_day", NONBUSINESS_DAY_OPTIONS),
            (&VAULT_STORAGE, "service", VAULT_SERVICE_OPTIONS),
            (&BATCH, "batch_payment", BATCH_PAYMENT_OPTIONS),
        ];
        for (schema, property, options) in cases {
            let mut node = Node::new(schema).unwrap();
            for option in options {
                node.set(property, *option).unwrap();
            }
            assert!(node.set(property, "WEEKLY").is_err());
        }
    }

    #[test]
    fn test_line_item_requires_tax_rate() {
        let item = Node::with(
            &LEVEL3_LINE_ITEM,
            [
                ("commodity_code", Value::from("1234")),
                ("description", "Widget".into()),
                ("product_code", "W-1".into()),
                ("quantity", 2.into()),
                ("unit_of_measure", "EA".into()),
                ("unit_cost", 1.5.into()),
                ("tax_amount", 0.25.into()),
                ("discount_amount", 0.0.into()),
                ("alternate_tax_identifier", "X".into()),
                ("tax_type_applied", "S".into()),
                ("discount_indicator", "N".into()),
                ("net_gross_indicator", "N".into()),
                ("extended_item_amount", 3.0.into()),
                ("debit_credit_indicator", "D".into()),
            ],
        )
        .unwrap();
        assert!(matches!(
            item.to_xml(None),
            Err(SevdError::MissingRequiredField { tag }) if tag == "TaxRate"
        ));
    }

    #[test]
    fn test_payment_rejects_wrong_nested_type() {
        let mut payment = Node::new(&PAYMENT).unwrap();
        let merchant = Node::new(&MERCHANT).unwrap();
        assert!(matches!(
            payment.set("customer", merchant),
            Err(SevdError::TypeMismatch { .. })
        ));
    }
}
