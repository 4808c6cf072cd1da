//! Hosted payment page customization: field visibility, styles and theme.

use crate::domain::schema::{FieldDecl, NodeSchema};
use crate::domain::validators::{BOOLEAN, INTEGER, Pattern};

/// Empty, three or six hex digits.
pub static COLOR: Pattern = Pattern::new("(?i)([0-9A-F]{3})?([0-9A-F]{3})?");
pub static REQUIRED_COLOR: Pattern = Pattern::required("(?i)([0-9A-F]{3})?([0-9A-F]{3})?");
/// `#` followed by six hex digits.
pub static HEX_COLOR: Pattern = Pattern::new("(?i)#[0-9A-F]{6}");

pub static UI_FIELD: NodeSchema = NodeSchema {
    name: "UIFieldType",
    tag: "UIField",
    fields: &[
        FieldDecl::scalar("Enabled", "enabled", &BOOLEAN),
        FieldDecl::scalar("Visible", "visible", &BOOLEAN),
    ],
};

pub static UI_NAME: NodeSchema = NodeSchema {
    name: "UINameType",
    tag: "Name",
    fields: &[
        FieldDecl::nested("FirstName", "first_name", &UI_FIELD),
        FieldDecl::nested("MI", "middle_initial", &UI_FIELD),
        FieldDecl::nested("LastName", "last_name", &UI_FIELD),
    ],
};

pub static UI_ADDRESS: NodeSchema = NodeSchema {
    name: "UIAddressType",
    tag: "Address",
    fields: &[
        FieldDecl::nested("AddressLine1", "street1", &UI_FIELD),
        FieldDecl::nested("AddressLine2", "street2", &UI_FIELD),
        FieldDecl::nested("City", "city", &UI_FIELD),
        FieldDecl::nested("State", "state", &UI_FIELD),
        FieldDecl::nested("ZipCode", "zip_code", &UI_FIELD),
        FieldDecl::nested("Country", "country", &UI_FIELD),
        FieldDecl::nested("EmailAddress", "email", &UI_FIELD),
        FieldDecl::nested("Telephone", "phone", &UI_FIELD),
        FieldDecl::nested("Fax", "fax", &UI_FIELD),
    ],
};

pub static UI_PERSON: NodeSchema = NodeSchema {
    name: "UIPersonType",
    tag: "UIPersonType",
    fields: &[
        FieldDecl::nested("Name", "name", &UI_NAME),
        FieldDecl::nested("Address", "address", &UI_ADDRESS),
    ],
};

pub static UI_TRANSACTION_BASE: NodeSchema = NodeSchema {
    name: "UITransactionBaseType",
    tag: "UITransactionBaseType",
    fields: &[
        FieldDecl::nested("Reference1", "reference1", &UI_FIELD),
        FieldDecl::nested("SubtotalAmount", "subtotal_amount", &UI_FIELD),
        FieldDecl::nested("TaxAmount", "tax_amount", &UI_FIELD),
        FieldDecl::nested("ShippingAmount", "shipping_amount", &UI_FIELD),
        FieldDecl::nested("AuthCode", "auth_code", &UI_FIELD),
    ],
};

pub static VAULT_OPERATION_UI: NodeSchema = NodeSchema {
    name: "VaultOperationUIType",
    tag: "VaultOperationUIType",
    fields: &[FieldDecl::nested("AccountNumber", "account_number", &UI_FIELD)],
};

pub static SINGLE_PAYMENT_UI: NodeSchema = NodeSchema {
    name: "SinglePaymentUIType",
    tag: "SinglePaymentUIType",
    fields: &[
        FieldDecl::nested("TransactionBase", "transaction_base", &UI_TRANSACTION_BASE),
        FieldDecl::nested("Customer", "customer", &UI_PERSON),
    ],
};

pub static UI_BORDER_STYLE: NodeSchema = NodeSchema {
    name: "UIBorderStyleType",
    tag: "UIBorderStyleType",
    fields: &[
        FieldDecl::scalar("BorderBottom", "border_bottom", &INTEGER).required(),
        FieldDecl::scalar("BorderColor", "border_color", &COLOR).required(),
        FieldDecl::scalar("BorderLeft", "border_left", &INTEGER).required(),
        FieldDecl::scalar("BorderRight", "border_right", &INTEGER).required(),
        FieldDecl::scalar("BorderTop", "border_top", &INTEGER).required(),
    ],
};

pub static UI_FIELD_STYLE: NodeSchema = NodeSchema {
    name: "UIFieldStyleType",
    tag: "UIFieldStyleType",
    fields: &[
        FieldDecl::scalar("Color", "color", &REQUIRED_COLOR).required(),
        FieldDecl::text("Family", "family").required(),
        FieldDecl::scalar("Size", "size", &INTEGER).required(),
    ],
};

pub static UI_WIZARD: NodeSchema = NodeSchema {
    name: "UIWizardType",
    tag: "UIWizardType",
    fields: &[
        FieldDecl::scalar("BackgroundColor", "background_color", &COLOR),
        FieldDecl::nested("BorderStyle", "border_style", &UI_BORDER_STYLE),
        FieldDecl::nested("FieldStyle", "field_style", &UI_FIELD_STYLE),
        FieldDecl::nested("LabelStyle", "label_style", &UI_FIELD_STYLE),
    ],
};

pub static UI_WIZARD_SUPPORT: NodeSchema = NodeSchema {
    name: "UIWizardSupportType",
    tag: "UIWizardSupportType",
    fields: &[
        FieldDecl::scalar("Visible", "visible", &BOOLEAN),
        FieldDecl::scalar("BackgroundColor", "background_color", &COLOR),
        FieldDecl::nested("BorderStyle", "border_style", &UI_BORDER_STYLE),
        FieldDecl::nested("FieldStyle", "field_style", &UI_FIELD_STYLE),
        FieldDecl::nested("LabelStyle", "label_style", &UI_FIELD_STYLE),
    ],
};

pub static UI_STYLE: NodeSchema = NodeSchema {
    name: "UIStyleType",
    tag: "UIStyleType",
    fields: &[
        FieldDecl::nested("Wizard", "wizard", &UI_WIZARD),
        FieldDecl::nested("WizardStepLeft", "wizard_step_left", &UI_WIZARD),
        FieldDecl::nested("WizardStepRight", "wizard_step_right", &UI_WIZARD),
        FieldDecl::nested("WizardSupport", "wizard_support", &UI_WIZARD_SUPPORT),
        FieldDecl::nested("WizardTitle", "wizard_title", &UI_WIZARD),
        FieldDecl::nested("Buttons", "buttons", &UI_WIZARD),
    ],
};

pub static UI_DISPLAY: NodeSchema = NodeSchema {
    name: "UIDisplayType",
    tag: "UIDisplayType",
    fields: &[
        FieldDecl::scalar("Header", "header", &BOOLEAN),
        FieldDecl::scalar("SupportLink", "support_link", &BOOLEAN),
        FieldDecl::scalar("CheckPayment", "check_payment", &BOOLEAN),
        FieldDecl::scalar("CardPayment", "card_payment", &BOOLEAN),
        FieldDecl::scalar("SELogo", "se_logo", &BOOLEAN),
    ],
};

pub static UI_THEME: NodeSchema = NodeSchema {
    name: "UIThemeType",
    tag: "UIThemeType",
    fields: &[
        FieldDecl::scalar("MainFontColor", "main_font_color", &HEX_COLOR),
        FieldDecl::scalar("MainBackColor", "main_back_color", &HEX_COLOR),
        FieldDecl::scalar("HeaderBackColor", "header_back_color", &HEX_COLOR),
        FieldDecl::scalar("TotalsBoxBackColor", "totals_box_back_color", &HEX_COLOR),
        FieldDecl::scalar("DividerBackColor", "divider_back_color", &HEX_COLOR),
    ],
};

pub static UI: NodeSchema = NodeSchema {
    name: "UIType",
    tag: "UIType",
    fields: &[
        FieldDecl::nested("UIStyle", "style", &UI_STYLE),
        FieldDecl::nested("Display", "display", &UI_DISPLAY),
        FieldDecl::nested("Theme", "theme", &UI_THEME),
        FieldDecl::nested("SinglePayment", "single_payment", &SINGLE_PAYMENT_UI),
        FieldDecl::nested("VaultOperation", "vault_operation", &VAULT_OPERATION_UI),
    ],
};
