//! Node types shared by requests and responses.

use crate::domain::schema::{FieldDecl, NodeSchema};

pub static APPLICATION: NodeSchema = NodeSchema {
    name: "ApplicationType",
    tag: "Application",
    fields: &[
        FieldDecl::text("ApplicationID", "app_id").required(),
        FieldDecl::text("LanguageID", "lang_id").with_default("EN"),
    ],
};

pub static MERCHANT: NodeSchema = NodeSchema {
    name: "MerchantType",
    tag: "Merchant",
    fields: &[
        FieldDecl::text("MerchantID", "merchant_id").required(),
        FieldDecl::text("MerchantKey", "merchant_key").required(),
    ],
};

pub static ADDRESS: NodeSchema = NodeSchema {
    name: "AddressType",
    tag: "Address",
    fields: &[
        FieldDecl::text("AddressLine1", "street1"),
        FieldDecl::text("AddressLine2", "street2"),
        FieldDecl::text("City", "city"),
        FieldDecl::text("State", "state"),
        FieldDecl::text("ZipCode", "zip_code"),
        FieldDecl::text("Country", "country"),
        FieldDecl::text("EmailAddress", "email"),
        FieldDecl::text("Telephone", "phone"),
        FieldDecl::text("Fax", "fax"),
    ],
};

pub static NAME: NodeSchema = NodeSchema {
    name: "NameType",
    tag: "Name",
    fields: &[
        FieldDecl::text("FirstName", "first_name"),
        FieldDecl::text("MI", "middle_initial"),
        FieldDecl::text("LastName", "last_name"),
    ],
};

pub static COMPANY: NodeSchema = NodeSchema {
    name: "CompanyType",
    tag: "Company",
    fields: &[
        FieldDecl::text("Name", "name"),
        FieldDecl::nested("Address", "address", &ADDRESS),
    ],
};

pub static PERSON: NodeSchema = NodeSchema {
    name: "PersonType",
    tag: "Person",
    fields: &[
        FieldDecl::nested("Name", "name", &NAME),
        FieldDecl::nested("Address", "address", &ADDRESS),
        FieldDecl::nested("Company", "company", &COMPANY),
    ],
};

pub static PERSONS: NodeSchema = NodeSchema {
    name: "PersonsType",
    tag: "Persons",
    fields: &[FieldDecl::many("PersonType", "persons", &PERSON)],
};
