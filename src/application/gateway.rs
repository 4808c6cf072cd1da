use super::forms::{self, FormOptions};
use crate::config::{Credentials, Settings};
use crate::domain::catalog::{
    ADDRESS, APPLICATION, MERCHANT, NAME, PAYMENT, PAYMENTS, PERSON, POSTBACK, REQUEST, RESPONSE,
    TRANSACTION_BASE, TRANSACTION_STATUS_QUERIES, TRANSACTION_STATUS_QUERY, VAULT_OPERATION,
    VAULT_STATUS_QUERY, VAULT_STORAGE,
};
use crate::domain::diagnostics::Diagnostics;
use crate::domain::node::Node;
use crate::domain::ports::Transport;
use crate::error::{Result, SevdError};
use crate::interfaces::xml;
use rust_decimal::Decimal;

/// Response code the gateway returns for an identifier it has never seen.
pub const NOT_FOUND_RESPONSE_CODE: &str = "411411";

const AUTHORIZATION: &str = "02";
const VOID: &str = "04";

/// Which status query decides whether an identifier is still free.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentifierScope {
    /// Check with a vault status query.
    Vault,
    /// Check with a transaction status query.
    Payment,
}

impl IdentifierScope {
    fn response_code_path(self) -> &'static [&'static str] {
        match self {
            IdentifierScope::Vault => &["vault_query_response", "response", "response_code"],
            IdentifierScope::Payment => &[
                "transaction_query_responses",
                "transaction_status_query_responses",
                "response",
                "response_code",
            ],
        }
    }
}

/// An authorization against a card stored in the vault.
#[derive(Debug, Clone, PartialEq)]
pub struct VaultAuthorization {
    pub vault_guid: String,
    pub amount: Decimal,
    pub street1: String,
    pub street2: Option<String>,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: Option<String>,
    pub first_name: Option<String>,
    pub middle_initial: Option<String>,
    pub last_name: Option<String>,
}

pub fn application(credentials: &Credentials) -> Result<Node> {
    Node::new(&APPLICATION)?
        .and("app_id", credentials.application_id.as_str())?
        .and("lang_id", credentials.language_id.as_str())
}

pub fn merchant(credentials: &Credentials) -> Result<Node> {
    Node::new(&MERCHANT)?
        .and("merchant_id", credentials.merchant_id.as_str())?
        .and("merchant_key", credentials.merchant_key.as_str())
}

fn request(credentials: &Credentials) -> Result<Node> {
    Node::new(&REQUEST)?.and("application", application(credentials)?)
}

/// Asks the hosted page to collect a card and store it under `vault_id`.
pub fn vault_create_request(
    credentials: &Credentials,
    vault_id: &str,
    postback_url: Option<&str>,
) -> Result<Node> {
    let storage = Node::new(&VAULT_STORAGE)?.and("service", "CREATE")?;
    let operation = Node::new(&VAULT_OPERATION)?
        .and("vault_id", vault_id)?
        .and("merchant", merchant(credentials)?)?
        .and("vault_storage", storage)?;
    let mut request = request(credentials)?.and("vault_operation", operation)?;
    if let Some(url) = postback_url {
        request.set("postback", Node::new(&POSTBACK)?.and("url", url)?)?;
    }
    Ok(request)
}

/// Deletes the card stored as `vault_guid`.
pub fn vault_delete_request(
    credentials: &Credentials,
    vault_id: &str,
    vault_guid: &str,
) -> Result<Node> {
    let storage = Node::new(&VAULT_STORAGE)?
        .and("guid", vault_guid)?
        .and("service", "DELETE")?;
    let operation = Node::new(&VAULT_OPERATION)?
        .and("vault_id", vault_id)?
        .and("merchant", merchant(credentials)?)?
        .and("vault_storage", storage)?;
    request(credentials)?.and("vault_operation", operation)
}

pub fn vault_status_query_request(credentials: &Credentials, vault_id: &str) -> Result<Node> {
    let query = Node::new(&VAULT_STATUS_QUERY)?
        .and("merchant", merchant(credentials)?)?
        .and("vault_id", vault_id)?;
    request(credentials)?.and("vault_status_query", query)
}

pub fn transaction_status_query_request(
    credentials: &Credentials,
    transaction_id: &str,
) -> Result<Node> {
    let query = Node::new(&TRANSACTION_STATUS_QUERY)?
        .and("merchant", merchant(credentials)?)?
        .and("trans_id", transaction_id)?;
    let queries = Node::new(&TRANSACTION_STATUS_QUERIES)?
        .and("transaction_status_queries", vec![query])?;
    request(credentials)?.and("transaction_status_queries", queries)
}

/// Authorizes `authorization.amount` on a vaulted card without the hosted UI.
pub fn auth_with_vault_request(
    credentials: &Credentials,
    transaction_id: &str,
    authorization: &VaultAuthorization,
) -> Result<Node> {
    let mut customer = Node::new(&PERSON)?;
    let names = [
        ("first_name", &authorization.first_name),
        ("middle_initial", &authorization.middle_initial),
        ("last_name", &authorization.last_name),
    ];
    if names.iter().any(|(_, value)| value.is_some()) {
        let mut name = Node::new(&NAME)?;
        for (property, value) in names {
            if let Some(value) = value {
                name.set(property, value.as_str())?;
            }
        }
        customer.set("name", name)?;
    }

    let mut address = Node::new(&ADDRESS)?
        .and("street1", authorization.street1.as_str())?
        .and("city", authorization.city.as_str())?
        .and("state", authorization.state.as_str())?
        .and("zip_code", authorization.zip_code.as_str())?;
    if let Some(street2) = &authorization.street2 {
        address.set("street2", street2.as_str())?;
    }
    if let Some(country) = &authorization.country {
        address.set("country", country.as_str())?;
    }
    customer.set("address", address)?;

    let base = Node::new(&TRANSACTION_BASE)?
        .and("trans_id", transaction_id)?
        .and("trans_type", AUTHORIZATION)?
        .and("amount", authorization.amount)?;
    let storage = Node::new(&VAULT_STORAGE)?
        .and("service", "RETRIEVE")?
        .and("guid", authorization.vault_guid.as_str())?;
    let payment = Node::new(&PAYMENT)?
        .and("merchant", merchant(credentials)?)?
        .and("customer", customer)?
        .and("transaction_base", base)?
        .and("vault_storage", storage)?;
    payments_request(credentials, payment)
}

/// Voids the transaction the gateway knows as `van_reference`.
pub fn void_request(
    credentials: &Credentials,
    transaction_id: &str,
    van_reference: &str,
) -> Result<Node> {
    let base = Node::new(&TRANSACTION_BASE)?
        .and("trans_id", transaction_id)?
        .and("trans_type", VOID)?
        .and("van_reference", van_reference)?;
    let payment = Node::new(&PAYMENT)?
        .and("merchant", merchant(credentials)?)?
        .and("transaction_base", base)?;
    payments_request(credentials, payment)
}

fn payments_request(credentials: &Credentials, payment: Node) -> Result<Node> {
    let payments = Node::new(&PAYMENTS)?.and("payment_type", vec![payment])?;
    request(credentials)?.and("payments", payments)
}

/// A parsed `Response_v1` document.
#[derive(Debug, Clone, PartialEq)]
pub struct Reply {
    pub document: Node,
    pub diagnostics: Diagnostics,
}

/// The hosted vault form and the identifier the card will be stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VaultForm {
    pub vault_id: String,
    pub html: String,
}

/// Client for the gateway endpoints.
///
/// Every call builds a `Request_v1` document, posts it through the transport
/// and parses the `Response_v1` it gets back.
pub struct Gateway<T: Transport> {
    transport: T,
    settings: Settings,
}

impl<T: Transport> Gateway<T> {
    /// Creates a new `Gateway`.
    ///
    /// # Arguments
    ///
    /// * `transport` - Delivers the form-encoded POSTs.
    /// * `settings` - Account identifiers and endpoint URLs.
    pub fn new(transport: T, settings: Settings) -> Self {
        Self {
            transport,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Encrypts a request into an envelope for the hosted payment page.
    pub fn encrypt_request(&self, request: &Node) -> Result<String> {
        let body = self.post(&self.settings.encrypt_url, &xml::to_xml_string(request)?)?;
        let start = body
            .find('<')
            .ok_or_else(|| SevdError::Transport("encrypted envelope holds no XML".to_string()))?;
        Ok(body[start..].to_string())
    }

    /// Opens an encrypted response envelope and returns the response XML.
    pub fn decrypt_response(&self, envelope: &str) -> Result<String> {
        let body = self.post(&self.settings.decrypt_url, envelope)?;
        forms::trim_xml(&body)
            .map(str::to_string)
            .ok_or_else(|| SevdError::Transport("decrypted response holds no XML".to_string()))
    }

    /// Builds the hosted form that collects a card into the vault.
    pub fn vault_form(&self) -> Result<VaultForm> {
        let credentials = self.settings.credentials()?;
        let return_url = self
            .settings
            .vault_create_return_url
            .as_deref()
            .ok_or_else(|| SevdError::Config("vault_create_return_url is not set".to_string()))?;
        let button_text = self
            .settings
            .vault_create_button_text
            .as_deref()
            .unwrap_or("Submit");

        let vault_id = self.allocate_identifier(IdentifierScope::Vault)?;
        let request = vault_create_request(
            &credentials,
            &vault_id,
            self.settings.vault_create_postback_url.as_deref(),
        )?;
        let envelope = self.encrypt_request(&request)?;
        let envelope = forms::trim_xml(&envelope).unwrap_or(envelope.as_str());
        let options =
            FormOptions::new(return_url, button_text).with_action(&self.settings.payment_url);
        Ok(VaultForm {
            html: forms::html_form(envelope, &options),
            vault_id,
        })
    }

    pub fn vault_delete(&self, vault_guid: &str) -> Result<Reply> {
        let credentials = self.settings.credentials()?;
        let vault_id = self.allocate_identifier(IdentifierScope::Vault)?;
        self.submit(&vault_delete_request(&credentials, &vault_id, vault_guid)?)
    }

    pub fn vault_status_query(&self, vault_id: &str) -> Result<Reply> {
        let credentials = self.settings.credentials()?;
        self.submit(&vault_status_query_request(&credentials, vault_id)?)
    }

    pub fn transaction_status_query(&self, transaction_id: &str) -> Result<Reply> {
        let credentials = self.settings.credentials()?;
        self.submit(&transaction_status_query_request(&credentials, transaction_id)?)
    }

    pub fn auth_with_vault(&self, authorization: &VaultAuthorization) -> Result<Reply> {
        let credentials = self.settings.credentials()?;
        let transaction_id = self.allocate_identifier(IdentifierScope::Payment)?;
        self.submit(&auth_with_vault_request(
            &credentials,
            &transaction_id,
            authorization,
        )?)
    }

    pub fn void(&self, van_reference: &str) -> Result<Reply> {
        let credentials = self.settings.credentials()?;
        let transaction_id = self.allocate_identifier(IdentifierScope::Payment)?;
        self.submit(&void_request(&credentials, &transaction_id, van_reference)?)
    }

    /// Draws identifiers until the gateway reports one as not found.
    pub fn allocate_identifier(&self, scope: IdentifierScope) -> Result<String> {
        forms::allocate_identifier(|candidate| {
            let reply = match scope {
                IdentifierScope::Vault => self.vault_status_query(candidate)?,
                IdentifierScope::Payment => self.transaction_status_query(candidate)?,
            };
            let code = reply.document.text_at(scope.response_code_path())?;
            Ok(code.as_deref() == Some(NOT_FOUND_RESPONSE_CODE))
        })
    }

    /// Posts a request to the payment endpoint and parses the reply.
    pub fn submit(&self, request: &Node) -> Result<Reply> {
        let body = self.post(&self.settings.payment_url, &xml::to_xml_string(request)?)?;
        let text = forms::trim_xml(&body)
            .ok_or_else(|| SevdError::Transport("gateway response holds no XML".to_string()))?;
        let (document, diagnostics) = xml::read_node(&RESPONSE, text)?;
        Ok(Reply {
            document,
            diagnostics,
        })
    }

    fn post(&self, url: &str, request: &str) -> Result<String> {
        tracing::debug!(url, "posting to gateway");
        self.transport.post(url, &[("request", request)])
    }
}
