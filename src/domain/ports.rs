use crate::error::Result;

/// Delivers a form-encoded POST to the gateway and returns the response body.
///
/// The body is returned undecoded apart from UTF-8; callers trim and parse it.
pub trait Transport {
    fn post(&self, url: &str, fields: &[(&str, &str)]) -> Result<String>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn post(&self, url: &str, fields: &[(&str, &str)]) -> Result<String> {
        (**self).post(url, fields)
    }
}
