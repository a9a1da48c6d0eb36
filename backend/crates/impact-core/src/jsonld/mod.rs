//! JSON-LD submission envelope and its structural validation.

pub mod envelope;
pub mod validator;
