use crate::common::{
    MESSAGE_ADDRESS_NOT_FOUND, MESSAGE_DEFAULT_NOT_FOUND, MESSAGE_INTERNAL_ERROR,
    MESSAGE_INVALID_COORDINATES, MESSAGE_INVALID_MOBILE, MESSAGE_MISSING_FIELDS,
    STATUS_BAD_REQUEST, STATUS_INTERNAL_ERROR, STATUS_NOT_FOUND,
};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("missing required fields: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
    #[error("recipientMobile {0:?} may only contain digits, '+', '-', spaces and parentheses")]
    InvalidMobile(String),
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
}

impl ValidationError {
    pub fn message(&self) -> &'static str {
        match self {
            ValidationError::MissingFields(_) => MESSAGE_MISSING_FIELDS,
            ValidationError::InvalidMobile(_) => MESSAGE_INVALID_MOBILE,
            ValidationError::LatitudeOutOfRange(_) | ValidationError::LongitudeOutOfRange(_) => {
                MESSAGE_INVALID_COORDINATES
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("address {address_id} not found for customer {customer_id}")]
    NotFound {
        customer_id: String,
        address_id: String,
    },
    #[error("address store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AddressError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("address {0} not found")]
    NotFound(String),
    #[error("customer has no default address")]
    NoDefault,
    #[error("storage failure: {0}")]
    Storage(String),
}

impl From<StoreError> for AddressError {
    fn from(value: StoreError) -> Self {
        match value {
            StoreError::NotFound { address_id, .. } => AddressError::NotFound(address_id),
            StoreError::Unavailable(reason) => AddressError::Storage(reason),
        }
    }
}

impl AddressError {
    pub fn status(&self) -> u16 {
        match self {
            AddressError::Validation(_) => STATUS_BAD_REQUEST,
            AddressError::NotFound(_) | AddressError::NoDefault => STATUS_NOT_FOUND,
            AddressError::Storage(_) => STATUS_INTERNAL_ERROR,
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            AddressError::Validation(e) => e.message(),
            AddressError::NotFound(_) => MESSAGE_ADDRESS_NOT_FOUND,
            AddressError::NoDefault => MESSAGE_DEFAULT_NOT_FOUND,
            AddressError::Storage(_) => MESSAGE_INTERNAL_ERROR,
        }
    }

    /// Diagnostic detail safe to hand back to the caller. Storage failures
    /// stay server-side.
    pub fn detail(&self) -> Option<String> {
        match self {
            AddressError::Validation(e) => Some(e.to_string()),
            AddressError::NotFound(_) | AddressError::NoDefault => Some(self.to_string()),
            AddressError::Storage(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_are_listed() {
        let e = ValidationError::MissingFields(vec!["recipientName", "zipCode"]);
        assert_eq!(e.to_string(), "missing required fields: recipientName, zipCode");
    }

    #[test]
    fn store_not_found_hides_customer() {
        let e: AddressError = StoreError::NotFound {
            customer_id: "c1".to_string(),
            address_id: "a1".to_string(),
        }
        .into();

        assert_eq!(e, AddressError::NotFound("a1".to_string()));
        assert_eq!(e.status(), STATUS_NOT_FOUND);
        assert_eq!(e.detail().as_deref(), Some("address a1 not found"));
    }

    #[test]
    fn storage_detail_is_not_exposed() {
        let e: AddressError = StoreError::Unavailable("connection reset".to_string()).into();
        assert_eq!(e.status(), STATUS_INTERNAL_ERROR);
        assert_eq!(e.message(), MESSAGE_INTERNAL_ERROR);
        assert_eq!(e.detail(), None);
    }
}
