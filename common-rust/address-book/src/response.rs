use crate::common::STATUS_OK;
use crate::error::AddressError;
use crate::model::AddressSummary;
use serde::{Deserialize, Serialize};

/// Failure half of every response envelope.
#[derive(Clone, Debug, PartialEq)]
pub struct Failure {
    pub status: u16,
    pub message: String,
    pub error: Option<String>,
}

impl From<&AddressError> for Failure {
    fn from(value: &AddressError) -> Self {
        Self {
            status: value.status(),
            message: value.message().to_string(),
            error: value.detail(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "golem", derive(golem_rust::Schema))]
#[serde(rename_all = "camelCase")]
pub struct AddressResponse {
    pub success: bool,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<AddressSummary>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AddressResponse {
    pub fn ok(status: u16, data: AddressSummary) -> Self {
        Self {
            success: true,
            status,
            data: Some(data),
            message: None,
            error: None,
        }
    }

    pub fn failed(failure: Failure) -> Self {
        Self {
            success: false,
            status: failure.status,
            data: None,
            message: Some(failure.message),
            error: failure.error,
        }
    }

    pub fn from_result(status: u16, result: Result<AddressSummary, AddressError>) -> Self {
        match result {
            Ok(data) => Self::ok(status, data),
            Err(e) => Self::failed(Failure::from(&e)),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "golem", derive(golem_rust::Schema))]
#[serde(rename_all = "camelCase")]
pub struct AddressListResponse {
    pub success: bool,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<AddressSummary>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl From<Result<Vec<AddressSummary>, AddressError>> for AddressListResponse {
    fn from(value: Result<Vec<AddressSummary>, AddressError>) -> Self {
        match value {
            Ok(data) => Self {
                success: true,
                status: STATUS_OK,
                data: Some(data),
                message: None,
                error: None,
            },
            Err(e) => {
                let failure = Failure::from(&e);
                Self {
                    success: false,
                    status: failure.status,
                    data: None,
                    message: Some(failure.message),
                    error: failure.error,
                }
            }
        }
    }
}

/// Acknowledgement without payload.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "golem", derive(golem_rust::Schema))]
#[serde(rename_all = "camelCase")]
pub struct AckResponse {
    pub success: bool,
    pub status: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AckResponse {
    pub fn from_result(message: &str, result: Result<(), AddressError>) -> Self {
        match result {
            Ok(()) => Self {
                success: true,
                status: STATUS_OK,
                message: Some(message.to_string()),
                error: None,
            },
            Err(e) => {
                let failure = Failure::from(&e);
                Self {
                    success: false,
                    status: failure.status,
                    message: Some(failure.message),
                    error: failure.error,
                }
            }
        }
    }
}

impl From<Result<AddressSummary, AddressError>> for AddressResponse {
    fn from(value: Result<AddressSummary, AddressError>) -> Self {
        Self::from_result(STATUS_OK, value)
    }
}
