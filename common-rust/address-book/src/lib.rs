pub mod common;
pub mod error;
pub mod handler;
pub mod logger;
pub mod model;
pub mod response;
pub mod service;
pub mod store;
pub mod validation;

pub use error::{AddressError, StoreError, ValidationError};
pub use handler::AddressHandler;
pub use model::{AddressPatch, AddressSummary, DeliveryAddress, NewDeliveryAddress};
pub use response::{AckResponse, AddressListResponse, AddressResponse};
pub use service::AddressService;
pub use store::{AddressStore, InMemoryAddressStore};
