use crate::common::{MESSAGE_ADDRESS_DELETED, STATUS_CREATED};
use crate::model::{AddressPatch, NewDeliveryAddress};
use crate::response::{AckResponse, AddressListResponse, AddressResponse};
use crate::service::AddressService;
use crate::store::AddressStore;

/// One entry point per service operation, each producing the response
/// envelope handed to the transport.
pub struct AddressHandler<'a, S: AddressStore + ?Sized> {
    service: AddressService<'a, S>,
}

impl<'a, S: AddressStore + ?Sized> AddressHandler<'a, S> {
    pub fn new(store: &'a S, customer_id: &'a str) -> Self {
        Self {
            service: AddressService::new(store, customer_id),
        }
    }

    pub fn list(&self) -> AddressListResponse {
        self.service.list().into()
    }

    pub fn get(&self, address_id: &str) -> AddressResponse {
        self.service.get(address_id).into()
    }

    pub fn get_default(&self) -> AddressResponse {
        self.service.get_default().into()
    }

    pub fn add(&self, request: NewDeliveryAddress) -> AddressResponse {
        AddressResponse::from_result(STATUS_CREATED, self.service.add(request))
    }

    pub fn update(&self, address_id: &str, patch: AddressPatch) -> AddressResponse {
        self.service.update(address_id, patch).into()
    }

    pub fn delete(&self, address_id: &str) -> AckResponse {
        AckResponse::from_result(MESSAGE_ADDRESS_DELETED, self.service.delete(address_id))
    }

    pub fn set_default(&self, address_id: &str) -> AddressResponse {
        self.service.set_default(address_id).into()
    }
}
