use crate::common::{is_valid_mobile, LATITUDE_RANGE, LONGITUDE_RANGE};
use crate::error::ValidationError;
use crate::model::{AddressFields, AddressPatch, NewDeliveryAddress};

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

fn check_mobile(mobile: &str) -> Result<(), ValidationError> {
    if is_valid_mobile(mobile) {
        Ok(())
    } else {
        Err(ValidationError::InvalidMobile(mobile.to_string()))
    }
}

fn check_coordinates(latitude: Option<f64>, longitude: Option<f64>) -> Result<(), ValidationError> {
    if let Some(lat) = latitude.filter(|v| !LATITUDE_RANGE.contains(v)) {
        return Err(ValidationError::LatitudeOutOfRange(lat));
    }
    if let Some(lng) = longitude.filter(|v| !LONGITUDE_RANGE.contains(v)) {
        return Err(ValidationError::LongitudeOutOfRange(lng));
    }
    Ok(())
}

/// Checks an add request and returns its trimmed fields.
pub fn validate_new(request: &NewDeliveryAddress) -> Result<AddressFields, ValidationError> {
    let required = [
        ("recipientName", present(&request.recipient_name)),
        ("recipientMobile", present(&request.recipient_mobile)),
        ("street", present(&request.street)),
        ("barangay", present(&request.barangay)),
        ("municipality", present(&request.municipality)),
        ("province", present(&request.province)),
        ("zipCode", present(&request.zip_code)),
    ];

    let missing: Vec<&'static str> = required
        .iter()
        .filter(|(_, value)| value.is_none())
        .map(|(name, _)| *name)
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let [name, mobile, street, barangay, municipality, province, zip_code] =
        required.map(|(_, value)| value.unwrap_or_default().to_string());

    check_mobile(&mobile)?;
    check_coordinates(request.latitude, request.longitude)?;

    Ok(AddressFields {
        recipient_name: name,
        recipient_mobile: mobile,
        street,
        barangay,
        municipality,
        province,
        zip_code,
        latitude: request.latitude,
        longitude: request.longitude,
    })
}

/// Checks the supplied fields of a partial update. A field sent as blank is
/// reported missing since it would clear a required value.
pub fn validate_patch(patch: &AddressPatch) -> Result<(), ValidationError> {
    let supplied = [
        ("recipientName", &patch.recipient_name),
        ("recipientMobile", &patch.recipient_mobile),
        ("street", &patch.street),
        ("barangay", &patch.barangay),
        ("municipality", &patch.municipality),
        ("province", &patch.province),
        ("zipCode", &patch.zip_code),
    ];

    let blank: Vec<&'static str> = supplied
        .iter()
        .filter(|(_, value)| value.is_some() && present(value).is_none())
        .map(|(name, _)| *name)
        .collect();

    if !blank.is_empty() {
        return Err(ValidationError::MissingFields(blank));
    }

    if let Some(mobile) = present(&patch.recipient_mobile) {
        check_mobile(mobile)?;
    }

    check_coordinates(patch.latitude, patch.longitude)
}
