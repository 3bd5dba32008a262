use regex::Regex;
use std::ops::RangeInclusive;
use std::sync::LazyLock;

pub const MOBILE_PATTERN: &str = r"^[0-9+\-() ]+$";
pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

pub const STATUS_OK: u16 = 200;
pub const STATUS_CREATED: u16 = 201;
pub const STATUS_BAD_REQUEST: u16 = 400;
pub const STATUS_NOT_FOUND: u16 = 404;
pub const STATUS_INTERNAL_ERROR: u16 = 500;

pub const MESSAGE_ADDRESS_DELETED: &str = "Address deleted successfully";
pub const MESSAGE_ADDRESS_NOT_FOUND: &str = "Address not found";
pub const MESSAGE_DEFAULT_NOT_FOUND: &str = "No default address found";
pub const MESSAGE_MISSING_FIELDS: &str = "Missing required fields";
pub const MESSAGE_INVALID_MOBILE: &str = "Invalid mobile number format";
pub const MESSAGE_INVALID_COORDINATES: &str = "Invalid coordinates";
pub const MESSAGE_INTERNAL_ERROR: &str = "Internal server error";

static MOBILE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(MOBILE_PATTERN).expect("mobile pattern is a valid regex"));

pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_REGEX.is_match(mobile)
}
