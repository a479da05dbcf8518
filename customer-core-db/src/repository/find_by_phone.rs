use uuid::Uuid;

use crate::models::customer::CustomerModel;

/// Finds a record whose phone equals `phone` exactly.
///
/// `exclude` leaves one record out of the scan, so a record being edited
/// never collides with itself.
pub fn find_phone_collision<'a>(
    records: &'a [CustomerModel],
    phone: &str,
    exclude: Option<Uuid>,
) -> Option<&'a CustomerModel> {
    records
        .iter()
        .filter(|r| Some(r.id) != exclude)
        .find(|r| r.phone.as_str() == phone)
}
