use contracts::domain::a005_contact::Contact;
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

/// Contacts of a client; finalization notices go to one of them.
pub async fn fetch_client_contacts(client_id: i64) -> Result<Vec<Contact>, ApiError> {
    get_json(&format!("/api/contactos/cliente/{}", client_id)).await
}
