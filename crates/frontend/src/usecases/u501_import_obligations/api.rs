use contracts::shared::api_error::ApiError;
use web_sys::{File, FormData};

use crate::shared::api_utils::post_multipart;

/// Sends the workbook as multipart field `file`. No MIME check on our side.
pub async fn upload_workbook(file: &File) -> Result<(), ApiError> {
    let form = FormData::new().map_err(|_| ApiError::Encode("FormData".to_string()))?;
    form.append_with_blob_and_filename("file", file, &file.name())
        .map_err(|_| ApiError::Encode("file".to_string()))?;
    post_multipart("/api/obligaciones/upload", form).await
}
