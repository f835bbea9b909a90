use crate::{Error, Result};

/// A file the user submitted through the form: buffered bytes plus the
/// declared content type.
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub data: Vec<u8>,
    pub mime_type: String,
    pub file_name: Option<String>,
}

/// Transport payload handed to the inference backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImagePart {
    pub mime_type: String,
    pub data: Vec<u8>,
}

/// Prepares an uploaded file for the inference request.
///
/// Identity transformation: bytes and MIME type pass through unchanged.
/// Zero-length content is structurally valid here; rejecting semantically
/// empty images is the backend's job. A missing upload is `MissingInput`
/// and the caller must not proceed to inference.
pub fn normalize(upload: Option<UploadedImage>) -> Result<ImagePart> {
    match upload {
        Some(upload) => Ok(ImagePart {
            mime_type: upload.mime_type,
            data: upload.data,
        }),
        None => Err(Error::MissingInput),
    }
}
