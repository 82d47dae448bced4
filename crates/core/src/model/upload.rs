use thiserror::Error;

/// Largest document the service accepts.
pub const MAX_UPLOAD_BYTES: u64 = 50 * 1024 * 1024;

const PDF_MIME: &str = "application/pdf";
const DOCX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
const TEXT_MIME: &str = "text/plain";

/// Client-side upload rejections. Messages are user-facing and shown as-is.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum UploadError {
    #[error("Please select a PDF, DOCX, or TXT file.")]
    UnsupportedType,

    #[error("File size must be less than 50MB.")]
    TooLarge,
}

/// Document formats the quiz service can analyze.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DocumentKind {
    Pdf,
    Docx,
    PlainText,
}

impl DocumentKind {
    /// Resolve a declared MIME type against the allow-list.
    #[must_use]
    pub fn from_mime(mime: &str) -> Option<Self> {
        match mime {
            PDF_MIME => Some(Self::Pdf),
            DOCX_MIME => Some(Self::Docx),
            TEXT_MIME => Some(Self::PlainText),
            _ => None,
        }
    }

    /// Resolve from a file extension, the same mapping the service applies
    /// on its side (`pdf`, `docx`, `txt`).
    #[must_use]
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "docx" => Some(Self::Docx),
            "txt" => Some(Self::PlainText),
            _ => None,
        }
    }

    /// MIME type declared on upload.
    #[must_use]
    pub fn mime(self) -> &'static str {
        match self {
            Self::Pdf => PDF_MIME,
            Self::Docx => DOCX_MIME,
            Self::PlainText => TEXT_MIME,
        }
    }
}

/// Size check usable before a file's content is read.
///
/// # Errors
///
/// Returns `UploadError::TooLarge` past the 50 MB ceiling.
pub fn check_size(size: u64) -> Result<(), UploadError> {
    if size > MAX_UPLOAD_BYTES {
        return Err(UploadError::TooLarge);
    }
    Ok(())
}

/// A validated document ready to upload.
///
/// Construction enforces the client-side checks, so an invalid file never
/// reaches the network layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentUpload {
    file_name: String,
    kind: DocumentKind,
    bytes: Vec<u8>,
}

impl DocumentUpload {
    /// Validate the declared MIME type and size, then take ownership of the
    /// content.
    ///
    /// # Errors
    ///
    /// Returns `UploadError::UnsupportedType` for MIME types outside the
    /// allow-list and `UploadError::TooLarge` past the size ceiling.
    pub fn new(
        file_name: impl Into<String>,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<Self, UploadError> {
        let kind = DocumentKind::from_mime(mime).ok_or(UploadError::UnsupportedType)?;
        check_size(bytes.len() as u64)?;

        Ok(Self {
            file_name: file_name.into(),
            kind,
            bytes,
        })
    }

    #[must_use]
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    #[must_use]
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }

    #[must_use]
    pub fn mime(&self) -> &'static str {
        self.kind.mime()
    }

    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }
}
