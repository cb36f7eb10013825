//! Upload rules: accepted content types, size limit, folder names, and
//! object-key construction.

use uuid::Uuid;

use crate::error::CoreError;

/// Default maximum upload size (10 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Folder used when the client does not name one.
pub const DEFAULT_FOLDER: &str = "uploads";

/// Maximum folder name length.
const MAX_FOLDER_LEN: usize = 64;

/// Accepted content types and the file extension stored for each.
const ALLOWED_TYPES: &[(&str, &str)] = &[
    ("image/jpeg", "jpg"),
    ("image/png", "png"),
    ("image/webp", "webp"),
    ("image/gif", "gif"),
    ("image/svg+xml", "svg"),
    ("application/pdf", "pdf"),
    ("video/mp4", "mp4"),
];

/// Resolve the content type of an upload.
///
/// The declared multipart content type wins when it is on the allow-list;
/// otherwise the filename extension is consulted, so browsers that send
/// `application/octet-stream` still work.
pub fn resolve_content_type(
    declared: Option<&str>,
    filename: &str,
) -> Result<&'static str, CoreError> {
    if let Some(declared) = declared {
        let declared = declared.split(';').next().unwrap_or("").trim().to_ascii_lowercase();
        if let Some((ct, _)) = ALLOWED_TYPES.iter().find(|(ct, _)| *ct == declared) {
            return Ok(*ct);
        }
    }

    let ext = extension_of(filename);
    let ext = if ext == "jpeg" { "jpg".to_string() } else { ext };
    ALLOWED_TYPES
        .iter()
        .find(|(_, e)| *e == ext)
        .map(|(ct, _)| *ct)
        .ok_or_else(|| {
            CoreError::Validation(format!(
                "Unsupported file type for '{filename}'. Allowed: jpg, png, webp, gif, svg, pdf, mp4"
            ))
        })
}

/// The stored extension for an accepted content type.
pub fn extension_for(content_type: &str) -> Option<&'static str> {
    ALLOWED_TYPES
        .iter()
        .find(|(ct, _)| *ct == content_type)
        .map(|(_, ext)| *ext)
}

/// Reject empty uploads and uploads over `max_bytes`.
pub fn validate_size(size: usize, max_bytes: usize) -> Result<(), CoreError> {
    if size == 0 {
        return Err(CoreError::Validation("Uploaded file is empty".into()));
    }
    if size > max_bytes {
        return Err(CoreError::Validation(format!(
            "File is {size} bytes; the limit is {max_bytes} bytes"
        )));
    }
    Ok(())
}

/// Validate a folder name: lowercase alphanumerics, `-` and `_`, at most 64 chars.
pub fn validate_folder(folder: &str) -> Result<(), CoreError> {
    let ok = !folder.is_empty()
        && folder.len() <= MAX_FOLDER_LEN
        && folder
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');
    if !ok {
        return Err(CoreError::Validation(format!(
            "Invalid folder '{folder}': use lowercase letters, digits, '-' or '_' (max {MAX_FOLDER_LEN})"
        )));
    }
    Ok(())
}

/// Build a collision-free object key: `{folder}/{uuid}.{ext}`.
pub fn build_object_key(folder: &str, content_type: &str) -> Result<String, CoreError> {
    validate_folder(folder)?;
    let ext = extension_for(content_type).ok_or_else(|| {
        CoreError::Validation(format!("Unsupported content type '{content_type}'"))
    })?;
    Ok(format!("{folder}/{}.{ext}", Uuid::new_v4()))
}

/// Validate an object key supplied by a client (e.g. for deletion).
///
/// Keys look like `folder/name.ext`; traversal segments and absolute paths
/// are rejected.
pub fn validate_object_key(key: &str) -> Result<(), CoreError> {
    let bad = key.is_empty()
        || key.starts_with('/')
        || key.contains('\\')
        || key.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..");
    if bad {
        return Err(CoreError::Validation(format!("Invalid object key '{key}'")));
    }
    Ok(())
}

fn extension_of(filename: &str) -> String {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .unwrap_or_default()
}
