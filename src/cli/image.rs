use crate::errors::AppError;
use std::path::Path;
use url::Url;

const URI_SCHEMES: [&str; 4] = ["http", "https", "file", "content"];
const IMAGE_EXTENSIONS: [&str; 7] = ["png", "jpg", "jpeg", "gif", "webp", "heic", "bmp"];

/// Turns user input into the opaque image reference stored on a contact.
///
/// Input that already is a URI with a known scheme is kept as given. Anything
/// else is read as a local path to an image file and returned as a `file://`
/// URI of its canonical location.
pub fn acquire_image(input: &str) -> Result<String, AppError> {
    let input = input.trim();

    if let Ok(uri) = Url::parse(input)
        && URI_SCHEMES.contains(&uri.scheme())
    {
        return Ok(input.to_string());
    }

    let path = Path::new(input);
    if !path.is_file() {
        return Err(AppError::Validation(format!(
            "Image file '{}' does not exist",
            input
        )));
    }

    let is_image = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()));
    if !is_image {
        return Err(AppError::Validation(format!(
            "'{}' is not an image, expected one of: {}",
            input,
            IMAGE_EXTENSIONS.join(", ")
        )));
    }

    let canonical = path.canonicalize()?;
    let uri = Url::from_file_path(&canonical).map_err(|_| {
        AppError::Validation(format!("Could not build a URI for '{}'", input))
    })?;

    Ok(uri.to_string())
}
