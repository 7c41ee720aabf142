use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    NotFound(String),
    Persistence(String),
    Validation(String),
}

impl AppError {
    /// True for every failure of the durable slot or of the codec
    /// sitting in front of it.
    pub fn is_persistence(&self) -> bool {
        matches!(
            self,
            AppError::Io(_) | AppError::Json(_) | AppError::Persistence(_)
        )
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing contact storage: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Stored contacts could not be parsed: {}", e)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::Persistence(msg) => {
                write!(f, "Persistence failed: {}", msg)
            }
            AppError::Validation(msg) => {
                write!(f, "Validation failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {}
