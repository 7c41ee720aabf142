use super::*;

/// One entry of the contact book.
///
/// The field names and shape are the persisted layout: a flat object with a
/// string `id`, string `name` and `phone`, and a nullable `image`.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq, Clone)]
pub struct Contact {
    pub id: String,
    pub name: String,
    pub phone: String,

    // Older payloads may omit the field entirely.
    #[serde(default)]
    pub image: Option<String>,
}

pub struct ValidationReq;

impl ValidationReq {
    pub fn name_req() -> String {
        "Name must not be empty".to_string()
    }

    pub fn phone_req() -> String {
        "Phone number must not be empty".to_string()
    }
}

impl Contact {
    pub fn new(id: String, name: String, phone: String, image: Option<String>) -> Self {
        Contact {
            id,
            name,
            phone,
            image: normalize_image(image),
        }
    }

    pub fn validate_name(&self) -> bool {
        !self.name.trim().is_empty()
    }

    pub fn validate_number(&self) -> bool {
        !self.phone.trim().is_empty()
    }

    /// Checks the fields every committed contact must carry.
    pub fn validate(&self) -> Result<(), AppError> {
        if !self.validate_name() {
            return Err(AppError::Validation(ValidationReq::name_req()));
        }

        if !self.validate_number() {
            return Err(AppError::Validation(ValidationReq::phone_req()));
        }

        Ok(())
    }

    /// Stored data may carry a blank image string; that counts as none.
    pub fn has_image(&self) -> bool {
        self.image
            .as_deref()
            .is_some_and(|uri| !uri.trim().is_empty())
    }
}

/// An empty image reference means the same as no image at all.
pub fn normalize_image(image: Option<String>) -> Option<String> {
    image.filter(|uri| !uri.trim().is_empty())
}

pub fn new_contact_id() -> String {
    Uuid::new_v4().to_string()
}
