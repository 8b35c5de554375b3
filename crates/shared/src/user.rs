use validator::Validate;

/// Sign-up and login form.
#[derive(Debug, Clone, Validate)]
pub struct Credentials {
    #[validate(length(min = 1, message = "Uniqname is required"))]
    pub uniqname: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

impl Credentials {
    pub fn new(uniqname: impl Into<String>, password: impl Into<String>) -> crate::Result<Self> {
        let credentials = Self {
            uniqname: uniqname.into().trim().to_owned(),
            password: password.into(),
        };

        credentials.validate()?;

        Ok(credentials)
    }
}
