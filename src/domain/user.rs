/// Profile of a verified user, as reported by the credential store.
#[derive(PartialEq, Debug, Clone)]
pub struct UserProfile {
    pub display_name: String,
    pub admin: bool,
}

impl UserProfile {
    pub fn new(display_name: impl Into<String>, admin: bool) -> Self {
        UserProfile {
            display_name: display_name.into(),
            admin,
        }
    }
}
