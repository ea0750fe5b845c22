use thiserror::Error;

/// Caller-side rejections. The `Display` text is what the user is shown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("User not found. Please sign up first.")]
    UserNotFound,

    #[error("Email already registered. Please login.")]
    EmailTaken,

    #[error("Please enter your email.")]
    EmailRequired,

    #[error("Please enter your name.")]
    NameRequired,

    #[error("Please enter your ward number.")]
    WardRequired,

    /// Blank required report fields, by form field name.
    #[error("Please fill in all required fields")]
    MissingFields(Vec<&'static str>),

    #[error("Please log in first.")]
    NotAuthenticated,

    #[error("Only ward councillors can do this.")]
    NotCouncillor,

    #[error("This issue belongs to ward {ward}.")]
    WrongWard { ward: String },

    #[error("Problem not found: {0}")]
    ProblemNotFound(String),
}

pub type Result<T> = std::result::Result<T, Error>;
