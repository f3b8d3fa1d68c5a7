/// Checks a loaded or about-to-be-saved value. The error is a human-readable reason.
pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}
