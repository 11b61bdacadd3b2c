pub trait Validate {
    fn validate(&self) -> Result<(), String>;
}

/// `Err(message)` unless `condition` holds.
pub fn ensure(condition: bool, message: &str) -> Result<(), String> {
    if condition {
        Ok(())
    } else {
        Err(message.to_string())
    }
}
