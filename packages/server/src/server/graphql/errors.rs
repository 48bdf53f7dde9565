use juniper::{FieldError, Object, Value};

use crate::common::DomainError;

/// Convert a domain error into a field error carrying `extensions.code`.
///
/// Use this instead of `?` on a `DomainError`: the blanket `From<Display>`
/// conversion would drop the code.
pub fn field_error(error: DomainError) -> FieldError {
    let mut extensions = Object::with_capacity(1);
    extensions.add_field("code", Value::scalar(error.code().to_string()));
    FieldError::new(error.to_string(), Value::Object(extensions))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_extension() {
        let error = field_error(DomainError::MissingField("title"));

        assert_eq!(error.message(), "Please provide a title first");
        let code = error
            .extensions()
            .as_object_value()
            .and_then(|o| o.get_field_value("code"))
            .and_then(|v| v.as_string_value());
        assert_eq!(code, Some("VALIDATION"));
    }
}
