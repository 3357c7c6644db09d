//! Naming conventions for different programming languages.

use crate::SignatureError;

/// Language-specific naming conventions.
///
/// Defines how to derive type, variable and directory names from a free-form
/// input name, and which identifiers the language reserves.
#[derive(Debug, Clone, Copy)]
pub struct NamingConvention {
    /// Transform an input name to a type name (e.g., "order_item" -> "OrderItem")
    pub type_case: fn(&str) -> String,
    /// Transform an input name to a variable name (e.g., "order_item" -> "orderItem")
    pub var_case: fn(&str) -> String,
    /// Transform an input name to a directory name (e.g., "OrderItem" -> "order_item")
    pub dir_case: fn(&str) -> String,
    /// List of reserved words in the language
    pub reserved_words: &'static [&'static str],
}

impl NamingConvention {
    /// Check if a name is a reserved word.
    pub fn is_reserved(&self, name: &str) -> bool {
        self.reserved_words.contains(&name)
    }

    /// Check if a name is a syntactically valid identifier.
    ///
    /// Letters, digits and underscores, not starting with a digit.
    pub fn is_valid_identifier(&self, name: &str) -> bool {
        let mut chars = name.chars();
        match chars.next() {
            Some(c) if c.is_alphabetic() || c == '_' => {
                chars.all(|c| c.is_alphanumeric() || c == '_')
            }
            _ => false,
        }
    }

    /// Validate an identifier used in `context`.
    pub fn check_identifier(&self, name: &str, context: &str) -> Result<(), SignatureError> {
        if !self.is_valid_identifier(name) {
            return Err(SignatureError::InvalidIdentifier {
                name: name.to_string(),
                context: context.to_string(),
            });
        }
        if self.is_reserved(name) {
            return Err(SignatureError::ReservedWord {
                name: name.to_string(),
                context: context.to_string(),
            });
        }
        Ok(())
    }

    /// Transform for use as a type name.
    pub fn type_name(&self, name: &str) -> String {
        (self.type_case)(name)
    }

    /// Transform for use as a variable name.
    pub fn var_name(&self, name: &str) -> String {
        (self.var_case)(name)
    }

    /// Transform for use as a directory name.
    pub fn dir_name(&self, name: &str) -> String {
        (self.dir_case)(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn upper(s: &str) -> String {
        s.to_uppercase()
    }

    fn lower(s: &str) -> String {
        s.to_lowercase()
    }

    const NAMING: NamingConvention = NamingConvention {
        type_case: upper,
        var_case: lower,
        dir_case: lower,
        reserved_words: &["func"],
    };

    #[test]
    fn test_transforms() {
        assert_eq!(NAMING.type_name("Order"), "ORDER");
        assert_eq!(NAMING.var_name("Order"), "order");
        assert_eq!(NAMING.dir_name("Order"), "order");
    }

    #[test]
    fn test_is_valid_identifier() {
        assert!(NAMING.is_valid_identifier("order"));
        assert!(NAMING.is_valid_identifier("_x1"));
        assert!(!NAMING.is_valid_identifier("1x"));
        assert!(!NAMING.is_valid_identifier("order-item"));
        assert!(!NAMING.is_valid_identifier(""));
    }

    #[test]
    fn test_check_identifier() {
        assert!(NAMING.check_identifier("order", "test").is_ok());
        assert!(matches!(
            NAMING.check_identifier("func", "test"),
            Err(SignatureError::ReservedWord { .. })
        ));
        assert!(matches!(
            NAMING.check_identifier("a b", "test"),
            Err(SignatureError::InvalidIdentifier { .. })
        ));
    }
}
