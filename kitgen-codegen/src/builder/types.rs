//! Language-agnostic type system for code generation.
//!
//! Types are represented semantically and rendered per target language
//! via the [`TypeMapper`] trait.

/// A language-agnostic type reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeRef {
    /// A primitive type (string, int, bool, error, etc.).
    Primitive(PrimitiveType),
    /// A type declared in the same unit.
    Named(String),
    /// A type declared elsewhere, resolved through an import path.
    Qualified {
        /// Import path of the declaring package (e.g., "context").
        path: String,
        /// Type name inside that package (e.g., "Context").
        name: String,
    },
    /// A pointer/reference to another type.
    Pointer(Box<TypeRef>),
    /// A sequence/slice of another type.
    Slice(Box<TypeRef>),
}

impl TypeRef {
    /// Create a primitive type reference.
    pub fn primitive(ty: PrimitiveType) -> Self {
        Self::Primitive(ty)
    }

    /// Create a local named type reference.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Create a qualified external type reference.
    pub fn qualified(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self::Qualified {
            path: path.into(),
            name: name.into(),
        }
    }

    /// Create a pointer type.
    pub fn pointer(inner: TypeRef) -> Self {
        Self::Pointer(Box::new(inner))
    }

    /// Create a slice type.
    pub fn slice(inner: TypeRef) -> Self {
        Self::Slice(Box::new(inner))
    }

    /// Convenience: string type.
    pub fn string() -> Self {
        Self::Primitive(PrimitiveType::String)
    }

    /// Convenience: error type.
    pub fn error() -> Self {
        Self::Primitive(PrimitiveType::Error)
    }

    /// Get the `(path, name)` of the qualified type at the core of this reference.
    pub fn qualification(&self) -> Option<(&str, &str)> {
        match self {
            Self::Qualified { path, name } => Some((path, name)),
            Self::Pointer(inner) | Self::Slice(inner) => inner.qualification(),
            _ => None,
        }
    }
}

/// Primitive types supported across languages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    /// String type (Go: string).
    String,
    /// Signed integer (Go: int).
    Int,
    /// Float type (Go: float64).
    Float,
    /// Boolean type (Go: bool).
    Bool,
    /// Byte type (Go: byte).
    Byte,
    /// The error interface (Go: error).
    Error,
}

/// Trait for mapping types to language-specific representations.
pub trait TypeMapper {
    /// Map a primitive type to the target language.
    fn map_primitive(&self, ty: PrimitiveType) -> String;

    /// Map a qualified reference (e.g., `entity.Order`).
    fn map_qualified(&self, path: &str, name: &str) -> String;

    /// Map a pointer type (e.g., `*T`).
    fn map_pointer(&self, inner: &str) -> String;

    /// Map a slice type (e.g., `[]T`).
    fn map_slice(&self, inner: &str) -> String;

    /// Render a complete TypeRef to a string.
    fn render_type(&self, ty: &TypeRef) -> String {
        match ty {
            TypeRef::Primitive(p) => self.map_primitive(*p),
            TypeRef::Named(name) => name.clone(),
            TypeRef::Qualified { path, name } => self.map_qualified(path, name),
            TypeRef::Pointer(inner) => {
                let inner_str = self.render_type(inner);
                self.map_pointer(&inner_str)
            }
            TypeRef::Slice(inner) => {
                let inner_str = self.render_type(inner);
                self.map_slice(&inner_str)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_ref_constructors() {
        assert_eq!(TypeRef::string(), TypeRef::Primitive(PrimitiveType::String));

        let ptr = TypeRef::pointer(TypeRef::named("Order"));
        assert_eq!(ptr, TypeRef::Pointer(Box::new(TypeRef::Named("Order".to_string()))));

        let slice = TypeRef::slice(TypeRef::string());
        assert!(matches!(slice, TypeRef::Slice(_)));
    }

    #[test]
    fn test_qualification_sees_through_wrappers() {
        let ty = TypeRef::slice(TypeRef::pointer(TypeRef::qualified(
            "github.com/acme/shop/entity",
            "Order",
        )));
        assert_eq!(
            ty.qualification(),
            Some(("github.com/acme/shop/entity", "Order"))
        );
        assert_eq!(TypeRef::string().qualification(), None);
    }

    #[test]
    fn test_render_type_with_mapper() {
        struct Angle;
        impl TypeMapper for Angle {
            fn map_primitive(&self, ty: PrimitiveType) -> String {
                format!("{:?}", ty)
            }
            fn map_qualified(&self, path: &str, name: &str) -> String {
                format!("{}::{}", path, name)
            }
            fn map_pointer(&self, inner: &str) -> String {
                format!("Ptr<{}>", inner)
            }
            fn map_slice(&self, inner: &str) -> String {
                format!("List<{}>", inner)
            }
        }

        let ty = TypeRef::slice(TypeRef::pointer(TypeRef::qualified("shop", "Order")));
        assert_eq!(Angle.render_type(&ty), "List<Ptr<shop::Order>>");
    }
}
