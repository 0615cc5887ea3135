//! Type model supplied by the host type checker.
//!
//! Only as much structure as the analyzer (and its messages) needs: basic
//! kinds, defined (named) types with their underlying representation, and the
//! composite constructors so that candidate types render faithfully.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primitive kinds, including the untyped kinds of constant expressions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BasicKind {
    Invalid,

    Bool,
    Int,
    Int8,
    Int16,
    Int32,
    Int64,
    Uint,
    Uint8,
    Uint16,
    Uint32,
    Uint64,
    Uintptr,
    Float32,
    Float64,
    Complex64,
    Complex128,
    String,
    UnsafePointer,

    UntypedBool,
    UntypedInt,
    UntypedRune,
    UntypedFloat,
    UntypedComplex,
    UntypedString,
    UntypedNil,
}

impl BasicKind {
    pub const fn is_untyped(self) -> bool {
        matches!(
            self,
            BasicKind::UntypedBool
                | BasicKind::UntypedInt
                | BasicKind::UntypedRune
                | BasicKind::UntypedFloat
                | BasicKind::UntypedComplex
                | BasicKind::UntypedString
                | BasicKind::UntypedNil
        )
    }

    pub const fn name(self) -> &'static str {
        match self {
            BasicKind::Invalid => "invalid type",
            BasicKind::Bool => "bool",
            BasicKind::Int => "int",
            BasicKind::Int8 => "int8",
            BasicKind::Int16 => "int16",
            BasicKind::Int32 => "int32",
            BasicKind::Int64 => "int64",
            BasicKind::Uint => "uint",
            BasicKind::Uint8 => "uint8",
            BasicKind::Uint16 => "uint16",
            BasicKind::Uint32 => "uint32",
            BasicKind::Uint64 => "uint64",
            BasicKind::Uintptr => "uintptr",
            BasicKind::Float32 => "float32",
            BasicKind::Float64 => "float64",
            BasicKind::Complex64 => "complex64",
            BasicKind::Complex128 => "complex128",
            BasicKind::String => "string",
            BasicKind::UnsafePointer => "unsafe.Pointer",
            BasicKind::UntypedBool => "untyped bool",
            BasicKind::UntypedInt => "untyped int",
            BasicKind::UntypedRune => "untyped rune",
            BasicKind::UntypedFloat => "untyped float",
            BasicKind::UntypedComplex => "untyped complex",
            BasicKind::UntypedString => "untyped string",
            BasicKind::UntypedNil => "untyped nil",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChanDir {
    Both,
    Send,
    Recv,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: Type,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Type {
    Basic(BasicKind),
    Named(NamedType),
    Pointer {
        elem: Box<Type>,
    },
    Slice {
        elem: Box<Type>,
    },
    Array {
        len: u64,
        elem: Box<Type>,
    },
    Map {
        key: Box<Type>,
        value: Box<Type>,
    },
    Chan {
        dir: ChanDir,
        elem: Box<Type>,
    },
    Struct {
        #[serde(default)]
        fields: Vec<Field>,
    },
    Signature {
        #[serde(default)]
        params: Vec<Type>,
        #[serde(default)]
        results: Vec<Type>,
        #[serde(default)]
        variadic: bool,
    },
    Interface {
        #[serde(default)]
        methods: Vec<String>,
    },
    Tuple(Vec<Type>),
}

/// A defined type: its own identity on top of an underlying representation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedType {
    pub name: String,
    /// Import path of the declaring package; empty for universe types.
    #[serde(default)]
    pub package: String,
    pub exported: bool,
    pub underlying: Box<Type>,
}

impl NamedType {
    /// Visibility follows the identifier: exported iff it starts upper-case.
    pub fn new(package: impl Into<String>, name: impl Into<String>, underlying: Type) -> Self {
        let name = name.into();
        let exported = name.chars().next().is_some_and(char::is_uppercase);
        NamedType {
            name,
            package: package.into(),
            exported,
            underlying: Box::new(underlying),
        }
    }

    /// `path/to/pkg.Name`, or just `Name` for universe types.
    pub fn qualified_name(&self) -> String {
        if self.package.is_empty() {
            self.name.clone()
        } else {
            format!("{}.{}", self.package, self.name)
        }
    }
}

impl Type {
    pub fn named(package: impl Into<String>, name: impl Into<String>, underlying: Type) -> Type {
        Type::Named(NamedType::new(package, name, underlying))
    }

    pub fn slice(elem: Type) -> Type {
        Type::Slice {
            elem: Box::new(elem),
        }
    }

    pub fn map(key: Type, value: Type) -> Type {
        Type::Map {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn chan(dir: ChanDir, elem: Type) -> Type {
        Type::Chan {
            dir,
            elem: Box::new(elem),
        }
    }

    /// Underlying representation; never a `Named`.
    pub fn underlying(&self) -> &Type {
        let mut ty = self;
        while let Type::Named(named) = ty {
            ty = &named.underlying;
        }
        ty
    }

    pub fn as_named(&self) -> Option<&NamedType> {
        match self {
            Type::Named(named) => Some(named),
            _ => None,
        }
    }

    pub const fn is_basic(&self) -> bool {
        matches!(self, Type::Basic(_))
    }

    /// True for the declared type of an untyped constant (`untyped int`, ...).
    pub const fn is_untyped(&self) -> bool {
        matches!(self, Type::Basic(kind) if kind.is_untyped())
    }
}

fn write_list(f: &mut fmt::Formatter<'_>, types: &[Type]) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{ty}")?;
    }
    Ok(())
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Basic(kind) => f.write_str(kind.name()),
            Type::Named(named) => f.write_str(&named.qualified_name()),
            Type::Pointer { elem } => write!(f, "*{elem}"),
            Type::Slice { elem } => write!(f, "[]{elem}"),
            Type::Array { len, elem } => write!(f, "[{len}]{elem}"),
            Type::Map { key, value } => write!(f, "map[{key}]{value}"),
            Type::Chan { dir, elem } => match dir {
                ChanDir::Both => write!(f, "chan {elem}"),
                ChanDir::Send => write!(f, "chan<- {elem}"),
                ChanDir::Recv => write!(f, "<-chan {elem}"),
            },
            Type::Struct { fields } => {
                f.write_str("struct{")?;
                for (i, field) in fields.iter().enumerate() {
                    if i > 0 {
                        f.write_str("; ")?;
                    }
                    write!(f, "{} {}", field.name, field.ty)?;
                }
                f.write_str("}")
            }
            Type::Signature {
                params,
                results,
                variadic,
            } => {
                f.write_str("func(")?;
                write_list(f, params)?;
                if *variadic {
                    f.write_str("...")?;
                }
                f.write_str(")")?;
                match results.as_slice() {
                    [] => Ok(()),
                    [single] => write!(f, " {single}"),
                    many => {
                        f.write_str(" (")?;
                        write_list(f, many)?;
                        f.write_str(")")
                    }
                }
            }
            Type::Interface { methods } => {
                if methods.is_empty() {
                    f.write_str("interface{}")
                } else {
                    write!(f, "interface{{{}}}", methods.join("; "))
                }
            }
            Type::Tuple(types) => {
                f.write_str("(")?;
                write_list(f, types)?;
                f.write_str(")")
            }
        }
    }
}

/// Value of a constant expression, as folded by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum ConstValue {
    Bool(bool),
    Int(i128),
    Float(f64),
    Complex { re: f64, im: f64 },
    String(String),
    /// Folded, but not representable here (e.g. a huge untyped integer).
    Unknown,
}

/// Type fact for one expression.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TypeAndValue {
    #[serde(rename = "type")]
    pub ty: Type,
    /// Present iff the expression is a constant expression.
    #[serde(default)]
    pub value: Option<ConstValue>,
}

impl TypeAndValue {
    pub fn constant(ty: Type, value: ConstValue) -> Self {
        TypeAndValue {
            ty,
            value: Some(value),
        }
    }

    pub fn value(ty: Type) -> Self {
        TypeAndValue { ty, value: None }
    }

    pub const fn is_constant(&self) -> bool {
        self.value.is_some()
    }
}

/// A package-level `const` declaration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ConstDecl {
    pub name: String,
    /// Declared type; an untyped basic kind for `const X = 1`.
    #[serde(rename = "type")]
    pub ty: Type,
    #[serde(default)]
    pub value: Option<ConstValue>,
}

/// What a call expression invokes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Callee {
    /// A declared function or method.
    Func {
        name: String,
        #[serde(default)]
        package: String,
        #[serde(default)]
        method: bool,
    },
    /// A predeclared function (`len`, `complex`, `real`, ...).
    Builtin { name: String },
    /// A function-typed variable, field or parameter.
    Var { name: String },
}

impl Callee {
    pub fn func(package: impl Into<String>, name: impl Into<String>) -> Callee {
        Callee::Func {
            name: name.into(),
            package: package.into(),
            method: false,
        }
    }

    pub fn builtin(name: impl Into<String>) -> Callee {
        Callee::Builtin { name: name.into() }
    }
}

#[cfg(test)]
#[path = "../tests/types_tests.rs"]
mod tests;
