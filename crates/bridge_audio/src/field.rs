//! Declared module fields.

use std::fmt;

/// How a Control field is presented to adjustment tooling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u32)]
pub enum ControlKind {
    #[default]
    Literal = 0,
    Knob = 1,
    Slider = 2,
}

/// The role a field plays in the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    /// Written by an upstream module or the host before the update routine.
    Input,
    /// Computed by the update routine.
    Output,
    /// A tunable scalar read by the update routine.
    Control(ControlKind),
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRole::Input => f.write_str("input"),
            FieldRole::Output => f.write_str("output"),
            FieldRole::Control(kind) => write!(f, "control ({kind:?})"),
        }
    }
}

/// A statically declared field of a module type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: &'static str,
    pub role: FieldRole,
}

impl FieldDecl {
    #[must_use]
    pub const fn input(name: &'static str) -> Self {
        Self {
            name,
            role: FieldRole::Input,
        }
    }

    #[must_use]
    pub const fn output(name: &'static str) -> Self {
        Self {
            name,
            role: FieldRole::Output,
        }
    }

    #[must_use]
    pub const fn control(name: &'static str, kind: ControlKind) -> Self {
        Self {
            name,
            role: FieldRole::Control(kind),
        }
    }

    /// The control kind, if this is a Control field.
    #[must_use]
    pub const fn control_kind(&self) -> Option<ControlKind> {
        match self.role {
            FieldRole::Control(kind) => Some(kind),
            _ => None,
        }
    }
}

/// A snapshot of one Control field of a live module.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Control {
    pub name: &'static str,
    pub kind: ControlKind,
    pub value: f32,
}

/// Look up a declared field by name.
#[must_use]
pub fn find_field(fields: &[FieldDecl], name: &str) -> Option<FieldDecl> {
    fields.iter().find(|field| field.name == name).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIELDS: &[FieldDecl] = &[
        FieldDecl::input("in"),
        FieldDecl::control("gain", ControlKind::Knob),
    ];

    #[test]
    fn test_find_field() {
        assert_eq!(find_field(FIELDS, "in").map(|f| f.role), Some(FieldRole::Input));
        assert!(find_field(FIELDS, "out").is_none());
    }

    #[test]
    fn test_control_kind() {
        assert_eq!(FIELDS[1].control_kind(), Some(ControlKind::Knob));
        assert_eq!(FIELDS[0].control_kind(), None);
        assert_eq!(ControlKind::Slider as u32, 2);
    }
}
