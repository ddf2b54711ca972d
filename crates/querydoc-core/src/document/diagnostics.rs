use crate::document::Arg;
use crate::document::ArgErrorKind;
use crate::document::ArgValue;
use crate::document::Field;
use crate::document::FieldErrorKind;
use serde_json::Value;

/// One step of a path into a selection: an object key or a list index.
#[derive(Clone, Debug, Eq, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum PathSegment {
    Index(usize),
    Key(String),
}
impl std::fmt::Display for PathSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Index(index) => write!(f, "{index}"),
            Self::Key(key) => f.write_str(key),
        }
    }
}
impl std::convert::From<&str> for PathSegment {
    fn from(value: &str) -> Self {
        Self::Key(value.to_string())
    }
}
impl std::convert::From<usize> for PathSegment {
    fn from(value: usize) -> Self {
        Self::Index(value)
    }
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct FieldError {
    pub path: Vec<PathSegment>,
    pub kind: FieldErrorKind,
}

#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ArgError {
    pub path: Vec<PathSegment>,
    pub kind: ArgErrorKind,
}

/// Every problem found in a [`Document`](crate::document::Document), each
/// addressed by its path from the root field.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Diagnostics {
    pub arg_errors: Vec<ArgError>,
    pub field_errors: Vec<FieldError>,
}
impl Diagnostics {
    pub(super) fn collect(root: &Field) -> Self {
        let mut diagnostics = Self::default();
        diagnostics.collect_field(root, &mut vec![]);
        diagnostics
    }

    fn collect_field(&mut self, field: &Field, path: &mut Vec<PathSegment>) {
        path.push(field.name().into());

        if let Some(error) = field.error() {
            self.field_errors.push(FieldError {
                path: path.clone(),
                kind: error.clone(),
            });
        }

        if field.has_invalid_child()
            && let Some(children) = field.children() {
            // Synthetic error children are already named after their
            // selection key.
            let children_key = field.children_key();
            if let Some(children_key) = children_key {
                path.push(children_key.name().into());
            }
            for child in children {
                self.collect_field(child, path);
            }
            if children_key.is_some() {
                path.pop();
            }
        }

        if field.has_invalid_arg()
            && let Some(args) = field.args() {
            for arg in args {
                self.collect_arg(arg, path);
            }
        }

        path.pop();
    }

    fn collect_arg(&mut self, arg: &Arg, path: &mut Vec<PathSegment>) {
        if !arg.has_invalid_arg() {
            return;
        }
        path.push(arg.key().into());

        if let Some(error) = arg.error() {
            self.arg_errors.push(ArgError {
                path: path.clone(),
                kind: error.clone(),
            });
        }

        match arg.value() {
            ArgValue::Nested(args) => {
                for nested_arg in args {
                    self.collect_arg(nested_arg, path);
                }
            },
            ArgValue::List(items) => {
                for (index, item) in items.iter().enumerate() {
                    if let ArgValue::Nested(args) = item {
                        path.push(index.into());
                        for nested_arg in args {
                            self.collect_arg(nested_arg, path);
                        }
                        path.pop();
                    }
                }
            },
            ArgValue::Absent | ArgValue::EnumLiteral(_) | ArgValue::Scalar(_) => (),
        }

        path.pop();
    }

    pub fn is_empty(&self) -> bool {
        self.arg_errors.is_empty() && self.field_errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.arg_errors.len() + self.field_errors.len()
    }

    /// Rewrites every path so it addresses the value the caller actually
    /// passed as `selection` for `root_field_name`.
    ///
    /// Non-array values passed for list arguments are wrapped into a single
    /// element list during resolution, which adds an index `0` segment the
    /// caller never wrote. Those segments are removed here.
    pub fn normalize_paths(&self, root_field_name: &str, selection: &Value) -> Self {
        let mut root = serde_json::Map::new();
        root.insert(root_field_name.to_string(), selection.clone());
        let root = Value::Object(root);

        Self {
            arg_errors: self.arg_errors.iter()
                .map(|error| ArgError {
                    path: normalize_path(&error.path, &root),
                    kind: error.kind.clone(),
                })
                .collect(),
            field_errors: self.field_errors.iter()
                .map(|error| FieldError {
                    path: normalize_path(&error.path, &root),
                    kind: error.kind.clone(),
                })
                .collect(),
        }
    }
}
impl std::fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "The selection is invalid ({} error(s)):", self.len())?;
        for error in &self.field_errors {
            write!(f, "\n  {}: {}", join_path(&error.path), error.kind)?;
        }
        for error in &self.arg_errors {
            write!(f, "\n  {}: {}", join_path(&error.path), error.kind)?;
        }
        Ok(())
    }
}
impl std::error::Error for Diagnostics {}

pub(crate) fn join_path(path: &[PathSegment]) -> String {
    path.iter()
        .map(|segment| segment.to_string())
        .collect::<Vec<_>>()
        .join(".")
}

fn normalize_path(path: &[PathSegment], root: &Value) -> Vec<PathSegment> {
    let mut normalized = Vec::with_capacity(path.len());
    let mut pointer = Some(root);
    for segment in path {
        match segment {
            PathSegment::Index(0) if !pointer.is_some_and(|value| value.is_array()) => {
                continue;
            },
            PathSegment::Index(index) => {
                pointer = pointer.and_then(|value| value.get(*index));
            },
            PathSegment::Key(key) => {
                if let Some(next) = pointer.and_then(|value| value.get(key.as_str())) {
                    pointer = Some(next);
                }
            },
        }
        normalized.push(segment.clone());
    }
    normalized
}
