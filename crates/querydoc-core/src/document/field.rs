use crate::document::Args;
use crate::document::FieldErrorKind;
use crate::document::SelectionKey;

/// A node of the selection tree: one requested field, its arguments and (for
/// relation fields) the fields selected on the related object.
#[derive(Clone, Debug, PartialEq)]
pub struct Field {
    pub(crate) name: String,
    pub(crate) args: Option<Args>,
    pub(crate) children: Option<Vec<Field>>,
    pub(crate) children_key: Option<SelectionKey>,
    pub(crate) error: Option<FieldErrorKind>,
    has_invalid_arg: bool,
    has_invalid_child: bool,
}
impl Field {
    pub(crate) fn new(
        name: impl AsRef<str>,
        args: Option<Args>,
        children: Option<Vec<Field>>,
        children_key: Option<SelectionKey>,
    ) -> Self {
        let has_invalid_arg = args.as_ref().is_some_and(|args| args.has_invalid_arg());
        let has_invalid_child = children.as_ref().is_some_and(|children| {
            children.iter().any(|child| child.has_invalid_subtree())
        });
        Self {
            name: name.as_ref().to_string(),
            args,
            children,
            children_key,
            error: None,
            has_invalid_arg,
            has_invalid_child,
        }
    }

    /// A terminal field that failed validation. It never has children.
    pub(crate) fn invalid(name: impl AsRef<str>, error: FieldErrorKind) -> Self {
        Self {
            name: name.as_ref().to_string(),
            args: None,
            children: None,
            children_key: None,
            error: Some(error),
            has_invalid_arg: false,
            has_invalid_child: false,
        }
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    pub fn args(&self) -> Option<&Args> {
        self.args.as_ref()
    }

    pub fn children(&self) -> Option<&[Field]> {
        self.children.as_deref()
    }

    pub fn child(&self, name: &str) -> Option<&Field> {
        self.children.as_ref()?.iter().find(|child| child.name == name)
    }

    /// The selection key the children were requested through. `None` for
    /// leaf fields and for fields whose only child is a synthetic error
    /// node named after the offending key.
    pub fn children_key(&self) -> Option<SelectionKey> {
        self.children_key
    }

    pub fn error(&self) -> Option<&FieldErrorKind> {
        self.error.as_ref()
    }

    pub fn has_invalid_arg(&self) -> bool {
        self.has_invalid_arg
    }

    pub fn has_invalid_child(&self) -> bool {
        self.has_invalid_child
    }

    /// Whether this field or anything beneath it carries an error.
    pub fn has_invalid_subtree(&self) -> bool {
        self.error.is_some() || self.has_invalid_arg || self.has_invalid_child
    }
}
