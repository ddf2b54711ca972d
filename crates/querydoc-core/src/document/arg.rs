use crate::document::ArgErrorKind;
use crate::document::ArgValue;
use crate::document::InputRole;
use crate::types::InputTypeRef;

/// A single resolved argument (or input object field) and its value.
#[derive(Clone, Debug, PartialEq)]
pub struct Arg {
    pub(crate) key: String,
    pub(crate) value: ArgValue,
    pub(crate) matched_type: Option<InputTypeRef>,
    pub(crate) input_role: InputRole,
    pub(crate) is_relation_filter: bool,
    pub(crate) error: Option<ArgErrorKind>,
    pub(crate) normalized: bool,
    has_invalid_arg: bool,
}
impl Arg {
    pub(crate) fn new(
        key: impl AsRef<str>,
        value: ArgValue,
        matched_type: Option<InputTypeRef>,
        error: Option<ArgErrorKind>,
    ) -> Self {
        let has_invalid_arg = error.is_some() || value.has_invalid_arg();
        Self {
            key: key.as_ref().to_string(),
            value,
            matched_type,
            input_role: InputRole::Plain,
            is_relation_filter: false,
            error,
            normalized: false,
            has_invalid_arg,
        }
    }

    pub(crate) fn invalid(key: impl AsRef<str>, value: ArgValue, error: ArgErrorKind) -> Self {
        Self::new(key, value, None, Some(error))
    }

    pub(crate) fn with_role(mut self, input_role: InputRole) -> Self {
        self.input_role = input_role;
        self
    }

    pub(crate) fn with_relation_filter(mut self, is_relation_filter: bool) -> Self {
        self.is_relation_filter = is_relation_filter;
        self
    }

    pub(crate) fn mark_normalized(mut self) -> Self {
        self.normalized = true;
        self
    }

    /// A copy of this arg holding a different value.
    pub(crate) fn with_value(&self, value: ArgValue) -> Self {
        Self {
            key: self.key.clone(),
            has_invalid_arg: self.error.is_some() || value.has_invalid_arg(),
            value,
            matched_type: self.matched_type.clone(),
            input_role: self.input_role,
            is_relation_filter: self.is_relation_filter,
            error: self.error.clone(),
            normalized: self.normalized,
        }
    }

    pub fn key(&self) -> &str {
        self.key.as_str()
    }

    pub fn value(&self) -> &ArgValue {
        &self.value
    }

    /// The candidate type the value was matched against, if any.
    pub fn matched_type(&self) -> Option<&InputTypeRef> {
        self.matched_type.as_ref()
    }

    pub fn input_role(&self) -> InputRole {
        self.input_role
    }

    pub fn is_relation_filter(&self) -> bool {
        self.is_relation_filter
    }

    pub fn error(&self) -> Option<&ArgErrorKind> {
        self.error.as_ref()
    }

    pub fn is_normalized(&self) -> bool {
        self.normalized
    }

    /// Whether this arg or any arg nested in its value carries an error.
    pub fn has_invalid_arg(&self) -> bool {
        self.has_invalid_arg
    }

    pub fn error_count(&self) -> usize {
        if !self.has_invalid_arg {
            return 0;
        }
        usize::from(self.error.is_some()) + self.value.error_count()
    }
}
