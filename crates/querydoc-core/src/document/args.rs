use crate::document::Arg;

/// An ordered sequence of [`Arg`]s: the arguments of a field, or the fields
/// of an input object value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Args {
    args: Vec<Arg>,
    has_invalid_arg: bool,
}
impl Args {
    pub fn new(args: Vec<Arg>) -> Self {
        let has_invalid_arg = args.iter().any(|arg| arg.has_invalid_arg());
        Self {
            args,
            has_invalid_arg,
        }
    }

    pub fn get(&self, key: &str) -> Option<&Arg> {
        self.args.iter().find(|arg| arg.key() == key)
    }

    pub fn has_invalid_arg(&self) -> bool {
        self.has_invalid_arg
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Arg> {
        self.args.iter()
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn error_count(&self) -> usize {
        if !self.has_invalid_arg {
            return 0;
        }
        self.args.iter().map(|arg| arg.error_count()).sum()
    }
}
impl<'a> IntoIterator for &'a Args {
    type Item = &'a Arg;
    type IntoIter = std::slice::Iter<'a, Arg>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.iter()
    }
}
