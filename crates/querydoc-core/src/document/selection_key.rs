/// Which of the two selection keys a relation field's children were
/// requested through.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionKey {
    Include,
    Select,
}
impl SelectionKey {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Include => "include",
            Self::Select => "select",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "include" => Some(Self::Include),
            "select" => Some(Self::Select),
            _ => None,
        }
    }
}
impl std::fmt::Display for SelectionKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
