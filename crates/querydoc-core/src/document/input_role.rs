use crate::types::InputType;

/// How the normalizer treats an [`Arg`](crate::document::Arg), derived from
/// the input type its value was matched against.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, serde::Serialize)]
pub enum InputRole {
    /// Rewritten into `<field>_<DIRECTION>` enum literals.
    Order,
    #[default]
    Plain,
    /// Comparison objects get flattened into `<field>_<operator>` siblings.
    Where,
}
impl InputRole {
    pub fn of(input_type: &InputType) -> Self {
        if input_type.is_order_type() {
            Self::Order
        } else if input_type.is_where_type() {
            Self::Where
        } else {
            Self::Plain
        }
    }
}
