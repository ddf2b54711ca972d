use crate::document::Arg;
use crate::document::ArgValue;
use crate::document::Args;
use crate::document::Field;
use crate::document::InputRole;

/// Rewrites filter and ordering arguments into the flat, operator-suffixed
/// form the wire format expects. Args that were already rewritten are
/// marked as normalized, so normalizing twice changes nothing.
pub(super) fn normalize_field(field: &Field) -> Field {
    if field.error().is_some() {
        return field.clone();
    }

    Field::new(
        field.name(),
        field.args().map(normalize_args),
        field.children().map(|children| children.iter().map(normalize_field).collect()),
        field.children_key(),
    )
}

fn normalize_args(args: &Args) -> Args {
    Args::new(args.iter().map(normalize_arg).collect())
}

fn normalize_arg(arg: &Arg) -> Arg {
    if arg.is_normalized() {
        return arg.with_value(normalize_value(arg.value()));
    }

    match arg.input_role() {
        InputRole::Order => arg.with_value(order_value(arg.value())).mark_normalized(),

        // Relation filters nested in the flattened value may hold further
        // where arguments, so keep walking.
        InputRole::Where => {
            let flattened = arg.with_value(flatten_where_value(arg.value()));
            flattened.with_value(normalize_value(flattened.value())).mark_normalized()
        },

        InputRole::Plain => arg.with_value(normalize_value(arg.value())),
    }
}

fn normalize_value(value: &ArgValue) -> ArgValue {
    match value {
        ArgValue::Nested(args) => ArgValue::Nested(normalize_args(args)),
        ArgValue::List(items) => ArgValue::List(items.iter().map(normalize_value).collect()),
        ArgValue::Absent | ArgValue::EnumLiteral(_) | ArgValue::Scalar(_) => value.clone(),
    }
}

/// `{ age: "asc" }` becomes the enum literal `age_ASC`. Objects with more
/// (or fewer) than one entry are left untouched.
fn order_value(value: &ArgValue) -> ArgValue {
    match value {
        ArgValue::Nested(args) => order_literal(args)
            .map(ArgValue::EnumLiteral)
            .unwrap_or_else(|| value.clone()),
        ArgValue::List(items) => ArgValue::List(items.iter().map(order_value).collect()),
        ArgValue::Absent | ArgValue::EnumLiteral(_) | ArgValue::Scalar(_) => value.clone(),
    }
}

fn order_literal(args: &Args) -> Option<String> {
    if args.len() != 1 {
        return None;
    }
    let order_arg = args.iter().next()?;
    let direction = match order_arg.value() {
        ArgValue::EnumLiteral(direction) => direction.as_str(),
        ArgValue::Scalar(value) => value.as_str()?,
        _ => return None,
    };
    Some(format!("{}_{}", order_arg.key(), direction.to_uppercase()))
}

fn flatten_where_value(value: &ArgValue) -> ArgValue {
    match value {
        ArgValue::Nested(args) => ArgValue::Nested(flatten_where_args(args)),
        ArgValue::List(items) => ArgValue::List(items.iter().map(flatten_where_value).collect()),
        ArgValue::Absent | ArgValue::EnumLiteral(_) | ArgValue::Scalar(_) => value.clone(),
    }
}

/// `{ name: { contains: "a", equals: "b" } }` becomes
/// `{ name_contains: "a", name: "b" }`. Combinator lists such as `AND` are
/// flattened element-wise, and relation filters keep their nested shape.
fn flatten_where_args(args: &Args) -> Args {
    let mut flattened = vec![];
    for arg in args {
        match arg.value() {
            ArgValue::List(items)
                if items.iter().any(|item| matches!(item, ArgValue::Nested(_))) => {
                flattened.push(
                    arg.with_value(flatten_where_value(arg.value())).mark_normalized(),
                );
            },

            ArgValue::Nested(comparisons) if !arg.is_relation_filter() => {
                for comparison in comparisons {
                    let mut flat_arg = comparison.clone();
                    flat_arg.key = filter_arg_name(arg.key(), comparison.key());
                    flattened.push(flat_arg);
                }
            },

            _ => flattened.push(arg.clone()),
        }
    }
    Args::new(flattened)
}

fn filter_arg_name(field_name: &str, operator: &str) -> String {
    if operator == "equals" {
        field_name.to_string()
    } else {
        format!("{field_name}_{operator}")
    }
}
