use crate::document::Arg;
use crate::document::ArgValue;
use crate::document::Args;
use crate::document::Document;
use crate::document::Field;
use serde_json::Value;
use std::fmt::Display;
use std::fmt::Formatter;

const INDENT_WIDTH: usize = 2;

/// Prefixes every line of `text` with `width` spaces. Lines containing only
/// whitespace are left as they are.
pub(crate) fn indent(text: &str, width: usize) -> String {
    let prefix = " ".repeat(width);
    text.split('\n')
        .map(|line| {
            if line.trim().is_empty() {
                line.to_string()
            } else {
                format!("{prefix}{line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

impl Display for Document {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {{\n{}\n}}",
            self.operation_kind(),
            indent(&self.root().to_string(), INDENT_WIDTH),
        )
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())?;
        if self.error().is_some() {
            return f.write_str(" # INVALID_FIELD");
        }

        if let Some(args) = self.args() {
            let rendered = render_args(args);
            match rendered.as_slice() {
                [] => (),
                [arg] => write!(f, "({arg})")?,
                _ => write!(f, "(\n{}\n)", indent(&rendered.join("\n"), INDENT_WIDTH))?,
            }
        }

        if let Some(children) = self.children() {
            let children = children.iter()
                .map(|child| child.to_string())
                .collect::<Vec<_>>()
                .join("\n");
            write!(f, " {{\n{}\n}}", indent(&children, INDENT_WIDTH))?;
        }

        Ok(())
    }
}

impl Display for Args {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&render_args(self).join("\n"))
    }
}

impl Display for Arg {
    /// Absent args render as an empty string.
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match render_arg_value(self.value()) {
            Some(value) => write!(f, "{}: {value}", self.key()),
            None => Ok(()),
        }
    }
}

fn render_args(args: &Args) -> Vec<String> {
    args.iter()
        .filter(|arg| !arg.value().is_absent())
        .map(|arg| arg.to_string())
        .collect()
}

fn render_arg_value(value: &ArgValue) -> Option<String> {
    Some(match value {
        ArgValue::Absent => return None,
        ArgValue::EnumLiteral(literal) => literal.to_owned(),
        ArgValue::Nested(args) => render_object(args),
        ArgValue::Scalar(value) => render_literal(value),
        ArgValue::List(items) => {
            let has_objects = items.iter().any(|item| matches!(item, ArgValue::Nested(_)));
            let rendered_items = items.iter().filter_map(render_arg_value);
            if has_objects {
                let items = rendered_items.collect::<Vec<_>>().join(",\n");
                format!("[\n{}\n]", indent(&items, INDENT_WIDTH))
            } else {
                format!("[{}]", rendered_items.collect::<Vec<_>>().join(", "))
            }
        },
    })
}

fn render_object(args: &Args) -> String {
    format!("{{\n{}\n}}", indent(&args.to_string(), INDENT_WIDTH))
}

fn render_literal(value: &Value) -> String {
    // Serializing a `Value` cannot fail: its map keys are always strings.
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
