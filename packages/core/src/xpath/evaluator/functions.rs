//! Core function library

use super::{Context, Evaluator, PathValue};
use crate::error::{QueryError, QueryResult};
use crate::tree::NodeKind;
use crate::xpath::ast::Expr;

/// Accepted argument counts: minimum and optional maximum
struct Signature {
    name: &'static str,
    min: usize,
    max: Option<usize>,
}

const SIGNATURES: &[Signature] = &[
    Signature { name: "last", min: 0, max: Some(0) },
    Signature { name: "position", min: 0, max: Some(0) },
    Signature { name: "count", min: 1, max: Some(1) },
    Signature { name: "sum", min: 1, max: Some(1) },
    Signature { name: "name", min: 0, max: Some(1) },
    Signature { name: "local-name", min: 0, max: Some(1) },
    Signature { name: "string", min: 0, max: Some(1) },
    Signature { name: "string-length", min: 0, max: Some(1) },
    Signature { name: "number", min: 0, max: Some(1) },
    Signature { name: "boolean", min: 1, max: Some(1) },
    Signature { name: "not", min: 1, max: Some(1) },
    Signature { name: "true", min: 0, max: Some(0) },
    Signature { name: "false", min: 0, max: Some(0) },
    Signature { name: "contains", min: 2, max: Some(2) },
    Signature { name: "starts-with", min: 2, max: Some(2) },
    Signature { name: "concat", min: 2, max: None },
];

/// Validate a call against the function table
pub(crate) fn check_call(name: &str, arity: usize) -> QueryResult<()> {
    let Some(signature) = SIGNATURES.iter().find(|signature| signature.name == name) else {
        return Err(QueryError::UnknownFunction {
            name: name.to_string(),
        });
    };

    let fits = arity >= signature.min && signature.max.is_none_or(|max| arity <= max);
    if fits {
        return Ok(());
    }

    let expected = match signature.max {
        Some(max) if max == signature.min => max.to_string(),
        Some(max) => format!("{} to {max}", signature.min),
        None => format!("at least {}", signature.min),
    };
    Err(QueryError::WrongArity {
        name: name.to_string(),
        expected,
        found: arity,
    })
}

impl Evaluator<'_> {
    #[allow(clippy::cast_precision_loss)]
    pub(crate) fn call_function(
        &self,
        name: &str,
        args: &[Expr],
        ctx: Context,
    ) -> QueryResult<PathValue> {
        let value = match name {
            "last" => PathValue::Number(ctx.size as f64),
            "position" => PathValue::Number(ctx.position as f64),
            "count" => {
                let members = self.members(&args[0], ctx, "count() argument")?;
                PathValue::Number(members.len() as f64)
            }
            "sum" => {
                let members = self.members(&args[0], ctx, "sum() argument")?;
                PathValue::Number(
                    members
                        .iter()
                        .map(|text| super::text_to_number(text))
                        .sum(),
                )
            }
            "name" | "local-name" => {
                let node = match args.first() {
                    Some(arg) => self.node_set(arg, ctx, "name() argument")?.first().copied(),
                    None => Some(ctx.node),
                };
                let tag = node
                    .filter(|&node| self.tree.kind(node) == NodeKind::Element)
                    .map(|node| self.tree.tag(node).to_string())
                    .unwrap_or_default();
                PathValue::Text(tag)
            }
            "string" => PathValue::Text(self.argument_text(args, ctx)?),
            "string-length" => {
                let text = self.argument_text(args, ctx)?;
                PathValue::Number(text.chars().count() as f64)
            }
            "number" => {
                let number = match args.first() {
                    Some(arg) => {
                        let value = self.evaluate(arg, ctx)?;
                        self.to_number(&value)
                    }
                    None => super::text_to_number(&self.tree.string_value(ctx.node)),
                };
                PathValue::Number(number)
            }
            "boolean" => {
                let value = self.evaluate(&args[0], ctx)?;
                PathValue::Boolean(self.to_boolean(&value))
            }
            "not" => {
                let value = self.evaluate(&args[0], ctx)?;
                PathValue::Boolean(!self.to_boolean(&value))
            }
            "true" => PathValue::Boolean(true),
            "false" => PathValue::Boolean(false),
            "contains" | "starts-with" => {
                let haystack = self.text_of(&args[0], ctx)?;
                let needle = self.text_of(&args[1], ctx)?;
                PathValue::Boolean(if name == "contains" {
                    haystack.contains(&needle)
                } else {
                    haystack.starts_with(&needle)
                })
            }
            "concat" => {
                let mut out = String::new();
                for arg in args {
                    out.push_str(&self.text_of(arg, ctx)?);
                }
                PathValue::Text(out)
            }
            _ => {
                return Err(QueryError::UnknownFunction {
                    name: name.to_string(),
                });
            }
        };
        Ok(value)
    }

    fn members(&self, arg: &Expr, ctx: Context, role: &str) -> QueryResult<Vec<String>> {
        let value = self.evaluate(arg, ctx)?;
        self.member_texts(&value).ok_or_else(|| {
            crate::error::not_a_node_set_error(
                self.expression,
                &format!("{role} evaluates to a {}", value.kind()),
            )
        })
    }

    fn text_of(&self, arg: &Expr, ctx: Context) -> QueryResult<String> {
        let value = self.evaluate(arg, ctx)?;
        Ok(self.to_text(&value))
    }

    fn argument_text(&self, args: &[Expr], ctx: Context) -> QueryResult<String> {
        match args.first() {
            Some(arg) => self.text_of(arg, ctx),
            None => Ok(self.tree.string_value(ctx.node)),
        }
    }
}
