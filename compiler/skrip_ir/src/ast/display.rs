//! Canonical source rendering for AST nodes.
//!
//! The forms here are chosen so that printing a parsed program and parsing
//! the output again yields an equivalent tree. Composite expressions are
//! parenthesised, which also makes precedence visible in parser tests.

use std::fmt;

use super::{
    Block, Expression, FunctionLiteral, IfScene, InfixOperator, PrefixOperator, Program, Statement,
};

/// Write a float so it always re-lexes as a FLOAT token: integral values
/// get an explicit `.0` suffix, everything else uses the shortest
/// round-trip form.
pub fn write_float_literal(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value.fract() == 0.0 && value.is_finite() {
        write!(f, "{value:.1}")
    } else {
        write!(f, "{value}")
    }
}

fn write_joined<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.statements, "\n")
    }
}

impl fmt::Display for Block {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_joined(f, &self.statements, "; ")
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Let { name, value } => write!(f, "let {name} = {value};"),
            Statement::Return { value } => write!(f, "return {value};"),
            Statement::Function { name, function } => {
                write!(f, "func {name}(")?;
                write_joined(f, &function.parameters, ", ")?;
                write!(f, ") {{ {} }}", function.block)
            }
            Statement::Expression { expression } => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("func(")?;
        write_joined(f, &self.parameters, ", ")?;
        write!(f, ") {{ {} }}", self.block)
    }
}

impl fmt::Display for IfScene {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if ({}) {{ {} }}", self.condition, self.block)
    }
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expression::Integer(value) => write!(f, "{value}"),
            Expression::Float(value) => write_float_literal(f, *value),
            Expression::Str(value) => write!(f, "\"{}\"", value.replace('"', "\\\"")),
            Expression::Boolean(value) => write!(f, "{value}"),
            Expression::Nil => f.write_str("nil"),
            Expression::Identifier(name) => f.write_str(name),
            Expression::Array(elements) => {
                f.write_str("[")?;
                write_joined(f, elements, ", ")?;
                f.write_str("]")
            }
            Expression::Hash(pairs) => {
                f.write_str("{")?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{key}: {value}")?;
                }
                f.write_str("}")
            }
            Expression::Function(function) => write!(f, "{function}"),
            Expression::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Expression::Infix {
                left,
                operator,
                right,
            } => write!(f, "({left} {operator} {right})"),
            Expression::Assign { target, value } => write!(f, "({target} = {value})"),
            Expression::Index { left, index } => write!(f, "({left}[{index}])"),
            Expression::Dot { left, item } => write!(f, "({left}.{item})"),
            Expression::Range { start, end } => write!(f, "({start}..{end})"),
            Expression::Call { callee, arguments } => {
                write!(f, "{callee}(")?;
                write_joined(f, arguments, ", ")?;
                f.write_str(")")
            }
            Expression::If {
                scenes,
                alternative,
            } => {
                for (i, scene) in scenes.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" else ")?;
                    }
                    write!(f, "{scene}")?;
                }
                if let Some(alternative) = alternative {
                    write!(f, " else {{ {alternative} }}")?;
                }
                Ok(())
            }
            Expression::ForEver { block } => write!(f, "for {{ {block} }}"),
            Expression::ForEachHash {
                key_name,
                value_name,
                iterable,
                block,
            } => write!(f, "for {key_name}, {value_name} in {iterable} {{ {block} }}"),
            Expression::ForEachArrayOrRange {
                value_name,
                iterable,
                block,
            } => write!(f, "for {value_name} in {iterable} {{ {block} }}"),
            Expression::Break => f.write_str("break"),
            Expression::Continue => f.write_str("continue"),
        }
    }
}
