use std::fmt;

/// A complete parsed program: the ordered list of its top-level statements.
///
/// `Program` is the root of the syntax tree and the value returned by
/// [`Parser::parse_program`](crate::interpreter::parser::Parser::parse_program).
/// Its `Display` implementation re-prints the source form of every statement
/// in order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// Top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A brace-delimited sequence of statements.
///
/// Blocks appear as the branches of `if` expressions and as function bodies.
/// They do not introduce a scope of their own; only function application
/// does.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockStatement {
    /// Statements in source order.
    pub statements: Vec<Statement>,
}

/// An abstract syntax tree node representing a statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A `let` binding: `let name = value;`.
    Let {
        /// The bound name.
        name: String,
        /// The expression producing the bound value.
        value: Expression,
    },
    /// A `return` statement: `return value;`.
    Return {
        /// The expression producing the returned value.
        value: Expression,
    },
    /// An expression used in statement position.
    Expression {
        /// The inner expression.
        expression: Expression,
    },
}

/// An abstract syntax tree node representing an expression.
///
/// Every language construct that produces a value is an `Expression`,
/// including conditionals and function literals. The `Display`
/// implementation re-prints a source form with explicit parentheses around
/// every prefix and infix application, which makes operator-precedence
/// behavior visible in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    /// Reference to a binding by name.
    Identifier(String),
    /// A 64-bit signed integer literal.
    IntegerLiteral(i64),
    /// A boolean literal: `true` or `false`.
    BooleanLiteral(bool),
    /// A string literal. The value holds the characters between the quotes.
    StringLiteral(String),
    /// A prefix operation (e.g. `-x`, `!ok`).
    Prefix {
        /// The prefix operator to apply.
        operator: PrefixOperator,
        /// The operand expression.
        right: Box<Expression>,
    },
    /// An infix operation (e.g. `a + b`, `x == y`).
    Infix {
        /// Left operand.
        left: Box<Expression>,
        /// The operator.
        operator: InfixOperator,
        /// Right operand.
        right: Box<Expression>,
    },
    /// A conditional expression with an optional `else` branch.
    If {
        /// The condition expression.
        condition: Box<Expression>,
        /// Block evaluated when the condition is truthy.
        consequence: BlockStatement,
        /// Block evaluated when the condition is falsy, if present.
        alternative: Option<BlockStatement>,
    },
    /// A function literal: `fn(x, y) { ... }`.
    FunctionLiteral {
        /// Parameter names in declaration order.
        parameters: Vec<String>,
        /// The function body.
        body: BlockStatement,
    },
    /// A call expression. The callee is itself an expression, so both named
    /// functions and immediately-invoked literals are covered.
    Call {
        /// The expression producing the callee.
        function: Box<Expression>,
        /// Argument expressions in source order.
        arguments: Vec<Expression>,
    },
    /// An array literal: `[1, 2, 3]`.
    ArrayLiteral {
        /// Element expressions in source order.
        elements: Vec<Expression>,
    },
    /// An index expression: `target[index]`.
    Index {
        /// The expression being indexed.
        left: Box<Expression>,
        /// The index expression.
        index: Box<Expression>,
    },
    /// A hash-map literal: `{"key": value}`. Pairs keep their source order
    /// so that re-printing is deterministic.
    HashLiteral {
        /// Key/value expression pairs in source order.
        pairs: Vec<(Expression, Expression)>,
    },
}

/// A prefix (unary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PrefixOperator {
    /// Logical negation (`!x`).
    Not,
    /// Arithmetic negation (`-x`).
    Negate,
}

/// An infix (binary) operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`); also string concatenation.
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Equal to (`==`)
    Eq,
    /// Not equal to (`!=`)
    NotEq,
}

impl fmt::Display for PrefixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Not => "!",
            Self::Negate => "-",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Eq => "==",
            Self::NotEq => "!=",
        };
        write!(f, "{operator}")
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for BlockStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            write!(f, "{statement}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Let { name, value } => write!(f, "let {name} = {value};"),
            Self::Return { value } => write!(f, "return {value};"),
            Self::Expression { expression } => write!(f, "{expression}"),
        }
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier(name) => write!(f, "{name}"),
            Self::IntegerLiteral(value) => write!(f, "{value}"),
            Self::BooleanLiteral(value) => write!(f, "{value}"),
            Self::StringLiteral(value) => write!(f, "{value}"),
            Self::Prefix { operator, right } => write!(f, "({operator}{right})"),
            Self::Infix {
                left,
                operator,
                right,
            } => write!(f, "({left} {operator} {right})"),
            Self::If {
                condition,
                consequence,
                alternative,
            } => {
                write!(f, "if {condition} {consequence}")?;
                if let Some(alternative) = alternative {
                    write!(f, " else {alternative}")?;
                }
                Ok(())
            }
            Self::FunctionLiteral { parameters, body } => {
                write!(f, "fn({}) {body}", parameters.join(", "))
            }
            Self::Call {
                function,
                arguments,
            } => {
                let arguments = arguments
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{function}({arguments})")
            }
            Self::ArrayLiteral { elements } => {
                let elements = elements
                    .iter()
                    .map(ToString::to_string)
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "[{elements}]")
            }
            Self::Index { left, index } => write!(f, "({left}[{index}])"),
            Self::HashLiteral { pairs } => {
                let pairs = pairs
                    .iter()
                    .map(|(key, value)| format!("{key}:{value}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{{{pairs}}}")
            }
        }
    }
}
