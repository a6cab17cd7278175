/// A complete parsed program: an ordered sequence of top-level statements.
///
/// Produced by the parser and consumed by the evaluator. The program owns its
/// statements exclusively; the AST is a tree, never shared or cyclic.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<Statement>,
}

/// A brace-delimited sequence of statements, used as the body of `agar`,
/// `jaha_tak`, and `chal_bhai` constructs. Blocks execute in their own
/// variable scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    /// The statements inside the block, in source order.
    pub statements: Vec<Statement>,
    /// Line number of the opening brace.
    pub line:       usize,
}

/// One `nahi_to_agar` branch of an `agar` expression.
#[derive(Debug, Clone, PartialEq)]
pub struct ElseIf {
    /// The branch condition.
    pub condition: Expr,
    /// The branch body, executed when the condition is truthy.
    pub block:     Block,
}

/// Represents a top-level or block-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A variable declaration using `bhai_sun`. Always binds in the current
    /// scope, shadowing any outer binding of the same name.
    Let {
        /// The name of the variable.
        name:  String,
        /// The initial value of the variable.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// An assignment to an existing variable (or, when the name is unbound
    /// anywhere, a fresh binding in the current scope).
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value which is being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `bol_bhai(...)` print statement.
    Print {
        /// The expression whose rendering is appended to the output.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A `bas_kar` statement; terminates the innermost enclosing loop.
    Break {
        /// Line number in the source code.
        line: usize,
    },
    /// An `aage_badh` statement; skips to the next loop iteration.
    Continue {
        /// Line number in the source code.
        line: usize,
    },
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

/// An abstract syntax tree (AST) node representing an expression.
///
/// `Expr` covers all expression forms of the language: literals, identifier
/// reads, array construction and indexing, infix arithmetic and comparison,
/// calls, the `suna_bhai` input primitive, and the control constructs
/// (`agar`, `jaha_tak`, `chal_bhai`), which are expressions in this grammar.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A 64-bit integer literal.
    IntegerLiteral {
        /// The literal value.
        value: i64,
        /// Line number in the source code.
        line:  usize,
    },
    /// A string literal.
    StringLiteral {
        /// The literal text, quotes already stripped.
        value: String,
        /// Line number in the source code.
        line:  usize,
    },
    /// A boolean literal: `sach` or `jhuth`.
    BooleanLiteral {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a variable by name.
    Identifier {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Array literal expression, such as `[1, 2, 3]`.
    ArrayLiteral {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Array indexing expression, such as `arr[2]`.
    Index {
        /// The array to index into.
        array: Box<Self>,
        /// The index to access.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// An infix operation (arithmetic or comparison).
    Infix {
        /// The operator.
        op:    InfixOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A call expression, such as `bol_bhai(x)` used in expression position.
    Call {
        /// Name of the function being called.
        function:  String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Conditional `agar` expression with ordered `nahi_to_agar` branches and
    /// an optional final `nahi_to` block.
    If {
        /// The primary condition expression.
        condition:   Box<Self>,
        /// Block executed when the condition is truthy.
        consequence: Block,
        /// The `nahi_to_agar` branches, tried in source order.
        else_ifs:    Vec<ElseIf>,
        /// The optional final `nahi_to` block.
        alternative: Option<Block>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A `jaha_tak` loop expression.
    While {
        /// The loop condition, re-tested before every iteration.
        condition: Box<Self>,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `chal_bhai` loop expression with three optional clauses.
    For {
        /// The initialization statement, run once before the loop.
        init:      Option<Box<Statement>>,
        /// The loop condition; a missing condition never stops the loop.
        condition: Option<Box<Self>>,
        /// The update statement, run after every iteration.
        update:    Option<Box<Statement>>,
        /// The loop body.
        body:      Block,
        /// Line number in the source code.
        line:      usize,
    },
    /// The `suna_bhai` primitive: reads one line from standard input.
    Input {
        /// Line number in the source code.
        line: usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use brolang::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::IntegerLiteral { line, .. }
            | Self::StringLiteral { line, .. }
            | Self::BooleanLiteral { line, .. }
            | Self::Identifier { line, .. }
            | Self::ArrayLiteral { line, .. }
            | Self::Index { line, .. }
            | Self::Infix { line, .. }
            | Self::Call { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For { line, .. }
            | Self::Input { line } => *line,
        }
    }
}

/// Represents an infix operator.
///
/// Arithmetic operators may appear anywhere in an expression; comparison
/// operators are only produced by the condition grammar of `agar`,
/// `jaha_tak`, and `chal_bhai`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InfixOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Modulo (`%`)
    Mod,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
}

impl std::fmt::Display for InfixOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Equal => "==",
            Self::NotEqual => "!=",
        };
        write!(f, "{operator}")
    }
}
