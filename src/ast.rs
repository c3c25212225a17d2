/// Represents a literal value in the language.
///
/// `LiteralValue` covers all raw, constant values that can appear directly in
/// source code. An integer literal never turns into a float implicitly; the
/// lexer decides the variant once, based on whether the literal contains a
/// decimal point.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Int(i64),
    /// A 64-bit floating-point literal.
    Float(f64),
    /// A boolean literal value: `true` or `false`.
    Bool(bool),
    /// A double-quoted string literal, with escapes already resolved.
    Str(String),
}

/// An abstract syntax tree node representing an expression.
///
/// Each variant models a distinct syntactic construct and carries the source
/// line it starts on for error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A literal value (number, string, or boolean).
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a binding by name.
    Ident {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Array literal expression, e.g. `[1, 2, 3]`.
    Array {
        /// Elements of the array.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Half-open integer range, e.g. `1..11`.
    Range {
        /// The inclusive lower bound.
        lo:   Box<Self>,
        /// The exclusive upper bound.
        hi:   Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison, or logic).
    Binary {
        /// Left operand.
        lhs:  Box<Self>,
        /// The operator.
        op:   BinaryOperator,
        /// Right operand.
        rhs:  Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation or logical not).
    Unary {
        /// The unary operator to apply.
        op:      UnaryOperator,
        /// The operand expression.
        operand: Box<Self>,
        /// Line number in the source code.
        line:    usize,
    },
    /// Function call expression, e.g. `mean(data)`.
    Call {
        /// Expression evaluating to the callee.
        callee: Box<Self>,
        /// Arguments to the call, in source order.
        args:   Vec<Self>,
        /// Line number in the source code.
        line:   usize,
    },
    /// Array indexing expression, e.g. `data[2]`.
    Index {
        /// The sequence being indexed.
        seq:   Box<Self>,
        /// The index expression.
        index: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
}

impl Expr {
    /// Gets the source line this expression starts on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Ident { line, .. }
            | Self::Array { line, .. }
            | Self::Range { line, .. }
            | Self::Binary { line, .. }
            | Self::Unary { line, .. }
            | Self::Call { line, .. }
            | Self::Index { line, .. } => *line,
        }
    }
}

/// A function parameter: a name with an optional, unenforced type annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct Param {
    /// The parameter name.
    pub name:          String,
    /// The declared type, if any. Parsed and then ignored by the evaluator.
    pub declared_type: Option<String>,
}

/// Represents a statement.
///
/// Statements are the units a program is made of; they produce side effects
/// rather than values.
#[derive(Debug, Clone, PartialEq)]
pub enum Stmt {
    /// A variable declaration: `var x = expr;`. Always creates a new binding
    /// in the innermost frame.
    VarDecl {
        /// The name of the variable.
        name:          String,
        /// The declared type, if any. Parsed and then ignored.
        declared_type: Option<String>,
        /// The initializer expression.
        init:          Expr,
        /// Line number in the source code.
        line:          usize,
    },
    /// An assignment to an existing binding: `x = expr;`.
    Assign {
        /// The name of the variable.
        name:  String,
        /// The value being assigned.
        value: Expr,
        /// Line number in the source code.
        line:  usize,
    },
    /// A conditional: `? cond { ... } otherwise { ... }`.
    If {
        /// The condition expression.
        condition:  Expr,
        /// Statements executed when the condition is truthy.
        then_block: Vec<Self>,
        /// Statements executed otherwise. A chained `otherwise ?` is
        /// represented as a single nested `If` inside this block.
        else_block: Option<Vec<Self>>,
        /// Line number in the source code.
        line:       usize,
    },
    /// A `while` loop.
    While {
        /// The loop condition.
        condition: Expr,
        /// The loop body.
        body:      Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// A `for` loop over an array or a range.
    For {
        /// The loop variable name.
        var:      String,
        /// The iterable expression.
        iterable: Expr,
        /// The loop body.
        body:     Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// A `return` statement, unwinding to the nearest enclosing call.
    Return {
        /// The returned expression, or `None` for a bare `return;`.
        value: Option<Expr>,
        /// Line number in the source code.
        line:  usize,
    },
    /// A function declaration: `name(params) => body`.
    FunctionDecl {
        /// The function name.
        name:        String,
        /// The parameter list.
        params:      Vec<Param>,
        /// The declared return type, if any. Parsed and then ignored.
        return_type: Option<String>,
        /// The function body. A single-expression body is desugared to a
        /// block containing one `return`.
        body:        Vec<Self>,
        /// Line number in the source code.
        line:        usize,
    },
    /// A standalone expression evaluated for its effects.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Stmt {
    /// Gets the source line this statement starts on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::VarDecl { line, .. }
            | Self::Assign { line, .. }
            | Self::If { line, .. }
            | Self::While { line, .. }
            | Self::For { line, .. }
            | Self::Return { line, .. }
            | Self::FunctionDecl { line, .. }
            | Self::Expression { line, .. } => *line,
        }
    }
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`); always produces a float
    Div,
    /// Modulo (`%`)
    Mod,
    /// Exponentiation (`**`)
    Pow,
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
    /// Short-circuiting logical and (`and`)
    And,
    /// Short-circuiting logical or (`or`)
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
    /// Logical not (e.g. `not x`).
    Not,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mod, Mul, NotEqual, Or,
            Pow, Sub,
        };
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Mod => "%",
            Pow => "**",
            Less => "<",
            Greater => ">",
            LessEqual => "<=",
            GreaterEqual => ">=",
            Equal => "==",
            NotEqual => "!=",
            And => "and",
            Or => "or",
        };
        write!(f, "{operator}")
    }
}

