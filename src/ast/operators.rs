/// Arithmetic operators (`+ - * /`).
///
/// Always binary: `(+ a b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    ///
    /// Plain IEEE-754 division: `(/ 1 0)` is infinity, `(/ 0 0)` is NaN.
    Div,
}

impl MathOp {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "+" => Some(MathOp::Add),
            "-" => Some(MathOp::Sub),
            "*" => Some(MathOp::Mul),
            "/" => Some(MathOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            MathOp::Add => "+",
            MathOp::Sub => "-",
            MathOp::Mul => "*",
            MathOp::Div => "/",
        }
    }

    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            MathOp::Add => left + right,
            MathOp::Sub => left - right,
            MathOp::Mul => left * right,
            MathOp::Div => left / right,
        }
    }
}

/// Comparison operators (`= < > >= <=`).
///
/// A comparison is also the language's conditional: it takes two numeric
/// operands and two branches, `(< a b then else)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    /// Equal (`=`)
    Eq,
    /// Less than (`<`)
    Lt,
    /// Greater than (`>`)
    Gt,
    /// Greater than or equal (`>=`)
    Ge,
    /// Less than or equal (`<=`)
    Le,
}

impl LogicalOp {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "=" => Some(LogicalOp::Eq),
            "<" => Some(LogicalOp::Lt),
            ">" => Some(LogicalOp::Gt),
            ">=" => Some(LogicalOp::Ge),
            "<=" => Some(LogicalOp::Le),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            LogicalOp::Eq => "=",
            LogicalOp::Lt => "<",
            LogicalOp::Gt => ">",
            LogicalOp::Ge => ">=",
            LogicalOp::Le => "<=",
        }
    }

    pub fn compare(self, left: f64, right: f64) -> bool {
        match self {
            LogicalOp::Eq => left == right,
            LogicalOp::Lt => left < right,
            LogicalOp::Gt => left > right,
            LogicalOp::Ge => left >= right,
            LogicalOp::Le => left <= right,
        }
    }
}

/// Boolean connectives (`&` and `|`), used in the same four-operand
/// conditional shape as comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BooleanOp {
    /// Logical AND (`&`)
    And,
    /// Logical OR (`|`)
    Or,
}

impl BooleanOp {
    pub fn from_symbol(s: &str) -> Option<Self> {
        match s {
            "&" => Some(BooleanOp::And),
            "|" => Some(BooleanOp::Or),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BooleanOp::And => "&",
            BooleanOp::Or => "|",
        }
    }

    pub fn combine(self, left: bool, right: bool) -> bool {
        match self {
            BooleanOp::And => left && right,
            BooleanOp::Or => left || right,
        }
    }
}
