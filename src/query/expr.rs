use rusqlite::types::Value;

use super::select::Select;

/// Scalar expression. Identifiers are `&'static str` so nothing derived from a
/// request can ever reach the statement text; request values go through
/// [`Expr::Param`] and are bound.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Column(&'static str),
    Param(Value),
    Add(Box<Expr>, Box<Expr>),
    /// Number of rows in the group satisfying the predicate.
    CountIf(Box<Predicate>),
    /// Sum that yields 0 rather than NULL.
    Sum(Box<Expr>),
    /// `won / max(total, 1)` truncated to two decimals, expressed in
    /// integer hundredths.
    TruncatedRatio {
        won: &'static str,
        total: &'static str,
    },
}

pub fn col(name: &'static str) -> Expr {
    Expr::Column(name)
}

pub fn param(value: impl Into<Value>) -> Expr {
    Expr::Param(value.into())
}

impl Expr {
    pub fn add(self, other: Expr) -> Expr {
        Expr::Add(Box::new(self), Box::new(other))
    }

    pub fn sum(self) -> Expr {
        Expr::Sum(Box::new(self))
    }

    pub fn count_if(predicate: Predicate) -> Expr {
        Expr::CountIf(Box::new(predicate))
    }

    pub fn eq(self, other: Expr) -> Predicate {
        Predicate::Compare(self, CompareOp::Eq, other)
    }

    pub fn not_eq(self, other: Expr) -> Predicate {
        Predicate::Compare(self, CompareOp::NotEq, other)
    }

    pub fn lt(self, other: Expr) -> Predicate {
        Predicate::Compare(self, CompareOp::Lt, other)
    }

    pub fn gt(self, other: Expr) -> Predicate {
        Predicate::Compare(self, CompareOp::Gt, other)
    }

    pub fn gt_eq(self, other: Expr) -> Predicate {
        Predicate::Compare(self, CompareOp::GtEq, other)
    }

    pub fn between(self, low: Expr, high: Expr) -> Predicate {
        Predicate::Between(self, low, high)
    }

    pub fn like(self, pattern: Expr) -> Predicate {
        Predicate::Like {
            expr: self,
            pattern,
            negated: false,
        }
    }

    pub fn not_like(self, pattern: Expr) -> Predicate {
        Predicate::Like {
            expr: self,
            pattern,
            negated: true,
        }
    }

    pub fn is_not_null(self) -> Predicate {
        Predicate::NotNull(self)
    }

    pub fn in_select(self, select: Select) -> Predicate {
        Predicate::InSelect(self, Box::new(select))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompareOp {
    Eq,
    NotEq,
    Lt,
    Gt,
    GtEq,
}

impl CompareOp {
    pub fn as_sql(self) -> &'static str {
        match self {
            CompareOp::Eq => "=",
            CompareOp::NotEq => "!=",
            CompareOp::Lt => "<",
            CompareOp::Gt => ">",
            CompareOp::GtEq => ">=",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    All(Vec<Predicate>),
    Any(Vec<Predicate>),
    Compare(Expr, CompareOp, Expr),
    Between(Expr, Expr, Expr),
    Like {
        expr: Expr,
        pattern: Expr,
        negated: bool,
    },
    NotNull(Expr),
    InSelect(Expr, Box<Select>),
}

impl Predicate {
    /// Conjunction, flattening nested `All`s.
    pub fn and(self, other: Predicate) -> Predicate {
        match (self, other) {
            (Predicate::All(mut left), Predicate::All(right)) => {
                left.extend(right);
                Predicate::All(left)
            }
            (Predicate::All(mut left), right) => {
                left.push(right);
                Predicate::All(left)
            }
            (left, right) => Predicate::All(vec![left, right]),
        }
    }

    pub fn or(self, other: Predicate) -> Predicate {
        match self {
            Predicate::Any(mut preds) => {
                preds.push(other);
                Predicate::Any(preds)
            }
            left => Predicate::Any(vec![left, other]),
        }
    }
}
