use rusqlite::types::Value;

use super::expr::{Expr, Predicate};
use super::select::{Projection, Query, Select};

/// SQLite statement text plus its positional parameters. Placeholder `?N`
/// in `sql` binds `params[N - 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedQuery {
    pub sql: String,
    pub params: Vec<Value>,
}

#[derive(Default)]
pub(crate) struct SqlWriter {
    sql: String,
    params: Vec<Value>,
}

impl SqlWriter {
    pub(crate) fn finish(self) -> RenderedQuery {
        RenderedQuery {
            sql: self.sql,
            params: self.params,
        }
    }

    fn push(&mut self, text: &str) {
        self.sql.push_str(text);
    }

    fn bind(&mut self, value: &Value) {
        self.params.push(value.clone());
        let placeholder = format!("?{}", self.params.len());
        self.push(&placeholder);
    }

    pub(crate) fn query(&mut self, query: &Query) {
        if !query.ctes.is_empty() {
            self.push("WITH ");
            for (idx, (name, select)) in query.ctes.iter().enumerate() {
                if idx > 0 {
                    self.push(",\n");
                }
                self.push(name);
                self.push(" AS (\n");
                self.select(select);
                self.push("\n)");
            }
            self.push("\n");
        }
        self.select(&query.body);
    }

    fn select(&mut self, select: &Select) {
        self.push("SELECT ");
        match &select.projection {
            Projection::All => self.push("*"),
            Projection::Items(items) => {
                for (idx, (expr, alias)) in items.iter().enumerate() {
                    if idx > 0 {
                        self.push(", ");
                    }
                    self.expr(expr);
                    if let Some(alias) = alias {
                        self.push(" AS ");
                        self.push(alias);
                    }
                }
            }
        }

        self.push("\nFROM ");
        for (idx, table) in select.from.iter().enumerate() {
            if idx > 0 {
                self.push(", ");
            }
            self.push(table.name);
            if let Some(alias) = table.alias {
                self.push(" ");
                self.push(alias);
            }
        }

        if let Some(filter) = &select.filter {
            self.push("\nWHERE ");
            self.predicate(filter);
        }

        if !select.group_by.is_empty() {
            self.push("\nGROUP BY ");
            for (idx, expr) in select.group_by.iter().enumerate() {
                if idx > 0 {
                    self.push(", ");
                }
                self.expr(expr);
            }
        }

        if let Some(having) = &select.having {
            self.push("\nHAVING ");
            self.predicate(having);
        }

        if !select.order_by.is_empty() {
            self.push("\nORDER BY ");
            for (idx, (expr, order)) in select.order_by.iter().enumerate() {
                if idx > 0 {
                    self.push(", ");
                }
                self.expr(expr);
                self.push(" ");
                self.push(order.as_sql());
            }
        }

        if let Some(limit) = &select.limit {
            self.push("\nLIMIT ");
            self.expr(limit);
        }
        if let Some(offset) = &select.offset {
            self.push(" OFFSET ");
            self.expr(offset);
        }
    }

    fn expr(&mut self, expr: &Expr) {
        match expr {
            Expr::Column(name) => self.push(name),
            Expr::Param(value) => self.bind(value),
            Expr::Add(left, right) => {
                self.push("(");
                self.expr(left);
                self.push(" + ");
                self.expr(right);
                self.push(")");
            }
            Expr::CountIf(predicate) => {
                self.push("SUM(CASE WHEN ");
                self.predicate(predicate);
                self.push(" THEN 1 ELSE 0 END)");
            }
            Expr::Sum(inner) => {
                self.push("COALESCE(SUM(");
                self.expr(inner);
                self.push("), 0)");
            }
            Expr::TruncatedRatio { won, total } => {
                let ratio = format!("(({won} * 100) / MAX({total}, 1))");
                self.push(&ratio);
            }
        }
    }

    fn predicate(&mut self, predicate: &Predicate) {
        match predicate {
            Predicate::All(preds) => self.joined(preds, " AND ", "1 = 1"),
            Predicate::Any(preds) => self.joined(preds, " OR ", "1 = 0"),
            Predicate::Compare(left, op, right) => {
                self.expr(left);
                self.push(" ");
                self.push(op.as_sql());
                self.push(" ");
                self.expr(right);
            }
            Predicate::Between(expr, low, high) => {
                self.expr(expr);
                self.push(" BETWEEN ");
                self.expr(low);
                self.push(" AND ");
                self.expr(high);
            }
            Predicate::Like {
                expr,
                pattern,
                negated,
            } => {
                self.expr(expr);
                self.push(if *negated { " NOT LIKE " } else { " LIKE " });
                self.expr(pattern);
            }
            Predicate::NotNull(expr) => {
                self.expr(expr);
                self.push(" IS NOT NULL");
            }
            Predicate::InSelect(expr, select) => {
                self.expr(expr);
                self.push(" IN (");
                self.select(select);
                self.push(")");
            }
        }
    }

    fn joined(&mut self, preds: &[Predicate], separator: &str, empty: &str) {
        if preds.is_empty() {
            self.push(empty);
            return;
        }
        self.push("(");
        for (idx, pred) in preds.iter().enumerate() {
            if idx > 0 {
                self.push(separator);
            }
            self.predicate(pred);
        }
        self.push(")");
    }
}
