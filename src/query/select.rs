use super::expr::{Expr, Predicate};
use super::render::{RenderedQuery, SqlWriter};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    Asc,
    #[default]
    Desc,
}

impl SortOrder {
    pub fn as_sql(self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TableRef {
    pub name: &'static str,
    pub alias: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Projection {
    All,
    Items(Vec<(Expr, Option<&'static str>)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub projection: Projection,
    pub from: Vec<TableRef>,
    pub filter: Option<Predicate>,
    pub group_by: Vec<Expr>,
    pub having: Option<Predicate>,
    pub order_by: Vec<(Expr, SortOrder)>,
    pub limit: Option<Expr>,
    pub offset: Option<Expr>,
}

impl Select {
    pub fn table(table: &'static str) -> Self {
        Self {
            projection: Projection::All,
            from: vec![TableRef {
                name: table,
                alias: None,
            }],
            filter: None,
            group_by: Vec::new(),
            having: None,
            order_by: Vec::new(),
            limit: None,
            offset: None,
        }
    }

    pub fn table_as(table: &'static str, alias: &'static str) -> Self {
        let mut select = Self::table(table);
        select.from[0].alias = Some(alias);
        select
    }

    /// Adds another table to the from-list (implicit cross join; the filter
    /// carries the join condition).
    pub fn join(mut self, table: &'static str, alias: &'static str) -> Self {
        self.from.push(TableRef {
            name: table,
            alias: Some(alias),
        });
        self
    }

    pub fn column(mut self, expr: Expr, alias: Option<&'static str>) -> Self {
        match self.projection {
            Projection::All => self.projection = Projection::Items(vec![(expr, alias)]),
            Projection::Items(ref mut items) => items.push((expr, alias)),
        }
        self
    }

    /// ANDs the predicate into the existing filter.
    pub fn filter(mut self, predicate: Predicate) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(predicate),
            None => predicate,
        });
        self
    }

    pub fn group_by(mut self, expr: Expr) -> Self {
        self.group_by.push(expr);
        self
    }

    pub fn having(mut self, predicate: Predicate) -> Self {
        self.having = Some(match self.having.take() {
            Some(existing) => existing.and(predicate),
            None => predicate,
        });
        self
    }

    pub fn order_by(mut self, expr: Expr, order: SortOrder) -> Self {
        self.order_by.push((expr, order));
        self
    }

    pub fn limit(mut self, limit: Expr) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn offset(mut self, offset: Expr) -> Self {
        self.offset = Some(offset);
        self
    }
}

/// A select body preceded by named common table expressions.
#[derive(Debug, Clone, PartialEq)]
pub struct Query {
    pub ctes: Vec<(&'static str, Select)>,
    pub body: Select,
}

impl Query {
    pub fn new(body: Select) -> Self {
        Self {
            ctes: Vec::new(),
            body,
        }
    }

    pub fn with(mut self, name: &'static str, select: Select) -> Self {
        self.ctes.push((name, select));
        self
    }

    pub fn render(&self) -> RenderedQuery {
        let mut writer = SqlWriter::default();
        writer.query(self);
        writer.finish()
    }
}
