//! 子句值对象：每个子句是一段 SQL 文本加上它自己的有序参数，构造后不再修改。

use crate::expr::Expr;
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

/// 列、WHERE、HAVING 子句共用的形态。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Clause {
    pub(crate) sql: String,
    pub(crate) args: Vec<SqlValue>,
}

impl Clause {
    pub fn sql(&self) -> &str {
        &self.sql
    }

    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }
}

impl From<Expr> for Clause {
    fn from(e: Expr) -> Self {
        let (sql, args) = e.into_parts();
        Self { sql, args }
    }
}

pub type ColumnClause = Clause;
pub type WhereClause = Clause;
pub type HavingClause = Clause;

/// JOIN 类型，未识别的写法一律当作 INNER JOIN。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum JoinType {
    #[default]
    Inner,
    Left,
    Right,
}

impl JoinType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Inner => "JOIN",
            Self::Left => "LEFT JOIN",
            Self::Right => "RIGHT JOIN",
        }
    }
}

impl From<&str> for JoinType {
    fn from(s: &str) -> Self {
        let s = s.trim();
        if s.eq_ignore_ascii_case("left") || s.eq_ignore_ascii_case("left join") {
            Self::Left
        } else if s.eq_ignore_ascii_case("right") || s.eq_ignore_ascii_case("right join") {
            Self::Right
        } else {
            Self::Inner
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct JoinClause {
    pub(crate) table: String,
    pub(crate) on: String,
    pub(crate) join_type: JoinType,
    pub(crate) args: Vec<SqlValue>,
}

impl JoinClause {
    pub fn table(&self) -> &str {
        &self.table
    }

    pub fn on(&self) -> &str {
        &self.on
    }

    pub fn join_type(&self) -> JoinType {
        self.join_type
    }

    pub fn args(&self) -> &[SqlValue] {
        &self.args
    }

    fn write_to(&self, buf: &mut StringBuilder) {
        buf.write_leading(self.join_type.as_str());
        buf.write_leading(&self.table);
        buf.write_str(" ON ");
        buf.write_str(&self.on);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupByClause {
    pub(crate) fields: String,
}

impl GroupByClause {
    pub fn fields(&self) -> &str {
        &self.fields
    }
}

/// 排序方向，未识别的写法一律当作 ASC。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderDirection {
    #[default]
    Asc,
    Desc,
}

impl OrderDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}

impl From<&str> for OrderDirection {
    fn from(s: &str) -> Self {
        if s.trim().eq_ignore_ascii_case("desc") {
            Self::Desc
        } else {
            Self::Asc
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderByClause {
    pub(crate) field: String,
    pub(crate) direction: OrderDirection,
}

impl OrderByClause {
    pub fn field(&self) -> &str {
        &self.field
    }

    pub fn direction(&self) -> OrderDirection {
        self.direction
    }
}

/// 写入 ` <keyword> (c1) AND (c2) ...`，并按子句顺序追加参数。
pub(crate) fn write_conditions(
    buf: &mut StringBuilder,
    keyword: &str,
    clauses: &[Clause],
    args: &mut Vec<SqlValue>,
) {
    if clauses.is_empty() {
        return;
    }
    buf.write_leading(keyword);
    buf.write_char(' ');
    for (i, c) in clauses.iter().enumerate() {
        if i > 0 {
            buf.write_str(" AND ");
        }
        buf.write_char('(');
        buf.write_str(&c.sql);
        buf.write_char(')');
        args.extend_from_slice(&c.args);
    }
}

pub(crate) fn write_joins(buf: &mut StringBuilder, joins: &[JoinClause], args: &mut Vec<SqlValue>) {
    for j in joins {
        j.write_to(buf);
        args.extend_from_slice(&j.args);
    }
}

pub(crate) fn write_group_by(buf: &mut StringBuilder, groups: &[GroupByClause]) {
    if groups.is_empty() {
        return;
    }
    buf.write_leading("GROUP BY ");
    buf.write_joined(groups.iter().map(|g| g.fields.as_str()), ",");
}

pub(crate) fn write_order_by(buf: &mut StringBuilder, orders: &[OrderByClause]) {
    if orders.is_empty() {
        return;
    }
    buf.write_leading("ORDER BY ");
    for (i, o) in orders.iter().enumerate() {
        if i > 0 {
            buf.write_char(',');
        }
        buf.write_str(&o.field);
        buf.write_char(' ');
        buf.write_str(o.direction.as_str());
    }
}

/// 追加一个条件子句；只有文本和参数都为空（例如空 `IN`）时才丢弃。
///
/// 空文本但带参数的条件会保留下来，交给参数个数校验报错。
pub(crate) fn push_condition(list: &mut Vec<Clause>, expr: Expr) {
    if expr.is_empty() && expr.args().is_empty() {
        return;
    }
    list.push(expr.into());
}
