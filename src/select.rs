//! SelectQuery：构建 SELECT 语句。

use crate::args::{FlattenIntoArgs, unify_args};
use crate::builder::QueryBuilder;
use crate::clauses::{
    ColumnClause, GroupByClause, HavingClause, JoinClause, JoinType, OrderByClause,
    OrderDirection, WhereClause, push_condition, write_conditions, write_group_by, write_joins,
    write_order_by,
};
use crate::driver::Driver;
use crate::error::{BuildError, BuildResult, check_arg_count};
use crate::expr::Expr;
use crate::string_builder::StringBuilder;

/// SELECT 构建器。
///
/// 所有链式方法都不修改接收者，而是返回一个新的构建器，因此可以从同一个
/// 基础查询分叉出多条语句：
///
/// ```
/// use querybuilder::{OrderDirection, select};
///
/// let base = select("t1").columns("c1,c2", ()).where_("c1=?", 10);
/// let newest = base.order("c1", OrderDirection::Desc).limit(1);
///
/// let (sql, _) = base.build().unwrap();
/// assert_eq!(sql, "SELECT c1,c2 FROM t1 WHERE (c1=?)");
/// let (sql, _) = newest.build().unwrap();
/// assert_eq!(sql, "SELECT c1,c2 FROM t1 WHERE (c1=?) ORDER BY c1 DESC LIMIT 1");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectQuery {
    driver: Option<Driver>,
    from: String,
    columns: Vec<ColumnClause>,
    joins: Vec<JoinClause>,
    conditions: Vec<WhereClause>,
    group_by: Vec<GroupByClause>,
    having: Vec<HavingClause>,
    order_by: Vec<OrderByClause>,
    limit: Option<u64>,
    offset: Option<u64>,
}

impl SelectQuery {
    pub fn new() -> Self {
        Self::default()
    }

    fn with(&self, f: impl FnOnce(&mut Self)) -> Self {
        let mut next = self.clone();
        f(&mut next);
        next
    }

    pub fn table(&self, name: impl Into<String>) -> Self {
        let name = name.into();
        self.with(|q| q.from = name)
    }

    pub fn driver(&self, driver: impl Into<Driver>) -> Self {
        let driver = driver.into();
        self.with(|q| q.driver = Some(driver))
    }

    /// 追加选择列；可多次调用，以逗号连接。一次都没调用时为 `*`。
    pub fn columns(&self, sql: impl Into<String>, args: impl FlattenIntoArgs) -> Self {
        let column: ColumnClause = Expr::new(sql, args).into();
        self.with(|q| q.columns.push(column))
    }

    pub fn joins(
        &self,
        table: impl Into<String>,
        on: impl Into<String>,
        join_type: JoinType,
        args: impl FlattenIntoArgs,
    ) -> Self {
        let (args, _) = unify_args(args);
        let join = JoinClause {
            table: table.into(),
            on: on.into(),
            join_type,
            args,
        };
        self.with(|q| q.joins.push(join))
    }

    /// 追加一个 WHERE 条件；多个条件各自加括号后用 AND 连接，空文本会被忽略。
    pub fn where_(&self, sql: impl Into<String>, args: impl FlattenIntoArgs) -> Self {
        self.where_expr(Expr::new(sql, args))
    }

    pub fn where_expr(&self, expr: impl Into<Expr>) -> Self {
        let expr = expr.into();
        self.with(|q| push_condition(&mut q.conditions, expr))
    }

    pub fn group(&self, fields: impl Into<String>) -> Self {
        let clause = GroupByClause {
            fields: fields.into(),
        };
        self.with(|q| q.group_by.push(clause))
    }

    pub fn having(&self, sql: impl Into<String>, args: impl FlattenIntoArgs) -> Self {
        self.having_expr(Expr::new(sql, args))
    }

    pub fn having_expr(&self, expr: impl Into<Expr>) -> Self {
        let expr = expr.into();
        self.with(|q| push_condition(&mut q.having, expr))
    }

    pub fn order(&self, field: impl Into<String>, direction: OrderDirection) -> Self {
        let clause = OrderByClause {
            field: field.into(),
            direction,
        };
        self.with(|q| q.order_by.push(clause))
    }

    pub fn limit(&self, limit: u64) -> Self {
        self.with(|q| q.limit = Some(limit))
    }

    pub fn offset(&self, offset: u64) -> Self {
        self.with(|q| q.offset = Some(offset))
    }

    pub fn table_name(&self) -> &str {
        &self.from
    }

    pub fn rebind(&self, query: &str) -> String {
        QueryBuilder::rebind(self, query)
    }

    pub fn build(&self) -> BuildResult {
        match self.build_inner() {
            Ok((sql, args)) => {
                tracing::debug!(statement = "select", sql = %sql, args = args.len(), "built query");
                Ok((sql, args))
            }
            Err(e) => {
                tracing::debug!(statement = "select", error = %e, "build failed");
                Err(e)
            }
        }
    }

    fn build_inner(&self) -> BuildResult {
        if self.from.is_empty() {
            return Err(BuildError::TableIsEmpty);
        }

        let mut buf = StringBuilder::new();
        let mut args = Vec::new();

        buf.write_str("SELECT ");
        if self.columns.is_empty() {
            buf.write_char('*');
        } else {
            buf.write_joined(self.columns.iter().map(|c| c.sql()), ",");
            for c in &self.columns {
                args.extend_from_slice(c.args());
            }
        }

        buf.write_str(" FROM ");
        buf.write_str(&self.from);

        write_joins(&mut buf, &self.joins, &mut args);
        write_conditions(&mut buf, "WHERE", &self.conditions, &mut args);
        write_group_by(&mut buf, &self.group_by);
        write_conditions(&mut buf, "HAVING", &self.having, &mut args);
        write_order_by(&mut buf, &self.order_by);

        if let Some(limit) = self.limit {
            buf.write_leading("LIMIT ");
            buf.write_str(&limit.to_string());
        }
        if let Some(offset) = self.offset {
            buf.write_leading("OFFSET ");
            buf.write_str(&offset.to_string());
        }

        let sql = buf.into_string();
        check_arg_count(&sql, &args)?;
        Ok((sql, args))
    }
}

impl QueryBuilder for SelectQuery {
    fn build(&self) -> BuildResult {
        SelectQuery::build(self)
    }

    fn driver_name(&self) -> Option<&Driver> {
        self.driver.as_ref()
    }
}
