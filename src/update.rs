//! UpdateQuery：构建 UPDATE 语句。

use crate::args::FlattenIntoArgs;
use crate::builder::QueryBuilder;
use crate::clauses::{WhereClause, push_condition, write_conditions};
use crate::driver::Driver;
use crate::error::{BuildError, BuildResult, check_arg_count};
use crate::expr::Expr;
use crate::record::{ColumnValues, SqlRecord};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateQuery {
    driver: Option<Driver>,
    table: String,
    column_values: ColumnValues,
    conditions: Vec<WhereClause>,
}

impl UpdateQuery {
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
        self.with(|q| q.table = name)
    }

    pub fn driver(&self, driver: impl Into<Driver>) -> Self {
        let driver = driver.into();
        self.with(|q| q.driver = Some(driver))
    }

    /// 用映射设置 SET 列/值，列按名称升序排列。会覆盖之前设置的列/值。
    pub fn map_values<I, K, V>(&self, map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SqlValue>,
    {
        self.column_values(ColumnValues::from_map(map))
    }

    /// 用记录设置 SET 列/值，列按字段声明顺序排列。会覆盖之前设置的列/值。
    pub fn struct_values<R: SqlRecord + ?Sized>(&self, record: &R) -> Self {
        self.column_values(ColumnValues::from_record(record))
    }

    pub fn column_values(&self, column_values: ColumnValues) -> Self {
        self.with(|q| q.column_values = column_values)
    }

    pub fn where_(&self, sql: impl Into<String>, args: impl FlattenIntoArgs) -> Self {
        self.where_expr(Expr::new(sql, args))
    }

    pub fn where_expr(&self, expr: impl Into<Expr>) -> Self {
        let expr = expr.into();
        self.with(|q| push_condition(&mut q.conditions, expr))
    }

    pub fn table_name(&self) -> &str {
        &self.table
    }

    pub fn rebind(&self, query: &str) -> String {
        QueryBuilder::rebind(self, query)
    }

    pub fn build(&self) -> BuildResult {
        match self.build_inner() {
            Ok((sql, args)) => {
                tracing::debug!(statement = "update", sql = %sql, args = args.len(), "built query");
                Ok((sql, args))
            }
            Err(e) => {
                tracing::debug!(statement = "update", error = %e, "build failed");
                Err(e)
            }
        }
    }

    fn build_inner(&self) -> BuildResult {
        if self.table.is_empty() {
            return Err(BuildError::TableIsEmpty);
        }
        if self.column_values.is_empty() {
            return Err(BuildError::ColumnValueMapIsEmpty);
        }

        let mut buf = StringBuilder::new();
        let mut args: Vec<SqlValue> = Vec::with_capacity(self.column_values.len());

        buf.write_str("UPDATE ");
        buf.write_str(&self.table);
        buf.write_str(" SET ");
        for (i, cv) in self.column_values.iter().enumerate() {
            if i > 0 {
                buf.write_char(',');
            }
            buf.write_str(&cv.column);
            buf.write_str("=?");
            args.push(cv.value.clone());
        }

        write_conditions(&mut buf, "WHERE", &self.conditions, &mut args);

        let sql = buf.into_string();
        check_arg_count(&sql, &args)?;
        Ok((sql, args))
    }
}

impl QueryBuilder for UpdateQuery {
    fn build(&self) -> BuildResult {
        UpdateQuery::build(self)
    }

    fn driver_name(&self) -> Option<&Driver> {
        self.driver.as_ref()
    }
}
