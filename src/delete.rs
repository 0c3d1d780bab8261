//! DeleteQuery：构建 DELETE 语句。

use crate::args::FlattenIntoArgs;
use crate::builder::QueryBuilder;
use crate::clauses::{WhereClause, push_condition, write_conditions};
use crate::driver::Driver;
use crate::error::{BuildError, BuildResult, check_arg_count};
use crate::expr::Expr;
use crate::string_builder::StringBuilder;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteQuery {
    driver: Option<Driver>,
    table: String,
    conditions: Vec<WhereClause>,
}

impl DeleteQuery {
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
                tracing::debug!(statement = "delete", sql = %sql, args = args.len(), "built query");
                Ok((sql, args))
            }
            Err(e) => {
                tracing::debug!(statement = "delete", error = %e, "build failed");
                Err(e)
            }
        }
    }

    fn build_inner(&self) -> BuildResult {
        if self.table.is_empty() {
            return Err(BuildError::TableIsEmpty);
        }

        let mut buf = StringBuilder::new();
        let mut args = Vec::new();
        buf.write_str("DELETE FROM ");
        buf.write_str(&self.table);
        write_conditions(&mut buf, "WHERE", &self.conditions, &mut args);

        let sql = buf.into_string();
        check_arg_count(&sql, &args)?;
        Ok((sql, args))
    }
}

impl QueryBuilder for DeleteQuery {
    fn build(&self) -> BuildResult {
        DeleteQuery::build(self)
    }

    fn driver_name(&self) -> Option<&Driver> {
        self.driver.as_ref()
    }
}
