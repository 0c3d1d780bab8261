//! InsertQuery：构建 INSERT 语句。

use crate::builder::QueryBuilder;
use crate::driver::Driver;
use crate::error::{BuildError, BuildResult, check_arg_count};
use crate::record::{ColumnValues, SqlRecord};
use crate::string_builder::StringBuilder;
use crate::value::SqlValue;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct InsertQuery {
    driver: Option<Driver>,
    table: String,
    column_values: ColumnValues,
}

impl InsertQuery {
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

    /// 用映射设置列/值，列按名称升序排列。会覆盖之前设置的列/值。
    pub fn map_values<I, K, V>(&self, map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<SqlValue>,
    {
        self.column_values(ColumnValues::from_map(map))
    }

    /// 用记录设置列/值，列按字段声明顺序排列。会覆盖之前设置的列/值。
    pub fn struct_values<R: SqlRecord + ?Sized>(&self, record: &R) -> Self {
        self.column_values(ColumnValues::from_record(record))
    }

    pub fn column_values(&self, column_values: ColumnValues) -> Self {
        self.with(|q| q.column_values = column_values)
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
                tracing::debug!(statement = "insert", sql = %sql, args = args.len(), "built query");
                Ok((sql, args))
            }
            Err(e) => {
                tracing::debug!(statement = "insert", error = %e, "build failed");
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
        buf.write_str("INSERT INTO ");
        buf.write_str(&self.table);
        buf.write_char('(');
        buf.write_joined(self.column_values.columns(), ",");
        buf.write_str(") VALUES(");
        buf.write_placeholders(self.column_values.len());
        buf.write_char(')');

        let sql = buf.into_string();
        let args: Vec<SqlValue> = self.column_values.values().cloned().collect();
        check_arg_count(&sql, &args)?;
        Ok((sql, args))
    }
}

impl QueryBuilder for InsertQuery {
    fn build(&self) -> BuildResult {
        InsertQuery::build(self)
    }

    fn driver_name(&self) -> Option<&Driver> {
        self.driver.as_ref()
    }
}
