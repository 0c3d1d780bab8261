//! 构建语句时的校验错误。

use crate::value::SqlValue;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BuildError {
    #[error("table name could not be empty")]
    TableIsEmpty,
    #[error("column/value map is empty")]
    ColumnValueMapIsEmpty,
    #[error("wrong number of arguments: {placeholders} placeholders, {args} args")]
    WrongNumberOfArgs { placeholders: usize, args: usize },
}

/// `build()` 的返回值：`?` 形式的 SQL 与扁平参数列表。
pub type BuildResult = Result<(String, Vec<SqlValue>), BuildError>;

/// 校验 `?` 的个数与参数个数一致。
///
/// 必须在改写占位符之前调用：这里只数 `?`。
pub(crate) fn check_arg_count(sql: &str, args: &[SqlValue]) -> Result<(), BuildError> {
    let placeholders = sql.bytes().filter(|&b| b == b'?').count();
    if placeholders != args.len() {
        return Err(BuildError::WrongNumberOfArgs {
            placeholders,
            args: args.len(),
        });
    }
    Ok(())
}
