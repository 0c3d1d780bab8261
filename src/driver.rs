//! 驱动标识与进程级默认驱动。

use crate::bind::{BindType, bind_type};
use std::borrow::Cow;
use std::fmt;
use std::sync::{Mutex, MutexGuard, RwLock};

/// 数据库驱动名。任意字符串都可以，未识别的名字不会改写占位符。
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Driver(Cow<'static, str>);

impl Driver {
    pub const POSTGRES: Driver = Driver::from_static("postgres");
    pub const PGX: Driver = Driver::from_static("pgx");
    pub const PQ_TIMEOUTS: Driver = Driver::from_static("pq-timeouts");
    pub const CLOUDSQL_POSTGRES: Driver = Driver::from_static("cloudsqlpostgres");
    pub const MYSQL: Driver = Driver::from_static("mysql");
    pub const SQLITE3: Driver = Driver::from_static("sqlite3");
    pub const OCI8: Driver = Driver::from_static("oci8");
    pub const ORA: Driver = Driver::from_static("ora");
    pub const GORACLE: Driver = Driver::from_static("goracle");
    pub const SQLSERVER: Driver = Driver::from_static("sqlserver");

    pub const fn from_static(name: &'static str) -> Self {
        Self(Cow::Borrowed(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn bind_type(&self) -> BindType {
        bind_type(self)
    }

    /// 按本驱动的占位符风格改写 `query`。
    pub fn rebind(&self, query: &str) -> String {
        self.bind_type().rebind(query)
    }
}

impl From<&'static str> for Driver {
    fn from(name: &'static str) -> Self {
        Self::from_static(name)
    }
}

impl From<String> for Driver {
    fn from(name: String) -> Self {
        Self(Cow::Owned(name))
    }
}

impl fmt::Display for Driver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

static DEFAULT_DRIVER: RwLock<Driver> = RwLock::new(Driver::from_static(""));
static DEFAULT_DRIVER_LOCK: Mutex<()> = Mutex::new(());

/// 当前进程级默认驱动（初始为空名，即不改写占位符）。
pub fn default_driver() -> Driver {
    DEFAULT_DRIVER
        .read()
        .unwrap_or_else(|e| e.into_inner())
        .clone()
}

/// 设置进程级默认驱动，返回旧值。
pub fn set_default_driver(driver: impl Into<Driver>) -> Driver {
    let driver = driver.into();
    tracing::debug!(driver = %driver, "set default driver");
    let mut g = DEFAULT_DRIVER.write().unwrap_or_else(|e| e.into_inner());
    std::mem::replace(&mut *g, driver)
}

/// 修改默认驱动的 RAII guard（会持有一个全局锁，避免并行测试互相干扰）。
pub struct DefaultDriverGuard {
    _lock: MutexGuard<'static, ()>,
    old: Driver,
}

impl Drop for DefaultDriverGuard {
    fn drop(&mut self) {
        let _ = set_default_driver(std::mem::take(&mut self.old));
    }
}

/// 在一个作用域内临时设置默认驱动，并保证退出作用域后自动恢复。
///
/// 同一线程上不要嵌套调用：前一个 guard 仍持有全局锁时再次调用会死锁。
/// 作用域内需要再次切换时，直接调用 [`set_default_driver`]。
pub fn set_default_driver_scoped(driver: impl Into<Driver>) -> DefaultDriverGuard {
    let lock = DEFAULT_DRIVER_LOCK
        .lock()
        .unwrap_or_else(|e| e.into_inner());
    let old = set_default_driver(driver);
    DefaultDriverGuard { _lock: lock, old }
}

/// 用默认驱动的占位符风格改写 `query`。
pub fn rebind(query: &str) -> String {
    default_driver().rebind(query)
}
