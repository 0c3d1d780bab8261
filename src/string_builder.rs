//! 语句拼接用的字符串缓冲。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
    }

    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            buf: String::with_capacity(n),
        }
    }

    /// 写入 `s`；如果不是首次写入，会先写入一个空格。
    pub(crate) fn write_leading(&mut self, s: &str) {
        if !self.buf.is_empty() {
            self.buf.push(' ');
        }
        self.buf.push_str(s);
    }

    pub(crate) fn write_str(&mut self, s: &str) {
        self.buf.push_str(s);
    }

    pub(crate) fn write_char(&mut self, c: char) {
        self.buf.push(c);
    }

    /// 用 `sep` 连接 `items` 写入。
    pub(crate) fn write_joined<I, S>(&mut self, items: I, sep: &str)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (i, s) in items.into_iter().enumerate() {
            if i > 0 {
                self.buf.push_str(sep);
            }
            self.buf.push_str(s.as_ref());
        }
    }

    /// 写入 `count` 个以逗号分隔的 `?`。
    pub(crate) fn write_placeholders(&mut self, count: usize) {
        self.buf.reserve(count * 2);
        for i in 0..count {
            if i > 0 {
                self.buf.push(',');
            }
            self.buf.push('?');
        }
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::StringBuilder;

    #[test]
    fn leading_space_only_after_first_write() {
        let mut buf = StringBuilder::new();
        buf.write_leading("SELECT");
        buf.write_leading("*");
        assert_eq!(buf.into_string(), "SELECT *");
    }

    #[test]
    fn placeholders_are_comma_separated() {
        let mut buf = StringBuilder::with_capacity(8);
        buf.write_placeholders(3);
        assert_eq!(buf.into_string(), "?,?,?");

        let mut empty = StringBuilder::new();
        empty.write_placeholders(0);
        assert_eq!(empty.into_string(), "");
    }

    #[test]
    fn joined_items() {
        let mut buf = StringBuilder::new();
        buf.write_joined(["a", "b", "c"], ",");
        assert_eq!(buf.into_string(), "a,b,c");
    }
}
