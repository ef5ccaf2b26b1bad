//! SQL 拼接缓冲区：子句之间自动补一个空格。

#[derive(Debug, Default, Clone)]
pub(crate) struct StringBuilder {
    buf: String,
}

impl StringBuilder {
    pub(crate) fn new() -> Self {
        Self { buf: String::new() }
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

    /// `keyword body`；`body` 为空时整个子句都不写。
    pub(crate) fn write_clause(&mut self, keyword: &str, body: &str) {
        if body.is_empty() {
            return;
        }
        if keyword.is_empty() {
            self.write_leading(body);
            return;
        }
        self.write_leading(keyword);
        self.buf.push(' ');
        self.buf.push_str(body);
    }

    pub(crate) fn into_string(self) -> String {
        self.buf
    }
}
