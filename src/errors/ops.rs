use std::fmt;

/// 张量逐元素运算所用的运算符，用于形状不一致时的报错信息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
}

impl Operator {
    /// 对应的Rust运算符号
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::AddAssign => "+=",
            Self::Sub => "-",
            Self::SubAssign => "-=",
            Self::Mul => "*",
            Self::MulAssign => "*=",
            Self::Div => "/",
        }
    }

    /// 是否为原地运算（结果写回左操作数）
    pub const fn is_inplace(self) -> bool {
        matches!(self, Self::AddAssign | Self::SubAssign | Self::MulAssign)
    }

    const fn verb(self) -> &'static str {
        match self {
            Self::Add | Self::AddAssign => "相加",
            Self::Sub | Self::SubAssign => "相减",
            Self::Mul | Self::MulAssign => "相乘",
            Self::Div => "相除",
        }
    }
}

/// 形如`相加（+）`、`自相减（-=）`
impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.is_inplace() { "自" } else { "" };
        write!(f, "{prefix}{}（{}）", self.verb(), self.symbol())
    }
}
