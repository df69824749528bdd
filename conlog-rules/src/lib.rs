//! conlog-rules - 日志器规则 DSL
//!
//! 用紧凑的逐行文本声明哪些层级化的日志器（以点分路径命名）在什么级别输出，
//! 并为任意点分名称解析出唯一的有效级别。
//!
//! 数据流：
//!
//! ```text
//! 原始文本 → normalize → 规范文本 ─┬→ expand → RuleMap → resolve
//!                                  └→ pretty → 展示文本
//! ```
//!
//! # 规则写法
//!
//! ```text
//! # 注释行
//! com.mypackage.MyClass : debug     完整限定名 + 级别
//! com.mypackage.MyClass=d           `=` 与 `:` 等价，级别可只写首字母
//! com.mypackage. : trace            以 `.` 结尾：只作为后续短名称的包上下文
//!    MyClass                        短名称：展开为 com.mypackage.MyClass，继承 trace
//!    MyOtherClass : error
//! ```
//!
//! # 快速开始
//!
//! ```
//! use conlog_rules::{Level, RuleText};
//!
//! let text = RuleText::from_user("com.mypackage. = t\nMyClass\nMyOtherClass:e");
//! let rules = text.rules();
//!
//! assert_eq!(rules.resolve("com.mypackage.MyClass", Level::Info), Level::Trace);
//! assert_eq!(rules.resolve("com.mypackage.MyOtherClass.Inner", Level::Info), Level::Error);
//! assert_eq!(rules.resolve("com.mypackage", Level::Info), Level::Info);
//! ```

mod expand;
mod level;
mod line;
mod normalize;
mod pretty;
mod rules;
mod text;

pub use expand::{expand, InheritanceContext};
pub use level::Level;
pub use line::{is_package_marker, is_qualified, split_fields, CanonicalLine};
pub use normalize::normalize;
pub use pretty::{pretty, SHORT_NAME_INDENT};
pub use rules::{RuleMap, SharedRules};
pub use text::RuleText;
