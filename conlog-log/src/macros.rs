//! 日志宏实现

/// 记录 Trace 级别日志
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Trace, $($arg)*)
    };
}

/// 记录 Debug 级别日志
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Debug, $($arg)*)
    };
}

/// 记录 Info 级别日志
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Info, $($arg)*)
    };
}

/// 记录 Warn 级别日志
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Warn, $($arg)*)
    };
}

/// 记录 Error 级别日志
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)*) => {
        $crate::log!($logger, $crate::Level::Error, $($arg)*)
    };
}

/// 通用日志宏
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)*) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        // 惰性求值：先检查级别，只有启用时才格式化消息
        if logger.is_enabled(level) {
            logger.log(level, ::std::format!($($arg)*));
        }
    }};
}

/// 记录日志并附带错误链
///
/// ```ignore
/// log_error!(logger, Level::Error, &err, "save {} failed", path);
/// ```
#[macro_export]
macro_rules! log_error {
    ($logger:expr, $level:expr, $err:expr, $($arg:tt)*) => {{
        let logger: &$crate::Logger = &$logger;
        let level: $crate::Level = $level;
        if logger.is_enabled(level) {
            logger.log_error(level, ::std::format!($($arg)*), $err);
        }
    }};
}
