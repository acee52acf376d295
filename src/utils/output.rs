//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块和 `main.rs` 使用
//! - 使用 `colored` crate

use colored::Colorize;
use std::error::Error;

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印错误及其完整的 source 链
pub fn print_error_chain(context: &str, err: &dyn Error) {
    print_error(&format!("{}: {}", context, err));
    for cause in error_chain(err).iter().skip(1) {
        eprintln!("      {} {}", "caused by:".dimmed(), cause);
    }
}

/// 收集错误的 source 链（含自身）
pub fn error_chain(err: &dyn Error) -> Vec<String> {
    let mut chain = vec![err.to_string()];
    let mut current = err.source();
    while let Some(cause) = current {
        chain.push(cause.to_string());
        current = cause.source();
    }
    chain
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::JarvisCifError;

    #[test]
    fn test_error_chain_includes_sources() {
        let err = JarvisCifError::FileWriteError {
            path: "out/JVASP-1.cif".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        let chain = error_chain(&err);
        assert_eq!(chain.len(), 2);
        assert!(chain[0].contains("out/JVASP-1.cif"));
        assert_eq!(chain[1], "denied");
    }
}
