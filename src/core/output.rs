//! Unified output formatting utilities for consistent CLI presentation.
//!
//! Standardized formatting for all ezgit output: red for errors, green for
//! success, yellow for warnings, cyan for section headers, matching the
//! palette users of the tool already know.

use colored::*;

/// Formats and prints an error message with consistent styling
///
/// # Format
/// ```text
///
/// ✗ 错误: <message>
/// ```
pub fn print_error(message: &str) {
    println!("\n{} {}", "✗ 错误:".red(), message.white());
}

/// Formats and prints a success message with consistent styling
///
/// # Format
/// ```text
///
/// ✓ <message>
/// ```
pub fn print_success(message: &str) {
    println!("\n{} {}", "✓".green(), message.green());
}

/// Formats and prints an informational message
pub fn print_info(message: &str) {
    println!("\n{}", message.cyan());
}

/// Formats and prints a warning message
pub fn print_warning(message: &str) {
    println!("\n{}", message.yellow());
}

/// Prints a boxed section header used at the top of every submenu
///
/// # Format
/// ```text
///
/// ========================================
/// <header>
/// ========================================
/// ```
pub fn print_section_header(header: &str) {
    println!("\n{}", "=".repeat(40));
    println!("{}", header.cyan());
    println!("{}", "=".repeat(40));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_error_does_not_panic() {
        print_error("测试错误信息");
    }

    #[test]
    fn test_print_success_does_not_panic() {
        print_success("操作成功");
    }

    #[test]
    fn test_print_warning_does_not_panic() {
        print_warning("无效的选择");
    }

    #[test]
    fn test_print_section_header_does_not_panic() {
        print_section_header("分支管理");
    }
}
