// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持中文(默认)和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// ==========================================

// rust-i18n 的 locale 为全局状态,且 Rust 测试默认并行执行;
// 所有触碰 locale 的测试统一持有该锁串行化。
#[cfg(test)]
pub(crate) static LOCALE_TEST_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());

/// 获取当前语言
pub fn current_locale() -> String {
    rust_i18n::locale().to_string()
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码("zh-CN" 或 "en")
pub fn set_locale(locale: &str) {
    rust_i18n::set_locale(locale);
}

/// 翻译消息(无参数)
pub fn t(key: &str) -> String {
    rust_i18n::t!(key).to_string()
}

/// 翻译消息(带参数)
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    let mut result = rust_i18n::t!(key).to_string();
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locale_switch() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("en");
        assert_eq!(current_locale(), "en");
        set_locale("zh-CN");
        assert_eq!(current_locale(), "zh-CN");
    }

    #[test]
    fn test_t_with_args_substitution() {
        let _guard = LOCALE_TEST_LOCK.lock().unwrap();
        set_locale("zh-CN");
        let msg = t_with_args("dispatch.unknown_action", &[("action", "warp_drive")]);
        assert!(msg.contains("warp_drive"));
    }
}
