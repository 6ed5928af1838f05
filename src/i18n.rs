// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持葡萄牙语（默认 pt-BR）和英文
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 注意: rust-i18n 全局默认语言为 "en"，此处自行保存当前语言，
//       所有翻译都显式带 locale 参数
// ==========================================

use once_cell::sync::Lazy;
use std::sync::RwLock;

/// 默认语言
pub const DEFAULT_LOCALE: &str = "pt-BR";

static CURRENT_LOCALE: Lazy<RwLock<String>> =
    Lazy::new(|| RwLock::new(DEFAULT_LOCALE.to_string()));

/// 获取当前语言
pub fn current_locale() -> String {
    CURRENT_LOCALE
        .read()
        .map(|l| l.clone())
        .unwrap_or_else(|_| DEFAULT_LOCALE.to_string())
}

/// 设置语言
///
/// # 参数
/// - locale: 语言代码（"pt-BR" 或 "en"）
pub fn set_locale(locale: &str) {
    if let Ok(mut current) = CURRENT_LOCALE.write() {
        *current = locale.to_string();
    }
    rust_i18n::set_locale(locale);
}

/// 已加载的语言列表
pub fn available_locales() -> Vec<String> {
    rust_i18n::available_locales!()
        .into_iter()
        .map(|l| l.to_string())
        .collect()
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use mass_import::i18n::t;
/// let msg = t("orchestrator.no_records");
/// ```
pub fn t(key: &str) -> String {
    t_in(&current_locale(), key, &[])
}

/// 翻译消息（带参数）
///
/// # 示例
/// ```no_run
/// use mass_import::i18n::t_with_args;
/// let msg = t_with_args("validation.required", &[("label", "Nome")]);
/// ```
pub fn t_with_args(key: &str, args: &[(&str, &str)]) -> String {
    t_in(&current_locale(), key, args)
}

/// 按指定语言翻译（不修改全局语言）
pub fn t_in(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
    interpolate(rust_i18n::t!(key, locale = locale).to_string(), args)
}

fn interpolate(mut result: String, args: &[(&str, &str)]) -> String {
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    // 当前语言为全局状态，且测试并行执行；
    // 这里只用 t_in 读取指定语言，不切换全局语言。

    #[test]
    fn test_default_locale_is_portuguese() {
        let msg = t("orchestrator.no_records");
        assert_eq!(msg, "O arquivo não contém registros.");
    }

    #[test]
    fn test_translate_with_args() {
        let msg = t_with_args("validation.required", &[("label", "Nome")]);
        assert_eq!(msg, "Campo obrigatório \"Nome\" não informado.");
    }

    #[test]
    fn test_translate_explicit_locale() {
        let msg = t_in("en", "validation.not_numeric", &[("value", "abc")]);
        assert_eq!(msg, "Value \"abc\" must be numeric.");

        let msg = t_in("pt-BR", "validation.not_numeric", &[("value", "abc")]);
        assert_eq!(msg, "Valor \"abc\" deve ser numérico.");
    }

    #[test]
    fn test_available_locales() {
        let locales = available_locales();
        assert!(locales.iter().any(|l| l == "pt-BR"));
        assert!(locales.iter().any(|l| l == "en"));
    }
}
