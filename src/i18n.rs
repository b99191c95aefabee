// ==========================================
// 国际化 (i18n) 模块
// ==========================================
// 使用 rust-i18n 库
// 支持日文（默认）、英文、中文
// 覆盖范围: 输出列名 / Sheet 名 / 导出文件名 / 状态消息
// ==========================================
// 注意: rust_i18n::i18n! 宏已在 lib.rs 中初始化
// 注意: 所有查询均显式传入 locale, 不修改全局语言
// ==========================================

/// 默认语言
pub const DEFAULT_LOCALE: &str = "ja";

/// 是否为已提供翻译的语言
pub fn is_supported(locale: &str) -> bool {
    rust_i18n::available_locales!()
        .iter()
        .any(|l| *l == locale)
}

/// 翻译消息（无参数）
///
/// # 示例
/// ```no_run
/// use procurement_summary::i18n::t;
/// let label = t("column.item_description", "ja");
/// ```
pub fn t(key: &str, locale: &str) -> String {
    rust_i18n::t!(key, locale = locale).to_string()
}

/// 翻译消息（带参数, 占位符形如 %{name}）
///
/// # 示例
/// ```no_run
/// use procurement_summary::i18n::t_with_args;
/// let msg = t_with_args("export.saved", "en", &[("path", "/tmp/out.xlsx")]);
/// ```
pub fn t_with_args(key: &str, locale: &str, args: &[(&str, &str)]) -> String {
    let mut result = t(key, locale);
    for (k, v) in args {
        let placeholder = format!("%{{{}}}", k);
        result = result.replace(&placeholder, v);
    }
    result
}

/// 输出列名（与汇总表列顺序一致）
pub fn column_labels(locale: &str) -> [String; 5] {
    [
        t("column.item_description", locale),
        t("column.supplier_count", locale),
        t("column.order_count", locale),
        t("column.quantity", locale),
        t("column.amount", locale),
    ]
}
