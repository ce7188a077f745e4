//! `$DWGCODEPAGE` names to text encodings

use encoding_rs::Encoding;

/// Encoding for a header code page name such as `ANSI_1252`.
///
/// Returns `None` for names that mean UTF-8 or plain ASCII. Unrecognized
/// names fall back to Windows-1252.
pub fn encoding_for_code_page(name: &str) -> Option<&'static Encoding> {
    let name = name.trim().to_ascii_lowercase();

    if matches!(name.as_str(), "ascii" | "utf-8" | "utf8" | "unicode") {
        return None;
    }

    let resolved = if let Some(number) = name.strip_prefix("ansi_") {
        match number {
            "932" => Some(encoding_rs::SHIFT_JIS),
            "936" => Some(encoding_rs::GBK),
            "949" => Some(encoding_rs::EUC_KR),
            "950" => Some(encoding_rs::BIG5),
            _ => Encoding::for_label(format!("windows-{}", number).as_bytes()),
        }
    } else if let Some(part) = name
        .strip_prefix("iso8859-")
        .or_else(|| name.strip_prefix("iso_8859-"))
    {
        Encoding::for_label(format!("iso-8859-{}", part).as_bytes())
    } else {
        match name.as_str() {
            "gb2312" => Some(encoding_rs::GBK),
            "big5" => Some(encoding_rs::BIG5),
            "korean" | "johab" => Some(encoding_rs::EUC_KR),
            "koi8-r" => Some(encoding_rs::KOI8_R),
            "koi8-u" => Some(encoding_rs::KOI8_U),
            "dos855" | "dos866" => Some(encoding_rs::IBM866),
            "dos852" => Some(encoding_rs::WINDOWS_1250),
            "dos857" => Some(encoding_rs::WINDOWS_1254),
            "dos869" => Some(encoding_rs::WINDOWS_1253),
            _ => None,
        }
    };

    Some(resolved.unwrap_or(encoding_rs::WINDOWS_1252))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ansi_pages() {
        assert_eq!(encoding_for_code_page("ANSI_1251"), Some(encoding_rs::WINDOWS_1251));
        assert_eq!(encoding_for_code_page("ansi_1252"), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(encoding_for_code_page("ANSI_932"), Some(encoding_rs::SHIFT_JIS));
    }

    #[test]
    fn test_iso_pages() {
        assert_eq!(encoding_for_code_page("ISO8859-2"), Some(encoding_rs::ISO_8859_2));
        // WHATWG maps Latin-1 labels onto Windows-1252
        assert_eq!(encoding_for_code_page("iso_8859-1"), Some(encoding_rs::WINDOWS_1252));
    }

    #[test]
    fn test_unicode_names_need_no_transcoding() {
        assert_eq!(encoding_for_code_page("UTF-8"), None);
        assert_eq!(encoding_for_code_page(" ascii "), None);
    }

    #[test]
    fn test_unknown_falls_back_to_1252() {
        assert_eq!(encoding_for_code_page("MAC_ROMAN_X"), Some(encoding_rs::WINDOWS_1252));
        assert_eq!(encoding_for_code_page("ANSI_9999"), Some(encoding_rs::WINDOWS_1252));
    }
}
