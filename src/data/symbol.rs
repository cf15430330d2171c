/// Yahoo suffix for instruments listed on the Korea Exchange.
pub const KRX_SUFFIX: &str = ".KS";

/// Appends `suffix` to a bare 6-digit Korean listing code; any other input
/// is returned unchanged.
pub fn normalize_symbol(raw: &str, suffix: &str) -> String {
    if raw.len() == 6 && raw.bytes().all(|b| b.is_ascii_digit()) {
        format!("{}{}", raw, suffix)
    } else {
        raw.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_digit_code_gets_suffix() {
        assert_eq!(normalize_symbol("005930", KRX_SUFFIX), "005930.KS");
        assert_eq!(normalize_symbol("000660", KRX_SUFFIX), "000660.KS");
    }

    #[test]
    fn test_suffix_applied_once() {
        let once = normalize_symbol("005930", KRX_SUFFIX);
        assert_eq!(normalize_symbol(&once, KRX_SUFFIX), once);
    }

    #[test]
    fn test_other_inputs_unchanged() {
        for raw in ["AAPL", "", "12345", "1234567", "00593A", "BRK-B", "005930.KS", "٠٠٥٩٣٠"] {
            assert_eq!(normalize_symbol(raw, KRX_SUFFIX), raw, "input {:?}", raw);
        }
    }

    #[test]
    fn test_custom_suffix() {
        assert_eq!(normalize_symbol("035720", ".KQ"), "035720.KQ");
    }
}
