//! # 문자열 유틸리티
//!
//! 입력 검증과 로그 출력에 쓰이는 문자열 함수들입니다.

/// 비어 있지 않고 모든 문자가 ASCII 숫자인지 확인합니다.
///
/// # Examples
///
/// ```rust,ignore
/// assert!(is_ascii_digits("13800138000"));
/// assert!(!is_ascii_digits("138-0013"));
/// assert!(!is_ascii_digits(""));
/// ```
pub fn is_ascii_digits(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// 로그에 남길 식별자를 마스킹합니다.
///
/// 앞 2자와 뒤 2자만 남기고 나머지는 `*`로 바꿉니다. 4자 이하는 전부 가립니다.
/// 문자 단위로 처리하므로 한글/한자 식별자도 안전합니다.
pub fn mask_identifier(value: &str) -> String {
    let chars: Vec<char> = value.chars().collect();
    let len = chars.len();

    if len <= 4 {
        return "*".repeat(len);
    }

    let mut masked = String::with_capacity(value.len());
    masked.extend(&chars[..2]);
    masked.push_str(&"*".repeat(len - 4));
    masked.extend(&chars[len - 2..]);
    masked
}
