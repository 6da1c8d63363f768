//! Format checks for user-supplied identifiers and credentials.
//!
//! These validate shape only; registry digit verification is the server's
//! responsibility.

/// Check that a string looks like an email address (local@domain.tld).
pub fn validate_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    match domain.rsplit_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

/// Password strength rule: at least 8 characters with an uppercase letter,
/// a lowercase letter, a digit, and a symbol.
pub fn validate_password(password: &str) -> bool {
    password.chars().count() >= 8
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric() || c == '_')
}

/// Validate that a string is a formatted CPF: ###.###.###-##
pub fn is_valid_cpf(cpf: &str) -> bool {
    if cpf.len() != 14 {
        return false;
    }
    cpf.chars().enumerate().all(|(i, c)| match i {
        3 | 7 => c == '.',
        11 => c == '-',
        _ => c.is_ascii_digit(),
    })
}

/// Validate that a string is a formatted CNPJ: ##.###.###/####-##
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    if cnpj.len() != 18 {
        return false;
    }
    cnpj.chars().enumerate().all(|(i, c)| match i {
        2 | 6 => c == '.',
        10 => c == '/',
        15 => c == '-',
        _ => c.is_ascii_digit(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email() {
        assert!(validate_email("ana@nebulohub.com"));
        assert!(validate_email("a.b+tag@sub.example.org"));

        assert!(!validate_email("")); // empty
        assert!(!validate_email("ana")); // no @
        assert!(!validate_email("ana@nebulohub")); // no dot in domain
        assert!(!validate_email("@nebulohub.com")); // empty local part
        assert!(!validate_email("ana@nebulohub .com")); // whitespace
        assert!(!validate_email("ana@@nebulohub.com")); // double @
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("Abcdef1!"));
        assert!(validate_password("S3nha_forte"));

        assert!(!validate_password("Ab1!")); // too short
        assert!(!validate_password("abcdef1!")); // no uppercase
        assert!(!validate_password("ABCDEF1!")); // no lowercase
        assert!(!validate_password("Abcdefg!")); // no digit
        assert!(!validate_password("Abcdefg1")); // no symbol
    }

    #[test]
    fn test_is_valid_cpf() {
        assert!(is_valid_cpf("111.111.111-11"));
        assert!(is_valid_cpf("123.456.789-09"));

        assert!(!is_valid_cpf(""));
        assert!(!is_valid_cpf("11111111111")); // digits only
        assert!(!is_valid_cpf("111.111.111-1")); // too short
        assert!(!is_valid_cpf("111-111-111.11")); // separators swapped
        assert!(!is_valid_cpf("111.111.111-1a")); // non-digit
    }

    #[test]
    fn test_is_valid_cnpj() {
        assert!(is_valid_cnpj("12.345.678/0001-90"));

        assert!(!is_valid_cnpj(""));
        assert!(!is_valid_cnpj("12345678000190")); // digits only
        assert!(!is_valid_cnpj("12.345.678-0001/90")); // separators swapped
        assert!(!is_valid_cnpj("12.345.678/0001-9")); // too short
    }
}
