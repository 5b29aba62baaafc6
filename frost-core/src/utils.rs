//! Shared utility functions for code generation.

/// Convert a string to PascalCase (e.g., "skin_thickness" or "skinThickness" -> "SkinThickness")
pub fn to_pascal_case(s: &str) -> String {
    s.split(['_', '-'])
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => c.to_uppercase().chain(chars).collect(),
            }
        })
        .collect()
}

/// Convert a string to camelCase (e.g., "SkinThickness" -> "skinThickness", "URLPath" -> "urlPath")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let chars: Vec<char> = pascal.chars().collect();
    let upper_run = chars.iter().take_while(|c| c.is_uppercase()).count();

    // Keep the last capital of an acronym when it starts the next word
    let lower_count = if upper_run > 1
        && chars
            .get(upper_run)
            .is_some_and(|next| next.is_lowercase())
    {
        upper_run - 1
    } else {
        upper_run
    };

    chars
        .iter()
        .enumerate()
        .flat_map(|(i, c)| {
            if i < lower_count {
                c.to_lowercase().collect::<Vec<_>>()
            } else {
                vec![*c]
            }
        })
        .collect()
}

/// Convert a string to snake_case (e.g., "SkinThickness" -> "skin_thickness", "HTTPServer" -> "http_server")
pub fn to_snake_case(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut result = String::with_capacity(s.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if c == '_' || c == '-' {
            if !result.ends_with('_') {
                result.push('_');
            }
            continue;
        }

        if c.is_uppercase() {
            let boundary = match i.checked_sub(1).map(|p| chars[p]) {
                Some(prev) if prev.is_lowercase() || prev.is_ascii_digit() => true,
                Some(prev) if prev.is_uppercase() => {
                    chars.get(i + 1).is_some_and(|next| next.is_lowercase())
                }
                _ => false,
            };
            if boundary && !result.is_empty() && !result.ends_with('_') {
                result.push('_');
            }
            result.extend(c.to_lowercase());
        } else {
            result.push(c);
        }
    }

    result
}

/// Check that a declared name is a plain identifier.
///
/// Returns `None` if valid, `Some(reason)` if invalid. Keywords are not
/// rejected here since whether a word is reserved depends on the target
/// language.
pub fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        None => return Some("name cannot be empty"),
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        Some(_) => return Some("name must start with a letter or underscore"),
    }

    if !chars.all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Some("name must contain only letters, numbers, and underscores");
    }

    if name.chars().all(|c| c == '_') {
        return Some("name cannot consist only of underscores");
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hello"), "Hello");
        assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
        assert_eq!(to_pascal_case("skinThickness"), "SkinThickness");
        assert_eq!(to_pascal_case("with_skinThickness"), "WithSkinThickness");
        assert_eq!(to_pascal_case("to-builder"), "ToBuilder");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("SkinThickness"), "skinThickness");
        assert_eq!(to_camel_case("skin_thickness"), "skinThickness");
        assert_eq!(to_camel_case("color"), "color");
        assert_eq!(to_camel_case("URLPath"), "urlPath");
        assert_eq!(to_camel_case("URL"), "url");
        assert_eq!(to_camel_case("HTTP2"), "http2");
        assert_eq!(to_camel_case(""), "");
    }

    #[test]
    fn test_to_snake_case() {
        assert_eq!(to_snake_case("Hello"), "hello");
        assert_eq!(to_snake_case("HelloWorld"), "hello_world");
        assert_eq!(to_snake_case("skinThickness"), "skin_thickness");
        assert_eq!(to_snake_case("with_skinThickness"), "with_skin_thickness");
        assert_eq!(to_snake_case("HTTPServer"), "http_server");
        assert_eq!(to_snake_case("NoFields"), "no_fields");
        assert_eq!(to_snake_case("version2Name"), "version2_name");
        assert_eq!(to_snake_case("hello-world"), "hello_world");
        assert_eq!(to_snake_case("_private"), "_private");
        assert_eq!(to_snake_case(""), "");
    }

    #[test]
    fn test_valid_identifiers() {
        assert!(validate_identifier("color").is_none());
        assert!(validate_identifier("skinThickness").is_none());
        assert!(validate_identifier("skin_thickness").is_none());
        assert!(validate_identifier("_private").is_none());
        assert!(validate_identifier("field2").is_none());
    }

    #[test]
    fn test_invalid_identifiers() {
        assert!(validate_identifier("").is_some());
        assert!(validate_identifier("2fast").is_some());
        assert!(validate_identifier("skin-thickness").is_some());
        assert!(validate_identifier("has space").is_some());
        assert!(validate_identifier("dot.ted").is_some());
        assert!(validate_identifier("_").is_some());
        assert!(validate_identifier("__").is_some());
    }
}
