//! Virtual module identifiers: `virtual:ep-icons-replace/<IconName>`.

use crate::config::VIRTUAL_PREFIX;

/// Build the virtual id for an icon.
pub fn virtual_id(icon_name: &str) -> String {
    format!("{VIRTUAL_PREFIX}{icon_name}")
}

pub fn is_virtual(id: &str) -> bool {
    id.starts_with(VIRTUAL_PREFIX)
}

/// Icon name carried by a virtual id: its last path segment.
///
/// Returns `None` for ids outside the virtual namespace.
pub fn icon_name(id: &str) -> Option<&str> {
    let rest = id.strip_prefix(VIRTUAL_PREFIX)?;
    Some(rest.rsplit('/').next().unwrap_or(rest))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_virtual_id() {
        assert_eq!(virtual_id("Close"), "virtual:ep-icons-replace/Close");
        assert!(is_virtual(&virtual_id("Close")));
    }

    #[test]
    fn test_is_virtual() {
        assert!(!is_virtual("@element-plus/icons-vue"));
        assert!(!is_virtual("/src/virtual:ep-icons-replace/Close"));
        assert!(!is_virtual("virtual:other/Close"));
    }

    #[test]
    fn test_icon_name() {
        assert_eq!(icon_name("virtual:ep-icons-replace/Close"), Some("Close"));
        assert_eq!(icon_name("virtual:ep-icons-replace/nested/Plus"), Some("Plus"));
        assert_eq!(icon_name("virtual:ep-icons-replace/"), Some(""));
        assert_eq!(icon_name("src/main.ts"), None);
    }
}
