//! Source generation for replacement icon components.
//!
//! Each virtual module is a self-contained Vue component that renders a
//! 1024x1024 SVG with the configured path as its only geometry. The fill is
//! `currentColor`, so the icon follows the surrounding text color the same
//! way the stock Element Plus icons do.

/// Module body served for virtual ids whose icon is not in the table.
pub const EMPTY_MODULE: &str = "export {}";

/// Escape single quotes so the path data can sit inside a `'...'` literal.
pub fn escape_single_quotes(path_data: &str) -> String {
    path_data.replace('\'', "\\'")
}

/// Generate the component module for one icon.
///
/// Output depends only on the inputs.
pub fn synthesize(icon_name: &str, path_data: &str) -> String {
    let d = escape_single_quotes(path_data);
    format!(
        "import {{ defineComponent, h }} from 'vue'

const {icon_name} = defineComponent({{
  name: '{icon_name}',
  render() {{
    return h('svg', {{
      xmlns: 'http://www.w3.org/2000/svg',
      viewBox: '0 0 1024 1024',
    }}, [
      h('path', {{ fill: 'currentColor', d: '{d}' }})
    ])
  }}
}})

export default {icon_name}
"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_synthesize_contains_path_data() {
        let source = synthesize("ArrowRight", "M512 1L0 0z");
        assert!(source.contains("d: 'M512 1L0 0z'"));
        assert!(source.contains("const ArrowRight = defineComponent({"));
        assert!(source.contains("name: 'ArrowRight',"));
        assert!(source.contains("viewBox: '0 0 1024 1024'"));
        assert!(source.contains("fill: 'currentColor'"));
        assert!(source.trim_end().ends_with("export default ArrowRight"));
    }

    #[test]
    fn test_synthesize_escapes_quotes() {
        let source = synthesize("Close", "M0 0'); alert(1); ('");
        assert!(source.contains(r"d: 'M0 0\'); alert(1); (\''"));

        // Every quote in the emitted path literal is escaped.
        let start = source.find("d: '").unwrap() + 4;
        let end = source[start..].find("' })").unwrap() + start;
        let literal = &source[start..end];
        let bytes = literal.as_bytes();
        for (i, b) in bytes.iter().enumerate() {
            if *b == b'\'' {
                assert_eq!(bytes[i - 1], b'\\', "unescaped quote in {literal}");
            }
        }
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        assert_eq!(synthesize("Plus", "M1 1"), synthesize("Plus", "M1 1"));
    }

    #[test]
    fn test_escape_leaves_other_characters() {
        assert_eq!(escape_single_quotes(r#"M1 "2" \3"#), r#"M1 "2" \3"#);
        assert_eq!(escape_single_quotes("a'b"), r"a\'b");
    }
}
