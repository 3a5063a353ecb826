use super::manifest::StyleManifest;
use std::fmt;

/// Display adapter producing the `tailwind.config.js` ES module for a manifest.
pub struct ConfigModule<'a>(pub &'a StyleManifest);

impl fmt::Display for ConfigModule<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let manifest = self.0;

        for plugin in &manifest.plugins {
            writeln!(
                f,
                "import {} from {};",
                plugin.binding(),
                js_string(plugin.package())
            )?;
        }
        if !manifest.plugins.is_empty() {
            writeln!(f)?;
        }

        writeln!(f, "/** @type {{import('tailwindcss').Config}} */")?;
        writeln!(f, "export default {{")?;
        writeln!(f, "  content: {},", js_array(&manifest.content))?;
        writeln!(f)?;

        writeln!(f, "  theme: {{")?;
        writeln!(f, "    extend: {{")?;
        writeln!(f, "      fontFamily: {{")?;
        for (token, stack) in &manifest.theme.extend.font_family {
            writeln!(f, "        {}: {},", js_key(token), js_array(stack))?;
        }
        writeln!(f, "      }},")?;
        writeln!(f, "    }},")?;
        writeln!(f, "  }},")?;
        writeln!(f)?;

        let bindings: Vec<&str> = manifest.plugins.iter().map(|p| p.binding()).collect();
        writeln!(f, "  plugins: [{}],", bindings.join(", "))?;
        writeln!(f, "}};")
    }
}

impl StyleManifest {
    pub fn render_config_js(&self) -> String {
        ConfigModule(self).to_string()
    }
}

/// Single-quoted JS string literal.
fn js_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('\'');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '\'' => out.push_str("\\'"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            _ => out.push(c),
        }
    }
    out.push('\'');
    out
}

fn js_array<S: AsRef<str>>(items: &[S]) -> String {
    let parts: Vec<String> = items.iter().map(|s| js_string(s.as_ref())).collect();
    format!("[{}]", parts.join(", "))
}

/// Bare identifier when possible, quoted otherwise (e.g. `'sans-alt'`).
fn js_key(key: &str) -> String {
    let mut chars = key.chars();
    let valid_start = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '$');
    if valid_start && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$') {
        key.to_string()
    } else {
        js_string(key)
    }
}
