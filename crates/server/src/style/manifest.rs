use crate::error::ManifestError;
use serde::{Deserialize, Serialize};
use indexmap::IndexMap;
use std::collections::HashSet;
use std::path::Path;
use std::str::FromStr;

/// Output of the `style-config` tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `tailwind.config.js` ES module
    #[default]
    Js,
    /// Plain JSON
    Json,
}

/// Plugins that extend the utility generator, in the order they are applied.
///
/// Serialised as the npm package name; the short binding names are accepted on input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum StylePlugin {
    Typography,
    Forms,
    ContainerQueries,
}

impl Serialize for StylePlugin {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.package())
    }
}

impl FromStr for StylePlugin {
    type Err = ManifestError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        [
            StylePlugin::Typography,
            StylePlugin::Forms,
            StylePlugin::ContainerQueries,
        ]
        .into_iter()
        .find(|p| {
            let short = p.package().trim_start_matches("@tailwindcss/");
            s == p.package() || s == p.binding() || s == short
        })
        .ok_or_else(|| ManifestError::UnknownPlugin(s.to_string()))
    }
}

impl TryFrom<String> for StylePlugin {
    type Error = ManifestError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl StylePlugin {
    /// npm package the plugin is imported from.
    pub fn package(self) -> &'static str {
        match self {
            StylePlugin::Typography => "@tailwindcss/typography",
            StylePlugin::Forms => "@tailwindcss/forms",
            StylePlugin::ContainerQueries => "@tailwindcss/container-queries",
        }
    }

    /// Identifier the default export is bound to in the config module.
    pub fn binding(self) -> &'static str {
        match self {
            StylePlugin::Typography => "typography",
            StylePlugin::Forms => "forms",
            StylePlugin::ContainerQueries => "containerQueries",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeExtension {
    /// Token name -> CSS font-family stack, in declaration order. Multi-word families
    /// keep their quotes.
    #[serde(
        rename = "fontFamily",
        alias = "fontfamily",
        alias = "font_family",
        default
    )]
    pub font_family: IndexMap<String, Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    #[serde(default)]
    pub extend: ThemeExtension,
}

/// Declarative input for the CSS build: what to scan, which tokens exist, which plugins run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleManifest {
    /// Globs of source files scanned for class usage.
    pub content: Vec<String>,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default)]
    pub plugins: Vec<StylePlugin>,
}

impl Default for StyleManifest {
    fn default() -> Self {
        let fonts: [(&str, &[&str]); 5] = [
            ("merriweather", &["Merriweather", "serif"]),
            ("courier", &["\"Courier New\"", "monospace"]),
            ("impact", &["Impact", "sans-serif"]),
            ("amatic", &["\"Amatic SC\"", "cursive"]),
            ("georgia", &["Georgia", "serif"]),
        ];
        let font_family = fonts
            .iter()
            .map(|(token, stack)| {
                (
                    token.to_string(),
                    stack.iter().map(|f| f.to_string()).collect(),
                )
            })
            .collect();

        Self {
            content: vec!["./src/**/*.{html,js,svelte,ts}".to_string()],
            theme: Theme {
                extend: ThemeExtension { font_family },
            },
            plugins: vec![
                StylePlugin::Typography,
                StylePlugin::Forms,
                StylePlugin::ContainerQueries,
            ],
        }
    }
}

impl StyleManifest {
    /// Read a manifest from a YAML, JSON or TOML file (picked by extension) and validate it.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ManifestError> {
        use config::{Config, File};
        let manifest = Config::builder()
            .add_source(File::from(path.as_ref()))
            .build()
            .and_then(|cfg| cfg.try_deserialize::<StyleManifest>())
            .map_err(|e| ManifestError::Load(e.to_string()))?;
        manifest.validate()?;
        Ok(manifest)
    }

    pub fn validate(&self) -> Result<(), ManifestError> {
        if self.content.is_empty() {
            return Err(ManifestError::NoContent);
        }
        if let Some(idx) = self.content.iter().position(|g| g.trim().is_empty()) {
            return Err(ManifestError::BlankGlob(idx));
        }
        for (token, stack) in &self.theme.extend.font_family {
            if token.trim().is_empty() {
                return Err(ManifestError::BlankFontToken);
            }
            if stack.iter().all(|f| f.trim().is_empty()) {
                return Err(ManifestError::EmptyFontStack(token.clone()));
            }
        }
        let mut seen = HashSet::new();
        for plugin in &self.plugins {
            if !seen.insert(*plugin) {
                return Err(ManifestError::DuplicatePlugin(plugin.package()));
            }
        }
        Ok(())
    }

    pub fn font_stack(&self, token: &str) -> Option<&[String]> {
        self.theme
            .extend
            .font_family
            .get(token)
            .map(Vec::as_slice)
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }

    /// Render in the requested output format. JSON output ends with a newline.
    pub fn render(&self, format: OutputFormat) -> Result<String, serde_json::Error> {
        match format {
            OutputFormat::Js => Ok(self.render_config_js()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)? + "\n"),
        }
    }
}
