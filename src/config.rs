//! Startup configuration built from process arguments.

use eframe::egui;

use crate::engine::appearance::StylePreset;

/// Window setup and the optional initial style preset.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub title: String,
    pub inner_size: [f32; 2],
    pub position: [f32; 2],
    /// `None` follows the context's current theme.
    pub style: Option<StylePreset>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "egui Widgets Demo".to_string(),
            inner_size: [800.0, 600.0],
            position: [100.0, 100.0],
            style: None,
        }
    }
}

impl AppConfig {
    /// Picks up `-style <name>`, `--style <name>` and `--style=<name>`.
    /// Unknown style names are logged and ignored, as is every other argument.
    pub fn from_args<I>(args: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = Self::default();
        let mut args = args.into_iter().skip(1);

        while let Some(arg) = args.next() {
            let value = match arg.as_str() {
                "-style" | "--style" => args.next(),
                other => other
                    .strip_prefix("--style=")
                    .or_else(|| other.strip_prefix("-style="))
                    .map(str::to_owned),
            };
            let Some(value) = value else {
                continue;
            };
            match value.parse::<StylePreset>() {
                Ok(preset) => config.style = Some(preset),
                Err(e) => log::warn!("Ignoring style argument: {e}"),
            }
        }
        config
    }

    pub fn native_options(&self) -> eframe::NativeOptions {
        eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_title(self.title.clone())
                .with_inner_size(self.inner_size)
                .with_position(self.position),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        std::iter::once("widget_showcase")
            .chain(list.iter().copied())
            .map(str::to_owned)
            .collect()
    }

    #[test]
    fn defaults_without_arguments() {
        let config = AppConfig::from_args(args(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.inner_size, [800.0, 600.0]);
    }

    #[test]
    fn accepts_all_style_spellings() {
        assert_eq!(
            AppConfig::from_args(args(&["-style", "light"])).style,
            Some(StylePreset::Light)
        );
        assert_eq!(
            AppConfig::from_args(args(&["--style", "Dark"])).style,
            Some(StylePreset::Dark)
        );
        assert_eq!(
            AppConfig::from_args(args(&["--style=LIGHT"])).style,
            Some(StylePreset::Light)
        );
    }

    #[test]
    fn ignores_unknown_styles_and_other_arguments() {
        let config = AppConfig::from_args(args(&["--verbose", "-style", "fusion", "file.txt"]));
        assert_eq!(config.style, None);

        let config = AppConfig::from_args(args(&["--style=dark", "--style", "nope"]));
        assert_eq!(config.style, Some(StylePreset::Dark));

        assert_eq!(AppConfig::from_args(args(&["--style"])).style, None);
    }
}
